use tracing::{debug, info};

use crate::modules::courses::core::{
    decision::Decision, events::CourseEvent, evolve::evolve, state::CourseState,
};
use crate::modules::courses::use_cases::enroll_student::{
    command::EnrollStudent, decide::decide_enroll,
};
use crate::modules::courses::use_cases::unenroll_student::{
    command::UnenrollStudent, decide::decide_unenroll,
};
use crate::shared::core::primitives::{Capacity, CapacityError, StudentId};

/// A course with a fixed number of seats and a FIFO waiting list.
///
/// Enrolling into a full course puts the student on the waiting list. When an
/// enrolled student leaves, the longest-waiting student takes the seat.
/// Duplicate enrollments and unenrolling unknown students change nothing.
///
/// Each operation runs decide and evolve to completion. Callers sharing a
/// `Course` across tasks must hold one lock around the whole call.
#[derive(Debug, Clone)]
pub struct Course {
    state: CourseState,
}

impl Course {
    pub fn new(capacity: Capacity) -> Self {
        Self {
            state: CourseState::new(capacity),
        }
    }

    pub fn with_capacity(capacity: i64) -> Result<Self, CapacityError> {
        Capacity::new(capacity).map(Self::new)
    }

    pub fn capacity(&self) -> usize {
        self.state.capacity.get()
    }

    /// Returns the events that were applied; empty when the student was already registered.
    pub fn enroll(&mut self, student_id: impl Into<StudentId>) -> Vec<CourseEvent> {
        let decision = decide_enroll(&self.state, EnrollStudent::new(student_id));
        self.apply(decision)
    }

    /// Returns the events that were applied; empty when the student was unknown.
    pub fn unenroll(&mut self, student_id: impl Into<StudentId>) -> Vec<CourseEvent> {
        let decision = decide_unenroll(&self.state, UnenrollStudent::new(student_id));
        self.apply(decision)
    }

    pub fn enrollment_list(&self) -> Vec<StudentId> {
        self.state.enrollment_list.clone()
    }

    pub fn waiting_list(&self) -> Vec<StudentId> {
        self.state.waiting_list.clone()
    }

    pub fn is_fully_enrolled(&self) -> bool {
        self.state.is_fully_enrolled()
    }

    pub fn has_waiting_list(&self) -> bool {
        self.state.has_waiting_list()
    }

    pub fn state(&self) -> &CourseState {
        &self.state
    }

    fn apply(&mut self, decision: Decision) -> Vec<CourseEvent> {
        match decision {
            Decision::Accepted { events } => {
                let blank = CourseState::new(self.state.capacity);
                let state = std::mem::replace(&mut self.state, blank);
                self.state = events.iter().cloned().fold(state, |state, event| {
                    log_event(&event);
                    evolve(state, event)
                });
                events
            }
            Decision::Unchanged { reason } => {
                debug!(?reason, "course unchanged");
                Vec::new()
            }
        }
    }
}

fn log_event(event: &CourseEvent) {
    let student_id = event.student_id().0;
    match event {
        CourseEvent::StudentPromoted { .. } => {
            info!(student_id, "student promoted from the waiting list")
        }
        _ => debug!(student_id, ?event, "applying course event"),
    }
}

#[cfg(test)]
mod course_tests {
    use super::*;
    use crate::tests::fixtures::courses::{
        MAX_STUDENTS, WAITING_LIST_SIZE, make_course, make_full_course,
    };
    use rstest::rstest;

    fn ids(values: &[i64]) -> Vec<StudentId> {
        values.iter().copied().map(StudentId).collect()
    }

    #[rstest]
    fn it_should_keep_a_positive_capacity() {
        let course = make_course();
        assert_eq!(course.capacity(), MAX_STUDENTS as usize);
    }

    #[rstest]
    #[case(0)]
    #[case(-5)]
    fn it_should_reject_a_non_positive_capacity(#[case] capacity: i64) {
        assert_eq!(
            Course::with_capacity(capacity).unwrap_err(),
            CapacityError::NotPositive(capacity)
        );
    }

    #[rstest]
    fn it_should_start_empty() {
        let course = make_course();
        assert!(course.enrollment_list().is_empty());
        assert!(course.waiting_list().is_empty());
        assert!(!course.is_fully_enrolled());
        assert!(!course.has_waiting_list());
    }

    #[rstest]
    fn it_should_list_a_fully_enrolled_course(#[values(1, 20, 347)] id: i64) {
        let course = make_full_course(id, true, false);
        assert_eq!(course.enrollment_list().len(), MAX_STUDENTS as usize);
        assert!(course.enrollment_list().contains(&StudentId(id)));
        assert!(course.is_fully_enrolled());
        assert!(!course.has_waiting_list());
    }

    #[rstest]
    fn it_should_enroll_into_a_partially_filled_course(#[values(1, 20, 347)] id: i64) {
        let mut course = make_course();
        let events = course.enroll(id);
        assert_eq!(
            events,
            vec![CourseEvent::StudentEnrolled {
                student_id: StudentId(id)
            }]
        );
        assert_eq!(course.enrollment_list(), ids(&[id]));
        assert!(course.waiting_list().is_empty());
        assert!(!course.is_fully_enrolled());
        assert!(!course.has_waiting_list());
    }

    #[rstest]
    fn it_should_fill_the_waiting_list_in_arrival_order(#[values(1, 20, 347)] id: i64) {
        let course = make_full_course(id, false, true);
        let expected: Vec<i64> = (1..=WAITING_LIST_SIZE).map(|i| id + MAX_STUDENTS + i).collect();
        assert_eq!(course.waiting_list(), ids(&expected));
        assert!(course.has_waiting_list());
    }

    #[rstest]
    fn it_should_ignore_a_duplicate_enrollment(
        #[values(1, 20, 347)] id: i64,
        #[values(false, true)] full: bool,
    ) {
        let mut course = if full {
            make_full_course(id, true, false)
        } else {
            let mut course = make_course();
            course.enroll(id);
            course
        };
        let before = course.state().clone();
        assert!(course.enroll(id).is_empty());
        assert_eq!(course.state(), &before);
        assert!(!course.has_waiting_list());
    }

    #[rstest]
    fn it_should_ignore_a_duplicate_enrollment_from_the_waiting_list(
        #[values(1, 20, 347)] id: i64,
    ) {
        let mut course = make_full_course(id, false, false);
        course.enroll(id);
        let before = course.state().clone();
        assert!(course.enroll(id).is_empty());
        assert_eq!(course.state(), &before);
    }

    #[rstest]
    fn it_should_waitlist_a_new_student_on_a_full_course(#[values(1, 20, 347)] id: i64) {
        let mut course = make_full_course(id, false, false);
        assert!(course.is_fully_enrolled());
        course.enroll(id);
        assert!(course.has_waiting_list());
        assert_eq!(course.waiting_list(), ids(&[id]));
        assert!(!course.enrollment_list().contains(&StudentId(id)));
    }

    #[rstest]
    fn it_should_unenroll_from_a_partially_filled_course(#[values(1, 20, 347)] id: i64) {
        let mut course = make_course();
        course.enroll(id);
        course.unenroll(id);
        assert!(course.enrollment_list().is_empty());
    }

    #[rstest]
    fn it_should_ignore_unenrolling_an_unknown_student(
        #[values(1, 20, 347)] id: i64,
        #[values(false, true)] with_waiting_list: bool,
    ) {
        let mut course = make_full_course(id, false, with_waiting_list);
        let before = course.state().clone();
        assert!(course.unenroll(id).is_empty());
        assert_eq!(course.state(), &before);
    }

    #[rstest]
    fn it_should_promote_the_longest_waiting_student(#[values(1, 20, 347)] id: i64) {
        let mut course = make_full_course(id, false, false);
        course.enroll(id);
        let first_enrolled = course.enrollment_list()[0];
        course.unenroll(first_enrolled);
        assert!(course.enrollment_list().contains(&StudentId(id)));
        assert!(!course.waiting_list().contains(&StudentId(id)));
        assert_eq!(course.enrollment_list().last(), Some(&StudentId(id)));
    }

    #[rstest]
    fn it_should_promote_exactly_one_student_per_freed_seat(#[values(1, 20, 347)] id: i64) {
        let mut course = make_full_course(id, true, true);
        let waiting = course.waiting_list();
        let events = course.unenroll(id);
        assert_eq!(
            events,
            vec![
                CourseEvent::StudentUnenrolled {
                    student_id: StudentId(id)
                },
                CourseEvent::StudentPromoted {
                    student_id: waiting[0]
                },
            ]
        );
        assert!(!course.enrollment_list().contains(&StudentId(id)));
        assert!(course.enrollment_list().contains(&waiting[0]));
        assert_eq!(course.waiting_list(), waiting[1..].to_vec());
        assert!(course.is_fully_enrolled());
    }

    #[rstest]
    fn it_should_leave_the_enrollment_list_alone_when_a_waiting_student_leaves(
        #[values(1, 20, 347)] id: i64,
    ) {
        let mut course = make_full_course(id, false, true);
        course.enroll(id);
        let enrolled = course.enrollment_list();
        course.unenroll(id);
        assert!(!course.waiting_list().contains(&StudentId(id)));
        assert_eq!(course.waiting_list().len(), WAITING_LIST_SIZE as usize);
        assert_eq!(course.enrollment_list(), enrolled);
    }

    #[rstest]
    fn it_should_hand_out_snapshots_that_later_changes_do_not_touch() {
        let mut course = Course::with_capacity(1).unwrap();
        course.enroll(1);
        course.enroll(2);
        let enrolled = course.enrollment_list();
        let waiting = course.waiting_list();
        course.unenroll(1);
        assert_eq!(enrolled, ids(&[1]));
        assert_eq!(waiting, ids(&[2]));
        assert_eq!(course.enrollment_list(), ids(&[2]));
    }
}
