use crate::modules::courses::core::{
    decision::{Decision, NoOpReason},
    events::CourseEvent,
    state::CourseState,
};
use crate::modules::courses::use_cases::unenroll_student::command::UnenrollStudent;

/// Leaving the enrollment list frees exactly one seat, so at most one waiting student is promoted.
pub fn decide_unenroll(state: &CourseState, command: UnenrollStudent) -> Decision {
    let student_id = command.student_id;
    if state.is_waiting(student_id) {
        return Decision::Accepted {
            events: vec![CourseEvent::StudentLeftWaitingList { student_id }],
        };
    }
    if !state.is_enrolled(student_id) {
        return Decision::Unchanged {
            reason: NoOpReason::NotRegistered,
        };
    }
    let mut events = vec![CourseEvent::StudentUnenrolled { student_id }];
    if let Some(&next) = state.waiting_list.first() {
        events.push(CourseEvent::StudentPromoted { student_id: next });
    }
    Decision::Accepted { events }
}
