use crate::modules::courses::core::{
    decision::{Decision, NoOpReason},
    events::CourseEvent,
    state::CourseState,
};
use crate::modules::courses::use_cases::enroll_student::command::EnrollStudent;

pub fn decide_enroll(state: &CourseState, command: EnrollStudent) -> Decision {
    let student_id = command.student_id;
    if state.is_enrolled(student_id) {
        return Decision::Unchanged {
            reason: NoOpReason::AlreadyEnrolled,
        };
    }
    if state.is_waiting(student_id) {
        return Decision::Unchanged {
            reason: NoOpReason::AlreadyWaiting,
        };
    }
    let event = if state.is_fully_enrolled() {
        CourseEvent::StudentWaitlisted { student_id }
    } else {
        CourseEvent::StudentEnrolled { student_id }
    };
    Decision::Accepted {
        events: vec![event],
    }
}
