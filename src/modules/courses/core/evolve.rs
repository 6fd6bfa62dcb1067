use crate::modules::courses::core::events::CourseEvent;
use crate::modules::courses::core::state::CourseState;

/// Applies one event. Events that do not fit the current state leave it untouched.
pub fn evolve(mut state: CourseState, event: CourseEvent) -> CourseState {
    match event {
        CourseEvent::StudentEnrolled { student_id }
            if !state.is_fully_enrolled()
                && !state.is_enrolled(student_id)
                && !state.is_waiting(student_id) =>
        {
            state.enrollment_list.push(student_id);
        }
        CourseEvent::StudentWaitlisted { student_id }
            if !state.is_enrolled(student_id) && !state.is_waiting(student_id) =>
        {
            state.waiting_list.push(student_id);
        }
        CourseEvent::StudentUnenrolled { student_id } => {
            state.enrollment_list.retain(|id| *id != student_id);
        }
        CourseEvent::StudentLeftWaitingList { student_id } => {
            state.waiting_list.retain(|id| *id != student_id);
        }
        CourseEvent::StudentPromoted { student_id } if !state.is_fully_enrolled() => {
            if let Some(position) = state.waiting_list.iter().position(|id| *id == student_id) {
                let promoted = state.waiting_list.remove(position);
                state.enrollment_list.push(promoted);
            }
        }
        _ => {}
    }
    state
}
