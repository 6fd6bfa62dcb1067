use crate::shared::core::primitives::StudentId;

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
#[serde(tag = "type")]
pub enum CourseEvent {
    StudentEnrolled { student_id: StudentId },
    StudentWaitlisted { student_id: StudentId },
    StudentUnenrolled { student_id: StudentId },
    StudentLeftWaitingList { student_id: StudentId },
    /// The head of the waiting list took a freed seat.
    StudentPromoted { student_id: StudentId },
}

impl CourseEvent {
    pub fn student_id(&self) -> StudentId {
        match self {
            CourseEvent::StudentEnrolled { student_id }
            | CourseEvent::StudentWaitlisted { student_id }
            | CourseEvent::StudentUnenrolled { student_id }
            | CourseEvent::StudentLeftWaitingList { student_id }
            | CourseEvent::StudentPromoted { student_id } => *student_id,
        }
    }
}
