use crate::modules::courses::core::events::CourseEvent;

/// Why a command left the course as it was. Not an error: these cases are absorbed silently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoOpReason {
    AlreadyEnrolled,
    AlreadyWaiting,
    NotRegistered,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    Accepted { events: Vec<CourseEvent> },
    Unchanged { reason: NoOpReason },
}
