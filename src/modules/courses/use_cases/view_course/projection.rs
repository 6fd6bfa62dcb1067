use serde::{Deserialize, Serialize};

use crate::modules::courses::course::Course;
use crate::shared::core::primitives::StudentId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseView {
    pub capacity: usize,
    pub enrollment_list: Vec<StudentId>,
    pub waiting_list: Vec<StudentId>,
    pub is_fully_enrolled: bool,
    pub has_waiting_list: bool,
}

impl From<&Course> for CourseView {
    fn from(course: &Course) -> Self {
        Self {
            capacity: course.capacity(),
            enrollment_list: course.enrollment_list(),
            waiting_list: course.waiting_list(),
            is_fully_enrolled: course.is_fully_enrolled(),
            has_waiting_list: course.has_waiting_list(),
        }
    }
}
