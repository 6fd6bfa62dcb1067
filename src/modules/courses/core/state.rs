use crate::shared::core::primitives::{Capacity, StudentId};

/// Enrollment list and waiting list of a single course, both in arrival order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseState {
    pub capacity: Capacity,
    pub enrollment_list: Vec<StudentId>,
    pub waiting_list: Vec<StudentId>,
}

impl CourseState {
    pub fn new(capacity: Capacity) -> Self {
        Self {
            capacity,
            enrollment_list: Vec::new(),
            waiting_list: Vec::new(),
        }
    }

    pub fn is_enrolled(&self, student_id: StudentId) -> bool {
        self.enrollment_list.contains(&student_id)
    }

    pub fn is_waiting(&self, student_id: StudentId) -> bool {
        self.waiting_list.contains(&student_id)
    }

    pub fn is_fully_enrolled(&self) -> bool {
        self.enrollment_list.len() >= self.capacity.get()
    }

    pub fn has_waiting_list(&self) -> bool {
        !self.waiting_list.is_empty()
    }
}
