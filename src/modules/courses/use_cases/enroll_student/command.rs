use crate::shared::core::primitives::StudentId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnrollStudent {
    pub student_id: StudentId,
}

impl EnrollStudent {
    pub fn new(student_id: impl Into<StudentId>) -> Self {
        Self {
            student_id: student_id.into(),
        }
    }
}
