use crate::modules::courses::course::Course;

pub const MAX_STUDENTS: i64 = 10;
pub const WAITING_LIST_SIZE: i64 = 5;

pub fn make_course() -> Course {
    Course::with_capacity(MAX_STUDENTS).expect("fixture capacity is positive")
}

/// Fills every seat with `id + 1 .. id + MAX_STUDENTS - 1` plus either `id` itself
/// or `id + MAX_STUDENTS`, then optionally queues `id + MAX_STUDENTS + 1 ..= id + MAX_STUDENTS + WAITING_LIST_SIZE`.
pub fn make_full_course(id: i64, include_id: bool, with_waiting_list: bool) -> Course {
    let mut course = make_course();
    for i in 1..MAX_STUDENTS {
        course.enroll(id + i);
    }
    course.enroll(if include_id { id } else { id + MAX_STUDENTS });
    if with_waiting_list {
        for i in 1..=WAITING_LIST_SIZE {
            course.enroll(id + MAX_STUDENTS + i);
        }
    }
    course
}
