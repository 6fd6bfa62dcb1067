use crate::modules::courses::course::Course;
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub course: Arc<Mutex<Course>>,
}

impl AppState {
    pub fn new(course: Course) -> Self {
        Self {
            course: Arc::new(Mutex::new(course)),
        }
    }
}
