use axum::{Json, extract::State, response::IntoResponse};

use crate::modules::courses::use_cases::view_course::projection::CourseView;
use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>) -> impl IntoResponse {
    let course = state.course.lock().await;
    Json(CourseView::from(&*course))
}
