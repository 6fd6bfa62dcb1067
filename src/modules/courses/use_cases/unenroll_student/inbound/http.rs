use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;

use crate::modules::courses::use_cases::view_course::projection::CourseView;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct UnenrollStudentBody {
    pub student_id: i64,
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<UnenrollStudentBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    let mut course = state.course.lock().await;
    course.unenroll(body.student_id);
    (StatusCode::OK, Json(CourseView::from(&*course))).into_response()
}
