use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::modules::courses::use_cases::enroll_student::inbound::http as enroll_http;
use crate::modules::courses::use_cases::unenroll_student::inbound::http as unenroll_http;
use crate::modules::courses::use_cases::view_course::inbound::http as view_http;
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/enroll-student", post(enroll_http::handle))
        .route("/unenroll-student", post(unenroll_http::handle))
        .route("/course", get(view_http::handle))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
