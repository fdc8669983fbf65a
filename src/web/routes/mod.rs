//! Contains all the routes that this application can handle.

mod activities;

use axum::{
    http::StatusCode,
    response::Redirect,
    routing::{get, post},
    Router,
};
use tower_http::services::ServeDir;

use crate::AppState;

async fn health_check() -> StatusCode {
    StatusCode::OK
}

async fn root() -> Redirect {
    Redirect::temporary("/static/index.html")
}

/// All the routes of the server
pub fn routes(app_state: AppState) -> Router {
    let static_files = ServeDir::new(&app_state.static_dir);

    Router::new()
        .route("/", get(root))
        .route("/health-check", get(health_check))
        .nest("/activities", activity_routes(app_state))
        .nest_service("/static", static_files)
}

/// ACTIVITIES - Routes nested under "/activities" path
fn activity_routes(app_state: AppState) -> Router {
    Router::new()
        .route("/", get(activities::list_activities))
        .route("/{activity_name}/signup", post(activities::signup))
        .route("/{activity_name}/unregister", post(activities::unregister))
        .with_state(app_state)
}
