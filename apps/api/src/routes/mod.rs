pub mod health;
pub mod jobs;

use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/jobs", get(jobs::handle_list_jobs))
        .route("/api/jobs/:req_id", get(jobs::handle_get_job))
        .route("/api/stats", get(jobs::handle_stats))
        .route("/api/generate-prompt", post(jobs::handle_generate_prompt))
        .with_state(state)
}
