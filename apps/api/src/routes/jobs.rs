//! HTTP marshalling for the query service. Handlers only translate between
//! JSON and the façade; no search, store or prompt logic lives here.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::{JobRecord, Profile};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
}

/// GET /api/jobs?q=
pub async fn handle_list_jobs(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Vec<JobRecord>>, AppError> {
    let jobs = state.service.list_jobs(params.q.as_deref()).await?;
    Ok(Json(jobs))
}

/// GET /api/jobs/:req_id
pub async fn handle_get_job(
    State(state): State<AppState>,
    Path(req_id): Path<String>,
) -> Result<Json<JobRecord>, AppError> {
    let job = state.service.get_job(&req_id).await?;
    Ok(Json(job))
}

/// GET /api/stats
pub async fn handle_stats(
    State(state): State<AppState>,
) -> Result<Json<crate::service::Stats>, AppError> {
    let stats = state.service.stats().await?;
    Ok(Json(stats))
}

#[derive(Deserialize)]
pub struct GeneratePromptRequest {
    pub job_id: Option<String>,
    pub profile: Profile,
}

#[derive(Serialize)]
pub struct GeneratePromptResponse {
    pub prompt: String,
    pub job_id: Option<String>,
}

/// POST /api/generate-prompt
pub async fn handle_generate_prompt(
    State(state): State<AppState>,
    Json(req): Json<GeneratePromptRequest>,
) -> Result<Json<GeneratePromptResponse>, AppError> {
    if req.profile.name.trim().is_empty() {
        return Err(AppError::Validation(
            "profile.name must not be empty".to_string(),
        ));
    }
    let prompt = state
        .service
        .generate_prompt(req.job_id.as_deref(), &req.profile)
        .await?;
    Ok(Json(GeneratePromptResponse {
        prompt,
        job_id: req.job_id,
    }))
}
