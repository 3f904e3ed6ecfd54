//! Optimizer endpoints. Blank-input validation lives here, in the shell,
//! not in the optimizer itself.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::optimizer::suggest::OptimizationPatch;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct OptimizeRequest {
    pub job_description: String,
}

/// Subset of the patch the shell merges back into the store. Skills,
/// technologies, and bullet points are display-only and never auto-merged.
#[derive(Debug, Deserialize)]
pub struct ApplyRequest {
    pub professional_summary: Option<String>,
    #[serde(default)]
    pub keywords: Vec<String>,
}

/// POST /api/v1/sessions/:sid/optimize
///
/// Dropping the request (client dismissed the dialog) abandons the in-flight
/// work and discards its result; there is no cancellation token.
pub async fn handle_optimize(
    State(state): State<AppState>,
    Path(sid): Path<Uuid>,
    Json(request): Json<OptimizeRequest>,
) -> Result<Json<OptimizationPatch>, AppError> {
    if request.job_description.trim().is_empty() {
        return Err(AppError::Validation(
            "Job description must not be empty".to_string(),
        ));
    }

    let store = state.sessions.get(sid).await?;
    let snapshot = store.lock().await.snapshot();

    let patch = state
        .optimizer
        .optimize(&snapshot, &request.job_description)
        .await?;

    info!(
        "Optimized session {sid}: {} keywords, {} skill and {} technology suggestions",
        patch.keywords.len(),
        patch.skills.len(),
        patch.technologies.len()
    );
    Ok(Json(patch))
}

/// POST /api/v1/sessions/:sid/optimize/apply
pub async fn handle_optimize_apply(
    State(state): State<AppState>,
    Path(sid): Path<Uuid>,
    Json(request): Json<ApplyRequest>,
) -> Result<StatusCode, AppError> {
    let store = state.sessions.get(sid).await?;
    let mut store = store.lock().await;

    let content = match request.professional_summary {
        Some(summary) => summary,
        None => store.data().professional_summary.content.clone(),
    };
    store.update_professional_summary(content, request.keywords);

    info!("Applied optimization to session {sid}");
    Ok(StatusCode::NO_CONTENT)
}
