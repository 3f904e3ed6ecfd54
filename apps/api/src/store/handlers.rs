//! HTTP surface of the store: session lifecycle, snapshot/long-poll reads,
//! singleton setters, and one generic CRUD trio serving all twelve
//! collections through the `CollectionEntity` seam.

use std::time::Duration;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use tokio::sync::watch;
use tracing::{debug, info};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::collection::{Collection, CollectionEntity};
use crate::models::resume::{PersonalInfo, ResumeData};
use crate::state::AppState;

/// How long a changes long-poll parks before answering with the current
/// revision anyway.
const LONG_POLL_WINDOW: Duration = Duration::from_secs(25);

#[derive(Debug, Serialize)]
pub struct SessionCreated {
    pub session_id: Uuid,
}

#[derive(Debug, Serialize)]
pub struct ResumeSnapshot {
    pub revision: u64,
    pub resume: ResumeData,
}

#[derive(Debug, Serialize)]
pub struct EntryCreated {
    pub id: Uuid,
}

#[derive(Debug, Deserialize)]
pub struct ChangesQuery {
    #[serde(default)]
    pub since: u64,
}

#[derive(Debug, Serialize)]
pub struct RevisionResponse {
    pub revision: u64,
}

#[derive(Debug, Deserialize)]
pub struct SummaryUpdate {
    pub content: String,
    #[serde(default)]
    pub keywords: Vec<String>,
}

/// POST /api/v1/sessions
pub async fn handle_create_session(
    State(state): State<AppState>,
) -> (StatusCode, Json<SessionCreated>) {
    let session_id = state.sessions.create().await;
    info!("Created session {session_id}");
    (StatusCode::CREATED, Json(SessionCreated { session_id }))
}

/// DELETE /api/v1/sessions/:sid
pub async fn handle_delete_session(
    State(state): State<AppState>,
    Path(sid): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    if !state.sessions.remove(sid).await {
        return Err(AppError::NotFound(format!("Session {sid} not found")));
    }
    info!("Discarded session {sid}");
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/sessions/:sid/resume
pub async fn handle_get_resume(
    State(state): State<AppState>,
    Path(sid): Path<Uuid>,
) -> Result<Json<ResumeSnapshot>, AppError> {
    let store = state.sessions.get(sid).await?;
    let store = store.lock().await;
    Ok(Json(ResumeSnapshot {
        revision: store.revision(),
        resume: store.snapshot(),
    }))
}

/// GET /api/v1/sessions/:sid/resume/changes?since=N
///
/// Parks until a mutation pushes the revision past `since`, or answers with
/// the current revision once the poll window elapses.
pub async fn handle_wait_changes(
    State(state): State<AppState>,
    Path(sid): Path<Uuid>,
    Query(query): Query<ChangesQuery>,
) -> Result<Json<RevisionResponse>, AppError> {
    let store = state.sessions.get(sid).await?;
    let (current, mut rx) = {
        let store = store.lock().await;
        (store.revision(), store.subscribe())
    };

    if current > query.since {
        return Ok(Json(RevisionResponse { revision: current }));
    }

    let revision = match tokio::time::timeout(LONG_POLL_WINDOW, advance(&mut rx, query.since)).await
    {
        Ok(revision) => revision,
        Err(_elapsed) => *rx.borrow(),
    };
    Ok(Json(RevisionResponse { revision }))
}

async fn advance(rx: &mut watch::Receiver<u64>, since: u64) -> u64 {
    loop {
        // changed() errs only when the session (and its store) was discarded
        if rx.changed().await.is_err() {
            return *rx.borrow();
        }
        let revision = *rx.borrow();
        if revision > since {
            return revision;
        }
    }
}

/// PUT /api/v1/sessions/:sid/resume/personal-info
pub async fn handle_update_personal_info(
    State(state): State<AppState>,
    Path(sid): Path<Uuid>,
    Json(info): Json<PersonalInfo>,
) -> Result<StatusCode, AppError> {
    let store = state.sessions.get(sid).await?;
    store.lock().await.update_personal_info(info);
    Ok(StatusCode::NO_CONTENT)
}

/// PUT /api/v1/sessions/:sid/resume/summary
pub async fn handle_update_summary(
    State(state): State<AppState>,
    Path(sid): Path<Uuid>,
    Json(update): Json<SummaryUpdate>,
) -> Result<StatusCode, AppError> {
    let store = state.sessions.get(sid).await?;
    store
        .lock()
        .await
        .update_professional_summary(update.content, update.keywords);
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/sessions/:sid/resume/<collection>
pub async fn handle_list_entries<T: CollectionEntity>(
    State(state): State<AppState>,
    Path(sid): Path<Uuid>,
) -> Result<Json<Collection<T>>, AppError> {
    let store = state.sessions.get(sid).await?;
    let store = store.lock().await;
    Ok(Json(T::collection(store.data()).clone()))
}

/// POST /api/v1/sessions/:sid/resume/<collection>
///
/// The store assigns the id; the draft carries fields only. No validation
/// happens here — the forms own required-field checks.
pub async fn handle_add_entry<T: CollectionEntity>(
    State(state): State<AppState>,
    Path(sid): Path<Uuid>,
    Json(draft): Json<T::Draft>,
) -> Result<(StatusCode, Json<EntryCreated>), AppError> {
    let store = state.sessions.get(sid).await?;
    let id = store.lock().await.add::<T>(draft);
    debug!("Added {} entry {id} to session {sid}", T::KIND);
    Ok((StatusCode::CREATED, Json(EntryCreated { id })))
}

/// PATCH /api/v1/sessions/:sid/resume/<collection>/:id
///
/// A miss is the store's documented silent no-op, so the response is 204
/// either way.
pub async fn handle_update_entry<T: CollectionEntity>(
    State(state): State<AppState>,
    Path((sid, id)): Path<(Uuid, Uuid)>,
    Json(patch): Json<T::Patch>,
) -> Result<StatusCode, AppError> {
    let store = state.sessions.get(sid).await?;
    let changed = store.lock().await.update::<T>(id, patch);
    if !changed {
        debug!("Update for absent {} entry {id} ignored", T::KIND);
    }
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/v1/sessions/:sid/resume/<collection>/:id
pub async fn handle_delete_entry<T: CollectionEntity>(
    State(state): State<AppState>,
    Path((sid, id)): Path<(Uuid, Uuid)>,
) -> Result<StatusCode, AppError> {
    let store = state.sessions.get(sid).await?;
    store.lock().await.delete::<T>(id);
    Ok(StatusCode::NO_CONTENT)
}
