//! Export endpoint: multipart capture upload in, PDF attachment out.

use axum::extract::{Multipart, Path, Query, State};
use axum::http::header;
use axum::response::{IntoResponse, Response};
use bytes::Bytes;
use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::export::export_resume;
use crate::export::raster::{SurfaceCapture, CAPTURE_SCALE};
use crate::render::handlers::TemplateQuery;
use crate::state::AppState;

/// POST /api/v1/sessions/:sid/export?template=…
///
/// Expects a multipart body with a `surface` part (the captured preview
/// image) and an optional `scale` part. A missing surface aborts with a
/// descriptive error before anything is rasterized.
pub async fn handle_export(
    State(state): State<AppState>,
    Path(sid): Path<Uuid>,
    Query(query): Query<TemplateQuery>,
    multipart: Multipart,
) -> Result<Response, AppError> {
    let template = query.resolve();
    let store = state.sessions.get(sid).await?;
    let snapshot = store.lock().await.snapshot();

    let capture = read_capture(multipart).await?;
    let document = export_resume(
        state.rasterizer.as_ref(),
        capture,
        &snapshot,
        template,
        Utc::now().date_naive(),
    )
    .await?;

    info!(
        "Exported session {sid} as \"{}\" ({} bytes)",
        document.file_name,
        document.bytes.len()
    );

    let headers = [
        (header::CONTENT_TYPE, "application/pdf".to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", document.file_name),
        ),
    ];
    Ok((headers, document.bytes).into_response())
}

async fn read_capture(mut multipart: Multipart) -> Result<SurfaceCapture, AppError> {
    let mut png: Option<Bytes> = None;
    let mut scale = CAPTURE_SCALE;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Malformed multipart body: {e}")))?
    {
        match field.name() {
            Some("surface") => {
                png = Some(field.bytes().await.map_err(|e| {
                    AppError::Validation(format!("Failed to read surface part: {e}"))
                })?);
            }
            Some("scale") => {
                let text = field.text().await.map_err(|e| {
                    AppError::Validation(format!("Failed to read scale part: {e}"))
                })?;
                scale = text.trim().parse().map_err(|_| {
                    AppError::Validation(format!("Invalid capture scale: {text:?}"))
                })?;
            }
            _ => {}
        }
    }

    let png = png.filter(|bytes| !bytes.is_empty()).ok_or_else(|| {
        AppError::Validation("Resume preview surface not found in upload".to_string())
    })?;
    Ok(SurfaceCapture { png, scale })
}
