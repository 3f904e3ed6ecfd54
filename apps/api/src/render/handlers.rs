//! Preview and template-listing endpoints.

use axum::extract::{Path, Query, State};
use axum::response::Html;
use axum::Json;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::render::{render, TemplateId};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct TemplateQuery {
    #[serde(default)]
    pub template: Option<String>,
}

impl TemplateQuery {
    /// Unknown or missing ids fall back to the default template.
    pub fn resolve(&self) -> TemplateId {
        self.template
            .as_deref()
            .map(TemplateId::parse_or_default)
            .unwrap_or_default()
    }
}

#[derive(Debug, Serialize)]
pub struct TemplateInfo {
    pub id: TemplateId,
    pub name: &'static str,
    pub placeholder: bool,
}

/// GET /api/v1/templates
pub async fn handle_list_templates() -> Json<Vec<TemplateInfo>> {
    Json(
        TemplateId::ALL
            .into_iter()
            .map(|id| TemplateInfo {
                id,
                name: id.display_name(),
                placeholder: id.is_placeholder(),
            })
            .collect(),
    )
}

/// GET /api/v1/sessions/:sid/preview?template=…
pub async fn handle_preview(
    State(state): State<AppState>,
    Path(sid): Path<Uuid>,
    Query(query): Query<TemplateQuery>,
) -> Result<Html<String>, AppError> {
    let store = state.sessions.get(sid).await?;
    let snapshot = store.lock().await.snapshot();
    Ok(Html(render(&snapshot, query.resolve())))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_query_falls_back_to_default() {
        let query = TemplateQuery { template: None };
        assert_eq!(query.resolve(), TemplateId::Modern);

        let query = TemplateQuery {
            template: Some("no-such-template".to_string()),
        };
        assert_eq!(query.resolve(), TemplateId::Modern);

        let query = TemplateQuery {
            template: Some("minimal".to_string()),
        };
        assert_eq!(query.resolve(), TemplateId::Minimal);
    }

    #[tokio::test]
    async fn test_template_listing_names_all_six() {
        let Json(templates) = handle_list_templates().await;
        assert_eq!(templates.len(), 6);
        assert!(templates.iter().any(|t| t.id == TemplateId::Modern && !t.placeholder));
        assert!(templates.iter().any(|t| t.id == TemplateId::Creative && t.placeholder));
    }
}
