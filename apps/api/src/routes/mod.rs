pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{delete, get, patch, post, put},
    Router,
};

use crate::export::handlers as export_handlers;
use crate::models::collection::CollectionEntity;
use crate::models::resume::{
    Achievement, Award, Certification, Education, Experience, Hobby, Language, Project,
    Publication, Reference, Skill, Technology,
};
use crate::optimizer::handlers as optimizer_handlers;
use crate::render::handlers as render_handlers;
use crate::state::AppState;
use crate::store::handlers as store_handlers;

/// Registers the CRUD trio for one collection under its kind label.
fn collection_routes<T: CollectionEntity>(router: Router<AppState>) -> Router<AppState> {
    router
        .route(
            &format!("/api/v1/sessions/:sid/resume/{}", T::KIND),
            get(store_handlers::handle_list_entries::<T>)
                .post(store_handlers::handle_add_entry::<T>),
        )
        .route(
            &format!("/api/v1/sessions/:sid/resume/{}/:id", T::KIND),
            patch(store_handlers::handle_update_entry::<T>)
                .delete(store_handlers::handle_delete_entry::<T>),
        )
}

pub fn build_router(state: AppState) -> Router {
    let mut router = Router::new()
        .route("/health", get(health::health_handler))
        // Sessions
        .route(
            "/api/v1/sessions",
            post(store_handlers::handle_create_session),
        )
        .route(
            "/api/v1/sessions/:sid",
            delete(store_handlers::handle_delete_session),
        )
        // Resume snapshot + change notification
        .route(
            "/api/v1/sessions/:sid/resume",
            get(store_handlers::handle_get_resume),
        )
        .route(
            "/api/v1/sessions/:sid/resume/changes",
            get(store_handlers::handle_wait_changes),
        )
        // Singletons
        .route(
            "/api/v1/sessions/:sid/resume/personal-info",
            put(store_handlers::handle_update_personal_info),
        )
        .route(
            "/api/v1/sessions/:sid/resume/summary",
            put(store_handlers::handle_update_summary),
        )
        // Templates + preview
        .route(
            "/api/v1/templates",
            get(render_handlers::handle_list_templates),
        )
        .route(
            "/api/v1/sessions/:sid/preview",
            get(render_handlers::handle_preview),
        )
        // Optimizer
        .route(
            "/api/v1/sessions/:sid/optimize",
            post(optimizer_handlers::handle_optimize),
        )
        .route(
            "/api/v1/sessions/:sid/optimize/apply",
            post(optimizer_handlers::handle_optimize_apply),
        )
        // Export
        .route(
            "/api/v1/sessions/:sid/export",
            post(export_handlers::handle_export),
        );

    router = collection_routes::<Experience>(router);
    router = collection_routes::<Education>(router);
    router = collection_routes::<Skill>(router);
    router = collection_routes::<Technology>(router);
    router = collection_routes::<Project>(router);
    router = collection_routes::<Certification>(router);
    router = collection_routes::<Achievement>(router);
    router = collection_routes::<Language>(router);
    router = collection_routes::<Publication>(router);
    router = collection_routes::<Award>(router);
    router = collection_routes::<Hobby>(router);
    router = collection_routes::<Reference>(router);

    router
        .layer(DefaultBodyLimit::max(state.config.max_surface_mb * 1024 * 1024))
        .with_state(state)
}
