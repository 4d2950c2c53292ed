use std::sync::Arc;

use sqlx::PgPool;

use crate::report::narrative::Narrator;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    /// Pluggable narrative backend. Default: TemplateNarrator. Swap via NARRATIVE_BACKEND env.
    pub narrator: Arc<dyn Narrator>,
}
