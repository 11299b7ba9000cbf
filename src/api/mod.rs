//! HTTP surface over the gate, navigation and catalog.
//!
//! The server stands in for a single client installation: there is one
//! session flag and one catalog view, shared by every request.

mod handlers;
mod middleware;

use std::path::PathBuf;
use std::sync::{Arc, Mutex, MutexGuard};

use axum::{
    http::{HeaderName, HeaderValue},
    middleware::from_fn_with_state,
    routing::{delete, get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{
    cors::CorsLayer, services::ServeDir, set_header::SetResponseHeaderLayer, trace::TraceLayer,
};

use crate::catalog::{self, CatalogController, DemoTargets};
use crate::config::ShowcaseConfig;
use crate::db::Database;
use crate::error::ApiError;
use crate::gate::AccessGate;
use crate::models::ProjectEntry;
use crate::navigation::{NavigationController, RecordingNavigator};
use crate::session::SessionStore;

pub use handlers::{CatalogResponse, DetailsResponse, NavigationResponse, OverlayResponse};
pub use middleware::require_unlocked;

/// Mount point of the embedded demo assets.
pub const DEMO_ASSETS_PATH: &str = "/assets/flutter-demo";

#[derive(Clone)]
pub struct AppState {
    gate: AccessGate<Database>,
    catalog: Arc<Mutex<CatalogController<RecordingNavigator>>>,
    external_url: String,
    demo_dir: PathBuf,
}

impl AppState {
    pub fn new(
        gate: AccessGate<Database>,
        entries: Vec<ProjectEntry>,
        targets: DemoTargets,
        external_url: impl Into<String>,
        demo_dir: impl Into<PathBuf>,
    ) -> Self {
        let catalog = CatalogController::new(entries, targets, RecordingNavigator::new());
        Self {
            gate,
            catalog: Arc::new(Mutex::new(catalog)),
            external_url: external_url.into(),
            demo_dir: demo_dir.into(),
        }
    }

    /// Build the state from configuration, loading the configured catalog if any.
    pub fn from_config(db: Database, config: &ShowcaseConfig) -> anyhow::Result<Self> {
        let entries = match &config.catalog_path {
            Some(path) => catalog::load_catalog(path)?,
            None => catalog::builtin_catalog(),
        };
        let gate = AccessGate::new(config.credential(), SessionStore::new(db));
        Ok(Self::new(
            gate,
            entries,
            DemoTargets::builtin(&config.external_url),
            config.external_url.clone(),
            config.demo_dir.clone(),
        ))
    }

    pub fn gate(&self) -> &AccessGate<Database> {
        &self.gate
    }

    /// A navigation controller for one request. External navigations are
    /// recorded and reported back to the caller.
    fn navigation(&self) -> NavigationController<Database, RecordingNavigator> {
        NavigationController::new(
            self.gate.clone(),
            RecordingNavigator::new(),
            self.external_url.clone(),
        )
    }

    fn catalog(&self) -> Result<MutexGuard<'_, CatalogController<RecordingNavigator>>, ApiError> {
        self.catalog
            .lock()
            .map_err(|_| ApiError::Internal("catalog lock poisoned".to_string()))
    }
}

pub fn create_router(state: AppState) -> Router {
    if !state.demo_dir.is_dir() {
        tracing::warn!(
            "Demo directory {} not found; embedded demo will not load",
            state.demo_dir.display()
        );
    }

    let protected = Router::new()
        .route("/catalog", get(handlers::list_catalog))
        .route("/catalog/overlay", get(handlers::get_overlay))
        .route("/catalog/overlay", delete(handlers::close_demo))
        .route(
            "/catalog/overlay/fullscreen",
            post(handlers::request_fullscreen),
        )
        .route("/catalog/featured", post(handlers::launch_featured))
        .route("/catalog/featured/new-tab", post(handlers::open_hosted_demo))
        .route("/catalog/entries/{id}/demo", post(handlers::open_demo))
        .route("/catalog/entries/{id}/details", get(handlers::entry_details))
        .route_layer(from_fn_with_state(state.clone(), require_unlocked));

    let api = Router::new()
        // Session
        .route("/session", get(handlers::get_session))
        .route("/session", post(handlers::unlock))
        .route("/session", delete(handlers::revoke))
        // Navigation
        .route("/navigate", get(handlers::navigate))
        // Health
        .route("/health", get(handlers::health))
        .merge(protected);

    let demo_assets = ServiceBuilder::new()
        .layer(SetResponseHeaderLayer::overriding(
            HeaderName::from_static("cross-origin-embedder-policy"),
            HeaderValue::from_static("require-corp"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            HeaderName::from_static("cross-origin-opener-policy"),
            HeaderValue::from_static("same-origin"),
        ))
        .service(ServeDir::new(&state.demo_dir));

    Router::new()
        .nest("/api/v1", api)
        .nest_service(DEMO_ASSETS_PATH, demo_assets)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
