use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};

use super::AppState;
use crate::catalog::{CatalogController, DemoLaunch};
use crate::error::ApiError;
use crate::models::*;
use crate::navigation::RecordingNavigator;

// ============================================================
// Responses
// ============================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavigationResponse {
    #[serde(flatten)]
    pub outcome: NavigationOutcome,
    /// View the application shows afterwards; `None` once it has been left.
    pub rendered: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogResponse {
    pub filter: Filter,
    pub entries: Vec<ProjectEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OverlayResponse {
    pub overlay: DemoOverlay,
    /// Addresses the client must open outside the application.
    pub navigations: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetailsResponse {
    pub details: String,
}

#[derive(Debug, Deserialize)]
pub struct NavigateQuery {
    #[serde(default)]
    pub path: String,
}

#[derive(Debug, Deserialize)]
pub struct CatalogQuery {
    pub filter: Option<String>,
}

fn overlay_response(catalog: &CatalogController<RecordingNavigator>) -> OverlayResponse {
    OverlayResponse {
        overlay: catalog.overlay().clone(),
        navigations: catalog.navigator().take(),
    }
}

fn entry_not_found(id: u32) -> ApiError {
    ApiError::NotFound(format!("Project {} not found", id))
}

// ============================================================
// Health
// ============================================================

pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

// ============================================================
// Session
// ============================================================

pub async fn get_session(State(state): State<AppState>) -> Json<SessionState> {
    Json(SessionState {
        unlocked: state.gate.is_unlocked(),
    })
}

pub async fn unlock(
    State(state): State<AppState>,
    Json(input): Json<UnlockRequest>,
) -> Result<Json<SessionState>, ApiError> {
    state.gate.attempt(&input.secret)?;
    Ok(Json(SessionState {
        unlocked: state.gate.is_unlocked(),
    }))
}

pub async fn revoke(State(state): State<AppState>) -> StatusCode {
    state.gate.revoke();
    StatusCode::NO_CONTENT
}

// ============================================================
// Navigation
// ============================================================

pub async fn navigate(
    State(state): State<AppState>,
    Query(query): Query<NavigateQuery>,
) -> Json<NavigationResponse> {
    let outcome = state.navigation().navigate_path(&query.path);
    let rendered = outcome.rendered().map(str::to_string);
    Json(NavigationResponse { outcome, rendered })
}

// ============================================================
// Catalog
// ============================================================

pub async fn list_catalog(
    State(state): State<AppState>,
    Query(query): Query<CatalogQuery>,
) -> Result<Json<CatalogResponse>, ApiError> {
    let mut catalog = state.catalog()?;

    let filter = match query.filter.as_deref() {
        Some(raw) => Filter::from_str(raw)
            .ok_or_else(|| ApiError::BadRequest(format!("Unknown filter: {}", raw)))?,
        None => catalog.active_filter(),
    };

    let entries = catalog.set_filter(filter).into_iter().cloned().collect();
    Ok(Json(CatalogResponse { filter, entries }))
}

pub async fn get_overlay(State(state): State<AppState>) -> Result<Json<OverlayResponse>, ApiError> {
    let catalog = state.catalog()?;
    Ok(Json(overlay_response(&catalog)))
}

pub async fn open_demo(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> Result<Json<OverlayResponse>, ApiError> {
    let mut catalog = state.catalog()?;
    let launch = catalog.open_demo_by_id(id).ok_or_else(|| entry_not_found(id))?;
    if launch == DemoLaunch::Ignored {
        tracing::debug!("Project {} has no launchable demo", id);
    }
    Ok(Json(overlay_response(&catalog)))
}

pub async fn launch_featured(
    State(state): State<AppState>,
) -> Result<Json<OverlayResponse>, ApiError> {
    let mut catalog = state.catalog()?;
    catalog.launch_featured();
    Ok(Json(overlay_response(&catalog)))
}

pub async fn open_hosted_demo(
    State(state): State<AppState>,
) -> Result<Json<OverlayResponse>, ApiError> {
    let catalog = state.catalog()?;
    catalog.open_hosted_demo();
    Ok(Json(overlay_response(&catalog)))
}

pub async fn request_fullscreen(
    State(state): State<AppState>,
) -> Result<Json<OverlayResponse>, ApiError> {
    let catalog = state.catalog()?;
    catalog.request_fullscreen();
    Ok(Json(overlay_response(&catalog)))
}

pub async fn close_demo(State(state): State<AppState>) -> Result<Json<OverlayResponse>, ApiError> {
    let mut catalog = state.catalog()?;
    catalog.close_demo();
    Ok(Json(overlay_response(&catalog)))
}

pub async fn entry_details(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> Result<Json<DetailsResponse>, ApiError> {
    let catalog = state.catalog()?;
    let entry = catalog.entry(id).ok_or_else(|| entry_not_found(id))?;
    Ok(Json(DetailsResponse {
        details: catalog.describe(entry),
    }))
}
