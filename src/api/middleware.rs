//! Route protection for the catalog endpoints.

use axum::{
    body::Body,
    extract::State,
    http::Request,
    middleware::Next,
    response::Response,
};

use super::AppState;
use crate::error::ApiError;

/// Refuse the request unless the session is unlocked.
///
/// The flag is read from storage on every request, so a revoke takes effect
/// on the next call without any cached authorization.
pub async fn require_unlocked(
    State(state): State<AppState>,
    request: Request<Body>,
    next: Next,
) -> Result<Response, ApiError> {
    if state.gate.is_unlocked() {
        Ok(next.run(request).await)
    } else {
        tracing::debug!("Locked session requested {}", request.uri().path());
        Err(ApiError::Locked)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::DemoTargets;
    use crate::db::Database;
    use crate::gate::{AccessGate, Credential};
    use crate::session::SessionStore;
    use axum::{http::StatusCode, middleware::from_fn_with_state, routing::get, Router};
    use tower::ServiceExt;

    fn app() -> (Router, AppState) {
        let db = Database::open_memory().unwrap();
        db.migrate().unwrap();
        let gate = AccessGate::new(Credential::new("pw"), SessionStore::new(db));
        let state = AppState::new(
            gate,
            Vec::new(),
            DemoTargets::new(),
            "https://example.com/",
            "missing-demo-dir",
        );
        let router = Router::new()
            .route("/guarded", get(|| async { "ok" }))
            .route_layer(from_fn_with_state(state.clone(), require_unlocked))
            .with_state(state.clone());
        (router, state)
    }

    fn request() -> Request<Body> {
        Request::builder().uri("/guarded").body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn locked_session_is_refused() {
        let (router, _) = app();
        let response = router.oneshot(request()).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn unlocked_session_passes_through() {
        let (router, state) = app();
        state.gate.attempt("pw").unwrap();
        let response = router.oneshot(request()).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
