//! Navigation Controller and the external-navigation capability.

use std::sync::{Arc, Mutex};

use crate::gate::AccessGate;
use crate::models::{NavigationOutcome, Route};
use crate::session::SessionBackend;

/// Hands an address to something outside the application.
pub trait ExternalNavigator {
    fn open(&self, address: &str);
}

impl<T: ExternalNavigator + ?Sized> ExternalNavigator for &T {
    fn open(&self, address: &str) {
        (**self).open(address)
    }
}

/// Opens addresses with the platform's default handler (usually a browser).
///
/// Locally served addresses (those starting with `/`) are joined onto
/// `origin` when one is set.
#[derive(Clone, Debug, Default)]
pub struct SystemBrowser {
    origin: Option<String>,
}

impl SystemBrowser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_origin(origin: impl Into<String>) -> Self {
        Self {
            origin: Some(origin.into()),
        }
    }

    pub fn resolve(&self, address: &str) -> String {
        match &self.origin {
            Some(origin) if address.starts_with('/') => {
                format!("{}{}", origin.trim_end_matches('/'), address)
            }
            _ => address.to_string(),
        }
    }
}

impl ExternalNavigator for SystemBrowser {
    fn open(&self, address: &str) {
        let address = self.resolve(address);
        tracing::info!("Opening {} outside the application", address);
        if let Err(e) = open::that(&address) {
            tracing::warn!("Failed to open {}: {}", address, e);
        }
    }
}

/// Collects requested addresses instead of acting on them.
///
/// Used where the actual navigation is performed by someone else, such as an
/// HTTP client reading the addresses back from a response.
#[derive(Clone, Debug, Default)]
pub struct RecordingNavigator {
    opened: Arc<Mutex<Vec<String>>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Addresses recorded so far.
    pub fn opened(&self) -> Vec<String> {
        self.opened
            .lock()
            .map(|opened| opened.clone())
            .unwrap_or_default()
    }

    /// Drain the recorded addresses.
    pub fn take(&self) -> Vec<String> {
        self.opened
            .lock()
            .map(|mut opened| std::mem::take(&mut *opened))
            .unwrap_or_default()
    }
}

impl ExternalNavigator for RecordingNavigator {
    fn open(&self, address: &str) {
        tracing::info!("External navigation requested: {}", address);
        if let Ok(mut opened) = self.opened.lock() {
            opened.push(address.to_string());
        }
    }
}

/// Decides, per request, whether a view renders or bounces to the gate.
///
/// Nothing is cached: the gate predicate runs on every request, so a revoked
/// session locks out the very next navigation.
#[derive(Clone, Debug)]
pub struct NavigationController<B, N> {
    gate: AccessGate<B>,
    navigator: N,
    external_target: String,
}

impl<B: SessionBackend, N: ExternalNavigator> NavigationController<B, N> {
    pub fn new(gate: AccessGate<B>, navigator: N, external_target: impl Into<String>) -> Self {
        Self {
            gate,
            navigator,
            external_target: external_target.into(),
        }
    }

    pub fn navigate(&self, route: Route) -> NavigationOutcome {
        match route {
            Route::Gate => NavigationOutcome::RenderGate,
            Route::Protected(view) => {
                if self.gate.is_unlocked() {
                    NavigationOutcome::Render(view)
                } else {
                    tracing::debug!("Redirecting {} to gate", view.as_str());
                    NavigationOutcome::RedirectToGate
                }
            }
            Route::ExternalRedirect => {
                self.navigator.open(&self.external_target);
                NavigationOutcome::LeftApplication(self.external_target.clone())
            }
            Route::Unknown => {
                tracing::debug!("Unknown route, redirecting to gate");
                NavigationOutcome::RedirectToGate
            }
        }
    }

    pub fn navigate_path(&self, path: &str) -> NavigationOutcome {
        self.navigate(Route::from_path(path))
    }

    /// Revoke the session and land on the gate.
    pub fn logout(&self) -> NavigationOutcome {
        self.gate.revoke();
        self.navigate(Route::Gate)
    }

    pub fn gate(&self) -> &AccessGate<B> {
        &self.gate
    }

    pub fn navigator(&self) -> &N {
        &self.navigator
    }
}
