use serde::{Deserialize, Serialize};

/// A view that only renders once the gate has been cleared.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum View {
    Dashboard,
}

impl View {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Dashboard => "dashboard",
        }
    }
}

/// A requested route, before the gate has been consulted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Gate,
    Protected(View),
    ExternalRedirect,
    Unknown,
}

impl Route {
    /// Map a path to its route. Leading and trailing slashes are ignored.
    pub fn from_path(path: &str) -> Self {
        match path.trim_matches('/') {
            "" | "login" => Self::Gate,
            "dashboard" | "page/dashboard" => Self::Protected(View::Dashboard),
            "neo-bank" => Self::ExternalRedirect,
            _ => Self::Unknown,
        }
    }
}

/// What happened when a route was requested.
///
/// - `RenderGate`: the password form is shown
/// - `Render`: the protected view is shown
/// - `RedirectToGate`: the request was bounced to the gate
/// - `LeftApplication`: control was handed to an external address
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "outcome", content = "target", rename_all = "snake_case")]
pub enum NavigationOutcome {
    RenderGate,
    Render(View),
    RedirectToGate,
    LeftApplication(String),
}

impl NavigationOutcome {
    /// The view that ends up on screen, if the application still owns it.
    pub fn rendered(&self) -> Option<&'static str> {
        match self {
            Self::RenderGate | Self::RedirectToGate => Some("login"),
            Self::Render(view) => Some(view.as_str()),
            Self::LeftApplication(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_map_to_routes() {
        assert_eq!(Route::from_path(""), Route::Gate);
        assert_eq!(Route::from_path("/login"), Route::Gate);
        assert_eq!(
            Route::from_path("/page/dashboard/"),
            Route::Protected(View::Dashboard)
        );
        assert_eq!(Route::from_path("neo-bank"), Route::ExternalRedirect);
        assert_eq!(Route::from_path("admin"), Route::Unknown);
    }
}
