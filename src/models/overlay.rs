use serde::{Deserialize, Serialize};

use super::project::DemoRef;

/// Display state of the in-app demo overlay.
///
/// Only embeddable demos ever open the overlay. Fullscreen is a side effect
/// on top of `EmbeddedOpen`, not a state of its own.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "state", content = "demo_ref", rename_all = "snake_case")]
pub enum DemoOverlay {
    #[default]
    Closed,
    EmbeddedOpen(DemoRef),
}

impl DemoOverlay {
    pub fn is_open(&self) -> bool {
        matches!(self, Self::EmbeddedOpen(_))
    }
}
