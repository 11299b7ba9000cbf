//! Catalog Controller: filtering the showcase and launching demos.
//!
//! Every operation here is total. Asking for something that makes no sense in
//! the current state (opening a project without a demo, going fullscreen with
//! nothing open) is a no-op, not an error.

use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result};

use crate::models::*;
use crate::navigation::ExternalNavigator;
use crate::render;

/// Token of the built-in external demo.
pub const NEO_BANK_DEMO: &str = "neo-bank-live";
/// Token of the built-in embedded demo.
pub const TRADING_DEMO: &str = "flutter-trading-demo";
/// Served address of the built-in embedded demo.
pub const TRADING_DEMO_ADDRESS: &str = "/assets/flutter-demo/index.html";

const EMBEDDED_PREFIX: &str = "embedded:";
const EXTERNAL_PREFIX: &str = "external:";

// ============================================================
// Demo targets
// ============================================================

/// Resolves [`DemoRef`] tokens to the address they launch.
///
/// Registered tokens win. Unregistered tokens of the form `embedded:<name>`
/// resolve to `/assets/<name>/index.html`, and `external:<url>` to `<url>`.
/// Anything else does not resolve.
#[derive(Clone, Debug, Default)]
pub struct DemoTargets {
    targets: HashMap<String, DemoTarget>,
}

impl DemoTargets {
    pub fn new() -> Self {
        Self::default()
    }

    /// The showcase's own demos, with `external_url` as the hosted bank demo.
    pub fn builtin(external_url: &str) -> Self {
        Self::new()
            .with(NEO_BANK_DEMO, DemoTarget::External(external_url.to_string()))
            .with(
                TRADING_DEMO,
                DemoTarget::Embedded(TRADING_DEMO_ADDRESS.to_string()),
            )
    }

    pub fn with(mut self, token: impl Into<String>, target: DemoTarget) -> Self {
        self.targets.insert(token.into(), target);
        self
    }

    pub fn resolve(&self, demo_ref: &DemoRef) -> Option<DemoTarget> {
        let token = demo_ref.as_str();
        if let Some(target) = self.targets.get(token) {
            return Some(target.clone());
        }
        if let Some(name) = token.strip_prefix(EMBEDDED_PREFIX) {
            return (!name.is_empty())
                .then(|| DemoTarget::Embedded(format!("/assets/{}/index.html", name)));
        }
        if let Some(url) = token.strip_prefix(EXTERNAL_PREFIX) {
            return (!url.is_empty()).then(|| DemoTarget::External(url.to_string()));
        }
        None
    }
}

// ============================================================
// Catalog source
// ============================================================

/// Read a catalog from a JSON array of entries.
///
/// The file is trusted: beyond what deserialization enforces, entries are not
/// validated.
pub fn load_catalog(path: &Path) -> Result<Vec<ProjectEntry>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read catalog {}", path.display()))?;
    let entries = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse catalog {}", path.display()))?;
    Ok(entries)
}

/// The catalog shipped with the showcase.
pub fn builtin_catalog() -> Vec<ProjectEntry> {
    vec![
        ProjectEntry {
            id: 1,
            title: "Neo Bank - Iceland".to_string(),
            description: "AI-powered banking app with glassmorphic UI. Features personal/family \
                          wealth management, interactive transfer system, donut charts, loyalty \
                          rewards, and real-time ISK liquidity tracking."
                .to_string(),
            category: Category::TradingApp,
            status: ProjectStatus::DemoReady,
            technologies: ["Flutter", "Dart", "Glass UI", "Neon UX", "AI Assistant"]
                .map(String::from)
                .to_vec(),
            demo_ref: Some(DemoRef::new(NEO_BANK_DEMO)),
        },
        ProjectEntry {
            id: 2,
            title: "Advanced Trading Platform".to_string(),
            description: "Modern trading application with real-time market data, advanced \
                          charting, and portfolio management. Features include risk assessment, \
                          automated trading strategies, and multi-asset support."
                .to_string(),
            category: Category::TradingApp,
            status: ProjectStatus::DemoReady,
            technologies: ["Flutter", "Dart", "Glass UI", "Neon UX"]
                .map(String::from)
                .to_vec(),
            demo_ref: Some(DemoRef::new(TRADING_DEMO)),
        },
    ]
}

// ============================================================
// Controller
// ============================================================

/// What an `open_demo` call ended up doing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DemoLaunch {
    /// No demo, or a token nothing resolves.
    Ignored,
    Embedded(DemoRef),
    External(String),
}

pub struct CatalogController<N> {
    entries: Vec<ProjectEntry>,
    targets: DemoTargets,
    navigator: N,
    filter: Filter,
    /// Indexes into `entries`, in source order.
    visible: Vec<usize>,
    overlay: DemoOverlay,
}

impl<N: ExternalNavigator> CatalogController<N> {
    pub fn new(entries: Vec<ProjectEntry>, targets: DemoTargets, navigator: N) -> Self {
        let visible = (0..entries.len()).collect();
        Self {
            entries,
            targets,
            navigator,
            filter: Filter::All,
            visible,
            overlay: DemoOverlay::Closed,
        }
    }

    pub fn entries(&self) -> &[ProjectEntry] {
        &self.entries
    }

    pub fn entry(&self, id: u32) -> Option<&ProjectEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    pub fn active_filter(&self) -> Filter {
        self.filter
    }

    pub fn overlay(&self) -> &DemoOverlay {
        &self.overlay
    }

    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    /// Entries matching the active filter, in source order.
    pub fn visible_entries(&self) -> Vec<&ProjectEntry> {
        self.visible.iter().map(|&i| &self.entries[i]).collect()
    }

    pub fn set_filter(&mut self, filter: Filter) -> Vec<&ProjectEntry> {
        self.filter = filter;
        self.visible = match filter {
            Filter::All => (0..self.entries.len()).collect(),
            Filter::Category(_) => self
                .entries
                .iter()
                .enumerate()
                .filter(|(_, e)| filter.matches(e))
                .map(|(i, _)| i)
                .collect(),
        };
        tracing::debug!(
            "Filter set to {}, {} entries visible",
            filter.as_str(),
            self.visible.len()
        );
        self.visible_entries()
    }

    pub fn open_demo(&mut self, entry: &ProjectEntry) -> DemoLaunch {
        let Some(demo_ref) = entry.demo_ref.as_ref() else {
            return DemoLaunch::Ignored;
        };

        match self.targets.resolve(demo_ref) {
            Some(DemoTarget::External(address)) => {
                self.navigator.open(&address);
                DemoLaunch::External(address)
            }
            Some(DemoTarget::Embedded(_)) => {
                self.overlay = DemoOverlay::EmbeddedOpen(demo_ref.clone());
                DemoLaunch::Embedded(demo_ref.clone())
            }
            None => {
                tracing::warn!("No demo target for {}", demo_ref);
                DemoLaunch::Ignored
            }
        }
    }

    /// [`Self::open_demo`] for the entry with `id`. `None` if there is no such entry.
    pub fn open_demo_by_id(&mut self, id: u32) -> Option<DemoLaunch> {
        let entry = self.entry(id)?.clone();
        Some(self.open_demo(&entry))
    }

    /// Launch the demo of the first catalog entry, as the hero banner does.
    pub fn launch_featured(&mut self) -> DemoLaunch {
        match self.entries.first().cloned() {
            Some(entry) => self.open_demo(&entry),
            None => DemoLaunch::Ignored,
        }
    }

    /// Open the hosted bank demo in a new tab, bypassing the overlay.
    /// Returns the address opened, or `None` if no external target is registered.
    pub fn open_hosted_demo(&self) -> Option<String> {
        match self.targets.resolve(&DemoRef::new(NEO_BANK_DEMO)) {
            Some(DemoTarget::External(url)) => {
                self.navigator.open(&url);
                Some(url)
            }
            _ => None,
        }
    }

    /// Open the embedded demo outside the application as well. The overlay
    /// stays open underneath. Returns the address opened, if any.
    pub fn request_fullscreen(&self) -> Option<String> {
        let DemoOverlay::EmbeddedOpen(demo_ref) = &self.overlay else {
            return None;
        };
        match self.targets.resolve(demo_ref) {
            Some(DemoTarget::Embedded(address)) => {
                self.navigator.open(&address);
                Some(address)
            }
            _ => None,
        }
    }

    pub fn close_demo(&mut self) {
        self.overlay = DemoOverlay::Closed;
    }

    pub fn describe(&self, entry: &ProjectEntry) -> String {
        render::describe(entry)
    }
}
