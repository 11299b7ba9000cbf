use serde::{Deserialize, Serialize};

/// A single card in the project showcase.
///
/// Entries are static configuration supplied whole by the catalog source.
/// Nothing in this crate mutates an entry after loading; controllers only
/// filter and read them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProjectEntry {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub category: Category,
    pub status: ProjectStatus,
    /// Display order is preserved as supplied.
    #[serde(default)]
    pub technologies: Vec<String>,
    /// Opaque token naming the demo launcher, absent when the project has no demo.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub demo_ref: Option<DemoRef>,
}

/// The kind of project, used for catalog filtering.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    TradingApp,
    WebApp,
    MobileApp,
    AiProject,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Self::TradingApp,
        Self::WebApp,
        Self::MobileApp,
        Self::AiProject,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TradingApp => "trading-app",
            Self::WebApp => "web-app",
            Self::MobileApp => "mobile-app",
            Self::AiProject => "ai-project",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "trading-app" => Some(Self::TradingApp),
            "web-app" => Some(Self::WebApp),
            "mobile-app" => Some(Self::MobileApp),
            "ai-project" => Some(Self::AiProject),
            _ => None,
        }
    }

    /// Badge shown on cards and in the filter heading.
    pub fn label(&self) -> &'static str {
        category_label(self.as_str())
    }
}

/// How far along a project is.
///
/// - `Concept`: idea only
/// - `InProgress`: being built
/// - `DemoReady`: has a demo worth launching
/// - `Completed`: finished
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectStatus {
    Concept,
    InProgress,
    DemoReady,
    Completed,
}

impl ProjectStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Concept => "concept",
            Self::InProgress => "in-progress",
            Self::DemoReady => "demo-ready",
            Self::Completed => "completed",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "concept" => Some(Self::Concept),
            "in-progress" => Some(Self::InProgress),
            "demo-ready" => Some(Self::DemoReady),
            "completed" => Some(Self::Completed),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        status_label(self.as_str())
    }
}

// Label tables keyed by wire value. Unrecognised values label as themselves.
fn category_label(raw: &str) -> &str {
    match raw {
        "trading-app" => "📈 Trading",
        "web-app" => "🌐 Web App",
        "mobile-app" => "📱 Mobile",
        "ai-project" => "🤖 AI/ML",
        other => other,
    }
}

fn status_label(raw: &str) -> &str {
    match raw {
        "concept" => "Concept",
        "in-progress" => "In Progress",
        "demo-ready" => "Demo Ready",
        "completed" => "Completed",
        other => other,
    }
}

/// Opaque demo token carried by a [`ProjectEntry`].
///
/// What the token points at is decided by [`crate::catalog::DemoTargets`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct DemoRef(pub String);

impl DemoRef {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for DemoRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Where a resolved demo lives.
///
/// Embedded demos render inside the application in an overlay frame; external
/// demos are opened outside the application and never touch the overlay.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", content = "address", rename_all = "snake_case")]
pub enum DemoTarget {
    Embedded(String),
    External(String),
}

/// The active catalog filter: everything, or a single category.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(into = "String", try_from = "String")]
pub enum Filter {
    #[default]
    All,
    Category(Category),
}

impl Filter {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Category(c) => c.as_str(),
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "all" => Some(Self::All),
            other => Category::from_str(other).map(Self::Category),
        }
    }

    pub fn matches(&self, entry: &ProjectEntry) -> bool {
        match self {
            Self::All => true,
            Self::Category(c) => entry.category == *c,
        }
    }
}

impl From<Filter> for String {
    fn from(filter: Filter) -> Self {
        filter.as_str().to_string()
    }
}

impl TryFrom<String> for Filter {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Filter::from_str(&value).ok_or_else(|| format!("unknown filter: {}", value))
    }
}

impl From<Category> for Filter {
    fn from(category: Category) -> Self {
        Self::Category(category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_strings_round_trip_for_every_variant() {
        for category in Category::ALL {
            assert_eq!(Category::from_str(category.as_str()), Some(category));
        }
    }

    #[test]
    fn unknown_labels_fall_back_to_raw_value() {
        assert_eq!(category_label("web-app"), "🌐 Web App");
        assert_eq!(category_label("game"), "game");
        assert_eq!(status_label("demo-ready"), "Demo Ready");
        assert_eq!(status_label("archived"), "archived");
    }

    #[test]
    fn category_badges_match_dashboard_labels() {
        assert_eq!(Category::TradingApp.label(), "📈 Trading");
        assert_eq!(Category::WebApp.label(), "🌐 Web App");
        assert_eq!(Category::MobileApp.label(), "📱 Mobile");
        assert_eq!(Category::AiProject.label(), "🤖 AI/ML");
        for category in Category::ALL {
            assert_ne!(category.label(), category.as_str());
        }
    }

    #[test]
    fn entry_deserializes_from_catalog_json() {
        let entry: ProjectEntry = serde_json::from_str(
            r#"{
                "id": 2,
                "title": "Advanced Trading Platform",
                "description": "Trading dashboard",
                "category": "trading-app",
                "status": "demo-ready",
                "technologies": ["Flutter", "Dart"],
                "demoRef": "flutter-trading-demo"
            }"#,
        )
        .unwrap();

        assert_eq!(entry.category, Category::TradingApp);
        assert_eq!(entry.status, ProjectStatus::DemoReady);
        assert_eq!(entry.demo_ref, Some(DemoRef::new("flutter-trading-demo")));
    }

    #[test]
    fn filter_rejects_unknown_names() {
        assert_eq!(Filter::from_str("all"), Some(Filter::All));
        assert_eq!(
            Filter::from_str("mobile-app"),
            Some(Filter::Category(Category::MobileApp))
        );
        assert!(Filter::from_str("desktop-app").is_none());
    }
}
