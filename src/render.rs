//! Plain-text rendering of catalog entries.

use crate::models::{Filter, ProjectEntry, ProjectStatus};

const CONCEPT: char = '◇';
const IN_PROGRESS: char = '○';
const DEMO_READY: char = '▶';
const COMPLETED: char = '●';

fn status_symbol(status: ProjectStatus) -> char {
    match status {
        ProjectStatus::Concept => CONCEPT,
        ProjectStatus::InProgress => IN_PROGRESS,
        ProjectStatus::DemoReady => DEMO_READY,
        ProjectStatus::Completed => COMPLETED,
    }
}

/// Human-readable summary used by the details view.
///
/// ```text
/// Project Details for: Advanced Trading Platform
///
/// Description: Modern trading application ...
///
/// Technologies: Flutter, Dart
///
/// Status: Demo Ready
/// ```
pub fn describe(entry: &ProjectEntry) -> String {
    format!(
        "Project Details for: {}\n\nDescription: {}\n\nTechnologies: {}\n\nStatus: {}",
        entry.title,
        entry.description,
        entry.technologies.join(", "),
        entry.status.label()
    )
}

/// Render visible entries as a card list under a filter heading.
///
/// Example output:
/// ```text
/// Filter: 📈 Trading (2)
/// ├── ▶ [1] Neo Bank - Iceland · 📈 Trading (Demo Ready, demo)
/// └── ▶ [2] Advanced Trading Platform · 📈 Trading (Demo Ready, demo)
/// ```
pub fn render_catalog(filter: Filter, entries: &[&ProjectEntry]) -> String {
    let heading = match filter {
        Filter::All => "All Projects",
        Filter::Category(c) => c.label(),
    };
    let mut output = format!("Filter: {} ({})\n", heading, entries.len());

    for (i, entry) in entries.iter().enumerate() {
        let branch = if i == entries.len() - 1 {
            "└── "
        } else {
            "├── "
        };
        output.push_str(branch);
        output.push(status_symbol(entry.status));
        output.push_str(&format!(
            " [{}] {} · {} ({}",
            entry.id,
            entry.title,
            entry.category.label(),
            entry.status.label()
        ));
        if entry.demo_ref.is_some() {
            output.push_str(", demo");
        }
        output.push_str(")\n");
    }

    output
}
