//! Domain models for the showcase.
//!
//! # Core Concepts
//!
//! - [`ProjectEntry`]: an immutable catalog card with a [`Category`], a
//!   [`ProjectStatus`] and an optional [`DemoRef`].
//! - [`Filter`]: the active catalog filter (`all` or one category).
//! - [`DemoOverlay`]: whether an embedded demo is on screen.
//! - [`Route`] / [`NavigationOutcome`]: requested views and what the gate
//!   made of them.
//! - [`SessionState`]: the persisted unlocked flag as exposed to callers.

mod overlay;
mod project;
mod route;
mod session;

pub use overlay::*;
pub use project::*;
pub use route::*;
pub use session::*;
