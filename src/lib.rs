//! Password-gated project showcase.
//!
//! A shared-password gate ([`gate::AccessGate`]) in front of a small catalog of
//! project cards ([`catalog::CatalogController`]). The unlocked flag lives in
//! client-local durable storage ([`session::SessionStore`]) and every protected
//! navigation re-checks it ([`navigation::NavigationController`]).

pub mod api;
pub mod catalog;
pub mod config;
pub mod db;
pub mod error;
pub mod gate;
pub mod models;
pub mod navigation;
pub mod render;
pub mod session;
