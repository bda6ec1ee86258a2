//! Pocketlab - a terminal playground of pocket-device and REST API demos.
//!
//! This crate bundles three small self-contained demo apps behind one TUI:
//! a searchable contact directory, a tabbed location/profile companion, and
//! a REST + accelerometer lab screen.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

/// Application layer containing use cases.
pub mod application;
/// Domain layer containing entities, errors, and port definitions.
pub mod domain;
/// Infrastructure layer containing adapters for platform services.
pub mod infrastructure;
/// Presentation layer containing UI components and event handling.
pub mod presentation;

/// Current version of the application.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name.
pub const NAME: &str = "pocketlab";
