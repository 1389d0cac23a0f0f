//! Application layer - organized by Clean Architecture principles.
//!
//! # Structure
//!
//! - `domain/` - Core data structures (Node, StyleProps, AppConfig, settings)
//! - `controllers/` - Orchestration (page registry, runtime handoff)
//! - `services/` - Operations over trees (builder API, traversal, formatting)
//! - `infrastructure/` - External integrations (errors, logging)

pub mod controllers;
pub mod domain;
pub mod infrastructure;
pub mod services;

// Re-exports for convenient external access
pub use controllers::runtime::{ExportRuntime, Manifest, ManifestEntry, Runtime};
pub use controllers::site::{Page, SiteController};
pub use domain::{AppConfig, Node, NodeKind, RunOptions, SiteSettings, StyleProps, WindowConfig};
pub use infrastructure::error::{AppError, Result};
pub use infrastructure::logging::init_logging;
