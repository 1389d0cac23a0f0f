//! Controllers layer - orchestration and coordination.
//!
//! This module contains controllers that coordinate between
//! domain models, services, and the site pages:
//! - The runtime handoff (`run(app, options)`)
//! - Page selection and site export

pub mod runtime;
pub mod site;
