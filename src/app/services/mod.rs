//! Services layer - operations over page trees.
//!
//! This module contains the logic page composers and controllers share:
//! - The builder API for composing trees
//! - Tree traversal and summaries
//! - Label/URL formatting
//! - Markdown file reference resolution

pub mod compose;
pub mod markdown;
pub mod text_ops;
pub mod tree;
