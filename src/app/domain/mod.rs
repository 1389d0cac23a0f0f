//! Domain layer - core data structures and types.
//!
//! This module contains the fundamental domain models:
//! - Style attributes and their value types
//! - Nodes of a page tree
//! - The per-page app descriptor
//! - Site settings and runtime options

pub mod app_config;
pub mod node;
pub mod settings;
pub mod style;

pub use app_config::{AppConfig, WindowConfig};
pub use node::{
    Button, Checkbox, Image, Input, InputType, Link, LinkTarget, Markdown, MarkdownContent,
    MarkdownTheme, Node, NodeKind, Text,
};
pub use settings::{CONFIG_FILE_NAME, RunOptions, SiteSettings};
pub use style::{
    AlignItems, Border, BorderStyle, Color, Dimension, FlexDirection, FontWeight,
    JustifyContent, Overflow, Spacing, StyleProps, TextAlign,
};
