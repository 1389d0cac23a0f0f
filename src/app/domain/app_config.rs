use serde::{Deserialize, Serialize};

use super::node::Node;
use super::style::Color;
use crate::app::infrastructure::error::Result;

/// Window/document metadata handed to the runtime alongside the root tree.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WindowConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<Color>,
}

impl WindowConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn size(mut self, width: u32, height: u32) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    pub fn background(mut self, background: Color) -> Self {
        self.background = Some(background);
        self
    }
}

/// A page: window metadata plus the root of its node tree.
///
/// Built once and never mutated; the only way in is [`AppConfig::new`] (or the
/// JSON constructors), all of which validate the whole tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    window: WindowConfig,
    root: Node,
}

impl AppConfig {
    /// Run `render` to produce the root and validate the resulting tree.
    pub fn new(window: WindowConfig, render: impl FnOnce() -> Node) -> Result<Self> {
        let root = render();
        root.validate()?;
        Ok(Self { window, root })
    }

    pub fn window(&self) -> &WindowConfig {
        &self.window
    }

    pub fn title(&self) -> Option<&str> {
        self.window.title.as_deref()
    }

    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Plain nested-object form of the page.
    pub fn to_value(&self) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_value(value: serde_json::Value) -> Result<Self> {
        let app: Self = serde_json::from_value(value)?;
        app.root.validate()?;
        Ok(app)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let app: Self = serde_json::from_str(json)?;
        app.root.validate()?;
        Ok(app)
    }
}
