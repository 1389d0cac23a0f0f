use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::style::StyleProps;
use crate::app::infrastructure::error::{AppError, Result};

/// One element of a page tree.
///
/// Serializes as a flat object: `{"type": "row", "children": [...], "style": {...}}`.
/// Branch kinds always carry a `children` array, even when empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    #[serde(flatten)]
    pub kind: NodeKind,
    #[serde(default, skip_serializing_if = "StyleProps::is_empty")]
    pub style: StyleProps,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum NodeKind {
    Container {
        #[serde(default)]
        children: Vec<Node>,
    },
    Row {
        #[serde(default)]
        children: Vec<Node>,
    },
    Column {
        #[serde(default)]
        children: Vec<Node>,
    },
    Text(Text),
    Button(Button),
    Input(Input),
    Checkbox(Checkbox),
    Link(Link),
    Markdown(Markdown),
    Image(Image),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Text {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Button {
    pub text: String,
    #[serde(default, skip_serializing_if = "is_false")]
    pub disabled: bool,
}

impl Button {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into(), disabled: false }
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputType {
    #[default]
    Text,
    Password,
    Number,
    Email,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Input {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(default)]
    pub input_type: InputType,
}

impl Input {
    pub fn new(input_type: InputType) -> Self {
        Self { input_type, ..Default::default() }
    }

    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Checkbox {
    #[serde(default)]
    pub checked: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl Checkbox {
    pub fn new(checked: bool) -> Self {
        Self { checked, label: None }
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

/// Browsing context a link opens in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LinkTarget {
    #[serde(rename = "_blank")]
    Blank,
    #[serde(rename = "_self")]
    SelfFrame,
    #[serde(rename = "_parent")]
    Parent,
    #[serde(rename = "_top")]
    Top,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Link {
    pub href: String,
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<LinkTarget>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Image {
    pub src: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
}

impl Image {
    pub fn new(src: impl Into<String>) -> Self {
        Self { src: src.into(), alt: None }
    }

    pub fn alt(mut self, alt: impl Into<String>) -> Self {
        self.alt = Some(alt.into());
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkdownTheme {
    Light,
    Dark,
}

/// Where a markdown node's text comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MarkdownContent {
    /// Inline markdown source.
    Source(String),
    /// Path to a markdown file, relative to the project root.
    File(PathBuf),
}

/// Markdown content rendered by an external collaborator.
///
/// On the wire exactly one of `source` or `file` is present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "MarkdownRepr", into = "MarkdownRepr")]
pub struct Markdown {
    pub content: MarkdownContent,
    pub theme: MarkdownTheme,
}

#[derive(Serialize, Deserialize)]
struct MarkdownRepr {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    file: Option<PathBuf>,
    theme: MarkdownTheme,
}

impl TryFrom<MarkdownRepr> for Markdown {
    type Error = AppError;

    fn try_from(repr: MarkdownRepr) -> Result<Self> {
        let content = match (repr.source, repr.file) {
            (Some(source), None) => MarkdownContent::Source(source),
            (None, Some(file)) => MarkdownContent::File(file),
            (Some(_), Some(_)) => {
                return Err(AppError::Markdown(
                    "both `source` and `file` are set".to_string(),
                ));
            }
            (None, None) => {
                return Err(AppError::Markdown(
                    "one of `source` or `file` is required".to_string(),
                ));
            }
        };
        Ok(Self { content, theme: repr.theme })
    }
}

impl From<Markdown> for MarkdownRepr {
    fn from(markdown: Markdown) -> Self {
        let (source, file) = match markdown.content {
            MarkdownContent::Source(s) => (Some(s), None),
            MarkdownContent::File(f) => (None, Some(f)),
        };
        Self { source, file, theme: markdown.theme }
    }
}

fn is_false(value: &bool) -> bool {
    !*value
}

impl Node {
    pub fn new(kind: NodeKind) -> Self {
        Self { kind, style: StyleProps::default() }
    }

    /// Lowercase kind name as written in the `type` field.
    pub fn kind_name(&self) -> &'static str {
        match &self.kind {
            NodeKind::Container { .. } => "container",
            NodeKind::Row { .. } => "row",
            NodeKind::Column { .. } => "column",
            NodeKind::Text(_) => "text",
            NodeKind::Button(_) => "button",
            NodeKind::Input(_) => "input",
            NodeKind::Checkbox(_) => "checkbox",
            NodeKind::Link(_) => "link",
            NodeKind::Markdown(_) => "markdown",
            NodeKind::Image(_) => "image",
        }
    }

    pub fn is_branch(&self) -> bool {
        matches!(
            self.kind,
            NodeKind::Container { .. } | NodeKind::Row { .. } | NodeKind::Column { .. }
        )
    }

    /// Ordered children; always empty for leaf kinds.
    pub fn children(&self) -> &[Node] {
        match &self.kind {
            NodeKind::Container { children }
            | NodeKind::Row { children }
            | NodeKind::Column { children } => children,
            _ => &[],
        }
    }

    /// Text body for text, button and link nodes.
    pub fn text(&self) -> Option<&str> {
        match &self.kind {
            NodeKind::Text(t) => Some(&t.text),
            NodeKind::Button(b) => Some(&b.text),
            NodeKind::Link(l) => Some(&l.text),
            _ => None,
        }
    }

    /// Check required fields on this node and every descendant.
    ///
    /// Empty strings count as missing for link destinations and labels,
    /// image sources and markdown file references.
    pub fn validate(&self) -> Result<()> {
        match &self.kind {
            NodeKind::Link(link) => {
                require("link", "href", &link.href)?;
                require("link", "text", &link.text)?;
            }
            NodeKind::Image(image) => require("image", "src", &image.src)?,
            NodeKind::Markdown(Markdown { content: MarkdownContent::File(file), .. }) => {
                if file.as_os_str().is_empty() {
                    return Err(AppError::MissingField { kind: "markdown", field: "file" });
                }
            }
            _ => {}
        }
        self.children().iter().try_for_each(Node::validate)
    }
}

fn require(kind: &'static str, field: &'static str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        Err(AppError::MissingField { kind, field })
    } else {
        Ok(())
    }
}

impl From<NodeKind> for Node {
    fn from(kind: NodeKind) -> Self {
        Self::new(kind)
    }
}

impl From<Text> for Node {
    fn from(text: Text) -> Self {
        Self::new(NodeKind::Text(text))
    }
}

impl From<Button> for Node {
    fn from(button: Button) -> Self {
        Self::new(NodeKind::Button(button))
    }
}

impl From<Input> for Node {
    fn from(input: Input) -> Self {
        Self::new(NodeKind::Input(input))
    }
}

impl From<Checkbox> for Node {
    fn from(checkbox: Checkbox) -> Self {
        Self::new(NodeKind::Checkbox(checkbox))
    }
}

impl From<Link> for Node {
    fn from(link: Link) -> Self {
        Self::new(NodeKind::Link(link))
    }
}

impl From<Markdown> for Node {
    fn from(markdown: Markdown) -> Self {
        Self::new(NodeKind::Markdown(markdown))
    }
}

impl From<Image> for Node {
    fn from(image: Image) -> Self {
        Self::new(NodeKind::Image(image))
    }
}
