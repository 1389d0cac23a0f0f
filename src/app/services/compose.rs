//! Builder API used by page composers.
//!
//! Leaves are built with the free constructors ([`text`], [`link`], ...) and
//! branches with [`row`], [`column`] and [`container`], which return a [`Branch`]
//! that owns an ordered child list. Style setters come from [`Styled`] and work
//! on both.

use std::path::PathBuf;

use crate::app::domain::{
    AlignItems, Border, Button, Checkbox, Color, Dimension, FlexDirection, FontWeight, Image,
    Input, InputType, JustifyContent, Link, LinkTarget, Markdown, MarkdownContent, MarkdownTheme,
    Node, NodeKind, Overflow, Spacing, StyleProps, Text, TextAlign,
};

/// Setters that accept anything convertible into the field type.
macro_rules! into_setters {
    ($($field:ident: $ty:ty),* $(,)?) => {
        $(
            fn $field(mut self, value: impl Into<$ty>) -> Self {
                self.style_mut().$field = Some(value.into());
                self
            }
        )*
    };
}

/// Setters for numeric and enum fields, taken by value.
macro_rules! value_setters {
    ($($field:ident: $ty:ty),* $(,)?) => {
        $(
            fn $field(mut self, value: $ty) -> Self {
                self.style_mut().$field = Some(value);
                self
            }
        )*
    };
}

/// Fluent style setters shared by nodes and branch builders.
pub trait Styled: Sized {
    fn style_mut(&mut self) -> &mut StyleProps;

    into_setters! {
        width: Dimension,
        height: Dimension,
        min_width: Dimension,
        max_width: Dimension,
        min_height: Dimension,
        max_height: Dimension,
        max_text_width: Dimension,
        padding: Spacing,
        margin: Spacing,
        margin_top: Dimension,
        margin_bottom: Dimension,
        margin_left: Dimension,
        margin_right: Dimension,
        border_radius: Dimension,
        gap: Dimension,
        flex_basis: Dimension,
    }

    value_setters! {
        background: Color,
        color: Color,
        border: Border,
        border_top: Border,
        border_bottom: Border,
        border_left: Border,
        border_right: Border,
        font_size: f32,
        font_weight: FontWeight,
        line_height: f32,
        text_align: TextAlign,
        justify_content: JustifyContent,
        align_items: AlignItems,
        flex_direction: FlexDirection,
        flex_grow: f32,
        flex_shrink: f32,
        overflow: Overflow,
        opacity: f32,
        z_index: i32,
    }
}

impl Styled for Node {
    fn style_mut(&mut self) -> &mut StyleProps {
        &mut self.style
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BranchKind {
    Container,
    Row,
    Column,
}

/// A container/row/column under construction.
///
/// Children keep the order they were added in; that order is the paint and
/// reading order.
#[derive(Debug, Clone, PartialEq)]
pub struct Branch {
    kind: BranchKind,
    style: StyleProps,
    children: Vec<Node>,
}

impl Branch {
    pub fn new(kind: BranchKind) -> Self {
        Self { kind, style: StyleProps::default(), children: Vec::new() }
    }

    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn children<I>(mut self, children: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Node>,
    {
        self.children.extend(children.into_iter().map(Into::into));
        self
    }

    /// Append the child only when `condition` holds; otherwise nothing is added.
    pub fn child_if(self, condition: bool, build: impl FnOnce() -> Node) -> Self {
        if condition { self.child(build()) } else { self }
    }

    /// Append the child when present; `None` leaves the list untouched.
    pub fn child_opt<T: Into<Node>>(self, child: Option<T>) -> Self {
        match child {
            Some(c) => self.child(c),
            None => self,
        }
    }

    pub fn build(self) -> Node {
        let children = self.children;
        let kind = match self.kind {
            BranchKind::Container => NodeKind::Container { children },
            BranchKind::Row => NodeKind::Row { children },
            BranchKind::Column => NodeKind::Column { children },
        };
        Node { kind, style: self.style }
    }
}

impl Styled for Branch {
    fn style_mut(&mut self) -> &mut StyleProps {
        &mut self.style
    }
}

impl From<Branch> for Node {
    fn from(branch: Branch) -> Self {
        branch.build()
    }
}

pub fn container() -> Branch {
    Branch::new(BranchKind::Container)
}

pub fn row() -> Branch {
    Branch::new(BranchKind::Row)
}

pub fn column() -> Branch {
    Branch::new(BranchKind::Column)
}

pub fn text(body: impl Into<String>) -> Node {
    Text { text: body.into() }.into()
}

pub fn button(label: impl Into<String>) -> Node {
    Button::new(label).into()
}

/// An empty input field; set `value`/`placeholder` on [`Input`] for more.
pub fn input(input_type: InputType) -> Node {
    Input::new(input_type).into()
}

pub fn checkbox(checked: bool) -> Node {
    Checkbox::new(checked).into()
}

/// A link opening in the current context.
pub fn link(href: impl Into<String>, label: impl Into<String>) -> Node {
    Link { href: href.into(), text: label.into(), target: None }.into()
}

/// A link opening in a new browsing context (`_blank`).
pub fn external_link(href: impl Into<String>, label: impl Into<String>) -> Node {
    Link {
        href: href.into(),
        text: label.into(),
        target: Some(LinkTarget::Blank),
    }
    .into()
}

pub fn image(src: impl Into<String>) -> Node {
    Image::new(src).into()
}

/// Markdown loaded from a file relative to the project root.
pub fn markdown_file(path: impl Into<PathBuf>, theme: MarkdownTheme) -> Node {
    Markdown { content: MarkdownContent::File(path.into()), theme }.into()
}

/// Markdown given inline.
pub fn markdown_source(source: impl Into<String>, theme: MarkdownTheme) -> Node {
    Markdown { content: MarkdownContent::Source(source.into()), theme }.into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_children_keep_call_order() {
        let node = row().child(text("a")).child(text("b")).child(text("c")).build();
        let bodies: Vec<_> = node.children().iter().filter_map(Node::text).collect();
        assert_eq!(bodies, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_child_opt_skips_none() {
        let handle: Option<&str> = None;
        let node = row()
            .child(text("always"))
            .child_opt(handle.map(text))
            .build();
        assert_eq!(node.children().len(), 1);
    }

    #[test]
    fn test_child_if() {
        let with = column().child_if(true, || text("x")).build();
        let without = column().child_if(false, || text("x")).build();
        assert_eq!(with.children().len(), 1);
        assert!(without.children().is_empty());
    }

    #[test]
    fn test_style_setters() {
        let node = row()
            .width(Dimension::FULL)
            .height(70)
            .padding(Spacing::axes(0, 24))
            .gap(0)
            .align_items(AlignItems::Center)
            .build();
        assert_eq!(node.kind_name(), "row");
        assert_eq!(node.style.width, Some(Dimension::FULL));
        assert_eq!(node.style.height, Some(Dimension::Px(70.0)));
        assert_eq!(node.style.padding, Some(Spacing::axes(0, 24)));
        assert_eq!(node.style.gap, Some(Dimension::Px(0.0)));
        assert_eq!(node.style.align_items, Some(AlignItems::Center));
    }

    #[test]
    fn test_leaf_style_setters() {
        let node = text("Kryon")
            .font_size(28.0)
            .font_weight(FontWeight::Bold)
            .color(Color::WHITE);
        assert_eq!(node.text(), Some("Kryon"));
        assert_eq!(node.style.font_size, Some(28.0));
        assert_eq!(node.style.font_weight, Some(FontWeight::Bold));
    }

    #[test]
    fn test_external_link_target() {
        match external_link("https://github.com/kryonlabs", "GitHub").kind {
            NodeKind::Link(l) => assert_eq!(l.target, Some(LinkTarget::Blank)),
            other => panic!("expected link, got {:?}", other),
        }
        match link("/docs", "Docs").kind {
            NodeKind::Link(l) => assert_eq!(l.target, None),
            other => panic!("expected link, got {:?}", other),
        }
    }

    #[test]
    fn test_markdown_constructors() {
        let file = markdown_file("docs/intro.md", MarkdownTheme::Dark);
        let inline = markdown_source("# Hi", MarkdownTheme::Light);
        assert_eq!(file.kind_name(), "markdown");
        assert_eq!(inline.kind_name(), "markdown");
        assert_ne!(file, inline);
    }

    #[test]
    fn test_form_constructors() {
        let field = input(InputType::Email).width(240);
        match &field.kind {
            NodeKind::Input(i) => {
                assert_eq!(i.input_type, InputType::Email);
                assert!(i.value.is_none());
            }
            other => panic!("expected input, got {:?}", other),
        }
        assert_eq!(field.style.width, Some(Dimension::Px(240.0)));

        let node = row()
            .child(checkbox(true))
            .child(Checkbox::new(false).label("Subscribe"))
            .build();
        let kinds: Vec<_> = node.children().iter().map(Node::kind_name).collect();
        assert_eq!(kinds, vec!["checkbox", "checkbox"]);
        assert!(node.validate().is_ok());
    }

    #[test]
    fn test_empty_branch_is_valid() {
        let node = container().build();
        assert!(node.is_branch());
        assert!(node.children().is_empty());
        assert!(node.validate().is_ok());
    }
}
