//! Before/after demo of feature-card text wrapping (`text-wrapping-demo`).
//!
//! Without a width cap a card grows to fit its longest line. Capping the card
//! with `maxWidth` and the text with `maxTextWidth` (card width minus both
//! paddings) makes the text wrap at word boundaries.

use crate::app::domain::{AppConfig, Dimension, FontWeight, Node, WindowConfig};
use crate::app::infrastructure::error::Result;
use crate::app::services::compose::{Branch, Styled, column, container, row, text};

use super::theme::{LANDING, Theme};

pub const TITLE: &str = "Text Wrapping Demo - Before & After";

const CARD_PADDING: f32 = 32.0;
const CARD_MAX_WIDTH: f32 = 428.0;

/// Widest a line of text may get inside a capped card.
pub fn max_text_width(card_width: f32, padding: f32) -> f32 {
    card_width - padding * 2.0
}

const CARDS: &[(&str, &str)] = &[
    (
        "Multiple Backends",
        "Target SDL3 desktop (Windows, macOS, Linux), terminal TUI, or static web (HTML+CSS). Same IR, different renderers - your app adapts to each platform natively.",
    ),
    (
        "Compact IR Format",
        "The .kir JSON format is human-readable for debugging. The .kirb binary format is optimized for production - smaller files, faster parsing, instant loading.",
    ),
];

fn card_frame(t: &Theme) -> Branch {
    container()
        .background(t.palette.card_bg)
        .border(t.hairline())
        .border_radius(10)
        .padding(CARD_PADDING)
}

pub fn broken_card(t: &Theme, title: &str, description: &str) -> Node {
    card_frame(t)
        .child(
            text(title)
                .font_size(24.0)
                .font_weight(FontWeight::Bold)
                .color(t.palette.primary_text)
                .margin_bottom(16),
        )
        .child(text(description).font_size(16.0).color(t.palette.secondary_text))
        .build()
}

pub fn fixed_card(t: &Theme, title: &str, description: &str) -> Node {
    let wrap = max_text_width(CARD_MAX_WIDTH, CARD_PADDING);

    card_frame(t)
        .max_width(CARD_MAX_WIDTH)
        .width(Dimension::FULL)
        .child(
            text(title)
                .font_size(24.0)
                .font_weight(FontWeight::Bold)
                .color(t.palette.primary_text)
                .margin_bottom(16)
                .max_text_width(wrap),
        )
        .child(
            text(description)
                .font_size(16.0)
                .color(t.palette.secondary_text)
                .max_text_width(wrap),
        )
        .build()
}

fn heading(t: &Theme, title: &str) -> Node {
    text(title)
        .font_size(32.0)
        .font_weight(FontWeight::Bold)
        .color(t.palette.primary_text)
}

fn caption(t: &Theme, body: &str) -> Node {
    text(body)
        .font_size(14.0)
        .color(t.palette.secondary_text)
        .margin_bottom(20)
}

fn summary(t: &Theme) -> Node {
    let step = |body: &str| text(body).font_size(16.0).color(t.palette.secondary_text);

    card_frame(t)
        .margin_top(48)
        .child(
            text("💡 Solution")
                .font_size(24.0)
                .font_weight(FontWeight::Bold)
                .color(t.palette.primary_text)
                .margin_bottom(16),
        )
        .child(step("1. Add maxWidth to Container (e.g., maxWidth={428})").margin_bottom(8))
        .child(step("2. Add maxTextWidth to Text components for wrapping").margin_bottom(8))
        .child(step("3. Calculate maxTextWidth = containerMaxWidth - (padding * 2)"))
        .build()
}

pub fn app() -> Result<AppConfig> {
    let t = &LANDING;
    let window = WindowConfig::new()
        .title(TITLE)
        .size(1000, 900)
        .background(t.palette.bg);

    AppConfig::new(window, || {
        column()
            .width(Dimension::FULL)
            .padding(48)
            .gap(48)
            .child(heading(t, "❌ BROKEN: No max-width constraints"))
            .child(caption(
                t,
                "Notice how the cards become very wide to fit the long text on a single line.",
            ))
            .child(
                row()
                    .gap(48)
                    .children(CARDS.iter().map(|(title, desc)| broken_card(t, title, desc))),
            )
            .child(heading(t, "✅ FIXED: With max-width and text wrapping").margin_top(48))
            .child(caption(
                t,
                "Cards now have equal width and text wraps naturally at word boundaries.",
            ))
            .child(
                row()
                    .gap(48)
                    .children(CARDS.iter().map(|(title, desc)| fixed_card(t, title, desc))),
            )
            .child(summary(t))
            .build()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max_text_width() {
        assert_eq!(max_text_width(428.0, 32.0), 364.0);
    }

    #[test]
    fn test_fixed_card_caps_widths() {
        let card = fixed_card(&LANDING, "T", "D");
        assert_eq!(card.style.max_width, Some(Dimension::Px(428.0)));
        for child in card.children() {
            assert_eq!(child.style.max_text_width, Some(Dimension::Px(364.0)));
        }
    }

    #[test]
    fn test_broken_card_has_no_caps() {
        let card = broken_card(&LANDING, "T", "D");
        assert!(card.style.max_width.is_none());
        assert!(card.children().iter().all(|c| c.style.max_text_width.is_none()));
    }

    #[test]
    fn test_app_layout() {
        let app = app().unwrap();
        assert_eq!(app.window().width, Some(1000));
        let kinds: Vec<_> = app.root().children().iter().map(Node::kind_name).collect();
        assert_eq!(
            kinds,
            vec!["text", "text", "row", "text", "text", "row", "container"]
        );
    }
}
