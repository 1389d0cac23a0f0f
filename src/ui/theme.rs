//! Colour and spacing tables shared by the site pages.
//!
//! Defined once as constants and passed to composers by reference; nothing
//! here is ever mutated.

use crate::app::domain::{Border, Color, MarkdownTheme};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub bg: Color,
    pub primary_text: Color,
    pub secondary_text: Color,
    pub accent: Color,
    pub border: Color,
    pub card_bg: Color,
    pub sidebar: Color,
    pub white: Color,
}

/// Spacing steps in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpacingScale {
    pub xs: f32,
    pub sm: f32,
    pub md: f32,
    pub lg: f32,
    pub xl: f32,
    pub xxl: f32,
    pub xxxl: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
    pub palette: Palette,
    pub spacing: SpacingScale,
    pub markdown: MarkdownTheme,
}

impl Theme {
    /// One-pixel solid border in the palette's border colour.
    pub fn hairline(&self) -> Border {
        Border::solid(1.0, self.palette.border)
    }

    /// Vertical padding of a full-width page section.
    pub fn section_padding(&self) -> f32 {
        self.spacing.xxxl * 2.0
    }
}

pub const SPACING: SpacingScale = SpacingScale {
    xs: 4.0,
    sm: 8.0,
    md: 16.0,
    lg: 24.0,
    xl: 32.0,
    xxl: 48.0,
    xxxl: 60.0,
};

const DARK: Palette = Palette {
    bg: Color::hex(0x0D1117),
    primary_text: Color::hex(0xE6EDF3),
    secondary_text: Color::hex(0x8B949E),
    accent: Color::hex(0x00A8FF),
    border: Color::hex(0x30363D),
    card_bg: Color::hex(0x161B22),
    sidebar: Color::hex(0x161B22),
    white: Color::WHITE,
};

/// Landing page and demos.
pub const LANDING: Theme = Theme {
    palette: DARK,
    spacing: SPACING,
    markdown: MarkdownTheme::Dark,
};

/// Documentation pages use a softer accent.
pub const DOCS: Theme = Theme {
    palette: Palette { accent: Color::hex(0x58A6FF), ..DARK },
    spacing: SPACING,
    markdown: MarkdownTheme::Dark,
};
