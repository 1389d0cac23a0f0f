//! Presentation attributes carried by every node.
//!
//! Each attribute is independently optional and passed through to the renderer
//! untouched. Values serialize to the same shapes the binding library accepts:
//! numbers for pixel lengths, strings for everything else.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::app::infrastructure::error::AppError;

/// Wire shape shared by values that may be written as a number or a string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ValueRepr {
    Number(f64),
    Text(String),
}

fn invalid(value: &str) -> AppError {
    AppError::InvalidStyle(value.to_string())
}

/// A pixel count that still fits in an `f32`.
fn finite_px(n: f64) -> Result<f32, AppError> {
    let px = n as f32;
    if px.is_finite() { Ok(px) } else { Err(invalid(&n.to_string())) }
}

/// A length: pixels, percent of the parent, or viewport units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ValueRepr", into = "ValueRepr")]
pub enum Dimension {
    Px(f32),
    Percent(f32),
    Vh(f32),
    Vw(f32),
    Auto,
}

impl Dimension {
    pub const FULL: Dimension = Dimension::Percent(100.0);
    pub const FULL_VIEWPORT_HEIGHT: Dimension = Dimension::Vh(100.0);
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Px(v) => write!(f, "{}px", v),
            Self::Percent(v) => write!(f, "{}%", v),
            Self::Vh(v) => write!(f, "{}vh", v),
            Self::Vw(v) => write!(f, "{}vw", v),
            Self::Auto => f.write_str("auto"),
        }
    }
}

impl FromStr for Dimension {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("auto") {
            return Ok(Self::Auto);
        }

        let (number, ctor): (&str, fn(f32) -> Self) = if let Some(n) = s.strip_suffix('%') {
            (n, Self::Percent)
        } else if let Some(n) = s.strip_suffix("vh") {
            (n, Self::Vh)
        } else if let Some(n) = s.strip_suffix("vw") {
            (n, Self::Vw)
        } else if let Some(n) = s.strip_suffix("px") {
            (n, Self::Px)
        } else {
            (s, Self::Px)
        };

        number
            .trim()
            .parse::<f32>()
            .ok()
            .filter(|v| v.is_finite())
            .map(ctor)
            .ok_or_else(|| invalid(s))
    }
}

impl TryFrom<ValueRepr> for Dimension {
    type Error = AppError;

    fn try_from(repr: ValueRepr) -> Result<Self, Self::Error> {
        match repr {
            ValueRepr::Number(n) => finite_px(n).map(Self::Px),
            ValueRepr::Text(s) => s.parse(),
        }
    }
}

impl From<Dimension> for ValueRepr {
    fn from(dim: Dimension) -> Self {
        match dim {
            Dimension::Px(v) => ValueRepr::Number(f64::from(v)),
            other => ValueRepr::Text(other.to_string()),
        }
    }
}

impl From<i32> for Dimension {
    fn from(px: i32) -> Self {
        Self::Px(px as f32)
    }
}

impl From<u32> for Dimension {
    fn from(px: u32) -> Self {
        Self::Px(px as f32)
    }
}

impl From<f32> for Dimension {
    fn from(px: f32) -> Self {
        Self::Px(px)
    }
}

/// Padding or margin on four sides, written as a CSS shorthand.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ValueRepr", into = "ValueRepr")]
pub struct Spacing {
    pub top: Dimension,
    pub right: Dimension,
    pub bottom: Dimension,
    pub left: Dimension,
}

impl Spacing {
    pub fn new(
        top: impl Into<Dimension>,
        right: impl Into<Dimension>,
        bottom: impl Into<Dimension>,
        left: impl Into<Dimension>,
    ) -> Self {
        Self {
            top: top.into(),
            right: right.into(),
            bottom: bottom.into(),
            left: left.into(),
        }
    }

    pub fn all(value: impl Into<Dimension>) -> Self {
        let v = value.into();
        Self { top: v, right: v, bottom: v, left: v }
    }

    /// `vertical horizontal`, e.g. `Spacing::axes(0, 24)` for `"0 24px"`.
    pub fn axes(vertical: impl Into<Dimension>, horizontal: impl Into<Dimension>) -> Self {
        let (v, h) = (vertical.into(), horizontal.into());
        Self { top: v, right: h, bottom: v, left: h }
    }

    fn is_uniform(&self) -> bool {
        self.top == self.right && self.top == self.bottom && self.top == self.left
    }
}

impl fmt::Display for Spacing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_uniform() {
            write!(f, "{}", self.top)
        } else if self.top == self.bottom && self.left == self.right {
            write!(f, "{} {}", self.top, self.right)
        } else if self.left == self.right {
            write!(f, "{} {} {}", self.top, self.right, self.bottom)
        } else {
            write!(f, "{} {} {} {}", self.top, self.right, self.bottom, self.left)
        }
    }
}

impl FromStr for Spacing {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts = s
            .split_whitespace()
            .map(str::parse::<Dimension>)
            .collect::<Result<Vec<_>, _>>()?;

        match parts.as_slice() {
            [all] => Ok(Self::all(*all)),
            [v, h] => Ok(Self::axes(*v, *h)),
            [t, h, b] => Ok(Self::new(*t, *h, *b, *h)),
            [t, r, b, l] => Ok(Self::new(*t, *r, *b, *l)),
            _ => Err(invalid(s)),
        }
    }
}

impl TryFrom<ValueRepr> for Spacing {
    type Error = AppError;

    fn try_from(repr: ValueRepr) -> Result<Self, Self::Error> {
        match repr {
            ValueRepr::Number(n) => finite_px(n).map(Self::all),
            ValueRepr::Text(s) => s.parse(),
        }
    }
}

impl From<Spacing> for ValueRepr {
    fn from(spacing: Spacing) -> Self {
        match spacing.top {
            Dimension::Px(v) if spacing.is_uniform() => ValueRepr::Number(f64::from(v)),
            _ => ValueRepr::Text(spacing.to_string()),
        }
    }
}

impl From<Dimension> for Spacing {
    fn from(value: Dimension) -> Self {
        Self::all(value)
    }
}

impl From<i32> for Spacing {
    fn from(px: i32) -> Self {
        Self::all(px)
    }
}

impl From<f32> for Spacing {
    fn from(px: f32) -> Self {
        Self::all(px)
    }
}

/// An sRGB colour, optionally with alpha.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Color {
    Rgb(u8, u8, u8),
    Rgba(u8, u8, u8, u8),
    Transparent,
}

impl Color {
    pub const WHITE: Color = Color::Rgb(0xFF, 0xFF, 0xFF);

    /// Colour from a `0xRRGGBB` literal.
    pub const fn hex(rgb: u32) -> Self {
        Self::Rgb((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rgb(r, g, b) => write!(f, "#{:02X}{:02X}{:02X}", r, g, b),
            Self::Rgba(r, g, b, a) => write!(f, "#{:02X}{:02X}{:02X}{:02X}", r, g, b, a),
            Self::Transparent => f.write_str("transparent"),
        }
    }
}

impl FromStr for Color {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("transparent") {
            return Ok(Self::Transparent);
        }

        let digits = s.strip_prefix('#').ok_or_else(|| invalid(s))?;
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid(s));
        }
        let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| invalid(s));
        // #RGB expands each nibble, so #FFF is #FFFFFF
        let short = |i: usize| {
            u8::from_str_radix(&digits[i..i + 1], 16)
                .map(|n| n * 0x11)
                .map_err(|_| invalid(s))
        };

        match digits.len() {
            3 => Ok(Self::Rgb(short(0)?, short(1)?, short(2)?)),
            6 => Ok(Self::Rgb(channel(0)?, channel(2)?, channel(4)?)),
            8 => Ok(Self::Rgba(channel(0)?, channel(2)?, channel(4)?, channel(6)?)),
            _ => Err(invalid(s)),
        }
    }
}

impl TryFrom<String> for Color {
    type Error = AppError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BorderStyle {
    Solid,
    Dashed,
    Dotted,
    None,
}

impl BorderStyle {
    fn as_str(&self) -> &'static str {
        match self {
            Self::Solid => "solid",
            Self::Dashed => "dashed",
            Self::Dotted => "dotted",
            Self::None => "none",
        }
    }
}

/// A border shorthand such as `1px solid #30363D`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Border {
    pub width: f32,
    pub style: BorderStyle,
    pub color: Color,
}

impl Border {
    pub fn solid(width: f32, color: Color) -> Self {
        Self { width, style: BorderStyle::Solid, color }
    }
}

impl fmt::Display for Border {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}px {} {}", self.width, self.style.as_str(), self.color)
    }
}

impl FromStr for Border {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split_whitespace();
        let (Some(width), Some(style), Some(color), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(invalid(s));
        };

        let width = match width.parse::<Dimension>()? {
            Dimension::Px(w) => w,
            _ => return Err(invalid(s)),
        };
        let style = match style {
            "solid" => BorderStyle::Solid,
            "dashed" => BorderStyle::Dashed,
            "dotted" => BorderStyle::Dotted,
            "none" => BorderStyle::None,
            _ => return Err(invalid(s)),
        };

        Ok(Self { width, style, color: color.parse()? })
    }
}

impl TryFrom<String> for Border {
    type Error = AppError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Border> for String {
    fn from(border: Border) -> Self {
        border.to_string()
    }
}

/// `normal`, `bold`, or a numeric weight written as a string (`"600"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ValueRepr", into = "ValueRepr")]
pub enum FontWeight {
    Normal,
    Bold,
    Weight(u16),
}

impl fmt::Display for FontWeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Normal => f.write_str("normal"),
            Self::Bold => f.write_str("bold"),
            Self::Weight(w) => write!(f, "{}", w),
        }
    }
}

impl FromStr for FontWeight {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "normal" => Ok(Self::Normal),
            "bold" => Ok(Self::Bold),
            other => other
                .parse::<u16>()
                .ok()
                .filter(|w| (1..=1000).contains(w))
                .map(Self::Weight)
                .ok_or_else(|| invalid(s)),
        }
    }
}

impl TryFrom<ValueRepr> for FontWeight {
    type Error = AppError;

    fn try_from(repr: ValueRepr) -> Result<Self, Self::Error> {
        match repr {
            ValueRepr::Number(n) => n.to_string().parse(),
            ValueRepr::Text(s) => s.parse(),
        }
    }
}

impl From<FontWeight> for ValueRepr {
    fn from(weight: FontWeight) -> Self {
        ValueRepr::Text(weight.to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum JustifyContent {
    FlexStart,
    FlexEnd,
    Center,
    SpaceBetween,
    SpaceAround,
    SpaceEvenly,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AlignItems {
    FlexStart,
    FlexEnd,
    Center,
    Stretch,
    Baseline,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FlexDirection {
    Row,
    Column,
    RowReverse,
    ColumnReverse,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Overflow {
    Visible,
    Hidden,
    Scroll,
    Auto,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    Left,
    Center,
    Right,
    Justify,
}

/// Presentation attributes of a node. Unset fields take the renderer's default.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StyleProps {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<Dimension>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<Dimension>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_width: Option<Dimension>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_width: Option<Dimension>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_height: Option<Dimension>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_height: Option<Dimension>,
    /// Width at which text wraps onto the next line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_text_width: Option<Dimension>,

    #[serde(skip_serializing_if = "Option::is_none", alias = "backgroundColor")]
    pub background: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding: Option<Spacing>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin: Option<Spacing>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin_top: Option<Dimension>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin_bottom: Option<Dimension>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin_left: Option<Dimension>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin_right: Option<Dimension>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub border: Option<Border>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_top: Option<Border>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_bottom: Option<Border>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_left: Option<Border>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_right: Option<Border>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<Dimension>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub gap: Option<Dimension>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<FontWeight>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_height: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none", alias = "textAlignment")]
    pub text_align: Option<TextAlign>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub justify_content: Option<JustifyContent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub align_items: Option<AlignItems>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flex_direction: Option<FlexDirection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flex_grow: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flex_shrink: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flex_basis: Option<Dimension>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overflow: Option<Overflow>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub z_index: Option<i32>,
}

impl StyleProps {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
