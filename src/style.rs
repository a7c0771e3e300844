//! Style mappings: property name → value, merged by override precedence.
//!
//! Pure data. Composition is an explicit ordered merge (defaults first,
//! overrides second) so the override always wins on a shared key.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};
use thiserror::Error;

// ============================================================================
// PROPERTIES AND VALUES
// ============================================================================

/// A style property name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum StyleProp {
    Flex,
    JustifyContent,
    AlignItems,
    BackgroundColor,
    Padding,
    Color,
    FontSize,
    FontWeight,
}

impl StyleProp {
    /// The camelCase name used in outlines and JSON.
    pub fn name(self) -> &'static str {
        match self {
            StyleProp::Flex => "flex",
            StyleProp::JustifyContent => "justifyContent",
            StyleProp::AlignItems => "alignItems",
            StyleProp::BackgroundColor => "backgroundColor",
            StyleProp::Padding => "padding",
            StyleProp::Color => "color",
            StyleProp::FontSize => "fontSize",
            StyleProp::FontWeight => "fontWeight",
        }
    }
}

/// A color value, either named or `#rrggbb`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Black,
    White,
    Blue,
    Red,
    Green,
    Rgb(u8, u8, u8),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseColorError {
    #[error("unknown color '{0}' (expected black, white, blue, red, green or #rrggbb)")]
    Unknown(String),

    #[error("invalid hex color '{0}'")]
    InvalidHex(String),
}

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Some(hex) = trimmed.strip_prefix('#') {
            return parse_hex(hex).ok_or_else(|| ParseColorError::InvalidHex(s.to_string()));
        }
        match trimmed.to_ascii_lowercase().as_str() {
            "black" => Ok(Color::Black),
            "white" => Ok(Color::White),
            "blue" => Ok(Color::Blue),
            "red" => Ok(Color::Red),
            "green" => Ok(Color::Green),
            _ => Err(ParseColorError::Unknown(s.to_string())),
        }
    }
}

fn parse_hex(hex: &str) -> Option<Color> {
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    Some(Color::Rgb(channel(0)?, channel(2)?, channel(4)?))
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Black => f.write_str("black"),
            Color::White => f.write_str("white"),
            Color::Blue => f.write_str("blue"),
            Color::Red => f.write_str("red"),
            Color::Green => f.write_str("green"),
            Color::Rgb(r, g, b) => write!(f, "#{:02x}{:02x}{:02x}", r, g, b),
        }
    }
}

impl Serialize for Color {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    Normal,
    Bold,
}

/// Main/cross axis alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Align {
    FlexStart,
    Center,
    FlexEnd,
}

/// A style property value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum StyleValue {
    /// Points (font size, padding, flex factor).
    Number(u16),
    Color(Color),
    Weight(FontWeight),
    Align(Align),
}

impl fmt::Display for StyleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StyleValue::Number(n) => write!(f, "{}", n),
            StyleValue::Color(c) => write!(f, "{}", c),
            StyleValue::Weight(FontWeight::Normal) => f.write_str("normal"),
            StyleValue::Weight(FontWeight::Bold) => f.write_str("bold"),
            StyleValue::Align(Align::FlexStart) => f.write_str("flex-start"),
            StyleValue::Align(Align::Center) => f.write_str("center"),
            StyleValue::Align(Align::FlexEnd) => f.write_str("flex-end"),
        }
    }
}

// ============================================================================
// STYLE MAPPING
// ============================================================================

/// An immutable-by-convention mapping of style properties to values.
///
/// Keys iterate in a fixed order, so outlines and JSON are stable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Style(BTreeMap<StyleProp, StyleValue>);

impl Style {
    pub fn new() -> Self {
        Style(BTreeMap::new())
    }

    /// Builder: set `prop` to `value`, replacing any previous value.
    pub fn with(mut self, prop: StyleProp, value: StyleValue) -> Self {
        self.0.insert(prop, value);
        self
    }

    pub fn color(self, color: Color) -> Self {
        self.with(StyleProp::Color, StyleValue::Color(color))
    }

    pub fn background(self, color: Color) -> Self {
        self.with(StyleProp::BackgroundColor, StyleValue::Color(color))
    }

    pub fn font_size(self, points: u16) -> Self {
        self.with(StyleProp::FontSize, StyleValue::Number(points))
    }

    pub fn font_weight(self, weight: FontWeight) -> Self {
        self.with(StyleProp::FontWeight, StyleValue::Weight(weight))
    }

    pub fn align_items(self, align: Align) -> Self {
        self.with(StyleProp::AlignItems, StyleValue::Align(align))
    }

    pub fn justify_content(self, align: Align) -> Self {
        self.with(StyleProp::JustifyContent, StyleValue::Align(align))
    }

    pub fn padding(self, points: u16) -> Self {
        self.with(StyleProp::Padding, StyleValue::Number(points))
    }

    pub fn flex(self, factor: u16) -> Self {
        self.with(StyleProp::Flex, StyleValue::Number(factor))
    }

    /// Ordered merge: start from `self`, then apply every entry of
    /// `overrides`. On a shared key the override's value is kept.
    pub fn merge(&self, overrides: &Style) -> Style {
        let mut merged = self.0.clone();
        for (prop, value) in &overrides.0 {
            merged.insert(*prop, *value);
        }
        Style(merged)
    }

    pub fn get(&self, prop: StyleProp) -> Option<StyleValue> {
        self.0.get(&prop).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (StyleProp, StyleValue)> + '_ {
        self.0.iter().map(|(p, v)| (*p, *v))
    }

    // Typed accessors. A value of the wrong kind reads as unset.

    pub fn color_value(&self) -> Option<Color> {
        match self.get(StyleProp::Color) {
            Some(StyleValue::Color(c)) => Some(c),
            _ => None,
        }
    }

    pub fn background_value(&self) -> Option<Color> {
        match self.get(StyleProp::BackgroundColor) {
            Some(StyleValue::Color(c)) => Some(c),
            _ => None,
        }
    }

    pub fn font_size_value(&self) -> Option<u16> {
        match self.get(StyleProp::FontSize) {
            Some(StyleValue::Number(n)) => Some(n),
            _ => None,
        }
    }

    pub fn font_weight_value(&self) -> Option<FontWeight> {
        match self.get(StyleProp::FontWeight) {
            Some(StyleValue::Weight(w)) => Some(w),
            _ => None,
        }
    }

    pub fn align_items_value(&self) -> Option<Align> {
        match self.get(StyleProp::AlignItems) {
            Some(StyleValue::Align(a)) => Some(a),
            _ => None,
        }
    }

    pub fn justify_content_value(&self) -> Option<Align> {
        match self.get(StyleProp::JustifyContent) {
            Some(StyleValue::Align(a)) => Some(a),
            _ => None,
        }
    }

    pub fn padding_value(&self) -> Option<u16> {
        match self.get(StyleProp::Padding) {
            Some(StyleValue::Number(n)) => Some(n),
            _ => None,
        }
    }
}

/// `{color: blue, fontSize: 24}` outline form.
impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (prop, value)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}: {}", prop.name(), value)?;
        }
        f.write_str("}")
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_override_wins_on_shared_key() {
        let defaults = Style::new().font_size(24).color(Color::Black);
        let overrides = Style::new().color(Color::Red);
        let merged = defaults.merge(&overrides);
        assert_eq!(merged.color_value(), Some(Color::Red));
        assert_eq!(merged.font_size_value(), Some(24));
    }

    #[test]
    fn merge_keeps_keys_from_both_sides() {
        let defaults = Style::new().font_weight(FontWeight::Bold);
        let overrides = Style::new().color(Color::Blue);
        let merged = defaults.merge(&overrides);
        assert_eq!(merged.font_weight_value(), Some(FontWeight::Bold));
        assert_eq!(merged.color_value(), Some(Color::Blue));
    }

    #[test]
    fn merge_with_empty_override_is_identity() {
        let defaults = Style::new().font_size(24).font_weight(FontWeight::Bold);
        assert_eq!(defaults.merge(&Style::new()), defaults);
    }

    #[test]
    fn merge_does_not_mutate_inputs() {
        let defaults = Style::new().color(Color::Black);
        let overrides = Style::new().color(Color::Red);
        let _ = defaults.merge(&overrides);
        assert_eq!(defaults.color_value(), Some(Color::Black));
    }

    #[test]
    fn parse_named_colors_case_insensitively() {
        assert_eq!("blue".parse::<Color>(), Ok(Color::Blue));
        assert_eq!("RED".parse::<Color>(), Ok(Color::Red));
        assert_eq!(" green ".parse::<Color>(), Ok(Color::Green));
    }

    #[test]
    fn parse_hex_color() {
        assert_eq!("#f0f0f0".parse::<Color>(), Ok(Color::Rgb(0xf0, 0xf0, 0xf0)));
    }

    #[test]
    fn parse_rejects_unknown_and_bad_hex() {
        assert!(matches!("mauve".parse::<Color>(), Err(ParseColorError::Unknown(_))));
        assert!(matches!("#12345".parse::<Color>(), Err(ParseColorError::InvalidHex(_))));
        assert!(matches!("#zzzzzz".parse::<Color>(), Err(ParseColorError::InvalidHex(_))));
    }

    #[test]
    fn display_outline_is_ordered() {
        let style = Style::new()
            .font_weight(FontWeight::Bold)
            .font_size(24)
            .color(Color::Blue);
        assert_eq!(style.to_string(), "{color: blue, fontSize: 24, fontWeight: bold}");
    }

    #[test]
    fn serializes_as_camel_case_map() {
        let style = Style::new()
            .background(Color::Rgb(0xf0, 0xf0, 0xf0))
            .align_items(Align::Center);
        let json = serde_json::to_string(&style).unwrap();
        assert_eq!(json, r##"{"alignItems":"center","backgroundColor":"#f0f0f0"}"##);
    }

    #[test]
    fn wrong_kind_reads_as_unset() {
        let style = Style::new().with(StyleProp::Color, StyleValue::Number(3));
        assert_eq!(style.color_value(), None);
    }
}
