//! Colour schemes and escape-sequence styling.
//!
//! A [`ColorScheme`] is passed explicitly to whatever renders with it; there is
//! no process-wide "current theme". Styling goes through `crossterm::style` so
//! the emitted sequences are the ones the terminal backend already speaks.

use crossterm::style::{Attribute, Color, ContentStyle};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StyleError {
    #[error("invalid colour `{0}`: expected `#rrggbb`")]
    InvalidColor(String),
}

/// Parse `#rrggbb` (leading `#` optional) into an RGB colour.
pub fn parse_hex(raw: &str) -> Result<Color, StyleError> {
    let digits = raw.trim().trim_start_matches('#');
    if digits.len() != 6 || !digits.is_ascii() {
        return Err(StyleError::InvalidColor(raw.to_string()));
    }
    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&digits[range], 16)
            .map_err(|_| StyleError::InvalidColor(raw.to_string()))
    };
    Ok(Color::Rgb {
        r: channel(0..2)?,
        g: channel(2..4)?,
        b: channel(4..6)?,
    })
}

/// Colours used by panels and frames. `None` leaves the terminal default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorScheme {
    #[serde(with = "hex_color")]
    pub border: Option<Color>,
    #[serde(with = "hex_color")]
    pub focused_border: Option<Color>,
    #[serde(with = "hex_color")]
    pub title: Option<Color>,
    #[serde(with = "hex_color")]
    pub background: Option<Color>,
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self {
            border: Some(Color::Rgb {
                r: 0xD4,
                g: 0xC9,
                b: 0xB5,
            }),
            focused_border: Some(Color::Rgb {
                r: 0x2D,
                g: 0x5A,
                b: 0x7B,
            }),
            title: Some(Color::Rgb {
                r: 0x3D,
                g: 0x34,
                b: 0x28,
            }),
            background: Some(Color::Rgb {
                r: 0xF5,
                g: 0xF0,
                b: 0xE6,
            }),
        }
    }
}

impl ColorScheme {
    /// Scheme that emits no colour sequences at all.
    pub const fn monochrome() -> Self {
        Self {
            border: None,
            focused_border: None,
            title: None,
            background: None,
        }
    }

    /// Load a scheme from JSON, e.g. `{"border": "#d4c9b5", "title": null}`.
    /// Missing keys fall back to [`ColorScheme::default`].
    pub fn from_json(raw: &str) -> serde_json::Result<Self> {
        serde_json::from_str(raw)
    }

    pub fn border_style(&self, focused: bool) -> ContentStyle {
        let color = if focused {
            self.focused_border
        } else {
            self.border
        };
        foreground(color)
    }

    pub fn title_style(&self) -> ContentStyle {
        let mut style = foreground(self.title);
        style.attributes.set(Attribute::Bold);
        style
    }

    pub fn background_style(&self) -> ContentStyle {
        ContentStyle {
            background_color: self.background,
            ..ContentStyle::new()
        }
    }
}

fn foreground(color: Option<Color>) -> ContentStyle {
    ContentStyle {
        foreground_color: color,
        ..ContentStyle::new()
    }
}

/// Wrap `text` in the escape sequences for `style`.
///
/// Unstyled or empty input is returned untouched so monochrome output stays
/// free of escapes.
pub fn paint(style: ContentStyle, text: &str) -> String {
    let plain = style.foreground_color.is_none()
        && style.background_color.is_none()
        && style.underline_color.is_none()
        && style.attributes.is_empty();
    if plain || text.is_empty() {
        return text.to_string();
    }
    style.apply(text).to_string()
}

mod hex_color {
    use crossterm::style::Color;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(color: &Option<Color>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match color {
            Some(Color::Rgb { r, g, b }) => {
                serializer.serialize_str(&format!("#{r:02x}{g:02x}{b:02x}"))
            }
            _ => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Color>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?;
        match raw.as_deref().map(str::trim) {
            None | Some("") | Some("none") => Ok(None),
            Some(hex) => super::parse_hex(hex)
                .map(Some)
                .map_err(serde::de::Error::custom),
        }
    }
}
