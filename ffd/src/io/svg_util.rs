use std::fmt::{Display, Formatter};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

///Options for rendering packed pages to SVG
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize, Copy)]
pub struct SvgDrawOptions {
    ///The theme to use
    #[serde(default)]
    pub theme: SvgPageTheme,
    ///Print a summary label above each page
    #[serde(default)]
    pub draw_labels: bool,
}

impl Default for SvgDrawOptions {
    fn default() -> Self {
        Self {
            theme: SvgPageTheme::default(),
            draw_labels: true,
        }
    }
}

///Colors and sizing used when rendering pages
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize, Copy)]
pub struct SvgPageTheme {
    pub stroke_width_multiplier: f32,
    pub page_fill: Color,
    pub item_stroke: Color,
}

impl Default for SvgPageTheme {
    fn default() -> Self {
        Self {
            stroke_width_multiplier: 2.0,
            page_fill: Color(0x2D, 0x2D, 0x2D),
            item_stroke: Color(0x00, 0x00, 0x00),
        }
    }
}

/// Item fill colors, cycled in placement order.
pub const ITEM_PALETTE: [Color; 6] = [
    Color(0xFF, 0x77, 0x77),
    Color(0x77, 0xFF, 0x77),
    Color(0x77, 0x77, 0xFF),
    Color(0xFF, 0x77, 0xFF),
    Color(0xFF, 0xFF, 0x77),
    Color(0x77, 0xFF, 0xFF),
];

/// Shift all channels of `color` by `delta`, saturating at the bounds.
pub fn adjust_brightness(color: Color, delta: i16) -> Color {
    let adjust = |c: u8| (c as i16 + delta).clamp(0, 255) as u8;
    let Color(r, g, b) = color;
    Color(adjust(r), adjust(g), adjust(b))
}

#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Color(u8, u8, u8);

impl Display for Color {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }
}

impl From<String> for Color {
    fn from(mut s: String) -> Self {
        if s.starts_with('#') {
            s.remove(0);
        }
        let r = u8::from_str_radix(&s[0..2], 16).unwrap();
        let g = u8::from_str_radix(&s[2..4], 16).unwrap();
        let b = u8::from_str_radix(&s[4..6], 16).unwrap();
        Color(r, g, b)
    }
}

impl From<&str> for Color {
    fn from(s: &str) -> Self {
        Color::from(s.to_owned())
    }
}

impl Serialize for Color {
    fn serialize<S>(&self, serializer: S) -> Result<<S as Serializer>::Ok, <S as Serializer>::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format!("{self}"))
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, <D as Deserializer<'de>>::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Color::from(s))
    }
}
