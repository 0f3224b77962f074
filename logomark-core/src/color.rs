//! Hex colors and the `rgba(...)` form used by gradients and core-mark layers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ColorError {
    #[error("expected a #RRGGBB color, got {0:?}")]
    Format(String),
    #[error("invalid hex digits in color {0:?}")]
    Digits(String),
}

/// An opaque sRGB color parsed from a `#RRGGBB` triplet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self { Self { r, g, b } }

    /// Build from a packed `0xRRGGBB` literal.
    pub const fn from_hex(packed: u32) -> Self {
        Self { r: (packed >> 16) as u8, g: (packed >> 8) as u8, b: packed as u8 }
    }

    pub fn with_alpha(self, alpha: f64) -> Rgba { Rgba { rgb: self, alpha } }

    pub fn to_array(self) -> [u8; 3] { [self.r, self.g, self.b] }
}

impl FromStr for Rgb {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let clean = s.trim().trim_start_matches('#');
        if clean.len() != 6 || !clean.is_ascii() {
            return Err(ColorError::Format(s.to_string()));
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&clean[range], 16).map_err(|_| ColorError::Digits(s.to_string()))
        };
        Ok(Self { r: channel(0..2)?, g: channel(2..4)?, b: channel(4..6)? })
    }
}

impl TryFrom<String> for Rgb {
    type Error = ColorError;
    fn try_from(value: String) -> Result<Self, Self::Error> { value.parse() }
}

impl From<Rgb> for String {
    fn from(value: Rgb) -> Self { value.to_string() }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// A color paired with a normalized alpha. The alpha is kept at full
/// precision; `Display` emits it with two decimals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub rgb: Rgb,
    pub alpha: f64,
}

impl Rgba {
    /// Straight RGBA8, alpha rounded from the stored value.
    pub fn to_rgba8(self) -> [u8; 4] {
        let a = (self.alpha.clamp(0.0, 1.0) * 255.0).round() as u8;
        [self.rgb.r, self.rgb.g, self.rgb.b, a]
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({}, {}, {}, {:.2})", self.rgb.r, self.rgb.g, self.rgb.b, self.alpha)
    }
}

/// First `#RRGGBB`, `rgb(...)` or `rgba(...)` color in a CSS value such as
/// a palette background. Short `#RGB` forms are not recognized.
pub fn first_css_color(css: &str) -> Option<Rgba> {
    let hash = css.find('#');
    let func = css.find("rgb");
    match (hash, func) {
        (Some(h), f) if f.map_or(true, |f| h < f) => {
            let rgb: Rgb = css.get(h..h + 7)?.parse().ok()?;
            Some(rgb.with_alpha(1.0))
        }
        (_, Some(f)) => {
            let open = f + css[f..].find('(')?;
            let close = open + css[open..].find(')')?;
            let parts: Vec<&str> = css[open + 1..close].split(',').map(str::trim).collect();
            if !(3..=4).contains(&parts.len()) {
                return None;
            }
            let channel = |i: usize| parts[i].parse::<u8>().ok();
            let alpha = match parts.get(3) {
                Some(a) => a.parse::<f64>().ok()?,
                None => 1.0,
            };
            Some(Rgb::new(channel(0)?, channel(1)?, channel(2)?).with_alpha(alpha))
        }
        _ => None,
    }
}
