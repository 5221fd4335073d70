//! # shieldsvg-color
//!
//! **Tier 0.5 (Utilities)**
//!
//! Decides whether badge text drawn over a background should be light or
//! dark, and derives the muted shadow tone drawn beneath it.
//!
//! ## What belongs here
//! * CSS color parsing for contrast purposes
//! * Brightness, text color and shadow color selection
//!
//! ## What does NOT belong here
//! * Emitting colors into markup (callers pass their own strings through)

#![forbid(unsafe_code)]

use color::{AlphaColor, Srgb};

/// Backgrounds brighter than this get dark text.
pub const BRIGHTNESS_THRESHOLD: f64 = 0.69;

/// Stand-in for colors that cannot be parsed.
pub const FALLBACK: Rgb = Rgb::new(0x80, 0x80, 0x80);

/// Darkening applied to light backgrounds to get their shadow tone.
pub const LIGHT_SHADOW_DARKEN: f64 = 0.2;

/// Darkening applied to dark backgrounds to get their shadow tone.
pub const DARK_SHADOW_DARKEN: f64 = 0.9;

/// An opaque sRGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Perceived brightness in `0.0..=1.0`, rounded to two decimals.
    #[must_use]
    pub fn brightness(self) -> f64 {
        let weighted = 0.299 * f64::from(self.r) + 0.587 * f64::from(self.g) + 0.114 * f64::from(self.b);
        (weighted / 255.0 * 100.0).round() / 100.0
    }

    /// Move every channel `fraction` of the way toward black.
    #[must_use]
    pub fn darken(self, fraction: f64) -> Self {
        let keep = (1.0 - fraction).clamp(0.0, 1.0);
        let scale = |c: u8| (f64::from(c) * keep).round() as u8;
        Self::new(scale(self.r), scale(self.g), scale(self.b))
    }

    /// `#rrggbb` form.
    #[must_use]
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Text color variant chosen for a background.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextColor {
    Light,
    Dark,
}

impl TextColor {
    /// Fill value emitted into markup.
    #[must_use]
    pub const fn as_fill(self) -> &'static str {
        match self {
            TextColor::Light => "#fff",
            TextColor::Dark => "#333",
        }
    }
}

/// Parse any CSS color string. Alpha is discarded.
#[must_use]
pub fn parse_css_color(input: &str) -> Option<Rgb> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }
    let parsed: AlphaColor<Srgb> = color::parse_color(trimmed).ok()?.to_alpha_color();
    let rgba = parsed.to_rgba8();
    Some(Rgb::new(rgba.r, rgba.g, rgba.b))
}

/// Parse `input`, substituting [`FALLBACK`] for anything unparseable.
#[must_use]
pub fn resolve(input: &str) -> Rgb {
    parse_css_color(input).unwrap_or_else(|| {
        tracing::debug!(color = input, "unparseable color, using mid-gray");
        FALLBACK
    })
}

/// Brightness of a CSS color string (mid-gray when unparseable).
#[must_use]
pub fn brightness(background: &str) -> f64 {
    resolve(background).brightness()
}

fn is_light(rgb: Rgb) -> bool {
    rgb.brightness() > BRIGHTNESS_THRESHOLD
}

/// Legible text color for `background`.
#[must_use]
pub fn text_color_for(background: &str) -> TextColor {
    if is_light(resolve(background)) {
        TextColor::Dark
    } else {
        TextColor::Light
    }
}

/// Shadow tone drawn under text on `background`, as `#rrggbb`.
#[must_use]
pub fn shadow_color_for(background: &str) -> String {
    let rgb = resolve(background);
    let fraction = if is_light(rgb) {
        LIGHT_SHADOW_DARKEN
    } else {
        DARK_SHADOW_DARKEN
    };
    rgb.darken(fraction).to_hex()
}
