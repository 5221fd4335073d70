//! # shieldsvg-metrics
//!
//! **Tier 0 (Static data)**
//!
//! Text measurement for badges without a font renderer. Widths come from a
//! static glyph-advance table for the default badge sans-serif (Verdana),
//! scaled linearly to the requested font size.
//!
//! ## What belongs here
//! * The glyph advance tables (normal and bold)
//! * Raw measurement (`measure`) and the pixel rounding rule (`preferred_width`)
//!
//! ## What does NOT belong here
//! * Badge geometry (see `shieldsvg`)
//! * Color handling (see `shieldsvg-color`)

#![forbid(unsafe_code)]

mod tables;

pub use tables::UNITS_PER_EM;

/// Weight class of the built-in metric set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FontWeight {
    #[default]
    Normal,
    Bold,
}

impl FontWeight {
    fn table(self) -> &'static [u16; tables::LEN] {
        match self {
            FontWeight::Normal => &tables::VERDANA,
            FontWeight::Bold => &tables::VERDANA_BOLD,
        }
    }
}

/// Glyph used for characters outside the table.
pub const FALLBACK_GLYPH: char = 'm';

/// Advance width of `ch` in design units, if the table covers it.
#[must_use]
pub fn glyph_advance(ch: char, weight: FontWeight) -> Option<u16> {
    let idx = (ch as u32).checked_sub(tables::FIRST)? as usize;
    weight.table().get(idx).copied()
}

/// Advance width of `ch`, falling back to [`FALLBACK_GLYPH`] for uncovered
/// characters.
#[must_use]
pub fn advance_or_fallback(ch: char, weight: FontWeight) -> u16 {
    glyph_advance(ch, weight)
        .or_else(|| glyph_advance(FALLBACK_GLYPH, weight))
        .unwrap_or(UNITS_PER_EM)
}

/// Measure `text` in pixels at `font_size` px.
///
/// Sums per-character advances and scales by `font_size / UNITS_PER_EM`.
/// Empty text measures 0.
#[must_use]
pub fn measure(text: &str, weight: FontWeight, font_size: f64) -> f64 {
    let units: u64 = text
        .chars()
        .map(|ch| u64::from(advance_or_fallback(ch, weight)))
        .sum();
    units as f64 * font_size / f64::from(UNITS_PER_EM)
}

/// Round a measured width the way badge boxes expect it.
///
/// The fractional part is dropped and even results are bumped to the next
/// odd integer, so text centred in an evenly padded box lands on the pixel
/// grid.
#[must_use]
pub fn round_up_to_odd(width: f64) -> u32 {
    let truncated = width.max(0.0) as u32;
    if truncated % 2 == 0 {
        truncated + 1
    } else {
        truncated
    }
}

/// Integer pixel width of `text` used for layout. Empty text is 0.
#[must_use]
pub fn preferred_width(text: &str, weight: FontWeight, font_size: f64) -> u32 {
    if text.is_empty() {
        return 0;
    }
    round_up_to_odd(measure(text, weight, font_size))
}
