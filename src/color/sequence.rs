//! Color sequence table shared by every animation
//!
//! A sequence is a fixed, ordered list of colors running from the brightest
//! entry down to black. Animations address it by index, either forward or
//! mirrored (`len - 1 - i`).

use super::{BLACK, Rgb, rgb_from_u32};

/// Create a color table from a list of hex colors (0xRRGGBB format)
macro_rules! hex_sequence {
    ($($color:expr),* $(,)?) => {
        [
            $(rgb_from_u32($color)),*
        ]
    };
}

const EMBER_LEN: usize = 16;

// Warm-to-black gradient: white-hot, amber, red, ember, then dark tail
#[allow(clippy::unreadable_literal)]
const EMBER_COLORS: [Rgb; EMBER_LEN] = hex_sequence![
    0xFFF0C0, // White-hot
    0xFFD060, // Pale yellow
    0xFFA020, // Amber
    0xFF7800, // Orange
    0xF05000, // Deep orange
    0xD03000, // Red-orange
    0xA81800, // Red
    0x800C00, // Dark red
    0x580600, // Ember
    0x300200, // Dim ember
    0x180100, // Glow
    0x080000, // Faint glow
    0x000000, // Black tail
    0x000000,
    0x000000,
    0x000000,
];

/// Default warm-to-black sequence
pub const EMBER_SEQUENCE: ColorSequence = ColorSequence::new(&EMBER_COLORS);

/// Read-only view over a color table
#[derive(Debug, Clone, Copy)]
pub struct ColorSequence {
    colors: &'static [Rgb],
}

impl ColorSequence {
    /// Wrap a static color table
    ///
    /// The table must not be empty.
    pub const fn new(colors: &'static [Rgb]) -> Self {
        Self { colors }
    }

    /// Number of entries (`M`)
    pub const fn len(&self) -> usize {
        self.colors.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Color at `index`, wrapped into the table
    pub fn get(&self, index: usize) -> Rgb {
        if self.colors.is_empty() {
            return BLACK;
        }
        self.colors[index % self.colors.len()]
    }

    /// Color at the mirrored position `len - 1 - index`
    pub fn mirrored(&self, index: usize) -> Rgb {
        let len = self.colors.len();
        if len == 0 {
            return BLACK;
        }
        self.colors[len - 1 - (index % len)]
    }

    /// Terminal entry of the table, black for well-formed sequences
    pub fn last(&self) -> Rgb {
        self.colors.last().copied().unwrap_or(BLACK)
    }

    pub fn as_slice(&self) -> &'static [Rgb] {
        self.colors
    }
}

impl Default for ColorSequence {
    fn default() -> Self {
        EMBER_SEQUENCE
    }
}
