mod sequence;

use smart_leds::RGB8;
pub use sequence::{ColorSequence, EMBER_SEQUENCE};

pub type Rgb = RGB8;

/// Fully dark pixel
pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };

/// Create an RGB color from a u32 value (0xRRGGBB format)
pub const fn rgb_from_u32(color: u32) -> Rgb {
    Rgb {
        r: ((color >> 16) & 0xFF) as u8,
        g: ((color >> 8) & 0xFF) as u8,
        b: (color & 0xFF) as u8,
    }
}
