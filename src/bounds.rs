use core::ops::Range;

use crate::Rgb;

/// One physical half of the ramp
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strip {
    /// Runs from ramp entry (index 0) up to the ramp top
    Left,
    /// Runs from the ramp top down to ramp entry (last index)
    Right,
}

/// Placement of both strips inside the LED buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RampLayout {
    pub strip_len: u8,
}

impl RampLayout {
    pub const fn new(strip_len: u8) -> Self {
        Self { strip_len }
    }

    /// Length of one strip
    pub const fn strip_len(self) -> usize {
        self.strip_len as usize
    }

    /// Get the number of LEDs on both strips
    pub const fn count(self) -> usize {
        2 * self.strip_len as usize
    }

    /// Buffer indices of the given strip
    pub const fn range(self, strip: Strip) -> Range<usize> {
        let len = self.strip_len as usize;
        match strip {
            Strip::Left => 0..len,
            Strip::Right => len..2 * len,
        }
    }

    /// Buffer index of the LED `pos` steps up from the ramp entry
    ///
    /// Returns `None` when `pos` is past the ramp top.
    pub const fn index_of(self, strip: Strip, pos: usize) -> Option<usize> {
        let len = self.strip_len as usize;
        if pos >= len {
            return None;
        }
        Some(match strip {
            Strip::Left => pos,
            Strip::Right => 2 * len - 1 - pos,
        })
    }
}

/// Get the slice of the buffer covered by both strips
pub(crate) fn bounded(leds: &mut [Rgb], layout: RampLayout) -> &mut [Rgb] {
    let end = layout.count().min(leds.len());
    &mut leds[..end]
}
