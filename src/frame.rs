//! Bounds-checked view over the LED buffer
//!
//! Every animation writes colors through [`Frame`], so index checks live here
//! instead of at each call site.

use crate::bounds::{RampLayout, Strip};
use crate::color::{BLACK, Rgb};

/// Mutable view over both strips of the ramp
pub struct Frame<'a> {
    leds: &'a mut [Rgb],
    layout: RampLayout,
}

impl<'a> Frame<'a> {
    /// Wrap a buffer holding exactly `layout.count()` LEDs
    pub fn new(leds: &'a mut [Rgb], layout: RampLayout) -> Self {
        debug_assert_eq!(leds.len(), layout.count());
        Self { leds, layout }
    }

    pub const fn layout(&self) -> RampLayout {
        self.layout
    }

    /// Length of one strip
    pub const fn strip_len(&self) -> usize {
        self.layout.strip_len()
    }

    /// Number of LEDs on both strips
    pub fn len(&self) -> usize {
        self.leds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.leds.is_empty()
    }

    /// Color at buffer `index`, black when out of range
    pub fn get(&self, index: usize) -> Rgb {
        self.leds.get(index).copied().unwrap_or(BLACK)
    }

    /// Write a color at buffer `index`
    ///
    /// Out-of-range writes are a rendering bug: they trip a debug assertion
    /// and are dropped in release builds.
    pub fn set(&mut self, index: usize, color: Rgb) {
        debug_assert!(index < self.leds.len(), "LED index {index} out of range");
        if let Some(led) = self.leds.get_mut(index) {
            *led = color;
        }
    }

    /// Write a color `pos` steps up from the ramp entry of `strip`
    pub fn set_at(&mut self, strip: Strip, pos: usize, color: Rgb) {
        let index = self.layout.index_of(strip, pos);
        debug_assert!(index.is_some(), "strip position {pos} out of range");
        if let Some(index) = index {
            self.set(index, color);
        }
    }

    /// Color `pos` steps up from the ramp entry of `strip`
    pub fn get_at(&self, strip: Strip, pos: usize) -> Rgb {
        self.layout
            .index_of(strip, pos)
            .map_or(BLACK, |index| self.get(index))
    }

    /// Move every LED of `strip` one position toward the ramp top
    ///
    /// The LED at the top falls off, the entry LED keeps its color until the
    /// caller injects a new one.
    pub fn shift_toward_top(&mut self, strip: Strip) {
        let range = self.layout.range(strip);
        if range.len() < 2 {
            return;
        }
        let last = range.len() - 1;
        let leds = &mut self.leds[range];
        match strip {
            Strip::Left => leds.copy_within(0..last, 1),
            Strip::Right => leds.copy_within(1.., 0),
        }
    }

    /// Fill both strips with one color
    pub fn fill(&mut self, color: Rgb) {
        for led in self.leds.iter_mut() {
            *led = color;
        }
    }

    /// Fill a single strip with one color
    pub fn fill_strip(&mut self, strip: Strip, color: Rgb) {
        for led in &mut self.leds[self.layout.range(strip)] {
            *led = color;
        }
    }

    /// Turn every LED off
    pub fn clear(&mut self) {
        self.fill(BLACK);
    }

    pub fn as_slice(&self) -> &[Rgb] {
        self.leds
    }
}
