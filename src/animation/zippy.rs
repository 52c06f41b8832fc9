//! Bouncing band animations
//!
//! A band of `M` sequence colors travels along a track and bounces at each
//! end. The band moves over a virtual scratch strip padded by `M` dark LEDs
//! on both sides, so it fully leaves the visible track before turning
//! around:
//!
//! ```text
//! scratch: [ M pad ][ visible track ][ M pad ]
//! band:    starts at scratch 0, ends at scratch track + M
//! ```
//!
//! The brightest color always leads in the direction of travel.

use embassy_time::Duration;

use super::{Animation, Direction, PingPong, RenderContext};
use crate::{
    bounds::{RampLayout, Strip},
    color::{BLACK, ColorSequence, Rgb},
    frame::Frame,
    random::RandomSource,
};

const FRAME_DELAY_MS: u64 = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZippyVariant {
    /// One band runs the whole ramp: up the left strip, down the right one
    Full,
    /// Each strip gets its own band, moving in opposite directions
    Cross,
}

#[derive(Debug, Clone)]
pub struct ZippyAnimation {
    bounce: PingPong,
    track_len: usize,
    variant: ZippyVariant,
}

impl ZippyAnimation {
    pub const fn init(variant: ZippyVariant, layout: RampLayout, sequence_len: usize) -> Self {
        let track_len = match variant {
            ZippyVariant::Full => layout.count(),
            ZippyVariant::Cross => layout.strip_len(),
        };
        Self {
            bounce: PingPong::new(track_len + sequence_len + 1),
            track_len,
            variant,
        }
    }

    pub const fn bounce(&self) -> &PingPong {
        &self.bounce
    }

    pub const fn track_len(&self) -> usize {
        self.track_len
    }

    /// Color shown at `track_pos` of the visible track
    fn band_color(&self, sequence: &ColorSequence, track_pos: usize) -> Rgb {
        let len = sequence.len();
        let scratch_pos = track_pos + len;
        let band_start = self.bounce.position();
        if scratch_pos < band_start || scratch_pos >= band_start + len {
            return BLACK;
        }

        let offset = scratch_pos - band_start;
        match self.bounce.direction() {
            Direction::Forward => sequence.get(len - 1 - offset),
            Direction::Backward => sequence.get(offset),
        }
    }
}

impl Animation for ZippyAnimation {
    const FRAME_DELAY: Duration = Duration::from_millis(FRAME_DELAY_MS);

    fn render<R: RandomSource>(&mut self, frame: &mut Frame<'_>, ctx: &mut RenderContext<'_, R>) {
        if ctx.sequence.is_empty() {
            return;
        }

        match self.variant {
            ZippyVariant::Full => {
                // Buffer order already follows the track: left strip upward,
                // then right strip downward.
                for index in 0..self.track_len.min(frame.len()) {
                    frame.set(index, self.band_color(&ctx.sequence, index));
                }
            }
            ZippyVariant::Cross => {
                let strip_len = self.track_len.min(frame.strip_len());
                for pos in 0..strip_len {
                    frame.set_at(Strip::Left, pos, self.band_color(&ctx.sequence, pos));
                    frame.set_at(
                        Strip::Right,
                        pos,
                        self.band_color(&ctx.sequence, strip_len - 1 - pos),
                    );
                }
            }
        }

        self.bounce.advance();
    }
}
