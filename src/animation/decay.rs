//! Per-LED decay
//!
//! Every LED fades through the sequence on its own timer. When an LED runs
//! off the end of the sequence it starts over from the brightest color with
//! a freshly drawn hold time, which keeps neighbouring LEDs out of step.

use embassy_time::Duration;
use heapless::Vec;

use super::{Animation, RenderContext};
use crate::{bounds::RampLayout, frame::Frame, random::RandomSource};

const FRAME_DELAY_MS: u64 = 5;

/// Shortest hold time of a single color
pub const HOLD_BASE_MS: u32 = 35;
/// Hold time granularity
pub const HOLD_STEP_MS: u32 = 5;
/// Number of extra steps a hold time may add
pub const HOLD_STEPS: u32 = 5;
/// Longest possible hold time
pub const HOLD_MAX_MS: u32 = HOLD_BASE_MS + HOLD_STEPS * HOLD_STEP_MS;

/// Draw a hold time in `HOLD_BASE_MS..=HOLD_MAX_MS`
fn random_hold<R: RandomSource>(random: &mut R) -> u32 {
    HOLD_BASE_MS + random.random_range(0, HOLD_STEPS) * HOLD_STEP_MS
}

/// Timer and sequence position of a single LED
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecayCell {
    countdown_ms: u32,
    reset_ms: u32,
    index: usize,
}

impl DecayCell {
    /// Milliseconds left until the next color step
    pub const fn countdown_ms(&self) -> u32 {
        self.countdown_ms
    }

    /// Hold time reloaded after every step
    pub const fn reset_ms(&self) -> u32 {
        self.reset_ms
    }

    /// Current position in the color sequence
    pub const fn index(&self) -> usize {
        self.index
    }
}

#[derive(Debug, Clone)]
pub struct DecayAnimation<const MAX_LEDS: usize> {
    cells: Vec<DecayCell, MAX_LEDS>,
}

impl<const MAX_LEDS: usize> DecayAnimation<MAX_LEDS> {
    /// Seed every LED with a random start color and hold time
    pub fn init<R: RandomSource>(layout: RampLayout, sequence_len: usize, random: &mut R) -> Self {
        let mut cells = Vec::new();
        let last_index = u32::try_from(sequence_len.saturating_sub(1)).unwrap_or(u32::MAX);

        for _ in 0..layout.count().min(MAX_LEDS) {
            let reset_ms = random_hold(random);
            let index = random.random_range(0, last_index) as usize;
            let _ = cells.push(DecayCell {
                countdown_ms: reset_ms,
                reset_ms,
                index,
            });
        }

        Self { cells }
    }

    pub fn cells(&self) -> &[DecayCell] {
        &self.cells
    }
}

impl<const MAX_LEDS: usize> Animation for DecayAnimation<MAX_LEDS> {
    const FRAME_DELAY: Duration = Duration::from_millis(FRAME_DELAY_MS);

    fn render<R: RandomSource>(&mut self, frame: &mut Frame<'_>, ctx: &mut RenderContext<'_, R>) {
        let len = ctx.sequence.len();
        if len == 0 {
            return;
        }
        let elapsed_ms = u32::try_from(ctx.elapsed.as_millis()).unwrap_or(u32::MAX);

        for (index, cell) in self.cells.iter_mut().enumerate().take(frame.len()) {
            cell.countdown_ms = cell.countdown_ms.saturating_sub(elapsed_ms);
            if cell.countdown_ms > 0 {
                continue;
            }

            cell.index += 1;
            if cell.index >= len {
                cell.index = 0;
                cell.reset_ms = random_hold(&mut *ctx.random);
            }
            frame.set(index, ctx.sequence.get(cell.index));
            // A large underflow still moves the LED a single step
            cell.countdown_ms = cell.reset_ms;
        }
    }
}
