//! Chase animations
//!
//! Each strip behaves as a shift register: every frame the colors move one
//! LED toward the ramp top and a fresh color from the sequence enters at the
//! ramp entry.

use embassy_time::Duration;

use super::{Animation, RenderContext};
use crate::{bounds::Strip, frame::Frame, random::RandomSource};

const FRAME_DELAY_MS: u64 = 40;

/// Phase lag of the right strip in [`ChaseVariant::Offset`]
pub const SHORT_OFFSET: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChaseVariant {
    /// Both strips receive the same color
    Uniform,
    /// Right strip runs `SHORT_OFFSET` colors ahead of the left one
    Offset,
}

#[derive(Debug, Clone)]
pub struct ChaseAnimation {
    cursor: usize,
    variant: ChaseVariant,
}

impl ChaseAnimation {
    pub const fn init(variant: ChaseVariant) -> Self {
        Self { cursor: 0, variant }
    }

    /// Index of the color injected at the next frame
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    pub const fn variant(&self) -> ChaseVariant {
        self.variant
    }

    /// Sequence index injected into the right strip
    fn right_cursor(&self, len: usize) -> usize {
        match self.variant {
            ChaseVariant::Uniform => self.cursor,
            ChaseVariant::Offset => {
                let shifted = self.cursor + (SHORT_OFFSET % len);
                if shifted >= len { shifted - len } else { shifted }
            }
        }
    }
}

impl Animation for ChaseAnimation {
    const FRAME_DELAY: Duration = Duration::from_millis(FRAME_DELAY_MS);

    fn render<R: RandomSource>(&mut self, frame: &mut Frame<'_>, ctx: &mut RenderContext<'_, R>) {
        let len = ctx.sequence.len();
        if len == 0 || frame.is_empty() {
            return;
        }

        frame.shift_toward_top(Strip::Left);
        frame.shift_toward_top(Strip::Right);

        frame.set_at(Strip::Left, 0, ctx.sequence.get(self.cursor));
        frame.set_at(Strip::Right, 0, ctx.sequence.get(self.right_cursor(len)));

        self.cursor += 1;
        if self.cursor >= len {
            self.cursor = 0;
        }
    }
}
