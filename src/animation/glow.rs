//! Whole-ramp glow
//!
//! Paints every LED with the same color while the cursor sweeps the sequence
//! back and forth.

use embassy_time::Duration;

use super::{Animation, PingPong, RenderContext};
use crate::{frame::Frame, random::RandomSource};

const FRAME_DELAY_MS: u64 = 25;

#[derive(Debug, Clone)]
pub struct GlowAnimation {
    cursor: PingPong,
}

impl GlowAnimation {
    pub const fn init(sequence_len: usize) -> Self {
        Self {
            cursor: PingPong::new(sequence_len),
        }
    }

    pub const fn cursor(&self) -> &PingPong {
        &self.cursor
    }
}

impl Animation for GlowAnimation {
    const FRAME_DELAY: Duration = Duration::from_millis(FRAME_DELAY_MS);

    fn render<R: RandomSource>(&mut self, frame: &mut Frame<'_>, ctx: &mut RenderContext<'_, R>) {
        frame.fill(ctx.sequence.get(self.cursor.position()));
        self.cursor.advance();
    }
}
