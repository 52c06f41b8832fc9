use embassy_time::Duration;

use super::{Animation, PingPong, RenderContext};
use crate::{bounds::Strip, frame::Frame, random::RandomSource};

const FRAME_DELAY_MS: u64 = 25;

/// Opposite-phase cross fade
///
/// Uses the glow sweep, but the right strip reads the mirrored sequence
/// index so one side brightens while the other dims.
#[derive(Debug, Clone)]
pub struct CrossAnimation {
    cursor: PingPong,
}

impl CrossAnimation {
    pub const fn init(sequence_len: usize) -> Self {
        Self {
            cursor: PingPong::new(sequence_len),
        }
    }

    pub const fn cursor(&self) -> &PingPong {
        &self.cursor
    }
}

impl Animation for CrossAnimation {
    const FRAME_DELAY: Duration = Duration::from_millis(FRAME_DELAY_MS);

    fn render<R: RandomSource>(&mut self, frame: &mut Frame<'_>, ctx: &mut RenderContext<'_, R>) {
        let position = self.cursor.position();
        frame.fill_strip(Strip::Left, ctx.sequence.get(position));
        frame.fill_strip(Strip::Right, ctx.sequence.mirrored(position));
        self.cursor.advance();
    }
}
