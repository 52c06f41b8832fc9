//! Dark ramp used while no sensor state is trusted yet

use embassy_time::Duration;

use super::{Animation, RenderContext};
use crate::{frame::Frame, random::RandomSource};

const FRAME_DELAY_MS: u64 = 200;

#[derive(Debug, Clone, Default)]
pub struct IdleAnimation;

impl IdleAnimation {
    pub const fn init() -> Self {
        Self
    }
}

impl Animation for IdleAnimation {
    const FRAME_DELAY: Duration = Duration::from_millis(FRAME_DELAY_MS);

    fn render<R: RandomSource>(&mut self, frame: &mut Frame<'_>, ctx: &mut RenderContext<'_, R>) {
        frame.fill(ctx.sequence.last());
    }
}
