use embassy_time::Duration;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::animation::{AnimationId, AnimationSlot, RenderContext};
use crate::bounds::{RampLayout, bounded};
use crate::color::{ColorSequence, Rgb};
use crate::config::RampConfig;
use crate::frame::Frame;
use crate::random::RandomSource;

/// Animation renderer owning the LED buffer
///
/// Time handed to [`Renderer::render`] accumulates until the active
/// animation's frame delay has passed, then a single frame is rendered with
/// the accumulated time.
pub struct Renderer<const MAX_LEDS: usize> {
    layout: RampLayout,
    sequence: ColorSequence,

    frame_buffer: [Rgb; MAX_LEDS],
    current: AnimationSlot<MAX_LEDS>,
    pending: Duration,
}

impl<const MAX_LEDS: usize> Renderer<MAX_LEDS> {
    /// Create a renderer running `animation`
    ///
    /// The config is expected to be validated against `MAX_LEDS`; an
    /// oversized layout is clamped to the buffer.
    pub fn new<R: RandomSource>(config: &RampConfig, animation: AnimationId, random: &mut R) -> Self {
        let max_strip_len = u8::try_from(MAX_LEDS / 2).unwrap_or(u8::MAX);
        let layout = RampLayout::new(config.strip_len.min(max_strip_len));
        Self {
            layout,
            sequence: config.sequence,
            frame_buffer: [Rgb::default(); MAX_LEDS],
            current: animation.init(layout, &config.sequence, random),
            pending: Duration::from_millis(0),
        }
    }

    /// Advance the clock and render a frame if one is due
    ///
    /// Returns `true` when the buffer was rendered. Zero elapsed time never
    /// renders.
    pub fn render<R: RandomSource>(&mut self, elapsed: Duration, random: &mut R) -> bool {
        self.pending += elapsed;
        if self.pending.as_millis() == 0 || self.pending < self.current.frame_delay() {
            return false;
        }

        let mut ctx = RenderContext {
            elapsed: self.pending,
            sequence: self.sequence,
            random,
        };
        let mut frame = Frame::new(bounded(&mut self.frame_buffer, self.layout), self.layout);
        self.current.render(&mut frame, &mut ctx);
        self.pending = Duration::from_millis(0);

        true
    }

    /// Replace the active animation with fresh state and clear the buffer
    pub fn switch<R: RandomSource>(&mut self, animation: AnimationId, random: &mut R) {
        #[cfg(feature = "esp32-log")]
        println!(
            "[Renderer.switch] {:?} -> {:?}",
            self.current.id().as_str(),
            animation.as_str()
        );
        self.current = animation.init(self.layout, &self.sequence, random);
        self.pending = Duration::from_millis(0);
        self.frame_buffer.fill(Rgb::default());
    }

    /// Time left until the next frame is due
    pub fn time_until_next_frame(&self) -> Duration {
        let delay = self.current.frame_delay();
        if self.pending >= delay {
            return Duration::from_millis(0);
        }
        delay - self.pending
    }

    /// Colors of both strips, left strip first
    pub fn frame(&self) -> &[Rgb] {
        &self.frame_buffer[..self.layout.count().min(MAX_LEDS)]
    }

    pub const fn layout(&self) -> RampLayout {
        self.layout
    }

    pub const fn sequence(&self) -> &ColorSequence {
        &self.sequence
    }

    /// Get the active animation
    pub const fn animation(&self) -> &AnimationSlot<MAX_LEDS> {
        &self.current
    }

    pub const fn animation_id(&self) -> AnimationId {
        self.current.id()
    }
}
