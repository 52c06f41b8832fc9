//! Frame clock and control loop step.
//!
//! Provides portable frame pacing without async/await or platform-specific timers.
//! The caller is responsible for sleeping/waiting between ticks.

use embassy_time::{Duration, Instant};
use embedded_hal::digital::InputPin;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::animation::AnimationId;
use crate::config::{ConfigError, RampConfig};
use crate::mode_selector::ModeSelector;
use crate::output::OutputDriver;
use crate::random::RandomSource;
use crate::renderer::Renderer;
use crate::sensor::{FlailSensor, SensorState};

/// Result of a frame tick operation.
#[derive(Debug, Clone, Copy)]
pub struct FrameResult {
    /// Whether the active animation rendered a new frame.
    pub rendered: bool,
    /// Whether the buffer was written to the output driver.
    pub flushed: bool,
    /// Animation switched to after evaluating the sensor.
    pub switched: Option<AnimationId>,
    /// How long the caller may wait before the next tick.
    pub sleep_duration: Duration,
}

/// Portable control loop that owns every piece of ramp state.
///
/// Each tick:
/// 1. Measures the time since the previous tick
/// 2. Renders the active animation if its frame delay has passed
/// 3. Writes the buffer to the output driver
/// 4. Samples the sensor and switches animation when the selector asks to
///
/// # Usage
///
/// ```ignore
/// let mut scheduler = FrameScheduler::<_, _, _, 120>::new(&config, driver, pin, rng)?;
///
/// loop {
///     let now = get_current_time_ms();
///     let result = scheduler.tick(Instant::from_millis(now));
///
///     // Platform-specific sleep
///     sleep_ms(result.sleep_duration.as_millis());
/// }
/// ```
pub struct FrameScheduler<O, P, R, const MAX_LEDS: usize>
where
    O: OutputDriver,
    P: InputPin,
    R: RandomSource,
{
    output: O,
    sensor: FlailSensor<P>,
    random: R,
    renderer: Renderer<MAX_LEDS>,
    selector: ModeSelector,
    last_tick: Option<Instant>,
    dirty: bool,
}

impl<O, P, R, const MAX_LEDS: usize> FrameScheduler<O, P, R, MAX_LEDS>
where
    O: OutputDriver,
    P: InputPin,
    R: RandomSource,
{
    /// Create a new frame scheduler.
    ///
    /// The sensor is sampled once to pick the initial animation. A failed
    /// first read starts in the idle animation until the sensor settles.
    pub fn new(config: &RampConfig, output: O, pin: P, mut random: R) -> Result<Self, ConfigError> {
        config.validate(MAX_LEDS)?;

        let mut sensor = FlailSensor::new(pin, config.sensor);
        let initial = sensor.read().unwrap_or(SensorState::Unknown);
        let selector = ModeSelector::new(initial, config);
        let renderer = Renderer::new(config, selector.current(), &mut random);

        #[cfg(feature = "esp32-log")]
        println!(
            "[FrameScheduler.new] initial sensor state {:?}, starting {:?}",
            initial,
            selector.current().as_str()
        );

        Ok(Self {
            output,
            sensor,
            random,
            renderer,
            selector,
            last_tick: None,
            dirty: true,
        })
    }

    /// Run one iteration of the control loop at time `now`.
    ///
    /// `now` must come from a monotonic clock. The first tick only
    /// establishes the time base.
    pub fn tick(&mut self, now: Instant) -> FrameResult {
        let elapsed = self
            .last_tick
            .and_then(|last| now.checked_duration_since(last))
            .unwrap_or(Duration::from_millis(0));
        self.last_tick = Some(now);

        let rendered = self.renderer.render(elapsed, &mut self.random);

        let flushed = rendered || self.dirty;
        if flushed {
            self.output.write(self.renderer.frame());
            self.dirty = false;
        }

        let switched = match self.sensor.read() {
            Ok(detected) => self.selector.evaluate(detected, elapsed),
            Err(err) => {
                #[cfg(feature = "esp32-log")]
                println!("[FrameScheduler.tick] sensor read failed: {:?}", err);
                #[cfg(not(feature = "esp32-log"))]
                let _ = err;
                None
            }
        };
        if let Some(animation) = switched {
            self.renderer.switch(animation, &mut self.random);
            self.dirty = true;
        }

        let sleep_duration = if self.dirty {
            Duration::from_millis(0)
        } else {
            self.renderer.time_until_next_frame()
        };

        FrameResult {
            rendered,
            flushed,
            switched,
            sleep_duration,
        }
    }

    /// Get a reference to the renderer.
    pub fn renderer(&self) -> &Renderer<MAX_LEDS> {
        &self.renderer
    }

    /// Get a reference to the mode selector.
    pub fn selector(&self) -> &ModeSelector {
        &self.selector
    }

    /// Get a reference to the output driver.
    pub fn output(&self) -> &O {
        &self.output
    }

    /// Get a mutable reference to the flail sensor.
    pub fn sensor_mut(&mut self) -> &mut FlailSensor<P> {
        &mut self.sensor
    }
}
