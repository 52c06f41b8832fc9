//! Flail sensor input
//!
//! The sensor is a single polled digital input. One pin level means a flail
//! is obstructing the ramp, the other means the ramp is clear.

use embedded_hal::digital::InputPin;

/// Debounced view of the flail sensor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SensorState {
    /// No reading has been trusted yet
    #[default]
    Unknown,
    /// Ramp is clear
    Open,
    /// Flail is present
    Closed,
}

/// Logic level of a digital input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PinLevel {
    High,
    Low,
}

/// Sensor polarity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SensorConfig {
    /// Level reported while a flail is present
    pub obstructed_level: PinLevel,
}

impl SensorConfig {
    /// Map a raw pin reading to a sensor state
    pub const fn detect(self, is_high: bool) -> SensorState {
        let obstructed = match self.obstructed_level {
            PinLevel::High => is_high,
            PinLevel::Low => !is_high,
        };
        if obstructed {
            SensorState::Closed
        } else {
            SensorState::Open
        }
    }
}

/// Flail sensor attached to a digital input pin
pub struct FlailSensor<P> {
    pin: P,
    config: SensorConfig,
}

impl<P: InputPin> FlailSensor<P> {
    pub const fn new(pin: P, config: SensorConfig) -> Self {
        Self { pin, config }
    }

    /// Sample the pin once
    pub fn read(&mut self) -> Result<SensorState, P::Error> {
        let is_high = self.pin.is_high()?;
        Ok(self.config.detect(is_high))
    }

    pub const fn config(&self) -> SensorConfig {
        self.config
    }

    /// Get a mutable reference to the underlying pin.
    pub fn pin_mut(&mut self) -> &mut P {
        &mut self.pin
    }
}
