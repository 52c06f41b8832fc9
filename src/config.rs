use core::fmt;

use crate::animation::AnimationId;
use crate::bounds::RampLayout;
use crate::color::{ColorSequence, EMBER_SEQUENCE};
use crate::mode_selector::{DebounceConfig, InstabilityPolicy};
use crate::sensor::{PinLevel, SensorConfig};

/// Default number of LEDs on each strip
pub const DEFAULT_STRIP_LEN: u8 = 30;

/// Configuration for the ramp
#[derive(Debug, Clone, Copy)]
pub struct RampConfig {
    /// LEDs on each of the two strips
    pub strip_len: u8,
    /// Animation shown while the ramp is clear
    pub open_animation: AnimationId,
    /// Animation shown while a flail is present
    pub closed_animation: AnimationId,
    /// Color table shared by all animations
    pub sequence: ColorSequence,
    pub sensor: SensorConfig,
    pub debounce: DebounceConfig,
}

impl RampConfig {
    pub const DEFAULT: Self = Self {
        strip_len: DEFAULT_STRIP_LEN,
        open_animation: AnimationId::Chase,
        closed_animation: AnimationId::Glow,
        sequence: EMBER_SEQUENCE,
        sensor: SensorConfig {
            obstructed_level: PinLevel::Low,
        },
        debounce: DebounceConfig::DEFAULT,
    };

    /// Placement of both strips in the LED buffer
    pub const fn layout(&self) -> RampLayout {
        RampLayout::new(self.strip_len)
    }

    /// Check the configuration against a buffer of `capacity` LEDs
    pub fn validate(&self, capacity: usize) -> Result<(), ConfigError> {
        if self.strip_len == 0 {
            return Err(ConfigError::EmptyStrip);
        }
        let requested = self.layout().count();
        if requested > capacity {
            return Err(ConfigError::StripTooLong {
                requested,
                capacity,
            });
        }
        if self.sequence.is_empty() {
            return Err(ConfigError::EmptySequence);
        }
        if self.debounce.cooldown.as_millis() == 0 {
            return Err(ConfigError::ZeroCooldown);
        }
        let policy_valid = match self.debounce.policy {
            InstabilityPolicy::Weighted { weight, threshold } => weight > 0.0 && threshold > 0.0,
            InstabilityPolicy::FlipCount { limit } => limit > 0,
        };
        if !policy_valid {
            return Err(ConfigError::InvalidInstabilityPolicy);
        }
        Ok(())
    }
}

impl Default for RampConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Error returned when a [`RampConfig`] cannot be used.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// Strip length is zero
    EmptyStrip,
    /// Both strips together do not fit into the LED buffer
    StripTooLong { requested: usize, capacity: usize },
    /// Color sequence has no entries
    EmptySequence,
    /// Debounce cooldown is zero
    ZeroCooldown,
    /// Instability weight, threshold or flip limit is not positive
    InvalidInstabilityPolicy,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyStrip => write!(f, "strip length must be positive"),
            Self::StripTooLong {
                requested,
                capacity,
            } => write!(
                f,
                "ramp needs {requested} LEDs but the buffer holds {capacity}"
            ),
            Self::EmptySequence => write!(f, "color sequence is empty"),
            Self::ZeroCooldown => write!(f, "debounce cooldown must be positive"),
            Self::InvalidInstabilityPolicy => {
                write!(f, "instability policy limits must be positive")
            }
        }
    }
}
