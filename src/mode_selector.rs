//! Sensor debouncing and animation selection
//!
//! The selector keeps a `locked` sensor state that drives the active
//! animation and a `desired` candidate waiting for its cooldown to run out.
//! Every reading that disagrees with both starts a new cooldown and adds to
//! an instability measure. A steady reading promotes the candidate once the
//! cooldown expires; a sensor that keeps flipping escalates to the decay
//! animation instead.

use embassy_time::Duration;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::animation::AnimationId;
use crate::config::RampConfig;
use crate::sensor::SensorState;

/// Default debounce cooldown
pub const DEFAULT_COOLDOWN: Duration = Duration::from_millis(600);

/// How sensor flips are turned into an escalation decision
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InstabilityPolicy {
    /// Each flip adds `(1 - remaining / cooldown) * weight` to a score;
    /// exceeding `threshold` escalates.
    Weighted { weight: f32, threshold: f32 },
    /// Each flip counts once; reaching `limit` escalates.
    FlipCount { limit: u8 },
}

impl InstabilityPolicy {
    pub const WEIGHTED: Self = Self::Weighted {
        weight: 45.0,
        threshold: 350.0,
    };

    pub const FLIP_COUNT: Self = Self::FlipCount { limit: 7 };
}

impl Default for InstabilityPolicy {
    fn default() -> Self {
        Self::WEIGHTED
    }
}

/// Configuration for sensor debouncing
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DebounceConfig {
    /// Time a new reading must hold before it is locked in
    pub cooldown: Duration,
    /// Escalation policy for a flapping sensor
    pub policy: InstabilityPolicy,
}

impl DebounceConfig {
    pub const DEFAULT: Self = Self {
        cooldown: DEFAULT_COOLDOWN,
        policy: InstabilityPolicy::WEIGHTED,
    };
}

impl Default for DebounceConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Debounced state machine choosing the active animation
#[derive(Debug, Clone)]
pub struct ModeSelector {
    debounce: DebounceConfig,
    open_animation: AnimationId,
    closed_animation: AnimationId,

    locked: SensorState,
    desired: SensorState,
    countdown_ms: u64,
    instability: f32,
    flips: u8,
    current: AnimationId,
}

impl ModeSelector {
    /// Create a selector locked to the first sensor reading
    ///
    /// An `Unknown` first reading starts on the idle animation and waits for
    /// the sensor to settle.
    pub fn new(initial: SensorState, config: &RampConfig) -> Self {
        let mut selector = Self {
            debounce: config.debounce,
            open_animation: config.open_animation,
            closed_animation: config.closed_animation,
            locked: initial,
            desired: SensorState::Unknown,
            countdown_ms: 0,
            instability: 0.0,
            flips: 0,
            current: AnimationId::Idle,
        };
        selector.current = selector.target(initial);
        selector
    }

    /// Feed one sensor reading
    ///
    /// `elapsed` is the time since the previous call. Returns the animation
    /// to switch to, if any; the caller must reset that animation and clear
    /// the LED buffer before rendering again.
    pub fn evaluate(&mut self, detected: SensorState, elapsed: Duration) -> Option<AnimationId> {
        if detected == SensorState::Unknown {
            return None;
        }
        if detected == self.locked && self.countdown_ms == 0 {
            return None;
        }

        let remaining_ms = self.countdown_ms.saturating_sub(elapsed.as_millis());

        if detected == self.desired {
            self.countdown_ms = remaining_ms;
            if remaining_ms == 0 {
                return Some(self.commit());
            }
            return None;
        }

        self.desired = detected;
        self.countdown_ms = self.debounce.cooldown.as_millis();

        if self.register_flip(remaining_ms) && self.current != AnimationId::Decay {
            #[cfg(feature = "esp32-log")]
            println!(
                "[ModeSelector.evaluate] sensor unstable (score {:?}, flips {:?}), switching to decay",
                self.instability, self.flips
            );
            self.current = AnimationId::Decay;
            return Some(AnimationId::Decay);
        }

        None
    }

    /// Lock in the pending candidate and pick its animation
    fn commit(&mut self) -> AnimationId {
        self.locked = self.desired;
        self.desired = SensorState::Unknown;
        self.countdown_ms = 0;
        self.instability = 0.0;
        self.flips = 0;
        self.current = self.target(self.locked);

        #[cfg(feature = "esp32-log")]
        println!(
            "[ModeSelector.commit] sensor settled at {:?}, switching to {:?}",
            self.locked,
            self.current.as_str()
        );

        self.current
    }

    /// Account for a genuine flip
    ///
    /// Returns `true` when the sensor is considered unstable.
    #[allow(clippy::cast_precision_loss)]
    fn register_flip(&mut self, remaining_ms: u64) -> bool {
        self.flips = self.flips.saturating_add(1);

        match self.debounce.policy {
            InstabilityPolicy::Weighted { weight, threshold } => {
                let cooldown_ms = self.debounce.cooldown.as_millis().max(1);
                let remaining = remaining_ms.min(cooldown_ms) as f32 / cooldown_ms as f32;
                self.instability += (1.0 - remaining) * weight;
                self.instability > threshold
            }
            InstabilityPolicy::FlipCount { limit } => self.flips >= limit,
        }
    }

    /// Animation matching a locked sensor state
    const fn target(&self, state: SensorState) -> AnimationId {
        match state {
            SensorState::Open => self.open_animation,
            SensorState::Closed => self.closed_animation,
            SensorState::Unknown => AnimationId::Idle,
        }
    }

    /// Sensor state currently driving the animation
    pub const fn locked(&self) -> SensorState {
        self.locked
    }

    /// Candidate state waiting for its cooldown
    pub const fn desired(&self) -> SensorState {
        self.desired
    }

    /// Cooldown left before `desired` is locked in
    pub const fn countdown(&self) -> Duration {
        Duration::from_millis(self.countdown_ms)
    }

    /// Weighted instability score accumulated since the last lock
    pub const fn instability(&self) -> f32 {
        self.instability
    }

    /// Genuine flips seen since the last lock
    pub const fn flips(&self) -> u8 {
        self.flips
    }

    /// Animation most recently selected
    pub const fn current(&self) -> AnimationId {
        self.current
    }
}
