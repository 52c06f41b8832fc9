#![no_std]

pub mod animation;
pub mod bounds;
pub mod color;
pub mod config;
pub mod frame;
pub mod frame_scheduler;
pub mod mode_selector;
pub mod output;
pub mod random;
pub mod renderer;
pub mod sensor;

pub use animation::{Animation, AnimationId, AnimationSlot};
pub use bounds::{RampLayout, Strip};
pub use config::{ConfigError, RampConfig};
pub use frame::Frame;
pub use frame_scheduler::{FrameResult, FrameScheduler};
pub use mode_selector::{DebounceConfig, InstabilityPolicy, ModeSelector};
pub use output::{OutputDriver, SmartLedsOutput};
pub use random::RandomSource;
pub use renderer::Renderer;
pub use sensor::{FlailSensor, PinLevel, SensorConfig, SensorState};

pub use color::{ColorSequence, EMBER_SEQUENCE, Rgb};
pub use embassy_time::{Duration, Instant};
