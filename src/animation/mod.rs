//! Animation system with compile-time known animation variants
//!
//! All animations are stored in an enum to avoid heap allocations.
//! Each animation implements the `Animation` trait.

mod chase;
mod cross;
mod cursor;
mod decay;
mod glow;
mod idle;
mod zippy;

use embassy_time::Duration;

pub use chase::{ChaseAnimation, ChaseVariant, SHORT_OFFSET};
pub use cross::CrossAnimation;
pub use cursor::{Direction, PingPong};
pub use decay::{
    DecayAnimation, DecayCell, HOLD_BASE_MS, HOLD_MAX_MS, HOLD_STEP_MS, HOLD_STEPS,
};
pub use glow::GlowAnimation;
pub use idle::IdleAnimation;
pub use zippy::{ZippyAnimation, ZippyVariant};

use crate::{bounds::RampLayout, color::ColorSequence, frame::Frame, random::RandomSource};

const ANIMATION_NAME_CHASE: &str = "chase";
const ANIMATION_NAME_OFFSET_CHASE: &str = "offset_chase";
const ANIMATION_NAME_GLOW: &str = "glow";
const ANIMATION_NAME_CROSS: &str = "cross";
const ANIMATION_NAME_ZIPPY: &str = "zippy";
const ANIMATION_NAME_ZIPPY_CROSS: &str = "zippy_cross";
const ANIMATION_NAME_DECAY: &str = "decay";
const ANIMATION_NAME_IDLE: &str = "idle";

const ANIMATION_ID_CHASE: u8 = 0;
const ANIMATION_ID_OFFSET_CHASE: u8 = 1;
const ANIMATION_ID_GLOW: u8 = 2;
const ANIMATION_ID_CROSS: u8 = 3;
const ANIMATION_ID_ZIPPY: u8 = 4;
const ANIMATION_ID_ZIPPY_CROSS: u8 = 5;
const ANIMATION_ID_DECAY: u8 = 6;
const ANIMATION_ID_IDLE: u8 = 7;

/// Inputs available to an animation while rendering one frame
pub struct RenderContext<'a, R: RandomSource> {
    /// Time accumulated since the previous rendered frame
    pub elapsed: Duration,
    /// Shared color table
    pub sequence: ColorSequence,
    /// Random source, used by the decay animation
    pub random: &'a mut R,
}

pub trait Animation {
    /// Minimum time between two rendered frames
    const FRAME_DELAY: Duration;

    /// Render a single frame
    fn render<R: RandomSource>(&mut self, frame: &mut Frame<'_>, ctx: &mut RenderContext<'_, R>);
}

/// Animation slot - enum containing all possible animations
///
/// Replacing the slot drops the previous animation's cursor state.
#[derive(Debug, Clone)]
#[allow(clippy::large_enum_variant)]
pub enum AnimationSlot<const MAX_LEDS: usize> {
    /// Shift-register chase, same color on both strips
    Chase(ChaseAnimation),
    /// Shift-register chase, right strip phase shifted
    OffsetChase(ChaseAnimation),
    /// Single color sweeping the whole ramp
    Glow(GlowAnimation),
    /// Opposite-phase sweep on the two strips
    Cross(CrossAnimation),
    /// Band bouncing along both strips
    Zippy(ZippyAnimation),
    /// Two bands bouncing in opposite directions
    ZippyCross(ZippyAnimation),
    /// Independent per-LED fade
    Decay(DecayAnimation<MAX_LEDS>),
    /// Dark ramp
    Idle(IdleAnimation),
}

/// Known animation ids that can be requested.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum AnimationId {
    Chase = ANIMATION_ID_CHASE,
    OffsetChase = ANIMATION_ID_OFFSET_CHASE,
    Glow = ANIMATION_ID_GLOW,
    Cross = ANIMATION_ID_CROSS,
    Zippy = ANIMATION_ID_ZIPPY,
    ZippyCross = ANIMATION_ID_ZIPPY_CROSS,
    Decay = ANIMATION_ID_DECAY,
    Idle = ANIMATION_ID_IDLE,
}

impl AnimationId {
    pub fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            ANIMATION_ID_CHASE => Self::Chase,
            ANIMATION_ID_OFFSET_CHASE => Self::OffsetChase,
            ANIMATION_ID_GLOW => Self::Glow,
            ANIMATION_ID_CROSS => Self::Cross,
            ANIMATION_ID_ZIPPY => Self::Zippy,
            ANIMATION_ID_ZIPPY_CROSS => Self::ZippyCross,
            ANIMATION_ID_DECAY => Self::Decay,
            ANIMATION_ID_IDLE => Self::Idle,
            _ => return None,
        })
    }

    /// Create fresh animation state for this id
    pub fn init<const MAX_LEDS: usize, R: RandomSource>(
        self,
        layout: RampLayout,
        sequence: &ColorSequence,
        random: &mut R,
    ) -> AnimationSlot<MAX_LEDS> {
        let sequence_len = sequence.len();
        match self {
            Self::Chase => AnimationSlot::Chase(ChaseAnimation::init(ChaseVariant::Uniform)),
            Self::OffsetChase => {
                AnimationSlot::OffsetChase(ChaseAnimation::init(ChaseVariant::Offset))
            }
            Self::Glow => AnimationSlot::Glow(GlowAnimation::init(sequence_len)),
            Self::Cross => AnimationSlot::Cross(CrossAnimation::init(sequence_len)),
            Self::Zippy => AnimationSlot::Zippy(ZippyAnimation::init(
                ZippyVariant::Full,
                layout,
                sequence_len,
            )),
            Self::ZippyCross => AnimationSlot::ZippyCross(ZippyAnimation::init(
                ZippyVariant::Cross,
                layout,
                sequence_len,
            )),
            Self::Decay => {
                AnimationSlot::Decay(DecayAnimation::init(layout, sequence_len, random))
            }
            Self::Idle => AnimationSlot::Idle(IdleAnimation::init()),
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Chase => ANIMATION_NAME_CHASE,
            Self::OffsetChase => ANIMATION_NAME_OFFSET_CHASE,
            Self::Glow => ANIMATION_NAME_GLOW,
            Self::Cross => ANIMATION_NAME_CROSS,
            Self::Zippy => ANIMATION_NAME_ZIPPY,
            Self::ZippyCross => ANIMATION_NAME_ZIPPY_CROSS,
            Self::Decay => ANIMATION_NAME_DECAY,
            Self::Idle => ANIMATION_NAME_IDLE,
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        match s {
            ANIMATION_NAME_CHASE => Some(Self::Chase),
            ANIMATION_NAME_OFFSET_CHASE => Some(Self::OffsetChase),
            ANIMATION_NAME_GLOW => Some(Self::Glow),
            ANIMATION_NAME_CROSS => Some(Self::Cross),
            ANIMATION_NAME_ZIPPY => Some(Self::Zippy),
            ANIMATION_NAME_ZIPPY_CROSS => Some(Self::ZippyCross),
            ANIMATION_NAME_DECAY => Some(Self::Decay),
            ANIMATION_NAME_IDLE => Some(Self::Idle),
            _ => None,
        }
    }

    /// Frame delay of the animation behind this id
    pub const fn frame_delay(self) -> Duration {
        match self {
            Self::Chase | Self::OffsetChase => ChaseAnimation::FRAME_DELAY,
            Self::Glow => GlowAnimation::FRAME_DELAY,
            Self::Cross => CrossAnimation::FRAME_DELAY,
            Self::Zippy | Self::ZippyCross => ZippyAnimation::FRAME_DELAY,
            Self::Decay => DecayAnimation::<0>::FRAME_DELAY,
            Self::Idle => IdleAnimation::FRAME_DELAY,
        }
    }
}

impl<const MAX_LEDS: usize> AnimationSlot<MAX_LEDS> {
    /// Render the current animation
    pub fn render<R: RandomSource>(&mut self, frame: &mut Frame<'_>, ctx: &mut RenderContext<'_, R>) {
        match self {
            Self::Chase(animation) | Self::OffsetChase(animation) => animation.render(frame, ctx),
            Self::Glow(animation) => animation.render(frame, ctx),
            Self::Cross(animation) => animation.render(frame, ctx),
            Self::Zippy(animation) | Self::ZippyCross(animation) => animation.render(frame, ctx),
            Self::Decay(animation) => animation.render(frame, ctx),
            Self::Idle(animation) => animation.render(frame, ctx),
        }
    }

    /// Minimum time between two rendered frames
    pub const fn frame_delay(&self) -> Duration {
        self.id().frame_delay()
    }

    /// Get the animation ID for external observation
    pub const fn id(&self) -> AnimationId {
        match self {
            Self::Chase(_) => AnimationId::Chase,
            Self::OffsetChase(_) => AnimationId::OffsetChase,
            Self::Glow(_) => AnimationId::Glow,
            Self::Cross(_) => AnimationId::Cross,
            Self::Zippy(_) => AnimationId::Zippy,
            Self::ZippyCross(_) => AnimationId::ZippyCross,
            Self::Decay(_) => AnimationId::Decay,
            Self::Idle(_) => AnimationId::Idle,
        }
    }
}
