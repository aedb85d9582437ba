//! Time-driven motion for the hourglass.
//!
//! Easing curves, timed keyframe sequences that repeat, and the animator
//! that turns elapsed milliseconds into the rotation and sand offset of the
//! glyph.

mod animator;
mod easing;
mod timeline;

pub use animator::{HourglassAnimator, Lifecycle, Pose, rotation_loop, sand_loop};
pub use easing::Easing;
pub use timeline::{
    Iterations, LEG_DURATION_MS, Leg, ROTATION_TIMING, Repeat, SAND_TIMING, SAND_TRAVEL, Sequence,
    TimingConfig, rotation_sequence, sand_sequence,
};
