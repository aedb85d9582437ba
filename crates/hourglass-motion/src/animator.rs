//! Mount-aware animator driving the two hourglass loops.

use crate::timeline::{Repeat, rotation_sequence, sand_sequence};

/// The animated values of one frame.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Pose {
    /// Rotation of the whole glyph, in degrees. Positive is clockwise.
    pub rotation_deg: f32,
    /// Vertical offset of the sand mask, in view-box units.
    pub sand_offset: f32,
}

impl Pose {
    pub const INITIAL: Pose = Pose {
        rotation_deg: 0.0,
        sand_offset: 0.0,
    };
}

/// Whether the hourglass is on screen, and since when.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifecycle {
    Unmounted,
    Mounted { since_ms: u64 },
}

/// The rotation loop, repeated forever.
pub fn rotation_loop() -> Repeat {
    Repeat::forever(rotation_sequence())
}

/// The sand loop, repeated forever.
pub fn sand_loop() -> Repeat {
    Repeat::forever(sand_sequence())
}

/// Timer-driven state machine for the hourglass.
///
/// The host calls [`tick`](Self::tick) from its refresh callback with a
/// monotonic clock in milliseconds. Phase is measured from the last
/// [`mount`](Self::mount), so every mount starts over at [`Pose::INITIAL`].
#[derive(Debug, Clone)]
pub struct HourglassAnimator {
    lifecycle: Lifecycle,
    rotation: Repeat,
    sand: Repeat,
    pose: Pose,
}

impl Default for HourglassAnimator {
    fn default() -> Self {
        Self::new()
    }
}

impl HourglassAnimator {
    /// Create an unmounted animator.
    pub fn new() -> Self {
        Self {
            lifecycle: Lifecycle::Unmounted,
            rotation: rotation_loop(),
            sand: sand_loop(),
            pose: Pose::INITIAL,
        }
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    pub fn is_mounted(&self) -> bool {
        matches!(self.lifecycle, Lifecycle::Mounted { .. })
    }

    /// Start animating at `now_ms`. Mounting while mounted restarts the
    /// loops.
    pub fn mount(&mut self, now_ms: u64) {
        self.lifecycle = Lifecycle::Mounted { since_ms: now_ms };
        self.pose = Pose::INITIAL;
    }

    /// Stop animating and drop the current phase.
    pub fn unmount(&mut self) {
        self.lifecycle = Lifecycle::Unmounted;
        self.pose = Pose::INITIAL;
    }

    /// Advance to `now_ms` and return the new pose. Unmounted animators stay
    /// at the initial pose.
    pub fn tick(&mut self, now_ms: u64) -> Pose {
        if let Lifecycle::Mounted { since_ms } = self.lifecycle {
            self.pose = self.pose_at(now_ms.saturating_sub(since_ms));
        }
        self.pose
    }

    /// Pose computed by the last tick.
    pub fn pose(&self) -> Pose {
        self.pose
    }

    /// Pose `elapsed_ms` after a mount, without touching the lifecycle.
    pub fn pose_at(&self, elapsed_ms: u64) -> Pose {
        Pose {
            rotation_deg: self.rotation.sample(elapsed_ms),
            sand_offset: self.sand.sample(elapsed_ms),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unmounted_stays_initial() {
        let mut animator = HourglassAnimator::new();
        assert!(!animator.is_mounted());
        assert_eq!(animator.tick(1800), Pose::INITIAL);
        assert_eq!(animator.pose(), Pose::INITIAL);
    }

    #[test]
    fn test_tick_follows_mount_time() {
        let mut animator = HourglassAnimator::new();
        animator.mount(10_000);
        assert_eq!(animator.tick(10_000), Pose::INITIAL);

        let pose = animator.tick(11_200);
        assert_eq!(pose.rotation_deg, 180.0);
        assert_eq!(pose.sand_offset, 0.0);

        let pose = animator.tick(12_400);
        assert_eq!(pose.rotation_deg, 0.0);
        assert_eq!(pose.sand_offset, 34.0);

        let pose = animator.tick(13_600);
        assert_eq!(pose.rotation_deg, -180.0);
        assert_eq!(pose.sand_offset, 0.0);
    }

    #[test]
    fn test_remount_resets_phase() {
        let mut animator = HourglassAnimator::new();
        animator.mount(0);
        let mid = animator.tick(2_000);
        assert_ne!(mid, Pose::INITIAL);

        animator.unmount();
        assert_eq!(animator.pose(), Pose::INITIAL);
        assert_eq!(animator.lifecycle(), Lifecycle::Unmounted);

        animator.mount(5_000);
        assert_eq!(animator.tick(5_000), Pose::INITIAL);
        assert_eq!(animator.tick(7_000), mid);
    }

    #[test]
    fn test_mount_while_mounted_restarts() {
        let mut animator = HourglassAnimator::new();
        animator.mount(0);
        animator.tick(1_000);
        animator.mount(1_000);
        assert_eq!(animator.pose(), Pose::INITIAL);
        assert_eq!(animator.lifecycle(), Lifecycle::Mounted { since_ms: 1_000 });
        assert_eq!(animator.tick(1_000), Pose::INITIAL);
    }

    #[test]
    fn test_clock_going_backwards_clamps() {
        let mut animator = HourglassAnimator::new();
        animator.mount(500);
        assert_eq!(animator.tick(100), Pose::INITIAL);
    }
}
