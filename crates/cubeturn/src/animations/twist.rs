use cgmath::{One, Quaternion};
use web_time::Duration;

use super::Interpolation;
use crate::{CubeletId, Twist};

/// Stage of the rotation state machine.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub enum AnimationPhase {
    /// No layer is turning; a new twist may start.
    #[default]
    Idle,
    /// A layer is turning.
    Rotating,
    /// A layer has reached its target and is about to be baked into the
    /// cubelets.
    Committing,
}

/// Layer twist in progress.
///
/// The participating cubelets are parented to a virtual pivot whose
/// orientation goes from `start` to `target`. The cubelets themselves are not
/// modified until the twist is committed.
#[derive(Debug, Clone, PartialEq)]
pub struct TwistAnimation {
    twist: Twist,
    participants: Vec<CubeletId>,
    start: Quaternion<f32>,
    target: Quaternion<f32>,
    duration: Duration,
    elapsed: Duration,
    interpolation: Interpolation,
}
impl TwistAnimation {
    /// Constructs an animation that turns `participants` by `twist` over
    /// `duration`.
    pub fn new(
        twist: Twist,
        participants: Vec<CubeletId>,
        duration: Duration,
        interpolation: Interpolation,
    ) -> Self {
        let start = Quaternion::one();
        Self {
            twist,
            participants,
            start,
            target: twist.rotation() * start,
            duration,
            elapsed: Duration::ZERO,
            interpolation,
        }
    }

    /// Steps the animation forward. Returns whether the pivot has reached its
    /// target.
    pub fn proceed(&mut self, delta: Duration) -> bool {
        self.elapsed = self.elapsed.saturating_add(delta).min(self.duration);
        self.is_complete()
    }
    /// Skips to the end of the animation.
    pub fn finish(&mut self) {
        self.elapsed = self.duration;
    }

    /// Returns the twist being animated.
    pub fn twist(&self) -> Twist {
        self.twist
    }
    /// Returns the cubelets attached to the pivot.
    pub fn participants(&self) -> &[CubeletId] {
        &self.participants
    }
    /// Returns whether a cubelet is attached to the pivot.
    pub fn contains(&self, id: CubeletId) -> bool {
        self.participants.contains(&id)
    }
    /// Returns the final orientation of the pivot.
    pub fn target(&self) -> Quaternion<f32> {
        self.target
    }

    /// Returns the linear progress from 0.0 to 1.0. A zero-length animation
    /// is always complete.
    pub fn progress(&self) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        (self.elapsed.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0)
    }
    /// Returns the progress after easing.
    pub fn eased_progress(&self) -> f32 {
        (self.interpolation.function())(self.progress())
    }
    /// Returns whether the pivot has reached its target.
    pub fn is_complete(&self) -> bool {
        self.progress() >= 1.0
    }
    /// Returns the stage of the animation.
    pub fn phase(&self) -> AnimationPhase {
        match self.is_complete() {
            true => AnimationPhase::Committing,
            false => AnimationPhase::Rotating,
        }
    }

    /// Returns the current orientation of the pivot. This is exactly `start`
    /// at the beginning and exactly `target` at the end.
    pub fn pivot_orientation(&self) -> Quaternion<f32> {
        let t = self.progress();
        if t <= 0.0 {
            self.start
        } else if t >= 1.0 {
            self.target
        } else {
            self.start.slerp(self.target, self.eased_progress())
        }
    }
}
