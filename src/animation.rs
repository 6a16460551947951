//! The offset animation capability used to slide the window.
//!
//! The carousel never interpolates offsets itself. It hands a
//! [`SlideAnimation`] to an [`OffsetAnimator`] and waits for the single
//! completion event reported by [`OffsetAnimator::step`]. Hosts with their own
//! animation engine implement the trait; [`Tween`] is the built-in
//! frame-stepped implementation.

use std::time::Duration;

use crate::easing::Easing;

/// One request to move the offset from `from` to `to`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlideAnimation {
    pub from: f32,
    pub to: f32,
    pub duration: Duration,
    pub easing: Easing,
}

impl SlideAnimation {
    /// Slides the stack up by exactly one slot.
    pub fn slide_up(viewport_height: f32, duration: Duration, easing: Easing) -> Self {
        Self {
            from: 0.0,
            to: -viewport_height,
            duration,
            easing,
        }
    }
}

pub trait OffsetAnimator {
    /// Starts `animation` immediately, replacing any animation in flight.
    fn animate(&mut self, animation: SlideAnimation);

    /// Advances time. Returns `true` exactly once per started animation, on
    /// the step at which it reaches its end value.
    fn step(&mut self, dt: Duration) -> bool;

    /// Current offset value.
    fn offset(&self) -> f32;

    /// Jumps to `value` without animating.
    fn set_offset(&mut self, value: f32);

    fn is_animating(&self) -> bool;
}

/// Linear-time tween stepped by the host frame loop.
#[derive(Debug, Clone, Default)]
pub struct Tween {
    offset: f32,
    start: f32,
    end: f32,
    duration: Duration,
    easing: Easing,
    animation_timer: Duration,
    is_animating: bool,
}

impl Tween {
    pub fn new() -> Self {
        Self::default()
    }

    /// Normalized progress of the current animation.
    pub fn progress(&self) -> f32 {
        if self.duration.is_zero() {
            return if self.is_animating { 0.0 } else { 1.0 };
        }
        (self.animation_timer.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }
}

impl OffsetAnimator for Tween {
    fn animate(&mut self, animation: SlideAnimation) {
        self.start = animation.from;
        self.end = animation.to;
        self.duration = animation.duration;
        self.easing = animation.easing;
        self.offset = animation.from;
        self.animation_timer = Duration::ZERO;
        self.is_animating = true;
    }

    fn step(&mut self, dt: Duration) -> bool {
        if !self.is_animating {
            return false;
        }
        self.animation_timer += dt;

        if self.animation_timer >= self.duration {
            self.is_animating = false;
            self.offset = self.end;
            return true;
        }

        let t = self.easing.apply(self.progress());
        self.offset = self.start + (self.end - self.start) * t;
        false
    }

    fn offset(&self) -> f32 {
        self.offset
    }

    fn set_offset(&mut self, value: f32) {
        self.offset = value;
    }

    fn is_animating(&self) -> bool {
        self.is_animating
    }
}
