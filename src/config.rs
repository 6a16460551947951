//! Construction-time carousel options.

use std::time::Duration;

use crate::constants::*;
use crate::easing::Easing;
use crate::error::{CarouselError, Result};

#[derive(Debug, Clone, PartialEq)]
pub struct CarouselConfig {
    /// Extent of one item slot; also the slide distance.
    pub viewport_height: f32,
    /// Time between automatic advances.
    pub dwell: Duration,
    pub animation_enabled: bool,
    pub animation_duration: Duration,
    pub easing: Easing,
    /// Initial rotation index; wrapped into range, may be negative.
    pub start_offset: i64,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            viewport_height: DEFAULT_VIEWPORT_HEIGHT,
            dwell: DEFAULT_DWELL,
            animation_enabled: true,
            animation_duration: DEFAULT_ANIMATION_DURATION,
            easing: Easing::Linear,
            start_offset: 0,
        }
    }
}

impl CarouselConfig {
    pub fn with_viewport_height(mut self, height: f32) -> Self {
        self.viewport_height = height;
        self
    }

    pub fn with_dwell(mut self, dwell: Duration) -> Self {
        self.dwell = dwell;
        self
    }

    pub fn with_animation_enabled(mut self, enabled: bool) -> Self {
        self.animation_enabled = enabled;
        self
    }

    pub fn with_animation_duration(mut self, duration: Duration) -> Self {
        self.animation_duration = duration;
        self
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn with_start_offset(mut self, offset: i64) -> Self {
        self.start_offset = offset;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if !self.viewport_height.is_finite() || self.viewport_height <= 0.0 {
            return Err(CarouselError::InvalidViewportHeight(self.viewport_height));
        }
        Ok(())
    }
}
