// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::time::Duration;

use crate::clamp::{Bounds, MAX_ZOOM_SCALE, MIN_ZOOM_SCALE};
use crate::error::ConfigError;

/// Tunables for an [`crate::ImageViewer`].
///
/// The defaults give a 3x maximum zoom, half-step zoom buttons, 300 ms
/// settling animations and a double-tap zoom toggle.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ViewerConfig {
    /// Largest scale a gesture settles at.
    pub max_zoom_scale: f64,
    /// Scale change per increment/decrement call.
    pub zoom_step: f64,
    /// Length of settling and zoom animations, in milliseconds.
    pub timing_duration_ms: u32,
    /// Momentum deceleration in `(0, 1)`; closer to 1 glides further.
    pub decay_deceleration: f64,
    /// Release speed, in pixels per second, under which momentum stops.
    pub decay_velocity_epsilon: f64,
    /// Number of taps that toggles zoom.
    pub zoom_tap_count: u32,
    /// Settle scale and translation when a pinch ends with no pan active.
    ///
    /// Off by default: settling happens on pan release.
    pub settle_on_pinch_end: bool,
}

impl ViewerConfig {
    /// Checks that every field is usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.max_zoom_scale.is_finite() || self.max_zoom_scale < MIN_ZOOM_SCALE {
            return Err(ConfigError::InvalidMaxZoom(self.max_zoom_scale));
        }
        if !self.zoom_step.is_finite() || self.zoom_step <= 0.0 {
            return Err(ConfigError::InvalidZoomStep(self.zoom_step));
        }
        if !(self.decay_deceleration > 0.0 && self.decay_deceleration < 1.0) {
            return Err(ConfigError::InvalidDeceleration(self.decay_deceleration));
        }
        if !self.decay_velocity_epsilon.is_finite() || self.decay_velocity_epsilon <= 0.0 {
            return Err(ConfigError::InvalidVelocityEpsilon(
                self.decay_velocity_epsilon,
            ));
        }
        if self.zoom_tap_count == 0 {
            return Err(ConfigError::InvalidTapCount(self.zoom_tap_count));
        }
        Ok(())
    }

    /// Legal resting scale range, `[1, max_zoom_scale]`.
    #[must_use]
    pub fn scale_bounds(&self) -> Bounds {
        Bounds::new(MIN_ZOOM_SCALE, self.max_zoom_scale)
    }

    /// Settling animation length.
    #[must_use]
    pub fn timing_duration(&self) -> Duration {
        Duration::from_millis(u64::from(self.timing_duration_ms))
    }
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            max_zoom_scale: MAX_ZOOM_SCALE,
            zoom_step: 0.5,
            timing_duration_ms: 300,
            decay_deceleration: 0.998,
            decay_velocity_epsilon: 1.0,
            zoom_tap_count: 2,
            settle_on_pinch_end: false,
        }
    }
}
