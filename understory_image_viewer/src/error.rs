// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use thiserror::Error;

/// A rejected [`crate::ViewerConfig`].
#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum ConfigError {
    /// The maximum zoom must be finite and at least `1.0`.
    #[error("invalid maximum zoom scale: {0} (must be finite and >= 1)")]
    InvalidMaxZoom(f64),

    /// The step used by increment/decrement must be finite and positive.
    #[error("invalid zoom step: {0} (must be finite and > 0)")]
    InvalidZoomStep(f64),

    /// Decay deceleration must lie strictly between 0 and 1.
    #[error("invalid decay deceleration: {0} (must be in (0, 1))")]
    InvalidDeceleration(f64),

    /// The velocity under which a decay stops must be finite and positive.
    #[error("invalid decay velocity epsilon: {0} (must be finite and > 0)")]
    InvalidVelocityEpsilon(f64),

    /// The tap count that toggles zoom must be at least one.
    #[error("invalid zoom tap count: {0} (must be >= 1)")]
    InvalidTapCount(u32),
}
