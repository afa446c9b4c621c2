// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gesture sessions and the event messages that drive them.
//!
//! Gesture recognition happens upstream. By the time events reach this crate
//! they are already classified as pinch, pan or tap and carry cumulative
//! values relative to the gesture start.
//!
//! ## Usage
//!
//! 1) Call [`GestureSession::begin`] with the live transform when a gesture starts.
//! 2) On each update, read [`GestureSession::snapshot`] and apply the cumulative delta to it.
//! 3) End with [`GestureSession::end`]; the snapshot is discarded.
//!
//! ```
//! use understory_image_viewer::{GestureSession, Transform};
//!
//! let mut session = GestureSession::default();
//! assert!(session.begin(Transform::new(2.0, 10.0, 0.0)));
//!
//! // A second begin while active is rejected so begin/end stay paired.
//! assert!(!session.begin(Transform::IDENTITY));
//! assert_eq!(session.snapshot().unwrap().scale, 2.0);
//!
//! assert!(session.end().is_some());
//! assert!(!session.is_active());
//! ```

use kurbo::{Point, Vec2};

use crate::transform::Transform;

/// One gesture instance, from its start event to its end event.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GestureSession {
    snapshot: Option<Transform>,
}

impl GestureSession {
    /// Starts the session with a snapshot of `current`.
    ///
    /// Returns `false`, leaving the existing snapshot untouched, if the
    /// session was already active.
    pub fn begin(&mut self, current: Transform) -> bool {
        if self.snapshot.is_some() {
            return false;
        }
        self.snapshot = Some(current);
        true
    }

    /// Returns the transform captured at the start of the gesture.
    #[must_use]
    pub fn snapshot(&self) -> Option<Transform> {
        self.snapshot
    }

    /// Replaces the snapshot scale while the session is active.
    ///
    /// Used when the scale is changed from outside the gesture so that later
    /// cumulative updates build on the new value.
    pub fn rebase_scale(&mut self, scale: f64) {
        if let Some(snapshot) = &mut self.snapshot {
            snapshot.scale = scale;
        }
    }

    /// Replaces the whole snapshot while the session is active.
    pub fn rebase(&mut self, current: Transform) {
        if let Some(snapshot) = &mut self.snapshot {
            *snapshot = current;
        }
    }

    /// Ends the session, returning its snapshot if it was active.
    pub fn end(&mut self) -> Option<Transform> {
        self.snapshot.take()
    }

    /// Returns `true` between [`GestureSession::begin`] and [`GestureSession::end`].
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.snapshot.is_some()
    }
}

/// A recognized gesture event.
///
/// Feed these to [`crate::ImageViewer::handle`] in the order they arrive.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GestureEvent {
    /// Two fingers went down.
    PinchStart,
    /// Pinch moved; `scale` is the cumulative multiplier since the start.
    PinchUpdate {
        /// Cumulative scale multiplier.
        scale: f64,
    },
    /// Fingers lifted.
    PinchEnd,
    /// The pinch was interrupted.
    PinchCancel,
    /// A drag began.
    PanStart,
    /// Drag moved; `translation` is cumulative since the start.
    PanUpdate {
        /// Cumulative translation in viewport pixels.
        translation: Vec2,
    },
    /// Drag released with the given velocity.
    PanEnd {
        /// Release velocity in pixels per second.
        velocity: Vec2,
    },
    /// The drag was interrupted.
    PanCancel,
    /// One or more taps at `position` in displayed-image-local coordinates.
    Tap {
        /// Focal point of the tap.
        position: Point,
        /// Number of taps recognized.
        count: u32,
    },
}

/// Which correction ran when a gesture settled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SettleBranch {
    /// Scale was exactly `1.0`; translation animates back to zero.
    Recenter,
    /// Scale was below `1.0`; scale and translation animate to identity.
    RestoreIdentity,
    /// Scale was above the maximum; scale animates down to it.
    ClampScale,
    /// Scale was in range; translation glides with momentum inside its bounds.
    Momentum,
}
