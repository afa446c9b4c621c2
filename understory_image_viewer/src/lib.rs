// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_image_viewer --heading-base-level=0

//! Understory Image Viewer: a headless pinch/pan/double-tap image viewport.
//!
//! This crate turns already-recognized touch gestures into a zoom + pan
//! transform for a single image shown inside a viewport. It covers:
//! - Fitting the image into the viewport under aspect rules ([`fit()`]).
//! - Legal pan and zoom ranges at any scale ([`translate_bounds`], [`scale_bounds`]).
//! - Pinch, pan and double-tap handlers with end-of-gesture settling and
//!   momentum ([`ImageViewer`]).
//! - Step-zoom buttons and a read-back of the live transform.
//! - Frame-driven animations that the host advances with [`ImageViewer::tick`].
//!
//! It does **not** recognize gestures, decode images or render anything.
//! Callers are expected to:
//! - Feed pinch/pan/tap events from their gesture recognizer.
//! - Report the image's natural size once known, and the viewport size.
//! - Call [`ImageViewer::tick`] once per frame and draw the image through
//!   [`ImageViewer::image_to_view`].
//!
//! ## Minimal example
//!
//! ```rust
//! use core::time::Duration;
//! use kurbo::{Size, Vec2};
//! use understory_image_viewer::{ImageViewer, Transform};
//!
//! // 400x800 portrait screen showing a 1200x600 landscape photo.
//! let mut viewer = ImageViewer::new("photo.jpg", Size::new(400.0, 800.0), Transform::IDENTITY, ());
//! viewer.set_intrinsic_size(Size::new(1200.0, 600.0));
//! assert_eq!(viewer.displayed_size(), Size::new(400.0, 200.0));
//!
//! // Pinch to 2x, then drag far to the right.
//! viewer.pinch_start();
//! viewer.pinch_update(2.0);
//! viewer.pinch_end();
//!
//! viewer.pan_start();
//! viewer.pan_update(Vec2::new(500.0, 0.0));
//! // At 2x the image is 800 wide in a 400 wide viewport: at most 200 of travel.
//! assert_eq!(viewer.transform().translate.x, 200.0);
//! viewer.pan_end(Vec2::ZERO);
//!
//! // Drive animations from the frame clock.
//! while viewer.tick(Duration::from_millis(16)) {}
//! ```
//!
//! ## Design notes
//!
//! - The viewer is a single owner: all events are handled one at a time on
//!   the caller's thread, and the live values are what renderers sample.
//! - Handlers never block on animations. They install a target on an
//!   [`animation::AnimatedValue`] and return; a direct write from a later
//!   gesture cancels it.
//! - Pinch leaves scale unclamped. Out-of-range scale settles when the pan
//!   is released, or at pinch end when
//!   [`ViewerConfig::settle_on_pinch_end`] is set.
//!
//! ## Features
//!
//! - `std` (default): build Kurbo and Tracing with the standard library.
//! - `libm`: use `libm` for Kurbo's float math in `no_std` builds.
//! - `serde`: derive `Serialize`/`Deserialize` for [`ViewerConfig`],
//!   [`Transform`] and [`ImageData`].
//!
//! This crate is `no_std`.

#![no_std]

pub mod animation;
mod clamp;
mod config;
mod error;
mod fit;
mod gesture;
mod host;
mod transform;
mod viewer;

pub use clamp::{
    Axis, Bounds, MAX_ZOOM_SCALE, MIN_ZOOM_SCALE, clamp, clamp_translate, scale_bounds,
    translate_bounds,
};
pub use config::ViewerConfig;
pub use error::ConfigError;
pub use fit::{fit, is_measured};
pub use gesture::{GestureEvent, GestureSession, SettleBranch};
pub use host::ViewerHost;
pub use transform::{ImageData, Transform};
pub use viewer::ImageViewer;
