// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Size, Vec2};

/// Zoom and pan applied to the displayed image.
///
/// `translate` is measured in viewport pixels from the centered position;
/// `scale` zooms the image about its own center.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Transform {
    /// Uniform zoom factor.
    pub scale: f64,
    /// Offset from the centered position, in viewport pixels.
    pub translate: Vec2,
}

impl Transform {
    /// Unzoomed, centered.
    pub const IDENTITY: Self = Self {
        scale: 1.0,
        translate: Vec2::ZERO,
    };

    /// Creates a transform from its three components.
    #[must_use]
    pub const fn new(scale: f64, translate_x: f64, translate_y: f64) -> Self {
        Self {
            scale,
            translate: Vec2::new(translate_x, translate_y),
        }
    }

    /// Returns `true` for the identity transform.
    #[must_use]
    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }

    /// Builds the affine map from displayed-image-local coordinates into
    /// viewport coordinates.
    ///
    /// The image is first centered in the viewport, then translated, and
    /// scaled about its own center.
    #[must_use]
    pub fn to_affine(&self, displayed: Size, viewport: Size) -> Affine {
        let view_center = viewport.to_vec2() * 0.5;
        let image_center = displayed.to_vec2() * 0.5;
        Affine::translate(view_center + self.translate)
            * Affine::scale(self.scale)
            * Affine::translate(-image_center)
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Read-back of the live transform and image dimensions for hosts.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ImageData {
    /// Current horizontal offset.
    pub translate_x: f64,
    /// Current vertical offset.
    pub translate_y: f64,
    /// Current zoom factor.
    pub scale: f64,
    /// Natural width of the image, `0.0` until measured.
    pub intrinsic_width: f64,
    /// Natural height of the image, `0.0` until measured.
    pub intrinsic_height: f64,
}
