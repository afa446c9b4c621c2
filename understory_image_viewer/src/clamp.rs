// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Legal translate and scale ranges for a zoomed image.
//!
//! Translation is expressed in a centered coordinate system: `0.0` on an axis
//! means the image is centered in the viewport along that axis.

use kurbo::{Size, Vec2};

/// Upper scale limit used by the default configuration.
pub const MAX_ZOOM_SCALE: f64 = 3.0;

/// Lower scale limit; a scale of `1.0` shows the fitted image unzoomed.
pub const MIN_ZOOM_SCALE: f64 = 1.0;

/// A screen axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Horizontal.
    X,
    /// Vertical.
    Y,
}

impl Axis {
    /// Both axes, horizontal first.
    pub const ALL: [Self; 2] = [Self::X, Self::Y];

    /// Returns the extent of `size` along this axis.
    #[must_use]
    pub fn extent(self, size: Size) -> f64 {
        match self {
            Self::X => size.width,
            Self::Y => size.height,
        }
    }

    /// Returns the component of `v` along this axis.
    #[must_use]
    pub fn component(self, v: Vec2) -> f64 {
        match self {
            Self::X => v.x,
            Self::Y => v.y,
        }
    }
}

/// A closed range `[min, max]` with `min <= max`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    /// Lower limit.
    pub min: f64,
    /// Upper limit.
    pub max: f64,
}

impl Bounds {
    /// The collapsed range `[0, 0]`.
    pub const ZERO: Self = Self { min: 0.0, max: 0.0 };

    /// Creates a range, swapping the limits if they are reversed.
    #[must_use]
    pub fn new(min: f64, max: f64) -> Self {
        if min <= max {
            Self { min, max }
        } else {
            Self { min: max, max: min }
        }
    }

    /// Pins `value` into this range.
    #[must_use]
    pub fn clamp(self, value: f64) -> f64 {
        clamp(value, self.min, self.max)
    }

    /// Returns `true` if `value` lies inside this range.
    #[must_use]
    pub fn contains(self, value: f64) -> bool {
        self.min <= value && value <= self.max
    }

    /// Returns `true` if no movement is allowed.
    #[must_use]
    pub fn is_collapsed(self) -> bool {
        self.min == self.max
    }
}

/// Pins `value` into `[min, max]`.
///
/// Unlike [`f64::clamp`] this never panics; a NaN `value` resolves to `min`.
#[must_use]
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    value.max(min).min(max)
}

/// Computes the legal translate range along `axis` for an image of
/// `displayed` size zoomed by `scale` inside `viewport`.
///
/// When the zoomed extent fits within the viewport the range collapses to
/// `[0, 0]`. Otherwise the image may be dragged until its edge reaches the
/// viewport edge.
#[must_use]
pub fn translate_bounds(scale: f64, displayed: Size, viewport: Size, axis: Axis) -> Bounds {
    let real = axis.extent(displayed) * scale;
    let view = axis.extent(viewport);
    if !real.is_finite() || view.is_nan() || real <= view {
        return Bounds::ZERO;
    }
    let half = (real - view) / 2.0;
    Bounds {
        min: -half,
        max: half,
    }
}

/// Pins both components of `translate` into their bounds at `scale`.
#[must_use]
pub fn clamp_translate(translate: Vec2, scale: f64, displayed: Size, viewport: Size) -> Vec2 {
    Vec2::new(
        translate_bounds(scale, displayed, viewport, Axis::X).clamp(translate.x),
        translate_bounds(scale, displayed, viewport, Axis::Y).clamp(translate.y),
    )
}

/// The default legal scale range, `[MIN_ZOOM_SCALE, MAX_ZOOM_SCALE]`.
#[must_use]
pub fn scale_bounds() -> Bounds {
    Bounds {
        min: MIN_ZOOM_SCALE,
        max: MAX_ZOOM_SCALE,
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Size, Vec2};

    use super::{
        Axis, Bounds, MAX_ZOOM_SCALE, clamp, clamp_translate, scale_bounds, translate_bounds,
    };

    #[test]
    fn bounds_collapse_when_content_fits() {
        let displayed = Size::new(400.0, 200.0);
        let viewport = Size::new(400.0, 800.0);

        assert_eq!(
            translate_bounds(1.0, displayed, viewport, Axis::X),
            Bounds::ZERO
        );
        assert_eq!(
            translate_bounds(3.0, displayed, viewport, Axis::Y),
            Bounds::ZERO
        );
        assert_eq!(
            translate_bounds(0.5, displayed, viewport, Axis::X),
            Bounds::ZERO
        );
    }

    #[test]
    fn bounds_are_symmetric_when_content_overflows() {
        let displayed = Size::new(400.0, 200.0);
        let viewport = Size::new(400.0, 800.0);

        let b = translate_bounds(2.0, displayed, viewport, Axis::X);
        assert_eq!(b, Bounds::new(-200.0, 200.0));
        assert!(!b.is_collapsed());

        let b = translate_bounds(5.0, displayed, viewport, Axis::Y);
        assert_eq!(b, Bounds::new(-100.0, 100.0));
    }

    #[test]
    fn degenerate_viewport_gives_finite_bounds() {
        let b = translate_bounds(2.0, Size::ZERO, Size::ZERO, Axis::X);
        assert_eq!(b, Bounds::ZERO);

        let b = translate_bounds(f64::NAN, Size::new(10.0, 10.0), Size::ZERO, Axis::Y);
        assert_eq!(b, Bounds::ZERO);

        let b = translate_bounds(f64::INFINITY, Size::new(10.0, 10.0), Size::ZERO, Axis::Y);
        assert_eq!(b, Bounds::ZERO);
    }

    #[test]
    fn clamp_is_idempotent() {
        for v in [-1e9, -3.5, -1.0, 0.0, 0.25, 1.0, 7.0, 1e9] {
            for (lo, hi) in [(0.0, 0.0), (-1.0, 1.0), (-200.0, 200.0), (2.0, 5.0)] {
                let once = clamp(v, lo, hi);
                assert_eq!(clamp(once, lo, hi), once);
                assert!(lo <= once && once <= hi);
            }
        }
    }

    #[test]
    fn clamp_handles_nan() {
        assert_eq!(clamp(f64::NAN, -1.0, 1.0), -1.0);
    }

    #[test]
    fn bounds_new_normalizes_order() {
        let b = Bounds::new(5.0, -5.0);
        assert_eq!(b.min, -5.0);
        assert_eq!(b.max, 5.0);
        assert!(b.contains(0.0));
        assert!(!b.contains(6.0));
    }

    #[test]
    fn clamp_translate_pins_each_axis() {
        let displayed = Size::new(400.0, 200.0);
        let viewport = Size::new(400.0, 800.0);
        let out = clamp_translate(Vec2::new(500.0, -90.0), 2.0, displayed, viewport);
        assert_eq!(out, Vec2::new(200.0, 0.0));
    }

    #[test]
    fn default_scale_bounds() {
        let b = scale_bounds();
        assert_eq!(b.min, 1.0);
        assert_eq!(b.max, MAX_ZOOM_SCALE);
    }
}
