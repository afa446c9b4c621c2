// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Aspect-aware fitting of an image into a viewport.

use kurbo::Size;

/// Computes the displayed size of an image inside `viewport`, before zoom.
///
/// Rules, in order:
/// - Square images become a square with side `min(viewport.width, viewport.height)`.
/// - Landscape images are scaled to the viewport width.
/// - Portrait images are scaled to the viewport height, unless that would
///   overflow the viewport width, in which case they are scaled to width.
///
/// An intrinsic size with a zero (or non-finite) dimension has not been
/// measured yet. The viewport size is returned as a placeholder until real
/// dimensions arrive.
#[must_use]
pub fn fit(intrinsic: Size, viewport: Size) -> Size {
    if !is_measured(intrinsic) {
        return viewport;
    }

    if intrinsic.width == intrinsic.height {
        let side = viewport.width.min(viewport.height);
        return Size::new(side, side);
    }

    let by_width = Size::new(
        viewport.width,
        viewport.width * intrinsic.height / intrinsic.width,
    );
    if intrinsic.width > intrinsic.height {
        return by_width;
    }

    let by_height = Size::new(
        viewport.height * intrinsic.width / intrinsic.height,
        viewport.height,
    );
    if by_height.width > viewport.width {
        by_width
    } else {
        by_height
    }
}

/// Returns `true` once both intrinsic dimensions are known.
#[must_use]
pub fn is_measured(intrinsic: Size) -> bool {
    intrinsic.width.is_finite()
        && intrinsic.height.is_finite()
        && intrinsic.width > 0.0
        && intrinsic.height > 0.0
}
