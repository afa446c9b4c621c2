// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::time::Duration;

use kurbo::{Affine, Point, Size, Vec2};
use tracing::{debug, trace, warn};

use crate::animation::{AnimatedValue, Decay};
use crate::clamp::{Axis, MIN_ZOOM_SCALE, translate_bounds};
use crate::config::ViewerConfig;
use crate::error::ConfigError;
use crate::fit::fit;
use crate::gesture::{GestureEvent, GestureSession, SettleBranch};
use crate::host::ViewerHost;
use crate::transform::{ImageData, Transform};

/// Image identity observations after which a change resets the transform.
///
/// The mount counts as the first; the second is the measurement-driven
/// change that usually follows it.
const PRESERVED_OBSERVATIONS: u8 = 2;

/// Gesture-driven zoom and pan state for a single displayed image.
///
/// `ImageViewer` is the only owner of the live transform. Gesture handlers,
/// the step-zoom buttons and the per-frame [`ImageViewer::tick`] all run on
/// the caller's thread, one at a time; renderers sample
/// [`ImageViewer::transform`] or [`ImageViewer::image_to_view`] after each
/// tick.
///
/// `K` identifies the image (a URL, an asset id, ...). Changing it through
/// [`ImageViewer::set_image`] drives load notifications and the lifecycle
/// reset. `H` receives notifications; see [`ViewerHost`].
#[derive(Clone, Debug)]
pub struct ImageViewer<K, H = ()> {
    config: ViewerConfig,
    host: H,
    image: K,
    observations: u8,
    loaded: bool,
    intrinsic: Size,
    viewport: Size,
    displayed: Size,
    scale: AnimatedValue,
    translate_x: AnimatedValue,
    translate_y: AnimatedValue,
    pinch: GestureSession,
    pan: GestureSession,
}

impl<K: PartialEq, H: ViewerHost> ImageViewer<K, H> {
    /// Mounts a viewer for `image` with the default configuration.
    ///
    /// `initial` is preserved until the image identity has changed twice.
    /// The host immediately receives `load_changed(false)`.
    pub fn new(image: K, viewport: Size, initial: Transform, host: H) -> Self {
        Self::mount(ViewerConfig::default(), image, viewport, initial, host)
    }

    /// Mounts a viewer with a caller-supplied configuration.
    pub fn with_config(
        config: ViewerConfig,
        image: K,
        viewport: Size,
        initial: Transform,
        host: H,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::mount(config, image, viewport, initial, host))
    }

    fn mount(config: ViewerConfig, image: K, viewport: Size, initial: Transform, host: H) -> Self {
        let mut viewer = Self {
            config,
            host,
            image,
            observations: 1,
            loaded: false,
            intrinsic: Size::ZERO,
            viewport,
            displayed: fit(Size::ZERO, viewport),
            scale: AnimatedValue::new(initial.scale),
            translate_x: AnimatedValue::new(initial.translate.x),
            translate_y: AnimatedValue::new(initial.translate.y),
            pinch: GestureSession::default(),
            pan: GestureSession::default(),
        };
        viewer.host.load_changed(false);
        viewer
    }

    /// Returns the active configuration.
    #[must_use]
    pub fn config(&self) -> &ViewerConfig {
        &self.config
    }

    /// Returns the host.
    #[must_use]
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Returns the host mutably.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Consumes the viewer and returns its host.
    pub fn into_host(self) -> H {
        self.host
    }

    /// Returns the current image identity.
    #[must_use]
    pub fn image(&self) -> &K {
        &self.image
    }

    /// Switches to a different image.
    ///
    /// Does nothing if `image` equals the current identity. Otherwise the
    /// load state drops to `false`, the intrinsic size becomes unknown, and
    /// from the third observed identity onwards the transform snaps to
    /// identity without animation. Gestures in progress continue from identity.
    pub fn set_image(&mut self, image: K) {
        if image == self.image {
            return;
        }
        self.image = image;
        self.set_loaded(false);
        self.set_intrinsic_size(Size::ZERO);

        if self.observations < PRESERVED_OBSERVATIONS {
            self.observations += 1;
            debug!(
                observations = self.observations,
                "image changed, initial transform kept"
            );
        } else {
            debug!("image changed, transform reset");
            self.scale.set(MIN_ZOOM_SCALE);
            self.translate_x.set(0.0);
            self.translate_y.set(0.0);
            self.pinch.rebase(Transform::IDENTITY);
            self.pan.rebase(Transform::IDENTITY);
        }
    }

    /// Marks the current image as decoded and presented.
    pub fn image_loaded(&mut self) {
        self.set_loaded(true);
    }

    /// Returns `true` once the current image has loaded.
    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    fn set_loaded(&mut self, loaded: bool) {
        if self.loaded != loaded {
            self.loaded = loaded;
            self.host.load_changed(loaded);
        }
    }

    /// Records the natural pixel size of the current image.
    ///
    /// A zero dimension means "not measured yet".
    pub fn set_intrinsic_size(&mut self, intrinsic: Size) {
        self.intrinsic = intrinsic;
        self.displayed = fit(self.intrinsic, self.viewport);
    }

    /// Returns the natural pixel size of the current image.
    #[must_use]
    pub fn intrinsic_size(&self) -> Size {
        self.intrinsic
    }

    /// Updates the viewport size, for example after a rotation.
    pub fn set_viewport(&mut self, viewport: Size) {
        self.viewport = viewport;
        self.displayed = fit(self.intrinsic, self.viewport);
    }

    /// Returns the viewport size.
    #[must_use]
    pub fn viewport(&self) -> Size {
        self.viewport
    }

    /// Returns the fitted size of the image before zoom.
    #[must_use]
    pub fn displayed_size(&self) -> Size {
        self.displayed
    }

    /// Returns the live transform.
    #[must_use]
    pub fn transform(&self) -> Transform {
        Transform::new(
            self.scale.get(),
            self.translate_x.get(),
            self.translate_y.get(),
        )
    }

    /// Returns the transform every in-flight timing animation is headed to.
    #[must_use]
    pub fn target_transform(&self) -> Transform {
        Transform::new(
            self.scale.target(),
            self.translate_x.target(),
            self.translate_y.target(),
        )
    }

    /// Returns the map from displayed-image-local to viewport coordinates.
    #[must_use]
    pub fn image_to_view(&self) -> Affine {
        self.transform().to_affine(self.displayed, self.viewport)
    }

    /// Returns the live animated value for each transform component.
    #[must_use]
    pub fn animated_values(&self) -> [&AnimatedValue; 3] {
        [&self.scale, &self.translate_x, &self.translate_y]
    }

    /// Returns `true` while a pinch or pan gesture is in progress.
    #[must_use]
    pub fn is_repositioning(&self) -> bool {
        self.pinch.is_active() || self.pan.is_active()
    }

    /// Returns `true` while any transform component is animating.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.scale.is_animating()
            || self.translate_x.is_animating()
            || self.translate_y.is_animating()
    }

    /// Advances all animations by `dt`.
    ///
    /// Returns `true` while anything is still animating.
    pub fn tick(&mut self, dt: Duration) -> bool {
        let scale = self.scale.tick(dt);
        let x = self.translate_x.tick(dt);
        let y = self.translate_y.tick(dt);
        scale || x || y
    }

    /// Dispatches a gesture event to its handler.
    pub fn handle(&mut self, event: GestureEvent) {
        match event {
            GestureEvent::PinchStart => self.pinch_start(),
            GestureEvent::PinchUpdate { scale } => self.pinch_update(scale),
            GestureEvent::PinchEnd => {
                self.pinch_end();
            }
            GestureEvent::PinchCancel => {
                self.pinch_cancel();
            }
            GestureEvent::PanStart => self.pan_start(),
            GestureEvent::PanUpdate { translation } => self.pan_update(translation),
            GestureEvent::PanEnd { velocity } => {
                self.pan_end(velocity);
            }
            GestureEvent::PanCancel => {
                self.pan_cancel();
            }
            GestureEvent::Tap { position, count } => {
                self.tap(position, count);
            }
        }
    }

    /// Starts a pinch, snapshotting the live scale.
    pub fn pinch_start(&mut self) {
        if !self.pinch.begin(self.transform()) {
            warn!("pinch start while a pinch is active, ignored");
            return;
        }
        debug!(scale = self.scale.get(), "pinch begin");
        self.host.reposition_changed(true);
    }

    /// Applies the cumulative pinch `multiplier` to the snapshot scale.
    ///
    /// No clamping happens here; out-of-range scale is corrected when the
    /// gesture settles.
    pub fn pinch_update(&mut self, multiplier: f64) {
        let Some(snapshot) = self.pinch.snapshot() else {
            warn!("pinch update without a pinch start, ignored");
            return;
        };
        if !multiplier.is_finite() {
            warn!(multiplier, "non-finite pinch multiplier, ignored");
            return;
        }
        let scale = snapshot.scale * multiplier;
        trace!(multiplier, scale, "pinch update");
        self.scale.set(scale);
    }

    /// Ends the pinch.
    ///
    /// Settling normally happens on pan release. With
    /// [`ViewerConfig::settle_on_pinch_end`] set and no pan in progress, the
    /// pinch settles on its own and the chosen branch is returned.
    pub fn pinch_end(&mut self) -> Option<SettleBranch> {
        if self.pinch.end().is_none() {
            warn!("pinch end without a pinch start, ignored");
            return None;
        }
        let branch = if self.config.settle_on_pinch_end && !self.pan.is_active() {
            Some(self.settle(Vec2::ZERO))
        } else {
            None
        };
        debug!(scale = self.scale.get(), ?branch, "pinch end");
        self.host.reposition_changed(false);
        branch
    }

    /// Handles an interrupted pinch exactly like its end.
    pub fn pinch_cancel(&mut self) -> Option<SettleBranch> {
        self.pinch_end()
    }

    /// Starts a pan, snapshotting the live translation.
    pub fn pan_start(&mut self) {
        if !self.pan.begin(self.transform()) {
            warn!("pan start while a pan is active, ignored");
            return;
        }
        debug!(
            translate_x = self.translate_x.get(),
            translate_y = self.translate_y.get(),
            "pan begin"
        );
        self.host.reposition_changed(true);
    }

    /// Applies the cumulative drag `translation` to the snapshot translation.
    ///
    /// Horizontal movement is ignored while zoomed out below `1.0`. Each axis
    /// is clamped to its bounds at the live scale, except the vertical axis at
    /// scale `<= 1.0`, which moves freely until the gesture settles.
    ///
    /// Below `1.0` only horizontal movement is dropped; vertical drags still
    /// follow the finger so the image can be pulled toward a dismiss gesture.
    pub fn pan_update(&mut self, translation: Vec2) {
        let Some(snapshot) = self.pan.snapshot() else {
            warn!("pan update without a pan start, ignored");
            return;
        };
        let scale = self.scale.get();

        if scale >= MIN_ZOOM_SCALE {
            let bounds = translate_bounds(scale, self.displayed, self.viewport, Axis::X);
            let candidate = snapshot.translate.x + translation.x;
            let committed = bounds.clamp(candidate);
            trace!(candidate, committed, "pan update x");
            self.translate_x.set(committed);
        }

        let candidate = snapshot.translate.y + translation.y;
        let committed = if scale > MIN_ZOOM_SCALE {
            translate_bounds(scale, self.displayed, self.viewport, Axis::Y).clamp(candidate)
        } else {
            candidate
        };
        trace!(candidate, committed, "pan update y");
        self.translate_y.set(committed);
    }

    /// Ends the pan, scheduling the settling animation for the live scale.
    ///
    /// Returns the branch taken, or `None` if no pan was in progress.
    pub fn pan_end(&mut self, velocity: Vec2) -> Option<SettleBranch> {
        if self.pan.end().is_none() {
            warn!("pan end without a pan start, ignored");
            return None;
        }
        let branch = self.settle(velocity);
        debug!(?branch, "pan end");
        self.host.reposition_changed(false);
        Some(branch)
    }

    /// Handles an interrupted pan as a release with zero velocity.
    pub fn pan_cancel(&mut self) -> Option<SettleBranch> {
        self.pan_end(Vec2::ZERO)
    }

    fn settle(&mut self, velocity: Vec2) -> SettleBranch {
        let scale = self.scale.get();
        let duration = self.config.timing_duration();

        let branch = if scale == MIN_ZOOM_SCALE {
            SettleBranch::Recenter
        } else if scale < MIN_ZOOM_SCALE {
            SettleBranch::RestoreIdentity
        } else if scale > self.config.max_zoom_scale {
            SettleBranch::ClampScale
        } else {
            SettleBranch::Momentum
        };

        match branch {
            SettleBranch::Recenter => {
                self.translate_x.animate_to(0.0, duration);
                self.translate_y.animate_to(0.0, duration);
            }
            SettleBranch::RestoreIdentity => {
                self.scale.animate_to(MIN_ZOOM_SCALE, duration);
                self.translate_x.animate_to(0.0, duration);
                self.translate_y.animate_to(0.0, duration);
            }
            SettleBranch::ClampScale => {
                self.scale.animate_to(self.config.max_zoom_scale, duration);
            }
            SettleBranch::Momentum => {
                for axis in Axis::ALL {
                    let bounds = translate_bounds(scale, self.displayed, self.viewport, axis);
                    let decay = Decay::new(
                        axis.component(velocity),
                        self.config.decay_deceleration,
                        self.config.decay_velocity_epsilon,
                        bounds,
                    );
                    match axis {
                        Axis::X => self.translate_x.decay(decay),
                        Axis::Y => self.translate_y.decay(decay),
                    }
                }
            }
        }
        debug!(scale, ?branch, "settle");
        branch
    }

    /// Handles a recognized tap of `count` taps at `position`.
    ///
    /// Only [`ViewerConfig::zoom_tap_count`] taps act, and never while a
    /// pinch or pan is in progress. Returns `true` if the zoom toggled.
    pub fn tap(&mut self, position: Point, count: u32) -> bool {
        if count != self.config.zoom_tap_count {
            return false;
        }
        if self.is_repositioning() {
            debug!("tap during pinch/pan, ignored");
            return false;
        }
        self.double_tap(position);
        true
    }

    /// Toggles between identity and maximum zoom centered on `focal`.
    ///
    /// `focal` is in displayed-image-local coordinates. Zooming in aims to
    /// bring the focal point to the viewport center, within the bounds at
    /// maximum zoom.
    pub fn double_tap(&mut self, focal: Point) {
        let duration = self.config.timing_duration();

        if self.scale.get() > MIN_ZOOM_SCALE {
            debug!("double tap, zoom out");
            self.scale.animate_to(MIN_ZOOM_SCALE, duration);
            self.translate_x.animate_to(0.0, duration);
            self.translate_y.animate_to(0.0, duration);
            return;
        }

        let max = self.config.max_zoom_scale;
        let target_x = translate_bounds(max, self.displayed, self.viewport, Axis::X)
            .clamp((self.displayed.width / 2.0 - focal.x) * max);
        let target_y = translate_bounds(max, self.displayed, self.viewport, Axis::Y)
            .clamp((self.displayed.height / 2.0 - focal.y) * max);
        debug!(target_x, target_y, "double tap, zoom in");

        self.scale.animate_to(max, duration);
        self.translate_x.animate_to(target_x, duration);
        self.translate_y.animate_to(target_y, duration);
    }

    /// Zooms in by one step, up to the maximum.
    ///
    /// Steps from where the scale is headed, so repeated presses during an
    /// animation accumulate.
    pub fn increment_scale(&mut self) {
        let current = self.scale.target();
        let max = self.config.max_zoom_scale;
        if current < max {
            let next = (current + self.config.zoom_step).min(max);
            debug!(from = current, to = next, "increment scale");
            self.scale.animate_to(next, self.config.timing_duration());
        }
        self.pinch.rebase_scale(self.scale.target());
    }

    /// Zooms out by one step, down to `1.0`.
    pub fn decrement_scale(&mut self) {
        let current = self.scale.target();
        if current > MIN_ZOOM_SCALE {
            let next = (current - self.config.zoom_step).max(MIN_ZOOM_SCALE);
            debug!(from = current, to = next, "decrement scale");
            self.scale.animate_to(next, self.config.timing_duration());
        }
        self.pinch.rebase_scale(self.scale.target());
    }

    /// Reads the live transform and intrinsic size.
    #[must_use]
    pub fn inspect(&self) -> ImageData {
        ImageData {
            translate_x: self.translate_x.get(),
            translate_y: self.translate_y.get(),
            scale: self.scale.get(),
            intrinsic_width: self.intrinsic.width,
            intrinsic_height: self.intrinsic.height,
        }
    }

    /// Forwards a dismiss request to the host.
    ///
    /// The transform is left untouched; hosts can consult
    /// [`ImageViewer::is_repositioning`] to decide whether to honor it.
    pub fn request_close(&mut self) {
        debug!("close requested");
        self.host.request_close();
    }
}
