// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Frame-driven animation records.
//!
//! Handlers never wait on an animation. They install a target and its
//! parameters on an [`AnimatedValue`]; the host advances every value once per
//! frame with [`AnimatedValue::tick`] and samples the result.
//!
//! ## Minimal example
//!
//! ```
//! use core::time::Duration;
//! use understory_image_viewer::animation::AnimatedValue;
//!
//! let mut value = AnimatedValue::new(1.0);
//! value.animate_to(3.0, Duration::from_millis(300));
//! assert_eq!(value.target(), 3.0);
//!
//! value.tick(Duration::from_millis(150));
//! assert_eq!(value.get(), 2.0);
//!
//! assert!(!value.tick(Duration::from_millis(150)));
//! assert_eq!(value.get(), 3.0);
//! ```

use core::time::Duration;

use crate::clamp::Bounds;

/// Each frame scales the decay velocity by
/// `exp(-(1 - deceleration) * elapsed_ms * DECAY_SLOPE)`.
const DECAY_SLOPE: f64 = 0.1;

/// Longest frame a decay integrates in one step, so a stalled frame does not
/// fling content across the whole range.
const MAX_DECAY_STEP: Duration = Duration::from_millis(64);

/// Easing curve for [`Timing`] animations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Easing {
    /// Constant speed.
    Linear,
    /// Quadratic acceleration in the first half, deceleration in the second.
    #[default]
    QuadInOut,
}

impl Easing {
    /// Maps linear progress `t` in `[0, 1]` onto eased progress.
    #[must_use]
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::QuadInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    let u = 2.0 * (1.0 - t);
                    1.0 - u * u / 2.0
                }
            }
        }
    }
}

/// Moves a value from `from` to `to` over a fixed duration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Timing {
    from: f64,
    to: f64,
    duration: Duration,
    elapsed: Duration,
    easing: Easing,
}

impl Timing {
    /// Creates a timing animation with the default easing.
    #[must_use]
    pub fn new(from: f64, to: f64, duration: Duration) -> Self {
        Self {
            from,
            to,
            duration,
            elapsed: Duration::ZERO,
            easing: Easing::default(),
        }
    }

    /// Replaces the easing curve.
    #[must_use]
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Value this animation settles on.
    #[must_use]
    pub fn to(&self) -> f64 {
        self.to
    }

    /// Advances by `dt` and returns the new value plus whether it finished.
    fn advance(&mut self, dt: Duration) -> (f64, bool) {
        self.elapsed = self.elapsed.saturating_add(dt);
        if self.elapsed >= self.duration {
            return (self.to, true);
        }
        let t = self.elapsed.div_duration_f64(self.duration);
        let eased = self.easing.apply(t);
        (self.from + (self.to - self.from) * eased, false)
    }
}

/// Momentum decay seeded by a release velocity and pinned to a range.
///
/// The value keeps moving in the direction of the initial velocity until the
/// velocity drops under `velocity_epsilon` or the bound ahead is reached.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Decay {
    initial_velocity: f64,
    velocity: f64,
    deceleration: f64,
    velocity_epsilon: f64,
    bounds: Bounds,
    elapsed: Duration,
}

impl Decay {
    /// Creates a decay animation.
    ///
    /// `velocity` is in units per second; `deceleration` lies in `(0, 1)`,
    /// larger values glide further.
    #[must_use]
    pub fn new(velocity: f64, deceleration: f64, velocity_epsilon: f64, bounds: Bounds) -> Self {
        let velocity = if velocity.is_finite() { velocity } else { 0.0 };
        Self {
            initial_velocity: velocity,
            velocity,
            deceleration,
            velocity_epsilon,
            bounds,
            elapsed: Duration::ZERO,
        }
    }

    /// Range the value is held within.
    #[must_use]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Current velocity in units per second.
    #[must_use]
    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    fn advance(&mut self, current: f64, dt: Duration) -> (f64, bool) {
        self.elapsed = self.elapsed.saturating_add(dt);
        let elapsed_ms = self.elapsed.as_secs_f64() * 1000.0;
        let step_s = dt.min(MAX_DECAY_STEP).as_secs_f64();

        let falloff = libm::exp(-(1.0 - self.deceleration) * elapsed_ms * DECAY_SLOPE);
        self.velocity *= falloff;
        let next = current + self.velocity * step_s;

        if self.initial_velocity < 0.0 && next <= self.bounds.min {
            return (self.bounds.min, true);
        }
        if self.initial_velocity > 0.0 && next >= self.bounds.max {
            return (self.bounds.max, true);
        }
        let next = self.bounds.clamp(next);
        (next, libm::fabs(self.velocity) < self.velocity_epsilon)
    }
}

/// An in-flight animation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Animation {
    /// Fixed-duration move to a target.
    Timing(Timing),
    /// Velocity-driven glide within bounds.
    Decay(Decay),
}

/// A scalar with an optional animation driving it.
///
/// Writing with [`AnimatedValue::set`] cancels whatever animation is in
/// flight; the last write wins.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimatedValue {
    value: f64,
    animation: Option<Animation>,
}

impl AnimatedValue {
    /// Creates a resting value.
    #[must_use]
    pub const fn new(value: f64) -> Self {
        Self {
            value,
            animation: None,
        }
    }

    /// Returns the live value.
    #[must_use]
    pub fn get(&self) -> f64 {
        self.value
    }

    /// Returns where the value is headed.
    ///
    /// This is the timing target while one is in flight, and the live value
    /// otherwise (a decay has no fixed destination).
    #[must_use]
    pub fn target(&self) -> f64 {
        match &self.animation {
            Some(Animation::Timing(timing)) => timing.to,
            _ => self.value,
        }
    }

    /// Returns the in-flight animation, if any.
    #[must_use]
    pub fn animation(&self) -> Option<&Animation> {
        self.animation.as_ref()
    }

    /// Returns `true` while an animation is in flight.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Writes `value` immediately, cancelling any animation.
    pub fn set(&mut self, value: f64) {
        self.value = value;
        self.animation = None;
    }

    /// Starts a timing animation from the live value to `to`.
    pub fn animate_to(&mut self, to: f64, duration: Duration) {
        self.animate(Animation::Timing(Timing::new(self.value, to, duration)));
    }

    /// Starts a decay animation from the live value.
    ///
    /// The live value is first pinned into the decay bounds.
    pub fn decay(&mut self, decay: Decay) {
        self.value = decay.bounds.clamp(self.value);
        self.animate(Animation::Decay(decay));
    }

    /// Installs `animation`, replacing any in flight.
    pub fn animate(&mut self, animation: Animation) {
        self.animation = Some(animation);
    }

    /// Advances the animation by `dt`.
    ///
    /// Returns `true` while the value is still animating.
    pub fn tick(&mut self, dt: Duration) -> bool {
        let Some(animation) = &mut self.animation else {
            return false;
        };
        let (value, done) = match animation {
            Animation::Timing(timing) => timing.advance(dt),
            Animation::Decay(decay) => decay.advance(self.value, dt),
        };
        self.value = value;
        if done {
            self.animation = None;
        }
        !done
    }
}

impl Default for AnimatedValue {
    fn default() -> Self {
        Self::new(0.0)
    }
}

#[cfg(test)]
mod tests {
    use core::time::Duration;

    use super::{AnimatedValue, Animation, Decay, Easing, Timing};
    use crate::clamp::Bounds;

    const FRAME: Duration = Duration::from_millis(16);

    fn run(value: &mut AnimatedValue) -> u32 {
        let mut frames = 0;
        while value.tick(FRAME) {
            frames += 1;
            assert!(frames < 10_000, "animation never settled");
        }
        frames
    }

    #[test]
    fn easing_endpoints() {
        for easing in [Easing::Linear, Easing::QuadInOut] {
            assert_eq!(easing.apply(0.0), 0.0);
            assert_eq!(easing.apply(1.0), 1.0);
            assert_eq!(easing.apply(0.5), 0.5);
        }
        assert_eq!(Easing::QuadInOut.apply(0.25), 0.125);
        assert_eq!(Easing::QuadInOut.apply(2.0), 1.0);
    }

    #[test]
    fn timing_reaches_target_exactly() {
        let mut value = AnimatedValue::new(0.0);
        value.animate_to(200.0, Duration::from_millis(300));
        run(&mut value);
        assert_eq!(value.get(), 200.0);
        assert!(!value.is_animating());
    }

    #[test]
    fn zero_duration_timing_finishes_on_first_tick() {
        let mut value = AnimatedValue::new(1.0);
        value.animate_to(2.0, Duration::ZERO);
        assert!(!value.tick(Duration::ZERO));
        assert_eq!(value.get(), 2.0);
    }

    #[test]
    fn timing_with_linear_easing() {
        let mut value = AnimatedValue::new(0.0);
        value.animate(Animation::Timing(
            Timing::new(0.0, 10.0, Duration::from_millis(100)).with_easing(Easing::Linear),
        ));
        value.tick(Duration::from_millis(25));
        assert!((value.get() - 2.5).abs() < 1e-9);
    }

    #[test]
    fn set_cancels_animation() {
        let mut value = AnimatedValue::new(0.0);
        value.animate_to(10.0, Duration::from_millis(300));
        value.tick(FRAME);
        value.set(-4.0);
        assert!(!value.is_animating());
        assert_eq!(value.target(), -4.0);
        assert!(!value.tick(FRAME));
        assert_eq!(value.get(), -4.0);
    }

    #[test]
    fn decay_stops_at_bound_ahead() {
        let mut value = AnimatedValue::new(0.0);
        value.decay(Decay::new(5_000.0, 0.998, 1.0, Bounds::new(-50.0, 50.0)));
        run(&mut value);
        assert_eq!(value.get(), 50.0);

        let mut value = AnimatedValue::new(0.0);
        value.decay(Decay::new(-5_000.0, 0.998, 1.0, Bounds::new(-50.0, 50.0)));
        run(&mut value);
        assert_eq!(value.get(), -50.0);
    }

    #[test]
    fn decay_slows_down_inside_wide_bounds() {
        let mut value = AnimatedValue::new(0.0);
        value.decay(Decay::new(100.0, 0.998, 1.0, Bounds::new(-1e6, 1e6)));

        value.tick(FRAME);
        let first_step = value.get();
        assert!(first_step > 0.0);

        let mut last = value.get();
        let mut last_step = first_step;
        while value.tick(FRAME) {
            let step = value.get() - last;
            assert!(step <= last_step + 1e-12);
            last_step = step;
            last = value.get();
        }
        assert!(value.get() > 0.0 && value.get() < 1e6);
    }

    #[test]
    fn stalled_frame_integrates_at_most_one_capped_step() {
        let wide = Bounds::new(-1e6, 1e6);
        let mut value = AnimatedValue::new(0.0);
        value.decay(Decay::new(1_000.0, 0.998, 1.0, wide));

        assert!(value.tick(Duration::from_secs(1)));
        let velocity = 1_000.0 * libm::exp(-0.2);
        assert!(libm::fabs(value.get() - velocity * 0.064) < 1e-9);

        let Some(Animation::Decay(decay)) = value.animation() else {
            panic!("expected a decay in flight");
        };
        assert!(libm::fabs(decay.velocity() - velocity) < 1e-9);
        assert_eq!(decay.bounds(), wide);
    }

    #[test]
    fn decay_with_zero_velocity_pins_into_bounds() {
        let mut value = AnimatedValue::new(120.0);
        value.decay(Decay::new(0.0, 0.998, 1.0, Bounds::new(-100.0, 100.0)));
        assert_eq!(value.get(), 100.0);
        assert!(!value.tick(FRAME));
        assert_eq!(value.get(), 100.0);
    }

    #[test]
    fn decay_ignores_non_finite_velocity() {
        let mut value = AnimatedValue::new(0.0);
        value.decay(Decay::new(f64::NAN, 0.998, 1.0, Bounds::new(-1.0, 1.0)));
        assert!(!value.tick(FRAME));
        assert_eq!(value.get(), 0.0);
    }

    #[test]
    fn target_reports_timing_destination() {
        let mut value = AnimatedValue::new(1.0);
        assert_eq!(value.target(), 1.0);
        value.animate_to(2.5, Duration::from_millis(300));
        assert_eq!(value.target(), 2.5);
        assert_eq!(value.get(), 1.0);
    }
}
