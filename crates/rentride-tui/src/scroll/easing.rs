//! L4 Atomic Layer: Pure easing curves for tab bar animations
//!
//! Timed curves map progress [0, 1] to eased progress [0, 1]. The spring
//! maps elapsed time to progress and may overshoot 1 before settling.

use std::time::Duration;

// Re-export EasingType from core
pub use rentride_core::EasingType;

/// Extension trait for EasingType with calculation methods
pub trait EasingTypeExt {
    /// Apply the easing function to a progress value
    ///
    /// # Arguments
    /// * `t` - Progress value in range [0, 1]
    ///
    /// # Returns
    /// Eased value in range [0, 1]
    fn apply(&self, t: f64) -> f64;
}

impl EasingTypeExt for EasingType {
    #[inline]
    fn apply(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            EasingType::None => if t < 1.0 { 0.0 } else { 1.0 },
            EasingType::Linear => t,
            EasingType::Cubic => cubic_ease_out(t),
            EasingType::Quintic => quintic_ease_out(t),
            EasingType::EaseOut => exponential_ease_out(t),
        }
    }
}

/// Cubic ease-out: f(t) = 1 - (1-t)³
#[inline]
fn cubic_ease_out(t: f64) -> f64 {
    let inv = 1.0 - t;
    1.0 - inv * inv * inv
}

/// Quintic ease-out: f(t) = 1 - (1-t)⁵
#[inline]
fn quintic_ease_out(t: f64) -> f64 {
    let inv = 1.0 - t;
    1.0 - inv * inv * inv * inv * inv
}

/// Exponential ease-out: f(t) = 1 - 2^(-10t)
#[inline]
fn exponential_ease_out(t: f64) -> f64 {
    if t >= 1.0 {
        1.0
    } else {
        1.0 - 2.0_f64.powf(-10.0 * t)
    }
}

/// Damped spring released from rest at distance 1 from its target.
///
/// `progress(t)` is `1 - x(t)` where `x` is the closed-form displacement of
/// a mass-spring-damper with zero initial velocity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spring {
    stiffness: f64,
    damping: f64,
    mass: f64,
    /// Displacement envelope below which the spring counts as settled
    rest_delta: f64,
}

impl Spring {
    pub const DEFAULT_REST_DELTA: f64 = 0.001;

    /// Non-positive parameters are replaced by small positive ones
    pub fn new(stiffness: f64, damping: f64, mass: f64) -> Self {
        Self {
            stiffness: stiffness.max(f64::EPSILON),
            damping: damping.max(0.0),
            mass: mass.max(f64::EPSILON),
            rest_delta: Self::DEFAULT_REST_DELTA,
        }
    }

    /// Undamped angular frequency ω₀ = √(k/m)
    #[inline]
    fn omega(&self) -> f64 {
        (self.stiffness / self.mass).sqrt()
    }

    /// Damping ratio ζ = c / (2√(km))
    #[inline]
    pub fn damping_ratio(&self) -> f64 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }

    /// Displacement from the target, starting at 1
    pub fn displacement(&self, elapsed: Duration) -> f64 {
        let t = elapsed.as_secs_f64();
        let w0 = self.omega();
        let zeta = self.damping_ratio();

        if (zeta - 1.0).abs() < 1e-6 {
            (-w0 * t).exp() * (1.0 + w0 * t)
        } else if zeta < 1.0 {
            let wd = w0 * (1.0 - zeta * zeta).sqrt();
            let decay = (-zeta * w0 * t).exp();
            decay * ((wd * t).cos() + (zeta * w0 / wd) * (wd * t).sin())
        } else {
            let root = (zeta * zeta - 1.0).sqrt();
            let r1 = -w0 * (zeta - root);
            let r2 = -w0 * (zeta + root);
            (r2 * (r1 * t).exp() - r1 * (r2 * t).exp()) / (r2 - r1)
        }
    }

    /// Upper bound of |displacement| from `elapsed` onwards
    fn envelope(&self, elapsed: Duration) -> f64 {
        let t = elapsed.as_secs_f64();
        let w0 = self.omega();
        let zeta = self.damping_ratio();

        if zeta < 1.0 - 1e-6 {
            let wd = w0 * (1.0 - zeta * zeta).sqrt();
            let amplitude = (1.0 + (zeta * w0 / wd).powi(2)).sqrt();
            (-zeta * w0 * t).exp() * amplitude
        } else {
            // Critically and over-damped springs approach the target monotonically
            self.displacement(elapsed).abs()
        }
    }

    /// Eased progress towards the target; may exceed 1 while overshooting
    #[inline]
    pub fn progress(&self, elapsed: Duration) -> f64 {
        1.0 - self.displacement(elapsed)
    }

    /// Whether the spring has settled within the rest threshold
    pub fn is_at_rest(&self, elapsed: Duration) -> bool {
        self.envelope(elapsed) < self.rest_delta
    }
}
