//! Common constants and checks for channel calculations.

use crate::error::{ChannelError, ChannelResult};
use cr_core::numeric::ensure_finite;

/// Upper Reynolds number of purely laminar flow.
pub const RE_LAMINAR_MAX: f64 = 2300.0;

/// Lower Reynolds number of purely turbulent flow.
pub const RE_TURBULENT_MIN: f64 = 3000.0;

/// Relative roughness above which the rough-tube friction fit applies.
pub const ROUGH_THRESHOLD: f64 = 1e-5;

/// Reflector outer radius over core radius.
pub const REFLECTOR_RADIUS_RATIO: f64 = 1.05;

/// Peak-to-average ratio of a cosine axial flux shape.
pub const AXIAL_PEAKING: f64 = std::f64::consts::FRAC_PI_2;

/// Ensure a value is finite, returning ChannelError if not.
pub fn check_finite(value: f64, what: &'static str) -> ChannelResult<f64> {
    ensure_finite(value, what).map_err(|_| ChannelError::NonPhysical { what })
}

/// Ensure a value is finite and strictly positive.
pub fn check_positive(value: f64, what: &'static str) -> ChannelResult<f64> {
    check_finite(value, what)?;
    if value > 0.0 {
        Ok(value)
    } else {
        Err(ChannelError::Domain { what, value })
    }
}
