use crate::CrError;

/// Floating point type used throughout system
pub type Real = f64;

/// Absolute and relative comparison tolerances.
#[derive(Clone, Copy, Debug)]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-12,
            rel: 1e-9,
        }
    }
}

/// True if `a` and `b` agree within either the absolute or the relative tolerance.
pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    if diff <= tol.abs {
        return true;
    }
    diff <= tol.rel * a.abs().max(b.abs())
}

pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, CrError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(CrError::NonFinite { what, value: v })
    }
}

/// Finite and strictly greater than zero.
pub fn ensure_positive(v: Real, what: &'static str) -> Result<Real, CrError> {
    ensure_finite(v, what)?;
    if v > 0.0 {
        Ok(v)
    } else {
        Err(CrError::NonPositive { what, value: v })
    }
}

/// Linear interpolation between `a` and `b` at fraction `t` in [0, 1].
///
/// Returns `a` exactly at `t = 0` and `b` exactly at `t = 1`, and never leaves
/// the closed interval spanned by the endpoints.
#[inline]
pub fn lerp(a: Real, b: Real, t: Real) -> Real {
    let v = a * (1.0 - t) + b * t;
    v.clamp(a.min(b), a.max(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nearly_equal_basic() {
        let tol = Tolerances {
            abs: 1e-12,
            rel: 1e-9,
        };
        assert!(nearly_equal(1.0, 1.0 + 1e-12, tol));
        assert!(nearly_equal(0.0, 1e-13, tol));
        assert!(!nearly_equal(1.0, 1.0 + 1e-6, tol));
    }

    #[test]
    fn ensure_finite_detects_nan() {
        let err = ensure_finite(Real::NAN, "test").unwrap_err();
        let msg = format!("{err}");
        assert!(msg.contains("Non-finite"));
    }

    #[test]
    fn ensure_positive_rejects_zero_and_negative() {
        assert!(ensure_positive(1e-9, "x").is_ok());
        assert!(matches!(
            ensure_positive(0.0, "x"),
            Err(CrError::NonPositive { .. })
        ));
        assert!(ensure_positive(-2.0, "x").is_err());
        assert!(matches!(
            ensure_positive(Real::INFINITY, "x"),
            Err(CrError::NonFinite { .. })
        ));
    }

    #[test]
    fn lerp_endpoints_are_exact() {
        assert_eq!(lerp(3.0, 7.0, 0.0), 3.0);
        assert_eq!(lerp(3.0, 7.0, 1.0), 7.0);
        assert_eq!(lerp(3.0, 7.0, 0.5), 5.0);
        assert_eq!(lerp(7.0, 3.0, 1.0), 3.0);
    }

    proptest::proptest! {
        #[test]
        fn lerp_stays_between_endpoints(a in -1e6_f64..1e6, b in -1e6_f64..1e6, t in 0.0_f64..=1.0) {
            let v = lerp(a, b, t);
            proptest::prop_assert!(v >= a.min(b) && v <= a.max(b));
        }
    }
}
