//! Bounded scalar minimization (Brent's method).
//!
//! Combines golden-section steps with parabolic interpolation on a closed
//! interval, in the form of Forsythe, Malcolm & Moler's `fmin`. The search
//! stops once the bracket around the best point is within `xatol`.

use crate::error::{SolverError, SolverResult};

/// Bounded minimizer configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundedConfig {
    /// Absolute tolerance on the abscissa
    pub xatol: f64,
    /// Maximum objective evaluations
    pub max_evaluations: usize,
}

impl Default for BoundedConfig {
    fn default() -> Self {
        Self {
            xatol: 1e-3,
            max_evaluations: 500,
        }
    }
}

/// Converged minimizer result.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundedResult {
    /// Best abscissa found
    pub x: f64,
    /// Objective at `x`
    pub fun: f64,
    /// Number of objective evaluations
    pub evaluations: usize,
}

/// Minimize `objective` on `[lo, hi]`.
///
/// Objective errors abort the search and are returned unchanged. Running out
/// of evaluations before the tolerance is met is `MinimizerFailed`.
pub fn minimize_bounded<F>(
    mut objective: F,
    bounds: (f64, f64),
    config: &BoundedConfig,
) -> SolverResult<BoundedResult>
where
    F: FnMut(f64) -> SolverResult<f64>,
{
    let (lo, hi) = bounds;
    if !(lo.is_finite() && hi.is_finite() && lo < hi) {
        return Err(SolverError::InvalidConfig {
            what: "bounds must be finite with lower < upper",
        });
    }
    if !(config.xatol > 0.0) || config.max_evaluations == 0 {
        return Err(SolverError::InvalidConfig {
            what: "tolerance and evaluation limit must be positive",
        });
    }

    let golden_mean = 0.5 * (3.0 - 5.0_f64.sqrt());
    let sqrt_eps = f64::EPSILON.sqrt();

    let (mut a, mut b) = (lo, hi);
    // x: best so far, w: second best, v: previous w
    let mut v = a + golden_mean * (b - a);
    let mut w = v;
    let mut x = v;
    let mut fx = objective(x)?;
    let mut fv = fx;
    let mut fw = fx;
    let mut evaluations = 1;

    let mut d = 0.0_f64;
    let mut e = 0.0_f64;
    let mut xm = 0.5 * (a + b);
    let mut tol1 = sqrt_eps * x.abs() + config.xatol / 3.0;
    let mut tol2 = 2.0 * tol1;

    while (x - xm).abs() > tol2 - 0.5 * (b - a) {
        let mut golden = true;

        if e.abs() > tol1 {
            // Parabola through x, w, v
            let mut r = (x - w) * (fx - fv);
            let mut q = (x - v) * (fx - fw);
            let mut p = (x - v) * q - (x - w) * r;
            q = 2.0 * (q - r);
            if q > 0.0 {
                p = -p;
            }
            q = q.abs();
            r = e;
            e = d;

            if p.abs() < (0.5 * q * r).abs() && p > q * (a - x) && p < q * (b - x) {
                d = p / q;
                let u = x + d;
                if (u - a) < tol2 || (b - u) < tol2 {
                    d = tol1 * sign_or_one(xm - x);
                }
                golden = false;
            }
        }

        if golden {
            e = if x >= xm { a - x } else { b - x };
            d = golden_mean * e;
        }

        let u = x + sign_or_one(d) * d.abs().max(tol1);
        let fu = objective(u)?;
        evaluations += 1;

        if fu <= fx {
            if u >= x {
                a = x;
            } else {
                b = x;
            }
            v = w;
            fv = fw;
            w = x;
            fw = fx;
            x = u;
            fx = fu;
        } else {
            if u < x {
                a = u;
            } else {
                b = u;
            }
            if fu <= fw || w == x {
                v = w;
                fv = fw;
                w = u;
                fw = fu;
            } else if fu <= fv || v == x || v == w {
                v = u;
                fv = fu;
            }
        }

        xm = 0.5 * (a + b);
        tol1 = sqrt_eps * x.abs() + config.xatol / 3.0;
        tol2 = 2.0 * tol1;

        let converged = (x - xm).abs() <= tol2 - 0.5 * (b - a);
        if !converged && evaluations >= config.max_evaluations {
            return Err(SolverError::MinimizerFailed {
                evaluations,
                best_x: x,
                best_f: fx,
            });
        }
    }

    Ok(BoundedResult {
        x,
        fun: fx,
        evaluations,
    })
}

fn sign_or_one(v: f64) -> f64 {
    if v < 0.0 { -1.0 } else { 1.0 }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_interior_minimum() {
        let res = minimize_bounded(
            |x| Ok((x - 0.3).powi(2)),
            (0.0, 1.0),
            &BoundedConfig::default(),
        )
        .unwrap();
        assert!((res.x - 0.3).abs() < 1e-3);
        assert!(res.evaluations < 50);
    }

    #[test]
    fn minimum_at_bound() {
        let res = minimize_bounded(|x| Ok(x), (0.01, 1.0), &BoundedConfig::default()).unwrap();
        assert!(res.x >= 0.01);
        assert!(res.x - 0.01 < 2e-3);
    }

    #[test]
    fn tighter_tolerance_is_more_accurate() {
        let cfg = BoundedConfig {
            xatol: 1e-8,
            ..Default::default()
        };
        let res = minimize_bounded(|x| Ok((x - 2.0_f64.sqrt()).powi(2) + 1.0), (0.0, 3.0), &cfg)
            .unwrap();
        assert!((res.x - 2.0_f64.sqrt()).abs() < 1e-6);
        assert!((res.fun - 1.0).abs() < 1e-10);
    }

    #[test]
    fn evaluation_limit_is_failure() {
        let cfg = BoundedConfig {
            xatol: 1e-3,
            max_evaluations: 3,
        };
        let err = minimize_bounded(|x| Ok((x - 0.3).powi(2)), (0.0, 1.0), &cfg).unwrap_err();
        assert!(matches!(
            err,
            SolverError::MinimizerFailed { evaluations: 3, .. }
        ));
    }

    #[test]
    fn rejects_bad_bounds() {
        let cfg = BoundedConfig::default();
        assert!(matches!(
            minimize_bounded(|x| Ok(x), (1.0, 0.0), &cfg),
            Err(SolverError::InvalidConfig { .. })
        ));
        assert!(minimize_bounded(|x| Ok(x), (0.0, f64::INFINITY), &cfg).is_err());
    }

    #[test]
    fn objective_error_propagates() {
        let err = minimize_bounded(
            |x| {
                if x > 0.5 {
                    Err(SolverError::InvalidConfig { what: "boom" })
                } else {
                    Ok(x)
                }
            },
            (0.0, 1.0),
            &BoundedConfig::default(),
        )
        .unwrap_err();
        assert_eq!(err, SolverError::InvalidConfig { what: "boom" });
    }
}
