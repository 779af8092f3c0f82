//! Empirical pipe-flow correlations for Nusselt number and friction factor.
//!
//! Three entry points:
//! - [`turbulent`]: smooth/rough friction fit with Gnielinski heat transfer
//! - [`laminar`]: developing-flow friction and two Nusselt numbers
//! - [`pipeflow`]: regime dispatcher that blends the two across 2300 < Re < 3000
//!
//! All friction factors are Darcy friction factors. Both turbulent outputs and
//! the laminar friction factor include an entrance (developing flow) correction.

use crate::common::{RE_LAMINAR_MAX, RE_TURBULENT_MIN, ROUGH_THRESHOLD};
use crate::error::{ChannelError, ChannelResult};
use cr_core::numeric::lerp;

/// Flow regime classification based on Reynolds number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowRegime {
    /// Re < 2300
    Laminar,
    /// 2300 <= Re <= 3000
    Transitional,
    /// Re > 3000
    Turbulent,
}

impl FlowRegime {
    pub fn from_reynolds(re: f64) -> Self {
        if re > RE_TURBULENT_MIN {
            FlowRegime::Turbulent
        } else if re < RE_LAMINAR_MAX {
            FlowRegime::Laminar
        } else {
            FlowRegime::Transitional
        }
    }
}

/// Result of the turbulent correlation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TurbulentFlow {
    /// Nusselt number [-]
    pub nu: f64,
    /// Darcy friction factor [-]
    pub f: f64,
}

/// Result of the laminar correlation or the regime dispatcher.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PipeFlow {
    /// Nusselt number at constant wall temperature [-]
    pub nu_t: f64,
    /// Nusselt number at constant wall heat flux [-]
    pub nu_h: f64,
    /// Darcy friction factor [-]
    pub f: f64,
}

impl From<TurbulentFlow> for PipeFlow {
    fn from(t: TurbulentFlow) -> Self {
        Self {
            nu_t: t.nu,
            nu_h: t.nu,
            f: t.f,
        }
    }
}

/// Fully developed smooth-tube friction factor (Li, Seem & Li, 2011).
pub fn smooth_friction(re: f64) -> f64 {
    let ln_re = re.ln();
    (-0.001570232 / ln_re + 0.394203137 / ln_re.powi(2) + 2.534153311 / ln_re.powi(3)) * 4.0
}

/// Fully developed rough-tube friction factor (Offor & Alabi, 2016).
pub fn rough_friction(re: f64, relrough: f64) -> f64 {
    let inner = ((relrough / 3.93).powf(1.092) + 7.627 / (re + 395.9)).log10();
    (-2.0 * (relrough / 3.71 - (1.975 / re) * inner).ln()).powi(-2)
}

/// Gnielinski Nusselt number for fully developed turbulent flow.
pub fn gnielinski(re: f64, pr: f64, f: f64) -> f64 {
    ((f / 8.0) * (re - 1000.0) * pr) / (1.0 + 12.7 * (f / 8.0).sqrt() * (pr.powf(2.0 / 3.0) - 1.0))
}

/// Notter & Sleicher Nusselt number for low-Prandtl fluids.
pub fn notter_sleicher(re: f64, pr: f64) -> f64 {
    4.8 + 0.0156 * re.powf(0.85) * pr.powf(0.93)
}

/// Developing-flow multiplier `1 + (D/L)^0.7`.
pub fn entrance_factor(ld: f64) -> f64 {
    1.0 + (1.0 / ld).powf(0.7)
}

/// Turbulent pipe flow: Nusselt number and friction factor.
///
/// Requires `re > 1` (the friction fit is logarithmic in Re) and positive
/// `pr` and `ld`.
pub fn turbulent(re: f64, pr: f64, ld: f64, relrough: f64) -> ChannelResult<TurbulentFlow> {
    if !(re > 1.0) {
        return Err(ChannelError::Domain {
            what: "Reynolds number (turbulent correlation)",
            value: re,
        });
    }
    check_inputs(pr, ld)?;

    let f_fd = if relrough > ROUGH_THRESHOLD {
        rough_friction(re, relrough)
    } else {
        smooth_friction(re)
    };

    let mut nu = gnielinski(re, pr, f_fd);
    if pr < 0.5 {
        let nu_lp = notter_sleicher(re, pr);
        nu = if pr < 0.1 {
            nu_lp
        } else {
            nu_lp + (pr - 0.1) * (nu - nu_lp) / 0.4
        };
    }

    let entrance = entrance_factor(ld);
    Ok(TurbulentFlow {
        nu: nu * entrance,
        f: f_fd * entrance,
    })
}

/// Laminar pipe flow: Nusselt numbers and apparent friction factor.
///
/// Relative roughness is accepted for signature symmetry but unused.
pub fn laminar(re: f64, pr: f64, ld: f64, _relrough: f64) -> ChannelResult<PipeFlow> {
    if !(re > 0.0) {
        return Err(ChannelError::Domain {
            what: "Reynolds number (laminar correlation)",
            value: re,
        });
    }
    check_inputs(pr, ld)?;

    let gz = re * pr / ld;
    let x = ld / re;
    let sqrt_x = x.sqrt();
    let f_r = 3.44 / sqrt_x
        + (1.25 / (4.0 * x) + 16.0 - 3.44 / sqrt_x) / (1.0 + 0.00021 * x.powi(-2));

    let f = 4.0 * f_r / re;
    let nu_t = 3.66 + ((0.049 + 0.02 / pr) * gz.powf(1.12)) / (1.0 + 0.065 * gz.powf(0.7));
    let nu_h =
        4.36 + ((0.1156 + 0.08569 / pr.powf(0.4)) * gz) / (1.0 + 0.1158 * gz.powf(0.6));

    Ok(PipeFlow { nu_t, nu_h, f })
}

/// Pipe flow in any regime.
///
/// Between Re = 2300 and Re = 3000 the laminar values at 2300 and the
/// turbulent values at 3000 are interpolated linearly in Re. This is an
/// empirical smoothing device; it matches each correlation exactly at the
/// band edges.
pub fn pipeflow(re: f64, pr: f64, ld: f64, relrough: f64) -> ChannelResult<PipeFlow> {
    match FlowRegime::from_reynolds(re) {
        FlowRegime::Turbulent => turbulent(re, pr, ld, relrough).map(PipeFlow::from),
        FlowRegime::Laminar => laminar(re, pr, ld, relrough),
        FlowRegime::Transitional => {
            let turb = PipeFlow::from(turbulent(RE_TURBULENT_MIN, pr, ld, relrough)?);
            let lam = laminar(RE_LAMINAR_MAX, pr, ld, relrough)?;
            let t = (re - RE_LAMINAR_MAX) / (RE_TURBULENT_MIN - RE_LAMINAR_MAX);
            Ok(PipeFlow {
                nu_t: lerp(lam.nu_t, turb.nu_t, t),
                nu_h: lerp(lam.nu_h, turb.nu_h, t),
                f: lerp(lam.f, turb.f, t),
            })
        }
    }
}

fn check_inputs(pr: f64, ld: f64) -> ChannelResult<()> {
    if !(pr > 0.0) || !pr.is_finite() {
        return Err(ChannelError::Domain {
            what: "Prandtl number",
            value: pr,
        });
    }
    if !(ld > 0.0) || !ld.is_finite() {
        return Err(ChannelError::Domain {
            what: "length over diameter",
            value: ld,
        });
    }
    Ok(())
}
