//! Core and channel geometry.

use crate::common::check_positive;
use crate::error::ChannelResult;
use crate::state::{FlowState, Geometry};
use std::f64::consts::PI;

impl Geometry {
    /// Geometry of a cylindrical core with `fuel_frac` of its cross-section
    /// fuel and the rest round coolant channels of radius `r_channel`.
    pub fn compute(
        core_r: f64,
        fuel_frac: f64,
        r_channel: f64,
        aspect_ratio: f64,
    ) -> ChannelResult<Self> {
        check_positive(core_r, "core radius")?;
        check_positive(r_channel, "channel radius")?;

        let a_core = PI * core_r.powi(2);
        let a_flow = a_core * (1.0 - fuel_frac);
        let a_fuel = a_core * fuel_frac;
        let length = aspect_ratio * core_r;
        let n_channels = check_positive(a_flow / (PI * r_channel.powi(2)), "channel count")?;

        Ok(Self {
            core_r,
            a_core,
            a_flow,
            a_fuel,
            length,
            ld: length / (2.0 * r_channel),
            vol_fuel: a_fuel * length,
            vol_cool: a_flow * length,
            n_channels,
            r_cond: (a_fuel / n_channels).sqrt() / 2.0,
            a_cond: 2.0 * PI * r_channel * length * n_channels,
            d_h: 2.0 * r_channel,
        })
    }

    /// Same core with a different number of channels.
    ///
    /// Fuel area, core radius and length are held; coolant flow area and
    /// volume follow the channel count, as do the conduction path and area.
    pub fn with_channel_count(&self, n_channels: f64, r_channel: f64) -> ChannelResult<Self> {
        let n_channels = check_positive(n_channels, "channel count")?;
        let a_flow = n_channels * PI * r_channel.powi(2);
        Ok(Self {
            a_flow,
            vol_cool: a_flow * self.length,
            n_channels,
            r_cond: (self.a_fuel / n_channels).sqrt() / 2.0,
            a_cond: 2.0 * PI * r_channel * self.length * n_channels,
            ..*self
        })
    }
}

/// Derive geometry from the state's fuel fraction and core radius.
pub fn set_geometry(state: &FlowState) -> ChannelResult<FlowState> {
    let inputs = state.inputs();
    let geometry = Geometry::compute(
        state.geometry.core_r,
        state.fuel_frac,
        inputs.channel_radius(),
        inputs.aspect_ratio(),
    )?;
    Ok(FlowState {
        geometry,
        ..state.clone()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn reference_core() {
        let r = 0.005;
        let core_r = 0.16;
        let ff = 1.0 - 6.0 * r * r / (core_r * core_r);
        let g = Geometry::compute(core_r, ff, r, 1.0).unwrap();

        assert!((g.n_channels - 6.0).abs() < 1e-9);
        assert_eq!(g.length, 0.16);
        assert!((g.ld - 16.0).abs() < 1e-12);
        assert_eq!(g.d_h, 2.0 * r);
        assert!((g.a_cond - 2.0 * PI * r * 0.16 * g.n_channels).abs() < 1e-15);
    }

    #[test]
    fn zero_flow_area_is_domain_error() {
        assert!(Geometry::compute(0.2, 1.0, 0.005, 1.0).is_err());
        assert!(Geometry::compute(0.0, 0.5, 0.005, 1.0).is_err());
    }

    #[test]
    fn channel_count_change_holds_fuel() {
        let g = Geometry::compute(0.2, 0.6, 0.005, 1.0).unwrap();
        let n = g.n_channels.ceil() + 10.0;
        let g2 = g.with_channel_count(n, 0.005).unwrap();

        assert_eq!(g2.a_fuel, g.a_fuel);
        assert_eq!(g2.vol_fuel, g.vol_fuel);
        assert_eq!(g2.length, g.length);
        assert_eq!(g2.n_channels, n);
        assert!(g2.a_flow > g.a_flow);
        assert!(g2.r_cond < g.r_cond);
        assert!(g.with_channel_count(0.0, 0.005).is_err());
    }

    proptest! {
        #[test]
        fn areas_close_and_diameter_exact(
            ff in 0.01_f64..0.99,
            core_r in 0.05_f64..2.0,
            r in 0.001_f64..0.02,
            ar in 0.2_f64..5.0,
        ) {
            let g = Geometry::compute(core_r, ff, r, ar).unwrap();
            let closure = (g.a_flow + g.a_fuel - g.a_core).abs();
            prop_assert!(closure <= 1e-12 * g.a_core);
            prop_assert_eq!(g.d_h, 2.0 * r);
            prop_assert!((g.vol_fuel + g.vol_cool - g.a_core * g.length).abs() <= 1e-12 * g.a_core * g.length);
        }
    }
}
