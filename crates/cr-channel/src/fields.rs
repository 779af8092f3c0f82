//! Reported output quantities with display metadata.

use crate::state::FlowState;
use serde::{Deserialize, Serialize};

/// A quantity reported for a finished design.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputField {
    Mass,
    ChannelCount,
    PressureDrop,
    HeatTransferCoefficient,
    GenerationPerChannel,
    VolumetricGeneration,
    Velocity,
    AspectRatio,
}

impl OutputField {
    pub const ALL: [OutputField; 8] = [
        OutputField::Mass,
        OutputField::ChannelCount,
        OutputField::PressureDrop,
        OutputField::HeatTransferCoefficient,
        OutputField::GenerationPerChannel,
        OutputField::VolumetricGeneration,
        OutputField::Velocity,
        OutputField::AspectRatio,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            OutputField::Mass => "mass",
            OutputField::ChannelCount => "N_channels",
            OutputField::PressureDrop => "dp",
            OutputField::HeatTransferCoefficient => "h_bar",
            OutputField::GenerationPerChannel => "q_per_channel",
            OutputField::VolumetricGeneration => "q_bar",
            OutputField::Velocity => "v",
            OutputField::AspectRatio => "AR",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            OutputField::Mass => "Total Fuel Mass",
            OutputField::ChannelCount => "Number of Fuel Channels",
            OutputField::PressureDrop => "Subchannel Pressure Drop",
            OutputField::HeatTransferCoefficient => "Heat Transfer Coefficient",
            OutputField::GenerationPerChannel => "Total Subchannel Generation",
            OutputField::VolumetricGeneration => "Average Volumetric Generation",
            OutputField::Velocity => "Flow Velocity",
            OutputField::AspectRatio => "Approximate Core Aspect Ratio",
        }
    }

    pub fn unit(&self) -> &'static str {
        match self {
            OutputField::Mass => "m [kg]",
            OutputField::ChannelCount => "N Channels [-]",
            OutputField::PressureDrop => "dP [Pa]",
            OutputField::HeatTransferCoefficient => "h [W / m^2 - K]",
            OutputField::GenerationPerChannel => "q/channel [W]",
            OutputField::VolumetricGeneration => "q_bar [W/m^3]",
            OutputField::Velocity => "v [m/s]",
            OutputField::AspectRatio => "AR [-]",
        }
    }

    /// Value of this field on a state; `None` for mass before it is computed.
    pub fn value(&self, state: &FlowState) -> Option<f64> {
        let value = match self {
            OutputField::Mass => return state.mass().map(|m| m.total),
            OutputField::ChannelCount => state.channel_count() as f64,
            OutputField::PressureDrop => state.dp(),
            OutputField::HeatTransferCoefficient => state.hydraulics().h,
            OutputField::GenerationPerChannel => state.generation_per_channel(),
            OutputField::VolumetricGeneration => state.thermal().volumetric,
            OutputField::Velocity => state.hydraulics().velocity,
            OutputField::AspectRatio => state.inputs().aspect_ratio(),
        };
        Some(value)
    }
}

impl std::str::FromStr for OutputField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OutputField::ALL
            .into_iter()
            .find(|f| f.key().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown output field: {s}"))
    }
}

impl std::fmt::Display for OutputField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.title(), self.unit())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_roundtrip() {
        for field in OutputField::ALL {
            assert_eq!(field.key().parse::<OutputField>().unwrap(), field);
        }
        assert!("temperature".parse::<OutputField>().is_err());
    }

    #[test]
    fn display_has_title_and_unit() {
        let s = OutputField::PressureDrop.to_string();
        assert_eq!(s, "Subchannel Pressure Drop (dP [Pa])");
    }
}
