//! Error types for channel model calculations.

use cr_core::error::CrError;
use cr_props::PropsError;
use thiserror::Error;

/// Errors that can occur while evaluating a channel design point.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ChannelError {
    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    #[error("No criticality fit for fuel {fuel} with coolant {coolant}")]
    UnsupportedPair { fuel: String, coolant: String },

    #[error("Material {material} cannot be used as {role}")]
    InvalidRole {
        material: &'static str,
        role: &'static str,
    },

    #[error("Outside correlation domain: {what} = {value}")]
    Domain { what: &'static str, value: f64 },

    #[error("Non-physical value: {what}")]
    NonPhysical { what: &'static str },

    #[error("Property error: {0}")]
    Props(#[from] PropsError),
}

pub type ChannelResult<T> = Result<T, ChannelError>;

impl From<CrError> for ChannelError {
    fn from(e: CrError) -> Self {
        match e {
            CrError::NonFinite { what, .. } => ChannelError::NonPhysical { what },
            CrError::NonPositive { what, value } => ChannelError::Domain { what, value },
            CrError::InvalidArg { what } | CrError::Invariant { what } => {
                ChannelError::InvalidArg { what }
            }
        }
    }
}
