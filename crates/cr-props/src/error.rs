//! Property lookup errors.

use cr_core::CrError;
use thiserror::Error;

/// Result type for property operations.
pub type PropsResult<T> = Result<T, PropsError>;

/// Errors that can occur during property lookup and evaluation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PropsError {
    /// Material key is not in the table.
    #[error("Unknown material: {key}")]
    UnknownMaterial { key: String },

    /// Coolant key has no property fit.
    #[error("Unknown coolant: {key}")]
    UnknownCoolant { key: String },

    /// Material exists but does not carry the requested property.
    #[error("Material {material} has no {what}")]
    MissingProperty {
        material: &'static str,
        what: &'static str,
    },

    /// Non-physical values (negative density, viscosity, etc.).
    #[error("Non-physical value for {what}")]
    NonPhysical { what: &'static str },

    /// Invalid argument.
    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },
}

impl From<CrError> for PropsError {
    fn from(err: CrError) -> Self {
        match err {
            CrError::NonFinite { what, .. } | CrError::NonPositive { what, .. } => {
                PropsError::NonPhysical { what }
            }
            CrError::InvalidArg { what } | CrError::Invariant { what } => {
                PropsError::InvalidArg { what }
            }
        }
    }
}
