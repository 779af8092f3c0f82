//! Error type for the command-line front end.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("Case file error: {0}")]
    Project(#[from] cr_project::ProjectError),

    #[error("Solver error: {0}")]
    Solver(#[from] cr_solver::SolverError),

    #[error("Case has no sweep section: {0}")]
    NoSweep(String),

    #[error("Failed to write {path}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type CliResult<T> = Result<T, CliError>;
