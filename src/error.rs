//! Error types.

use std::path::PathBuf;
use thiserror::Error;

use crate::models::Pid;
use crate::validation::ValidationError;

/// Crate-wide result alias.
pub type SimResult<T> = Result<T, SimError>;

/// Failures surfaced by loading, validating or reporting a simulation.
///
/// The scheduling algorithms themselves never fail once their inputs
/// pass validation.
#[derive(Error, Debug)]
pub enum SimError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("invalid input: {}", join_messages(.0))]
    Invalid(Vec<ValidationError>),

    #[error("cannot average over an empty process set")]
    EmptyProcessSet,

    #[error("process {0} has no finish time")]
    Incomplete(Pid),

    #[error("cannot serialize report: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl From<Vec<ValidationError>> for SimError {
    fn from(errors: Vec<ValidationError>) -> Self {
        SimError::Invalid(errors)
    }
}

/// Missing or malformed simulation input.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("missing header: expected `<context_switch> <quantum>`")]
    MissingHeader,

    #[error("token {position} is not an integer: {token:?}")]
    MalformedToken { position: usize, token: String },

    #[error("truncated process record: expected `<pid> <arrival> <burst>`, got {found} value(s)")]
    TruncatedRecord { found: usize },
}

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}
