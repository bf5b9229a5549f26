//! Error type returned from `build()`.

use thiserror::Error;

use varsel_action::validation::VarselValidationError;

#[derive(Debug, Error)]
pub enum BuildError {
    /// The action was rejected. Fix the input and build again.
    #[error(transparent)]
    Validation(#[from] VarselValidationError),

    /// A validated action could not be encoded. Never a caller error.
    #[error("serialization of varsel-action failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl BuildError {
    pub fn as_validation(&self) -> Option<&VarselValidationError> {
        match self {
            BuildError::Validation(err) => Some(err),
            BuildError::Serialization(_) => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, BuildError>;
