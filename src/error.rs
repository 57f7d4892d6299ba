//! Error types for onboarding steps and flow definitions

use thiserror::Error;

/// Errors raised by a single-choice step
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StepError {
    #[error("cannot confirm '{choice_key}' without a selection")]
    NoSelection { choice_key: String },

    #[error("'{value}' is not an option of '{choice_key}'")]
    UnknownOption { choice_key: String, value: String },

    #[error("profile attribute '{choice_key}' has invalid type '{found}', expected a string")]
    InvalidProfileValue { choice_key: String, found: &'static str },
}

/// Errors raised while loading or validating an onboarding flow
#[derive(Debug, Error)]
pub enum FlowError {
    #[error("onboarding flow has no steps")]
    Empty,

    #[error("step '{choice_key}' has no options")]
    NoOptions { choice_key: String },

    #[error("step '{choice_key}' lists option '{value}' more than once")]
    DuplicateOption { choice_key: String, value: String },

    #[error("choice key '{0}' is used by more than one step")]
    DuplicateChoiceKey(String),

    #[error("failed to parse flow definition: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("failed to read flow definition: {0}")]
    Io(#[from] std::io::Error),
}
