//! Onboarding flow loading service

use crate::error::FlowError;
use crate::model::OnboardingFlow;
use std::fs;
use std::path::Path;

const DEFAULT_FLOW: &str = include_str!("../../flows/default.yaml");

/// The flow shipped with the binary
pub fn default_flow() -> Result<OnboardingFlow, FlowError> {
    OnboardingFlow::from_yaml_str(DEFAULT_FLOW)
}

/// Load and validate a flow definition file
pub fn load_flow<P: AsRef<Path>>(path: P) -> Result<OnboardingFlow, FlowError> {
    let contents = fs::read_to_string(path)?;
    OnboardingFlow::from_yaml_str(&contents)
}
