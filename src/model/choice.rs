//! Onboarding flow definitions
//!
//! A flow is an ordered list of single-choice steps. Each step names the
//! profile field it answers and the options offered for it.

use crate::error::FlowError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// One selectable choice. The label is looked up as `<ns>:options.<value>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChoiceOption {
    pub value: String,
}

#[cfg(test)]
impl ChoiceOption {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }
}

/// A single-choice question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepDefinition {
    /// Translation namespace for title, question and option labels
    pub ns: String,
    /// Profile field this step writes
    pub choice_key: String,
    pub options: Vec<ChoiceOption>,
}

impl StepDefinition {
    pub fn has_option(&self, value: &str) -> bool {
        self.options.iter().any(|o| o.value == value)
    }

    pub fn option_index(&self, value: &str) -> Option<usize> {
        self.options.iter().position(|o| o.value == value)
    }
}

/// Ordered list of onboarding steps
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OnboardingFlow {
    pub steps: Vec<StepDefinition>,
}

impl OnboardingFlow {
    /// Parse and validate a flow from YAML
    pub fn from_yaml_str(contents: &str) -> Result<Self, FlowError> {
        let flow: OnboardingFlow = serde_yaml::from_str(contents)?;
        flow.validate()?;
        Ok(flow)
    }

    pub fn validate(&self) -> Result<(), FlowError> {
        if self.steps.is_empty() {
            return Err(FlowError::Empty);
        }

        let mut keys = HashSet::new();
        for step in &self.steps {
            if !keys.insert(step.choice_key.as_str()) {
                return Err(FlowError::DuplicateChoiceKey(step.choice_key.clone()));
            }
            if step.options.is_empty() {
                return Err(FlowError::NoOptions {
                    choice_key: step.choice_key.clone(),
                });
            }
            let mut values = HashSet::new();
            for option in &step.options {
                if !values.insert(option.value.as_str()) {
                    return Err(FlowError::DuplicateOption {
                        choice_key: step.choice_key.clone(),
                        value: option.value.clone(),
                    });
                }
            }
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FLOW: &str = r#"
steps:
  - ns: color
    choice_key: color
    options:
      - value: red
      - value: blue
  - ns: diet
    choice_key: diet
    options:
      - value: vegan
"#;

    #[test]
    fn test_parse_flow() {
        let flow = OnboardingFlow::from_yaml_str(FLOW).unwrap();
        assert_eq!(flow.len(), 2);
        assert_eq!(flow.steps[0].options[1], ChoiceOption::new("blue"));
        assert_eq!(flow.steps[0].option_index("blue"), Some(1));
        assert!(!flow.steps[1].has_option("red"));
    }

    #[test]
    fn test_empty_flow_rejected() {
        let result = OnboardingFlow::from_yaml_str("steps: []");
        assert!(matches!(result, Err(FlowError::Empty)));
    }

    #[test]
    fn test_duplicate_option_rejected() {
        let yaml = r#"
steps:
  - ns: a
    choice_key: a
    options: [{ value: x }, { value: x }]
"#;
        let result = OnboardingFlow::from_yaml_str(yaml);
        assert!(matches!(result, Err(FlowError::DuplicateOption { .. })));
    }

    #[test]
    fn test_duplicate_choice_key_rejected() {
        let yaml = r#"
steps:
  - { ns: a, choice_key: same, options: [{ value: x }] }
  - { ns: b, choice_key: same, options: [{ value: y }] }
"#;
        let result = OnboardingFlow::from_yaml_str(yaml);
        assert!(matches!(result, Err(FlowError::DuplicateChoiceKey(k)) if k == "same"));
    }

    #[test]
    fn test_step_without_options_rejected() {
        let yaml = "steps:\n  - { ns: a, choice_key: a, options: [] }\n";
        let result = OnboardingFlow::from_yaml_str(yaml);
        assert!(matches!(result, Err(FlowError::NoOptions { .. })));
    }

    #[test]
    fn test_malformed_yaml_is_parse_error() {
        let result = OnboardingFlow::from_yaml_str("steps: {");
        assert!(matches!(result, Err(FlowError::Parse(_))));
    }
}
