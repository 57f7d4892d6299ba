//! Model layer - onboarding state
//!
//! This module contains all state-related types:
//! - `Profile` - accumulated answers, changed copy-on-write
//! - `OnboardingFlow` - the ordered single-choice steps
//! - `ModalStack` - Modal overlay management

pub mod choice;
pub mod modal;
pub mod profile;

pub use choice::{OnboardingFlow, StepDefinition};
pub use modal::{Modal, ModalStack};
pub use profile::Profile;
