//! External service interactions
//!
//! This module contains services that touch the filesystem:
//! - Onboarding flow loading
//! - Profile loading and saving

pub mod flow;
pub mod profile_store;

pub use flow::{default_flow, load_flow};
pub use profile_store::{load_profile, save_record, ProfileRecord};
