//! UI Components
//!
//! Each component encapsulates its own state, event handling, and rendering logic.
//! Components communicate through Actions rather than direct state mutation.

pub mod help_dialog;
pub mod layout;
pub mod quit_dialog;
pub mod single_choice_step;
pub mod summary;

pub use help_dialog::HelpDialog;
pub use layout::{centered_popup, content_area};
pub use quit_dialog::QuitDialog;
pub use single_choice_step::SingleChoiceStep;
pub use summary::SummaryComponent;
