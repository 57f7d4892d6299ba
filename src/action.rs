//! Action enum - All possible application actions
//!
//! Actions are discrete operations that the application can perform.
//! Components emit Actions in response to events, and the App processes
//! them to update state.

use crate::i18n::Locale;
use crate::model::Profile;
use std::fmt;

/// All possible actions in the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // ─────────────────────────────────────────────────────────────────────────
    // App Lifecycle
    // ─────────────────────────────────────────────────────────────────────────
    /// Regular tick for animations/updates
    Tick,
    /// Terminal was resized
    Resize(u16, u16),
    /// Quit without saving
    ForceQuit,

    // ─────────────────────────────────────────────────────────────────────────
    // Step Navigation
    // ─────────────────────────────────────────────────────────────────────────
    /// Step confirmed; carries the profile with the answer merged in
    StepNext(Profile),
    /// Step abandoned; carries the profile with the answer removed
    StepPrevious(Profile),
    /// Save the finished profile and exit
    SaveProfile,

    // ─────────────────────────────────────────────────────────────────────────
    // Locale
    // ─────────────────────────────────────────────────────────────────────────
    /// Switch the active translation locale
    ChangeLocale(Locale),

    // ─────────────────────────────────────────────────────────────────────────
    // Modals
    // ─────────────────────────────────────────────────────────────────────────
    /// Open quit confirmation dialog
    OpenQuitDialog,
    /// Open help dialog showing all keyboard shortcuts
    OpenHelp,
    /// Close the current modal
    CloseModal,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Tick => write!(f, "Tick"),
            Action::Resize(w, h) => write!(f, "Resize({}, {})", w, h),
            Action::ForceQuit => write!(f, "ForceQuit"),
            Action::StepNext(p) => write!(f, "StepNext({} answers)", p.len()),
            Action::StepPrevious(p) => write!(f, "StepPrevious({} answers)", p.len()),
            Action::SaveProfile => write!(f, "SaveProfile"),
            Action::ChangeLocale(locale) => write!(f, "ChangeLocale({})", locale),
            Action::OpenQuitDialog => write!(f, "OpenQuitDialog"),
            Action::OpenHelp => write!(f, "OpenHelp"),
            Action::CloseModal => write!(f, "CloseModal"),
        }
    }
}
