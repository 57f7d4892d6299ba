//! Component trait - Interface for UI components
//!
//! Each component encapsulates its own state, event handling, and rendering logic.
//! Components communicate through Actions rather than direct state mutation.

use crate::action::Action;
use crate::i18n::Translator;
use anyhow::Result;
use crossterm::event::{KeyEvent, MouseEvent};
use ratatui::{layout::Rect, Frame};

/// Trait for UI components
///
/// Components are self-contained units that:
/// - Handle their own key/mouse events
/// - Maintain local state
/// - Render themselves to a frame
///
/// Components never own translations. The controller lends its translator
/// at draw time so a locale switch is visible on the next frame.
pub trait Component {
    /// Handle a key event, returning an optional Action
    ///
    /// Local state (cursor, selection) may change here; anything the
    /// parent must react to is returned as an Action.
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let _ = key;
        Ok(None)
    }

    /// Handle a mouse event, returning an optional Action
    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<Option<Action>> {
        let _ = mouse;
        Ok(None)
    }

    /// Draw the component to the frame
    ///
    /// Rendering may record layout (e.g. clickable rows) but must not
    /// change what the component represents.
    fn draw(&mut self, frame: &mut Frame, area: Rect, i18n: &dyn Translator) -> Result<()>;
}
