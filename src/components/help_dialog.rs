//! Help dialog component
//!
//! Displays all keyboard shortcuts available on a step.

use crate::action::Action;
use crate::component::Component;
use crate::components::centered_popup;
use crate::i18n::Translator;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame,
};

/// Help dialog showing all keyboard shortcuts
pub struct HelpDialog {
    pub scroll_offset: usize,
    /// Number of configured locale-switch keys (F1..Fn)
    locale_count: usize,
}

impl HelpDialog {
    pub fn new(locale_count: usize) -> Self {
        Self {
            scroll_offset: 0,
            locale_count,
        }
    }
}

impl Component for HelpDialog {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?') => {
                self.scroll_offset = 0;
                Some(Action::CloseModal)
            }
            KeyCode::Char('j') | KeyCode::Down => {
                self.scroll_offset = self.scroll_offset.saturating_add(1);
                None
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.scroll_offset = self.scroll_offset.saturating_sub(1);
                None
            }
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect, i18n: &dyn Translator) -> Result<()> {
        let dialog_area = centered_popup(area, 60, 16);
        frame.render_widget(Clear, dialog_area);

        let content = build_help_content(i18n, self.locale_count);
        let total = content.len();
        let visible_height = dialog_area.height.saturating_sub(2) as usize;

        // Clamp scroll offset
        let max_scroll = total.saturating_sub(visible_height);
        if self.scroll_offset > max_scroll {
            self.scroll_offset = max_scroll;
        }

        let paragraph = Paragraph::new(content)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(format!(" {} ", i18n.t("common:help_title")))
                    .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
                    .border_style(Style::default().fg(Color::Cyan)),
            )
            .scroll((self.scroll_offset as u16, 0));

        frame.render_widget(paragraph, dialog_area);

        if total > visible_height {
            let mut scrollbar_state =
                ScrollbarState::new(max_scroll).position(self.scroll_offset);

            frame.render_stateful_widget(
                Scrollbar::new(ScrollbarOrientation::VerticalRight)
                    .begin_symbol(Some("↑"))
                    .end_symbol(Some("↓")),
                dialog_area.inner(ratatui::layout::Margin {
                    vertical: 1,
                    horizontal: 0,
                }),
                &mut scrollbar_state,
            );
        }

        Ok(())
    }
}

/// Label for the locale-switch keys, `None` when no locale is configured
fn locale_keys(count: usize) -> Option<String> {
    match count {
        0 => None,
        1 => Some("F1".to_string()),
        2 => Some("F1 F2".to_string()),
        n => Some(format!("F1-F{n}")),
    }
}

/// Build the help content with all keyboard shortcuts
fn build_help_content(i18n: &dyn Translator, locale_count: usize) -> Vec<Line<'static>> {
    let mut shortcuts = vec![
        ("j/k ↑/↓".to_string(), "common:help.move"),
        ("Space 1-9".to_string(), "common:help.select"),
        ("Enter n".to_string(), "common:help.confirm"),
        ("b ⌫".to_string(), "common:help.back"),
    ];
    if let Some(keys) = locale_keys(locale_count) {
        shortcuts.push((keys, "common:help.locale"));
    }
    shortcuts.push(("?".to_string(), "common:help.help"));
    shortcuts.push(("q Esc".to_string(), "common:help.quit"));

    let mut lines = vec![Line::from("")];
    for (key, description) in shortcuts {
        lines.push(Line::from(vec![
            Span::styled(
                format!("  {:12}", key),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
            Span::styled(i18n.t(description), Style::default().fg(Color::White)),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!("  q / Esc / ?  {}", i18n.t("common:help.close")),
        Style::default().fg(Color::DarkGray),
    )));

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::{Catalog, Locale};
    use crossterm::event::KeyModifiers;

    fn help_text(locale_count: usize) -> String {
        let catalog = Catalog::embedded(Locale::new("en"));
        build_help_content(&catalog, locale_count)
            .iter()
            .flat_map(|line| line.spans.iter().map(|s| s.content.to_string()))
            .collect()
    }

    #[test]
    fn test_help_content_is_translated() {
        let text = help_text(2);
        assert!(text.contains("F1 F2"));
        assert!(text.contains("Switch language"));
        assert!(!text.contains("common:help"));
    }

    #[test]
    fn test_locale_keys_follow_configured_count() {
        assert!(help_text(1).contains("F1 "));
        assert!(!help_text(1).contains("F2"));
        assert!(help_text(4).contains("F1-F4"));

        let none = help_text(0);
        assert!(!none.contains("F1"));
        assert!(!none.contains("Switch language"));
    }

    #[test]
    fn test_close_resets_scroll() {
        let mut dialog = HelpDialog::new(2);
        dialog
            .handle_key_event(KeyEvent::new(KeyCode::Down, KeyModifiers::NONE))
            .unwrap();
        assert_eq!(dialog.scroll_offset, 1);

        let action = dialog
            .handle_key_event(KeyEvent::new(KeyCode::Char('?'), KeyModifiers::NONE))
            .unwrap();
        assert_eq!(action, Some(Action::CloseModal));
        assert_eq!(dialog.scroll_offset, 0);
    }
}
