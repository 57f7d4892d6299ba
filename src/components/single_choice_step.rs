//! Single-choice onboarding step
//!
//! Shows a title, a question and a list of options of which at most one can
//! be selected. Confirming merges the selection into a copy of the profile
//! and hands it to the controller as `Action::StepNext`; going back removes
//! the answer from a copy and hands it over as `Action::StepPrevious`. The
//! profile the step was built from is never modified.

use crate::action::Action;
use crate::component::Component;
use crate::config::LocaleChoice;
use crate::error::StepError;
use crate::i18n::{t_ns, Translator};
use crate::model::profile::json_type_name;
use crate::model::{Profile, StepDefinition};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Flex, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};
use serde_json::Value;
use tracing::{debug, warn};
use unicode_width::UnicodeWidthStr;

/// Read the initial selection for `choice_key` from a profile.
///
/// Only a non-empty string is adopted. A missing key, `null`, an empty
/// string or any other JSON type is rejected with the kind of value found.
pub fn initial_selection(profile: &Profile, choice_key: &str) -> Result<String, StepError> {
    let found = match profile.get(choice_key) {
        Some(Value::String(s)) if !s.is_empty() => return Ok(s.clone()),
        Some(Value::String(_)) => "empty string",
        Some(other) => json_type_name(other),
        None => "undefined",
    };
    Err(StepError::InvalidProfileValue {
        choice_key: choice_key.to_string(),
        found,
    })
}

/// Clickable regions recorded during the last draw
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Hit {
    Option(usize),
    Back,
    Locale(usize),
    Confirm,
}

/// A step where the user picks exactly one option
pub struct SingleChoiceStep {
    definition: StepDefinition,
    /// Copy of the controller's profile this step was built from
    profile: Profile,
    selected: Option<String>,
    /// Keyboard cursor, independent of the selection
    list_state: ListState,
    locales: Vec<LocaleChoice>,
    /// (current, total), 1-based
    progress: Option<(usize, usize)>,
    hit_areas: Vec<(Rect, Hit)>,
}

impl SingleChoiceStep {
    pub fn new(definition: StepDefinition, profile: &Profile, locales: Vec<LocaleChoice>) -> Self {
        let selected = match initial_selection(profile, &definition.choice_key) {
            Ok(selected) => Some(selected),
            Err(e) => {
                warn!("{e}; overwriting");
                None
            }
        };

        let cursor = selected
            .as_deref()
            .and_then(|value| definition.option_index(value))
            .unwrap_or(0);
        let mut list_state = ListState::default();
        if !definition.options.is_empty() {
            list_state.select(Some(cursor));
        }

        Self {
            definition,
            profile: profile.clone(),
            selected,
            list_state,
            locales,
            progress: None,
            hit_areas: Vec::new(),
        }
    }

    pub fn with_progress(mut self, current: usize, total: usize) -> Self {
        self.progress = Some((current, total));
        self
    }

    pub fn choice_key(&self) -> &str {
        &self.definition.choice_key
    }

    #[cfg(test)]
    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn is_selected(&self, value: &str) -> bool {
        self.selected.as_deref() == Some(value)
    }

    pub fn can_confirm(&self) -> bool {
        self.selected.is_some()
    }

    #[cfg(test)]
    pub fn cursor(&self) -> Option<usize> {
        self.list_state.selected()
    }

    /// Make `value` the single selected option
    pub fn select(&mut self, value: &str) -> Result<(), StepError> {
        if !self.definition.has_option(value) {
            debug!(choice_key = self.choice_key(), value, "ignoring unknown option");
            return Err(StepError::UnknownOption {
                choice_key: self.definition.choice_key.clone(),
                value: value.to_string(),
            });
        }
        debug!(choice_key = self.choice_key(), value, "option selected");
        self.selected = Some(value.to_string());
        if let Some(index) = self.definition.option_index(value) {
            self.list_state.select(Some(index));
        }
        Ok(())
    }

    /// Profile with this step's answer merged in
    pub fn confirm(&self) -> Result<Profile, StepError> {
        match &self.selected {
            Some(value) => Ok(self.profile.with(&self.definition.choice_key, value.as_str())),
            None => Err(StepError::NoSelection {
                choice_key: self.definition.choice_key.clone(),
            }),
        }
    }

    /// Profile with this step's answer removed
    pub fn go_back(&self) -> Profile {
        self.profile.without(&self.definition.choice_key)
    }

    fn select_index(&mut self, index: usize) -> Option<Action> {
        let value = self.definition.options.get(index)?.value.clone();
        // Index comes from our own options, so this cannot be unknown
        let _ = self.select(&value);
        None
    }

    fn select_cursor(&mut self) -> Option<Action> {
        let index = self.list_state.selected()?;
        self.select_index(index)
    }

    fn confirm_action(&self) -> Option<Action> {
        match self.confirm() {
            Ok(profile) => Some(Action::StepNext(profile)),
            Err(e) => {
                debug!("{e}");
                None
            }
        }
    }

    fn move_cursor(&mut self, delta: isize) {
        let len = self.definition.options.len();
        if len == 0 {
            return;
        }
        let current = self.list_state.selected().unwrap_or(0) as isize;
        let next = (current + delta).clamp(0, len as isize - 1);
        self.list_state.select(Some(next as usize));
    }

    fn locale_action(&self, index: usize) -> Option<Action> {
        self.locales
            .get(index)
            .map(|choice| Action::ChangeLocale(choice.code.clone()))
    }

    fn hit_action(&mut self, hit: Hit) -> Option<Action> {
        match hit {
            Hit::Option(index) => self.select_index(index),
            Hit::Back => Some(Action::StepPrevious(self.go_back())),
            Hit::Locale(index) => self.locale_action(index),
            Hit::Confirm => self.confirm_action(),
        }
    }
}

impl Component for SingleChoiceStep {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.move_cursor(-1);
                None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.move_cursor(1);
                None
            }
            KeyCode::Home | KeyCode::Char('g') => {
                self.move_cursor(isize::MIN / 2);
                None
            }
            KeyCode::End | KeyCode::Char('G') => {
                self.move_cursor(isize::MAX / 2);
                None
            }
            KeyCode::Char(' ') => self.select_cursor(),
            KeyCode::Enter => {
                let cursor_selected = self
                    .list_state
                    .selected()
                    .and_then(|i| self.definition.options.get(i))
                    .is_some_and(|o| self.is_selected(&o.value));
                if cursor_selected {
                    self.confirm_action()
                } else {
                    self.select_cursor()
                }
            }
            KeyCode::Char('n') | KeyCode::Tab => self.confirm_action(),
            KeyCode::Backspace | KeyCode::Left | KeyCode::Char('b') | KeyCode::Char('h') => {
                Some(Action::StepPrevious(self.go_back()))
            }
            KeyCode::Char(c @ '1'..='9') => {
                let index = c as usize - '1' as usize;
                self.select_index(index)
            }
            KeyCode::F(n) if n >= 1 => self.locale_action(n as usize - 1),
            KeyCode::Char('?') => Some(Action::OpenHelp),
            KeyCode::Esc | KeyCode::Char('q') => Some(Action::OpenQuitDialog),
            _ => None,
        };
        Ok(action)
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<Option<Action>> {
        let action = match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                let position = Position::new(mouse.column, mouse.row);
                let hit = self
                    .hit_areas
                    .iter()
                    .find(|(area, _)| area.contains(position))
                    .map(|(_, hit)| *hit);
                hit.and_then(|hit| self.hit_action(hit))
            }
            MouseEventKind::ScrollUp => {
                self.move_cursor(-1);
                None
            }
            MouseEventKind::ScrollDown => {
                self.move_cursor(1);
                None
            }
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect, i18n: &dyn Translator) -> Result<()> {
        frame.render_widget(Clear, area);
        self.hit_areas.clear();

        let ns = self.definition.ns.clone();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Progress
                Constraint::Length(3), // Title
                Constraint::Length(2), // Question
                Constraint::Min(3),    // Options
                Constraint::Length(3), // Bottom bar
            ])
            .split(area);

        // Progress
        if let Some((current, total)) = self.progress {
            let progress = i18n.t_args(
                "common:step",
                &[("current", &current.to_string()), ("total", &total.to_string())],
            );
            let progress_widget = Paragraph::new(Line::from(Span::styled(
                progress,
                Style::default().fg(Color::DarkGray),
            )))
            .alignment(Alignment::Right);
            frame.render_widget(progress_widget, chunks[0]);
        }

        // Title
        let title = Paragraph::new(Line::from(Span::styled(
            t_ns(i18n, &ns, "title"),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::BOTTOM));
        frame.render_widget(title, chunks[1]);

        // Question
        let question = Paragraph::new(t_ns(i18n, &ns, "question"))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        frame.render_widget(question, chunks[2]);

        self.draw_options(frame, chunks[3], i18n, &ns);
        self.draw_bottom_bar(frame, chunks[4], i18n);

        Ok(())
    }
}

impl SingleChoiceStep {
    fn draw_options(&mut self, frame: &mut Frame, area: Rect, i18n: &dyn Translator, ns: &str) {
        let items: Vec<ListItem> = self
            .definition
            .options
            .iter()
            .enumerate()
            .map(|(i, option)| {
                let selected = self.is_selected(&option.value);
                let marker = if selected { "● " } else { "○ " };
                let label_style = if selected {
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                };

                ListItem::new(Line::from(vec![
                    Span::styled(format!("[{}] ", i + 1), Style::default().fg(Color::DarkGray)),
                    Span::styled(
                        marker,
                        Style::default().fg(if selected {
                            Color::Green
                        } else {
                            Color::DarkGray
                        }),
                    ),
                    Span::styled(t_ns(i18n, ns, &format!("options.{}", option.value)), label_style),
                ]))
            })
            .collect();

        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray)),
            )
            .highlight_style(Style::default().bg(Color::Blue).fg(Color::White))
            .highlight_symbol("▶ ");

        frame.render_stateful_widget(list, area, &mut self.list_state);

        // One line per option inside the border
        let inner = area.inner(ratatui::layout::Margin::new(1, 1));
        let offset = self.list_state.offset();
        for row in 0..inner.height {
            let index = offset + row as usize;
            if index >= self.definition.options.len() {
                break;
            }
            let row_area = Rect::new(inner.x, inner.y + row, inner.width, 1);
            self.hit_areas.push((row_area, Hit::Option(index)));
        }
    }

    fn draw_bottom_bar(&mut self, frame: &mut Frame, area: Rect, i18n: &dyn Translator) {
        let mut buttons: Vec<(String, Hit, Style)> = Vec::with_capacity(self.locales.len() + 2);

        buttons.push((
            format!("b {}", i18n.t("common:back")),
            Hit::Back,
            Style::default().fg(Color::Yellow),
        ));

        for (i, choice) in self.locales.iter().enumerate() {
            let active = &choice.code == i18n.locale();
            let style = if active {
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            buttons.push((format!("F{} {}", i + 1, choice.name), Hit::Locale(i), style));
        }

        let confirm_style = if self.can_confirm() {
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::DIM)
        };
        buttons.push((
            format!("n {}", i18n.t("common:confirm")),
            Hit::Confirm,
            confirm_style,
        ));

        let constraints: Vec<Constraint> = buttons
            .iter()
            .map(|(label, _, _)| Constraint::Length(label.width() as u16 + 4))
            .collect();
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(constraints)
            .flex(Flex::SpaceBetween)
            .split(area);

        for ((label, hit, style), cell) in buttons.into_iter().zip(cells.iter()) {
            let button = Paragraph::new(Span::styled(label, style))
                .alignment(Alignment::Center)
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(style.remove_modifier(Modifier::BOLD)),
                );
            frame.render_widget(button, *cell);
            self.hit_areas.push((*cell, hit));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::{Catalog, Locale};
    use crate::model::choice::ChoiceOption;
    use crossterm::event::KeyModifiers;
    use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};
    use serde_json::json;
    use std::sync::{Arc, Mutex};

    fn color_step() -> StepDefinition {
        StepDefinition {
            ns: "color".to_string(),
            choice_key: "color".to_string(),
            options: vec![ChoiceOption::new("a"), ChoiceOption::new("b")],
        }
    }

    fn diet_step() -> StepDefinition {
        StepDefinition {
            ns: "diet".to_string(),
            choice_key: "diet".to_string(),
            options: vec![
                ChoiceOption::new("omnivore"),
                ChoiceOption::new("vegetarian"),
                ChoiceOption::new("vegan"),
                ChoiceOption::new("other"),
            ],
        }
    }

    fn locales() -> Vec<LocaleChoice> {
        vec![
            LocaleChoice::new("fi", "Suomi"),
            LocaleChoice::new("en", "English"),
        ]
    }

    fn profile(value: serde_json::Value) -> Profile {
        serde_json::from_value(value).unwrap()
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn buffer_text(buffer: &Buffer) -> String {
        let width = buffer.area.width.max(1) as usize;
        buffer
            .content()
            .chunks(width)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn render(step: &mut SingleChoiceStep, catalog: &Catalog) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 20)).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.area();
                step.draw(frame, area, catalog).unwrap();
            })
            .unwrap();
        buffer_text(terminal.backend().buffer())
    }

    #[test]
    fn test_initial_selection_from_matching_string() {
        let step = SingleChoiceStep::new(color_step(), &profile(json!({"color": "b"})), locales());
        assert_eq!(step.selected(), Some("b"));
        assert!(step.is_selected("b"));
        assert!(!step.is_selected("a"));
        assert_eq!(step.cursor(), Some(1));
    }

    #[test]
    fn test_initial_selection_rejects_non_string() {
        let number = profile(json!({"color": 7}));
        assert_eq!(
            initial_selection(&number, "color"),
            Err(StepError::InvalidProfileValue {
                choice_key: "color".to_string(),
                found: "number",
            })
        );

        let object = profile(json!({"color": {"hue": 1}}));
        let step = SingleChoiceStep::new(color_step(), &object, locales());
        assert_eq!(step.selected(), None);
        assert!(!step.can_confirm());
    }

    #[test]
    fn test_initial_selection_rejects_missing_null_and_empty() {
        let found = |p: &Profile| match initial_selection(p, "color") {
            Err(StepError::InvalidProfileValue { found, .. }) => found,
            other => panic!("unexpected {other:?}"),
        };
        assert_eq!(found(&Profile::new()), "undefined");
        assert_eq!(found(&profile(json!({"color": null}))), "null");
        assert_eq!(found(&profile(json!({"color": ""}))), "empty string");
        assert_eq!(
            initial_selection(&profile(json!({"color": "a"})), "color"),
            Ok("a".to_string())
        );
    }

    #[derive(Clone, Default)]
    struct LogBuffer(Arc<Mutex<Vec<u8>>>);

    impl std::io::Write for LogBuffer {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    /// Build a step while capturing what it logs at warn level
    fn construct_logged(p: &Profile) -> (SingleChoiceStep, String) {
        let buffer = LogBuffer::default();
        let writer = buffer.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .with_max_level(tracing::Level::WARN)
            .finish();
        let step = tracing::subscriber::with_default(subscriber, || {
            SingleChoiceStep::new(color_step(), p, locales())
        });
        let logged = String::from_utf8(buffer.0.lock().unwrap().clone()).unwrap();
        (step, logged)
    }

    #[test]
    fn test_constructor_warns_on_unusable_value() {
        for value in [json!({}), json!({"color": null}), json!({"color": ""}), json!({"color": 7})] {
            let (step, logged) = construct_logged(&profile(value.clone()));
            assert_eq!(step.selected(), None, "{value}");
            assert!(logged.contains("WARN"), "no warning for {value}");
            assert!(logged.contains("'color'"), "{logged}");
        }
    }

    #[test]
    fn test_constructor_is_silent_for_string_value() {
        let (step, logged) = construct_logged(&profile(json!({"color": "a"})));
        assert_eq!(step.selected(), Some("a"));
        assert!(logged.is_empty(), "{logged}");
    }

    #[test]
    fn test_select_replaces_previous_selection() {
        let mut step = SingleChoiceStep::new(color_step(), &Profile::new(), locales());
        step.select("a").unwrap();
        step.select("b").unwrap();

        assert!(step.is_selected("b"));
        assert!(!step.is_selected("a"));
    }

    #[test]
    fn test_select_unknown_option_is_rejected() {
        let mut step = SingleChoiceStep::new(color_step(), &Profile::new(), locales());
        step.select("a").unwrap();

        let result = step.select("z");
        assert!(matches!(result, Err(StepError::UnknownOption { .. })));
        assert_eq!(step.selected(), Some("a"));
    }

    #[test]
    fn test_confirm_requires_selection() {
        let step = SingleChoiceStep::new(color_step(), &Profile::new(), locales());
        assert_eq!(
            step.confirm(),
            Err(StepError::NoSelection {
                choice_key: "color".to_string()
            })
        );
    }

    #[test]
    fn test_confirm_merges_selection_without_aliasing() {
        let original = profile(json!({"name": "Aino", "color": "a"}));
        let mut step = SingleChoiceStep::new(color_step(), &original, locales());
        step.select("b").unwrap();

        let next = step.confirm().unwrap();
        assert_eq!(next, profile(json!({"name": "Aino", "color": "b"})));
        assert_eq!(original, profile(json!({"name": "Aino", "color": "a"})));
    }

    #[test]
    fn test_go_back_removes_answer_without_aliasing() {
        let original = profile(json!({"name": "Aino", "color": "a"}));
        let step = SingleChoiceStep::new(color_step(), &original, locales());

        assert_eq!(step.go_back(), profile(json!({"name": "Aino"})));
        assert_eq!(original.get("color"), Some(&json!("a")));
    }

    #[test]
    fn test_example_walkthrough() {
        let original = Profile::new();
        let mut step = SingleChoiceStep::new(color_step(), &original, locales());
        assert_eq!(step.selected(), None);
        assert!(!step.can_confirm());

        step.select("b").unwrap();
        assert!(step.can_confirm());

        let next = step.confirm().unwrap();
        assert_eq!(next, profile(json!({"color": "b"})));
        assert!(original.is_empty());
    }

    #[test]
    fn test_keyboard_select_then_confirm() {
        let mut step = SingleChoiceStep::new(color_step(), &Profile::new(), locales());

        // Nothing selected: confirm keys do nothing
        assert_eq!(step.handle_key_event(key(KeyCode::Char('n'))).unwrap(), None);

        step.handle_key_event(key(KeyCode::Down)).unwrap();
        // First Enter selects the row under the cursor
        assert_eq!(step.handle_key_event(key(KeyCode::Enter)).unwrap(), None);
        assert_eq!(step.selected(), Some("b"));

        // Second Enter confirms it
        let action = step.handle_key_event(key(KeyCode::Enter)).unwrap();
        assert_eq!(action, Some(Action::StepNext(profile(json!({"color": "b"})))));
    }

    #[test]
    fn test_enter_on_other_row_moves_selection() {
        let mut step = SingleChoiceStep::new(color_step(), &profile(json!({"color": "b"})), locales());
        step.handle_key_event(key(KeyCode::Up)).unwrap();

        assert_eq!(step.handle_key_event(key(KeyCode::Enter)).unwrap(), None);
        assert_eq!(step.selected(), Some("a"));
    }

    #[test]
    fn test_cursor_is_clamped() {
        let mut step = SingleChoiceStep::new(color_step(), &Profile::new(), locales());
        step.handle_key_event(key(KeyCode::Up)).unwrap();
        assert_eq!(step.cursor(), Some(0));

        for _ in 0..5 {
            step.handle_key_event(key(KeyCode::Char('j'))).unwrap();
        }
        assert_eq!(step.cursor(), Some(1));
    }

    #[test]
    fn test_number_keys_select_directly() {
        let mut step = SingleChoiceStep::new(diet_step(), &Profile::new(), locales());
        step.handle_key_event(key(KeyCode::Char('3'))).unwrap();
        assert_eq!(step.selected(), Some("vegan"));

        // Out of range is ignored
        step.handle_key_event(key(KeyCode::Char('9'))).unwrap();
        assert_eq!(step.selected(), Some("vegan"));
    }

    #[test]
    fn test_back_key_emits_previous() {
        let mut step = SingleChoiceStep::new(color_step(), &profile(json!({"color": "a", "x": 1})), locales());
        let action = step.handle_key_event(key(KeyCode::Backspace)).unwrap();
        assert_eq!(action, Some(Action::StepPrevious(profile(json!({"x": 1})))));
    }

    #[test]
    fn test_function_keys_switch_locale() {
        let mut step = SingleChoiceStep::new(color_step(), &Profile::new(), locales());
        assert_eq!(
            step.handle_key_event(key(KeyCode::F(2))).unwrap(),
            Some(Action::ChangeLocale(Locale::new("en")))
        );
        assert_eq!(step.handle_key_event(key(KeyCode::F(3))).unwrap(), None);
    }

    #[test]
    fn test_quit_and_help_keys() {
        let mut step = SingleChoiceStep::new(color_step(), &Profile::new(), locales());
        assert_eq!(step.handle_key_event(key(KeyCode::Esc)).unwrap(), Some(Action::OpenQuitDialog));
        assert_eq!(step.handle_key_event(key(KeyCode::Char('?'))).unwrap(), Some(Action::OpenHelp));
    }

    #[test]
    fn test_render_shows_translated_labels() {
        let catalog = Catalog::embedded(Locale::new("fi"));
        let mut step = SingleChoiceStep::new(diet_step(), &Profile::new(), locales()).with_progress(2, 3);

        let screen = render(&mut step, &catalog);
        assert!(screen.contains("Ruokavalio"));
        assert!(screen.contains("Vegaani"));
        assert!(screen.contains("Edellinen"));
        assert!(screen.contains("Valmis"));
        assert!(screen.contains("Suomi"));
        assert!(screen.contains("English"));
        assert!(screen.contains("Vaihe 2/3"));
    }

    #[test]
    fn test_render_follows_locale_switch() {
        let mut catalog = Catalog::embedded(Locale::new("fi"));
        let mut step = SingleChoiceStep::new(diet_step(), &Profile::new(), locales());

        catalog.change_language(&Locale::new("en"));
        let screen = render(&mut step, &catalog);
        assert!(screen.contains("Diet"));
        assert!(screen.contains("Back"));
        assert!(!screen.contains("Edellinen"));
    }

    #[test]
    fn test_click_selects_option_row() {
        let catalog = Catalog::embedded(Locale::new("en"));
        let mut step = SingleChoiceStep::new(diet_step(), &Profile::new(), locales());
        render(&mut step, &catalog);

        // Options block starts at row 6 (1 + 3 + 2); row 7 is the first option
        let action = step.handle_mouse_event(click(10, 9)).unwrap();
        assert_eq!(action, None);
        assert_eq!(step.selected(), Some("vegan"));
        assert_eq!(step.cursor(), Some(2));
    }

    #[test]
    fn test_click_confirm_is_ignored_until_selected() {
        let catalog = Catalog::embedded(Locale::new("en"));
        let mut step = SingleChoiceStep::new(color_step(), &Profile::new(), locales());
        render(&mut step, &catalog);

        // Confirm is the right-most button on the bottom bar
        assert_eq!(step.handle_mouse_event(click(78, 18)).unwrap(), None);

        step.select("a").unwrap();
        let action = step.handle_mouse_event(click(78, 18)).unwrap();
        assert_eq!(action, Some(Action::StepNext(profile(json!({"color": "a"})))));
    }
}
