//! Summary screen shown after the last step

use crate::action::Action;
use crate::component::Component;
use crate::i18n::{t_ns, Translator};
use crate::model::{Profile, StepDefinition};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Review of every answer before the profile is saved
pub struct SummaryComponent {
    steps: Vec<StepDefinition>,
    profile: Profile,
    /// Set when saving failed
    pub error: Option<String>,
}

impl SummaryComponent {
    pub fn new(steps: Vec<StepDefinition>, profile: &Profile) -> Self {
        Self {
            steps,
            profile: profile.clone(),
            error: None,
        }
    }

    fn answer_lines(&self, i18n: &dyn Translator) -> Vec<Line<'static>> {
        let mut lines = Vec::new();
        for step in &self.steps {
            let answer = match self.profile.get(&step.choice_key).and_then(|v| v.as_str()) {
                Some(value) => Span::styled(
                    t_ns(i18n, &step.ns, &format!("options.{}", value)),
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
                None => Span::styled(
                    i18n.t("common:no_answer"),
                    Style::default().fg(Color::DarkGray),
                ),
            };

            lines.push(Line::from(Span::styled(
                t_ns(i18n, &step.ns, "question"),
                Style::default().fg(Color::Cyan),
            )));
            lines.push(Line::from(vec![Span::raw("  "), answer]));
            lines.push(Line::from(""));
        }
        lines
    }
}

impl Component for SummaryComponent {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Enter | KeyCode::Char('y') => Some(Action::SaveProfile),
            // The last step's answer is kept so it shows up pre-selected
            KeyCode::Backspace | KeyCode::Left | KeyCode::Char('b') => {
                Some(Action::StepPrevious(self.profile.clone()))
            }
            KeyCode::Char('?') => Some(Action::OpenHelp),
            KeyCode::Esc | KeyCode::Char('q') => Some(Action::OpenQuitDialog),
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect, i18n: &dyn Translator) -> Result<()> {
        frame.render_widget(Clear, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Min(3),    // Answers
                Constraint::Length(1), // Error
                Constraint::Length(3), // Help
            ])
            .split(area);

        let title = Paragraph::new(Line::from(Span::styled(
            i18n.t("common:summary_title"),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )))
        .alignment(ratatui::layout::Alignment::Center)
        .block(Block::default().borders(Borders::BOTTOM));
        frame.render_widget(title, chunks[0]);

        let answers = Paragraph::new(self.answer_lines(i18n))
            .wrap(Wrap { trim: false })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray)),
            );
        frame.render_widget(answers, chunks[1]);

        if let Some(ref error) = self.error {
            let error = Paragraph::new(Line::from(Span::styled(
                error.clone(),
                Style::default().fg(Color::Red),
            )));
            frame.render_widget(error, chunks[2]);
        }

        let help = Paragraph::new(Line::from(vec![
            Span::styled(" Enter ", Style::default().fg(Color::Green)),
            Span::raw(format!("{}   ", i18n.t("common:summary_save"))),
            Span::styled(" b ", Style::default().fg(Color::Yellow)),
            Span::raw(i18n.t("common:summary_back")),
        ]))
        .alignment(ratatui::layout::Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
        frame.render_widget(help, chunks[3]);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::{Catalog, Locale};
    use crate::model::choice::ChoiceOption;
    use crossterm::event::KeyModifiers;

    fn steps() -> Vec<StepDefinition> {
        vec![
            StepDefinition {
                ns: "diet".to_string(),
                choice_key: "diet".to_string(),
                options: vec![ChoiceOption::new("vegan")],
            },
            StepDefinition {
                ns: "goal".to_string(),
                choice_key: "goal".to_string(),
                options: vec![ChoiceOption::new("maintain")],
            },
        ]
    }

    fn text(lines: &[Line]) -> String {
        lines
            .iter()
            .flat_map(|line| line.spans.iter().map(|s| s.content.to_string()))
            .collect::<Vec<_>>()
            .join("|")
    }

    #[test]
    fn test_answers_are_translated() {
        let catalog = Catalog::embedded(Locale::new("en"));
        let profile = Profile::new().with("diet", "vegan");
        let summary = SummaryComponent::new(steps(), &profile);

        let rendered = text(&summary.answer_lines(&catalog));
        assert!(rendered.contains("Vegan"));
        assert!(rendered.contains("(no answer)"));
    }

    #[test]
    fn test_back_keeps_profile() {
        let profile = Profile::new().with("diet", "vegan").with("goal", "maintain");
        let mut summary = SummaryComponent::new(steps(), &profile);

        let action = summary
            .handle_key_event(KeyEvent::new(KeyCode::Char('b'), KeyModifiers::NONE))
            .unwrap();
        assert_eq!(action, Some(Action::StepPrevious(profile)));
    }

    #[test]
    fn test_enter_saves() {
        let mut summary = SummaryComponent::new(steps(), &Profile::new());
        let action = summary
            .handle_key_event(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE))
            .unwrap();
        assert_eq!(action, Some(Action::SaveProfile));
    }
}
