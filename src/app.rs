//! Root application component
//!
//! The App is the onboarding controller. It owns the profile and the
//! translator, builds the current step from the profile, and reacts to the
//! `StepNext` / `StepPrevious` actions a step emits by storing the profile it
//! was handed and moving through the flow.

use crate::action::Action;
use crate::component::Component;
use crate::components::{content_area, HelpDialog, QuitDialog, SingleChoiceStep, SummaryComponent};
use crate::config::Config;
use crate::i18n::{Catalog, Locale, Translator};
use crate::model::{Modal, ModalStack, OnboardingFlow, Profile};
use crate::services::{self, ProfileRecord};
use anyhow::{Context, Result};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent};
use ratatui::{layout::Rect, Frame};
use std::path::PathBuf;
use tracing::{debug, error, info, warn};

/// Which screen the controller is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Step,
    Summary,
}

/// Main application state - coordinates between components
pub struct App {
    /// Flag to indicate the app should quit
    pub should_quit: bool,

    /// Where the finished profile was written, once saved
    pub saved_to: Option<PathBuf>,

    config: Config,
    /// Persist locale changes to the user's config file
    persist_config: bool,
    i18n: Box<dyn Translator>,
    flow: OnboardingFlow,
    profile: Profile,
    index: usize,
    screen: Screen,
    output_path: Option<PathBuf>,

    /// Modal overlay stack
    modals: ModalStack,

    // ─────────────────────────────────────────────────────────────────────────
    // Child Components
    // ─────────────────────────────────────────────────────────────────────────
    step: SingleChoiceStep,
    summary: Option<SummaryComponent>,
    quit_dialog: QuitDialog,
    help_dialog: HelpDialog,
}

impl App {
    /// Create a controller positioned on the first step
    pub fn new(
        config: Config,
        flow: OnboardingFlow,
        i18n: Box<dyn Translator>,
        profile: Profile,
    ) -> Result<App> {
        flow.validate()?;

        let first = flow.steps[0].clone();
        let step = SingleChoiceStep::new(first, &profile, config.switch_locales.clone())
            .with_progress(1, flow.len());
        let output_path = config.output_path();
        let locale_count = config.switch_locales.len();

        Ok(App {
            should_quit: false,
            saved_to: None,
            config,
            persist_config: false,
            i18n,
            flow,
            profile,
            index: 0,
            screen: Screen::Step,
            output_path,
            modals: ModalStack::new(),
            step,
            summary: None,
            quit_dialog: QuitDialog,
            help_dialog: HelpDialog::new(locale_count),
        })
    }

    /// Build the controller from the user's config file
    pub fn from_config(config: Config) -> Result<App> {
        let flow = match &config.flow_path {
            Some(path) => services::load_flow(path)
                .with_context(|| format!("Failed to load onboarding flow {}", path))?,
            None => services::default_flow()?,
        };

        let mut catalog = Catalog::embedded(config.locale.clone());
        if let Some(dir) = Config::locales_dir() {
            catalog.load_dir(&dir)?;
        }
        // Warns when no file provided the configured locale
        catalog.change_language(&config.locale);

        let profile = match &config.resume_path {
            Some(path) => services::load_profile(path)?,
            None => Profile::new(),
        };

        info!(
            steps = flow.len(),
            locale = %config.locale,
            answers = profile.len(),
            "starting onboarding"
        );

        let mut app = App::new(config, flow, Box::new(catalog), profile)?;
        app.persist_config = true;
        Ok(app)
    }

    fn rebuild_step(&mut self) {
        let definition = self.flow.steps[self.index].clone();
        self.step = SingleChoiceStep::new(
            definition,
            &self.profile,
            self.config.switch_locales.clone(),
        )
        .with_progress(self.index + 1, self.flow.len());
    }

    fn advance(&mut self, profile: Profile) {
        info!(
            choice_key = self.step.choice_key(),
            answer = ?profile.get(self.step.choice_key()),
            "step confirmed"
        );
        self.profile = profile;

        if self.index + 1 < self.flow.len() {
            self.index += 1;
            self.rebuild_step();
        } else {
            self.screen = Screen::Summary;
            self.summary = Some(SummaryComponent::new(self.flow.steps.clone(), &self.profile));
        }
    }

    fn retreat(&mut self, profile: Profile) {
        self.profile = profile;

        match self.screen {
            Screen::Summary => {
                self.summary = None;
                self.screen = Screen::Step;
            }
            Screen::Step => {
                info!(choice_key = self.step.choice_key(), "step abandoned");
                self.index = self.index.saturating_sub(1);
            }
        }
        self.rebuild_step();
    }

    fn save_profile(&mut self) {
        let result = match &self.output_path {
            Some(path) => {
                let record = ProfileRecord::new(self.profile.clone());
                services::save_record(path, &record).map(|()| path.clone())
            }
            None => Err(anyhow::anyhow!("Could not determine where to save the profile")),
        };

        match result {
            Ok(path) => {
                info!(path = %path.display(), answers = self.profile.len(), "profile saved");
                self.saved_to = Some(path);
                self.should_quit = true;
            }
            Err(e) => {
                error!("failed to save profile: {e:#}");
                if let Some(summary) = self.summary.as_mut() {
                    summary.error = Some(format!("{e:#}"));
                }
            }
        }
    }

    fn change_locale(&mut self, locale: Locale) {
        info!(locale = %locale, "changing language");
        self.i18n.change_language(&locale);
        self.config.locale = locale;

        if self.persist_config {
            if let Err(e) = self.config.save() {
                warn!("could not remember language choice: {e}");
            }
        }
    }

    pub fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Ok(Some(Action::ForceQuit));
        }

        match self.modals.top() {
            Some(Modal::QuitConfirm) => self.quit_dialog.handle_key_event(key),
            Some(Modal::Help) => self.help_dialog.handle_key_event(key),
            None => match (self.screen, self.summary.as_mut()) {
                (Screen::Summary, Some(summary)) => summary.handle_key_event(key),
                _ => self.step.handle_key_event(key),
            },
        }
    }

    pub fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<Option<Action>> {
        if !self.modals.is_empty() || self.screen != Screen::Step {
            return Ok(None);
        }
        self.step.handle_mouse_event(mouse)
    }

    pub fn update(&mut self, action: Action) -> Result<Option<Action>> {
        if action != Action::Tick {
            debug!(action = %action, "update");
        }

        match action {
            Action::Tick | Action::Resize(_, _) => {}
            Action::ForceQuit => {
                info!("quitting without saving");
                self.should_quit = true;
            }
            Action::StepNext(profile) => self.advance(profile),
            Action::StepPrevious(profile) => self.retreat(profile),
            Action::SaveProfile => self.save_profile(),
            Action::ChangeLocale(locale) => self.change_locale(locale),
            Action::OpenQuitDialog => self.modals.push(Modal::QuitConfirm),
            Action::OpenHelp => self.modals.push(Modal::Help),
            Action::CloseModal => {
                self.modals.pop();
            }
        }
        Ok(None)
    }

    pub fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let content = content_area(area);
        let i18n = self.i18n.as_ref();

        match (self.screen, self.summary.as_mut()) {
            (Screen::Summary, Some(summary)) => summary.draw(frame, content, i18n)?,
            _ => self.step.draw(frame, content, i18n)?,
        }

        for modal in self.modals.iter() {
            match modal {
                Modal::QuitConfirm => self.quit_dialog.draw(frame, area, i18n)?,
                Modal::Help => self.help_dialog.draw(frame, area, i18n)?,
            }
        }

        Ok(())
    }
}

/// Inspection helpers for tests
#[cfg(test)]
impl App {
    pub fn with_output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = Some(path.into());
        self
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn current_index(&self) -> usize {
        self.index
    }

    pub fn step(&self) -> &SingleChoiceStep {
        &self.step
    }

    pub fn translator(&self) -> &dyn Translator {
        self.i18n.as_ref()
    }

    pub fn top_modal(&self) -> Option<&Modal> {
        self.modals.top()
    }
}
