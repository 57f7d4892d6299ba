//! onboarding-tui - A terminal onboarding questionnaire
//!
//! Walks the user through single-choice questions and saves the answers
//! as a JSON profile. It uses the Component Architecture pattern from ratatui.

// Compiled-in catalogues; `i18n::Catalog` layers runtime locale files on top
rust_i18n::i18n!("locales", fallback = "en");

mod action;
mod app;
mod component;
mod components;
mod config;
mod error;
mod i18n;
mod logging;
mod model;
mod services;
mod tui;

use crate::action::Action;
use crate::app::App;
use crate::config::Config;
use crate::tui::Tui;
use anyhow::Result;
use crossterm::event::Event;
use std::time::Duration;
use tracing::error;

fn main() -> Result<()> {
    if let Some(dir) = Config::config_dir() {
        if let Err(e) = logging::initialize_logger(&dir) {
            eprintln!("Logging disabled: {:#}", e);
        }
    }

    // Build the app before touching the terminal so setup errors stay readable
    let mut app = App::from_config(Config::load())?;

    let mut tui = Tui::new()?.with_tick_rate(Duration::from_millis(250));
    tui.enter()?;

    // Main event loop
    let result = run_app(&mut tui, &mut app);

    // Cleanup terminal
    tui.exit()?;

    if let Err(err) = result {
        error!("fatal: {err:#}");
        eprintln!("Error: {:?}", err);
        std::process::exit(1);
    }

    if let Some(path) = &app.saved_to {
        println!("Profile saved to {}", path.display());
    }

    Ok(())
}

/// Run the main application loop
fn run_app(tui: &mut Tui, app: &mut App) -> Result<()> {
    while !app.should_quit {
        // Draw the UI
        tui.draw(|frame| {
            let area = frame.area();
            if let Err(e) = app.draw(frame, area) {
                error!("draw error: {e:#}");
            }
        })?;

        // Poll for events
        if let Some(event) = tui.next_event()? {
            // Convert event to action
            let action = match event {
                Event::Key(key) => app.handle_key_event(key)?,
                Event::Mouse(mouse) => app.handle_mouse_event(mouse)?,
                Event::Resize(w, h) => Some(Action::Resize(w, h)),
                _ => None,
            };

            // Action might produce a follow-up action
            let mut current_action = action;
            while let Some(a) = current_action {
                current_action = app.update(a)?;
            }
        } else {
            // No event - send a tick for time-based updates
            app.update(Action::Tick)?;
        }
    }

    Ok(())
}
