//! dept-schedule - A terminal browser for a faculty's weekly lecture schedule
//!
//! This is the main entry point for the dept-schedule application.
//! It uses the Component Architecture pattern from ratatui.

mod action;
mod app;
mod component;
mod components;
mod config;
mod logging;
mod model;
mod services;
mod tui;

use crate::action::Action;
use crate::app::App;
use crate::component::Component;
use crate::config::{Config, ConfigOrigin};
use crate::tui::Tui;
use anyhow::Result;
use crossterm::event::Event;
use log::{error, info, warn};
use std::time::Duration;

fn main() -> Result<()> {
    let (config, origin) = Config::load();
    let log_file = logging::init(&config);

    info!("Starting dept-schedule {}", env!("CARGO_PKG_VERSION"));
    match &origin {
        ConfigOrigin::Invalid(e) => warn!("Ignoring unreadable config file, using defaults: {:#}", e),
        ConfigOrigin::NoHome => warn!("HOME is not set; using default config"),
        ConfigOrigin::File | ConfigOrigin::FirstRun(_) => {}
    }
    // First run: write the defaults so they can be edited
    match config.write_if_first_run(&origin) {
        Ok(true) => info!("Wrote default config"),
        Ok(false) => {}
        Err(e) => warn!("Could not write default config: {}", e),
    }

    // Load data before touching the terminal so a fatal error prints cleanly
    let mut app = App::new(config.clone())?;
    app.init()?;

    // Setup terminal
    let mut tui = Tui::new()?.with_tick_rate(Duration::from_millis(config.tick_rate_ms));
    tui.enter()?;

    // Main event loop
    let result = run_app(&mut tui, &mut app);

    // Cleanup terminal
    tui.exit()?;

    // Handle any errors
    if let Err(err) = result {
        error!("Exiting with error: {:?}", err);
        eprintln!("Error: {:?}", err);
        if let Some(path) = log_file {
            eprintln!("See {} for details", path.display());
        }
        std::process::exit(1);
    }

    info!("Exited cleanly");
    Ok(())
}

/// Run the main application loop
fn run_app(tui: &mut Tui, app: &mut App) -> Result<()> {
    while !app.should_quit {
        // Draw the UI
        tui.draw(|frame| {
            if let Err(e) = app.draw(frame, frame.area()) {
                error!("Draw error: {}", e);
            }
        })?;

        // Poll for events
        if let Some(event) = tui.next_event()? {
            // Convert event to action
            let action = match event {
                Event::Key(key) => app.handle_key_event(key)?,
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
            let mut current_action = Some(Action::Tick);
            while let Some(a) = current_action {
                current_action = app.update(a)?;
            }
        }
    }

    Ok(())
}
