//! ticketsafer - a terminal ticketing marketplace
//!
//! Browse a catalog of events, buy tickets through a checkout wizard, keep
//! favorites, inspect a wallet's ticket collection, and draft new events.

mod action;
mod app;
mod component;
mod components;
mod config;
mod error;
mod logging;
mod model;
mod services;
mod tui;

use crate::action::Action;
use crate::app::App;
use crate::component::Component;
use crate::config::Config;
use crate::tui::{Input, Session, DEFAULT_TICK};
use anyhow::Result;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // Logging is best effort; the UI works without a log file
    if let Err(e) = logging::init() {
        eprintln!("Logging disabled: {}", e);
    }

    let config = Config::load();
    tracing::info!(network = %config.network, wallet = config.wallet_connected(), "Starting ticketsafer");

    let mut session = Session::start(DEFAULT_TICK)?;

    let mut app = App::new(config);
    app.init()?;

    let result = run_app(&mut session, &mut app);

    session.finish()?;

    if let Err(err) = result {
        tracing::error!("Exiting after error: {:?}", err);
        eprintln!("Error: {:?}", err);
        std::process::exit(1);
    }

    tracing::info!("Bye");
    Ok(())
}

/// Run the main application loop
fn run_app(session: &mut Session, app: &mut App) -> Result<()> {
    while !app.should_quit {
        session.render(|frame| {
            if let Err(e) = app.draw(frame, frame.area()) {
                tracing::error!("Draw error: {}", e);
            }
        })?;

        let action = match session.next_input()? {
            Input::Key(key) => app.handle_key_event(key)?,
            Input::Mouse(mouse) => app.handle_mouse_event(mouse)?,
            Input::Resize(w, h) => Some(Action::Resize(w, h)),
            Input::Tick => Some(Action::Tick),
        };

        // An action may chain follow-up actions
        let mut current_action = action;
        while let Some(a) = current_action {
            current_action = app.update(a)?;
        }
    }

    Ok(())
}
