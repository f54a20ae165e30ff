//! Terminal User Interface
//!
//! Profile card, setup wizard (modal and page) and edit modal built on
//! Ratatui, plus the loop that drives them.

pub mod app;
pub mod card_render;
pub mod edit;
pub mod edit_render;
pub mod events;
pub mod form;
pub mod form_render;
pub mod list_editor;
pub mod profile_card;
pub mod render;
pub mod setup;
pub mod setup_render;
pub mod theme;
pub mod wizard;

pub use app::{App, ProfileHandler, Screen};
pub use edit::ProfileEdit;
pub use events::{EventHandler, TuiEvent};
pub use profile_card::{CardAction, ProfileCard};
pub use setup::{ProfileSetup, SetupLayout};
pub use theme::Theme;

use crate::error::ProfileKitError;
use anyhow::{Context, Result};
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::Duration;

/// Run `app` until it quits and hand the caller's handler back.
///
/// Sets up raw mode and the alternate screen, and restores the terminal on
/// every exit path.
pub async fn run<H: ProfileHandler>(mut app: App<H>, tick_rate: Duration) -> Result<H> {
    enable_raw_mode().map_err(|e| ProfileKitError::Terminal(e.to_string()))?;
    let mut stdout = io::stdout();
    if let Err(e) = execute!(stdout, EnterAlternateScreen) {
        disable_raw_mode().ok();
        return Err(ProfileKitError::Terminal(e.to_string()).into());
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    EventHandler::start_terminal_listener(app.event_sender(), tick_rate);

    let result = run_loop(&mut terminal, &mut app).await;

    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    terminal.show_cursor().ok();

    result?;
    Ok(app.into_handler())
}

async fn run_loop<H: ProfileHandler>(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App<H>,
) -> Result<()> {
    loop {
        terminal
            .draw(|f| render::render(f, app))
            .context("Failed to draw frame")?;

        let Some(event) = app.next_event().await else {
            return Err(ProfileKitError::ChannelClosed.into());
        };
        app.handle_event(event).await?;

        if app.should_quit {
            break;
        }
    }
    Ok(())
}
