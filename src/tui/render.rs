//! TUI Rendering
//!
//! Dispatches drawing to the active screen.

use super::app::{App, ProfileHandler, Screen};
use super::card_render::{CardMode, render_profile_card};
use super::edit_render::render_edit;
use super::setup_render::{centered_rect, render_setup};
use ratatui::Frame;

const CARD_WIDTH: u16 = 80;
const CARD_HEIGHT: u16 = 26;

/// Render the entire UI
pub fn render<H: ProfileHandler>(f: &mut Frame, app: &App<H>) {
    match &app.screen {
        Screen::Card(card) => {
            let area = centered_rect(CARD_WIDTH, CARD_HEIGHT, f.area());
            render_profile_card(f, area, card, &app.theme, CardMode::Interactive);
        }
        Screen::Setup(setup) => render_setup(f, setup, &app.theme, app.animation_frame),
        Screen::Edit(edit) => render_edit(f, edit, &app.theme, app.animation_frame),
        Screen::Closed => {}
    }
}
