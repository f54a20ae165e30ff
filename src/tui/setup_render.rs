//! Profile Setup Rendering
//!
//! Modal overlay and full-page layouts for the setup wizard.

use super::card_render::{CardMode, render_profile_card};
use super::form_render::{footer_line, render_form_body};
use super::profile_card::ProfileCard;
use super::setup::{ProfileSetup, SetupLayout};
use super::theme::Theme;
use crate::profile::Profile;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

const MODAL_WIDTH: u16 = 110;
const MODAL_HEIGHT: u16 = 34;

/// Rectangle of at most `width` x `height` centered in `area`
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let v_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(height.min(area.height.saturating_sub(2))),
            Constraint::Min(0),
        ])
        .split(area);

    let h_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(width.min(area.width.saturating_sub(2))),
            Constraint::Min(0),
        ])
        .split(v_chunks[1]);

    h_chunks[1]
}

pub fn render_setup(f: &mut Frame, setup: &ProfileSetup, theme: &Theme, animation_frame: usize) {
    match setup.layout {
        SetupLayout::Modal => render_modal(f, setup, theme, animation_frame),
        SetupLayout::Page => render_page(f, setup, theme, animation_frame),
    }
}

fn render_modal(f: &mut Frame, setup: &ProfileSetup, theme: &Theme, animation_frame: usize) {
    let area = centered_rect(MODAL_WIDTH, MODAL_HEIGHT, f.area());
    f.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border())
        .title(Span::styled(
            format!(
                " Set Up Your Profile ({}/{}) ",
                setup.form.step(),
                setup.form.controller.total()
            ),
            theme.title(),
        ));
    let inner = block.inner(area);
    f.render_widget(block, area);

    render_split(f, inner, setup, theme, animation_frame);
}

fn render_page(f: &mut Frame, setup: &ProfileSetup, theme: &Theme, animation_frame: usize) {
    let area = f.area();
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    let header = Paragraph::new(vec![
        Line::from(Span::styled("Create Your Profile", theme.heading())),
        Line::from(Span::styled(
            "Tell people who you are. You can change everything later.",
            theme.muted(),
        )),
    ])
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(theme.border()),
    );
    f.render_widget(header, rows[0]);

    render_split(f, rows[1], setup, theme, animation_frame);
}

/// Form on the left, live preview on the right, footer across the bottom
fn render_split(
    f: &mut Frame,
    area: Rect,
    setup: &ProfileSetup,
    theme: &Theme,
    animation_frame: usize,
) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(rows[0]);

    render_form_body(f, columns[0], &setup.form, theme);

    let preview = ProfileCard::new(Profile::preview(setup.draft()));
    render_profile_card(f, columns[1], &preview, theme, CardMode::Preview);

    f.render_widget(
        Paragraph::new(footer_line(
            &setup.form,
            theme,
            setup.submit_label(),
            animation_frame,
        ))
        .alignment(Alignment::Center),
        rows[1],
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::form_render::test_support::buffer_contains_text;
    use ratatui::{Terminal, backend::TestBackend, buffer::Buffer};

    fn draw(setup: &ProfileSetup) -> Buffer {
        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
        terminal
            .draw(|f| render_setup(f, setup, &Theme::default(), 0))
            .unwrap();
        terminal.backend().buffer().clone()
    }

    #[test]
    fn test_centered_rect() {
        let rect = centered_rect(20, 10, Rect::new(0, 0, 100, 50));
        assert_eq!(rect.width, 20);
        assert_eq!(rect.height, 10);
    }

    #[test]
    fn test_centered_rect_clamps_to_area() {
        let rect = centered_rect(200, 100, Rect::new(0, 0, 50, 20));
        assert_eq!(rect.width, 48);
        assert_eq!(rect.height, 18);
    }

    #[test]
    fn test_modal_renders_step_and_preview() {
        let setup = ProfileSetup::new(SetupLayout::Modal);
        let buffer = draw(&setup);
        assert!(buffer_contains_text(&buffer, "Set Up Your Profile (1/3)"));
        assert!(buffer_contains_text(&buffer, "Step 1 of 3: Basics"));
        assert!(buffer_contains_text(&buffer, "Live Preview"));
        assert!(buffer_contains_text(&buffer, "Close"));
    }

    #[test]
    fn test_page_renders_header() {
        let setup = ProfileSetup::new(SetupLayout::Page);
        let buffer = draw(&setup);
        assert!(buffer_contains_text(&buffer, "Create Your Profile"));
        assert!(!buffer_contains_text(&buffer, "Set Up Your Profile"));
    }

    #[test]
    fn test_preview_tracks_draft() {
        let mut setup = ProfileSetup::new(SetupLayout::Page);
        setup.form.draft.name = "Grace Hopper".to_string();
        let buffer = draw(&setup);
        assert!(buffer_contains_text(&buffer, "Grace Hopper"));
        assert!(buffer_contains_text(&buffer, "│   G   │"));
    }

    #[test]
    fn test_rejected_next_shows_messages() {
        let mut setup = ProfileSetup::new(SetupLayout::Modal);
        setup.form.next_step();
        let buffer = draw(&setup);
        assert!(buffer_contains_text(&buffer, "! Name is required"));
        assert!(buffer_contains_text(&buffer, "! Location is required"));
    }
}
