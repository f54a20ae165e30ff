//! Profile Edit Rendering
//!
//! Split-pane modal: step tabs and form on the left, live card preview on
//! the right.

use super::card_render::{CardMode, render_profile_card};
use super::edit::ProfileEdit;
use super::form_render::{error_lines, field_lines, footer_line};
use super::profile_card::ProfileCard;
use super::setup_render::centered_rect;
use super::theme::Theme;
use crate::profile::Profile;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Tabs, Wrap},
};

const MODAL_WIDTH: u16 = 120;
const MODAL_HEIGHT: u16 = 36;

pub fn render_edit(f: &mut Frame, edit: &ProfileEdit, theme: &Theme, animation_frame: usize) {
    let area = centered_rect(MODAL_WIDTH, MODAL_HEIGHT, f.area());
    f.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border())
        .title(Span::styled(" Edit Profile ", theme.title()));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(inner);

    let panes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[0]);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(2),
            Constraint::Min(0),
        ])
        .split(panes[0]);

    let form = &edit.form;
    let titles: Vec<Line<'static>> = form
        .steps
        .iter()
        .enumerate()
        .map(|(i, spec)| Line::from(format!("{} {}", i + 1, spec.title)))
        .collect();
    let tabs = Tabs::new(titles)
        .select(form.step() - 1)
        .style(theme.muted())
        .highlight_style(
            Style::default()
                .fg(theme.highlight)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        )
        .divider(Span::styled("│", theme.muted()))
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(theme.muted()),
        );
    f.render_widget(tabs, left[0]);

    f.render_widget(
        Paragraph::new(Line::from(Span::styled(
            form.spec().subtitle.to_string(),
            theme.muted(),
        ))),
        left[1],
    );

    let mut lines = field_lines(form, theme);
    lines.extend(error_lines(form, theme));
    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), left[2]);

    let preview = ProfileCard::new(Profile::preview(edit.draft()));
    render_profile_card(f, panes[1], &preview, theme, CardMode::Preview);

    let mut footer = footer_line(form, theme, edit.submit_label(), animation_frame);
    footer.spans.push(Span::styled("  [Alt+1-3] ", theme.key_hint()));
    footer.spans.push(Span::raw("Tabs"));
    f.render_widget(Paragraph::new(footer).alignment(Alignment::Center), rows[1]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::ProfileDraft;
    use crate::tui::form_render::test_support::buffer_contains_text;
    use ratatui::{Terminal, backend::TestBackend, buffer::Buffer};

    fn draw(edit: &ProfileEdit) -> Buffer {
        let mut terminal = Terminal::new(TestBackend::new(130, 40)).unwrap();
        terminal
            .draw(|f| render_edit(f, edit, &Theme::default(), 0))
            .unwrap();
        terminal.backend().buffer().clone()
    }

    #[test]
    fn test_edit_renders_tabs_form_and_preview() {
        let edit = ProfileEdit::new(Profile::sample().draft);
        let buffer = draw(&edit);
        assert!(buffer_contains_text(&buffer, "Edit Profile"));
        assert!(buffer_contains_text(&buffer, "1 Basic Info"));
        assert!(buffer_contains_text(&buffer, "3 Skills & Links"));
        assert!(buffer_contains_text(&buffer, "Live Preview"));
        assert!(buffer_contains_text(&buffer, "Save"));
    }

    #[test]
    fn test_preview_reflects_unsaved_edits() {
        let mut edit = ProfileEdit::new(ProfileDraft {
            name: "Old".to_string(),
            ..ProfileDraft::default()
        });
        edit.form.draft.name = "Brand New Name".to_string();
        edit.form.draft.role = "Staff Engineer".to_string();
        let buffer = draw(&edit);
        assert!(buffer_contains_text(&buffer, "Staff Engineer"));
        assert!(buffer_contains_text(&buffer, "│   B   │"));
    }
}
