//! Profile Card Rendering

use super::profile_card::{CardButton, ProfileCard};
use super::theme::Theme;
use crate::profile::AvatarView;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use unicode_width::UnicodeWidthStr;

const AVATAR_WIDTH: u16 = 9;
const AVATAR_HEIGHT: u16 = 5;

/// How the card is being shown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardMode {
    /// Standalone card that owns keyboard focus
    Interactive,
    /// Live preview inside a wizard; buttons are drawn but inert
    Preview,
}

/// Render the card into `area`
pub fn render_profile_card(
    f: &mut Frame,
    area: Rect,
    card: &ProfileCard,
    theme: &Theme,
    mode: CardMode,
) {
    let title = match mode {
        CardMode::Interactive => " Profile ",
        CardMode::Preview => " Live Preview ",
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border())
        .title(Span::styled(title, theme.title()));
    let inner = block.inner(area);
    f.render_widget(block, area);

    if inner.height < 3 || inner.width < 10 {
        return;
    }

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(AVATAR_HEIGHT.min(inner.height)),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(inner);

    let header = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(AVATAR_WIDTH), Constraint::Min(0)])
        .split(rows[0]);

    render_avatar(f, header[0], card, theme);
    f.render_widget(
        Paragraph::new(header_lines(card, theme)).wrap(Wrap { trim: true }),
        header[1],
    );
    f.render_widget(
        Paragraph::new(body_lines(card, theme, rows[1].width)).wrap(Wrap { trim: false }),
        rows[1],
    );
    f.render_widget(
        Paragraph::new(button_line(card, theme, mode)).alignment(Alignment::Center),
        rows[2],
    );
}

fn render_avatar(f: &mut Frame, area: Rect, card: &ProfileCard, theme: &Theme) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.muted());
    let (text, style) = match card.avatar() {
        AvatarView::Initial(c) => (
            c.to_string(),
            Style::default()
                .fg(theme.highlight)
                .add_modifier(Modifier::BOLD),
        ),
        AvatarView::Image(_) => ("IMG".to_string(), Style::default().fg(theme.accent)),
    };
    let inner_height = area.height.saturating_sub(2);
    let mut lines: Vec<Line<'static>> = Vec::new();
    for _ in 0..inner_height.saturating_sub(1) / 2 {
        lines.push(Line::from(""));
    }
    lines.push(Line::from(Span::styled(text, style)));
    f.render_widget(
        Paragraph::new(lines)
            .block(block)
            .alignment(Alignment::Center),
        area,
    );
}

fn header_lines(card: &ProfileCard, theme: &Theme) -> Vec<Line<'static>> {
    let draft = &card.profile().draft;
    let mut lines = Vec::new();

    let name = if draft.name.trim().is_empty() {
        Span::styled("Your name", theme.muted())
    } else {
        Span::styled(
            draft.name.clone(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )
    };
    lines.push(Line::from(name));

    let role_focus = match (draft.role.trim(), draft.focus.trim()) {
        ("", "") => String::new(),
        (role, "") => role.to_string(),
        ("", focus) => focus.to_string(),
        (role, focus) => format!("{} · {}", role, focus),
    };
    if !role_focus.is_empty() {
        lines.push(Line::from(Span::styled(
            role_focus,
            Style::default().fg(theme.accent),
        )));
    }
    if !draft.location.trim().is_empty() {
        lines.push(Line::from(Span::styled(
            format!("⌖ {}", draft.location),
            theme.muted(),
        )));
    }
    if !draft.email.trim().is_empty() {
        lines.push(Line::from(Span::styled(
            format!("✉ {}", draft.email),
            theme.muted(),
        )));
    }
    lines
}

fn section(lines: &mut Vec<Line<'static>>, title: &str, theme: &Theme) {
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(title.to_string(), theme.heading())));
}

fn body_lines(card: &ProfileCard, theme: &Theme, width: u16) -> Vec<Line<'static>> {
    let draft = &card.profile().draft;
    let mut lines: Vec<Line<'static>> = Vec::new();

    if !draft.bio.trim().is_empty() {
        lines.push(Line::from(Span::styled(
            draft.bio.clone(),
            Style::default().fg(Color::White),
        )));
    }

    if !draft.skills.is_empty() {
        section(&mut lines, "Skills", theme);
        lines.extend(chip_lines(&draft.skills, theme, width));
    }

    if !draft.highlights.is_empty() {
        section(&mut lines, "Highlights", theme);
        for item in &draft.highlights {
            lines.push(Line::from(vec![
                Span::styled("• ", Style::default().fg(theme.highlight)),
                Span::raw(item.clone()),
            ]));
        }
    }

    if !draft.links.is_empty() {
        section(&mut lines, "Links", theme);
        for link in &draft.links {
            lines.push(Line::from(vec![
                Span::styled("↗ ", Style::default().fg(theme.accent)),
                Span::styled(
                    link.clone(),
                    Style::default()
                        .fg(theme.accent)
                        .add_modifier(Modifier::UNDERLINED),
                ),
            ]));
        }
    }

    if !draft.looking_for.trim().is_empty() {
        section(&mut lines, "Looking for", theme);
        lines.push(Line::from(draft.looking_for.clone()));
    }

    lines
}

/// Lay skills out as `[chip]` spans, breaking lines at `width`
fn chip_lines(items: &[String], theme: &Theme, width: u16) -> Vec<Line<'static>> {
    let width = usize::from(width.max(1));
    let mut lines = Vec::new();
    let mut current: Vec<Span<'static>> = Vec::new();
    let mut used = 0;

    for item in items {
        let chip = format!("[{}]", item);
        let chip_width = chip.width() + 1;
        if used > 0 && used + chip_width > width {
            lines.push(Line::from(std::mem::take(&mut current)));
            used = 0;
        }
        current.push(Span::styled(
            chip,
            Style::default().fg(Color::Black).bg(theme.highlight),
        ));
        current.push(Span::raw(" "));
        used += chip_width;
    }
    if !current.is_empty() {
        lines.push(Line::from(current));
    }
    lines
}

fn button_line(card: &ProfileCard, theme: &Theme, mode: CardMode) -> Line<'static> {
    let mut spans = Vec::new();
    for button in CardButton::ALL {
        let enabled = card.is_enabled(button);
        let focused = mode == CardMode::Interactive && card.focused() == button;

        let mut style = if enabled {
            Style::default().fg(Color::White).bg(theme.accent)
        } else {
            Style::default().fg(theme.muted)
        };
        if focused {
            style = style.add_modifier(Modifier::BOLD | Modifier::REVERSED);
        }

        let label = match mode {
            CardMode::Interactive => format!(" {} ({}) ", card.label(button), button.hotkey()),
            CardMode::Preview => format!(" {} ", card.label(button)),
        };
        spans.push(Span::styled(label, style));
        spans.push(Span::raw(" "));
    }
    spans.pop();
    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::{ConnectionStatus, Profile, ProfileDraft};
    use ratatui::{Terminal, backend::TestBackend, buffer::Buffer};

    fn buffer_text(buffer: &Buffer) -> String {
        let area = buffer.area;
        let mut text = String::new();
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    fn draw(card: &ProfileCard, mode: CardMode) -> String {
        let mut terminal = Terminal::new(TestBackend::new(70, 24)).unwrap();
        terminal
            .draw(|f| render_profile_card(f, f.area(), card, &Theme::default(), mode))
            .unwrap();
        buffer_text(terminal.backend().buffer())
    }

    #[test]
    fn test_card_renders_profile_fields() {
        let text = draw(&ProfileCard::new(Profile::sample()), CardMode::Interactive);
        assert!(text.contains("Ada Lovelace"));
        assert!(text.contains("Mathematician"));
        assert!(text.contains("London, UK"));
        assert!(text.contains("[Algorithms]"));
        assert!(text.contains("Connect (c)"));
    }

    #[test]
    fn test_missing_avatar_renders_initial() {
        let card = ProfileCard::new(Profile::preview(&ProfileDraft {
            name: "ada".to_string(),
            avatar_url: "nonsense".to_string(),
            ..ProfileDraft::default()
        }));
        let text = draw(&card, CardMode::Preview);
        let avatar_row = text
            .lines()
            .find(|line| line.contains('A') && line.contains('│'))
            .unwrap();
        assert!(avatar_row.contains("│   A   │"));
        assert!(!text.contains("IMG"));
    }

    #[test]
    fn test_valid_avatar_renders_image_slot() {
        let mut draft = ProfileDraft {
            name: "ada".to_string(),
            avatar_url: "https://example.com/a.png".to_string(),
            ..ProfileDraft::default()
        };
        draft.refresh_avatar_preview();
        let text = draw(&ProfileCard::new(Profile::preview(&draft)), CardMode::Preview);
        assert!(text.contains("IMG"));
    }

    #[test]
    fn test_connected_label() {
        let mut profile = Profile::sample();
        profile.connection_status = ConnectionStatus::Accepted;
        let text = draw(&ProfileCard::new(profile), CardMode::Preview);
        assert!(text.contains("Connected"));
        assert!(text.contains("Live Preview"));
    }

    #[test]
    fn test_empty_preview_shows_placeholder_name() {
        let card = ProfileCard::new(Profile::preview(&ProfileDraft::new()));
        let text = draw(&card, CardMode::Preview);
        assert!(text.contains("Your name"));
        assert!(!text.contains("Skills"));
    }

    #[test]
    fn test_chip_lines_wrap() {
        let items: Vec<String> = ["aaaa", "bbbb", "cccc"].iter().map(|s| s.to_string()).collect();
        let lines = chip_lines(&items, &Theme::default(), 14);
        assert_eq!(lines.len(), 2);
    }
}
