//! Form Rendering
//!
//! Draws the fields of the current wizard step, validation messages and the
//! navigation footer. Shared by the setup and edit layouts.

use super::form::{DraftForm, FormField};
use super::theme::Theme;
use crate::profile::ListKind;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

/// Rows of a list field shown before scrolling kicks in
const LIST_ROWS: usize = 4;

const SPINNER: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Progress dots (filled for reached steps, hollow for remaining)
pub fn progress_dots(current: usize, total: usize) -> String {
    (1..=total)
        .map(|i| if i <= current { "●" } else { "○" })
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn spinner(frame: usize) -> &'static str {
    SPINNER[frame % SPINNER.len()]
}

/// Step header: dots, title, subtitle
pub fn header_lines(form: &DraftForm, theme: &Theme) -> Vec<Line<'static>> {
    let spec = form.spec();
    vec![
        Line::from(Span::styled(
            progress_dots(form.step(), form.controller.total()),
            Style::default().fg(theme.accent),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("Step {} of {}: {}", form.step(), form.controller.total(), spec.title),
            theme.heading(),
        )),
        Line::from(Span::styled(spec.subtitle.to_string(), theme.muted())),
        Line::from(""),
    ]
}

/// All fields of the current step
pub fn field_lines(form: &DraftForm, theme: &Theme) -> Vec<Line<'static>> {
    let spec = form.spec();
    let mut lines = Vec::new();
    for (i, field) in spec.fields.iter().enumerate() {
        let focused = i == form.focused;
        let required = spec.is_required(*field);
        match field {
            FormField::Text(f) => text_field(&mut lines, form, *f, focused, required, theme),
            FormField::List(kind) => list_field(&mut lines, form, *kind, focused, required, theme),
        }
        lines.push(Line::from(""));
    }
    lines
}

fn label_span(label: &str, focused: bool, required: bool, theme: &Theme) -> Vec<Span<'static>> {
    let marker = if focused { " > " } else { "   " };
    let mut spans = vec![
        Span::styled(marker, Style::default().fg(theme.hint)),
        Span::styled(
            label.to_string(),
            Style::default()
                .fg(if focused { theme.accent } else { Color::Gray })
                .add_modifier(if focused {
                    Modifier::BOLD
                } else {
                    Modifier::empty()
                }),
        ),
    ];
    if required {
        spans.push(Span::styled(" *", Style::default().fg(theme.error)));
    }
    spans.push(Span::raw(": "));
    spans
}

fn text_field(
    lines: &mut Vec<Line<'static>>,
    form: &DraftForm,
    field: crate::profile::DraftField,
    focused: bool,
    required: bool,
    theme: &Theme,
) {
    let mut spans = label_span(field.label(), focused, required, theme);
    let value = form.draft.field(field);
    if value.is_empty() {
        spans.push(Span::styled(
            field.placeholder().to_string(),
            theme.muted().add_modifier(Modifier::ITALIC),
        ));
    } else {
        spans.push(Span::styled(
            value.to_string(),
            Style::default().fg(Color::White),
        ));
    }
    if focused {
        spans.push(Span::styled("_", Style::default().fg(theme.hint)));
    }
    lines.push(Line::from(spans));
}

fn list_field(
    lines: &mut Vec<Line<'static>>,
    form: &DraftForm,
    kind: ListKind,
    focused: bool,
    required: bool,
    theme: &Theme,
) {
    let editor = form.editors.get(kind);
    let items = form.draft.list(kind);

    let mut spans = label_span(kind.label(), focused, required, theme);
    if editor.input.is_empty() {
        spans.push(Span::styled(
            kind.placeholder().to_string(),
            theme.muted().add_modifier(Modifier::ITALIC),
        ));
    } else {
        spans.push(Span::styled(
            editor.input.clone(),
            Style::default().fg(Color::White),
        ));
    }
    if focused {
        spans.push(Span::styled("_", Style::default().fg(theme.hint)));
    }
    lines.push(Line::from(spans));

    if items.is_empty() {
        lines.push(Line::from(Span::styled("      (none yet)", theme.muted())));
        return;
    }

    let window = editor.visible_window(items.len(), LIST_ROWS);
    if window.start > 0 {
        lines.push(Line::from(Span::styled(
            format!("      ↑ {} more", window.start),
            theme.muted(),
        )));
    }
    for i in window.clone() {
        let selected = focused && i == editor.selected();
        let marker = if selected { "    ▸ " } else { "    · " };
        lines.push(Line::from(vec![
            Span::styled(marker, Style::default().fg(theme.highlight)),
            Span::styled(
                items[i].clone(),
                if selected {
                    Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::Gray)
                },
            ),
        ]));
    }
    if window.end < items.len() {
        lines.push(Line::from(Span::styled(
            format!("      ↓ {} more", items.len() - window.end),
            theme.muted(),
        )));
    }
}

/// Validation messages from the last rejected Next/Submit
pub fn error_lines(form: &DraftForm, theme: &Theme) -> Vec<Line<'static>> {
    form.errors
        .iter()
        .map(|err| {
            Line::from(Span::styled(
                format!("  ! {}", err),
                Style::default().fg(theme.error),
            ))
        })
        .collect()
}

/// Navigation footer. Next is drawn disabled while the step is invalid.
pub fn footer_line(
    form: &DraftForm,
    theme: &Theme,
    submit_label: &str,
    animation_frame: usize,
) -> Line<'static> {
    let white = Style::default().fg(Color::White);
    let mut spans = vec![
        Span::styled("[Esc] ", theme.key_hint()),
        Span::styled(
            if form.controller.is_first() {
                "Close  "
            } else {
                "Back  "
            },
            white,
        ),
        Span::styled("[Tab] ", theme.key_hint()),
        Span::styled("Field  ", white),
    ];

    if !form.controller.is_last() {
        let enabled = form.can_advance();
        spans.push(Span::styled(
            "[^N] ",
            if enabled {
                theme.key_hint()
            } else {
                theme.muted()
            },
        ));
        spans.push(Span::styled(
            "Next  ",
            if enabled { white } else { theme.muted() },
        ));
    }

    if form.is_loading() {
        spans.push(Span::styled(
            format!("{} Saving...", spinner(animation_frame)),
            Style::default().fg(theme.highlight),
        ));
    } else {
        spans.push(Span::styled("[^S] ", theme.key_hint()));
        spans.push(Span::styled(submit_label.to_string(), white));
    }

    Line::from(spans)
}

/// Header, fields and errors for the current step in one paragraph
pub fn render_form_body(f: &mut Frame, area: Rect, form: &DraftForm, theme: &Theme) {
    let mut lines = header_lines(form, theme);
    lines.extend(field_lines(form, theme));
    lines.extend(error_lines(form, theme));
    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), area);
}

#[cfg(test)]
pub(crate) mod test_support {
    use ratatui::buffer::Buffer;

    /// Whether any row of the rendered buffer contains `text`
    pub fn buffer_contains_text(buffer: &Buffer, text: &str) -> bool {
        let area = buffer.area;
        (area.top()..area.bottom()).any(|y| {
            let row: String = (area.left()..area.right())
                .map(|x| buffer[(x, y)].symbol())
                .collect();
            row.contains(text)
        })
    }
}
