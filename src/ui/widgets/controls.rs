//! Settings controls: the two text fields plus the mode/intensity/enabled
//! readout. The focused field gets the accent prompt and the terminal cursor.

use ratatui::{
    layout::Position,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::state::{DesignerState, Focus};
use crate::ui::theme::colors;
use tintsmith::Settings;

fn field_line<'a>(label: &'a str, buffer: &'a str, focused: bool) -> Line<'a> {
    let prompt = if focused { "▸ " } else { "  " };
    Line::from(vec![
        Span::styled(
            prompt,
            Style::default().fg(colors::ACCENT).add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!("{label:<12}"), Style::default().fg(colors::TEXT_DIM)),
        Span::styled(
            buffer,
            if focused {
                Style::default().fg(colors::TEXT)
            } else {
                Style::default().fg(colors::TEXT_DIM)
            },
        ),
    ])
}

pub fn render(
    f: &mut Frame,
    state: &DesignerState,
    settings: &Settings,
    area: ratatui::prelude::Rect,
) {
    let block = Block::default()
        .title(" Controls ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(colors::BORDER))
        .style(Style::default().bg(colors::ELEVATED));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let enabled = if settings.enabled {
        Span::styled("on", Style::default().fg(colors::ACCENT))
    } else {
        Span::styled("off", Style::default().fg(colors::ERROR))
    };
    let knobs = Line::from(vec![
        Span::styled("  mode ", Style::default().fg(colors::MUTED)),
        Span::styled(settings.mode.label(), Style::default().fg(colors::TEXT)),
        Span::styled("   intensity ", Style::default().fg(colors::MUTED)),
        Span::styled(format!("{:>3}%", settings.intensity), Style::default().fg(colors::TEXT)),
        Span::styled("   theme ", Style::default().fg(colors::MUTED)),
        enabled,
    ]);

    let lines = vec![
        field_line("Base color", &state.color_buffer, state.focus == Focus::BaseColor),
        field_line("Custom CSS", &state.css_buffer, state.focus == Focus::CustomCss),
        knobs,
    ];
    f.render_widget(Paragraph::new(lines), inner);

    // Terminal cursor at the end of the focused buffer.
    if !state.picker.visible {
        let (row, buffer) = match state.focus {
            Focus::BaseColor => (0, state.color_buffer.as_str()),
            Focus::CustomCss => (1, state.css_buffer.as_str()),
        };
        let x = inner.x + 2 + 12 + buffer.chars().count() as u16;
        let position = Position {
            x: x.min(inner.x + inner.width.saturating_sub(1)),
            y: inner.y + row,
        };
        f.set_cursor_position(position);
    }
}
