//! Preset picker overlay: query line plus accent-bar selection list.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

use crate::state::PickerState;
use crate::ui::theme::{colors, palette_color};
use tintsmith::presets;

pub fn render(f: &mut Frame, picker: &PickerState, area: ratatui::prelude::Rect) {
    if !picker.visible {
        return;
    }
    f.render_widget(Clear, area);
    let block = Block::default()
        .title("  Presets  ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(colors::BORDER))
        .style(Style::default().bg(colors::ELEVATED));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let mut lines = vec![Line::from(vec![
        Span::styled("▸ ", Style::default().fg(colors::ACCENT)),
        Span::styled(picker.query.as_str(), Style::default().fg(colors::TEXT)),
    ])];

    if picker.filtered.is_empty() {
        lines.push(Line::from(Span::styled(
            "  no matching preset",
            Style::default().fg(colors::MUTED),
        )));
    }

    let take = (inner.height as usize).saturating_sub(1);
    for (i, &idx) in picker.filtered.iter().take(take).enumerate() {
        let preset = &presets()[idx];
        let selected = i == picker.selected_index;
        lines.push(Line::from(vec![
            Span::styled(
                if selected { "▎ " } else { "  " },
                Style::default().fg(colors::ACCENT),
            ),
            Span::styled("  ", Style::default().bg(palette_color(preset.base_color))),
            Span::raw(" "),
            Span::styled(
                format!("{:<10}", preset.name),
                if selected {
                    Style::default().fg(colors::TEXT).add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(colors::TEXT_DIM)
                },
            ),
            Span::styled(
                preset.description,
                Style::default().fg(if selected { colors::TEXT_DIM } else { colors::MUTED }),
            ),
        ]));
    }

    f.render_widget(Paragraph::new(lines), inner);
}
