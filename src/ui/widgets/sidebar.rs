//! Named-color pane: one chip-and-hex row per derived color.

use ratatui::{
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::ui::theme::{colors, palette_color};
use tintsmith::Palette;

pub fn render(f: &mut Frame, palette: &Palette, area: ratatui::prelude::Rect) {
    let block = Block::default()
        .title(" Named colors ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(colors::BORDER))
        .style(Style::default().bg(colors::ELEVATED));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows: [(&str, &str); 6] = [
        ("primary", &palette.primary),
        ("secondary", &palette.secondary),
        ("tertiary", &palette.tertiary),
        ("accent", &palette.accent),
        ("background", &palette.background),
        ("text", &palette.text),
    ];

    let lines: Vec<Line> = rows
        .iter()
        .map(|(name, hex)| {
            Line::from(vec![
                Span::styled("  ", Style::default().bg(palette_color(hex))),
                Span::raw(" "),
                Span::styled(format!("{name:<11}"), Style::default().fg(colors::TEXT_DIM)),
                Span::styled(hex.to_string(), Style::default().fg(colors::MUTED)),
            ])
        })
        .collect();
    f.render_widget(Paragraph::new(lines), inner);
}
