//! Tonal scale strip: ten colored cells, ordinal and hex labels beneath.

use ratatui::{
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::ui::theme::{colors, palette_color};
use tintsmith::ToneScale;

pub fn render(f: &mut Frame, scale: &ToneScale, area: ratatui::prelude::Rect) {
    let steps = scale.steps();
    let cell = ((area.width as usize).saturating_sub(2) / steps.len()).max(4);

    let mut band: Vec<Span> = vec![Span::raw(" ")];
    let mut ordinals: Vec<Span> = vec![Span::raw(" ")];
    let mut hexes: Vec<Span> = vec![Span::raw(" ")];
    for (step, hex) in steps {
        band.push(Span::styled(
            " ".repeat(cell),
            Style::default().bg(palette_color(hex)),
        ));
        ordinals.push(Span::styled(
            format!("{step:<width$}", width = cell),
            Style::default().fg(colors::TEXT_DIM),
        ));
        hexes.push(Span::styled(
            format!("{hex:<width$}", width = cell),
            Style::default().fg(colors::MUTED),
        ));
    }

    let mut lines = vec![
        Line::from(Span::styled(" Tonal scale", Style::default().fg(colors::TEXT_DIM))),
        Line::from(band),
        Line::from(ordinals),
    ];
    // Hex labels need eight columns per cell to stay readable.
    if cell >= 8 {
        lines.push(Line::from(hexes));
    }
    let para = Paragraph::new(lines).style(Style::default().bg(colors::BG));
    f.render_widget(para, area);
}
