//! Header banner: title, version, and where the generated CSS lands.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::ui::theme::colors;

const VERSION: &str = env!("CARGO_PKG_VERSION");
const SLOT_LABEL: &str = "theme → ";

/// Truncate to `max_chars` from the end with ellipsis. Single pass over chars.
fn truncate_end(s: &str, max_chars: usize) -> String {
    let count = s.chars().count();
    if count <= max_chars {
        return s.to_string();
    }
    let take = max_chars.saturating_sub(1);
    let skip = count.saturating_sub(take);
    format!("…{}", s.chars().skip(skip).collect::<String>())
}

pub fn render(f: &mut Frame, slot_display: &str, area: ratatui::prelude::Rect) {
    let border = Style::default().fg(colors::BORDER);

    // Total width available, minus 2 for leading "  " indent.
    let total = (area.width as usize).saturating_sub(2);
    let dash_count = total.saturating_sub(2);
    // Inner content width = between "│ " and " │".
    let inner = total.saturating_sub(4);

    let title = format!("tintsmith (v{VERSION})");
    let title_len = title.chars().count();
    let slot_max = inner.saturating_sub(title_len + SLOT_LABEL.chars().count() + 2);
    let slot_show = truncate_end(slot_display, slot_max);
    let pad = inner
        .saturating_sub(title_len + SLOT_LABEL.chars().count() + slot_show.chars().count());

    let lines = vec![
        Line::from(vec![
            Span::styled("  ", border),
            Span::styled(format!("╭{}╮", "─".repeat(dash_count)), border),
        ]),
        Line::from(vec![
            Span::styled("  │ ", border),
            Span::styled(
                "tintsmith ",
                Style::default().fg(colors::ACCENT).add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!("(v{VERSION})"), Style::default().fg(colors::TEXT_DIM)),
            Span::raw(" ".repeat(pad)),
            Span::styled(SLOT_LABEL, Style::default().fg(colors::MUTED)),
            Span::styled(slot_show, Style::default().fg(colors::TEXT_DIM)),
            Span::styled(" │", border),
        ]),
        Line::from(vec![
            Span::styled("  ", border),
            Span::styled(format!("╰{}╯", "─".repeat(dash_count)), border),
        ]),
    ];

    let para = Paragraph::new(lines).style(Style::default().bg(colors::ELEVATED));
    f.render_widget(para, area);
}
