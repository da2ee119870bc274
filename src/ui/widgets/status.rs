//! Status bar: enabled state and last note on the left, key hints right.

use ratatui::{style::Style, text::Span, widgets::Paragraph, Frame};

use crate::ui::theme::colors;

pub fn render(f: &mut Frame, enabled: bool, note: &str, area: ratatui::prelude::Rect) {
    let left = format!(
        " {} {}",
        if enabled { "●" } else { "○" },
        note
    );
    let right = " Tab field  Enter apply  ←→ intensity  ^T mode  ^E on/off  ^R reset  ^P presets  Esc quit ";
    let width = area.width as usize;
    let left_len = left.chars().count();
    let right_len = right.chars().count();
    let pad = width.saturating_sub(left_len + right_len);
    let line = format!("{}{}{}", left, " ".repeat(pad), right);
    let span = Span::styled(line, Style::default().fg(colors::MUTED).bg(colors::ELEVATED));
    f.render_widget(Paragraph::new(span), area);
}
