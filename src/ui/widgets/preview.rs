//! Mock chat screen painted with the derived palette: header bar, channel
//! column, message area, composer with send button.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::ui::theme::{colors, palette_color};
use tintsmith::Palette;

pub fn render(f: &mut Frame, palette: &Palette, area: ratatui::prelude::Rect) {
    let block = Block::default()
        .title(" Preview ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(colors::BORDER));
    let inner = block.inner(area);
    f.render_widget(block, area);
    if inner.height < 3 || inner.width < 20 {
        return;
    }

    let bg = palette_color(&palette.background);
    let secondary = palette_color(&palette.secondary);
    let tertiary = palette_color(&palette.tertiary);
    let text = palette_color(&palette.text);
    let accent = palette_color(&palette.accent);
    let primary = palette_color(&palette.primary);
    let dim = palette_color(&palette.scale.s400);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(inner);

    // Header bar.
    f.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled(" # general ", Style::default().fg(text).add_modifier(Modifier::BOLD)),
            Span::styled("— custom theme", Style::default().fg(dim)),
        ]))
        .style(Style::default().bg(secondary)),
        rows[0],
    );

    // Channel column + messages.
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(14), Constraint::Min(6)])
        .split(rows[1]);
    render_channels(f, columns[0], tertiary, text, dim);
    render_messages(f, columns[1], bg, text, accent, dim);

    // Composer with send button.
    let send = " Send ";
    let pad = (rows[2].width as usize)
        .saturating_sub(" Message #general".chars().count() + send.chars().count() + 1);
    f.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled(" Message #general", Style::default().fg(dim)),
            Span::raw(" ".repeat(pad)),
            Span::styled(send, Style::default().fg(text).bg(primary)),
            Span::raw(" "),
        ]))
        .style(Style::default().bg(tertiary)),
        rows[2],
    );
}

fn render_channels(
    f: &mut Frame,
    area: Rect,
    bg: ratatui::style::Color,
    text: ratatui::style::Color,
    dim: ratatui::style::Color,
) {
    let lines = vec![
        Line::from(Span::styled(" CHANNELS", Style::default().fg(dim))),
        Line::from(Span::styled(" # welcome", Style::default().fg(dim))),
        Line::from(Span::styled(" # general", Style::default().fg(text).add_modifier(Modifier::BOLD))),
        Line::from(Span::styled(" # themes", Style::default().fg(dim))),
    ];
    f.render_widget(Paragraph::new(lines).style(Style::default().bg(bg)), area);
}

fn render_messages(
    f: &mut Frame,
    area: Rect,
    bg: ratatui::style::Color,
    text: ratatui::style::Color,
    accent: ratatui::style::Color,
    dim: ratatui::style::Color,
) {
    let lines = vec![
        Line::from(vec![
            Span::styled(" mirai ", Style::default().fg(accent).add_modifier(Modifier::BOLD)),
            Span::styled("today at 12:04", Style::default().fg(dim)),
        ]),
        Line::from(Span::styled(
            " this is what messages look like with your palette",
            Style::default().fg(text),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled(" you ", Style::default().fg(accent).add_modifier(Modifier::BOLD)),
            Span::styled("today at 12:05", Style::default().fg(dim)),
        ]),
        Line::from(Span::styled(
            " links and mentions pick up the accent color",
            Style::default().fg(text),
        )),
    ];
    f.render_widget(Paragraph::new(lines).style(Style::default().bg(bg)), area);
}
