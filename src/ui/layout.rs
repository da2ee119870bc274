//! Vertical stack: header, controls, swatch strip, preview body, status.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

use super::theme::{
    CONTROLS_HEIGHT, HEADER_HEIGHT, MIN_PREVIEW_LINES, SIDEBAR_WIDTH, STATUS_HEIGHT,
    SWATCHES_HEIGHT,
};

#[derive(Clone, Debug)]
pub struct LayoutRegions {
    pub header: Rect,
    pub controls: Rect,
    pub swatches: Rect,
    pub sidebar: Rect,
    pub preview: Rect,
    pub status: Rect,
}

pub fn compute(area: Rect) -> LayoutRegions {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Length(CONTROLS_HEIGHT),
            Constraint::Length(SWATCHES_HEIGHT),
            Constraint::Min(MIN_PREVIEW_LINES),
            Constraint::Length(STATUS_HEIGHT),
        ])
        .split(area);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(20)])
        .split(chunks[3]);

    LayoutRegions {
        header: chunks[0],
        controls: chunks[1],
        swatches: chunks[2],
        sidebar: body[0],
        preview: body[1],
        status: chunks[4],
    }
}

/// Centered overlay rect for the preset picker.
pub fn picker_overlay_rect(area: Rect) -> Rect {
    let width = area.width.saturating_sub(8).min(56);
    let height = area.height.saturating_sub(4).min(14);
    Rect {
        x: area.x + (area.width.saturating_sub(width)) / 2,
        y: area.y + (area.height.saturating_sub(height)) / 2,
        width,
        height,
    }
}
