//! Full-frame render: regions to widgets, picker overlay last.

use ratatui::Frame;

use crate::app::App;
use crate::ui::layout;
use crate::ui::widgets::{
    render_controls, render_header, render_picker, render_preview, render_sidebar,
    render_status, render_swatches,
};

pub fn render(f: &mut Frame, app: &App) {
    let area = f.area();
    let regions = layout::compute(area);
    let settings = app.engine.settings();

    render_header(f, &app.slot_display, regions.header);
    render_controls(f, &app.state, settings, regions.controls);
    render_swatches(f, &settings.colors.scale, regions.swatches);
    render_sidebar(f, &settings.colors, regions.sidebar);
    render_preview(f, &settings.colors, regions.preview);
    render_status(f, settings.enabled, &app.state.note, regions.status);

    if app.state.picker.visible {
        render_picker(f, &app.state.picker, layout::picker_overlay_rect(area));
    }
}
