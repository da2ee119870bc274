//! TUI widgets: header, controls, swatch strip, sidebar, preview, picker,
//! status.

mod controls;
mod header;
mod picker;
mod preview;
mod sidebar;
mod status;
mod swatches;

pub use controls::render as render_controls;
pub use header::render as render_header;
pub use picker::render as render_picker;
pub use preview::render as render_preview;
pub use sidebar::render as render_sidebar;
pub use status::render as render_status;
pub use swatches::render as render_swatches;
