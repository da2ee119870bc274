//! Palette-driven custom theme engine for a chat application host.
//!
//! The portable core: derive a full tonal palette from one base color
//! ([`compute_palette`]), render it to CSS overriding the host's theme
//! variables ([`render_css`]), and keep a forward-compatible settings
//! document ([`Settings`]). [`ThemeEngine`] ties the three together behind
//! the host capability traits ([`StyleSlot`], [`ThemeHost`]).

mod color;
mod css;
mod engine;
mod host;
mod palette;
mod presets;
mod settings;
mod store;

pub use color::{Hsl, Rgb};
pub use css::render_css;
pub use engine::ThemeEngine;
pub use host::{
    FileSlot, HostError, MemorySlot, PanelControl, PanelSpec, StyleSlot, ThemeHost, ThemeOption,
};
pub use palette::{
    compute_palette, intensity_factor, Mode, Palette, ToneScale, DEFAULT_BASE_COLOR, SCALE_STEPS,
};
pub use presets::{presets, Preset};
pub use settings::{Settings, SETTINGS_VERSION};
pub use store::{JsonFileStore, MemoryStore, SettingsStore, StoreError};
