//! Host capability seams: the style-injection slot the engine writes into,
//! the theme-option registration the host exposes, and the declarative
//! settings panel the engine offers outward.
//!
//! Everything here replaces runtime tree-walking of the host's UI with
//! explicit interfaces; structural widget discovery stays out of the core.

use std::path::{Path, PathBuf};
use std::{fs, io};

use thiserror::Error;

use crate::palette::Mode;
use crate::settings::Settings;

#[derive(Debug, Error)]
pub enum HostError {
    #[error("style slot i/o failed: {0}")]
    Io(#[from] io::Error),
    #[error("host extension point unavailable: {0}")]
    Unavailable(String),
}

/// The single externally-owned style-injection point. Created once on first
/// apply; afterwards only its content is replaced, never duplicated. An
/// owned handle, deliberately not an ambient singleton.
pub trait StyleSlot {
    fn apply(&mut self, css: &str) -> Result<(), HostError>;
    /// Empty the slot (theme disabled or plugin unloaded). Clearing an
    /// already-empty slot is a no-op.
    fn clear(&mut self) -> Result<(), HostError>;
}

/// In-memory slot for tests and previews; counts operations so the
/// create-once/update-in-place contract is observable.
#[derive(Debug, Default)]
pub struct MemorySlot {
    contents: Option<String>,
    pub applies: usize,
    pub clears: usize,
}

impl MemorySlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> Option<&str> {
        self.contents.as_deref()
    }
}

impl StyleSlot for MemorySlot {
    fn apply(&mut self, css: &str) -> Result<(), HostError> {
        self.applies += 1;
        self.contents = Some(css.to_string());
        Ok(())
    }

    fn clear(&mut self) -> Result<(), HostError> {
        self.clears += 1;
        self.contents = None;
        Ok(())
    }
}

/// Slot backed by a single CSS file, the portable analog of a live style
/// element. The file is the slot: rewritten wholesale on apply, removed on
/// clear.
pub struct FileSlot {
    path: PathBuf,
}

impl FileSlot {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `<config_dir>/tintsmith/theme.css`.
    pub fn default_location() -> Result<Self, HostError> {
        let dir = dirs::config_dir()
            .ok_or_else(|| HostError::Unavailable("no configuration directory".to_string()))?;
        Ok(Self::new(dir.join("tintsmith").join("theme.css")))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StyleSlot for FileSlot {
    fn apply(&mut self, css: &str) -> Result<(), HostError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, css)?;
        Ok(())
    }

    fn clear(&mut self) -> Result<(), HostError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// The entry offered to the host's theme selector.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ThemeOption {
    pub id: String,
    pub name: String,
    pub description: String,
}

impl ThemeOption {
    /// The one option this engine registers.
    pub fn custom_theme() -> Self {
        Self {
            id: "custom".to_string(),
            name: "Custom Theme".to_string(),
            description: "Create and customize your own theme".to_string(),
        }
    }
}

/// Capability the host exposes inward: list an extra entry in its theme
/// selector. Selection flows back to the engine through whatever surface the
/// host renders the panel with.
pub trait ThemeHost {
    fn register_theme_option(&mut self, option: ThemeOption) -> Result<(), HostError>;
}

/// Declarative snapshot of the settings panel; the host (or the designer
/// binary) renders it however it likes.
#[derive(Clone, Debug, PartialEq)]
pub struct PanelSpec {
    pub title: String,
    pub controls: Vec<PanelControl>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum PanelControl {
    Toggle { label: String, value: bool },
    ColorField { label: String, value: String },
    ModeSwitch { label: String, value: Mode },
    Slider { label: String, value: i64, min: i64, max: i64 },
    TextArea { label: String, value: String },
    Button { label: String },
}

impl PanelSpec {
    /// Panel snapshot for the current settings.
    pub fn for_settings(settings: &Settings) -> Self {
        Self {
            title: "Custom Theme".to_string(),
            controls: vec![
                PanelControl::Toggle {
                    label: "Enabled".to_string(),
                    value: settings.enabled,
                },
                PanelControl::ColorField {
                    label: "Base color".to_string(),
                    value: settings.base_color.clone(),
                },
                PanelControl::ModeSwitch {
                    label: "Mode".to_string(),
                    value: settings.mode,
                },
                PanelControl::Slider {
                    label: "Intensity".to_string(),
                    value: settings.intensity,
                    min: 0,
                    max: 100,
                },
                PanelControl::TextArea {
                    label: "Custom CSS".to_string(),
                    value: settings.custom_css.clone(),
                },
                PanelControl::Button {
                    label: "Reset to defaults".to_string(),
                },
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn memory_slot_updates_in_place() {
        let mut slot = MemorySlot::new();
        slot.apply("a {}").unwrap();
        slot.apply("b {}").unwrap();
        assert_eq!(slot.contents(), Some("b {}"));
        assert_eq!(slot.applies, 2);

        slot.clear().unwrap();
        assert_eq!(slot.contents(), None);
    }

    #[test]
    fn file_slot_creates_then_replaces_then_removes() {
        let dir = tempfile::tempdir().unwrap();
        let mut slot = FileSlot::new(dir.path().join("styles").join("theme.css"));

        slot.apply("a {}").unwrap();
        assert_eq!(std::fs::read_to_string(slot.path()).unwrap(), "a {}");

        slot.apply("b {}").unwrap();
        assert_eq!(std::fs::read_to_string(slot.path()).unwrap(), "b {}");

        slot.clear().unwrap();
        assert!(!slot.path().exists());
        // Clearing an empty slot stays a no-op.
        slot.clear().unwrap();
    }

    #[test]
    fn panel_spec_reflects_settings() {
        let mut settings = Settings::default();
        settings.intensity = 42;
        let panel = PanelSpec::for_settings(&settings);
        assert_eq!(panel.title, "Custom Theme");
        assert!(panel.controls.iter().any(|c| matches!(
            c,
            PanelControl::Slider { value: 42, min: 0, max: 100, .. }
        )));
    }
}
