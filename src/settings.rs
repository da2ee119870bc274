//! The persisted settings document: defaults, explicit field-by-field merge,
//! and fire-and-forget persistence.
//!
//! Merge semantics are the forward-compatibility mechanism: any persisted
//! document, however old or damaged, becomes a valid `Settings` because every
//! absent or wrong-typed field keeps its default. New fields therefore need
//! no migration step, only a default.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::palette::{compute_palette, Mode, Palette, DEFAULT_BASE_COLOR};
use crate::store::SettingsStore;

/// Current settings-document revision. Documents are upgraded to this on the
/// next save; older revisions simply flow through the default-fill merge.
pub const SETTINGS_VERSION: u32 = 1;

const DEFAULT_INTENSITY: i64 = 100;

/// Field names follow the original persisted document so existing documents
/// merge cleanly.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    pub version: u32,
    pub enabled: bool,
    #[serde(rename = "baseColor")]
    pub base_color: String,
    pub mode: Mode,
    pub intensity: i64,
    #[serde(rename = "customCSS")]
    pub custom_css: String,
    /// Cached derivation of `(base_color, mode, intensity)`; recomputed and
    /// discarded on any change to those three. Never the source of truth.
    pub colors: Palette,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            version: SETTINGS_VERSION,
            enabled: true,
            base_color: DEFAULT_BASE_COLOR.to_string(),
            mode: Mode::Dark,
            intensity: DEFAULT_INTENSITY,
            custom_css: String::new(),
            colors: compute_palette(DEFAULT_BASE_COLOR, Mode::Dark, DEFAULT_INTENSITY),
        }
    }
}

impl Settings {
    /// Load and merge the persisted document over defaults. Read or parse
    /// failure degrades to defaults with a warning; it never propagates.
    pub fn load(store: &dyn SettingsStore) -> Settings {
        let doc = match store.read() {
            Ok(Some(doc)) => doc,
            Ok(None) => return Settings::default(),
            Err(e) => {
                warn!(error = %e, "settings read failed; using defaults");
                return Settings::default();
            }
        };
        match serde_json::from_str::<Value>(&doc) {
            Ok(value) => Settings::from_document(&value),
            Err(e) => {
                warn!(error = %e, "settings document unparseable; using defaults");
                Settings::default()
            }
        }
    }

    /// Explicit field-by-field merge over defaults. Shallow at the top
    /// level, one level deeper for `colors`, and per step for
    /// `colors.scale`.
    pub fn from_document(doc: &Value) -> Settings {
        let mut settings = Settings::default();
        let Some(obj) = doc.as_object() else {
            return settings;
        };

        if let Some(version) = obj.get("version").and_then(Value::as_u64) {
            if version != u64::from(SETTINGS_VERSION) {
                debug!(version, "merging settings document from another revision");
            }
        }
        merge_bool(obj, "enabled", &mut settings.enabled);
        merge_string(obj, "baseColor", &mut settings.base_color);
        if let Some(mode) = obj.get("mode").and_then(Value::as_str) {
            match mode {
                "dark" => settings.mode = Mode::Dark,
                "light" => settings.mode = Mode::Light,
                other => debug!(mode = other, "unknown mode kept at default"),
            }
        }
        if let Some(intensity) = obj.get("intensity").and_then(Value::as_i64) {
            settings.intensity = intensity.clamp(0, 100);
        }
        merge_string(obj, "customCSS", &mut settings.custom_css);

        if let Some(colors) = obj.get("colors").and_then(Value::as_object) {
            merge_string(colors, "primary", &mut settings.colors.primary);
            merge_string(colors, "secondary", &mut settings.colors.secondary);
            merge_string(colors, "tertiary", &mut settings.colors.tertiary);
            merge_string(colors, "accent", &mut settings.colors.accent);
            merge_string(colors, "background", &mut settings.colors.background);
            merge_string(colors, "text", &mut settings.colors.text);
            if let Some(scale) = colors.get("scale").and_then(Value::as_object) {
                let steps = [
                    ("50", &mut settings.colors.scale.s50),
                    ("100", &mut settings.colors.scale.s100),
                    ("200", &mut settings.colors.scale.s200),
                    ("300", &mut settings.colors.scale.s300),
                    ("400", &mut settings.colors.scale.s400),
                    ("500", &mut settings.colors.scale.s500),
                    ("600", &mut settings.colors.scale.s600),
                    ("700", &mut settings.colors.scale.s700),
                    ("800", &mut settings.colors.scale.s800),
                    ("900", &mut settings.colors.scale.s900),
                ];
                for (key, slot) in steps {
                    merge_string(scale, key, slot);
                }
            }
        }

        settings
    }

    /// Persist, fire-and-forget: failures are logged and swallowed so a dead
    /// store can never block live theme application. The in-memory settings
    /// stay authoritative for the session.
    pub fn persist(&self, store: &mut dyn SettingsStore) {
        let document = match serde_json::to_string_pretty(self) {
            Ok(document) => document,
            Err(e) => {
                warn!(error = %e, "settings serialization failed; skipping save");
                return;
            }
        };
        match store.write(&document) {
            Ok(()) => debug!("settings persisted"),
            Err(e) => warn!(error = %e, "settings write failed; in-memory state kept"),
        }
    }

    /// Recompute the cached palette from the three source knobs.
    pub fn recompute_colors(&mut self) {
        self.colors = compute_palette(&self.base_color, self.mode, self.intensity);
    }

    /// Reset to the default base color and custom CSS. Mode, intensity and
    /// the enabled flag survive a reset.
    pub fn reset(&mut self) {
        self.base_color = DEFAULT_BASE_COLOR.to_string();
        self.custom_css.clear();
        self.recompute_colors();
    }

    /// Background opacity derived from intensity.
    pub fn opacity(&self) -> f32 {
        (self.intensity.clamp(0, 100) as f32 / 100.0).clamp(0.0, 1.0)
    }
}

fn merge_bool(obj: &Map<String, Value>, key: &str, slot: &mut bool) {
    if let Some(v) = obj.get(key).and_then(Value::as_bool) {
        *slot = v;
    }
}

fn merge_string(obj: &Map<String, Value>, key: &str, slot: &mut String) {
    if let Some(v) = obj.get(key).and_then(Value::as_str) {
        *slot = v.to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn load_without_document_yields_defaults() {
        let store = MemoryStore::new();
        assert_eq!(Settings::load(&store), Settings::default());
    }

    #[test]
    fn load_with_garbage_document_yields_defaults() {
        let store = MemoryStore::with_document("{not json");
        assert_eq!(Settings::load(&store), Settings::default());

        let store = MemoryStore::with_document("[1, 2, 3]");
        assert_eq!(Settings::load(&store), Settings::default());
    }

    #[test]
    fn merge_fills_missing_accent_without_discarding_present_fields() {
        let doc = json!({
            "enabled": false,
            "baseColor": "#F04747",
            "colors": {
                "primary": "#F04747",
                "text": "#ABCDEF"
            }
        });
        let settings = Settings::from_document(&doc);
        let defaults = Settings::default();

        assert!(!settings.enabled);
        assert_eq!(settings.base_color, "#F04747");
        assert_eq!(settings.colors.primary, "#F04747");
        assert_eq!(settings.colors.text, "#ABCDEF");
        assert_eq!(settings.colors.accent, defaults.colors.accent);
        assert_eq!(settings.colors.scale, defaults.colors.scale);
    }

    #[test]
    fn merge_per_scale_step() {
        let doc = json!({
            "colors": { "scale": { "500": "#101010" } }
        });
        let settings = Settings::from_document(&doc);
        let defaults = Settings::default();
        assert_eq!(settings.colors.scale.s500, "#101010");
        assert_eq!(settings.colors.scale.s50, defaults.colors.scale.s50);
        assert_eq!(settings.colors.scale.s900, defaults.colors.scale.s900);
    }

    #[test]
    fn wrong_typed_fields_keep_defaults() {
        let doc = json!({
            "enabled": "yes",
            "baseColor": 5865,
            "mode": "solarized",
            "intensity": "loud",
            "customCSS": false
        });
        assert_eq!(Settings::from_document(&doc), Settings::default());
    }

    #[test]
    fn intensity_is_clamped_on_merge() {
        let doc = json!({ "intensity": 150 });
        assert_eq!(Settings::from_document(&doc).intensity, 100);
        let doc = json!({ "intensity": -3 });
        assert_eq!(Settings::from_document(&doc).intensity, 0);
    }

    #[test]
    fn legacy_document_without_version_upgrades() {
        let doc = json!({ "mode": "light" });
        let settings = Settings::from_document(&doc);
        assert_eq!(settings.version, SETTINGS_VERSION);
        assert_eq!(settings.mode, Mode::Light);
    }

    #[test]
    fn persist_then_load_round_trips() {
        let mut store = MemoryStore::new();
        let mut settings = Settings::default();
        settings.base_color = "#00FF7F".to_string();
        settings.intensity = 40;
        settings.recompute_colors();
        settings.persist(&mut store);

        assert_eq!(Settings::load(&store), settings);
    }

    #[test]
    fn persist_failure_is_swallowed() {
        let mut store = MemoryStore::failing();
        Settings::default().persist(&mut store);
        assert!(store.document().is_none());
    }

    #[test]
    fn reset_preserves_mode_intensity_enabled() {
        let mut settings = Settings::default();
        settings.enabled = false;
        settings.mode = Mode::Light;
        settings.intensity = 30;
        settings.base_color = "#112233".to_string();
        settings.custom_css = "body {}".to_string();
        settings.recompute_colors();

        settings.reset();
        assert_eq!(settings.base_color, DEFAULT_BASE_COLOR);
        assert_eq!(settings.custom_css, "");
        assert!(!settings.enabled);
        assert_eq!(settings.mode, Mode::Light);
        assert_eq!(settings.intensity, 30);
        assert_eq!(
            settings.colors,
            compute_palette(DEFAULT_BASE_COLOR, Mode::Light, 30)
        );
    }

    #[test]
    fn opacity_tracks_intensity() {
        let mut settings = Settings::default();
        settings.intensity = 74;
        assert!((settings.opacity() - 0.74).abs() < f32::EPSILON);
    }

    #[test]
    fn wire_field_names_match_original_document() {
        let settings = Settings::default();
        let doc: Value = serde_json::from_str(&serde_json::to_string(&settings).unwrap()).unwrap();
        let obj = doc.as_object().unwrap();
        assert!(obj.contains_key("baseColor"));
        assert!(obj.contains_key("customCSS"));
        assert!(doc["colors"]["scale"].get("50").is_some());
        assert_eq!(doc["mode"], "dark");
    }
}
