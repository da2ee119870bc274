//! Theme engine lifecycle: owns the settings, the store, and the style slot;
//! every mutation recomputes the palette, persists, and re-renders.

use tracing::{debug, info, warn};

use crate::color::Rgb;
use crate::css::render_css;
use crate::host::{PanelSpec, StyleSlot, ThemeHost, ThemeOption};
use crate::palette::{Mode, DEFAULT_BASE_COLOR};
use crate::settings::Settings;
use crate::store::SettingsStore;

pub struct ThemeEngine<S: SettingsStore, O: StyleSlot> {
    settings: Settings,
    store: S,
    slot: O,
}

impl<S: SettingsStore, O: StyleSlot> ThemeEngine<S, O> {
    pub fn new(store: S, slot: O) -> Self {
        Self {
            settings: Settings::default(),
            store,
            slot,
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn slot(&self) -> &O {
        &self.slot
    }

    /// Load-merge the persisted settings and apply the theme if enabled. The
    /// cached palette is trusted as loaded.
    pub fn start(&mut self) {
        self.settings = Settings::load(&self.store);
        info!(
            base_color = %self.settings.base_color,
            mode = self.settings.mode.label(),
            intensity = self.settings.intensity,
            "theme engine started"
        );
        if self.settings.enabled {
            self.apply();
        }
    }

    /// Clear the injected style; used on plugin unload.
    pub fn stop(&mut self) {
        self.clear();
    }

    /// Set the base color. Malformed input degrades to the default base
    /// color; valid input is normalized to uppercase `#RRGGBB`. No-op when
    /// the normalized value is unchanged.
    pub fn set_base_color(&mut self, raw: &str) {
        let normalized = match Rgb::parse(raw.trim()) {
            Some(rgb) => rgb.to_hex(),
            None => {
                debug!(input = raw, "unparseable base color; falling back to default");
                DEFAULT_BASE_COLOR.to_string()
            }
        };
        if normalized == self.settings.base_color {
            return;
        }
        self.settings.base_color = normalized;
        self.commit();
    }

    pub fn set_mode(&mut self, mode: Mode) {
        if mode == self.settings.mode {
            return;
        }
        self.settings.mode = mode;
        self.commit();
    }

    /// Set intensity, clamped to [0, 100].
    pub fn set_intensity(&mut self, intensity: i64) {
        let intensity = intensity.clamp(0, 100);
        if intensity == self.settings.intensity {
            return;
        }
        self.settings.intensity = intensity;
        self.commit();
    }

    /// Replace the free-form custom CSS. Never parsed or validated; it rides
    /// the end of the rendered stylesheet verbatim.
    pub fn set_custom_css(&mut self, custom_css: String) {
        if custom_css == self.settings.custom_css {
            return;
        }
        self.settings.custom_css = custom_css;
        self.settings.persist(&mut self.store);
        if self.settings.enabled {
            self.apply();
        }
    }

    /// Enable or disable the theme. Disabling clears the slot; enabling
    /// re-applies the current settings.
    pub fn set_enabled(&mut self, enabled: bool) {
        if enabled == self.settings.enabled {
            return;
        }
        self.settings.enabled = enabled;
        self.settings.persist(&mut self.store);
        if enabled {
            self.apply();
        } else {
            self.clear();
        }
    }

    /// Reset base color and custom CSS to defaults; mode, intensity and the
    /// enabled flag are untouched.
    pub fn reset(&mut self) {
        self.settings.reset();
        self.settings.persist(&mut self.store);
        if self.settings.enabled {
            self.apply();
        }
    }

    /// Offer the "Custom Theme" option to the host's theme selector. A host
    /// failure degrades to "CSS still applies, selector entry absent".
    pub fn register_with(&mut self, host: &mut dyn ThemeHost) {
        if let Err(e) = host.register_theme_option(ThemeOption::custom_theme()) {
            warn!(error = %e, "theme selector unavailable; continuing without it");
        }
    }

    /// Declarative settings panel for the current state.
    pub fn settings_panel(&self) -> PanelSpec {
        PanelSpec::for_settings(&self.settings)
    }

    /// Recompute the palette cache, persist, and re-render. The shared tail
    /// of every mutation that touches a palette source knob.
    fn commit(&mut self) {
        self.settings.recompute_colors();
        self.settings.persist(&mut self.store);
        if self.settings.enabled {
            self.apply();
        }
    }

    fn apply(&mut self) {
        let css = render_css(
            &self.settings.colors,
            self.settings.mode,
            self.settings.opacity(),
            &self.settings.custom_css,
        );
        if let Err(e) = self.slot.apply(&css) {
            warn!(error = %e, "style slot apply failed; theme not visible");
        }
    }

    fn clear(&mut self) {
        if let Err(e) = self.slot.clear() {
            warn!(error = %e, "style slot clear failed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::{HostError, MemorySlot};
    use crate::palette::compute_palette;
    use crate::store::MemoryStore;
    use pretty_assertions::assert_eq;

    fn engine() -> ThemeEngine<MemoryStore, MemorySlot> {
        let mut engine = ThemeEngine::new(MemoryStore::new(), MemorySlot::new());
        engine.start();
        engine
    }

    #[test]
    fn start_on_empty_store_applies_defaults() {
        let engine = engine();
        assert_eq!(*engine.settings(), Settings::default());
        assert_eq!(engine.slot().applies, 1);
        assert!(engine.slot().contents().is_some());
    }

    #[test]
    fn mutation_recomputes_persists_and_reapplies() {
        let mut engine = engine();
        engine.set_base_color("#f04747");

        assert_eq!(engine.settings().base_color, "#F04747");
        assert_eq!(
            engine.settings().colors,
            compute_palette("#F04747", Mode::Dark, 100)
        );
        assert_eq!(engine.slot().applies, 2);

        // The persisted document reflects the mutation.
        let settings = engine.settings().clone();
        let mut replay = ThemeEngine::new(
            MemoryStore::with_document(serde_json::to_string(&settings).unwrap()),
            MemorySlot::new(),
        );
        replay.start();
        assert_eq!(*replay.settings(), settings);
    }

    #[test]
    fn unchanged_value_is_a_no_op() {
        let mut engine = engine();
        engine.set_intensity(100);
        engine.set_mode(Mode::Dark);
        engine.set_base_color("#5865F2");
        assert_eq!(engine.slot().applies, 1);
    }

    #[test]
    fn intensity_is_clamped_before_comparison() {
        let mut engine = engine();
        // 100 is the default; 150 clamps to it and must not reapply.
        engine.set_intensity(150);
        assert_eq!(engine.slot().applies, 1);

        engine.set_intensity(-20);
        assert_eq!(engine.settings().intensity, 0);
        assert_eq!(engine.slot().applies, 2);
    }

    #[test]
    fn disable_clears_enable_reapplies() {
        let mut engine = engine();
        engine.set_enabled(false);
        assert_eq!(engine.slot().contents(), None);
        assert_eq!(engine.slot().clears, 1);

        engine.set_enabled(true);
        assert_eq!(engine.slot().applies, 2);
        assert!(engine.slot().contents().is_some());
    }

    #[test]
    fn mutations_while_disabled_do_not_touch_the_slot() {
        let mut engine = engine();
        engine.set_enabled(false);
        engine.set_base_color("#112233");
        assert_eq!(engine.slot().applies, 1);
        assert_eq!(engine.settings().base_color, "#112233");

        engine.set_enabled(true);
        let css = engine.slot().contents().unwrap();
        assert!(css.contains("--custom-primary: #112233;"));
    }

    #[test]
    fn reset_preserves_mode_and_intensity() {
        let mut engine = engine();
        engine.set_mode(Mode::Light);
        engine.set_intensity(30);
        engine.set_custom_css("p {}".to_string());
        engine.set_base_color("#112233");

        engine.reset();
        assert_eq!(engine.settings().base_color, DEFAULT_BASE_COLOR);
        assert_eq!(engine.settings().custom_css, "");
        assert_eq!(engine.settings().mode, Mode::Light);
        assert_eq!(engine.settings().intensity, 30);
    }

    #[test]
    fn malformed_base_color_degrades_to_default() {
        let mut engine = engine();
        engine.set_base_color("#112233");
        engine.set_base_color("chartreuse");
        assert_eq!(engine.settings().base_color, DEFAULT_BASE_COLOR);
    }

    #[test]
    fn custom_css_rides_the_rendered_output() {
        let mut engine = engine();
        engine.set_custom_css(".x { color: red }".to_string());
        assert!(engine.slot().contents().unwrap().ends_with(".x { color: red }"));
    }

    #[test]
    fn failing_store_never_blocks_application() {
        let mut engine = ThemeEngine::new(MemoryStore::failing(), MemorySlot::new());
        engine.start();
        engine.set_base_color("#F04747");
        assert_eq!(engine.settings().base_color, "#F04747");
        assert_eq!(engine.slot().applies, 2);
    }

    #[test]
    fn host_registration_failure_degrades() {
        struct DeadHost;
        impl ThemeHost for DeadHost {
            fn register_theme_option(&mut self, _: ThemeOption) -> Result<(), HostError> {
                Err(HostError::Unavailable("selector moved".to_string()))
            }
        }
        let mut engine = engine();
        engine.register_with(&mut DeadHost);
        // Theme output is untouched by the failed registration.
        assert!(engine.slot().contents().is_some());
    }

    #[test]
    fn working_host_receives_the_custom_option() {
        #[derive(Default)]
        struct RecordingHost(Vec<ThemeOption>);
        impl ThemeHost for RecordingHost {
            fn register_theme_option(&mut self, option: ThemeOption) -> Result<(), HostError> {
                self.0.push(option);
                Ok(())
            }
        }
        let mut engine = engine();
        let mut host = RecordingHost::default();
        engine.register_with(&mut host);
        assert_eq!(host.0, vec![ThemeOption::custom_theme()]);
    }

    #[test]
    fn stop_empties_the_slot() {
        let mut engine = engine();
        engine.stop();
        assert_eq!(engine.slot().contents(), None);
    }
}
