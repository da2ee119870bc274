//! Designer container: owns the theme engine and routes actions into it.

use anyhow::Result;

use crate::actions::Action;
use crate::picker::update_picker_filter;
use crate::state::{DesignerState, Focus};
use tintsmith::{FileSlot, JsonFileStore, Rgb, ThemeEngine};

const INTENSITY_STEP: i64 = 5;

pub struct App {
    pub state: DesignerState,
    pub engine: ThemeEngine<JsonFileStore, FileSlot>,
    /// Shown in the header so the user knows where the CSS lands.
    pub slot_display: String,
    pub should_quit: bool,
    /// For future tick-driven effects (incremented each loop).
    pub tick: usize,
}

impl App {
    /// Open the default store and slot, start the engine, and seed the edit
    /// buffers from the loaded settings.
    pub fn bootstrap() -> Result<Self> {
        let store = JsonFileStore::default_location()?;
        let slot = FileSlot::default_location()?;
        let slot_display = slot.path().display().to_string();

        let mut engine = ThemeEngine::new(store, slot);
        engine.start();

        let mut state = DesignerState {
            color_buffer: engine.settings().base_color.clone(),
            css_buffer: engine.settings().custom_css.clone(),
            note: "Loaded".to_string(),
            ..Default::default()
        };
        update_picker_filter(&mut state.picker);

        Ok(Self {
            state,
            engine,
            slot_display,
            should_quit: false,
            tick: 0,
        })
    }

    pub fn dispatch(&mut self, action: Action) {
        match action {
            Action::Quit => self.should_quit = true,

            Action::Char(c) => {
                if self.state.picker.visible {
                    self.state.picker.query.push(c);
                    update_picker_filter(&mut self.state.picker);
                } else {
                    match self.state.focus {
                        Focus::BaseColor => self.state.color_buffer.push(c),
                        Focus::CustomCss => self.state.css_buffer.push(c),
                    }
                }
            }
            Action::Backspace => {
                if self.state.picker.visible {
                    self.state.picker.query.pop();
                    update_picker_filter(&mut self.state.picker);
                } else {
                    match self.state.focus {
                        Focus::BaseColor => self.state.color_buffer.pop(),
                        Focus::CustomCss => self.state.css_buffer.pop(),
                    };
                }
            }
            Action::FocusNext => self.state.focus = self.state.focus.next(),
            Action::Commit => self.commit_focused_field(),

            Action::IntensityDown => self.nudge_intensity(-INTENSITY_STEP),
            Action::IntensityUp => self.nudge_intensity(INTENSITY_STEP),
            Action::ToggleMode => {
                let mode = self.engine.settings().mode.toggled();
                self.engine.set_mode(mode);
                self.state.note = format!("Mode: {}", mode.label());
            }
            Action::ToggleEnabled => {
                let enabled = !self.engine.settings().enabled;
                self.engine.set_enabled(enabled);
                self.state.note = if enabled {
                    "Theme enabled".to_string()
                } else {
                    "Theme disabled, slot cleared".to_string()
                };
            }
            Action::Reset => {
                self.engine.reset();
                self.refresh_buffers();
                self.state.note = "Reset base color and custom CSS".to_string();
            }

            Action::PickerShow => {
                self.state.picker.visible = true;
                self.state.picker.query.clear();
                update_picker_filter(&mut self.state.picker);
            }
            Action::PickerHide => self.state.picker.visible = false,
            Action::PickerUp => {
                let len = self.state.picker.filtered.len();
                if len > 0 {
                    self.state.picker.selected_index =
                        (self.state.picker.selected_index + len - 1) % len;
                }
            }
            Action::PickerDown => {
                let len = self.state.picker.filtered.len();
                if len > 0 {
                    self.state.picker.selected_index =
                        (self.state.picker.selected_index + 1) % len;
                }
            }
            Action::PickerSelect => {
                if let Some(preset) = self.state.picker.selected_preset() {
                    self.engine.set_base_color(preset.base_color);
                    self.engine.set_mode(preset.mode);
                    self.refresh_buffers();
                    self.state.note = format!("Preset: {}", preset.name);
                }
                self.state.picker.visible = false;
            }
        }
    }

    fn commit_focused_field(&mut self) {
        match self.state.focus {
            Focus::BaseColor => {
                let valid = Rgb::parse(self.state.color_buffer.trim()).is_some();
                self.engine.set_base_color(&self.state.color_buffer);
                // The engine normalized (or defaulted) the value; mirror it.
                self.state.color_buffer = self.engine.settings().base_color.clone();
                self.state.note = if valid {
                    "Base color applied".to_string()
                } else {
                    "Invalid color, fell back to default".to_string()
                };
            }
            Focus::CustomCss => {
                self.engine.set_custom_css(self.state.css_buffer.clone());
                self.state.note = "Custom CSS applied".to_string();
            }
        }
    }

    fn nudge_intensity(&mut self, delta: i64) {
        let intensity = (self.engine.settings().intensity + delta).clamp(0, 100);
        self.engine.set_intensity(intensity);
        self.state.note = format!("Intensity: {intensity}%");
    }

    fn refresh_buffers(&mut self) {
        self.state.color_buffer = self.engine.settings().base_color.clone();
        self.state.css_buffer = self.engine.settings().custom_css.clone();
    }
}
