//! Designer state: field focus, edit buffers, preset picker, status note.

use tintsmith::{presets, Preset};

/// Which text field receives typed characters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Focus {
    #[default]
    BaseColor,
    CustomCss,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Focus::BaseColor => Focus::CustomCss,
            Focus::CustomCss => Focus::BaseColor,
        }
    }
}

/// Preset picker overlay: query, fuzzy-filtered indices, selection.
#[derive(Clone, Debug, Default)]
pub struct PickerState {
    pub visible: bool,
    pub query: String,
    /// Indices into [`presets`] matching the current query.
    pub filtered: Vec<usize>,
    pub selected_index: usize,
}

impl PickerState {
    pub fn selected_preset(&self) -> Option<&'static Preset> {
        self.filtered
            .get(self.selected_index)
            .and_then(|&i| presets().get(i))
    }
}

/// All designer-local state. The theme settings themselves live in the
/// engine; these are only the edit surfaces around them.
#[derive(Clone, Debug, Default)]
pub struct DesignerState {
    pub focus: Focus,
    /// Base-color field buffer; committed with Enter.
    pub color_buffer: String,
    /// Custom-CSS field buffer; committed with Enter.
    pub css_buffer: String,
    pub picker: PickerState,
    /// One-line feedback shown in the status bar.
    pub note: String,
}
