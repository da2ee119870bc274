//! User actions for the designer.

#[derive(Clone, Debug)]
pub enum Action {
    Quit,
    Char(char),
    Backspace,
    FocusNext,
    Commit,

    IntensityDown,
    IntensityUp,
    ToggleMode,
    ToggleEnabled,
    Reset,

    PickerShow,
    PickerHide,
    PickerUp,
    PickerDown,
    PickerSelect,
}
