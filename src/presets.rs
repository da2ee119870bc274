//! Named base-color presets offered by the designer's picker.

use crate::palette::Mode;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Preset {
    pub name: &'static str,
    pub description: &'static str,
    pub base_color: &'static str,
    pub mode: Mode,
}

const PRESETS: &[Preset] = &[
    Preset {
        name: "Blurple",
        description: "the stock brand color on a dark base",
        base_color: "#5865F2",
        mode: Mode::Dark,
    },
    Preset {
        name: "Crimson",
        description: "deep red, dark base",
        base_color: "#D83C3E",
        mode: Mode::Dark,
    },
    Preset {
        name: "Forest",
        description: "muted green, dark base",
        base_color: "#3BA55C",
        mode: Mode::Dark,
    },
    Preset {
        name: "Ocean",
        description: "teal blue, dark base",
        base_color: "#1E90A6",
        mode: Mode::Dark,
    },
    Preset {
        name: "Amber",
        description: "warm orange, dark base",
        base_color: "#E8A33D",
        mode: Mode::Dark,
    },
    Preset {
        name: "Orchid",
        description: "soft violet, dark base",
        base_color: "#9B59B6",
        mode: Mode::Dark,
    },
    Preset {
        name: "Slate",
        description: "neutral grey, dark base",
        base_color: "#747F8D",
        mode: Mode::Dark,
    },
    Preset {
        name: "Daylight",
        description: "the stock brand color on a light base",
        base_color: "#5865F2",
        mode: Mode::Light,
    },
    Preset {
        name: "Mint",
        description: "fresh green, light base",
        base_color: "#2EB886",
        mode: Mode::Light,
    },
    Preset {
        name: "Rosewater",
        description: "dusty pink, light base",
        base_color: "#D98C9E",
        mode: Mode::Light,
    },
];

/// The built-in preset catalog, in display order.
pub fn presets() -> &'static [Preset] {
    PRESETS
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgb;

    #[test]
    fn every_preset_color_parses() {
        for preset in presets() {
            assert!(
                Rgb::parse(preset.base_color).is_some(),
                "{} has a bad color",
                preset.name
            );
        }
    }

    #[test]
    fn preset_names_are_unique() {
        let mut names: Vec<_> = presets().iter().map(|p| p.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), presets().len());
    }
}
