//! Palette derivation: one base color plus mode and intensity become six
//! named colors and a ten-step tonal scale.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::color::{Hsl, Rgb};

/// Fallback base color when the input fails to parse (the host's brand
/// blurple). Malformed input degrades to this rather than erroring.
pub const DEFAULT_BASE_COLOR: &str = "#5865F2";

/// The ten scale ordinals, lightest to darkest.
pub const SCALE_STEPS: [u16; 10] = [50, 100, 200, 300, 400, 500, 600, 700, 800, 900];

/// Lightness offset from the base per scale step, same order as
/// [`SCALE_STEPS`]. The ramp darkens monotonically and saturates at the
/// extremes once clamped to [0, 1].
const LIGHTNESS_OFFSETS: [f32; 10] = [
    0.50, 0.36, 0.20, 0.08, -0.02, -0.10, -0.20, -0.34, -0.48, -0.62,
];

/// Theme variant. Selects the fixed background/text anchors and which scale
/// slots back the secondary/tertiary surfaces.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Dark,
    Light,
}

impl Mode {
    pub fn toggled(self) -> Self {
        match self {
            Mode::Dark => Mode::Light,
            Mode::Light => Mode::Dark,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Mode::Dark => "dark",
            Mode::Light => "light",
        }
    }
}

/// Ten-step tonal ramp keyed 50 (lightest) to 900 (darkest). Serialized as a
/// JSON object with the ordinal keys spelled as strings, matching the
/// persisted document shape.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToneScale {
    #[serde(rename = "50")]
    pub s50: String,
    #[serde(rename = "100")]
    pub s100: String,
    #[serde(rename = "200")]
    pub s200: String,
    #[serde(rename = "300")]
    pub s300: String,
    #[serde(rename = "400")]
    pub s400: String,
    #[serde(rename = "500")]
    pub s500: String,
    #[serde(rename = "600")]
    pub s600: String,
    #[serde(rename = "700")]
    pub s700: String,
    #[serde(rename = "800")]
    pub s800: String,
    #[serde(rename = "900")]
    pub s900: String,
}

impl ToneScale {
    /// Color at a scale ordinal; `None` for ordinals outside the ten steps.
    pub fn get(&self, step: u16) -> Option<&str> {
        let hex = match step {
            50 => &self.s50,
            100 => &self.s100,
            200 => &self.s200,
            300 => &self.s300,
            400 => &self.s400,
            500 => &self.s500,
            600 => &self.s600,
            700 => &self.s700,
            800 => &self.s800,
            900 => &self.s900,
            _ => return None,
        };
        Some(hex.as_str())
    }

    /// All ten steps in ramp order, lightest first.
    pub fn steps(&self) -> [(u16, &str); 10] {
        [
            (50, self.s50.as_str()),
            (100, self.s100.as_str()),
            (200, self.s200.as_str()),
            (300, self.s300.as_str()),
            (400, self.s400.as_str()),
            (500, self.s500.as_str()),
            (600, self.s600.as_str()),
            (700, self.s700.as_str()),
            (800, self.s800.as_str()),
            (900, self.s900.as_str()),
        ]
    }
}

/// Derived color set. Cached in the settings document for render convenience
/// but always recomputable from `(base_color, mode, intensity)` — never the
/// source of truth.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    pub primary: String,
    pub secondary: String,
    pub tertiary: String,
    pub accent: String,
    pub background: String,
    pub text: String,
    pub scale: ToneScale,
}

/// Tonal-spread knob derived from intensity: `intensity/100`, floored at
/// 0.05. Published for tuning but not yet consumed by the lightness map.
pub fn intensity_factor(intensity: i64) -> f32 {
    (intensity.clamp(0, 100) as f32 / 100.0).max(0.05)
}

/// Derive the full palette. Never fails: a malformed `base_color` falls back
/// to [`DEFAULT_BASE_COLOR`], out-of-range `intensity` is clamped to
/// [0, 100].
pub fn compute_palette(base_color: &str, mode: Mode, intensity: i64) -> Palette {
    let base = Rgb::parse(base_color).unwrap_or_else(|| {
        debug!(input = base_color, fallback = DEFAULT_BASE_COLOR, "unparseable base color");
        // DEFAULT_BASE_COLOR is a valid literal; the parse cannot miss.
        Rgb::parse(DEFAULT_BASE_COLOR).unwrap_or(Rgb::new(0x58, 0x65, 0xF2))
    });
    let hsl = base.to_hsl();

    let intensity = intensity.clamp(0, 100);
    // Computed for the published knob; the lightness map does not consume it.
    let _spread = intensity_factor(intensity);

    let tone = |offset: f32| -> String {
        let l = (hsl.l + offset).clamp(0.0, 1.0);
        // Desaturate toward the extremes so near-white/near-black tints do
        // not keep full chroma.
        let s = hsl.s * (1.0 - (0.5 - l).abs() * 0.6);
        Hsl::new(hsl.h, s, l).to_rgb().to_hex()
    };
    let scale = ToneScale {
        s50: tone(LIGHTNESS_OFFSETS[0]),
        s100: tone(LIGHTNESS_OFFSETS[1]),
        s200: tone(LIGHTNESS_OFFSETS[2]),
        s300: tone(LIGHTNESS_OFFSETS[3]),
        s400: tone(LIGHTNESS_OFFSETS[4]),
        s500: tone(LIGHTNESS_OFFSETS[5]),
        s600: tone(LIGHTNESS_OFFSETS[6]),
        s700: tone(LIGHTNESS_OFFSETS[7]),
        s800: tone(LIGHTNESS_OFFSETS[8]),
        s900: tone(LIGHTNESS_OFFSETS[9]),
    };

    // Fixed anchors per mode keep text/background contrast independent of
    // the base hue; accent rotation heuristics are preserved as shipped.
    let (background, text, secondary, tertiary, accent) = match mode {
        Mode::Light => (
            "#FFFFFF".to_string(),
            "#23272A".to_string(),
            scale.s300.clone(),
            scale.s100.clone(),
            hsl.rotate_hue(20.0).saturate(0.08).lighten(0.04).to_rgb().to_hex(),
        ),
        Mode::Dark => (
            "#0f1115".to_string(),
            "#E6E6E8".to_string(),
            scale.s700.clone(),
            scale.s800.clone(),
            hsl.rotate_hue(200.0).saturate(0.12).lighten(0.06).to_rgb().to_hex(),
        ),
    };

    Palette {
        primary: base.to_hex(),
        secondary,
        tertiary,
        accent,
        background,
        text,
        scale,
    }
}
