//! CSS template renderer: palette in, one deterministic stylesheet out.
//!
//! The host variable names below are an external contract with the chat
//! application's theming layer; they are enumerated once here and never
//! derived. User CSS is appended verbatim as the final bytes so it wins the
//! cascade by position.

use crate::color::Rgb;
use crate::palette::{Mode, Palette};

/// Danger buttons keep the host's stock red regardless of palette.
const DANGER: &str = "#f04747";

/// Brightness shift in percent of full range, per channel, clamped to valid
/// bytes. Matches the host theme convention of deriving hover/muted tiers
/// from a named color.
fn shift(rgb: Rgb, percent: i32) -> Rgb {
    let amt = (2.55 * percent as f32).round() as i32;
    let adj = |c: u8| (c as i32 + amt).clamp(0, 255) as u8;
    Rgb::new(adj(rgb.r), adj(rgb.g), adj(rgb.b))
}

/// Render the full stylesheet. Pure and infallible: identical inputs yield
/// byte-identical output, malformed `custom_css` passes through untouched.
///
/// `opacity` (clamped to [0, 1]) applies to background-tier variables in
/// dark mode only; light mode forces full opacity since translucency over a
/// light base harms legibility.
pub fn render_css(palette: &Palette, mode: Mode, opacity: f32, custom_css: &str) -> String {
    let opacity = opacity.clamp(0.0, 1.0);
    // Palette colors are derived and always parse; black is the defensive
    // floor for hand-edited documents.
    let rgb = |hex: &str| Rgb::parse(hex).unwrap_or(Rgb::new(0, 0, 0));

    let primary = rgb(&palette.primary);
    let secondary = rgb(&palette.secondary);
    let tertiary = rgb(&palette.tertiary);
    let accent = rgb(&palette.accent);
    let background = rgb(&palette.background);
    let text = rgb(&palette.text);

    // Background tiers carry the intensity opacity in dark mode.
    let tier = |c: Rgb| match mode {
        Mode::Dark => c.to_css_rgba(opacity),
        Mode::Light => c.to_hex(),
    };

    let overrides: [(&str, String); 34] = [
        ("--background-primary", tier(background)),
        ("--background-secondary", tier(secondary)),
        ("--background-secondary-alt", tier(secondary)),
        ("--background-tertiary", tier(tertiary)),
        ("--background-accent", tier(accent)),
        ("--background-floating", tier(tertiary)),
        ("--text-normal", text.to_hex()),
        ("--text-muted", shift(text, -30).to_hex()),
        ("--header-primary", text.to_hex()),
        ("--header-secondary", shift(text, -30).to_hex()),
        ("--interactive-normal", text.to_hex()),
        ("--interactive-hover", primary.to_hex()),
        ("--interactive-active", primary.to_hex()),
        ("--interactive-muted", shift(text, -50).to_hex()),
        ("--channels-default", shift(text, -30).to_hex()),
        ("--brand-experiment", primary.to_hex()),
        ("--button-secondary-background", secondary.to_hex()),
        ("--button-secondary-background-hover", shift(secondary, 10).to_hex()),
        ("--button-secondary-background-active", shift(secondary, 20).to_hex()),
        ("--button-danger-background", DANGER.to_string()),
        ("--button-danger-background-hover", DANGER.to_string()),
        ("--button-danger-background-active", DANGER.to_string()),
        ("--scrollbar-thin-thumb", secondary.to_hex()),
        ("--scrollbar-thin-track", "transparent".to_string()),
        ("--scrollbar-auto-thumb", secondary.to_hex()),
        ("--scrollbar-auto-track", shift(background, -10).to_hex()),
        ("--channeltextarea-background", tier(shift(background, 5))),
        ("--activity-card-background", secondary.to_hex()),
        ("--deprecated-card-bg", secondary.to_hex()),
        ("--deprecated-card-editable-bg", shift(secondary, 5).to_hex()),
        ("--deprecated-text-input-bg", tier(background)),
        ("--deprecated-text-input-border", tertiary.to_hex()),
        ("--deprecated-text-input-border-hover", primary.to_hex()),
        ("--deprecated-text-input-prefix", accent.to_hex()),
    ];

    let mut out = String::with_capacity(2048);
    out.push_str("/* Generated custom theme. Regenerated wholesale on every settings change. */\n");

    out.push_str(":root {\n");
    for (step, hex) in palette.scale.steps() {
        out.push_str(&format!("    --custom-scale-{step}: {hex};\n"));
    }
    out.push_str(&format!("    --custom-primary: {};\n", palette.primary));
    out.push_str(&format!("    --custom-secondary: {};\n", palette.secondary));
    out.push_str(&format!("    --custom-tertiary: {};\n", palette.tertiary));
    out.push_str(&format!("    --custom-accent: {};\n", palette.accent));
    out.push_str(&format!("    --custom-background: {};\n", palette.background));
    out.push_str(&format!("    --custom-text: {};\n", palette.text));
    out.push_str("}\n\n");

    out.push_str(".theme-dark, .theme-light {\n");
    for (name, value) in &overrides {
        out.push_str(&format!("    {name}: {value} !important;\n"));
    }
    out.push_str("}\n");

    out.push('\n');
    out.push_str(custom_css);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::compute_palette;
    use pretty_assertions::assert_eq;

    fn palette() -> Palette {
        compute_palette("#5865F2", Mode::Dark, 74)
    }

    #[test]
    fn identical_inputs_yield_identical_bytes() {
        let p = palette();
        let a = render_css(&p, Mode::Dark, 0.74, "/* mine */");
        let b = render_css(&p, Mode::Dark, 0.74, "/* mine */");
        assert_eq!(a, b);
    }

    #[test]
    fn custom_css_is_the_verbatim_suffix() {
        let p = palette();
        let custom = ".sidebar { color: red !!; } /* not even valid css */";
        let css = render_css(&p, Mode::Dark, 1.0, custom);
        assert!(css.ends_with(custom));

        let empty = render_css(&p, Mode::Dark, 1.0, "");
        assert!(empty.ends_with('\n'));
    }

    #[test]
    fn dark_mode_backgrounds_carry_opacity() {
        let p = palette();
        let css = render_css(&p, Mode::Dark, 0.74, "");
        assert!(css.contains("--background-primary: rgba(15, 17, 21, 0.74) !important;"));
    }

    #[test]
    fn light_mode_forces_opaque_backgrounds() {
        let p = compute_palette("#5865F2", Mode::Light, 40);
        let css = render_css(&p, Mode::Light, 0.4, "");
        assert!(css.contains("--background-primary: #FFFFFF !important;"));
        assert!(!css.contains("rgba("));
    }

    #[test]
    fn opacity_is_clamped() {
        let p = palette();
        let over = render_css(&p, Mode::Dark, 3.0, "");
        let full = render_css(&p, Mode::Dark, 1.0, "");
        assert_eq!(over, full);
    }

    #[test]
    fn fixed_contract_values_survive_any_palette() {
        let css = render_css(&compute_palette("#00FF00", Mode::Light, 10), Mode::Light, 1.0, "");
        assert!(css.contains("--button-danger-background: #f04747 !important;"));
        assert!(css.contains("--scrollbar-thin-track: transparent !important;"));
    }

    #[test]
    fn scale_properties_are_all_declared() {
        let css = render_css(&palette(), Mode::Dark, 1.0, "");
        for step in crate::palette::SCALE_STEPS {
            assert!(css.contains(&format!("--custom-scale-{step}: #")), "missing step {step}");
        }
    }

    #[test]
    fn shift_clamps_at_channel_bounds() {
        assert_eq!(shift(Rgb::new(250, 10, 128), 10), Rgb::new(255, 36, 154));
        assert_eq!(shift(Rgb::new(5, 5, 5), -30), Rgb::new(0, 0, 0));
    }
}
