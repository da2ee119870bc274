//! Color math: `#RRGGBB` parsing/formatting and RGB↔HSL conversion.

/// 24-bit RGB color. Canonical text form is `#RRGGBB`; alpha is applied
/// only at render time and never stored.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Hue in degrees [0, 360), saturation and lightness in [0, 1].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsl {
    pub h: f32,
    pub s: f32,
    pub l: f32,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a strict `#RRGGBB` string (either case). Shorthand `#RGB`,
    /// missing `#`, and anything non-hex return `None` — callers decide the
    /// fallback.
    pub fn parse(s: &str) -> Option<Rgb> {
        let hex = s.strip_prefix('#')?;
        // ASCII-hex check up front also keeps the byte slices below from
        // landing inside a multi-byte character.
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
        Some(Rgb { r, g, b })
    }

    /// Uppercase `#RRGGBB`.
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// CSS `rgba(r, g, b, a)` with a fixed two-decimal alpha so identical
    /// inputs always format to identical bytes.
    pub fn to_css_rgba(self, alpha: f32) -> String {
        let a = alpha.clamp(0.0, 1.0);
        format!("rgba({}, {}, {}, {:.2})", self.r, self.g, self.b, a)
    }

    pub fn to_hsl(self) -> Hsl {
        let r = self.r as f32 / 255.0;
        let g = self.g as f32 / 255.0;
        let b = self.b as f32 / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let delta = max - min;

        let l = (max + min) / 2.0;

        // Greyscale: no chroma, hue degrades to 0 by definition.
        if delta == 0.0 {
            return Hsl { h: 0.0, s: 0.0, l };
        }

        let h = if max == r {
            60.0 * ((g - b) / delta).rem_euclid(6.0)
        } else if max == g {
            60.0 * ((b - r) / delta + 2.0)
        } else {
            60.0 * ((r - g) / delta + 4.0)
        };
        let s = delta / (1.0 - (2.0 * l - 1.0).abs());

        Hsl::new(h, s, l)
    }
}

impl Hsl {
    /// Normalizing constructor: hue wrapped into [0, 360), saturation and
    /// lightness clamped into [0, 1].
    pub fn new(h: f32, s: f32, l: f32) -> Self {
        Self {
            h: h.rem_euclid(360.0),
            s: s.clamp(0.0, 1.0),
            l: l.clamp(0.0, 1.0),
        }
    }

    pub fn to_rgb(self) -> Rgb {
        let c = (1.0 - (2.0 * self.l - 1.0).abs()) * self.s;
        let x = c * (1.0 - ((self.h / 60.0) % 2.0 - 1.0).abs());
        let m = self.l - c / 2.0;

        let (r, g, b) = if self.h < 60.0 {
            (c, x, 0.0)
        } else if self.h < 120.0 {
            (x, c, 0.0)
        } else if self.h < 180.0 {
            (0.0, c, x)
        } else if self.h < 240.0 {
            (0.0, x, c)
        } else if self.h < 300.0 {
            (x, 0.0, c)
        } else {
            (c, 0.0, x)
        };

        Rgb {
            r: channel(r + m),
            g: channel(g + m),
            b: channel(b + m),
        }
    }

    pub fn with_lightness(self, l: f32) -> Self {
        Self::new(self.h, self.s, l)
    }

    pub fn with_saturation(self, s: f32) -> Self {
        Self::new(self.h, s, self.l)
    }

    pub fn rotate_hue(self, degrees: f32) -> Self {
        Self::new(self.h + degrees, self.s, self.l)
    }

    pub fn saturate(self, amount: f32) -> Self {
        Self::new(self.h, self.s + amount, self.l)
    }

    pub fn lighten(self, amount: f32) -> Self {
        Self::new(self.h, self.s, self.l + amount)
    }
}

/// Unit channel to byte, re-clamped before formatting so float noise can
/// never escape the valid hex range.
fn channel(v: f32) -> u8 {
    (v * 255.0).round().clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parse_accepts_both_cases() {
        assert_eq!(Rgb::parse("#5865F2"), Some(Rgb::new(0x58, 0x65, 0xF2)));
        assert_eq!(Rgb::parse("#5865f2"), Some(Rgb::new(0x58, 0x65, 0xF2)));
    }

    #[test]
    fn parse_rejects_malformed_input() {
        assert_eq!(Rgb::parse("5865F2"), None);
        assert_eq!(Rgb::parse("#F2A"), None);
        assert_eq!(Rgb::parse("#12345"), None);
        assert_eq!(Rgb::parse("#1234567"), None);
        assert_eq!(Rgb::parse("#GGHHII"), None);
        assert_eq!(Rgb::parse(""), None);
        assert_eq!(Rgb::parse("blurple"), None);
        // Six bytes but not six ASCII hex digits.
        assert_eq!(Rgb::parse("#a££b"), None);
    }

    #[test]
    fn to_hex_is_uppercase() {
        assert_eq!(Rgb::new(0x58, 0x65, 0xF2).to_hex(), "#5865F2");
        assert_eq!(Rgb::new(0, 0, 0).to_hex(), "#000000");
        assert_eq!(Rgb::new(255, 255, 255).to_hex(), "#FFFFFF");
    }

    #[test]
    fn hex_round_trip_preserves_bytes() {
        for &(r, g, b) in &[(0, 0, 0), (255, 255, 255), (0x58, 0x65, 0xF2), (1, 2, 3)] {
            let rgb = Rgb::new(r, g, b);
            assert_eq!(Rgb::parse(&rgb.to_hex()), Some(rgb));
        }
    }

    #[test]
    fn greyscale_degrades_to_zero_hue() {
        for v in [0u8, 37, 128, 200, 255] {
            let hsl = Rgb::new(v, v, v).to_hsl();
            assert_eq!(hsl.h, 0.0);
            assert_eq!(hsl.s, 0.0);
        }
    }

    #[test]
    fn hsl_round_trip_is_close() {
        // Conversion goes through floats; allow one unit of rounding per
        // channel.
        for &(r, g, b) in &[
            (0x58, 0x65, 0xF2),
            (0xF0, 0x47, 0x47),
            (0x00, 0xFF, 0x00),
            (0x12, 0x34, 0x56),
        ] {
            let orig = Rgb::new(r, g, b);
            let back = orig.to_hsl().to_rgb();
            assert!((orig.r as i16 - back.r as i16).abs() <= 1, "{orig:?} vs {back:?}");
            assert!((orig.g as i16 - back.g as i16).abs() <= 1, "{orig:?} vs {back:?}");
            assert!((orig.b as i16 - back.b as i16).abs() <= 1, "{orig:?} vs {back:?}");
        }
    }

    #[test]
    fn hsl_constructor_normalizes() {
        let hsl = Hsl::new(380.0, 1.4, -0.2);
        assert_eq!(hsl.h, 20.0);
        assert_eq!(hsl.s, 1.0);
        assert_eq!(hsl.l, 0.0);

        let wrapped = Hsl::new(200.0, 0.5, 0.5).rotate_hue(200.0);
        assert_eq!(wrapped.h, 40.0);
    }

    #[test]
    fn extreme_lightness_clamps_to_pure_tones() {
        let white = Hsl::new(227.0, 0.85, 1.0).to_rgb();
        assert_eq!(white, Rgb::new(255, 255, 255));
        let black = Hsl::new(227.0, 0.85, 0.0).to_rgb();
        assert_eq!(black, Rgb::new(0, 0, 0));
    }

    #[test]
    fn css_rgba_formats_fixed_precision() {
        assert_eq!(
            Rgb::new(15, 17, 21).to_css_rgba(0.74),
            "rgba(15, 17, 21, 0.74)"
        );
        assert_eq!(Rgb::new(0, 0, 0).to_css_rgba(2.0), "rgba(0, 0, 0, 1.00)");
        assert_eq!(Rgb::new(0, 0, 0).to_css_rgba(-1.0), "rgba(0, 0, 0, 0.00)");
    }
}
