//! CSS color parsing and the caption contrast rule.

use ratatui::style::Color;

/// Background used when AniList has no dominant color for a cover.
pub const FALLBACK_BACKGROUND: &str = "black";

/// Near-white text. Softer than `#ffffff` on dark captions.
pub const LIGHT_TEXT: &str = "#fafafa";
/// Near-black text. Softer than `#000000` on light captions.
pub const DARK_TEXT: &str = "#0a0a0a";

const LIGHT_RGB: Rgb = Rgb::new(0xfa, 0xfa, 0xfa);
const DARK_RGB: Rgb = Rgb::new(0x0a, 0x0a, 0x0a);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rgb`, `#rrggbb`, `black` or `white` (case-insensitive).
    pub fn parse(css: &str) -> Option<Self> {
        let css = css.trim();
        if css.eq_ignore_ascii_case("black") {
            return Some(Self::new(0, 0, 0));
        }
        if css.eq_ignore_ascii_case("white") {
            return Some(Self::new(0xff, 0xff, 0xff));
        }

        let hex = css.strip_prefix('#')?;
        if !hex.is_ascii() {
            return None;
        }
        match hex.len() {
            3 => {
                let digit = |i: usize| u8::from_str_radix(&hex[i..=i], 16).ok().map(|d| d * 17);
                Some(Self::new(digit(0)?, digit(1)?, digit(2)?))
            }
            6 => {
                let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
                Some(Self::new(byte(0)?, byte(2)?, byte(4)?))
            }
            _ => None,
        }
    }

    /// WCAG 2.1 relative luminance, 0.0 (black) to 1.0 (white).
    pub fn relative_luminance(self) -> f64 {
        fn channel(value: u8) -> f64 {
            let c = value as f64 / 255.0;
            if c <= 0.04045 {
                c / 12.92
            } else {
                ((c + 0.055) / 1.055).powf(2.4)
            }
        }

        0.2126 * channel(self.r) + 0.7152 * channel(self.g) + 0.0722 * channel(self.b)
    }

    /// Contrast ratio between two colors, 1.0 to 21.0.
    pub fn contrast_ratio(self, other: Rgb) -> f64 {
        let a = self.relative_luminance();
        let b = other.relative_luminance();
        (a.max(b) + 0.05) / (a.min(b) + 0.05)
    }
}

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        Color::Rgb(rgb.r, rgb.g, rgb.b)
    }
}

/// Pick the caption text color for a CSS background.
///
/// Returns whichever of [`LIGHT_TEXT`] / [`DARK_TEXT`] contrasts more.
/// Colors that do not parse are treated like the black fallback.
pub fn contrasting_text_color(background: &str) -> &'static str {
    let bg = Rgb::parse(background).unwrap_or(Rgb::new(0, 0, 0));
    if bg.contrast_ratio(DARK_RGB) > bg.contrast_ratio(LIGHT_RGB) {
        DARK_TEXT
    } else {
        LIGHT_TEXT
    }
}

/// Terminal color for a CSS color string, if it parses.
pub fn terminal_color(css: &str) -> Option<Color> {
    Rgb::parse(css).map(Color::from)
}
