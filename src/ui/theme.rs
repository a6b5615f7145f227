use serde::Deserialize;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// An 8-bit RGBA color as handed to the host renderer.
///
/// In YAML a color is written as `[r, g, b, a]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(from = "[u8; 4]")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const GREEN: Color = Color::rgb(0, 255, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Builds a color from a packed `0xAARRGGBB` value.
    pub const fn from_argb(argb: u32) -> Self {
        Self {
            a: (argb >> 24) as u8,
            r: (argb >> 16) as u8,
            g: (argb >> 8) as u8,
            b: argb as u8,
        }
    }

    /// Same color with the alpha channel replaced by `alpha` (0.0..=1.0).
    pub fn with_alpha(self, alpha: f32) -> Self {
        Self {
            a: (alpha.clamp(0.0, 1.0) * 255.0).round() as u8,
            ..self
        }
    }
}

impl From<[u8; 4]> for Color {
    fn from(rgba: [u8; 4]) -> Self {
        Color::rgba(rgba[0], rgba[1], rgba[2], rgba[3])
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a == 255 {
            write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            write!(f, "#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }
}

#[derive(Error, Debug)]
pub enum ThemeError {
    #[error("Failed to read theme file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse theme YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Sizing and color settings for the finance charts.
///
/// Values are loaded from YAML (see `assets/themes/default.yml`). Every key is
/// optional; missing keys keep their default.
///
/// ```yaml
/// compact_breakpoint: 360.0
/// regular_chart_size: 160.0
/// regular_stroke_width: 50.0
/// income_empty_color: [50, 205, 50, 128]
/// currency_suffix: "грн"
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ChartTheme {
    pub compact_breakpoint: f32,
    pub compact_chart_size: f32,
    pub regular_chart_size: f32,
    pub compact_stroke_width: f32,
    pub regular_stroke_width: f32,
    pub compact_legend_font_size: f32,
    pub regular_legend_font_size: f32,
    pub compact_padding: f32,
    pub regular_padding: f32,
    pub shadow_extra_width: f32,
    pub shadow_color: Color,
    pub income_empty_color: Color,
    pub expense_empty_color: Color,
    pub income_header_gradient: [Color; 2],
    pub expense_header_gradient: [Color; 2],
    pub text_color: Color,
    pub balance_positive_color: Color,
    pub balance_negative_color: Color,
    pub balance_neutral_color: Color,
    pub currency_suffix: String,
    pub balance_title: String,
}

impl Default for ChartTheme {
    fn default() -> Self {
        Self {
            compact_breakpoint: 360.0,
            compact_chart_size: 120.0,
            regular_chart_size: 160.0,
            compact_stroke_width: 30.0,
            regular_stroke_width: 50.0,
            compact_legend_font_size: 12.0,
            regular_legend_font_size: 14.0,
            compact_padding: 8.0,
            regular_padding: 16.0,
            shadow_extra_width: 4.0,
            shadow_color: Color::BLACK.with_alpha(0.1),
            income_empty_color: Color::from_argb(0xFF32CD32).with_alpha(0.5),
            expense_empty_color: Color::from_argb(0xFFB22222).with_alpha(0.5),
            income_header_gradient: [Color::from_argb(0xFF2E7D32), Color::from_argb(0xFF66BB6A)],
            expense_header_gradient: [Color::from_argb(0xFFC62828), Color::from_argb(0xFFEF5350)],
            text_color: Color::WHITE,
            balance_positive_color: Color::GREEN,
            balance_negative_color: Color::RED,
            balance_neutral_color: Color::WHITE,
            currency_suffix: "грн".to_string(),
            balance_title: "Залишок:".to_string(),
        }
    }
}

impl ChartTheme {
    pub fn from_yaml_file<P: AsRef<Path>>(path: P) -> Result<Self, ThemeError> {
        let path = path.as_ref();
        let yaml = fs::read_to_string(path).map_err(|source| ThemeError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&yaml)
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self, ThemeError> {
        let theme: Self = serde_yaml::from_str(yaml)?;
        crate::ui_log!(log::Level::Debug, "Loaded chart theme: {:?}", theme);
        Ok(theme)
    }

    /// Whether a container of `width` falls under the compact breakpoint.
    pub fn is_compact(&self, width: f32) -> bool {
        width < self.compact_breakpoint
    }

    /// Formats an amount the way category rows and headers show it.
    pub fn format_amount(&self, amount: f64) -> String {
        format!("{:.2} {}", amount, self.currency_suffix)
    }
}
