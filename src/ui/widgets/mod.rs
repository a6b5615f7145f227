use crate::ui::theme::ChartTheme;
use thiserror::Error;

pub mod balance;
pub mod category_list;
pub mod donut_chart;
pub mod income_expense_chart;
pub mod legend;
pub mod palette;

/// Failures of the chart layout and palette computations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ChartError {
    #[error("Normalization total must be a finite non-negative number, got {total}")]
    InvalidNormalization { total: f64 },

    #[error("Magnitude at index {index} must be a finite non-negative number, got {value}")]
    InvalidMagnitude { index: usize, value: f64 },

    #[error("Exclusion list removed every color from the base palette")]
    EmptyPalette,
}

/// Information about the current layout context (available width, theme).
#[derive(Debug, Clone, Copy)]
pub struct LayoutContext<'a> {
    pub available_width: f32,
    pub theme: &'a ChartTheme,
}

impl<'a> LayoutContext<'a> {
    pub fn new(available_width: f32, theme: &'a ChartTheme) -> Self {
        Self { available_width, theme }
    }

    pub fn is_compact(&self) -> bool {
        self.theme.is_compact(self.available_width)
    }
}

/// Size of the donut chart and its legend for a given container width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartDimensions {
    pub chart_size: f32,
    pub stroke_width: f32,
    pub legend_max_height: f32,
    pub legend_font_size: f32,
}

impl ChartDimensions {
    pub fn for_context(ctx: &LayoutContext<'_>) -> Self {
        let theme = ctx.theme;
        let (chart_size, stroke_width, legend_font_size) = if ctx.is_compact() {
            (theme.compact_chart_size, theme.compact_stroke_width, theme.compact_legend_font_size)
        } else {
            (theme.regular_chart_size, theme.regular_stroke_width, theme.regular_legend_font_size)
        };
        Self {
            chart_size,
            stroke_width,
            // legend scrolls once it grows taller than the chart
            legend_max_height: chart_size,
            legend_font_size,
        }
    }

    /// Radius of the stroke's center line so the ring fits inside `chart_size`.
    pub fn ring_radius(&self) -> f32 {
        ((self.chart_size - self.stroke_width) / 2.0).max(0.0)
    }
}
