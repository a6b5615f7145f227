use crate::ui::theme::{ChartTheme, Color};
use crate::ui::widgets::ChartError;
use log::Level::{Debug, Warn};

/// Rotational origin of the first arc: 12 o'clock, with 0° at 3 o'clock and
/// angles increasing clockwise.
pub const DEFAULT_START_ANGLE: f64 = -90.0;

/// One arc of a ring chart, in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcSpan {
    pub start: f64,
    pub sweep: f64,
}

impl ArcSpan {
    /// Placeholder ring drawn when there is nothing to show.
    pub const FULL_CIRCLE: ArcSpan = ArcSpan { start: 0.0, sweep: 360.0 };

    pub fn end(&self) -> f64 {
        self.start + self.sweep
    }
}

/// Result of [`compute_spans`].
#[derive(Debug, Clone, PartialEq)]
pub enum RingLayout {
    /// No meaningful proportions; the caller draws [`ArcSpan::FULL_CIRCLE`].
    Empty,
    Spans(Vec<ArcSpan>),
}

impl RingLayout {
    pub fn is_empty(&self) -> bool {
        matches!(self, RingLayout::Empty)
    }

    /// Sum of all sweeps. Exceeds 360 when the magnitudes outgrow the total.
    pub fn total_sweep(&self) -> f64 {
        match self {
            RingLayout::Empty => 0.0,
            RingLayout::Spans(spans) => spans.iter().map(|s| s.sweep).sum(),
        }
    }
}

/// Converts `magnitudes` into contiguous arcs, each covering
/// `magnitude / total` of the full circle, starting at `start_angle`.
///
/// An empty `magnitudes` slice yields [`RingLayout::Empty`] whatever `total`
/// is; so does a zero `total`.
/// When the magnitudes add up to more than `total` the arcs run past a full
/// turn; this is returned as is and logged.
///
/// # Errors
///
/// - [`ChartError::InvalidNormalization`] for a negative or non-finite `total`,
///   or one so small that a sweep overflows to infinity
/// - [`ChartError::InvalidMagnitude`] for a negative or non-finite magnitude
pub fn compute_spans(magnitudes: &[f64], total: f64, start_angle: f64) -> Result<RingLayout, ChartError> {
    if magnitudes.is_empty() {
        return Ok(RingLayout::Empty);
    }
    if !total.is_finite() || total < 0.0 {
        return Err(ChartError::InvalidNormalization { total });
    }
    if let Some((index, &value)) = magnitudes
        .iter()
        .enumerate()
        .find(|(_, m)| !m.is_finite() || **m < 0.0)
    {
        return Err(ChartError::InvalidMagnitude { index, value });
    }
    if total == 0.0 {
        return Ok(RingLayout::Empty);
    }

    let mut angle = start_angle;
    let mut spans = Vec::with_capacity(magnitudes.len());
    for magnitude in magnitudes {
        let sweep = magnitude / total * 360.0;
        // a subnormal total can still blow the ratio up
        if !sweep.is_finite() || !(angle + sweep).is_finite() {
            return Err(ChartError::InvalidNormalization { total });
        }
        spans.push(ArcSpan { start: angle, sweep });
        angle += sweep;
    }

    let sum: f64 = magnitudes.iter().sum();
    if sum > total {
        crate::chart_log!(
            Warn,
            "Magnitudes sum to {} but total is {}, arcs overlap past a full turn",
            sum,
            total
        );
    }

    Ok(RingLayout::Spans(spans))
}

/// A single stroked arc in paint order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcStroke {
    pub span: ArcSpan,
    pub color: Color,
    pub stroke_width: f32,
}

/// Stroke styling shared by every arc of one chart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DonutStyle {
    pub stroke_width: f32,
    pub shadow_color: Color,
    pub shadow_extra_width: f32,
    pub empty_color: Color,
}

impl DonutStyle {
    pub fn new(theme: &ChartTheme, stroke_width: f32, empty_color: Color) -> Self {
        Self {
            stroke_width,
            shadow_color: theme.shadow_color,
            shadow_extra_width: theme.shadow_extra_width,
            empty_color,
        }
    }
}

/// Draw list for a ring chart: what to stroke, where and in which color.
#[derive(Debug, Clone, PartialEq)]
pub struct DonutChart {
    pub layout: RingLayout,
    pub strokes: Vec<ArcStroke>,
}

impl DonutChart {
    /// Lays out `values` against `total` and pairs every arc with its palette
    /// color, followed by a slightly wider shadow arc.
    ///
    /// Never fails: invalid input is logged and drawn as the empty placeholder.
    pub fn build(values: &[f64], total: f64, palette: &[Color], style: &DonutStyle) -> Self {
        match Self::try_build(values, total, palette, style) {
            Ok(chart) => chart,
            Err(e) => {
                crate::chart_log!(Warn, "Falling back to empty chart: {}", e);
                Self::placeholder(style)
            }
        }
    }

    /// Like [`DonutChart::build`] but hands errors back to the caller.
    pub fn try_build(values: &[f64], total: f64, palette: &[Color], style: &DonutStyle) -> Result<Self, ChartError> {
        let layout = compute_spans(values, total, DEFAULT_START_ANGLE)?;
        let spans = match &layout {
            RingLayout::Empty => return Ok(Self::placeholder(style)),
            RingLayout::Spans(spans) => spans,
        };
        if palette.is_empty() {
            return Err(ChartError::EmptyPalette);
        }

        let mut strokes = Vec::with_capacity(spans.len() * 2);
        for (i, span) in spans.iter().enumerate() {
            strokes.push(ArcStroke {
                span: *span,
                color: palette[i % palette.len()],
                stroke_width: style.stroke_width,
            });
            strokes.push(ArcStroke {
                span: *span,
                color: style.shadow_color,
                stroke_width: style.stroke_width + style.shadow_extra_width,
            });
        }
        crate::chart_log!(Debug, "Built donut chart with {} arcs", spans.len());

        Ok(Self { layout, strokes })
    }

    fn placeholder(style: &DonutStyle) -> Self {
        Self {
            layout: RingLayout::Empty,
            strokes: vec![ArcStroke {
                span: ArcSpan::FULL_CIRCLE,
                color: style.empty_color,
                stroke_width: style.stroke_width,
            }],
        }
    }

    pub fn is_placeholder(&self) -> bool {
        self.layout.is_empty()
    }
}
