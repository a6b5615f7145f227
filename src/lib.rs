//! Layout and color logic behind the income/expense charts of a home
//! accounting app: ring chart arcs, category palettes, legends, sorted
//! category lists and the balance block. Drawing stays with the host toolkit.

pub mod finance;
pub mod logging;
pub mod ui;

pub use finance::{CategoryAmounts, FinanceSnapshot};
pub use ui::theme::{ChartTheme, Color};
pub use ui::widgets::donut_chart::{compute_spans, ArcSpan, RingLayout, DEFAULT_START_ANGLE};
pub use ui::widgets::palette::{generate_palette, BASE_PALETTE};
pub use ui::widgets::ChartError;
