use crate::ui::widgets::category_list::{CategoryRow, ExpandIndicator, ExpandableHeader};
use crate::ui::widgets::income_expense_chart::{ChartPage, PageView};
use crate::ui::Overview;
use std::fmt::Write;

/// Renders the overview as plain text, one block per screen section.
pub fn render_report(overview: &Overview) -> String {
    let mut out = String::new();

    let dims = &overview.chart.dimensions;
    let _ = writeln!(
        out,
        "Chart {}x{} (stroke {}, legend font {})",
        dims.chart_size, dims.chart_size, dims.stroke_width, dims.legend_font_size
    );
    for page in ChartPage::ALL {
        render_page(&mut out, overview.chart.page(page));
    }

    render_list(&mut out, &overview.income_header, &overview.income_rows);
    render_list(&mut out, &overview.expense_header, &overview.expense_rows);

    let balance = &overview.balance;
    let _ = writeln!(out, "{} {} [{}]", balance.title, balance.amount_text, balance.color);
    out
}

fn render_page(out: &mut String, view: &PageView) {
    let _ = writeln!(out, "== {} ==", view.page.title());
    for entry in &view.legend.entries {
        let _ = writeln!(out, "  {} {}", entry.swatch, entry.label);
    }
    if view.donut.is_placeholder() {
        let _ = writeln!(out, "  (empty)");
    }
    // shadow strokes repeat the arc above them
    for stroke in view.donut.strokes.iter().step_by(2) {
        let _ = writeln!(
            out,
            "  arc {:>8.2}° +{:>7.2}° {}",
            stroke.span.start, stroke.span.sweep, stroke.color
        );
    }
}

fn render_list(out: &mut String, header: &ExpandableHeader, rows: &[CategoryRow]) {
    let arrow = match header.indicator() {
        ExpandIndicator::ArrowDown => "▼",
        ExpandIndicator::ArrowUp => "▲",
    };
    let _ = writeln!(out, "{} {} {}", arrow, header.title, header.amount_text);
    for row in rows {
        let _ = writeln!(out, "    {:<20} {:>16}", row.category, row.amount_text);
    }
}
