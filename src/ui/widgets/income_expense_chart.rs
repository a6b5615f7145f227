use crate::finance::{CategoryAmounts, FinanceSnapshot};
use crate::ui::theme::Color;
use crate::ui::widgets::donut_chart::{DonutChart, DonutStyle};
use crate::ui::widgets::legend::Legend;
use crate::ui::widgets::palette::{self, legend_palette};
use crate::ui::widgets::{ChartDimensions, ChartError, LayoutContext};
use log::Level::Debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartPage {
    Incomes,
    Expenses,
}

impl ChartPage {
    pub const ALL: [ChartPage; 2] = [ChartPage::Incomes, ChartPage::Expenses];

    pub fn index(self) -> usize {
        match self {
            ChartPage::Incomes => 0,
            ChartPage::Expenses => 1,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn title(self) -> &'static str {
        match self {
            ChartPage::Incomes => "Доходи",
            ChartPage::Expenses => "Витрати",
        }
    }

    pub fn next(self) -> Self {
        match self {
            ChartPage::Incomes => ChartPage::Expenses,
            ChartPage::Expenses => ChartPage::Incomes,
        }
    }

    /// Palette colors kept off this page so incomes never show red and
    /// expenses never show green.
    fn excluded_colors(self) -> [Color; 1] {
        match self {
            ChartPage::Incomes => [palette::PALETTE_RED],
            ChartPage::Expenses => [palette::PALETTE_GREEN],
        }
    }
}

/// Everything one page of the chart shows: legend on the left, ring on the right.
#[derive(Debug, Clone, PartialEq)]
pub struct PageView {
    pub page: ChartPage,
    pub legend: Legend,
    pub donut: DonutChart,
}

impl PageView {
    fn build(
        page: ChartPage,
        amounts: &CategoryAmounts,
        total: f64,
        empty_color: Color,
        dimensions: &ChartDimensions,
        ctx: &LayoutContext<'_>,
    ) -> Result<Self, ChartError> {
        let colors = legend_palette(amounts.len(), &page.excluded_colors())?;
        let style = DonutStyle::new(ctx.theme, dimensions.stroke_width, empty_color);
        Ok(Self {
            page,
            legend: Legend::new(amounts, &colors),
            donut: DonutChart::build(&amounts.amounts(), total, &colors, &style),
        })
    }
}

/// Two-page income/expense overview with page switching.
#[derive(Debug, Clone, PartialEq)]
pub struct IncomeExpenseChart {
    pub dimensions: ChartDimensions,
    incomes: PageView,
    expenses: PageView,
    current: ChartPage,
}

impl IncomeExpenseChart {
    /// # Errors
    ///
    /// Only palette errors propagate; layout errors are drawn as an empty ring.
    pub fn build(snapshot: &FinanceSnapshot, ctx: &LayoutContext<'_>) -> Result<Self, ChartError> {
        let dimensions = ChartDimensions::for_context(ctx);
        let theme = ctx.theme;
        let incomes = PageView::build(
            ChartPage::Incomes,
            &snapshot.incomes,
            snapshot.total_incomes,
            theme.income_empty_color,
            &dimensions,
            ctx,
        )?;
        let expenses = PageView::build(
            ChartPage::Expenses,
            &snapshot.expenses,
            snapshot.total_expenses,
            theme.expense_empty_color,
            &dimensions,
            ctx,
        )?;
        crate::ui_log!(
            Debug,
            "Built income/expense chart at width {} (chart size {})",
            ctx.available_width,
            dimensions.chart_size
        );

        Ok(Self {
            dimensions,
            incomes,
            expenses,
            current: ChartPage::Incomes,
        })
    }

    pub fn page(&self, page: ChartPage) -> &PageView {
        match page {
            ChartPage::Incomes => &self.incomes,
            ChartPage::Expenses => &self.expenses,
        }
    }

    pub fn current_page(&self) -> ChartPage {
        self.current
    }

    pub fn current_view(&self) -> &PageView {
        self.page(self.current)
    }

    /// Switches to the page at `index`. Out of range indices are ignored.
    pub fn select_page(&mut self, index: usize) -> bool {
        match ChartPage::from_index(index) {
            Some(page) => {
                self.current = page;
                true
            }
            None => {
                crate::ui_log!(log::Level::Warn, "Ignoring selection of unknown page {}", index);
                false
            }
        }
    }

    pub fn next_page(&mut self) -> ChartPage {
        self.current = self.current.next();
        self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::theme::ChartTheme;
    use crate::ui::widgets::donut_chart::ArcSpan;

    fn snapshot() -> FinanceSnapshot {
        FinanceSnapshot {
            incomes: [("Salary", 3000.0), ("Bonus", 1000.0)].into_iter().collect(),
            expenses: CategoryAmounts::new(),
            total_incomes: 4000.0,
            total_expenses: 0.0,
        }
    }

    #[test]
    fn income_page_skips_red() {
        let theme = ChartTheme::default();
        let chart = IncomeExpenseChart::build(&snapshot(), &LayoutContext::new(400.0, &theme)).unwrap();
        let incomes = chart.page(ChartPage::Incomes);

        assert_eq!(incomes.legend.len(), 2);
        assert_eq!(incomes.legend.entries[0].swatch, palette::PALETTE_GREEN);
        assert_eq!(incomes.legend.entries[1].swatch, palette::BASE_PALETTE[2]);
        assert_eq!(incomes.donut.strokes.len(), 4);
        assert_eq!(incomes.donut.strokes[0].color, palette::PALETTE_GREEN);
        assert_eq!(incomes.donut.strokes[0].span.start, -90.0);
        assert_eq!(incomes.donut.strokes[0].stroke_width, 50.0);
    }

    #[test]
    fn empty_expense_page_draws_firebrick_ring() {
        let theme = ChartTheme::default();
        let chart = IncomeExpenseChart::build(&snapshot(), &LayoutContext::new(300.0, &theme)).unwrap();
        let expenses = chart.page(ChartPage::Expenses);

        assert!(expenses.legend.is_empty());
        assert!(expenses.donut.is_placeholder());
        assert_eq!(expenses.donut.strokes[0].span, ArcSpan::FULL_CIRCLE);
        assert_eq!(expenses.donut.strokes[0].color, Color::rgba(178, 34, 34, 128));
        assert_eq!(expenses.donut.strokes[0].stroke_width, 30.0);
        assert_eq!(chart.dimensions.chart_size, 120.0);
    }

    #[test]
    fn expense_page_skips_green() {
        let theme = ChartTheme::default();
        let mut snap = snapshot();
        snap.expenses = [("Rent", 1.0), ("Food", 1.0)].into_iter().collect();
        snap.total_expenses = 2.0;
        let chart = IncomeExpenseChart::build(&snap, &LayoutContext::new(400.0, &theme)).unwrap();
        let swatches: Vec<Color> = chart
            .page(ChartPage::Expenses)
            .legend
            .entries
            .iter()
            .map(|e| e.swatch)
            .collect();
        assert_eq!(swatches, vec![palette::PALETTE_RED, palette::BASE_PALETTE[2]]);
    }

    #[test]
    fn page_navigation() {
        let theme = ChartTheme::default();
        let mut chart = IncomeExpenseChart::build(&snapshot(), &LayoutContext::new(400.0, &theme)).unwrap();
        assert_eq!(chart.current_page(), ChartPage::Incomes);
        assert_eq!(chart.next_page(), ChartPage::Expenses);
        assert_eq!(chart.current_view().page, ChartPage::Expenses);
        assert_eq!(chart.next_page(), ChartPage::Incomes);

        assert!(chart.select_page(1));
        assert_eq!(chart.current_page(), ChartPage::Expenses);
        assert!(!chart.select_page(2));
        assert_eq!(chart.current_page(), ChartPage::Expenses);
    }

    #[test]
    fn page_titles() {
        assert_eq!(ChartPage::Incomes.title(), "Доходи");
        assert_eq!(ChartPage::from_index(1).map(ChartPage::title), Some("Витрати"));
    }
}
