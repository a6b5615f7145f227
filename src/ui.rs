pub mod render;
pub mod theme;
pub mod widgets;

use crate::finance::FinanceSnapshot;
use crate::logging::UI_NAMESPACE;
use crate::ui::widgets::balance::BalanceDisplay;
use crate::ui::widgets::category_list::{expense_rows, income_rows, CategoryRow, ExpandableHeader};
use crate::ui::widgets::income_expense_chart::{ChartPage, IncomeExpenseChart};
use crate::ui::widgets::{ChartError, LayoutContext};
use log::info;

/// Everything the finance overview screen shows, computed from one snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct Overview {
    pub chart: IncomeExpenseChart,
    pub income_header: ExpandableHeader,
    pub income_rows: Vec<CategoryRow>,
    pub expense_header: ExpandableHeader,
    pub expense_rows: Vec<CategoryRow>,
    pub balance: BalanceDisplay,
}

impl Overview {
    pub fn build(snapshot: &FinanceSnapshot, ctx: &LayoutContext<'_>) -> Result<Self, ChartError> {
        let theme = ctx.theme;
        info!(target: UI_NAMESPACE, "Building overview for width {}", ctx.available_width);

        Ok(Self {
            chart: IncomeExpenseChart::build(snapshot, ctx)?,
            income_header: ExpandableHeader::new(
                ChartPage::Incomes.title(),
                snapshot.total_incomes,
                theme.income_header_gradient,
                ctx,
            ),
            income_rows: income_rows(&snapshot.incomes, theme),
            expense_header: ExpandableHeader::new(
                ChartPage::Expenses.title(),
                snapshot.total_expenses,
                theme.expense_header_gradient,
                ctx,
            ),
            expense_rows: expense_rows(&snapshot.expenses, theme),
            balance: BalanceDisplay::new(snapshot.balance(), theme),
        })
    }
}
