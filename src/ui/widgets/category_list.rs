use crate::finance::CategoryAmounts;
use crate::ui::theme::{ChartTheme, Color};
use crate::ui::widgets::LayoutContext;
use std::cmp::Ordering;

/// One clickable row of a category list.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryRow {
    pub category: String,
    pub amount: f64,
    pub amount_text: String,
}

/// Income rows, largest first.
pub fn income_rows(incomes: &CategoryAmounts, theme: &ChartTheme) -> Vec<CategoryRow> {
    sorted_rows(incomes, theme, |a, b| b.total_cmp(&a))
}

/// Expense rows, smallest first.
pub fn expense_rows(expenses: &CategoryAmounts, theme: &ChartTheme) -> Vec<CategoryRow> {
    sorted_rows(expenses, theme, |a, b| a.total_cmp(&b))
}

fn sorted_rows<F>(amounts: &CategoryAmounts, theme: &ChartTheme, order: F) -> Vec<CategoryRow>
where
    F: Fn(f64, f64) -> Ordering,
{
    let mut rows: Vec<CategoryRow> = amounts
        .iter()
        .map(|(category, amount)| CategoryRow {
            category: category.to_string(),
            amount,
            amount_text: theme.format_amount(amount),
        })
        .collect();
    // stable, ties keep insertion order
    rows.sort_by(|a, b| order(a.amount, b.amount));
    rows
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpandIndicator {
    ArrowDown,
    ArrowUp,
}

/// Header button above a category list showing its title and total.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpandableHeader {
    pub title: String,
    pub amount_text: String,
    pub gradient: [Color; 2],
    pub text_color: Color,
    pub padding: f32,
    pub expanded: bool,
}

impl ExpandableHeader {
    pub fn new(title: impl Into<String>, amount: f64, gradient: [Color; 2], ctx: &LayoutContext<'_>) -> Self {
        let theme = ctx.theme;
        Self {
            title: title.into(),
            amount_text: theme.format_amount(amount),
            gradient,
            text_color: theme.text_color,
            padding: if ctx.is_compact() { theme.compact_padding } else { theme.regular_padding },
            expanded: false,
        }
    }

    pub fn toggle(&mut self) {
        self.expanded = !self.expanded;
    }

    pub fn indicator(&self) -> ExpandIndicator {
        if self.expanded {
            ExpandIndicator::ArrowUp
        } else {
            ExpandIndicator::ArrowDown
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn amounts() -> CategoryAmounts {
        [("Rent", 500.0), ("Food", 120.0), ("Gym", 120.0), ("Travel", 900.0)]
            .into_iter()
            .collect()
    }

    fn names(rows: &[CategoryRow]) -> Vec<&str> {
        rows.iter().map(|r| r.category.as_str()).collect()
    }

    #[test]
    fn incomes_sort_descending() {
        let rows = income_rows(&amounts(), &ChartTheme::default());
        assert_eq!(names(&rows), vec!["Travel", "Rent", "Food", "Gym"]);
    }

    #[test]
    fn expenses_sort_ascending_and_ties_stay_put() {
        let rows = expense_rows(&amounts(), &ChartTheme::default());
        assert_eq!(names(&rows), vec!["Food", "Gym", "Rent", "Travel"]);
    }

    #[test]
    fn rows_carry_formatted_amount() {
        let rows = expense_rows(&amounts(), &ChartTheme::default());
        assert_eq!(rows[0].amount, 120.0);
        assert_eq!(rows[0].amount_text, "120.00 грн");
    }

    #[test]
    fn header_toggles_indicator() {
        let theme = ChartTheme::default();
        let ctx = LayoutContext::new(400.0, &theme);
        let mut header = ExpandableHeader::new("Витрати", 1520.5, [Color::RED, Color::BLACK], &ctx);
        assert_eq!(header.amount_text, "1520.50 грн");
        assert_eq!(header.indicator(), ExpandIndicator::ArrowDown);
        header.toggle();
        assert_eq!(header.indicator(), ExpandIndicator::ArrowUp);
        header.toggle();
        assert!(!header.expanded);
    }

    #[test]
    fn header_padding_follows_breakpoint() {
        let theme = ChartTheme::default();
        let narrow = ExpandableHeader::new("a", 0.0, [Color::RED; 2], &LayoutContext::new(300.0, &theme));
        let wide = ExpandableHeader::new("a", 0.0, [Color::RED; 2], &LayoutContext::new(720.0, &theme));
        assert_eq!(narrow.padding, 8.0);
        assert_eq!(wide.padding, 16.0);
    }
}
