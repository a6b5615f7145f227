use crate::finance::{CategoryAmounts, FinanceSnapshot};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

const INCOME_CATEGORIES: [&str; 6] = ["Salary", "Freelance", "Deposits", "Gifts", "Rent out", "Cashback"];
const EXPENSE_CATEGORIES: [&str; 10] = [
    "Groceries",
    "Rent",
    "Utilities",
    "Transport",
    "Health",
    "Restaurants",
    "Clothes",
    "Entertainment",
    "Education",
    "Travel",
];

/// Random but reproducible snapshot for demos. `None` seeds from entropy.
///
/// Totals equal the category sums, so both charts close the ring.
pub fn mock_snapshot(seed: Option<u64>) -> FinanceSnapshot {
    let mut rng = match seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_entropy(),
    };

    let incomes = random_amounts(&mut rng, &INCOME_CATEGORIES, 500.0..40_000.0);
    let expenses = random_amounts(&mut rng, &EXPENSE_CATEGORIES, 50.0..12_000.0);
    crate::finance_log!(
        log::Level::Debug,
        "Generated mock snapshot with {} incomes and {} expenses",
        incomes.len(),
        expenses.len()
    );

    FinanceSnapshot {
        total_incomes: incomes.sum(),
        total_expenses: expenses.sum(),
        incomes,
        expenses,
    }
}

fn random_amounts(rng: &mut SmallRng, categories: &[&str], range: std::ops::Range<f64>) -> CategoryAmounts {
    categories
        .iter()
        .filter_map(|category| {
            if !rng.gen_bool(0.7) {
                return None;
            }
            // whole kopecks
            let amount = (rng.gen_range(range.clone()) * 100.0).round() / 100.0;
            Some((*category, amount))
        })
        .collect()
}
