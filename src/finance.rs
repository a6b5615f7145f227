use serde::de::{self, Deserializer, MapAccess, Visitor};
use serde::Deserialize;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[cfg(feature = "mock_finance")]
pub mod mock;

/// Ordered category → amount pairs with map semantics: labels are unique,
/// iteration follows first insertion.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryAmounts {
    entries: Vec<(String, f64)>,
}

impl CategoryAmounts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the amount for `category`. An existing category keeps its
    /// position and gets the new amount.
    pub fn insert(&mut self, category: impl Into<String>, amount: f64) {
        let category = category.into();
        match self.entries.iter_mut().find(|(name, _)| *name == category) {
            Some(entry) => entry.1 = amount,
            None => self.entries.push((category, amount)),
        }
    }

    pub fn get(&self, category: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|(name, _)| name == category)
            .map(|(_, amount)| *amount)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.entries.iter().map(|(name, amount)| (name.as_str(), *amount))
    }

    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    /// Amounts in insertion order, ready for the ring layout.
    pub fn amounts(&self) -> Vec<f64> {
        self.entries.iter().map(|(_, amount)| *amount).collect()
    }

    pub fn sum(&self) -> f64 {
        self.entries.iter().map(|(_, amount)| amount).sum()
    }
}

impl<S: Into<String>> FromIterator<(S, f64)> for CategoryAmounts {
    fn from_iter<I: IntoIterator<Item = (S, f64)>>(iter: I) -> Self {
        let mut amounts = CategoryAmounts::new();
        for (category, amount) in iter {
            amounts.insert(category, amount);
        }
        amounts
    }
}

impl<'de> Deserialize<'de> for CategoryAmounts {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct AmountsVisitor;

        impl<'de> Visitor<'de> for AmountsVisitor {
            type Value = CategoryAmounts;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of category names to amounts")
            }

            fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
                Ok(CategoryAmounts::new())
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut amounts = CategoryAmounts::new();
                while let Some((category, amount)) = map.next_entry::<String, f64>()? {
                    amounts.insert(category, amount);
                }
                Ok(amounts)
            }
        }

        deserializer.deserialize_any(AmountsVisitor)
    }
}

#[derive(Error, Debug)]
pub enum SnapshotError {
    #[error("Failed to read snapshot file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse snapshot YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Pre-aggregated incomes and expenses as handed over by the data layer.
///
/// Totals are tracked by the data layer and need not equal the category sums.
///
/// ```yaml
/// incomes:
///   Salary: 42000
///   Freelance: 8000.5
/// expenses:
///   Rent: 15000
/// total_incomes: 50000.5
/// total_expenses: 15000
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct FinanceSnapshot {
    pub incomes: CategoryAmounts,
    pub expenses: CategoryAmounts,
    pub total_incomes: f64,
    pub total_expenses: f64,
}

impl FinanceSnapshot {
    pub fn from_yaml_file<P: AsRef<Path>>(path: P) -> Result<Self, SnapshotError> {
        let path = path.as_ref();
        let yaml = fs::read_to_string(path).map_err(|source| SnapshotError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&yaml)
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self, SnapshotError> {
        let snapshot: Self = serde_yaml::from_str(yaml)?;
        crate::finance_log!(
            log::Level::Debug,
            "Loaded snapshot: {} income and {} expense categories",
            snapshot.incomes.len(),
            snapshot.expenses.len()
        );
        Ok(snapshot)
    }

    pub fn balance(&self) -> f64 {
        self.total_incomes - self.total_expenses
    }
}
