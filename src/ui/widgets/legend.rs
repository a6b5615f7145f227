use crate::finance::CategoryAmounts;
use crate::ui::theme::Color;

#[derive(Debug, Clone, PartialEq)]
pub struct LegendEntry {
    pub label: String,
    pub swatch: Color,
}

/// Category labels with the swatch color of their arc, in chart order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Legend {
    pub entries: Vec<LegendEntry>,
}

impl Legend {
    /// Pairs the i-th category with the i-th palette color. An empty palette
    /// gives an empty legend, a short one is cycled.
    pub fn new(categories: &CategoryAmounts, palette: &[Color]) -> Self {
        if palette.is_empty() {
            return Self::default();
        }
        let entries = categories
            .categories()
            .enumerate()
            .map(|(i, label)| LegendEntry {
                label: label.to_string(),
                swatch: palette[i % palette.len()],
            })
            .collect();
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
