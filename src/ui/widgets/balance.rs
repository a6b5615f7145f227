use crate::ui::theme::{ChartTheme, Color};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BalanceTone {
    Negative,
    Neutral,
    Positive,
}

impl BalanceTone {
    pub fn of(balance: f64) -> Self {
        if balance < 0.0 {
            BalanceTone::Negative
        } else if balance > 0.0 {
            BalanceTone::Positive
        } else {
            BalanceTone::Neutral
        }
    }
}

/// Remaining balance block: title plus grouped amount colored by sign.
#[derive(Debug, Clone, PartialEq)]
pub struct BalanceDisplay {
    pub title: String,
    pub amount_text: String,
    pub tone: BalanceTone,
    pub color: Color,
}

impl BalanceDisplay {
    pub fn new(balance: f64, theme: &ChartTheme) -> Self {
        let tone = BalanceTone::of(balance);
        let color = match tone {
            BalanceTone::Negative => theme.balance_negative_color,
            BalanceTone::Neutral => theme.balance_neutral_color,
            BalanceTone::Positive => theme.balance_positive_color,
        };
        Self {
            title: theme.balance_title.clone(),
            amount_text: format!("{} {}", group_thousands(balance), theme.currency_suffix),
            tone,
            color,
        }
    }
}

/// Two decimals with the integer part grouped by a space: `-1 234 567.89`.
pub fn group_thousands(value: f64) -> String {
    let plain = format!("{value:.2}");
    let (sign, unsigned) = match plain.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", plain.as_str()),
    };
    let (int_part, frac_part) = unsigned.split_once('.').unwrap_or((unsigned, ""));
    if !int_part.bytes().all(|b| b.is_ascii_digit()) {
        // inf / NaN
        return plain;
    }

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(digit);
    }

    if frac_part.is_empty() {
        format!("{sign}{grouped}")
    } else {
        format!("{sign}{grouped}.{frac_part}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_by_three() {
        assert_eq!(group_thousands(0.0), "0.00");
        assert_eq!(group_thousands(999.5), "999.50");
        assert_eq!(group_thousands(1000.0), "1 000.00");
        assert_eq!(group_thousands(1234567.891), "1 234 567.89");
        assert_eq!(group_thousands(-45210.25), "-45 210.25");
        assert_eq!(group_thousands(100000.0), "100 000.00");
    }

    #[test]
    fn non_finite_passes_through() {
        assert_eq!(group_thousands(f64::INFINITY), "inf");
        assert_eq!(group_thousands(f64::NAN), "NaN");
    }

    #[test]
    fn tone_follows_sign() {
        assert_eq!(BalanceTone::of(-0.01), BalanceTone::Negative);
        assert_eq!(BalanceTone::of(0.0), BalanceTone::Neutral);
        assert_eq!(BalanceTone::of(12.0), BalanceTone::Positive);
    }

    #[test]
    fn display_uses_theme_colors_and_suffix() {
        let theme = ChartTheme::default();
        let negative = BalanceDisplay::new(-2500.0, &theme);
        assert_eq!(negative.title, "Залишок:");
        assert_eq!(negative.amount_text, "-2 500.00 грн");
        assert_eq!(negative.color, Color::RED);

        let zero = BalanceDisplay::new(0.0, &theme);
        assert_eq!(zero.tone, BalanceTone::Neutral);
        assert_eq!(zero.color, Color::WHITE);

        assert_eq!(BalanceDisplay::new(1.0, &theme).color, Color::GREEN);
    }
}
