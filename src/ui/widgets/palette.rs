use crate::ui::theme::Color;
use crate::ui::widgets::ChartError;
use log::Level::{Debug, Warn};

pub const PALETTE_RED: Color = Color::from_argb(0xFFe6194B);
pub const PALETTE_GREEN: Color = Color::from_argb(0xFF3cb44b);

/// Fixed cycling order for category colors. Neighbours are picked to be
/// easy to tell apart on a ring chart.
pub const BASE_PALETTE: [Color; 20] = [
    PALETTE_RED,
    PALETTE_GREEN,
    Color::from_argb(0xFFffe119), // yellow
    Color::from_argb(0xFF4363d8), // blue
    Color::from_argb(0xFFf58231), // orange
    Color::from_argb(0xFF911eb4), // purple
    Color::from_argb(0xFF42d4f4), // cyan
    Color::from_argb(0xFFf032e6), // magenta
    Color::from_argb(0xFFbfef45), // lime
    Color::from_argb(0xFFfabebe), // pink
    Color::from_argb(0xFF469990), // teal
    Color::from_argb(0xFFe6beff), // lavender
    Color::from_argb(0xFF9A6324), // brown
    Color::from_argb(0xFFfffac8), // beige
    Color::from_argb(0xFF800000), // maroon
    Color::from_argb(0xFFaaffc3), // mint
    Color::from_argb(0xFF808000), // olive
    Color::from_argb(0xFFffd8b1), // coral
    Color::from_argb(0xFF000075), // navy
    Color::from_argb(0xFFa9a9a9), // gray
];

/// Returns `count` colors taken from [`BASE_PALETTE`] minus `exclude`,
/// repeating the filtered palette once `count` exceeds its size.
///
/// Colors in `exclude` that are not part of the base palette are ignored.
///
/// # Errors
///
/// [`ChartError::EmptyPalette`] when `exclude` removes every base color,
/// whatever `count` is.
pub fn generate_palette(count: usize, exclude: &[Color]) -> Result<Vec<Color>, ChartError> {
    let filtered: Vec<Color> = BASE_PALETTE
        .iter()
        .copied()
        .filter(|color| !exclude.contains(color))
        .collect();

    if filtered.is_empty() {
        crate::palette_log!(Warn, "Exclusion list removed all {} base colors", BASE_PALETTE.len());
        return Err(ChartError::EmptyPalette);
    }
    if count > filtered.len() {
        crate::palette_log!(
            Debug,
            "{} colors requested from a palette of {}, colors will repeat",
            count,
            filtered.len()
        );
    }

    Ok((0..count).map(|i| filtered[i % filtered.len()]).collect())
}

/// Palette for a legend with `entries` rows. Always yields at least one color
/// so an empty chart page still has a swatch to draw with.
pub fn legend_palette(entries: usize, exclude: &[Color]) -> Result<Vec<Color>, ChartError> {
    generate_palette(entries.max(1), exclude)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_palette_is_distinct() {
        for (i, a) in BASE_PALETTE.iter().enumerate() {
            for b in &BASE_PALETTE[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn named_palette_hues_are_not_pure_primaries() {
        assert_ne!(PALETTE_RED, Color::RED);
        assert_ne!(PALETTE_GREEN, Color::GREEN);
        assert_eq!(PALETTE_RED.to_string(), "#e6194b");
        assert_eq!(PALETTE_GREEN.to_string(), "#3cb44b");
    }

    #[test]
    fn length_always_matches_count() {
        for count in [0, 1, 5, 19, 20, 21, 57, 200] {
            assert_eq!(generate_palette(count, &[]).unwrap().len(), count);
            assert_eq!(generate_palette(count, &[PALETTE_RED]).unwrap().len(), count);
        }
    }

    #[test]
    fn zero_count_is_empty_not_error() {
        assert!(generate_palette(0, &[]).unwrap().is_empty());
    }

    #[test]
    fn wraps_around_base_palette() {
        let palette = generate_palette(45, &[]).unwrap();
        for (i, color) in palette.iter().enumerate() {
            assert_eq!(*color, palette[i % BASE_PALETTE.len()]);
            assert_eq!(*color, BASE_PALETTE[i % BASE_PALETTE.len()]);
        }
    }

    #[test]
    fn first_colors_are_distinct_within_palette_size() {
        let palette = generate_palette(BASE_PALETTE.len(), &[]).unwrap();
        assert_eq!(palette, BASE_PALETTE.to_vec());
    }

    #[test]
    fn excluding_red_keeps_relative_order() {
        let palette = generate_palette(3, &[PALETTE_RED]).unwrap();
        assert_eq!(palette, BASE_PALETTE[1..4].to_vec());
    }

    #[test]
    fn excluding_present_color_shrinks_cycle_by_one() {
        let palette = generate_palette(40, &[PALETTE_GREEN]).unwrap();
        assert_eq!(palette[19], PALETTE_RED);
        assert_eq!(palette[0], PALETTE_RED);
        assert!(!palette.contains(&PALETTE_GREEN));
    }

    #[test]
    fn excluding_absent_color_is_noop() {
        let stranger = Color::rgb(1, 2, 3);
        assert_eq!(generate_palette(25, &[stranger]).unwrap(), generate_palette(25, &[]).unwrap());
    }

    #[test]
    fn duplicate_exclusions_count_once() {
        let palette = generate_palette(19, &[PALETTE_RED, PALETTE_RED]).unwrap();
        assert_eq!(palette, BASE_PALETTE[1..].to_vec());
    }

    #[test]
    fn excluding_everything_is_an_error() {
        assert!(matches!(generate_palette(3, &BASE_PALETTE), Err(ChartError::EmptyPalette)));
        assert!(matches!(generate_palette(0, &BASE_PALETTE), Err(ChartError::EmptyPalette)));
    }

    #[test]
    fn same_inputs_same_output() {
        assert_eq!(generate_palette(33, &[PALETTE_GREEN]).unwrap(), generate_palette(33, &[PALETTE_GREEN]).unwrap());
    }

    #[test]
    fn legend_palette_has_at_least_one_color() {
        assert_eq!(legend_palette(0, &[PALETTE_RED]).unwrap(), vec![PALETTE_GREEN]);
        assert_eq!(legend_palette(4, &[]).unwrap().len(), 4);
    }
}
