use std::iter::{once, repeat_n};

use crate::models::clamp_percent;

pub const BAR_LENGTH: usize = 100;

const FILLED: char = '■';
const EMPTY: char = '-';
const BORDER: char = '‖';

/// Number of filled cells for a percentage.
pub fn filled_cells(value: f32) -> usize {
    let filled = (clamp_percent(value) / 100.0 * BAR_LENGTH as f32).round() as usize;
    filled.min(BAR_LENGTH)
}

/// A bracketed gauge of [`BAR_LENGTH`] cells.
pub fn usage_bar(value: f32) -> String {
    let filled = filled_cells(value);
    let cells = repeat_n(FILLED, filled).chain(repeat_n(EMPTY, BAR_LENGTH - filled));
    once(BORDER).chain(cells).chain(once(BORDER)).collect()
}

/// `"<label>: <value>%  <bar>"`, the value right-aligned in `width` columns
/// with two decimals.
pub fn format_usage(label: &str, width: usize, value: f32) -> String {
    let value = clamp_percent(value);
    format!("{}: {:>width$.2}%  {}", label, value, usage_bar(value), width = width)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count(bar: &str, glyph: char) -> usize {
        bar.chars().filter(|c| *c == glyph).count()
    }

    #[test]
    fn test_bar_is_bracketed() {
        let bar = usage_bar(37.0);
        assert!(bar.starts_with(BORDER));
        assert!(bar.ends_with(BORDER));
        assert_eq!(bar.chars().count(), BAR_LENGTH + 2);
    }

    #[test]
    fn test_bar_fill_matches_rounded_value() {
        for value in [0.0, 0.4, 0.5, 12.49, 12.5, 33.3, 66.6, 99.4, 99.5, 100.0] {
            let bar = usage_bar(value);
            let expected = (value / 100.0 * 100.0_f32).round() as usize;
            assert_eq!(count(&bar, FILLED), expected, "value {}", value);
            assert_eq!(count(&bar, EMPTY), BAR_LENGTH - expected, "value {}", value);
        }
    }

    #[test]
    fn test_bar_extremes() {
        assert_eq!(count(&usage_bar(0.0), FILLED), 0);
        assert_eq!(count(&usage_bar(100.0), FILLED), BAR_LENGTH);
    }

    #[test]
    fn test_bar_out_of_range_is_clamped() {
        assert_eq!(count(&usage_bar(-20.0), FILLED), 0);
        assert_eq!(count(&usage_bar(250.0), FILLED), BAR_LENGTH);
        assert_eq!(count(&usage_bar(f32::NAN), FILLED), 0);
    }

    #[test]
    fn test_format_usage_width_and_precision() {
        let line = format_usage("CPU", 20, 5.0);
        let (head, _) = line.split_once("%  ").unwrap();
        assert_eq!(head, format!("CPU: {}", format!("{:>20}", "5.00")));

        let line = format_usage("Disk", 19, 100.0);
        assert!(line.starts_with(&format!("Disk: {}%  ‖■", " ".repeat(13) + "100.00")));
    }

    #[test]
    fn test_format_usage_zero() {
        let line = format_usage("CPU", 20, 0.0);
        assert!(line.contains("0.00%"));
        assert!(line.ends_with(&format!("‖{}‖", "-".repeat(BAR_LENGTH))));
    }
}
