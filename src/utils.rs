/// Utility functions for formatting readings and statistics
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::OffsetDateTime;

/// Decimal places used for every displayed value
pub const DISPLAY_DECIMALS: i32 = 4;

const TABLE_DATETIME: &[BorrowedFormatItem<'_>] =
    format_description!("[day]/[month]/[year] [hour]:[minute]:[second]");

/// Format a timestamp for the reading table
///
/// Converts an OffsetDateTime to DD/MM/YYYY HH:MM:SS format.
/// Falls back to default string representation if formatting fails.
pub fn format_datetime(dt: &OffsetDateTime) -> String {
    dt.format(TABLE_DATETIME).unwrap_or_else(|_| dt.to_string())
}

/// Round a value to `decimals` places, halves away from zero.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

/// Round a value the way the reading table and summary rows show it
pub fn round_display(value: f64) -> f64 {
    round_to(value, DISPLAY_DECIMALS)
}

/// Render a rounded value; whole numbers keep a trailing `.0`
pub fn format_value(value: f64) -> String {
    format!("{:?}", round_display(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn formats_day_first_with_seconds() {
        let dt = datetime!(2024-03-07 09:05:02 UTC);
        assert_eq!(format_datetime(&dt), "07/03/2024 09:05:02");
    }

    #[test]
    fn rounds_to_four_places() {
        assert_eq!(round_display(1.790115), 1.7901);
        assert_eq!(round_display(72.123456), 72.1235);
        assert_eq!(round_display(-3.00004), -3.0);
        assert_eq!(round_to(2.5, 0), 3.0);
    }

    #[test]
    fn formatted_values_keep_a_decimal_point() {
        assert_eq!(format_value(70.0), "70.0");
        assert_eq!(format_value(72.123456), "72.1235");
        assert_eq!(format_value(-3.00004), "-3.0");
    }
}
