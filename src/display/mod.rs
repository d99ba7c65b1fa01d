//! Display formatting for terminal output
//!
//! Formats amounts, totals, item lists, and the favorites collection for the
//! terminal.

pub mod budget;
pub mod favorites;

pub use budget::{format_item_list, format_totals};
pub use favorites::format_favorites_list;

/// Format an amount with thousands grouping and cents only when present
///
/// `5000.0` renders as `5,000`; `1200.5` renders as `1,200.50`. The sign
/// precedes the digits, so callers prefix the currency symbol directly.
pub fn format_amount(value: f64) -> String {
    let cents = (value.abs() * 100.0).round() as u64;
    let whole = cents / 100;
    let fraction = cents % 100;

    let mut out = String::new();
    if value < 0.0 && cents != 0 {
        out.push('-');
    }
    out.push_str(&group_digits(whole));
    if fraction != 0 {
        out.push_str(&format!(".{:02}", fraction));
    }
    out
}

/// Format an amount as dollars (e.g., `$5,000`)
pub fn format_money(value: f64) -> String {
    format!("${}", format_amount(value))
}

/// Format a percentage with one decimal place (e.g., `100.0%`)
pub fn format_percent(value: f64) -> String {
    format!("{:.1}%", value)
}

fn group_digits(mut n: u64) -> String {
    let mut groups = Vec::new();
    loop {
        if n < 1000 {
            groups.push(n.to_string());
            break;
        }
        groups.push(format!("{:03}", n % 1000));
        n /= 1000;
    }
    groups.reverse();
    groups.join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whole_amounts_have_no_cents() {
        assert_eq!(format_amount(5000.0), "5,000");
        assert_eq!(format_amount(0.0), "0");
        assert_eq!(format_amount(999.0), "999");
    }

    #[test]
    fn test_grouping() {
        assert_eq!(format_amount(1234567.0), "1,234,567");
        assert_eq!(format_amount(1000.0), "1,000");
    }

    #[test]
    fn test_fractional_amounts_show_two_decimals() {
        assert_eq!(format_amount(1200.5), "1,200.50");
        assert_eq!(format_amount(0.25), "0.25");
    }

    #[test]
    fn test_negative_amounts() {
        assert_eq!(format_amount(-1200.0), "-1,200");
        assert_eq!(format_money(-1200.0), "$-1,200");
    }

    #[test]
    fn test_percent() {
        assert_eq!(format_percent(100.0), "100.0%");
        assert_eq!(format_percent(37.25), "37.3%");
    }
}
