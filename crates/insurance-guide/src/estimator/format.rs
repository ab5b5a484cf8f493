/// Render an amount as US dollars with no cents, e.g. `$1,234,567`.
///
/// Fractions round to the nearest dollar; negative amounts carry a leading minus.
/// Non-finite amounts render as `$0`.
pub fn format_usd(amount: f64) -> String {
    if !amount.is_finite() {
        return "$0".to_string();
    }

    let rounded = amount.round();
    let sign = if rounded < 0.0 { "-" } else { "" };
    let digits = (rounded.abs() as u64).to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    format!("{sign}${grouped}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands() {
        assert_eq!(format_usd(0.0), "$0");
        assert_eq!(format_usd(135.0), "$135");
        assert_eq!(format_usd(1_000.0), "$1,000");
        assert_eq!(format_usd(900_000.0), "$900,000");
        assert_eq!(format_usd(12_345_678.0), "$12,345,678");
    }

    #[test]
    fn rounds_to_whole_dollars() {
        assert_eq!(format_usd(5_059.5), "$5,060");
        assert_eq!(format_usd(99.4), "$99");
    }

    #[test]
    fn negative_and_non_finite_amounts() {
        assert_eq!(format_usd(-2_500.0), "-$2,500");
        assert_eq!(format_usd(-0.2), "$0");
        assert_eq!(format_usd(f64::NAN), "$0");
    }
}
