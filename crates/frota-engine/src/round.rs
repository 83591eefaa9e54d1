/// Round to a fixed number of decimal places (half away from zero).
///
/// Derived fields are stored rounded: price-per-liter to 3 places,
/// distance to 1, consumption to 2.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::round_to;

    #[test]
    fn rounds_to_requested_places() {
        assert_eq!(round_to(5.7894, 3), 5.789);
        assert_eq!(round_to(150.04, 1), 150.0);
        assert_eq!(round_to(12.346, 2), 12.35);
    }

    #[test]
    fn zero_decimals_rounds_to_integer() {
        assert_eq!(round_to(2.5, 0), 3.0);
        assert_eq!(round_to(2.4, 0), 2.0);
    }

    #[test]
    fn negative_values_round_away_from_zero() {
        assert_eq!(round_to(-2.5, 0), -3.0);
    }
}
