//! Display formatting for prices. Amounts stay unrounded everywhere else.

/// Format an amount in reais with two decimals, e.g. `R$92.80`.
#[must_use]
pub fn format_price(amount: f64) -> String {
    // Adding 0.0 turns -0.0 into 0.0 so nothing renders as "R$-0.00".
    let amount = amount + 0.0;
    format!("R${amount:.2}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_two_decimals() {
        assert_eq!(format_price(92.8), "R$92.80");
        assert_eq!(format_price(25.0), "R$25.00");
        assert_eq!(format_price(278.4), "R$278.40");
    }

    #[test]
    fn rounds_only_for_display() {
        assert_eq!(format_price(10.0 / 3.0), "R$3.33");
        assert_eq!(format_price(0.1 + 0.2), "R$0.30");
    }

    #[test]
    fn negative_zero_renders_as_zero() {
        assert_eq!(format_price(-0.0), "R$0.00");
    }
}
