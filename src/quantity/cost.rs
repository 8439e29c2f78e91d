use std::fmt::{Display, Formatter};

use rust_decimal::RoundingStrategy;

quantity!(
    /// US dollars.
    Cost, via: Decimal, unit: "$"
);

impl Cost {
    /// Round to cents, half away from zero, the way the spreadsheet's `ROUND(x, 2)` does.
    #[must_use]
    pub fn round_to_cents(self) -> Self {
        Self(self.0.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero))
    }

    /// Round to whole dollars, half away from zero.
    #[must_use]
    pub fn round_to_dollars(self) -> Self {
        Self(self.0.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero))
    }
}

impl Display for Cost {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let cents = self.round_to_cents().0;
        if cents.is_sign_negative() {
            write!(f, "-${:.2}", -cents)
        } else {
            write!(f, "${cents:.2}")
        }
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn test_round_to_cents_midpoint() {
        assert_eq!(Cost(dec!(54.405)).round_to_cents(), Cost(dec!(54.41)));
        assert_eq!(Cost(dec!(-54.405)).round_to_cents(), Cost(dec!(-54.41)));
    }

    #[test]
    fn test_round_to_dollars() {
        assert_eq!(Cost(dec!(9733.5)).round_to_dollars(), Cost(dec!(9734)));
        assert_eq!(Cost(dec!(12963.3)).round_to_dollars(), Cost(dec!(12963)));
    }

    #[test]
    fn test_display() {
        assert_eq!(Cost(dec!(1705)).to_string(), "$1705.00");
        assert_eq!(Cost(dec!(-0.5)).to_string(), "-$0.50");
    }
}
