use std::fmt::{Display, Formatter};

use rust_decimal_macros::dec;

use crate::{prelude::*, quantity::cost::Cost};

quantity!(
    /// Service occurrences per year.
    ///
    /// Fractional values annualize services performed less often than once a year.
    Frequency, via: Decimal, unit: "/yr"
);

impl Frequency {
    pub const QUARTERLY: Self = Self(dec!(4));
    pub const ANNUAL: Self = Self(dec!(1));

    /// Once every five years, amortized per year.
    pub const QUINQUENNIAL: Self = Self(dec!(0.2));

    /// Daily visits with room to spare.
    pub const MAX: Self = Self(dec!(1000));

    #[must_use]
    pub fn is_positive(self) -> bool {
        self.0.is_sign_positive() && !self.0.is_zero()
    }

    /// Reject frequencies no maintenance contract can have.
    ///
    /// Negative frequencies are accepted here and excluded from pricing.
    pub fn validated(self) -> Result<Self> {
        ensure!(self <= Self::MAX, "frequency must not exceed {}, got {self}", Self::MAX);
        Ok(self)
    }
}

impl std::ops::Mul<Frequency> for Cost {
    type Output = Self;

    fn mul(self, frequency: Frequency) -> Self::Output {
        Self(self.0 * frequency.0)
    }
}

impl Display for Frequency {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}×/yr", self.0.normalize())
    }
}
