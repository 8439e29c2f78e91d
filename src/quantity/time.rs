use std::fmt::{Display, Formatter};

use crate::quantity::{cost::Cost, frequency::Frequency};

quantity!(Hours, via: Decimal, unit: "h");

quantity!(
    /// Dollars per labor hour.
    HourlyRate, via: Decimal, unit: "$/h"
);

implement_mul!(Hours, HourlyRate, Cost);

impl std::ops::Mul<Frequency> for Hours {
    type Output = Self;

    fn mul(self, frequency: Frequency) -> Self::Output {
        Self(self.0 * frequency.0)
    }
}

impl Display for Hours {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} h", self.0.normalize())
    }
}

impl Display for HourlyRate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/h", Cost(self.0))
    }
}
