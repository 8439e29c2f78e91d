use std::fmt::{Display, Formatter};

use crate::quantity::cost::Cost;

quantity!(Miles, via: Decimal, unit: "mi");

quantity!(
    /// Dollars per mile driven from the shop.
    MileageRate, via: Decimal, unit: "$/mi"
);

implement_mul!(Miles, MileageRate, Cost);

impl Display for Miles {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} mi", self.0.normalize())
    }
}

impl Display for MileageRate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/mi", Cost(self.0))
    }
}
