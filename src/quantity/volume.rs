use std::fmt::{Display, Formatter};

use crate::quantity::cost::Cost;

quantity!(
    /// US liquid gallons.
    Gallons, via: Decimal, unit: "gal"
);

quantity!(GallonPrice, via: Decimal, unit: "$/gal");

implement_mul!(Gallons, GallonPrice, Cost);

impl Display for Gallons {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} gal", self.0.normalize())
    }
}

impl Display for GallonPrice {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/gal", Cost(self.0))
    }
}
