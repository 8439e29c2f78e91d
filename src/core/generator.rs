use std::fmt::{Display, Formatter};

use bon::Builder;
use rust_decimal_macros::dec;

use crate::{
    prelude::*,
    quantity::{distance::Miles, power::Kilowatts},
};

/// Per-unit calculation input.
#[must_use]
#[derive(Copy, Clone, Debug, Builder)]
pub struct GeneratorParams {
    pub kw: Kilowatts,

    /// Used only by the tune-up services.
    pub cylinders: Option<u32>,

    /// Used only by the diesel tune-up.
    pub injector_type: Option<InjectorType>,

    /// One-way distance from the shop.
    #[builder(default)]
    pub miles_from_shop: Miles,

    /// Fluids sent to the laboratory; everything when not specified.
    pub fluids: Option<FluidSelection>,
}

impl GeneratorParams {
    const MAX_MILES_FROM_SHOP: Miles = Miles(dec!(100000));

    /// Reject ratings and distances no generator can have.
    ///
    /// Ratings outside the kW brackets are valid and priced from the nearest bracket.
    pub fn validated(self) -> Result<Self> {
        ensure!(
            self.kw.0.is_finite() && self.kw.0 > 0.0,
            "power rating must be positive, got {}",
            self.kw,
        );
        ensure!(
            !self.miles_from_shop.0.is_sign_negative() || self.miles_from_shop.is_zero(),
            "distance from the shop must not be negative, got {}",
            self.miles_from_shop,
        );
        ensure!(
            self.miles_from_shop <= Self::MAX_MILES_FROM_SHOP,
            "distance from the shop must not exceed {}, got {}",
            Self::MAX_MILES_FROM_SHOP,
            self.miles_from_shop,
        );
        Ok(self)
    }
}

#[derive(
    Copy,
    Clone,
    Debug,
    Eq,
    Hash,
    PartialEq,
    clap::ValueEnum,
    serde::Deserialize,
    serde::Serialize,
)]
pub enum InjectorType {
    /// Mechanical pop-nozzle injectors.
    #[serde(alias = "popNoz", alias = "pop-noz")]
    PopNoz,

    /// Electronic unit injectors.
    #[serde(alias = "unitInj", alias = "unit-inj")]
    UnitInj,
}

impl Display for InjectorType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PopNoz => write!(f, "PopNoz"),
            Self::UnitInj => write!(f, "UnitInj"),
        }
    }
}

#[derive(Debug, clap::ValueEnum, enumset::EnumSetType)]
pub enum Fluid {
    Oil,
    Coolant,
    Fuel,
}

/// Fluid analysis selection.
#[must_use]
#[derive(Copy, Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct FluidSelection {
    pub oil: bool,
    pub coolant: bool,
    pub fuel: bool,
}

impl FluidSelection {
    pub const ALL: Self = Self { oil: true, coolant: true, fuel: true };
    pub const NONE: Self = Self { oil: false, coolant: false, fuel: false };

    pub const fn contains(self, fluid: Fluid) -> bool {
        match fluid {
            Fluid::Oil => self.oil,
            Fluid::Coolant => self.coolant,
            Fluid::Fuel => self.fuel,
        }
    }
}

impl Default for FluidSelection {
    fn default() -> Self {
        Self::ALL
    }
}

impl FromIterator<Fluid> for FluidSelection {
    fn from_iter<T: IntoIterator<Item = Fluid>>(iter: T) -> Self {
        iter.into_iter().fold(Self::NONE, |mut selection, fluid| {
            match fluid {
                Fluid::Oil => selection.oil = true,
                Fluid::Coolant => selection.coolant = true,
                Fluid::Fuel => selection.fuel = true,
            }
            selection
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fluid_selection_from_iter() {
        let selection: FluidSelection = [Fluid::Fuel, Fluid::Oil].into_iter().collect();
        assert_eq!(selection, FluidSelection { oil: true, coolant: false, fuel: true });
    }

    #[test]
    fn test_partial_fluid_selection_defaults_to_selected() {
        let selection: FluidSelection = serde_json::from_str(r#"{"fuel": false}"#).unwrap();
        assert_eq!(selection, FluidSelection { oil: true, coolant: true, fuel: false });
    }

    #[test]
    fn test_injector_type_aliases() {
        let injector: InjectorType = serde_json::from_str(r#""unitInj""#).unwrap();
        assert_eq!(injector, InjectorType::UnitInj);
        let injector: InjectorType = serde_json::from_str(r#""PopNoz""#).unwrap();
        assert_eq!(injector, InjectorType::PopNoz);
    }

    #[test]
    fn test_validated() {
        assert!(GeneratorParams::builder().kw(Kilowatts(2500.0)).build().validated().is_ok());
        assert!(GeneratorParams::builder().kw(Kilowatts(-1.0)).build().validated().is_err());
        assert!(GeneratorParams::builder().kw(Kilowatts(f64::NAN)).build().validated().is_err());
    }

    #[test]
    fn test_distance_bounds() {
        let validated = |miles| {
            GeneratorParams::builder()
                .kw(Kilowatts(80.0))
                .miles_from_shop(Miles(miles))
                .build()
                .validated()
        };
        assert!(validated(dec!(100000)).is_ok());
        assert!(validated(dec!(-5)).is_err());
        assert!(validated(dec!(100000000000000000000)).is_err());
    }

    #[test]
    fn test_builder_defaults() {
        let params = GeneratorParams::builder().kw(Kilowatts(80.0)).build();
        assert_eq!(params.miles_from_shop, Miles::ZERO);
        assert!(params.cylinders.is_none());
        assert!(params.fluids.is_none());
    }
}
