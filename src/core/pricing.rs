use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

use crate::{
    core::generator::Fluid,
    prelude::*,
    quantity::{cost::Cost, distance::MileageRate, time::HourlyRate, volume::GallonPrice},
    settings::Settings,
};

/// Scalar pricing factors applied on top of the rate tables.
#[must_use]
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Pricing {
    pub labor_rate: HourlyRate,

    /// Multiplier applied to marked-up parts, for example `1.2`.
    pub parts_markup: Decimal,

    /// Fraction of the combined parts total charged as freight, for example `0.05`.
    pub freight_percent: Decimal,

    pub mileage_rate: MileageRate,

    /// Year-over-year contract escalation, for example `1.05`.
    pub escalation_multiplier: Decimal,

    pub oil_price: GallonPrice,
    pub coolant_price: GallonPrice,
    pub analysis_fees: AnalysisFees,

    /// Sales tax on materials, `0` for tax-exempt customers.
    pub tax_rate: Decimal,
}

impl Pricing {
    pub const REFERENCE: Self = Self {
        labor_rate: HourlyRate(dec!(191)),
        parts_markup: dec!(1.2),
        freight_percent: dec!(0.05),
        mileage_rate: MileageRate(dec!(2.50)),
        escalation_multiplier: dec!(1.05),
        oil_price: GallonPrice(dec!(16.00)),
        coolant_price: GallonPrice(dec!(16.00)),
        analysis_fees: AnalysisFees::REFERENCE,
        tax_rate: Decimal::ZERO,
    };

    /// Replace every factor the settings specify, keeping the rest.
    pub fn with_settings(self, settings: &Settings) -> Self {
        Self {
            labor_rate: settings.labor_rate.unwrap_or(self.labor_rate),
            parts_markup: settings.parts_markup.unwrap_or(self.parts_markup),
            freight_percent: settings.freight_percent.unwrap_or(self.freight_percent),
            mileage_rate: settings.mileage_rate.unwrap_or(self.mileage_rate),
            escalation_multiplier: settings
                .escalation_multiplier
                .unwrap_or(self.escalation_multiplier),
            oil_price: settings.oil_price_per_gallon.unwrap_or(self.oil_price),
            coolant_price: settings.coolant_price_per_gallon.unwrap_or(self.coolant_price),
            analysis_fees: AnalysisFees {
                oil: settings.oil_analysis_cost.unwrap_or(self.analysis_fees.oil),
                coolant: settings.coolant_analysis_cost.unwrap_or(self.analysis_fees.coolant),
                fuel: settings.fuel_analysis_cost.unwrap_or(self.analysis_fees.fuel),
            },
            tax_rate: settings.tax_rate.unwrap_or(self.tax_rate),
        }
    }
}

impl Pricing {
    const MAX_AMOUNT: Decimal = dec!(1000000);
    const MAX_MULTIPLIER: Decimal = dec!(100);

    /// Reject negative factors and factors large enough to overflow a quote.
    pub fn validated(self) -> Result<Self> {
        for (name, value, max) in [
            ("labor rate", self.labor_rate.0, Self::MAX_AMOUNT),
            ("parts markup", self.parts_markup, Self::MAX_MULTIPLIER),
            ("freight percent", self.freight_percent, Decimal::ONE),
            ("mileage rate", self.mileage_rate.0, Self::MAX_AMOUNT),
            ("escalation multiplier", self.escalation_multiplier, Self::MAX_MULTIPLIER),
            ("oil price", self.oil_price.0, Self::MAX_AMOUNT),
            ("coolant price", self.coolant_price.0, Self::MAX_AMOUNT),
            ("oil analysis cost", self.analysis_fees.oil.0, Self::MAX_AMOUNT),
            ("coolant analysis cost", self.analysis_fees.coolant.0, Self::MAX_AMOUNT),
            ("fuel analysis cost", self.analysis_fees.fuel.0, Self::MAX_AMOUNT),
            ("tax rate", self.tax_rate, Decimal::ONE),
        ] {
            ensure!(
                !value.is_sign_negative() || value.is_zero(),
                "{name} must not be negative, got {value}",
            );
            ensure!(value <= max, "{name} must not exceed {max}, got {value}");
        }
        Ok(self)
    }
}

impl Default for Pricing {
    fn default() -> Self {
        Self::REFERENCE
    }
}

/// Laboratory fee per fluid sample.
#[must_use]
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
pub struct AnalysisFees {
    pub oil: Cost,
    pub coolant: Cost,
    pub fuel: Cost,
}

impl AnalysisFees {
    pub const REFERENCE: Self =
        Self { oil: Cost(dec!(16.55)), coolant: Cost(dec!(16.55)), fuel: Cost(dec!(60.00)) };

    pub const fn fee(self, fluid: Fluid) -> Cost {
        match fluid {
            Fluid::Oil => self.oil,
            Fluid::Coolant => self.coolant,
            Fluid::Fuel => self.fuel,
        }
    }
}
