use std::{fmt::Debug, fs, path::Path};

use clap::Parser;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{
    prelude::*,
    quantity::{cost::Cost, distance::MileageRate, time::HourlyRate, volume::GallonPrice},
};

/// Pricing overrides.
///
/// Every field is optional: a missing value falls through to the next layer, and finally to the
/// reference pricing. The same shape is read from the command line, a settings file, and the
/// `settings` block of a quote request.
#[must_use]
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize, Parser)]
#[serde(default, rename_all = "camelCase")]
pub struct Settings {
    /// Labor rate in dollars per hour, also applied to travel time.
    #[clap(long = "labor-rate", env = "LABOR_RATE")]
    pub labor_rate: Option<HourlyRate>,

    /// Parts markup multiplier, for example `1.2`.
    #[clap(long = "parts-markup", env = "PARTS_MARKUP")]
    pub parts_markup: Option<Decimal>,

    /// Freight as a fraction of the parts total, for example `0.05`.
    #[clap(long = "freight-percent", env = "FREIGHT_PERCENT")]
    pub freight_percent: Option<Decimal>,

    /// Dollars per mile from the shop.
    #[clap(long = "mileage-rate", env = "MILEAGE_RATE")]
    pub mileage_rate: Option<MileageRate>,

    /// Yearly escalation multiplier, for example `1.05`.
    #[clap(long = "escalation-multiplier", env = "ESCALATION_MULTIPLIER")]
    pub escalation_multiplier: Option<Decimal>,

    #[clap(long = "oil-price-per-gallon", env = "OIL_PRICE_PER_GALLON")]
    pub oil_price_per_gallon: Option<GallonPrice>,

    #[clap(long = "coolant-price-per-gallon", env = "COOLANT_PRICE_PER_GALLON")]
    pub coolant_price_per_gallon: Option<GallonPrice>,

    #[clap(long = "oil-analysis-cost", env = "OIL_ANALYSIS_COST")]
    pub oil_analysis_cost: Option<Cost>,

    #[clap(long = "coolant-analysis-cost", env = "COOLANT_ANALYSIS_COST")]
    pub coolant_analysis_cost: Option<Cost>,

    #[clap(long = "fuel-analysis-cost", env = "FUEL_ANALYSIS_COST")]
    pub fuel_analysis_cost: Option<Cost>,

    /// Sales tax rate on materials, for example `0.0725`.
    #[clap(long = "tax-rate", env = "TAX_RATE")]
    pub tax_rate: Option<Decimal>,
}

impl Settings {
    #[instrument(name = "Reading the settings…")]
    pub fn read_from<P: AsRef<Path> + Debug>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read `{}`", path.display()))?;
        toml::from_str(&text).with_context(|| format!("failed to parse `{}`", path.display()))
    }

    /// Layer the overrides on top of these settings.
    pub fn merge(self, overrides: &Self) -> Self {
        Self {
            labor_rate: overrides.labor_rate.or(self.labor_rate),
            parts_markup: overrides.parts_markup.or(self.parts_markup),
            freight_percent: overrides.freight_percent.or(self.freight_percent),
            mileage_rate: overrides.mileage_rate.or(self.mileage_rate),
            escalation_multiplier: overrides.escalation_multiplier.or(self.escalation_multiplier),
            oil_price_per_gallon: overrides.oil_price_per_gallon.or(self.oil_price_per_gallon),
            coolant_price_per_gallon: overrides
                .coolant_price_per_gallon
                .or(self.coolant_price_per_gallon),
            oil_analysis_cost: overrides.oil_analysis_cost.or(self.oil_analysis_cost),
            coolant_analysis_cost: overrides.coolant_analysis_cost.or(self.coolant_analysis_cost),
            fuel_analysis_cost: overrides.fuel_analysis_cost.or(self.fuel_analysis_cost),
            tax_rate: overrides.tax_rate.or(self.tax_rate),
        }
    }
}
