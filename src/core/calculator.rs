use rust_decimal::Decimal;
use serde::Serialize;

use crate::{
    core::{
        generator::{Fluid, GeneratorParams},
        pricing::Pricing,
        rates::{BucketFallback, KwBucket, RateTables},
        service::ServiceCode,
    },
    prelude::*,
    quantity::{cost::Cost, frequency::Frequency, time::Hours, volume::Gallons},
};

/// Single-visit cost components, unrounded.
#[must_use]
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Breakdown {
    pub labor_hours: Hours,
    pub mobilization_hours: Hours,
    pub labor_cost: Cost,

    /// Parts, marked up where the service marks them up.
    pub parts_cost: Cost,

    /// Fluids, supplies and laboratory fees.
    pub consumables_cost: Cost,

    pub travel_cost: Cost,
    pub mileage_cost: Cost,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub bracket: Option<Bracket>,

    /// Oil or coolant volume for the fluid services.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fluid_gallons: Option<Gallons>,

    /// Resolved tune-up configuration, for example `8 PopNoz`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub configuration: Option<String>,

    /// Set when the configuration was not found and a fallback was priced instead.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub is_fallback_configuration: bool,
}

impl Breakdown {
    pub fn total(&self) -> Cost {
        self.labor_cost
            + self.parts_cost
            + self.consumables_cost
            + self.travel_cost
            + self.mileage_cost
    }
}

/// kW bracket the visit was priced from.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Bracket {
    pub label: String,
    pub size_category: &'static str,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub fallback: Option<BucketFallback>,
}

/// Annualized cost of one service for one generator.
#[must_use]
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceResult {
    pub code: ServiceCode,
    pub frequency: Frequency,
    pub labor_hours: Hours,
    pub labor_cost: Cost,
    pub parts_cost: Cost,
    pub consumables_cost: Cost,
    pub travel_cost: Cost,
    pub mileage_cost: Cost,
    pub subtotal: Cost,
    pub breakdown: Breakdown,
}

impl ServiceResult {
    fn annualize(code: ServiceCode, frequency: Frequency, breakdown: Breakdown) -> Self {
        let labor_cost = breakdown.labor_cost * frequency;
        let parts_cost = breakdown.parts_cost * frequency;
        let consumables_cost = breakdown.consumables_cost * frequency;
        let travel_cost = breakdown.travel_cost * frequency;
        let mileage_cost = breakdown.mileage_cost * frequency;
        Self {
            code,
            frequency,
            labor_hours: breakdown.labor_hours * frequency,
            labor_cost,
            parts_cost,
            consumables_cost,
            travel_cost,
            mileage_cost,
            subtotal: breakdown.total() * frequency,
            breakdown,
        }
    }

    /// Parts and consumables together, the base of freight and tax.
    pub fn materials_cost(&self) -> Cost {
        self.parts_cost + self.consumables_cost
    }
}

/// Prices individual services against the rate tables.
#[derive(Copy, Clone)]
pub struct ServiceCalculator<'a> {
    tables: &'a RateTables,
    pricing: Pricing,
}

impl<'a> ServiceCalculator<'a> {
    pub const fn new(tables: &'a RateTables, pricing: Pricing) -> Self {
        Self { tables, pricing }
    }

    pub const fn pricing(&self) -> &Pricing {
        &self.pricing
    }

    /// Price the service and scale it by the annual frequency.
    #[instrument(skip_all, fields(%code, %frequency, kw = %params.kw))]
    pub fn calculate(
        &self,
        code: ServiceCode,
        params: &GeneratorParams,
        frequency: Frequency,
    ) -> ServiceResult {
        let breakdown = match code {
            ServiceCode::A => self.inspection(params),
            ServiceCode::B => self.oil_service(params),
            ServiceCode::C => self.coolant_service(params),
            ServiceCode::D => self.fluid_analysis(params),
            ServiceCode::E => self.load_bank(params),
            ServiceCode::F => self.diesel_tune_up(params),
            ServiceCode::G => self.gas_tune_up(params),
            ServiceCode::H => self.electrical_testing(params),
            ServiceCode::I => self.transfer_switch(params),
            ServiceCode::J => self.thermal_imaging(params),
            ServiceCode::K => self.battery_replacement(params),
        };
        let result = ServiceResult::annualize(code, frequency, breakdown);
        debug!(subtotal = %result.subtotal, "priced");
        result
    }

    /// On-site visit: labor, mobilization at the labor rate, and mileage from the shop.
    fn visit(
        &self,
        params: &GeneratorParams,
        labor_hours: Hours,
        mobilization_hours: Hours,
    ) -> Breakdown {
        Breakdown {
            labor_hours,
            mobilization_hours,
            labor_cost: labor_hours * self.pricing.labor_rate,
            travel_cost: mobilization_hours * self.pricing.labor_rate,
            mileage_cost: params.miles_from_shop * self.pricing.mileage_rate,
            ..Breakdown::default()
        }
    }

    fn marked_up(&self, cost: Cost) -> Cost {
        cost * self.pricing.parts_markup
    }

    fn bucket(&self, params: &GeneratorParams) -> (KwBucket, Bracket) {
        let bucket = self.tables.bucket(params.kw);
        let bracket = Bracket {
            label: self.tables.bucket_label(bucket.index),
            size_category: RateTables::size_category(bucket.index),
            fallback: bucket.fallback,
        };
        (bucket, bracket)
    }

    fn inspection(&self, params: &GeneratorParams) -> Breakdown {
        let (bucket, bracket) = self.bucket(params);
        let row = self.tables.inspection[bucket.index];
        Breakdown { bracket: Some(bracket), ..self.visit(params, row.labor, row.mobilization) }
    }

    fn oil_service(&self, params: &GeneratorParams) -> Breakdown {
        let (bucket, bracket) = self.bucket(params);
        let row = self.tables.oil_service[bucket.index];
        Breakdown {
            parts_cost: self.marked_up(row.filter),
            consumables_cost: self.marked_up(row.oil * self.pricing.oil_price),
            fluid_gallons: Some(row.oil),
            bracket: Some(bracket),
            ..self.visit(params, row.labor, row.mobilization)
        }
    }

    fn coolant_service(&self, params: &GeneratorParams) -> Breakdown {
        let (bucket, bracket) = self.bucket(params);
        let row = self.tables.coolant_service[bucket.index];
        let coolant = self.tables.coolant_gallons(bucket);
        Breakdown {
            parts_cost: self.marked_up(row.hoses_and_belts),
            consumables_cost: coolant * self.pricing.coolant_price + self.tables.coolant_sample_fee,
            fluid_gallons: Some(coolant),
            bracket: Some(bracket),
            ..self.visit(params, row.labor, row.mobilization)
        }
    }

    /// Samples are collected during another visit, so there is no mobilization or mileage.
    fn fluid_analysis(&self, params: &GeneratorParams) -> Breakdown {
        let fluids = params.fluids.unwrap_or_default();
        let fees = [Fluid::Oil, Fluid::Coolant, Fluid::Fuel]
            .into_iter()
            .filter(|fluid| fluids.contains(*fluid))
            .map(|fluid| self.pricing.analysis_fees.fee(fluid))
            .sum::<Cost>();
        let labor_hours = self.tables.sample_collection;
        Breakdown {
            labor_hours,
            labor_cost: labor_hours * self.pricing.labor_rate,
            consumables_cost: fees,
            ..Breakdown::default()
        }
    }

    /// Equipment rental is passed through without markup.
    fn load_bank(&self, params: &GeneratorParams) -> Breakdown {
        let (bucket, bracket) = self.bucket(params);
        let row = self.tables.load_bank[bucket.index];
        Breakdown {
            parts_cost: row.equipment_rental,
            bracket: Some(bracket),
            ..self.visit(params, row.labor, row.mobilization)
        }
    }

    fn diesel_tune_up(&self, params: &GeneratorParams) -> Breakdown {
        let tune_up = &self.tables.diesel_tune_up;
        let config = tune_up.resolve(params.cylinders, params.injector_type);
        Breakdown {
            parts_cost: self.marked_up(tune_up.parts(config)),
            configuration: Some(config.to_string()),
            is_fallback_configuration: config.is_fallback,
            ..self.visit(params, config.labor, self.tables.default_mobilization)
        }
    }

    fn gas_tune_up(&self, params: &GeneratorParams) -> Breakdown {
        let tune_up = &self.tables.gas_tune_up;
        let cylinders = params.cylinders.unwrap_or_else(|| {
            warn!(
                cylinders = tune_up.default_cylinders,
                "cylinder count is missing, using the default",
            );
            tune_up.default_cylinders
        });
        Breakdown {
            parts_cost: self.marked_up(tune_up.parts_per_cylinder * Decimal::from(cylinders)),
            configuration: Some(format!("{cylinders} cylinders")),
            is_fallback_configuration: params.cylinders.is_none(),
            ..self.visit(params, tune_up.labor(cylinders), self.tables.default_mobilization)
        }
    }

    fn electrical_testing(&self, params: &GeneratorParams) -> Breakdown {
        let (bucket, bracket) = self.bucket(params);
        let labor_hours = self.tables.electrical_testing[bucket.index];
        Breakdown {
            bracket: Some(bracket),
            ..self.visit(params, labor_hours, self.tables.default_mobilization)
        }
    }

    /// Supplies are consumables and not marked up.
    fn transfer_switch(&self, params: &GeneratorParams) -> Breakdown {
        let row = self.tables.transfer_switch.get(params.kw);
        Breakdown {
            consumables_cost: row.supplies,
            ..self.visit(params, row.labor, self.tables.default_mobilization)
        }
    }

    fn thermal_imaging(&self, params: &GeneratorParams) -> Breakdown {
        self.visit(params, self.tables.thermal_imaging, self.tables.default_mobilization)
    }

    fn battery_replacement(&self, params: &GeneratorParams) -> Breakdown {
        let (bucket, bracket) = self.bucket(params);
        let labor_hours = *self.tables.battery_replacement.get(params.kw);
        Breakdown {
            parts_cost: self.marked_up(self.tables.oil_service[bucket.index].battery),
            bracket: Some(bracket),
            ..self.visit(params, labor_hours, self.tables.default_mobilization)
        }
    }
}
