use bon::Builder;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::{
    core::{
        calculator::{ServiceCalculator, ServiceResult},
        generator::GeneratorParams,
        selection::ServiceSelection,
    },
    prelude::*,
    quantity::cost::Cost,
};

/// Combines the selected services of one generator.
#[derive(Builder)]
#[builder(finish_fn(vis = ""))]
pub struct Bundle<'a> {
    calculator: ServiceCalculator<'a>,
    params: &'a GeneratorParams,
    selection: &'a ServiceSelection,
}

impl<S: bundle_builder::IsComplete> BundleBuilder<'_, S> {
    pub fn aggregate(self) -> BundleResult {
        self.build().aggregate()
    }
}

impl Bundle<'_> {
    #[instrument(skip_all, name = "Aggregating…", fields(kw = %self.params.kw))]
    fn aggregate(self) -> BundleResult {
        let services: Vec<ServiceResult> = self
            .selection
            .included()
            .map(|(code, frequency)| self.calculator.calculate(code, self.params, frequency))
            .collect();

        let pricing = self.calculator.pricing();
        let labor_total =
            services.iter().map(|service| service.labor_cost).sum::<Cost>().round_to_cents();
        let parts_total =
            services.iter().map(ServiceResult::materials_cost).sum::<Cost>().round_to_cents();
        let travel_total =
            services.iter().map(|service| service.travel_cost).sum::<Cost>().round_to_cents();
        let mileage_total =
            services.iter().map(|service| service.mileage_cost).sum::<Cost>().round_to_cents();
        let freight_total = (parts_total * pricing.freight_percent).round_to_cents();
        let subtotal = labor_total + parts_total + travel_total + mileage_total + freight_total;
        let tax = ((parts_total + freight_total) * pricing.tax_rate).round_to_cents();
        let total = subtotal + tax;
        let projections = Projections::from_total(total, pricing.escalation_multiplier);

        info!(n_services = services.len(), %total, year_1 = %projections.year1, "aggregated");
        BundleResult {
            services,
            labor_total,
            parts_total,
            travel_total,
            mileage_total,
            freight_total,
            subtotal,
            tax,
            total,
            projections,
        }
    }
}

/// Annual totals of one generator, rounded to cents.
#[must_use]
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BundleResult {
    pub services: Vec<ServiceResult>,
    pub labor_total: Cost,

    /// Parts and consumables.
    pub parts_total: Cost,

    pub travel_total: Cost,
    pub mileage_total: Cost,
    pub freight_total: Cost,
    pub subtotal: Cost,

    /// Sales tax on materials.
    pub tax: Cost,

    pub total: Cost,
    pub projections: Projections,
}

/// Contract value over three years, in whole dollars.
#[must_use]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Projections {
    pub year1: Cost,
    pub year2: Cost,
    pub year3: Cost,
    pub three_year_total: Cost,
}

impl Projections {
    /// Each year escalates the previous rounded year, so the rounding compounds.
    pub fn from_total(total: Cost, escalation_multiplier: Decimal) -> Self {
        let year1 = total.round_to_dollars();
        let year2 = (year1 * escalation_multiplier).round_to_dollars();
        let year3 = (year2 * escalation_multiplier).round_to_dollars();
        Self { year1, year2, year3, three_year_total: year1 + year2 + year3 }
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;
    use crate::{
        core::{rates::RateTables, service::ServiceCode},
        quantity::{distance::Miles, frequency::Frequency, power::Kilowatts},
        settings::Settings,
    };

    fn reference_selection() -> ServiceSelection {
        [
            (ServiceCode::A, Frequency(dec!(4))),
            (ServiceCode::B, Frequency(dec!(1))),
            (ServiceCode::C, Frequency(dec!(1))),
            (ServiceCode::D, Frequency(dec!(1))),
            (ServiceCode::E, Frequency(dec!(1))),
        ]
        .into_iter()
        .collect()
    }

    fn reference_params() -> GeneratorParams {
        GeneratorParams::builder().kw(Kilowatts(80.0)).miles_from_shop(Miles(dec!(120))).build()
    }

    #[test]
    fn test_reference_bundle() {
        let tables = RateTables::try_reference().unwrap();
        let bundle = Bundle::builder()
            .calculator(ServiceCalculator::new(&tables, tables.pricing))
            .params(&reference_params())
            .selection(&reference_selection())
            .aggregate();

        let subtotals: Vec<_> =
            bundle.services.iter().map(|service| (service.code, service.subtotal)).collect();
        assert_eq!(
            subtotals,
            [
                (ServiceCode::A, Cost(dec!(4256))),
                (ServiceCode::B, Cost(dec!(1274))),
                (ServiceCode::C, Cost(dec!(1399))),
                (ServiceCode::D, Cost(dec!(140.85))),
                (ServiceCode::E, Cost(dec!(1705))),
            ],
        );
        assert_eq!(bundle.labor_total, Cost(dec!(2912.75)));
        assert_eq!(bundle.parts_total, Cost(dec!(1088.10)));
        assert_eq!(bundle.travel_total, Cost(dec!(2674.00)));
        assert_eq!(bundle.mileage_total, Cost(dec!(2100.00)));
        assert_eq!(bundle.freight_total, Cost(dec!(54.41)));
        assert_eq!(bundle.subtotal, Cost(dec!(8829.26)));
        assert_eq!(bundle.tax, Cost::ZERO);
        assert_eq!(bundle.total, Cost(dec!(8829.26)));
        assert_eq!(
            bundle.projections,
            Projections {
                year1: Cost(dec!(8829)),
                year2: Cost(dec!(9270)),
                year3: Cost(dec!(9734)),
                three_year_total: Cost(dec!(27833)),
            },
        );
    }

    #[test]
    fn test_escalation_compounds_rounded_years() {
        assert_eq!(
            Projections::from_total(Cost(dec!(12345.678)), dec!(1.05)),
            Projections {
                year1: Cost(dec!(12346)),
                year2: Cost(dec!(12963)),
                year3: Cost(dec!(13611)),
                three_year_total: Cost(dec!(38920)),
            },
        );
    }

    #[test]
    fn test_empty_selection() {
        let tables = RateTables::try_reference().unwrap();
        let bundle = Bundle::builder()
            .calculator(ServiceCalculator::new(&tables, tables.pricing))
            .params(&reference_params())
            .selection(&ServiceSelection::default())
            .aggregate();
        assert_eq!(bundle, BundleResult::default());
    }

    #[test]
    fn test_zero_frequencies() {
        let tables = RateTables::try_reference().unwrap();
        let selection: ServiceSelection =
            [(ServiceCode::A, Frequency::ZERO), (ServiceCode::K, Frequency::ZERO)]
                .into_iter()
                .collect();
        let bundle = Bundle::builder()
            .calculator(ServiceCalculator::new(&tables, tables.pricing))
            .params(&reference_params())
            .selection(&selection)
            .aggregate();
        assert!(bundle.services.is_empty());
        assert_eq!(bundle.total, Cost::ZERO);
        assert_eq!(bundle.projections.three_year_total, Cost::ZERO);
    }

    #[test]
    fn test_tax_applies_to_materials_only() {
        let tables = RateTables::try_reference().unwrap();
        let pricing = tables
            .pricing
            .with_settings(&Settings { tax_rate: Some(dec!(0.1)), ..Settings::default() });
        let bundle = Bundle::builder()
            .calculator(ServiceCalculator::new(&tables, pricing))
            .params(&reference_params())
            .selection(&reference_selection())
            .aggregate();

        // (1088.10 + 54.41) × 0.1 = 114.251
        assert_eq!(bundle.tax, Cost(dec!(114.25)));
        assert_eq!(bundle.subtotal, Cost(dec!(8829.26)));
        assert_eq!(bundle.total, Cost(dec!(8943.51)));
    }
}
