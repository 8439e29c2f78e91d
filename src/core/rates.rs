//! Reference rate tables of the service pricing spreadsheet.

use std::{
    fmt::{Display, Formatter},
    ops::RangeInclusive,
};

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

use crate::{
    core::{
        generator::InjectorType,
        lookup::{LookupKey, RangeLookup},
        pricing::Pricing,
    },
    prelude::*,
    quantity::{cost::Cost, power::Kilowatts, time::Hours, volume::Gallons},
    settings::Settings,
};

pub const KW_BUCKET_COUNT: usize = 10;

/// Canonical power rating brackets in spreadsheet row order.
///
/// The spreadsheet leaves gaps between most brackets (31–34 kW, 151–154 kW, …) and shares
/// the 1500 kW edge between the last two.
const KW_BUCKETS: [&str; KW_BUCKET_COUNT] = [
    "2-14",
    "15-30",
    "35-150",
    "155-250",
    "255-400",
    "405-500",
    "505-670",
    "675-1050",
    "1055-1500",
    "1500-2050",
];

const SIZE_CATEGORIES: [&str; KW_BUCKET_COUNT] = [
    "Very Small Units",
    "Small Units",
    "Medium Units",
    "Large Units",
    "Very Large Units",
    "Extra Large Units",
    "Industrial Units",
    "Large Industrial",
    "Very Large Industrial",
    "Extra Large Industrial",
];

/// Resolved power rating bracket.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KwBucket {
    pub index: usize,

    /// Set when the rating is outside every bracket.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fallback: Option<BucketFallback>,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum BucketFallback {
    /// Below the first bracket, the first one is used.
    BelowRange,

    /// Between two brackets, the next higher one is used.
    Gap,

    /// Above the last bracket, the last one is used.
    AboveRange,
}

#[derive(Copy, Clone, Debug)]
pub struct InspectionRow {
    pub labor: Hours,
    pub mobilization: Hours,
}

#[derive(Copy, Clone, Debug)]
pub struct OilServiceRow {
    pub labor: Hours,
    pub mobilization: Hours,
    pub filter: Cost,
    pub oil: Gallons,

    /// Starting battery, shared with the battery replacement.
    pub battery: Cost,
}

#[derive(Copy, Clone, Debug)]
pub struct CoolantServiceRow {
    pub labor: Hours,
    pub mobilization: Hours,
    pub hoses_and_belts: Cost,
}

#[derive(Copy, Clone, Debug)]
pub struct LoadBankRow {
    pub labor: Hours,
    pub mobilization: Hours,

    /// Pass-through, never marked up.
    pub equipment_rental: Cost,
}

#[derive(Copy, Clone, Debug)]
pub struct TransferSwitchRow {
    pub labor: Hours,
    pub supplies: Cost,
}

/// Coarse kW tiers: the first tier whose limit is not below the rating, otherwise `above`.
#[derive(Clone, Debug)]
pub struct Tiered<T> {
    pub limits: Vec<(Kilowatts, T)>,
    pub above: T,
}

impl<T> Tiered<T> {
    pub fn get(&self, kw: Kilowatts) -> &T {
        self.limits.iter().find(|(limit, _)| kw <= *limit).map_or(&self.above, |(_, value)| value)
    }
}

/// Diesel tune-up, keyed by cylinder count and injector type.
#[derive(Clone, Debug)]
pub struct DieselTuneUp {
    /// Configurations keyed by `"{cylinders} {injector}"`.
    pub configurations: RangeLookup<TuneUpConfig>,

    /// Priced when the configuration is unknown.
    pub fallback: TuneUpConfig,

    /// Parts for a six-cylinder engine, scaled linearly by the cylinder count.
    pub pop_noz_parts: Cost,
    pub unit_inj_parts: Cost,
}

/// Diesel tune-up configuration.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct TuneUpConfig {
    pub cylinders: u32,
    pub injector: InjectorType,
    pub labor: Hours,
    pub is_fallback: bool,
}

impl TuneUpConfig {
    const fn new(cylinders: u32, injector: InjectorType, labor: Decimal) -> Self {
        Self { cylinders, injector, labor: Hours(labor), is_fallback: false }
    }
}

impl Display for TuneUpConfig {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.cylinders, self.injector)
    }
}

impl DieselTuneUp {
    fn try_new(
        configurations: impl IntoIterator<Item = TuneUpConfig>,
        fallback: (u32, InjectorType),
        pop_noz_parts: Cost,
        unit_inj_parts: Cost,
    ) -> Result<Self> {
        let configurations: Vec<TuneUpConfig> = configurations.into_iter().collect();
        let keys: Vec<String> = configurations.iter().map(ToString::to_string).collect();
        let configurations = RangeLookup::try_new(keys, configurations)?;
        let (cylinders, injector) = fallback;
        let fallback = configurations
            .find(format!("{cylinders} {injector}").as_str())
            .copied()
            .with_context(|| {
                format!("fallback configuration `{cylinders} {injector}` is missing")
            })?;
        Ok(Self {
            configurations,
            fallback: TuneUpConfig { is_fallback: true, ..fallback },
            pop_noz_parts,
            unit_inj_parts,
        })
    }

    /// Missing injector type is taken as pop-nozzle, and missing cylinder count or an unknown
    /// pair falls back to the reference configuration.
    pub fn resolve(&self, cylinders: Option<u32>, injector: Option<InjectorType>) -> TuneUpConfig {
        let injector = injector.unwrap_or(InjectorType::PopNoz);
        if let Some(cylinders) = cylinders
            && let Some(config) =
                self.configurations.find(format!("{cylinders} {injector}").as_str())
        {
            return *config;
        }
        warn!(
            ?cylinders,
            %injector,
            fallback = %self.fallback,
            "unknown diesel tune-up configuration, using the fallback",
        );
        self.fallback
    }

    /// Unmarked parts cost for the configuration.
    pub fn parts(&self, config: TuneUpConfig) -> Cost {
        let base = match config.injector {
            InjectorType::PopNoz => self.pop_noz_parts,
            InjectorType::UnitInj => self.unit_inj_parts,
        };
        base * Decimal::from(config.cylinders) / dec!(6)
    }
}

/// Gas tune-up, keyed by cylinder count only.
#[derive(Clone, Debug)]
pub struct GasTuneUp {
    pub labor: RangeLookup<Hours>,
    pub parts_per_cylinder: Cost,
    pub default_cylinders: u32,
}

impl GasTuneUp {
    /// Labor hours for the cylinder count, clamped to the first and last brackets.
    pub fn labor(&self, cylinders: u32) -> Hours {
        let (first_key, first) = self.labor.first();
        let is_below =
            matches!(first_key, LookupKey::Range(range) if f64::from(cylinders) < *range.start());
        let not_found = if is_below { first } else { self.labor.last().1 };
        if self.labor.position(cylinders).is_none() {
            warn!(
                cylinders,
                clamped = %not_found,
                "cylinder count is outside the gas tune-up table",
            );
        }
        *self.labor.find_or(cylinders, not_found)
    }
}

/// Immutable rate tables.
#[derive(Clone, Debug)]
pub struct RateTables {
    buckets: RangeLookup<usize>,

    pub inspection: [InspectionRow; KW_BUCKET_COUNT],
    pub oil_service: [OilServiceRow; KW_BUCKET_COUNT],
    pub coolant_service: [CoolantServiceRow; KW_BUCKET_COUNT],

    /// Coolant capacity relative to the oil capacity of the same bracket.
    pub coolant_to_oil_ratio: Decimal,

    /// Coolant condition test performed with every coolant service.
    pub coolant_sample_fee: Cost,

    /// Sample collection time of the fluid analysis.
    pub sample_collection: Hours,

    pub load_bank: [LoadBankRow; KW_BUCKET_COUNT],
    pub diesel_tune_up: DieselTuneUp,
    pub gas_tune_up: GasTuneUp,
    pub electrical_testing: [Hours; KW_BUCKET_COUNT],
    pub transfer_switch: Tiered<TransferSwitchRow>,
    pub thermal_imaging: Hours,
    pub battery_replacement: Tiered<Hours>,

    /// Travel and shop preparation for services without their own bracket column.
    pub default_mobilization: Hours,

    /// Reference pricing factors.
    pub pricing: Pricing,
}

impl RateTables {
    /// Build the reference tables, failing on malformed data.
    pub fn try_reference() -> Result<Self> {
        let buckets = RangeLookup::try_new(KW_BUCKETS, 0..KW_BUCKET_COUNT)
            .context("malformed kW bracket table")?;
        Self::validate_buckets(&buckets)?;

        let diesel_tune_up = DieselTuneUp::try_new(
            [
                TuneUpConfig::new(4, InjectorType::PopNoz, dec!(4)),
                TuneUpConfig::new(6, InjectorType::PopNoz, dec!(6)),
                TuneUpConfig::new(8, InjectorType::PopNoz, dec!(8)),
                TuneUpConfig::new(12, InjectorType::PopNoz, dec!(12)),
                TuneUpConfig::new(16, InjectorType::PopNoz, dec!(16)),
                TuneUpConfig::new(4, InjectorType::UnitInj, dec!(6)),
                TuneUpConfig::new(6, InjectorType::UnitInj, dec!(8)),
                TuneUpConfig::new(8, InjectorType::UnitInj, dec!(10)),
                TuneUpConfig::new(12, InjectorType::UnitInj, dec!(14)),
                TuneUpConfig::new(16, InjectorType::UnitInj, dec!(18)),
            ],
            (8, InjectorType::PopNoz),
            Cost(dec!(600)),
            Cost(dec!(1500)),
        )
        .context("malformed diesel tune-up table")?;

        let gas_tune_up = GasTuneUp {
            labor: RangeLookup::try_new(
                ["1-4", "5-6", "7-8", "9-12", "13-16"],
                [dec!(3), dec!(4), dec!(5), dec!(7), dec!(9)].map(Hours),
            )
            .context("malformed gas tune-up table")?,
            parts_per_cylinder: Cost(dec!(100)),
            default_cylinders: 8,
        };

        Ok(Self {
            buckets,
            inspection: INSPECTION,
            oil_service: OIL_SERVICE,
            coolant_service: COOLANT_SERVICE,
            coolant_to_oil_ratio: dec!(1.5),
            coolant_sample_fee: Cost(dec!(35.00)),
            sample_collection: Hours(dec!(0.25)),
            load_bank: LOAD_BANK,
            diesel_tune_up,
            gas_tune_up,
            electrical_testing: ELECTRICAL_TESTING,
            transfer_switch: Tiered {
                limits: vec![
                    (
                        Kilowatts(150.0),
                        TransferSwitchRow { labor: Hours(dec!(2)), supplies: Cost(dec!(75)) },
                    ),
                    (
                        Kilowatts(500.0),
                        TransferSwitchRow { labor: Hours(dec!(3)), supplies: Cost(dec!(125)) },
                    ),
                ],
                above: TransferSwitchRow { labor: Hours(dec!(4)), supplies: Cost(dec!(175)) },
            },
            thermal_imaging: Hours(dec!(1)),
            battery_replacement: Tiered {
                limits: vec![
                    (Kilowatts(150.0), Hours(dec!(1))),
                    (Kilowatts(500.0), Hours(dec!(1.5))),
                ],
                above: Hours(dec!(2)),
            },
            default_mobilization: Hours(dec!(2)),
            pricing: Pricing::REFERENCE,
        })
    }

    /// Apply the pricing overrides, keeping the table cells.
    pub fn with_settings(mut self, settings: &Settings) -> Result<Self> {
        self.pricing = self.pricing.with_settings(settings).validated()?;
        Ok(self)
    }

    /// Brackets must ascend, and neighbours may share an edge but never overlap further.
    fn validate_buckets(buckets: &RangeLookup<usize>) -> Result {
        let mut previous: Option<&RangeInclusive<f64>> = None;
        for key in buckets.keys() {
            let LookupKey::Range(range) = key else {
                bail!("kW bracket `{key}` is not a range");
            };
            if let Some(previous) = previous {
                ensure!(
                    range.start() >= previous.end(),
                    "kW bracket `{key}` overlaps or precedes `{}-{}`",
                    previous.start(),
                    previous.end(),
                );
            }
            previous = Some(range);
        }
        Ok(())
    }

    /// Resolve the power rating to a bracket.
    ///
    /// Ratings outside every bracket are not an error: they take the nearest bracket, or the
    /// next higher one when they fall into a gap.
    pub fn bucket(&self, kw: Kilowatts) -> KwBucket {
        if let Some(index) = self.buckets.find(kw.0) {
            return KwBucket { index: *index, fallback: None };
        }
        let next_higher = self
            .buckets
            .keys()
            .position(|key| matches!(key, LookupKey::Range(range) if kw.0 < *range.start()));
        let bucket = match next_higher {
            Some(0) => KwBucket { index: 0, fallback: Some(BucketFallback::BelowRange) },
            Some(index) => KwBucket { index, fallback: Some(BucketFallback::Gap) },
            None => {
                KwBucket { index: KW_BUCKET_COUNT - 1, fallback: Some(BucketFallback::AboveRange) }
            }
        };
        warn!(
            %kw,
            bracket = %self.bucket_label(bucket.index),
            fallback = ?bucket.fallback,
            "power rating is outside the brackets",
        );
        bucket
    }

    /// Bracket label such as `35-150`.
    pub fn bucket_label(&self, index: usize) -> String {
        self.buckets.get(index).map(|(key, _)| key.to_string()).unwrap_or_default()
    }

    pub const fn size_category(index: usize) -> &'static str {
        if index < KW_BUCKET_COUNT { SIZE_CATEGORIES[index] } else { "Standard" }
    }

    /// Oil capacity of the bracket.
    pub const fn oil_gallons(&self, bucket: KwBucket) -> Gallons {
        self.oil_service[bucket.index].oil
    }

    /// Coolant capacity of the bracket, derived from its oil capacity.
    pub fn coolant_gallons(&self, bucket: KwBucket) -> Gallons {
        self.oil_gallons(bucket) * self.coolant_to_oil_ratio
    }
}

const INSPECTION: [InspectionRow; KW_BUCKET_COUNT] = {
    const fn row(labor: Decimal) -> InspectionRow {
        InspectionRow { labor: Hours(labor), mobilization: Hours(dec!(2)) }
    }
    [
        row(dec!(1.0)),
        row(dec!(1.5)),
        row(dec!(2.0)),
        row(dec!(2.5)),
        row(dec!(3.0)),
        row(dec!(3.5)),
        row(dec!(4.0)),
        row(dec!(5.0)),
        row(dec!(6.0)),
        row(dec!(8.0)),
    ]
};

const OIL_SERVICE: [OilServiceRow; KW_BUCKET_COUNT] = {
    const fn row(labor: Decimal, filter: Decimal, oil: Decimal, battery: Decimal) -> OilServiceRow {
        OilServiceRow {
            labor: Hours(labor),
            mobilization: Hours(dec!(2)),
            filter: Cost(filter),
            oil: Gallons(oil),
            battery: Cost(battery),
        }
    }
    [
        row(dec!(1.0), dec!(45), dec!(1.5), dec!(150)),
        row(dec!(1.0), dec!(65), dec!(3.0), dec!(150)),
        row(dec!(2.0), dec!(95), dec!(5.0), dec!(225)),
        row(dec!(2.5), dec!(145), dec!(8.0), dec!(300)),
        row(dec!(3.0), dec!(195), dec!(12.0), dec!(300)),
        row(dec!(3.5), dec!(245), dec!(18.0), dec!(450)),
        row(dec!(4.0), dec!(345), dec!(30.0), dec!(450)),
        row(dec!(5.0), dec!(495), dec!(50.0), dec!(600)),
        row(dec!(6.0), dec!(695), dec!(60.0), dec!(900)),
        row(dec!(8.0), dec!(895), dec!(75.0), dec!(1200)),
    ]
};

const COOLANT_SERVICE: [CoolantServiceRow; KW_BUCKET_COUNT] = {
    const fn row(labor: Decimal, hoses_and_belts: Decimal) -> CoolantServiceRow {
        CoolantServiceRow {
            labor: Hours(labor),
            mobilization: Hours(dec!(2)),
            hoses_and_belts: Cost(hoses_and_belts),
        }
    }
    [
        row(dec!(1.0), dec!(75)),
        row(dec!(1.5), dec!(100)),
        row(dec!(2.0), dec!(150)),
        row(dec!(3.0), dec!(225)),
        row(dec!(4.0), dec!(300)),
        row(dec!(5.0), dec!(375)),
        row(dec!(6.0), dec!(450)),
        row(dec!(8.0), dec!(600)),
        row(dec!(10.0), dec!(800)),
        row(dec!(12.0), dec!(1000)),
    ]
};

const LOAD_BANK: [LoadBankRow; KW_BUCKET_COUNT] = {
    const fn row(labor: Decimal, equipment_rental: Decimal) -> LoadBankRow {
        LoadBankRow {
            labor: Hours(labor),
            mobilization: Hours(dec!(2)),
            equipment_rental: Cost(equipment_rental),
        }
    }
    [
        row(dec!(2.0), dec!(300)),
        row(dec!(2.0), dec!(350)),
        row(dec!(3.0), dec!(450)),
        row(dec!(3.0), dec!(650)),
        row(dec!(4.0), dec!(850)),
        row(dec!(4.0), dec!(1000)),
        row(dec!(5.0), dec!(1250)),
        row(dec!(6.0), dec!(1750)),
        row(dec!(7.0), dec!(2500)),
        row(dec!(8.0), dec!(3500)),
    ]
};

const ELECTRICAL_TESTING: [Hours; KW_BUCKET_COUNT] = [
    Hours(dec!(2.0)),
    Hours(dec!(2.0)),
    Hours(dec!(3.0)),
    Hours(dec!(3.0)),
    Hours(dec!(4.0)),
    Hours(dec!(4.0)),
    Hours(dec!(5.0)),
    Hours(dec!(6.0)),
    Hours(dec!(7.0)),
    Hours(dec!(8.0)),
];

#[cfg(test)]
mod tests {
    use super::*;

    fn tables() -> RateTables {
        RateTables::try_reference().unwrap()
    }

    const GAPS: [RangeInclusive<i32>; 7] =
        [31..=34, 151..=154, 251..=254, 401..=404, 501..=504, 671..=674, 1051..=1054];

    #[test]
    fn test_every_rating_in_range_has_a_bracket() {
        let tables = tables();
        for kw in 2..=2050 {
            let bucket = tables.bucket(Kilowatts(f64::from(kw)));
            if GAPS.iter().any(|gap| gap.contains(&kw)) {
                assert_eq!(bucket.fallback, Some(BucketFallback::Gap), "{kw} kW");
            } else {
                assert_eq!(bucket.fallback, None, "{kw} kW");
            }
        }
    }

    #[test]
    fn test_bracket_edges() {
        let tables = tables();
        assert_eq!(tables.bucket(Kilowatts(2.0)).index, 0);
        assert_eq!(tables.bucket(Kilowatts(14.0)).index, 0);
        assert_eq!(tables.bucket(Kilowatts(15.0)).index, 1);
        assert_eq!(tables.bucket(Kilowatts(80.0)).index, 2);
        assert_eq!(tables.bucket(Kilowatts(2050.0)).index, 9);
    }

    #[test]
    fn test_shared_edge_takes_the_first_bracket() {
        let tables = tables();
        assert_eq!(tables.bucket(Kilowatts(1500.0)), KwBucket { index: 8, fallback: None });
        assert_eq!(tables.bucket(Kilowatts(1500.5)), KwBucket { index: 9, fallback: None });
    }

    #[test]
    fn test_gap_takes_the_next_higher_bracket() {
        let tables = tables();
        assert_eq!(
            tables.bucket(Kilowatts(31.0)),
            KwBucket { index: 2, fallback: Some(BucketFallback::Gap) },
        );
        assert_eq!(
            tables.bucket(Kilowatts(30.5)),
            KwBucket { index: 2, fallback: Some(BucketFallback::Gap) },
        );
        assert_eq!(
            tables.bucket(Kilowatts(152.0)),
            KwBucket { index: 3, fallback: Some(BucketFallback::Gap) },
        );
    }

    #[test]
    fn test_out_of_range_takes_the_edge_brackets() {
        let tables = tables();
        assert_eq!(
            tables.bucket(Kilowatts(1.0)),
            KwBucket { index: 0, fallback: Some(BucketFallback::BelowRange) },
        );
        assert_eq!(
            tables.bucket(Kilowatts(2500.0)),
            KwBucket { index: 9, fallback: Some(BucketFallback::AboveRange) },
        );
    }

    #[test]
    fn test_brackets_ascend() {
        let tables = tables();
        let ranges: Vec<_> = tables
            .buckets
            .keys()
            .map(|key| match key {
                LookupKey::Range(range) => range.clone(),
                LookupKey::Exact(_) => panic!("not a range"),
            })
            .collect();
        assert_eq!(ranges.len(), KW_BUCKET_COUNT);
        for pair in ranges.windows(2) {
            assert!(pair[0].end() <= pair[1].start());
        }
    }

    #[test]
    fn test_overlapping_brackets_are_rejected() {
        let buckets = RangeLookup::try_new(["2-14", "10-30"], [0, 1]).unwrap();
        assert!(RateTables::validate_buckets(&buckets).is_err());
        let buckets = RangeLookup::try_new(["2-14", "exact"], [0, 1]).unwrap();
        assert!(RateTables::validate_buckets(&buckets).is_err());
    }

    #[test]
    fn test_labels() {
        let tables = tables();
        assert_eq!(tables.bucket_label(2), "35-150");
        assert_eq!(RateTables::size_category(2), "Medium Units");
        assert_eq!(RateTables::size_category(42), "Standard");
    }

    #[test]
    fn test_coolant_is_one_and_a_half_oil() {
        let tables = tables();
        for index in 0..KW_BUCKET_COUNT {
            let bucket = KwBucket { index, fallback: None };
            assert_eq!(tables.coolant_gallons(bucket).0, tables.oil_gallons(bucket).0 * dec!(1.5));
        }
        assert_eq!(tables.coolant_gallons(tables.bucket(Kilowatts(80.0))), Gallons(dec!(7.5)));
    }

    #[test]
    fn test_inspection_mobilization_is_constant() {
        assert!(tables().inspection.iter().all(|row| row.mobilization == Hours(dec!(2))));
    }

    #[test]
    fn test_tiers() {
        let tables = tables();
        assert_eq!(*tables.battery_replacement.get(Kilowatts(150.0)), Hours(dec!(1)));
        assert_eq!(*tables.battery_replacement.get(Kilowatts(151.0)), Hours(dec!(1.5)));
        assert_eq!(*tables.battery_replacement.get(Kilowatts(500.0)), Hours(dec!(1.5)));
        assert_eq!(*tables.battery_replacement.get(Kilowatts(501.0)), Hours(dec!(2)));
        assert_eq!(tables.transfer_switch.get(Kilowatts(80.0)).supplies, Cost(dec!(75)));
        assert_eq!(tables.transfer_switch.get(Kilowatts(2000.0)).supplies, Cost(dec!(175)));
    }

    #[test]
    fn test_diesel_tune_up_exact_pair() {
        let config = tables().diesel_tune_up.resolve(Some(12), Some(InjectorType::UnitInj));
        assert_eq!(
            config,
            TuneUpConfig {
                cylinders: 12,
                injector: InjectorType::UnitInj,
                labor: Hours(dec!(14)),
                is_fallback: false,
            },
        );
    }

    #[test]
    fn test_diesel_tune_up_fallback() {
        let tables = tables();
        let expected = TuneUpConfig {
            cylinders: 8,
            injector: InjectorType::PopNoz,
            labor: Hours(dec!(8)),
            is_fallback: true,
        };
        assert_eq!(tables.diesel_tune_up.resolve(Some(10), Some(InjectorType::UnitInj)), expected);
        assert_eq!(tables.diesel_tune_up.resolve(None, Some(InjectorType::UnitInj)), expected);
    }

    #[test]
    fn test_diesel_tune_up_missing_injector_is_pop_noz() {
        let config = tables().diesel_tune_up.resolve(Some(6), None);
        assert_eq!(config.injector, InjectorType::PopNoz);
        assert_eq!(config.labor, Hours(dec!(6)));
        assert!(!config.is_fallback);
    }

    #[test]
    fn test_diesel_tune_up_parts_scale_with_cylinders() {
        let tables = tables();
        let tune_up = &tables.diesel_tune_up;
        let parts = |cylinders, injector| {
            tune_up.parts(tune_up.resolve(Some(cylinders), Some(injector)))
        };
        assert_eq!(parts(6, InjectorType::PopNoz), Cost(dec!(600)));
        assert_eq!(parts(12, InjectorType::UnitInj), Cost(dec!(3000)));
        assert_eq!(parts(4, InjectorType::PopNoz), Cost(dec!(400)));
    }

    #[test]
    fn test_missing_fallback_configuration_is_rejected() {
        let tune_up = DieselTuneUp::try_new(
            [TuneUpConfig::new(4, InjectorType::PopNoz, dec!(4))],
            (8, InjectorType::PopNoz),
            Cost::ZERO,
            Cost::ZERO,
        );
        assert!(tune_up.is_err());
    }

    #[test]
    fn test_gas_tune_up_labor_clamps() {
        let tables = tables();
        assert_eq!(tables.gas_tune_up.labor(6), Hours(dec!(4)));
        assert_eq!(tables.gas_tune_up.labor(0), Hours(dec!(3)));
        assert_eq!(tables.gas_tune_up.labor(20), Hours(dec!(9)));
    }
}
