mod bundle;
mod calculator;
mod generator;
mod lookup;
mod pricing;
mod rates;
mod selection;
mod service;

pub use self::{
    bundle::{Bundle, BundleResult},
    calculator::{ServiceCalculator, ServiceResult},
    generator::{Fluid, FluidSelection, GeneratorParams, InjectorType},
    rates::{KW_BUCKET_COUNT, RateTables},
    selection::ServiceSelection,
    service::ServiceCode,
};
