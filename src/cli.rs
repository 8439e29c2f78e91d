use std::path::PathBuf;

use clap::{Parser, Subcommand};
use enumset::EnumSet;

use crate::{
    core::{Fluid, GeneratorParams, InjectorType, ServiceCode},
    prelude::*,
    quantity::{distance::Miles, frequency::Frequency, power::Kilowatts},
    settings::Settings,
};

#[derive(Parser)]
#[command(author, version, about, propagate_version = true)]
pub struct Args {
    #[clap(flatten)]
    pub pricing: PricingArgs,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Price every generator of a quote request.
    Quote(QuoteArgs),

    /// Price a single service for a single generator.
    Service(Box<ServiceArgs>),

    /// Print the reference rate tables.
    Tables(TablesArgs),
}

#[derive(Parser)]
pub struct PricingArgs {
    /// Pricing settings file in TOML.
    #[clap(long = "settings", env = "QUOTE_SETTINGS_PATH", global = true)]
    pub settings_path: Option<PathBuf>,

    #[clap(flatten)]
    pub overrides: Settings,
}

impl PricingArgs {
    /// Settings file, if any, overridden by the command line and the environment.
    pub fn settings(&self) -> Result<Settings> {
        let base = match &self.settings_path {
            Some(path) => Settings::read_from(path)?,
            None => Settings::default(),
        };
        Ok(base.merge(&self.overrides))
    }
}

#[derive(Parser)]
pub struct QuoteArgs {
    /// Quote request in JSON, or in TOML when the extension is `.toml`.
    pub path: PathBuf,

    /// Print the results as JSON instead of tables.
    #[clap(long)]
    pub json: bool,
}

#[derive(Parser)]
pub struct ServiceArgs {
    #[clap(long, short = 's')]
    pub service: ServiceCode,

    /// Power rating, for example `80`, `500 kW`, or `200 HP`.
    #[clap(long)]
    pub kw: Kilowatts,

    /// Annual frequency, the service default when omitted.
    #[clap(long)]
    pub frequency: Option<Frequency>,

    /// One-way distance from the shop.
    #[clap(long, default_value = "0")]
    pub miles: Miles,

    #[clap(long)]
    pub cylinders: Option<u32>,

    #[clap(long = "injector")]
    pub injector_type: Option<InjectorType>,

    /// Fluids to analyze, all when omitted.
    #[clap(long, value_delimiter = ',', num_args = 1..)]
    pub fluids: Option<Vec<Fluid>>,

    #[clap(long)]
    pub json: bool,
}

impl ServiceArgs {
    pub fn frequency(&self) -> Result<Frequency> {
        self.frequency.unwrap_or_else(|| self.service.default_frequency()).validated()
    }

    pub fn params(&self) -> Result<GeneratorParams> {
        GeneratorParams {
            kw: self.kw,
            cylinders: self.cylinders,
            injector_type: self.injector_type,
            miles_from_shop: self.miles,
            fluids: self.fluids.as_ref().map(|fluids| fluids.iter().copied().collect()),
        }
        .validated()
    }
}

#[derive(Parser)]
pub struct TablesArgs {
    /// Services to print, all when omitted.
    #[clap(long = "service", short = 's')]
    pub services: Vec<ServiceCode>,
}

impl TablesArgs {
    pub fn services(&self) -> EnumSet<ServiceCode> {
        if self.services.is_empty() {
            EnumSet::all()
        } else {
            self.services.iter().copied().collect()
        }
    }
}
