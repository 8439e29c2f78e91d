//! Quote requests: one or more generators with their selected services.

use std::{fmt::Debug, fs, path::Path};

use serde::Deserialize;
use serde_with::{DisplayFromStr, PickFirst, serde_as};

use crate::{
    core::{
        Bundle,
        BundleResult,
        FluidSelection,
        GeneratorParams,
        InjectorType,
        RateTables,
        ServiceCalculator,
        ServiceSelection,
    },
    prelude::*,
    quantity::{distance::Miles, power::Kilowatts},
    settings::Settings,
};

#[serde_as]
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratorRequest {
    /// Unit label for the quote table.
    #[serde(default)]
    pub name: Option<String>,

    /// Either a number of kilowatts or a rating such as `"500 kW"` or `"200 HP"`.
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    pub kw: Kilowatts,

    #[serde(default)]
    pub cylinders: Option<u32>,

    #[serde(default)]
    pub injector_type: Option<InjectorType>,

    #[serde(default)]
    pub miles_from_shop: Miles,

    pub service_selections: ServiceSelection,

    #[serde(default)]
    pub fluids: Option<FluidSelection>,

    /// Overrides for this generator only.
    #[serde(default)]
    pub settings: Settings,
}

impl GeneratorRequest {
    pub fn params(&self) -> Result<GeneratorParams> {
        GeneratorParams {
            kw: self.kw,
            cylinders: self.cylinders,
            injector_type: self.injector_type,
            miles_from_shop: self.miles_from_shop,
            fluids: self.fluids,
        }
        .validated()
    }

    pub fn label(&self, index: usize) -> String {
        self.name.clone().unwrap_or_else(|| format!("#{}", index + 1))
    }
}

/// Either a bare list of generators or a quote with shared settings.
#[derive(Clone, Debug, Deserialize)]
#[serde(untagged)]
pub enum QuoteRequest {
    Generators(Vec<GeneratorRequest>),

    Quote {
        #[serde(default)]
        settings: Settings,

        generators: Vec<GeneratorRequest>,
    },
}

impl QuoteRequest {
    /// Read a TOML request when the extension says so, and JSON otherwise.
    #[instrument(name = "Reading the quote…")]
    pub fn read_from<P: AsRef<Path> + Debug>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read `{}`", path.display()))?;
        let is_toml =
            path.extension().is_some_and(|extension| extension.eq_ignore_ascii_case("toml"));
        let request = if is_toml {
            toml::from_str(&text).with_context(|| format!("failed to parse `{}`", path.display()))?
        } else {
            serde_json::from_str(&text)
                .with_context(|| format!("failed to parse `{}`", path.display()))?
        };
        Ok(request)
    }

    pub fn settings(&self) -> Option<&Settings> {
        match self {
            Self::Generators(_) => None,
            Self::Quote { settings, .. } => Some(settings),
        }
    }

    pub fn generators(&self) -> &[GeneratorRequest] {
        match self {
            Self::Generators(generators) | Self::Quote { generators, .. } => generators,
        }
    }

    /// Price every generator in order.
    ///
    /// Per-generator settings take precedence over the quote settings, which in turn take
    /// precedence over the pricing of the tables.
    #[instrument(
        skip_all,
        name = "Pricing the quote…",
        fields(n_generators = self.generators().len()),
    )]
    pub fn price(&self, tables: &RateTables) -> Result<Vec<PricedGenerator>> {
        let quote_settings = self.settings().cloned().unwrap_or_default();
        self.generators()
            .iter()
            .enumerate()
            .map(|(index, generator)| {
                let label = generator.label(index);
                let params =
                    generator.params().with_context(|| format!("invalid generator {label}"))?;
                let selection = generator
                    .service_selections
                    .validated()
                    .with_context(|| format!("invalid services of generator {label}"))?;
                let pricing = tables
                    .pricing
                    .with_settings(&quote_settings.clone().merge(&generator.settings))
                    .validated()
                    .with_context(|| format!("invalid settings of generator {label}"))?;
                let bundle = Bundle::builder()
                    .calculator(ServiceCalculator::new(tables, pricing))
                    .params(&params)
                    .selection(selection)
                    .aggregate();
                Ok(PricedGenerator { label, kw: generator.kw, bundle })
            })
            .collect()
    }
}

#[must_use]
#[derive(Clone, Debug, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PricedGenerator {
    pub label: String,
    pub kw: Kilowatts,

    #[serde(flatten)]
    pub bundle: BundleResult,
}
