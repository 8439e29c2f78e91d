mod cli;
mod core;
mod prelude;
mod quantity;
mod request;
mod settings;
mod tables;

use clap::{Parser, crate_version};

use crate::{
    cli::{Args, Command, QuoteArgs, ServiceArgs, TablesArgs},
    core::{RateTables, ServiceCalculator, ServiceCode},
    prelude::*,
    request::QuoteRequest,
    tables::{
        build_brackets_table,
        build_flat_rates_table,
        build_pricing_table,
        build_quote_table,
        build_services_table,
        build_totals_table,
        build_tune_ups_table,
    },
};

fn main() -> Result {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt().without_time().compact().with_writer(std::io::stderr).init();
    debug!(version = crate_version!(), "starting…");

    let args = Args::parse();
    let tables = RateTables::try_reference()?
        .with_settings(&args.pricing.settings()?)
        .context("invalid pricing settings")?;

    match args.command {
        Command::Quote(args) => quote(&args, &tables)?,
        Command::Service(args) => service(&args, &tables)?,
        Command::Tables(args) => print_tables(&args, &tables),
    }

    Ok(())
}

fn quote(args: &QuoteArgs, tables: &RateTables) -> Result {
    let priced = QuoteRequest::read_from(&args.path)?.price(tables)?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&priced)?);
        return Ok(());
    }
    for generator in &priced {
        println!("{} ({})", generator.label, generator.kw);
        println!("{}", build_services_table(&generator.bundle.services));
        println!("{}", build_totals_table(&generator.bundle));
    }
    println!("{}", build_quote_table(&priced));
    Ok(())
}

fn service(args: &ServiceArgs, tables: &RateTables) -> Result {
    let result = ServiceCalculator::new(tables, tables.pricing).calculate(
        args.service,
        &args.params()?,
        args.frequency()?,
    );
    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("{}", build_services_table(std::slice::from_ref(&result)));
    }
    Ok(())
}

fn print_tables(args: &TablesArgs, tables: &RateTables) {
    let services = args.services();
    println!("{}", build_pricing_table(tables));
    println!("{}", build_brackets_table(tables, services));
    if services.contains(ServiceCode::F) || services.contains(ServiceCode::G) {
        println!("{}", build_tune_ups_table(tables, services));
    }
    println!("{}", build_flat_rates_table(tables, services));
}
