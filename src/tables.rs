use std::fmt::Display;

use comfy_table::{Attribute, Cell, CellAlignment, Color, Table, modifiers, presets};
use enumset::EnumSet;
use itertools::Itertools;
use rust_decimal::Decimal;

use crate::{
    core::{BundleResult, KW_BUCKET_COUNT, RateTables, ServiceCode, ServiceResult},
    quantity::cost::Cost,
    request::PricedGenerator,
};

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_FULL_CONDENSED)
        .apply_modifier(modifiers::UTF8_ROUND_CORNERS)
        .enforce_styling();
    table
}

fn cost_cell(cost: Cost) -> Cell {
    let cell = Cell::new(cost).set_alignment(CellAlignment::Right);
    if cost.is_zero() { cell.add_attribute(Attribute::Dim) } else { cell }
}

fn right<T: Display>(value: T) -> Cell {
    Cell::new(value).set_alignment(CellAlignment::Right)
}

fn percent(fraction: Decimal) -> String {
    format!("{}%", (fraction * Decimal::ONE_HUNDRED).normalize())
}

/// Annualized services of one generator.
pub fn build_services_table(services: &[ServiceResult]) -> Table {
    let mut table = new_table();
    table.set_header(vec![
        "Code",
        "Service",
        "Frequency",
        "Hours",
        "Labor",
        "Parts",
        "Consumables",
        "Travel",
        "Mileage",
        "Subtotal",
    ]);
    for service in services {
        let mut title = Cell::new(service.code.title());
        if service.breakdown.is_fallback_configuration
            || service.breakdown.bracket.as_ref().is_some_and(|bracket| bracket.fallback.is_some())
        {
            title = title.fg(Color::DarkYellow);
        }
        table.add_row(vec![
            Cell::new(service.code).add_attribute(Attribute::Bold),
            title,
            right(service.frequency),
            right(service.labor_hours),
            cost_cell(service.labor_cost),
            cost_cell(service.parts_cost),
            cost_cell(service.consumables_cost),
            cost_cell(service.travel_cost),
            cost_cell(service.mileage_cost),
            cost_cell(service.subtotal).add_attribute(Attribute::Bold),
        ]);
    }
    table
}

/// Bundle totals and the escalation projections.
pub fn build_totals_table(bundle: &BundleResult) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Total", "Amount"]);
    for (title, amount) in [
        ("Labor", bundle.labor_total),
        ("Parts & consumables", bundle.parts_total),
        ("Travel", bundle.travel_total),
        ("Mileage", bundle.mileage_total),
        ("Freight", bundle.freight_total),
        ("Subtotal", bundle.subtotal),
        ("Tax", bundle.tax),
    ] {
        table.add_row(vec![Cell::new(title), cost_cell(amount)]);
    }
    table.add_row(vec![
        Cell::new("Annual total").add_attribute(Attribute::Bold),
        cost_cell(bundle.total).add_attribute(Attribute::Bold).fg(Color::Green),
    ]);
    for (title, amount) in [
        ("Year 1", bundle.projections.year1),
        ("Year 2", bundle.projections.year2),
        ("Year 3", bundle.projections.year3),
    ] {
        table.add_row(vec![Cell::new(title).add_attribute(Attribute::Dim), cost_cell(amount)]);
    }
    table.add_row(vec![
        Cell::new("Three-year total").add_attribute(Attribute::Bold),
        cost_cell(bundle.projections.three_year_total).add_attribute(Attribute::Bold),
    ]);
    table
}

/// One row per generator followed by the fleet summary.
pub fn build_quote_table(generators: &[PricedGenerator]) -> Table {
    let mut table = new_table();
    table.set_header(vec![
        "Unit", "Rating", "Services", "Subtotal", "Tax", "Total", "Year 1", "Year 2", "Year 3",
        "3 years",
    ]);
    for generator in generators {
        let bundle = &generator.bundle;
        table.add_row(vec![
            Cell::new(&generator.label).add_attribute(Attribute::Bold),
            right(generator.kw),
            Cell::new(bundle.services.iter().map(|service| service.code).join(", ")),
            cost_cell(bundle.subtotal),
            cost_cell(bundle.tax),
            cost_cell(bundle.total).fg(Color::Green),
            cost_cell(bundle.projections.year1),
            cost_cell(bundle.projections.year2),
            cost_cell(bundle.projections.year3),
            cost_cell(bundle.projections.three_year_total),
        ]);
    }
    let sum = |amount: fn(&BundleResult) -> Cost| -> Cost {
        generators.iter().map(|generator| amount(&generator.bundle)).sum()
    };
    table.add_row(vec![
        Cell::new("Fleet").add_attribute(Attribute::Bold),
        right(generators.len()).add_attribute(Attribute::Dim),
        Cell::new(""),
        cost_cell(sum(|bundle| bundle.subtotal)),
        cost_cell(sum(|bundle| bundle.tax)),
        cost_cell(sum(|bundle| bundle.total)).add_attribute(Attribute::Bold).fg(Color::Green),
        cost_cell(sum(|bundle| bundle.projections.year1)),
        cost_cell(sum(|bundle| bundle.projections.year2)),
        cost_cell(sum(|bundle| bundle.projections.year3)),
        cost_cell(sum(|bundle| bundle.projections.three_year_total)).add_attribute(Attribute::Bold),
    ]);
    table
}

/// kW-bracketed rates of the selected services.
pub fn build_brackets_table(tables: &RateTables, services: EnumSet<ServiceCode>) -> Table {
    let mut table = new_table();
    let mut header = vec!["Bracket", "Size"];
    if services.contains(ServiceCode::A) {
        header.push("A hours");
    }
    if services.contains(ServiceCode::B) {
        header.extend(["B hours", "Filter", "Oil"]);
    }
    if services.contains(ServiceCode::C) {
        header.extend(["C hours", "Hoses & belts", "Coolant"]);
    }
    if services.contains(ServiceCode::E) {
        header.extend(["E hours", "Rental"]);
    }
    if services.contains(ServiceCode::H) {
        header.push("H hours");
    }
    if services.contains(ServiceCode::K) {
        header.push("Battery");
    }
    table.set_header(header);

    for index in 0..KW_BUCKET_COUNT {
        let mut row = vec![
            Cell::new(tables.bucket_label(index)).add_attribute(Attribute::Bold),
            Cell::new(RateTables::size_category(index)).add_attribute(Attribute::Dim),
        ];
        let oil_service = tables.oil_service[index];
        if services.contains(ServiceCode::A) {
            row.push(right(tables.inspection[index].labor));
        }
        if services.contains(ServiceCode::B) {
            row.extend([
                right(oil_service.labor),
                cost_cell(oil_service.filter),
                right(oil_service.oil),
            ]);
        }
        if services.contains(ServiceCode::C) {
            let coolant_service = tables.coolant_service[index];
            row.extend([
                right(coolant_service.labor),
                cost_cell(coolant_service.hoses_and_belts),
                right(oil_service.oil * tables.coolant_to_oil_ratio),
            ]);
        }
        if services.contains(ServiceCode::E) {
            let load_bank = tables.load_bank[index];
            row.extend([right(load_bank.labor), cost_cell(load_bank.equipment_rental)]);
        }
        if services.contains(ServiceCode::H) {
            row.push(right(tables.electrical_testing[index]));
        }
        if services.contains(ServiceCode::K) {
            row.push(cost_cell(oil_service.battery));
        }
        table.add_row(row);
    }
    table
}

/// Tune-up configurations with their unmarked parts cost.
pub fn build_tune_ups_table(tables: &RateTables, services: EnumSet<ServiceCode>) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Service", "Configuration", "Hours", "Parts"]);
    if services.contains(ServiceCode::F) {
        let tune_up = &tables.diesel_tune_up;
        for config in tune_up.configurations.values() {
            let mut cell = Cell::new(config);
            let is_fallback = config.cylinders == tune_up.fallback.cylinders
                && config.injector == tune_up.fallback.injector;
            if is_fallback {
                cell = cell.add_attribute(Attribute::Bold);
            }
            table.add_row(vec![
                Cell::new(ServiceCode::F),
                cell,
                right(config.labor),
                cost_cell(tune_up.parts(*config)),
            ]);
        }
    }
    if services.contains(ServiceCode::G) {
        let tune_up = &tables.gas_tune_up;
        for (key, labor) in tune_up.labor.keys().zip(tune_up.labor.values()) {
            table.add_row(vec![
                Cell::new(ServiceCode::G),
                Cell::new(format!("{key} cylinders")),
                right(labor),
                Cell::new(format!("{} per cylinder", tune_up.parts_per_cylinder))
                    .set_alignment(CellAlignment::Right),
            ]);
        }
    }
    table
}

/// Flat and coarsely tiered rates.
pub fn build_flat_rates_table(tables: &RateTables, services: EnumSet<ServiceCode>) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Service", "Applies to", "Hours", "Cost"]);
    let pricing = &tables.pricing;
    if services.contains(ServiceCode::D) {
        table.add_row(vec![
            Cell::new(ServiceCode::D),
            Cell::new("sample collection"),
            right(tables.sample_collection),
            Cell::new(""),
        ]);
        for (fluid, fee) in [
            ("oil analysis", pricing.analysis_fees.oil),
            ("coolant analysis", pricing.analysis_fees.coolant),
            ("fuel analysis", pricing.analysis_fees.fuel),
        ] {
            table.add_row(vec![
                Cell::new(ServiceCode::D),
                Cell::new(fluid),
                Cell::new(""),
                cost_cell(fee),
            ]);
        }
    }
    if services.contains(ServiceCode::I) {
        let mut lower = Decimal::ZERO;
        for (limit, row) in &tables.transfer_switch.limits {
            table.add_row(vec![
                Cell::new(ServiceCode::I),
                Cell::new(format!("{lower}–{limit}")),
                right(row.labor),
                cost_cell(row.supplies),
            ]);
            lower = Decimal::try_from(limit.0).unwrap_or(lower);
        }
        let above = tables.transfer_switch.above;
        table.add_row(vec![
            Cell::new(ServiceCode::I),
            Cell::new(format!("above {lower} kW")),
            right(above.labor),
            cost_cell(above.supplies),
        ]);
    }
    if services.contains(ServiceCode::J) {
        table.add_row(vec![
            Cell::new(ServiceCode::J),
            Cell::new("any rating"),
            right(tables.thermal_imaging),
            Cell::new(""),
        ]);
    }
    if services.contains(ServiceCode::K) {
        for (limit, labor) in &tables.battery_replacement.limits {
            table.add_row(vec![
                Cell::new(ServiceCode::K),
                Cell::new(format!("up to {limit}")),
                right(labor),
                Cell::new("battery by bracket").set_alignment(CellAlignment::Right),
            ]);
        }
        table.add_row(vec![
            Cell::new(ServiceCode::K),
            Cell::new("above"),
            right(tables.battery_replacement.above),
            Cell::new("battery by bracket").set_alignment(CellAlignment::Right),
        ]);
    }
    table
}

/// Scalar pricing factors.
pub fn build_pricing_table(tables: &RateTables) -> Table {
    let pricing = &tables.pricing;
    let mut table = new_table();
    table.set_header(vec!["Factor", "Value"]);
    table.add_row(vec![Cell::new("Labor rate"), right(pricing.labor_rate)]);
    table.add_row(vec![Cell::new("Parts markup"), right(format!("×{}", pricing.parts_markup))]);
    table.add_row(vec![Cell::new("Freight"), right(percent(pricing.freight_percent))]);
    table.add_row(vec![Cell::new("Mileage rate"), right(pricing.mileage_rate)]);
    table.add_row(vec![Cell::new("Oil"), right(pricing.oil_price)]);
    table.add_row(vec![Cell::new("Coolant"), right(pricing.coolant_price)]);
    table.add_row(vec![Cell::new("Coolant sample"), cost_cell(tables.coolant_sample_fee)]);
    table.add_row(vec![Cell::new("Mobilization"), right(tables.default_mobilization)]);
    table.add_row(vec![
        Cell::new("Escalation"),
        right(format!("×{} per year", pricing.escalation_multiplier)),
    ]);
    table.add_row(vec![Cell::new("Tax rate"), right(percent(pricing.tax_rate))]);
    table
}
