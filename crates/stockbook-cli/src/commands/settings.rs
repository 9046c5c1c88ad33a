//! Settings command handlers.
//!
//! Settings are replaced wholesale on every edit and persisted
//! immediately. The vocabularies edited here are suggestions offered to
//! the user; items referencing values outside them remain valid.

use uuid::Uuid;

use stockbook_core::{PrinterConnection, PrinterProfile, PrinterType};

use crate::app::AppContext;
use crate::cli::{PrinterCommands, SettingsArgs, SettingsCommands};
use crate::errors::CliError;
use crate::helpers::{coerce_price, coerce_quantity};
use crate::ui::{badge, kv, print, table, Badge, Column, UiContext};

pub fn handle_settings(ctx: &AppContext, args: &SettingsArgs) -> anyhow::Result<()> {
    match &args.command {
        SettingsCommands::Show { json } => show(ctx, *json),
        SettingsCommands::Set { key, value } => set(ctx, key, value),
        SettingsCommands::Add { list, value } => edit_list(ctx, list, value, true),
        SettingsCommands::Remove { list, value } => edit_list(ctx, list, value, false),
        SettingsCommands::Printer { command } => printer(ctx, command),
    }
}

fn show(ctx: &AppContext, json: bool) -> anyhow::Result<()> {
    let (store, _blob) = ctx.open_store()?;
    let settings = store.settings();

    if json {
        println!("{}", serde_json::to_string_pretty(settings)?);
        return Ok(());
    }

    let ui = ctx.ui_context(false, None);
    print(&ui, &kv(&ui, "Company", &settings.company_name));
    print(
        &ui,
        &kv(
            &ui,
            "Default Min Stock",
            &settings.default_min_stock.to_string(),
        ),
    );
    print(
        &ui,
        &kv(
            &ui,
            "Low Stock Alerts",
            if settings.low_stock_alerts { "on" } else { "off" },
        ),
    );
    print(&ui, &kv(&ui, "Tax Rate", &format!("{}%", settings.tax_rate)));
    print(&ui, &kv(&ui, "Currency", &settings.currency_symbol));
    print(&ui, &kv(&ui, "Categories", &settings.categories.join(", ")));
    print(&ui, &kv(&ui, "Locations", &settings.locations.join(", ")));
    print(&ui, &kv(&ui, "Units", &settings.units.join(", ")));
    print_printers(&ui, &settings.printers);
    Ok(())
}

fn set(ctx: &AppContext, key: &str, value: &str) -> anyhow::Result<()> {
    let (mut store, mut blob) = ctx.open_store()?;
    let mut settings = store.settings().clone();

    match key {
        "company-name" => settings.company_name = value.to_string(),
        "default-min-stock" => settings.default_min_stock = coerce_quantity(value),
        "low-stock-alerts" => settings.low_stock_alerts = parse_bool(value)?,
        "tax-rate" => settings.tax_rate = coerce_price(value),
        "currency-symbol" => settings.currency_symbol = value.to_string(),
        "invoice-terms" => settings.invoice_terms = value.to_string(),
        "invoice-notes" => settings.invoice_notes = value.to_string(),
        other => {
            return Err(CliError::invalid_input(format!(
                "Unknown settings key: {} (use company-name, default-min-stock, low-stock-alerts, tax-rate, currency-symbol, invoice-terms, or invoice-notes)",
                other
            ))
            .into());
        }
    }

    store.update_settings(settings);
    ctx.persist(&store, &mut blob)?;

    if !ctx.quiet() {
        let ui = ctx.ui_context(false, None);
        print(&ui, &badge(&ui, Badge::Ok, &format!("Set {}", key)));
    }
    Ok(())
}

fn edit_list(ctx: &AppContext, list: &str, value: &str, add: bool) -> anyhow::Result<()> {
    let (mut store, mut blob) = ctx.open_store()?;
    let mut settings = store.settings().clone();

    let target = match list {
        "categories" => &mut settings.categories,
        "locations" => &mut settings.locations,
        "units" => &mut settings.units,
        other => {
            return Err(CliError::invalid_input(format!(
                "Unknown list: {} (use categories, locations, or units)",
                other
            ))
            .into());
        }
    };

    if add {
        if !target.iter().any(|existing| existing == value) {
            target.push(value.to_string());
        }
    } else {
        target.retain(|existing| existing != value);
    }

    store.update_settings(settings);
    ctx.persist(&store, &mut blob)?;

    if !ctx.quiet() {
        let ui = ctx.ui_context(false, None);
        let verb = if add { "Added" } else { "Removed" };
        print(
            &ui,
            &badge(&ui, Badge::Ok, &format!("{} \"{}\" ({})", verb, value, list)),
        );
    }
    Ok(())
}

fn printer(ctx: &AppContext, command: &PrinterCommands) -> anyhow::Result<()> {
    match command {
        PrinterCommands::List { json } => {
            let (store, _blob) = ctx.open_store()?;
            if *json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&store.settings().printers)?
                );
                return Ok(());
            }
            let ui = ctx.ui_context(false, None);
            print_printers(&ui, &store.settings().printers);
            Ok(())
        }
        PrinterCommands::Add {
            name,
            location,
            r#type,
            connection,
            ip,
            port,
        } => {
            let (mut store, mut blob) = ctx.open_store()?;
            let mut settings = store.settings().clone();

            let profile = PrinterProfile {
                id: format!("p{}", &Uuid::new_v4().simple().to_string()[..8]),
                name: name.clone(),
                location: location.clone(),
                printer_type: parse_printer_type(r#type)?,
                connection: parse_connection(connection)?,
                ip_address: ip.clone(),
                port: port.clone(),
            };
            let id = profile.id.clone();
            settings.printers.push(profile);
            store.update_settings(settings);
            ctx.persist(&store, &mut blob)?;

            if !ctx.quiet() {
                let ui = ctx.ui_context(false, None);
                print(
                    &ui,
                    &badge(&ui, Badge::Ok, &format!("Added printer {} ({})", name, id)),
                );
            }
            Ok(())
        }
        PrinterCommands::Remove { id } => {
            let (mut store, mut blob) = ctx.open_store()?;
            let mut settings = store.settings().clone();

            if !settings.printers.iter().any(|p| p.id == *id) {
                return Err(CliError::not_found(
                    format!("No printer with ID \"{}\"", id),
                    "stockbook settings printer list",
                )
                .into());
            }
            settings.printers.retain(|p| p.id != *id);
            store.update_settings(settings);
            ctx.persist(&store, &mut blob)?;

            if !ctx.quiet() {
                let ui = ctx.ui_context(false, None);
                print(&ui, &badge(&ui, Badge::Ok, &format!("Removed printer {}", id)));
            }
            Ok(())
        }
    }
}

fn print_printers(ui: &UiContext, printers: &[PrinterProfile]) {
    if printers.is_empty() {
        print(ui, "No printers configured.");
        return;
    }
    let columns = [
        Column::new("ID"),
        Column::new("Name"),
        Column::new("Location"),
        Column::new("Type"),
        Column::new("Connection"),
        Column::new("Address"),
    ];
    let rows: Vec<Vec<String>> = printers
        .iter()
        .map(|p| {
            let address = match (&p.ip_address, &p.port) {
                (Some(ip), Some(port)) => format!("{}:{}", ip, port),
                (Some(ip), None) => ip.clone(),
                _ => "-".to_string(),
            };
            vec![
                p.id.clone(),
                p.name.clone(),
                p.location.clone(),
                format!("{:?}", p.printer_type),
                format!("{:?}", p.connection),
                address,
            ]
        })
        .collect();
    print(ui, &table(ui, &columns, &rows));
}

fn parse_bool(value: &str) -> anyhow::Result<bool> {
    match value.to_lowercase().as_str() {
        "true" | "on" | "yes" => Ok(true),
        "false" | "off" | "no" => Ok(false),
        other => Err(CliError::invalid_input(format!(
            "Expected on/off, got: {}",
            other
        ))
        .into()),
    }
}

fn parse_printer_type(value: &str) -> anyhow::Result<PrinterType> {
    match value.to_lowercase().as_str() {
        "standard" => Ok(PrinterType::Standard),
        "label" => Ok(PrinterType::Label),
        other => Err(CliError::invalid_input(format!(
            "Unknown printer type: {} (use standard or label)",
            other
        ))
        .into()),
    }
}

fn parse_connection(value: &str) -> anyhow::Result<PrinterConnection> {
    match value.to_lowercase().as_str() {
        "browser" => Ok(PrinterConnection::Browser),
        "network" => Ok(PrinterConnection::Network),
        other => Err(CliError::invalid_input(format!(
            "Unknown connection: {} (use browser or network)",
            other
        ))
        .into()),
    }
}
