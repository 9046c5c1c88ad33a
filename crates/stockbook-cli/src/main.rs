//! Stockbook CLI - a multi-location inventory tracker for small
//! contracting businesses.
//!
//! This is the command-line interface for Stockbook. It provides a
//! user-friendly interface to the core library functionality.

mod app;
mod cli;
mod commands;
mod config;
mod constants;
mod errors;
mod helpers;
mod output;
mod ui;

use clap::Parser;

use stockbook_core::VERSION;

use app::AppContext;
use cli::{Cli, Commands};
use errors::CliError;

fn main() {
    let cli = Cli::parse();
    let ctx = AppContext::new(&cli);

    if let Err(err) = dispatch(&ctx) {
        if let Some(cli_err) = err.downcast_ref::<CliError>() {
            eprintln!("Error: {}", cli_err);
            std::process::exit(cli_err.exit_code());
        }
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}

fn dispatch(ctx: &AppContext) -> anyhow::Result<()> {
    match &ctx.cli().command {
        Some(Commands::Init(args)) => commands::init::handle_init(ctx, args),
        Some(Commands::Add(args)) => commands::items::handle_add(ctx, args),
        Some(Commands::Update(args)) => commands::items::handle_update(ctx, args),
        Some(Commands::Delete(args)) => commands::items::handle_delete(ctx, args),
        Some(Commands::Adjust(args)) => commands::items::handle_adjust(ctx, args),
        Some(Commands::List(args)) => commands::items::handle_list(ctx, args),
        Some(Commands::Show(args)) => commands::items::handle_show(ctx, args),
        Some(Commands::Stats(args)) => commands::stats::handle_stats(ctx, args),
        Some(Commands::Log(args)) => commands::log::handle_log(ctx, args),
        Some(Commands::Scan(args)) => commands::scan::handle_scan(ctx, args),
        Some(Commands::Export(args)) => commands::data::handle_export(ctx, args),
        Some(Commands::Import(args)) => commands::data::handle_import(ctx, args),
        Some(Commands::Clear(args)) => commands::data::handle_clear(ctx, args),
        Some(Commands::Settings(args)) => commands::settings::handle_settings(ctx, args),
        Some(Commands::Completions(args)) => commands::misc::handle_completions(args.shell),
        None => {
            println!("Stockbook v{}", VERSION);
            println!("\nQuickstart:");
            println!("  stockbook init          create a store with starter inventory");
            println!("  stockbook list          see what you have");
            println!("  stockbook add NAME --category CAT --qty LOCATION=QTY");
            println!("\nRun `stockbook --help` for usage information.");
            Ok(())
        }
    }
}
