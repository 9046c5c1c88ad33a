use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use stockbook_core::VERSION;

/// Stockbook - a multi-location inventory tracker for small contracting
/// businesses
#[derive(Parser)]
#[command(name = "stockbook")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the store directory
    #[arg(short, long, global = true, env = "STOCKBOOK_STORE")]
    pub store: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Quiet mode (minimal output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Use ASCII symbols only
    #[arg(long, global = true)]
    pub ascii: bool,
}

/// Arguments for the `init` command
#[derive(Args)]
pub struct InitArgs {
    /// Directory where the store will be created
    #[arg(value_name = "PATH")]
    pub path: Option<String>,

    /// Start with an empty inventory instead of the starter items
    #[arg(long)]
    pub no_seed: bool,
}

/// Arguments for the `add` command
#[derive(Args)]
pub struct AddArgs {
    /// Item name
    #[arg(value_name = "NAME")]
    pub name: String,

    /// Category tag
    #[arg(long)]
    pub category: String,

    /// Scan code / UPC / EAN
    #[arg(long)]
    pub barcode: Option<String>,

    /// Free-text description
    #[arg(long)]
    pub description: Option<String>,

    /// Stock at a location (repeatable)
    #[arg(long = "qty", value_name = "LOCATION=QTY")]
    pub qty: Vec<String>,

    /// Low-stock threshold (defaults to the configured default)
    #[arg(long)]
    pub min_stock: Option<String>,

    /// Unit of measure
    #[arg(long)]
    pub unit: Option<String>,

    /// Price per unit
    #[arg(long)]
    pub price: Option<String>,
}

/// Arguments for the `update` command
#[derive(Args)]
pub struct UpdateArgs {
    /// Item ID
    #[arg(value_name = "ID")]
    pub id: String,

    /// New item name
    #[arg(long)]
    pub name: Option<String>,

    /// New category tag
    #[arg(long)]
    pub category: Option<String>,

    /// New scan code
    #[arg(long)]
    pub barcode: Option<String>,

    /// New description
    #[arg(long)]
    pub description: Option<String>,

    /// Set stock at a location (repeatable; other locations keep their
    /// current values)
    #[arg(long = "qty", value_name = "LOCATION=QTY")]
    pub qty: Vec<String>,

    /// New low-stock threshold
    #[arg(long)]
    pub min_stock: Option<String>,

    /// New unit of measure
    #[arg(long)]
    pub unit: Option<String>,

    /// New price per unit
    #[arg(long)]
    pub price: Option<String>,
}

/// Arguments for the `delete` command
#[derive(Args)]
pub struct DeleteArgs {
    /// Item ID
    #[arg(value_name = "ID")]
    pub id: String,

    /// Skip the confirmation prompt
    #[arg(long)]
    pub yes: bool,
}

/// Arguments for the `adjust` command
#[derive(Args)]
pub struct AdjustArgs {
    /// Item ID
    #[arg(value_name = "ID")]
    pub id: String,

    /// Set the count at a location (repeatable; locations not mentioned
    /// keep their current values)
    #[arg(long = "set", value_name = "LOCATION=QTY", required = true)]
    pub set: Vec<String>,
}

/// Arguments for the `list` command
#[derive(Args)]
pub struct ListArgs {
    /// Search name, description, category, and barcode
    #[arg(long)]
    pub search: Option<String>,

    /// Filter by exact category
    #[arg(long)]
    pub category: Option<String>,

    /// Filter to items with stock at a location
    #[arg(long)]
    pub location: Option<String>,

    /// Show only items at or below their minimum stock
    #[arg(long)]
    pub low: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Output format (table, plain)
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<String>,
}

/// Arguments for the `show` command
#[derive(Args)]
pub struct ShowArgs {
    /// Item ID
    #[arg(value_name = "ID")]
    pub id: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `stats` command
#[derive(Args)]
pub struct StatsArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `log` command
#[derive(Args)]
pub struct LogArgs {
    /// Limit number of entries shown
    #[arg(long)]
    pub limit: Option<usize>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Output format (table, plain)
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<String>,
}

/// Arguments for the `scan` command
#[derive(Args)]
pub struct ScanArgs {
    /// Decoded barcode or QR payload
    #[arg(value_name = "CODE")]
    pub code: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `export` command
#[derive(Args)]
pub struct ExportArgs {
    /// Output format for the inventory export
    #[arg(long, default_value = "json")]
    pub format: String,

    /// Produce a document extract instead (report, labels, invoice, quote)
    #[arg(long, value_name = "DOC")]
    pub doc: Option<String>,

    /// Select an item, with a line quantity for invoices/quotes
    /// (repeatable)
    #[arg(long = "item", value_name = "ID[=QTY]")]
    pub item: Vec<String>,

    /// Write to a file instead of stdout
    #[arg(long, value_name = "FILE")]
    pub output: Option<String>,
}

/// Arguments for the `import` command
#[derive(Args)]
pub struct ImportArgs {
    /// JSON backup file to import
    #[arg(value_name = "FILE")]
    pub file: String,

    /// Skip the confirmation prompt
    #[arg(long)]
    pub yes: bool,
}

/// Arguments for the `clear` command
#[derive(Args)]
pub struct ClearArgs {
    /// Skip the confirmation prompt
    #[arg(long)]
    pub yes: bool,

    /// Also clear the audit log
    #[arg(long)]
    pub logs: bool,
}

/// Arguments for the `settings` command
#[derive(Args)]
pub struct SettingsArgs {
    #[command(subcommand)]
    pub command: SettingsCommands,
}

#[derive(Subcommand)]
pub enum SettingsCommands {
    /// Show the current settings
    Show {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Set a settings value
    ///
    /// Keys: company-name, default-min-stock, low-stock-alerts, tax-rate,
    /// currency-symbol, invoice-terms, invoice-notes
    Set {
        #[arg(value_name = "KEY")]
        key: String,
        #[arg(value_name = "VALUE")]
        value: String,
    },

    /// Add a value to a vocabulary list
    Add {
        /// Which list (categories, locations, units)
        #[arg(value_name = "LIST")]
        list: String,
        #[arg(value_name = "VALUE")]
        value: String,
    },

    /// Remove a value from a vocabulary list
    Remove {
        /// Which list (categories, locations, units)
        #[arg(value_name = "LIST")]
        list: String,
        #[arg(value_name = "VALUE")]
        value: String,
    },

    /// Manage printer profiles
    Printer {
        #[command(subcommand)]
        command: PrinterCommands,
    },
}

#[derive(Subcommand)]
pub enum PrinterCommands {
    /// List configured printers
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Add a printer profile
    Add {
        #[arg(value_name = "NAME")]
        name: String,

        /// Physical location of the printer
        #[arg(long)]
        location: String,

        /// Printer type (standard, label)
        #[arg(long, default_value = "standard")]
        r#type: String,

        /// Connection kind (browser, network)
        #[arg(long, default_value = "browser")]
        connection: String,

        /// IP address (network printers)
        #[arg(long)]
        ip: Option<String>,

        /// Port (network printers)
        #[arg(long)]
        port: Option<String>,
    },

    /// Remove a printer profile
    Remove {
        #[arg(value_name = "ID")]
        id: String,
    },
}

/// Arguments for the `completions` command
#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_name = "SHELL")]
    pub shell: Shell,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize a new store
    Init(InitArgs),

    /// Add a new inventory item
    Add(AddArgs),

    /// Update an existing item (unset flags keep current values)
    Update(UpdateArgs),

    /// Delete an item permanently
    Delete(DeleteArgs),

    /// Adjust an item's per-location stock counts
    Adjust(AdjustArgs),

    /// List inventory items
    List(ListArgs),

    /// Show a specific item by ID
    Show(ShowArgs),

    /// Show dashboard stats
    Stats(StatsArgs),

    /// Show the audit log (newest first)
    Log(LogArgs),

    /// Resolve a scanned code against the inventory
    Scan(ScanArgs),

    /// Export the inventory or a document extract
    Export(ExportArgs),

    /// Replace the inventory from a JSON backup
    Import(ImportArgs),

    /// Delete all inventory items
    Clear(ClearArgs),

    /// View and edit application settings
    Settings(SettingsArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}
