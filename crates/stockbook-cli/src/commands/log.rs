//! Audit log command handler.

use crate::app::AppContext;
use crate::cli::LogArgs;
use crate::helpers::validate_format;
use crate::output::{audit_entries_json, print_audit_log};
use crate::ui::{print, render};

const DEFAULT_LOG_LIMIT: usize = 20;

pub fn handle_log(ctx: &AppContext, args: &LogArgs) -> anyhow::Result<()> {
    let (store, _blob) = ctx.open_store()?;

    let entries = store.audit().entries();
    let limit = args.limit.unwrap_or(DEFAULT_LOG_LIMIT);
    let shown = &entries[..entries.len().min(limit)];

    let format = validate_format(args.format.as_deref())?;
    if args.json && format.is_some() {
        return Err(anyhow::anyhow!("--format cannot be used with --json"));
    }
    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&audit_entries_json(shown))?
        );
        return Ok(());
    }

    let ui = ctx.ui_context(false, format);
    if !ctx.quiet() {
        print(&ui, &render::header(&ui, "log", None));
    }
    print_audit_log(&ui, shown);
    Ok(())
}
