//! Show item command handler.

use crate::app::AppContext;
use crate::cli::ShowArgs;
use crate::output::{item_json, print_item_detail};

use super::require_item;

pub fn handle_show(ctx: &AppContext, args: &ShowArgs) -> anyhow::Result<()> {
    let (store, _blob) = ctx.open_store()?;
    let item = require_item(&store, &args.id)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&item_json(item))?);
        return Ok(());
    }

    let ui = ctx.ui_context(false, None);
    print_item_detail(&ui, item, &store.settings().currency_symbol);
    Ok(())
}
