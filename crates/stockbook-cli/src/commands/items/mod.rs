//! Item command handlers: the CLI side of the mutation API.

mod add;
mod adjust;
mod delete;
mod list;
mod show;
mod update;

pub use add::handle_add;
pub use adjust::handle_adjust;
pub use delete::handle_delete;
pub use list::handle_list;
pub use show::handle_show;
pub use update::handle_update;

use stockbook_core::{InventoryItem, Store};

use crate::errors::CliError;

/// Resolve an item by id, accepting a unique short-id prefix.
///
/// The core treats a stale id as a silent no-op; the CLI resolves first so
/// a typo surfaces as a not-found error instead of nothing happening.
pub(crate) fn require_item<'a>(store: &'a Store, id: &str) -> anyhow::Result<&'a InventoryItem> {
    if let Some(item) = store.item(id) {
        return Ok(item);
    }

    let matches: Vec<&InventoryItem> = store
        .items()
        .iter()
        .filter(|item| item.id.starts_with(id))
        .collect();
    match matches.as_slice() {
        [item] => Ok(item),
        [] => Err(CliError::not_found(
            format!("No item matching ID \"{}\"", id),
            "stockbook list",
        )
        .into()),
        _ => Err(CliError::invalid_input(format!(
            "ID prefix \"{}\" matches {} items; use the full ID",
            id,
            matches.len()
        ))
        .into()),
    }
}
