//! Toggle item handler for the grocery MCP server

use crate::GroceryServerHandler;
use crate::validation;
use mcp_attr::{Result as McpResult, bail_public};
use tracing::info;

impl GroceryServerHandler {
    /// Flip an item between checked and unchecked.
    ///
    /// The list type picks the collection to search: "Friends" searches the
    /// friends list, anything else the priority list. An unknown ID leaves
    /// every list unchanged and is reported back as a failure.
    pub async fn handle_toggle_item(&self, id: String, list_type: String) -> McpResult<String> {
        let list_type = validation::parse_list_type(&list_type)?;
        let id = validation::normalize_id(&id);

        let mut store = self.lock_store()?;
        let Some(item) = store.toggle_item(&id, list_type) else {
            drop(store);
            let list_name = if list_type.is_friends() {
                "friends"
            } else {
                "priority"
            };
            bail_public!(_, "Item '{}' not found on the {} list", id, list_name);
        };
        let checked = item.checked;
        let name = item.name.clone();
        drop(store);

        info!(item_id = %id, checked, "item toggled");
        Ok(format!(
            "{} (ID: {}) marked as {}",
            name,
            id,
            if checked { "checked" } else { "unchecked" }
        ))
    }
}
