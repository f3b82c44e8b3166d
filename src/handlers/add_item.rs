//! Add item handler for the grocery MCP server

use crate::GroceryServerHandler;
use crate::grocery::NewItem;
use crate::validation;
use mcp_attr::Result as McpResult;
use tracing::info;

impl GroceryServerHandler {
    /// Apply the add-item form rules and put the item on its list.
    ///
    /// The name is trimmed and must not be blank; a blank quantity becomes
    /// "1"; a missing list type means Priority.
    pub async fn handle_add_item(
        &self,
        name: String,
        list_type: Option<String>,
        quantity: Option<String>,
        group: Option<String>,
    ) -> McpResult<String> {
        let name = validation::validate_item_name(&name)?;
        let list_type = validation::parse_list_type_or_default(list_type.as_deref())?;
        let quantity = validation::normalize_quantity(quantity);
        let group = group
            .map(|g| g.trim().to_string())
            .filter(|g| !g.is_empty());

        let new_item = NewItem {
            name,
            list_type,
            quantity,
            group,
            ..NewItem::default()
        };

        let mut store = self.lock_store()?;
        let item = store.add_item(new_item);
        let id = item.id.clone();
        let name = item.name.clone();
        drop(store);

        info!(item_id = %id, name = %name, list_type = %list_type, "item added");
        Ok(format!("Item added with ID: {} (list: {})", id, list_type))
    }
}
