//! List types handler for the grocery MCP server

use crate::GroceryServerHandler;
use crate::grocery::ListType;
use mcp_attr::Result as McpResult;

impl GroceryServerHandler {
    /// Show the list labels accepted by the item tools.
    pub async fn handle_list_types(&self) -> McpResult<String> {
        let mut result = String::from("Available list types:\n");
        for list_type in ListType::ALL {
            let stored_in = if list_type.is_friends() {
                "friends list"
            } else {
                "priority list"
            };
            result.push_str(&format!("- {} (stored in {})\n", list_type, stored_in));
        }
        Ok(result.trim_end().to_string())
    }
}
