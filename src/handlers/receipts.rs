//! Receipts handler for the grocery MCP server

use crate::GroceryServerHandler;
use crate::formatting;
use mcp_attr::Result as McpResult;

impl GroceryServerHandler {
    /// Show receipts with the total spent across all of them.
    pub async fn handle_receipts(&self) -> McpResult<String> {
        let store = self.lock_store()?;
        let summary = store.spending_summary();
        let text = formatting::format_receipts(store.receipts(), summary);
        drop(store);
        Ok(text.trim_end().to_string())
    }
}
