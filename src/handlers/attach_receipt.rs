//! Attach receipt handler for the grocery MCP server

use crate::GroceryServerHandler;
use crate::validation;
use mcp_attr::Result as McpResult;
use tracing::info;

impl GroceryServerHandler {
    /// Attach a photo to a receipt.
    ///
    /// The photo feature is a placeholder. The "coming soon" notice is a
    /// normal response rather than a tool failure; receipts never change.
    pub async fn handle_attach_receipt(&self, receipt_id: String) -> McpResult<String> {
        let receipt_id = validation::normalize_id(&receipt_id);
        let store = self.lock_store()?;
        let Err(e) = store.attach_receipt(&receipt_id);
        drop(store);

        info!(receipt_id = %receipt_id, "receipt photo requested before the feature exists");
        Ok(format!(
            "Photo feature: {}. Receipt {} was not changed.",
            e, receipt_id
        ))
    }
}
