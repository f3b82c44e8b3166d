//! Grocery MCP Server Library
//!
//! This library provides a Model Context Protocol (MCP) server for shared
//! grocery lists: prioritized items, items requested by friends, shopping
//! receipts and the balances friends owe for shared purchases.
//!
//! # Architecture
//!
//! The library follows a 3-layer architecture:
//! - **MCP Layer**: `GroceryServerHandler` - Handles MCP protocol communication
//! - **Domain Layer**: `grocery` module - Items, receipts, friends and the list store
//! - **Seed Layer**: `seed_source` module - Initial lists, built in or read from TOML
//!
//! All state is in memory and lives for the duration of the process.
//!
//! # Example
//!
//! ```no_run
//! use grocery_mcp::{GroceryServerHandler, SeedSource};
//! use anyhow::Result;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let handler = GroceryServerHandler::new(&SeedSource::builtin())?;
//!     // Use handler with MCP server...
//!     Ok(())
//! }
//! ```

pub mod formatting;
pub mod grocery;
pub mod handlers;
mod seed_source;
pub mod validation;

use anyhow::Result;
use mcp_attr::Result as McpResult;
use mcp_attr::bail_public;
use mcp_attr::server::{McpServer, mcp_server};
use std::sync::{Mutex, MutexGuard};

// Re-export commonly used types
pub use grocery::{
    Friend, FriendRoster, GroceryListStore, Item, ListType, NewItem, Receipt, SeedData,
    StoreError,
};
pub use seed_source::SeedSource;

/// MCP Server handler for grocery list management
///
/// Owns the grocery list store behind a mutex so that concurrent tool calls
/// are applied one at a time, plus the read-only friend roster.
pub struct GroceryServerHandler {
    pub(crate) store: Mutex<GroceryListStore>,
    pub(crate) roster: FriendRoster,
}

impl GroceryServerHandler {
    /// Create a new grocery server handler
    ///
    /// # Arguments
    /// * `seed_source` - Where the initial lists come from
    ///
    /// # Returns
    /// Result containing the handler or an error if the seed cannot be read
    ///
    /// # Example
    /// ```no_run
    /// # use grocery_mcp::{GroceryServerHandler, SeedSource};
    /// # use anyhow::Result;
    /// # fn main() -> Result<()> {
    /// let handler = GroceryServerHandler::new(&SeedSource::file("groceries.toml"))?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(seed_source: &SeedSource) -> Result<Self> {
        Ok(Self::from_seed(seed_source.load()?))
    }

    /// Create a handler directly from seed data
    pub fn from_seed(seed: SeedData) -> Self {
        let roster = FriendRoster::new(seed.friends.clone());
        let store = Mutex::new(GroceryListStore::from_seed(seed));
        Self { store, roster }
    }

    /// Lock the store for the duration of one tool call
    pub(crate) fn lock_store(&self) -> McpResult<MutexGuard<'_, GroceryListStore>> {
        match self.store.lock() {
            Ok(guard) => Ok(guard),
            Err(_) => {
                bail_public!(_, "Grocery list is unavailable after an earlier failure");
            }
        }
    }
}

/// Shared grocery list server for a household and its friends.
///
/// Items live on two lists: the priority list (which also holds House and
/// Weekend Trip items) and the friends list (items friends asked you to pick up).
/// Receipts record past shopping trips; friends' balances show who owes what.
///
/// Key concepts:
/// - **Priority**: urgent items, flagged with "!"
/// - **Friends**: items requested by a friend
/// - **House** / **Weekend Trip**: other list labels, stored with priority items
/// - **Receipts**: past trips with the amount spent
/// - **Debts**: what each friend owes you
///
/// Item IDs are short numbers assigned on creation (e.g. "9", "10").
#[mcp_server]
impl McpServer for GroceryServerHandler {
    /// **View lists**: Show items on the priority and friends lists.
    /// **Filter**: by list type, keyword (name/group), or hide checked items.
    #[tool]
    async fn list_items(
        &self,
        /// List type: Priority/Friends/House/Weekend Trip (optional, default: all)
        list_type: Option<String>,
        /// Keyword: case-insensitive match on name or group (optional)
        keyword: Option<String>,
        /// Hide checked: only show items not yet picked up (optional)
        hide_checked: Option<bool>,
    ) -> McpResult<String> {
        self.handle_list_items(list_type, keyword, hide_checked)
            .await
    }

    /// **Check off**: Toggle an item between picked up and not picked up.
    /// **Note**: list_type must be "Friends" for friend-requested items; any other type searches the priority list.
    #[tool]
    async fn toggle_item(
        &self,
        /// Item ID (e.g., "3")
        id: String,
        /// List type the item is shown under: Priority/Friends/House/Weekend Trip
        list_type: String,
    ) -> McpResult<String> {
        self.handle_toggle_item(id, list_type).await
    }

    /// **Add**: Put a new item on a list. New items start unchecked.
    /// **Routing**: "Friends" items go to the friends list; all others go to the priority list.
    #[tool]
    async fn add_item(
        &self,
        /// Name: what to buy (required, must not be blank)
        name: String,
        /// List type: Priority/Friends/House/Weekend Trip (optional, default: Priority)
        list_type: Option<String>,
        /// Quantity: free text (optional, default: "1")
        quantity: Option<String>,
        /// Group: category label such as "House Split" (optional)
        group: Option<String>,
    ) -> McpResult<String> {
        self.handle_add_item(name, list_type, quantity, group).await
    }

    /// **Stats**: Show receipts from past shopping trips and the total spent.
    #[tool]
    async fn receipts(&self) -> McpResult<String> {
        self.handle_receipts().await
    }

    /// **Receipt photo**: Attach a photo to a receipt. Not available yet; reports "coming soon".
    #[tool]
    async fn attach_receipt(
        &self,
        /// Receipt ID (e.g., "1")
        receipt_id: String,
    ) -> McpResult<String> {
        self.handle_attach_receipt(receipt_id).await
    }

    /// **Debts**: Show what each friend owes, highest balance first, with totals.
    #[tool]
    async fn debts(&self) -> McpResult<String> {
        self.handle_debts().await
    }

    /// **Settle**: Mark a friend's debt as settled. Not available yet; balances are never changed.
    #[tool]
    async fn settle_debt(
        &self,
        /// Friend name (e.g., "Sarah")
        name: String,
    ) -> McpResult<String> {
        self.handle_settle_debt(name).await
    }

    /// **List types**: Show the list labels accepted by add_item and toggle_item.
    #[tool]
    async fn list_types(&self) -> McpResult<String> {
        self.handle_list_types().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::extract_id_from_response;

    fn get_test_handler() -> GroceryServerHandler {
        GroceryServerHandler::from_seed(SeedData::builtin())
    }

    #[tokio::test]
    async fn test_add_then_toggle_round_trip() {
        let handler = get_test_handler();
        let response = handler
            .handle_add_item("Milk".to_string(), None, None, None)
            .await
            .unwrap();
        let id = extract_id_from_response(&response);

        let result = handler
            .handle_toggle_item(id.clone(), "Priority".to_string())
            .await
            .unwrap();
        assert!(result.ends_with("marked as checked"));

        let store = handler.store.lock().unwrap();
        let item = store.find_item(&id).unwrap();
        assert!(item.checked);
        assert!(item.priority);
        assert_eq!(item.quantity, "1");
    }

    #[tokio::test]
    async fn test_roster_comes_from_seed() {
        let handler = get_test_handler();
        assert_eq!(handler.roster.friends().len(), 3);
    }

    #[test]
    fn test_new_with_missing_seed_file_falls_back_to_builtin() {
        let dir = tempfile::tempdir().unwrap();
        let handler =
            GroceryServerHandler::new(&SeedSource::file(dir.path().join("missing.toml")))
                .unwrap();
        let store = handler.store.lock().unwrap();
        assert_eq!(store.priority_items().len(), 5);
        assert_eq!(store.friends_items().len(), 3);
    }
}
