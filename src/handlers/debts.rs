//! Debt handlers for the grocery MCP server

use crate::GroceryServerHandler;
use crate::formatting;
use mcp_attr::{Result as McpResult, bail_public};

impl GroceryServerHandler {
    /// Show friends' balances, highest first, with totals.
    pub async fn handle_debts(&self) -> McpResult<String> {
        let friends = self.roster.sorted_by_debt();
        let summary = self.roster.debt_summary();
        Ok(formatting::format_debts(&friends, summary)
            .trim_end()
            .to_string())
    }

    /// Settle a friend's debt.
    ///
    /// Settlement is not implemented: a known friend gets an explicit
    /// "not implemented" notice and the balance stays as it was. An unknown
    /// friend is an error listing the known names.
    pub async fn handle_settle_debt(&self, name: String) -> McpResult<String> {
        let name = name.trim();
        let Some(friend) = self.roster.find(name) else {
            let known: Vec<&str> = self
                .roster
                .friends()
                .iter()
                .map(|f| f.name.as_str())
                .collect();
            if known.is_empty() {
                bail_public!(_, "Friend '{}' does not exist. No friends are known yet.", name);
            }
            bail_public!(
                _,
                "Friend '{}' does not exist.\nKnown friends: {}",
                name,
                known.join(", ")
            );
        };

        let Err(e) = self.roster.settle(&friend.name);
        Ok(format!(
            "{}. {}'s balance of ${:.2} was left unchanged.",
            e, friend.name, friend.owes
        ))
    }
}
