//! Formatting helper functions for the grocery MCP server
//!
//! This module contains filtering and text rendering for items, receipts
//! and friends.

use crate::grocery::{DebtSummary, Friend, Item, Receipt, SpendingSummary};

/// Apply keyword filtering (case-insensitive search in name and group)
///
/// # Arguments
/// * `items` - Items to filter in place
/// * `keyword` - Keyword to search for (case-insensitive)
pub fn apply_keyword_filter(items: &mut Vec<Item>, keyword: &str) {
    let keyword_lower = keyword.to_lowercase();
    items.retain(|item| {
        let name_matches = item.name.to_lowercase().contains(&keyword_lower);
        let group_matches = item
            .group
            .as_ref()
            .is_some_and(|g| g.to_lowercase().contains(&keyword_lower));
        name_matches || group_matches
    });
}

/// Drop items that are already checked off
pub fn apply_unchecked_filter(items: &mut Vec<Item>) {
    items.retain(|item| !item.checked);
}

fn format_item(item: &Item) -> String {
    let mut line = format!(
        "- [{}] {} {} x{} (id: {}, list: {})",
        if item.checked { "x" } else { " " },
        if item.priority { "!" } else { " " },
        item.name,
        item.quantity,
        item.id,
        item.list_type
    );
    if let Some(ref group) = item.group {
        line.push_str(&format!("\n  Group: {}", group));
    }
    if let Some(ref friend) = item.requested_by {
        line.push_str(&format!("\n  Requested by: {}", friend));
    }
    line.push('\n');
    line
}

/// Format a titled section of items
///
/// # Arguments
/// * `title` - Section heading
/// * `items` - Items in display order
///
/// # Returns
/// Formatted section, with a placeholder line when empty
pub fn format_item_section(title: &str, items: &[Item]) -> String {
    let mut result = format!("{} ({}):\n", title, items.len());
    if items.is_empty() {
        result.push_str("  No items\n");
    }
    for item in items {
        result.push_str(&format_item(item));
    }
    result
}

/// Format receipts with the spending summary on top
pub fn format_receipts(receipts: &[Receipt], summary: SpendingSummary) -> String {
    let mut result = format!(
        "Total spent: ${:.2} over {} shopping trip{}\n\n",
        summary.total_spent,
        summary.trips,
        if summary.trips == 1 { "" } else { "s" }
    );
    if receipts.is_empty() {
        result.push_str("No receipts found");
        return result;
    }
    result.push_str("Recent activity:\n");
    for receipt in receipts {
        result.push_str(&format!(
            "- [{}] {} ({}): ${:.2}{}\n",
            receipt.id,
            receipt.store,
            receipt.date,
            receipt.amount,
            if receipt.has_image() { " [photo]" } else { "" }
        ));
    }
    result
}

/// Format friends' balances with the debt summary on top
///
/// # Arguments
/// * `friends` - Friends in display order (usually highest debt first)
/// * `summary` - Totals across all friends
pub fn format_debts(friends: &[&Friend], summary: DebtSummary) -> String {
    let mut result = format!(
        "Total owed: ${:.2} by {} friend{}\n\n",
        summary.total_owed,
        summary.friends_with_debt,
        if summary.friends_with_debt == 1 { "" } else { "s" }
    );
    if friends.is_empty() {
        result.push_str("No friends found");
        return result;
    }
    for friend in friends {
        let status = if friend.has_debt() {
            format!("owes you ${:.2}", friend.owes)
        } else {
            "all settled up".to_string()
        };
        result.push_str(&format!("- ({}) {}: {}\n", friend.avatar, friend.name, status));
    }
    result
}
