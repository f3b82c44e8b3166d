use crate::grocery::{ListType, SeedData};
use anyhow::{Context, Result, bail};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Where a session's initial lists come from
///
/// Seed files are only ever read. Changes made during a session are lost
/// when the process exits.
pub struct SeedSource {
    file_path: Option<PathBuf>,
}

impl SeedSource {
    /// Use the built-in sample lists
    pub fn builtin() -> Self {
        Self { file_path: None }
    }

    /// Read initial lists from a TOML file
    pub fn file(file_path: impl AsRef<Path>) -> Self {
        Self {
            file_path: Some(file_path.as_ref().to_path_buf()),
        }
    }

    pub fn load(&self) -> Result<SeedData> {
        let Some(file_path) = &self.file_path else {
            return Ok(SeedData::builtin());
        };

        if !file_path.exists() {
            warn!(path = %file_path.display(), "seed file not found, using built-in lists");
            return Ok(SeedData::builtin());
        }

        let content = fs::read_to_string(file_path)
            .with_context(|| format!("Failed to read seed file {}", file_path.display()))?;
        let seed: SeedData = toml::from_str(&content)
            .with_context(|| format!("Failed to parse seed file {}", file_path.display()))?;
        check_seed(&seed)
            .with_context(|| format!("Invalid seed file {}", file_path.display()))?;
        info!(
            path = %file_path.display(),
            priority_items = seed.priority_items.len(),
            friends_items = seed.friends_items.len(),
            receipts = seed.receipts.len(),
            friends = seed.friends.len(),
            "loaded seed file"
        );
        Ok(seed)
    }
}

/// Reject seeds that break the item, receipt and friend invariants
///
/// - item IDs are unique across both lists
/// - friends items are `Friends`, priority items are anything else
/// - only `Priority` items carry the priority flag
/// - amounts and balances are finite and not negative
/// - friend names are unique
fn check_seed(seed: &SeedData) -> Result<()> {
    let mut item_ids = HashSet::new();
    let lists = [
        ("priority_items", &seed.priority_items, false),
        ("friends_items", &seed.friends_items, true),
    ];
    for (list_name, items, is_friends_list) in lists {
        for item in items {
            if !item_ids.insert(item.id.as_str()) {
                bail!("Duplicate item ID '{}' in {}", item.id, list_name);
            }
            if item.list_type.is_friends() != is_friends_list {
                bail!(
                    "Item '{}' has list type {} and cannot be placed in {}",
                    item.id,
                    item.list_type,
                    list_name
                );
            }
            if item.priority && item.list_type != ListType::Priority {
                bail!(
                    "Item '{}' is flagged priority but has list type {}",
                    item.id,
                    item.list_type
                );
            }
        }
    }

    for receipt in &seed.receipts {
        if !receipt.amount.is_finite() || receipt.amount < 0.0 {
            bail!("Receipt '{}' has invalid amount {}", receipt.id, receipt.amount);
        }
    }

    let mut friend_names = HashSet::new();
    for friend in &seed.friends {
        if !friend_names.insert(friend.name.as_str()) {
            bail!("Duplicate friend '{}'", friend.name);
        }
        if !friend.owes.is_finite() || friend.owes < 0.0 {
            bail!("Friend '{}' has invalid balance {}", friend.name, friend.owes);
        }
    }

    Ok(())
}
