//! Common test utilities for integration tests
#![allow(dead_code)]

use grocery_mcp::{GroceryListStore, GroceryServerHandler, SeedData};
use std::io::Write;
use tempfile::NamedTempFile;

/// Create a store seeded with the built-in sample lists
pub fn seeded_store() -> GroceryListStore {
    GroceryListStore::from_seed(SeedData::builtin())
}

/// Create a test handler seeded with the built-in sample lists
pub fn get_test_handler() -> GroceryServerHandler {
    GroceryServerHandler::from_seed(SeedData::builtin())
}

/// Write a seed file to a temporary location
pub fn write_seed_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

/// Extract item ID from add_item() response message
/// Response format: "Item added with ID: <id> (list: <type>)"
pub fn extract_id_from_response(response: &str) -> String {
    if let Some(start) = response.find("ID: ") {
        let id_part = &response[start + 4..];
        if let Some(end) = id_part.find(" (") {
            return id_part[..end].trim().to_string();
        }
    }
    response
        .split_whitespace()
        .last()
        .unwrap_or("")
        .trim_end_matches(')')
        .to_string()
}
