//! MCP tool handlers for the grocery server
//!
//! This module contains the implementation of all MCP tool handlers.
//! Each handler is in a separate file for better organization.

pub mod add_item;
pub mod attach_receipt;
pub mod debts;
pub mod list_items;
pub mod list_types;
pub mod receipts;
pub mod toggle_item;
