//! Grocery domain models and business logic
//!
//! - `item`: list items, list types and new-item input
//! - `receipt`: receipts and spending totals
//! - `friend`: read-only friend roster and debt totals
//! - `store`: the grocery list store with its mutation rules
//! - `seed`: initial values a session starts from
//! - `error`: non-fatal conditions reported to callers

mod error;
mod friend;
mod item;
mod receipt;
mod seed;
mod store;

pub use error::StoreError;
pub use friend::{DebtSummary, Friend, FriendRoster};
pub use item::{Item, ListType, NewItem, local_date_today};
pub use receipt::{Receipt, SpendingSummary};
pub use seed::SeedData;
pub use store::GroceryListStore;
