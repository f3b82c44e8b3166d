//! Initial values the store and friend roster start from
//!
//! A seed is configuration input only: it is read at startup and never
//! written back.

use super::friend::Friend;
use super::item::{Item, ListType};
use super::receipt::Receipt;
use serde::{Deserialize, Serialize};

/// Everything needed to start a session
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeedData {
    pub priority_items: Vec<Item>,
    pub friends_items: Vec<Item>,
    pub receipts: Vec<Receipt>,
    pub friends: Vec<Friend>,
}

fn item(id: &str, name: &str, quantity: &str, checked: bool, list_type: ListType) -> Item {
    Item {
        id: id.to_string(),
        name: name.to_string(),
        quantity: quantity.to_string(),
        checked,
        priority: false,
        list_type,
        group: None,
        requested_by: None,
        friend_avatar: None,
        friend_color: None,
        added_on: None,
    }
}

fn requested(mut item: Item, friend: &Friend) -> Item {
    item.requested_by = Some(friend.name.clone());
    item.friend_avatar = Some(friend.avatar.clone());
    item.friend_color = Some(friend.color.clone());
    item
}

fn receipt(id: &str, store: &str, date: &str, amount: f64) -> Receipt {
    Receipt {
        id: id.to_string(),
        store: store.to_string(),
        date: date.to_string(),
        amount,
        image_uri: None,
    }
}

fn friend(name: &str, avatar: &str, color: &str, owes: f64) -> Friend {
    Friend {
        name: name.to_string(),
        avatar: avatar.to_string(),
        color: color.to_string(),
        owes,
    }
}

impl SeedData {
    /// Built-in sample lists used when no seed file is given
    pub fn builtin() -> Self {
        const HOUSE_SPLIT: &str = "House 🏠 Split";

        let sarah = friend("Sarah", "S", "#ec4899", 24.5);
        let mike = friend("Mike", "M", "#3b82f6", 18.0);
        let emma = friend("Emma", "E", "#10b981", 0.0);

        let mut bananas = item("1", "Organic Bananas", "6", false, ListType::Priority);
        bananas.priority = true;
        bananas.group = Some(HOUSE_SPLIT.to_string());
        let mut yogurt = item("2", "Greek Yogurt", "2", true, ListType::Priority);
        yogurt.group = Some(HOUSE_SPLIT.to_string());
        let mut bread = item("3", "Sourdough Bread", "1", false, ListType::Priority);
        bread.priority = true;
        let mut avocados = item("4", "Avocados", "4", false, ListType::Priority);
        avocados.group = Some(HOUSE_SPLIT.to_string());
        let almond_milk = item("5", "Almond Milk", "1", true, ListType::Priority);

        let friends_items = vec![
            requested(item("6", "Dark Chocolate", "2", false, ListType::Friends), &sarah),
            requested(item("7", "Coffee Beans", "1", false, ListType::Friends), &mike),
            requested(item("8", "Pasta", "3", true, ListType::Friends), &sarah),
        ];

        Self {
            priority_items: vec![bananas, yogurt, bread, avocados, almond_milk],
            friends_items,
            receipts: vec![
                receipt("1", "Whole Foods", "Dec 15", 67.42),
                receipt("2", "Trader Joe's", "Dec 14", 34.18),
                receipt("3", "Local Bakery", "Dec 13", 12.5),
                receipt("4", "Whole Foods", "Dec 12", 89.23),
            ],
            friends: vec![sarah, mike, emma],
        }
    }
}
