use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Get the current date in local timezone
pub fn local_date_today() -> NaiveDate {
    Local::now().date_naive()
}

/// Presentation bucket an item is filed under
///
/// Serialized with the same labels the add-item form shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ListType {
    /// Urgent items the user needs to buy
    #[default]
    Priority,
    /// Items requested by friends
    Friends,
    /// Shared household items
    House,
    /// Items for an upcoming trip
    #[serde(rename = "Weekend Trip")]
    WeekendTrip,
}

impl ListType {
    /// All list types in the order the add-item form offers them
    pub const ALL: [ListType; 4] = [
        ListType::Priority,
        ListType::Friends,
        ListType::House,
        ListType::WeekendTrip,
    ];

    /// Display label of this list type
    pub fn label(&self) -> &'static str {
        match self {
            ListType::Priority => "Priority",
            ListType::Friends => "Friends",
            ListType::House => "House",
            ListType::WeekendTrip => "Weekend Trip",
        }
    }

    /// Whether items of this type are stored in the friends collection
    ///
    /// Only `Friends` is; every other type shares the priority collection.
    pub fn is_friends(&self) -> bool {
        *self == ListType::Friends
    }
}

impl fmt::Display for ListType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ListType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "priority" => Ok(ListType::Priority),
            "friends" => Ok(ListType::Friends),
            "house" | "house 🏠" => Ok(ListType::House),
            "weekend trip" | "weekend_trip" => Ok(ListType::WeekendTrip),
            _ => Err(format!(
                "Invalid list type '{}'. Valid options are: Priority, Friends, House, Weekend Trip",
                s
            )),
        }
    }
}

/// A single entry on a grocery list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Opaque unique identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Display quantity, kept as free text ("6", "2 packs")
    #[serde(default = "default_quantity")]
    pub quantity: String,
    /// Whether the item has been picked up
    #[serde(default)]
    pub checked: bool,
    /// Urgency flag, fixed at creation
    #[serde(default)]
    pub priority: bool,
    /// Bucket the item was created for
    #[serde(default)]
    pub list_type: ListType,
    /// Optional free-text category (e.g. "House Split")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    /// Name of the friend who asked for this item
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requested_by: Option<String>,
    /// Avatar initial of the requesting friend
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub friend_avatar: Option<String>,
    /// Avatar color of the requesting friend
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub friend_color: Option<String>,
    /// Date the item was added during this session
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub added_on: Option<NaiveDate>,
}

pub(crate) fn default_quantity() -> String {
    "1".to_string()
}

impl Item {
    /// Check if this item was requested by a friend
    pub fn is_from_friend(&self) -> bool {
        self.requested_by.is_some()
    }
}

/// Input for creating a new item
///
/// Everything the caller may supply; id, checked state and the priority flag
/// are always decided by the store.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NewItem {
    pub name: String,
    pub list_type: ListType,
    pub quantity: Option<String>,
    pub group: Option<String>,
    pub requested_by: Option<String>,
    pub friend_avatar: Option<String>,
    pub friend_color: Option<String>,
}

impl NewItem {
    /// Create input with just a name and list type
    pub fn new(name: impl Into<String>, list_type: ListType) -> Self {
        Self {
            name: name.into(),
            list_type,
            ..Self::default()
        }
    }

    /// Set the quantity
    pub fn with_quantity(mut self, quantity: impl Into<String>) -> Self {
        self.quantity = Some(quantity.into());
        self
    }

    /// Set the group label
    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        self.group = Some(group.into());
        self
    }
}
