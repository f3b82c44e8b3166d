use super::error::StoreError;
use super::item::{Item, ListType, NewItem, default_quantity, local_date_today};
use super::receipt::{Receipt, SpendingSummary};
use super::seed::SeedData;
use std::collections::HashSet;
use std::convert::Infallible;
use tracing::{debug, warn};

pub struct GroceryListStore {
    /// Items filed under every list type except `Friends`
    ///
    /// House and Weekend Trip items also live here; routing only ever
    /// distinguishes Friends from everything else.
    pub(crate) priority_items: Vec<Item>,

    /// Items filed under `Friends`
    pub(crate) friends_items: Vec<Item>,

    /// Receipts, fixed after seeding
    pub(crate) receipts: Vec<Receipt>,

    /// Every item ID handed out or seeded during this session
    ///
    /// Only consulted when generating IDs; lookups scan the Vecs, which stay
    /// small enough for a personal shopping list.
    pub(crate) item_ids: HashSet<String>,

    /// Counter for generating unique item IDs
    pub(crate) item_counter: u64,
}

impl Default for GroceryListStore {
    fn default() -> Self {
        Self {
            priority_items: Vec::new(),
            friends_items: Vec::new(),
            receipts: Vec::new(),
            item_ids: HashSet::new(),
            item_counter: 0,
        }
    }
}

impl GroceryListStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store seeded with initial items and receipts
    ///
    /// Friends in the seed are ignored here; they belong to the
    /// [`FriendRoster`](super::FriendRoster).
    pub fn from_seed(seed: SeedData) -> Self {
        let mut item_ids = HashSet::new();
        for item in seed.priority_items.iter().chain(seed.friends_items.iter()) {
            if !item_ids.insert(item.id.clone()) {
                warn!(item_id = %item.id, "duplicate item ID in seed; toggling will only reach the first");
            }
        }

        Self {
            priority_items: seed.priority_items,
            friends_items: seed.friends_items,
            receipts: seed.receipts,
            item_ids,
            item_counter: 0,
        }
    }

    pub fn priority_items(&self) -> &[Item] {
        &self.priority_items
    }

    pub fn friends_items(&self) -> &[Item] {
        &self.friends_items
    }

    pub fn receipts(&self) -> &[Receipt] {
        &self.receipts
    }

    /// Generate a new unique item ID
    ///
    /// IDs are decimal counter values that skip anything already in use, so
    /// they stay unique no matter how quickly items are added.
    pub fn generate_item_id(&mut self) -> String {
        loop {
            self.item_counter += 1;
            let id = self.item_counter.to_string();
            if self.item_ids.insert(id.clone()) {
                return id;
            }
        }
    }

    /// Collection an item of the given list type is stored in
    fn collection_mut(&mut self, list_type: ListType) -> &mut Vec<Item> {
        if list_type.is_friends() {
            &mut self.friends_items
        } else {
            &mut self.priority_items
        }
    }

    /// Find an item by its ID in either collection
    pub fn find_item(&self, id: &str) -> Option<&Item> {
        self.priority_items
            .iter()
            .chain(self.friends_items.iter())
            .find(|item| item.id == id)
    }

    /// Items whose own list type matches, across both collections
    pub fn items_of(&self, list_type: ListType) -> Vec<&Item> {
        self.priority_items
            .iter()
            .chain(self.friends_items.iter())
            .filter(|item| item.list_type == list_type)
            .collect()
    }

    /// Flip the checked state of an item
    ///
    /// The list type only selects which collection is searched: `Friends`
    /// searches the friends collection, anything else the priority one.
    ///
    /// # Returns
    /// The toggled item, or `None` if no item in the selected collection has
    /// that ID (the store is left unchanged)
    pub fn toggle_item(&mut self, id: &str, list_type: ListType) -> Option<&Item> {
        let item = self
            .collection_mut(list_type)
            .iter_mut()
            .find(|item| item.id == id)?;
        item.checked = !item.checked;
        debug!(item_id = %id, list_type = %list_type, checked = item.checked, "toggled item");
        Some(&*item)
    }

    /// Append a new item to the collection its list type routes to
    ///
    /// The item gets a fresh ID, starts unchecked, and is flagged priority
    /// only when created for the `Priority` list. A missing or blank
    /// quantity becomes `"1"`. The name is stored as given; rejecting blank
    /// names is the caller's job.
    pub fn add_item(&mut self, new_item: NewItem) -> &Item {
        let id = self.generate_item_id();
        let NewItem {
            name,
            list_type,
            quantity,
            group,
            requested_by,
            friend_avatar,
            friend_color,
        } = new_item;

        let quantity = match quantity {
            Some(q) if !q.trim().is_empty() => q,
            _ => default_quantity(),
        };

        let item = Item {
            id,
            name,
            quantity,
            checked: false,
            priority: list_type == ListType::Priority,
            list_type,
            group,
            requested_by,
            friend_avatar,
            friend_color,
            added_on: Some(local_date_today()),
        };
        debug!(item_id = %item.id, name = %item.name, list_type = %list_type, "added item");

        let collection = self.collection_mut(list_type);
        collection.push(item);
        &collection[collection.len() - 1]
    }

    /// Attach a photo to a receipt
    ///
    /// There is no image pipeline yet: nothing is looked up or changed and
    /// `NotImplemented` is always returned.
    pub fn attach_receipt(&self, receipt_id: &str) -> Result<Infallible, StoreError> {
        debug!(receipt_id, "receipt attachment requested");
        Err(StoreError::NotImplemented {
            feature: "Receipt photo attachment",
        })
    }

    pub fn spending_summary(&self) -> SpendingSummary {
        SpendingSummary::from_receipts(&self.receipts)
    }
}
