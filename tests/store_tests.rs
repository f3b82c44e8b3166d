//! Grocery list store behaviour tests
mod common;

use grocery_mcp::{GroceryListStore, Item, ListType, NewItem, StoreError};

fn all_items(store: &GroceryListStore) -> (Vec<Item>, Vec<Item>) {
    (store.priority_items().to_vec(), store.friends_items().to_vec())
}

#[test]
fn test_toggle_flips_only_checked_for_every_item() {
    let store = common::seeded_store();
    let (priority, friends) = all_items(&store);

    for original in priority.iter().chain(friends.iter()) {
        let mut store = common::seeded_store();
        let toggled = store.toggle_item(&original.id, original.list_type).unwrap();
        assert_eq!(toggled.id, original.id);
        assert_eq!(toggled.checked, !original.checked);

        let (after_priority, after_friends) = all_items(&store);
        assert_eq!(after_priority.len(), priority.len());
        assert_eq!(after_friends.len(), friends.len());

        for (before, after) in priority
            .iter()
            .chain(friends.iter())
            .zip(after_priority.iter().chain(after_friends.iter()))
        {
            if before.id == original.id {
                let mut expected = before.clone();
                expected.checked = !before.checked;
                assert_eq!(after, &expected);
            } else {
                assert_eq!(after, before);
            }
        }
    }
}

#[test]
fn test_toggle_unknown_id_leaves_collections_identical() {
    let mut store = common::seeded_store();
    let before = all_items(&store);

    assert!(store.toggle_item("does-not-exist", ListType::Priority).is_none());
    assert!(store.toggle_item("does-not-exist", ListType::Friends).is_none());

    assert_eq!(all_items(&store), before);
}

#[test]
fn test_toggle_twice_restores_original_state() {
    let mut store = common::seeded_store();
    let original = store.find_item("3").unwrap().clone();

    store.toggle_item("3", ListType::Priority);
    store.toggle_item("3", ListType::Priority);

    assert_eq!(store.find_item("3").unwrap(), &original);
}

#[test]
fn test_add_priority_item_defaults() {
    let mut store = common::seeded_store();
    let before = store.priority_items().len();

    let id = store
        .add_item(NewItem::new("Milk", ListType::Priority))
        .id
        .clone();

    assert_eq!(store.priority_items().len(), before + 1);
    let item = store.priority_items().last().unwrap();
    assert_eq!(item.id, id);
    assert_eq!(item.name, "Milk");
    assert!(!item.checked);
    assert!(item.priority);
    assert_eq!(item.quantity, "1");
    assert_eq!(item.list_type, ListType::Priority);
}

#[test]
fn test_add_friends_item_goes_to_friends_list() {
    let mut store = common::seeded_store();
    let priority_before = store.priority_items().len();
    let friends_before = store.friends_items().len();

    store.add_item(NewItem::new("Cookies", ListType::Friends).with_quantity("2"));

    assert_eq!(store.priority_items().len(), priority_before);
    assert_eq!(store.friends_items().len(), friends_before + 1);
    let item = store.friends_items().last().unwrap();
    assert_eq!(item.name, "Cookies");
    assert!(!item.priority);
    assert_eq!(item.quantity, "2");
}

#[test]
fn test_add_house_and_weekend_trip_go_to_priority_list() {
    let mut store = common::seeded_store();
    let friends_before = store.friends_items().len();

    store.add_item(NewItem::new("Paper Towels", ListType::House));
    store.add_item(NewItem::new("Marshmallows", ListType::WeekendTrip));

    assert_eq!(store.friends_items().len(), friends_before);
    let items = store.priority_items();
    let last_two = &items[items.len() - 2..];
    assert_eq!(last_two[0].name, "Paper Towels");
    assert_eq!(last_two[0].list_type, ListType::House);
    assert!(!last_two[0].priority);
    assert_eq!(last_two[1].list_type, ListType::WeekendTrip);
    assert!(!last_two[1].priority);
}

#[test]
fn test_add_preserves_existing_order() {
    let mut store = common::seeded_store();
    let before = store.priority_items().to_vec();

    store.add_item(NewItem::new("Milk", ListType::Priority).with_group("Dairy"));

    assert_eq!(&store.priority_items()[..before.len()], before.as_slice());
    assert_eq!(
        store.priority_items().last().unwrap().group.as_deref(),
        Some("Dairy")
    );
}

#[test]
fn test_identical_adds_get_distinct_ids() {
    let mut store = common::seeded_store();
    let first = store
        .add_item(NewItem::new("Milk", ListType::Priority))
        .id
        .clone();
    let second = store
        .add_item(NewItem::new("Milk", ListType::Priority))
        .id
        .clone();
    assert_ne!(first, second);
}

#[test]
fn test_generated_ids_never_collide_with_seed_ids() {
    let mut store = common::seeded_store();
    let seeded: Vec<String> = store
        .priority_items()
        .iter()
        .chain(store.friends_items().iter())
        .map(|i| i.id.clone())
        .collect();

    for n in 0..20 {
        let id = store
            .add_item(NewItem::new(format!("Item {}", n), ListType::Friends))
            .id
            .clone();
        assert!(!seeded.contains(&id));
    }
}

#[test]
fn test_store_accepts_blank_name() {
    let mut store = GroceryListStore::new();
    let name = store.add_item(NewItem::new("", ListType::Priority)).name.clone();
    assert_eq!(name, "");
    assert_eq!(store.priority_items().len(), 1);
}

#[test]
fn test_toggle_new_item() {
    let mut store = GroceryListStore::new();
    let id = store
        .add_item(NewItem::new("Cookies", ListType::Friends))
        .id
        .clone();
    assert!(store.toggle_item(&id, ListType::Friends).unwrap().checked);
    assert!(!store.toggle_item(&id, ListType::Friends).unwrap().checked);
}

#[test]
fn test_attach_receipt_is_not_implemented_and_inert() {
    let store = common::seeded_store();
    let before = store.receipts().to_vec();

    let result = store.attach_receipt("1");
    assert!(matches!(result, Err(StoreError::NotImplemented { .. })));
    assert_eq!(store.receipts(), before.as_slice());

    // Unknown receipts are not looked up either
    assert!(matches!(
        store.attach_receipt("999"),
        Err(StoreError::NotImplemented { .. })
    ));
}
