use shoplist_core::{ItemValidationError, Store, StoreError};
use std::collections::HashSet;
use uuid::Uuid;

fn fruit_store() -> (Store, Uuid, Uuid) {
    let mut store = Store::new();
    let apples = store.add_item("apples").unwrap();
    let oranges = store.add_item("oranges").unwrap();
    store.toggle_checked(oranges).unwrap();
    (store, apples, oranges)
}

#[test]
fn add_returns_distinct_ids() {
    let mut store = Store::new();
    let ids: Vec<Uuid> = (0..50)
        .map(|index| store.add_item(format!("item {index}").as_str()).unwrap())
        .collect();

    let unique: HashSet<Uuid> = ids.iter().copied().collect();
    assert_eq!(unique.len(), ids.len());
    assert_eq!(store.len(), 50);
}

#[test]
fn add_rejects_empty_and_absent_names() {
    let mut store = Store::new();
    store.add_item("apples").unwrap();

    let err = store.add_item("").unwrap_err();
    assert_eq!(err, StoreError::Validation(ItemValidationError::EmptyName));
    let err = store.add_item(None::<&str>).unwrap_err();
    assert_eq!(err, StoreError::Validation(ItemValidationError::EmptyName));

    assert_eq!(store.len(), 1);
}

#[test]
fn add_then_find_returns_unchecked_item() {
    let mut store = Store::new();
    let id = store.add_item("apples").unwrap();

    let item = store.find_by_id(id).unwrap();
    assert_eq!(item.id, id);
    assert_eq!(item.name, "apples");
    assert!(!item.checked);
    assert!(!item.editing);
}

#[test]
fn find_unknown_id_returns_not_found() {
    let store = Store::new();
    let missing = Uuid::new_v4();
    assert_eq!(store.find_by_id(missing), Err(StoreError::NotFound(missing)));
}

#[test]
fn remove_unknown_id_leaves_collection_unchanged() {
    let (mut store, _, _) = fruit_store();
    let before = store.items().to_vec();

    let missing = Uuid::new_v4();
    let err = store.remove_item(missing).unwrap_err();
    assert_eq!(err, StoreError::NotFound(missing));
    assert_eq!(store.items(), before.as_slice());
}

#[test]
fn remove_known_id_drops_exactly_one_and_keeps_order() {
    let mut store = Store::new();
    let a = store.add_item("a").unwrap();
    let b = store.add_item("b").unwrap();
    let c = store.add_item("c").unwrap();

    let removed = store.remove_item(b).unwrap();
    assert_eq!(removed.name, "b");
    let ids: Vec<Uuid> = store.items().iter().map(|item| item.id).collect();
    assert_eq!(ids, vec![a, c]);
}

#[test]
fn removed_id_is_not_reissued() {
    let mut store = Store::new();
    let first = store.add_item("apples").unwrap();
    store.remove_item(first).unwrap();

    let second = store.add_item("apples").unwrap();
    assert_ne!(first, second);
    assert!(store.find_by_id(first).is_err());
}

#[test]
fn toggle_checked_twice_restores_original_value() {
    let (mut store, apples, oranges) = fruit_store();

    store.toggle_checked(apples).unwrap();
    store.toggle_checked(apples).unwrap();
    assert!(!store.find_by_id(apples).unwrap().checked);

    store.toggle_checked(oranges).unwrap();
    store.toggle_checked(oranges).unwrap();
    assert!(store.find_by_id(oranges).unwrap().checked);
}

#[test]
fn toggle_editing_allows_several_items_in_edit_mode() {
    let (mut store, apples, oranges) = fruit_store();
    store.toggle_editing(apples).unwrap();
    store.toggle_editing(oranges).unwrap();

    assert!(store.items().iter().all(|item| item.editing));
}

#[test]
fn rename_to_empty_fails_and_keeps_name() {
    let (mut store, apples, _) = fruit_store();

    let err = store.rename_item(apples, "").unwrap_err();
    assert_eq!(err, StoreError::Validation(ItemValidationError::EmptyName));
    assert_eq!(store.find_by_id(apples).unwrap().name, "apples");

    store.rename_item(apples, "green apples").unwrap();
    assert_eq!(store.find_by_id(apples).unwrap().name, "green apples");
}

#[test]
fn toggle_on_unknown_id_reports_not_found() {
    let (mut store, _, _) = fruit_store();
    let missing = Uuid::new_v4();

    assert_eq!(
        store.toggle_checked(missing),
        Err(StoreError::NotFound(missing))
    );
    assert_eq!(
        store.toggle_editing(missing),
        Err(StoreError::NotFound(missing))
    );
}

#[test]
fn view_state_setters_store_values_verbatim() {
    let mut store = Store::new();
    store.set_filter_text("  Ap ");
    assert_eq!(store.filter_text(), "  Ap ");

    store.toggle_show_checked();
    assert!(!store.show_checked());
    store.set_show_checked(true);
    assert!(store.show_checked());
}
