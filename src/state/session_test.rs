use super::*;

// =============================================================
// MemoryStore
// =============================================================

#[test]
fn memory_store_set_get_remove() {
    let store = MemoryStore::new();
    assert_eq!(store.get("k"), None);
    store.set("k", "v");
    assert_eq!(store.get("k").as_deref(), Some("v"));
    store.set("k", "w");
    assert_eq!(store.get("k").as_deref(), Some("w"));
    store.remove("k");
    assert_eq!(store.get("k"), None);
}

#[test]
fn clear_only_drops_session_keys() {
    let store = MemoryStore::new();
    store.set(LOGGED_IN_KEY, "true");
    store.set(USER_NAME_KEY, "Ada");
    store.set("theme", "dark");
    store.clear();
    assert_eq!(store.get(LOGGED_IN_KEY), None);
    assert_eq!(store.get(USER_NAME_KEY), None);
    assert_eq!(store.get("theme").as_deref(), Some("dark"));
}

// =============================================================
// Session flag helpers
// =============================================================

#[test]
fn returning_user_is_none_for_fresh_store() {
    assert_eq!(returning_user(&MemoryStore::new()), None);
}

#[test]
fn record_login_writes_both_keys() {
    let store = MemoryStore::new();
    record_login(&store, "Ada");
    assert_eq!(store.get(LOGGED_IN_KEY).as_deref(), Some("true"));
    assert_eq!(store.get(USER_NAME_KEY).as_deref(), Some("Ada"));
    assert_eq!(returning_user(&store).as_deref(), Some("Ada"));
}

#[test]
fn returning_user_defaults_name() {
    let store = MemoryStore::new();
    store.set(LOGGED_IN_KEY, "true");
    assert_eq!(returning_user(&store).as_deref(), Some("User"));
    store.set(USER_NAME_KEY, "");
    assert_eq!(returning_user(&store).as_deref(), Some("User"));
}

#[test]
fn returning_user_requires_literal_true() {
    let store = MemoryStore::new();
    store.set(USER_NAME_KEY, "Ada");
    for flag in ["false", "1", "TRUE", ""] {
        store.set(LOGGED_IN_KEY, flag);
        assert_eq!(returning_user(&store), None, "flag {flag:?}");
    }
}

#[test]
fn forget_login_clears_flag() {
    let store = MemoryStore::new();
    record_login(&store, "Ada");
    forget_login(&store);
    assert_eq!(returning_user(&store), None);
}

// =============================================================
// LocalStorageStore outside the browser
// =============================================================

#[cfg(not(feature = "csr"))]
#[test]
fn local_storage_store_is_inert_natively() {
    let store = LocalStorageStore;
    record_login(&store, "Ada");
    assert_eq!(returning_user(&store), None);
}
