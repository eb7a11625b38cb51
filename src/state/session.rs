//! Persisted "welcome back" flag.
//!
//! The flag only drives a greeting banner on the next page load. It is not
//! an auth credential and nothing here talks to the backend.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use crate::util::copy::DEFAULT_USER_NAME;

pub const LOGGED_IN_KEY: &str = "userLoggedIn";
pub const USER_NAME_KEY: &str = "userName";

/// String key-value storage that survives page loads.
pub trait SessionStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);

    /// Drop both session keys.
    fn clear(&self) {
        self.remove(LOGGED_IN_KEY);
        self.remove(USER_NAME_KEY);
    }
}

/// Name of the remembered user, if the logged-in flag is set.
pub fn returning_user<S: SessionStore + ?Sized>(store: &S) -> Option<String> {
    if store.get(LOGGED_IN_KEY).as_deref() != Some("true") {
        return None;
    }
    let name = store
        .get(USER_NAME_KEY)
        .filter(|n| !n.is_empty())
        .unwrap_or_else(|| DEFAULT_USER_NAME.to_owned());
    Some(name)
}

/// Remember a successful login.
pub fn record_login<S: SessionStore + ?Sized>(store: &S, name: &str) {
    store.set(LOGGED_IN_KEY, "true");
    store.set(USER_NAME_KEY, name);
}

pub fn forget_login<S: SessionStore + ?Sized>(store: &S) {
    store.clear();
}

/// In-process store, used where no browser storage exists.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_owned(), value.to_owned());
    }

    fn remove(&self, key: &str) {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(key);
    }
}

/// Browser `localStorage`. Requires the `csr` feature to do anything.
///
/// Storage errors (private mode, quota, disabled storage) are logged and
/// treated as missing values.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorageStore;

#[cfg(feature = "csr")]
fn local_storage() -> Option<web_sys::Storage> {
    let window = web_sys::window()?;
    match window.local_storage() {
        Ok(storage) => storage,
        Err(e) => {
            leptos::logging::warn!("localStorage unavailable: {e:?}");
            None
        }
    }
}

impl SessionStore for LocalStorageStore {
    fn get(&self, key: &str) -> Option<String> {
        #[cfg(feature = "csr")]
        {
            match local_storage()?.get_item(key) {
                Ok(value) => value,
                Err(e) => {
                    leptos::logging::warn!("localStorage read of {key} failed: {e:?}");
                    None
                }
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            None
        }
    }

    fn set(&self, key: &str, value: &str) {
        #[cfg(feature = "csr")]
        {
            let Some(storage) = local_storage() else {
                return;
            };
            if let Err(e) = storage.set_item(key, value) {
                leptos::logging::warn!("localStorage write of {key} failed: {e:?}");
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (key, value);
        }
    }

    fn remove(&self, key: &str) {
        #[cfg(feature = "csr")]
        {
            let Some(storage) = local_storage() else {
                return;
            };
            if let Err(e) = storage.remove_item(key) {
                leptos::logging::warn!("localStorage remove of {key} failed: {e:?}");
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
        }
    }
}
