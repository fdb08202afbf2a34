//! # Token Store
//!
//! Holds at most one session token under a fixed key. The store is the only
//! source of truth for "is a user logged in": consumers read it through
//! [`TokenStore::get`] and learn about changes by subscribing instead of
//! polling storage.
//!
//! Listeners run after every [`TokenStore::set`], [`TokenStore::clear`] and
//! [`TokenStore::refresh`], with the token as it is in storage afterwards.
//! `refresh` exists for changes made behind the store's back, such as another
//! tab writing the same `localStorage` key.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("browser storage is not available")]
    Unavailable,

    #[error("failed to write to browser storage: {0}")]
    Write(String),
}

/// Key/value persistence behind the token store.
pub trait TokenStorage {
    fn read(&self, key: &str) -> Option<String>;
    fn write(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &str);
}

/// `window.localStorage`, looked up on every access.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn local() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl TokenStorage for BrowserStorage {
    fn read(&self, key: &str) -> Option<String> {
        Self::local()?.get_item(key).ok().flatten()
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let storage = Self::local().ok_or(StorageError::Unavailable)?;
        storage
            .set_item(key, value)
            .map_err(|e| StorageError::Write(format!("{:?}", e)))
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::local() {
            if let Err(e) = storage.remove_item(key) {
                log::warn!("Failed to remove {} from storage: {:?}", key, e);
            }
        }
    }
}

/// In-process storage. Clones share the same map.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: Rc<RefCell<HashMap<String, String>>>,
    read_only: Rc<Cell<bool>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make subsequent writes fail, like a full quota.
    pub fn set_read_only(&self, read_only: bool) {
        self.read_only.set(read_only);
    }
}

impl TokenStorage for MemoryStorage {
    fn read(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.read_only.get() {
            return Err(StorageError::Write("quota exceeded".to_string()));
        }
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Listener = Rc<dyn Fn(Option<&str>)>;

/// Observable session token store. Clones share storage and listeners.
#[derive(Clone)]
pub struct TokenStore<S> {
    storage: S,
    key: &'static str,
    listeners: Rc<RefCell<Vec<(ListenerId, Listener)>>>,
    next_id: Rc<Cell<u64>>,
}

impl<S: TokenStorage> TokenStore<S> {
    pub fn new(storage: S, key: &'static str) -> Self {
        Self {
            storage,
            key,
            listeners: Rc::new(RefCell::new(Vec::new())),
            next_id: Rc::new(Cell::new(0)),
        }
    }

    pub fn get(&self) -> Option<String> {
        self.storage.read(self.key)
    }

    pub fn is_logged_in(&self) -> bool {
        self.get().is_some()
    }

    /// Replace the stored token.
    pub fn set(&self, token: &str) -> Result<(), StorageError> {
        self.storage.write(self.key, token)?;
        self.notify();
        Ok(())
    }

    pub fn clear(&self) {
        self.storage.remove(self.key);
        self.notify();
    }

    /// Re-read storage and tell listeners what it holds now.
    pub fn refresh(&self) {
        self.notify();
    }

    pub fn subscribe(&self, listener: impl Fn(Option<&str>) + 'static) -> ListenerId {
        let id = ListenerId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        self.listeners.borrow_mut().push((id, Rc::new(listener)));
        id
    }

    /// Returns `false` when `id` was not subscribed.
    pub fn unsubscribe(&self, id: ListenerId) -> bool {
        let mut listeners = self.listeners.borrow_mut();
        let before = listeners.len();
        listeners.retain(|(existing, _)| *existing != id);
        listeners.len() != before
    }

    fn notify(&self) {
        // Snapshot so a listener may subscribe or unsubscribe while running.
        let listeners: Vec<Listener> = self
            .listeners
            .borrow()
            .iter()
            .map(|(_, listener)| Rc::clone(listener))
            .collect();
        let current = self.get();
        for listener in listeners {
            listener(current.as_deref());
        }
    }
}
