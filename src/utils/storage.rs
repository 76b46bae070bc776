// ============================================================================
// STORAGE - Almacenamiento durable clave/valor (localStorage)
// ============================================================================

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use web_sys::{window, Storage};
use crate::error::ApiError;

/// Almacenamiento síncrono de strings crudos
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), ApiError>;
    fn remove_item(&self, key: &str) -> Result<(), ApiError>;
}

pub fn get_local_storage() -> Option<Storage> {
    window()?.local_storage().ok()?
}

/// `window.localStorage` del navegador
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

impl KeyValueStore for BrowserStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        get_local_storage()?.get_item(key).ok()?
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), ApiError> {
        let storage = get_local_storage()
            .ok_or_else(|| ApiError::Storage("localStorage unavailable".to_string()))?;
        storage
            .set_item(key, value)
            .map_err(|_| ApiError::Storage(format!("could not write key '{}'", key)))
    }

    fn remove_item(&self, key: &str) -> Result<(), ApiError> {
        let storage = get_local_storage()
            .ok_or_else(|| ApiError::Storage("localStorage unavailable".to_string()))?;
        storage
            .remove_item(key)
            .map_err(|_| ApiError::Storage(format!("could not remove key '{}'", key)))
    }
}

/// Storage en memoria; los clones comparten contenido (simula recargas de página)
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    items: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.items.borrow().contains_key(key)
    }
}

impl KeyValueStore for MemoryStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), ApiError> {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), ApiError> {
        self.items.borrow_mut().remove(key);
        Ok(())
    }
}
