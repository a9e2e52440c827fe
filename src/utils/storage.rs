use gloo_storage::{LocalStorage, Storage};
use serde::{de::DeserializeOwned, Serialize};

use crate::error::AppError;

pub fn save_to_storage<T: Serialize>(key: &str, value: &T) -> Result<(), AppError> {
    LocalStorage::set(key, value).map_err(|e| AppError::Storage(format!("saving '{}': {}", key, e)))
}

pub fn load_from_storage<T: DeserializeOwned>(key: &str) -> Option<T> {
    LocalStorage::get(key).ok()
}

pub fn remove_from_storage(key: &str) {
    LocalStorage::delete(key);
}
