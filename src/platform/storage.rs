//! Local storage preference store.

use folio_core::{FolioError, FolioResult, PreferenceStore};
use gloo::storage::{LocalStorage, Storage};

/// [`PreferenceStore`] over `window.localStorage`.
///
/// Values are stored as raw strings rather than JSON so the stored theme is
/// exactly `light` or `dark`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalPreferences;

impl PreferenceStore for LocalPreferences {
    fn get(&self, key: &str) -> Option<String> {
        LocalStorage::raw().get_item(key).ok().flatten()
    }

    fn set(&mut self, key: &str, value: &str) -> FolioResult<()> {
        LocalStorage::raw()
            .set_item(key, value)
            .map_err(|e| FolioError::Storage(format!("{:?}", e)))
    }
}
