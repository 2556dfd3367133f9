//! `sessionStorage` backend for the session token store.
//!
//! SYSTEM CONTEXT
//! ==============
//! The token lives in the tab's `sessionStorage` so it survives reloads but
//! not closing the tab. The handle is re-acquired on every call instead of
//! being cached, which keeps this type `Send + Sync` for Leptos context.
//!
//! TRADE-OFFS
//! ==========
//! Outside the browser every call reports [`StorageError::Unavailable`], so a
//! server-rendered store simply runs memory-only.

#[cfg(test)]
#[path = "browser_storage_test.rs"]
mod browser_storage_test;

use session::{StorageError, TokenStorage};

/// Token storage backed by `window.sessionStorage`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserSessionStorage;

#[cfg(feature = "hydrate")]
fn session_storage() -> Result<web_sys::Storage, StorageError> {
    let window = web_sys::window().ok_or_else(|| StorageError::Unavailable("no window".to_owned()))?;
    window
        .session_storage()
        .map_err(|e| StorageError::Unavailable(format!("{e:?}")))?
        .ok_or_else(|| StorageError::Unavailable("sessionStorage disabled".to_owned()))
}

impl TokenStorage for BrowserSessionStorage {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        #[cfg(feature = "hydrate")]
        {
            session_storage()?
                .get_item(key)
                .map_err(|e| StorageError::Unavailable(format!("{e:?}")))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            Err(StorageError::Unavailable("not in a browser".to_owned()))
        }
    }

    fn save(&self, key: &str, value: &str) -> Result<(), StorageError> {
        #[cfg(feature = "hydrate")]
        {
            // Quota errors and private-mode restrictions surface here.
            session_storage()?
                .set_item(key, value)
                .map_err(|e| StorageError::Rejected(format!("{e:?}")))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
            Err(StorageError::Unavailable("not in a browser".to_owned()))
        }
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        #[cfg(feature = "hydrate")]
        {
            session_storage()?
                .remove_item(key)
                .map_err(|e| StorageError::Rejected(format!("{e:?}")))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            Err(StorageError::Unavailable("not in a browser".to_owned()))
        }
    }
}
