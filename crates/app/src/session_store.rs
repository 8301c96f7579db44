//! Client-side persistence of the signed-in user.
//!
//! The stored value is the JSON form of `SessionUser`. A value that exists but
//! cannot be read is an error, not a logged-out session.

use shared_types::{AppError, SessionUser};
use std::cell::RefCell;
use std::rc::Rc;

/// Local-storage key holding the serialized session.
pub const SESSION_KEY: &str = "intelliskool.session";

pub trait SessionStore {
    fn load(&self) -> Result<Option<SessionUser>, AppError>;
    fn save(&self, user: &SessionUser) -> Result<(), AppError>;
    fn clear(&self) -> Result<(), AppError>;
}

/// Parse a stored session value. Absent or blank means logged out.
pub fn decode(raw: Option<&str>) -> Result<Option<SessionUser>, AppError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(json) => serde_json::from_str(json)
            .map(Some)
            .map_err(|e| AppError::storage(format!("Stored session is corrupt: {e}"))),
    }
}

pub fn encode(user: &SessionUser) -> Result<String, AppError> {
    serde_json::to_string(user)
        .map_err(|e| AppError::storage(format!("Failed to serialize session: {e}")))
}

/// Process-local store for platforms without browser storage.
#[derive(Default)]
pub struct MemoryStore {
    slot: RefCell<Option<String>>,
}

impl MemoryStore {
    /// A store pre-seeded with a raw value, as if left by an earlier run.
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self {
            slot: RefCell::new(Some(raw.into())),
        }
    }
}

impl SessionStore for MemoryStore {
    fn load(&self) -> Result<Option<SessionUser>, AppError> {
        decode(self.slot.borrow().as_deref())
    }

    fn save(&self, user: &SessionUser) -> Result<(), AppError> {
        *self.slot.borrow_mut() = Some(encode(user)?);
        Ok(())
    }

    fn clear(&self) -> Result<(), AppError> {
        self.slot.borrow_mut().take();
        Ok(())
    }
}

#[cfg(feature = "web")]
pub use web::LocalStorageStore;

#[cfg(feature = "web")]
mod web {
    use super::*;

    /// Browser `localStorage` under [`SESSION_KEY`].
    pub struct LocalStorageStore;

    impl LocalStorageStore {
        fn storage() -> Result<web_sys::Storage, AppError> {
            web_sys::window()
                .ok_or_else(|| AppError::storage("No browser window"))?
                .local_storage()
                .map_err(|_| AppError::storage("Local storage is not accessible"))?
                .ok_or_else(|| AppError::storage("Local storage is not available"))
        }
    }

    impl SessionStore for LocalStorageStore {
        fn load(&self) -> Result<Option<SessionUser>, AppError> {
            let raw = Self::storage()?
                .get_item(SESSION_KEY)
                .map_err(|_| AppError::storage("Failed to read stored session"))?;
            decode(raw.as_deref())
        }

        fn save(&self, user: &SessionUser) -> Result<(), AppError> {
            Self::storage()?
                .set_item(SESSION_KEY, &encode(user)?)
                .map_err(|_| AppError::storage("Failed to write session"))
        }

        fn clear(&self) -> Result<(), AppError> {
            Self::storage()?
                .remove_item(SESSION_KEY)
                .map_err(|_| AppError::storage("Failed to clear session"))
        }
    }
}

/// The store for the current platform.
pub fn platform_store() -> Rc<dyn SessionStore> {
    #[cfg(feature = "web")]
    {
        Rc::new(LocalStorageStore)
    }
    #[cfg(not(feature = "web"))]
    {
        Rc::new(MemoryStore::default())
    }
}
