//! Persisted session entries.
//!
//! The session survives page reloads as two localStorage entries under
//! fixed keys: the bearer token and the serialized user. The two are
//! written and cleared as a pair; a half-present pair is treated as
//! invalid by the store's restore path.

use std::cell::RefCell;

/// localStorage key holding the bearer token.
pub const TOKEN_KEY: &str = "auth_token";

/// localStorage key holding the serialized user.
pub const USER_KEY: &str = "user_data";

/// Storage for the persisted session pair.
pub trait SessionCache {
    fn token(&self) -> Option<String>;
    fn user_json(&self) -> Option<String>;
    /// Write both entries together.
    fn store(&self, token: &str, user_json: &str);
    /// Remove both entries together.
    fn clear(&self);
}

/// localStorage-backed cache. Outside the browser every read returns
/// `None` and writes are no-ops.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserCache;

impl BrowserCache {
    pub fn new() -> Self {
        Self
    }

    #[cfg(feature = "hydrate")]
    fn read(key: &str) -> Option<String> {
        let storage = web_sys::window()?.local_storage().ok()??;
        storage.get_item(key).ok()?
    }
}

impl SessionCache for BrowserCache {
    fn token(&self) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            Self::read(TOKEN_KEY)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }

    fn user_json(&self) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            Self::read(USER_KEY)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }

    fn store(&self, token: &str, user_json: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(window) = web_sys::window() {
                if let Ok(Some(storage)) = window.local_storage() {
                    let _ = storage.set_item(TOKEN_KEY, token);
                    let _ = storage.set_item(USER_KEY, user_json);
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (token, user_json);
        }
    }

    fn clear(&self) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(window) = web_sys::window() {
                if let Ok(Some(storage)) = window.local_storage() {
                    let _ = storage.remove_item(TOKEN_KEY);
                    let _ = storage.remove_item(USER_KEY);
                }
            }
        }
    }
}

/// In-memory cache for tests and non-browser environments.
#[derive(Debug, Default)]
pub struct MemoryCache {
    token: RefCell<Option<String>>,
    user_json: RefCell<Option<String>>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed both entries, as if a previous session had persisted them.
    pub fn seeded(token: &str, user_json: &str) -> Self {
        let cache = Self::new();
        cache.store(token, user_json);
        cache
    }

    /// Seed only the token entry, leaving the user entry absent.
    pub fn with_token_only(token: &str) -> Self {
        let cache = Self::new();
        *cache.token.borrow_mut() = Some(token.to_owned());
        cache
    }
}

impl SessionCache for MemoryCache {
    fn token(&self) -> Option<String> {
        self.token.borrow().clone()
    }

    fn user_json(&self) -> Option<String> {
        self.user_json.borrow().clone()
    }

    fn store(&self, token: &str, user_json: &str) {
        *self.token.borrow_mut() = Some(token.to_owned());
        *self.user_json.borrow_mut() = Some(user_json.to_owned());
    }

    fn clear(&self) {
        *self.token.borrow_mut() = None;
        *self.user_json.borrow_mut() = None;
    }
}
