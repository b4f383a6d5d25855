//! Remember the signed-in user in `localStorage` across reloads.

#[cfg(test)]
#[path = "persist_test.rs"]
mod persist_test;

use models::User;

#[cfg(feature = "csr")]
const STORAGE_KEY: &str = "alchats.user";

#[cfg(any(test, feature = "csr"))]
fn encode_user(user: &User) -> Option<String> {
    serde_json::to_string(user).ok()
}

/// Stored value back to a user; corrupt entries read as signed out.
#[cfg(any(test, feature = "csr"))]
fn decode_user(raw: &str) -> Option<User> {
    serde_json::from_str(raw).ok()
}

pub fn load_user() -> Option<User> {
    #[cfg(feature = "csr")]
    {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
        let raw = storage.get_item(STORAGE_KEY).ok().flatten()?;
        decode_user(&raw)
    }
    #[cfg(not(feature = "csr"))]
    {
        None
    }
}

/// Store `user`, or clear the entry when `None`.
pub fn save_user(user: Option<&User>) {
    #[cfg(feature = "csr")]
    {
        let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
            log::warn!("localStorage unavailable; session will not survive reload");
            return;
        };
        let result = match user.and_then(encode_user) {
            Some(raw) => storage.set_item(STORAGE_KEY, &raw),
            None => storage.remove_item(STORAGE_KEY),
        };
        if let Err(e) = result {
            log::warn!("failed to update stored session: {e:?}");
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = user;
    }
}
