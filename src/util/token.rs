//! Credential token lookup.
//!
//! The admin token is written to `localStorage` by the login flow, which is
//! outside this crate. Here it is presence-checked only: its value gates
//! whether data fetches are attempted at all. Requires a browser
//! environment; SSR builds see no token.

#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "aToken";

/// Read the stored admin token, if any. Empty strings count as absent.
pub fn read_token() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let window = web_sys::window()?;
        let storage = window.local_storage().ok().flatten()?;
        let token = storage.get_item(STORAGE_KEY).ok().flatten()?;
        if token.is_empty() { None } else { Some(token) }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}
