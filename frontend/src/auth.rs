//! Access token shared with the rest of the marketplace through `localStorage`.

use gloo_storage::{LocalStorage, Storage};
use secrecy::SecretString;

const ACCESS_TOKEN_KEY: &str = "accessToken";

/// Stored raw by the login page, so it is read without JSON decoding.
pub fn access_token() -> Option<SecretString> {
    LocalStorage::raw()
        .get_item(ACCESS_TOKEN_KEY)
        .ok()
        .flatten()
        .filter(|token| !token.trim().is_empty())
        .map(SecretString::new)
}

pub fn forget_access_token() {
    LocalStorage::delete(ACCESS_TOKEN_KEY);
}
