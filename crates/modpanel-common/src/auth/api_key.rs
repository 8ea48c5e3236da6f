//! Shared-secret credential presented by the game server

use subtle::ConstantTimeEq;

/// Header carrying the game server's API key
pub const API_KEY_HEADER: &str = "x-api-key";

/// Shared secret used to authenticate the game server
#[derive(Clone)]
pub struct ApiKey(String);

impl ApiKey {
    pub const HEADER: &str = API_KEY_HEADER;

    pub fn new(secret: impl Into<String>) -> Self {
        Self(secret.into())
    }

    /// Compare a presented key in constant time
    pub fn matches(&self, presented: &str) -> bool {
        if self.0.is_empty() {
            return false;
        }
        self.0.as_bytes().ct_eq(presented.as_bytes()).into()
    }
}

impl std::fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("ApiKey(***)")
    }
}
