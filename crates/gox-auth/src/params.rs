//! Request parameter map

use std::collections::BTreeMap;

use crate::error::{AuthError, AuthResult};

/// Parameter name reserved for the request nonce
pub const NONCE_KEY: &str = "nonce";

/// Request parameters, one value per name
///
/// Keys are kept sorted so the encoded form is deterministic; the bytes
/// that get signed are the bytes that get sent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestParams {
    entries: BTreeMap<String, String>,
}

impl RequestParams {
    /// Create an empty parameter map
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    /// Insert a parameter, returning the previous value for that name
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.entries.insert(key.into(), value.into())
    }

    /// Insert a parameter only when a value is present
    pub fn insert_opt(&mut self, key: impl Into<String>, value: Option<impl Into<String>>) {
        if let Some(value) = value {
            self.insert(key, value);
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// URL-encode as `key=value&...` in key order
    pub fn encode(&self) -> AuthResult<String> {
        serde_urlencoded::to_string(&self.entries).map_err(|e| AuthError::Encode(e.to_string()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for RequestParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_is_sorted_and_escaped() {
        let params = RequestParams::new()
            .with("type", "bid")
            .with("address", "1Gox Addr&x=1")
            .with("amount_int", "100000000");

        assert_eq!(
            params.encode().unwrap(),
            "address=1Gox+Addr%26x%3D1&amount_int=100000000&type=bid"
        );
    }

    #[test]
    fn test_unique_keys() {
        let mut params = RequestParams::new().with("type", "bid");
        assert_eq!(params.insert("type", "ask"), Some("bid".to_string()));
        assert_eq!(params.len(), 1);
        assert_eq!(params.get("type"), Some("ask"));
    }

    #[test]
    fn test_insert_opt_and_collect() {
        let mut params: RequestParams = [("a", "1")].into_iter().collect();
        params.insert_opt("b", None::<String>);
        params.insert_opt("c", Some("3"));
        assert!(!params.contains_key("b"));
        assert_eq!(params.encode().unwrap(), "a=1&c=3");
    }

    #[test]
    fn test_empty_encodes_to_empty_string() {
        assert_eq!(RequestParams::new().encode().unwrap(), "");
    }
}
