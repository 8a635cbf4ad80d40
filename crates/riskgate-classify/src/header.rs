use std::collections::HashMap;
use thiserror::Error;

#[derive(Debug, Error)]
#[error("header lookup failed: {0}")]
pub struct LookupError(pub String);

/// Capability to read request header values.
///
/// Absence is a normal state: an absent header must come back as an empty
/// vec, never as an `Err`. `Err` is reserved for lower-level faults such as
/// undecodable header bytes.
pub trait HeaderLookup {
    fn values(&self, name: &str) -> Result<Vec<String>, LookupError>;
}

/// In-memory lookup over a fixed header set. Used by the CLI one-shot path
/// and by tests.
#[derive(Debug, Default)]
pub struct StaticHeaders {
    headers: HashMap<String, Vec<String>>,
}

impl StaticHeaders {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn of(name: &str, value: &str) -> Self {
        let mut s = Self::new();
        s.append(name, value);
        s
    }

    pub fn append(&mut self, name: &str, value: &str) {
        self.headers
            .entry(name.to_ascii_lowercase())
            .or_default()
            .push(value.to_string());
    }
}

impl HeaderLookup for StaticHeaders {
    fn values(&self, name: &str) -> Result<Vec<String>, LookupError> {
        Ok(self
            .headers
            .get(&name.to_ascii_lowercase())
            .cloned()
            .unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_header_is_empty_not_error() {
        let headers = StaticHeaders::new();
        assert_eq!(headers.values("akamai-user-risk").unwrap(), Vec::<String>::new());
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let headers = StaticHeaders::of("Akamai-User-Risk", "a;b;c;uid=42");
        assert_eq!(
            headers.values("akamai-user-risk").unwrap(),
            vec!["a;b;c;uid=42".to_string()]
        );
    }

    #[test]
    fn preserves_value_order() {
        let mut headers = StaticHeaders::new();
        headers.append("x", "first");
        headers.append("x", "second");
        assert_eq!(
            headers.values("x").unwrap(),
            vec!["first".to_string(), "second".to_string()]
        );
    }
}
