//! Token records as the token list endpoint returns them.

use serde::{Deserialize, Serialize};

use crate::Error;

/// A single authentication token, read-only to the table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenRecord {
    /// Opaque identifier, unique within one displayed list.
    pub token: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_name: Option<String>,
    /// Required. An empty array is fine, a missing or `null` one is not.
    pub scopes: Vec<String>,
    /// Epoch seconds. Absent means it never happened.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<i64>,
    /// Epoch seconds. Absent means it never expires.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires: Option<i64>,
}

impl TokenRecord {
    pub fn new(token: impl Into<String>, scopes: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            token: token.into(),
            token_name: None,
            scopes: scopes.into_iter().map(Into::into).collect(),
            created: None,
            expires: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.token_name = Some(name.into());
        self
    }

    pub fn created_at(mut self, timestamp: i64) -> Self {
        self.created = Some(timestamp);
        self
    }

    pub fn expires_at(mut self, timestamp: i64) -> Self {
        self.expires = Some(timestamp);
        self
    }
}

/// Decodes a JSON array of token records.
pub fn parse_token_records(json: &str) -> Result<Vec<TokenRecord>, Error> {
    Ok(serde_json::from_str(json)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_and_sparse_records() {
        let records = parse_token_records(
            r#"[
                {"token": "gt-abc", "token_name": "ci", "scopes": ["read:all"], "created": 1700000000, "expires": null},
                {"token": "gt-def", "scopes": []}
            ]"#,
        )
        .unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].token_name.as_deref(), Some("ci"));
        assert_eq!(records[0].created, Some(1_700_000_000));
        assert_eq!(records[0].expires, None);
        assert_eq!(records[1], TokenRecord::new("gt-def", Vec::<String>::new()));
    }

    #[test]
    fn missing_scopes_is_malformed() {
        let err = parse_token_records(r#"[{"token": "gt-abc"}]"#).unwrap_err();
        assert!(matches!(err, Error::MalformedRecords(_)));
        assert!(err.to_string().contains("scopes"));
    }

    #[test]
    fn non_array_scopes_is_malformed() {
        for json in [
            r#"[{"token": "gt-abc", "scopes": null}]"#,
            r#"[{"token": "gt-abc", "scopes": "read"}]"#,
        ] {
            assert!(
                matches!(parse_token_records(json), Err(Error::MalformedRecords(_))),
                "{json} should be rejected"
            );
        }
    }

    #[test]
    fn serializes_without_absent_fields() {
        let json = serde_json::to_string(&TokenRecord::new("gt-abc", ["read"])).unwrap();
        assert_eq!(json, r#"{"token":"gt-abc","scopes":["read"]}"#);
    }
}
