use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::CoreError;

/// A JSON object as received from clients and stored by document stores.
pub type JsonMap = serde_json::Map<String, serde_json::Value>;

/// Store-assigned product identifier.
///
/// Serialized as a hyphenated UUID string. Parsing from a path segment
/// yields [`CoreError::InvalidId`] rather than a lookup miss, so malformed
/// ids can be told apart from ids that simply do not exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(Uuid);

impl ProductId {
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl From<Uuid> for ProductId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl FromStr for ProductId {
    type Err = CoreError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(raw.trim())
            .map(Self)
            .map_err(|_| CoreError::InvalidId {
                entity: "product",
                raw: raw.to_string(),
            })
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.hyphenated().fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn parses_hyphenated_uuid() {
        let raw = "0190f1c2-3b4d-7e5f-8a9b-0c1d2e3f4a5b";
        let id: ProductId = raw.parse().unwrap();
        assert_eq!(id.to_string(), raw);
    }

    #[test]
    fn rejects_bare_hex_object_id() {
        let err = "64b7f0c2a1e4d3b2c1a0f9e8".parse::<ProductId>().unwrap_err();
        assert_matches!(err, CoreError::InvalidId { entity: "product", .. });
    }

    #[test]
    fn rejects_empty_string() {
        assert!("".parse::<ProductId>().is_err());
    }

    #[test]
    fn serializes_as_plain_string() {
        let id = ProductId::from(Uuid::nil());
        assert_eq!(
            serde_json::to_value(id).unwrap(),
            serde_json::json!("00000000-0000-0000-0000-000000000000")
        );
    }
}
