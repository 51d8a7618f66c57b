use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::errors::DomainError;

/// Storage-assigned identifier of an item record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
#[schema(value_type = i32)]
pub struct ItemId(i32);

impl ItemId {
    pub fn new(value: i32) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i32 {
        self.0
    }
}

impl From<i32> for ItemId {
    fn from(value: i32) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for ItemId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<i32>()
            .map(Self)
            .map_err(|e| DomainError::InvalidItemId(format!("{}: {}", s, e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_id_display() {
        assert_eq!(ItemId::new(42).to_string(), "42");
    }

    #[test]
    fn test_item_id_from_str_valid() {
        let id: ItemId = "17".parse().unwrap();
        assert_eq!(id.value(), 17);
    }

    #[test]
    fn test_item_id_from_str_invalid() {
        for invalid in ["", "abc", "1.5", "99999999999"] {
            assert!(
                invalid.parse::<ItemId>().is_err(),
                "Should fail to parse invalid item ID: {}",
                invalid
            );
        }
    }

    #[test]
    fn test_item_id_serializes_as_plain_number() {
        let json = serde_json::to_string(&ItemId::new(7)).unwrap();
        assert_eq!(json, "7");

        let back: ItemId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ItemId::new(7));
    }
}
