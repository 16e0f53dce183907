//! Strongly-typed item identifiers used across the domain.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Name of a stocked item.
///
/// Always non-empty and not made only of whitespace. The name is stored as
/// given (no trimming or case folding), so `"Apple"` and `"apple"` are distinct
/// items.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ItemName(String);

impl ItemName {
    pub fn new(name: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::validation("item name cannot be empty"));
        }
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for ItemName {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ItemName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl core::borrow::Borrow<str> for ItemName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ItemName {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ItemName> for String {
    fn from(value: ItemName) -> Self {
        value.0
    }
}

impl FromStr for ItemName {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_blank_names() {
        assert!(ItemName::new("").is_err());
        assert!(ItemName::new("   ").is_err());
        assert!(matches!(
            "\t".parse::<ItemName>(),
            Err(DomainError::Validation(_))
        ));
    }

    #[test]
    fn keeps_name_verbatim() {
        let name = ItemName::new(" apple ").unwrap();
        assert_eq!(name.as_str(), " apple ");
        assert_ne!(ItemName::new("Apple").unwrap(), ItemName::new("apple").unwrap());
    }

    #[test]
    fn deserializing_blank_name_fails() {
        assert!(serde_json::from_str::<ItemName>("\"\"").is_err());
        let name: ItemName = serde_json::from_str("\"kiwi\"").unwrap();
        assert_eq!(name.to_string(), "kiwi");
    }
}
