//! Document identity and catalog references

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Identifier of an ingested document (Value Object)
///
/// Catalog identifiers are positive integers. Ordering follows the numeric
/// value so id sets iterate deterministically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentId(i64);

impl DocumentId {
    /// Create an id, rejecting zero and negative values.
    pub fn try_new(id: i64) -> Result<Self, DomainError> {
        if id < 1 {
            return Err(DomainError::InvalidDocumentId(id));
        }
        Ok(Self(id))
    }

    pub fn get(&self) -> i64 {
        self.0
    }

    /// Whether this id satisfies the positivity rule.
    ///
    /// Deserialization does not enforce it, so bound requests are checked
    /// with [`QueryRequest::validate`](crate::QueryRequest::validate).
    pub fn is_valid(&self) -> bool {
        self.0 >= 1
    }
}

impl std::fmt::Display for DocumentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for DocumentId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw: i64 = s
            .trim()
            .parse()
            .map_err(|_| format!("'{}' is not a document id", s))?;
        DocumentId::try_new(raw).map_err(|e| e.to_string())
    }
}

/// A document as known to the catalog.
///
/// Only the id matters to query orchestration; every other attribute is
/// carried through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentRef {
    pub id: DocumentId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

impl DocumentRef {
    pub fn new(id: DocumentId) -> Self {
        Self {
            id,
            title: None,
            attributes: Map::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_id_rejects_non_positive() {
        assert!(DocumentId::try_new(0).is_err());
        assert!(DocumentId::try_new(-4).is_err());
        assert_eq!(DocumentId::try_new(7).unwrap().get(), 7);
    }

    #[test]
    fn test_document_id_parse() {
        assert_eq!("12".parse::<DocumentId>().unwrap().get(), 12);
        assert!("abc".parse::<DocumentId>().is_err());
        assert!("0".parse::<DocumentId>().is_err());
    }

    #[test]
    fn test_document_ref_keeps_extra_attributes() {
        let json = r#"{"id": 3, "title": "Annual report", "pages": 42}"#;
        let doc: DocumentRef = serde_json::from_str(json).unwrap();
        assert_eq!(doc.id.get(), 3);
        assert_eq!(doc.title.as_deref(), Some("Annual report"));
        assert_eq!(doc.attributes.get("pages"), Some(&Value::from(42)));
    }
}
