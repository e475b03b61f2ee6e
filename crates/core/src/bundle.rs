use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// FHIR Bundle types
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum BundleType {
    Searchset,
    History,
    Collection,
    Document,
    Message,
    Transaction,
    TransactionResponse,
    Batch,
    BatchResponse,
}

/// FHIR Bundle resource (simplified for search responses)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bundle {
    pub resource_type: String,

    #[serde(rename = "type")]
    pub bundle_type: BundleType,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<u64>,

    #[serde(default)]
    pub entry: Vec<BundleEntry>,
}

/// A single entry in a Bundle
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BundleEntry {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_url: Option<String>,

    pub resource: JsonValue,
}

impl BundleEntry {
    pub fn new(resource: JsonValue) -> Self {
        Self {
            full_url: None,
            resource,
        }
    }
}

impl Bundle {
    /// Create a searchset bundle with an explicit total
    pub fn searchset(total: u64, entries: Vec<BundleEntry>) -> Self {
        Self {
            resource_type: "Bundle".to_string(),
            bundle_type: BundleType::Searchset,
            total: Some(total),
            entry: entries,
        }
    }

    /// Searchset with `total = 0` and no entries
    pub fn empty() -> Self {
        Self::searchset(0, Vec::new())
    }

    /// Wrap one resource into a single-entry searchset
    pub fn wrap(resource: JsonValue) -> Self {
        Self::searchset(1, vec![BundleEntry::new(resource)])
    }

    pub fn to_value(&self) -> JsonValue {
        serde_json::to_value(self).unwrap_or(JsonValue::Null)
    }
}

/// Whether a JSON document is a FHIR Bundle
pub fn is_bundle(value: &JsonValue) -> bool {
    value.get("resourceType").and_then(JsonValue::as_str) == Some("Bundle")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_bundle_keeps_entry_array() {
        let value = Bundle::empty().to_value();
        assert_eq!(
            value,
            json!({"resourceType": "Bundle", "type": "searchset", "total": 0, "entry": []})
        );
    }

    #[test]
    fn wrap_produces_single_entry() {
        let value = Bundle::wrap(json!({"resourceType": "Patient", "id": "p1"})).to_value();
        assert_eq!(value["total"], 1);
        assert_eq!(value["entry"][0]["resource"]["id"], "p1");
        assert!(value["entry"][0].get("fullUrl").is_none());
    }

    #[test]
    fn detects_bundles() {
        assert!(is_bundle(&json!({"resourceType": "Bundle"})));
        assert!(!is_bundle(&json!({"resourceType": "Patient"})));
        assert!(!is_bundle(&json!([1, 2])));
    }
}
