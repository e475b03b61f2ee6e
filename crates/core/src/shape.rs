//! Normalization of heterogeneous fixture documents.
//!
//! Fixture files come in several shapes: a bare resource, a resource wrapped
//! under a key, an ad-hoc collection of loosely shaped records, or a ready
//! made Bundle. Each shape has a detector; detectors run in [`Shape::PRECEDENCE`]
//! order and the first one that recognizes the document decides the outcome.

use serde_json::{Map, Value as JsonValue};

use crate::bundle::{Bundle, BundleEntry, is_bundle};

/// Canonical outcome of resolving a resource type and optional id
#[derive(Debug, Clone, PartialEq)]
pub enum Resolved {
    Resource(JsonValue),
    Bundle(JsonValue),
    NotFound,
}

impl Resolved {
    /// Classify a resolved document by its `resourceType`
    fn from_document(document: JsonValue) -> Self {
        if is_bundle(&document) {
            Resolved::Bundle(document)
        } else {
            Resolved::Resource(document)
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Resolved::NotFound)
    }
}

/// Copies `source` from a record into `target` of the projected resource
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldMapping {
    pub source: String,
    pub target: String,
}

impl FieldMapping {
    pub fn new(source: &str, target: &str) -> Self {
        Self {
            source: source.to_string(),
            target: target.to_string(),
        }
    }

    /// Same name on both sides
    pub fn same(name: &str) -> Self {
        Self::new(name, name)
    }
}

/// Describes a fixture that stores records of one resource type in an array
/// field instead of as FHIR resources.
#[derive(Debug, Clone)]
pub struct CollectionRule {
    pub resource_type: String,
    pub array_field: String,
    pub id_field: String,
    pub total_field: String,
    pub page_limit: usize,
    /// Fields projected for each Bundle entry
    pub summary_fields: Vec<FieldMapping>,
    /// Fields projected for a single read
    pub detail_fields: Vec<FieldMapping>,
}

impl CollectionRule {
    /// `appointments.json`: `{ "total": n, "appointments": [ ... ] }`
    pub fn appointments() -> Self {
        Self {
            resource_type: "Appointment".to_string(),
            array_field: "appointments".to_string(),
            id_field: "id".to_string(),
            total_field: "total".to_string(),
            page_limit: 25,
            summary_fields: ["id", "status", "description"]
                .into_iter()
                .map(FieldMapping::same)
                .collect(),
            detail_fields: vec![
                FieldMapping::same("id"),
                FieldMapping::same("status"),
                FieldMapping::same("description"),
                FieldMapping::same("start"),
                FieldMapping::same("end"),
                FieldMapping::same("duration"),
                FieldMapping::new("service_type", "serviceType"),
                FieldMapping::same("participants"),
                FieldMapping::same("location"),
            ],
        }
    }

    fn project(&self, record: &JsonValue, fields: &[FieldMapping]) -> JsonValue {
        let mut resource = Map::new();
        resource.insert(
            "resourceType".to_string(),
            JsonValue::String(self.resource_type.clone()),
        );
        for field in fields {
            if let Some(value) = record.get(&field.source) {
                resource.insert(field.target.clone(), value.clone());
            }
        }
        JsonValue::Object(resource)
    }

    fn resolve(&self, document: &JsonValue, records: &[JsonValue], id: Option<&str>) -> Resolved {
        if let Some(id) = id {
            return records
                .iter()
                .find(|record| record.get(&self.id_field).and_then(JsonValue::as_str) == Some(id))
                .map(|record| Resolved::Resource(self.project(record, &self.detail_fields)))
                .unwrap_or(Resolved::NotFound);
        }

        let entries: Vec<BundleEntry> = records
            .iter()
            .take(self.page_limit)
            .map(|record| BundleEntry::new(self.project(record, &self.summary_fields)))
            .collect();

        // A missing, unparseable or zero declared total falls back to the page size
        let total = document
            .get(&self.total_field)
            .and_then(declared_total)
            .filter(|total| *total > 0)
            .unwrap_or(entries.len() as u64);

        Resolved::Bundle(Bundle::searchset(total, entries).to_value())
    }
}

/// Configuration for the shape detectors
#[derive(Debug, Clone)]
pub struct ShapeRules {
    /// Key under which a wrapped resource is nested
    pub wrapper_field: String,
    pub collections: Vec<CollectionRule>,
}

impl Default for ShapeRules {
    fn default() -> Self {
        Self {
            wrapper_field: "data".to_string(),
            collections: vec![CollectionRule::appointments()],
        }
    }
}

impl ShapeRules {
    /// Normalize a parsed fixture document for `resource_type` and optional `id`
    pub fn normalize(&self, document: &JsonValue, resource_type: &str, id: Option<&str>) -> Resolved {
        Shape::PRECEDENCE
            .iter()
            .find_map(|shape| shape.detect(self, document, resource_type, id))
            .unwrap_or(Resolved::NotFound)
    }
}

/// Closed set of recognized fixture shapes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    DirectResource,
    AdHocCollection,
    WrappedResource,
    PrebuiltBundle,
}

impl Shape {
    /// Detection order; the first detector returning an outcome wins.
    pub const PRECEDENCE: [Shape; 4] = [
        Shape::DirectResource,
        Shape::AdHocCollection,
        Shape::WrappedResource,
        Shape::PrebuiltBundle,
    ];

    /// `None` means the document does not have this shape
    fn detect(
        self,
        rules: &ShapeRules,
        document: &JsonValue,
        resource_type: &str,
        id: Option<&str>,
    ) -> Option<Resolved> {
        match self {
            Shape::DirectResource => {
                has_resource_type(document, resource_type).then(|| match_id(document, id))
            }
            Shape::AdHocCollection => rules
                .collections
                .iter()
                .filter(|rule| rule.resource_type == resource_type)
                .find_map(|rule| {
                    document
                        .get(&rule.array_field)
                        .and_then(JsonValue::as_array)
                        .map(|records| rule.resolve(document, records, id))
                }),
            Shape::WrappedResource => document
                .get(&rules.wrapper_field)
                .filter(|inner| has_resource_type(inner, resource_type))
                .map(|inner| match_id(inner, id)),
            Shape::PrebuiltBundle => is_bundle(document).then(|| match id {
                None => Resolved::Bundle(document.clone()),
                Some(id) => document
                    .get("entry")
                    .and_then(JsonValue::as_array)
                    .and_then(|entries| {
                        entries
                            .iter()
                            .filter_map(|entry| entry.get("resource"))
                            .find(|resource| resource_id(resource) == Some(id))
                    })
                    .map(|resource| Resolved::from_document(resource.clone()))
                    .unwrap_or(Resolved::NotFound),
            }),
        }
    }
}

/// Reads a count written as an integer, a whole float or a numeric string
fn declared_total(value: &JsonValue) -> Option<u64> {
    match value {
        JsonValue::Number(n) => n.as_u64().or_else(|| {
            n.as_f64()
                .filter(|f| f.is_finite() && *f >= 0.0 && f.fract() == 0.0)
                .map(|f| f as u64)
        }),
        JsonValue::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn has_resource_type(value: &JsonValue, resource_type: &str) -> bool {
    value.get("resourceType").and_then(JsonValue::as_str) == Some(resource_type)
}

fn resource_id(value: &JsonValue) -> Option<&str> {
    value.get("id").and_then(JsonValue::as_str)
}

fn match_id(resource: &JsonValue, id: Option<&str>) -> Resolved {
    match id {
        Some(id) if resource_id(resource) != Some(id) => Resolved::NotFound,
        _ => Resolved::from_document(resource.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn appointments(count: usize, total: Option<u64>) -> JsonValue {
        let records: Vec<JsonValue> = (0..count)
            .map(|i| {
                json!({
                    "id": format!("apt-{}", i),
                    "status": "booked",
                    "description": format!("Visit {}", i),
                    "start": "2024-01-01T09:00:00Z",
                    "end": "2024-01-01T09:30:00Z",
                    "duration": 30,
                    "service_type": "Consultation",
                    "participants": [{"name": "Dr. A"}],
                    "location": "Room 1",
                    "internal_note": "not projected"
                })
            })
            .collect();
        let mut document = json!({ "appointments": records });
        if let Some(total) = total {
            document["total"] = json!(total);
        }
        document
    }

    #[test]
    fn direct_resource_matches_id() {
        let rules = ShapeRules::default();
        let patient = json!({"resourceType": "Patient", "id": "p1", "active": true});

        assert_eq!(
            rules.normalize(&patient, "Patient", Some("p1")),
            Resolved::Resource(patient.clone())
        );
        assert_eq!(
            rules.normalize(&patient, "Patient", None),
            Resolved::Resource(patient.clone())
        );
        assert!(rules.normalize(&patient, "Patient", Some("wrong-id")).is_not_found());
        assert!(rules.normalize(&patient, "Coverage", None).is_not_found());
    }

    #[test]
    fn direct_resource_without_id_never_matches_an_id() {
        let rules = ShapeRules::default();
        let patient = json!({"resourceType": "Patient"});
        assert!(rules.normalize(&patient, "Patient", Some("p1")).is_not_found());
    }

    #[test]
    fn collection_pages_to_limit_and_keeps_declared_total() {
        let rules = ShapeRules::default();
        let Resolved::Bundle(bundle) =
            rules.normalize(&appointments(30, Some(30)), "Appointment", None)
        else {
            panic!("expected bundle");
        };

        assert_eq!(bundle["type"], "searchset");
        assert_eq!(bundle["total"], 30);
        let entries = bundle["entry"].as_array().unwrap();
        assert_eq!(entries.len(), 25);
        assert_eq!(
            entries[0]["resource"],
            json!({
                "resourceType": "Appointment",
                "id": "apt-0",
                "status": "booked",
                "description": "Visit 0"
            })
        );
    }

    #[test]
    fn collection_total_falls_back_to_entry_count() {
        let rules = ShapeRules::default();
        let Resolved::Bundle(bundle) = rules.normalize(&appointments(3, None), "Appointment", None)
        else {
            panic!("expected bundle");
        };
        assert_eq!(bundle["total"], 3);

        let Resolved::Bundle(bundle) =
            rules.normalize(&appointments(40, Some(0)), "Appointment", None)
        else {
            panic!("expected bundle");
        };
        assert_eq!(bundle["total"], 25);
    }

    #[test]
    fn collection_total_accepts_numeric_strings_and_whole_floats() {
        let rules = ShapeRules::default();
        let mut document = appointments(2, None);

        document["total"] = json!("30");
        let Resolved::Bundle(bundle) = rules.normalize(&document, "Appointment", None) else {
            panic!("expected bundle");
        };
        assert_eq!(bundle["total"], 30);

        document["total"] = json!(42.0);
        let Resolved::Bundle(bundle) = rules.normalize(&document, "Appointment", None) else {
            panic!("expected bundle");
        };
        assert_eq!(bundle["total"], 42);

        document["total"] = json!("many");
        let Resolved::Bundle(bundle) = rules.normalize(&document, "Appointment", None) else {
            panic!("expected bundle");
        };
        assert_eq!(bundle["total"], 2);
    }

    #[test]
    fn collection_single_read_projects_detail_fields() {
        let rules = ShapeRules::default();
        let resolved = rules.normalize(&appointments(30, Some(30)), "Appointment", Some("apt-27"));

        let Resolved::Resource(resource) = resolved else {
            panic!("expected resource");
        };
        let mut keys: Vec<&str> = resource.as_object().unwrap().keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(
            keys,
            [
                "description",
                "duration",
                "end",
                "id",
                "location",
                "participants",
                "resourceType",
                "serviceType",
                "start",
                "status"
            ]
        );
        assert_eq!(resource["serviceType"], "Consultation");
        assert!(
            rules
                .normalize(&appointments(2, None), "Appointment", Some("missing"))
                .is_not_found()
        );
    }

    #[test]
    fn collection_rule_only_applies_to_its_type() {
        let rules = ShapeRules::default();
        assert!(rules.normalize(&appointments(2, None), "Encounter", None).is_not_found());
    }

    #[test]
    fn wrapped_resource_is_unwrapped() {
        let rules = ShapeRules::default();
        let document = json!({"data": {"resourceType": "Coverage", "id": "c1"}, "meta": {}});

        assert_eq!(
            rules.normalize(&document, "Coverage", Some("c1")),
            Resolved::Resource(json!({"resourceType": "Coverage", "id": "c1"}))
        );
        assert!(rules.normalize(&document, "Coverage", Some("c2")).is_not_found());
        assert!(rules.normalize(&document, "Patient", None).is_not_found());
    }

    #[test]
    fn prebuilt_bundle_returned_unchanged_or_searched() {
        let rules = ShapeRules::default();
        let bundle = json!({
            "resourceType": "Bundle",
            "type": "searchset",
            "total": 2,
            "entry": [
                {"resource": {"resourceType": "Condition", "id": "c1"}},
                {"fullUrl": "urn:x", "resource": {"resourceType": "Condition", "id": "c2"}}
            ]
        });

        assert_eq!(
            rules.normalize(&bundle, "Condition", None),
            Resolved::Bundle(bundle.clone())
        );
        assert_eq!(
            rules.normalize(&bundle, "Condition", Some("c2")),
            Resolved::Resource(json!({"resourceType": "Condition", "id": "c2"}))
        );
        assert!(rules.normalize(&bundle, "Condition", Some("c3")).is_not_found());
    }

    #[test]
    fn bundle_without_entries_cannot_satisfy_id() {
        let rules = ShapeRules::default();
        let bundle = json!({"resourceType": "Bundle", "type": "collection"});
        assert!(rules.normalize(&bundle, "Procedure", Some("x")).is_not_found());
    }

    #[test]
    fn direct_match_takes_precedence_over_wrapper() {
        let rules = ShapeRules::default();
        let document = json!({
            "resourceType": "Patient",
            "id": "outer",
            "data": {"resourceType": "Patient", "id": "inner"}
        });
        assert!(rules.normalize(&document, "Patient", Some("inner")).is_not_found());
    }

    #[test]
    fn unrecognized_shape_is_not_found() {
        let rules = ShapeRules::default();
        assert!(rules.normalize(&json!({"foo": 1}), "Patient", None).is_not_found());
        assert!(rules.normalize(&json!([1, 2, 3]), "Patient", None).is_not_found());
    }
}
