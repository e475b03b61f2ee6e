use serde::{Deserialize, Serialize};

/// FHIR CapabilityStatement resource (simplified)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CapabilityStatement {
    pub resource_type: String,
    pub status: String,
    pub date: String,
    pub kind: String,
    pub fhir_version: String,
    pub format: Vec<String>,
    pub rest: Vec<CapabilityRest>,
}

impl CapabilityStatement {
    /// Capability statement advertising read and search for each resource type
    pub fn for_resource_types<'a, I>(resource_types: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        Self {
            resource_type: "CapabilityStatement".to_string(),
            status: "active".to_string(),
            date: chrono::Utc::now().format("%Y-%m-%d").to_string(),
            kind: "instance".to_string(),
            fhir_version: "4.0.1".to_string(),
            format: vec!["json".to_string()],
            rest: vec![CapabilityRest {
                mode: "server".to_string(),
                resource: resource_types
                    .into_iter()
                    .map(CapabilityResource::read_only)
                    .collect(),
            }],
        }
    }
}

/// REST capability declaration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CapabilityRest {
    pub mode: String,
    pub resource: Vec<CapabilityResource>,
}

/// Per-resource capability
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CapabilityResource {
    #[serde(rename = "type")]
    pub resource_type: String,
    pub interaction: Vec<Interaction>,
}

impl CapabilityResource {
    /// Fixture-backed types only support `read` and `search-type`
    pub fn read_only(resource_type: &str) -> Self {
        Self {
            resource_type: resource_type.to_string(),
            interaction: vec![Interaction::new("read"), Interaction::new("search-type")],
        }
    }
}

/// Supported interaction code
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Interaction {
    pub code: String,
}

impl Interaction {
    pub fn new(code: &str) -> Self {
        Self {
            code: code.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_each_type_with_read_and_search() {
        let statement = CapabilityStatement::for_resource_types(["Patient", "Coverage"]);
        let value = serde_json::to_value(&statement).unwrap();

        assert_eq!(value["resourceType"], "CapabilityStatement");
        let resources = value["rest"][0]["resource"].as_array().unwrap();
        assert_eq!(resources.len(), 2);
        assert_eq!(resources[1]["type"], "Coverage");
        assert_eq!(resources[0]["interaction"][1]["code"], "search-type");
    }
}
