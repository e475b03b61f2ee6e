use serde::{Deserialize, Serialize};

/// Severity of the issue
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum IssueSeverity {
    Fatal,
    Error,
    Warning,
    Information,
}

/// Type of issue
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum IssueType {
    NotFound,
    Throttled,
}

/// Human-readable issue details
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IssueDetails {
    pub text: String,
}

/// A single issue within an OperationOutcome
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OperationOutcomeIssue {
    pub severity: IssueSeverity,
    pub code: IssueType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<IssueDetails>,
}

/// FHIR OperationOutcome resource
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationOutcome {
    pub resource_type: String,
    pub issue: Vec<OperationOutcomeIssue>,
}

impl OperationOutcome {
    /// Outcome with a single error-severity issue
    pub fn error(code: IssueType, text: &str) -> Self {
        Self {
            resource_type: "OperationOutcome".to_string(),
            issue: vec![OperationOutcomeIssue {
                severity: IssueSeverity::Error,
                code,
                details: Some(IssueDetails {
                    text: text.to_string(),
                }),
            }],
        }
    }

    /// `{type} with id '{id}' not found`
    pub fn not_found(resource_type: &str, id: &str) -> Self {
        Self::error(
            IssueType::NotFound,
            &format!("{} with id '{}' not found", resource_type, id),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_cites_type_and_id() {
        let value = serde_json::to_value(OperationOutcome::not_found("Patient", "p9")).unwrap();
        assert_eq!(value["resourceType"], "OperationOutcome");
        assert_eq!(value["issue"][0]["severity"], "error");
        assert_eq!(value["issue"][0]["code"], "not-found");
        assert_eq!(
            value["issue"][0]["details"]["text"],
            "Patient with id 'p9' not found"
        );
    }
}
