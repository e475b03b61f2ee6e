//! Resource-type registry: maps a FHIR resource type to the fixture files
//! that may hold it, in the order they are tried.

/// Ordered mapping of resource type to candidate fixture filenames
#[derive(Debug, Clone, Default)]
pub struct Registry {
    entries: Vec<(String, Vec<String>)>,
}

const DEFAULT_ENTRIES: &[(&str, &[&str])] = &[
    ("Patient", &["patient.json"]),
    ("Coverage", &["coverage.json"]),
    ("Encounter", &["encounterr.json", "encounter.json"]),
    ("Appointment", &["appointments.json", "appointment.json"]),
    ("Contract", &["contract.json"]),
    ("Consent", &["consent.json"]),
    ("DocumentReference", &["docref.json", "documentreference.json"]),
    ("Condition", &["conditionss.json", "condition.json"]),
    ("Procedure", &["procedure.json"]),
    ("Observation", &["observation.json"]),
    ("Binary", &["binary.json"]),
    ("Organization", &["organisation.json", "organization.json"]),
    ("Practitioner", &["practitioner.json"]),
    (
        "PractitionerRole",
        &["practitionerrole.json", "practitionerRole.json"],
    ),
    ("ExplanationOfBenefit", &["eob.json"]),
    ("Provenance", &["provenance.json"]),
];

impl Registry {
    /// Empty registry; every lookup misses
    pub fn new() -> Self {
        Self::default()
    }

    /// The registry shipped with the mock server
    pub fn builtin() -> Self {
        DEFAULT_ENTRIES
            .iter()
            .fold(Self::new(), |registry, (resource_type, files)| {
                registry.with_resource(resource_type, files.iter().copied())
            })
    }

    /// Register (or replace) the candidate files for a resource type
    pub fn with_resource<'a, I>(mut self, resource_type: &str, files: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let files: Vec<String> = files.into_iter().map(str::to_string).collect();
        match self.entries.iter_mut().find(|(t, _)| t == resource_type) {
            Some((_, existing)) => *existing = files,
            None => self.entries.push((resource_type.to_string(), files)),
        }
        self
    }

    /// Candidate filenames for a type, in declared order
    pub fn candidates(&self, resource_type: &str) -> Option<&[String]> {
        self.entries
            .iter()
            .find(|(t, _)| t == resource_type)
            .map(|(_, files)| files.as_slice())
    }

    /// Registered resource types, in declaration order
    pub fn resource_types(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(t, _)| t.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_keeps_candidate_order() {
        let registry = Registry::builtin();
        assert_eq!(
            registry.candidates("Encounter").unwrap(),
            &["encounterr.json".to_string(), "encounter.json".to_string()]
        );
        assert!(registry.candidates("NotAType").is_none());
        assert_eq!(registry.resource_types().count(), 16);
        assert_eq!(registry.resource_types().next(), Some("Patient"));
    }

    #[test]
    fn with_resource_replaces_existing_entry() {
        let registry = Registry::builtin().with_resource("Patient", ["people.json"]);
        assert_eq!(registry.candidates("Patient").unwrap(), &["people.json".to_string()]);
        assert_eq!(registry.resource_types().count(), 16);
    }
}
