//! fhir-mock-core: fixture resolution and FHIR envelope types
//!
//! This crate maps FHIR resource reads onto static JSON fixture files and
//! normalizes whatever shape those files have into a single resource, a
//! Bundle, or not-found. It also provides the Bundle, OperationOutcome and
//! CapabilityStatement types the server responds with.

pub mod bundle;
pub mod cache;
pub mod capability;
pub mod error;
pub mod outcome;
pub mod registry;
pub mod resolver;
pub mod shape;

pub use bundle::{Bundle, BundleEntry, BundleType, is_bundle};
pub use cache::FixtureCache;
pub use capability::CapabilityStatement;
pub use error::FixtureError;
pub use outcome::{IssueSeverity, IssueType, OperationOutcome, OperationOutcomeIssue};
pub use registry::Registry;
pub use resolver::FixtureResolver;
pub use shape::{CollectionRule, FieldMapping, Resolved, Shape, ShapeRules};
