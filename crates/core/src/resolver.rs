//! Fixture resolution: registry lookup, cached loading and normalization.

use std::path::{Path, PathBuf};

use crate::cache::FixtureCache;
use crate::registry::Registry;
use crate::shape::{Resolved, ShapeRules};

/// Resolves resource reads against a directory of JSON fixtures.
///
/// Constructed once at startup and shared by all request handlers. Resolution
/// never fails: unknown types, missing files, unreadable or malformed fixtures
/// and id mismatches all come back as [`Resolved::NotFound`].
#[derive(Debug)]
pub struct FixtureResolver {
    fixture_dir: PathBuf,
    registry: Registry,
    rules: ShapeRules,
    cache: FixtureCache,
}

impl FixtureResolver {
    /// Resolver over `fixture_dir` using the built-in registry and shape rules
    pub fn new(fixture_dir: impl Into<PathBuf>) -> Self {
        Self {
            fixture_dir: fixture_dir.into(),
            registry: Registry::builtin(),
            rules: ShapeRules::default(),
            cache: FixtureCache::new(),
        }
    }

    pub fn with_registry(mut self, registry: Registry) -> Self {
        self.registry = registry;
        self
    }

    pub fn with_rules(mut self, rules: ShapeRules) -> Self {
        self.rules = rules;
        self
    }

    pub fn fixture_dir(&self) -> &Path {
        &self.fixture_dir
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn cache(&self) -> &FixtureCache {
        &self.cache
    }

    /// First existing candidate file for `resource_type`
    pub fn fixture_path(&self, resource_type: &str) -> Option<PathBuf> {
        self.registry
            .candidates(resource_type)?
            .iter()
            .map(|filename| self.fixture_dir.join(filename))
            .find(|path| path.exists())
    }

    /// Resolve a resource type and optional id to a canonical result
    pub fn resolve(&self, resource_type: &str, id: Option<&str>) -> Resolved {
        let Some(path) = self.fixture_path(resource_type) else {
            tracing::debug!(resource_type, "No fixture registered or present");
            return Resolved::NotFound;
        };

        let document = match self.cache.load(&path) {
            Ok(document) => document,
            Err(e) => {
                tracing::warn!(error = %e, path = %path.display(), "Failed to load fixture");
                return Resolved::NotFound;
            }
        };

        self.rules.normalize(&document, resource_type, id)
    }
}
