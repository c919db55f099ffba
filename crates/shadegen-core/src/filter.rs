//! Artifact selection: which resolved artifacts end up in the shaded jar.

use globset::{GlobBuilder, GlobMatcher};
use shadegen_util::errors::ShadeError;

use crate::artifact::{ArtifactDescriptor, Scope};

/// A `groupId:artifactId:type:classifier` pattern with `*`/`?` wildcards.
///
/// Shorter forms are expanded: `g` is `g:*:*:*`, `g:a` is `g:a:*:*` and
/// `g:a:c` is `g:a:*:c`.
#[derive(Debug, Clone)]
pub struct CoordinatePattern {
    raw: String,
    group: GlobMatcher,
    name: GlobMatcher,
    kind: GlobMatcher,
    classifier: GlobMatcher,
}

impl CoordinatePattern {
    pub fn parse(raw: &str) -> Result<Self, ShadeError> {
        let parts: Vec<&str> = raw.split(':').collect();
        let (group, name, kind, classifier) = match parts.as_slice() {
            [g] => (*g, "*", "*", "*"),
            [g, a] => (*g, *a, "*", "*"),
            [g, a, c] => (*g, *a, "*", *c),
            [g, a, t, c] => (*g, *a, *t, *c),
            _ => return Err(invalid_shape(raw)),
        };
        if group.is_empty() {
            return Err(invalid_shape(raw));
        }

        Ok(Self {
            raw: raw.to_string(),
            group: compile(raw, group)?,
            name: compile(raw, name)?,
            kind: compile(raw, kind)?,
            classifier: compile(raw, classifier)?,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn matches(&self, artifact: &ArtifactDescriptor) -> bool {
        let c = &artifact.coordinates;
        self.group.is_match(&c.group)
            && self.name.is_match(&c.name)
            && self.kind.is_match(&c.kind)
            && self.classifier.is_match(c.classifier.as_deref().unwrap_or(""))
    }
}

fn invalid_shape(raw: &str) -> ShadeError {
    ShadeError::Configuration {
        message: format!(
            "Invalid artifact pattern [{raw}]: expected groupId[:artifactId[[:type]:classifier]]"
        ),
    }
}

fn compile(raw: &str, field: &str) -> Result<GlobMatcher, ShadeError> {
    GlobBuilder::new(field)
        .literal_separator(false)
        .build()
        .map(|g| g.compile_matcher())
        .map_err(|e| ShadeError::Configuration {
            message: format!("Invalid artifact pattern [{raw}]: {e}"),
        })
}

/// User-supplied include/exclude patterns.
#[derive(Debug, Clone, Default)]
pub struct ArtifactSet {
    pub includes: Vec<CoordinatePattern>,
    pub excludes: Vec<CoordinatePattern>,
}

impl ArtifactSet {
    pub fn parse(includes: &[String], excludes: &[String]) -> Result<Self, ShadeError> {
        Ok(Self {
            includes: includes
                .iter()
                .map(|p| CoordinatePattern::parse(p))
                .collect::<Result<_, _>>()?,
            excludes: excludes
                .iter()
                .map(|p| CoordinatePattern::parse(p))
                .collect::<Result<_, _>>()?,
        })
    }

    /// Matches at least one include (or there are none) and no exclude.
    pub fn matches(&self, artifact: &ArtifactDescriptor) -> bool {
        let included =
            self.includes.is_empty() || self.includes.iter().any(|p| p.matches(artifact));
        included && !self.excludes.iter().any(|p| p.matches(artifact))
    }
}

/// Only compiled, non-test jars can be bundled.
pub fn is_bundleable(artifact: &ArtifactDescriptor) -> bool {
    artifact.coordinates.kind.eq_ignore_ascii_case("jar") && artifact.scope != Scope::Test
}

/// Combined filter: the fixed bundling rule plus the user's artifact set.
#[derive(Debug, Clone, Default)]
pub struct ArtifactFilter {
    set: ArtifactSet,
}

impl ArtifactFilter {
    pub fn new(set: ArtifactSet) -> Self {
        Self { set }
    }

    pub fn include(&self, artifact: &ArtifactDescriptor) -> bool {
        is_bundleable(artifact) && self.set.matches(artifact)
    }

    /// Keep the artifacts passing the filter, preserving their order.
    pub fn apply<'a>(&self, artifacts: &'a [ArtifactDescriptor]) -> Vec<&'a ArtifactDescriptor> {
        artifacts.iter().filter(|a| self.include(a)).collect()
    }
}
