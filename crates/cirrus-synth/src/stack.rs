//! The stack scope: collects resource declarations and stamps tags.

use tracing::debug;

use crate::resource::{Resource, Tag};
use crate::template::Template;

/// An ordered collection of resource declarations under one stack name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stack {
    name: String,
    resources: Vec<Resource>,
}

impl Stack {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            resources: Vec::new(),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Register a declaration. Insertion order is emission order, so callers
    /// register parents before children.
    pub fn add(&mut self, resource: Resource) {
        debug!(
            logical_id = %resource.logical_id,
            resource_type = resource.type_name(),
            "registered resource"
        );
        self.resources.push(resource);
    }

    #[must_use]
    pub fn resources(&self) -> &[Resource] {
        &self.resources
    }

    /// Stamp `tags` onto every taggable resource registered so far.
    /// Untaggable kinds (assignments) are skipped.
    pub fn apply_tags(&mut self, tags: &[Tag]) {
        for resource in &mut self.resources {
            if let Some(existing) = resource.tags_mut() {
                existing.extend(tags.iter().cloned());
            }
        }
    }

    /// The three fixed stack-level tags.
    #[must_use]
    pub fn standard_tags(&self, owner: &str, repo: &str) -> Vec<Tag> {
        vec![
            Tag::new("owner", owner),
            Tag::new("repo", repo),
            Tag::new("stack", self.name.clone()),
        ]
    }

    /// Finish the stack into a serializable manifest.
    #[must_use]
    pub fn into_template(self, description: Option<String>) -> Template {
        Template::new(description, self.resources)
    }
}
