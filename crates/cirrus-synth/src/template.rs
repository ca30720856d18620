//! Deployment manifest serialization.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::error::SynthError;
use crate::resource::Resource;

const FORMAT_VERSION: &str = "2010-09-09";

/// A finished deployment manifest.
///
/// Resources serialize in insertion order, which the lowering layer arranges
/// so children always follow their parents. Serialization is deterministic:
/// identical inputs produce byte-identical output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    description: Option<String>,
    resources: Vec<Resource>,
}

impl Template {
    #[must_use]
    pub const fn new(description: Option<String>, resources: Vec<Resource>) -> Self {
        Self {
            description,
            resources,
        }
    }

    #[must_use]
    pub fn resources(&self) -> &[Resource] {
        &self.resources
    }

    /// Look up a declaration by logical id.
    #[must_use]
    pub fn resource(&self, logical_id: &str) -> Option<&Resource> {
        self.resources
            .iter()
            .find(|resource| resource.logical_id == logical_id)
    }

    /// Pretty-printed JSON manifest.
    pub fn to_json(&self) -> Result<String, SynthError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl Serialize for Template {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let entries = 2 + usize::from(self.description.is_some());
        let mut map = serializer.serialize_map(Some(entries))?;
        map.serialize_entry("AWSTemplateFormatVersion", FORMAT_VERSION)?;
        if let Some(description) = &self.description {
            map.serialize_entry("Description", description)?;
        }
        map.serialize_entry("Resources", &ResourceMap(&self.resources))?;
        map.end()
    }
}

/// Serializes the resource list as a logical-id-keyed map, preserving
/// insertion order.
struct ResourceMap<'a>(&'a [Resource]);

impl Serialize for ResourceMap<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for resource in self.0 {
            map.serialize_entry(&resource.logical_id, &resource.spec)?;
        }
        map.end()
    }
}
