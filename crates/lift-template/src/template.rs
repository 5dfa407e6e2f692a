//! The template document: an order-preserving JSON object of resources.

use std::fs;
use std::path::Path;

use serde_json::{Map, Value, json};

use crate::error::{Result, TemplateError};

const FORMAT_VERSION: &str = "2010-09-09";
const RESOURCES: &str = "Resources";

/// An infrastructure template document.
///
/// Wraps a `serde_json::Value` rather than a typed resource model: a base
/// template handed to us may carry arbitrary resources we must preserve
/// untouched, so the document is manipulated structurally and only the nodes
/// we own are given shape. Key order is preserved end to end, which makes
/// serialized output deterministic for identical inputs.
#[derive(Debug, Clone, PartialEq)]
pub struct Template {
    doc: Value,
}

impl Template {
    /// An empty template skeleton.
    pub fn new() -> Self {
        Template {
            doc: json!({
                "AWSTemplateFormatVersion": FORMAT_VERSION,
                "Resources": {}
            }),
        }
    }

    /// Wrap an existing template document.
    ///
    /// The document must be a JSON object; a missing `Resources` section is
    /// created, a malformed one is rejected.
    pub fn from_value(mut doc: Value) -> Result<Self> {
        let root = doc.as_object_mut().ok_or(TemplateError::NotAnObject)?;
        match root.get(RESOURCES) {
            None => {
                root.insert(RESOURCES.to_string(), Value::Object(Map::new()));
            }
            Some(Value::Object(_)) => {}
            Some(_) => return Err(TemplateError::InvalidSection(RESOURCES.to_string())),
        }
        Ok(Template { doc })
    }

    /// Read a template from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(TemplateError::NotFound(path.to_path_buf()));
        }
        let raw = fs::read_to_string(path)?;
        Template::from_value(serde_json::from_str(&raw)?)
    }

    /// The resource map, keyed by logical ID.
    pub fn resources(&self) -> &Map<String, Value> {
        self.doc[RESOURCES]
            .as_object()
            .expect("constructors guarantee a Resources object")
    }

    /// Look up a resource by logical ID.
    pub fn get(&self, logical_id: &str) -> Option<&Value> {
        self.resources().get(logical_id)
    }

    /// Insert a resource under a logical ID.
    ///
    /// Inserting a node identical to the existing one is a no-op, so repeated
    /// augmentation converges instead of failing. A differing node under an
    /// existing ID is a merge conflict.
    pub fn insert(&mut self, logical_id: &str, resource: Value) -> Result<()> {
        let resources = self.doc[RESOURCES]
            .as_object_mut()
            .expect("constructors guarantee a Resources object");
        match resources.get(logical_id) {
            Some(existing) if *existing == resource => Ok(()),
            Some(_) => Err(TemplateError::MergeConflict(logical_id.to_string())),
            None => {
                resources.insert(logical_id.to_string(), resource);
                Ok(())
            }
        }
    }

    /// Serialize the document as pretty-printed JSON with a trailing newline.
    pub fn to_json_pretty(&self) -> Result<String> {
        let mut out = serde_json::to_string_pretty(&self.doc)?;
        out.push('\n');
        Ok(out)
    }

    pub fn as_value(&self) -> &Value {
        &self.doc
    }
}

impl Default for Template {
    fn default() -> Self {
        Template::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_template_has_empty_resources() {
        let template = Template::new();
        assert!(template.resources().is_empty());
        assert_eq!(
            template.as_value()["AWSTemplateFormatVersion"],
            FORMAT_VERSION
        );
    }

    #[test]
    fn from_value_preserves_existing_resources() {
        let template = Template::from_value(json!({
            "Resources": {
                "DeploymentBucket": { "Type": "AWS::S3::Bucket" }
            }
        }))
        .unwrap();
        assert!(template.get("DeploymentBucket").is_some());
    }

    #[test]
    fn from_value_rejects_non_objects() {
        assert!(matches!(
            Template::from_value(json!([])),
            Err(TemplateError::NotAnObject)
        ));
        assert!(matches!(
            Template::from_value(json!({ "Resources": [] })),
            Err(TemplateError::InvalidSection(_))
        ));
    }

    #[test]
    fn identical_insert_is_idempotent() {
        let mut template = Template::new();
        let node = json!({ "Type": "AWS::ApiGateway::RestApi" });
        template.insert("ApiGatewayRestApi", node.clone()).unwrap();
        template.insert("ApiGatewayRestApi", node).unwrap();
        assert_eq!(template.resources().len(), 1);
    }

    #[test]
    fn conflicting_insert_is_an_error() {
        let mut template = Template::new();
        template
            .insert("Thing", json!({ "Type": "AWS::S3::Bucket" }))
            .unwrap();
        let err = template
            .insert("Thing", json!({ "Type": "AWS::Lambda::Function" }))
            .unwrap_err();
        assert!(matches!(err, TemplateError::MergeConflict(id) if id == "Thing"));
    }

    #[test]
    fn serialization_preserves_insertion_order() {
        let mut template = Template::new();
        template.insert("Zed", json!({ "Type": "Z" })).unwrap();
        template.insert("Alpha", json!({ "Type": "A" })).unwrap();
        let out = template.to_json_pretty().unwrap();
        assert!(out.find("Zed").unwrap() < out.find("Alpha").unwrap());
        assert!(out.ends_with('\n'));
    }
}
