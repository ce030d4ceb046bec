//! CNAB bundle document handling
//!
//! The document is kept as raw JSON: no schema validation happens here, the
//! only structural requirement is a top-level object. Key order and number
//! literals are preserved (serde_json `preserve_order` and
//! `arbitrary_precision`) so the working file mirrors the template.

use std::fs;
use std::path::Path;

use serde_json::{Map, Value};

use crate::error::{self, Result};

/// In-memory bundle, created per load and discarded once written
#[derive(Debug, Clone, PartialEq)]
pub struct BundleDocument {
    root: Map<String, Value>,
}

impl BundleDocument {
    /// Parse a bundle; `path` is only used in error messages
    pub fn from_json(json: &str, path: &Path) -> Result<Self> {
        let value: Value =
            serde_json::from_str(json).map_err(|e| error::bundle::malformed(path, e))?;
        let Value::Object(root) = value else {
            return Err(error::bundle::malformed(
                path,
                "top-level value is not a JSON object",
            ));
        };
        Ok(Self { root })
    }

    /// Read and parse a bundle file
    pub fn read(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| error::fs::read_failed(path, &e))?;
        Self::from_json(&content, path)
    }

    /// Write the bundle as compact JSON to `path`, replacing any existing file
    pub fn write(&self, path: &Path) -> Result<()> {
        let json =
            serde_json::to_string(&self.root).map_err(|e| error::fs::write_failed(path, e))?;
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| error::fs::write_failed(path, e))?;
        }
        fs::write(path, json).map_err(|e| error::fs::write_failed(path, e))
    }

    /// Top-level mapping of the document
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.root
    }

    /// `contentDigest` of the first invocation image, if any
    pub fn invocation_image_digest(&self) -> Option<&str> {
        self.root
            .get("invocationImages")?
            .get(0)?
            .get("contentDigest")?
            .as_str()
    }

    /// Point `images.<service_name>` and the first invocation image at new images
    pub fn substitute_images(
        &mut self,
        service_name: &str,
        service_image: &str,
        invocation_image: &str,
    ) -> Result<()> {
        let service = self
            .root
            .get_mut("images")
            .and_then(|images| images.get_mut(service_name));
        set_image(service, &format!("images.{service_name}"), service_image)?;

        let invocation = self
            .root
            .get_mut("invocationImages")
            .and_then(|images| images.get_mut(0));
        set_image(invocation, "invocationImages[0]", invocation_image)
    }
}

fn set_image(entry: Option<&mut Value>, location: &str, image: &str) -> Result<()> {
    if image.trim().is_empty() {
        return Err(error::bundle::substitution_failed(
            location,
            "image reference is empty",
        ));
    }
    let entry =
        entry.ok_or_else(|| error::bundle::substitution_failed(location, "no such entry"))?;
    let object = entry
        .as_object_mut()
        .ok_or_else(|| error::bundle::substitution_failed(location, "entry is not an object"))?;
    object.insert("image".to_string(), Value::String(image.to_string()));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PublishError;
    use serde_json::json;
    use tempfile::TempDir;

    const TEMPLATE: &str = r#"{"schemaVersion":"v1.0.0","name":"hello","images":{"hello":{"image":"nginx:latest","imageType":"docker"}},"invocationImages":[{"imageType":"docker","image":"cnab/helloworld:0.1.1","contentDigest":"sha256:abc"}]}"#;

    fn parse(json: &str) -> BundleDocument {
        BundleDocument::from_json(json, Path::new("bundle.json.tmpl")).unwrap()
    }

    #[test]
    fn test_round_trip_preserves_key_order() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("bundle.json");
        parse(TEMPLATE).write(&path).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), TEMPLATE);
    }

    #[test]
    fn test_round_trip_keeps_number_literals() {
        let template = r#"{"custom":{"n":123456789012345678901234567890,"ratio":1.10,"neg":-0.0}}"#;
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("bundle.json");
        parse(template).write(&path).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), template);
    }

    #[test]
    fn test_rejects_invalid_json() {
        let result = BundleDocument::from_json("{not json", Path::new("b.tmpl"));
        assert!(matches!(
            result.unwrap_err(),
            PublishError::MalformedDocument { .. }
        ));
    }

    #[test]
    fn test_rejects_non_object() {
        let result = BundleDocument::from_json("[1, 2, 3]", Path::new("b.tmpl"));
        assert!(matches!(
            result.unwrap_err(),
            PublishError::MalformedDocument { .. }
        ));
    }

    #[test]
    fn test_read_missing_file() {
        let temp = TempDir::new().unwrap();
        let result = BundleDocument::read(&temp.path().join("absent.json.tmpl"));
        assert!(matches!(
            result.unwrap_err(),
            PublishError::FileNotFound { .. }
        ));
    }

    #[test]
    fn test_write_creates_parent_directories() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("bundle_data").join("bundle.json");
        parse(TEMPLATE).write(&path).unwrap();

        let written = BundleDocument::read(&path).unwrap();
        assert_eq!(written, parse(TEMPLATE));
    }

    #[test]
    fn test_invocation_image_digest() {
        assert_eq!(parse(TEMPLATE).invocation_image_digest(), Some("sha256:abc"));
        assert_eq!(parse(r#"{"name":"x"}"#).invocation_image_digest(), None);
    }

    #[test]
    fn test_substitute_images() {
        let mut doc = parse(TEMPLATE);
        doc.substitute_images("hello", "registry/svc:1", "registry/inv:1")
            .unwrap();

        let map = doc.as_map();
        assert_eq!(map["images"]["hello"]["image"], json!("registry/svc:1"));
        assert_eq!(map["invocationImages"][0]["image"], json!("registry/inv:1"));
        assert_eq!(map["invocationImages"][0]["contentDigest"], json!("sha256:abc"));
    }

    #[test]
    fn test_substitute_images_unknown_service() {
        let mut doc = parse(TEMPLATE);
        let err = doc
            .substitute_images("web", "registry/svc:1", "registry/inv:1")
            .unwrap_err();
        assert!(matches!(err, PublishError::ImageSubstitutionFailed { .. }));
        assert!(err.to_string().contains("images.web"));
    }

    #[test]
    fn test_substitute_images_rejects_empty_image() {
        let mut doc = parse(TEMPLATE);
        let err = doc.substitute_images("hello", "", "registry/inv:1").unwrap_err();
        assert!(matches!(err, PublishError::ImageSubstitutionFailed { .. }));
        assert!(err.to_string().contains("empty"));

        let err = doc
            .substitute_images("hello", "registry/svc:1", " ")
            .unwrap_err();
        assert!(err.to_string().contains("invocationImages[0]"));
    }

    #[test]
    fn test_substitute_images_requires_object_entry() {
        let mut doc = parse(r#"{"images":{"hello":{}},"invocationImages":["cnab/inv"]}"#);
        let err = doc.substitute_images("hello", "svc", "inv").unwrap_err();
        assert!(err.to_string().contains("invocationImages[0]"));
    }
}
