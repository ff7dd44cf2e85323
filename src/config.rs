//! Decoder configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::model::{DocumentKind, FileVersion};
use crate::Result;

/// What to do when a decoder consumes a different number of bytes than
/// the record declares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SizePolicy {
    /// Log a warning, record a defect, keep the declared size.
    #[default]
    Report,
    /// Fail the segment.
    Strict,
}

/// Settings for one import.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecodeConfig {
    pub file_version: FileVersion,
    /// Known up front from the file extension, or left for the Document
    /// record to declare.
    pub document_kind: Option<DocumentKind>,
    /// Import into an existing document instead of opening a new one.
    /// Carried for the orchestration layer; decoders ignore it.
    pub read_properties: bool,
    pub size_policy: SizePolicy,
    /// Fail the segment on dangling parent/child references instead of
    /// nulling them. Cross references are always nulled.
    pub strict_references: bool,
    /// Folder for extracted workbooks when the filesystem sink is used.
    pub workbook_dir: Option<PathBuf>,
}

impl DecodeConfig {
    pub fn for_version(year: u32) -> Self {
        Self { file_version: FileVersion(year), ..Self::default() }
    }

    pub fn with_document_kind(mut self, kind: DocumentKind) -> Self {
        self.document_kind = Some(kind);
        self
    }

    pub fn with_size_policy(mut self, policy: SizePolicy) -> Self {
        self.size_policy = policy;
        self
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults() {
        let c = DecodeConfig::default();
        assert_eq!(c.size_policy, SizePolicy::Report);
        assert_eq!(c.document_kind, None);
        assert!(!c.strict_references);
    }

    #[test]
    fn test_from_json_partial() {
        let c = DecodeConfig::from_json(
            r#"{"file_version": 2012, "document_kind": "Part", "size_policy": "strict"}"#,
        )
        .unwrap();
        assert_eq!(
            c,
            DecodeConfig::for_version(2012)
                .with_document_kind(DocumentKind::Part)
                .with_size_policy(SizePolicy::Strict)
        );
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        assert!(DecodeConfig::from_json("{\"file_version\": \"x\"}").is_err());
    }
}
