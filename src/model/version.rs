//! Format version and document kind.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Inventor release year the document was written with.
///
/// Record layouts change at release boundaries; decoders compare against
/// the year directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FileVersion(pub u32);

impl FileVersion {
    /// Block-size markers precede sub-blocks from release 2011 on.
    pub const FIRST_WITH_BLOCK_SIZES: u32 = 2011;

    pub fn year(self) -> u32 { self.0 }

    pub fn has_block_sizes(self) -> bool {
        self.0 >= Self::FIRST_WITH_BLOCK_SIZES
    }
}

impl Default for FileVersion {
    fn default() -> Self { FileVersion(2019) }
}

impl fmt::Display for FileVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for FileVersion {
    fn from(v: u32) -> Self { FileVersion(v) }
}

/// Kind of the top-level document, declared by its Document record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum DocumentKind {
    Assembly = 1,
    Drawing = 2,
    Part = 3,
    Presentation = 4,
}

impl DocumentKind {
    /// From the file extension (`ipt`, `iam`, `idw`, `ipn`).
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "ipt" => Some(DocumentKind::Part),
            "iam" => Some(DocumentKind::Assembly),
            "idw" | "dwg" => Some(DocumentKind::Drawing),
            "ipn" => Some(DocumentKind::Presentation),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DocumentKind::Assembly => "assembly",
            DocumentKind::Drawing => "drawing",
            DocumentKind::Part => "part",
            DocumentKind::Presentation => "presentation",
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_size_threshold() {
        assert!(!FileVersion(2010).has_block_sizes());
        assert!(FileVersion(2011).has_block_sizes());
        assert!(FileVersion(2018) > FileVersion(2017));
    }

    #[test]
    fn test_kind_from_extension() {
        assert_eq!(DocumentKind::from_extension("IPT"), Some(DocumentKind::Part));
        assert_eq!(DocumentKind::from_extension("iam"), Some(DocumentKind::Assembly));
        assert_eq!(DocumentKind::from_extension("txt"), None);
        assert_eq!(DocumentKind::Part as u8, 3);
    }

    #[test]
    fn test_version_serde_transparent() {
        assert_eq!(serde_json::to_string(&FileVersion(2015)).unwrap(), "2015");
    }
}
