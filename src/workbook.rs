//! Destination for embedded spreadsheet buffers.
//!
//! The workbook record carries a complete `.xls` file. Decoding hands the
//! raw bytes and a file name to a [`WorkbookSink`]; persisting them is the
//! sink's business.

use std::fs;
use std::path::{Path, PathBuf};

use parking_lot::Mutex;

use crate::Result;

/// Receives embedded workbooks found during decoding.
pub trait WorkbookSink: Send + Sync {
    /// Persist `bytes` under `file_name` (no directory part).
    fn save(&self, file_name: &str, bytes: &[u8]) -> Result<()>;
}

/// Writes each workbook into a folder.
#[derive(Debug, Clone)]
pub struct FsSink {
    dir: PathBuf,
}

impl FsSink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path { &self.dir }
}

impl WorkbookSink for FsSink {
    fn save(&self, file_name: &str, bytes: &[u8]) -> Result<()> {
        fs::create_dir_all(&self.dir)?;
        let path = self.dir.join(file_name);
        fs::write(&path, bytes)?;
        tracing::info!(path = %path.display(), size = bytes.len(), "stored embedded workbook");
        Ok(())
    }
}

/// Keeps workbooks in memory.
#[derive(Debug, Default)]
pub struct CollectingSink {
    saved: Mutex<Vec<(String, Vec<u8>)>>,
}

impl CollectingSink {
    pub fn new() -> Self { Self::default() }

    pub fn take(&self) -> Vec<(String, Vec<u8>)> {
        std::mem::take(&mut *self.saved.lock())
    }

    pub fn len(&self) -> usize { self.saved.lock().len() }

    pub fn is_empty(&self) -> bool { self.len() == 0 }
}

impl WorkbookSink for CollectingSink {
    fn save(&self, file_name: &str, bytes: &[u8]) -> Result<()> {
        self.saved.lock().push((file_name.to_string(), bytes.to_vec()));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collecting_sink() {
        let sink = CollectingSink::new();
        sink.save("EmbeddedExcel_0004.xls", &[1, 2, 3]).unwrap();
        assert_eq!(sink.len(), 1);
        assert_eq!(sink.take(), vec![("EmbeddedExcel_0004.xls".to_string(), vec![1, 2, 3])]);
        assert!(sink.is_empty());
    }

    #[test]
    fn test_fs_sink_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let sink = FsSink::new(dir.path().join("workbooks"));
        sink.save("a.xls", b"xls").unwrap();
        assert_eq!(fs::read(dir.path().join("workbooks/a.xls")).unwrap(), b"xls");
    }
}
