//! # inventor-rs: record decoder for Autodesk Inventor segment streams
//!
//! Decodes the binary segment streams of IPT/IAM/IDW documents into a
//! typed, cross-referenced node graph: sketches, features, constraints,
//! parameters, units and transformations.
//!
//! ## Design Principles
//!
//! 1. **Buffer in, graph out**: the container reader hands over one byte
//!    buffer per stream; nothing here touches the filesystem except the
//!    optional workbook sink
//! 2. **Static dispatch**: every record type key maps to a plain function
//!    in a table built once
//! 3. **Arena + index**: nodes live in a per-segment vector, references are
//!    resolved to `NodeId` handles after the whole segment is decoded
//! 4. **Explicit context**: file version and document kind travel in a
//!    `DecodeContext`, never in globals
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use inventor_rs::{DecodeConfig, Document, SegmentKind, SegmentSource};
//!
//! # fn example(bytes: Vec<u8>, types: Vec<uuid::Uuid>) -> inventor_rs::Result<()> {
//! let config = DecodeConfig::for_version(2019);
//! let mut document = Document::new(config);
//! document.add_stream(SegmentSource::new("DC", SegmentKind::Dc, bytes, types))?;
//! document.resolve();
//!
//! for node in document.segment("DC").into_iter().flat_map(|s| s.nodes()) {
//!     println!("{node}");
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Segment Kinds
//!
//! | Kind | Table | Description |
//! |------|-------|-------------|
//! | Dc | `decoder::dc` | Design content: sketches, features, parameters, units |
//! | App | `decoder::app` | Application settings: materials, styles, defaults |

// ============================================================================
// Modules
// ============================================================================

pub mod codec;
pub mod config;
pub mod decoder;
pub mod document;
pub mod export;
pub mod model;
pub mod segment;
pub mod workbook;

// ============================================================================
// Re-exports: Model (the DTOs)
// ============================================================================

pub use model::{
    AttributeMap, ByteRange, DocumentKind, FileVersion, Node, NodeId, NodeRef, RefKind,
    Transformation, TypeId, Value,
};

// ============================================================================
// Re-exports: Decoding
// ============================================================================

pub use config::{DecodeConfig, SizePolicy};
pub use decoder::{DecodeContext, NodeReader};
pub use document::{Document, ParameterSet};
pub use segment::{Segment, SegmentKind, SegmentReader, SegmentSource, SegmentStats};
pub use workbook::{CollectingSink, FsSink, WorkbookSink};

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("read past end of record at offset {offset}: need {need} bytes, record has {len}")]
    BufferOverrun { offset: usize, need: usize, len: usize },

    #[error("stream {stream}, node {index}: {source}")]
    Node {
        stream: String,
        index: u32,
        #[source]
        source: Box<Error>,
    },

    #[error("stream {stream}, node {index}: declared size {declared} but decoder consumed {consumed}")]
    SizeMismatch { stream: String, index: u32, declared: usize, consumed: usize },

    #[error("stream {stream}: bad record framing at offset {offset}: {message}")]
    Framing { stream: String, offset: usize, message: String },

    #[error("document kind must be known before this record ({expected})")]
    DocumentKind { expected: &'static str },

    #[error("stream {stream}, node {index}: reference to missing node {target}")]
    UnresolvedReference { stream: String, index: u32, target: u32 },

    #[error("Workbook error: {0}")]
    Workbook(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Whether this failure ends the whole import instead of only the
    /// segment it happened in.
    pub fn aborts_import(&self) -> bool {
        match self {
            Error::BufferOverrun { .. } | Error::Framing { .. } => true,
            Error::Node { source, .. } => source.aborts_import(),
            _ => false,
        }
    }

    pub(crate) fn at_node(self, stream: &str, index: u32) -> Self {
        match self {
            Error::Node { .. }
            | Error::SizeMismatch { .. }
            | Error::Framing { .. }
            | Error::UnresolvedReference { .. } => self,
            other => Error::Node { stream: stream.to_string(), index, source: Box::new(other) },
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
