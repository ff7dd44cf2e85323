//! # Document
//!
//! Holds every segment of one import. Streams are decoded as they are
//! added; references are resolved for all of them at once by
//! [`Document::resolve`], so no segment is resolved while another is still
//! being decoded.
//!
//! ## Failure handling
//!
//! | Error | Effect |
//! |-------|--------|
//! | buffer overrun, framing | `add_stream` returns the error, import ends |
//! | anything else | segment is dropped and listed in `failures()` |

mod parameters;

use std::sync::Arc;

use crate::config::DecodeConfig;
use crate::decoder::DecodeContext;
use crate::model::{DocumentKind, FileVersion};
use crate::segment::{Segment, SegmentReader, SegmentSource};
use crate::workbook::{FsSink, WorkbookSink};
use crate::{Error, Result};

pub use parameters::{Expr, Parameter, ParameterSet, Unit};

/// A segment that could not be read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SegmentFailure {
    pub stream: String,
    pub message: String,
}

/// All segments of one import.
#[derive(Debug)]
pub struct Document {
    config: DecodeConfig,
    ctx: DecodeContext,
    pending: Vec<SegmentReader>,
    segments: Vec<Segment>,
    failures: Vec<SegmentFailure>,
}

impl Document {
    pub fn new(config: DecodeConfig) -> Self {
        let mut ctx = DecodeContext::new(&config);
        if let Some(dir) = &config.workbook_dir {
            ctx = ctx.with_workbook_sink(Arc::new(FsSink::new(dir)));
        }
        Self { config, ctx, pending: Vec::new(), segments: Vec::new(), failures: Vec::new() }
    }

    /// Route embedded workbooks to `sink` instead of the configured folder.
    pub fn with_workbook_sink(mut self, sink: Arc<dyn WorkbookSink>) -> Self {
        self.ctx = self.ctx.with_workbook_sink(sink);
        self
    }

    pub fn config(&self) -> &DecodeConfig { &self.config }

    pub fn version(&self) -> FileVersion { self.ctx.version() }

    /// Kind given up front or declared by the Document record.
    pub fn kind(&self) -> Option<DocumentKind> { self.ctx.document_kind() }

    /// Decode one stream. Its references stay unresolved until
    /// [`resolve`](Self::resolve).
    pub fn add_stream(&mut self, source: SegmentSource) -> Result<()> {
        let mut reader = SegmentReader::new(source, &self.config);
        match reader.decode(&mut self.ctx) {
            Ok(()) => {
                self.pending.push(reader);
                Ok(())
            }
            Err(e) if e.aborts_import() => {
                tracing::error!(stream = reader.name(), error = %e, "import aborted");
                Err(e)
            }
            Err(e) => {
                self.record_failure(reader.name(), &e);
                Ok(())
            }
        }
    }

    fn record_failure(&mut self, stream: &str, e: &Error) {
        tracing::error!(stream, error = %e, "segment failed");
        self.failures.push(SegmentFailure { stream: stream.to_string(), message: e.to_string() });
    }

    /// Resolve the references of every decoded stream.
    pub fn resolve(&mut self) {
        for reader in std::mem::take(&mut self.pending) {
            let stream = reader.name().to_string();
            match reader.resolve() {
                Ok(segment) => {
                    tracing::debug!(stream = %segment.name, stats = ?segment.stats, "segment done");
                    self.segments.push(segment);
                }
                Err(e) => self.record_failure(&stream, &e),
            }
        }
    }

    pub fn segment(&self, name: &str) -> Option<&Segment> {
        self.segments.iter().find(|s| s.name == name)
    }

    pub fn segments(&self) -> &[Segment] { &self.segments }

    pub fn failures(&self) -> &[SegmentFailure] { &self.failures }

    /// Typed parameters of a resolved segment.
    pub fn parameters(&self, name: &str) -> Option<ParameterSet> {
        self.segment(name).map(ParameterSet::from_segment)
    }
}
