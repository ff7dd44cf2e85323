//! # Segment Reader
//!
//! Turns one stream buffer into a [`Segment`]: an arena of decoded nodes
//! whose references point at other nodes of the same arena.
//!
//! ```text
//! Init ──► Indexing ──► Decoding(0..n) ──► Resolving ──► Done
//!          framing      registry lookup     NodeRef.target
//!          size scan    size cross-check    null dangling
//! ```
//!
//! Decoding and resolving are separate calls so a [`Document`] can decode
//! every stream before any reference is resolved.
//!
//! [`Document`]: crate::document::Document

pub mod framing;
mod reader;

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::decoder::Registry;
use crate::model::{Node, NodeId};

pub use framing::Frame;
pub use reader::{Phase, SegmentReader};

// ============================================================================
// Input
// ============================================================================

/// Which decoder table a stream is read with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SegmentKind {
    /// Design content: the model itself.
    Dc,
    /// Application settings.
    App,
}

impl SegmentKind {
    pub fn registry(self) -> &'static Registry {
        match self {
            SegmentKind::Dc => Registry::dc(),
            SegmentKind::App => Registry::app(),
        }
    }
}

impl fmt::Display for SegmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SegmentKind::Dc => f.write_str("DC"),
            SegmentKind::App => f.write_str("App"),
        }
    }
}

/// One stream as handed over by the container reader.
#[derive(Debug, Clone)]
pub struct SegmentSource {
    pub name: String,
    pub kind: SegmentKind,
    pub bytes: Vec<u8>,
    /// Type table of the segment: slot to record UUID.
    pub types: Vec<Option<Uuid>>,
}

impl SegmentSource {
    pub fn new(
        name: impl Into<String>,
        kind: SegmentKind,
        bytes: Vec<u8>,
        types: impl IntoIterator<Item = impl Into<Option<Uuid>>>,
    ) -> Self {
        Self {
            name: name.into(),
            kind,
            bytes,
            types: types.into_iter().map(Into::into).collect(),
        }
    }
}

// ============================================================================
// Output
// ============================================================================

/// Counters collected while reading a segment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SegmentStats {
    /// Nodes handled by a registered decoder.
    pub decoded: usize,
    /// Nodes with no decoder; only their byte range is known.
    pub ignored: usize,
    pub size_mismatched: usize,
    /// Records re-framed by the trailing size scan.
    pub self_corrected: usize,
    /// Dangling references left without a target, each counted once.
    pub nulled_refs: usize,
}

/// A node whose decoder consumed a different number of bytes than the
/// record declares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Defect {
    pub node: NodeId,
    pub declared: usize,
    pub consumed: usize,
}

impl fmt::Display for Defect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] declared {} bytes, decoder consumed {}", self.node, self.declared, self.consumed)
    }
}

/// A fully read and resolved stream.
#[derive(Debug, Clone, Serialize)]
pub struct Segment {
    pub name: String,
    pub kind: SegmentKind,
    pub nodes: Vec<Node>,
    pub stats: SegmentStats,
    pub defects: Vec<Defect>,
    #[serde(skip)]
    pub data: Vec<u8>,
}

impl Segment {
    pub fn nodes(&self) -> &[Node] { &self.nodes }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0 as usize)
    }

    /// Target node of a resolved reference attribute.
    pub fn follow(&self, node: &Node, key: &str) -> Option<&Node> {
        node.target(key).and_then(|id| self.node(id))
    }

    /// Raw payload bytes of a node.
    pub fn payload(&self, id: NodeId) -> Option<&[u8]> {
        let range = self.node(id)?.range;
        self.data.get(range.offset..range.end())
    }

    pub fn nodes_of_type<'s>(&'s self, type_name: &'s str) -> impl Iterator<Item = &'s Node> + 's {
        self.nodes.iter().filter(move |n| n.is_type(type_name))
    }

    pub fn len(&self) -> usize { self.nodes.len() }

    pub fn is_empty(&self) -> bool { self.nodes.is_empty() }
}
