//! References between nodes of one segment.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::NodeId;

/// The three edge kinds a record can encode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RefKind {
    /// The structurally enclosing node. At most one per node.
    Parent,
    /// A node owned by this one.
    Child,
    /// Any other node, possibly not yet decoded when referenced.
    Cross,
}

/// A reference as stored in the stream, plus its resolved target.
///
/// Wire layout is two `u16` words `lo, hi`:
/// `index = lo | (hi & 0x7FFF) << 16`, `hi & 0x8000` is the mask flag.
/// An index of zero is the null reference and never produces a `NodeRef`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeRef {
    pub kind: RefKind,
    pub index: u32,
    pub mask: bool,
    /// Filled by the resolution pass; `None` until then, and after it when
    /// the index has no node in the segment.
    pub target: Option<NodeId>,
}

impl NodeRef {
    pub fn new(kind: RefKind, index: u32, mask: bool) -> Self {
        Self { kind, index, mask, target: None }
    }

    /// Build from the two stored words. Returns `None` for the null index.
    pub fn from_words(kind: RefKind, lo: u16, hi: u16) -> Option<Self> {
        let index = lo as u32 | ((hi as u32 & 0x7FFF) << 16);
        (index > 0).then(|| Self::new(kind, index, hi & 0x8000 != 0))
    }

    pub fn is_resolved(&self) -> bool { self.target.is_some() }
}

impl fmt::Display for NodeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self.kind {
            RefKind::Parent => 'P',
            RefKind::Child => 'C',
            RefKind::Cross => 'X',
        };
        write!(f, "{tag}{:04X}", self.index)?;
        if self.mask {
            write!(f, "*")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_words() {
        let r = NodeRef::from_words(RefKind::Cross, 0x0012, 0x8001).unwrap();
        assert_eq!(r.index, 0x0001_0012);
        assert!(r.mask);
        assert_eq!(r.target, None);
    }

    #[test]
    fn test_zero_index_is_null() {
        assert_eq!(NodeRef::from_words(RefKind::Child, 0, 0), None);
        // mask bit alone does not make a reference
        assert_eq!(NodeRef::from_words(RefKind::Cross, 0, 0x8000), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(NodeRef::new(RefKind::Cross, 0x2A, false).to_string(), "X002A");
        assert_eq!(NodeRef::new(RefKind::Parent, 1, true).to_string(), "P0001*");
    }
}
