//! The per-segment state machine.

use crate::config::{DecodeConfig, SizePolicy};
use crate::decoder::{DecodeContext, NodeReader, Registry};
use crate::model::{Node, NodeId, NodeRef, RefKind};
use crate::{Error, Result};

use super::framing::{self, Frame};
use super::{Defect, Segment, SegmentSource, SegmentStats};

/// Where a [`SegmentReader`] is in its life.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Init,
    Indexing,
    Decoding(u32),
    Resolving,
    Done,
    /// A fatal error ended the segment.
    Failed,
}

/// Reads one [`SegmentSource`] into a [`Segment`].
pub struct SegmentReader {
    source: SegmentSource,
    registry: &'static Registry,
    size_policy: SizePolicy,
    strict_references: bool,
    phase: Phase,
    nodes: Vec<Node>,
    stats: SegmentStats,
    defects: Vec<Defect>,
}

impl SegmentReader {
    pub fn new(source: SegmentSource, config: &DecodeConfig) -> Self {
        let registry = source.kind.registry();
        Self {
            source,
            registry,
            size_policy: config.size_policy,
            strict_references: config.strict_references,
            phase: Phase::Init,
            nodes: Vec::new(),
            stats: SegmentStats::default(),
            defects: Vec::new(),
        }
    }

    /// Decode and resolve in one go, for a stream that does not reference
    /// other streams.
    pub fn read(source: SegmentSource, config: &DecodeConfig, ctx: &mut DecodeContext) -> Result<Segment> {
        let mut reader = Self::new(source, config);
        reader.decode(ctx)?;
        reader.resolve()
    }

    pub fn name(&self) -> &str { &self.source.name }

    pub fn phase(&self) -> Phase { self.phase }

    pub fn stats(&self) -> &SegmentStats { &self.stats }

    fn enter(&mut self, phase: Phase) {
        if !matches!(phase, Phase::Decoding(_)) {
            tracing::debug!(stream = %self.source.name, from = ?self.phase, to = ?phase, "segment phase");
        }
        self.phase = phase;
    }

    /// Indexing and Decoding. Leaves references unresolved.
    pub fn decode(&mut self, ctx: &mut DecodeContext) -> Result<()> {
        self.enter(Phase::Indexing);
        let frames = framing::index_records(&self.source.name, &self.source.bytes, &self.source.types, self.registry)
            .inspect_err(|_| self.phase = Phase::Failed)?;

        self.nodes.reserve(frames.len());
        for (i, frame) in frames.iter().enumerate() {
            let index = i as u32;
            self.enter(Phase::Decoding(index));
            match self.decode_node(index, frame, ctx) {
                Ok(node) => self.nodes.push(node),
                Err(e) => {
                    self.phase = Phase::Failed;
                    return Err(e);
                }
            }
        }
        tracing::debug!(
            stream = %self.source.name,
            nodes = self.nodes.len(),
            decoded = self.stats.decoded,
            ignored = self.stats.ignored,
            size_mismatched = self.stats.size_mismatched,
            "segment decoded"
        );
        Ok(())
    }

    fn decode_node(&mut self, index: u32, frame: &Frame, ctx: &mut DecodeContext) -> Result<Node> {
        let mut node = Node::new(NodeId(index), frame.type_id, frame.range);
        if frame.declared.is_some() {
            self.stats.self_corrected += 1;
        }

        let Some(decoder) = self.registry.lookup(frame.type_id) else {
            tracing::trace!(stream = %self.source.name, node = %node.id, type_id = %frame.type_id, "no decoder, ignored");
            self.stats.ignored += 1;
            return Ok(node);
        };

        let data = &self.source.bytes[frame.range.offset..frame.range.end()];
        let consumed = {
            let mut r = NodeReader::new(data, &mut node, ctx);
            decoder(&mut r).map_err(|e| e.at_node(&self.source.name, index))?;
            r.position()
        };
        node.decoded = true;
        self.stats.decoded += 1;

        let declared = frame.range.len;
        if consumed != declared {
            if self.size_policy == SizePolicy::Strict {
                return Err(Error::SizeMismatch { stream: self.source.name.clone(), index, declared, consumed });
            }
            tracing::warn!(
                stream = %self.source.name,
                node = %node.id,
                type_id = %node.label(),
                declared,
                consumed,
                "record size mismatch"
            );
            self.stats.size_mismatched += 1;
            self.defects.push(Defect { node: node.id, declared, consumed });
        }
        Ok(node)
    }

    /// Resolving: point every reference at its node. Consumes the reader
    /// and hands over the finished segment.
    pub fn resolve(mut self) -> Result<Segment> {
        self.enter(Phase::Resolving);
        let count = self.nodes.len();
        let stream = self.source.name.clone();
        let strict = self.strict_references;
        let mut nulled = 0;

        for node in &mut self.nodes {
            let index = node.id.0;
            let mut dangling = None;
            // Child refs are mirrored from the attributes into `children`;
            // only the `children` copy is counted.
            let mut link = |r: &mut NodeRef, mirrored: bool| {
                if (r.index as usize) < count {
                    r.target = Some(NodeId(r.index));
                    return;
                }
                r.target = None;
                if mirrored {
                    return;
                }
                if strict && r.kind != RefKind::Cross {
                    dangling.get_or_insert(r.index);
                } else {
                    tracing::debug!(stream = %stream, node = index, target = r.index, kind = ?r.kind, "nulled dangling reference");
                    nulled += 1;
                }
            };

            if let Some(parent) = node.parent.as_mut() {
                link(parent, false);
            }
            for child in &mut node.children {
                link(child, false);
            }
            for value in node.attributes.values_mut() {
                value.for_each_ref_mut(&mut |r: &mut NodeRef| {
                    let mirrored = r.kind == RefKind::Child;
                    link(r, mirrored)
                });
            }

            if let Some(target) = dangling {
                self.phase = Phase::Failed;
                return Err(Error::UnresolvedReference { stream, index, target });
            }
        }

        self.stats.nulled_refs = nulled;
        self.enter(Phase::Done);
        Ok(Segment {
            name: self.source.name,
            kind: self.source.kind,
            nodes: self.nodes,
            stats: self.stats,
            defects: self.defects,
            data: self.source.bytes,
        })
    }
}

impl std::fmt::Debug for SegmentReader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SegmentReader")
            .field("stream", &self.source.name)
            .field("kind", &self.source.kind)
            .field("phase", &self.phase)
            .field("nodes", &self.nodes.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ByteRange, NodeRef, TypeId, Value};
    use crate::segment::SegmentKind;
    use pretty_assertions::assert_eq;
    use uuid::Uuid;

    const CROSS_HOLDER: u32 = 0x9087_4D18;

    fn uuid(key: u32) -> Option<Uuid> {
        Some(Uuid::from_fields(key, 0, 0, &[0; 8]))
    }

    fn record(buf: &mut Vec<u8>, slot: u8, payload: &[u8]) {
        let size = payload.len() as u32;
        buf.extend_from_slice(&size.to_le_bytes());
        buf.extend_from_slice(&[slot, 0, 0, 0]);
        buf.extend_from_slice(payload);
        buf.extend_from_slice(&size.to_le_bytes());
    }

    fn reader(bytes: Vec<u8>, config: &DecodeConfig) -> SegmentReader {
        SegmentReader::new(SegmentSource::new("DC", SegmentKind::Dc, bytes, [None, uuid(0x1234_5678)]), config)
    }

    #[test]
    fn test_unknown_records_are_ignored() {
        let mut buf = Vec::new();
        record(&mut buf, 0, &[1, 2, 3, 4]);
        record(&mut buf, 1, &[5; 7]);
        let config = DecodeConfig::for_version(2019);
        let mut ctx = DecodeContext::new(&config);
        let seg = SegmentReader::read(
            SegmentSource::new("DC", SegmentKind::Dc, buf, [None, uuid(0x1234_5678)]),
            &config,
            &mut ctx,
        )
        .unwrap();
        assert_eq!(seg.len(), 2);
        assert_eq!(seg.stats.ignored, 2);
        let n = seg.node(NodeId(1)).unwrap();
        assert_eq!(n.type_id, TypeId(0x1234_5678));
        assert!(!n.decoded);
        assert!(n.attributes.is_empty());
        assert_eq!(seg.payload(NodeId(1)), Some(&[5u8; 7][..]));
    }

    #[test]
    fn test_phases() {
        let mut buf = Vec::new();
        record(&mut buf, 0, &[]);
        let config = DecodeConfig::default();
        let mut r = reader(buf, &config);
        assert_eq!(r.phase(), Phase::Init);
        r.decode(&mut DecodeContext::new(&config)).unwrap();
        assert_eq!(r.phase(), Phase::Decoding(0));
        let seg = r.resolve().unwrap();
        assert_eq!(seg.len(), 1);
    }

    #[test]
    fn test_framing_failure_marks_failed() {
        let config = DecodeConfig::default();
        let mut r = reader(vec![9, 0, 0, 0, 0, 0, 0, 0], &config);
        assert!(r.decode(&mut DecodeContext::new(&config)).is_err());
        assert_eq!(r.phase(), Phase::Failed);
    }

    fn with_refs(parent: u32, cross: u32) -> SegmentReader {
        let mut r = reader(Vec::new(), &DecodeConfig { strict_references: true, ..DecodeConfig::default() });
        let mut node = Node::new(NodeId(0), TypeId(CROSS_HOLDER), ByteRange { offset: 0, len: 0 }).with_attribute(
            "xref",
            Value::Array(vec![NodeRef::new(RefKind::Cross, cross, false).into()]),
        );
        node.parent = Some(NodeRef::new(RefKind::Parent, parent, false));
        r.nodes = vec![node, Node::new(NodeId(1), TypeId(0), ByteRange { offset: 0, len: 0 })];
        r
    }

    #[test]
    fn test_cross_refs_are_nulled_even_when_strict() {
        let seg = with_refs(1, 40).resolve().unwrap();
        let node = seg.node(NodeId(0)).unwrap();
        assert_eq!(node.parent.unwrap().target, Some(NodeId(1)));
        let xref = node.get("xref").unwrap().as_array().unwrap()[0].as_node_ref().copied().unwrap();
        assert_eq!(xref.target, None);
        assert_eq!(seg.stats.nulled_refs, 1);
    }

    #[test]
    fn test_strict_dangling_parent() {
        let err = with_refs(9, 1).resolve().unwrap_err();
        assert!(matches!(err, Error::UnresolvedReference { index: 0, target: 9, .. }));
        assert!(!err.aborts_import());
    }

    #[test]
    fn test_dangling_child_counted_once() {
        let mut r = reader(Vec::new(), &DecodeConfig::default());
        let label = NodeRef::new(RefKind::Child, 40, false);
        let mut node = Node::new(NodeId(0), TypeId(CROSS_HOLDER), ByteRange { offset: 0, len: 0 })
            .with_attribute("label", label);
        node.children.push(label);
        r.nodes = vec![node];

        let seg = r.resolve().unwrap();
        let node = seg.node(NodeId(0)).unwrap();
        assert_eq!(node.children[0].target, None);
        assert_eq!(node.get("label").unwrap().as_node_ref().unwrap().target, None);
        assert_eq!(seg.stats.nulled_refs, 1);
    }
}
