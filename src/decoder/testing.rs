//! Helpers shared by the decoder unit tests.

use super::{DecodeContext, Decoder, NodeReader};
use crate::model::{ByteRange, DocumentKind, Node, NodeId, TypeId};
use crate::Result;

/// Releases on both sides of every version threshold the decoders know.
pub const VERSIONS: &[u32] = &[2010, 2011, 2012, 2013, 2015, 2016, 2017, 2018, 2019];

/// Little-endian record builder. `block()` follows the release's
/// block-size rule.
#[derive(Debug, Clone)]
pub struct Bytes {
    pub data: Vec<u8>,
    version: u32,
}

impl Bytes {
    pub fn new(version: u32) -> Self {
        Self { data: Vec::new(), version }
    }

    pub fn u8(mut self, v: u8) -> Self { self.data.push(v); self }
    pub fn u16(mut self, v: u16) -> Self { self.data.extend_from_slice(&v.to_le_bytes()); self }
    pub fn u32(mut self, v: u32) -> Self { self.data.extend_from_slice(&v.to_le_bytes()); self }
    pub fn i32(mut self, v: i32) -> Self { self.data.extend_from_slice(&v.to_le_bytes()); self }
    pub fn f64(mut self, v: f64) -> Self { self.data.extend_from_slice(&v.to_le_bytes()); self }
    pub fn zeros(mut self, n: usize) -> Self { self.data.resize(self.data.len() + n, 0); self }

    /// Reference to node `index`; 0 is null.
    pub fn node_ref(self, index: u32) -> Self { self.u32(index) }

    pub fn block(self) -> Self {
        if self.version >= 2011 { self.zeros(4) } else { self }
    }

    pub fn header0(self) -> Self { self.u32(0).u16(0).block() }

    /// ContentHeader with a null label.
    pub fn content(self, parent: u32) -> Self {
        self.header0().node_ref(0).u32(0).block().node_ref(parent).u32(0)
    }

    /// An empty list2 / map6.
    pub fn empty_list(self) -> Self { self.u32(0) }

    /// A list2 of cross references.
    pub fn ref_list(self, refs: &[u32]) -> Self {
        let b = self.u32(refs.len() as u32);
        let b = if refs.is_empty() { b } else { b.zeros(8) };
        refs.iter().fold(b, |b, &r| b.node_ref(r))
    }
}

/// Decode `data` as record `key` in a part document. Returns the node,
/// the decoder outcome and the number of bytes consumed.
pub fn decode(key: u32, version: u32, data: &[u8], decoder: Decoder) -> (Node, Result<()>, usize) {
    let mut node = Node::new(NodeId(5), TypeId(key), ByteRange { offset: 0, len: data.len() });
    let mut ctx = DecodeContext::for_version(version);
    ctx.declare_document_kind(DocumentKind::Part);
    let mut r = NodeReader::new(data, &mut node, &mut ctx);
    let res = decoder(&mut r);
    let used = r.position();
    (node, res, used)
}

/// Bytes a decoder takes from an all-zero record: zero counts, null
/// references, zero scalars. `None` when it cannot decode one.
pub fn zero_record_len(key: u32, version: u32, decoder: Decoder) -> Option<usize> {
    let (_, res, used) = decode(key, version, &[0; 1024], decoder);
    res.ok().map(|()| used)
}

/// Every decoder of `table` reads an all-zero record of exactly the size
/// it consumed from a longer one, in every release. Returns how many
/// (decoder, release) pairs were checked.
pub fn assert_zero_records_frame(table: &[(u32, Decoder)]) -> usize {
    let mut checked = 0;
    for &version in VERSIONS {
        for &(key, decoder) in table {
            let Some(len) = zero_record_len(key, version, decoder) else { continue };
            let (_, res, used) = decode(key, version, &vec![0; len], decoder);
            assert!(res.is_ok(), "{key:08X} at {version}: {res:?}");
            assert_eq!(used, len, "{key:08X} at {version}");
            checked += 1;
        }
    }
    checked
}
