//! # Record decoding
//!
//! A record decoder is a plain function over a [`NodeReader`]: it pulls
//! fields off the node's byte range in stream order and stores them on the
//! node. The reader owns the offset; decoders never do arithmetic on it
//! beyond `skip`.
//!
//! ```text
//! SegmentReader ──► Registry::lookup(type_id) ──► fn(&mut NodeReader)
//!                                                   │
//!                      codec::read_* ◄──────────────┤ fields
//!                      headers / lists ◄────────────┘ shared shapes
//! ```

pub mod app;
pub mod dc;
pub mod headers;
pub mod lists;
pub mod table;
#[cfg(test)]
pub(crate) mod testing;

use std::sync::Arc;

use uuid::Uuid;

use crate::codec;
use crate::config::DecodeConfig;
use crate::model::{DocumentKind, FileVersion, Node, NodeRef, RefKind, Transformation, Value};
use crate::workbook::WorkbookSink;
use crate::{Error, Result};

pub use headers::Header0;
pub use lists::Item;
pub use table::{Decoder, Registry};

// ============================================================================
// Decode context
// ============================================================================

/// State shared by every decoder of one import.
pub struct DecodeContext {
    version: FileVersion,
    document_kind: Option<DocumentKind>,
    workbook: Option<Arc<dyn WorkbookSink>>,
}

impl DecodeContext {
    pub fn new(config: &DecodeConfig) -> Self {
        Self { version: config.file_version, document_kind: config.document_kind, workbook: None }
    }

    pub fn for_version(year: u32) -> Self {
        Self::new(&DecodeConfig::for_version(year))
    }

    pub fn with_workbook_sink(mut self, sink: Arc<dyn WorkbookSink>) -> Self {
        self.workbook = Some(sink);
        self
    }

    pub fn version(&self) -> FileVersion { self.version }

    pub fn document_kind(&self) -> Option<DocumentKind> { self.document_kind }

    /// Record the kind declared by a Document record.
    pub fn declare_document_kind(&mut self, kind: DocumentKind) {
        match self.document_kind {
            Some(prev) if prev != kind => {
                tracing::warn!(%prev, %kind, "document record redefines document kind");
            }
            _ => {}
        }
        self.document_kind = Some(kind);
    }
}

impl std::fmt::Debug for DecodeContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DecodeContext")
            .field("version", &self.version)
            .field("document_kind", &self.document_kind)
            .field("workbook", &self.workbook.is_some())
            .finish()
    }
}

// ============================================================================
// Node reader
// ============================================================================

/// Cursor over one record's payload, writing into its node.
pub struct NodeReader<'a> {
    data: &'a [u8],
    pos: usize,
    node: &'a mut Node,
    ctx: &'a mut DecodeContext,
}

macro_rules! named_scalar {
    ($name:ident, $take:ident, $ty:ty) => {
        pub fn $name(&mut self, field: &str) -> Result<$ty> {
            let v = self.$take()?;
            self.set(field, v);
            Ok(v)
        }
    };
}

macro_rules! named_array {
    ($name:ident, $read:path, $ty:ty) => {
        pub fn $name(&mut self, field: &str, count: usize) -> Result<Vec<$ty>> {
            let v = self.read_with(|buf, i| $read(buf, i, count))?;
            self.set(field, v.clone());
            Ok(v)
        }
    };
}

impl<'a> NodeReader<'a> {
    pub fn new(data: &'a [u8], node: &'a mut Node, ctx: &'a mut DecodeContext) -> Self {
        Self { data, pos: 0, node, ctx }
    }

    // --- cursor ---

    pub fn position(&self) -> usize { self.pos }

    /// Payload length of the record.
    pub fn len(&self) -> usize { self.data.len() }

    pub fn is_empty(&self) -> bool { self.data.is_empty() }

    pub fn remaining(&self) -> usize { self.data.len().saturating_sub(self.pos) }

    pub fn skip(&mut self, n: usize) { self.pos += n; }

    /// Skip the block-size marker that releases after 2010 write before
    /// sub-blocks.
    pub fn skip_block_size(&mut self) {
        if self.ctx.version.has_block_sizes() {
            self.pos += 4;
        }
    }

    /// Restart at the beginning of the record.
    pub fn rewind(&mut self) { self.pos = 0; }

    /// Move the cursor back to a position returned by `position()`.
    pub fn seek(&mut self, pos: usize) { self.pos = pos; }

    /// Mark the whole record as consumed.
    pub fn consume_all(&mut self) { self.pos = self.data.len(); }

    pub fn version(&self) -> u32 { self.ctx.version.year() }

    pub fn context(&mut self) -> &mut DecodeContext { &mut *self.ctx }

    /// Document kind, which must already be known at this point of the
    /// stream.
    pub fn require_document_kind(&self, expected: &'static str) -> Result<DocumentKind> {
        self.ctx.document_kind.ok_or(Error::DocumentKind { expected })
    }

    // --- node access ---

    pub fn node(&self) -> &Node { &*self.node }

    pub fn attr(&self, field: &str) -> Option<&Value> { self.node.attributes.get(field) }

    pub fn set(&mut self, field: &str, value: impl Into<Value>) {
        self.node.attributes.insert(field, value.into());
    }

    /// Store `value` unless the field was already read.
    pub fn set_default(&mut self, field: &str, value: impl Into<Value>) {
        if !self.node.attributes.contains(field) {
            self.set(field, value);
        }
    }

    pub fn remove(&mut self, field: &str) -> Option<Value> {
        self.node.attributes.remove(field)
    }

    pub fn set_type_name(&mut self, name: impl Into<String>) {
        self.node.type_name = Some(name.into());
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.node.name = Some(name.into());
    }

    pub fn name(&self) -> Option<&str> { self.node.name.as_deref() }

    // --- raw reads (not stored) ---

    fn read_with<T>(&mut self, f: impl FnOnce(&[u8], usize) -> Result<(T, usize)>) -> Result<T> {
        let (v, next) = f(self.data, self.pos)?;
        self.pos = next;
        Ok(v)
    }

    pub fn take_u8(&mut self) -> Result<u8> { self.read_with(codec::read_u8) }
    pub fn take_u16(&mut self) -> Result<u16> { self.read_with(codec::read_u16) }
    pub fn take_u32(&mut self) -> Result<u32> { self.read_with(codec::read_u32) }
    pub fn take_i16(&mut self) -> Result<i16> { self.read_with(codec::read_i16) }
    pub fn take_i32(&mut self) -> Result<i32> { self.read_with(codec::read_i32) }
    pub fn take_f32(&mut self) -> Result<f32> { self.read_with(codec::read_f32) }
    pub fn take_f64(&mut self) -> Result<f64> { self.read_with(codec::read_f64) }
    pub fn take_uuid(&mut self) -> Result<Uuid> { self.read_with(codec::read_uuid) }
    pub fn take_text16(&mut self) -> Result<String> { self.read_with(codec::read_text16) }
    pub fn take_text8(&mut self) -> Result<String> { self.read_with(codec::read_text8) }

    pub fn take_bool(&mut self) -> Result<bool> { Ok(self.take_u8()? != 0) }

    pub fn take_u16_array(&mut self, count: usize) -> Result<Vec<u16>> {
        self.read_with(|b, i| codec::read_u16_array(b, i, count))
    }

    pub fn take_u32_array(&mut self, count: usize) -> Result<Vec<u32>> {
        self.read_with(|b, i| codec::read_u32_array(b, i, count))
    }

    pub fn take_f64_array(&mut self, count: usize) -> Result<Vec<f64>> {
        self.read_with(|b, i| codec::read_f64_array(b, i, count))
    }

    pub fn take_bytes(&mut self, count: usize) -> Result<&'a [u8]> {
        let data = self.data;
        let b = codec::take(data, self.pos, count)?;
        self.pos += count;
        Ok(b)
    }

    /// A reference word pair. Child references are also registered on the
    /// node's child list.
    pub fn take_ref(&mut self, kind: RefKind) -> Result<Option<NodeRef>> {
        let lo = self.take_u16()?;
        let hi = self.take_u16()?;
        let r = NodeRef::from_words(kind, lo, hi);
        if let (Some(r), RefKind::Child) = (r, kind) {
            self.node.children.push(r);
        }
        Ok(r)
    }

    // --- named fields ---

    named_scalar!(u8, take_u8, u8);
    named_scalar!(u16, take_u16, u16);
    named_scalar!(u32, take_u32, u32);
    named_scalar!(i16, take_i16, i16);
    named_scalar!(i32, take_i32, i32);
    named_scalar!(f32, take_f32, f32);
    named_scalar!(f64, take_f64, f64);
    named_scalar!(uuid, take_uuid, Uuid);
    named_scalar!(boolean, take_bool, bool);

    named_array!(u8_array, codec::read_u8_array, u8);
    named_array!(u16_array, codec::read_u16_array, u16);
    named_array!(u32_array, codec::read_u32_array, u32);
    named_array!(i16_array, codec::read_i16_array, i16);
    named_array!(i32_array, codec::read_i32_array, i32);
    named_array!(f32_array, codec::read_f32_array, f32);
    named_array!(f64_array, codec::read_f64_array, f64);

    pub fn color_rgba(&mut self, field: &str) -> Result<[f32; 4]> {
        let v = self.read_with(|b, i| codec::read_f32_array(b, i, 4))?;
        let rgba = [v[0], v[1], v[2], v[3]];
        self.set(field, v);
        Ok(rgba)
    }

    pub fn text16(&mut self, field: &str) -> Result<String> {
        let s = self.take_text16()?;
        self.set(field, s.as_str());
        Ok(s)
    }

    pub fn text8(&mut self, field: &str) -> Result<String> {
        let s = self.take_text8()?;
        self.set(field, s.as_str());
        Ok(s)
    }

    /// UTF-16 text that names the node itself.
    pub fn name16(&mut self) -> Result<String> {
        let s = self.take_text16()?;
        self.node.name = Some(s.clone());
        Ok(s)
    }

    /// 8-bit text that names the node itself.
    pub fn name8(&mut self) -> Result<String> {
        let s = self.take_text8()?;
        self.node.name = Some(s.clone());
        Ok(s)
    }

    /// `u16` mapped through a name table; unknown codes keep the number.
    pub fn enum16(&mut self, field: &str, table: &[&str]) -> Result<u16> {
        let code = self.take_u16()?;
        match table.get(code as usize) {
            Some(name) => self.set(field, *name),
            None => self.set(field, code),
        }
        Ok(code)
    }

    pub fn cross_ref(&mut self, field: &str) -> Result<Option<NodeRef>> {
        let r = self.take_ref(RefKind::Cross)?;
        self.set(field, r);
        Ok(r)
    }

    pub fn child_ref(&mut self, field: &str) -> Result<Option<NodeRef>> {
        let r = self.take_ref(RefKind::Child)?;
        self.set(field, r);
        Ok(r)
    }

    pub fn parent_ref(&mut self) -> Result<Option<NodeRef>> {
        let r = self.take_ref(RefKind::Parent)?;
        self.node.parent = r;
        Ok(r)
    }

    pub fn transformation(&mut self) -> Result<Transformation> {
        let t = self.read_with(Transformation::read)?;
        self.set("transformation", t.to_value());
        Ok(t)
    }

    /// `rows` consecutive `f64[cols]` arrays.
    pub fn f64_rows(&mut self, field: &str, rows: usize, cols: usize) -> Result<()> {
        let mut out = Vec::with_capacity(rows.min(self.remaining()));
        for _ in 0..rows {
            out.push(Value::from(self.take_f64_array(cols)?));
        }
        self.set(field, Value::Array(out));
        Ok(())
    }

    /// `rows` consecutive `u32[cols]` arrays.
    pub fn u32_rows(&mut self, field: &str, rows: usize, cols: usize) -> Result<()> {
        let mut out = Vec::with_capacity(rows.min(self.remaining()));
        for _ in 0..rows {
            out.push(Value::from(self.take_u32_array(cols)?));
        }
        self.set(field, Value::Array(out));
        Ok(())
    }

    /// Hand an embedded workbook to the configured sink. Without a sink the
    /// bytes are only counted.
    pub fn save_workbook(&mut self, bytes: &[u8]) -> Result<()> {
        let file_name = format!("{}_{:04X}.xls", self.node.label(), self.node.id.0);
        self.set("workbook_size", bytes.len() as u32);
        match &self.ctx.workbook {
            Some(sink) => {
                sink.save(&file_name, bytes)?;
                self.set("workbook", file_name.as_str());
            }
            None => tracing::debug!(%file_name, size = bytes.len(), "no workbook sink, skipping"),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ByteRange, NodeId, TypeId};
    use crate::workbook::CollectingSink;

    fn node(len: usize) -> Node {
        Node::new(NodeId(1), TypeId(0x1234_5678), ByteRange { offset: 0, len })
    }

    #[test]
    fn test_block_size_gate() {
        let data = [0u8; 8];
        let mut n = node(8);
        let mut ctx = DecodeContext::for_version(2010);
        let mut r = NodeReader::new(&data, &mut n, &mut ctx);
        r.skip_block_size();
        assert_eq!(r.position(), 0);

        let mut ctx = DecodeContext::for_version(2011);
        let mut r = NodeReader::new(&data, &mut n, &mut ctx);
        r.skip_block_size();
        assert_eq!(r.position(), 4);
    }

    #[test]
    fn test_named_fields_are_stored_in_order() {
        let mut data = vec![0x07];
        data.extend_from_slice(&(-2i32).to_le_bytes());
        data.extend_from_slice(&1.25f64.to_le_bytes());
        let mut n = node(data.len());
        let mut ctx = DecodeContext::for_version(2019);
        let mut r = NodeReader::new(&data, &mut n, &mut ctx);
        assert_eq!(r.u8("u8_0").unwrap(), 7);
        assert_eq!(r.i32("s32_0").unwrap(), -2);
        assert_eq!(r.f64("x").unwrap(), 1.25);
        assert_eq!(r.remaining(), 0);
        let keys: Vec<_> = n.attributes.keys().collect();
        assert_eq!(keys, vec!["u8_0", "s32_0", "x"]);
    }

    #[test]
    fn test_refs() {
        // child 5, null cross, parent 2
        let data = [5, 0, 0, 0, 0, 0, 0, 0, 2, 0, 0, 0];
        let mut n = node(12);
        let mut ctx = DecodeContext::for_version(2019);
        let mut r = NodeReader::new(&data, &mut n, &mut ctx);
        r.child_ref("label").unwrap();
        assert_eq!(r.cross_ref("ref_1").unwrap(), None);
        r.parent_ref().unwrap();
        assert_eq!(n.children.len(), 1);
        assert_eq!(n.get("ref_1"), Some(&Value::Null));
        assert_eq!(n.parent.map(|p| p.index), Some(2));
    }

    #[test]
    fn test_enum16() {
        let data = [1, 0, 9, 0];
        let mut n = node(4);
        let mut ctx = DecodeContext::for_version(2019);
        let mut r = NodeReader::new(&data, &mut n, &mut ctx);
        r.enum16("a", &["zero", "one"]).unwrap();
        r.enum16("b", &["zero", "one"]).unwrap();
        assert_eq!(n.get("a"), Some(&Value::from("one")));
        assert_eq!(n.get("b"), Some(&Value::U16(9)));
    }

    #[test]
    fn test_document_kind_precondition() {
        let mut n = node(0);
        let mut ctx = DecodeContext::for_version(2019);
        let r = NodeReader::new(&[], &mut n, &mut ctx);
        assert!(matches!(r.require_document_kind("part"), Err(Error::DocumentKind { .. })));
    }

    #[test]
    fn test_save_workbook() {
        let sink = Arc::new(CollectingSink::new());
        let mut ctx = DecodeContext::for_version(2019).with_workbook_sink(sink.clone());
        let mut n = node(0).with_type_name("EmbeddedExcel");
        n.id = NodeId(0x1F);
        let mut r = NodeReader::new(&[], &mut n, &mut ctx);
        r.save_workbook(b"book").unwrap();
        assert_eq!(sink.take(), vec![("EmbeddedExcel_001F.xls".to_string(), b"book".to_vec())]);
        assert_eq!(n.get("workbook"), Some(&Value::from("EmbeddedExcel_001F.xls")));
    }
}
