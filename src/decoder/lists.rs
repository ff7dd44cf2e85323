//! Counted lists and maps.
//!
//! ```text
//! list2   u32 count, [u32; 2] descriptor (only when count > 0), items
//! list3   block size, list2
//! list4   u32 count, items
//! list8   u32 count, u32 descriptor, items
//! map6    list2 framing over (key, value) pairs
//! map7    block size, map6
//! ref_*   u32 count, fixed tuples starting with a reference
//! tuple   u32 count, fixed tuples of any shape
//! ```
//!
//! Every reference read through these helpers goes through
//! [`NodeReader::take_ref`], so child references land on the node's child
//! list like single fields do.

use super::NodeReader;
use crate::model::{RefKind, Value};
use crate::Result;

/// Element shape of a list or one side of a map entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Item {
    ChildRef,
    CrossRef,
    U8,
    U16,
    U32,
    F64,
    Uuid,
    Text8,
    Text16,
    /// Two `u16` words kept together.
    U16Pair,
    /// A point or vector.
    F64Triple,
    U32Array(usize),
    /// A nested list2 of cross references.
    CrossRefList,
}

/// Smallest number of bytes one element can occupy.
fn min_size(item: Item) -> usize {
    match item {
        Item::U8 => 1,
        Item::U16 => 2,
        Item::ChildRef | Item::CrossRef | Item::U32 | Item::U16Pair => 4,
        Item::Text8 | Item::Text16 | Item::CrossRefList => 4,
        Item::F64 => 8,
        Item::Uuid => 16,
        Item::F64Triple => 24,
        Item::U32Array(n) => 4 * n,
    }
}

impl NodeReader<'_> {
    /// Read one element without storing it.
    pub fn read_item(&mut self, item: Item) -> Result<Value> {
        Ok(match item {
            Item::ChildRef => self.take_ref(RefKind::Child)?.into(),
            Item::CrossRef => self.take_ref(RefKind::Cross)?.into(),
            Item::U8 => self.take_u8()?.into(),
            Item::U16 => self.take_u16()?.into(),
            Item::U32 => self.take_u32()?.into(),
            Item::F64 => self.take_f64()?.into(),
            Item::Uuid => self.take_uuid()?.into(),
            Item::Text8 => self.take_text8()?.into(),
            Item::Text16 => self.take_text16()?.into(),
            Item::U16Pair => self.take_u16_array(2)?.into(),
            Item::F64Triple => self.take_f64_array(3)?.into(),
            Item::U32Array(n) => self.take_u32_array(n)?.into(),
            Item::CrossRefList => Value::Array(self.read_list2(Item::CrossRef)?),
        })
    }

    /// Guard against counts that cannot fit in what is left of the record.
    fn capacity_for(&self, count: u32, per_item: usize) -> usize {
        (count as usize).min(self.remaining() / per_item.max(1))
    }

    fn read_items(&mut self, count: u32, item: Item) -> Result<Vec<Value>> {
        let mut out = Vec::with_capacity(self.capacity_for(count, min_size(item)));
        for _ in 0..count {
            out.push(self.read_item(item)?);
        }
        Ok(out)
    }

    fn read_entries(&mut self, count: u32, key: Item, value: Item) -> Result<Vec<(Value, Value)>> {
        let per = min_size(key) + min_size(value);
        let mut out = Vec::with_capacity(self.capacity_for(count, per));
        for _ in 0..count {
            let k = self.read_item(key)?;
            let v = self.read_item(value)?;
            out.push((k, v));
        }
        Ok(out)
    }

    fn read_list2(&mut self, item: Item) -> Result<Vec<Value>> {
        let count = self.take_u32()?;
        if count > 0 {
            self.take_u32_array(2)?;
        }
        self.read_items(count, item)
    }

    // --- generic lists ---

    pub fn list2(&mut self, field: &str, item: Item) -> Result<usize> {
        let v = self.read_list2(item)?;
        let n = v.len();
        self.set(field, Value::Array(v));
        Ok(n)
    }

    pub fn list3(&mut self, field: &str, item: Item) -> Result<usize> {
        self.skip_block_size();
        self.list2(field, item)
    }

    pub fn list4(&mut self, field: &str, item: Item) -> Result<usize> {
        let count = self.take_u32()?;
        let v = self.read_items(count, item)?;
        let n = v.len();
        self.set(field, Value::Array(v));
        Ok(n)
    }

    pub fn list8(&mut self, field: &str, item: Item) -> Result<usize> {
        let count = self.take_u32()?;
        self.take_u32()?;
        let v = self.read_items(count, item)?;
        let n = v.len();
        self.set(field, Value::Array(v));
        Ok(n)
    }

    pub fn map6(&mut self, field: &str, key: Item, value: Item) -> Result<usize> {
        let count = self.take_u32()?;
        if count > 0 {
            self.take_u32_array(2)?;
        }
        let entries = self.read_entries(count, key, value)?;
        let n = entries.len();
        self.set(field, Value::Map(entries));
        Ok(n)
    }

    pub fn map7(&mut self, field: &str, key: Item, value: Item) -> Result<usize> {
        self.skip_block_size();
        self.map6(field, key, value)
    }

    // --- counted runs ---

    /// `u32` count followed by that many `u32` words.
    pub fn counted_u32_array(&mut self, field: &str) -> Result<Vec<u32>> {
        let count = self.take_u32()?;
        self.u32_array(field, count as usize)
    }

    /// `u32` count followed by that many `f64` values.
    pub fn counted_f64_array(&mut self, field: &str) -> Result<Vec<f64>> {
        let count = self.take_u32()?;
        self.f64_array(field, count as usize)
    }

    /// One fixed-shape tuple, not stored.
    pub fn read_tuple(&mut self, shape: &[Item]) -> Result<Value> {
        let mut out = Vec::with_capacity(shape.len());
        for &item in shape {
            out.push(self.read_item(item)?);
        }
        Ok(Value::Array(out))
    }

    /// `u32` count followed by tuples of the given shape.
    pub fn tuple_list(&mut self, field: &str, shape: &[Item]) -> Result<usize> {
        let per: usize = shape.iter().map(|&i| min_size(i)).sum();
        self.ref_tuples(field, per, |r| r.read_tuple(shape))
    }

    /// A nested list2 read in place, not stored.
    pub fn take_list2(&mut self, item: Item) -> Result<Vec<Value>> {
        self.read_list2(item)
    }

    // --- reference tuples ---

    fn ref_tuples(
        &mut self,
        field: &str,
        per_item: usize,
        mut read: impl FnMut(&mut Self) -> Result<Value>,
    ) -> Result<usize> {
        let count = self.take_u32()?;
        let mut out = Vec::with_capacity(self.capacity_for(count, per_item));
        for _ in 0..count {
            out.push(read(self)?);
        }
        let n = out.len();
        self.set(field, Value::Array(out));
        Ok(n)
    }

    /// Cross references.
    pub fn ref_list(&mut self, field: &str) -> Result<usize> {
        self.ref_tuples(field, 4, |r| Ok(r.take_ref(RefKind::Cross)?.into()))
    }

    /// Pairs of child references.
    pub fn ref_ref_list(&mut self, field: &str) -> Result<usize> {
        self.ref_tuples(field, 8, |r| {
            let a = r.take_ref(RefKind::Child)?;
            let b = r.take_ref(RefKind::Child)?;
            Ok(Value::Array(vec![a.into(), b.into()]))
        })
    }

    /// A child reference paired with a cross reference.
    pub fn ref_xref_list(&mut self, field: &str) -> Result<usize> {
        self.ref_tuples(field, 8, |r| {
            let a = r.take_ref(RefKind::Child)?;
            let b = r.take_ref(RefKind::Cross)?;
            Ok(Value::Array(vec![a.into(), b.into()]))
        })
    }

    pub fn ref_u32_list(&mut self, field: &str) -> Result<usize> {
        self.ref_tuples(field, 8, |r| {
            let a = r.take_ref(RefKind::Cross)?;
            let b = r.take_u32()?;
            Ok(Value::Array(vec![a.into(), b.into()]))
        })
    }

    pub fn ref_u32_array_list(&mut self, field: &str, size: usize, kind: RefKind) -> Result<usize> {
        self.ref_tuples(field, 4 + 4 * size, |r| {
            let a = r.take_ref(kind)?;
            let b = r.take_u32_array(size)?;
            Ok(Value::Array(vec![a.into(), b.into()]))
        })
    }

    /// `(ref, u32, ref, u32[size])` tuples.
    pub fn ref_u32a_ref_u32_list(&mut self, field: &str, size: usize) -> Result<usize> {
        self.ref_tuples(field, 12 + 4 * size, |r| {
            let a = r.take_ref(RefKind::Cross)?;
            let n = r.take_u32()?;
            let b = r.take_ref(RefKind::Cross)?;
            let arr = r.take_u32_array(size)?;
            Ok(Value::Array(vec![a.into(), n.into(), b.into(), arr.into()]))
        })
    }

    pub fn ref_u32_u8_list(&mut self, field: &str) -> Result<usize> {
        self.ref_tuples(field, 9, |r| {
            let a = r.take_ref(RefKind::Cross)?;
            let b = r.take_u32()?;
            let c = r.take_u8()?;
            Ok(Value::Array(vec![a.into(), b.into(), c.into()]))
        })
    }

    pub fn ref_u32_d64_list(&mut self, field: &str) -> Result<usize> {
        self.ref_tuples(field, 16, |r| {
            let a = r.take_ref(RefKind::Cross)?;
            let b = r.take_u32()?;
            let c = r.take_f64()?;
            Ok(Value::Array(vec![a.into(), b.into(), c.into()]))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decoder::DecodeContext;
    use crate::model::{ByteRange, Node, NodeId, NodeRef, TypeId};
    use crate::Error;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn decode<T>(data: &[u8], version: u32, f: impl FnOnce(&mut NodeReader<'_>) -> T) -> (Node, T, usize) {
        let mut node = Node::new(NodeId(3), TypeId(1), ByteRange { offset: 0, len: data.len() });
        let mut ctx = DecodeContext::for_version(version);
        let mut r = NodeReader::new(data, &mut node, &mut ctx);
        let out = f(&mut r);
        let left = r.remaining();
        (node, out, left)
    }

    fn words(ws: &[u32]) -> Vec<u8> {
        ws.iter().flat_map(|w| w.to_le_bytes()).collect()
    }

    #[test]
    fn test_empty_list2_has_no_descriptor() {
        let (node, n, left) = decode(&words(&[0]), 2019, |r| r.list2("lst0", Item::CrossRef).unwrap());
        assert_eq!(n, 0);
        assert_eq!(left, 0);
        assert_eq!(node.get("lst0"), Some(&Value::Array(vec![])));
    }

    #[test]
    fn test_list2_child_refs_become_children() {
        let data = words(&[2, 0, 0, 5, 0]);
        let (node, n, left) = decode(&data, 2019, |r| r.list2("lst0", Item::ChildRef).unwrap());
        assert_eq!((n, left), (2, 0));
        assert_eq!(node.children, vec![NodeRef::new(RefKind::Child, 5, false)]);
        assert_eq!(
            node.get("lst0"),
            Some(&Value::Array(vec![Value::Ref(NodeRef::new(RefKind::Child, 5, false)), Value::Null]))
        );
    }

    #[test]
    fn test_list3_block_size_depends_on_version() {
        let (_, _, left) = decode(&words(&[0, 0]), 2015, |r| r.list3("l", Item::U32).unwrap());
        assert_eq!(left, 0);
        let (_, _, left) = decode(&words(&[0, 0]), 2010, |r| r.list3("l", Item::U32).unwrap());
        assert_eq!(left, 4);
    }

    #[test]
    fn test_list8_always_has_descriptor() {
        let (node, _, left) = decode(&words(&[1, 0x99, 42]), 2019, |r| r.list8("lst0", Item::U32).unwrap());
        assert_eq!(left, 0);
        assert_eq!(node.get("lst0"), Some(&Value::Array(vec![Value::U32(42)])));
    }

    #[test]
    fn test_map6_pairs() {
        let mut data = words(&[1, 0, 0, 7]);
        data.extend_from_slice(&0.5f64.to_le_bytes());
        let (node, _, left) = decode(&data, 2019, |r| r.map6("lst0", Item::CrossRef, Item::F64).unwrap());
        assert_eq!(left, 0);
        assert_eq!(
            node.get("lst0"),
            Some(&Value::Map(vec![(Value::Ref(NodeRef::new(RefKind::Cross, 7, false)), Value::F64(0.5))]))
        );
    }

    #[test]
    fn test_map_with_nested_ref_list() {
        let data = words(&[1, 0, 0, 4, 2, 0, 0, 8, 9]);
        let (node, _, left) =
            decode(&data, 2019, |r| r.map6("lst0", Item::CrossRef, Item::CrossRefList).unwrap());
        assert_eq!(left, 0);
        let Some(Value::Map(entries)) = node.get("lst0") else { panic!("not a map") };
        assert_eq!(entries[0].1.len(), 2);
    }

    #[test]
    fn test_ref_u32_u8_list() {
        let mut data = words(&[1, 3, 10]);
        data.push(1);
        let (node, _, left) = decode(&data, 2019, |r| r.ref_u32_u8_list("a2").unwrap());
        assert_eq!(left, 0);
        assert_eq!(
            node.get("a2"),
            Some(&Value::Array(vec![Value::Array(vec![
                Value::Ref(NodeRef::new(RefKind::Cross, 3, false)),
                Value::U32(10),
                Value::U8(1),
            ])]))
        );
    }

    #[test]
    fn test_ref_u32_array_list_with_child_refs() {
        let data = words(&[1, 6, 1, 2, 3]);
        let (node, _, left) = decode(&data, 2019, |r| r.ref_u32_array_list("ls0", 3, RefKind::Child).unwrap());
        assert_eq!(left, 0);
        assert_eq!(node.children.len(), 1);
    }

    #[test]
    fn test_tuple_list() {
        let mut data = words(&[2]);
        for (a, b) in [(1u32, 0.5f64), (2, 1.5)] {
            data.extend_from_slice(&a.to_le_bytes());
            data.extend_from_slice(&b.to_le_bytes());
        }
        data.push(9);
        let (node, n, left) = decode(&data, 2019, |r| r.tuple_list("lst1", &[Item::U32, Item::F64]).unwrap());
        assert_eq!((n, left), (2, 1));
        assert_eq!(
            node.get("lst1"),
            Some(&Value::Array(vec![
                Value::Array(vec![Value::U32(1), Value::F64(0.5)]),
                Value::Array(vec![Value::U32(2), Value::F64(1.5)]),
            ]))
        );
    }

    #[test]
    fn test_counted_u32_array() {
        let (node, v, left) = decode(&words(&[2, 7, 8]), 2019, |r| r.counted_u32_array("a1").unwrap());
        assert_eq!(v, vec![7, 8]);
        assert_eq!(left, 0);
        assert_eq!(node.get("a1"), Some(&Value::from(vec![7u32, 8])));
    }

    #[test]
    fn test_huge_count_overruns_instead_of_allocating() {
        let data = words(&[u32::MAX, 0, 0, 1]);
        let (_, res, _) = decode(&data, 2019, |r| r.list2("lst0", Item::U32));
        assert!(matches!(res, Err(Error::BufferOverrun { .. })));
    }

    proptest! {
        #[test]
        fn prop_list4_preserves_order(values in proptest::collection::vec(any::<u32>(), 0..24)) {
            let mut ws = vec![values.len() as u32];
            ws.extend_from_slice(&values);
            let (node, n, left) = decode(&words(&ws), 2019, |r| r.list4("lst0", Item::U32).unwrap());
            prop_assert_eq!(n, values.len());
            prop_assert_eq!(left, 0);
            let expected: Vec<Value> = values.iter().map(|&v| Value::U32(v)).collect();
            prop_assert_eq!(node.get("lst0"), Some(&Value::Array(expected)));
        }
    }
}
