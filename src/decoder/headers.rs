//! Field prefixes shared by whole families of records.
//!
//! | Shape | Fields |
//! |-------|--------|
//! | Header0 | `hdr` (u32 m, u16 x), block size |
//! | ContentHeader | Header0, label, flags, parent, index |
//! | Sketch2D/3D entity | ContentHeader, `s32_0`, sketch |
//! | Constraint 2D/3D | ContentHeader, group, weight maps, parameter |
//! | ChildHeader1 | Header0, `a0[2]`, `ref_1`, parent, `ref_2` |
//! | List2U32 | Header0, `u32_0`, `lst0`, `a0[7]` |

use super::{Item, NodeReader};
use crate::model::Value;
use crate::Result;

/// Content flag bit: the entity is shown.
pub const FLAG_VISIBLE: u32 = 0x0000_0400;
/// Content flag bit: its dimensions are shown.
pub const FLAG_DIMENSIONING_VISIBLE: u32 = 0x0080_0000;

/// The two marker words every record starts with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header0 {
    pub m: u32,
    pub x: u16,
}

impl NodeReader<'_> {
    pub fn header0(&mut self) -> Result<Header0> {
        let m = self.take_u32()?;
        let x = self.take_u16()?;
        self.set("hdr", Value::Array(vec![m.into(), x.into()]));
        self.skip_block_size();
        Ok(Header0 { m, x })
    }

    pub fn content_header(&mut self) -> Result<()> {
        self.header0()?;
        self.child_ref("label")?;
        let flags = self.u32("flags")?;
        self.skip_block_size();
        self.parent_ref()?;
        self.u32("index")?;

        let node = &mut *self.node;
        node.visible = flags & FLAG_VISIBLE != 0;
        node.dimensioning_visible = flags & FLAG_DIMENSIONING_VISIBLE != 0;
        node.content_header = true;
        Ok(())
    }

    pub fn sketch2d_entity_header(&mut self, type_name: &str) -> Result<()> {
        self.set_type_name(type_name);
        self.content_header()?;
        self.skip_block_size();
        self.skip_block_size();
        self.skip_block_size();
        self.i32("s32_0")?;
        self.skip_block_size();
        self.cross_ref("ref_sketch")?;
        Ok(())
    }

    pub fn sketch3d_entity_header(&mut self, type_name: &str) -> Result<()> {
        self.set_type_name(type_name);
        self.content_header()?;
        self.skip_block_size();
        self.skip_block_size();
        self.skip_block_size();
        self.i32("s32_0")?;
        self.skip_block_size();
        self.u32("u32_0")?;
        self.cross_ref("ref_sketch")?;
        if self.version() > 2017 {
            self.skip(4);
        } else {
            self.skip_block_size();
        }
        Ok(())
    }

    pub fn constraint_header_2d(&mut self, type_name: &str) -> Result<()> {
        self.set_type_name(type_name);
        self.content_header()?;
        self.skip_block_size();
        self.i32("s32_0")?;
        self.skip_block_size();
        self.cross_ref("ref_group")?;
        if self.version() > 2012 {
            self.map6("lst0", Item::CrossRef, Item::F64)?;
            self.map6("lst1", Item::CrossRef, Item::U32)?;
        } else {
            self.set("lst0", Value::Map(Vec::new()));
            self.set("lst1", Value::Map(Vec::new()));
            self.skip_block_size();
            self.skip_block_size();
        }
        self.cross_ref("ref_parameter")?;
        Ok(())
    }

    pub fn constraint_header_3d(&mut self, type_name: &str) -> Result<()> {
        self.set_type_name(type_name);
        self.content_header()?;
        self.skip_block_size();
        self.i32("s32_0")?;
        self.skip_block_size();
        self.cross_ref("ref_group")?;
        self.skip_block_size();
        self.list2("lst0", Item::CrossRef)?;
        self.u8("u8_0")?;
        self.cross_ref("ref_1")?;
        if self.version() > 2012 {
            self.map6("lst1", Item::CrossRef, Item::U32)?;
            self.map6("lst2", Item::CrossRef, Item::F64)?;
        } else {
            self.set("lst1", Value::Map(Vec::new()));
            self.set("lst2", Value::Map(Vec::new()));
            self.skip_block_size();
        }
        Ok(())
    }

    pub fn child_header1(&mut self) -> Result<()> {
        self.header0()?;
        self.u32_array("a0", 2)?;
        self.skip_block_size();
        self.cross_ref("ref_1")?;
        self.parent_ref()?;
        self.child_ref("ref_2")?;
        Ok(())
    }

    pub fn list2_u32_header(&mut self) -> Result<()> {
        self.header0()?;
        self.u32("u32_0")?;
        self.skip_block_size();
        self.list2("lst0", Item::CrossRef)?;
        self.u32_array("a0", 7)?;
        self.skip_block_size();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::decoder::testing::{self, Bytes};
    use crate::decoder::{DecodeContext, Decoder, NodeReader};
    use crate::model::{ByteRange, Node, NodeId, TypeId, Value};
    use pretty_assertions::assert_eq;

    fn content_bytes(flags: u32, block_sizes: bool) -> Vec<u8> {
        let mut b = Vec::new();
        b.extend_from_slice(&2u32.to_le_bytes()); // hdr.m
        b.extend_from_slice(&0u16.to_le_bytes()); // hdr.x
        if block_sizes {
            b.extend_from_slice(&0u32.to_le_bytes());
        }
        b.extend_from_slice(&[4, 0, 0, 0]); // label -> 4
        b.extend_from_slice(&flags.to_le_bytes());
        if block_sizes {
            b.extend_from_slice(&0u32.to_le_bytes());
        }
        b.extend_from_slice(&[1, 0, 0, 0]); // parent -> 1
        b.extend_from_slice(&7u32.to_le_bytes());
        b
    }

    #[test]
    fn test_content_header_flags() {
        let data = content_bytes(0x0080_0400, true);
        let mut node = Node::new(NodeId(2), TypeId(1), ByteRange { offset: 0, len: data.len() });
        let mut ctx = DecodeContext::for_version(2015);
        let mut r = NodeReader::new(&data, &mut node, &mut ctx);
        r.content_header().unwrap();
        assert_eq!(r.remaining(), 0);
        assert!(node.visible);
        assert!(node.dimensioning_visible);
        assert!(node.content_header);
        assert_eq!(node.parent.map(|p| p.index), Some(1));
        assert_eq!(node.get("index"), Some(&Value::U32(7)));
        assert_eq!(node.children.len(), 1);
    }

    #[test]
    fn test_content_header_pre_2011_has_no_block_sizes() {
        let data = content_bytes(0, false);
        let mut node = Node::new(NodeId(2), TypeId(1), ByteRange { offset: 0, len: data.len() });
        let mut ctx = DecodeContext::for_version(2010);
        let mut r = NodeReader::new(&data, &mut node, &mut ctx);
        r.content_header().unwrap();
        assert_eq!(r.remaining(), 0);
        assert!(!node.visible);
    }

    #[test]
    fn test_constraint_2d_old_layout_has_empty_maps() {
        let mut data = content_bytes(0, false);
        data.extend_from_slice(&3i32.to_le_bytes()); // s32_0
        data.extend_from_slice(&[9, 0, 0, 0]); // group
        data.extend_from_slice(&[0, 0, 0, 0]); // parameter: null
        let mut node = Node::new(NodeId(2), TypeId(1), ByteRange { offset: 0, len: data.len() });
        let mut ctx = DecodeContext::for_version(2010);
        let mut r = NodeReader::new(&data, &mut node, &mut ctx);
        r.constraint_header_2d("Coincident2D").unwrap();
        assert_eq!(r.remaining(), 0);
        assert_eq!(node.get("lst0"), Some(&Value::Map(vec![])));
        assert_eq!(node.get("ref_parameter"), Some(&Value::Null));
        assert_eq!(node.type_name.as_deref(), Some("Coincident2D"));
    }

    fn ref_index(node: &Node, field: &str) -> Option<u32> {
        node.get(field).and_then(Value::as_node_ref).map(|r| r.index)
    }

    fn header_len(version: u32, header: Decoder) -> usize {
        testing::zero_record_len(1, version, header).unwrap()
    }

    #[test]
    fn test_header_lengths_per_release() {
        let sketch2d: Decoder = |r| r.sketch2d_entity_header("Point2D");
        let sketch3d: Decoder = |r| r.sketch3d_entity_header("Point3D");
        let constraint2d: Decoder = |r| r.constraint_header_2d("Fix2D");
        let constraint3d: Decoder = |r| r.constraint_header_3d("Fix3D");
        let child1: Decoder = |r| r.child_header1();
        let list2_u32: Decoder = |r| r.list2_u32_header();

        let cases: &[(Decoder, u32, usize)] = &[
            (sketch2d, 2010, 30),
            (sketch2d, 2019, 54),
            (sketch3d, 2010, 34),
            (sketch3d, 2017, 62),
            (sketch3d, 2018, 62),
            (constraint2d, 2010, 34),
            (constraint2d, 2012, 58),
            (constraint2d, 2013, 58),
            (constraint3d, 2010, 39),
            (constraint3d, 2012, 63),
            (constraint3d, 2013, 67),
            (child1, 2010, 26),
            (child1, 2019, 34),
            (list2_u32, 2010, 42),
            (list2_u32, 2019, 54),
        ];
        for (i, &(header, version, len)) in cases.iter().enumerate() {
            assert_eq!(header_len(version, header), len, "case {i} at {version}");
        }
    }

    fn sketch3d_bytes(version: u32) -> Vec<u8> {
        let b = Bytes::new(version).content(1).block().block().block().i32(3).block().u32(7).node_ref(2);
        // the word after the sketch stops being a block size in 2018
        let b = if version > 2017 { b.u32(0) } else { b.block() };
        b.data
    }

    #[test]
    fn test_sketch3d_entity_header_around_2018() {
        let header: Decoder = |r| r.sketch3d_entity_header("Line3D");
        for version in [2010, 2017, 2018] {
            let data = sketch3d_bytes(version);
            let (node, res, used) = testing::decode(1, version, &data, header);
            res.unwrap();
            assert_eq!(used, data.len(), "{version}");
            assert_eq!(node.get("s32_0"), Some(&Value::I32(3)));
            assert_eq!(node.get("u32_0"), Some(&Value::U32(7)));
            assert_eq!(ref_index(&node, "ref_sketch"), Some(2));
            assert_eq!(node.type_name.as_deref(), Some("Line3D"));
        }
    }

    fn constraint3d_bytes(version: u32) -> Vec<u8> {
        let b = Bytes::new(version)
            .content(1)
            .block()
            .i32(0)
            .block()
            .node_ref(4)
            .block()
            .ref_list(&[6, 7])
            .u8(1)
            .node_ref(0);
        let b = if version > 2012 {
            // one (entity, weight) pair, then an empty map
            b.u32(1).zeros(8).node_ref(6).u32(9).empty_list()
        } else {
            b.block()
        };
        b.data
    }

    #[test]
    fn test_constraint_header_3d_maps_from_2013() {
        let header: Decoder = |r| r.constraint_header_3d("Coincident3D");

        let data = constraint3d_bytes(2013);
        let (node, res, used) = testing::decode(1, 2013, &data, header);
        res.unwrap();
        assert_eq!(used, data.len());
        assert_eq!(ref_index(&node, "ref_group"), Some(4));
        assert_eq!(node.get("lst0").map(Value::len), Some(2));
        assert_eq!(node.get("lst1").map(Value::len), Some(1));
        assert_eq!(node.get("lst2"), Some(&Value::Map(vec![])));

        let data = constraint3d_bytes(2012);
        let (node, res, used) = testing::decode(1, 2012, &data, header);
        res.unwrap();
        assert_eq!(used, data.len());
        assert_eq!(node.get("lst1"), Some(&Value::Map(vec![])));
        assert_eq!(node.get("u8_0"), Some(&Value::U8(1)));
    }

    #[test]
    fn test_child_header1() {
        let header: Decoder = |r| r.child_header1();
        for version in [2010, 2019] {
            let b = Bytes::new(version).header0().u32(5).u32(6).block().node_ref(3).node_ref(1).node_ref(2);
            let (node, res, used) = testing::decode(1, version, &b.data, header);
            res.unwrap();
            assert_eq!(used, b.data.len(), "{version}");
            assert_eq!(node.get("a0"), Some(&Value::from(vec![5u32, 6])));
            assert_eq!(ref_index(&node, "ref_1"), Some(3));
            assert_eq!(node.parent.map(|p| p.index), Some(1));
            assert_eq!(node.children.iter().map(|c| c.index).collect::<Vec<_>>(), vec![2]);
        }
    }

    #[test]
    fn test_list2_u32_header() {
        let header: Decoder = |r| r.list2_u32_header();
        for version in [2010, 2019] {
            let b = Bytes::new(version).header0().u32(9).block().ref_list(&[4]).zeros(28).block();
            let (node, res, used) = testing::decode(1, version, &b.data, header);
            res.unwrap();
            assert_eq!(used, b.data.len(), "{version}");
            assert_eq!(node.get("u32_0"), Some(&Value::U32(9)));
            assert_eq!(node.get("lst0").map(Value::len), Some(1));
            assert_eq!(node.get("a0").map(Value::len), Some(7));
        }
    }
}
