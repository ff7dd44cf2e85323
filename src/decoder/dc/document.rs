//! Document-level records: the Document node that declares the document
//! kind, the records that branch on that kind, component definitions,
//! labels and the embedded workbook.

use crate::decoder::{Decoder, Item, NodeReader};
use crate::model::DocumentKind;
use crate::Result;

fn document_part(r: &mut NodeReader<'_>) -> Result<()> {
    r.set_type_name("Document");
    r.context().declare_document_kind(DocumentKind::Part);
    r.header0()?;
    r.child_ref("label")?;
    r.u32("u32_0")?;
    r.skip_block_size();
    r.uuid("uid_0")?;
    r.name16()?;
    r.list2("lst0", Item::ChildRef)?;
    r.u16_array("a0", 6)?;
    r.skip_block_size();
    r.child_ref("ref_elements")?;
    r.child_ref("ref_1")?;
    r.skip_block_size();
    r.child_ref("ref_2")?;
    r.child_ref("ref_workbook")?;
    r.child_ref("cld_1")?;
    r.child_ref("cld_2")?;
    r.skip_block_size();
    r.cross_ref("ref_3")?;
    r.u16_array("a1", 2)?;
    r.child_ref("ref_5")?;
    r.u32("u32_2")?;
    r.child_ref("ref_6")?;
    r.skip_block_size();
    r.cross_ref("ref_7")?;
    r.text16("ref_seg_name")?;
    r.f64("f64_0")?;
    r.cross_ref("ref_8")?;
    Ok(())
}

fn document_assembly(r: &mut NodeReader<'_>) -> Result<()> {
    r.set_type_name("Document");
    r.context().declare_document_kind(DocumentKind::Assembly);
    r.header0()?;
    r.child_ref("label")?;
    r.u32("u32_0")?;
    r.skip_block_size();
    r.uuid("uid_0")?;
    r.name16()?;
    r.list2("lst0", Item::ChildRef)?;
    r.u32_array("a0", 3)?;
    r.skip_block_size();
    r.child_ref("ref_elements")?;
    r.child_ref("ref_1")?;
    r.skip_block_size();
    r.child_ref("ref_2")?;
    r.u32("u32_1")?;
    r.child_ref("ref_3")?;
    r.child_ref("ref_4")?;
    r.skip_block_size();
    r.u32_array("a2", 2)?;
    r.child_ref("ref_5")?;
    r.u32("u32_2")?;
    r.child_ref("ref_6")?;
    r.skip_block_size();
    r.u32("u32_4")?;
    r.child_ref("ref_7")?;
    r.u32("u32_3")?;
    r.list2("lst1", Item::ChildRef)?;
    r.child_ref("ref_8")?;
    r.child_ref("ref_9")?;
    r.child_ref("ref_a")?;
    if r.version() > 2012 {
        r.child_ref("ref_b")?;
    }
    Ok(())
}

fn modeler_txn_mgr(r: &mut NodeReader<'_>) -> Result<()> {
    r.set_type_name("ModelerTxnMgr");
    r.header0()?;
    r.child_ref("ref_1")?;
    r.u32("flags")?;
    r.skip_block_size();
    r.parent_ref()?;
    r.child_ref("ref_2")?;
    r.u32("u32_0")?;
    if r.version() > 2011 && r.require_document_kind("modeler transaction manager")? == DocumentKind::Part {
        r.skip(4);
    }
    r.u32("u32_1")?;
    r.map6("lst0", Item::U32, Item::ChildRef)?;
    r.u32("u32_2")?;
    Ok(())
}

/// Assemblies store only a text here; every other kind stores two lists
/// of indices and a pair of references.
fn kind_dependent_6ca92d02(r: &mut NodeReader<'_>) -> Result<()> {
    r.content_header()?;
    r.skip_block_size();
    r.i32("s32_0")?;
    r.skip_block_size();
    r.skip_block_size();
    r.u8("u8_0")?;
    r.u32("u32_0")?;
    r.u8("u8_1")?;
    if r.require_document_kind("6CA92D02 record")? == DocumentKind::Assembly {
        r.text16("txt")?;
        return Ok(());
    }
    r.skip_block_size();
    r.u32("u32_1")?;
    if r.version() > 2017 {
        r.skip(4);
    } else {
        r.skip_block_size();
    }
    r.u32("u32_2")?;
    r.skip_block_size();
    r.list8("lst0", Item::U32)?;
    r.list8("lst1", Item::U32)?;
    r.u8("u8_2")?;
    r.skip_block_size();
    r.cross_ref("ref_1")?;
    r.cross_ref("ref_2")?;
    r.u32("u32_3")?;
    r.u8("u8_3")?;
    Ok(())
}

/// PartComponentDefinition. Newer releases may store a short text form
/// instead, recognized by a non-zero first header word.
fn part_component_definition(r: &mut NodeReader<'_>) -> Result<()> {
    r.set_type_name("PartComponentDefinition");
    let hdr = r.header0()?;
    if r.version() > 2014 && hdr.m != 0 {
        r.remove("hdr");
        r.rewind();
        r.name8()?;
        r.u16_array("a0", 7)?;
        r.text8("txt_0")?;
        return Ok(());
    }
    r.child_ref("cld_0")?;
    r.u16_array("a0", 2)?;
    r.skip_block_size();
    r.parent_ref()?;
    r.list2("lst0", Item::ChildRef)?;
    r.map6("parameters", Item::Text16, Item::CrossRef)?;
    r.u32_array("a1", 2)?;
    if r.version() > 2012 {
        r.skip(4);
    }
    r.u32_array("a2", 2)?;
    r.map6("lst1", Item::Uuid, Item::U32)?;
    r.map6("lst2", Item::U32, Item::CrossRef)?;
    r.u16_array("a3", 2)?;
    r.list2("lst3", Item::ChildRef)?;
    r.u16_array("a4", 2)?;
    Ok(())
}

/// A label, or, when the first header word is `0x12`, a typed entity
/// whose kind is given by a trailing selector word.
fn label_or_entity(r: &mut NodeReader<'_>) -> Result<()> {
    let hdr = r.header0()?;
    if hdr.m != 0x12 {
        r.set_type_name("Label");
        r.cross_ref("ref_1")?;
        r.u32("flags")?;
        r.skip_block_size();
        r.parent_ref()?;
        r.cross_ref("ref_root")?;
        r.child_ref("ref_2")?;
        r.skip_block_size();
        r.u32("u32_0")?;
        r.list2("lst0", Item::CrossRef)?;
        r.name16()?;
        r.uuid("uid")?;
        return Ok(());
    }

    r.remove("hdr");
    r.rewind();
    r.text8("type")?;
    r.u32_array("a0", 2)?;
    r.map6("lst1", Item::Text8, Item::CrossRef)?;
    r.u32("u32_0")?;
    r.u32("u32_1")?;
    r.u16("u16_0")?;
    r.child_ref("label")?;
    r.u32("flags")?;
    r.parent_ref()?;
    r.u32("index")?;
    let subtype = r.i16("s16_0")?;
    match r.u16("u16_1")? {
        0x0000 => {
            r.set_type_name("Feature");
            r.u32("u32_2")?;
            r.list2("properties", Item::CrossRef)?;
            r.u32("u32_4")?;
        }
        0x0080 => {
            r.u32("u32_2")?;
            if r.version() > 2017 {
                r.skip(4);
            }
            r.u32("u32_4")?;
            if subtype == 0x2000 {
                r.set_type_name("Point3D");
                r.f64("x")?;
                r.f64("y")?;
                r.f64("z")?;
                r.list2("end_point_of", Item::CrossRef)?;
                r.list2("center_of", Item::CrossRef)?;
            } else {
                r.set_type_name("Plane");
                r.u32("u32_5")?;
                r.f64_array("origin", 3)?;
                r.f64_array("a1", 3)?;
                r.f64_array("axis", 3)?;
            }
        }
        0xFFFF => {
            r.set_type_name("Sketch3D");
            r.u32("num_entities")?;
            r.list8("entities", Item::CrossRef)?;
            r.u32_array("a1", 2)?;
            r.f64_array("a2", 6)?;
        }
        _ => {}
    }
    Ok(())
}

/// EmbeddedExcel: a complete `.xls` file behind a four-word header whose
/// second word is its length.
fn embedded_excel(r: &mut NodeReader<'_>) -> Result<()> {
    r.set_type_name("EmbeddedExcel");
    r.header0()?;
    r.u32_array("a0", 2)?;
    r.skip_block_size();
    r.cross_ref("ref_1")?;
    r.u32("u32_0")?;
    r.child_ref("ref_2")?;
    r.u16_array("a1", 3)?;
    r.skip_block_size();
    r.skip_block_size();
    r.u32("u32_1")?;
    let header = r.take_u32_array(4)?;
    let bytes = r.take_bytes(header[1] as usize)?;
    r.save_workbook(bytes)?;
    r.list2("lst0", Item::U32)?;
    if r.version() > 2012 {
        r.skip(16);
    }
    Ok(())
}

pub(super) const DECODERS: &[(u32, Decoder)] = &[
    (0x182D_1C8A, embedded_excel),
    (0x2B48_A42B, label_or_entity),
    (0x4521_21B6, modeler_txn_mgr),
    (0x6CA9_2D02, kind_dependent_6ca92d02),
    (0x9087_4D16, document_part),
    (0x9087_4D46, document_assembly),
    (0x9087_4D63, part_component_definition),
];

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::decoder::DecodeContext;
    use crate::model::{ByteRange, Node, NodeId, TypeId, Value};
    use crate::workbook::CollectingSink;
    use crate::Error;
    use pretty_assertions::assert_eq;

    fn w(buf: &mut Vec<u8>, words: &[u32]) {
        for v in words {
            buf.extend_from_slice(&v.to_le_bytes());
        }
    }

    fn header0(buf: &mut Vec<u8>, m: u32) {
        w(buf, &[m]);
        buf.extend_from_slice(&[0, 0]);
        w(buf, &[0]);
    }

    fn run(ctx: &mut DecodeContext, key: u32, data: &[u8], decoder: Decoder) -> (Node, Result<()>, usize) {
        let mut node = Node::new(NodeId(6), TypeId(key), ByteRange { offset: 0, len: data.len() });
        let mut r = NodeReader::new(data, &mut node, ctx);
        let res = decoder(&mut r);
        let left = r.remaining();
        (node, res, left)
    }

    fn txn_mgr_bytes(part_padding: bool) -> Vec<u8> {
        let mut b = Vec::new();
        header0(&mut b, 0);
        w(&mut b, &[0, 0, 0, 1, 0, 0]);
        if part_padding {
            w(&mut b, &[0]);
        }
        w(&mut b, &[0, 0, 3]);
        b
    }

    #[test]
    fn test_modeler_txn_mgr_requires_document_kind() {
        let data = txn_mgr_bytes(true);
        let mut ctx = DecodeContext::for_version(2019);
        let (_, res, _) = run(&mut ctx, 0x4521_21B6, &data, modeler_txn_mgr);
        assert!(matches!(res, Err(Error::DocumentKind { .. })));

        ctx.declare_document_kind(DocumentKind::Part);
        let (node, res, left) = run(&mut ctx, 0x4521_21B6, &data, modeler_txn_mgr);
        res.unwrap();
        assert_eq!(left, 0);
        assert_eq!(node.get("u32_2"), Some(&Value::U32(3)));

        let data = txn_mgr_bytes(false);
        let mut ctx = DecodeContext::for_version(2019);
        ctx.declare_document_kind(DocumentKind::Assembly);
        let (_, res, left) = run(&mut ctx, 0x4521_21B6, &data, modeler_txn_mgr);
        res.unwrap();
        assert_eq!(left, 0);
    }

    #[test]
    fn test_modeler_txn_mgr_old_release_ignores_kind() {
        // no block sizes and no kind check before 2012
        let mut b = Vec::new();
        w(&mut b, &[0]);
        b.extend_from_slice(&[0, 0]);
        w(&mut b, &[0, 0, 1, 0, 0, 0, 0, 3]);
        let mut ctx = DecodeContext::for_version(2010);
        let (_, res, left) = run(&mut ctx, 0x4521_21B6, &b, modeler_txn_mgr);
        res.unwrap();
        assert_eq!(left, 0);
    }

    #[test]
    fn test_label_branch() {
        let mut b = Vec::new();
        header0(&mut b, 3);
        w(&mut b, &[0, 0, 0, 1, 0, 0, 0, 0, 0]);
        w(&mut b, &[1, 0x41]); // name16 "A"
        b.truncate(b.len() - 2);
        b.extend_from_slice(&[0; 16]);
        let mut ctx = DecodeContext::for_version(2019);
        let (node, res, left) = run(&mut ctx, 0x2B48_A42B, &b, label_or_entity);
        res.unwrap();
        assert_eq!(left, 0);
        assert!(node.is_type("Label"));
        assert_eq!(node.name.as_deref(), Some("A"));
    }

    #[test]
    fn test_entity_branch_sketch3d() {
        let mut b = Vec::new();
        w(&mut b, &[0x12]); // text8 of length 0x12
        b.extend_from_slice(&[b'x'; 0x12]);
        w(&mut b, &[0, 0, 0, 0, 0]); // a0, lst1, u32_0, u32_1
        b.extend_from_slice(&[0, 0]); // u16_0
        w(&mut b, &[0, 0, 1, 0]); // label, flags, parent, index
        b.extend_from_slice(&0i16.to_le_bytes());
        b.extend_from_slice(&0xFFFFu16.to_le_bytes());
        w(&mut b, &[2, 0, 0, 0, 0]); // num_entities, list8 empty, a1
        b.extend_from_slice(&[0; 48]);
        let mut ctx = DecodeContext::for_version(2019);
        let (node, res, left) = run(&mut ctx, 0x2B48_A42B, &b, label_or_entity);
        res.unwrap();
        assert_eq!(left, 0);
        assert!(node.is_type("Sketch3D"));
        assert!(node.get("hdr").is_none());
        assert_eq!(node.get("type"), Some(&Value::from("x".repeat(0x12))));
    }

    #[test]
    fn test_embedded_excel_goes_to_sink() {
        let mut b = Vec::new();
        header0(&mut b, 0);
        w(&mut b, &[0, 0, 0, 0, 0, 0]);
        b.extend_from_slice(&[0; 6]);
        w(&mut b, &[0, 0, 0]);
        w(&mut b, &[0x3000_0002, 4, 0, 0]);
        b.extend_from_slice(b"xls!");
        w(&mut b, &[0]);
        b.extend_from_slice(&[0; 16]);
        let sink = Arc::new(CollectingSink::new());
        let mut ctx = DecodeContext::for_version(2019).with_workbook_sink(sink.clone());
        let (node, res, left) = run(&mut ctx, 0x182D_1C8A, &b, embedded_excel);
        res.unwrap();
        assert_eq!(left, 0);
        assert_eq!(node.get("workbook_size"), Some(&Value::U32(4)));
        assert_eq!(sink.take(), vec![("EmbeddedExcel_0006.xls".to_string(), b"xls!".to_vec())]);
    }

    #[test]
    fn test_zero_records_frame() {
        assert!(crate::decoder::testing::assert_zero_records_frame(DECODERS) > 0);
    }
}
