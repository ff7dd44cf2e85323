//! Records whose layout depends on values read earlier in the same record:
//! counts that size later arrays, selector bytes that pick a branch, and
//! tagged sub-blocks.
//!
//! A sub-block tag that is not understood ends the decoder early. The
//! segment reader then reports the unread rest as a size mismatch.

use crate::decoder::{Decoder, Item, NodeReader};
use crate::model::{RefKind, Value};
use crate::Result;

/// Element `i` of an array read just before, as a count.
fn count_at(a: &[u32], i: usize) -> usize {
    a.get(i).copied().unwrap_or(0) as usize
}

fn unknown_block(r: &NodeReader<'_>, tag: u32) {
    tracing::warn!(node = %r.node().id, key = %r.node().type_id, tag = format_args!("{tag:X}"), "unknown sub-block tag");
}

/// `u32` first, release marker, `u32` second.
fn gated_pair(r: &mut NodeReader<'_>, first: &str, second: &str) -> Result<()> {
    r.skip_block_size();
    r.u32(first)?;
    if r.version() > 2017 {
        r.skip(4);
    } else {
        r.skip_block_size();
    }
    r.u32(second)?;
    r.skip_block_size();
    Ok(())
}

/// The list2-u32 header followed by a list of index pairs.
fn pair_list_header(r: &mut NodeReader<'_>, field: &str) -> Result<()> {
    r.list2_u32_header()?;
    r.skip_block_size();
    r.list2(field, Item::U32Array(2))?;
    Ok(())
}

// ============================================================================
// Sketch geometry
// ============================================================================

fn point2d(r: &mut NodeReader<'_>) -> Result<()> {
    r.sketch2d_entity_header("Point2D")?;
    r.skip_block_size();
    r.f64("x")?;
    r.f64("y")?;
    let mut entities = r.take_list2(Item::CrossRef)?;
    r.set("end_point_of", entities.clone());
    let center_of = r.take_list2(Item::CrossRef)?;
    r.set("center_of", center_of.clone());
    if r.version() > 2012 {
        r.u32("u32_0")?;
        r.list2("lst2", Item::CrossRef)?;
    } else {
        r.set("u32_0", 0u32);
        r.set("lst2", Value::Array(Vec::new()));
    }
    entities.extend(center_of);
    r.set("entities", entities);
    Ok(())
}

fn point3d(r: &mut NodeReader<'_>) -> Result<()> {
    r.sketch3d_entity_header("Point3D")?;
    r.f64("x")?;
    r.f64("y")?;
    r.f64("z")?;
    let mut entities = r.take_list2(Item::CrossRef)?;
    r.set("end_point_of", entities.clone());
    let center_of = r.take_list2(Item::CrossRef)?;
    r.set("center_of", center_of.clone());
    entities.extend(center_of);
    r.set("entities", entities);
    Ok(())
}

fn line3d(r: &mut NodeReader<'_>) -> Result<()> {
    r.sketch3d_entity_header("Line3D")?;
    r.list2("points", Item::CrossRef)?;
    r.skip_block_size();
    // some releases put an extra word before the coordinates
    if r.remaining() == 6 * 8 + 1 + 4 {
        r.skip(4);
    }
    for field in ["x1", "y1", "z1", "x2", "y2", "z2"] {
        r.f64(field)?;
    }
    r.u8("u8_0")?;
    Ok(())
}

fn plane(r: &mut NodeReader<'_>) -> Result<()> {
    r.set_type_name("Plane");
    r.content_header()?;
    r.skip_block_size();
    r.skip_block_size();
    r.skip_block_size();
    r.i32("s32_0")?;
    r.skip_block_size();
    r.u32("u32_0")?;
    r.cross_ref("ref_1")?;
    r.skip_block_size();
    r.skip_block_size();
    if r.version() > 2017 {
        r.skip(4);
    }
    let n = r.u32("u32_1")?;
    if n > 1 {
        r.u32("u32_2")?;
    }
    r.f64_array("origin", 3)?;
    r.f64_array("a1", 3)?;
    r.f64_array("axis", 3)?;
    Ok(())
}

/// SketchSpline
fn spline2d(r: &mut NodeReader<'_>) -> Result<()> {
    r.sketch2d_entity_header("Spline2D")?;
    r.skip_block_size();
    r.list2("points", Item::CrossRef)?;
    if r.version() > 2012 {
        r.list2("lst0", Item::CrossRef)?;
    } else {
        r.set_default("lst0", Value::Array(Vec::new()));
        r.skip_block_size();
    }
    r.cross_ref("ref_1")?;
    r.u16_array("a0", 5)?;
    r.cross_ref("ref_2")?;
    r.u16_array("a1", 5)?;
    r.list2("lst2", Item::U16Pair)?;
    r.u32_array("a2", 3)?;
    r.f64("f64_0")?;
    let a3 = r.u32_array("a3", 3)?;
    r.f64_array("a4", count_at(&a3, 0))?;
    let a5 = r.u32_array("a5", 6)?;
    r.f64_rows("lst3", count_at(&a5, 3), 2)?;
    r.f64("f64_1")?;
    let a6 = r.u32_array("a6", 2)?;
    r.f64_rows("lst4", count_at(&a6, 0), 3)?;
    r.u32("u32_0")?;
    r.u8("u8_0")?;
    r.list2("lst5", Item::CrossRef)?;
    r.list2("lst6", Item::CrossRef)?;
    r.u8("u8_1")?;
    r.f64("f64_2")?;
    r.u32_array("a7", 2)?;
    r.u8("u8_2")?;
    r.u32_array("a8", 2)?;
    r.f64("f64_3")?;
    let a9 = r.u32_array("a9", 5)?;
    r.f64_array("a10", count_at(&a9, 0))?;
    let a11 = r.u32_array("a11", 4)?;
    r.f64_rows("lst7", count_at(&a11, 1), 2)?;
    r.f64("f64_4")?;
    let a12 = r.u32_array("a12", 4)?;
    r.f64_array("a13", count_at(&a12, 1))?;
    r.u32_array("a14", 4)?;
    r.f64_array("a15", 4)?;
    Ok(())
}

/// SketchSpline in its content-only form; the curve data is only present
/// for `u32_0 == 0`.
fn spline2d_content(r: &mut NodeReader<'_>) -> Result<()> {
    r.content_header()?;
    r.skip_block_size();
    r.skip_block_size();
    r.skip_block_size();
    r.i32("s32_0")?;
    r.skip_block_size();
    r.cross_ref("ref_sketch")?;
    r.skip_block_size();
    r.list2("points", Item::CrossRef)?;
    let kind = if r.version() > 2012 {
        r.list2("lst0", Item::CrossRef)?;
        let kind = r.u32("u32_0")?;
        r.u32("s")?;
        kind
    } else {
        r.set_default("lst0", Value::Array(Vec::new()));
        r.skip_block_size();
        let kind = r.u32("u32_0")?;
        r.u8("s")?;
        kind
    };
    r.cross_ref("ref_1")?;
    if kind == 0 {
        r.u32("u32_1")?;
        r.f64("f64_0")?;
        let a0 = r.u32_array("a0", 3)?;
        r.f64_array("a1", count_at(&a0, 1))?;
        r.f64("f64_1")?;
        let a2 = r.u32_array("a2", 4)?;
        r.f64_rows("a3", count_at(&a2, 1), 2)?;
        r.f64("f64_2")?;
        let a4 = r.u32_array("a4", 2)?;
        r.f64_rows("a5", count_at(&a4, 1), 2)?;
        r.f64("f64_3")?;
        r.u32("u32_2")?;
    }
    Ok(())
}

fn bezier3d(r: &mut NodeReader<'_>) -> Result<()> {
    r.set_type_name("Bezier3D");
    r.content_header()?;
    r.skip_block_size();
    r.skip_block_size();
    r.skip_block_size();
    r.i32("s32_0")?;
    r.skip_block_size();
    r.u32("u32_0")?;
    r.cross_ref("ref_sketch")?;
    if r.version() > 2017 {
        r.skip(4);
    } else {
        r.skip_block_size();
    }
    r.list2("points", Item::CrossRef)?;
    r.skip_block_size();
    r.u32_array("a2", 3)?;
    r.f64("f64_0")?;
    let a3 = r.u32_array("a3", 3)?;
    r.f64_array("a4", count_at(&a3, 0))?;
    let a5 = r.u32_array("a5", 6)?;
    r.f64_rows("lst0", count_at(&a5, 3), 3)?;
    r.f64("f64_1")?;
    let a6 = r.u32_array("a6", 2)?;
    r.f64_rows("lst1", count_at(&a6, 0), 3)?;
    r.list2("lst2", Item::CrossRef)?;
    r.u8("u8_0")?;
    r.u32_array("a7", 3)?;
    r.f64("f64_2")?;
    let a8 = r.u32_array("a8", 3)?;
    r.f64_array("a9", count_at(&a8, 0))?;
    let a10 = r.u32_array("a10", 6)?;
    r.f64_rows("lst3", count_at(&a10, 3), 3)?;
    r.f64("f64_3")?;
    let a11 = r.u32_array("a11", 2)?;
    r.f64_rows("lst4", count_at(&a11, 0), 2)?;
    r.u32("u32_1")?;
    r.f64_array("a12", 6)?;
    Ok(())
}

fn sketch2d_placement(r: &mut NodeReader<'_>) -> Result<()> {
    r.set_type_name("Sketch2DPlacement");
    r.content_header()?;
    r.skip_block_size();
    r.i32("s32_0")?;
    r.skip_block_size();
    r.skip_block_size();
    r.cross_ref("ref_transformation1")?;
    r.cross_ref("ref_transformation2")?;
    r.skip_block_size();
    r.cross_ref("ref_direction")?;
    r.u16("u16_0")?;
    r.cross_ref("ref_point")?;
    r.cross_ref("ref_transformation3")?;
    r.skip_block_size();
    r.cross_ref("ref_3")?;
    if r.list2("lst0", Item::U32)? > 0 {
        r.i32("s32_1")?;
    }
    r.u8("u8_0")?;
    Ok(())
}

fn sketch_placement_plane(r: &mut NodeReader<'_>) -> Result<()> {
    r.content_header()?;
    r.skip_block_size();
    r.i32("s32_0")?;
    r.skip_block_size();
    r.skip_block_size();
    r.u32("u32_0")?;
    r.u32("u32_1")?;
    r.skip_block_size();
    r.cross_ref("ref_direction")?;
    r.u16("u16_0")?;
    r.cross_ref("ref_entity")?;
    r.cross_ref("ref_transformation")?;
    r.skip_block_size();
    r.cross_ref("ref_1")?;
    r.list2("lst0", Item::CrossRef)?;
    if r.u8("u8_0")? != 0 {
        r.i32("s32_1")?;
    }
    r.skip_block_size();
    r.cross_ref("ref_plane")?;
    Ok(())
}

/// 3D curve made of tagged segments.
fn curve_segments(r: &mut NodeReader<'_>) -> Result<()> {
    r.header0()?;
    r.u32_array("a0", 2)?;
    r.skip_block_size();
    r.u32("idx")?;
    let count = r.u32("cnt")?;
    let mut segments = Vec::new();
    for _ in 0..count {
        let tag = r.take_u32()?;
        match tag {
            0x17 => segments.push(Value::from(r.take_f64_array(6)?)),
            0x2A => {
                let a1 = r.take_u32_array(3)?;
                let f1 = r.take_f64()?;
                let a2 = r.take_u32_array(5)?;
                let a3 = r.take_f64_array(count_at(&a2, 1))?;
                let a4 = r.take_u32_array(4)?;
                let a5 = r.take_f64_array(count_at(&a4, 1) * 3)?;
                let f2 = r.take_f64()?;
                let a6 = r.take_u32_array(4)?;
                let a7 = r.take_f64_array(count_at(&a6, 1))?;
                segments.push(Value::Array(vec![
                    a1.into(),
                    f1.into(),
                    a2.into(),
                    a3.into(),
                    a4.into(),
                    a5.into(),
                    f2.into(),
                    a6.into(),
                    a7.into(),
                ]));
            }
            _ => {
                unknown_block(r, tag);
                r.set("lst0", segments);
                return Ok(());
            }
        }
    }
    r.set("lst0", segments);
    r.cross_ref("ref_sketch")?;
    r.f64_array("a1", 3)?;
    Ok(())
}

fn curve_d2d440c0(r: &mut NodeReader<'_>) -> Result<()> {
    r.content_header()?;
    r.skip_block_size();
    r.i32("s32_0")?;
    r.skip_block_size();
    r.skip_block_size();
    r.cross_ref("ref_1")?;
    r.cross_ref("ref_2")?;
    r.cross_ref("ref_3")?;
    r.u32("u32_0")?;
    r.u16("u16_0")?;
    let a0 = r.u32_array("a0", 3)?;
    r.f64_array("a1", count_at(&a0, 1))?;
    r.f64("f64_0")?;
    let a2 = r.u32_array("a2", 3)?;
    r.f64_array("a3", count_at(&a2, 1))?;
    r.f64("f64_2")?;
    let a4 = r.u32_array("a4", 4)?;
    r.f64_array("a5", count_at(&a4, 1) * 3)?;
    r.f64("f64_4")?;
    let a6 = r.u32_array("a6", 4)?;
    r.f64_array("a7", count_at(&a6, 1) * 3)?;
    r.f64("f64_6")?;
    r.u8("u8_0")?;
    r.skip_block_size();
    r.cross_ref("ref_4")?;
    Ok(())
}

fn surface_99b938b0(r: &mut NodeReader<'_>) -> Result<()> {
    r.content_header()?;
    r.skip_block_size();
    r.skip_block_size();
    r.i32("s32_0")?;
    r.skip_block_size();
    r.u32_array("a0", 18)?;
    match r.u32("typ")? {
        3 => {
            r.u16_array("a1", 3)?;
        }
        0x23 => {
            r.u16_array("a1", 1)?;
        }
        _ => r.set("a1", Value::Array(Vec::new())),
    }
    r.f64_array("a2", 2)?;
    r.u32_array("a3", 2)?;
    r.f64_array("a4", 6)?;
    r.u16_array("a5", 6)?;
    r.cross_ref("ref_1")?;
    r.u32_array("a6", 6)?;
    Ok(())
}

// ============================================================================
// Feature and parameter content
// ============================================================================

fn text_or_ref_0c48b861(r: &mut NodeReader<'_>) -> Result<()> {
    r.content_header()?;
    r.skip_block_size();
    r.i32("s32_0")?;
    r.skip_block_size();
    r.skip_block_size();
    r.cross_ref("ref_plane")?;
    r.skip_block_size();
    let selector = r.u8("u8_0")?;
    r.u8("u8_1")?;
    r.cross_ref("ref")?;
    if selector == 0 {
        r.text16("txt0")?;
        r.text16("txt1")?;
        r.u16("u16_0")?;
        r.skip_block_size();
        r.u32("u32_0")?;
        r.skip_block_size();
    } else {
        r.u32("u32_0")?;
        if r.version() > 2017 {
            r.skip(4);
        } else {
            r.skip_block_size();
            r.skip_block_size();
        }
    }
    Ok(())
}

fn text_or_ref_1dee2cf3(r: &mut NodeReader<'_>) -> Result<()> {
    r.content_header()?;
    r.skip_block_size();
    r.i32("s32_0")?;
    r.skip_block_size();
    r.skip_block_size();
    let selector = r.u8("u8_0")?;
    r.u8("u8_1")?;
    match selector {
        0 => {
            r.u32("u32_1")?;
            r.text16("txt0")?;
            r.text16("txt1")?;
            r.u16("u16_0")?;
        }
        1 => {
            r.cross_ref("ref_1")?;
        }
        _ => {}
    }
    gated_pair(r, "u32_0", "u32_2")?;
    r.list8("lst0", Item::U32)?;
    r.list8("lst1", Item::U32)?;
    r.u8("u8_2")?;
    r.skip_block_size();
    r.cross_ref("ref_2")?;
    r.cross_ref("ref_3")?;
    r.u32("u32_3")?;
    Ok(())
}

fn text_or_ref_748fbd64(r: &mut NodeReader<'_>) -> Result<()> {
    r.content_header()?;
    r.skip_block_size();
    r.i32("s32_0")?;
    r.skip_block_size();
    r.skip_block_size();
    let selector = r.u8("u8_0")?;
    r.u8("u8_1")?;
    if selector == 0 {
        r.u32("u32_4")?;
        r.text16("txt0")?;
        r.text16("txt1")?;
        r.u16("u16_0")?;
    } else {
        r.cross_ref("ref_1")?;
    }
    gated_pair(r, "u32_0", "u32_1")?;
    r.list8("lst0", Item::U32)?;
    r.list8("lst1", Item::U32)?;
    r.u8("u8_2")?;
    r.skip_block_size();
    r.cross_ref("ref_2")?;
    r.cross_ref("ref_3")?;
    r.u32("u32_3")?;
    Ok(())
}

fn named_or_ref_90874d56(r: &mut NodeReader<'_>) -> Result<()> {
    r.content_header()?;
    r.skip_block_size();
    r.i32("s32_0")?;
    r.skip_block_size();
    r.skip_block_size();
    let selector = r.u8("u8_0")?;
    r.u8("u8_1")?;
    r.cross_ref("ref_1")?;
    if selector == 0 {
        r.name16()?;
        r.text16("txt0")?;
        r.u16("u16_0")?;
    }
    gated_pair(r, "u32_0", "u32_2")?;
    r.list8("lst0", Item::CrossRef)?;
    r.list8("lst1", Item::CrossRef)?;
    r.u8("u8_2")?;
    r.skip_block_size();
    r.u8("u8_3")?;
    r.cross_ref("ref_2")?;
    r.cross_ref("ref_3")?;
    r.cross_ref("ref_4")?;
    r.u32("u32_1")?;
    Ok(())
}

/// Content header, then a `u32` list whose first entry announces a signed
/// value.
fn optional_value(r: &mut NodeReader<'_>, field: &str) -> Result<bool> {
    r.content_header()?;
    r.skip_block_size();
    r.skip_block_size();
    r.skip_block_size();
    let present = r.list2("lst0", Item::U32)? > 0;
    if present {
        r.i32(field)?;
    }
    Ok(present)
}

fn optional_value_375c6982(r: &mut NodeReader<'_>) -> Result<()> {
    optional_value(r, "s32_0")?;
    r.u32("u32_0")?;
    Ok(())
}

fn optional_value_c1887310(r: &mut NodeReader<'_>) -> Result<()> {
    optional_value(r, "s32_0")?;
    Ok(())
}

fn optional_value_509fb5cc(r: &mut NodeReader<'_>) -> Result<()> {
    if !optional_value(r, "value")? {
        r.set("value", 0i32);
    }
    Ok(())
}

fn sketch_block_151280f0(r: &mut NodeReader<'_>) -> Result<()> {
    r.content_header()?;
    r.skip_block_size();
    r.skip_block_size();
    r.skip_block_size();
    r.u32("u32_0")?;
    r.skip_block_size();
    r.u32("u32_1")?;
    r.u32("u32_2")?;
    if r.version() > 2017 {
        r.skip(4);
    } else {
        r.skip_block_size();
        r.skip_block_size();
    }
    r.u8("u8_0")?;
    r.u32("u32_3")?;
    match r.take_u32()? {
        1 => {
            r.u32("u32_4")?;
            r.f64_array("a1", 19)?;
        }
        0 => {
            r.set("u32_4", 0u32);
            r.f64_array("a1", 9)?;
        }
        _ => {}
    }
    Ok(())
}

fn table_72c97d63(r: &mut NodeReader<'_>) -> Result<()> {
    r.content_header()?;
    r.skip_block_size();
    r.i32("s32_0")?;
    r.skip_block_size();
    r.skip_block_size();
    r.skip_block_size();
    r.map6("lst0", Item::CrossRef, Item::CrossRef)?;
    r.cross_ref("ref_1")?;
    r.list2("lst1", Item::CrossRef)?;
    r.u16("u16_0")?;
    r.u8("u8_0")?;
    r.skip_block_size();
    let rows = r.take_u32()?;
    let cols = r.take_u32()? as usize;
    let mut matrix = Vec::new();
    for _ in 0..rows {
        let mut row = Vec::with_capacity(cols.min(r.remaining() / 4));
        for _ in 0..cols {
            row.push(Value::from(r.take_ref(RefKind::Cross)?));
        }
        matrix.push(Value::Array(row));
    }
    r.set("lst2", matrix);
    r.cross_ref("ref_2")?;
    r.cross_ref("ref_3")?;
    r.i32_array("a0", 2)?;
    for field in ["ref_4", "ref_5", "ref_6", "ref_7"] {
        r.cross_ref(field)?;
    }
    r.u16("u16_1")?;
    r.cross_ref("ref_8")?;
    r.cross_ref("ref_9")?;
    r.f64_array("a1", 2)?;
    Ok(())
}

/// Table whose rows use one of two encodings selected by a format word.
fn format_table_75a6689b(r: &mut NodeReader<'_>) -> Result<()> {
    r.content_header()?;
    r.skip_block_size();
    r.i32("s32_0")?;
    r.skip_block_size();
    r.skip_block_size();
    r.skip_block_size();
    r.list2("lst0", Item::CrossRef)?;
    r.list2("lst1", Item::CrossRef)?;
    r.u32("u32_0")?;
    let format = r.take_u32()?;
    let mut rows = Vec::new();
    match format {
        0 => loop {
            let a1 = r.take_u32_array(2)?;
            let a2 = r.take_u16_array(2)?;
            let last = a2[0] != 0;
            rows.push(Value::Array(vec![a1.into(), a2.into()]));
            if last {
                break;
            }
        },
        1 => {
            while r.take_u16()? == 0 {
                let code = r.take_u16()?;
                let a = r.take_u32_array(2)?;
                rows.push(Value::Array(vec![code.into(), a.into()]));
            }
        }
        _ => {
            unknown_block(r, format);
            return Ok(());
        }
    }
    r.set("lst2", rows);
    if format == 1 {
        r.u16("u16_0")?;
    }
    r.u16_array("a0", 5)?;
    r.cross_ref("ref_1")?;
    r.list2("lst", Item::U32)?;
    Ok(())
}

fn non_parametric_base(r: &mut NodeReader<'_>) -> Result<()> {
    r.set_type_name("FxNonParametricBase");
    r.content_header()?;
    r.skip_block_size();
    r.skip_block_size();
    r.u32("u32_0")?;
    r.skip_block_size();
    let unlabeled = r.attr("label").map_or(true, Value::is_null);
    if unlabeled {
        r.list2("lst0", Item::ChildRef)?;
    } else {
        r.list2("lst0", Item::U32)?;
    }
    Ok(())
}

fn partition_transactable(r: &mut NodeReader<'_>) -> Result<()> {
    r.set_type_name("TransactablePartition");
    r.consume_all();
    Ok(())
}

// ============================================================================
// Index tables
// ============================================================================

fn index_table_009a1cc4(r: &mut NodeReader<'_>) -> Result<()> {
    pair_list_header(r, "lst1")?;
    r.u32("u32_1")?;
    r.skip_block_size();
    r.u32("u32_2")?;
    r.tuple_list(
        "lst2",
        &[
            Item::U32,
            Item::U32,
            Item::U16,
            Item::U8,
            Item::F64,
            Item::U16,
            Item::U16,
            Item::U16,
            Item::U8,
            Item::F64,
            Item::U16,
            Item::U16,
        ],
    )?;
    Ok(())
}

fn index_table_167018b8(r: &mut NodeReader<'_>) -> Result<()> {
    pair_list_header(r, "lst1")?;
    r.u32("u32_1")?;
    r.skip_block_size();
    r.u8("u8_0")?;
    r.counted_u32_array("a1")?;
    r.counted_u32_array("a2")?;
    r.u32_array("a3", 2)?;
    Ok(())
}

fn index_table_8e5d4198(r: &mut NodeReader<'_>) -> Result<()> {
    index_table_167018b8(r)?;
    r.u8("u8_1")?;
    Ok(())
}

fn index_table_2e04a208(r: &mut NodeReader<'_>) -> Result<()> {
    pair_list_header(r, "lst1")?;
    r.skip_block_size();
    r.u32_array("a1", 5)?;
    r.counted_u32_array("a2")?;
    r.u32_array("a3", 3)?;
    Ok(())
}

fn index_table_9bb4281c(r: &mut NodeReader<'_>) -> Result<()> {
    r.list2_u32_header()?;
    r.cross_ref("ref_1")?;
    r.u32("u32_1")?;
    r.cross_ref("ref_2")?;
    r.u32("u32_2")?;
    r.u8("u8_2")?;
    r.list2("lst1", Item::U32Array(2))?;
    r.ref_u32_u8_list("a1")?;
    r.skip_block_size();
    r.list2("lst2", Item::U32Array(2))?;
    r.cross_ref("ref_3")?;
    r.u32("u32_3")?;
    r.skip_block_size();
    r.u32_array("a2", 3)?;
    r.counted_u32_array("a3")?;
    r.counted_u32_array("a4")?;
    r.counted_u32_array("a5")?;
    r.u32_array("a6", 3)?;
    Ok(())
}

fn index_table_9c3d6a2f(r: &mut NodeReader<'_>) -> Result<()> {
    pair_list_header(r, "lst0")?;
    r.ref_u32_u8_list("lst2")?;
    r.skip_block_size();
    r.u32_array("a1", 3)?;
    r.u8("u8_0")?;
    let a2 = r.u16_array("a2", 3)?;
    if a2[2] == 1 {
        r.u32_array("a3", 3)?;
    } else {
        r.set("a3", vec![0u32; 3]);
    }
    Ok(())
}

fn index_table_ce4a0723(r: &mut NodeReader<'_>) -> Result<()> {
    pair_list_header(r, "lst0")?;
    r.skip_block_size();
    r.u32("u32_1")?;
    r.u32("u32_2")?;
    r.u8("u8")?;
    r.u32_array("a1", 3)?;
    r.tuple_list("lst1", &[Item::U8, Item::F64, Item::U16, Item::U16])?;
    Ok(())
}

fn index_table_dd64ff02(r: &mut NodeReader<'_>) -> Result<()> {
    pair_list_header(r, "lst0")?;
    r.u32("u32_1")?;
    r.skip_block_size();
    r.counted_u32_array("a1")?;
    Ok(())
}

fn index_table_053c4810(r: &mut NodeReader<'_>) -> Result<()> {
    r.header0()?;
    r.u32_array("a0", 2)?;
    r.u8("u8_0")?;
    r.u32("u32_0")?;
    r.u8("u8_1")?;
    r.u32_array("a1", 3)?;
    if r.u8("u8_2")? == 1 {
        r.u8("u8_3")?;
        r.u16_array("u16_0", 5)?;
        r.u8("u8_4")?;
    }
    r.u8("u8_5")?;
    r.list2("lst0", Item::U32)?;
    r.u8("u8_6")?;
    Ok(())
}

fn index_table_0645c2a5(r: &mut NodeReader<'_>) -> Result<()> {
    r.header0()?;
    r.cross_ref("ref_1")?;
    r.skip_block_size();
    r.list2("lst0", Item::CrossRef)?;
    r.u32_array("a0", 7)?;
    r.skip_block_size();
    r.skip_block_size();
    r.list2("lst1", Item::U32Array(2))?;
    r.ref_u32_list("lst2")?;
    r.skip_block_size();
    let a1 = r.u32_array("a1", 10)?;
    if a1[5] != 0 {
        r.u32("u32_1")?;
    }
    if a1[6] & 0xFF != 0 {
        r.u32("u32_2")?;
    }
    Ok(())
}

fn index_table_b6a36c30(r: &mut NodeReader<'_>) -> Result<()> {
    r.header0()?;
    r.u32_array("a0", 2)?;
    r.skip_block_size();
    r.parent_ref()?;
    r.u32_array("a1", 2)?;
    r.skip_block_size();
    let count = r.take_u32()?;
    let mut entries = Vec::new();
    for _ in 0..count {
        let key = r.take_u32()?;
        let flag = r.take_u8()?;
        let values = r.take_list2(Item::U32)?;
        entries.push(Value::Array(vec![key.into(), flag.into(), Value::Array(values)]));
    }
    r.set("lst0", entries);
    Ok(())
}

fn index_table_ccc5085a(r: &mut NodeReader<'_>) -> Result<()> {
    r.header0()?;
    r.i32("s32_0")?;
    r.skip_block_size();
    r.child_ref("ref_1")?;
    r.ref_u32_array_list("lst0", 2, RefKind::Child)?;
    r.ref_u32a_ref_u32_list("lst1", 2)?;
    r.ref_u32a_ref_u32_list("lst2", 1)?;
    let count = r.take_u32()?;
    let mut entries = Vec::new();
    for _ in 0..count {
        let first = r.take_u32()?;
        let firsts = r.take_list2(Item::U32Array(2))?;
        let second = r.take_u32()?;
        let seconds = r.take_list2(Item::U32Array(2))?;
        entries.push(Value::Array(vec![
            first.into(),
            Value::Array(firsts),
            second.into(),
            Value::Array(seconds),
        ]));
    }
    r.set("lst3", entries);
    Ok(())
}

fn keyed_children_cce92042(r: &mut NodeReader<'_>) -> Result<()> {
    r.header0()?;
    r.child_ref("cld_0")?;
    r.skip_block_size();
    r.u32("cnt1")?;
    let count = r.u32("cnt2")?;
    let mut entries = Vec::new();
    for _ in 0..count {
        let key = r.take_u32()?;
        let child = r.take_ref(RefKind::Child)?;
        entries.push((Value::from(key), Value::from(child)));
    }
    r.set("lst0", Value::Map(entries));
    Ok(())
}

fn sketch_index_a98906a7(r: &mut NodeReader<'_>) -> Result<()> {
    r.header0()?;
    r.u16_array("a0", 4)?;
    r.skip_block_size();
    r.cross_ref("ref_sketch")?;
    r.parent_ref()?;
    r.child_ref("cld_0")?;
    r.skip_block_size();
    r.u8("u8_0")?;
    r.skip_block_size();
    r.counted_u32_array("arr")?;
    Ok(())
}

// ============================================================================
// Child-header records with counted tails
// ============================================================================

fn child_blocks_01e7910c(r: &mut NodeReader<'_>) -> Result<()> {
    r.child_header1()?;
    if r.version() < 2016 {
        r.cross_ref("ref_1")?;
    } else {
        r.list2("lst0", Item::CrossRef)?;
    }
    let a0 = r.u32_array("a0", 2)?;
    let lists = a0[1];
    if lists > 0 {
        r.skip(8);
    }
    for j in 0..lists {
        r.list2(&format!("lst{}", j + 1), Item::F64Triple)?;
    }
    let count = r.take_u32()?;
    let mut blocks = Vec::new();
    for _ in 0..count {
        let tag = r.take_u32()?;
        let len = match tag {
            0x17 => 6,
            0x0B => 12,
            _ => {
                unknown_block(r, tag);
                break;
            }
        };
        blocks.push(Value::Array(vec![tag.into(), r.take_f64_array(len)?.into()]));
    }
    r.set("a1", blocks);
    Ok(())
}

fn child_values_1488b839(r: &mut NodeReader<'_>) -> Result<()> {
    r.child_header1()?;
    r.skip_block_size();
    r.counted_f64_array("a1")?;
    Ok(())
}

fn child_style_454c24a9(r: &mut NodeReader<'_>) -> Result<()> {
    r.child_header1()?;
    r.f32_array("a1", 4)?;
    r.u16("u16_0")?;
    r.f32("f32_0")?;
    r.u16_array("a2", 2)?;
    r.u8("u8_0")?;
    r.u16("u16_1")?;
    let count = r.take_u16()?;
    r.f64_array("a3", count as usize)?;
    r.f32_array("a4", 3)?;
    r.i16_array("a5", 2)?;
    Ok(())
}

fn child_indices_464eca8a(r: &mut NodeReader<'_>) -> Result<()> {
    r.child_header1()?;
    r.skip_block_size();
    r.u8("u8_0")?;
    r.skip_block_size();
    r.counted_u32_array("a0")?;
    Ok(())
}

fn child_weights_828e73a6(r: &mut NodeReader<'_>) -> Result<()> {
    r.child_header1()?;
    r.skip_block_size();
    r.tuple_list("lst1", &[Item::U32, Item::F64])?;
    r.u8("u8_0")?;
    Ok(())
}

fn child_pairs_91637937(r: &mut NodeReader<'_>) -> Result<()> {
    r.child_header1()?;
    r.skip_block_size();
    let rows = r.take_u32()? as usize;
    r.u32_rows("a1", rows, 2)?;
    r.u32_array("a2", 2)?;
    Ok(())
}

fn child_rows_9a94e347(r: &mut NodeReader<'_>) -> Result<()> {
    r.child_header1()?;
    r.skip_block_size();
    r.list2("lst0", Item::ChildRef)?;
    r.u32("u32_0")?;
    let rows = r.take_u32()? as usize;
    r.u32_rows("lst1", rows, 4)?;
    Ok(())
}

fn child_indices_b6482af8(r: &mut NodeReader<'_>) -> Result<()> {
    r.child_header1()?;
    r.skip_block_size();
    r.counted_u32_array("lst0")?;
    Ok(())
}

pub(super) const DECODERS: &[(u32, Decoder)] = &[
    (0x009A_1CC4, index_table_009a1cc4),
    (0x01E7_910C, child_blocks_01e7910c),
    (0x053C_4810, index_table_053c4810),
    (0x0645_C2A5, index_table_0645c2a5),
    (0x0C48_B861, text_or_ref_0c48b861),
    (0x1488_B839, child_values_1488b839),
    (0x1512_80F0, sketch_block_151280f0),
    (0x1670_18B8, index_table_167018b8),
    (0x19F7_63CB, curve_segments),
    (0x1DEE_2CF3, text_or_ref_1dee2cf3),
    (0x2E04_A208, index_table_2e04a208),
    (0x317B_7346, spline2d_content),
    (0x375C_6982, optional_value_375c6982),
    (0x454C_24A9, child_style_454c24a9),
    (0x464E_CA8A, child_indices_464eca8a),
    (0x509F_B5CC, optional_value_509fb5cc),
    (0x72C9_7D63, table_72c97d63),
    (0x73F3_5CD0, sketch_placement_plane),
    (0x748F_BD64, text_or_ref_748fbd64),
    (0x75A6_689B, format_table_75a6689b),
    (0x7C44_ABDE, bezier3d),
    (0x828E_73A6, child_weights_828e73a6),
    (0x8E5D_4198, index_table_8e5d4198),
    (0x8EF0_6C89, line3d),
    (0x9087_4D23, sketch2d_placement),
    (0x9087_4D56, named_or_ref_90874d56),
    (0x9163_7937, child_pairs_91637937),
    (0x99B9_38B0, surface_99b938b0),
    (0x9A94_E347, child_rows_9a94e347),
    (0x9BB4_281C, index_table_9bb4281c),
    (0x9C3D_6A2F, index_table_9c3d6a2f),
    (0xA989_06A7, sketch_index_a98906a7),
    (0xB648_2AF8, child_indices_b6482af8),
    (0xB6A3_6C30, index_table_b6a36c30),
    (0xC188_7310, optional_value_c1887310),
    (0xCA02_411F, non_parametric_base),
    (0xCCC5_085A, index_table_ccc5085a),
    (0xCCE9_2042, keyed_children_cce92042),
    (0xCE4A_0723, index_table_ce4a0723),
    (0xCE52_DF35, point2d),
    (0xCE52_DF3E, point3d),
    (0xCE52_DF42, plane),
    (0xD2D4_40C0, curve_d2d440c0),
    (0xDD64_FF02, index_table_dd64ff02),
    (0xF645_595C, partition_transactable),
    (0xF937_2FD4, spline2d),
];
