//! Records that start with a content header: labelled, visible model
//! entities such as work geometry, bodies, folders and browser nodes.

use crate::decoder::{Decoder, Item, NodeReader};
use crate::model::Value;
use crate::Result;

fn rec_029dad70(r: &mut NodeReader<'_>) -> Result<()> {
    r.content_header()?;
    r.skip_block_size();
    r.i32("s32_0")?;
    r.skip_block_size();
    r.skip_block_size();
    r.cross_ref("ref_line")?;
    r.skip_block_size();
    r.cross_ref("ref_1")?;
    Ok(())
}

fn content_only(r: &mut NodeReader<'_>) -> Result<()> {
    r.content_header()?;
    Ok(())
}

fn rec_03aa812c(r: &mut NodeReader<'_>) -> Result<()> {
    r.content_header()?;
    r.skip_block_size();
    r.i32("s32_0")?;
    r.skip_block_size();
    r.skip_block_size();
    r.u8("u8_0")?;
    r.u8("u8_1")?;
    r.cross_ref("ref_1")?;
    r.skip_block_size();
    r.u32("u32_0")?;
    if r.version() > 2017 {
        r.skip(4);
    } else {
        r.skip_block_size();
    }
    r.u32("u32_0")?;
    r.skip_block_size();
    r.list8("lst0", Item::U32)?;
    r.list8("lst1", Item::U32)?;
    r.u8("u8_2")?;
    r.skip_block_size();
    if r.version() < 2011 {
        r.cross_ref("ref_3")?;
    }
    r.cross_ref("ref_2")?;
    r.u32("u32_2")?;
    r.ref_u32_list("lst2")?;
    if r.version() > 2010 {
        r.cross_ref("ref_3")?;
    }
    Ok(())
}

fn rec_04d026d2(r: &mut NodeReader<'_>) -> Result<()> {
    r.content_header()?;
    r.skip_block_size();
    r.skip_block_size();
    r.skip_block_size();
    r.list2("lst0", Item::CrossRef)?;
    r.u8("u8_0")?;
    r.u32("u32_0")?;
    Ok(())
}

fn rec_06dcefa9(r: &mut NodeReader<'_>) -> Result<()> {
    r.content_header()?;
    r.skip_block_size();
    r.i32("s32_0")?;
    r.skip_block_size();
    r.skip_block_size();
    r.i32("s32_1")?;
    r.list2("lst0", Item::CrossRef)?;
    r.skip_block_size();
    r.u32("u32_1")?;
    r.list2("lst1", Item::CrossRef)?;
    r.child_ref("ref_1")?;
    r.u16("u16_0")?;
    r.u16("u16_1")?;
    r.u16("u16_2")?;
    r.name16()?;
    r.u16("u16_3")?;
    r.skip_block_size();
    r.skip_block_size();
    Ok(())
}

fn rec_07910c0a(r: &mut NodeReader<'_>) -> Result<()> {
    r.content_header()?;
    r.skip_block_size();
    r.i32("s32_0")?;
    r.cross_ref("ref_1")?;
    r.cross_ref("ref_2")?;
    r.cross_ref("ref_3")?;
    Ok(())
}

fn rec_07910c0b(r: &mut NodeReader<'_>) -> Result<()> {
    r.content_header()?;
    r.skip_block_size();
    r.i32("s32_0")?;
    r.skip_block_size();
    r.skip_block_size();
    r.cross_ref("ref_1")?;
    r.skip_block_size();
    r.cross_ref("ref_2")?;
    r.cross_ref("ref_3")?;
    r.f64_array("a0", 5)?;
    Ok(())
}

fn rec_0830c1b0(r: &mut NodeReader<'_>) -> Result<()> {
    r.content_header()?;
    r.skip_block_size();
    r.i32("s32_0")?;
    r.skip_block_size();
    r.skip_block_size();
    r.cross_ref("ref_1")?;
    r.skip_block_size();
    r.u16("u16_0")?;
    r.cross_ref("ref_2")?;
    r.skip_block_size();
    r.u32("u32_0")?;
    if r.version() > 2017 {
        r.skip(4);
    } else {
        r.skip_block_size();
    }
    r.list2("lst0", Item::CrossRef)?;
    Ok(())
}

fn rec_09429287(r: &mut NodeReader<'_>) -> Result<()> {
    r.content_header()?;
    r.skip_block_size();
    r.i32("s32_0")?;
    r.skip_block_size();
    r.skip_block_size();
    r.cross_ref("ref_1")?;
    r.skip_block_size();
    r.cross_ref("ref_2")?;
    r.cross_ref("ref_3")?;
    r.cross_ref("ref_4")?;
    Ok(())
}

fn rec_09429289(r: &mut NodeReader<'_>) -> Result<()> {
    r.content_header()?;
    r.skip_block_size();
    r.i32("s32_0")?;
    r.skip_block_size();
    r.skip_block_size();
    r.cross_ref("ref_1")?;
    r.skip_block_size();
    r.cross_ref("ref_2")?;
    r.cross_ref("ref_3")?;
    Ok(())
}

fn rec_0b85010c(r: &mut NodeReader<'_>) -> Result<()> {
    r.content_header()?;
    r.skip_block_size();
    r.skip_block_size();
    r.skip_block_size();
    r.u32("u32_0")?;
    r.skip_block_size();
    r.u32("u32_1")?;
    Ok(())
}

fn rec_0c12cbf2(r: &mut NodeReader<'_>) -> Result<()> {
    r.content_header()?;
    r.skip_block_size();
    r.i32("s32_0")?;
    r.skip_block_size();
    r.skip_block_size();
    r.cross_ref("ref_1")?;
    r.cross_ref("ref_2")?;
    r.cross_ref("ref_3")?;
    r.cross_ref("ref_4")?;
    Ok(())
}

fn rec_0c48b860(r: &mut NodeReader<'_>) -> Result<()> {
    r.content_header()?;
    r.skip_block_size();
    r.i32("s32_0")?;
    r.skip_block_size();
    r.skip_block_size();
    r.cross_ref("ref_1")?;
    r.skip_block_size();
    r.u16("u16_0")?;
    r.cross_ref("ref_2")?;
    r.skip_block_size();
    r.u32("u32_0")?;
    if r.version() > 2017 {
        r.skip(4);
    } else {
        r.skip_block_size();
    }
    Ok(())
}

fn rec_0d0f9548(r: &mut NodeReader<'_>) -> Result<()> {
    r.content_header()?;
    r.skip_block_size();
    r.i32("s32_0")?;
    r.skip_block_size();
    r.skip_block_size();
    r.u32("u32_0")?;
    r.skip_block_size();
    r.cross_ref("ref_1")?;
    Ok(())
}

fn rec_0d28d8c0(r: &mut NodeReader<'_>) -> Result<()> {
    r.content_header()?;
    r.skip_block_size();
    r.i32("s32_0")?;
    r.skip_block_size();
    r.skip_block_size();
    r.cross_ref("ref_plane1")?;
    r.skip_block_size();
    r.cross_ref("ref_plane2")?;
    r.cross_ref("ref_parameter")?;
    r.u8("u8_0")?;
    Ok(())
}

fn model_general_note(r: &mut NodeReader<'_>) -> Result<()> {
    r.set_type_name("ModelGeneralNote");
    r.content_header()?;
    Ok(())
}

fn solid_body(r: &mut NodeReader<'_>) -> Result<()> {
    r.set_type_name("SolidBody");
    r.content_header()?;
    r.skip_block_size();
    r.skip_block_size();
    r.skip_block_size();
    r.list2("lst0", Item::CrossRef)?;
    Ok(())
}

fn rec_13f4e5a3(r: &mut NodeReader<'_>) -> Result<()> {
    r.content_header()?;
    r.skip_block_size();
    r.i32("s32_0")?;
    r.skip_block_size();
    r.skip_block_size();
    r.cross_ref("ref_1")?;
    r.cross_ref("ref_2")?;
    r.cross_ref("ref_3")?;
    r.u16("u16_0")?;
    Ok(())
}

fn rec_173e51f4(r: &mut NodeReader<'_>) -> Result<()> {
    r.content_header()?;
    r.skip_block_size();
    r.i32("s32_0")?;
    r.skip_block_size();
    r.skip_block_size();
    r.cross_ref("ref_1")?;
    r.cross_ref("ref_2")?;
    r.skip_block_size();
    r.cross_ref("ref_3")?;
    Ok(())
}

fn rec_17b3e814(r: &mut NodeReader<'_>) -> Result<()> {
    r.content_header()?;
    r.skip_block_size();
    r.i32("s32_0")?;
    r.skip_block_size();
    r.skip_block_size();
    r.cross_ref("ref_parameter")?;
    r.cross_ref("ref_r_dx_var")?;
    Ok(())
}

fn revolution_transformation(r: &mut NodeReader<'_>) -> Result<()> {
    r.set_type_name("RevolutionTransformation");
    r.content_header()?;
    r.skip_block_size();
    r.i32("s32_0")?;
    r.skip_block_size();
    r.skip_block_size();
    r.cross_ref("ref2_d")?;
    r.cross_ref("ref_transformation")?;
    r.cross_ref("ref3_d")?;
    r.u16("u16_0")?;
    Ok(())
}

fn rec_1a1c8265(r: &mut NodeReader<'_>) -> Result<()> {
    r.content_header()?;
    r.u32_array("a0", 2)?;
    Ok(())
}

fn rec_1a26ff54(r: &mut NodeReader<'_>) -> Result<()> {
    r.content_header()?;
    r.skip_block_size();
    r.i32("s32_0")?;
    r.skip_block_size();
    r.skip_block_size();
    r.map6("lst0", Item::CrossRef, Item::CrossRefList)?;
    r.u32_array("a0", 2)?;
    r.cross_ref("ref_fx")?;
    Ok(())
}

fn rec_1b48ad11(r: &mut NodeReader<'_>) -> Result<()> {
    r.content_header()?;
    r.skip_block_size();
    r.i32("s32_0")?;
    r.skip_block_size();
    r.skip_block_size();
    r.list2("lst0", Item::CrossRef)?;
    r.cross_ref("ref_1")?;
    r.skip_block_size();
    Ok(())
}

fn rec_1ef28758(r: &mut NodeReader<'_>) -> Result<()> {
    r.content_header()?;
    r.skip_block_size();
    r.i32("s32_0")?;
    r.skip_block_size();
    r.skip_block_size();
    r.cross_ref("ref_1")?;
    r.cross_ref("ref_2")?;
    r.cross_ref("ref_3")?;
    r.cross_ref("ref_4")?;
    r.skip_block_size();
    r.cross_ref("ref_3")?;
    r.cross_ref("ref_4")?;
    r.u32("u32_0")?;
    Ok(())
}

fn string(r: &mut NodeReader<'_>) -> Result<()> {
    r.set_type_name("String");
    r.content_header()?;
    r.skip_block_size();
    r.skip_block_size();
    r.f64("x1")?;
    r.f64("y1")?;
    r.f64("z1")?;
    r.u16_array("a1", 18)?;
    r.u8("u8_0")?;
    r.skip_block_size();
    if r.version() > 2015 {
        r.u32("u32_0")?;
        r.f64("f64_0")?;
    }
    r.name16()?;
    r.u32_array("a2", 4)?;
    r.list2("lst0", Item::CrossRef)?;
    r.list2("lst1", Item::ChildRef)?;
    r.f64("x2")?;
    r.f64("y2")?;
    r.f64("z2")?;
    r.f64("x3")?;
    r.f64("y3")?;
    r.f64("z3")?;
    r.u16_array("a3", 3)?;
    r.u8("u8_1")?;
    r.parent_ref()?;
    r.list2("lst2", Item::CrossRef)?;
    r.text16("txt_0")?;
    r.skip_block_size();
    r.u32_array("a0", 2)?;
    if r.version() > 2016 {
        r.skip(17);
    }
    Ok(())
}

fn rec_20976662(r: &mut NodeReader<'_>) -> Result<()> {
    r.content_header()?;
    r.skip_block_size();
    r.skip_block_size();
    r.cross_ref("ref_body")?;
    r.cross_ref("ref_1")?;
    Ok(())
}

fn rec_2148c03c(r: &mut NodeReader<'_>) -> Result<()> {
    r.content_header()?;
    r.cross_ref("ref_1")?;
    Ok(())
}

/// DerivedPartComponent
fn derived_part(r: &mut NodeReader<'_>) -> Result<()> {
    r.set_type_name("DerivedPart");
    r.content_header()?;
    r.skip_block_size();
    r.i32("s32_0")?;
    r.skip_block_size();
    r.skip_block_size();
    r.list2("lst0", Item::CrossRef)?;
    r.u32("u32_0")?;
    r.skip_block_size();
    r.cross_ref("ref_1")?;
    r.u16("u16_0")?;
    r.u16("u16_1")?;
    r.name16()?;
    r.f64("f64_0")?;
    r.u8_array("a0", 5)?;
    if r.version() > 2011 {
        r.u32("u32_1")?;
        r.set_default("u8_0", 0u8);
    }
    if r.version() < 2013 {
        r.skip_block_size();
        r.set_default("u32_1", 0u32);
        r.u8("u8_0")?;
    }
    Ok(())
}

fn desel_table(r: &mut NodeReader<'_>) -> Result<()> {
    r.set_type_name("DeselTable");
    r.content_header()?;
    r.skip_block_size();
    r.cross_ref("ref_1")?;
    r.i32("s32_0")?;
    r.uuid("uid")?;
    r.name16()?;
    r.cross_ref("ref_parent")?;
    r.list2("lst0", Item::CrossRef)?;
    r.u8("selected")?;
    Ok(())
}

fn rec_27e9a56f(r: &mut NodeReader<'_>) -> Result<()> {
    r.content_header()?;
    r.skip_block_size();
    r.i32("s32_0")?;
    r.skip_block_size();
    r.skip_block_size();
    r.u16("u16_0")?;
    r.cross_ref("ref_body")?;
    r.skip_block_size();
    r.u32("u32_0")?;
    if r.version() > 2017 {
        r.skip(4);
    } else {
        r.skip_block_size();
    }
    r.u32("u32_1")?;
    r.skip_block_size();
    r.list8("lst0", Item::U32)?;
    r.list8("lst1", Item::U32)?;
    r.u8("u8_0")?;
    r.skip_block_size();
    r.cross_ref("ref_direction")?;
    r.cross_ref("ref_1")?;
    r.u32("u32_1")?;
    r.cross_ref("ref_2")?;
    r.u32("u32_2")?;
    r.cross_ref("ref_3")?;
    r.u32("u32_3")?;
    r.u16("u16_1")?;
    Ok(())
}

fn rec_2801d6c6(r: &mut NodeReader<'_>) -> Result<()> {
    r.content_header()?;
    r.skip_block_size();
    r.skip_block_size();
    r.skip_block_size();
    r.cross_ref("ref_1")?;
    r.list2("lst0", Item::CrossRef)?;
    Ok(())
}

fn browser_folder(r: &mut NodeReader<'_>) -> Result<()> {
    r.set_type_name("BrowserFolder");
    r.content_header()?;
    r.skip_block_size();
    Ok(())
}

fn rec_2b48ce72(r: &mut NodeReader<'_>) -> Result<()> {
    r.content_header()?;
    r.skip_block_size();
    r.i32("s32_0")?;
    r.skip_block_size();
    r.skip_block_size();
    r.cross_ref("ref_1")?;
    r.skip_block_size();
    Ok(())
}

fn rec_2ce86835(r: &mut NodeReader<'_>) -> Result<()> {
    r.content_header()?;
    r.u32("u32_0")?;
    r.skip_block_size();
    r.child_ref("ref_1")?;
    r.u16("u16_0")?;
    r.skip_block_size();
    r.cross_ref("ref_line1")?;
    r.cross_ref("ref_line2")?;
    r.u32("u32_1")?;
    r.f64("x")?;
    r.f64("y")?;
    r.skip_block_size();
    if r.version() > 2010 {
        r.f64_array("p0", 3)?;
        r.f64_array("p1", 3)?;
        r.f64_array("p2", 3)?;
        r.f64_array("p3", 3)?;
        r.f64_array("p4", 3)?;
    }
    Ok(())
}

fn rec_2d06cad3(r: &mut NodeReader<'_>) -> Result<()> {
    r.content_header()?;
    r.skip_block_size();
    r.u32("u32_0")?;
    r.skip_block_size();
    r.skip_block_size();
    r.cross_ref("ref_sketch")?;
    r.ref_xref_list("lst0")?;
    r.list2("lst1", Item::CrossRef)?;
    r.list2("lst2", Item::CrossRef)?;
    Ok(())
}

fn reference_edge_loop_id(r: &mut NodeReader<'_>) -> Result<()> {
    r.set_type_name("ReferenceEdgeLoopId");
    r.content_header()?;
    r.skip_block_size();
    r.u32("u32_0")?;
    r.skip_block_size();
    r.skip_block_size();
    r.cross_ref("ref_1")?;
    r.child_ref("ref_2")?;
    r.map6("lst0", Item::U32, Item::CrossRef)?;
    r.map6("lst1", Item::U32, Item::CrossRef)?;
    Ok(())
}

fn rec_2e692e29(r: &mut NodeReader<'_>) -> Result<()> {
    r.content_header()?;
    r.skip_block_size();
    r.i32("s32_0")?;
    r.skip_block_size();
    r.skip_block_size();
    r.u32("u32_0")?;
    r.cross_ref("ref_body")?;
    r.cross_ref("ref_2")?;
    Ok(())
}

fn rec_31f02eed(r: &mut NodeReader<'_>) -> Result<()> {
    r.content_header()?;
    r.skip_block_size();
    r.skip_block_size();
    r.skip_block_size();
    r.u32("u32_0")?;
    r.skip_block_size();
    Ok(())
}

fn rec_339807ac(r: &mut NodeReader<'_>) -> Result<()> {
    r.content_header()?;
    r.skip_block_size();
    r.i32("s32_0")?;
    r.skip_block_size();
    r.skip_block_size();
    r.skip_block_size();
    r.list2("lst0", Item::ChildRef)?;
    r.skip_block_size();
    r.cross_ref("ref_1")?;
    r.u32("u32_0")?;
    Ok(())
}

fn rec_38c2654e(r: &mut NodeReader<'_>) -> Result<()> {
    r.content_header()?;
    r.skip_block_size();
    r.i32("s32_0")?;
    r.skip_block_size();
    r.skip_block_size();
    r.u32("u32_0")?;
    r.uuid("uid")?;
    r.skip_block_size();
    Ok(())
}

fn rec_38c74735(r: &mut NodeReader<'_>) -> Result<()> {
    r.content_header()?;
    r.skip_block_size();
    r.i32("s32_0")?;
    r.skip_block_size();
    r.skip_block_size();
    r.cross_ref("ref_sketch")?;
    r.u8("u8_0")?;
    r.cross_ref("ref_direction")?;
    Ok(())
}

fn rec_3a083c7b(r: &mut NodeReader<'_>) -> Result<()> {
    r.content_header()?;
    r.skip_block_size();
    r.i32("s32_0")?;
    r.skip_block_size();
    r.skip_block_size();
    r.cross_ref("ref_transformation")?;
    r.cross_ref("ref_1")?;
    r.cross_ref("ref_2")?;
    r.cross_ref("ref_3")?;
    r.skip_block_size();
    r.cross_ref("ref_4")?;
    r.cross_ref("ref_5")?;
    r.cross_ref("ref_6")?;
    r.cross_ref("ref_7")?;
    r.cross_ref("ref_8")?;
    r.i32("s32_1")?;
    r.i32("s32_2")?;
    r.f64_array("a0", 3)?;
    r.f64_array("a1", 3)?;
    if r.version() > 2011 {
        r.cross_ref("ref_1")?;
        r.cross_ref("ref_2")?;
        r.u8("u8_0")?;
    }
    Ok(())
}

fn rec_3b13313c(r: &mut NodeReader<'_>) -> Result<()> {
    r.content_header()?;
    r.skip_block_size();
    r.i32("s32_0")?;
    r.cross_ref("ref_1")?;
    r.cross_ref("ref_2")?;
    r.cross_ref("ref_3")?;
    r.cross_ref("ref_4")?;
    r.cross_ref("ref_5")?;
    Ok(())
}

fn body(r: &mut NodeReader<'_>) -> Result<()> {
    r.set_type_name("Body");
    r.content_header()?;
    r.skip_block_size();
    r.skip_block_size();
    r.u16("u16_0")?;
    Ok(())
}

fn rec_3d8924fd(r: &mut NodeReader<'_>) -> Result<()> {
    r.content_header()?;
    r.skip_block_size();
    r.skip_block_size();
    r.u8("u8_0")?;
    Ok(())
}

fn rec_3e710428(r: &mut NodeReader<'_>) -> Result<()> {
    r.content_header()?;
    r.skip_block_size();
    r.i32("s32_0")?;
    r.skip_block_size();
    r.skip_block_size();
    r.cross_ref("ref_1")?;
    r.skip_block_size();
    r.cross_ref("ref_2")?;
    Ok(())
}

fn rec_3f36349f(r: &mut NodeReader<'_>) -> Result<()> {
    r.content_header()?;
    r.skip_block_size();
    r.i32("s32_0")?;
    r.skip_block_size();
    r.skip_block_size();
    r.cross_ref("ref_parameter")?;
    r.cross_ref("ref_1")?;
    r.cross_ref("ref_transformation")?;
    Ok(())
}

fn rec_3f3634a0(r: &mut NodeReader<'_>) -> Result<()> {
    r.content_header()?;
    r.skip_block_size();
    r.i32("s32_0")?;
    r.skip_block_size();
    r.skip_block_size();
    r.cross_ref("ref_1")?;
    r.cross_ref("ref_2")?;
    r.cross_ref("ref_3")?;
    r.cross_ref("ref_4")?;
    r.list4("lst0", Item::CrossRef)?;
    if r.version() < 2013 {
        r.u32("u32_0")?;
        r.skip_block_size();
        r.u8("u8_0")?;
        r.map6("lst0", Item::U32, Item::U32)?;
        r.map6("lst1", Item::U32, Item::U32)?;
        r.map6("lst2", Item::U32, Item::U32)?;
        r.map6("lst3", Item::U32, Item::U32)?;
        r.map6("lst4", Item::U32, Item::U32)?;
        r.map6("lst5", Item::U32, Item::U32)?;
        r.u32("u32_1")?;
        r.map6("lst6", Item::U32, Item::U32)?;
        r.u8("u8_1")?;
        r.map6("lst7", Item::U32, Item::U32)?;
        r.map6("lst8", Item::U32, Item::U32)?;
        r.cross_ref("ref_5")?;
        r.map6("lst9", Item::U32, Item::U32)?;
        r.map6("lst10", Item::U32, Item::CrossRef)?;
        r.u8("u8_2")?;
        r.u16("u16_0")?;
        r.map6("lst11", Item::U32, Item::U32)?;
    } else {
        r.child_ref("ref_5")?;
        if r.version() > 2016 {
            r.skip(4);
        }
    }
    Ok(())
}

fn rec_402a8f9f(r: &mut NodeReader<'_>) -> Result<()> {
    r.content_header()?;
    if r.version() > 2010 {
        r.skip(8);
    } else {
        r.skip(12);
    }
    r.u8("u8_0")?;
    r.skip_block_size();
    Ok(())
}

fn rec_4116da9e(r: &mut NodeReader<'_>) -> Result<()> {
    r.content_header()?;
    r.skip_block_size();
    r.skip_block_size();
    r.skip_block_size();
    r.u32("u32_0")?;
    r.skip_block_size();
    r.u32_array("a0", 2)?;
    if r.version() > 2017 {
        r.skip(4);
    } else {
        r.skip_block_size();
        r.skip_block_size();
    }
    r.u32_array("a1", 2)?;
    r.f64_array("a1", 10)?;
    r.f64("f64_0")?;
    r.u32_array("a5", 6)?;
    r.f64_array("a6", 2)?;
    Ok(())
}

fn rec_424eb7d7(r: &mut NodeReader<'_>) -> Result<()> {
    r.content_header()?;
    r.skip_block_size();
    r.i32("s32_0")?;
    r.skip_block_size();
    r.skip_block_size();
    r.skip_block_size();
    r.list2("lst0", Item::ChildRef)?;
    r.list2("lst1", Item::CrossRef)?;
    r.list2("lst2", Item::CrossRef)?;
    r.u32("u32_0")?;
    r.u32("u32_1")?;
    if r.version() > 2011 {
        r.cross_ref("ref_sketch")?;
    } else {
        r.skip_block_size();
    }
    r.cross_ref("ref")?;
    Ok(())
}

fn rec_46d500aa(r: &mut NodeReader<'_>) -> Result<()> {
    r.content_header()?;
    r.skip_block_size();
    r.skip_block_size();
    r.skip_block_size();
    r.u16("u16_0")?;
    r.u16("u16_1")?;
    r.skip_block_size();
    r.u32("u32_0")?;
    Ok(())
}

fn fillet_constant_radius_edge_style(r: &mut NodeReader<'_>) -> Result<()> {
    r.set_type_name("FilletConstantRadiusEdgeStyle");
    r.content_header()?;
    r.skip_block_size();
    r.skip_block_size();
    r.skip_block_size();
    r.u32("u32_0")?;
    r.skip_block_size();
    r.u32("style")?;
    Ok(())
}

fn rec_4ac78a71(r: &mut NodeReader<'_>) -> Result<()> {
    r.content_header()?;
    r.skip_block_size();
    r.i32("s32_0")?;
    r.skip_block_size();
    r.skip_block_size();
    r.cross_ref("ref_plane")?;
    r.u16("u16_0")?;
    r.cross_ref("ref_direction")?;
    r.skip_block_size();
    r.u32("u32_0")?;
    if r.version() > 2017 {
        r.skip(4);
    } else {
        r.skip_block_size();
    }
    r.u16("u16_0")?;
    r.cross_ref("ref_transformation")?;
    r.skip_block_size();
    r.u32("u32_1")?;
    if r.version() > 2017 {
        r.skip(4);
    } else {
        r.skip_block_size();
    }
    Ok(())
}

fn user_coordinate_system(r: &mut NodeReader<'_>) -> Result<()> {
    r.set_type_name("UserCoordinateSystem");
    r.content_header()?;
    r.cross_ref("ref_1")?;
    r.cross_ref("ref_2")?;
    r.cross_ref("ref_3")?;
    r.cross_ref("ref_4")?;
    r.cross_ref("ref_5")?;
    r.cross_ref("ref_6")?;
    r.cross_ref("ref_7")?;
    r.cross_ref("ref_8")?;
    r.cross_ref("ref_9")?;
    Ok(())
}

fn rec_4b3150e8(r: &mut NodeReader<'_>) -> Result<()> {
    r.content_header()?;
    r.skip_block_size();
    r.skip_block_size();
    r.child_ref("ref_wrapper")?;
    r.skip_block_size();
    r.u8("u8_0")?;
    r.skip_block_size();
    r.skip_block_size();
    r.cross_ref("ref_1")?;
    r.cross_ref("ref_length")?;
    r.cross_ref("ref_angle")?;
    r.u32("u32_0")?;
    r.map7("lst0", Item::U32, Item::ChildRef)?;
    r.u32("u32_1")?;
    r.cross_ref("ref_parameter")?;
    Ok(())
}

fn rec_4e86f047(r: &mut NodeReader<'_>) -> Result<()> {
    r.content_header()?;
    r.i32("s32_0")?;
    r.cross_ref("ref_1")?;
    r.u8("u8_0")?;
    r.list2("lst0", Item::ChildRef)?;
    Ok(())
}

fn rec_4fd0dc2a(r: &mut NodeReader<'_>) -> Result<()> {
    r.content_header()?;
    r.skip_block_size();
    r.i32("s32_0")?;
    r.skip_block_size();
    r.skip_block_size();
    r.cross_ref("ref_1")?;
    r.cross_ref("ref_2")?;
    Ok(())
}

fn rec_502678e7(r: &mut NodeReader<'_>) -> Result<()> {
    r.content_header()?;
    r.f64_array("a0", 4)?;
    r.u32("u32_0")?;
    r.u8_array("a1", 7)?;
    r.f64_array("a2", 6)?;
    r.u32("u32_1")?;
    r.child_ref("ref_1")?;
    r.list2("lst0", Item::ChildRef)?;
    r.f64_array("a2", 4)?;
    r.u32("u32_2")?;
    r.u8("u8_0")?;
    Ok(())
}

fn rec_528a064a(r: &mut NodeReader<'_>) -> Result<()> {
    r.content_header()?;
    r.skip_block_size();
    r.skip_block_size();
    r.skip_block_size();
    r.u32("u32_0")?;
    r.skip_block_size();
    r.u32_array("a0", 2)?;
    if r.version() > 2017 {
        r.skip(4);
    } else {
        r.skip_block_size();
        r.skip_block_size();
    }
    r.u32_array("a1", 2)?;
    r.f64_array("a2", 3)?;
    r.f64("f64_0")?;
    r.u32_array("a3", 6)?;
    r.f64_array("a4", 6)?;
    r.f64("f64_1")?;
    r.u32_array("a5", 6)?;
    r.f64_array("a6", 2)?;
    Ok(())
}

fn rec_55279ee0(r: &mut NodeReader<'_>) -> Result<()> {
    r.content_header()?;
    r.skip_block_size();
    r.i32("s32_0")?;
    r.skip_block_size();
    r.skip_block_size();
    r.cross_ref("ref_1")?;
    r.cross_ref("ref_2")?;
    r.u32("u32_0")?;
    Ok(())
}

fn rec_578432a6(r: &mut NodeReader<'_>) -> Result<()> {
    r.content_header()?;
    r.skip_block_size();
    r.i32("s32_0")?;
    r.skip_block_size();
    r.skip_block_size();
    r.cross_ref("ref_fx")?;
    r.u16("u16_0")?;
    r.name16()?;
    Ok(())
}

fn rec_5838b762(r: &mut NodeReader<'_>) -> Result<()> {
    r.content_header()?;
    r.skip_block_size();
    r.i32("s32_0")?;
    r.skip_block_size();
    r.skip_block_size();
    r.cross_ref("ref_1")?;
    r.skip_block_size();
    r.cross_ref("ref_2")?;
    r.cross_ref("ref_3")?;
    r.u32("u32_0")?;
    r.u8("u8_0")?;
    r.f64_array("a0", 9)?;
    Ok(())
}

fn rec_5838b763(r: &mut NodeReader<'_>) -> Result<()> {
    r.content_header()?;
    r.skip_block_size();
    r.i32("s32_0")?;
    r.skip_block_size();
    r.skip_block_size();
    r.cross_ref("ref_plane")?;
    r.skip_block_size();
    r.cross_ref("ref_enty1")?;
    r.cross_ref("ref_enty2")?;
    Ok(())
}

fn rec_5b708411(r: &mut NodeReader<'_>) -> Result<()> {
    r.content_header()?;
    r.skip_block_size();
    r.i32("s32_0")?;
    r.u32("u32_0")?;
    r.text16("txt0")?;
    r.child_ref("ref_1")?;
    r.child_ref("ref_2")?;
    r.child_ref("ref_3")?;
    r.transformation()?;
    r.u32("u32_1")?;
    Ok(())
}

fn rec_5b8ec461(r: &mut NodeReader<'_>) -> Result<()> {
    r.content_header()?;
    r.skip_block_size();
    r.i32("s32_0")?;
    r.skip_block_size();
    r.skip_block_size();
    r.cross_ref("ref_1")?;
    r.cross_ref("ref_2")?;
    r.cross_ref("ref_3")?;
    r.cross_ref("ref_4")?;
    r.cross_ref("ref_5")?;
    r.cross_ref("ref_6")?;
    r.cross_ref("ref_7")?;
    r.cross_ref("ref_8")?;
    Ok(())
}

fn rec_5d807360(r: &mut NodeReader<'_>) -> Result<()> {
    r.content_header()?;
    r.skip_block_size();
    r.i32("s32_0")?;
    r.skip_block_size();
    r.skip_block_size();
    r.u8("u8_0")?;
    r.u8("u8_1")?;
    r.cross_ref("ref_1")?;
    r.skip_block_size();
    r.u32("u32_0")?;
    if r.version() > 2017 {
        r.skip(4);
    } else {
        r.skip_block_size();
    }
    r.cross_ref("ref_direction")?;
    Ok(())
}

fn rec_5d8c859d(r: &mut NodeReader<'_>) -> Result<()> {
    r.content_header()?;
    r.skip_block_size();
    r.i32("s32_0")?;
    r.skip_block_size();
    r.cross_ref("ref_group")?;
    if r.version() > 2012 {
        r.map6("lst0", Item::CrossRef, Item::F64)?;
        r.map6("lst1", Item::CrossRef, Item::U32)?;
    } else {
        r.set_default("lst0", Value::Array(Vec::new()));
        r.set_default("lst1", Value::Array(Vec::new()));
    }
    r.list2("lst0", Item::CrossRef)?;
    Ok(())
}

fn rec_603428ae(r: &mut NodeReader<'_>) -> Result<()> {
    r.content_header()?;
    r.skip_block_size();
    r.i32("s32_0")?;
    r.skip_block_size();
    r.skip_block_size();
    r.skip_block_size();
    r.list2("lst0", Item::ChildRef)?;
    r.u32("u32_0")?;
    r.skip_block_size();
    r.cross_ref("ref_1")?;
    Ok(())
}

fn rec_60406697(r: &mut NodeReader<'_>) -> Result<()> {
    r.content_header()?;
    r.skip_block_size();
    r.i32("s32_0")?;
    r.skip_block_size();
    r.skip_block_size();
    r.skip_block_size();
    r.cross_ref("ref_1")?;
    r.cross_ref("ref_2")?;
    r.cross_ref("ref_3")?;
    Ok(())
}

fn rec_618c9e00(r: &mut NodeReader<'_>) -> Result<()> {
    r.content_header()?;
    r.skip_block_size();
    r.i32("s32_0")?;
    r.skip_block_size();
    r.skip_block_size();
    r.u8("u8_0")?;
    r.u8("u8_1")?;
    r.cross_ref("ref_1")?;
    r.skip_block_size();
    r.u32("u32_0")?;
    if r.version() > 2017 {
        r.skip(4);
    } else {
        r.skip_block_size();
    }
    r.cross_ref("ref_2")?;
    r.cross_ref("ref_3")?;
    Ok(())
}

fn rec_64de16f3(r: &mut NodeReader<'_>) -> Result<()> {
    r.content_header()?;
    r.skip_block_size();
    r.i32("s32_0")?;
    r.skip_block_size();
    r.skip_block_size();
    r.skip_block_size();
    r.cross_ref("ref_1")?;
    r.cross_ref("ref_2")?;
    r.cross_ref("ref_3")?;
    r.u16("u16_0")?;
    Ok(())
}

fn rec_6a3eea31(r: &mut NodeReader<'_>) -> Result<()> {
    r.content_header()?;
    r.skip_block_size();
    r.i32("s32_0")?;
    r.skip_block_size();
    r.cross_ref("ref_1")?;
    r.skip_block_size();
    r.list2("lst0", Item::CrossRef)?;
    r.u8("u8_0")?;
    r.cross_ref("ref_2")?;
    if r.version() > 2012 {
        r.map6("lst0", Item::U32, Item::CrossRef)?;
        r.map6("lst1", Item::U32, Item::CrossRef)?;
    } else {
        r.set("lst0", Value::Array(Vec::new()));
        r.set("lst1", Value::Array(Vec::new()));
        r.skip_block_size();
    }
    r.cross_ref("ref_3")?;
    r.u32("u32_0")?;
    r.u8("u8_0")?;
    Ok(())
}

fn model_leader_note(r: &mut NodeReader<'_>) -> Result<()> {
    r.set_type_name("ModelLeaderNote");
    r.content_header()?;
    Ok(())
}

fn rec_7256922c(r: &mut NodeReader<'_>) -> Result<()> {
    r.content_header()?;
    r.skip_block_size();
    r.skip_block_size();
    r.cross_ref("ref_transformation")?;
    r.cross_ref("ref_point")?;
    r.cross_ref("ref_1")?;
    Ok(())
}

fn rec_7325290e(r: &mut NodeReader<'_>) -> Result<()> {
    r.content_header()?;
    r.skip_block_size();
    r.i32("s32_0")?;
    r.skip_block_size();
    r.skip_block_size();
    r.cross_ref("ref_1")?;
    r.cross_ref("ref_body")?;
    r.cross_ref("ref_transformation")?;
    r.cross_ref("ref_1")?;
    r.cross_ref("ref_entity")?;
    Ok(())
}

fn rec_7325290f(r: &mut NodeReader<'_>) -> Result<()> {
    r.content_header()?;
    r.skip_block_size();
    r.i32("s32_0")?;
    r.skip_block_size();
    r.skip_block_size();
    r.cross_ref("ref_1")?;
    r.cross_ref("ref_body")?;
    r.cross_ref("ref_transformation")?;
    r.cross_ref("ref_2")?;
    r.cross_ref("ref_3")?;
    r.cross_ref("ref_4")?;
    Ok(())
}

fn rec_74e6f48a(r: &mut NodeReader<'_>) -> Result<()> {
    r.content_header()?;
    r.skip_block_size();
    r.i32("s32_0")?;
    r.skip_block_size();
    r.skip_block_size();
    r.cross_ref("ref_plane1")?;
    r.skip_block_size();
    r.cross_ref("ref_entity")?;
    r.cross_ref("ref_plane2")?;
    r.cross_ref("ref_parameter")?;
    r.u16_array("a0", 3)?;
    r.f64_array("a1", 9)?;
    Ok(())
}

fn rec_76ec185b(r: &mut NodeReader<'_>) -> Result<()> {
    r.content_header()?;
    r.skip_block_size();
    r.i32("s32_0")?;
    r.skip_block_size();
    r.skip_block_size();
    r.cross_ref("ref_1")?;
    r.cross_ref("ref_2")?;
    r.cross_ref("ref_3")?;
    Ok(())
}

fn rec_778752c6(r: &mut NodeReader<'_>) -> Result<()> {
    r.content_header()?;
    r.skip_block_size();
    r.i32("s32_0")?;
    r.skip_block_size();
    r.skip_block_size();
    r.cross_ref("ref_sketch")?;
    r.cross_ref("ref_2")?;
    r.cross_ref("ref_3")?;
    r.cross_ref("ref_direction")?;
    if r.version() > 2016 {
        r.skip(4);
    }
    r.u32("u32_0")?;
    r.u32("u32_1")?;
    r.child_ref("ref_5")?;
    r.cross_ref("ref_6")?;
    r.child_ref("ref_7")?;
    r.cross_ref("ref_point")?;
    Ok(())
}

fn value_u_int32(r: &mut NodeReader<'_>) -> Result<()> {
    r.set_type_name("ValueUInt32");
    r.content_header()?;
    r.skip_block_size();
    r.skip_block_size();
    r.skip_block_size();
    r.u32("value")?;
    r.skip_block_size();
    Ok(())
}

fn rec_79d4dd11(r: &mut NodeReader<'_>) -> Result<()> {
    r.content_header()?;
    r.skip_block_size();
    r.i32("s32_0")?;
    r.skip_block_size();
    r.skip_block_size();
    r.skip_block_size();
    r.list2("lst0", Item::ChildRef)?;
    r.u32("u32_1")?;
    r.skip_block_size();
    r.cross_ref("ref_fx_boundary_patch")?;
    r.u32("u32_2")?;
    r.list2("lst1", Item::CrossRef)?;
    Ok(())
}

fn rec_7c6d7b13(r: &mut NodeReader<'_>) -> Result<()> {
    r.content_header()?;
    r.skip_block_size();
    r.skip_block_size();
    r.skip_block_size();
    r.list2("lst0", Item::CrossRef)?;
    Ok(())
}

fn rec_7da7f733(r: &mut NodeReader<'_>) -> Result<()> {
    r.content_header()?;
    r.skip_block_size();
    r.i32("s32_0")?;
    r.cross_ref("ref_1")?;
    r.cross_ref("ref_2")?;
    r.cross_ref("ref_3")?;
    r.cross_ref("ref_4")?;
    r.cross_ref("ref_5")?;
    r.cross_ref("ref_6")?;
    r.u16_array("a0", 9)?;
    r.cross_ref("ref_7")?;
    Ok(())
}

fn rec_7f4a3e30(r: &mut NodeReader<'_>) -> Result<()> {
    r.content_header()?;
    r.skip_block_size();
    r.skip_block_size();
    r.skip_block_size();
    r.u32("u32_0")?;
    r.skip_block_size();
    r.child_ref("ref_1")?;
    r.u32("u32_1")?;
    r.f64("a")?;
    r.u16_array("a0", 3)?;
    if r.version() > 2016 {
        r.u8("u8_0")?;
    } else {
        r.set_default("u8_0", 1u8);
        r.skip_block_size();
    }
    r.f64_array("a1", 6)?;
    r.u32("u32_2")?;
    r.i32("s32_0")?;
    r.f64_array("a2", 6)?;
    r.u32("u32_2")?;
    r.i32("s32_0")?;
    r.f64_array("a3", 24)?;
    r.u16("u16_0")?;
    r.f64("f64_0")?;
    r.u16_array("a4", 4)?;
    r.f64_array("a5", 6)?;
    r.u8("u8_1")?;
    r.child_ref("ref_2")?;
    r.cross_ref("ref_3")?;
    r.u32_array("a6", 3)?;
    r.f64_array("a7", 18)?;
    r.u8("u8_2")?;
    r.f64_array("a8", 18)?;
    r.u8("u8_3")?;
    if r.version() > 2010 {
        r.list2("lst0", Item::CrossRef)?;
    } else {
        r.set_default("lst0", Value::Array(Vec::new()));
        r.skip(4);
    }
    r.f64_array("a9", 12)?;
    r.u8("u8_4")?;
    r.u16_array("a10", 5)?;
    r.f64_array("a11", 7)?;
    Ok(())
}

fn rec_831ebce9(r: &mut NodeReader<'_>) -> Result<()> {
    r.content_header()?;
    r.skip_block_size();
    r.skip_block_size();
    r.skip_block_size();
    r.cross_ref("ref_point")?;
    r.cross_ref("ref_2")?;
    r.cross_ref("ref_3")?;
    r.u8("u8_0")?;
    Ok(())
}

fn parameter_text(r: &mut NodeReader<'_>) -> Result<()> {
    r.set_type_name("ParameterText");
    r.content_header()?;
    r.name16()?;
    r.u32("is_key")?;
    r.text16("value")?;
    Ok(())
}

fn rec_83d31932(r: &mut NodeReader<'_>) -> Result<()> {
    r.content_header()?;
    r.skip_block_size();
    r.i32("s32_0")?;
    r.skip_block_size();
    r.skip_block_size();
    r.cross_ref("ref_line")?;
    r.skip_block_size();
    r.cross_ref("ref_point1")?;
    r.cross_ref("ref_point2")?;
    Ok(())
}

fn rec_86173e3f(r: &mut NodeReader<'_>) -> Result<()> {
    r.content_header()?;
    r.skip_block_size();
    r.skip_block_size();
    r.skip_block_size();
    r.cross_ref("ref_1")?;
    r.cross_ref("ref_2")?;
    r.cross_ref("ref_3")?;
    r.cross_ref("ref_4")?;
    r.cross_ref("ref_5")?;
    r.cross_ref("ref_6")?;
    r.cross_ref("ref_7")?;
    r.i32("s32_0")?;
    r.f64_array("a0", 3)?;
    Ok(())
}

fn rec_88fa65ca(r: &mut NodeReader<'_>) -> Result<()> {
    r.content_header()?;
    r.skip_block_size();
    r.i32("s32_0")?;
    r.skip_block_size();
    r.skip_block_size();
    r.u16("u16_0")?;
    r.cross_ref("ref_1")?;
    r.skip_block_size();
    r.u32("u32_0")?;
    r.skip_block_size();
    r.u32("u32_1")?;
    if r.version() > 2017 {
        r.skip(4);
    } else {
        r.skip_block_size();
    }
    r.list8("lst0", Item::U32)?;
    r.list8("lst1", Item::U32)?;
    r.u8("u8_0")?;
    r.skip_block_size();
    r.cross_ref("ref_2")?;
    r.cross_ref("ref_3")?;
    r.u32("u32_3")?;
    Ok(())
}

fn rec_8affbe5a(r: &mut NodeReader<'_>) -> Result<()> {
    r.content_header()?;
    r.skip_block_size();
    r.i32("s32_0")?;
    r.skip_block_size();
    r.skip_block_size();
    r.cross_ref("ref_plane")?;
    r.skip_block_size();
    r.cross_ref("ref_line1")?;
    r.cross_ref("ref_line2")?;
    Ok(())
}

fn rec_8b1e9a97(r: &mut NodeReader<'_>) -> Result<()> {
    r.content_header()?;
    r.skip_block_size();
    r.i32("s32_0")?;
    r.cross_ref("ref_1")?;
    r.list2("lst0", Item::U32)?;
    r.f64("f64_0")?;
    r.map6("lst0", Item::U16, Item::U16)?;
    r.cross_ref("ref_2")?;
    r.cross_ref("ref_3")?;
    r.u32("u32_0")?;
    Ok(())
}

fn rec_8b2be62e(r: &mut NodeReader<'_>) -> Result<()> {
    r.content_header()?;
    r.skip_block_size();
    r.skip_block_size();
    r.skip_block_size();
    r.u16("u16_0")?;
    r.u16("u16_1")?;
    r.skip_block_size();
    Ok(())
}

fn rec_8d6ef0be(r: &mut NodeReader<'_>) -> Result<()> {
    r.content_header()?;
    r.skip_block_size();
    r.skip_block_size();
    r.list4("lst0", Item::CrossRef)?;
    Ok(())
}

fn rec_8eb19f04(r: &mut NodeReader<'_>) -> Result<()> {
    r.content_header()?;
    r.skip_block_size();
    r.i32("s32_0")?;
    r.skip_block_size();
    r.skip_block_size();
    r.u16("u16_0")?;
    r.cross_ref("ref_1")?;
    r.skip_block_size();
    r.u32("u32_0")?;
    if r.version() > 2017 {
        r.skip(4);
    } else {
        r.skip_block_size();
    }
    r.u32("u32_1")?;
    r.skip_block_size();
    r.list8("lst0", Item::U32)?;
    r.list8("lst1", Item::U32)?;
    r.u8("u8_0")?;
    r.skip_block_size();
    r.u8("u8_1")?;
    r.cross_ref("ref_2")?;
    r.cross_ref("ref_3")?;
    r.u32("u32_3")?;
    r.u8("u8_3")?;
    r.ref_u32_list("lst2")?;
    Ok(())
}

fn rec_8fec335f(r: &mut NodeReader<'_>) -> Result<()> {
    r.content_header()?;
    r.skip_block_size();
    r.i32("s32_0")?;
    r.skip_block_size();
    r.skip_block_size();
    r.cross_ref("ref_point1")?;
    r.cross_ref("ref_line1")?;
    r.cross_ref("ref_line2")?;
    r.cross_ref("ref_line3")?;
    r.cross_ref("ref_line4")?;
    r.cross_ref("ref_6")?;
    r.cross_ref("ref_point2")?;
    Ok(())
}

fn transformation(r: &mut NodeReader<'_>) -> Result<()> {
    r.set_type_name("Transformation");
    r.content_header()?;
    r.skip_block_size();
    r.skip_block_size();
    r.transformation()?;
    Ok(())
}

fn rec_90874d40(r: &mut NodeReader<'_>) -> Result<()> {
    r.content_header()?;
    r.skip_block_size();
    r.i32("s32_0")?;
    r.skip_block_size();
    r.cross_ref("ref_1")?;
    r.skip_block_size();
    r.cross_ref("ref_parameter")?;
    r.list3("lst0", Item::ChildRef)?;
    r.f64("f")?;
    r.child_ref("ref_1")?;
    r.u16("u16_0")?;
    r.u8("u8_0")?;
    Ok(())
}

fn surface_body(r: &mut NodeReader<'_>) -> Result<()> {
    r.set_type_name("SurfaceBody");
    r.content_header()?;
    r.skip_block_size();
    r.skip_block_size();
    r.i32("s32_0")?;
    Ok(())
}

fn rec_90874d53(r: &mut NodeReader<'_>) -> Result<()> {
    r.content_header()?;
    r.skip_block_size();
    r.i32("s32_0")?;
    r.skip_block_size();
    r.skip_block_size();
    r.u16("u16_0")?;
    r.cross_ref("ref_1")?;
    r.skip_block_size();
    r.u32("u32_0")?;
    if r.version() > 2017 {
        r.skip(4);
    } else {
        r.skip_block_size();
    }
    r.u32("u32_1")?;
    r.skip_block_size();
    r.list8("lst0", Item::U32)?;
    r.list8("lst1", Item::U32)?;
    r.u8("u8_0")?;
    r.skip_block_size();
    r.cross_ref("ref_2")?;
    r.cross_ref("ref_3")?;
    r.u32("u32_2")?;
    Ok(())
}

fn rec_90874d55(r: &mut NodeReader<'_>) -> Result<()> {
    r.content_header()?;
    r.skip_block_size();
    r.i32("s32_0")?;
    r.skip_block_size();
    r.skip_block_size();
    r.u16("u16_0")?;
    r.cross_ref("ref_body")?;
    r.skip_block_size();
    r.u32("u32_0")?;
    if r.version() > 2017 {
        r.skip(4);
    } else {
        r.skip_block_size();
    }
    r.u32("u32_1")?;
    r.skip_block_size();
    r.list8("lst0", Item::U32)?;
    r.list8("lst1", Item::U32)?;
    r.u8("u8_0")?;
    r.skip_block_size();
    r.cross_ref("ref_value")?;
    r.cross_ref("ref_1")?;
    r.u32("u32_2")?;
    Ok(())
}

fn rec_90874d60(r: &mut NodeReader<'_>) -> Result<()> {
    r.content_header()?;
    r.skip_block_size();
    r.i32("s32_0")?;
    r.skip_block_size();
    r.skip_block_size();
    r.i32("s32_1")?;
    r.list2("lst0", Item::CrossRef)?;
    r.skip_block_size();
    r.u32("u32_0")?;
    r.list2("lst1", Item::CrossRef)?;
    r.child_ref("ref_1")?;
    r.u16("u16_0")?;
    r.u32("u32_0")?;
    r.name16()?;
    r.u16("u16_0")?;
    r.skip_block_size();
    Ok(())
}

fn rec_90874d61(r: &mut NodeReader<'_>) -> Result<()> {
    r.content_header()?;
    r.skip_block_size();
    r.skip_block_size();
    r.u32("u32_0")?;
    r.cross_ref("ref_1")?;
    Ok(())
}

fn rec_90874d74(r: &mut NodeReader<'_>) -> Result<()> {
    r.content_header()?;
    r.skip_block_size();
    r.i32("s32_0")?;
    r.skip_block_size();
    r.skip_block_size();
    r.list2("lst0", Item::CrossRef)?;
    r.cross_ref("ref_1")?;
    Ok(())
}

fn rec_91b99a2c(r: &mut NodeReader<'_>) -> Result<()> {
    r.content_header()?;
    r.cross_ref("ref_point")?;
    r.cross_ref("ref_parameter")?;
    r.cross_ref("ref_3")?;
    Ok(())
}

fn rec_92637d29(r: &mut NodeReader<'_>) -> Result<()> {
    r.content_header()?;
    r.skip_block_size();
    r.skip_block_size();
    r.skip_block_size();
    r.i16("s16_0")?;
    r.u16("u16_0")?;
    r.skip_block_size();
    Ok(())
}

fn rec_93c7ee68(r: &mut NodeReader<'_>) -> Result<()> {
    r.content_header()?;
    r.skip_block_size();
    r.i32("s32_0")?;
    r.skip_block_size();
    r.skip_block_size();
    r.cross_ref("ref_1")?;
    r.skip_block_size();
    r.u8("u8_0")?;
    r.u8("u8_1")?;
    r.cross_ref("ref_2")?;
    r.skip_block_size();
    r.u32("u32_0")?;
    if r.version() > 2017 {
        r.skip(4);
    } else {
        r.skip_block_size();
    }
    r.list2("lst0", Item::CrossRef)?;
    Ok(())
}

fn rec_99684a5a(r: &mut NodeReader<'_>) -> Result<()> {
    r.content_header()?;
    if r.version() > 2010 {
        r.u32("u32_0")?;
        r.u32("u32_1")?;
    } else {
        r.skip_block_size();
        r.skip_block_size();
        r.skip_block_size();
        r.skip_block_size();
        r.set("u32_0", 0u32);
        r.set("u32_1", 0u32);
    }
    r.u8("u8_0")?;
    Ok(())
}

fn rec_99b938ae(r: &mut NodeReader<'_>) -> Result<()> {
    r.content_header()?;
    r.skip_block_size();
    r.skip_block_size();
    r.f64_array("a1", 2)?;
    r.u32("u32_0")?;
    if r.version() > 2011 {
        r.u32("u32_1")?;
    } else {
        r.set_default("u32_1", 0u32);
    }
    Ok(())
}

fn rec_9c8c1297(r: &mut NodeReader<'_>) -> Result<()> {
    r.content_header()?;
    r.skip_block_size();
    r.i32("s32_0")?;
    r.cross_ref("ref_1")?;
    r.cross_ref("ref_2")?;
    r.cross_ref("ref_3")?;
    r.cross_ref("ref_4")?;
    r.cross_ref("ref_5")?;
    r.cross_ref("ref_6")?;
    r.cross_ref("ref_7")?;
    r.cross_ref("ref_8")?;
    r.cross_ref("ref_9")?;
    r.cross_ref("ref_10")?;
    r.cross_ref("ref_11")?;
    Ok(())
}

fn rec_a244457b(r: &mut NodeReader<'_>) -> Result<()> {
    r.content_header()?;
    r.skip_block_size();
    r.u32("u32_0")?;
    r.skip_block_size();
    r.skip_block_size();
    r.cross_ref("ref_parameter")?;
    r.cross_ref("ref_entity")?;
    r.u32("u32_1")?;
    r.u16("u16_0")?;
    r.u32("u32_2")?;
    r.f64_array("a0", 9)?;
    r.u8("u8_0")?;
    r.skip_block_size();
    r.cross_ref("ref_1")?;
    r.cross_ref("ref_2")?;
    Ok(())
}

fn rec_a31e29e0(r: &mut NodeReader<'_>) -> Result<()> {
    r.content_header()?;
    r.skip_block_size();
    r.i32("s32_0")?;
    r.skip_block_size();
    r.skip_block_size();
    r.list8("lst0", Item::ChildRef)?;
    r.parent_ref()?;
    r.cross_ref("ref_1")?;
    r.skip_block_size();
    Ok(())
}

fn rec_a477243b(r: &mut NodeReader<'_>) -> Result<()> {
    r.content_header()?;
    r.skip_block_size();
    r.skip_block_size();
    r.child_ref("cld_0")?;
    r.skip_block_size();
    r.u8("u8_0")?;
    r.skip_block_size();
    Ok(())
}

fn rec_a5428f7a(r: &mut NodeReader<'_>) -> Result<()> {
    r.content_header()?;
    r.skip_block_size();
    r.i32("s32_0")?;
    r.cross_ref("ref_1")?;
    r.cross_ref("ref_2")?;
    r.u32_array("a0", 2)?;
    Ok(())
}

fn rec_a5977baa(r: &mut NodeReader<'_>) -> Result<()> {
    r.content_header()?;
    r.skip_block_size();
    r.i32("s32_0")?;
    r.skip_block_size();
    r.skip_block_size();
    r.cross_ref("ref_parameter")?;
    r.cross_ref("ref_entity")?;
    Ok(())
}

fn rec_a6118e11(r: &mut NodeReader<'_>) -> Result<()> {
    r.content_header()?;
    r.skip_block_size();
    r.i32("s32_0")?;
    r.skip_block_size();
    r.skip_block_size();
    r.cross_ref("ref_plane")?;
    r.skip_block_size();
    Ok(())
}

fn rec_a76b22a0(r: &mut NodeReader<'_>) -> Result<()> {
    r.content_header()?;
    r.skip_block_size();
    r.i32("s32_0")?;
    r.skip_block_size();
    r.skip_block_size();
    r.cross_ref("ref_1")?;
    r.skip_block_size();
    r.u8("u8_0")?;
    r.u8("u8_1")?;
    r.cross_ref("ref_2")?;
    r.skip_block_size();
    r.u32("u32_0")?;
    if r.version() > 2017 {
        r.skip(4);
    } else {
        r.skip_block_size();
    }
    Ok(())
}

fn rec_aa805a06(r: &mut NodeReader<'_>) -> Result<()> {
    r.content_header()?;
    r.skip_block_size();
    r.skip_block_size();
    r.skip_block_size();
    Ok(())
}

fn fillet_constant_radius_edge_set(r: &mut NodeReader<'_>) -> Result<()> {
    r.set_type_name("FilletConstantRadiusEdgeSet");
    r.content_header()?;
    r.skip_block_size();
    r.skip_block_size();
    r.skip_block_size();
    r.cross_ref("ref_1")?;
    r.cross_ref("ref_parameter")?;
    r.cross_ref("ref_3")?;
    r.cross_ref("ref_value")?;
    Ok(())
}

fn rec_ad416cea(r: &mut NodeReader<'_>) -> Result<()> {
    r.content_header()?;
    r.skip_block_size();
    r.i32("s32_0")?;
    r.skip_block_size();
    r.skip_block_size();
    r.cross_ref("ref_1")?;
    r.cross_ref("ref_2")?;
    r.u8("u8_0")?;
    r.cross_ref("ref_3")?;
    r.u8("u8_1")?;
    Ok(())
}

fn rec_b10d8b80(r: &mut NodeReader<'_>) -> Result<()> {
    r.content_header()?;
    r.skip_block_size();
    r.i32("s32_0")?;
    r.skip_block_size();
    r.skip_block_size();
    r.u8("u8_0")?;
    r.u8("u8_1")?;
    r.cross_ref("ref_2")?;
    r.skip_block_size();
    r.u32("u32_0")?;
    if r.version() > 2017 {
        r.skip(4);
    } else {
        r.skip_block_size();
    }
    r.u32("u32_1")?;
    r.skip_block_size();
    r.list8("lst0", Item::U32)?;
    r.list8("lst0", Item::U32)?;
    r.u8("u8_2")?;
    r.skip_block_size();
    r.cross_ref("ref_3")?;
    r.cross_ref("ref_4")?;
    r.cross_ref("ref_5")?;
    r.u32("u32_2")?;
    Ok(())
}

fn rec_b382a87c(r: &mut NodeReader<'_>) -> Result<()> {
    r.content_header()?;
    r.skip_block_size();
    r.skip_block_size();
    r.skip_block_size();
    r.cross_ref("ref_1")?;
    r.list2("lst0", Item::CrossRef)?;
    r.cross_ref("ref_2")?;
    r.u32("u32_0")?;
    Ok(())
}

fn rec_b3eaa9ee(r: &mut NodeReader<'_>) -> Result<()> {
    r.content_header()?;
    r.skip_block_size();
    r.i32("s32_0")?;
    r.skip_block_size();
    r.skip_block_size();
    r.cross_ref("ref_1")?;
    r.skip_block_size();
    r.cross_ref("ref_1")?;
    r.cross_ref("ref_1")?;
    r.f64("f64_0")?;
    r.f64("f64_1")?;
    Ok(())
}

fn rec_b5d4dee6(r: &mut NodeReader<'_>) -> Result<()> {
    r.content_header()?;
    r.skip_block_size();
    r.i32("s32_0")?;
    r.skip_block_size();
    r.skip_block_size();
    r.skip_block_size();
    r.map6("lst0", Item::CrossRef, Item::CrossRef)?;
    r.u32("u32_0")?;
    r.list2("lst1", Item::U32)?;
    r.u16("u16_0")?;
    r.u8("u8_0")?;
    r.skip_block_size();
    r.ref_list("lst2")?;
    r.cross_ref("ref_1")?;
    r.ref_list("lst3")?;
    r.cross_ref("ref_2")?;
    r.u8("u8_1")?;
    r.cross_ref("ref_3")?;
    r.f64("f64_0")?;
    Ok(())
}

fn fillet_variable_radius_edge_set(r: &mut NodeReader<'_>) -> Result<()> {
    r.set_type_name("FilletVariableRadiusEdgeSet");
    r.content_header()?;
    r.cross_ref("ref_fx")?;
    r.cross_ref("ref_edges")?;
    r.cross_ref("ref_value")?;
    Ok(())
}

fn rec_b8cb3560(r: &mut NodeReader<'_>) -> Result<()> {
    r.content_header()?;
    r.i32("s32_0")?;
    Ok(())
}

fn rec_b8dbef70(r: &mut NodeReader<'_>) -> Result<()> {
    r.content_header()?;
    r.skip_block_size();
    r.i32("s32_0")?;
    r.skip_block_size();
    r.skip_block_size();
    r.u16("u16_0")?;
    r.cross_ref("ref_1")?;
    r.skip_block_size();
    r.u32("u32_0")?;
    if r.version() > 2017 {
        r.skip(4);
    } else {
        r.skip_block_size();
    }
    r.u32("u32_1")?;
    r.skip_block_size();
    r.list8("lst0", Item::U32)?;
    r.list8("lst1", Item::U32)?;
    r.skip_block_size();
    r.u8("u8_0")?;
    r.cross_ref("ref_1")?;
    r.cross_ref("ref_2")?;
    r.u32("u32_2")?;
    Ok(())
}

fn fillet_variable_radius_edges(r: &mut NodeReader<'_>) -> Result<()> {
    r.set_type_name("FilletVariableRadiusEdges");
    r.content_header()?;
    r.skip_block_size();
    r.skip_block_size();
    r.skip_block_size();
    r.list2("edges", Item::CrossRef)?;
    r.list2("lst0", Item::CrossRef)?;
    Ok(())
}

fn r_dx_var(r: &mut NodeReader<'_>) -> Result<()> {
    r.set_type_name("RDxVar");
    r.content_header()?;
    r.skip_block_size();
    r.skip_block_size();
    r.skip_block_size();
    r.name16()?;
    r.u32("u32_0")?;
    r.u32("u32_1")?;
    r.u32("u32_2")?;
    Ok(())
}

fn rec_bf8b8868(r: &mut NodeReader<'_>) -> Result<()> {
    r.content_header()?;
    r.skip_block_size();
    r.skip_block_size();
    r.skip_block_size();
    r.cross_ref("ref_fx")?;
    r.cross_ref("ref_parameter")?;
    Ok(())
}

fn rec_ca674c90(r: &mut NodeReader<'_>) -> Result<()> {
    r.content_header()?;
    r.i32("s32_0")?;
    r.u8("u8_0")?;
    r.u8("u8_1")?;
    r.cross_ref("ref_1")?;
    r.skip_block_size();
    r.u32("u32_0")?;
    if r.version() > 2017 {
        r.skip(4);
    } else {
        r.skip_block_size();
    }
    r.u32("u32_0")?;
    r.skip_block_size();
    r.list8("lst0", Item::U32)?;
    r.list8("lst1", Item::CrossRef)?;
    r.skip_block_size();
    r.u8("u8_1")?;
    r.cross_ref("ref_2")?;
    r.cross_ref("ref_3")?;
    r.u32("u32_3")?;
    r.u32("u32_4")?;
    r.cross_ref("ref_5")?;
    r.u32("u32_5")?;
    Ok(())
}

fn rec_ccd87cba(r: &mut NodeReader<'_>) -> Result<()> {
    r.content_header()?;
    r.skip_block_size();
    r.skip_block_size();
    r.f64("f64_0")?;
    r.f64("f64_1")?;
    Ok(())
}

fn direction(r: &mut NodeReader<'_>) -> Result<()> {
    r.set_type_name("Direction");
    r.content_header()?;
    r.skip_block_size();
    r.skip_block_size();
    r.skip_block_size();
    r.i32("s32_0")?;
    r.skip_block_size();
    r.f64("a")?;
    r.skip_block_size();
    if r.version() > 2017 {
        r.skip(4);
    }
    r.f64("x")?;
    r.f64("y")?;
    r.f64("z")?;
    Ok(())
}

fn rec_ce7f937a(r: &mut NodeReader<'_>) -> Result<()> {
    r.content_header()?;
    r.skip_block_size();
    r.i32("s32_0")?;
    r.skip_block_size();
    r.skip_block_size();
    r.cross_ref("ref_line")?;
    r.skip_block_size();
    r.cross_ref("ref_point")?;
    r.cross_ref("ref_plane")?;
    Ok(())
}

fn value_s_int32(r: &mut NodeReader<'_>) -> Result<()> {
    r.set_type_name("ValueSInt32");
    r.content_header()?;
    r.skip_block_size();
    r.skip_block_size();
    r.skip_block_size();
    r.i32("value")?;
    r.skip_block_size();
    Ok(())
}

fn rec_d524c30a(r: &mut NodeReader<'_>) -> Result<()> {
    r.content_header()?;
    r.skip_block_size();
    r.skip_block_size();
    r.skip_block_size();
    r.cross_ref("ref_1")?;
    r.cross_ref("ref_2")?;
    r.cross_ref("ref_3")?;
    Ok(())
}

fn rec_d61732c1(r: &mut NodeReader<'_>) -> Result<()> {
    r.content_header()?;
    r.skip_block_size();
    r.i32("s32_0")?;
    r.skip_block_size();
    r.skip_block_size();
    r.skip_block_size();
    r.list2("lst0", Item::ChildRef)?;
    r.list2("lst1", Item::CrossRef)?;
    r.list2("lst2", Item::CrossRef)?;
    r.u32("u32_0")?;
    r.u32("u32_1")?;
    r.skip_block_size();
    if r.version() > 2011 {
        r.cross_ref("ref_1")?;
    }
    r.cross_ref("ref_patch1")?;
    r.cross_ref("ref_patch2")?;
    r.cross_ref("ref_parameter1")?;
    r.cross_ref("ref_body")?;
    r.cross_ref("ref_parameter2")?;
    r.cross_ref("ref_7")?;
    r.cross_ref("ref_parameter3")?;
    r.cross_ref("ref_fx")?;
    r.cross_ref("ref_parameter4")?;
    r.cross_ref("ref_parameter5")?;
    r.cross_ref("ref_parameter6")?;
    Ok(())
}

fn rec_d739edbb(r: &mut NodeReader<'_>) -> Result<()> {
    r.content_header()?;
    r.skip_block_size();
    r.i32("s32_0")?;
    r.skip_block_size();
    r.cross_ref("ref_1")?;
    r.skip_block_size();
    r.u32_array("a0", 2)?;
    r.skip_block_size();
    Ok(())
}

fn rec_d80ce357(r: &mut NodeReader<'_>) -> Result<()> {
    r.content_header()?;
    r.skip_block_size();
    r.i32("s32_0")?;
    r.skip_block_size();
    r.skip_block_size();
    r.u16("u16_0")?;
    r.cross_ref("ref_1")?;
    r.skip_block_size();
    r.u32("u32_0")?;
    if r.version() > 2017 {
        r.skip(4);
    } else {
        r.skip_block_size();
    }
    r.u32("u32_0")?;
    r.skip_block_size();
    r.list8("lst0", Item::U32)?;
    r.list8("lst1", Item::CrossRef)?;
    r.skip_block_size();
    r.u16("u16_1")?;
    r.cross_ref("ref_2")?;
    r.cross_ref("ref_3")?;
    r.u32("u32_3")?;
    r.ref_u32_list("lst2")?;
    Ok(())
}

fn rec_d83ef271(r: &mut NodeReader<'_>) -> Result<()> {
    r.content_header()?;
    r.skip_block_size();
    r.skip_block_size();
    r.list2("lst0", Item::ChildRef)?;
    Ok(())
}

fn rec_d8a9c970(r: &mut NodeReader<'_>) -> Result<()> {
    r.content_header()?;
    r.skip_block_size();
    r.i32("s32_0")?;
    r.skip_block_size();
    r.skip_block_size();
    r.u16("u16_0")?;
    r.cross_ref("ref_1")?;
    r.skip_block_size();
    r.u32("u32_0")?;
    r.skip_block_size();
    r.u32("u32_1")?;
    if r.version() > 2017 {
        r.skip(4);
    } else {
        r.skip_block_size();
    }
    r.list8("lst0", Item::U32)?;
    r.list8("lst1", Item::U32)?;
    r.u8("u8_0")?;
    r.skip_block_size();
    r.cross_ref("ref_2")?;
    r.cross_ref("ref_3")?;
    r.u32("u32_2")?;
    Ok(())
}

fn rec_da4970b5(r: &mut NodeReader<'_>) -> Result<()> {
    r.content_header()?;
    r.skip_block_size();
    r.i32("s32_0")?;
    r.skip_block_size();
    r.skip_block_size();
    r.list2("lst", Item::CrossRef)?;
    r.cross_ref("ref_1")?;
    r.skip_block_size();
    Ok(())
}

fn rec_dc93db08(r: &mut NodeReader<'_>) -> Result<()> {
    r.content_header()?;
    r.skip_block_size();
    r.skip_block_size();
    r.cross_ref("ref_sketch")?;
    r.f64_array("a0", 4)?;
    r.u32("u32_0")?;
    r.transformation()?;
    r.u16_array("a1", 3)?;
    r.f64("f64_0")?;
    r.u8("u8_0")?;
    Ok(())
}

/// ModelToleranceFeature
fn model_tolerance_feature(r: &mut NodeReader<'_>) -> Result<()> {
    r.content_header()?;
    r.i32("s32_0")?;
    r.list2("faces", Item::CrossRef)?;
    r.u32_array("a0", 2)?;
    r.text16("client_id")?;
    r.cross_ref("ref_parent_tolerance_feature")?;
    r.cross_ref("ref_2")?;
    r.u32("u32_0")?;
    Ok(())
}

fn rec_dfb2586a(r: &mut NodeReader<'_>) -> Result<()> {
    r.content_header()?;
    r.skip_block_size();
    r.i32("s32_0")?;
    r.skip_block_size();
    r.skip_block_size();
    r.u32("u32_0")?;
    r.cross_ref("ref_1")?;
    r.u32_array("a0", 3)?;
    r.cross_ref("ref_2")?;
    r.u32("u32_1")?;
    r.cross_ref("ref_3")?;
    r.u32_array("a1", 2)?;
    r.cross_ref("ref_4")?;
    r.u32("u32_2")?;
    r.child_ref("ref_4")?;
    r.cross_ref("ref_5")?;
    r.child_ref("ref_6")?;
    r.cross_ref("ref_7")?;
    r.child_ref("ref_8")?;
    r.cross_ref("ref_9")?;
    r.child_ref("ref_10")?;
    r.cross_ref("ref_12")?;
    r.child_ref("ref_13")?;
    r.cross_ref("ref_14")?;
    r.child_ref("ref_15")?;
    r.cross_ref("ref_16")?;
    Ok(())
}

fn rec_e0e3e202(r: &mut NodeReader<'_>) -> Result<()> {
    r.content_header()?;
    r.skip_block_size();
    r.skip_block_size();
    r.skip_block_size();
    r.u16_array("a0", 2)?;
    r.skip_block_size();
    Ok(())
}

fn rec_e1d3d023(r: &mut NodeReader<'_>) -> Result<()> {
    r.content_header()?;
    r.skip_block_size();
    r.skip_block_size();
    r.skip_block_size();
    r.i32("s32_0")?;
    r.skip_block_size();
    r.child_ref("ref_1")?;
    r.f32_array("a1", 3)?;
    r.u16_array("a2", 3)?;
    if r.version() > 2016 {
        r.skip(1);
    } else {
        r.skip_block_size();
    }
    r.f64_array("a3", 3)?;
    r.f64_array("a4", 3)?;
    r.i32_array("a5", 2)?;
    r.f64_array("a6", 31)?;
    r.u8_array("a7", 18)?;
    r.f64_array("a8", 6)?;
    r.u8("u8_0")?;
    r.child_ref("ref_2")?;
    r.cross_ref("ref_3")?;
    r.u32("u32_0")?;
    r.f64_array("a9", 19)?;
    r.u8("u8_1")?;
    r.f64_array("a10", 12)?;
    r.u8("u8_2")?;
    r.f64_array("a11", 6)?;
    if r.version() > 2010 {
        r.list2("lst0", Item::CrossRef)?;
    }
    Ok(())
}

fn rec_e1d8c31b(r: &mut NodeReader<'_>) -> Result<()> {
    r.content_header()?;
    r.skip_block_size();
    r.i32("s32_0")?;
    r.child_ref("ref_1")?;
    r.child_ref("ref_2")?;
    r.child_ref("ref_3")?;
    Ok(())
}

fn rec_e2ccc3b7(r: &mut NodeReader<'_>) -> Result<()> {
    r.content_header()?;
    r.skip_block_size();
    r.i32("s32_0")?;
    r.skip_block_size();
    r.skip_block_size();
    r.u8("u8_0")?;
    r.u8("u8_1")?;
    r.cross_ref("ref_1")?;
    r.skip_block_size();
    r.u32("u32_0")?;
    if r.version() > 2017 {
        r.skip(4);
    } else {
        r.skip_block_size();
    }
    r.u32("u32_0")?;
    r.skip_block_size();
    r.list8("lst0", Item::U32)?;
    r.list8("lst1", Item::U32)?;
    r.u8("u8_2")?;
    r.skip_block_size();
    r.cross_ref("ref_1")?;
    r.cross_ref("ref_1")?;
    r.u32("u32_1")?;
    r.f64("f64_1")?;
    Ok(())
}

fn rec_e524b878(r: &mut NodeReader<'_>) -> Result<()> {
    r.content_header()?;
    r.skip_block_size();
    r.i32("s32_0")?;
    r.skip_block_size();
    r.skip_block_size();
    r.list2("lst0", Item::CrossRef)?;
    r.name16()?;
    r.u16("u16_0")?;
    r.cross_ref("ref_1")?;
    r.cross_ref("ref_2")?;
    r.cross_ref("ref_3")?;
    r.cross_ref("ref_4")?;
    r.cross_ref("ref_5")?;
    r.u16("u16_1")?;
    r.u8("u8_0")?;
    Ok(())
}

fn rec_e562b07c(r: &mut NodeReader<'_>) -> Result<()> {
    r.content_header()?;
    r.skip_block_size();
    r.i32("s32_0")?;
    r.skip_block_size();
    r.skip_block_size();
    r.cross_ref("ref_plane1")?;
    r.skip_block_size();
    r.cross_ref("ref_plane2")?;
    r.cross_ref("ref_value")?;
    Ok(())
}

fn rec_e70647c2(r: &mut NodeReader<'_>) -> Result<()> {
    r.content_header()?;
    r.skip_block_size();
    r.skip_block_size();
    r.skip_block_size();
    r.u16("u16_1")?;
    r.u16("u16_2")?;
    r.skip_block_size();
    r.u32_array("a0", 2)?;
    if r.version() > 2017 {
        r.skip(4);
    } else {
        r.skip_block_size();
        r.skip_block_size();
    }
    r.u32_array("a1", 2)?;
    r.f64_array("a2", 12)?;
    r.f64("f64_0")?;
    r.u32_array("a2", 2)?;
    r.u16_array("a3", 4)?;
    r.f64_array("a4", 3)?;
    Ok(())
}

fn rec_e70647c3(r: &mut NodeReader<'_>) -> Result<()> {
    r.content_header()?;
    r.skip_block_size();
    r.skip_block_size();
    r.skip_block_size();
    r.u32("u32_0")?;
    r.skip_block_size();
    r.u32_array("a0", 2)?;
    if r.version() > 2017 {
        r.skip(4);
    } else {
        r.skip_block_size();
        r.skip_block_size();
    }
    r.u32_array("a1", 2)?;
    r.f64_array("a2", 15)?;
    Ok(())
}

fn rec_e94fb6d9(r: &mut NodeReader<'_>) -> Result<()> {
    r.content_header()?;
    r.skip_block_size();
    r.i32("s32_0")?;
    r.skip_block_size();
    r.skip_block_size();
    r.cross_ref("ref_transformation1")?;
    r.cross_ref("ref_transformation2")?;
    r.skip_block_size();
    r.cross_ref("ref_transformation3")?;
    Ok(())
}

fn rec_eac2875a(r: &mut NodeReader<'_>) -> Result<()> {
    r.content_header()?;
    r.skip_block_size();
    r.skip_block_size();
    r.skip_block_size();
    r.i32("s32_0")?;
    r.skip_block_size();
    r.child_ref("ref_1")?;
    r.u32("u32_0")?;
    r.f64("f1")?;
    r.u16_array("a0", 3)?;
    if r.version() > 2016 {
        r.skip(1);
    } else {
        r.skip_block_size();
    }
    r.f64_array("a1", 26)?;
    r.u16_array("a2", 3)?;
    r.f64_array("a3", 6)?;
    r.child_ref("ref_2")?;
    r.u8("u8_0")?;
    r.f64_array("a4", 13)?;
    if r.version() > 2012 {
        r.skip(3 * 8);
    }
    Ok(())
}

fn rec_ee767654(r: &mut NodeReader<'_>) -> Result<()> {
    r.content_header()?;
    r.skip_block_size();
    r.skip_block_size();
    r.skip_block_size();
    r.u16("u16_1")?;
    r.u16("u16_2")?;
    r.skip_block_size();
    Ok(())
}

fn rec_ee792053(r: &mut NodeReader<'_>) -> Result<()> {
    r.content_header()?;
    r.skip_block_size();
    r.i32("s32_0")?;
    r.skip_block_size();
    r.skip_block_size();
    r.list2("lst0", Item::CrossRef)?;
    r.cross_ref("ref_1")?;
    r.skip_block_size();
    r.skip_block_size();
    r.cross_ref("ref_2")?;
    r.u32("u32_0")?;
    r.cross_ref("ref_4")?;
    Ok(())
}

fn rec_eef10748(r: &mut NodeReader<'_>) -> Result<()> {
    r.content_header()?;
    r.i32("s32_0")?;
    r.cross_ref("ref_1")?;
    r.cross_ref("ref_2")?;
    r.cross_ref("ref_3")?;
    r.u32_array("a0", 4)?;
    r.u8("u8_0")?;
    r.cross_ref("ref_4")?;
    r.u32_array("a1", 2)?;
    Ok(())
}

fn rec_efe47bb4(r: &mut NodeReader<'_>) -> Result<()> {
    r.content_header()?;
    r.skip_block_size();
    r.i32("s32_0")?;
    r.skip_block_size();
    r.skip_block_size();
    r.cross_ref("ref_1")?;
    r.skip_block_size();
    r.u8("u8_0")?;
    r.cross_ref("ref_2")?;
    Ok(())
}

fn rec_f0677096(r: &mut NodeReader<'_>) -> Result<()> {
    r.content_header()?;
    r.skip_block_size();
    r.skip_block_size();
    r.i32("s32_0")?;
    Ok(())
}

fn rec_f9884c43(r: &mut NodeReader<'_>) -> Result<()> {
    r.content_header()?;
    r.skip_block_size();
    r.i32("s32_0")?;
    r.skip_block_size();
    r.skip_block_size();
    r.skip_block_size();
    r.list2("lst0", Item::ChildRef)?;
    r.list2("lst1", Item::CrossRef)?;
    r.list2("lst2", Item::CrossRef)?;
    r.u32_array("a1", 2)?;
    r.skip_block_size();
    if r.version() > 2011 {
        r.cross_ref("ref_sketch")?;
    }
    r.cross_ref("ref_feature")?;
    Ok(())
}

fn rec_f9db9290(r: &mut NodeReader<'_>) -> Result<()> {
    r.content_header()?;
    r.skip_block_size();
    r.i32("s32_0")?;
    r.cross_ref("ref_1")?;
    r.u32("u32_1")?;
    r.cross_ref("ref_2")?;
    r.u32("u32_2")?;
    r.cross_ref("ref_3")?;
    r.u32("u32_3")?;
    r.u32("u32_0")?;
    Ok(())
}

fn rec_fb73fddf(r: &mut NodeReader<'_>) -> Result<()> {
    r.content_header()?;
    r.skip_block_size();
    r.i32("s32_0")?;
    r.skip_block_size();
    r.skip_block_size();
    r.cross_ref("ref_1")?;
    r.cross_ref("ref_2")?;
    r.u8("u8_0")?;
    r.cross_ref("ref_3")?;
    r.u8("u8_1")?;
    r.skip_block_size();
    r.u32("u32_0")?;
    Ok(())
}

fn rec_fc203f47(r: &mut NodeReader<'_>) -> Result<()> {
    r.content_header()?;
    r.skip_block_size();
    r.skip_block_size();
    r.child_ref("ref_wrapper")?;
    r.skip_block_size();
    r.u8("u8_0")?;
    r.skip_block_size();
    Ok(())
}

fn rec_feb0d977(r: &mut NodeReader<'_>) -> Result<()> {
    r.content_header()?;
    r.skip_block_size();
    r.i32("s32_0")?;
    r.skip_block_size();
    r.skip_block_size();
    r.cross_ref("ref_point2_d")?;
    r.cross_ref("ref_transformation")?;
    r.cross_ref("ref_point3_d")?;
    Ok(())
}

fn rec_ff15793d(r: &mut NodeReader<'_>) -> Result<()> {
    r.content_header()?;
    r.skip_block_size();
    r.i32("s32_0")?;
    r.skip_block_size();
    r.skip_block_size();
    r.cross_ref("ref_entity1")?;
    r.cross_ref("ref_transformation")?;
    r.skip_block_size();
    r.list2("lst0", Item::CrossRef)?;
    r.cross_ref("ref_entity2")?;
    r.skip_block_size();
    r.u16("u16_0")?;
    Ok(())
}

fn rec_ffd270b8(r: &mut NodeReader<'_>) -> Result<()> {
    r.content_header()?;
    r.skip_block_size();
    r.i32("s32_0")?;
    r.skip_block_size();
    r.skip_block_size();
    r.uuid("uid")?;
    Ok(())
}

pub(super) const DECODERS: &[(u32, Decoder)] = &[
    (0x029D_AD70, rec_029dad70),
    (0x033E_027B, content_only),
    (0x03AA_812C, rec_03aa812c),
    (0x04D0_26D2, rec_04d026d2),
    (0x06DC_EFA9, rec_06dcefa9),
    (0x0791_0C0A, rec_07910c0a),
    (0x0791_0C0B, rec_07910c0b),
    (0x0830_C1B0, rec_0830c1b0),
    (0x0942_9287, rec_09429287),
    (0x0942_9289, rec_09429289),
    (0x0942_928A, rec_09429287),
    (0x0B85_010C, rec_0b85010c),
    (0x0C12_CBF2, rec_0c12cbf2),
    (0x0C48_B860, rec_0c48b860),
    (0x0D0F_9548, rec_0d0f9548),
    (0x0D28_D8C0, rec_0d28d8c0),
    (0x0E64_A759, model_general_note),
    (0x0E68_70AE, solid_body),
    (0x13F4_E5A3, rec_13f4e5a3),
    (0x15A5_FF92, content_only),
    (0x16DE_1A75, content_only),
    (0x173E_51F4, rec_173e51f4),
    (0x17B3_E814, rec_17b3e814),
    (0x1895_1917, revolution_transformation),
    (0x1A1C_8265, rec_1a1c8265),
    (0x1A26_FF54, rec_1a26ff54),
    (0x1B48_AD11, rec_1b48ad11),
    (0x1EF2_8758, rec_1ef28758),
    (0x1FBB_3C01, string),
    (0x2097_6662, rec_20976662),
    (0x2148_C03C, rec_2148c03c),
    (0x23BA_0568, content_only),
    (0x255D_7ED7, derived_part),
    (0x2628_7E96, desel_table),
    (0x27E9_A56F, rec_27e9a56f),
    (0x2801_D6C6, rec_2801d6c6),
    (0x28BE_2D59, content_only),
    (0x28BE_2D5B, content_only),
    (0x2AF9_B62B, content_only),
    (0x2B24_1309, browser_folder),
    (0x2B48_CE72, rec_2b48ce72),
    (0x2B60_D993, content_only),
    (0x2CE8_6835, rec_2ce86835),
    (0x2D06_CAD3, rec_2d06cad3),
    (0x2D86_FC26, reference_edge_loop_id),
    (0x2E69_2E29, rec_2e692e29),
    (0x3170_E5B0, rec_0b85010c),
    (0x31F0_2EED, rec_31f02eed),
    (0x3398_07AC, rec_339807ac),
    (0x346F_5947, content_only),
    (0x3788_9260, content_only),
    (0x381A_F8C4, rec_07910c0a),
    (0x38C2_654E, rec_38c2654e),
    (0x38C7_4735, rec_38c74735),
    (0x3A08_3C7B, rec_3a083c7b),
    (0x3B13_313C, rec_3b13313c),
    (0x3C6C_1C6C, rec_31f02eed),
    (0x3C7F_67AA, body),
    (0x3D89_24FD, rec_3d8924fd),
    (0x3E71_0428, rec_3e710428),
    (0x3F36_349F, rec_3f36349f),
    (0x3F36_34A0, rec_3f3634a0),
    (0x402A_8F9F, rec_402a8f9f),
    (0x405A_B2C6, content_only),
    (0x4116_DA9E, rec_4116da9e),
    (0x424E_B7D7, rec_424eb7d7),
    (0x4580_CAF0, content_only),
    (0x46D5_00AA, rec_46d500aa),
    (0x4949_374A, fillet_constant_radius_edge_style),
    (0x4AC7_8A71, rec_4ac78a71),
    (0x4ACA_204D, user_coordinate_system),
    (0x4B31_50E8, rec_4b3150e8),
    (0x4E86_F047, rec_4e86f047),
    (0x4E86_F048, content_only),
    (0x4E86_F04A, content_only),
    (0x4E8F_7EE5, content_only),
    (0x4FD0_DC2A, rec_4fd0dc2a),
    (0x5026_78E7, rec_502678e7),
    (0x528A_064A, rec_528a064a),
    (0x5527_9EE0, rec_55279ee0),
    (0x572D_BC7C, content_only),
    (0x5784_32A6, rec_578432a6),
    (0x5838_B762, rec_5838b762),
    (0x5838_B763, rec_5838b763),
    (0x598A_ACFE, content_only),
    (0x5B70_8411, rec_5b708411),
    (0x5B8E_C461, rec_5b8ec461),
    (0x5CB0_11E2, rec_31f02eed),
    (0x5D80_7360, rec_5d807360),
    (0x5D8C_859D, rec_5d8c859d),
    (0x5E46_4B13, content_only),
    (0x6034_28AE, rec_603428ae),
    (0x6040_6697, rec_60406697),
    (0x6179_31B4, content_only),
    (0x618C_9E00, rec_618c9e00),
    (0x637B_1CC1, rec_31f02eed),
    (0x63D9_BDC4, content_only),
    (0x64DE_16F3, rec_64de16f3),
    (0x6566_C3E1, content_only),
    (0x6589_7E4A, content_only),
    (0x6A3E_EA31, rec_6a3eea31),
    (0x6FB0_D4A7, model_leader_note),
    (0x6FD9_928E, content_only),
    (0x7256_922C, rec_7256922c),
    (0x7312_DB35, content_only),
    (0x7325_290E, rec_7325290e),
    (0x7325_290F, rec_7325290f),
    (0x74E6_F48A, rec_74e6f48a),
    (0x76EC_185B, rec_76ec185b),
    (0x7787_52C6, rec_778752c6),
    (0x78F2_8827, value_u_int32),
    (0x79D4_DD11, rec_79d4dd11),
    (0x7C32_1197, content_only),
    (0x7C6D_7B13, rec_7c6d7b13),
    (0x7DA7_F733, rec_7da7f733),
    (0x7DAA_0032, rec_0b85010c),
    (0x7DF6_0748, content_only),
    (0x7F4A_3E30, rec_7f4a3e30),
    (0x7F7F_05AC, content_only),
    (0x81E9_4AB7, content_only),
    (0x831E_BCE9, rec_831ebce9),
    (0x8367_B125, parameter_text),
    (0x83D3_1932, rec_83d31932),
    (0x8617_3E3F, rec_86173e3f),
    (0x88FA_65CA, rec_88fa65ca),
    (0x8AFF_BE5A, rec_8affbe5a),
    (0x8B1E_9A97, rec_8b1e9a97),
    (0x8B2B_E62E, rec_8b2be62e),
    (0x8BE7_021F, content_only),
    (0x8D6E_F0BE, rec_8d6ef0be),
    (0x8EB1_9F04, rec_8eb19f04),
    (0x8EE9_01B9, content_only),
    (0x8FEC_335F, rec_8fec335f),
    (0x9087_4D18, transformation),
    (0x9087_4D40, rec_90874d40),
    (0x9087_4D47, surface_body),
    (0x9087_4D53, rec_90874d53),
    (0x9087_4D55, rec_90874d55),
    (0x9087_4D60, rec_90874d60),
    (0x9087_4D61, rec_90874d61),
    (0x9087_4D74, rec_90874d74),
    (0x91B9_9A2C, rec_91b99a2c),
    (0x9263_7D29, rec_92637d29),
    (0x9365_22B1, rec_7c6d7b13),
    (0x93C7_EE68, rec_93c7ee68),
    (0x9968_4A5A, rec_99684a5a),
    (0x99B9_38AE, rec_99b938ae),
    (0x9C8C_1297, rec_9c8c1297),
    (0x9DA7_36B0, rec_8b2be62e),
    (0x9E43_716B, content_only),
    (0x9ED6_024F, content_only),
    (0xA244_457B, rec_a244457b),
    (0xA31E_29E0, rec_a31e29e0),
    (0xA3B0_404C, rec_8b2be62e),
    (0xA477_243B, rec_a477243b),
    (0xA542_8F7A, rec_a5428f7a),
    (0xA597_7BAA, rec_a5977baa),
    (0xA611_8E11, rec_a6118e11),
    (0xA76B_22A0, rec_a76b22a0),
    (0xAA80_5A06, rec_aa805a06),
    (0xAAD6_4116, fillet_constant_radius_edge_set),
    (0xAD0D_42B2, rec_46d500aa),
    (0xAD41_6CEA, rec_ad416cea),
    (0xAE1C_96C9, content_only),
    (0xB10D_8B80, rec_b10d8b80),
    (0xB382_A87C, rec_b382a87c),
    (0xB3EA_A9EE, rec_b3eaa9ee),
    (0xB412_4F0C, content_only),
    (0xB581_35C4, rec_46d500aa),
    (0xB5D4_DEE6, rec_b5d4dee6),
    (0xB799_E9B2, fillet_variable_radius_edge_set),
    (0xB8CB_3560, rec_b8cb3560),
    (0xB8DB_EF70, rec_b8dbef70),
    (0xB8E1_9017, rec_8b2be62e),
    (0xBA6E_3112, fillet_variable_radius_edges),
    (0xBB1D_D5DF, r_dx_var),
    (0xBCBB_AD85, rec_09429289),
    (0xBE8C_EB3C, content_only),
    (0xBEE5_961F, content_only),
    (0xBF8B_8868, rec_bf8b8868),
    (0xC6E2_1E1A, rec_1b48ad11),
    (0xCA67_4C90, rec_ca674c90),
    (0xCAB7_E237, content_only),
    (0xCB6C_0A56, rec_09429289),
    (0xCCD8_7CBA, rec_ccd87cba),
    (0xCE52_DF40, direction),
    (0xCE7F_937A, rec_ce7f937a),
    (0xCEFD_3973, value_s_int32),
    (0xD2DA_2CF0, rec_aa805a06),
    (0xD3F7_1C7A, content_only),
    (0xD524_C30A, rec_d524c30a),
    (0xD617_32C1, rec_d61732c1),
    (0xD739_EDBB, rec_d739edbb),
    (0xD80C_E357, rec_d80ce357),
    (0xD83E_F271, rec_d83ef271),
    (0xD8A9_C970, rec_d8a9c970),
    (0xDA49_70B5, rec_da4970b5),
    (0xDC93_DB08, rec_dc93db08),
    (0xDE17_2BCF, model_tolerance_feature),
    (0xDFB2_586A, rec_dfb2586a),
    (0xE0E3_E202, rec_e0e3e202),
    (0xE0EA_12F2, rec_7c6d7b13),
    (0xE1D3_D023, rec_e1d3d023),
    (0xE1D8_C31B, rec_e1d8c31b),
    (0xE2CC_C3B7, rec_e2ccc3b7),
    (0xE524_B878, rec_e524b878),
    (0xE558_F428, rec_7c6d7b13),
    (0xE562_B07C, rec_e562b07c),
    (0xE706_47C2, rec_e70647c2),
    (0xE706_47C3, rec_e70647c3),
    (0xE94F_B6D9, rec_e94fb6d9),
    (0xE982_1C66, rec_3e710428),
    (0xEAC2_875A, rec_eac2875a),
    (0xEC7B_8A2B, content_only),
    (0xEE76_7654, rec_ee767654),
    (0xEE79_2053, rec_ee792053),
    (0xEEF1_0748, rec_eef10748),
    (0xEF82_79FB, rec_ee767654),
    (0xEFE4_7BB4, rec_efe47bb4),
    (0xF067_7096, rec_f0677096),
    (0xF3F4_35A1, content_only),
    (0xF988_4C43, rec_f9884c43),
    (0xF9DB_9290, rec_f9db9290),
    (0xFB73_FDDF, rec_fb73fddf),
    (0xFC20_3F47, rec_fc203f47),
    (0xFEB0_D977, rec_feb0d977),
    (0xFF15_793D, rec_ff15793d),
    (0xFFD2_70B8, rec_ffd270b8),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decoder::testing;

    #[test]
    fn test_table_is_sorted() {
        assert!(DECODERS.windows(2).all(|w| w[0].0 < w[1].0));
    }

    #[test]
    fn test_zero_records_frame() {
        assert!(testing::assert_zero_records_frame(DECODERS) > 0);
    }
}
