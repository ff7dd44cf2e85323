//! Records that start with the bare two-word header. Mostly internal
//! bookkeeping: transaction data, attribute sets, references to other
//! streams.

use crate::decoder::{Decoder, Item, NodeReader};
use crate::model::RefKind;
use crate::Result;

fn rec_01e0570c(r: &mut NodeReader<'_>) -> Result<()> {
    r.header0()?;
    r.cross_ref("ref_1")?;
    if r.version() > 2016 {
        r.skip(4);
    }
    r.u16("u16_0")?;
    r.u32_array("a0", 2)?;
    r.map6("lst0", Item::U32, Item::U32)?;
    Ok(())
}

fn rec_040d7fb2(r: &mut NodeReader<'_>) -> Result<()> {
    r.header0()?;
    r.child_ref("cld_0")?;
    r.u16_array("a0", 2)?;
    r.skip_block_size();
    r.list2("lst0", Item::ChildRef)?;
    Ok(())
}

fn rec_05520360(r: &mut NodeReader<'_>) -> Result<()> {
    r.header0()?;
    r.list2("lst0", Item::F64Triple)?;
    r.transformation()?;
    r.u8("u8_0")?;
    r.cross_ref("ref_parameter")?;
    r.skip_block_size();
    r.f64_array("a0", 3)?;
    Ok(())
}

fn header_only(r: &mut NodeReader<'_>) -> Result<()> {
    r.header0()?;
    Ok(())
}

fn rec_07ab2269(r: &mut NodeReader<'_>) -> Result<()> {
    r.header0()?;
    r.u32("u32_0")?;
    r.u32("u32_1")?;
    r.cross_ref("ref_surface_body")?;
    r.parent_ref()?;
    r.u32("u32_2")?;
    r.uuid("uid")?;
    Ok(())
}

fn rec_10587822(r: &mut NodeReader<'_>) -> Result<()> {
    r.header0()?;
    r.child_ref("cld_0")?;
    r.u32("u32_0")?;
    r.skip_block_size();
    r.cross_ref("ref_feature")?;
    r.parent_ref()?;
    r.child_ref("label")?;
    r.skip_block_size();
    r.ref_u32_list("a1")?;
    r.u16_array("a2", 3)?;
    r.skip_block_size();
    r.u8("u8_0")?;
    Ok(())
}

fn rec_182d1c40(r: &mut NodeReader<'_>) -> Result<()> {
    r.header0()?;
    r.u32_array("a0", 2)?;
    r.skip_block_size();
    r.list2("lst0", Item::ChildRef)?;
    Ok(())
}

fn rec_1dcbfba7(r: &mut NodeReader<'_>) -> Result<()> {
    r.header0()?;
    r.cross_ref("ref_1")?;
    r.cross_ref("ref_2")?;
    r.u8("u8_0")?;
    r.u16("u16_0")?;
    r.u32("u32_0")?;
    r.child_ref("ref_3")?;
    r.u8("u8_0")?;
    if r.version() > 2017 {
        r.skip(4);
    }
    r.ref_ref_list("lst0")?;
    Ok(())
}

fn rec_1e3a132c(r: &mut NodeReader<'_>) -> Result<()> {
    r.header0()?;
    r.u32_array("a0", 2)?;
    r.skip_block_size();
    r.list2("lst0", Item::ChildRef)?;
    r.u32("u32_0")?;
    Ok(())
}

fn rec_258ec6e1(r: &mut NodeReader<'_>) -> Result<()> {
    r.header0()?;
    r.u8("u8_0")?;
    r.cross_ref("ref_1")?;
    Ok(())
}

fn rec_26f369b7(r: &mut NodeReader<'_>) -> Result<()> {
    r.header0()?;
    r.child_ref("cld_0")?;
    r.u32("flags")?;
    r.skip_block_size();
    r.parent_ref()?;
    r.u32("u32_0")?;
    r.u32("u32_1")?;
    r.skip_block_size();
    r.child_ref("cld_1")?;
    r.u16("u16_0")?;
    r.skip_block_size();
    r.cross_ref("ref_1")?;
    r.u32_array("a1", 2)?;
    r.f64_array("a2", 2)?;
    r.skip_block_size();
    if r.version() > 2010 {
        r.skip(6 * 8);
    }
    Ok(())
}

fn rec_2f39a056(r: &mut NodeReader<'_>) -> Result<()> {
    r.header0()?;
    r.u32_array("a0", 2)?;
    r.skip_block_size();
    r.parent_ref()?;
    r.u32("u32_0")?;
    r.child_ref("ref_1")?;
    r.skip_block_size();
    r.u32("u32_1")?;
    r.u8("u8_0")?;
    Ok(())
}

fn rec_3689cc91(r: &mut NodeReader<'_>) -> Result<()> {
    r.header0()?;
    r.list2("lst0", Item::F64Triple)?;
    r.transformation()?;
    r.u8("u8_0")?;
    r.cross_ref("ref_parameter")?;
    r.skip_block_size();
    r.cross_ref("ref_parameter1")?;
    r.cross_ref("ref_parameter2")?;
    r.cross_ref("ref_parameter3")?;
    Ok(())
}

fn rec_39a41830(r: &mut NodeReader<'_>) -> Result<()> {
    r.header0()?;
    r.u32_array("a0", 2)?;
    r.skip_block_size();
    r.i32_array("a1", 2)?;
    r.skip_block_size();
    r.skip_block_size();
    r.i32("s32_0")?;
    r.skip_block_size();
    r.u32_array("a2", 13)?;
    r.f64_array("a3", 3)?;
    r.text16("txt0")?;
    r.u32_array("a4", 5)?;
    r.f64_array("a5", 6)?;
    r.u16_array("a6", 6)?;
    r.cross_ref("ref_parameter1")?;
    r.cross_ref("ref_parameter2")?;
    r.u32_array("a7", 5)?;
    r.skip_block_size();
    r.cross_ref("ref_sketch")?;
    Ok(())
}

fn rec_3a98dce3(r: &mut NodeReader<'_>) -> Result<()> {
    r.header0()?;
    r.child_ref("cld_0")?;
    r.u16_array("a0", 2)?;
    r.skip_block_size();
    r.cross_ref("ref_point")?;
    r.parent_ref()?;
    r.child_ref("ref_2")?;
    r.skip_block_size();
    r.cross_ref("ref_3")?;
    Ok(())
}

fn rec_43cab9d6(r: &mut NodeReader<'_>) -> Result<()> {
    r.header0()?;
    r.u32("u32_0")?;
    r.skip_block_size();
    r.skip_block_size();
    r.u32("u32_1")?;
    r.ref_u32_array_list("ls0", 3, RefKind::Child)?;
    Ok(())
}

fn rec_48cf47fa(r: &mut NodeReader<'_>) -> Result<()> {
    r.header0()?;
    r.u32_array("a0", 2)?;
    r.skip_block_size();
    r.u32_array("a1", 9)?;
    r.u8("u8_0")?;
    r.skip_block_size();
    r.cross_ref("ref_sketch")?;
    r.cross_ref("ref_line")?;
    r.cross_ref("ref_point1")?;
    r.cross_ref("ref_point2")?;
    Ok(())
}

fn rec_48cf71ca(r: &mut NodeReader<'_>) -> Result<()> {
    r.header0()?;
    r.u32_array("a0", 2)?;
    r.parent_ref()?;
    r.cross_ref("ref_2")?;
    r.child_ref("ref_3")?;
    r.cross_ref("ref_4")?;
    r.u16("u16_0")?;
    Ok(())
}

fn rec_52d04c41(r: &mut NodeReader<'_>) -> Result<()> {
    r.header0()?;
    r.u32("u32_0")?;
    r.u32("u32_1")?;
    r.skip_block_size();
    r.cross_ref("ref_root")?;
    r.parent_ref()?;
    r.child_ref("ref_1")?;
    r.skip_block_size();
    r.list8("lst0", Item::CrossRef)?;
    Ok(())
}

fn rec_534dd87e(r: &mut NodeReader<'_>) -> Result<()> {
    r.header0()?;
    r.cross_ref("ref_1")?;
    r.u32_array("a1", 3)?;
    Ok(())
}

fn rec_55180d7f(r: &mut NodeReader<'_>) -> Result<()> {
    r.header0()?;
    r.u32_array("a0", 2)?;
    r.parent_ref()?;
    r.u32("u32_0")?;
    r.child_ref("ref_1")?;
    r.cross_ref("ref_2")?;
    Ok(())
}

fn rec_553da303(r: &mut NodeReader<'_>) -> Result<()> {
    r.header0()?;
    r.cross_ref("ref_parameter")?;
    r.f64("x")?;
    Ok(())
}

fn rec_56a95f20(r: &mut NodeReader<'_>) -> Result<()> {
    r.header0()?;
    r.cross_ref("ref_1")?;
    r.skip_block_size();
    r.list2("lst0", Item::CrossRef)?;
    r.u16_array("a0", 14)?;
    r.skip_block_size();
    r.skip_block_size();
    r.list2("lst1", Item::U32Array(2))?;
    r.ref_u32_list("a1")?;
    r.skip_block_size();
    r.u32_array("a1", 4)?;
    Ok(())
}

fn rec_5f425538(r: &mut NodeReader<'_>) -> Result<()> {
    r.header0()?;
    r.u32_array("a0", 2)?;
    r.skip_block_size();
    r.parent_ref()?;
    r.u32_array("a1", 2)?;
    r.skip_block_size();
    r.child_ref("ref_1")?;
    Ok(())
}

fn rec_614a01f1(r: &mut NodeReader<'_>) -> Result<()> {
    r.header0()?;
    r.u16_array("a0", 4)?;
    r.parent_ref()?;
    r.u32("u32_0")?;
    r.child_ref("ref_1")?;
    r.u32_array("a1", 3)?;
    r.text8("txt_0")?;
    Ok(())
}

fn rec_61b56690(r: &mut NodeReader<'_>) -> Result<()> {
    r.header0()?;
    r.u32("u32_0")?;
    r.skip_block_size();
    r.skip_block_size();
    r.u32_array("a0", 4)?;
    Ok(())
}

fn rec_66398149(r: &mut NodeReader<'_>) -> Result<()> {
    r.header0()?;
    r.u32_array("a0", 2)?;
    r.skip_block_size();
    r.name16()?;
    r.text16("txt0")?;
    r.text16("txt1")?;
    r.u8("u32_0")?;
    Ok(())
}

fn rec_6c7d97a9(r: &mut NodeReader<'_>) -> Result<()> {
    r.header0()?;
    r.parent_ref()?;
    r.u16("u16_0")?;
    Ok(())
}

fn rec_75f64419(r: &mut NodeReader<'_>) -> Result<()> {
    r.header0()?;
    r.u32_array("a0", 2)?;
    r.skip_block_size();
    r.parent_ref()?;
    r.cross_ref("ref_1")?;
    r.child_ref("ref_2")?;
    r.skip_block_size();
    Ok(())
}

fn rec_774572d4(r: &mut NodeReader<'_>) -> Result<()> {
    r.header0()?;
    r.parent_ref()?;
    r.cross_ref("ref_1")?;
    r.u16("u16_0")?;
    Ok(())
}

fn rec_797737b1(r: &mut NodeReader<'_>) -> Result<()> {
    r.header0()?;
    r.list2("lst0", Item::F64Triple)?;
    r.transformation()?;
    r.u8("u8_0")?;
    r.cross_ref("ref_parameter")?;
    Ok(())
}

fn rec_80102ac1(r: &mut NodeReader<'_>) -> Result<()> {
    r.header0()?;
    r.parent_ref()?;
    r.cross_ref("ref_2")?;
    r.u8("u8_0")?;
    r.u16("u16_0")?;
    r.u32("u32_0")?;
    r.cross_ref("ref_3")?;
    r.u8("u8_1")?;
    if r.version() > 2017 {
        r.skip(4);
    }
    Ok(())
}

fn rec_845212c7(r: &mut NodeReader<'_>) -> Result<()> {
    r.header0()?;
    r.child_ref("ref_1")?;
    r.skip_block_size();
    r.skip_block_size();
    r.skip_block_size();
    r.cross_ref("ref_2")?;
    r.u32("u32_0")?;
    Ok(())
}

fn rec_86197ae1(r: &mut NodeReader<'_>) -> Result<()> {
    r.header0()?;
    r.cross_ref("ref_1")?;
    if r.version() > 2017 {
        r.skip(4);
    }
    r.u32("u32_0")?;
    r.cross_ref("ref_2")?;
    r.u8("u8_0")?;
    r.u16("u16_0")?;
    Ok(())
}

fn rec_8b3e95f7(r: &mut NodeReader<'_>) -> Result<()> {
    r.header0()?;
    r.u32("u32_0")?;
    r.name16()?;
    Ok(())
}

fn rec_8c702cd5(r: &mut NodeReader<'_>) -> Result<()> {
    r.header0()?;
    r.u32_array("a0", 2)?;
    r.skip_block_size();
    r.parent_ref()?;
    r.u32("u32_1")?;
    r.u32("u32_2")?;
    r.skip_block_size();
    r.child_ref("ref_1")?;
    r.u16("u16_0")?;
    r.skip_block_size();
    r.cross_ref("ref_2")?;
    r.f64_array("a1", 3)?;
    r.skip_block_size();
    if r.version() > 2010 {
        r.skip(48);
    }
    Ok(())
}

fn extrusion_surface(r: &mut NodeReader<'_>) -> Result<()> {
    r.set_type_name("ExtrusionSurface");
    r.header0()?;
    r.u32_array("a0", 2)?;
    r.skip_block_size();
    r.parent_ref()?;
    r.cross_ref("ref_1")?;
    r.child_ref("label")?;
    r.skip_block_size();
    r.u32("u32_0")?;
    Ok(())
}

fn rec_90874d13(r: &mut NodeReader<'_>) -> Result<()> {
    r.header0()?;
    r.u32_array("a0", 2)?;
    r.skip_block_size();
    r.u32_array("a1", 9)?;
    r.u8("u8_0")?;
    r.skip_block_size();
    r.cross_ref("ref_sketch")?;
    Ok(())
}

fn rec_90874d15(r: &mut NodeReader<'_>) -> Result<()> {
    r.header0()?;
    r.u16_array("a0", 4)?;
    r.skip_block_size();
    r.parent_ref()?;
    r.cross_ref("ref_1")?;
    r.child_ref("ref_2")?;
    r.skip_block_size();
    r.u32_array("a1", 3)?;
    Ok(())
}

fn rec_9271ab29(r: &mut NodeReader<'_>) -> Result<()> {
    r.header0()?;
    r.u32_array("a0", 2)?;
    r.skip_block_size();
    r.cross_ref("ref_1")?;
    r.u32_array("a1", 2)?;
    r.skip_block_size();
    r.u32("u32_0")?;
    r.u16("u16_0")?;
    r.name16()?;
    r.child_ref("ref_2")?;
    r.child_ref("ref_3")?;
    Ok(())
}

fn rec_938bed94(r: &mut NodeReader<'_>) -> Result<()> {
    r.header0()?;
    r.u32_array("a0", 2)?;
    r.parent_ref()?;
    r.cross_ref("ref_1")?;
    r.cross_ref("ref_2")?;
    r.u32("u32_0")?;
    r.text16("txt0")?;
    r.text16("txt1")?;
    r.text16("txt2")?;
    r.text16("txt3")?;
    r.text16("txt4")?;
    r.text16("txt5")?;
    r.list2("lst0", Item::CrossRef)?;
    r.u32("u32_1")?;
    Ok(())
}

fn rec_951388cf(r: &mut NodeReader<'_>) -> Result<()> {
    r.skip_block_size();
    r.skip_block_size();
    r.u16("u16_0")?;
    r.name16()?;
    r.u8("u8_0")?;
    r.u16_array("a0", 12)?;
    r.u8("u8_1")?;
    r.u16_array("a1", 9)?;
    Ok(())
}

fn rec_a3277869(r: &mut NodeReader<'_>) -> Result<()> {
    r.header0()?;
    r.child_ref("cld_0")?;
    r.u32("u32_0")?;
    r.skip_block_size();
    r.list2("lst0", Item::ChildRef)?;
    r.u32("u32_1")?;
    Ok(())
}

fn rec_a78639ee(r: &mut NodeReader<'_>) -> Result<()> {
    r.header0()?;
    r.list2("ls0", Item::F64Triple)?;
    r.transformation()?;
    r.u8("u8_0")?;
    r.cross_ref("ref_parameter")?;
    r.skip_block_size();
    r.cross_ref("ref_parameter1")?;
    r.cross_ref("ref_parameter2")?;
    r.cross_ref("ref_parameter3")?;
    r.cross_ref("ref_parameter4")?;
    r.u16_array("a0", 3)?;
    r.u8("u8_1")?;
    Ok(())
}

fn rec_a917f560(r: &mut NodeReader<'_>) -> Result<()> {
    r.header0()?;
    r.u16_array("a0", 2)?;
    r.u16_array("a1", 2)?;
    r.skip_block_size();
    r.cross_ref("ref_sketch")?;
    r.parent_ref()?;
    r.child_ref("cld_0")?;
    r.skip_block_size();
    r.child_ref("cld_1")?;
    Ok(())
}

fn rec_a9f6b271(r: &mut NodeReader<'_>) -> Result<()> {
    r.header0()?;
    r.child_ref("cld_0")?;
    r.u16_array("a0", 2)?;
    r.skip_block_size();
    r.cross_ref("ref_sketch")?;
    r.parent_ref()?;
    r.child_ref("cld_1")?;
    r.skip_block_size();
    r.cross_ref("ref_feature")?;
    Ok(())
}

fn rec_ae101f92(r: &mut NodeReader<'_>) -> Result<()> {
    r.header0()?;
    r.cross_ref("ref_1")?;
    r.u16_array("a0", 2)?;
    r.skip_block_size();
    r.u32_array("a1", 2)?;
    r.skip_block_size();
    r.skip_block_size();
    r.skip_block_size();
    r.u32("u32_0")?;
    r.skip_block_size();
    r.child_ref("ref_2")?;
    r.u32("u32_0")?;
    r.f64("a")?;
    r.u16_array("a2", 3)?;
    if r.version() > 2016 {
        r.skip(1);
    } else {
        r.skip_block_size();
    }
    r.f64_array("a3", 21)?;
    r.u32_array("a4", 3)?;
    r.f64_array("a5", 20)?;
    r.u8("u8_0")?;
    r.u16_array("a6", 6)?;
    r.f64_array("a7", 4)?;
    r.child_ref("ref_2")?;
    r.cross_ref("ref_3")?;
    r.f64_array("a8", 21)?;
    r.u16("u16_0")?;
    r.f64_array("a9", 45)?;
    Ok(())
}

fn rec_ae5e4082(r: &mut NodeReader<'_>) -> Result<()> {
    r.header0()?;
    r.u32("u32_0")?;
    r.u32("u32_1")?;
    r.skip_block_size();
    r.parent_ref()?;
    r.u32("u32_2")?;
    r.child_ref("label")?;
    r.skip_block_size();
    Ok(())
}

fn rec_b1cf069e(r: &mut NodeReader<'_>) -> Result<()> {
    r.header0()?;
    r.child_ref("ref_1")?;
    r.child_ref("ref_2")?;
    r.child_ref("ref_3")?;
    r.child_ref("ref_4")?;
    r.child_ref("ref_5")?;
    r.child_ref("ref_6")?;
    r.u8("u8_0")?;
    r.name16()?;
    r.u32("u32_0")?;
    r.f64("x")?;
    Ok(())
}

fn rec_b447e0dc(r: &mut NodeReader<'_>) -> Result<()> {
    r.header0()?;
    r.u32_array("a0", 2)?;
    r.skip_block_size();
    r.parent_ref()?;
    r.u32_array("a1", 2)?;
    r.skip_block_size();
    r.child_ref("ref_1")?;
    r.u16("u16_0")?;
    r.skip_block_size();
    r.cross_ref("ref_2")?;
    r.cross_ref("ref_3")?;
    r.cross_ref("ref_4")?;
    r.f64_array("a2", 2)?;
    if r.version() > 2010 {
        r.skip(9 * 8);
    } else {
        r.skip(4);
    }
    Ok(())
}

fn rec_b91fce52(r: &mut NodeReader<'_>) -> Result<()> {
    r.header0()?;
    r.cross_ref("ref_1")?;
    r.cross_ref("ref_2")?;
    r.cross_ref("ref_3")?;
    r.skip_block_size();
    Ok(())
}

fn rec_cb072b3b(r: &mut NodeReader<'_>) -> Result<()> {
    r.header0()?;
    r.u32_array("a0", 2)?;
    r.skip_block_size();
    r.list2("lst0", Item::U32)?;
    r.f64_array("a1", 11)?;
    r.u32("u32_0")?;
    r.u8("u8_0")?;
    if r.version() > 2014 {
        r.skip(8 * 8);
    }
    Ok(())
}

fn rec_cb370222(r: &mut NodeReader<'_>) -> Result<()> {
    r.header0()?;
    r.u32("u32_0")?;
    r.child_ref("ref_1")?;
    r.cross_ref("ref_2")?;
    Ok(())
}

fn acis_entity_wrapper(r: &mut NodeReader<'_>) -> Result<()> {
    r.set_type_name("AcisEntityWrapper");
    r.header0()?;
    r.u32("u32_0")?;
    r.u8("u8_0")?;
    r.cross_ref("ref_1")?;
    r.u32("u32_1")?;
    r.u32("u32_2")?;
    Ok(())
}

fn rec_d589d818(r: &mut NodeReader<'_>) -> Result<()> {
    r.header0()?;
    r.cross_ref("ref_1")?;
    if r.version() > 2017 {
        r.skip(4);
    }
    r.cross_ref("ref_2")?;
    r.cross_ref("ref_3")?;
    r.u8("u8_0")?;
    Ok(())
}

fn rec_d94f1914(r: &mut NodeReader<'_>) -> Result<()> {
    r.header0()?;
    r.u32_array("a0", 2)?;
    r.skip_block_size();
    r.cross_ref("ref_1")?;
    r.cross_ref("ref_2")?;
    r.child_ref("ref_3")?;
    r.skip_block_size();
    r.cross_ref("ref_4")?;
    r.u32("u32_0")?;
    r.cross_ref("ref_5")?;
    r.u32("u32_1")?;
    Ok(())
}

fn rec_d95b951a(r: &mut NodeReader<'_>) -> Result<()> {
    r.header0()?;
    r.child_ref("cld_0")?;
    r.u32("u32_0")?;
    r.skip_block_size();
    r.list2("lst0", Item::ChildRef)?;
    r.u16("decimals_length")?;
    r.u16("decimals_angle")?;
    r.u16("u16_0")?;
    Ok(())
}

fn rec_da2c89c5(r: &mut NodeReader<'_>) -> Result<()> {
    r.header0()?;
    r.cross_ref("ref_1")?;
    if r.version() > 2016 {
        r.skip(4);
    }
    r.u16("u16_0")?;
    Ok(())
}

fn rec_dbdd00e3(r: &mut NodeReader<'_>) -> Result<()> {
    r.header0()?;
    r.u32("u32_0")?;
    r.skip_block_size();
    r.skip_block_size();
    r.u32("num_entities")?;
    r.cross_ref("ref_sketch")?;
    r.u32("u32_2")?;
    Ok(())
}

fn rec_e192fa73(r: &mut NodeReader<'_>) -> Result<()> {
    r.header0()?;
    r.u32_array("a0", 2)?;
    r.skip_block_size();
    r.u32("u32_0")?;
    r.name16()?;
    r.text16("txt1")?;
    r.list2("parameters", Item::CrossRef)?;
    Ok(())
}

fn rec_e28d3b3f(r: &mut NodeReader<'_>) -> Result<()> {
    r.header0()?;
    r.u32_array("a0", 3)?;
    Ok(())
}

fn rec_f3fc69c6(r: &mut NodeReader<'_>) -> Result<()> {
    r.header0()?;
    r.child_ref("cld_0")?;
    r.u32("flags")?;
    r.skip_block_size();
    r.cross_ref("ref_1")?;
    r.parent_ref()?;
    r.child_ref("ref_2")?;
    r.skip_block_size();
    r.u16_array("a0", 4)?;
    Ok(())
}

fn rec_f5e51520(r: &mut NodeReader<'_>) -> Result<()> {
    r.header0()?;
    r.u32("u32_0")?;
    r.skip_block_size();
    r.skip_block_size();
    r.cross_ref("ref_1")?;
    r.u32("u32_0")?;
    Ok(())
}

fn rec_fd590aa5(r: &mut NodeReader<'_>) -> Result<()> {
    r.header0()?;
    r.u32_array("a0", 2)?;
    r.skip_block_size();
    r.cross_ref("ref_body")?;
    r.parent_ref()?;
    r.child_ref("ref_3")?;
    r.skip_block_size();
    r.cross_ref("ref_4")?;
    Ok(())
}

pub(super) const DECODERS: &[(u32, Decoder)] = &[
    (0x01E0_570C, rec_01e0570c),
    (0x040D_7FB2, rec_040d7fb2),
    (0x0552_0360, rec_05520360),
    (0x077D_9583, header_only),
    (0x07AB_2269, rec_07ab2269),
    (0x0A57_6361, header_only),
    (0x1058_7822, rec_10587822),
    (0x1178_06EE, header_only),
    (0x182D_1C40, rec_182d1c40),
    (0x1DCB_FBA7, rec_1dcbfba7),
    (0x1E3A_132C, rec_1e3a132c),
    (0x216B_3A55, header_only),
    (0x2233_60AD, header_only),
    (0x258E_C6E1, rec_258ec6e1),
    (0x26F3_69B7, rec_26f369b7),
    (0x2F39_A056, rec_2f39a056),
    (0x31C9_8504, header_only),
    (0x3689_CC91, rec_3689cc91),
    (0x375E_AEE5, header_only),
    (0x39A4_1830, rec_39a41830),
    (0x3A98_DCE3, rec_3a98dce3),
    (0x3E86_3C3E, header_only),
    (0x43CA_B9D6, rec_43cab9d6),
    (0x48C5_F41A, header_only),
    (0x48CF_47FA, rec_48cf47fa),
    (0x48CF_71CA, rec_48cf71ca),
    (0x52D0_4C41, rec_52d04c41),
    (0x534D_D87E, rec_534dd87e),
    (0x5518_0D7F, rec_55180d7f),
    (0x553D_A303, rec_553da303),
    (0x56A9_5F20, rec_56a95f20),
    (0x5A6B_6124, header_only),
    (0x5B10_BF5B, header_only),
    (0x5F42_5538, rec_5f425538),
    (0x614A_01F1, rec_614a01f1),
    (0x61B5_6690, rec_61b56690),
    (0x6639_8149, rec_66398149),
    (0x6C5C_D68F, header_only),
    (0x6C5C_D690, header_only),
    (0x6C7D_97A9, rec_6c7d97a9),
    (0x723B_A8B3, header_only),
    (0x75F6_4419, rec_75f64419),
    (0x7745_72D4, rec_774572d4),
    (0x7977_37B1, rec_797737b1),
    (0x8010_2AC1, rec_80102ac1),
    (0x8398_E8EC, header_only),
    (0x8452_12C7, rec_845212c7),
    (0x8619_7AE1, rec_86197ae1),
    (0x889E_21C1, header_only),
    (0x8B3E_95F7, rec_8b3e95f7),
    (0x8C70_2CD5, rec_8c702cd5),
    (0x8DFF_E0CD, header_only),
    (0x903F_453F, extrusion_surface),
    (0x9087_4D13, rec_90874d13),
    (0x9087_4D15, rec_90874d15),
    (0x9271_AB29, rec_9271ab29),
    (0x938B_ED94, rec_938bed94),
    (0x9513_88CF, rec_951388cf),
    (0x9574_000C, header_only),
    (0x9B04_3321, header_only),
    (0x9DC2_A241, header_only),
    (0xA327_7869, rec_a3277869),
    (0xA786_39EE, rec_a78639ee),
    (0xA917_F560, rec_a917f560),
    (0xA99F_1B26, header_only),
    (0xA9F6_B271, rec_a9f6b271),
    (0xAE10_1F92, rec_ae101f92),
    (0xAE5E_4082, rec_ae5e4082),
    (0xB1CF_069E, rec_b1cf069e),
    (0xB447_E0DC, rec_b447e0dc),
    (0xB835_A483, rec_182d1c40),
    (0xB91F_CE52, rec_b91fce52),
    (0xBDE1_3180, header_only),
    (0xCB07_2B3B, rec_cb072b3b),
    (0xCB37_0222, rec_cb370222),
    (0xCC0F_7521, acis_entity_wrapper),
    (0xCCE2_64C4, header_only),
    (0xD589_D818, rec_d589d818),
    (0xD77C_C069, header_only),
    (0xD77C_C06A, header_only),
    (0xD77C_C06B, header_only),
    (0xD94F_1914, rec_d94f1914),
    (0xD95B_951A, rec_d95b951a),
    (0xDA2C_89C5, rec_da2c89c5),
    (0xDBDD_00E3, rec_dbdd00e3),
    (0xDDCF_0E1C, header_only),
    (0xDF3B_2C5B, rec_8b3e95f7),
    (0xE192_FA73, rec_e192fa73),
    (0xE273_976D, header_only),
    (0xE28D_3B3F, rec_e28d3b3f),
    (0xF10C_26A4, header_only),
    (0xF3FC_69C6, rec_f3fc69c6),
    (0xF5E5_1520, rec_f5e51520),
    (0xFD59_0AA5, rec_fd590aa5),
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
