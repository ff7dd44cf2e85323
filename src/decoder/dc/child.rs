//! Records built on the child header or the list-plus-words header.

use crate::decoder::{Decoder, Item, NodeReader};
use crate::Result;

fn rec_00e41c0e(r: &mut NodeReader<'_>) -> Result<()> {
    r.list2_u32_header()?;
    r.cross_ref("ref_1")?;
    r.u32("u32_1")?;
    r.cross_ref("ref_2")?;
    r.u32("u32_2")?;
    r.u8("u8_0")?;
    r.list2("lst1", Item::U32Array(2))?;
    r.ref_u32_list("lst2")?;
    r.u8("u8_1")?;
    r.skip_block_size();
    r.list2("lst1", Item::U32Array(2))?;
    r.cross_ref("ref_3")?;
    r.u32("u32_3")?;
    r.skip_block_size();
    r.u32_array("a1", 3)?;
    r.u8("u8_2")?;
    r.u32_array("a2", 5)?;
    r.f64_array("a3", 3)?;
    Ok(())
}

fn rec_025c7cd8(r: &mut NodeReader<'_>) -> Result<()> {
    r.child_header1()?;
    r.skip_block_size();
    r.uuid("uid")?;
    r.i32_array("a1", 3)?;
    Ok(())
}

fn rec_03d6552d(r: &mut NodeReader<'_>) -> Result<()> {
    r.child_header1()?;
    r.skip_block_size();
    r.cross_ref("ref_entity")?;
    r.u8("u8_0")?;
    Ok(())
}

fn rec_05c619b6(r: &mut NodeReader<'_>) -> Result<()> {
    r.list2_u32_header()?;
    r.skip_block_size();
    r.u8("u8_0")?;
    r.ref_u32_list("a1")?;
    r.cross_ref("ref_1")?;
    r.u32("u32_1")?;
    r.ref_u32_u8_list("a2")?;
    r.ref_u32_d64_list("a3")?;
    r.ref_u32_d64_list("a4")?;
    if r.version() > 2010 {
        r.skip(16);
    }
    Ok(())
}

fn rec_0811c56e(r: &mut NodeReader<'_>) -> Result<()> {
    r.list2_u32_header()?;
    r.skip_block_size();
    r.list2("lst1", Item::U32Array(2))?;
    r.u32("u32_1")?;
    r.skip_block_size();
    r.u32("u32_2")?;
    r.u8("u8_0")?;
    r.u32_array("a1", 4)?;
    if r.version() > 2011 {
        r.skip(1);
    }
    Ok(())
}

fn rec_0a3ba89c(r: &mut NodeReader<'_>) -> Result<()> {
    r.child_header1()?;
    r.skip_block_size();
    r.cross_ref("ref_3")?;
    Ok(())
}

fn rec_0bdc96e0(r: &mut NodeReader<'_>) -> Result<()> {
    r.list2_u32_header()?;
    r.skip_block_size();
    r.list2("lst1", Item::U32Array(2))?;
    r.ref_u32_list("lst2")?;
    r.skip_block_size();
    r.u32("u32_3")?;
    Ok(())
}

fn rec_10dc334c(r: &mut NodeReader<'_>) -> Result<()> {
    r.child_header1()?;
    r.skip_block_size();
    r.u32("u32_0")?;
    Ok(())
}

fn rec_197f7dbe(r: &mut NodeReader<'_>) -> Result<()> {
    r.list2_u32_header()?;
    r.skip_block_size();
    r.list2("lst0", Item::U32Array(2))?;
    r.skip_block_size();
    r.u32_array("u32_1", 4)?;
    Ok(())
}

fn rec_22178c64(r: &mut NodeReader<'_>) -> Result<()> {
    r.list2_u32_header()?;
    r.cross_ref("ref_1")?;
    r.u32("u32_1")?;
    r.cross_ref("ref_2")?;
    r.u32("u32_2")?;
    r.u8("u8_0")?;
    r.list2("lst1", Item::U32Array(2))?;
    r.ref_u32_u8_list("lst2")?;
    r.skip_block_size();
    r.list2("lst2", Item::U32Array(2))?;
    r.cross_ref("ref_3")?;
    r.u32("u32_3")?;
    r.skip_block_size();
    r.list2("lst2", Item::U32Array(5))?;
    Ok(())
}

fn rec_2a636e60(r: &mut NodeReader<'_>) -> Result<()> {
    r.child_header1()?;
    r.skip_block_size();
    r.u8("u8_0")?;
    r.u16("u16_0")?;
    Ok(())
}

fn rec_31d7a200(r: &mut NodeReader<'_>) -> Result<()> {
    r.list2_u32_header()?;
    r.skip_block_size();
    r.list2("lst0", Item::U32Array(2))?;
    r.u32("u32_1")?;
    r.skip_block_size();
    r.u32("u32_2")?;
    r.f64("f64_0")?;
    r.u8("u8_0")?;
    r.u32("u32_3")?;
    Ok(())
}

fn rec_357d669c(r: &mut NodeReader<'_>) -> Result<()> {
    r.list2_u32_header()?;
    r.skip_block_size();
    r.list2("lst1", Item::U32Array(2))?;
    r.ref_u32_list("a1")?;
    r.skip_block_size();
    r.list2("lst2", Item::U32Array(5))?;
    Ok(())
}

fn rec_39ad9666(r: &mut NodeReader<'_>) -> Result<()> {
    r.child_header1()?;
    r.skip_block_size();
    Ok(())
}

fn rec_40236c89(r: &mut NodeReader<'_>) -> Result<()> {
    r.list2_u32_header()?;
    r.cross_ref("ref_1")?;
    r.u32("u32_1")?;
    r.cross_ref("ref_2")?;
    r.u32("u32_2")?;
    r.u8("u8_0")?;
    r.list2("lst0", Item::U32Array(2))?;
    r.ref_u32_u8_list("lst2")?;
    r.skip_block_size();
    r.list2("lst1", Item::U32Array(2))?;
    r.cross_ref("ref_3")?;
    r.u32("u32_3")?;
    r.skip_block_size();
    r.u32_array("a1", 2)?;
    r.u8("u8_1")?;
    r.u32_array("a2", 3)?;
    Ok(())
}

fn rec_436d821a(r: &mut NodeReader<'_>) -> Result<()> {
    r.list2_u32_header()?;
    r.skip_block_size();
    r.list2("lst1", Item::U32Array(2))?;
    r.skip_block_size();
    r.list2("lst1", Item::U32Array(2))?;
    r.u8("u8_0")?;
    r.u16_array("a1", 5)?;
    r.u8("u8_1")?;
    Ok(())
}

fn rec_45741faf(r: &mut NodeReader<'_>) -> Result<()> {
    r.list2_u32_header()?;
    r.skip_block_size();
    r.list2("lst0", Item::U32Array(2))?;
    r.skip_block_size();
    r.u32("u32_1")?;
    Ok(())
}

fn rec_46407f70(r: &mut NodeReader<'_>) -> Result<()> {
    r.child_header1()?;
    r.skip_block_size();
    r.name16()?;
    r.text16("txt0")?;
    r.text16("txt1")?;
    r.u8("u8_0")?;
    r.u32_array("a1", 2)?;
    Ok(())
}

fn rec_475e7861(r: &mut NodeReader<'_>) -> Result<()> {
    r.child_header1()?;
    r.skip_block_size();
    r.child_ref("ref_4")?;
    r.u16("u16_0")?;
    r.skip_block_size();
    r.u16("u16_1")?;
    r.cross_ref("ref_5")?;
    Ok(())
}

fn rec_488c5309(r: &mut NodeReader<'_>) -> Result<()> {
    r.list2_u32_header()?;
    r.cross_ref("ref_1")?;
    r.u32("u32_1")?;
    r.cross_ref("ref_2")?;
    r.u32("u32_2")?;
    r.u8("u8_0")?;
    r.list2("lst0", Item::U32)?;
    r.u32("u32_3")?;
    r.skip_block_size();
    r.list2("lst0", Item::U32Array(2))?;
    r.cross_ref("ref_4")?;
    r.u32("u32_4")?;
    r.skip_block_size();
    r.u8("u8_1")?;
    r.u32_array("a1", 4)?;
    Ok(())
}

fn rec_537799e0(r: &mut NodeReader<'_>) -> Result<()> {
    r.list2_u32_header()?;
    r.skip_block_size();
    r.list2("lst1", Item::U32Array(2))?;
    r.u32("u32_1")?;
    r.skip_block_size();
    r.u32("u32_2")?;
    r.f64("f64_0")?;
    r.u32_array("a1", 3)?;
    Ok(())
}

fn rec_54829655(r: &mut NodeReader<'_>) -> Result<()> {
    r.child_header1()?;
    r.skip_block_size();
    r.u32("u32_4")?;
    Ok(())
}

fn rec_56970dfa(r: &mut NodeReader<'_>) -> Result<()> {
    r.child_header1()?;
    r.skip_block_size();
    r.u32("u32_0")?;
    r.u8("u8_0")?;
    Ok(())
}

fn rec_606d9ab1(r: &mut NodeReader<'_>) -> Result<()> {
    r.list2_u32_header()?;
    r.cross_ref("ref_1")?;
    r.u32("u32_1")?;
    r.cross_ref("ref_2")?;
    r.u32("u32_2")?;
    r.u8("u8_0")?;
    r.list2("lst0", Item::U32Array(2))?;
    r.ref_u32_u8_list("lst1")?;
    r.skip_block_size();
    r.list2("lst2", Item::U32Array(2))?;
    r.cross_ref("ref_1")?;
    r.u32("u32_1")?;
    r.skip_block_size();
    r.u32_array("a1", 4)?;
    Ok(())
}

fn rec_6250d222(r: &mut NodeReader<'_>) -> Result<()> {
    r.list2_u32_header()?;
    r.skip_block_size();
    r.list2("lst0", Item::U32Array(2))?;
    r.u32("u32_1")?;
    r.skip_block_size();
    r.u32("u32_2")?;
    Ok(())
}

fn rec_6e2bcb60(r: &mut NodeReader<'_>) -> Result<()> {
    r.list2_u32_header()?;
    r.cross_ref("ref_1")?;
    r.u32("u32_1")?;
    r.cross_ref("ref_2")?;
    r.u32("u32_2")?;
    r.u8("u8_0")?;
    r.list2("lst1", Item::U32Array(2))?;
    r.ref_u32_u8_list("lst2")?;
    r.skip_block_size();
    r.list2("lst1", Item::U32Array(2))?;
    r.cross_ref("ref_3")?;
    r.u32("u32_3")?;
    r.skip_block_size();
    r.u32("u32_4")?;
    r.u32("u32_5")?;
    r.f64("f64_0")?;
    r.u32("u32_2")?;
    Ok(())
}

fn rec_7c39dc59(r: &mut NodeReader<'_>) -> Result<()> {
    r.child_header1()?;
    r.cross_ref("ref_1")?;
    Ok(())
}

fn rec_7e36de81(r: &mut NodeReader<'_>) -> Result<()> {
    r.child_header1()?;
    r.skip_block_size();
    r.u32("u32_0")?;
    r.list2("lst0", Item::Text16)?;
    Ok(())
}

fn rec_871d6f71(r: &mut NodeReader<'_>) -> Result<()> {
    r.child_header1()?;
    r.skip_block_size();
    r.cross_ref("ref_3")?;
    r.f32_array("a1", 3)?;
    r.u16("u16_0")?;
    r.f64_array("a2", 4)?;
    r.u8("u8_0")?;
    Ok(())
}

fn rec_896a9790(r: &mut NodeReader<'_>) -> Result<()> {
    r.list2_u32_header()?;
    r.list2("lst0", Item::U32Array(2))?;
    r.ref_u32_u8_list("lst2")?;
    Ok(())
}

fn rec_90f4820a(r: &mut NodeReader<'_>) -> Result<()> {
    r.list2_u32_header()?;
    r.skip_block_size();
    r.list2("lst1", Item::U32Array(2))?;
    r.skip_block_size();
    r.u32_array("a1", 3)?;
    Ok(())
}

fn rec_a040d1b1(r: &mut NodeReader<'_>) -> Result<()> {
    r.list2_u32_header()?;
    r.skip_block_size();
    r.list2("lst1", Item::U32Array(2))?;
    r.skip_block_size();
    r.u32_array("a1", 3)?;
    r.u8("u8_0")?;
    r.u32_array("a2", 5)?;
    r.f64_array("a3", 3)?;
    Ok(())
}

fn rec_a4087e1f(r: &mut NodeReader<'_>) -> Result<()> {
    r.child_header1()?;
    r.skip_block_size();
    r.name16()?;
    r.text16("txt_0")?;
    r.text16("txt_1")?;
    r.text16("txt_2")?;
    r.u32("u32_0")?;
    r.f64("x")?;
    r.text16("txt_3")?;
    r.u32("u32_1")?;
    r.skip_block_size();
    r.text16("txt_4")?;
    r.text16("txt_5")?;
    r.text16("txt_6")?;
    r.text16("txt_7")?;
    r.text16("txt_8")?;
    r.text16("txt_9")?;
    r.text16("txt_a")?;
    r.text16("txt_b")?;
    r.text16("txt_c")?;
    Ok(())
}

fn rec_ae0e267a(r: &mut NodeReader<'_>) -> Result<()> {
    r.list2_u32_header()?;
    r.skip_block_size();
    r.list2("lst0", Item::U32Array(2))?;
    r.u32("u32_1")?;
    r.skip_block_size();
    r.u32("u32_2")?;
    r.u16("u16_0")?;
    Ok(())
}

fn rec_b269acef(r: &mut NodeReader<'_>) -> Result<()> {
    r.child_header1()?;
    r.name16()?;
    r.text16("txt0")?;
    r.text16("txt1")?;
    r.u32_array("a0", 5)?;
    r.text16("txt2")?;
    r.text16("txt3")?;
    r.text16("txt4")?;
    r.text16("txt5")?;
    r.text16("txt6")?;
    r.text16("txt7")?;
    r.text16("txt8")?;
    r.text16("txt9")?;
    r.text16("txt10")?;
    r.text16("txt11")?;
    r.text16("txt12")?;
    r.text16("txt13")?;
    r.text16("txt14")?;
    r.text16("txt15")?;
    r.text16("txt16")?;
    r.text16("txt17")?;
    r.text16("txt18")?;
    r.text16("txt19")?;
    Ok(())
}

fn rec_b292f94a(r: &mut NodeReader<'_>) -> Result<()> {
    r.list2_u32_header()?;
    r.skip_block_size();
    r.list2("lst0", Item::U32Array(2))?;
    r.ref_u32_u8_list("lst2")?;
    r.skip_block_size();
    r.u32_array("a1", 2)?;
    Ok(())
}

fn rec_b59f6734(r: &mut NodeReader<'_>) -> Result<()> {
    r.child_header1()?;
    r.u16_array("a0", 5)?;
    Ok(())
}

fn rec_b6c5116b(r: &mut NodeReader<'_>) -> Result<()> {
    r.child_header1()?;
    r.u8("u8_0")?;
    Ok(())
}

fn rec_bf32e0a6(r: &mut NodeReader<'_>) -> Result<()> {
    r.list2_u32_header()?;
    r.cross_ref("ref_1")?;
    r.u32("u32_1")?;
    r.cross_ref("ref_2")?;
    r.u32("u32_2")?;
    r.u8("u8_2")?;
    r.list2("lst1", Item::U32Array(2))?;
    r.ref_u32_u8_list("lst2")?;
    r.skip_block_size();
    r.ref_u32_list("lst3")?;
    Ok(())
}

fn rec_bfd09c43(r: &mut NodeReader<'_>) -> Result<()> {
    r.child_header1()?;
    r.skip_block_size();
    r.cross_ref("ref_2")?;
    r.f64_array("a1", 4)?;
    r.u32("u32_0")?;
    Ok(())
}

fn rec_c89ef3c0(r: &mut NodeReader<'_>) -> Result<()> {
    r.child_header1()?;
    r.skip_block_size();
    r.skip_block_size();
    r.u32("u32_0")?;
    r.f64_array("a1", 2)?;
    Ok(())
}

fn rec_d5f19e40(r: &mut NodeReader<'_>) -> Result<()> {
    r.child_header1()?;
    r.skip_block_size();
    r.skip_block_size();
    r.u32("u32_0")?;
    r.f64("x")?;
    r.f64("y")?;
    r.f64("dir_x")?;
    r.f64("dir_y")?;
    Ok(())
}

fn rec_d5f19e41(r: &mut NodeReader<'_>) -> Result<()> {
    r.child_header1()?;
    r.skip_block_size();
    r.skip_block_size();
    r.u32("u32_0")?;
    r.f64_array("a0", 3)?;
    Ok(())
}

fn rec_d5f19e42(r: &mut NodeReader<'_>) -> Result<()> {
    r.child_header1()?;
    r.skip_block_size();
    r.skip_block_size();
    r.u32("u32_0")?;
    r.f64_array("a0", 6)?;
    Ok(())
}

fn rec_d7be5663(r: &mut NodeReader<'_>) -> Result<()> {
    r.list2_u32_header()?;
    r.skip_block_size();
    r.list2("lst1", Item::U32Array(2))?;
    r.skip_block_size();
    r.u32_array("a1", 2)?;
    r.f64("f64_0")?;
    r.u32("u32_0")?;
    Ok(())
}

fn rec_d7f4c16f(r: &mut NodeReader<'_>) -> Result<()> {
    r.child_header1()?;
    r.u8("u8_0")?;
    r.name16()?;
    r.u16_array("a0", 5)?;
    r.u8("u8_1")?;
    Ok(())
}

fn rec_dbd67510(r: &mut NodeReader<'_>) -> Result<()> {
    r.list2_u32_header()?;
    r.skip_block_size();
    r.list2("lst0", Item::U32Array(2))?;
    r.skip_block_size();
    r.u8("u8_1")?;
    r.u32_array("a1", 5)?;
    Ok(())
}

fn rec_eee03af5(r: &mut NodeReader<'_>) -> Result<()> {
    r.child_header1()?;
    r.skip_block_size();
    r.child_ref("cld_1")?;
    r.u16("u16_0")?;
    r.skip_block_size();
    r.cross_ref("ref_entity1")?;
    r.cross_ref("ref_entity2")?;
    r.f64_array("a2", 2)?;
    r.u32("u32_0")?;
    r.skip_block_size();
    if r.version() > 2010 {
        r.f64_array("a3", 8)?;
    }
    Ok(())
}

fn rec_f4360d18(r: &mut NodeReader<'_>) -> Result<()> {
    r.list2_u32_header()?;
    r.u32_array("a1", 4)?;
    r.u8("u8_1")?;
    r.list2("lst1", Item::U32Array(2))?;
    r.ref_u32_u8_list("lst2")?;
    r.skip_block_size();
    r.list2("lst2", Item::U32Array(2))?;
    r.u32_array("a3", 2)?;
    r.skip_block_size();
    r.u32_array("a3", 3)?;
    Ok(())
}

fn rec_f7693d55(r: &mut NodeReader<'_>) -> Result<()> {
    r.list2_u32_header()?;
    r.cross_ref("ref_1")?;
    r.u32("u32_1")?;
    r.cross_ref("ref_2")?;
    r.u32("u32_2")?;
    r.u8("u8_1")?;
    r.list2("lst1", Item::U32Array(2))?;
    r.ref_u32_u8_list("lst2")?;
    r.skip_block_size();
    r.list2("lst2", Item::U32Array(2))?;
    r.cross_ref("ref_3")?;
    r.u32("u32_3")?;
    r.skip_block_size();
    r.u32("u32_4")?;
    Ok(())
}

fn rec_fa6e9782(r: &mut NodeReader<'_>) -> Result<()> {
    r.child_header1()?;
    r.skip_block_size();
    r.skip_block_size();
    r.u32("u32_1")?;
    r.f64_array("p1", 2)?;
    r.f64_array("p2", 2)?;
    Ok(())
}

fn rec_fd7702b0(r: &mut NodeReader<'_>) -> Result<()> {
    r.child_header1()?;
    r.skip_block_size();
    r.skip_block_size();
    r.u32_array("a1", 9)?;
    Ok(())
}

fn rec_ff46726c(r: &mut NodeReader<'_>) -> Result<()> {
    r.list2_u32_header()?;
    Ok(())
}

pub(super) const DECODERS: &[(u32, Decoder)] = &[
    (0x00E4_1C0E, rec_00e41c0e),
    (0x025C_7CD8, rec_025c7cd8),
    (0x03D6_552D, rec_03d6552d),
    (0x05C6_19B6, rec_05c619b6),
    (0x0811_C56E, rec_0811c56e),
    (0x0A3B_A89C, rec_0a3ba89c),
    (0x0BDC_96E0, rec_0bdc96e0),
    (0x10DC_334C, rec_10dc334c),
    (0x197F_7DBE, rec_197f7dbe),
    (0x2217_8C64, rec_22178c64),
    (0x2A63_6E60, rec_2a636e60),
    (0x31D7_A200, rec_31d7a200),
    (0x357D_669C, rec_357d669c),
    (0x39AD_9666, rec_39ad9666),
    (0x4023_6C89, rec_40236c89),
    (0x436D_821A, rec_436d821a),
    (0x4574_1FAF, rec_45741faf),
    (0x4640_7F70, rec_46407f70),
    (0x475E_7861, rec_475e7861),
    (0x488C_5309, rec_488c5309),
    (0x4F8A_6797, rec_2a636e60),
    (0x5377_99E0, rec_537799e0),
    (0x5482_9655, rec_54829655),
    (0x5697_0DFA, rec_56970dfa),
    (0x5DD3_A2D3, rec_39ad9666),
    (0x606D_9AB1, rec_606d9ab1),
    (0x6250_D222, rec_6250d222),
    (0x63E2_09F9, rec_39ad9666),
    (0x6E2B_CB60, rec_6e2bcb60),
    (0x7C39_DC59, rec_7c39dc59),
    (0x7E36_DE81, rec_7e36de81),
    (0x871D_6F71, rec_871d6f71),
    (0x896A_9790, rec_896a9790),
    (0x90F4_820A, rec_90f4820a),
    (0xA040_D1B1, rec_a040d1b1),
    (0xA408_7E1F, rec_a4087e1f),
    (0xAE0E_267A, rec_ae0e267a),
    (0xB269_ACEF, rec_b269acef),
    (0xB292_F94A, rec_b292f94a),
    (0xB59F_6734, rec_b59f6734),
    (0xB6C5_116B, rec_b6c5116b),
    (0xBF32_E0A6, rec_bf32e0a6),
    (0xBFD0_9C43, rec_bfd09c43),
    (0xC89E_F3C0, rec_c89ef3c0),
    (0xD5F1_9E40, rec_d5f19e40),
    (0xD5F1_9E41, rec_d5f19e41),
    (0xD5F1_9E42, rec_d5f19e42),
    (0xD7BE_5663, rec_d7be5663),
    (0xD7F4_C16F, rec_d7f4c16f),
    (0xDBD6_7510, rec_dbd67510),
    (0xEEE0_3AF5, rec_eee03af5),
    (0xF436_0D18, rec_f4360d18),
    (0xF769_3D55, rec_f7693d55),
    (0xFA6E_9782, rec_fa6e9782),
    (0xFD77_02B0, rec_fd7702b0),
    (0xFF46_726C, rec_ff46726c),
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
