//! Feature records.

use crate::decoder::{Decoder, Item, NodeReader};
use crate::Result;

/// CircularPatternFeature
fn fx_circular_pattern(r: &mut NodeReader<'_>) -> Result<()> {
    r.set_type_name("FxCircularPattern");
    r.content_header()?;
    r.skip_block_size();
    r.i32("s32_0")?;
    r.skip_block_size();
    r.skip_block_size();
    r.u32("u32_0")?;
    r.list2("lst0", Item::CrossRef)?;
    r.skip_block_size();
    r.u32("u32_1")?;
    r.skip_block_size();
    r.list2("lst1", Item::CrossRef)?;
    r.cross_ref("ref_1")?;
    r.cross_ref("ref_2")?;
    r.cross_ref("ref_3")?;
    r.cross_ref("ref_4")?;
    r.cross_ref("ref_5")?;
    r.cross_ref("ref_6")?;
    r.u8("u8_0")?;
    r.cross_ref("ref_7")?;
    r.cross_ref("ref_8")?;
    r.cross_ref("ref_9")?;
    r.cross_ref("ref_a")?;
    r.cross_ref("ref_b")?;
    r.cross_ref("ref_c")?;
    if r.version() > 2016 {
        r.skip(24);
    } else {
        r.skip_block_size();
    }
    r.cross_ref("ref_d")?;
    r.cross_ref("ref_e")?;
    r.cross_ref("ref_f")?;
    r.cross_ref("ref_10")?;
    r.cross_ref("ref_11")?;
    r.cross_ref("ref_12")?;
    if r.version() > 2016 {
        r.cross_ref("ref_13")?;
        r.cross_ref("ref_14")?;
    }
    Ok(())
}

/// FilletFeature
fn fx_fillet_constant(r: &mut NodeReader<'_>) -> Result<()> {
    r.set_type_name("FxFilletConstant");
    r.content_header()?;
    r.skip_block_size();
    r.skip_block_size();
    r.skip_block_size();
    r.list2("radius_edge_set", Item::CrossRef)?;
    Ok(())
}

/// DirectEditFeature
fn fx_direct_edit(r: &mut NodeReader<'_>) -> Result<()> {
    r.set_type_name("FxDirectEdit");
    r.content_header()?;
    r.skip_block_size();
    r.i32("s32_0")?;
    r.list2("lst0", Item::CrossRef)?;
    r.u32("u32_0")?;
    Ok(())
}

/// RectangularPatternFeature
fn fx_rectangular_pattern(r: &mut NodeReader<'_>) -> Result<()> {
    r.set_type_name("FxRectangularPattern");
    r.content_header()?;
    r.skip_block_size();
    r.i32("s32_0")?;
    r.skip_block_size();
    r.skip_block_size();
    r.u32("u32_0")?;
    r.list2("lst0", Item::CrossRef)?;
    r.skip_block_size();
    r.u32("u32_1")?;
    r.skip_block_size();
    r.list2("lst1", Item::CrossRef)?;
    r.cross_ref("ref_transformation")?;
    r.cross_ref("ref_1")?;
    r.cross_ref("ref_parameter1")?;
    r.cross_ref("ref_2")?;
    r.cross_ref("ref_3")?;
    r.cross_ref("ref_4")?;
    r.u8("u8_0")?;
    r.cross_ref("ref_parameter2")?;
    r.cross_ref("ref_5")?;
    r.cross_ref("ref_7")?;
    r.cross_ref("ref_8")?;
    r.cross_ref("ref_9")?;
    r.cross_ref("ref_parameter3")?;
    r.skip_block_size();
    r.cross_ref("ref_a")?;
    r.cross_ref("ref_b")?;
    r.cross_ref("ref_c")?;
    r.cross_ref("ref_d")?;
    r.cross_ref("ref_e")?;
    r.cross_ref("ref_f")?;
    r.cross_ref("ref_g")?;
    r.cross_ref("ref_h")?;
    r.cross_ref("ref_i")?;
    r.cross_ref("ref_j")?;
    r.cross_ref("ref_k")?;
    r.cross_ref("ref_l")?;
    r.cross_ref("ref_m")?;
    r.cross_ref("ref_n")?;
    if r.version() > 2016 {
        r.cross_ref("ref_o")?;
        r.cross_ref("ref_p")?;
        r.cross_ref("ref_q")?;
        r.cross_ref("ref_r")?;
        r.cross_ref("ref_s")?;
        r.cross_ref("ref_t")?;
    }
    Ok(())
}

fn fx_boundary_patch(r: &mut NodeReader<'_>) -> Result<()> {
    r.set_type_name("FxBoundaryPatch");
    r.content_header()?;
    r.skip_block_size();
    r.skip_block_size();
    r.skip_block_size();
    r.list2("lst0", Item::CrossRef)?;
    Ok(())
}

/// ThreadFeature
fn fx_thread(r: &mut NodeReader<'_>) -> Result<()> {
    r.set_type_name("FxThread");
    r.content_header()?;
    r.skip_block_size();
    r.skip_block_size();
    r.skip_block_size();
    r.list2("lst0", Item::CrossRef)?;
    Ok(())
}

/// LoftFeature
fn fx_loft(r: &mut NodeReader<'_>) -> Result<()> {
    r.set_type_name("FxLoft");
    r.content_header()?;
    r.skip_block_size();
    r.skip_block_size();
    r.skip_block_size();
    r.list2("lst0", Item::CrossRef)?;
    Ok(())
}

/// ExtendFeature
fn fx_extend(r: &mut NodeReader<'_>) -> Result<()> {
    r.set_type_name("FxExtend");
    r.content_header()?;
    r.skip_block_size();
    r.skip_block_size();
    r.skip_block_size();
    r.u16("u16_0")?;
    r.u16("u16_1")?;
    r.skip_block_size();
    Ok(())
}

/// HoleFeature
fn fx_drill(r: &mut NodeReader<'_>) -> Result<()> {
    r.set_type_name("FxDrill");
    r.content_header()?;
    r.skip_block_size();
    r.skip_block_size();
    r.skip_block_size();
    r.u16("u16_0")?;
    r.u16("u16_1")?;
    r.skip_block_size();
    Ok(())
}

/// CoilFeature
fn fx_coil(r: &mut NodeReader<'_>) -> Result<()> {
    r.set_type_name("FxCoil");
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

/// SculptFeature
fn fx_sculpt(r: &mut NodeReader<'_>) -> Result<()> {
    r.set_type_name("FxSculpt");
    r.content_header()?;
    r.skip_block_size();
    r.skip_block_size();
    r.skip_block_size();
    r.list2("lst0", Item::CrossRef)?;
    Ok(())
}

fn fx_extrusion(r: &mut NodeReader<'_>) -> Result<()> {
    r.set_type_name("FxExtrusion");
    r.content_header()?;
    r.skip_block_size();
    r.skip_block_size();
    r.skip_block_size();
    r.u16("u16_0")?;
    r.u16("operations")?;
    r.skip_block_size();
    Ok(())
}

/// DecalFeature
fn fx_decal(r: &mut NodeReader<'_>) -> Result<()> {
    r.set_type_name("FxDecal");
    r.content_header()?;
    r.skip_block_size();
    r.i32("s32_0")?;
    r.skip_block_size();
    r.skip_block_size();
    r.u32("u32_0")?;
    r.list2("lst0", Item::CrossRef)?;
    r.skip_block_size();
    r.u32("u32_1")?;
    r.skip_block_size();
    r.cross_ref("ref_1")?;
    r.u8("u8_0")?;
    r.u32_array("a0", 2)?;
    r.cross_ref("ref_sketch")?;
    Ok(())
}

fn end_of_features(r: &mut NodeReader<'_>) -> Result<()> {
    r.set_type_name("EndOfFeatures");
    r.content_header()?;
    r.skip_block_size();
    r.i32("s32_0")?;
    r.skip_block_size();
    r.skip_block_size();
    Ok(())
}

/// ChamferFeature
fn fx_chamfer(r: &mut NodeReader<'_>) -> Result<()> {
    r.set_type_name("FxChamfer");
    r.content_header()?;
    r.skip_block_size();
    r.skip_block_size();
    r.skip_block_size();
    r.list2("edges", Item::CrossRef)?;
    Ok(())
}

fn feature(r: &mut NodeReader<'_>) -> Result<()> {
    r.set_type_name("Feature");
    r.content_header()?;
    r.skip_block_size();
    r.i32("s32_0")?;
    r.skip_block_size();
    r.skip_block_size();
    r.u32("u32_0")?;
    r.list2("properties", Item::CrossRef)?;
    r.skip_block_size();
    r.u32("u32_0")?;
    Ok(())
}

/// SweepFeature
fn fx_sweep(r: &mut NodeReader<'_>) -> Result<()> {
    r.set_type_name("FxSweep");
    r.content_header()?;
    r.skip_block_size();
    r.skip_block_size();
    r.skip_block_size();
    r.i16_array("a0", 2)?;
    r.skip_block_size();
    Ok(())
}

/// ShellFeature
fn fx_shell(r: &mut NodeReader<'_>) -> Result<()> {
    r.set_type_name("FxShell");
    r.content_header()?;
    r.skip_block_size();
    r.skip_block_size();
    r.skip_block_size();
    r.u32("u32_0")?;
    r.skip_block_size();
    Ok(())
}

/// SplitFeature
fn fx_split(r: &mut NodeReader<'_>) -> Result<()> {
    r.set_type_name("FxSplit");
    r.content_header()?;
    r.skip_block_size();
    r.skip_block_size();
    r.skip_block_size();
    r.u16("u16_0")?;
    r.u16("u16_1")?;
    r.skip_block_size();
    Ok(())
}

/// RevolveFeature
fn fx_revolve(r: &mut NodeReader<'_>) -> Result<()> {
    r.set_type_name("FxRevolve");
    r.content_header()?;
    r.skip_block_size();
    r.skip_block_size();
    r.skip_block_size();
    r.i16("s16_0")?;
    r.u16("u16_0")?;
    r.skip_block_size();
    Ok(())
}

fn fx_fillet_variable(r: &mut NodeReader<'_>) -> Result<()> {
    r.set_type_name("FxFilletVariable");
    r.content_header()?;
    r.skip_block_size();
    r.skip_block_size();
    r.skip_block_size();
    r.list2("radius_edge_set", Item::CrossRef)?;
    Ok(())
}

/// RibFeature
fn fx_rib(r: &mut NodeReader<'_>) -> Result<()> {
    r.set_type_name("FxRib");
    r.content_header()?;
    r.skip_block_size();
    r.skip_block_size();
    r.list2("lst0", Item::CrossRef)?;
    Ok(())
}

/// TrimFeature
fn fx_trim(r: &mut NodeReader<'_>) -> Result<()> {
    r.set_type_name("FxTrim");
    r.content_header()?;
    r.skip_block_size();
    r.skip_block_size();
    r.skip_block_size();
    r.u16("u16_1")?;
    r.u16("u16_2")?;
    r.skip_block_size();
    Ok(())
}

/// ThickenFeature
fn fx_thicken(r: &mut NodeReader<'_>) -> Result<()> {
    r.set_type_name("FxThicken");
    r.content_header()?;
    r.skip_block_size();
    r.skip_block_size();
    r.skip_block_size();
    r.list2("points", Item::CrossRef)?;
    Ok(())
}

/// MirrorFeature
fn fx_mirror(r: &mut NodeReader<'_>) -> Result<()> {
    r.set_type_name("FxMirror");
    r.content_header()?;
    r.skip_block_size();
    r.i32("s32_0")?;
    r.skip_block_size();
    r.skip_block_size();
    r.u32("u32_0")?;
    r.list2("lst0", Item::CrossRef)?;
    r.skip_block_size();
    r.u32("u32_1")?;
    r.skip_block_size();
    r.list2("lst1", Item::CrossRef)?;
    r.cross_ref("ref_1")?;
    r.cross_ref("ref_2")?;
    r.cross_ref("ref_3")?;
    r.cross_ref("ref_4")?;
    r.cross_ref("ref_5")?;
    r.cross_ref("ref_6")?;
    r.u8("u8_0")?;
    r.cross_ref("ref_7")?;
    r.cross_ref("ref_8")?;
    r.cross_ref("ref_9")?;
    r.cross_ref("ref_a")?;
    r.cross_ref("ref_b")?;
    if r.version() > 2016 {
        r.skip(24);
    } else {
        r.skip_block_size();
    }
    r.cross_ref("ref_c")?;
    r.cross_ref("ref_d")?;
    Ok(())
}

pub(super) const DECODERS: &[(u32, Decoder)] = &[
    (0x0697_7131, fx_circular_pattern),
    (0x1B48_E9DA, fx_fillet_constant),
    (0x1F6D_59F6, fx_direct_edit),
    (0x2067_3244, fx_rectangular_pattern),
    (0x2294_7391, fx_boundary_patch),
    (0x24BC_B2F1, fx_thread),
    (0x312F_9E50, fx_loft),
    (0x34FA_B548, fx_extend),
    (0x43CD_7C11, fx_drill),
    (0x4FB1_0CB8, fx_coil),
    (0x5FB2_5A7E, fx_sculpt),
    (0x729A_BE28, fx_extrusion),
    (0x7F93_6BAA, fx_decal),
    (0x8F41_FD24, end_of_features),
    (0x9087_4D51, fx_chamfer),
    (0x9087_4D91, feature),
    (0xA29C_84B7, fx_sweep),
    (0xB3A1_69E4, fx_shell),
    (0xB8E1_9019, fx_split),
    (0xC7A0_6AC2, fx_revolve),
    (0xCA7A_A850, fx_fillet_variable),
    (0xD5DA_AA83, fx_rib),
    (0xEA68_0672, fx_trim),
    (0xEFF2_257A, fx_thicken),
    (0xFAD9_A9B5, fx_mirror),
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
