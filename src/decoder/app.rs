//! # Application settings (App) segment
//!
//! Decoders for the segment holding document-wide settings: materials,
//! rendering styles, lighting, text styles, object defaults and the
//! parameter defaults. Uses the same reader and headers as the design
//! content table.
//!
//! `F8A779F9` (object defaults) carries an unreliable declared size and is
//! re-framed from its trailing size marker.

use crate::decoder::{Decoder, Item, NodeReader, Registry};
use crate::model::Value;
use crate::Result;

/// Records whose declared size is unreliable.
pub const SELF_CORRECTING: &[u32] = &[0xF8A7_79F9];

pub fn registry() -> Registry {
    Registry::new("App").with(DECODERS).with_self_correcting(SELF_CORRECTING)
}

// ============================================================================
// Styles
// ============================================================================

/// Fields every named style carries from 2013 on. Older releases get the
/// empty values.
fn style_identity(r: &mut NodeReader<'_>) -> Result<()> {
    if r.version() > 2012 {
        r.u16("u16_0")?;
        r.text16("txt_1")?;
        r.text16("txt_2")?;
        r.text16("txt_3")?;
        r.text16("txt_4")?;
        r.u16_array("a2", 2)?;
        r.uuid("uid_0")?;
    } else {
        r.set_default("u16_0", 0u16);
        for field in ["txt_1", "txt_2", "txt_3", "txt_4"] {
            r.set_default(field, "");
        }
        r.set_default("a2", vec![0u16; 2]);
        r.set_default("uid_0", Value::Null);
    }
    Ok(())
}

/// Header0, flags, parent, name and the version-gated `a1` of every style.
fn style_header(r: &mut NodeReader<'_>) -> Result<()> {
    r.header0()?;
    r.u8("u8_0")?;
    r.u16_array("a0", 7)?;
    r.parent_ref()?;
    r.name16()?;
    if r.version() < 2013 {
        r.u16_array("a1", 3)?;
    } else {
        r.set_default("a1", vec![0u16; 3]);
    }
    r.text16("txt_0")?;
    r.skip_block_size();
    style_identity(r)
}

fn material(r: &mut NodeReader<'_>) -> Result<()> {
    r.set_type_name("Material");
    style_header(r)?;
    r.f64_array("a3", 4)?;
    r.f64_array("a4", 4)?;
    r.u8("u8_1")?;
    r.cross_ref("xref_0")?;
    if r.version() > 2011 {
        r.text16("txt_5")?;
    }
    Ok(())
}

fn rendering_style(r: &mut NodeReader<'_>) -> Result<()> {
    r.set_type_name("RenderingStyle");
    let version = r.version();
    style_header(r)?;
    r.color_rgba("c0")?;
    r.color_rgba("c1")?;
    r.color_rgba("c2")?;
    r.color_rgba("c3")?;
    r.f32("f32_0")?;
    r.skip_block_size();
    r.text16("file_map_texture")?;
    r.u8("u8_1")?;
    r.f32_array("vec4d_0", 4)?;
    r.skip_block_size();
    r.f32_array("vec2d_0", 2)?;
    r.i32_array("a3", 2)?;
    r.u8_array("a4", 5)?;
    r.i32("s32_0")?;
    r.f64("f64_1")?;
    r.text16("file_map_bump")?;
    r.i32("s32_1")?;
    r.f64_array("vec3d_0", 3)?;
    r.text16("txt_7")?;
    if version > 2010 && version < 2013 {
        r.text16("txt_8")?;
        r.f32_array("a5", 2)?;
    }
    if version > 2012 {
        r.f32_array("a6", 2)?;
    }
    if version > 2014 {
        r.f64_array("a7", 3)?;
        r.u8("u8_2")?;
    }
    if version > 2016 {
        r.f32_array("a8", 17)?;
        r.u8("u8_3")?;
    }
    Ok(())
}

// ============================================================================
// Object defaults
// ============================================================================

/// ObjectDefault: a class name, then a `u16` kind that selects the layout.
/// Kind `0x0A` is further split by a sub-type word.
fn object_default(r: &mut NodeReader<'_>) -> Result<()> {
    r.name8()?;
    let after_name = r.position();
    let kind = r.take_u16()?;
    r.set_type_name(format!("ObjectDefault_{kind:02X}"));
    match kind {
        0x01 => {
            r.u8("u8_0")?;
            r.u16_array("a0", 8)?;
            r.list2("lst0", Item::ChildRef)?;
            r.u32("u32_0")?;
        }
        0x02 => {
            r.skip_block_size();
            r.child_ref("cld_0")?;
            r.child_ref("cld_1")?;
        }
        0x0A => {
            r.u32("u32_0")?;
            r.f32("f32_0")?;
            r.map6("lst0", Item::Text8, Item::CrossRef)?;
            let sub_type = r.u32("sub_type")?;
            r.u32("u32_1")?;
            r.u16("u16_0")?;
            match sub_type {
                ..0x0110 => {
                    r.u8("u8_0")?;
                    r.u16_array("a1", 7)?;
                    r.parent_ref()?;
                    r.text16("txt_0")?;
                    r.text16("txt_1")?;
                    r.u16("u16_1")?;
                    for field in ["txt_2", "txt_3", "txt_4", "txt_5"] {
                        r.text16(field)?;
                    }
                    r.u32("u32_2")?;
                    r.uuid("uid_0")?;
                    r.f64_array("a2", 8)?;
                    r.u8("u8_1")?;
                    r.u16_array("a3", 2)?;
                    r.text16("txt_6")?;
                }
                0x0110..0x0120 => {
                    r.f64_array("a0", 14)?;
                    r.uuid("uid_0")?;
                    r.u8("u8_0")?;
                    r.f64_array("a1", 2)?;
                    r.u8_array("a2", 2)?;
                    r.f64_array("a3", 6)?;
                }
                0x0122.. => {
                    r.u8("u8_0")?;
                    r.u16_array("a0", 7)?;
                    r.parent_ref()?;
                    r.text16("txt_0")?;
                    r.text16("txt_1")?;
                    r.u16("u16_1")?;
                    r.text16("txt_2")?;
                    r.list2("lst1", Item::ChildRef)?;
                }
                _ => {}
            }
        }
        _ => {
            // the kind word stays part of the unread tail
            r.seek(after_name);
            tracing::warn!(node = %r.node().id, kind = format_args!("{kind:04X}"), "unknown object default kind");
        }
    }
    if r.remaining() > 0 {
        tracing::warn!(node = %r.node().id, left = r.remaining(), "trailing bytes in object default");
    }
    Ok(())
}

// ============================================================================
// Irregular records
// ============================================================================

fn style_library(r: &mut NodeReader<'_>) -> Result<()> {
    r.header0()?;
    for field in ["cld_0", "cld_1", "cld_2", "cld_3", "cld_4", "cld_5", "cld_6", "cld_7", "cld_8"] {
        r.cross_ref(field)?;
    }
    r.u8("u8_0")?;
    r.skip_block_size();
    // only 2011 writes this word
    if r.version() == 2011 {
        r.skip(4);
    }
    r.child_ref("cld_9")?;
    Ok(())
}

/// Ends either in a code page or in a second text, told apart by what is
/// left of the record.
fn code_page_entry(r: &mut NodeReader<'_>) -> Result<()> {
    r.header0()?;
    r.name8()?;
    r.child_ref("cld_0")?;
    r.parent_ref()?;
    r.u16_array("a0", 8)?;
    r.text16("txt_0")?;
    r.child_ref("cld_1")?;
    if r.remaining() == 4 {
        r.u32("code_page")?;
    } else {
        r.text16("txt_1")?;
    }
    r.skip_block_size();
    Ok(())
}

/// Content not understood; kept as raw bytes.
fn opaque(r: &mut NodeReader<'_>) -> Result<()> {
    r.consume_all();
    Ok(())
}

// ============================================================================
// Regular records
// ============================================================================

fn rec_1c4cff13(r: &mut NodeReader<'_>) -> Result<()> {
    r.header0()?;
    r.u8("u8_0")?;
    r.u16_array("a0", 7)?;
    r.cross_ref("xref_0")?;
    r.name16()?;
    r.u16_array("a1", 3)?;
    r.text16("txt_0")?;
    r.skip_block_size();
    r.list2("lst0", Item::ChildRef)?;
    Ok(())
}

fn lighting(r: &mut NodeReader<'_>) -> Result<()> {
    r.set_type_name("Lighting");
    r.header0()?;
    r.u8("u8_0")?;
    r.u16_array("a0", 7)?;
    r.cross_ref("xref_0")?;
    r.name16()?;
    r.u16_array("a1", 3)?;
    r.text16("txt_0")?;
    r.skip_block_size();
    r.f32_array("a2", 4)?;
    r.skip_block_size();
    Ok(())
}

fn word_pair(r: &mut NodeReader<'_>) -> Result<()> {
    r.header0()?;
    r.u32_array("a0", 2)?;
    r.skip_block_size();
    Ok(())
}

fn header_only(r: &mut NodeReader<'_>) -> Result<()> {
    r.header0()?;
    Ok(())
}

fn vector2d(r: &mut NodeReader<'_>) -> Result<()> {
    r.header0()?;
    r.skip_block_size();
    r.f64_array("vec2d_0", 2)?;
    r.skip_block_size();
    r.skip_block_size();
    Ok(())
}

fn rec_3235a9b8(r: &mut NodeReader<'_>) -> Result<()> {
    r.header0()?;
    r.uuid("uid_0")?;
    r.list2("lst0", Item::ChildRef)?;
    r.map6("lst1", Item::U32, Item::ChildRef)?;
    r.child_ref("cld_0")?;
    if r.version() > 2010 {
        r.u32("u32_0")?;
    }
    Ok(())
}

fn rec_345eb9b1(r: &mut NodeReader<'_>) -> Result<()> {
    r.header0()?;
    r.list2("lst0", Item::ChildRef)?;
    r.uuid("uid_0")?;
    r.uuid("uid_1")?;
    Ok(())
}

fn rec_36bc43f4(r: &mut NodeReader<'_>) -> Result<()> {
    r.header0()?;
    r.u8("u8_0")?;
    r.u16_array("a0", 7)?;
    r.cross_ref("xref_0")?;
    r.name16()?;
    r.u16_array("a1", 3)?;
    r.text16("txt_0")?;
    r.skip_block_size();
    r.cross_ref("xref_1")?;
    r.skip_block_size();
    Ok(())
}

fn named_words(r: &mut NodeReader<'_>) -> Result<()> {
    r.header0()?;
    r.u16_array("a0", 4)?;
    r.skip_block_size();
    r.name16()?;
    Ok(())
}

fn rec_42a65daa(r: &mut NodeReader<'_>) -> Result<()> {
    r.header0()?;
    r.u32("u32_0")?;
    Ok(())
}

fn rec_461e402f(r: &mut NodeReader<'_>) -> Result<()> {
    r.skip_block_size();
    r.u32("u32_0")?;
    r.skip_block_size();
    Ok(())
}

fn named_child_list(r: &mut NodeReader<'_>) -> Result<()> {
    r.header0()?;
    r.list3("lst0", Item::ChildRef)?;
    r.name16()?;
    r.skip_block_size();
    Ok(())
}

fn rec_5f9d0021(r: &mut NodeReader<'_>) -> Result<()> {
    r.header0()?;
    r.child_ref("cld_0")?;
    r.list3("lst0", Item::ChildRef)?;
    r.list3("lst1", Item::ChildRef)?;
    Ok(())
}

fn rec_61b5e2d1(r: &mut NodeReader<'_>) -> Result<()> {
    r.list2("lst0", Item::ChildRef)?;
    r.skip_block_size();
    r.skip_block_size();
    r.u32("u32_0")?;
    Ok(())
}

fn settings(r: &mut NodeReader<'_>) -> Result<()> {
    r.set_type_name("Settings");
    r.header0()?;
    r.skip_block_size();
    if r.version() < 2013 {
        r.map6("lst0", Item::Text8, Item::ChildRef)?;
    } else {
        r.map7("lst0", Item::Text8, Item::ChildRef)?;
    }
    Ok(())
}

fn rec_6b4c0c42(r: &mut NodeReader<'_>) -> Result<()> {
    r.header0()?;
    r.name16()?;
    r.cross_ref("ref_1")?;
    Ok(())
}

fn parameter(r: &mut NodeReader<'_>) -> Result<()> {
    r.set_type_name("Parameter");
    r.header0()?;
    r.u8("u8_0")?;
    r.u16_array("a0", 7)?;
    r.parent_ref()?;
    r.text16("txt_0")?;
    Ok(())
}

fn rec_7313fac3(r: &mut NodeReader<'_>) -> Result<()> {
    r.header0()?;
    r.list2("lst0", Item::ChildRef)?;
    r.u16_array("a0", 17)?;
    r.skip_block_size();
    r.u16_array("a1", 20)?;
    r.skip_block_size();
    Ok(())
}

fn text(r: &mut NodeReader<'_>) -> Result<()> {
    r.set_type_name("Text");
    r.header0()?;
    r.u8("u8_0")?;
    r.u16_array("a0", 7)?;
    r.parent_ref()?;
    r.name16()?;
    r.u16_array("a1", 3)?;
    r.text16("txt_0")?;
    r.skip_block_size();
    r.i32_array("a2", 3)?;
    r.text16("font_name")?;
    Ok(())
}

fn rec_9e11f9f6(r: &mut NodeReader<'_>) -> Result<()> {
    r.header0()?;
    r.uuid("uid_0")?;
    Ok(())
}

fn feature_control_frame(r: &mut NodeReader<'_>) -> Result<()> {
    r.set_type_name("FeatureControlFrame");
    r.header0()?;
    Ok(())
}

fn rec_a7a4fd41(r: &mut NodeReader<'_>) -> Result<()> {
    r.header0()?;
    r.name8()?;
    r.child_ref("cld_0")?;
    r.parent_ref()?;
    r.map6("lst0", Item::Text16, Item::ChildRef)?;
    r.u8_array("a0", 4)?;
    r.skip_block_size();
    Ok(())
}

fn rec_ba93bb36(r: &mut NodeReader<'_>) -> Result<()> {
    r.header0()?;
    r.name16()?;
    r.cross_ref("cld_0")?;
    r.u16("u16_0")?;
    r.text16("txt_0")?;
    r.u8("u8_0")?;
    r.u16_array("a0", 12)?;
    r.text16("txt_1")?;
    r.text16("txt_2")?;
    Ok(())
}

fn rec_d0a64abb(r: &mut NodeReader<'_>) -> Result<()> {
    r.header0()?;
    r.u32_array("a0", 2)?;
    r.skip_block_size();
    r.u32_array("a1", 2)?;
    if r.version() > 2010 {
        r.u32("u32_0")?;
        r.f64_array("a2", 2)?;
    }
    Ok(())
}

fn leader(r: &mut NodeReader<'_>) -> Result<()> {
    r.set_type_name("Leader");
    r.header0()?;
    Ok(())
}

fn rec_d8577fc4(r: &mut NodeReader<'_>) -> Result<()> {
    r.skip_block_size();
    r.skip_block_size();
    r.name16()?;
    r.u8_array("a0", 9)?;
    r.text8("txt_0")?;
    r.u8("u8_0")?;
    r.skip_block_size();
    r.text8("txt_1")?;
    Ok(())
}

fn rec_e5dde747(r: &mut NodeReader<'_>) -> Result<()> {
    r.header0()?;
    r.f64("f64_0")?;
    Ok(())
}

fn rec_ed6cd739(r: &mut NodeReader<'_>) -> Result<()> {
    r.header0()?;
    r.name16()?;
    r.text16("txt_0")?;
    Ok(())
}

fn rec_f8a779fd(r: &mut NodeReader<'_>) -> Result<()> {
    r.header0()?;
    r.skip_block_size();
    r.list3("lst0", Item::CrossRef)?;
    r.list3("lst1", Item::CrossRef)?;
    r.u32("u32_0")?;
    r.u8("u8_0")?;
    Ok(())
}

fn rec_fda6d020(r: &mut NodeReader<'_>) -> Result<()> {
    r.header0()?;
    r.name8()?;
    r.cross_ref("ref_setup")?;
    r.parent_ref()?;
    r.map6("lst0", Item::Text16, Item::ChildRef)?;
    Ok(())
}

const DECODERS: &[(u32, Decoder)] = &[
    (0x11FB_ECCD, style_library),
    (0x1C4C_FF13, rec_1c4cff13),
    (0x1E5C_BB86, lighting),
    (0x2433_ABAD, word_pair),
    (0x2AE5_2C91, header_only),
    (0x2F6A_0C3F, vector2d),
    (0x3214_005D, word_pair),
    (0x3235_A9B8, rec_3235a9b8),
    (0x345E_B9B1, rec_345eb9b1),
    (0x36BC_43F4, rec_36bc43f4),
    (0x3718_6901, header_only),
    (0x422E_CBCE, named_words),
    (0x42A6_5DAA, rec_42a65daa),
    (0x440F_63D1, header_only),
    (0x461E_402F, rec_461e402f),
    (0x5C30_CDF2, vector2d),
    (0x5C30_CDF6, vector2d),
    (0x5C30_CE1D, named_child_list),
    (0x5F9D_0021, rec_5f9d0021),
    (0x5F9D_0025, vector2d),
    (0x5F9D_0026, header_only),
    (0x5F9D_0029, vector2d),
    (0x5F9D_002B, vector2d),
    (0x61B5_E2D1, rec_61b5e2d1),
    (0x6759_D86E, material),
    (0x6759_D86F, rendering_style),
    (0x6759_D870, settings),
    (0x6B4C_0C42, rec_6b4c0c42),
    (0x6DD8_F4A0, code_page_entry),
    (0x6EAE_8DFD, parameter),
    (0x7313_FAC3, rec_7313fac3),
    (0x7E23_DD2F, word_pair),
    (0x7F64_4248, text),
    (0x958D_B976, opaque),
    (0x9E11_F9F6, rec_9e11f9f6),
    (0x9F81_E4C8, feature_control_frame),
    (0xA7A4_FD41, rec_a7a4fd41),
    (0xADAF_9728, header_only),
    (0xAEB2_BD47, word_pair),
    (0xBA93_BB36, rec_ba93bb36),
    (0xBF20_30AB, named_words),
    (0xCCA8_D815, word_pair),
    (0xCEA6_CA2D, vector2d),
    (0xD0A6_4ABB, rec_d0a64abb),
    (0xD0A6_4ABC, word_pair),
    (0xD0A6_4ABD, word_pair),
    (0xD422_7E2D, header_only),
    (0xD72E_4F21, leader),
    (0xD857_7FC4, rec_d8577fc4),
    (0xE454_FA4D, header_only),
    (0xE5DD_E747, rec_e5dde747),
    (0xE987_4A94, header_only),
    (0xEBEE_69CA, named_child_list),
    (0xEBEE_69CB, named_child_list),
    (0xEBEE_69D0, named_child_list),
    (0xED6C_D739, rec_ed6cd739),
    (0xEFB5_BE1A, word_pair),
    (0xF4DD_03EC, named_words),
    (0xF8A7_79F1, vector2d),
    (0xF8A7_79F3, vector2d),
    (0xF8A7_79F5, vector2d),
    (0xF8A7_79F6, vector2d),
    (0xF8A7_79F8, header_only),
    (0xF8A7_79F9, object_default),
    (0xF8A7_79FD, rec_f8a779fd),
    (0xF8D0_7626, header_only),
    (0xF94F_EEE2, vector2d),
    (0xFDA6_D020, rec_fda6d020),];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decoder::DecodeContext;
    use crate::model::{ByteRange, Node, NodeId, TypeId};
    use pretty_assertions::assert_eq;

    #[derive(Default)]
    struct Bytes(Vec<u8>);

    impl Bytes {
        fn u8(mut self, v: u8) -> Self { self.0.push(v); self }
        fn u16(mut self, v: u16) -> Self { self.0.extend_from_slice(&v.to_le_bytes()); self }
        fn u32(mut self, v: u32) -> Self { self.0.extend_from_slice(&v.to_le_bytes()); self }
        fn zeros(mut self, n: usize) -> Self { self.0.resize(self.0.len() + n, 0); self }
        fn text8(self, s: &str) -> Self {
            let mut b = self.u32(s.len() as u32);
            b.0.extend_from_slice(s.as_bytes());
            b
        }
        fn text16(self, s: &str) -> Self {
            let units: Vec<u16> = s.encode_utf16().collect();
            units.iter().fold(self.u32(units.len() as u32), |b, &u| b.u16(u))
        }
        /// header0, with a block size from 2011 on
        fn header0(self, version: u32) -> Self {
            let b = self.u32(0).u16(0);
            if version >= 2011 { b.zeros(4) } else { b }
        }
    }

    fn run(key: u32, version: u32, data: &[u8]) -> (Node, usize) {
        let decoder = registry().lookup(TypeId(key)).unwrap();
        let mut node = Node::new(NodeId(3), TypeId(key), ByteRange { offset: 0, len: data.len() });
        let mut ctx = DecodeContext::for_version(version);
        let mut r = NodeReader::new(data, &mut node, &mut ctx);
        decoder(&mut r).unwrap();
        let left = r.remaining();
        (node, left)
    }

    #[test]
    fn test_table_is_sorted_and_complete() {
        assert!(DECODERS.windows(2).all(|w| w[0].0 < w[1].0));
        assert_eq!(registry().len(), 68);
        assert!(registry().is_self_correcting(TypeId(0xF8A7_79F9)));
    }

    const SETTINGS: u32 = 0x6759_D870;
    const MATERIAL: u32 = 0x6759_D86E;
    const OBJECT_DEFAULT: u32 = 0xF8A7_79F9;
    const CODE_PAGE: u32 = 0x6DD8_F4A0;

    #[test]
    fn test_settings_map_framing_by_version() {
        let map = |b: Bytes| b.u32(1).zeros(8).text8("Part").u32(7);

        let old = map(Bytes::default().header0(2012).zeros(4));
        let (node, left) = run(SETTINGS, 2012, &old.0);
        assert_eq!(left, 0);
        assert_eq!(node.type_name.as_deref(), Some("Settings"));
        assert_eq!(node.get("lst0").map(Value::len), Some(1));

        // 2013 puts a block size in front of the map
        let new = map(Bytes::default().header0(2013).zeros(4).zeros(4));
        let (_, left) = run(SETTINGS, 2013, &new.0);
        assert_eq!(left, 0);
    }

    fn material_bytes(version: u32) -> Vec<u8> {
        let mut b = Bytes::default().header0(version).u8(0).zeros(14).u32(2).text16("Al");
        if version < 2013 {
            b = b.zeros(6);
        }
        b = b.text16("").zeros(4);
        if version > 2012 {
            b = b.u16(1).text16("a").text16("b").text16("c").text16("d").zeros(4).zeros(16);
        }
        b = b.zeros(64).u8(1).u32(9);
        if version > 2011 {
            b = b.text16("");
        }
        b.0
    }

    #[test]
    fn test_material_old_layout_defaults() {
        let (node, left) = run(MATERIAL, 2012, &material_bytes(2012));
        assert_eq!(left, 0);
        assert_eq!(node.type_name.as_deref(), Some("Material"));
        assert_eq!(node.name.as_deref(), Some("Al"));
        assert_eq!(node.parent.map(|p| p.index), Some(2));
        assert_eq!(node.get("uid_0"), Some(&Value::Null));
        assert_eq!(node.get("txt_3"), Some(&Value::from("")));
        assert_eq!(node.get("a2"), Some(&Value::from(vec![0u16; 2])));
    }

    #[test]
    fn test_material_identity_block() {
        let (node, left) = run(MATERIAL, 2019, &material_bytes(2019));
        assert_eq!(left, 0);
        assert_eq!(node.get("txt_2"), Some(&Value::from("b")));
        assert_eq!(node.get("a1"), Some(&Value::from(vec![0u16; 3])));
        assert!(matches!(node.get("uid_0"), Some(Value::Uuid(_))));
    }

    #[test]
    fn test_object_default_kinds() {
        let data = Bytes::default().text8("Sketch").u16(0x02).zeros(4).u32(5).u32(6);
        let (node, left) = run(OBJECT_DEFAULT, 2019, &data.0);
        assert_eq!(left, 0);
        assert_eq!(node.type_name.as_deref(), Some("ObjectDefault_02"));
        assert_eq!(node.name.as_deref(), Some("Sketch"));
        assert_eq!(node.children.len(), 2);

        // unknown kinds keep the name and leave the rest unread
        let data = Bytes::default().text8("X").u16(0x07).zeros(3);
        let (node, left) = run(OBJECT_DEFAULT, 2019, &data.0);
        assert_eq!(node.type_name.as_deref(), Some("ObjectDefault_07"));
        assert_eq!(node.name.as_deref(), Some("X"));
        assert_eq!(left, 5);
    }

    #[test]
    fn test_unknown_object_default_stops_after_name() {
        let data = Bytes::default().text8("Part").u16(0x33).u32(9);
        let decoder = registry().lookup(TypeId(OBJECT_DEFAULT)).unwrap();
        let mut node = Node::new(NodeId(3), TypeId(OBJECT_DEFAULT), ByteRange { offset: 0, len: data.0.len() });
        let mut ctx = DecodeContext::for_version(2015);
        let mut r = NodeReader::new(&data.0, &mut node, &mut ctx);
        decoder(&mut r).unwrap();
        // u32 length + "Part"
        assert_eq!(r.position(), 8);
        assert_eq!(r.remaining(), 6);
    }

    #[test]
    fn test_object_default_sub_type() {
        let data = Bytes::default()
            .text8("Dim")
            .u16(0x0A)
            .u32(0)
            .zeros(4) // f32_0
            .u32(0) // empty map
            .u32(0x0115)
            .u32(0)
            .u16(0)
            .zeros(14 * 8 + 16 + 1 + 16 + 2 + 48);
        let (node, left) = run(OBJECT_DEFAULT, 2019, &data.0);
        assert_eq!(left, 0);
        assert_eq!(node.get("sub_type"), Some(&Value::U32(0x0115)));
        assert_eq!(node.get("a0").map(Value::len), Some(14));
    }

    #[test]
    fn test_code_page_or_text() {
        let head = |version| {
            Bytes::default().header0(version).text8("cp").u32(0).u32(1).zeros(16).text16("").u32(0)
        };
        let (node, left) = run(CODE_PAGE, 2010, &head(2010).u32(1252).0);
        assert_eq!(left, 0);
        assert_eq!(node.get("code_page"), Some(&Value::U32(1252)));

        let (node, left) = run(CODE_PAGE, 2019, &head(2019).text16("Latin").zeros(4).0);
        assert_eq!(left, 0);
        assert_eq!(node.get("txt_1"), Some(&Value::from("Latin")));
        assert_eq!(node.get("code_page"), None);
    }
}
