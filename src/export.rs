//! Dumps of decoded segments.
//!
//! ```text
//! Segment ─► write_json() ─► {"name": "DC", "nodes": [...], "stats": {...}}
//!         └► write_text() ─► [0004] 90874D26 Parameter 'd0' ref_unit=C0005 ...
//! ```
//!
//! The text form is one line per node and is meant for diffing two
//! decodes of the same file.

use std::io::Write;

use crate::segment::Segment;
use crate::Result;

/// Serialize a resolved segment as JSON. The raw buffer is left out.
pub fn write_json(segment: &Segment, writer: &mut dyn Write) -> Result<()> {
    serde_json::to_writer_pretty(&mut *writer, segment)?;
    writeln!(writer)?;
    Ok(())
}

pub fn to_json_string(segment: &Segment) -> Result<String> {
    Ok(serde_json::to_string_pretty(segment)?)
}

/// One line per node, preceded by a comment header with the counters.
pub fn write_text(segment: &Segment, writer: &mut dyn Write) -> Result<()> {
    let stats = &segment.stats;
    writeln!(writer, "// {} ({})", segment.name, segment.kind)?;
    writeln!(
        writer,
        "// nodes: {}, decoded: {}, ignored: {}, size mismatches: {}, nulled refs: {}",
        segment.len(),
        stats.decoded,
        stats.ignored,
        stats.size_mismatched,
        stats.nulled_refs
    )?;
    for defect in &segment.defects {
        writeln!(writer, "// defect {defect}")?;
    }

    for node in segment.nodes() {
        writeln!(writer, "{node}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ByteRange, Node, NodeId, NodeRef, RefKind, TypeId};
    use crate::segment::{Defect, SegmentKind, SegmentStats};

    fn sample() -> Segment {
        let mut param = Node::new(NodeId(1), TypeId(0x9087_4D26), ByteRange { offset: 8, len: 4 })
            .with_type_name("Parameter")
            .with_attribute("value_nominal", 2.5f64);
        param.name = Some("d0".into());
        param.parent = Some(NodeRef::new(RefKind::Parent, 2, false));
        Segment {
            name: "DC".into(),
            kind: SegmentKind::Dc,
            nodes: vec![
                Node::new(NodeId(0), TypeId(0x0000_0003), ByteRange { offset: 0, len: 0 }),
                param,
            ],
            stats: SegmentStats { decoded: 1, ignored: 1, size_mismatched: 1, ..Default::default() },
            defects: vec![Defect { node: NodeId(1), declared: 4, consumed: 6 }],
            data: vec![0; 16],
        }
    }

    #[test]
    fn test_write_text() {
        let mut out = Vec::new();
        write_text(&sample(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "// DC (DC)");
        assert_eq!(lines[2], "// defect [0001] declared 4 bytes, decoder consumed 6");
        assert_eq!(lines[3], "[0000] 00000003 00000003");
        assert_eq!(lines[4], "[0001] 90874D26 Parameter 'd0' parent=P0002 value_nominal=2.5");
    }

    #[test]
    fn test_write_json_skips_buffer() {
        let mut out = Vec::new();
        write_json(&sample(), &mut out).unwrap();
        let v: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(v["name"], "DC");
        assert_eq!(v["nodes"][1]["type_name"], "Parameter");
        assert_eq!(v["stats"]["size_mismatched"], 1);
        assert!(v.get("data").is_none());
        assert_eq!(to_json_string(&sample()).unwrap().trim_end(), String::from_utf8(out).unwrap().trim_end());
    }
}
