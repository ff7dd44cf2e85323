//! End-to-end tests for reading single segments: framing, dispatch, the
//! size cross-check and reference resolution.

mod common;

use common::*;
use inventor_rs::export;
use inventor_rs::{
    DecodeConfig, DecodeContext, Error, NodeId, SegmentKind, SegmentReader, SegmentSource, SizePolicy, TypeId, Value,
};
use pretty_assertions::assert_eq;

fn read(source: SegmentSource, config: DecodeConfig) -> inventor_rs::Result<inventor_rs::Segment> {
    let mut ctx = DecodeContext::new(&config);
    SegmentReader::read(source, &config, &mut ctx)
}

// ============================================================================
// 1. Dispatch and fallback
// ============================================================================

#[test]
fn test_sketch_line_decodes_exactly() {
    let source = Stream::new()
        .record(SKETCH_LINE, &sketch_line(2019, [2, 3], [1.0, 2.0, 0.0, 1.0]))
        .dc();
    let seg = read(source, DecodeConfig::for_version(2019)).unwrap();

    assert_eq!(seg.stats.decoded, 1);
    assert!(seg.defects.is_empty());
    let line = seg.node(NodeId(1)).unwrap();
    assert_eq!(line.type_name.as_deref(), Some("Line2D"));
    assert!(line.visible);
    assert_eq!(line.f64("dir_y"), Some(1.0));
    assert_eq!(line.get("lst1"), Some(&Value::Array(vec![])));
}

#[test]
fn test_truncated_sketch_line_fails_the_node() {
    let mut payload = sketch_line(2019, [2, 3], [1.0, 2.0, 0.0, 1.0]);
    payload.pop();
    let source = Stream::new().record(SKETCH_LINE, &payload).dc();

    let err = read(source, DecodeConfig::for_version(2019)).unwrap_err();
    match &err {
        Error::Node { stream, index, source } => {
            assert_eq!(stream, "DC");
            assert_eq!(*index, 1);
            assert!(matches!(**source, Error::BufferOverrun { .. }));
        }
        other => panic!("expected a node error, got {other:?}"),
    }
    assert!(err.aborts_import());
    assert!(err.to_string().starts_with("stream DC, node 1:"));
}

#[test]
fn test_unknown_type_is_ignored_and_decoding_continues() {
    let source = Stream::new()
        .record(0xDEAD_BEEF, &[1, 2, 3, 4, 5])
        .record(SKETCH_LINE, &sketch_line(2019, [0, 0], [0.0; 4]))
        .dc();
    let seg = read(source, DecodeConfig::for_version(2019)).unwrap();

    let unknown = seg.node(NodeId(1)).unwrap();
    assert_eq!(unknown.type_id, TypeId(0xDEAD_BEEF));
    assert_eq!(unknown.type_name, None);
    assert!(!unknown.decoded);
    assert!(unknown.attributes.is_empty());
    assert_eq!(unknown.range.len, 5);
    assert_eq!(seg.stats.ignored, 2);
    assert!(seg.node(NodeId(2)).unwrap().decoded);
}

// ============================================================================
// 2. Version gates
// ============================================================================

#[test]
fn test_sketch_line_layout_per_version() {
    for version in [2010, 2012, 2013, 2019] {
        let source = Stream::new()
            .record(SKETCH_LINE, &sketch_line(version, [2, 3], [4.0, 5.0, 6.0, 7.0]))
            .dc();
        let seg = read(source, DecodeConfig::for_version(version)).unwrap();
        assert!(seg.defects.is_empty(), "version {version}: {:?}", seg.defects);
        assert_eq!(seg.node(NodeId(1)).unwrap().f64("x"), Some(4.0), "version {version}");
    }
}

#[test]
fn test_wrong_version_is_reported_as_size_defect() {
    // 2013 layout read as 2012: the empty second list is left over
    let source = Stream::new()
        .record(SKETCH_LINE, &sketch_line(2013, [2, 3], [4.0, 5.0, 6.0, 7.0]))
        .dc();
    let seg = read(source, DecodeConfig::for_version(2012)).unwrap();
    assert_eq!(seg.stats.size_mismatched, 1);
    assert_eq!(seg.defects[0].declared, seg.defects[0].consumed + 4);
}

// ============================================================================
// 3. Size policy and the self-correcting rule
// ============================================================================

#[test]
fn test_strict_size_policy() {
    let mut payload = sketch_line(2019, [2, 3], [0.0; 4]);
    payload.extend_from_slice(&[0, 0]);
    let source = || Stream::new().record(SKETCH_LINE, &payload).dc();

    let seg = read(source(), DecodeConfig::for_version(2019)).unwrap();
    assert_eq!(seg.defects.len(), 1);

    let strict = DecodeConfig::for_version(2019).with_size_policy(SizePolicy::Strict);
    let err = read(source(), strict).unwrap_err();
    assert!(matches!(err, Error::SizeMismatch { index: 1, consumed, declared, .. } if declared == consumed + 2));
    assert!(!err.aborts_import());
}

#[test]
fn test_self_correcting_label_size() {
    let payload = label("Sketch1");
    let declared = payload.len() as u32 - 4;
    let source = Stream::new()
        .framed(LABEL, declared, &payload, declared)
        .record(SKETCH_LINE, &sketch_line(2019, [0, 0], [0.0; 4]))
        .dc();
    let seg = read(source, DecodeConfig::for_version(2019)).unwrap();

    assert_eq!(seg.stats.self_corrected, 1);
    assert!(seg.defects.is_empty());
    let label = seg.node(NodeId(1)).unwrap();
    assert_eq!(label.type_name.as_deref(), Some("Label"));
    assert_eq!(label.name.as_deref(), Some("Sketch1"));
    assert_eq!(label.range.len, payload.len());
    assert!(seg.node(NodeId(2)).unwrap().is_type("Line2D"));
}

#[test]
fn test_bad_trailer_on_ordinary_record_is_framing_error() {
    let payload = sketch_line(2019, [0, 0], [0.0; 4]);
    let size = payload.len() as u32;
    let source = Stream::new().framed(SKETCH_LINE, size, &payload, size + 1).dc();
    let err = read(source, DecodeConfig::for_version(2019)).unwrap_err();
    assert!(matches!(err, Error::Framing { .. }));
    assert!(err.aborts_import());
}

// ============================================================================
// 4. References
// ============================================================================

#[test]
fn test_cross_references_resolve_or_null() {
    // points: node 2 exists, node 40 does not
    let source = Stream::new()
        .record(SKETCH_LINE, &sketch_line(2019, [2, 40], [0.0; 4]))
        .record(0xDEAD_BEEF, &[])
        .dc();
    let seg = read(source, DecodeConfig::for_version(2019)).unwrap();
    let line = seg.node(NodeId(1)).unwrap();

    let points: Vec<Option<NodeId>> = line.get("points").unwrap().as_array().unwrap().iter().map(Value::target).collect();
    assert_eq!(points, vec![Some(NodeId(2)), None]);
    assert_eq!(line.parent.unwrap().target, Some(NodeId(1)));
    assert_eq!(seg.stats.nulled_refs, 1);
}

#[test]
fn test_dangling_label_counts_once() {
    // content header whose label points at a node that does not exist
    let mut payload = Payload::new(2019).header0().node_ref(40).u32(0x400).block().node_ref(1).u32(0).build();
    payload.extend_from_slice(&sketch_line(2019, [0, 0], [0.0; 4])[30..]);
    let seg = read(Stream::new().record(SKETCH_LINE, &payload).dc(), DecodeConfig::for_version(2019)).unwrap();

    let line = seg.node(NodeId(1)).unwrap();
    assert!(seg.defects.is_empty(), "{:?}", seg.defects);
    assert_eq!(line.get("label").and_then(Value::as_node_ref).map(|r| r.index), Some(40));
    assert_eq!(line.target("label"), None);
    assert_eq!(seg.stats.nulled_refs, 1);
}

#[test]
fn test_strict_references_reject_dangling_parent() {
    let mut payload = Payload::new(2019).content(9, 0).build();
    payload.extend_from_slice(&sketch_line(2019, [0, 0], [0.0; 4])[30..]);
    let config = DecodeConfig { strict_references: true, ..DecodeConfig::for_version(2019) };

    let err = read(Stream::new().record(SKETCH_LINE, &payload).dc(), config).unwrap_err();
    assert!(matches!(err, Error::UnresolvedReference { index: 1, target: 9, .. }));

    let seg = read(Stream::new().record(SKETCH_LINE, &payload).dc(), DecodeConfig::for_version(2019)).unwrap();
    assert_eq!(seg.node(NodeId(1)).unwrap().parent.unwrap().target, None);
}

// ============================================================================
// 5. Idempotence and export
// ============================================================================

#[test]
fn test_decoding_twice_is_identical() {
    let stream = || {
        Stream::new()
            .record(SKETCH_LINE, &sketch_line(2019, [2, 3], [1.5, -2.0, 0.6, 0.8]))
            .record(LABEL, &label("Line"))
            .record(0xDEAD_BEEF, &[7; 3])
            .dc()
    };
    let a = read(stream(), DecodeConfig::for_version(2019)).unwrap();
    let b = read(stream(), DecodeConfig::for_version(2019)).unwrap();
    assert_eq!(a.nodes, b.nodes);
    assert_eq!(export::to_json_string(&a).unwrap(), export::to_json_string(&b).unwrap());
}

#[test]
fn test_text_dump() {
    let source = Stream::new().record(LABEL, &label("Sketch1")).dc();
    let seg = read(source, DecodeConfig::for_version(2019)).unwrap();
    let mut out = Vec::new();
    export::write_text(&seg, &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert!(text.lines().any(|l| l.starts_with("[0001] 2B48A42B Label 'Sketch1'")), "{text}");
}

#[test]
fn test_app_segment_uses_app_table() {
    let payload = Payload::new(2019).header0().zeros(4).u32(0).build();
    let source = Stream::new().record(0x6759_D870, &payload).source("App", SegmentKind::App);
    let seg = read(source, DecodeConfig::for_version(2012)).unwrap();
    assert!(seg.node(NodeId(1)).unwrap().is_type("Settings"));

    // the same key means nothing in the design content table
    let source = Stream::new().record(0x6759_D870, &payload).dc();
    let seg = read(source, DecodeConfig::for_version(2012)).unwrap();
    assert!(!seg.node(NodeId(1)).unwrap().decoded);
}
