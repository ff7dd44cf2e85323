//! End-to-end tests for the document container: multi-segment imports,
//! failure containment, document kind, parameters and workbooks.

mod common;

use std::sync::Arc;

use common::*;
use inventor_rs::{CollectingSink, DecodeConfig, Document, DocumentKind, NodeId, SegmentKind};
use pretty_assertions::assert_eq;

fn millimeter() -> Vec<u8> {
    Payload::new(2019).header0().block().f64(1.0).f64(1.0).block().block().build()
}

fn parameter_value(unit: u32, value: f64) -> Vec<u8> {
    Payload::new(2019).header0().node_ref(unit).block().f64(value).u16(1).zeros(4).build()
}

fn txn_mgr(kind: DocumentKind) -> Vec<u8> {
    let mut p = Payload::new(2019)
        .header0()
        .node_ref(0)
        .u32(0)
        .block()
        .node_ref(0)
        .node_ref(0)
        .u32(0);
    if kind == DocumentKind::Part {
        p = p.zeros(4);
    }
    p.u32(0).u32(0).u32(0).build()
}

// ============================================================================
// 1. Parameters
// ============================================================================

#[test]
fn test_pi_parameter_is_renamed_and_logged() {
    let log = LogCapture::new();
    let mut doc = Document::new(DecodeConfig::for_version(2019));
    let source = Stream::new()
        .record(PARAMETER, &parameter("PI", 3, 2, 0.0))
        .record(PARAMETER_VALUE, &parameter_value(3, 0.0))
        .record(MILLIMETER, &millimeter())
        .dc();

    log.run(|| doc.add_stream(source)).unwrap();
    doc.resolve();

    let seg = doc.segment("DC").unwrap();
    assert_eq!(seg.node(NodeId(1)).unwrap().name.as_deref(), Some("pi"));
    let text = log.text();
    assert!(text.contains("translated parameter name"), "{text}");
    assert!(text.contains("from=PI") && text.contains("to=pi"), "{text}");
}

#[test]
fn test_parameter_formula_and_unit() {
    let mut doc = Document::new(DecodeConfig::for_version(2019));
    let source = Stream::new()
        .record(PARAMETER, &parameter("Länge", 3, 2, 0.5))
        .record(PARAMETER_VALUE, &parameter_value(3, 0.5))
        .record(MILLIMETER, &millimeter())
        .dc();
    doc.add_stream(source).unwrap();
    doc.resolve();

    let params = doc.parameters("DC").unwrap();
    assert_eq!(params.len(), 1);
    let p = params.get("Laenge").unwrap();
    assert_eq!(p.unit_symbol(), "mm");
    assert_eq!(p.formula(), "5 mm");
    assert_eq!(p.nominal_in_unit(), 5.0);
    assert_eq!(p.tolerance, "Nominal");
}

// ============================================================================
// 2. Failure containment
// ============================================================================

#[test]
fn test_missing_document_kind_fails_only_that_segment() {
    let mut doc = Document::new(DecodeConfig::for_version(2019));
    doc.add_stream(Stream::new().record(MODELER_TXN_MGR, &txn_mgr(DocumentKind::Part)).dc())
        .unwrap();
    let settings = Payload::new(2019).header0().block().block().u32(0).build();
    doc.add_stream(Stream::new().record(0x6759_D870, &settings).source("App", SegmentKind::App)).unwrap();
    doc.resolve();

    assert_eq!(doc.failures().len(), 1);
    assert_eq!(doc.failures()[0].stream, "DC");
    assert!(doc.failures()[0].message.contains("document kind must be known"), "{:?}", doc.failures());
    assert!(doc.segment("DC").is_none());
    assert!(doc.segment("App").is_some());
}

#[test]
fn test_document_kind_selects_layout() {
    for kind in [DocumentKind::Part, DocumentKind::Assembly] {
        let mut doc = Document::new(DecodeConfig::for_version(2019).with_document_kind(kind));
        doc.add_stream(Stream::new().record(MODELER_TXN_MGR, &txn_mgr(kind)).dc()).unwrap();
        doc.resolve();
        let seg = doc.segment("DC").unwrap();
        assert!(seg.defects.is_empty(), "{kind}: {:?}", seg.defects);
        assert_eq!(doc.kind(), Some(kind));
    }
}

#[test]
fn test_buffer_overrun_aborts_import() {
    let mut payload = sketch_line(2019, [0, 0], [0.0; 4]);
    payload.truncate(payload.len() - 3);
    let mut doc = Document::new(DecodeConfig::for_version(2019));
    let err = doc.add_stream(Stream::new().record(SKETCH_LINE, &payload).dc()).unwrap_err();
    assert!(err.aborts_import());
    assert!(doc.failures().is_empty());
}

#[test]
fn test_segments_resolve_after_all_are_decoded() {
    let mut doc = Document::new(DecodeConfig::for_version(2019));
    doc.add_stream(Stream::new().record(SKETCH_LINE, &sketch_line(2019, [0, 0], [0.0; 4])).dc()).unwrap();
    doc.add_stream(Stream::new().record(LABEL, &label("L")).source("DC2", SegmentKind::Dc)).unwrap();
    assert!(doc.segments().is_empty());

    doc.resolve();
    let names: Vec<&str> = doc.segments().iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["DC", "DC2"]);
}

// ============================================================================
// 3. Embedded workbooks
// ============================================================================

fn embedded_excel(xls: &[u8]) -> Vec<u8> {
    let mut p = Payload::new(2019)
        .header0()
        .zeros(8)
        .block()
        .node_ref(0)
        .u32(0)
        .node_ref(0)
        .zeros(6)
        .block()
        .block()
        .u32(0)
        .u32(0)
        .u32(xls.len() as u32)
        .u32(0)
        .u32(0);
    p.bytes.extend_from_slice(xls);
    p.u32(0).zeros(16).build()
}

#[test]
fn test_workbook_written_to_configured_folder() {
    let dir = tempfile::tempdir().unwrap();
    let config = DecodeConfig { workbook_dir: Some(dir.path().join("xls")), ..DecodeConfig::for_version(2019) };
    let mut doc = Document::new(config);
    doc.add_stream(Stream::new().record(EMBEDDED_EXCEL, &embedded_excel(b"workbook")).dc()).unwrap();
    doc.resolve();

    let written = std::fs::read(dir.path().join("xls").join("EmbeddedExcel_0001.xls")).unwrap();
    assert_eq!(written, b"workbook");
    assert!(doc.segment("DC").unwrap().defects.is_empty());
}

#[test]
fn test_workbook_custom_sink() {
    let sink = Arc::new(CollectingSink::new());
    let mut doc = Document::new(DecodeConfig::for_version(2019)).with_workbook_sink(sink.clone());
    doc.add_stream(Stream::new().record(EMBEDDED_EXCEL, &embedded_excel(&[1, 2, 3])).dc()).unwrap();
    assert_eq!(sink.take(), vec![("EmbeddedExcel_0001.xls".to_string(), vec![1, 2, 3])]);
}
