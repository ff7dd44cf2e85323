//! Shared helpers for the end-to-end tests: a segment stream builder, a
//! little-endian payload builder and a log capture.

#![allow(dead_code)]

use std::io;
use std::sync::Arc;

use inventor_rs::{SegmentKind, SegmentSource};
use parking_lot::Mutex;
use uuid::Uuid;

/// A key no decoder is registered for; used for the segment root.
pub const ROOT: u32 = 0xFFFF_0000;

/// Builds a framed segment stream and its type table.
#[derive(Debug, Default)]
pub struct Stream {
    bytes: Vec<u8>,
    types: Vec<Option<Uuid>>,
}

impl Stream {
    pub fn new() -> Self {
        Self::default().record(ROOT, &[])
    }

    fn slot(&mut self, key: u32) -> u8 {
        let uuid = Some(Uuid::from_fields(key, 0x1234, 0x5678, &[0; 8]));
        let slot = match self.types.iter().position(|t| *t == uuid) {
            Some(i) => i,
            None => {
                self.types.push(uuid);
                self.types.len() - 1
            }
        };
        slot as u8
    }

    /// A well-formed record.
    pub fn record(self, key: u32, payload: &[u8]) -> Self {
        let size = payload.len() as u32;
        self.framed(key, size, payload, size)
    }

    /// A record whose prefix and trailer claim `size` bytes whatever the
    /// payload length.
    pub fn framed(mut self, key: u32, size: u32, payload: &[u8], trailer: u32) -> Self {
        let slot = self.slot(key);
        self.bytes.extend_from_slice(&size.to_le_bytes());
        self.bytes.extend_from_slice(&[slot, 0, 0, 0]);
        self.bytes.extend_from_slice(payload);
        self.bytes.extend_from_slice(&trailer.to_le_bytes());
        self
    }

    pub fn source(self, name: &str, kind: SegmentKind) -> SegmentSource {
        SegmentSource::new(name, kind, self.bytes, self.types)
    }

    pub fn dc(self) -> SegmentSource {
        self.source("DC", SegmentKind::Dc)
    }
}

/// Little-endian payload builder.
#[derive(Debug, Clone)]
pub struct Payload {
    pub bytes: Vec<u8>,
    version: u32,
}

impl Payload {
    pub fn new(version: u32) -> Self {
        Self { bytes: Vec::new(), version }
    }

    pub fn u8(mut self, v: u8) -> Self { self.bytes.push(v); self }
    pub fn u16(mut self, v: u16) -> Self { self.bytes.extend_from_slice(&v.to_le_bytes()); self }
    pub fn u32(mut self, v: u32) -> Self { self.bytes.extend_from_slice(&v.to_le_bytes()); self }
    pub fn f64(mut self, v: f64) -> Self { self.bytes.extend_from_slice(&v.to_le_bytes()); self }
    pub fn zeros(mut self, n: usize) -> Self { self.bytes.resize(self.bytes.len() + n, 0); self }

    /// Reference word pair for a node index.
    pub fn node_ref(self, index: u32) -> Self { self.u32(index) }

    pub fn text16(self, s: &str) -> Self {
        let units: Vec<u16> = s.encode_utf16().collect();
        units.iter().fold(self.u32(units.len() as u32), |b, &u| b.u16(u))
    }

    /// Block-size marker: present from 2011 on.
    pub fn block(self) -> Self {
        if self.version >= 2011 { self.zeros(4) } else { self }
    }

    pub fn header0(self) -> Self { self.u32(0).u16(0).block() }

    /// ContentHeader: header0, label, flags, block, parent, index.
    pub fn content(self, parent: u32, flags: u32) -> Self {
        self.header0().node_ref(0).u32(flags).block().node_ref(parent).u32(0)
    }

    pub fn build(self) -> Vec<u8> { self.bytes }
}

/// Collects formatted log output while a closure runs.
#[derive(Debug, Clone, Default)]
pub struct LogCapture(Arc<Mutex<Vec<u8>>>);

impl io::Write for LogCapture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> { Ok(()) }
}

impl LogCapture {
    pub fn new() -> Self { Self::default() }

    pub fn run<T>(&self, f: impl FnOnce() -> T) -> T {
        let writer = self.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::TRACE)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();
        tracing::subscriber::with_default(subscriber, f)
    }

    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.0.lock()).into_owned()
    }
}

// ============================================================================
// Record payloads
// ============================================================================

/// SketchLine through (x, y) along (dx, dy), with two endpoint references.
pub fn sketch_line(version: u32, points: [u32; 2], xy: [f64; 4]) -> Vec<u8> {
    let mut p = Payload::new(version)
        .content(1, 0x400)
        .block()
        .block()
        .block()
        .u32(0)
        .block()
        .node_ref(1)
        .block()
        .u32(2)
        .zeros(8)
        .node_ref(points[0])
        .node_ref(points[1])
        .block();
    if version > 2012 {
        p = p.u32(0);
    }
    xy.iter().fold(p, |p, &v| p.f64(v)).build()
}

/// Parameter record (version 2019 layout).
pub fn parameter(name: &str, unit: u32, value: u32, nominal: f64) -> Vec<u8> {
    Payload::new(2019)
        .content(0, 0)
        .zeros(12)
        .text16(name)
        .zeros(4)
        .node_ref(unit)
        .node_ref(value)
        .f64(nominal)
        .f64(nominal)
        .u16(0)
        .u16(0)
        .build()
}

/// Label record (version 2019 layout).
pub fn label(name: &str) -> Vec<u8> {
    Payload::new(2019)
        .header0()
        .node_ref(0)
        .u32(0)
        .block()
        .node_ref(0)
        .node_ref(0)
        .node_ref(0)
        .block()
        .u32(0)
        .u32(0)
        .text16(name)
        .zeros(16)
        .build()
}

pub const SKETCH_LINE: u32 = 0xCE52_DF3A;
pub const PARAMETER: u32 = 0x9087_4D26;
pub const LABEL: u32 = 0x2B48_A42B;
pub const MILLIMETER: u32 = 0x6241_20BC;
pub const PARAMETER_VALUE: u32 = 0xF8A7_7A04;
pub const MODELER_TXN_MGR: u32 = 0x4521_21B6;
pub const EMBEDDED_EXCEL: u32 = 0x182D_1C8A;
