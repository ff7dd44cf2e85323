//! Primitive codec: fixed-width little-endian reads from a byte buffer.
//!
//! Every function takes `(buffer, offset)` and returns `(value, next_offset)`.
//! Fixed-width reads advance by exactly the width of the type; length
//! prefixed reads consume a `u32` header first.
//!
//! ```text
//! u8 / u16 / u32 / u64 / i8 / i16 / i32 / i64 / f32 / f64   little-endian
//! uuid    = u32 time_low | u16 time_mid | u16 time_hi | u8[8] clock_seq+node
//! text16  = u32 length   | u16[length] UTF-16LE code units
//! text8   = u32 length   | u8[length]  Latin-1
//! ```
//!
//! Reading past the end of the buffer yields [`Error::BufferOverrun`];
//! no partial value is ever returned.

use byteorder::{ByteOrder, LittleEndian};
use uuid::Uuid;

use crate::{Error, Result};

/// Borrow `need` bytes at `offset` or fail with a buffer overrun.
#[inline]
pub fn take(buf: &[u8], offset: usize, need: usize) -> Result<&[u8]> {
    match offset.checked_add(need) {
        Some(end) if end <= buf.len() => Ok(&buf[offset..end]),
        _ => Err(Error::BufferOverrun { offset, need, len: buf.len() }),
    }
}

pub fn read_u8(buf: &[u8], offset: usize) -> Result<(u8, usize)> {
    let b = take(buf, offset, 1)?;
    Ok((b[0], offset + 1))
}

pub fn read_i8(buf: &[u8], offset: usize) -> Result<(i8, usize)> {
    let b = take(buf, offset, 1)?;
    Ok((b[0] as i8, offset + 1))
}

pub fn read_u16(buf: &[u8], offset: usize) -> Result<(u16, usize)> {
    Ok((LittleEndian::read_u16(take(buf, offset, 2)?), offset + 2))
}

pub fn read_i16(buf: &[u8], offset: usize) -> Result<(i16, usize)> {
    Ok((LittleEndian::read_i16(take(buf, offset, 2)?), offset + 2))
}

pub fn read_u32(buf: &[u8], offset: usize) -> Result<(u32, usize)> {
    Ok((LittleEndian::read_u32(take(buf, offset, 4)?), offset + 4))
}

pub fn read_i32(buf: &[u8], offset: usize) -> Result<(i32, usize)> {
    Ok((LittleEndian::read_i32(take(buf, offset, 4)?), offset + 4))
}

pub fn read_u64(buf: &[u8], offset: usize) -> Result<(u64, usize)> {
    Ok((LittleEndian::read_u64(take(buf, offset, 8)?), offset + 8))
}

pub fn read_i64(buf: &[u8], offset: usize) -> Result<(i64, usize)> {
    Ok((LittleEndian::read_i64(take(buf, offset, 8)?), offset + 8))
}

pub fn read_f32(buf: &[u8], offset: usize) -> Result<(f32, usize)> {
    Ok((LittleEndian::read_f32(take(buf, offset, 4)?), offset + 4))
}

pub fn read_f64(buf: &[u8], offset: usize) -> Result<(f64, usize)> {
    Ok((LittleEndian::read_f64(take(buf, offset, 8)?), offset + 8))
}

/// Read a 16 byte UUID record (`time_low`, `time_mid`, `time_hi` little-endian,
/// `clock_seq` and `node` as stored).
pub fn read_uuid(buf: &[u8], offset: usize) -> Result<(Uuid, usize)> {
    let b = take(buf, offset, 16)?;
    let d1 = LittleEndian::read_u32(&b[0..4]);
    let d2 = LittleEndian::read_u16(&b[4..6]);
    let d3 = LittleEndian::read_u16(&b[6..8]);
    let mut d4 = [0u8; 8];
    d4.copy_from_slice(&b[8..16]);
    Ok((Uuid::from_fields(d1, d2, d3, &d4), offset + 16))
}

// ============================================================================
// Fixed-count arrays
// ============================================================================

pub fn read_u8_array(buf: &[u8], offset: usize, count: usize) -> Result<(Vec<u8>, usize)> {
    let b = take(buf, offset, count)?;
    Ok((b.to_vec(), offset + count))
}

pub fn read_u16_array(buf: &[u8], offset: usize, count: usize) -> Result<(Vec<u16>, usize)> {
    let b = take(buf, offset, count.saturating_mul(2))?;
    let mut out = vec![0u16; count];
    LittleEndian::read_u16_into(b, &mut out);
    Ok((out, offset + b.len()))
}

pub fn read_i16_array(buf: &[u8], offset: usize, count: usize) -> Result<(Vec<i16>, usize)> {
    let b = take(buf, offset, count.saturating_mul(2))?;
    let mut out = vec![0i16; count];
    LittleEndian::read_i16_into(b, &mut out);
    Ok((out, offset + b.len()))
}

pub fn read_u32_array(buf: &[u8], offset: usize, count: usize) -> Result<(Vec<u32>, usize)> {
    let b = take(buf, offset, count.saturating_mul(4))?;
    let mut out = vec![0u32; count];
    LittleEndian::read_u32_into(b, &mut out);
    Ok((out, offset + b.len()))
}

pub fn read_i32_array(buf: &[u8], offset: usize, count: usize) -> Result<(Vec<i32>, usize)> {
    let b = take(buf, offset, count.saturating_mul(4))?;
    let mut out = vec![0i32; count];
    LittleEndian::read_i32_into(b, &mut out);
    Ok((out, offset + b.len()))
}

pub fn read_f32_array(buf: &[u8], offset: usize, count: usize) -> Result<(Vec<f32>, usize)> {
    let b = take(buf, offset, count.saturating_mul(4))?;
    let mut out = vec![0f32; count];
    LittleEndian::read_f32_into(b, &mut out);
    Ok((out, offset + b.len()))
}

pub fn read_f64_array(buf: &[u8], offset: usize, count: usize) -> Result<(Vec<f64>, usize)> {
    let b = take(buf, offset, count.saturating_mul(8))?;
    let mut out = vec![0f64; count];
    LittleEndian::read_f64_into(b, &mut out);
    Ok((out, offset + b.len()))
}

// ============================================================================
// Length-prefixed text
// ============================================================================

/// `u32` length followed by that many UTF-16LE code units. Unpaired
/// surrogates are replaced rather than rejected.
pub fn read_text16(buf: &[u8], offset: usize) -> Result<(String, usize)> {
    let (len, i) = read_u32(buf, offset)?;
    let (units, i) = read_u16_array(buf, i, len as usize)?;
    let text = String::from_utf16_lossy(&units);
    Ok((text.trim_end_matches('\0').to_string(), i))
}

/// `u32` length followed by that many 8-bit characters (Latin-1).
pub fn read_text8(buf: &[u8], offset: usize) -> Result<(String, usize)> {
    let (len, i) = read_u32(buf, offset)?;
    let b = take(buf, i, len as usize)?;
    let text: String = b.iter().map(|&c| c as char).collect();
    Ok((text.trim_end_matches('\0').to_string(), i + b.len()))
}
