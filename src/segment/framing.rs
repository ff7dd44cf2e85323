//! Record framing: splits a segment buffer into record payloads.
//!
//! ```text
//! u32 size | u32 type word | payload[size] | u32 size | u32 size | ...
//!            └ low byte = type-table slot
//! ```

use uuid::Uuid;

use crate::codec;
use crate::decoder::Registry;
use crate::model::{ByteRange, TypeId};
use crate::{Error, Result};

/// Location and key of one record in the segment buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame {
    pub type_id: TypeId,
    pub range: ByteRange,
    /// Size from the record prefix, when it differs from `range.len`.
    pub declared: Option<usize>,
}

/// Type key of a type-table slot. Slots without a UUID key the record by
/// the slot number.
pub fn type_id_for_slot(types: &[Option<Uuid>], slot: u8) -> TypeId {
    match types.get(slot as usize) {
        Some(Some(uuid)) => TypeId::from_uuid(uuid),
        _ => TypeId(slot as u32),
    }
}

/// Walk the buffer and return every record frame in stream order.
pub fn index_records(
    stream: &str,
    data: &[u8],
    types: &[Option<Uuid>],
    registry: &Registry,
) -> Result<Vec<Frame>> {
    let framing = |offset: usize, message: String| Error::Framing {
        stream: stream.to_string(),
        offset,
        message,
    };

    let mut frames = Vec::new();
    let mut pos = 0;
    while pos < data.len() {
        let (size, i) = codec::read_u32(data, pos)
            .map_err(|_| framing(pos, "truncated record prefix".into()))?;
        let (word, offset) = codec::read_u32(data, i)
            .map_err(|_| framing(pos, "truncated record type word".into()))?;
        let size = size as usize;
        let type_id = type_id_for_slot(types, (word & 0xFF) as u8);

        let trailing = codec::read_u32(data, offset + size).ok().map(|(s, _)| s as usize);
        let (len, declared) = match trailing {
            Some(s) if s == size => (size, None),
            _ if registry.is_self_correcting(type_id) => {
                let len = realign(data, offset, size)
                    .ok_or_else(|| framing(offset, format!("no size marker {size} after {type_id}")))?;
                tracing::warn!(stream, %type_id, declared = size, actual = len, "corrected record size");
                (len, Some(size))
            }
            Some(s) => {
                return Err(framing(
                    offset + size,
                    format!("trailing size {s} does not match declared size {size} of {type_id}"),
                ));
            }
            None => return Err(framing(offset, format!("record {type_id} of {size} bytes runs past end"))),
        };

        frames.push(Frame { type_id, range: ByteRange { offset, len }, declared });
        pos = offset + len + 4;
    }
    Ok(frames)
}

/// Scan forward from the declared payload end until a `u32` equal to the
/// declared size appears, and return the payload length up to it.
fn realign(data: &[u8], offset: usize, size: usize) -> Option<usize> {
    (offset + size..data.len().saturating_sub(3))
        .find(|&p| matches!(codec::read_u32(data, p), Ok((s, _)) if s as usize == size))
        .map(|p| p - offset)
}
