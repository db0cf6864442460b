//! Payload decoding for a single marker occurrence
//!
//! A scan is a pure function of `(buffer, cursor, limit)`: it returns the
//! decoded value together with the offset just past the payload, and the
//! caller decides where to continue. Nothing here holds scan state.

use byteorder::{ByteOrder, LittleEndian};
use glam::DVec3;

use super::descriptor::{Decoding, FieldDescriptor, MARKER_HEADER_LEN};
use super::scanner::find_marker;

/// One decoded payload.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// Undecoded bytes (`RawInteger` / `RawBytes`).
    Raw(Vec<u8>),
    /// Cleaned fixed-width text.
    Text(String),
    /// Position vector, each component rounded to 2 decimals.
    Vector(DVec3),
    /// Single-precision float.
    Float(f32),
}

impl FieldValue {
    #[must_use]
    pub fn as_raw(&self) -> Option<&[u8]> {
        match self {
            FieldValue::Raw(bytes) => Some(bytes),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(text) => Some(text),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_vector(&self) -> Option<DVec3> {
        match self {
            FieldValue::Vector(v) => Some(*v),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_float(&self) -> Option<f32> {
        match self {
            FieldValue::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Raw bytes read as a little-endian unsigned integer.
    #[must_use]
    pub fn to_le_uint(&self) -> Option<u64> {
        self.as_raw().map(le_uint)
    }

    /// Raw bytes read as a big-endian unsigned integer.
    #[must_use]
    pub fn to_be_uint(&self) -> Option<u64> {
        self.as_raw().map(be_uint)
    }
}

impl std::fmt::Display for FieldValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldValue::Raw(bytes) => {
                for b in bytes {
                    write!(f, "{b:02X}")?;
                }
                Ok(())
            }
            FieldValue::Text(text) => f.write_str(text),
            FieldValue::Vector(v) => write!(f, "{} {} {}", v.x, v.y, v.z),
            FieldValue::Float(x) => write!(f, "{x}"),
        }
    }
}

/// Little-endian unsigned integer from up to 8 bytes (extra bytes ignored).
#[must_use]
pub fn le_uint(bytes: &[u8]) -> u64 {
    bytes
        .iter()
        .take(8)
        .rev()
        .fold(0u64, |acc, &b| (acc << 8) | u64::from(b))
}

/// Big-endian unsigned integer from up to 8 bytes (extra bytes ignored).
#[must_use]
pub fn be_uint(bytes: &[u8]) -> u64 {
    bytes
        .iter()
        .take(8)
        .fold(0u64, |acc, &b| (acc << 8) | u64::from(b))
}

/// A successfully decoded occurrence.
#[derive(Debug, Clone, PartialEq)]
pub struct Decoded {
    pub value: FieldValue,
    /// Offset of the marker's first byte.
    pub marker: usize,
    /// Offset just past the payload; the next scan continues here.
    pub next: usize,
}

/// Why an occurrence could not be decoded. Both cases are recoverable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanMiss {
    /// No marker at or after the cursor, before the limit.
    NotFound,
    /// Marker found, but the payload runs past the limit.
    Truncated {
        marker: usize,
        needed: usize,
        available: usize,
    },
}

/// Find the next occurrence of `desc` at or after `cursor` and decode it.
///
/// The marker must start before `limit` and the payload must end at or
/// before `limit`; `limit` is clamped to the buffer length.
pub fn scan_field(
    desc: &FieldDescriptor,
    buffer: &[u8],
    cursor: usize,
    limit: usize,
) -> Result<Decoded, ScanMiss> {
    let limit = limit.min(buffer.len());
    let marker = find_marker(buffer, &desc.signature, cursor)
        .filter(|&m| m < limit)
        .ok_or(ScanMiss::NotFound)?;
    decode_at(desc, buffer, marker, limit)
}

/// Decode the payload of the marker at `marker`.
pub fn decode_at(
    desc: &FieldDescriptor,
    buffer: &[u8],
    marker: usize,
    limit: usize,
) -> Result<Decoded, ScanMiss> {
    let limit = limit.min(buffer.len());
    let start = marker + MARKER_HEADER_LEN;
    let end = start + desc.payload_length;
    if end > limit {
        return Err(ScanMiss::Truncated {
            marker,
            needed: desc.payload_length,
            available: limit.saturating_sub(start),
        });
    }

    let payload = &buffer[start..end];
    let value = match desc.decoding {
        Decoding::FixedString(_) => FieldValue::Text(clean_text(payload)),
        Decoding::Vector3Double => FieldValue::Vector(DVec3::new(
            round2(LittleEndian::read_f64(&payload[0..8])),
            round2(LittleEndian::read_f64(&payload[8..16])),
            round2(LittleEndian::read_f64(&payload[16..24])),
        )),
        Decoding::Float32 => FieldValue::Float(LittleEndian::read_f32(payload)),
        Decoding::RawInteger | Decoding::RawBytes => FieldValue::Raw(payload.to_vec()),
    };

    tracing::trace!("{} at {marker}: {value}", desc.name);
    Ok(Decoded {
        value,
        marker,
        next: end,
    })
}

/// Keep printable ASCII only, then trim surrounding whitespace.
fn clean_text(bytes: &[u8]) -> String {
    let text: String = bytes
        .iter()
        .filter(|b| (32..=126).contains(*b))
        .map(|&b| char::from(b))
        .collect();
    text.trim().to_string()
}

/// Round to 2 decimals, half-to-even on the exact decimal value (`0.125` →
/// `0.12`). Non-finite and very large values pass through unchanged.
fn round2(v: f64) -> f64 {
    format!("{v:.2}").parse().unwrap_or(v)
}
