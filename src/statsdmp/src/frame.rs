//! TLV stream framing
//!
//! Walks the raw buffer after the opaque file header and emits one
//! [`RawField`] per wire field, in stream order. Framing is best-effort: a
//! field whose declared payload runs past the end of the buffer stops the
//! walk, and everything framed before that point is still returned.

use crate::{Error, Result};

/// Opaque file header size in bytes (skipped, never interpreted)
pub const FILE_HEADER_SIZE: usize = 4;

/// Field header size: 4-byte tag + u16 type + u16 length
pub const FIELD_HEADER_SIZE: usize = 8;

/// One framed field, payload exactly `length` bytes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawField {
    /// Tag with trailing NUL padding trimmed
    pub tag: String,
    pub type_code: u16,
    pub length: u16,
    pub payload: Vec<u8>,
}

/// Outcome of framing a buffer
#[derive(Debug, Clone)]
pub struct Framing {
    /// Fields in stream order
    pub fields: Vec<RawField>,
    /// A field declared more payload than the buffer held
    pub truncated: bool,
}

/// Number of zero-padding bytes that follow a payload of `length` bytes
#[inline]
pub fn padding(length: u16) -> usize {
    (4 - (length as usize % 4)) % 4
}

/// Frame a raw dump buffer into its field sequence
///
/// Fails only when the buffer cannot supply the 4-byte file header. A tail of
/// fewer than 8 bytes ends the walk cleanly; mid-payload truncation keeps the
/// fields framed so far and sets [`Framing::truncated`].
pub fn frame(data: &[u8]) -> Result<Framing> {
    if data.len() < FILE_HEADER_SIZE {
        return Err(Error::MissingHeader { actual: data.len() });
    }

    let mut fields = Vec::new();
    let mut pos = FILE_HEADER_SIZE;

    while pos + FIELD_HEADER_SIZE <= data.len() {
        let tag = trim_tag(&data[pos..pos + 4]);
        let type_code = u16::from_be_bytes([data[pos + 4], data[pos + 5]]);
        let length = u16::from_be_bytes([data[pos + 6], data[pos + 7]]);
        pos += FIELD_HEADER_SIZE;

        if pos + length as usize > data.len() {
            return Ok(Framing {
                fields,
                truncated: true,
            });
        }

        let payload = data[pos..pos + length as usize].to_vec();
        pos += length as usize;

        // Padding that runs past the end of the buffer is tolerated when no
        // further field follows; the loop condition never reads into it.
        pos += padding(length);

        fields.push(RawField {
            tag,
            type_code,
            length,
            payload,
        });
    }

    Ok(Framing {
        fields,
        truncated: false,
    })
}

/// Tag bytes are ASCII, NUL-padded to 4; trailing NULs are trimmed
fn trim_tag(bytes: &[u8]) -> String {
    let end = bytes.iter().rposition(|&b| b != 0).map_or(0, |i| i + 1);
    String::from_utf8_lossy(&bytes[..end]).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field(tag: &[u8; 4], type_code: u16, payload: &[u8]) -> Vec<u8> {
        let mut out = Vec::new();
        out.extend_from_slice(tag);
        out.extend_from_slice(&type_code.to_be_bytes());
        out.extend_from_slice(&(payload.len() as u16).to_be_bytes());
        out.extend_from_slice(payload);
        out.extend(std::iter::repeat(0u8).take(padding(payload.len() as u16)));
        out
    }

    #[test]
    fn test_padding_values() {
        assert_eq!(padding(0), 0);
        assert_eq!(padding(1), 3);
        assert_eq!(padding(2), 2);
        assert_eq!(padding(3), 1);
        assert_eq!(padding(4), 0);
        assert_eq!(padding(7), 1);
    }

    #[test]
    fn test_frame_two_fields() {
        let mut data = vec![0u8; 4];
        data.extend(field(b"SDFX", 2, &[1]));
        data.extend(field(b"VERS", 5, &[0, 1, 2, 3]));

        let framing = frame(&data).unwrap();
        assert!(!framing.truncated);
        assert_eq!(framing.fields.len(), 2);
        assert_eq!(framing.fields[0].tag, "SDFX");
        assert_eq!(framing.fields[0].type_code, 2);
        assert_eq!(framing.fields[0].payload, vec![1]);
        assert_eq!(framing.fields[1].tag, "VERS");
        assert_eq!(framing.fields[1].length, 4);
    }

    #[test]
    fn test_tag_nul_trimmed() {
        let mut data = vec![0u8; 4];
        data.extend(field(b"AI\0\0", 1, &[7]));

        let framing = frame(&data).unwrap();
        assert_eq!(framing.fields[0].tag, "AI");
    }

    #[test]
    fn test_missing_file_header() {
        assert!(matches!(
            frame(&[0, 0, 0]),
            Err(Error::MissingHeader { actual: 3 })
        ));
    }

    #[test]
    fn test_short_tail_is_not_an_error() {
        let mut data = vec![0u8; 4];
        data.extend(field(b"SDFX", 2, &[1]));
        // 5 stray bytes: not enough for another field header
        data.extend_from_slice(&[0xde, 0xad, 0xbe, 0xef, 0x01]);

        let framing = frame(&data).unwrap();
        assert!(!framing.truncated);
        assert_eq!(framing.fields.len(), 1);
    }

    #[test]
    fn test_truncated_payload_keeps_prior_fields() {
        let mut data = vec![0u8; 4];
        data.extend(field(b"SDFX", 2, &[1]));
        // Header declares 8 payload bytes but only 2 follow
        data.extend_from_slice(b"CRDT");
        data.extend_from_slice(&6u16.to_be_bytes());
        data.extend_from_slice(&8u16.to_be_bytes());
        data.extend_from_slice(&[0xaa, 0xbb]);

        let framing = frame(&data).unwrap();
        assert!(framing.truncated);
        assert_eq!(framing.fields.len(), 1);
        assert_eq!(framing.fields[0].tag, "SDFX");
    }

    #[test]
    fn test_padding_past_end_of_buffer_tolerated() {
        // Last field has a 1-byte payload, so 3 padding bytes are due, but
        // the file ends right after the payload. Accepted, not truncation.
        let mut data = vec![0u8; 4];
        data.extend_from_slice(b"SDFX");
        data.extend_from_slice(&2u16.to_be_bytes());
        data.extend_from_slice(&1u16.to_be_bytes());
        data.push(1);

        let framing = frame(&data).unwrap();
        assert!(!framing.truncated);
        assert_eq!(framing.fields.len(), 1);
        assert_eq!(framing.fields[0].payload, vec![1]);
    }

    #[test]
    fn test_zero_length_payload() {
        let mut data = vec![0u8; 4];
        data.extend(field(b"NULL", 20, &[]));
        data.extend(field(b"SDFX", 2, &[1]));

        let framing = frame(&data).unwrap();
        assert_eq!(framing.fields.len(), 2);
        assert!(framing.fields[0].payload.is_empty());
        assert_eq!(framing.fields[1].tag, "SDFX");
    }
}
