//! Field value interpretation
//!
//! Dispatches on the wire type code and produces a typed value for the known
//! primitives. Interpretation never fails: a field the decoder cannot make
//! sense of keeps its raw payload and gets a non-scalar [`Interpreted`]
//! variant instead, so one bad field never aborts the whole dump.

use serde::Serialize;

/// Wire type codes used by the stats.dmp format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u16)]
pub enum TypeCode {
    Byte = 1,
    Boolean = 2,
    Short = 3,
    UnsignedShort = 4,
    Long = 5,
    UnsignedLong = 6,
    Text = 7,
    /// Custom-length composite; no scalar decode, payload stays raw
    CustomLength = 20,
}

impl TypeCode {
    /// Try to map a raw wire code to a known type
    pub fn from_code(code: u16) -> Option<Self> {
        match code {
            1 => Some(TypeCode::Byte),
            2 => Some(TypeCode::Boolean),
            3 => Some(TypeCode::Short),
            4 => Some(TypeCode::UnsignedShort),
            5 => Some(TypeCode::Long),
            6 => Some(TypeCode::UnsignedLong),
            7 => Some(TypeCode::Text),
            20 => Some(TypeCode::CustomLength),
            _ => None,
        }
    }
}

/// A decoded scalar or string value
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Byte(u8),
    Boolean(bool),
    UInt16(u16),
    UInt32(u32),
    /// ASCII text with trailing NULs trimmed; stored verbatim, display
    /// substitution of non-printable bytes is a presentation concern
    Text(String),
}

/// Per-field interpretation outcome
///
/// Callers must distinguish "unknown type" from "known type, payload too
/// short" from "opaque by design"; none of them is an error.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Interpreted {
    /// Known primitive, decoded
    Scalar(Value),
    /// Known primitive, but the payload is shorter than the type needs
    ShortPayload,
    /// Type 20: composite/array, kept raw for countable extraction
    Opaque,
    /// Unrecognized type code
    Unknown(u16),
}

/// Interpret a field payload according to its declared type code
///
/// Shorts and longs take the payload prefix, big-endian; extra payload bytes
/// past the primitive's width are ignored.
pub fn interpret(type_code: u16, payload: &[u8]) -> Interpreted {
    let Some(code) = TypeCode::from_code(type_code) else {
        return Interpreted::Unknown(type_code);
    };

    match code {
        TypeCode::Byte => match payload.first() {
            Some(&b) => Interpreted::Scalar(Value::Byte(b)),
            None => Interpreted::ShortPayload,
        },
        TypeCode::Boolean => match payload.first() {
            Some(&b) => Interpreted::Scalar(Value::Boolean(b != 0)),
            None => Interpreted::ShortPayload,
        },
        TypeCode::Short | TypeCode::UnsignedShort => {
            if payload.len() >= 2 {
                Interpreted::Scalar(Value::UInt16(u16::from_be_bytes([payload[0], payload[1]])))
            } else {
                Interpreted::ShortPayload
            }
        }
        TypeCode::Long | TypeCode::UnsignedLong => {
            if payload.len() >= 4 {
                Interpreted::Scalar(Value::UInt32(u32::from_be_bytes([
                    payload[0], payload[1], payload[2], payload[3],
                ])))
            } else {
                Interpreted::ShortPayload
            }
        }
        TypeCode::Text => {
            let end = payload.iter().rposition(|&b| b != 0).map_or(0, |i| i + 1);
            Interpreted::Scalar(Value::Text(
                String::from_utf8_lossy(&payload[..end]).into_owned(),
            ))
        }
        TypeCode::CustomLength => Interpreted::Opaque,
    }
}
