//! # statsdmp
//!
//! Decoder for the `stats.dmp` telemetry dumps that the Red Alert networking
//! layer writes after an online match.
//!
//! # Format Overview
//!
//! A dump is a 4-byte opaque header followed by a flat TLV stream:
//!
//! ```text
//! [4 bytes: opaque header, ignored]
//! repeat {
//!   [4 bytes: tag, ASCII, NUL-padded]
//!   [2 bytes: type, big-endian u16]
//!   [2 bytes: length, big-endian u16]
//!   [length bytes: payload]
//!   [pad bytes: zero padding to the next 4-byte boundary]
//! }
//! ```
//!
//! Fields with known primitive type codes decode to scalars or strings.
//! Type 20 fields are opaque on the wire, but the per-player variants of the
//! configured countable tags (`BLC0`..`BLC7` and friends) hold dense arrays
//! of big-endian u32 unit/building counts and are reinterpreted as such.
//!
//! ## Example
//!
//! ```no_run
//! use statsdmp::{CountableConfig, Dump};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let data = std::fs::read("stats.dmp")?;
//! let dump = Dump::parse(&data, &CountableConfig::red_alert1())?;
//!
//! if let Some(record) = dump.get("BLC0") {
//!     println!("player 0 building counts: {:?}", record.counts);
//! }
//! # Ok(())
//! # }
//! ```

mod counts;
mod dump;
mod frame;
mod value;

// Re-export main types
pub use counts::{attach_counts, known, CountableConfig};
pub use dump::{Dump, Record};
pub use frame::{frame, padding, Framing, RawField, FIELD_HEADER_SIZE, FILE_HEADER_SIZE};
pub use value::{interpret, Interpreted, TypeCode, Value};

/// Errors from stats.dmp decoding
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("dump too short for the 4-byte file header: got {actual} bytes")]
    MissingHeader { actual: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
