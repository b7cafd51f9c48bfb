//! Decoded dump: record shaping and the decode driver

use std::collections::{BTreeMap, HashMap};

use serde::{Serialize, Serializer};

use crate::counts::{attach_counts, CountableConfig};
use crate::frame::{frame, RawField};
use crate::value::{interpret, Interpreted};
use crate::Result;

/// One decoded field, keyed by tag in the dump
#[derive(Debug, Clone, Serialize)]
pub struct Record {
    pub tag: String,
    #[serde(rename = "type")]
    pub type_code: u16,
    pub length: u16,
    /// Raw payload, kept verbatim for audit and countable extraction
    #[serde(serialize_with = "hex_bytes")]
    pub raw: Vec<u8>,
    pub value: Interpreted,
    /// Sparse stride-index to count map; present only on countable records
    #[serde(skip_serializing_if = "Option::is_none")]
    pub counts: Option<BTreeMap<u32, u32>>,
}

/// A decoded stats.dmp
#[derive(Debug, Clone, Serialize)]
pub struct Dump {
    pub records: HashMap<String, Record>,
    /// A field declared more payload than the file held; the records framed
    /// before the cut are kept
    pub truncated: bool,
}

impl Dump {
    /// Decode a raw dump buffer
    ///
    /// Frames the TLV stream, interprets each field, then attaches count
    /// maps to the countable records named by `config`. A tag that repeats
    /// in the stream is last-write-wins.
    pub fn parse(data: &[u8], config: &CountableConfig) -> Result<Self> {
        let framing = frame(data)?;
        let mut records = HashMap::with_capacity(framing.fields.len());

        for field in framing.fields {
            let RawField {
                tag,
                type_code,
                length,
                payload,
            } = field;
            let value = interpret(type_code, &payload);
            records.insert(
                tag.clone(),
                Record {
                    tag,
                    type_code,
                    length,
                    raw: payload,
                    value,
                    counts: None,
                },
            );
        }

        let mut dump = Dump {
            records,
            truncated: framing.truncated,
        };
        attach_counts(&mut dump, config);
        Ok(dump)
    }

    /// Look up a record by tag
    pub fn get(&self, tag: &str) -> Option<&Record> {
        self.records.get(tag)
    }
}

fn hex_bytes<S: Serializer>(bytes: &[u8], serializer: S) -> std::result::Result<S::Ok, S::Error> {
    serializer.serialize_str(&hex::encode(bytes))
}
