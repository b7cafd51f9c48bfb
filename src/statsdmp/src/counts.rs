//! Countable per-player array extraction
//!
//! The per-player variants of the configured base tags (`BLC0`..`BLC7` and so
//! on) are declared as type 20 on the wire, but their payloads are dense
//! arrays of big-endian u32 unit/building counts. The declared type is
//! ignored here on purpose; this reinterpretation is a known quirk of the
//! format, not a fallback.

use std::collections::BTreeMap;

use crate::dump::Dump;

/// Reference deployment constants from reverse-engineered Red Alert dumps
pub mod known {
    /// Base tags whose per-player variants hold countable arrays
    pub const RED_ALERT1_COUNTABLE_TAGS: [&str; 16] = [
        "BLC", "VSK", "BLK", "PLK", "UNK", "INK", "VSL", "BLL", "PLL", "UNL", "INL", "VSB",
        "BLB", "PLB", "UNB", "INB",
    ];

    /// Player slots appended to a base tag (decimal digit, 0-based)
    pub const PLAYER_SLOTS: u8 = 8;
}

/// Which base tags are countable and how many player slots each has
///
/// Supplied by the caller so the decoder stays reusable across titles with
/// different tag vocabularies.
#[derive(Debug, Clone)]
pub struct CountableConfig {
    pub base_tags: Vec<String>,
    pub player_slots: u8,
}

impl CountableConfig {
    pub fn new(base_tags: Vec<String>, player_slots: u8) -> Self {
        Self {
            base_tags,
            player_slots,
        }
    }

    /// The Red Alert 1 reference configuration
    pub fn red_alert1() -> Self {
        Self::new(
            known::RED_ALERT1_COUNTABLE_TAGS
                .iter()
                .map(|t| t.to_string())
                .collect(),
            known::PLAYER_SLOTS,
        )
    }
}

/// Attach sparse count maps to every countable record present in the dump
///
/// For each `baseTag + player` key (decimal, no padding) found in the dump,
/// the record's raw payload is walked in 4-byte big-endian strides and the
/// nonzero counts are recorded by stride index. An all-zero array yields an
/// empty map, not an absent one. Absent keys are skipped silently.
pub fn attach_counts(dump: &mut Dump, config: &CountableConfig) {
    for base in &config.base_tags {
        for player in 0..config.player_slots {
            let key = format!("{base}{player}");
            if let Some(record) = dump.records.get_mut(&key) {
                record.counts = Some(stride_counts(&record.raw));
            }
        }
    }
}

/// Nonzero big-endian u32 strides keyed by stride index
///
/// Trailing bytes that do not fill a 4-byte stride are ignored.
fn stride_counts(raw: &[u8]) -> BTreeMap<u32, u32> {
    let mut counts = BTreeMap::new();
    for (t, stride) in raw.chunks_exact(4).enumerate() {
        let count = u32::from_be_bytes([stride[0], stride[1], stride[2], stride[3]]);
        if count > 0 {
            counts.insert(t as u32, count);
        }
    }
    counts
}
