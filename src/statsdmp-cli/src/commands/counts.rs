//! `counts` command: print only the per-player countable arrays

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::Result;

use super::{countable_config, load_dump};

pub fn handle(input: &Path, json: bool, tags_csv: Option<&str>, players: u8) -> Result<()> {
    let config = countable_config(tags_csv, players);
    let dump = load_dump(input, &config)?;

    let mut countable: Vec<(&str, &BTreeMap<u32, u32>)> = dump
        .records
        .values()
        .filter_map(|r| r.counts.as_ref().map(|c| (r.tag.as_str(), c)))
        .collect();
    countable.sort_by_key(|(tag, _)| *tag);

    if json {
        let map: BTreeMap<&str, &BTreeMap<u32, u32>> = countable.into_iter().collect();
        println!("{}", serde_json::to_string_pretty(&map)?);
        return Ok(());
    }

    for (tag, counts) in countable {
        println!("{tag}:");
        for (index, count) in counts {
            println!("    index {index}: {count}");
        }
    }

    Ok(())
}
