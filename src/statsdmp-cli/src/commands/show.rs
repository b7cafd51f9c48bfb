//! `show` command: print every decoded field

use std::path::Path;

use anyhow::{bail, Result};
use statsdmp::{Interpreted, Record, Value};

use super::{countable_config, load_dump, printable};

pub fn handle(
    input: &Path,
    json: bool,
    raw: bool,
    tag: Option<&str>,
    tags_csv: Option<&str>,
    players: u8,
) -> Result<()> {
    let config = countable_config(tags_csv, players);
    let dump = load_dump(input, &config)?;

    if let Some(tag) = tag {
        let Some(record) = dump.get(tag) else {
            bail!("tag {} not present in {}", tag, input.display());
        };
        if json {
            println!("{}", serde_json::to_string_pretty(record)?);
        } else {
            print_record(record, raw);
        }
        return Ok(());
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&dump)?);
        return Ok(());
    }

    let mut tags: Vec<&String> = dump.records.keys().collect();
    tags.sort();

    for key in tags {
        print_record(&dump.records[key], raw);
    }

    Ok(())
}

fn print_record(record: &Record, raw: bool) {
    match &record.counts {
        Some(counts) => {
            println!("{}:", record.tag);
            for (index, count) in counts {
                println!("    index {index}: {count}");
            }
        }
        None => println!("{}: {}", record.tag, render_value(&record.value)),
    }

    if raw {
        println!(
            "    raw ({} bytes): {}",
            record.length,
            hex::encode(&record.raw)
        );
    }
}

fn render_value(value: &Interpreted) -> String {
    match value {
        Interpreted::Scalar(Value::Byte(v)) => v.to_string(),
        Interpreted::Scalar(Value::Boolean(v)) => v.to_string(),
        Interpreted::Scalar(Value::UInt16(v)) => v.to_string(),
        Interpreted::Scalar(Value::UInt32(v)) => v.to_string(),
        Interpreted::Scalar(Value::Text(s)) => printable(s),
        Interpreted::ShortPayload => "<short payload>".to_string(),
        Interpreted::Opaque => "<opaque>".to_string(),
        Interpreted::Unknown(code) => format!("<unknown type {code}>"),
    }
}
