//! Command handlers

pub mod counts;
pub mod show;

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use statsdmp::{CountableConfig, Dump};

/// Build the countable configuration from CLI overrides
pub fn countable_config(tags_csv: Option<&str>, players: u8) -> CountableConfig {
    match tags_csv {
        Some(csv) => CountableConfig::new(
            csv.split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
            players,
        ),
        None => {
            let mut config = CountableConfig::red_alert1();
            config.player_slots = players;
            config
        }
    }
}

/// Read and decode a dump file, warning on mid-field truncation
pub fn load_dump(input: &Path, config: &CountableConfig) -> Result<Dump> {
    let data =
        fs::read(input).with_context(|| format!("failed to read {}", input.display()))?;
    let dump = Dump::parse(&data, config)
        .with_context(|| format!("failed to decode {}", input.display()))?;

    if dump.truncated {
        eprintln!(
            "warning: {} ends mid-field; showing the fields framed before the cut",
            input.display()
        );
    }

    Ok(dump)
}

/// Replace bytes outside the printable ASCII range with '?' for display
pub fn printable(text: &str) -> String {
    text.chars()
        .map(|c| if (' '..='~').contains(&c) { c } else { '?' })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_printable_substitution() {
        assert_eq!(printable("commander"), "commander");
        assert_eq!(printable("a\u{7}b"), "a?b");
        assert_eq!(printable("tab\there"), "tab?here");
    }

    #[test]
    fn test_countable_config_csv_override() {
        let config = countable_config(Some("AAA, BBB,,CCC"), 4);
        assert_eq!(config.base_tags, vec!["AAA", "BBB", "CCC"]);
        assert_eq!(config.player_slots, 4);
    }

    #[test]
    fn test_countable_config_default_is_red_alert() {
        let config = countable_config(None, 8);
        assert_eq!(config.base_tags.len(), 16);
        assert_eq!(config.player_slots, 8);
    }

    #[test]
    fn test_load_dump_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let mut data = vec![0u8; 4];
        data.extend_from_slice(b"SDFX");
        data.extend_from_slice(&2u16.to_be_bytes());
        data.extend_from_slice(&1u16.to_be_bytes());
        data.extend_from_slice(&[1, 0, 0, 0]);
        file.write_all(&data).unwrap();

        let dump = load_dump(file.path(), &countable_config(None, 8)).unwrap();
        assert!(dump.get("SDFX").is_some());
    }

    #[test]
    fn test_load_dump_missing_file() {
        let result = load_dump(
            Path::new("/nonexistent/stats.dmp"),
            &countable_config(None, 8),
        );
        assert!(result.is_err());
    }
}
