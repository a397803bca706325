//! Models and parses a Yomichan kanji bank.
//!
//! The bank is a single JSON array of entries. Each entry is itself an array:
//! the kanji first, then an array of definitions whose first element holds
//! the Hán Việt reading text.

use serde_json::Value;
use std::{collections::HashMap, io::Read};

/// Maps a kanji to its unique Hán Việt readings.
pub type ReadingMap = HashMap<String, Vec<String>>;

pub struct KanjiBank {
    pub readings: ReadingMap,
}

impl KanjiBank {
    pub fn from<R: Read>(r: R) -> eyre::Result<Self> {
        let entries: Vec<Value> = serde_json::from_reader(r)?;

        let mut readings: ReadingMap = HashMap::new();
        for entry in entries {
            let Value::Array(entry) = entry else {
                continue;
            };
            // malformed short entries are skipped, not errors
            if entry.len() < 2 {
                continue;
            }
            let Some(kanji) = entry[0].as_str() else {
                continue;
            };
            let definitions = entry[1]
                .as_array()
                .ok_or_else(|| eyre::eyre!("Invalid definition list for kanji '{kanji}'"))?;

            let mut unique = Vec::new();
            for definition in definitions {
                let reading = definition
                    .as_array()
                    .and_then(|d| d.first())
                    .and_then(Value::as_str)
                    .map(str::trim);
                if let Some(reading) = reading {
                    if !reading.is_empty() && !unique.iter().any(|u| u == reading) {
                        unique.push(reading.to_string());
                    }
                }
            }
            // kanji with no valid readings are left out entirely,
            // so a lookup miss always means "no reading known"
            if !unique.is_empty() {
                readings.insert(kanji.to_string(), unique);
            }
        }

        Ok(Self { readings })
    }
}
