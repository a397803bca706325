//! Splits a kanji file into per-JLPT-level files.

use crate::kanjifile::Kanjifile;
use serde_json::Map;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum JlptLevel {
    N5,
    N4,
    N3,
    N2,
    N1,
}

impl JlptLevel {
    pub const ALL: [JlptLevel; 5] = [Self::N5, Self::N4, Self::N3, Self::N2, Self::N1];

    /// Matches a record's category field, case-insensitively.
    pub fn from_category(category: &str) -> Option<Self> {
        match category.to_lowercase().as_str() {
            "jlptn5" => Some(Self::N5),
            "jlptn4" => Some(Self::N4),
            "jlptn3" => Some(Self::N3),
            "jlptn2" => Some(Self::N2),
            "jlptn1" => Some(Self::N1),
            _ => None,
        }
    }

    pub fn file_name(self) -> &'static str {
        match self {
            Self::N5 => "kanji-jlpt-n5.json",
            Self::N4 => "kanji-jlpt-n4.json",
            Self::N3 => "kanji-jlpt-n3.json",
            Self::N2 => "kanji-jlpt-n2.json",
            Self::N1 => "kanji-jlpt-n1.json",
        }
    }
}

/// Partitions the records by JLPT level category, preserving their order.
/// Records with an unknown or missing category are dropped. Every level is
/// present in the result even when no record matched it.
pub fn split_by_level(kanjifile: Kanjifile) -> BTreeMap<JlptLevel, Kanjifile> {
    let mut groups = JlptLevel::ALL
        .into_iter()
        .map(|level| {
            (
                level,
                Kanjifile {
                    kanji: Vec::new(),
                    rest: Map::new(),
                },
            )
        })
        .collect::<BTreeMap<_, _>>();

    for kanji in kanjifile.kanji {
        let level = kanji
            .category
            .as_deref()
            .and_then(JlptLevel::from_category);
        if let Some(group) = level.and_then(|level| groups.get_mut(&level)) {
            group.kanji.push(kanji);
        }
    }

    groups
}
