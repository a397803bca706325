//! Enriches the meaning field of kanji records with Hán Việt readings.

use crate::{kanji_bank::ReadingMap, kanjifile::Kanjifile};
use std::{thread, time::Duration};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EnrichStats {
    /// Records whose meaning field was rewritten.
    pub modified: usize,
    /// Records with a character and meaning but no reading in the dictionary.
    pub skipped: usize,
}

/// Formats the readings of a kanji as an upper-cased, comma-separated string.
///
/// The readings are sorted so the output is deterministic regardless of the
/// order they appeared in the dictionary. Returns `None` for unknown kanji.
pub fn format_reading(kanji: &str, readings: &ReadingMap) -> Option<String> {
    let readings = readings.get(kanji)?;
    let mut formatted = readings
        .iter()
        .map(|r| r.to_uppercase())
        .collect::<Vec<_>>();
    formatted.sort();
    Some(formatted.join(", "))
}

/// Prepends the Hán Việt reading to the meaning of every kanji found in
/// the reading map. Records without a character or meaning field are left
/// untouched and counted in neither stat.
pub fn enrich(kanjifile: &mut Kanjifile, readings: &ReadingMap, delay: Duration) -> EnrichStats {
    let total = kanjifile.kanji.len();
    let mut stats = EnrichStats::default();
    for (i, kanji) in kanjifile.kanji.iter_mut().enumerate() {
        if let (Some(character), Some(meaning)) = (
            kanji.character.clone().filter(|c| !c.is_empty()),
            kanji.meaning.clone(),
        ) {
            tracing::debug!("processing {}/{total}: '{character}'", i + 1);
            match format_reading(&character, readings) {
                Some(reading) => {
                    tracing::info!("{}/{total}: '{character}' -> {reading}", i + 1);
                    kanji.meaning = Some(if meaning.trim().is_empty() {
                        reading
                    } else {
                        format!("{reading}, {meaning}")
                    });
                    stats.modified += 1;
                }
                None => stats.skipped += 1,
            }
        }
        if !delay.is_zero() {
            thread::sleep(delay);
        }
    }
    stats
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::kanji_bank::KanjiBank;
    use crate::kanjifile::Kanji;
    use serde_json::Map;

    fn readings(json: &str) -> ReadingMap {
        KanjiBank::from(json.as_bytes()).unwrap().readings
    }

    fn record(character: Option<&str>, meaning: Option<&str>) -> Kanji {
        Kanji {
            character: character.map(String::from),
            meaning: meaning.map(String::from),
            category: None,
            rest: Map::new(),
        }
    }

    fn kanjifile(kanji: Vec<Kanji>) -> Kanjifile {
        Kanjifile {
            kanji,
            rest: Map::new(),
        }
    }

    #[test]
    fn prepends_reading_to_existing_meaning() {
        let readings = readings(r#"[["水", [["THỦY"]]]]"#);
        let mut kf = kanjifile(vec![record(Some("水"), Some("water"))]);

        let stats = enrich(&mut kf, &readings, Duration::ZERO);
        assert_eq!(kf.kanji[0].meaning.as_deref(), Some("THỦY, water"));
        assert_eq!(
            stats,
            EnrichStats {
                modified: 1,
                skipped: 0
            }
        );
    }

    #[test]
    fn leaves_unknown_kanji_untouched() {
        let readings = readings("[]");
        let mut kf = kanjifile(vec![record(Some("龍"), Some("dragon"))]);

        let stats = enrich(&mut kf, &readings, Duration::ZERO);
        assert_eq!(kf.kanji[0].meaning.as_deref(), Some("dragon"));
        assert_eq!(
            stats,
            EnrichStats {
                modified: 0,
                skipped: 1
            }
        );
    }

    #[test]
    fn empty_meaning_gets_reading_without_separator() {
        let readings = readings(r#"[["火", [["HỎA"]]]]"#);
        let mut kf = kanjifile(vec![record(Some("火"), Some(""))]);

        let stats = enrich(&mut kf, &readings, Duration::ZERO);
        assert_eq!(kf.kanji[0].meaning.as_deref(), Some("HỎA"));
        assert_eq!(stats.modified, 1);
    }

    #[test]
    fn whitespace_only_meaning_counts_as_empty() {
        let readings = readings(r#"[["火", [["HỎA"]]]]"#);
        let mut kf = kanjifile(vec![record(Some("火"), Some("   "))]);

        enrich(&mut kf, &readings, Duration::ZERO);
        assert_eq!(kf.kanji[0].meaning.as_deref(), Some("HỎA"));
    }

    #[test]
    fn records_without_character_or_meaning_are_not_counted() {
        let readings = readings(r#"[["水", [["THỦY"]]]]"#);
        let mut kf = kanjifile(vec![
            record(None, Some("water")),
            record(Some(""), Some("water")),
            record(Some("水"), None),
        ]);

        let stats = enrich(&mut kf, &readings, Duration::ZERO);
        assert_eq!(stats, EnrichStats::default(), "{kf:#?}");
        assert_eq!(kf.kanji[0].meaning.as_deref(), Some("water"));
        assert_eq!(kf.kanji[2].meaning, None);
    }

    #[test]
    fn every_eligible_record_is_modified_or_skipped() {
        let readings = readings(r#"[["水", [["THỦY"]]], ["火", [["HỎA"]]]]"#);
        let mut kf = kanjifile(vec![
            record(Some("水"), Some("water")),
            record(Some("火"), Some("fire")),
            record(Some("龍"), Some("dragon")),
            record(None, Some("nothing")),
        ]);

        let stats = enrich(&mut kf, &readings, Duration::ZERO);
        assert_eq!(stats.modified + stats.skipped, 3);
    }

    #[test]
    fn readings_are_uppercased_and_sorted() {
        let readings = readings(r#"[["生", [["sinh"], ["SANH"]]]]"#);
        let formatted = format_reading("生", &readings).unwrap();
        assert_eq!(formatted, "SANH, SINH");
    }

    #[test]
    fn enrichment_is_not_idempotent() {
        // running the transform twice prepends the reading twice
        let readings = readings(r#"[["水", [["THỦY"]]]]"#);
        let mut kf = kanjifile(vec![record(Some("水"), Some("water"))]);

        enrich(&mut kf, &readings, Duration::ZERO);
        enrich(&mut kf, &readings, Duration::ZERO);
        assert_eq!(kf.kanji[0].meaning.as_deref(), Some("THỦY, THỦY, water"));
    }
}
