//! Transformations for kanji dataset files: Hán Việt reading enrichment
//! and splitting by JLPT level.

pub mod enrich;
pub mod kanji_bank;
pub mod kanjifile;
pub mod split;
