//! Types modeling the kanji dataset file.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Kanjifile {
    pub kanji: Vec<Kanji>,
    /// Document fields other than `kanji`, passed through unchanged.
    #[serde(flatten)]
    pub rest: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Kanji {
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub character: Option<String>,
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meaning: Option<String>,
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Record fields other than the ones above, passed through unchanged.
    #[serde(flatten)]
    pub rest: Map<String, Value>,
}
