// Upstream records from the dictionary API.
//
// Every field is optional and unknown fields are ignored: the upstream is not
// guaranteed to populate anything, and a record is never rejected for missing
// data. Only a payload that is not JSON at all fails to parse.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DictionaryDefinition {
    pub id: Option<String>,
    pub part_of_speech: Option<String>,
    pub attribution_text: Option<String>,
    pub source_dictionary: Option<String>,
    pub text: Option<String>,
    pub sequence: Option<String>,
    pub score: Option<f64>,
    pub word: Option<String>,
    pub attribution_url: Option<String>,
    pub wordnik_url: Option<String>,
    pub citations: Option<Vec<Citation>>,
    pub example_uses: Option<Vec<ExampleUse>>,
    pub labels: Option<Vec<Label>>,
    // The next three come back as plain strings from some sources and as
    // small objects from others, so they are carried through untouched.
    pub notes: Option<Vec<Value>>,
    pub related_words: Option<Vec<Value>>,
    pub text_prons: Option<Vec<Value>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Citation {
    pub source: Option<String>,
    pub cite: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExampleUse {
    pub text: Option<String>,
    pub position: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Label {
    pub text: Option<String>,
    #[serde(rename = "type")]
    pub label_type: Option<String>,
}

/// Body of `word.json/{word}/frequency`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FrequencySummary {
    #[serde(deserialize_with = "null_as_empty")]
    pub frequency: Vec<FrequencyEntry>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct FrequencyEntry {
    #[serde(deserialize_with = "integer_or_numeric_string")]
    pub year: i64,
    #[serde(deserialize_with = "integer_or_numeric_string")]
    pub count: i64,
}

/// One element of `word.json/{word}/audio`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AudioFile {
    pub file_url: Option<String>,
    pub audio_type: Option<String>,
    pub attribution_text: Option<String>,
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

fn integer_or_numeric_string<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Int(i64),
        Text(String),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Int(n) => Ok(n),
        Raw::Text(s) => s
            .trim()
            .parse()
            .map_err(|_| serde::de::Error::custom(format!("expected an integer, got {s:?}"))),
    }
}
