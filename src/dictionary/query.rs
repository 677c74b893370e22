use serde::{Deserialize, Deserializer};
use std::fmt;

pub const DEFAULT_DEFINITION_LIMIT: i64 = 3;
pub const ALL_DICTIONARIES: &str = "all";

/// Boolean query flag. The dictionary API expects the literal strings
/// `"true"` / `"false"`, and the inbound routes accept only those (ignoring
/// case).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Flag(pub bool);

impl Flag {
    pub fn as_param(self) -> &'static str {
        if self.0 { "true" } else { "false" }
    }

    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        if value.eq_ignore_ascii_case("true") {
            Some(Flag(true))
        } else if value.eq_ignore_ascii_case("false") {
            Some(Flag(false))
        } else {
            None
        }
    }
}

impl fmt::Display for Flag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_param())
    }
}

impl<'de> Deserialize<'de> for Flag {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Flag::parse(&raw).ok_or_else(|| {
            serde::de::Error::custom(format!("expected \"true\" or \"false\", got {raw:?}"))
        })
    }
}

pub type Params = Vec<(&'static str, String)>;

/// Filters for `word.json/{word}/definitions`.
#[derive(Debug, Clone, PartialEq)]
pub struct DefinitionsQuery {
    /// Forwarded as given; the upstream decides what a zero or negative
    /// limit means.
    pub limit: i64,
    pub part_of_speech: Option<String>,
    pub include_related: Flag,
    pub source_dictionaries: Vec<String>,
    pub use_canonical: Flag,
    pub include_tags: Flag,
}

impl Default for DefinitionsQuery {
    fn default() -> Self {
        Self {
            limit: DEFAULT_DEFINITION_LIMIT,
            part_of_speech: None,
            include_related: Flag(false),
            source_dictionaries: Vec::new(),
            use_canonical: Flag(false),
            include_tags: Flag(false),
        }
    }
}

impl DefinitionsQuery {
    /// Comma-joined source filter; no selection means every dictionary.
    pub fn source_dictionaries_param(&self) -> String {
        let selected: Vec<&str> = self
            .source_dictionaries
            .iter()
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .collect();
        if selected.is_empty() {
            ALL_DICTIONARIES.to_string()
        } else {
            selected.join(",")
        }
    }

    pub fn params(&self) -> Params {
        let mut params: Params = vec![
            ("limit", self.limit.to_string()),
            ("includeRelated", self.include_related.to_string()),
            ("useCanonical", self.use_canonical.to_string()),
            ("includeTags", self.include_tags.to_string()),
        ];
        if let Some(pos) = self.part_of_speech.as_deref().filter(|p| !p.is_empty()) {
            params.push(("partOfSpeech", pos.to_string()));
        }
        params.push(("sourceDictionaries", self.source_dictionaries_param()));
        params
    }
}

/// Filters for `word.json/{word}/frequency`. Absent year bounds are left out
/// of the request entirely.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrequencyQuery {
    pub use_canonical: Flag,
    pub start_year: Option<i32>,
    pub end_year: Option<i32>,
}

impl FrequencyQuery {
    pub fn params(&self) -> Params {
        let mut params: Params = vec![("useCanonical", self.use_canonical.to_string())];
        if let Some(start) = self.start_year {
            params.push(("startYear", start.to_string()));
        }
        if let Some(end) = self.end_year {
            params.push(("endYear", end.to_string()));
        }
        params
    }
}

/// Filters for `word.json/{word}/audio`. Only the first canonical file is
/// ever wanted.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AudioQuery {
    pub use_canonical: Flag,
}

impl AudioQuery {
    pub fn params(&self) -> Params {
        vec![
            ("useCanonical", self.use_canonical.to_string()),
            ("limit", "1".to_string()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn value<'a>(params: &'a Params, key: &str) -> Option<&'a str> {
        params.iter().find(|(k, _)| *k == key).map(|(_, v)| v.as_str())
    }

    #[test]
    fn test_source_dictionaries_joined_or_all() {
        let query = DefinitionsQuery {
            source_dictionaries: vec!["century".to_string(), "ahd".to_string()],
            ..Default::default()
        };
        assert_eq!(value(&query.params(), "sourceDictionaries"), Some("century,ahd"));

        let query = DefinitionsQuery::default();
        assert_eq!(value(&query.params(), "sourceDictionaries"), Some("all"));

        let query = DefinitionsQuery {
            source_dictionaries: vec![" ".to_string()],
            ..Default::default()
        };
        assert_eq!(query.source_dictionaries_param(), "all");
    }

    #[test]
    fn test_definitions_defaults_are_string_literals() {
        let params = DefinitionsQuery::default().params();
        assert_eq!(value(&params, "limit"), Some("3"));
        assert_eq!(value(&params, "includeRelated"), Some("false"));
        assert_eq!(value(&params, "useCanonical"), Some("false"));
        assert_eq!(value(&params, "includeTags"), Some("false"));
        assert_eq!(value(&params, "partOfSpeech"), None);
    }

    #[test]
    fn test_frequency_omits_absent_years() {
        let params = FrequencyQuery::default().params();
        assert_eq!(params, vec![("useCanonical", "false".to_string())]);

        let params = FrequencyQuery {
            use_canonical: Flag(true),
            start_year: Some(1900),
            end_year: None,
        }
        .params();
        assert_eq!(value(&params, "useCanonical"), Some("true"));
        assert_eq!(value(&params, "startYear"), Some("1900"));
        assert_eq!(value(&params, "endYear"), None);
    }

    #[test]
    fn test_audio_requests_single_result() {
        let params = AudioQuery::default().params();
        assert_eq!(value(&params, "limit"), Some("1"));
        assert_eq!(value(&params, "useCanonical"), Some("false"));
    }

    #[test]
    fn test_flag_parsing() {
        assert_eq!(Flag::parse("TRUE"), Some(Flag(true)));
        assert_eq!(Flag::parse("false"), Some(Flag(false)));
        assert_eq!(Flag::parse("yes"), None);
        assert_eq!(Flag::parse("1"), None);
        assert_eq!(Flag::parse("0"), None);
        assert!(serde_json::from_str::<Flag>("\"maybe\"").is_err());
    }
}
