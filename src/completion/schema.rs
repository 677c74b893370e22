use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::error::{Error, Result};

/// Structured answer requested from the language model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct DefinitionResult {
    pub word: String,
    pub part_of_speech: String,
    pub definition: String,
    pub example: String,
}

impl DefinitionResult {
    /// Parse the model's raw output. Anything that is not exactly this shape,
    /// or leaves the part of speech or definition blank, is rejected whole.
    pub fn from_model_output(raw: &str) -> Result<Self> {
        let parsed: DefinitionResult = serde_json::from_str(raw.trim())
            .map_err(|e| Error::ShapeMismatch(format!("model output is not a definition: {e}")))?;

        if parsed.part_of_speech.trim().is_empty() || parsed.definition.trim().is_empty() {
            return Err(Error::ShapeMismatch(
                "model output has an empty part of speech or definition".to_string(),
            ));
        }
        Ok(parsed)
    }

    /// JSON schema handed to the completion API's structured-output mode.
    pub fn json_schema() -> Value {
        json!({
            "type": "object",
            "properties": {
                "word": { "type": "string" },
                "partOfSpeech": { "type": "string" },
                "definition": { "type": "string" },
                "example": { "type": "string" }
            },
            "required": ["word", "partOfSpeech", "definition", "example"],
            "additionalProperties": false
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_well_formed_output() {
        let raw = r#"{"word":"bank","partOfSpeech":"noun","definition":"The land alongside a river.","example":"We sat on the bank."}"#;
        let result = DefinitionResult::from_model_output(raw).unwrap();
        assert_eq!(result.part_of_speech, "noun");
        assert_eq!(result.example, "We sat on the bank.");
    }

    #[test]
    fn test_rejects_schema_violations() {
        let missing = r#"{"word":"bank","definition":"x","example":"y"}"#;
        assert!(DefinitionResult::from_model_output(missing).is_err());

        let extra = r#"{"word":"bank","partOfSpeech":"noun","definition":"x","example":"y","note":"z"}"#;
        assert!(DefinitionResult::from_model_output(extra).is_err());

        let blank = r#"{"word":"bank","partOfSpeech":" ","definition":"x","example":"y"}"#;
        let err = DefinitionResult::from_model_output(blank).unwrap_err();
        assert_eq!(err.kind(), crate::error::ErrorKind::ShapeMismatch);

        assert!(DefinitionResult::from_model_output("Sure! Here it is").is_err());
    }

    #[test]
    fn test_schema_lists_every_field() {
        let schema = DefinitionResult::json_schema();
        let required = schema["required"].as_array().unwrap();
        assert_eq!(required.len(), 4);
        assert!(schema["properties"].get("partOfSpeech").is_some());
    }
}
