pub const BASE_INSTRUCTION: &str =
    "Return the definition, part of speech, and example usage in a sentence for the given word.";

const CONTEXT_INSTRUCTION: &str = "The word was selected inside the context text provided by the user. \
     When the word has several senses, choose the one implied by that context and write the \
     example in that sense.";

/// Context worth sending: trimmed and non-empty.
pub fn normalize_context(context: Option<&str>) -> Option<&str> {
    context.map(str::trim).filter(|c| !c.is_empty())
}

pub fn system_instruction(context: Option<&str>) -> String {
    match normalize_context(context) {
        Some(_) => format!("{BASE_INSTRUCTION} {CONTEXT_INSTRUCTION}"),
        None => BASE_INSTRUCTION.to_string(),
    }
}

pub fn user_message(word: &str, context: Option<&str>) -> String {
    match normalize_context(context) {
        Some(context) => format!("Word: {word}\nContext: {context}"),
        None => format!("Word: {word}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_without_context() {
        assert_eq!(system_instruction(None), BASE_INSTRUCTION);
        assert_eq!(user_message("bank", None), "Word: bank");
    }

    #[test]
    fn test_with_context() {
        let context = Some("  she rowed toward the bank of the river ");
        assert!(system_instruction(context).contains("implied by that context"));
        assert_eq!(
            user_message("bank", context),
            "Word: bank\nContext: she rowed toward the bank of the river"
        );
    }

    #[test]
    fn test_blank_context_is_ignored() {
        assert_eq!(system_instruction(Some("   ")), BASE_INSTRUCTION);
        assert_eq!(user_message("bank", Some("")), "Word: bank");
    }
}
