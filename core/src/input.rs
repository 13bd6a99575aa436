use std::collections::HashMap;

use chrono::NaiveDate;
use tracing::warn;

use crate::date::parse_human_date;
use crate::error::ValidationError;
use crate::model::task::TaskDraft;

const KNOWN_KEYS: [&str; 2] = ["due", "description"];

#[derive(Debug, PartialEq)]
pub struct ParsedInput {
    pub title: String,
    pub metadata: HashMap<String, String>,
}

/// Splits a command line into free words (the title) and `key:value`
/// metadata. Bare words that follow a key continue that key's value, so
/// descriptions can span several words without quoting:
///
/// ```text
/// Buy milk due:tomorrow description:the 2% kind
/// ```
pub fn parse_args(args: &[String]) -> ParsedInput {
    let mut title_parts: Vec<&str> = Vec::new();
    let mut metadata: HashMap<String, String> = HashMap::new();
    let mut current_key: Option<String> = None;

    for arg in args {
        if let Some((key, value)) = arg.split_once(':') {
            if !key.is_empty() {
                metadata.insert(key.to_string(), value.to_string());
                current_key = Some(key.to_string());
                continue;
            }
        }
        match &current_key {
            Some(key) => {
                let slot = metadata.entry(key.clone()).or_default();
                if !slot.is_empty() {
                    slot.push(' ');
                }
                slot.push_str(arg);
            }
            None => title_parts.push(arg.as_str()),
        }
    }

    ParsedInput {
        title: title_parts.join(" "),
        metadata,
    }
}

/// Resolves an unambiguous prefix of one of `candidates` (`du` -> `due`).
/// Returns `None` for unknown keys and for ambiguous prefixes alike.
pub fn expand_key(key: &str, candidates: &[&str]) -> Option<String> {
    if candidates.contains(&key) {
        return Some(key.to_string());
    }

    let matches: Vec<&str> = candidates
        .iter()
        .filter(|c| c.starts_with(key))
        .cloned()
        .collect();

    match matches.len() {
        1 => Some(matches[0].to_string()),
        _ => None,
    }
}

/// Builds a creation draft from one line of user input:
///
/// ```text
/// <title words...> due:<date> description:<text...>
/// ```
///
/// A missing `due:` means today (an untouched date picker). Emptiness of the
/// text fields is the store's concern, so both may come back blank here.
pub fn parse_draft(line: &str, today: NaiveDate) -> Result<TaskDraft, ValidationError> {
    let args: Vec<String> = line.split_whitespace().map(|s| s.to_string()).collect();
    let parsed = parse_args(&args);

    let mut due = None;
    let mut description = String::new();

    for (key, value) in &parsed.metadata {
        match expand_key(key, &KNOWN_KEYS).as_deref() {
            Some("due") => due = Some(parse_human_date(value, today)?),
            Some("description") => description = value.clone(),
            _ => warn!(key = %key, "ignoring unknown or ambiguous key"),
        }
    }

    Ok(TaskDraft {
        title: parsed.title,
        description,
        due: due.unwrap_or(today),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn anchor() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, 1).unwrap()
    }

    fn words(s: &str) -> Vec<String> {
        s.split_whitespace().map(|w| w.to_string()).collect()
    }

    #[test]
    fn splits_title_and_metadata() {
        let parsed = parse_args(&words("Buy milk due:tomorrow"));
        assert_eq!(parsed.title, "Buy milk");
        assert_eq!(parsed.metadata.get("due"), Some(&"tomorrow".to_string()));
    }

    #[test]
    fn bare_words_after_a_key_extend_its_value() {
        let parsed = parse_args(&words("Buy milk description:the 2% kind due:fri"));
        assert_eq!(parsed.title, "Buy milk");
        assert_eq!(
            parsed.metadata.get("description"),
            Some(&"the 2% kind".to_string())
        );
        assert_eq!(parsed.metadata.get("due"), Some(&"fri".to_string()));
    }

    #[test]
    fn expand_key_resolves_prefixes() {
        assert_eq!(expand_key("du", &KNOWN_KEYS).unwrap(), "due");
        assert_eq!(expand_key("due", &KNOWN_KEYS).unwrap(), "due");
        assert_eq!(expand_key("de", &KNOWN_KEYS).unwrap(), "description");
        assert_eq!(expand_key("desc", &KNOWN_KEYS).unwrap(), "description");

        // 'd' matches both, unknown matches none
        assert_eq!(expand_key("d", &KNOWN_KEYS), None);
        assert_eq!(expand_key("x", &KNOWN_KEYS), None);
    }

    #[test]
    fn draft_defaults_due_to_today() {
        let draft = parse_draft("Buy milk description:2%", anchor()).unwrap();
        assert_eq!(draft.title, "Buy milk");
        assert_eq!(draft.description, "2%");
        assert_eq!(draft.due, anchor());
    }

    #[test]
    fn draft_parses_explicit_due() {
        let draft = parse_draft("Buy milk de:2% du:2024-06-15", anchor()).unwrap();
        assert_eq!(
            draft.due,
            NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
        );
    }

    #[test]
    fn draft_rejects_bad_due() {
        let err = parse_draft("Buy milk de:2% due:whenever", anchor()).unwrap_err();
        assert_eq!(
            err,
            ValidationError::InvalidDueDate {
                input: "whenever".to_string()
            }
        );
    }

    #[test]
    fn draft_with_no_metadata_is_title_only() {
        let draft = parse_draft("Buy milk", anchor()).unwrap();
        assert_eq!(draft.title, "Buy milk");
        assert_eq!(draft.description, "");
        assert_eq!(draft.due, anchor());
    }
}
