//! Player name sanitizing and validation.
//!
//! Names keep only letters (any script), whitespace and hyphens. Whitespace
//! runs collapse to one space and every word is title-cased, so `"  aNA
//! maria!! "` becomes `"Ana Maria"`. Lengths count characters, not bytes.

use rustc_hash::FxHashSet;

use super::config::GameConfig;
use super::error::{NameIssue, ValidationError};

/// Split a comma separated list into trimmed, non-empty raw names.
///
/// ```
/// use placar::core::names::parse_name_list;
///
/// assert_eq!(parse_name_list("Ana, Bia,, Caio "), vec!["Ana", "Bia", "Caio"]);
/// ```
pub fn parse_name_list(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(String::from)
        .collect()
}

/// Normalize a raw name for display.
pub fn sanitize_name(raw: &str) -> String {
    let kept: String = raw
        .chars()
        .filter(|c| c.is_alphabetic() || c.is_whitespace() || *c == '-')
        .collect();

    kept.split_whitespace()
        .map(title_case)
        .collect::<Vec<_>>()
        .join(" ")
}

fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Sanitize and check a list of raw names.
///
/// Returns the sanitized names in input order, or every issue found.
pub fn validate_names<S: AsRef<str>>(
    raw_names: &[S],
    config: &GameConfig,
) -> Result<Vec<String>, ValidationError> {
    if raw_names.is_empty() {
        return Err(ValidationError::single(NameIssue::NoNames));
    }
    if raw_names.len() > config.max_players {
        return Err(ValidationError::single(NameIssue::TooManyPlayers {
            max: config.max_players,
            got: raw_names.len(),
        }));
    }

    let mut issues = Vec::new();
    let mut seen = FxHashSet::default();
    let mut duplicates = Vec::new();
    let mut names = Vec::with_capacity(raw_names.len());

    for raw in raw_names {
        let raw = raw.as_ref();
        let name = sanitize_name(raw);
        let len = name.chars().count();

        if len == 0 {
            issues.push(NameIssue::Empty);
        } else if len < config.min_name_len {
            issues.push(NameIssue::TooShort {
                name: raw.to_string(),
                min: config.min_name_len,
            });
        } else if len > config.max_name_len {
            issues.push(NameIssue::TooLong {
                name: raw.to_string(),
                max: config.max_name_len,
            });
        } else if !seen.insert(name.to_lowercase()) {
            duplicates.push(name);
        } else {
            names.push(name);
        }
    }

    if !duplicates.is_empty() {
        issues.push(NameIssue::Duplicates(duplicates));
    }

    if issues.is_empty() {
        Ok(names)
    } else {
        Err(ValidationError::new(issues))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_strips_symbols_and_digits() {
        assert_eq!(sanitize_name("Ana123!"), "Ana");
        assert_eq!(sanitize_name("  jean-luc   picard "), "Jean-luc Picard");
    }

    #[test]
    fn test_sanitize_title_cases_words() {
        assert_eq!(sanitize_name("mARIA da silva"), "Maria Da Silva");
        assert_eq!(sanitize_name("élodie"), "Élodie");
    }

    #[test]
    fn test_sanitize_all_invalid_is_empty() {
        assert_eq!(sanitize_name("123 !!"), "");
    }

    #[test]
    fn test_validate_ok_keeps_order() {
        let names = validate_names(&["bia", "Ana", "caio"], &GameConfig::default()).unwrap();
        assert_eq!(names, vec!["Bia", "Ana", "Caio"]);
    }

    #[test]
    fn test_validate_empty_list() {
        let empty: [&str; 0] = [];
        let err = validate_names(&empty, &GameConfig::default()).unwrap_err();
        assert_eq!(err.issues, vec![NameIssue::NoNames]);
    }

    #[test]
    fn test_validate_too_many() {
        let raw: Vec<String> = (0..21).map(|i| format!("Player {}", "x".repeat(i % 5 + 2))).collect();
        let err = validate_names(&raw, &GameConfig::default()).unwrap_err();
        assert_eq!(err.issues, vec![NameIssue::TooManyPlayers { max: 20, got: 21 }]);
    }

    #[test]
    fn test_validate_collects_every_issue() {
        let err = validate_names(
            &["A", "Ana", "ANA", "42", "Abcdefghijklmnopqrstuv"],
            &GameConfig::default(),
        )
        .unwrap_err();

        assert_eq!(
            err.issues,
            vec![
                NameIssue::TooShort { name: "A".into(), min: 2 },
                NameIssue::Empty,
                NameIssue::TooLong {
                    name: "Abcdefghijklmnopqrstuv".into(),
                    max: 20
                },
                NameIssue::Duplicates(vec!["Ana".into()]),
            ]
        );
    }

    #[test]
    fn test_duplicates_are_case_insensitive_after_sanitizing() {
        let err = validate_names(&["joão", "JOÃO!"], &GameConfig::default()).unwrap_err();
        assert_eq!(err.issues, vec![NameIssue::Duplicates(vec!["João".into()])]);
    }
}
