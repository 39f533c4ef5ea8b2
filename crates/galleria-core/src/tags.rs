//! Tag list parsing and matching.
//!
//! The `Tags` and `People` metadata fields hold a comma-delimited free-text
//! list. The external tag-association index maps individual tag names to
//! owning objects for efficient OR-style candidate lookup; the functions here
//! provide the exact re-check that turns those candidates into AND semantics
//! across multiple requested tags.

/// Split a raw tag field value into normalized tokens.
///
/// Tokens are split on commas, trimmed, and lower-cased; empty tokens are
/// discarded.
pub fn parse_tag_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(|token| token.trim().to_lowercase())
        .filter(|token| !token.is_empty())
        .collect()
}

/// Whether `value` contains ALL of `requested`, case-insensitively.
///
/// Single-tag searches never need this check — membership in the tag index
/// is sufficient proof. It exists for the multi-tag case, where the index
/// lookup is an OR over the requested tags.
pub fn contains_all_tags(value: &str, requested: &[String]) -> bool {
    let present = parse_tag_list(value);
    requested
        .iter()
        .all(|tag| present.contains(&tag.to_lowercase()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_tag_list_trims_and_lowercases() {
        assert_eq!(
            parse_tag_list(" Beach ,  SUNSET,ocean "),
            vec!["beach", "sunset", "ocean"]
        );
    }

    #[test]
    fn test_parse_tag_list_discards_empty_tokens() {
        assert_eq!(parse_tag_list("beach,,  ,sunset,"), vec!["beach", "sunset"]);
        assert!(parse_tag_list("").is_empty());
        assert!(parse_tag_list(" , ,").is_empty());
    }

    #[test]
    fn test_contains_all_tags_superset_matches() {
        assert!(contains_all_tags(
            "Red, Green, Blue",
            &tags(&["red", "blue"])
        ));
    }

    #[test]
    fn test_contains_all_tags_partial_does_not_match() {
        assert!(!contains_all_tags("Red, Green", &tags(&["red", "blue"])));
    }

    #[test]
    fn test_contains_all_tags_case_insensitive_both_sides() {
        assert!(contains_all_tags("ReD, bLuE", &tags(&["RED", "Blue"])));
    }

    #[test]
    fn test_contains_all_tags_whole_token_only() {
        // "sun" must not match inside "sunset".
        assert!(!contains_all_tags("sunset, beach", &tags(&["sun"])));
    }
}
