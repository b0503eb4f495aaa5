//! Keyword dictionary parsing.
//!
//! The dictionary is plain text, one `Name: Definition` per line. Blank
//! lines and lines without a colon are skipped.

use rustc_hash::FxHashMap;

/// Parse the keyword dictionary text.
#[must_use]
pub fn parse_keyword_dictionary(input: &str) -> FxHashMap<String, String> {
    let mut dict = FxHashMap::default();
    for line in input.lines() {
        let Some((name, definition)) = line.split_once(':') else {
            continue;
        };
        let name = name.trim();
        if name.is_empty() {
            continue;
        }
        dict.insert(name.to_string(), definition.trim().to_string());
    }
    dict
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_name_definition_lines() {
        let dict = parse_keyword_dictionary(
            "Heavy: Costs 1 more to respond to.\nQuick: May be played out of turn.\n",
        );
        assert_eq!(dict.len(), 2);
        assert_eq!(
            dict.get("Heavy").map(String::as_str),
            Some("Costs 1 more to respond to.")
        );
    }

    #[test]
    fn test_skips_blank_and_colonless_lines() {
        let dict = parse_keyword_dictionary("\njust some text\nHeavy: def\n   \n");
        assert_eq!(dict.len(), 1);
    }

    #[test]
    fn test_definition_may_contain_colons() {
        let dict = parse_keyword_dictionary("Chain: After this resolves: play another maneuver.\n");
        assert_eq!(
            dict.get("Chain").map(String::as_str),
            Some("After this resolves: play another maneuver.")
        );
    }
}
