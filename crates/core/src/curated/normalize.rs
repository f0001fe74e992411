//! Name canonicalization shared by the curated list and the catalog.

use once_cell::sync::Lazy;
use regex_lite::Regex;

static NON_ALNUM: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^a-z0-9]+").unwrap());

/// Normalize a publication name to its reconciliation key.
///
/// Applied identically to curated-list entries and catalog record names:
/// camel-case word boundaries become spaces, the whole string is lowercased,
/// `&` becomes the word "and", every run of non-alphanumerics collapses to a
/// single space, and the result is trimmed.
pub fn normalize_name(name: &str) -> String {
    // Split concatenated camel-case words ("VentureBeat" -> "Venture Beat")
    let mut spaced = String::with_capacity(name.len() + 4);
    let mut prev_lower = false;
    for c in name.chars() {
        if prev_lower && c.is_uppercase() {
            spaced.push(' ');
        }
        prev_lower = c.is_lowercase();
        spaced.push(c);
    }

    let lowered = spaced.to_lowercase().replace('&', "and");
    NON_ALNUM.replace_all(&lowered, " ").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camel_case_split() {
        assert_eq!(normalize_name("VentureBeat"), "venture beat");
        assert_eq!(normalize_name("Venture Beat"), "venture beat");
    }

    #[test]
    fn test_ampersand_becomes_and() {
        assert_eq!(normalize_name("Rolling & Stone"), "rolling and stone");
        assert_eq!(normalize_name("rolling and stone"), "rolling and stone");
    }

    #[test]
    fn test_punctuation_collapses_to_space() {
        assert_eq!(normalize_name("The New-York Times!"), "the new york times");
        assert_eq!(normalize_name("  Wired.com  "), "wired com");
    }

    #[test]
    fn test_digits_kept() {
        assert_eq!(normalize_name("Studio54"), "studio54");
    }

    #[test]
    fn test_empty_and_garbage() {
        assert_eq!(normalize_name(""), "");
        assert_eq!(normalize_name("!!! ---"), "");
    }

    #[test]
    fn test_consecutive_capitals_not_split() {
        // Only lowercase->uppercase boundaries split; acronyms stay joined.
        assert_eq!(normalize_name("BBC"), "bbc");
        assert_eq!(normalize_name("TechCrunch"), "tech crunch");
    }
}
