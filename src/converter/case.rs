//! Casing rules for carrying a word's shape over to its replacement.

fn is_cased(ch: char) -> bool {
    ch.is_uppercase() || ch.is_lowercase()
}

/// At least one cased character, and none of them lowercase.
pub fn is_upper(word: &str) -> bool {
    word.chars().any(is_cased) && !word.chars().any(char::is_lowercase)
}

/// Every cased run starts with an uppercase letter and continues in lowercase.
///
/// Uncased characters (digits, underscore) break a run, so `Foo_Bar` and
/// `Route66` are title-case while `McDonald` and `Foo_bar` are not.
pub fn is_title(word: &str) -> bool {
    let mut previous_cased = false;
    let mut seen_cased = false;

    for ch in word.chars() {
        if ch.is_uppercase() {
            if previous_cased {
                return false;
            }
            previous_cased = true;
            seen_cased = true;
        } else if ch.is_lowercase() {
            if !previous_cased {
                return false;
            }
            previous_cased = true;
            seen_cased = true;
        } else {
            previous_cased = false;
        }
    }

    seen_cased
}

/// First character uppercased, the rest lowercased.
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => {
            let mut out: String = first.to_uppercase().collect();
            out.push_str(&chars.as_str().to_lowercase());
            out
        }
        None => String::new(),
    }
}

/// Shape `translated` like `original`: all caps, title-case, or lowercase.
///
/// Mixed casing such as `cOLoR` falls back to lowercase.
pub fn match_case(original: &str, translated: &str) -> String {
    if is_upper(original) {
        translated.to_uppercase()
    } else if is_title(original) {
        capitalize(translated)
    } else {
        translated.to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_case_laws() {
        assert_eq!(match_case("COLOR", "colour"), "COLOUR");
        assert_eq!(match_case("Color", "colour"), "Colour");
        assert_eq!(match_case("color", "colour"), "colour");
        assert_eq!(match_case("cOLoR", "colour"), "colour");
    }

    #[test]
    fn test_single_letter_word() {
        // A lone capital is both upper and title; upper wins.
        assert_eq!(match_case("A", "ab"), "AB");
        assert_eq!(match_case("a", "ab"), "ab");
    }

    #[test]
    fn test_upper_with_digits() {
        assert!(is_upper("COLOR2"));
        assert!(!is_upper("2024"));
        assert_eq!(match_case("COLOR_2", "colour_2"), "COLOUR_2");
    }

    #[test]
    fn test_title_runs() {
        assert!(is_title("Color"));
        assert!(is_title("Foo_Bar"));
        assert!(is_title("Route66"));
        assert!(!is_title("McDonald"));
        assert!(!is_title("Foo_bar"));
        assert!(!is_title("color"));
        assert!(!is_title("123"));
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("colour"), "Colour");
        assert_eq!(capitalize("cOLOUR"), "Colour");
        assert_eq!(capitalize("éclair"), "Éclair");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn test_non_ascii() {
        assert_eq!(match_case("ÉTÉ", "été"), "ÉTÉ");
        assert_eq!(match_case("Été", "été"), "Été");
    }
}
