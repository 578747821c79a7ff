//! Conversion behaviour through the public API.

use us2uk::converter::{convert_per_token, translate_word};
use us2uk::{convert, match_case, ConvertError, SpellingMap};

fn dict(pairs: &[(&str, &str)]) -> SpellingMap {
    pairs.iter().copied().collect()
}

#[test]
fn test_conversion() {
    let d = dict(&[("color", "colour")]);
    assert_eq!(convert("color", &d), "colour");
}

#[test]
fn test_no_conversion_needed() {
    let d = dict(&[("color", "colour")]);
    assert_eq!(convert("hello", &d), "hello");
}

#[test]
fn test_identity_without_known_words() {
    let d = dict(&[("color", "colour"), ("gray", "grey")]);
    for text in ["", "   ", "The quick brown fox.", "colorful grayish", "été à Paris"] {
        assert_eq!(convert(text, &d), text);
    }
}

#[test]
fn test_single_words_follow_match_case() {
    let d = dict(&[("color", "colour")]);
    for word in ["color", "Color", "COLOR", "cOLoR", "coLOR"] {
        let expected = match_case(word, "colour");
        assert_eq!(convert(word, &d), expected);
        assert_eq!(translate_word(word, &d), Some(expected));
    }
}

#[test]
fn test_favorite_things() {
    let d = dict(&[("favorite", "favourite")]);
    assert_eq!(
        convert("Colos are my favorite things... and yogurt!", &d),
        "Colos are my favourite things... and yogurt!"
    );
}

#[test]
fn test_already_uk_text_is_unchanged() {
    let d = SpellingMap::embedded().unwrap();
    let text = "The neighbour's favourite colour is grey; she organised the theatre.";
    assert_eq!(convert(text, &d), text);
    assert_eq!(convert_per_token(text, &d), text);
}

#[test]
fn test_converting_twice_changes_nothing_more() {
    let d = SpellingMap::embedded().unwrap();
    let once = convert("My Favorite COLOR is gray.", &d);
    assert_eq!(once, "My Favourite COLOUR is grey.");
    assert_eq!(convert(&once, &d), once);
}

#[test]
fn test_punctuation_and_newlines_are_preserved() {
    let d = dict(&[("color", "colour"), ("honor", "honour")]);
    let text = "(color)\n\t\"Honor\", color!\r\n";
    assert_eq!(convert(text, &d), "(colour)\n\t\"Honour\", colour!\r\n");
}

#[test]
fn test_case_collision_is_deterministic() {
    let d = dict(&[("color", "colour")]);
    let text = "color, Color, COLOR";
    let first = convert(text, &d);
    for _ in 0..10 {
        assert_eq!(convert(text, &d), first);
    }
    assert_eq!(first, "colour, colour, colour");
}

#[test]
fn test_loader_rejects_missing_column() {
    let err = SpellingMap::from_reader("us\ncolor\n".as_bytes()).unwrap_err();
    assert!(matches!(err, ConvertError::MalformedSchema(_)));
}

#[test]
fn test_long_single_line() {
    let d = dict(&[("color", "colour")]);
    let text = "color, gray; ".repeat(50_000);
    let expected = "colour, gray; ".repeat(50_000);
    assert_eq!(convert(&text, &d), expected);
    assert_eq!(convert_per_token(&text, &d), expected);
}
