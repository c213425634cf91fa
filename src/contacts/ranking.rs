//! Fuzzy match ranking for contact search.
//!
//! A query is ranked against a single field value, from an exact
//! case-sensitive match down to "every query character appears in order".
//! Accents are folded out of both sides before comparing.

use regex::Regex;
use std::sync::LazyLock;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

pub const CASE_SENSITIVE_EQUAL: f64 = 7.0;
pub const EQUAL: f64 = 6.0;
pub const STARTS_WITH: f64 = 5.0;
pub const WORD_STARTS_WITH: f64 = 4.0;
pub const CONTAINS: f64 = 3.0;
pub const ACRONYM: f64 = 2.0;
pub const MATCHES: f64 = 1.0;
pub const NO_MATCH: f64 = 0.0;

static WORD_SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[ -]").expect("valid separator regex"));

/// Folds accented Latin letters to their plain form.
///
/// Letters with a canonical decomposition lose their combining marks. Letters
/// that carry the accent in the base glyph (`Ł`, `Ø`, `ß`, ...) go through
/// `fold_letter`. The result is recomposed so scripts like Hangul keep one
/// char per syllable.
pub fn strip_diacritics(value: &str) -> String {
    let mut folded = String::with_capacity(value.len());
    for c in value.nfd().filter(|c| !is_combining_mark(*c)) {
        match fold_letter(c) {
            Some(plain) => folded.push_str(plain),
            None => folded.push(c),
        }
    }
    folded.nfc().collect()
}

fn fold_letter(c: char) -> Option<&'static str> {
    let plain = match c {
        'Ł' => "L",
        'ł' => "l",
        'Ø' => "O",
        'ø' => "o",
        'Đ' | 'Ð' => "D",
        'đ' | 'ð' => "d",
        'Ħ' => "H",
        'ħ' => "h",
        'Ŧ' => "T",
        'ŧ' => "t",
        'ı' => "i",
        'Þ' => "TH",
        'þ' => "th",
        'Æ' => "AE",
        'æ' => "ae",
        'Œ' => "OE",
        'œ' => "oe",
        'ß' => "ss",
        _ => return None,
    };
    Some(plain)
}

/// Ranks `query` against `value`. Higher is better; `NO_MATCH` is zero.
pub fn rank(value: &str, query: &str) -> f64 {
    let value = strip_diacritics(value);
    let query = strip_diacritics(query);

    if query.chars().count() > value.chars().count() {
        return NO_MATCH;
    }
    if value == query {
        return CASE_SENSITIVE_EQUAL;
    }

    let value = value.to_lowercase();
    let query = query.to_lowercase();

    if value == query {
        return EQUAL;
    }
    if value.starts_with(&query) {
        return STARTS_WITH;
    }
    if value.contains(&format!(" {}", query)) {
        return WORD_STARTS_WITH;
    }
    if value.contains(&query) {
        return CONTAINS;
    }
    if query.chars().count() == 1 {
        return NO_MATCH;
    }
    if acronym(&value).contains(&query) {
        return ACRONYM;
    }

    closeness(&value, &query)
}

/// Best rank of `query` over several field values.
pub fn best_rank<'a>(values: impl IntoIterator<Item = &'a str>, query: &str) -> f64 {
    values
        .into_iter()
        .map(|value| rank(value, query))
        .fold(NO_MATCH, f64::max)
}

/// First character of every word, splitting on spaces and hyphens.
pub fn acronym(value: &str) -> String {
    WORD_SEPARATOR
        .split(value)
        .filter_map(|word| word.chars().next())
        .collect()
}

// All query chars must appear in order. Tighter spans score closer to 2.0.
fn closeness(value: &str, query: &str) -> f64 {
    let haystack: Vec<char> = value.chars().collect();
    let mut needle = query.chars();

    let Some(first_char) = needle.next() else {
        return NO_MATCH;
    };
    let Some(first_pos) = haystack.iter().position(|c| *c == first_char) else {
        return NO_MATCH;
    };

    let mut cursor = first_pos + 1;
    for wanted in needle {
        match haystack[cursor..].iter().position(|c| *c == wanted) {
            Some(offset) => cursor += offset + 1,
            None => return NO_MATCH,
        }
    }

    let spread = (cursor - (first_pos + 1)).max(1) as f64;
    MATCHES + 1.0 / spread
}
