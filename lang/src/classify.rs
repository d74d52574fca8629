use std::collections::HashSet;

use once_cell::sync::Lazy;

use crate::category::Category;
use crate::keyword::Keyword;

/// Identifiers and numbers are capped at 8 characters.
pub const MAX_WORD_LEN: usize = 8;

static REL_OPS: Lazy<HashSet<&'static str>> =
    Lazy::new(|| HashSet::from(["==", "<", ">", "!=", ">=", "<="]));

static OTHER_OPS: Lazy<HashSet<&'static str>> =
    Lazy::new(|| HashSet::from(["=", "+", "-", "*", "/", "%"]));

static DELIMITERS: Lazy<HashSet<&'static str>> =
    Lazy::new(|| HashSet::from([".", "(", ")", ",", "{", "}", ";"]));

pub fn is_keyword(word: &str) -> bool {
    Keyword::parse(word).is_some()
}

pub fn is_identifier(word: &str) -> bool {
    match word.chars().next() {
        Some(head) if head.is_alphabetic() => {}
        _ => return false,
    }
    if word.chars().count() > MAX_WORD_LEN {
        return false;
    }
    word.chars().all(char::is_alphanumeric)
}

pub fn is_number(word: &str) -> bool {
    if word.chars().count() > MAX_WORD_LEN {
        return false;
    }
    if word == "-" {
        return false;
    }
    match word.chars().next() {
        Some(head) if head.is_ascii_digit() => {}
        _ => return false,
    }
    word.chars().all(|c| c.is_ascii_digit())
}

pub fn is_rel_op(word: &str) -> bool {
    REL_OPS.contains(word)
}

pub fn is_other_op(word: &str) -> bool {
    OTHER_OPS.contains(word)
}

pub fn is_delimiter(word: &str) -> bool {
    DELIMITERS.contains(word)
}

/// Decide the category of a single word. The checks are not mutually
/// exclusive (every keyword is identifier-shaped), so the order of the
/// chain is part of the contract: keyword wins over identifier, and
/// `Invalid` is the single terminal default.
pub fn classify(word: &str) -> Category {
    if is_keyword(word) {
        Category::Keyword
    } else if is_identifier(word) {
        Category::Identifier
    } else if is_number(word) {
        Category::Number
    } else if is_rel_op(word) {
        Category::RelOp
    } else if is_other_op(word) {
        Category::OtherOp
    } else if is_delimiter(word) {
        Category::Delimiter
    } else {
        Category::Invalid
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_word_matches_nothing() {
        assert!(!is_keyword(""));
        assert!(!is_identifier(""));
        assert!(!is_number(""));
        assert!(!is_rel_op(""));
        assert!(!is_other_op(""));
        assert!(!is_delimiter(""));
        assert_eq!(classify(""), Category::Invalid);
    }

    #[test]
    fn keyword_wins_over_identifier() {
        assert!(is_identifier("var"));
        assert_eq!(classify("var"), Category::Keyword);
    }

    #[test]
    fn lone_minus_is_an_operator_not_a_number() {
        assert!(!is_number("-"));
        assert_eq!(classify("-"), Category::OtherOp);
    }
}
