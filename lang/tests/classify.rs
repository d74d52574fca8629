use lang::category::Category::{self, *};
use lang::classify::classify;

fn assert(word: &str, expect: Category) {
    assert_eq!(classify(word), expect, "word: {:?}", word);
}

macro_rules! case {
    ($name:ident, $word:expr, $expect:expr) => {
        #[test]
        fn $name() {
            assert($word, $expect);
        }
    };
}

// ---- Keywords ----
case!(kw_start, "start", Keyword);
case!(kw_finish, "finish", Keyword);
case!(kw_then, "then", Keyword);
case!(kw_if, "if", Keyword);
case!(kw_repeat, "repeat", Keyword);
case!(kw_var, "var", Keyword);
case!(kw_int, "int", Keyword);
case!(kw_float, "float", Keyword);
case!(kw_do, "do", Keyword);
case!(kw_read, "read", Keyword);
case!(kw_print, "print", Keyword);
case!(kw_void, "void", Keyword);
case!(kw_return, "return", Keyword);

// Keywords are case-folded
case!(kw_upper, "START", Keyword);
case!(kw_capitalized, "Finish", Keyword);
case!(kw_mixed, "rEpEaT", Keyword);

// ---- Identifiers ----
case!(ident_single, "x", Identifier);
case!(ident_alnum, "abc123", Identifier);
case!(ident_digits_tail, "a1", Identifier);
case!(ident_eight_chars, "abcdefgh", Identifier);
case!(ident_nine_chars, "abcdefghi", Invalid);
case!(ident_underscore, "a_b", Invalid);
case!(ident_leading_digit, "1abc", Invalid);
case!(ident_unicode, "αβγ", Identifier);

// ---- Numbers ----
case!(num_zero, "0", Number);
case!(num_five, "5", Number);
case!(num_eight_digits, "12345678", Number);
case!(num_nine_digits, "123456789", Invalid);
case!(num_signed, "-5", Invalid);
case!(num_decimal, "3.14", Invalid);

// ---- Relational operators ----
case!(rel_eq, "==", RelOp);
case!(rel_lt, "<", RelOp);
case!(rel_gt, ">", RelOp);
case!(rel_neq, "!=", RelOp);
case!(rel_geq, ">=", RelOp);
case!(rel_leq, "<=", RelOp);

// ---- Other operators ----
case!(op_assign, "=", OtherOp);
case!(op_plus, "+", OtherOp);
case!(op_minus, "-", OtherOp);
case!(op_star, "*", OtherOp);
case!(op_slash, "/", OtherOp);
case!(op_percent, "%", OtherOp);

// ---- Delimiters ----
case!(delim_period, ".", Delimiter);
case!(delim_lparen, "(", Delimiter);
case!(delim_rparen, ")", Delimiter);
case!(delim_comma, ",", Delimiter);
case!(delim_lcurly, "{", Delimiter);
case!(delim_rcurly, "}", Delimiter);
case!(delim_semicolon, ";", Delimiter);

// ---- Invalid ----
case!(invalid_glued_assign, "x=5", Invalid);
case!(invalid_at, "@", Invalid);
case!(invalid_excl, "!", Invalid);
case!(
    invalid_overlong_identifier,
    "LongIdentifierThatExceedsTheEightCharacterLimit",
    Invalid
);
