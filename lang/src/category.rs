use serde::{Deserialize, Serialize};
use strum::Display;

/// Lexical category of a single word. Every word falls into exactly one
/// of these, with `Invalid` as the catch-all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum Category {
    Keyword,
    Identifier,
    Number,
    #[strum(serialize = "Relational Operator")]
    RelOp,
    #[strum(serialize = "Other Operator")]
    OtherOp,
    Delimiter,
    Invalid,
}

#[test]
fn display_labels() {
    assert_eq!(Category::Keyword.to_string(), "Keyword");
    assert_eq!(Category::RelOp.to_string(), "Relational Operator");
    assert_eq!(Category::OtherOp.to_string(), "Other Operator");
}
