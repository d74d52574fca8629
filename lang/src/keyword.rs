use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// The fixed keyword set. Matching is case-insensitive: the language
/// treats keywords as case-folded.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString, Display,
)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
pub enum Keyword {
    Start,
    Finish,
    Then,
    If,
    Repeat,
    Var,
    Int,
    Float,
    Do,
    Read,
    Print,
    Void,
    Return,
}

impl Keyword {
    pub fn parse(s: &str) -> Option<Self> {
        s.parse::<Self>().ok()
    }
}

#[test]
fn test() {
    assert_eq!(Keyword::parse("start"), Some(Keyword::Start));
    assert_eq!(Keyword::parse("START"), Some(Keyword::Start));
    assert_eq!(Keyword::parse("Repeat"), Some(Keyword::Repeat));
    assert_eq!(Keyword::parse("begin"), None);
    assert_eq!(Keyword::Finish.to_string(), "finish");
}
