// scanner.rs

use lang::category::Category;
use lang::classify::classify;

use crate::symbol::SymbolTable;
use crate::token::Token;

// ----------------------------------------------------------------------------
// Line

/// One physical source line, split into its code part and an optional
/// trailing `//` comment.
#[derive(Debug, Clone)]
pub struct Line {
    idx: usize,
    raw: String,
    code: String,
    comment: Option<String>,
}

impl Line {
    pub fn new(idx: usize, raw: &str) -> Self {
        let (code, comment) = match raw.split_once("//") {
            Some((code, comment)) => (code, Some(comment.to_string())),
            None => (raw, None),
        };
        Self {
            idx,
            raw: raw.to_string(),
            code: code.trim().to_string(),
            comment,
        }
    }

    pub fn no(&self) -> usize {
        self.idx + 1
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }

    /// Words of the code part. Splitting on whitespace runs never yields
    /// an empty word, so indentation produces no phantom token.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.code.split_whitespace()
    }
}

// ----------------------------------------------------------------------------
// Scan

#[derive(Debug)]
pub struct ScanResult {
    pub tokens: Vec<Token>,
    pub symbols: SymbolTable,
    pub lexeme_count: usize,
    pub token_count: usize,
}

/// Classify every word of `source`, line by line. All state is local to
/// the call: repeated scans are fully isolated from each other.
///
/// Words must already be whitespace-separated; `x=5` stays one (invalid)
/// word. Scanning never fails, malformed words become `Invalid` tokens.
pub fn scan(source: &str) -> ScanResult {
    let mut tokens: Vec<Token> = Vec::new();
    let mut symbols = SymbolTable::new();
    let mut lexeme_count = 0;
    let mut token_count = 0;

    for (idx, raw) in source.lines().enumerate() {
        let line = Line::new(idx, raw);
        for word in line.words() {
            let pos = tokens.len();
            let category = classify(word);
            if category == Category::Identifier {
                symbols.record(word, pos);
            }
            tokens.push(Token::new(word, category, pos));
            // Every word is one lexeme and one token; the totals never diverge.
            lexeme_count += 1;
            token_count += 1;
        }
    }

    ScanResult {
        tokens,
        symbols,
        lexeme_count,
        token_count,
    }
}
