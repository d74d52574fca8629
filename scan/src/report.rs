use color_print::{cformat, cprintln};
use lang::category::Category;

use crate::scanner::{Line, ScanResult};

fn cformat_category(category: Category) -> String {
    match category {
        Category::Keyword => cformat!("<red>{:<20}</>", category),
        Category::Identifier => cformat!("<blue>{:<20}</>", category),
        Category::Number => cformat!("<yellow>{:<20}</>", category),
        Category::RelOp => cformat!("<cyan>{:<20}</>", category),
        Category::OtherOp => cformat!("<cyan>{:<20}</>", category),
        Category::Delimiter => cformat!("<green>{:<20}</>", category),
        Category::Invalid => cformat!("<red,bold>{:<20}</>", category),
    }
}

pub fn print_tokens(result: &ScanResult) {
    println!("Tokens:");
    println!("  {:<12} {:<20} {:>4}", "Value:", "Type:", "Pos:");
    for token in &result.tokens {
        println!(
            "  {:<12} {} {:>4}",
            token.value,
            cformat_category(token.category),
            token.pos
        );
    }
}

pub fn print_symbols(result: &ScanResult) {
    println!("Symbol Table:");
    println!("  {:<12} {:<20} {:>4}", "ID:", "Type:", "Pos:");
    for entry in result.symbols.iter() {
        println!(
            "  {:<12} {} {:>4}",
            entry.name,
            cformat_category(entry.category),
            entry.first_pos
        );
    }
}

pub fn print_counts(result: &ScanResult) {
    println!("Total number of lexemes: {}", result.lexeme_count);
    println!("Total number of tokens: {}", result.token_count);
}

pub fn print_report(result: &ScanResult) {
    print_tokens(result);
    println!();
    print_symbols(result);
    println!();
    print_counts(result);
}

/// Numbered source listing. A pure projection of the input text, like
/// the report itself.
pub fn print_source(source: &str) {
    for (idx, raw) in source.lines().enumerate() {
        let line = Line::new(idx, raw);
        let text = match line.comment() {
            Some(comment) if line.code().is_empty() => format!("//{}", comment),
            Some(comment) => format!("{} //{}", line.code(), comment),
            None => line.code().to_string(),
        };
        cprintln!(" <blue>{:>4} |</> {}", line.no(), text);
    }
}
