use indexmap::IndexMap;
use lang::category::Category;

/// First-seen metadata for one identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolEntry {
    pub name: String,
    pub category: Category,
    pub first_pos: usize,
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct SymbolTable(IndexMap<String, SymbolEntry>);

impl SymbolTable {
    pub fn new() -> Self {
        SymbolTable(IndexMap::new())
    }

    /// First occurrence wins: recording a name already in the table
    /// leaves the existing entry untouched.
    pub fn record(&mut self, name: &str, pos: usize) {
        if !self.0.contains_key(name) {
            self.0.insert(
                name.to_string(),
                SymbolEntry {
                    name: name.to_string(),
                    category: Category::Identifier,
                    first_pos: pos,
                },
            );
        }
    }

    pub fn get(&self, name: &str) -> Option<&SymbolEntry> {
        self.0.get(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Entries in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = &SymbolEntry> {
        self.0.values()
    }
}
