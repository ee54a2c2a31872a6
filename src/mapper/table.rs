use std::collections::HashMap;

use tracing::debug;

use crate::writing::WritingPair;

/// Outcome of a single-character table lookup.
#[derive(Debug, PartialEq, Eq)]
pub enum TableLookupResult<'a> {
    /// Not in the table; the character passes through unchanged.
    Unmapped,
    /// In the table with an empty token; the character is dropped.
    Suppressed,
    Token(&'a str),
}

/// Default source-to-target mapping, built once from a [`WritingPair`].
#[derive(Debug)]
pub struct MappingTable {
    entries: HashMap<char, Box<str>>,
}

impl MappingTable {
    pub fn build(pair: &WritingPair) -> Self {
        let entries: HashMap<char, Box<str>> = pair
            .entries()
            .map(|(_, c, token)| (c, Box::from(token)))
            .collect();
        debug!(entries = entries.len(), "mapping table built");
        Self { entries }
    }

    pub fn lookup(&self, c: char) -> TableLookupResult<'_> {
        match self.entries.get(&c) {
            None => TableLookupResult::Unmapped,
            Some(token) if token.is_empty() => TableLookupResult::Suppressed,
            Some(token) => TableLookupResult::Token(token),
        }
    }

    /// Append the default rendering of `c` to `out`.
    pub fn push_mapped(&self, c: char, out: &mut String) {
        match self.lookup(c) {
            TableLookupResult::Token(token) => out.push_str(token),
            TableLookupResult::Suppressed => {}
            TableLookupResult::Unmapped => out.push(c),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
