//! Hebrew-to-CAL transliteration.
//!
//! [`Mapper`] owns the paired writing systems and the [`MappingTable`] derived
//! from them. A word is walked left to right; at each position the override
//! rules in `rules` get the first chance to render the character, and the
//! table lookup is the last resort.

mod context;
mod rules;
mod table;
#[cfg(test)]
mod tests;

use std::sync::OnceLock;

use tracing::{debug, debug_span};

use crate::cal;
use crate::writing::{
    parse_writing_toml, WritingConfigError, WritingPair, WritingSystem, DEFAULT_TOML,
};

pub use context::WordContext;
pub use table::{MappingTable, TableLookupResult};

use rules::{Cursor, RULES};

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

#[derive(Debug)]
pub struct Mapper {
    pair: WritingPair,
    table: MappingTable,
}

impl Mapper {
    pub fn new(pair: WritingPair) -> Self {
        let table = MappingTable::build(&pair);
        Self { pair, table }
    }

    pub fn from_toml(toml_str: &str) -> Result<Self, WritingConfigError> {
        parse_writing_toml(toml_str).map(Self::new)
    }

    /// Set custom writing-system TOML before first `global()` call.
    pub fn init_custom(toml_content: String) -> Result<(), WritingConfigError> {
        // Validate eagerly
        parse_writing_toml(&toml_content)?;
        CUSTOM_TOML
            .set(toml_content)
            .map_err(|_| WritingConfigError::AlreadyInitialized)
    }

    /// Get or initialize the global mapper.
    pub fn global() -> &'static Mapper {
        static INSTANCE: OnceLock<Mapper> = OnceLock::new();
        INSTANCE.get_or_init(|| {
            let custom = CUSTOM_TOML.get();
            let toml_str = custom.map(|s| s.as_str()).unwrap_or(DEFAULT_TOML);
            debug!(custom = custom.is_some(), "initializing mapper");
            Mapper::from_toml(toml_str).expect("writing TOML must be valid")
        })
    }

    pub fn source(&self) -> &WritingSystem<char> {
        self.pair.source()
    }

    pub fn target(&self) -> &WritingSystem<String> {
        self.pair.target()
    }

    pub fn pair(&self) -> &WritingPair {
        &self.pair
    }

    pub fn table(&self) -> &MappingTable {
        &self.table
    }

    /// Two-character output sequences that downstream code treats as one unit.
    pub fn multiples(&self) -> &'static [&'static str] {
        &cal::MULTIPLES
    }

    /// Transliterate one word, analyzing its context first.
    pub fn map(&self, word: &str) -> String {
        self.map_with(word, WordContext::analyze(word))
    }

    /// Transliterate one word with a precomputed context.
    pub fn map_with(&self, word: &str, ctx: WordContext) -> String {
        let _span = debug_span!("map", len = word.len(), dotted = ctx.is_dotted).entered();

        let chars: Vec<char> = word.chars().collect();
        let mut out = String::with_capacity(word.len());
        let mut pos = 0;
        while pos < chars.len() {
            let cursor = Cursor::new(&chars, pos);
            let consumed = RULES
                .iter()
                .find_map(|rule| rule(&cursor, &ctx, &self.table, &mut out))
                .unwrap_or(1);
            pos += consumed;
        }
        out
    }
}
