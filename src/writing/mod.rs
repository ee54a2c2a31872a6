//! Writing systems: ordered catalogs of consonants, vowels and diacritics.
//!
//! A source system (Hebrew, one `char` per entry) and a target system (CAL,
//! one token per entry) correspond by position within each category. The
//! pairing is validated once, when a [`WritingPair`] is constructed.

mod config;

use std::collections::HashSet;
use std::fmt;

use serde::Serialize;

pub use config::{parse_writing_toml, WritingConfigError, DEFAULT_TOML};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Consonant,
    Vowel,
    Diacritic,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Consonant, Category::Vowel, Category::Diacritic];

    pub fn name(self) -> &'static str {
        match self {
            Category::Consonant => "consonants",
            Category::Vowel => "vowels",
            Category::Diacritic => "diacritics",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WritingSystem<T> {
    consonants: Vec<T>,
    vowels: Vec<T>,
    diacritics: Vec<T>,
}

impl<T> WritingSystem<T> {
    pub fn new(consonants: Vec<T>, vowels: Vec<T>, diacritics: Vec<T>) -> Self {
        Self {
            consonants,
            vowels,
            diacritics,
        }
    }

    pub fn consonants(&self) -> &[T] {
        &self.consonants
    }

    pub fn vowels(&self) -> &[T] {
        &self.vowels
    }

    pub fn diacritics(&self) -> &[T] {
        &self.diacritics
    }

    pub fn category(&self, category: Category) -> &[T] {
        match category {
            Category::Consonant => &self.consonants,
            Category::Vowel => &self.vowels,
            Category::Diacritic => &self.diacritics,
        }
    }

    /// Entry at `index` within `category`.
    pub fn get(&self, category: Category, index: usize) -> Option<&T> {
        self.category(category).get(index)
    }

    /// All entries, category by category, in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, &T)> + '_ {
        Category::ALL
            .into_iter()
            .flat_map(move |cat| self.category(cat).iter().map(move |e| (cat, e)))
    }
}

/// Hebrew source system paired with its CAL target system.
#[derive(Debug, Clone)]
pub struct WritingPair {
    source: WritingSystem<char>,
    target: WritingSystem<String>,
}

impl WritingPair {
    /// Pair two systems, checking that every category has the same length on
    /// both sides and that no source character appears twice.
    pub fn new(
        source: WritingSystem<char>,
        target: WritingSystem<String>,
    ) -> Result<Self, WritingConfigError> {
        for category in Category::ALL {
            let source_len = source.category(category).len();
            let target_len = target.category(category).len();
            if source_len != target_len {
                return Err(WritingConfigError::LengthMismatch {
                    category,
                    source_len,
                    target_len,
                });
            }
        }

        let mut seen = HashSet::new();
        for (_, &c) in source.iter() {
            if !seen.insert(c) {
                return Err(WritingConfigError::DuplicateSource(c));
            }
        }

        Ok(Self { source, target })
    }

    pub fn source(&self) -> &WritingSystem<char> {
        &self.source
    }

    pub fn target(&self) -> &WritingSystem<String> {
        &self.target
    }

    /// Source/target entries in lockstep across all categories.
    pub fn entries(&self) -> impl Iterator<Item = (Category, char, &str)> + '_ {
        Category::ALL.into_iter().flat_map(move |cat| {
            self.source
                .category(cat)
                .iter()
                .zip(self.target.category(cat))
                .map(move |(&c, token)| (cat, c, token.as_str()))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn system<T: Clone>(c: &[T], v: &[T], d: &[T]) -> WritingSystem<T> {
        WritingSystem::new(c.to_vec(), v.to_vec(), d.to_vec())
    }

    fn tokens(s: &[&str]) -> Vec<String> {
        s.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn pair_accepts_matching_lengths() {
        let source = system(&['א', 'ב'], &['\u{05B7}'], &[]);
        let target = WritingSystem::new(tokens(&[")", "b"]), tokens(&["a"]), vec![]);
        let pair = WritingPair::new(source, target).unwrap();
        let entries: Vec<_> = pair.entries().collect();
        assert_eq!(
            entries,
            vec![
                (Category::Consonant, 'א', ")"),
                (Category::Consonant, 'ב', "b"),
                (Category::Vowel, '\u{05B7}', "a"),
            ]
        );
    }

    #[test]
    fn pair_rejects_length_mismatch() {
        let source = system(&['א'], &['\u{05B7}', '\u{05B8}'], &[]);
        let target = WritingSystem::new(tokens(&[")"]), tokens(&["a"]), vec![]);
        let err = WritingPair::new(source, target).unwrap_err();
        assert!(matches!(
            err,
            WritingConfigError::LengthMismatch {
                category: Category::Vowel,
                source_len: 2,
                target_len: 1,
            }
        ));
        assert!(err.to_string().contains("vowels"));
    }

    #[test]
    fn pair_rejects_duplicate_source() {
        let source = system(&['א', 'א'], &[], &[]);
        let target = WritingSystem::new(tokens(&[")", ")"]), vec![], vec![]);
        let err = WritingPair::new(source, target).unwrap_err();
        assert!(matches!(err, WritingConfigError::DuplicateSource('א')));
    }

    #[test]
    fn positional_get() {
        let ws = system(&['א', 'ב'], &['\u{05B7}'], &['\u{05BD}']);
        assert_eq!(ws.get(Category::Consonant, 1), Some(&'ב'));
        assert_eq!(ws.get(Category::Diacritic, 0), Some(&'\u{05BD}'));
        assert_eq!(ws.get(Category::Vowel, 1), None);
        assert_eq!(ws.iter().count(), 4);
    }
}
