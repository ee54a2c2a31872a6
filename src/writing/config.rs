use serde::Deserialize;

use super::{Category, WritingPair, WritingSystem};

pub const DEFAULT_TOML: &str = include_str!("default_writing.toml");

#[derive(Deserialize)]
struct WritingConfig {
    source: SourceSection,
    target: TargetSection,
}

#[derive(Deserialize)]
struct SourceSection {
    consonants: Vec<String>,
    vowels: Vec<String>,
    diacritics: Vec<String>,
    #[serde(default)]
    cantillation: Vec<String>,
}

#[derive(Deserialize)]
struct TargetSection {
    consonants: Vec<String>,
    vowels: Vec<String>,
    diacritics: Vec<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum WritingConfigError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("{category} count mismatch: source has {source_len}, target has {target_len}")]
    LengthMismatch {
        category: Category,
        source_len: usize,
        target_len: usize,
    },
    #[error("source {category} entry is not a single character: {entry:?}")]
    NotSingleChar { category: Category, entry: String },
    #[error("duplicate source character: {0:?}")]
    DuplicateSource(char),
    #[error("writing table already initialized")]
    AlreadyInitialized,
}

/// Parse TOML text into a validated source/target pair.
///
/// Cantillation marks are appended to the source diacritics, each paired with
/// an empty target token.
pub fn parse_writing_toml(toml_str: &str) -> Result<WritingPair, WritingConfigError> {
    let config: WritingConfig =
        toml::from_str(toml_str).map_err(|e| WritingConfigError::Parse(e.to_string()))?;
    let SourceSection {
        consonants,
        vowels,
        diacritics,
        cantillation,
    } = config.source;
    let TargetSection {
        consonants: target_consonants,
        vowels: target_vowels,
        diacritics: mut target_diacritics,
    } = config.target;

    // Checked before cantillation padding so the error reports the listed counts.
    if diacritics.len() != target_diacritics.len() {
        return Err(WritingConfigError::LengthMismatch {
            category: Category::Diacritic,
            source_len: diacritics.len(),
            target_len: target_diacritics.len(),
        });
    }
    target_diacritics.extend(std::iter::repeat(String::new()).take(cantillation.len()));

    let source = WritingSystem::new(
        to_chars(Category::Consonant, consonants)?,
        to_chars(Category::Vowel, vowels)?,
        to_chars(
            Category::Diacritic,
            diacritics.into_iter().chain(cantillation).collect(),
        )?,
    );
    let target = WritingSystem::new(target_consonants, target_vowels, target_diacritics);
    WritingPair::new(source, target)
}

fn to_chars(category: Category, entries: Vec<String>) -> Result<Vec<char>, WritingConfigError> {
    entries
        .into_iter()
        .map(|entry| {
            let mut chars = entry.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => Ok(c),
                _ => Err(WritingConfigError::NotSingleChar { category, entry }),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_default_toml() {
        let pair = parse_writing_toml(DEFAULT_TOML).unwrap();
        assert_eq!(pair.source().consonants().len(), 34);
        assert_eq!(pair.source().vowels().len(), 14);
        // 6 pointing diacritics + 31 cantillation marks
        assert_eq!(pair.source().diacritics().len(), 37);
        assert!(pair.target().diacritics()[6..].iter().all(String::is_empty));
    }

    #[test]
    fn parse_valid_toml() {
        let toml = r#"
[source]
consonants = ["א", "ב"]
vowels = ["\u05B7"]
diacritics = ["\u05BD"]
cantillation = ["\u0591"]

[target]
consonants = [")", "b"]
vowels = ["a"]
diacritics = [""]
"#;
        let pair = parse_writing_toml(toml).unwrap();
        assert_eq!(pair.source().consonants(), &['א', 'ב']);
        assert_eq!(pair.source().diacritics(), &['\u{05BD}', '\u{0591}']);
        assert_eq!(pair.target().diacritics(), &["", ""]);
    }

    #[test]
    fn cantillation_is_optional() {
        let toml = r#"
[source]
consonants = ["א"]
vowels = []
diacritics = []

[target]
consonants = [")"]
vowels = []
diacritics = []
"#;
        let pair = parse_writing_toml(toml).unwrap();
        assert!(pair.source().diacritics().is_empty());
    }

    #[test]
    fn error_consonant_mismatch() {
        let toml = r#"
[source]
consonants = ["א", "ב"]
vowels = []
diacritics = []

[target]
consonants = [")"]
vowels = []
diacritics = []
"#;
        let err = parse_writing_toml(toml).unwrap_err();
        assert!(matches!(
            err,
            WritingConfigError::LengthMismatch {
                category: Category::Consonant,
                ..
            }
        ));
    }

    #[test]
    fn error_diacritic_mismatch_reports_listed_counts() {
        let toml = r#"
[source]
consonants = []
vowels = []
diacritics = ["\u05BD", "\u05BF"]
cantillation = ["\u0591", "\u0592"]

[target]
consonants = []
vowels = []
diacritics = [""]
"#;
        let err = parse_writing_toml(toml).unwrap_err();
        assert_eq!(
            err.to_string(),
            "diacritics count mismatch: source has 2, target has 1"
        );
    }

    #[test]
    fn error_multi_char_source() {
        let toml = r#"
[source]
consonants = ["אב"]
vowels = []
diacritics = []

[target]
consonants = [")b"]
vowels = []
diacritics = []
"#;
        let err = parse_writing_toml(toml).unwrap_err();
        assert!(matches!(err, WritingConfigError::NotSingleChar { .. }));
    }

    #[test]
    fn error_empty_source_entry() {
        let toml = r#"
[source]
consonants = [""]
vowels = []
diacritics = []

[target]
consonants = [")"]
vowels = []
diacritics = []
"#;
        let err = parse_writing_toml(toml).unwrap_err();
        assert!(matches!(err, WritingConfigError::NotSingleChar { .. }));
    }

    #[test]
    fn error_duplicate_message() {
        let toml = r#"
[source]
consonants = ["א"]
vowels = ["א"]
diacritics = []

[target]
consonants = [")"]
vowels = ["a"]
diacritics = []
"#;
        let err = parse_writing_toml(toml).unwrap_err();
        assert_eq!(err.to_string(), "duplicate source character: 'א'");
    }

    #[test]
    fn error_missing_section() {
        let toml = r#"
[source]
consonants = []
vowels = []
diacritics = []
"#;
        let err = parse_writing_toml(toml).unwrap_err();
        assert!(matches!(err, WritingConfigError::Parse(_)));
    }

    #[test]
    fn error_invalid_toml() {
        let err = parse_writing_toml("not valid toml {{{").unwrap_err();
        assert!(matches!(err, WritingConfigError::Parse(_)));
    }
}
