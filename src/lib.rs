//! Hebrew Unicode to CAL (Comprehensive Aramaic Lexicon) code transliteration.
//!
//! ```
//! assert_eq!(hebrew_cal::to_cal("אולד"), ")wld");
//! assert_eq!(hebrew_cal::to_cal_opt(None::<&str>), None);
//! ```

pub mod cal;
pub mod hebrew;
pub mod mapper;
pub mod trace_init;
pub mod writing;

pub use mapper::{Mapper, MappingTable, TableLookupResult, WordContext};
pub use writing::{Category, WritingConfigError, WritingPair, WritingSystem};

/// Convert a word from Hebrew Unicode to CAL code using the global mapper.
///
/// Characters outside both alphabets (digits, hyphens, Latin letters) are
/// copied unchanged.
pub fn to_cal(word: &str) -> String {
    Mapper::global().map(word)
}

/// Like [`to_cal`], passing an absent word through as `None`.
pub fn to_cal_opt<S: AsRef<str>>(word: Option<S>) -> Option<String> {
    word.map(|w| to_cal(w.as_ref()))
}
