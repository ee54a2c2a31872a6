//! Character-level classification for pointed Hebrew text.

/// ּ HEBREW POINT DAGESH OR MAPIQ (also the shuruq dot inside vav).
pub const DAGESH: char = '\u{05BC}';
/// ֿ HEBREW POINT RAFE
pub const RAFE: char = '\u{05BF}';
/// ׁ HEBREW POINT SHIN DOT
pub const SHIN_DOT: char = '\u{05C1}';
/// ׂ HEBREW POINT SIN DOT
pub const SIN_DOT: char = '\u{05C2}';
/// ׇ HEBREW POINT QAMATS QATAN
pub const QAMATS_QATAN: char = '\u{05C7}';
/// ש HEBREW LETTER SHIN
pub const SHIN: char = '\u{05E9}';
/// ו HEBREW LETTER VAV
pub const VAV: char = '\u{05D5}';

/// ב ג ד כ פ ת
const BEGADKEPAT: [char; 6] = [
    '\u{05D1}', '\u{05D2}', '\u{05D3}', '\u{05DB}', '\u{05E4}', '\u{05EA}',
];

/// Letters that alternate between a hard and a soft (spirant) reading.
pub fn is_begadkepat(c: char) -> bool {
    BEGADKEPAT.contains(&c)
}

/// Whether the word is written in pointed spelling: it carries a vowel point,
/// dagesh/mapiq, rafe, shin dot or sin dot.
pub fn is_dotted(word: &str) -> bool {
    word.chars().any(|c| {
        ('\u{05B0}'..=DAGESH).contains(&c)
            || matches!(c, RAFE | SHIN_DOT | SIN_DOT | QAMATS_QATAN)
    })
}

/// Combining points and marks of the Hebrew block (cantillation, vowels,
/// dagesh, rafe, shin/sin dots, upper/lower dots, qamats qatan).
///
/// U+05BE (maqaf), U+05C0 (paseq), U+05C3 (sof pasuq) and U+05C6 (nun hafukha)
/// are punctuation inside that range and are excluded.
pub fn is_point(c: char) -> bool {
    ('\u{0591}'..='\u{05C7}').contains(&c)
        && !matches!(c, '\u{05BE}' | '\u{05C0}' | '\u{05C3}' | '\u{05C6}')
}
