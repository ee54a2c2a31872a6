//! CAL code markers and multi-character token handling.

/// Qushaya: hard (plosive) reading of a begadkepat letter.
pub const QUSHAYA: char = '\'';
/// Rukkakha: soft (spirant) reading of a begadkepat letter.
pub const RUKKAKHA: char = ',';
/// Shin (š).
pub const SHIN: char = '$';
/// Sin (ś).
pub const SIN: char = '&';
/// Shuruq, the u vowel written as vav with a dagesh.
pub const SHURUQ: char = 'u';

/// Two-character sequences that form a single unit in CAL output: a
/// begadkepat letter followed by the rukkakha marker.
pub const MULTIPLES: [&str; 6] = ["b,", "g,", "d,", "k,", "p,", "t,"];

pub fn is_multiple(s: &str) -> bool {
    MULTIPLES.contains(&s)
}

/// Split CAL text into units, keeping each of [`MULTIPLES`] whole.
///
/// Every other character becomes a unit of its own.
pub fn split_tokens(cal: &str) -> Vec<&str> {
    let mut tokens = Vec::with_capacity(cal.len());
    let mut rest = cal;
    while let Some(c) = rest.chars().next() {
        let width = match rest.get(..c.len_utf8() + 1) {
            Some(pair) if is_multiple(pair) => pair.len(),
            _ => c.len_utf8(),
        };
        let (token, tail) = rest.split_at(width);
        tokens.push(token);
        rest = tail;
    }
    tokens
}
