//! Override rules applied before the default table lookup.
//!
//! Each rule either declines (`None`) without touching the output, or appends
//! its rendering and returns the number of source characters it consumed.

use crate::cal;
use crate::hebrew::{self, DAGESH, RAFE, SHIN, SIN_DOT, VAV};

use super::context::WordContext;
use super::table::MappingTable;

/// Position of the walk within a word.
pub(super) struct Cursor<'w> {
    chars: &'w [char],
    pos: usize,
}

impl<'w> Cursor<'w> {
    pub(super) fn new(chars: &'w [char], pos: usize) -> Self {
        debug_assert!(pos < chars.len());
        Self { chars, pos }
    }

    fn current(&self) -> char {
        self.chars[self.pos]
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos + 1).copied()
    }

    fn prev(&self) -> Option<char> {
        self.pos.checked_sub(1).map(|p| self.chars[p])
    }
}

pub(super) type Rule =
    fn(&Cursor<'_>, &WordContext, &MappingTable, &mut String) -> Option<usize>;

/// Evaluated in order; the first rule that accepts a position wins.
pub(super) const RULES: [Rule; 4] = [begadkepat, dagesh, shin, table_default];

/// Begadkepat letter in a pointed word: hard when dagesh follows directly,
/// plain when rafe follows or at the end of the word, soft otherwise.
///
/// Dagesh forte (gemination) is rendered the same as dagesh lene.
fn begadkepat(
    cursor: &Cursor<'_>,
    ctx: &WordContext,
    table: &MappingTable,
    out: &mut String,
) -> Option<usize> {
    let c = cursor.current();
    if !ctx.is_dotted || !hebrew::is_begadkepat(c) {
        return None;
    }
    table.push_mapped(c, out);

    match cursor.peek() {
        Some(DAGESH) => {
            out.push(cal::QUSHAYA);
            Some(2)
        }
        Some(RAFE) | None => Some(1),
        Some(_) => {
            out.push(cal::RUKKAKHA);
            Some(1)
        }
    }
}

/// Dagesh not taken by a begadkepat letter: shuruq directly after vav,
/// dropped elsewhere.
fn dagesh(
    cursor: &Cursor<'_>,
    _ctx: &WordContext,
    _table: &MappingTable,
    out: &mut String,
) -> Option<usize> {
    if cursor.current() != DAGESH {
        return None;
    }
    if cursor.prev() == Some(VAV) {
        out.push(cal::SHURUQ);
    }
    Some(1)
}

fn shin(
    cursor: &Cursor<'_>,
    _ctx: &WordContext,
    _table: &MappingTable,
    out: &mut String,
) -> Option<usize> {
    if cursor.current() != SHIN {
        return None;
    }
    if cursor.peek() == Some(SIN_DOT) {
        out.push(cal::SIN);
        return Some(2);
    }
    out.push(cal::SHIN);
    Some(1)
}

fn table_default(
    cursor: &Cursor<'_>,
    _ctx: &WordContext,
    table: &MappingTable,
    out: &mut String,
) -> Option<usize> {
    table.push_mapped(cursor.current(), out);
    Some(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn neighbours_are_adjacent_only() {
        // shin, qamats, sin dot
        let word = chars("\u{05E9}\u{05B8}\u{05C2}");
        assert_eq!(Cursor::new(&word, 0).peek(), Some('\u{05B8}'));
        // vav, holam, dagesh
        let word = chars("\u{05D5}\u{05B9}\u{05BC}");
        assert_eq!(Cursor::new(&word, 2).prev(), Some('\u{05B9}'));
        assert_eq!(Cursor::new(&word, 0).prev(), None);
    }

    #[test]
    fn edges() {
        let word = chars("\u{05D0}\u{05D1}");
        assert_eq!(Cursor::new(&word, 0).peek(), Some('\u{05D1}'));
        assert_eq!(Cursor::new(&word, 1).peek(), None);
    }
}
