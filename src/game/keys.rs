//! Logical key events and the keyboard color map

use crate::core::{LetterVerdict, normalize_char};
use std::collections::BTreeMap;

/// On-screen keyboard layout, top row first
pub const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKLÇ", "ZXCVBNM"];

/// A logical key press
///
/// Letters are limited to A–Z plus Ç, the extra consonant on the Portuguese
/// layout. Capturing physical keys is the caller's job.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Letter(char),
    Enter,
    Backspace,
}

impl Key {
    /// Parse a key name: `"ENTER"`, `"BACKSPACE"` or a single letter
    ///
    /// # Examples
    /// ```
    /// use letreco::game::Key;
    ///
    /// assert_eq!(Key::parse("enter"), Some(Key::Enter));
    /// assert_eq!(Key::parse("ç"), Some(Key::Letter('Ç')));
    /// assert_eq!(Key::parse("1"), None);
    /// ```
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        match name.to_uppercase().as_str() {
            "ENTER" => Some(Self::Enter),
            "BACKSPACE" => Some(Self::Backspace),
            single => {
                let mut chars = single.chars();
                match (chars.next(), chars.next()) {
                    (Some(ch), None) => Self::from_char(ch),
                    _ => None,
                }
            }
        }
    }

    /// Map a typed character to a letter key, if it is on the keyboard
    #[must_use]
    pub fn from_char(ch: char) -> Option<Self> {
        let upper = ch.to_uppercase().next()?;
        (upper.is_ascii_uppercase() || upper == 'Ç').then_some(Self::Letter(upper))
    }
}

/// Best verdict seen so far for each normalized letter
///
/// Letters never guessed are absent from the map.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct KeyColorMap(BTreeMap<char, LetterVerdict>);

impl KeyColorMap {
    /// Merge verdicts from evaluated tiles, keeping the highest priority
    pub fn from_tiles(tiles: impl IntoIterator<Item = (char, LetterVerdict)>) -> Self {
        let mut map = BTreeMap::new();
        for (letter, verdict) in tiles {
            if !verdict.is_evaluated() {
                continue;
            }
            let entry = map.entry(normalize_char(letter)).or_insert(verdict);
            if verdict.priority() > entry.priority() {
                *entry = verdict;
            }
        }
        Self(map)
    }

    /// Verdict for a letter, accents ignored
    #[must_use]
    pub fn get(&self, letter: char) -> Option<LetterVerdict> {
        self.0.get(&normalize_char(letter)).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (char, LetterVerdict)> + '_ {
        self.0.iter().map(|(&k, &v)| (k, v))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterVerdict::{Absent, Correct, Pending, Present};

    #[test]
    fn parse_key_names() {
        assert_eq!(Key::parse("ENTER"), Some(Key::Enter));
        assert_eq!(Key::parse("Backspace"), Some(Key::Backspace));
        assert_eq!(Key::parse("a"), Some(Key::Letter('A')));
        assert_eq!(Key::parse("Ç"), Some(Key::Letter('Ç')));
    }

    #[test]
    fn parse_rejects_other_keys() {
        assert_eq!(Key::parse(""), None);
        assert_eq!(Key::parse("AB"), None);
        assert_eq!(Key::parse("é"), None);
        assert_eq!(Key::parse("ESC"), None);
        assert_eq!(Key::from_char(' '), None);
    }

    #[test]
    fn best_verdict_wins() {
        let map = KeyColorMap::from_tiles([
            ('A', Absent),
            ('A', Present),
            ('R', Correct),
            ('R', Present),
            ('O', Absent),
        ]);
        assert_eq!(map.get('A'), Some(Present));
        assert_eq!(map.get('R'), Some(Correct));
        assert_eq!(map.get('O'), Some(Absent));
        assert_eq!(map.get('Z'), None);
    }

    #[test]
    fn accented_letters_share_a_key() {
        let map = KeyColorMap::from_tiles([('Ã', Present), ('A', Absent), ('Ç', Correct)]);
        assert_eq!(map.get('A'), Some(Present));
        assert_eq!(map.get('C'), Some(Correct));
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn unevaluated_tiles_are_ignored() {
        let map = KeyColorMap::from_tiles([('Q', Pending)]);
        assert!(map.is_empty());
    }
}
