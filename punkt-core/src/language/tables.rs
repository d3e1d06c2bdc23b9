//! Character class lookup with an ASCII fast path

use std::collections::HashSet;

/// Set of characters with O(1) membership
#[derive(Debug, Clone)]
pub struct CharTable {
    /// ASCII lookup table for chars 0-127
    ascii_table: [bool; 128],
    /// Non-ASCII members (rare)
    non_ascii: HashSet<char>,
    /// Members in insertion order, for display and serialization
    chars: Vec<char>,
}

impl CharTable {
    /// Build from a list of characters; duplicates are ignored
    pub fn new(chars: impl IntoIterator<Item = char>) -> Self {
        let mut ascii_table = [false; 128];
        let mut non_ascii = HashSet::new();
        let mut ordered = Vec::new();

        for ch in chars {
            let fresh = if ch.is_ascii() {
                !std::mem::replace(&mut ascii_table[ch as usize], true)
            } else {
                non_ascii.insert(ch)
            };
            if fresh {
                ordered.push(ch);
            }
        }

        Self {
            ascii_table,
            non_ascii,
            chars: ordered,
        }
    }

    /// Membership test - hot path
    #[inline]
    pub fn contains(&self, ch: char) -> bool {
        if ch.is_ascii() {
            self.ascii_table[ch as usize]
        } else {
            self.non_ascii.contains(&ch)
        }
    }

    /// Members in the order they were configured
    pub fn chars(&self) -> &[char] {
        &self.chars
    }
}
