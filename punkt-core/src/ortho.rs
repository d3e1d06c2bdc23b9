//! Orthographic context: where and in which case a type has been seen

use std::fmt;

use serde::{Deserialize, Serialize};

/// Position of a token relative to the sentence it occurs in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Position {
    /// First token of a sentence
    Initial,
    /// Inside a sentence
    Internal,
    /// After an abbreviation, ellipsis or line break: could be either
    Unknown,
}

/// Case of a token's first character
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetterCase {
    Upper,
    Lower,
    /// Digits, punctuation and caseless scripts
    None,
}

impl LetterCase {
    pub fn of(text: &str) -> Self {
        match text.chars().next() {
            Some(ch) if ch.is_uppercase() => LetterCase::Upper,
            Some(ch) if ch.is_lowercase() => LetterCase::Lower,
            _ => LetterCase::None,
        }
    }
}

/// Six-bit set of (position, case) observations for one type
///
/// Bit values are stable and part of the persisted model format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct OrthoContext(u8);

impl OrthoContext {
    pub const BEG_UC: u8 = 1 << 1;
    pub const MID_UC: u8 = 1 << 2;
    pub const UNK_UC: u8 = 1 << 3;
    pub const BEG_LC: u8 = 1 << 4;
    pub const MID_LC: u8 = 1 << 5;
    pub const UNK_LC: u8 = 1 << 6;

    pub const UPPERCASE: u8 = Self::BEG_UC | Self::MID_UC | Self::UNK_UC;
    pub const LOWERCASE: u8 = Self::BEG_LC | Self::MID_LC | Self::UNK_LC;

    const ALL: u8 = Self::UPPERCASE | Self::LOWERCASE;

    pub const fn empty() -> Self {
        Self(0)
    }

    /// Build from raw bits, dropping anything outside the six known flags
    pub const fn from_bits_truncate(bits: u8) -> Self {
        Self(bits & Self::ALL)
    }

    pub const fn bits(self) -> u8 {
        self.0
    }

    /// The flag recording an observation, if the case carries information
    pub fn flag(position: Position, case: LetterCase) -> Option<u8> {
        match (position, case) {
            (Position::Initial, LetterCase::Upper) => Some(Self::BEG_UC),
            (Position::Internal, LetterCase::Upper) => Some(Self::MID_UC),
            (Position::Unknown, LetterCase::Upper) => Some(Self::UNK_UC),
            (Position::Initial, LetterCase::Lower) => Some(Self::BEG_LC),
            (Position::Internal, LetterCase::Lower) => Some(Self::MID_LC),
            (Position::Unknown, LetterCase::Lower) => Some(Self::UNK_LC),
            (_, LetterCase::None) => None,
        }
    }

    #[inline]
    pub fn contains(self, flags: u8) -> bool {
        self.0 & flags != 0
    }

    pub fn insert(&mut self, flags: u8) {
        self.0 |= flags & Self::ALL;
    }

    pub fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn has_lowercase(self) -> bool {
        self.contains(Self::LOWERCASE)
    }

    pub fn has_uppercase(self) -> bool {
        self.contains(Self::UPPERCASE)
    }

    /// Names of the set flags, for display
    pub fn labels(self) -> Vec<&'static str> {
        [
            (Self::BEG_UC, "BEG-UC"),
            (Self::MID_UC, "MID-UC"),
            (Self::UNK_UC, "UNK-UC"),
            (Self::BEG_LC, "BEG-LC"),
            (Self::MID_LC, "MID-LC"),
            (Self::UNK_LC, "UNK-LC"),
        ]
        .into_iter()
        .filter(|(flag, _)| self.contains(*flag))
        .map(|(_, label)| label)
        .collect()
    }
}

impl TryFrom<u8> for OrthoContext {
    type Error = String;

    fn try_from(bits: u8) -> Result<Self, Self::Error> {
        if bits & !Self::ALL != 0 {
            return Err(format!("invalid orthographic context bits: {bits:#04x}"));
        }
        Ok(Self(bits))
    }
}

impl From<OrthoContext> for u8 {
    fn from(ctx: OrthoContext) -> u8 {
        ctx.0
    }
}

impl fmt::Display for OrthoContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.labels().join(" "))
    }
}

/// Answer of the orthographic heuristic: does this token start a sentence?
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OrthoEvidence {
    SentenceStart,
    NotSentenceStart,
    Unknown,
}
