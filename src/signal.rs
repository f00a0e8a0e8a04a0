use std::fmt;

use crate::MorseError;

/// The character for [`Signal::Dot`].
pub const DOT: char = '.';
/// The character for [`Signal::Dash`].
pub const DASH: char = '-';

/// One symbol of the two-symbol code alphabet.
///
/// `Dot` selects the left child of a node, `Dash` the right child. The
/// derived ordering puts `Dot` first, matching the traversal order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Signal {
    /// Short signal, written `.`.
    Dot,
    /// Long signal, written `-`.
    Dash,
}

impl Signal {
    /// Maps `.` and `-` to a signal. Any other character yields `None`.
    #[inline]
    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            DOT => Some(Signal::Dot),
            DASH => Some(Signal::Dash),
            _ => None,
        }
    }

    /// Returns the character this signal is written as.
    #[inline]
    pub fn as_char(self) -> char {
        match self {
            Signal::Dot => DOT,
            Signal::Dash => DASH,
        }
    }

    /// Parses a whole code, failing on the first character that is not a signal.
    pub fn parse_code(code: &str) -> Result<Vec<Signal>, MorseError> {
        code.chars()
            .enumerate()
            .map(|(pos, ch)| Signal::from_char(ch).ok_or(MorseError::InvalidSignal { ch, pos }))
            .collect()
    }
}

impl TryFrom<char> for Signal {
    type Error = MorseError;

    fn try_from(ch: char) -> Result<Self, Self::Error> {
        Signal::from_char(ch).ok_or(MorseError::InvalidSignal { ch, pos: 0 })
    }
}

impl From<Signal> for char {
    fn from(signal: Signal) -> char {
        signal.as_char()
    }
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}
