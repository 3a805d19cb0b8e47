//! Sequence decoding against the code table and level-command matching

use crate::table::{CodeTableEntry, CODE_TABLE};
use crate::types::{Level, Symbol};

/// Level selection command for level 1 (the digit 1)
pub const LEVEL_ONE_COMMAND: &str = ".----";
/// Level selection command for level 2 (the digit 2)
pub const LEVEL_TWO_COMMAND: &str = "..---";

/// Compare `received` with a table entry over the longer of the two
/// lengths. A position present on one side only never matches.
pub fn sequences_match(received: &[Symbol], entry: &CodeTableEntry) -> bool {
    let mut expected = entry.symbols();
    let mut received = received.iter().copied();
    loop {
        match (received.next(), expected.next()) {
            (None, None) => return true,
            (Some(a), Some(b)) if a == b => continue,
            _ => return false,
        }
    }
}

/// Index of the first table entry matching `received`, scanning A-Z then 0-9
pub fn decode(received: &[Symbol]) -> Option<usize> {
    let index = CODE_TABLE.iter().position(|e| sequences_match(received, e));

    #[cfg(feature = "defmt")]
    defmt::debug!("decode {} symbols -> {:?}", received.len(), index);

    index
}

/// Match a finished level-selection entry against the two commands
pub fn match_level_command(received: &[Symbol]) -> Option<Level> {
    if matches_pattern(received, LEVEL_ONE_COMMAND) {
        Some(Level::One)
    } else if matches_pattern(received, LEVEL_TWO_COMMAND) {
        Some(Level::Two)
    } else {
        None
    }
}

fn matches_pattern(received: &[Symbol], pattern: &str) -> bool {
    received.len() == pattern.len()
        && received
            .iter()
            .zip(pattern.chars())
            .all(|(s, c)| s.as_char() == c)
}
