//! Fixed morse code table for A-Z and 0-9

use crate::types::{Sequence, Symbol};

/// Number of entries in the code table
pub const TABLE_LEN: usize = 36;

/// One character of the alphabet with its morse pattern
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct CodeTableEntry {
    pub character: char,
    pub pattern: &'static str,
}

impl CodeTableEntry {
    /// Symbols of this entry
    pub fn symbols(&self) -> impl Iterator<Item = Symbol> + '_ {
        self.pattern.chars().filter_map(Symbol::from_char)
    }
}

const fn entry(character: char, pattern: &'static str) -> CodeTableEntry {
    CodeTableEntry { character, pattern }
}

/// Letters A-Z followed by digits 0-9
pub static CODE_TABLE: [CodeTableEntry; TABLE_LEN] = [
    entry('A', ".-"),
    entry('B', "-..."),
    entry('C', "-.-."),
    entry('D', "-.."),
    entry('E', "."),
    entry('F', "..-."),
    entry('G', "--."),
    entry('H', "...."),
    entry('I', ".."),
    entry('J', ".---"),
    entry('K', "-.-"),
    entry('L', ".-.."),
    entry('M', "--"),
    entry('N', "-."),
    entry('O', "---"),
    entry('P', ".--."),
    entry('Q', "--.-"),
    entry('R', ".-."),
    entry('S', "..."),
    entry('T', "-"),
    entry('U', "..-"),
    entry('V', "...-"),
    entry('W', ".--"),
    entry('X', "-..-"),
    entry('Y', "-.--"),
    entry('Z', "--.."),
    entry('0', "-----"),
    entry('1', ".----"),
    entry('2', "..---"),
    entry('3', "...--"),
    entry('4', "....-"),
    entry('5', "....."),
    entry('6', "-...."),
    entry('7', "--..."),
    entry('8', "---.."),
    entry('9', "----."),
];

/// Table entry at `index`.
///
/// # Panics
/// Panics if `index >= TABLE_LEN`; callers only hold indices produced by
/// the table itself.
pub fn entry_at(index: usize) -> &'static CodeTableEntry {
    &CODE_TABLE[index]
}

/// Morse sequence for the character at `index`
pub fn lookup(index: usize) -> Sequence {
    entry_at(index).symbols().collect()
}

/// Index of `character` (case-insensitive), `None` outside A-Z/0-9
pub fn reverse_lookup(character: char) -> Option<usize> {
    let upper = character.to_ascii_uppercase();
    CODE_TABLE.iter().position(|e| e.character == upper)
}

/// Number of symbols in the sequence at `index` (1..=5)
pub fn sequence_length(index: usize) -> usize {
    entry_at(index).pattern.len()
}

/// Character at `index`
pub fn character(index: usize) -> char {
    entry_at(index).character
}
