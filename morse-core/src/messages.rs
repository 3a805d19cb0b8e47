//! Console messages emitted at game transitions

use core::fmt;

use crate::decoder::{LEVEL_ONE_COMMAND, LEVEL_TWO_COMMAND};
use crate::types::{DisplaySymbols, Level, Sequence, Symbol, MAX_LIVES, VICTORY_WINS};

/// Everything the game tells the player. The wording lives in the
/// `Display` impl; sinks may render it differently.
#[derive(Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GameMessage {
    /// Startup banner with the level commands and rules
    Welcome,
    /// Echo of an accepted symbol
    SymbolEcho(Symbol),
    /// End of a symbol line
    AnswerEnded,
    LevelChosen(Level),
    /// Level selection entry matched neither command
    WrongSelection,
    /// New round target, with the morse hint at level 1
    Prompt { character: char, hint: Option<&'static str> },
    /// The finished answer as entered
    AnswerEntered(Sequence),
    /// Decoded character, `None` when nothing in the table matched
    Decoded(Option<char>),
    Correct,
    Wrong,
    NoAnswer,
    LivesLeft(u8),
    Promoted,
    Victory,
    Defeat,
}

impl fmt::Display for GameMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameMessage::Welcome => {
                writeln!(f, "MORSE CODE GAME")?;
                writeln!(f, "  \"{}\" - LEVEL 01 - CHARACTERS (EASY)", LEVEL_ONE_COMMAND)?;
                writeln!(f, "  \"{}\" - LEVEL 02 - CHARACTERS (HARD)", LEVEL_TWO_COMMAND)?;
                writeln!(f, "Rules:")?;
                writeln!(f, "1. Enter the character displayed in morse code.")?;
                writeln!(f, "2. A correct answer wins a life (max {} lives).", MAX_LIVES)?;
                writeln!(f, "3. A wrong answer loses a life. The LED shows your lives.")?;
                writeln!(f, "4. No input for 9 seconds counts as a wrong answer.")?;
                writeln!(f, "5. {} correct answers win, zero lives lose.", VICTORY_WINS)?;
                write!(f, "Choose a level: ")
            }
            GameMessage::SymbolEcho(symbol) => write!(f, "{}", symbol.as_char()),
            GameMessage::AnswerEnded => writeln!(f),
            GameMessage::LevelChosen(level) => writeln!(f, "You chose level 0{}.", level.number()),
            GameMessage::WrongSelection => writeln!(f, "Wrong input was entered."),
            GameMessage::Prompt { character, hint } => {
                writeln!(f, "Enter the following character in morse code: {}", character)?;
                if let Some(hint) = hint {
                    writeln!(f, "Morse code for \"{}\": {}", character, hint)?;
                }
                Ok(())
            }
            GameMessage::AnswerEntered(sequence) => {
                writeln!(f, "Your input was: {}", DisplaySymbols(sequence))
            }
            GameMessage::Decoded(character) => {
                writeln!(f, "This corresponds to character \"{}\".", character.unwrap_or('?'))
            }
            GameMessage::Correct => writeln!(f, "Correct answer!"),
            GameMessage::Wrong => writeln!(f, "Wrong answer..."),
            GameMessage::NoAnswer => writeln!(f, "No answer was entered..."),
            GameMessage::LivesLeft(lives) => writeln!(f, "You have {} lives left.", lives),
            GameMessage::Promoted => {
                writeln!(f, "Congratulations! You passed to level 02.")?;
                writeln!(f, "In level 02 the morse codes are not shown.")
            }
            GameMessage::Victory => writeln!(f, "You win!"),
            GameMessage::Defeat => writeln!(f, "Game over... You lose."),
        }
    }
}
