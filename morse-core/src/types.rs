//! Core data types for the morse guessing game

use core::fmt;

use crate::hal::Duration;

/// Longest morse sequence the game accepts (digits use all five)
pub const MAX_SYMBOLS: usize = 5;

/// Lives at the start of a game; also the cap for lives gained
pub const MAX_LIVES: u8 = 3;

/// Wins that promote a level 1 player to level 2
pub const PROMOTION_WINS: u8 = 5;

/// Wins that end the game in victory
pub const VICTORY_WINS: u8 = 10;

/// Inactivity window before a round is forfeited
pub const DEFAULT_TIMEOUT_MS: u64 = 9000;

/// Capacity-bounded symbol sequence
pub type Sequence = heapless::Vec<Symbol, MAX_SYMBOLS>;

/// Morse code symbols
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "std", derive(Hash))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Symbol {
    /// Dot (short press)
    Dot,
    /// Dash (long press)
    Dash,
}

impl Symbol {
    /// Console character for this symbol
    pub const fn as_char(&self) -> char {
        match self {
            Symbol::Dot => '.',
            Symbol::Dash => '-',
        }
    }

    /// Parse a console character, `None` for anything but `.` and `-`
    pub const fn from_char(c: char) -> Option<Symbol> {
        match c {
            '.' => Some(Symbol::Dot),
            '-' => Some(Symbol::Dash),
            _ => None,
        }
    }
}

/// Discrete events delivered by the interrupt side into the game
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InputEvent {
    /// Short key press
    Dot,
    /// Long key press
    Dash,
    /// Commit button: no more symbols for this answer
    Commit,
    /// Watchdog window expired without input
    Timeout,
}

impl InputEvent {
    /// The symbol carried by this event, if any
    pub const fn symbol(&self) -> Option<Symbol> {
        match self {
            InputEvent::Dot => Some(Symbol::Dot),
            InputEvent::Dash => Some(Symbol::Dash),
            InputEvent::Commit | InputEvent::Timeout => None,
        }
    }
}

impl From<Symbol> for InputEvent {
    fn from(symbol: Symbol) -> Self {
        match symbol {
            Symbol::Dot => InputEvent::Dot,
            Symbol::Dash => InputEvent::Dash,
        }
    }
}

/// Difficulty tiers
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Level {
    /// Target shown together with its morse hint
    One,
    /// Target shown without a hint
    Two,
}

impl Level {
    /// Returns true if the round prompt reveals the expected sequence
    pub const fn shows_hint(&self) -> bool {
        match self {
            Level::One => true,
            Level::Two => false,
        }
    }

    /// Level number as shown to the player
    pub const fn number(&self) -> u8 {
        match self {
            Level::One => 1,
            Level::Two => 2,
        }
    }
}

/// Parse a `.`/`-` pattern into a sequence.
///
/// Returns `None` for any other character or for patterns longer than
/// [`MAX_SYMBOLS`].
pub fn parse_sequence(pattern: &str) -> Option<Sequence> {
    let mut sequence = Sequence::new();
    for c in pattern.chars() {
        sequence.push(Symbol::from_char(c)?).ok()?;
    }
    Some(sequence)
}

/// Displays a symbol slice as dots and dashes
pub struct DisplaySymbols<'a>(pub &'a [Symbol]);

impl fmt::Display for DisplaySymbols<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for symbol in self.0 {
            write!(f, "{}", symbol.as_char())?;
        }
        Ok(())
    }
}

/// Game configuration parameters
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct GameConfig {
    /// Watchdog window for one round
    pub timeout: Duration,
    /// Pause the watchdog countdown while a debugger halts the core
    pub pause_on_debug: bool,
    /// Key presses at least this long are dashes
    pub dash_threshold_ms: u32,
    /// Debounce time in milliseconds
    pub debounce_ms: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl GameConfig {
    /// 9 second rounds, 250ms dash threshold, 10ms debounce
    pub const DEFAULT: GameConfig = GameConfig {
        timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
        pause_on_debug: true,
        dash_threshold_ms: 250,
        debounce_ms: 10,
    };

    /// Create a new configuration with validation
    pub fn new(
        timeout_ms: u64,
        pause_on_debug: bool,
        dash_threshold_ms: u32,
        debounce_ms: u32,
    ) -> Result<Self, &'static str> {
        if !(1000..=60_000).contains(&timeout_ms) {
            return Err("Timeout must be between 1000 and 60000 ms");
        }
        if debounce_ms > 100 {
            return Err("Debounce must be <= 100ms");
        }
        if dash_threshold_ms <= debounce_ms {
            return Err("Dash threshold must exceed the debounce time");
        }

        Ok(Self {
            timeout: Duration::from_millis(timeout_ms),
            pause_on_debug,
            dash_threshold_ms,
            debounce_ms,
        })
    }

    /// Watchdog window in the unit the timeout counter takes
    pub fn timeout_ms(&self) -> u32 {
        self.timeout.as_millis().min(u32::MAX as u64) as u32
    }
}
