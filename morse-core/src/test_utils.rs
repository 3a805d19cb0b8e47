//! Test utilities for game core functionality

#[cfg(feature = "test-utils")]
pub mod player {
    //! Scripted player input

    use crate::game::{MorseGame, Transition};
    use crate::hal::{GameHal, TargetPicker};
    use crate::table;
    use crate::types::{InputEvent, Symbol};
    use heapless::Vec;

    /// Events for a `.`/`-` pattern; other characters are skipped
    pub fn events_for(pattern: &str) -> Vec<InputEvent, 8> {
        pattern
            .chars()
            .filter_map(Symbol::from_char)
            .map(InputEvent::from)
            .take(8)
            .collect()
    }

    /// Feed a pattern symbol by symbol, returning the last transition
    pub fn enter<H: GameHal, P: TargetPicker>(game: &mut MorseGame<H, P>, pattern: &str) -> Transition {
        let mut last = Transition::Ignored;
        for event in events_for(pattern) {
            last = game.handle_event(event);
        }
        last
    }

    /// Enter the correct sequence for the current target
    pub fn answer_correctly<H: GameHal, P: TargetPicker>(game: &mut MorseGame<H, P>) -> Transition {
        let pattern = match game.target() {
            Some(target) => table::entry_at(target.index).pattern,
            None => return Transition::Ignored,
        };
        enter(game, pattern)
    }

    /// Enter a sequence of the right length that decodes to another character
    pub fn answer_wrongly<H: GameHal, P: TargetPicker>(game: &mut MorseGame<H, P>) -> Transition {
        let pattern = match game.target() {
            Some(target) => wrong_pattern(target.index),
            None => return Transition::Ignored,
        };
        enter(game, pattern)
    }

    /// A different table pattern with the same length as entry `index`
    pub fn wrong_pattern(index: usize) -> &'static str {
        let expected = table::entry_at(index).pattern;
        table::CODE_TABLE
            .iter()
            .map(|e| e.pattern)
            .find(|p| p.len() == expected.len() && *p != expected)
            .unwrap_or("")
    }
}

#[cfg(feature = "test-utils")]
pub mod transcript {
    //! Console capture rendered to text

    use crate::hal::MessageSink;
    use crate::messages::GameMessage;
    use std::string::String;

    /// Console that renders every message into one string
    #[derive(Default)]
    pub struct TextConsole {
        text: String,
    }

    impl TextConsole {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn text(&self) -> &str {
            &self.text
        }

        pub fn take(&mut self) -> String {
            core::mem::take(&mut self.text)
        }
    }

    impl MessageSink for TextConsole {
        fn emit(&mut self, message: &GameMessage) {
            use core::fmt::Write;
            write!(self.text, "{}", message).ok();
        }
    }
}
