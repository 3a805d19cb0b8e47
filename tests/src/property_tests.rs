//! Property-based checks on decoding and game progress

use morse_core::hal::mock::MockGameHal;
use morse_core::*;
use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn symbol() -> impl Strategy<Value = Symbol> {
    prop_oneof![Just(Symbol::Dot), Just(Symbol::Dash)]
}

fn event() -> impl Strategy<Value = InputEvent> {
    prop_oneof![
        4 => Just(InputEvent::Dot),
        4 => Just(InputEvent::Dash),
        1 => Just(InputEvent::Commit),
        1 => Just(InputEvent::Timeout),
    ]
}

#[test]
fn test_every_table_entry_decodes_to_itself() {
    for (index, entry) in CODE_TABLE.iter().enumerate() {
        let received = table::lookup(index);
        assert_eq!(decode(&received), Some(index), "entry {}", entry.character);
        assert_eq!(table::reverse_lookup(entry.character), Some(index));
    }
}

proptest! {
    #[test]
    fn decode_agrees_with_table(symbols in prop::collection::vec(symbol(), 0..=MAX_SYMBOLS)) {
        let expected = CODE_TABLE
            .iter()
            .position(|entry| entry.symbols().eq(symbols.iter().copied()));
        prop_assert_eq!(decode(&symbols), expected);
    }

    #[test]
    fn decoded_index_renders_back_to_input(symbols in prop::collection::vec(symbol(), 1..=MAX_SYMBOLS)) {
        if let Some(index) = decode(&symbols) {
            let rendered: String = symbols.iter().map(Symbol::as_char).collect();
            prop_assert_eq!(table::entry_at(index).pattern, rendered.as_str());
        }
    }

    #[test]
    fn progress_stays_in_bounds(seed in any::<u64>(), events in prop::collection::vec(event(), 0..300)) {
        let picker = RandomTargets::new(SmallRng::seed_from_u64(seed));
        let mut game = MorseGame::new(MockGameHal::new(), picker, GameConfig::default());
        game.start();

        for event in events {
            game.handle_event(event);

            let progress = *game.progress();
            prop_assert!(progress.lives() <= MAX_LIVES);
            prop_assert!(progress.wins() <= VICTORY_WINS);
            prop_assert!(game.pending().len() <= MAX_SYMBOLS);

            match game.state() {
                GameState::SelectingLevel => {
                    prop_assert_eq!(progress, GameProgress::new());
                    prop_assert!(game.target().is_none());
                }
                GameState::Playing(level) => {
                    prop_assert!(progress.lives() >= 1);
                    prop_assert!(game.target().is_some());
                    match level {
                        Level::One => {
                            prop_assert!(progress.wins() < PROMOTION_WINS);
                        }
                        Level::Two => {
                            prop_assert!(progress.wins() >= PROMOTION_WINS);
                        }
                    }
                }
            }

            let expected_color = StatusColor::from_progress(&progress);
            prop_assert_eq!(game.hal().status_led.current(), Some(expected_color));
        }
    }

    #[test]
    fn answers_never_exceed_target_length(seed in any::<u64>(), presses in prop::collection::vec(symbol(), 1..40)) {
        let picker = RandomTargets::new(SmallRng::seed_from_u64(seed));
        let mut game = MorseGame::new(MockGameHal::new(), picker, GameConfig::default());
        game.start();
        for event in [InputEvent::Dot, InputEvent::Dash, InputEvent::Dash, InputEvent::Dash, InputEvent::Dash] {
            game.handle_event(event);
        }

        for symbol in presses {
            if let Some(target) = game.target().copied() {
                prop_assert!(game.pending().len() < target.expected_len);
            }
            game.handle_event(InputEvent::from(symbol));
        }
    }
}
