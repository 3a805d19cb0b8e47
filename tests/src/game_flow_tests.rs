//! Whole-game scenarios against the mock HAL

use morse_core::hal::mock::{MockGameHal, ScriptedTargets};
use morse_core::test_utils::player::{answer_correctly, answer_wrongly, enter};
use morse_core::*;
use rstest::*;

type Game = MorseGame<MockGameHal, ScriptedTargets>;

#[fixture]
fn game() -> Game {
    let mut game = MorseGame::new(
        MockGameHal::new(),
        ScriptedTargets::new(&[]).with_fallback(0),
        GameConfig::default(),
    );
    game.start();
    game
}

#[rstest]
#[case(".----", Level::One, 0)]
#[case("..---", Level::Two, 5)]
fn test_level_commands(mut game: Game, #[case] command: &str, #[case] level: Level, #[case] wins: u8) {
    assert_eq!(enter(&mut game, command), Transition::LevelSelected(level));
    assert_eq!(game.state(), GameState::Playing(level));
    assert_eq!(game.progress().wins(), wins);
    assert_eq!(game.progress().lives(), MAX_LIVES);
    assert_eq!(game.hal().status_led.current(), Some(StatusColor::Lives3));
}

#[rstest]
#[case(".....")]
#[case("-----")]
#[case("...--")]
#[case(".---.")]
fn test_other_five_symbol_commands_are_rejected(mut game: Game, #[case] command: &str) {
    assert_eq!(enter(&mut game, command), Transition::WrongSelection);
    assert_eq!(game.state(), GameState::SelectingLevel);
    assert!(game.hal().console.saw(&GameMessage::WrongSelection));
}

#[rstest]
fn test_hint_only_at_level_one(mut game: Game) {
    enter(&mut game, ".----");
    assert!(game.hal().console.saw(&GameMessage::Prompt {
        character: 'A',
        hint: Some(".-"),
    }));

    game.hal_mut().console.clear();
    for _ in 0..5 {
        answer_correctly(&mut game);
    }
    assert_eq!(game.state(), GameState::Playing(Level::Two));
    assert_eq!(
        game.hal().console.last(),
        Some(&GameMessage::Prompt {
            character: 'A',
            hint: None,
        })
    );
}

#[rstest]
fn test_lives_walk_down_the_colors(mut game: Game) {
    enter(&mut game, ".----");

    answer_wrongly(&mut game);
    assert_eq!(game.hal().status_led.current(), Some(StatusColor::Lives2));
    answer_wrongly(&mut game);
    assert_eq!(game.hal().status_led.current(), Some(StatusColor::Lives1));

    let transition = answer_wrongly(&mut game);
    assert_eq!(
        transition,
        Transition::RoundResolved {
            outcome: RoundOutcome::Wrong,
            promoted: false,
            ending: Some(Ending::Lost),
        }
    );

    let history = game.hal().status_led.history();
    assert!(history.ends_with(&[StatusColor::Lives0, StatusColor::NoGame]));
}

#[rstest]
fn test_correct_answer_restores_a_life(mut game: Game) {
    enter(&mut game, ".----");
    answer_wrongly(&mut game);
    assert_eq!(game.progress().lives(), 2);

    answer_correctly(&mut game);
    assert_eq!(game.progress().lives(), 3);
    assert_eq!(game.progress().wins(), 1);

    answer_correctly(&mut game);
    assert_eq!(game.progress().lives(), 3);
}

#[rstest]
fn test_full_game_from_level_one_to_victory(mut game: Game) {
    enter(&mut game, ".----");

    let mut promotions = 0;
    let mut last = Transition::Ignored;
    for _ in 0..VICTORY_WINS {
        last = answer_correctly(&mut game);
        if let Transition::RoundResolved { promoted: true, .. } = last {
            promotions += 1;
        }
    }

    assert_eq!(promotions, 1);
    assert_eq!(
        last,
        Transition::RoundResolved {
            outcome: RoundOutcome::Correct,
            promoted: false,
            ending: Some(Ending::Won),
        }
    );
    assert_eq!(game.state(), GameState::SelectingLevel);
    assert_eq!(game.hal().console.last(), Some(&GameMessage::Welcome));
}

#[rstest]
fn test_commit_ends_short_answer(mut game: Game) {
    // Target 0 is A (.-); a single dot is E
    enter(&mut game, ".----");
    assert_eq!(enter(&mut game, "."), Transition::Buffered);

    let transition = game.handle_event(InputEvent::Commit);
    assert_eq!(
        transition,
        Transition::RoundResolved {
            outcome: RoundOutcome::Wrong,
            promoted: false,
            ending: None,
        }
    );
    assert!(game.hal().console.saw(&GameMessage::Decoded(Some('E'))));
}

#[rstest]
fn test_answer_echo_and_decode_reported(mut game: Game) {
    enter(&mut game, ".----");
    game.hal_mut().console.clear();

    enter(&mut game, ".-");
    let messages = game.hal().console.messages();
    assert_eq!(messages[0], GameMessage::SymbolEcho(Symbol::Dot));
    assert_eq!(messages[1], GameMessage::SymbolEcho(Symbol::Dash));
    assert_eq!(messages[2], GameMessage::AnswerEnded);
    assert!(game.hal().console.saw(&GameMessage::AnswerEntered(
        parse_sequence(".-").unwrap_or_default()
    )));
    assert!(game.hal().console.saw(&GameMessage::Decoded(Some('A'))));
    assert!(game.hal().console.saw(&GameMessage::Correct));
}

#[rstest]
fn test_timeout_every_round_loses_game(mut game: Game) {
    enter(&mut game, "..---");
    let mut endings = Vec::new();
    for _ in 0..MAX_LIVES {
        if let Transition::RoundResolved { ending, .. } = game.on_timeout_event() {
            endings.push(ending);
        }
    }
    assert_eq!(endings, vec![None, None, Some(Ending::Lost)]);
    assert_eq!(*game.progress(), GameProgress::new());
}

#[rstest]
fn test_transcript_console_renders_prompt() {
    use morse_core::test_utils::transcript::TextConsole;

    let mut console = TextConsole::new();
    console.emit(&GameMessage::Prompt {
        character: 'K',
        hint: Some("-.-"),
    });
    assert!(console.text().contains('K'));
    assert!(console.text().contains("-.-"));
}
