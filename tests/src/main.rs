// Scripted game session printed as a console transcript

use morse_core::hal::mock::{MockStatusLed, MockTimeout, ScriptedTargets};
use morse_core::test_utils::player::{answer_correctly, answer_wrongly, enter};
use morse_core::test_utils::transcript::TextConsole;
use morse_core::*;

/// Mock LED and watchdog with a text console
#[derive(Default)]
struct TranscriptHal {
    status_led: MockStatusLed,
    timeout: MockTimeout,
    console: TextConsole,
}

impl GameHal for TranscriptHal {
    type Indicator = MockStatusLed;
    type Timeout = MockTimeout;
    type Console = TextConsole;

    fn status_indicator(&mut self) -> &mut Self::Indicator {
        &mut self.status_led
    }

    fn timeout_counter(&mut self) -> &mut Self::Timeout {
        &mut self.timeout
    }

    fn console(&mut self) -> &mut Self::Console {
        &mut self.console
    }
}

type Game = MorseGame<TranscriptHal, ScriptedTargets>;

fn main() {
    println!("🧪 Morse Game Scripted Session (v{})", VERSION);

    let targets = ScriptedTargets::new(&[7, 14, 0, 25, 26]).with_fallback(4);
    let mut game = MorseGame::new(TranscriptHal::default(), targets, default_config());
    game.start();
    flush(&mut game, "Power on");

    enter(&mut game, "..--.");
    flush(&mut game, "Mistyped level command");

    enter(&mut game, ".----");
    flush(&mut game, "Level 1 selected");

    answer_correctly(&mut game);
    flush(&mut game, "Correct answer");

    answer_wrongly(&mut game);
    flush(&mut game, "Wrong answer");

    game.on_timeout_event();
    flush(&mut game, "Round timed out");

    while game.state() != GameState::SelectingLevel {
        answer_correctly(&mut game);
    }
    flush(&mut game, "Played to the end");

    let progress = game.progress();
    println!("📊 Lives {} / Wins {}", progress.lives(), progress.wins());
    println!(
        "💡 LED history: {} changes, watchdog armed {} times",
        game.hal().status_led.history().len(),
        game.hal().timeout.arms()
    );
    println!("✅ Session complete");
}

fn flush(game: &mut Game, step: &str) {
    let color = game.hal().status_led.current().unwrap_or(StatusColor::NoGame);
    let (r, g, b) = color.rgb();
    println!("▶️ {} [LED #{:02X}{:02X}{:02X}]", step, r, g, b);

    let text = game.hal_mut().console.take();
    for line in text.lines() {
        println!("    {}", line);
    }
}
