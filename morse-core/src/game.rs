//! Game state machine: level selection, rounds, lives and wins

use crate::accumulator::{Accepted, InputAccumulator, Phase, PendingAnswer};
use crate::decoder::{decode, match_level_command};
use crate::hal::{GameHal, MessageSink, StatusIndicator, TargetPicker};
use crate::messages::GameMessage;
use crate::status::StatusColor;
use crate::table::{self, TABLE_LEN};
use crate::types::{
    GameConfig, InputEvent, Level, Symbol, MAX_LIVES, PROMOTION_WINS, VICTORY_WINS,
};
use crate::watchdog::TimeoutPolicy;

/// Level, lives and wins of the current game
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GameProgress {
    level: Option<Level>,
    lives: u8,
    wins: u8,
}

impl GameProgress {
    /// Fresh game waiting for level selection
    pub const fn new() -> Self {
        Self {
            level: None,
            lives: MAX_LIVES,
            wins: 0,
        }
    }

    /// `None` while selecting a level
    pub fn level(&self) -> Option<Level> {
        self.level
    }

    pub fn lives(&self) -> u8 {
        self.lives
    }

    pub fn wins(&self) -> u8 {
        self.wins
    }

    /// Start playing at `level`. Level 2 starts past the promotion mark.
    pub fn select(&mut self, level: Level) {
        self.level = Some(level);
        if level == Level::Two {
            self.wins = PROMOTION_WINS;
        }
    }

    pub fn gain_life(&mut self) {
        self.lives = (self.lives + 1).min(MAX_LIVES);
    }

    pub fn lose_life(&mut self) {
        self.lives = self.lives.saturating_sub(1);
    }

    /// Count a win. Returns true if it promoted level 1 to level 2.
    pub fn record_win(&mut self) -> bool {
        self.wins = (self.wins + 1).min(VICTORY_WINS);
        if self.wins == PROMOTION_WINS && self.level == Some(Level::One) {
            self.level = Some(Level::Two);
            return true;
        }
        false
    }

    pub fn is_won(&self) -> bool {
        self.wins >= VICTORY_WINS
    }

    pub fn is_lost(&self) -> bool {
        self.lives == 0
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for GameProgress {
    fn default() -> Self {
        Self::new()
    }
}

/// Character the player must enter this round
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RoundTarget {
    pub index: usize,
    pub expected_len: usize,
}

impl RoundTarget {
    pub fn new(index: usize) -> Self {
        Self {
            index,
            expected_len: table::sequence_length(index),
        }
    }

    pub fn character(&self) -> char {
        table::character(self.index)
    }
}

/// Game states
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GameState {
    /// Waiting for a level command
    SelectingLevel,
    /// Round in progress at the given level
    Playing(Level),
}

/// How a round was resolved
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RoundOutcome {
    Correct,
    Wrong,
    /// Empty or timed-out answer
    NoAnswer,
}

impl RoundOutcome {
    pub const fn is_win(&self) -> bool {
        matches!(self, RoundOutcome::Correct)
    }
}

/// Terminal game results; both reset progress
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Ending {
    Won,
    Lost,
}

/// What a single event did to the game
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Transition {
    /// Symbol stored, answer still open
    Buffered,
    /// Event had no effect in the current state
    Ignored,
    LevelSelected(Level),
    WrongSelection,
    RoundResolved {
        outcome: RoundOutcome,
        promoted: bool,
        ending: Option<Ending>,
    },
}

/// Single owned game context threaded through the event handler
pub struct MorseGame<H, P> {
    hal: H,
    picker: P,
    progress: GameProgress,
    accumulator: InputAccumulator,
    target: Option<RoundTarget>,
    policy: TimeoutPolicy,
}

impl<H: GameHal, P: TargetPicker> MorseGame<H, P> {
    /// Create new game with given configuration
    pub fn new(hal: H, picker: P, config: GameConfig) -> Self {
        Self {
            hal,
            picker,
            progress: GameProgress::new(),
            accumulator: InputAccumulator::new(),
            target: None,
            policy: TimeoutPolicy::new(&config),
        }
    }

    /// Show the idle color and the welcome banner
    pub fn start(&mut self) {
        self.refresh_status();
        self.say(GameMessage::Welcome);

        #[cfg(feature = "defmt")]
        defmt::info!("game ready, waiting for level selection");
    }

    pub fn state(&self) -> GameState {
        match self.progress.level() {
            None => GameState::SelectingLevel,
            Some(level) => GameState::Playing(level),
        }
    }

    pub fn progress(&self) -> &GameProgress {
        &self.progress
    }

    pub fn target(&self) -> Option<&RoundTarget> {
        self.target.as_ref()
    }

    /// Answer collected so far
    pub fn pending(&self) -> &PendingAnswer {
        self.accumulator.answer()
    }

    pub fn hal(&self) -> &H {
        &self.hal
    }

    pub fn hal_mut(&mut self) -> &mut H {
        &mut self.hal
    }

    /// Handle one interrupt-delivered event
    pub fn handle_event(&mut self, event: InputEvent) -> Transition {
        let phase = self.phase();
        let accepted = match event {
            InputEvent::Dot => self.accept_symbol(Symbol::Dot, phase),
            InputEvent::Dash => self.accept_symbol(Symbol::Dash, phase),
            InputEvent::Commit => self.accumulator.accept_commit(phase),
            InputEvent::Timeout => self.accumulator.timeout_elapsed(phase),
        };

        match accepted {
            Accepted::Pending if event.symbol().is_some() => Transition::Buffered,
            Accepted::Pending => Transition::Ignored,
            Accepted::Finalized => {
                self.say(GameMessage::AnswerEnded);
                let answer = self.accumulator.take();
                match self.progress.level() {
                    None => self.resolve_selection(&answer),
                    Some(_) => self.resolve_round(&answer),
                }
            }
        }
    }

    /// Watchdog window expired
    pub fn on_timeout_event(&mut self) -> Transition {
        self.handle_event(InputEvent::Timeout)
    }

    fn accept_symbol(&mut self, symbol: Symbol, phase: Phase) -> Accepted {
        let accepted = self.accumulator.accept_symbol(symbol, phase);
        self.say(GameMessage::SymbolEcho(symbol));
        self.policy.symbol_accepted(self.hal.timeout_counter());
        accepted
    }

    fn phase(&self) -> Phase {
        match (self.progress.level(), self.target) {
            (Some(_), Some(target)) => Phase::Round {
                expected_len: target.expected_len,
            },
            _ => Phase::SelectingLevel,
        }
    }

    fn resolve_selection(&mut self, answer: &PendingAnswer) -> Transition {
        let Some(level) = match_level_command(answer.symbols()) else {
            #[cfg(feature = "defmt")]
            defmt::info!("unrecognized level command");
            self.say(GameMessage::WrongSelection);
            return Transition::WrongSelection;
        };

        #[cfg(feature = "defmt")]
        defmt::info!("level {} selected", level.number());

        self.progress.select(level);
        self.policy.transition(self.hal.timeout_counter());
        self.say(GameMessage::LevelChosen(level));
        self.refresh_status();
        self.begin_round();
        Transition::LevelSelected(level)
    }

    fn resolve_round(&mut self, answer: &PendingAnswer) -> Transition {
        let target = self.target.take();

        self.say(GameMessage::AnswerEntered(answer.symbols().iter().copied().collect()));
        let decoded = decode(answer.symbols());
        self.say(GameMessage::Decoded(decoded.map(table::character)));

        let outcome = if answer.timed_out() || answer.is_empty() {
            RoundOutcome::NoAnswer
        } else if decoded.is_some() && decoded == target.map(|t| t.index) {
            RoundOutcome::Correct
        } else {
            RoundOutcome::Wrong
        };

        let mut promoted = false;
        match outcome {
            RoundOutcome::Correct => {
                self.say(GameMessage::Correct);
                self.progress.gain_life();
                promoted = self.progress.record_win();
            }
            RoundOutcome::Wrong => {
                self.say(GameMessage::Wrong);
                self.progress.lose_life();
            }
            RoundOutcome::NoAnswer => {
                self.say(GameMessage::NoAnswer);
                self.progress.lose_life();
            }
        }
        self.say(GameMessage::LivesLeft(self.progress.lives()));
        if promoted {
            self.say(GameMessage::Promoted);
        }
        self.refresh_status();
        self.policy.transition(self.hal.timeout_counter());

        #[cfg(feature = "defmt")]
        defmt::info!(
            "round {}: lives={} wins={}",
            outcome,
            self.progress.lives(),
            self.progress.wins()
        );

        let ending = self.check_ending();
        if ending.is_none() {
            self.begin_round();
        }

        Transition::RoundResolved {
            outcome,
            promoted,
            ending,
        }
    }

    /// Win is checked before loss; either resets progress
    fn check_ending(&mut self) -> Option<Ending> {
        let ending = if self.progress.is_won() {
            self.say(GameMessage::Victory);
            Ending::Won
        } else if self.progress.is_lost() {
            self.say(GameMessage::Defeat);
            Ending::Lost
        } else {
            return None;
        };

        #[cfg(feature = "defmt")]
        defmt::info!("game over: {}", ending);

        self.progress.reset();
        self.target = None;
        self.policy.game_ended(self.hal.timeout_counter());
        self.refresh_status();
        self.say(GameMessage::Welcome);
        Some(ending)
    }

    fn begin_round(&mut self) {
        let Some(level) = self.progress.level() else {
            return;
        };
        let target = RoundTarget::new(self.picker.pick(TABLE_LEN));
        self.target = Some(target);

        let hint = level.shows_hint().then(|| table::entry_at(target.index).pattern);
        self.say(GameMessage::Prompt {
            character: target.character(),
            hint,
        });
        self.policy.round_started(self.hal.timeout_counter());

        #[cfg(feature = "defmt")]
        defmt::debug!("new round: target {}", target.character());
    }

    fn refresh_status(&mut self) {
        let color = StatusColor::from_progress(&self.progress);
        if self.hal.status_indicator().drive(color).is_err() {
            #[cfg(feature = "defmt")]
            defmt::warn!("status LED write failed");
        }
    }

    fn say(&mut self, message: GameMessage) {
        self.hal.console().emit(&message);
    }
}
