//! Hardware Abstraction Layer for the game's external collaborators

// Re-export time types based on feature
#[cfg(feature = "embassy-time")]
pub use embassy_time::{Duration, Instant};

#[cfg(not(feature = "embassy-time"))]
pub use self::mock_time::{Duration, Instant};

#[cfg(not(feature = "embassy-time"))]
mod mock_time {
    /// Mock instant type for compilation without embassy-time
    #[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
    pub struct Instant(u64);

    impl Instant {
        pub fn from_millis(ms: u64) -> Self {
            Self(ms)
        }

        pub fn duration_since(&self, other: Instant) -> Duration {
            Duration::from_millis(self.0.saturating_sub(other.0))
        }

        pub fn as_millis(&self) -> u64 {
            self.0
        }
    }

    impl core::ops::Add<Duration> for Instant {
        type Output = Instant;

        fn add(self, rhs: Duration) -> Instant {
            Instant(self.0.saturating_add(rhs.as_millis()))
        }
    }

    /// Mock duration type
    #[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
    pub struct Duration(u64);

    impl Duration {
        pub const fn from_millis(ms: u64) -> Self {
            Self(ms)
        }

        pub fn from_secs(secs: u64) -> Self {
            Self(secs * 1000)
        }

        pub fn as_millis(&self) -> u64 {
            self.0
        }
    }
}

use embedded_hal::digital::InputPin;
use rand::{Rng, RngCore};

use crate::messages::GameMessage;
use crate::status::StatusColor;

/// Error types for HAL operations
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum HalError {
    /// Status LED write failed
    LedWriteFailed,
    /// Timeout counter operation failed
    TimerFailed,
    /// GPIO read failed
    GpioError,
    /// Invalid configuration
    InvalidConfig,
}

#[cfg(feature = "std")]
impl core::fmt::Display for HalError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            HalError::LedWriteFailed => write!(f, "Status LED write failed"),
            HalError::TimerFailed => write!(f, "Timeout counter operation failed"),
            HalError::GpioError => write!(f, "GPIO operation failed"),
            HalError::InvalidConfig => write!(f, "Invalid configuration"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for HalError {}

/// Trait for the status LED driver
pub trait StatusIndicator {
    type Error: From<HalError>;

    /// Show `color` on the status LED
    fn drive(&mut self, color: StatusColor) -> Result<(), Self::Error>;
}

/// Trait for the inactivity watchdog
pub trait TimeoutCounter {
    type Error: From<HalError>;

    /// Restart the countdown of the current window
    fn reload(&mut self) -> Result<(), Self::Error>;

    /// (Re)start the countdown with a new window
    fn arm(&mut self, window_ms: u32, pause_on_debug: bool) -> Result<(), Self::Error>;

    /// Stop the countdown until the next `arm`
    fn disarm(&mut self) -> Result<(), Self::Error>;
}

/// Text output for prompts and results
pub trait MessageSink {
    fn emit(&mut self, message: &GameMessage);
}

/// Trait for button input handling
pub trait InputButton {
    type Error: From<HalError>;

    /// Check if the button is currently pressed
    fn is_pressed(&mut self) -> Result<bool, Self::Error>;
}

/// Source of round targets
pub trait TargetPicker {
    /// Uniform index in `0..bound`
    fn pick(&mut self, bound: usize) -> usize;
}

/// Complete game HAL interface
pub trait GameHal {
    type Indicator: StatusIndicator;
    type Timeout: TimeoutCounter;
    type Console: MessageSink;

    /// Access to the status LED
    fn status_indicator(&mut self) -> &mut Self::Indicator;

    /// Access to the watchdog
    fn timeout_counter(&mut self) -> &mut Self::Timeout;

    /// Access to the console
    fn console(&mut self) -> &mut Self::Console;
}

/// Uniform target draws from any `rand` generator
pub struct RandomTargets<R> {
    rng: R,
}

impl<R: RngCore> RandomTargets<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: RngCore> TargetPicker for RandomTargets<R> {
    fn pick(&mut self, bound: usize) -> usize {
        self.rng.gen_range(0..bound)
    }
}

/// Generic implementation for embedded-hal compatible pins
pub struct EmbeddedHalButton<P> {
    pin: P,
    active_low: bool,
}

impl<P> EmbeddedHalButton<P>
where
    P: InputPin,
{
    /// Button wired to ground with a pull-up
    pub fn new(pin: P) -> Self {
        Self { pin, active_low: true }
    }

    /// Button pulling the pin high when pressed
    pub fn active_high(pin: P) -> Self {
        Self { pin, active_low: false }
    }

    pub fn release(self) -> P {
        self.pin
    }
}

impl<P> InputButton for EmbeddedHalButton<P>
where
    P: InputPin,
{
    type Error = HalError;

    fn is_pressed(&mut self) -> Result<bool, Self::Error> {
        let low = self.pin.is_low().map_err(|_| HalError::GpioError)?;
        Ok(low == self.active_low)
    }
}

#[cfg(any(test, feature = "test-utils"))]
pub mod mock {
    //! Mock implementations for testing

    use super::*;
    use heapless::{Deque, Vec};

    /// Drop the oldest entry when full
    fn push_bounded<T, const N: usize>(log: &mut Vec<T, N>, item: T) {
        if log.is_full() {
            log.remove(0);
        }
        log.push(item).ok();
    }

    /// Records every color driven
    #[derive(Default)]
    pub struct MockStatusLed {
        colors: Vec<StatusColor, 32>,
        fail: bool,
    }

    impl MockStatusLed {
        pub fn new() -> Self {
            Self::default()
        }

        /// Most recently driven color
        pub fn current(&self) -> Option<StatusColor> {
            self.colors.last().copied()
        }

        pub fn history(&self) -> &[StatusColor] {
            &self.colors
        }

        /// Make every subsequent write fail
        pub fn set_failing(&mut self, fail: bool) {
            self.fail = fail;
        }
    }

    impl StatusIndicator for MockStatusLed {
        type Error = HalError;

        fn drive(&mut self, color: StatusColor) -> Result<(), Self::Error> {
            if self.fail {
                return Err(HalError::LedWriteFailed);
            }
            push_bounded(&mut self.colors, color);
            Ok(())
        }
    }

    /// Counts watchdog reloads and arms
    #[derive(Default)]
    pub struct MockTimeout {
        reloads: u32,
        arms: u32,
        window: Option<(u32, bool)>,
        armed: bool,
        fail: bool,
    }

    impl MockTimeout {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn reloads(&self) -> u32 {
            self.reloads
        }

        pub fn arms(&self) -> u32 {
            self.arms
        }

        /// Last armed window and pause-on-debug flag
        pub fn window(&self) -> Option<(u32, bool)> {
            self.window
        }

        pub fn is_armed(&self) -> bool {
            self.armed
        }

        /// Make every subsequent operation fail
        pub fn set_failing(&mut self, fail: bool) {
            self.fail = fail;
        }

        fn check(&self) -> Result<(), HalError> {
            if self.fail {
                Err(HalError::TimerFailed)
            } else {
                Ok(())
            }
        }
    }

    impl TimeoutCounter for MockTimeout {
        type Error = HalError;

        fn reload(&mut self) -> Result<(), Self::Error> {
            self.check()?;
            self.reloads += 1;
            Ok(())
        }

        fn arm(&mut self, window_ms: u32, pause_on_debug: bool) -> Result<(), Self::Error> {
            self.check()?;
            self.arms += 1;
            self.window = Some((window_ms, pause_on_debug));
            self.armed = true;
            Ok(())
        }

        fn disarm(&mut self) -> Result<(), Self::Error> {
            self.check()?;
            self.armed = false;
            Ok(())
        }
    }

    /// Keeps the most recent console messages
    #[derive(Default)]
    pub struct MockConsole {
        messages: Vec<GameMessage, 64>,
    }

    impl MockConsole {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn messages(&self) -> &[GameMessage] {
            &self.messages
        }

        pub fn last(&self) -> Option<&GameMessage> {
            self.messages.last()
        }

        /// True if `message` is among the retained messages
        pub fn saw(&self, message: &GameMessage) -> bool {
            self.messages.contains(message)
        }

        pub fn clear(&mut self) {
            self.messages.clear();
        }
    }

    impl MessageSink for MockConsole {
        fn emit(&mut self, message: &GameMessage) {
            push_bounded(&mut self.messages, message.clone());
        }
    }

    /// Mock hardware collection
    #[derive(Default)]
    pub struct MockGameHal {
        pub status_led: MockStatusLed,
        pub timeout: MockTimeout,
        pub console: MockConsole,
    }

    impl MockGameHal {
        pub fn new() -> Self {
            Self::default()
        }
    }

    impl GameHal for MockGameHal {
        type Indicator = MockStatusLed;
        type Timeout = MockTimeout;
        type Console = MockConsole;

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

    /// Hands out queued target indices, then repeats the fallback
    pub struct ScriptedTargets {
        queue: Deque<usize, 32>,
        fallback: usize,
    }

    impl ScriptedTargets {
        pub fn new(targets: &[usize]) -> Self {
            let mut queue = Deque::new();
            for &t in targets {
                queue.push_back(t).ok();
            }
            Self { queue, fallback: 0 }
        }

        /// Index handed out once the queue is empty
        pub fn with_fallback(mut self, fallback: usize) -> Self {
            self.fallback = fallback;
            self
        }

        pub fn push(&mut self, target: usize) {
            self.queue.push_back(target).ok();
        }
    }

    impl TargetPicker for ScriptedTargets {
        fn pick(&mut self, bound: usize) -> usize {
            self.queue.pop_front().unwrap_or(self.fallback) % bound
        }
    }
}
