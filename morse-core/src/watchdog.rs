//! When to reload and arm the inactivity watchdog

use core::sync::atomic::{AtomicBool, AtomicU32, Ordering};

use crate::hal::{HalError, TimeoutCounter};
use crate::types::{GameConfig, InputEvent};

/// Watchdog handling tied to game activity
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TimeoutPolicy {
    window_ms: u32,
    pause_on_debug: bool,
}

impl TimeoutPolicy {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            window_ms: config.timeout_ms(),
            pause_on_debug: config.pause_on_debug,
        }
    }

    pub fn window_ms(&self) -> u32 {
        self.window_ms
    }

    /// A symbol was accepted into the answer
    pub fn symbol_accepted<T: TimeoutCounter>(&self, counter: &mut T) {
        report(counter.reload());
    }

    /// Level chosen or a round resolved
    pub fn transition<T: TimeoutCounter>(&self, counter: &mut T) {
        report(counter.reload());
    }

    /// A new round starts: restart the full window
    pub fn round_started<T: TimeoutCounter>(&self, counter: &mut T) {
        report(counter.reload());
        report(counter.arm(self.window_ms, self.pause_on_debug));
    }

    /// Game over: no countdown while the next level is chosen
    pub fn game_ended<T: TimeoutCounter>(&self, counter: &mut T) {
        report(counter.disarm());
    }
}

fn report<E: From<HalError>>(result: Result<(), E>) {
    if result.is_err() {
        #[cfg(feature = "defmt")]
        defmt::warn!("timeout counter write failed");
    }
}

/// Deadline watchdog in software, polled from a timer task.
///
/// Times are milliseconds since boot; comparisons wrap, so windows must be
/// shorter than ~24 days. Expiry is reported once per arm.
pub struct SoftTimeout {
    deadline_ms: AtomicU32,
    window_ms: AtomicU32,
    armed: AtomicBool,
}

impl SoftTimeout {
    pub const fn new() -> Self {
        Self {
            deadline_ms: AtomicU32::new(0),
            window_ms: AtomicU32::new(0),
            armed: AtomicBool::new(false),
        }
    }

    /// Restart the current window if armed
    pub fn reload(&self, now_ms: u32) {
        if self.armed.load(Ordering::Relaxed) {
            let window = self.window_ms.load(Ordering::Relaxed);
            self.deadline_ms.store(now_ms.wrapping_add(window), Ordering::Relaxed);
        }
    }

    /// Start a new window
    pub fn arm(&self, window_ms: u32, now_ms: u32) {
        self.window_ms.store(window_ms, Ordering::Relaxed);
        self.deadline_ms.store(now_ms.wrapping_add(window_ms), Ordering::Relaxed);
        self.armed.store(true, Ordering::Relaxed);
    }

    /// True once when the deadline has passed; disarms until the next arm
    pub fn poll(&self, now_ms: u32) -> bool {
        if !self.armed.load(Ordering::Relaxed) {
            return false;
        }
        let deadline = self.deadline_ms.load(Ordering::Relaxed);
        if (now_ms.wrapping_sub(deadline) as i32) >= 0 {
            self.armed.store(false, Ordering::Relaxed);
            return true;
        }
        false
    }

    pub fn disarm(&self) {
        self.armed.store(false, Ordering::Relaxed);
    }

    pub fn is_armed(&self) -> bool {
        self.armed.load(Ordering::Relaxed)
    }

    /// Whether a queued event should still reach the game.
    ///
    /// A `Timeout` queued behind the symbol that ended its round is stale
    /// once the next round has armed a fresh window.
    pub fn admits(&self, event: InputEvent) -> bool {
        event != InputEvent::Timeout || !self.is_armed()
    }
}

impl Default for SoftTimeout {
    fn default() -> Self {
        Self::new()
    }
}
