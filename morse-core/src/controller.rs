//! Button press classification for the interrupt side

use core::sync::atomic::{AtomicBool, AtomicU32, Ordering};

use crate::types::{GameConfig, InputEvent};

/// Physical buttons
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Button {
    /// Morse key: press length decides dot or dash
    Key,
    /// Ends the current answer
    Commit,
}

/// Atomic button state management
/// Safe for use in interrupt contexts
pub struct ButtonInput {
    key_pressed: AtomicBool,
    commit_pressed: AtomicBool,
    key_last_edge: AtomicU32,
    commit_last_edge: AtomicU32,
}

impl ButtonInput {
    /// Create new button input manager
    pub const fn new() -> Self {
        Self {
            key_pressed: AtomicBool::new(false),
            commit_pressed: AtomicBool::new(false),
            key_last_edge: AtomicU32::new(0),
            commit_last_edge: AtomicU32::new(0),
        }
    }

    /// Record an edge (called from interrupt handler) and classify it.
    ///
    /// Key releases become `Dot` or `Dash` by how long the key was held;
    /// commit presses become `Commit`. Edges closer than the debounce time
    /// to the previous accepted edge are dropped.
    pub fn update(
        &self,
        button: Button,
        pressed: bool,
        now_ms: u32,
        config: &GameConfig,
    ) -> Option<InputEvent> {
        let (state, last_edge) = match button {
            Button::Key => (&self.key_pressed, &self.key_last_edge),
            Button::Commit => (&self.commit_pressed, &self.commit_last_edge),
        };

        let last = last_edge.load(Ordering::Relaxed);
        let held_ms = now_ms.wrapping_sub(last);
        if held_ms < config.debounce_ms || state.load(Ordering::Relaxed) == pressed {
            return None;
        }
        state.store(pressed, Ordering::Relaxed);
        last_edge.store(now_ms, Ordering::Relaxed);

        match (button, pressed) {
            (Button::Key, false) if held_ms >= config.dash_threshold_ms => Some(InputEvent::Dash),
            (Button::Key, false) => Some(InputEvent::Dot),
            (Button::Commit, true) => Some(InputEvent::Commit),
            _ => None,
        }
    }

    /// Check if the morse key is held
    pub fn key(&self) -> bool {
        self.key_pressed.load(Ordering::Relaxed)
    }

    /// Check if the commit button is held
    pub fn commit(&self) -> bool {
        self.commit_pressed.load(Ordering::Relaxed)
    }

    /// Reset all button states (for testing)
    #[cfg(feature = "test-utils")]
    pub fn reset(&self) {
        self.key_pressed.store(false, Ordering::Relaxed);
        self.commit_pressed.store(false, Ordering::Relaxed);
        self.key_last_edge.store(0, Ordering::Relaxed);
        self.commit_last_edge.store(0, Ordering::Relaxed);
    }
}

impl Default for ButtonInput {
    fn default() -> Self {
        Self::new()
    }
}
