//! Status indicator colors derived from game progress

use crate::game::GameProgress;

/// Colors the external status LED can show
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StatusColor {
    /// No game in progress (blue)
    NoGame,
    /// Three lives (green)
    Lives3,
    /// Two lives (yellow)
    Lives2,
    /// One life (orange)
    Lives1,
    /// No lives left (red)
    Lives0,
}

impl StatusColor {
    /// Color for a game in progress with `lives` remaining
    pub const fn for_lives(lives: u8) -> Self {
        match lives {
            0 => StatusColor::Lives0,
            1 => StatusColor::Lives1,
            2 => StatusColor::Lives2,
            _ => StatusColor::Lives3,
        }
    }

    /// Color for the given progress: blue outside a game, else by lives
    pub fn from_progress(progress: &GameProgress) -> Self {
        match progress.level() {
            None => StatusColor::NoGame,
            Some(_) => Self::for_lives(progress.lives()),
        }
    }

    /// 8-bit RGB components
    pub const fn rgb(&self) -> (u8, u8, u8) {
        match self {
            StatusColor::NoGame => (0x00, 0x00, 0xFF),
            StatusColor::Lives3 => (0x00, 0x7F, 0x00),
            StatusColor::Lives2 => (0xFF, 0xFF, 0x00),
            StatusColor::Lives1 => (0xFC, 0x74, 0x05),
            StatusColor::Lives0 => (0x7F, 0x00, 0x00),
        }
    }
}
