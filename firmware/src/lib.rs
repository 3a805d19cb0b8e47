#![no_std]

//! Firmware library: board glue and embassy tasks around the game core

pub use embassy_executor::Spawner;
pub use embassy_time::Duration;
pub use static_cell::StaticCell;

pub use morse_core::*;

// Re-export hardware implementations
pub use crate::board::*;
pub use crate::tasks::*;

/// Depth of the interrupt → game task event channel
pub const EVENT_QUEUE_LEN: usize = 8;

// Embassy tasks module
pub mod tasks {
    use super::*;
    use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
    use embassy_sync::channel::Channel;
    use embassy_time::Timer;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    /// Events from the button handler and the watchdog, in arrival order
    pub static EVENTS: Channel<CriticalSectionRawMutex, InputEvent, EVENT_QUEUE_LEN> = Channel::new();

    /// How often the software watchdog checks its deadline
    pub const WATCHDOG_POLL: Duration = Duration::from_millis(50);

    /// Settings shared by the game task and the button edge handler
    pub static CONFIG: GameConfig = GameConfig::DEFAULT;

    /// Queue an event without blocking; drops it if the game task is behind
    pub fn post_event(event: InputEvent) {
        if EVENTS.try_send(event).is_err() {
            #[cfg(feature = "defmt")]
            defmt::warn!("event queue full, dropped {}", event);
        }
    }

    /// Owns the game and handles one event at a time
    #[embassy_executor::task]
    pub async fn game_task(hal: BoardHal, seed: u64, config: &'static GameConfig) {
        #[cfg(feature = "defmt")]
        defmt::info!("🎮 Game task started");

        let picker = RandomTargets::new(SmallRng::seed_from_u64(seed));
        let mut game = MorseGame::new(hal, picker, *config);
        game.start();

        loop {
            let event = EVENTS.receive().await;
            if !WATCHDOG.admits(event) {
                #[cfg(feature = "defmt")]
                defmt::debug!("stale timeout dropped");
                continue;
            }
            let _transition = game.handle_event(event);

            #[cfg(feature = "defmt")]
            defmt::debug!("{} -> {}", event, _transition);
        }
    }

    /// Turns an expired watchdog window into a timeout event
    #[embassy_executor::task]
    pub async fn watchdog_task(watchdog: &'static SoftTimeout) {
        #[cfg(feature = "defmt")]
        defmt::info!("⏱️ Watchdog task started");

        loop {
            Timer::after(WATCHDOG_POLL).await;
            if watchdog.poll(now_ms()) {
                #[cfg(feature = "defmt")]
                defmt::info!("⌛ No input within the window");
                post_event(InputEvent::Timeout);
            }
        }
    }
}

// CH32V203 board module
pub mod board;

// Time driver for embassy
mod time_driver;

pub use time_driver::on_systick;
