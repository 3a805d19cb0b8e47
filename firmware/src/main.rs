#![no_std]
#![no_main]

#[cfg(feature = "defmt")]
use defmt_rtt as _;

// RISC-V runtime
use riscv_rt as _;

// Panic handler
#[cfg(feature = "defmt")]
use panic_probe as _;
#[cfg(not(feature = "defmt"))]
use panic_halt as _;

use embassy_executor::Spawner;
use embassy_time::{Duration, Timer};

use morse_game_firmware::*;

/// Main firmware entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    #[cfg(feature = "defmt")]
    defmt::info!("🔧 Morse Game Firmware Starting...");

    let hal = match BoardHal::new() {
        Ok(hal) => hal,
        Err(_e) => {
            #[cfg(feature = "defmt")]
            defmt::error!("❌ Board init failed: {}", _e);
            loop {
                Timer::after(Duration::from_secs(1)).await;
            }
        }
    };
    #[cfg(feature = "defmt")]
    defmt::info!("✅ Hardware initialized");

    #[cfg(feature = "defmt")]
    defmt::info!("⚙️ Round window: {} ms", CONFIG.timeout_ms());

    #[cfg(feature = "defmt")]
    defmt::info!("🚀 Spawning game tasks...");

    spawner.must_spawn(game_task(hal, chip_seed(), &CONFIG));
    spawner.must_spawn(watchdog_task(&WATCHDOG));

    #[cfg(feature = "defmt")]
    defmt::info!("✨ Morse game ready!");

    // Main supervision loop
    loop {
        Timer::after(Duration::from_secs(1)).await;
        #[cfg(feature = "defmt")]
        defmt::trace!("💓 Heartbeat");
    }
}
