//! CH32V203 Board Implementation
//!
//! Buttons on EXTI lines, a WS2812 status LED fed by an external serial
//! driver, and a software watchdog polled by `watchdog_task`.

use core::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use embassy_time::Instant;

use morse_core::{
    Button, ButtonInput, GameHal, GameMessage, HalError, InputButton,
    MessageSink, SoftTimeout, StatusColor, StatusIndicator, TimeoutCounter,
};

use crate::tasks::{post_event, CONFIG};

/// Button state shared with the EXTI handlers
pub static BUTTONS: ButtonInput = ButtonInput::new();

/// Round watchdog shared by the game task and `watchdog_task`
pub static WATCHDOG: SoftTimeout = SoftTimeout::new();

/// Morse key pin state
pub static KEY_BUTTON: ButtonPin = ButtonPin::new(pins::KEY_PIN);

/// Commit button pin state
pub static COMMIT_BUTTON: ButtonPin = ButtonPin::new(pins::COMMIT_PIN);

/// Last GRB word written for the serial LED driver
static LED_WORD: AtomicU32 = AtomicU32::new(0);
static LED_PENDING: AtomicBool = AtomicBool::new(false);

/// CH32V203 game HAL
pub struct BoardHal {
    status_led: Ws2812Status,
    timeout: WatchdogHandle,
    console: DefmtConsole,
}

impl BoardHal {
    /// Initialize CH32V203 hardware
    pub fn new() -> Result<Self, HalError> {
        KEY_BUTTON.init()?;
        COMMIT_BUTTON.init()?;

        #[cfg(feature = "defmt")]
        defmt::info!("🔌 CH32V203 board initialized");

        Ok(Self {
            status_led: Ws2812Status,
            timeout: WatchdogHandle(&WATCHDOG),
            console: DefmtConsole,
        })
    }
}

impl GameHal for BoardHal {
    type Indicator = Ws2812Status;
    type Timeout = WatchdogHandle;
    type Console = DefmtConsole;

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

/// GRB word layout expected by the WS2812 driver (RGBW framing, white unused)
pub const fn grb_word(color: StatusColor) -> u32 {
    let (r, g, b) = color.rgb();
    ((g as u32) << 24) | ((r as u32) << 16) | ((b as u32) << 8)
}

/// Status LED adapter: hands the encoded color to the LED driver
pub struct Ws2812Status;

impl StatusIndicator for Ws2812Status {
    type Error = HalError;

    fn drive(&mut self, color: StatusColor) -> Result<(), Self::Error> {
        LED_WORD.store(grb_word(color), Ordering::Relaxed);
        LED_PENDING.store(true, Ordering::Release);

        #[cfg(feature = "defmt")]
        defmt::trace!("💡 Status: {}", color);
        Ok(())
    }
}

/// Next word for the serial LED driver, if a new color was driven
pub fn take_led_word() -> Option<u32> {
    if LED_PENDING.swap(false, Ordering::Acquire) {
        Some(LED_WORD.load(Ordering::Relaxed))
    } else {
        None
    }
}

/// Console output over RTT
pub struct DefmtConsole;

impl MessageSink for DefmtConsole {
    fn emit(&mut self, _message: &GameMessage) {
        #[cfg(feature = "defmt")]
        defmt::println!("{}", defmt::Display2Format(_message));
    }
}

/// The game's handle on the shared watchdog
pub struct WatchdogHandle(&'static SoftTimeout);

/// Milliseconds since boot, truncated for the wrapping watchdog clock
pub fn now_ms() -> u32 {
    Instant::now().as_millis() as u32
}

impl TimeoutCounter for WatchdogHandle {
    type Error = HalError;

    fn reload(&mut self) -> Result<(), Self::Error> {
        self.0.reload(now_ms());
        Ok(())
    }

    fn arm(&mut self, window_ms: u32, _pause_on_debug: bool) -> Result<(), Self::Error> {
        // Counts SysTick milliseconds; no debug-halt hook
        if window_ms == 0 {
            return Err(HalError::InvalidConfig);
        }
        self.0.arm(window_ms, now_ms());
        Ok(())
    }

    fn disarm(&mut self) -> Result<(), Self::Error> {
        self.0.disarm();
        Ok(())
    }
}

/// Button input pin with its latest level from the EXTI handler
pub struct ButtonPin {
    pin: u8,
    level_low: AtomicBool,
}

impl ButtonPin {
    const fn new(pin: u8) -> Self {
        Self {
            pin,
            level_low: AtomicBool::new(false),
        }
    }

    fn init(&self) -> Result<(), HalError> {
        // Configure the pin as input with pull-up (active-low)
        // Enable its EXTI line on both edges (press and release detection)
        // Implementation would configure:
        // 1. GPIO as input with pull-up
        // 2. EXTI for both rising and falling edges
        // 3. NVIC interrupt enable for the line
        if self.pin > 15 {
            return Err(HalError::InvalidConfig);
        }
        Ok(())
    }

    /// Latch the pin level read by the EXTI handler
    pub fn record(&self, level_low: bool) {
        self.level_low.store(level_low, Ordering::Relaxed);
    }
}

impl InputButton for &ButtonPin {
    type Error = HalError;

    fn is_pressed(&mut self) -> Result<bool, Self::Error> {
        // Pulled up, grounded when pressed
        Ok(self.level_low.load(Ordering::Relaxed))
    }
}

// Interrupt handlers (to be connected to actual EXTI handlers)

/// Called from the EXTI handler of either button with the pin level
pub fn on_button_edge(button: Button, level_low: bool) {
    let mut pin = match button {
        Button::Key => &KEY_BUTTON,
        Button::Commit => &COMMIT_BUTTON,
    };
    pin.record(level_low);
    let pressed = pin.is_pressed().unwrap_or(false);

    if let Some(event) = BUTTONS.update(button, pressed, now_ms(), &CONFIG) {
        post_event(event);
    }
}

/// Electronic signature (96-bit unique device ID) base address
const UID_BASE: usize = 0x1FFF_F7E8;

/// Seed for the target picker, folded from the chip's unique ID
pub fn chip_seed() -> u64 {
    let uid = UID_BASE as *const u32;
    // SAFETY: the signature area is always mapped and read-only
    let words = unsafe {
        [
            core::ptr::read_volatile(uid),
            core::ptr::read_volatile(uid.add(1)),
            core::ptr::read_volatile(uid.add(2)),
        ]
    };
    let high = (words[0] as u64) << 32 | words[1] as u64;
    high ^ (words[2] as u64).rotate_left(17)
}

/// CH32V203 pin configuration constants
pub mod pins {
    /// Morse key input pin
    pub const KEY_PIN: u8 = 0; // PA0

    /// Commit button input pin
    pub const COMMIT_PIN: u8 = 1; // PA1
}
