//! Button adapters against embedded-hal-mock pins

use embedded_hal_mock::eh1::digital::{Mock as PinMock, State as PinState, Transaction as PinTransaction};
use morse_core::*;

#[test]
fn test_active_low_button() {
    let expectations = [
        PinTransaction::get(PinState::High),
        PinTransaction::get(PinState::Low),
    ];
    let mut button = EmbeddedHalButton::new(PinMock::new(&expectations));

    assert_eq!(button.is_pressed(), Ok(false));
    assert_eq!(button.is_pressed(), Ok(true));

    let mut pin = button.release();
    pin.done();
}

#[test]
fn test_active_high_button() {
    let expectations = [
        PinTransaction::get(PinState::High),
        PinTransaction::get(PinState::Low),
    ];
    let mut button = EmbeddedHalButton::active_high(PinMock::new(&expectations));

    assert_eq!(button.is_pressed(), Ok(true));
    assert_eq!(button.is_pressed(), Ok(false));

    let mut pin = button.release();
    pin.done();
}

#[test]
fn test_sampled_pin_feeds_classifier() {
    // Pressed at 1000ms, released at 1080ms, pressed at 2000ms, released at 2400ms
    let levels = [PinState::Low, PinState::High, PinState::Low, PinState::High];
    let times = [1000, 1080, 2000, 2400];
    let expectations: Vec<_> = levels.iter().map(|s| PinTransaction::get(s.clone())).collect();

    let mut button = EmbeddedHalButton::new(PinMock::new(&expectations));
    let input = ButtonInput::new();
    let config = GameConfig::default();

    let mut events = Vec::new();
    for now in times {
        let pressed = button.is_pressed().unwrap_or(false);
        if let Some(event) = input.update(Button::Key, pressed, now, &config) {
            events.push(event);
        }
    }
    assert_eq!(events, vec![InputEvent::Dot, InputEvent::Dash]);

    let mut pin = button.release();
    pin.done();
}

#[test]
fn test_bounce_is_filtered() {
    let input = ButtonInput::new();
    let config = GameConfig::default();

    assert_eq!(input.update(Button::Commit, true, 500, &config), Some(InputEvent::Commit));
    // Contact bounce inside the debounce window
    assert_eq!(input.update(Button::Commit, false, 503, &config), None);
    assert_eq!(input.update(Button::Commit, true, 506, &config), None);
    assert!(input.commit());

    assert_eq!(input.update(Button::Commit, false, 700, &config), None);
    assert!(!input.commit());
}
