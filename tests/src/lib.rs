//! Host-side integration tests for the morse code game

#[cfg(test)]
mod game_flow_tests;
#[cfg(test)]
mod property_tests;
#[cfg(test)]
mod hal_tests;
