//! Bot services: everything between command parsing and the chat platform.

pub mod autopost;
pub mod cooldown;
pub mod eightball;
pub mod image;
pub mod random;
pub mod safety;
