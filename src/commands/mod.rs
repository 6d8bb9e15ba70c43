// src/commands/mod.rs
// One module per command; `reply` handles delivery for both invocation styles.

pub mod autoimages;
pub mod eightball;
pub mod help;
pub mod image;
pub mod reply;
