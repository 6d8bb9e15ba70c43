// Bot logic lives in the library; `main.rs` only connects config, logging and the gateway client.
pub mod commands;
pub mod config;
pub mod constants;
pub mod handler;
pub mod logging;
pub mod model;
pub mod responses;
pub mod search;
pub mod services;

pub use model::AppState;
