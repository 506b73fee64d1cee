pub mod board;
pub mod config;
pub mod error;
pub mod event_log;
pub mod game;
pub mod motion;
pub mod token;
pub mod types;
pub mod wasm_api;
pub mod win;
