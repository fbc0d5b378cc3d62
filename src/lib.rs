// lib.rs
pub mod board;
pub mod combat;
pub mod display;
pub mod error;
pub mod game;
pub mod game_config;
pub mod input;
pub mod mission;
pub mod player;
pub mod territory;
pub mod testing;
pub mod turn_phase;
