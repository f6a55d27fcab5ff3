pub mod config;
pub mod console;
pub mod error;
pub mod game;
pub mod logging;
pub mod mvi;
pub mod repository;
pub mod usecase;
