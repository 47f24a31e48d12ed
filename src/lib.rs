pub mod commands;
pub mod config;
pub mod help;
pub mod logging;
