pub mod cli;
pub mod config;
pub mod dog;
pub mod logging;
pub mod ui;
