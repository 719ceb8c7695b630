pub mod config;
pub mod health;
pub mod parse;
pub mod process;
pub mod prompt;
pub mod templates;
