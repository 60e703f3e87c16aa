//! Resume Assist CLI

pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod output;
pub mod prompt;
pub mod render;
