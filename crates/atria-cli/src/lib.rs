//! atria-cli library root.
//!
//! Exposes the config and command layers so integration tests can drive
//! them without spawning the binary.

pub mod cli;
pub mod commands;
pub mod config;
