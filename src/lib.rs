//! scpack library.
//!
//! The binary in `main.rs` is a thin clap front end over these modules; the
//! integration tests in `tests/` drive them directly.

pub mod archive;
pub mod checksum;
pub mod clean;
pub mod commands;
pub mod config;
pub mod metadata;
pub mod pipeline;
pub mod preflight;
pub mod process;
pub mod timing;
