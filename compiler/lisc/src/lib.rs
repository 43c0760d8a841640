//! Lisc CLI - library half of the `lisc` binary.
//!
//! Command handlers write to caller-supplied writers so they can be driven
//! from tests with in-memory buffers. `main.rs` only parses the command
//! name, wires up stdio, and turns the [`commands::ExitStatus`] into a
//! process exit code.

pub mod commands;
pub mod config;
pub mod tracing_setup;
