//! mkvtool - Matroska housekeeping on top of mkvtoolnix
//!
//! This library crate exposes the command implementations for integration
//! testing and benchmarks.

pub mod commands;
pub mod config;
