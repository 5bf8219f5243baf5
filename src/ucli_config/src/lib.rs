#![no_std]

//! Compile-time configuration shared by the uCLI crates.
//!
//! Every fixed-capacity container in `ucli_core` is sized from these values
//! unless the embedding application picks other const-generic capacities.

/// Maximum number of schema tokens (and therefore argument slots) per command.
pub const MAX_CMD_PARTS: usize = 4;

/// Maximum number of bytes kept for a text argument.
pub const ARG_MAX_TEXT_LEN: usize = 16;

/// Prompt printed by interactive front-ends.
pub const PROMPT: &str = "ucli> ";

/// Maximum accepted length of one input line.
pub const INPUT_MAX_LEN: usize = 128;
