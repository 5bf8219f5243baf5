#![cfg_attr(not(test), no_std)]

//! # uCLI core
//!
//! A heap-free command grammar matcher for serial consoles and other
//! resource-constrained front-ends.
//!
//! A [`Command`] is an ordered list of schema [`Token`]s plus a [`Handler`].
//! Each token is either a literal word matched verbatim or a typed
//! placeholder:
//!
//! | Marker | Kind                        | Produces                 |
//! |--------|-----------------------------|--------------------------|
//! | `?s`   | [`TokenKind::ArgString`]    | [`Argument::Word`]       |
//! | `?i`   | [`TokenKind::ArgInteger`]   | [`Argument::Integer`]    |
//! | `?f`   | [`TokenKind::ArgDecimal`]   | [`Argument::Decimal`]    |
//! | other  | [`TokenKind::Subcommand`]   | [`Argument::Word`]       |
//!
//! [`Command::try_run`] walks the input line word by word against the
//! schema and, when every token accepts its word, calls the handler with the
//! collected [`Arguments`].
//!
//! ```ignore
//! use ucli_core::{Arguments, Command};
//!
//! fn set(args: &Arguments) {
//!     let (channel, level) = (args[1].as_int(), args[2].as_float());
//!     // ...
//! }
//!
//! let cmd: Command = Command::new(&["set", "?i", "?f"], set);
//! assert!(cmd.try_run("set 3 2.5"));
//! ```
//!
//! ## no_std
//! Uses `core` and `heapless` only. All containers are fixed-capacity; the
//! capacities default to [`MAX_CMD_PARTS`] and [`ARG_MAX_TEXT_LEN`].
//!
//! ## Diagnostics
//! Debug and warning hooks are compiled out by default. Enable the `defmt`
//! or the `tracing` feature to route them to that backend.

#[macro_use]
mod log;

mod numeric;
mod words;

pub mod argument;
pub mod command;
pub mod dispatch;
pub mod token;

pub use argument::{Argument, ArgumentKind, Arguments};
pub use command::{Command, Handler};
pub use dispatch::{DispatchError, dispatch, dispatch_strict};
pub use token::{Token, TokenKind};
pub use ucli_config::{ARG_MAX_TEXT_LEN, MAX_CMD_PARTS};
