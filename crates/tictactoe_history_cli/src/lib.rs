//! Headless command-line front end for `tictactoe_history`.
//!
//! - **Play**: an interactive [`Session`] over any reader/writer pair
//! - **Replay**: [`replay`] a list of cells and print a [`ReplayReport`]
//! - **Config**: [`CliConfig`] loaded from TOML

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod replay;
mod session;

pub use cli::{Cli, Command};
pub use config::{CliConfig, ConfigError};
pub use replay::{ReplayReport, replay};
pub use session::{CommandParseError, Flow, Session, SessionCommand, parse_cell};
