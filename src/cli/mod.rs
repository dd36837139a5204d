// SPDX-License-Identifier: MIT

//! Command-line interface.

pub mod args;
pub mod dispatch;

pub use args::Cli;
pub use dispatch::run;
