//! Command-line interface for super_nim.

use clap::Parser;

/// Super Nim - clear rows and columns of chips; whoever clears the last chip wins.
///
/// Two players share the console and take turns. Logging goes to stderr and
/// is controlled by `RUST_LOG`.
#[derive(Parser, Debug)]
#[command(name = "super_nim")]
#[command(about = "Two-player Super Nim in the terminal")]
#[command(version)]
pub struct Cli {}
