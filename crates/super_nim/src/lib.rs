//! Two-player console Super Nim.
//!
//! This crate drives a [`nim_rules`] game through a [`Frontend`]: the
//! [`Orchestrator`] owns the game and asks the frontend for one validated
//! move at a time until the board is empty.
//!
//! # Example
//!
//! ```no_run
//! use nim_rules::GameConfig;
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//! use super_nim::{ConsoleFrontend, Orchestrator};
//!
//! # fn example() -> anyhow::Result<()> {
//! let board = GameConfig::default().board(&mut ChaCha8Rng::seed_from_u64(7))?;
//! let frontend = ConsoleFrontend::new(std::io::stdin().lock(), std::io::stdout());
//! let over = Orchestrator::new(frontend).run(board)?;
//! println!("{}", over.outcome());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod console;
mod frontend;
mod orchestrator;

pub use console::{ConsoleFrontend, InputError, parse_axis, parse_index};
pub use frontend::{Frontend, FrontendError, GameEvent};
pub use orchestrator::Orchestrator;
