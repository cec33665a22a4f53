//! Console front end for the tic-tac-toe rules engine.
//!
//! - **Renderer**: read-only text view of a board
//! - **Driver**: prompt/parse/apply loop over any `BufRead`/`Write` pair
//! - **Config**: TOML file plus command-line overrides

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod driver;
mod input;
mod render;

pub use cli::Cli;
pub use config::{ConfigError, DriverConfig};
pub use driver::{Driver, GameSummary};
pub use input::{InputError, parse_coordinate};
pub use render::Renderer;
