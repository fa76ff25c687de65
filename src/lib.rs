//! Strictly Ludo terminal front end
//!
//! Wraps the [`strictly_ludo`] rules engine in a line-driven session:
//! configuration loading, text rendering, and command parsing.
//!
//! # Example
//!
//! ```
//! use strictly_ludo_play::{PlayConfig, Session};
//!
//! # fn main() -> anyhow::Result<()> {
//! let config = PlayConfig::default().with_seed(Some(3));
//! let mut session = Session::from_config(&config)?;
//! let mut output = Vec::new();
//! session.run("roll\nquit\n".as_bytes(), &mut output)?;
//! assert!(String::from_utf8(output)?.contains("Red rolled"));
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod cli;
mod config;
mod display;
mod session;

// Crate-level exports - CLI
pub use cli::{Cli, Command};

// Crate-level exports - Configuration
pub use config::PlayConfig;

// Crate-level exports - Rendering
pub use display::{cell_glyph, describe, render_board, render_status};

// Crate-level exports - Session
pub use session::{Command as SessionCommand, CommandError, Reply, Session};
