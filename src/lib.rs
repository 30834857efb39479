//! # Connect N
//!
//! A Connect Four engine generalized to any board size and any run length to
//! win. The engine is a synchronous state machine: a caller creates a
//! [`Session`], drops pieces into columns, and renders the returned
//! [`MoveOutcome`]s however it likes.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, player, win detection, state machine, session
//! - [`config`] — Game settings, validation, and TOML loading
//! - [`error`] — Structured error types

pub mod config;
pub mod error;
pub mod game;

pub use config::GameConfig;
pub use error::{ConfigError, MoveError};
pub use game::{Cell, GameStatus, MoveOutcome, Player, Position, Session};
