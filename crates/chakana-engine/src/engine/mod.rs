//! Session orchestration on top of the core data structures.
//!
//! - [`GameConfig`] - construction-time configuration (grid size, players,
//!   palette)
//! - [`GameSession`] - the turn state machine: edge placement, closure
//!   detection, scoring, turn transfer
//! - [`ScoreBoard`] - per-player accumulated points
//!
//! # Game flow
//!
//! 1. Build a [`GameSession`] from a [`GameConfig`]
//! 2. Deal a pattern with [`GameSession::new_round`]
//! 3. Players alternate [`GameSession::place_edge`] calls; a move that
//!    closes one or two boxes scores them and keeps the turn
//! 4. When [`GameSession::is_complete`] reports no move left, restart with
//!    [`GameSession::reset_round`] (same pattern) or `new_round`
//!
//! # Example
//!
//! ```
//! use chakana_engine::{EdgeRef, GameConfig, GameSession};
//!
//! let mut session = GameSession::new(GameConfig::default());
//! let outcome = session.place_edge(EdgeRef::horizontal(0, 0)).unwrap();
//! assert!(outcome.closed.is_empty());
//! ```

pub use self::{config::*, game_session::*, score_board::*};

mod config;
mod game_session;
mod score_board;
