//! Guess engine
//!
//! Owns the state of a single game: the answer, the attempt counter, the
//! keyboard state and the row being typed. Presentation layers drive it
//! through [`GameSession`]'s command methods and render what it returns.

mod config;
mod session;

pub use config::{DEFAULT_MAX_ATTEMPTS, GameConfig, MAX_ATTEMPTS_LIMIT};
pub use session::{GameOutcome, GameSession, GameStatus, SubmitResult};
