//! Score persistence and the remote leaderboard client.

pub mod leaderboard;
pub mod store;

pub use leaderboard::{HttpLeaderboard, Leaderboard, ScoreEntry};
pub use store::HighScoreStore;
