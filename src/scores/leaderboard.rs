//! Remote leaderboard client.
//!
//! The core never blocks on this: submissions and fetches run on background
//! threads and failures surface only as the UI's "unavailable" fallback.

use serde::{Deserialize, Serialize};

/// One leaderboard row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreEntry {
    pub name: String,
    pub score: u32,
}

#[derive(Serialize)]
struct ScoreSubmission<'a> {
    name: &'a str,
    score: u32,
    timestamp: i64,
}

/// Remote score service seam. The game only needs these two calls; transport
/// and persistence are the implementation's business.
pub trait Leaderboard: Send + Sync {
    /// Record a finished run. Errors are reported but never block gameplay.
    fn submit(&self, name: &str, score: u32, timestamp: i64) -> Result<(), String>;

    /// Top `n` entries, sorted descending by score (ties arbitrary).
    fn fetch_top(&self, n: usize) -> Result<Vec<ScoreEntry>, String>;
}

/// JSON-over-HTTP leaderboard backend.
pub struct HttpLeaderboard {
    base_url: String,
}

const USER_AGENT: &str = concat!("skyward/", env!("CARGO_PKG_VERSION"));

impl HttpLeaderboard {
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url }
    }
}

impl Leaderboard for HttpLeaderboard {
    fn submit(&self, name: &str, score: u32, timestamp: i64) -> Result<(), String> {
        let url = format!("{}/scores", self.base_url);
        ureq::post(&url)
            .set("User-Agent", USER_AGENT)
            .send_json(ScoreSubmission {
                name,
                score,
                timestamp,
            })
            .map_err(|e| e.to_string())?;
        Ok(())
    }

    fn fetch_top(&self, n: usize) -> Result<Vec<ScoreEntry>, String> {
        let url = format!("{}/scores/top", self.base_url);
        let entries: Vec<ScoreEntry> = ureq::get(&url)
            .set("User-Agent", USER_AGENT)
            .query("n", &n.to_string())
            .call()
            .map_err(|e| e.to_string())?
            .into_json()
            .map_err(|e| e.to_string())?;
        Ok(top_n(entries, n))
    }
}

/// Sort descending by score and keep the first `n`. The server already
/// promises this shape; re-applying it keeps misbehaving backends harmless.
pub(crate) fn top_n(mut entries: Vec<ScoreEntry>, n: usize) -> Vec<ScoreEntry> {
    entries.sort_by(|a, b| b.score.cmp(&a.score));
    entries.truncate(n);
    entries
}
