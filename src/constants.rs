// Game timing constants
pub const TICK_INTERVAL_MS: u64 = 16; // ~60 logical ticks per second
pub const INPUT_POLL_MS: u64 = 10;

// Leaderboard constants
pub const LEADERBOARD_SIZE: usize = 5;
pub const DEFAULT_LEADERBOARD_URL: &str = "https://skyward.fly.dev/api";
pub const LEADERBOARD_URL_ENV: &str = "SKYWARD_LEADERBOARD_URL";

// Save system constants
pub const SAVE_DIR_NAME: &str = ".skyward";
pub const HIGH_SCORE_FILE: &str = "high_score.json";
