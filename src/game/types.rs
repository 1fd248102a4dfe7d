//! Session data structures.
//!
//! All mutable run state lives in [`Session`], threaded explicitly through
//! the tick and input handlers. There are no ambient globals.

use crate::config::GameConfig;
use rand::Rng;

/// Where the session is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Nothing simulated yet; entry message showing.
    Idle,
    /// Simulation active.
    Running,
    /// Simulation frozen; summary message showing.
    GameOver,
}

/// The player sprite. `x` and the dimensions are fixed for the whole run;
/// pipes move, the player doesn't.
#[derive(Debug, Clone)]
pub struct Player {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Vertical velocity, positive = downward.
    pub velocity: f64,
}

/// A pipe pair: top segment from the ceiling down to `top_height`, bottom
/// segment from `bottom_y` down to the floor, gap in between.
#[derive(Debug, Clone)]
pub struct Pipe {
    /// Left edge; decreases each tick.
    pub x: f64,
    pub top_height: f64,
    /// Always `top_height + gap` at creation.
    pub bottom_y: f64,
    /// Set once, the tick the pipe's right edge passes the player.
    pub passed: bool,
}

/// One play session: current phase, player, active pipes, score and speed,
/// plus the display name captured once per app session.
#[derive(Debug, Clone)]
pub struct Session {
    pub config: GameConfig,
    pub phase: Phase,
    pub player: Player,
    /// Active pipes in spawn order == left-to-right screen order.
    pub pipes: Vec<Pipe>,
    pub score: u32,
    /// Current horizontal pipe speed; grows at score milestones.
    pub pipe_speed: f64,
    /// Best score across runs, loaded from the local store at startup.
    pub high_score: u32,
    /// Captured once; `None` until the player has entered a name.
    pub player_name: Option<String>,
    /// Ticks elapsed this run, used to delay gravity onset.
    pub ticks_since_start: u32,
    /// Milliseconds accumulated toward the next pipe spawn.
    pub spawn_timer_ms: u64,
    /// Message shown while Idle or GameOver; `None` while Running.
    pub message: Option<String>,
}

impl Session {
    pub const IDLE_MESSAGE: &'static str = "Press Space to start!";
    pub const NAME_REQUIRED_MESSAGE: &'static str = "Enter a name to start!";

    pub fn new(config: GameConfig, high_score: u32) -> Self {
        let player = Player {
            x: config.player_x,
            y: config.field_height / 2.0 - config.player_height / 2.0,
            width: config.player_width,
            height: config.player_height,
            velocity: 0.0,
        };
        Self {
            config,
            phase: Phase::Idle,
            player,
            pipes: Vec::new(),
            score: 0,
            pipe_speed: 0.0,
            high_score,
            player_name: None,
            ticks_since_start: 0,
            spawn_timer_ms: 0,
            message: Some(Self::IDLE_MESSAGE.to_string()),
        }
    }

    /// Store the display name, trimmed. Returns false (and stores nothing)
    /// for empty input; the caller keeps prompting.
    pub fn set_player_name(&mut self, name: &str) -> bool {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return false;
        }
        self.player_name = Some(trimmed.to_string());
        true
    }

    /// Gap size for the next pipe: enlarged during the warm-up period,
    /// measured in score rather than time.
    pub fn current_gap(&self) -> f64 {
        if self.score < self.config.easy_pipe_count {
            self.config.easy_pipe_gap
        } else {
            self.config.pipe_gap
        }
    }

    /// Spawn a pipe pair at the right edge. Top height is uniform over
    /// `[min, field_height - gap - min]` so both segments are at least the
    /// minimum height and segments plus gap exactly fill the field.
    pub fn spawn_pipe<R: Rng>(&mut self, rng: &mut R) {
        let gap = self.current_gap();
        let min_height = self.config.min_segment_height;
        let max_height = self.config.field_height - gap - min_height;
        let top_height = rng.gen_range(min_height..=max_height);

        self.pipes.push(Pipe {
            x: self.config.field_width,
            top_height,
            bottom_y: top_height + gap,
            passed: false,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_new_session_defaults() {
        let session = Session::new(GameConfig::default(), 12);
        assert_eq!(session.phase, Phase::Idle);
        assert_eq!(session.score, 0);
        assert_eq!(session.high_score, 12);
        assert!(session.pipes.is_empty());
        assert!(session.player_name.is_none());
        assert_eq!(session.message.as_deref(), Some(Session::IDLE_MESSAGE));
        // Player starts at vertical center with zero velocity
        assert!((session.player.y - 180.0).abs() < f64::EPSILON);
        assert!((session.player.velocity).abs() < f64::EPSILON);
    }

    #[test]
    fn test_set_player_name_trims_and_rejects_empty() {
        let mut session = Session::new(GameConfig::default(), 0);
        assert!(!session.set_player_name("   "));
        assert!(session.player_name.is_none());
        assert!(session.set_player_name("  Ada Lovelace "));
        assert_eq!(session.player_name.as_deref(), Some("Ada Lovelace"));
    }

    #[test]
    fn test_spawned_pipes_respect_segment_bounds() {
        let mut session = Session::new(GameConfig::default(), 0);
        session.score = session.config.easy_pipe_count; // standard gap
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..200 {
            session.spawn_pipe(&mut rng);
        }
        let config = session.config.clone();
        for pipe in &session.pipes {
            assert!(pipe.top_height >= config.min_segment_height);
            assert!(pipe.bottom_y <= config.field_height - config.min_segment_height);
            assert!((pipe.bottom_y - pipe.top_height - config.pipe_gap).abs() < 1e-9);
            assert!((pipe.x - config.field_width).abs() < f64::EPSILON);
            assert!(!pipe.passed);
        }
    }

    #[test]
    fn test_easy_gap_during_warmup_then_standard() {
        let mut session = Session::new(GameConfig::default(), 0);
        let mut rng = ChaCha8Rng::seed_from_u64(3);

        assert!((session.current_gap() - session.config.easy_pipe_gap).abs() < f64::EPSILON);
        session.spawn_pipe(&mut rng);
        let easy = &session.pipes[0];
        assert!((easy.bottom_y - easy.top_height - session.config.easy_pipe_gap).abs() < 1e-9);

        session.score = session.config.easy_pipe_count;
        assert!((session.current_gap() - session.config.pipe_gap).abs() < f64::EPSILON);
    }
}
