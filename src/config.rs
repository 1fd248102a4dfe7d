//! Gameplay configuration surface.
//!
//! Every tunable that differs between "feel" variants lives here with one
//! canonical default set, instead of being hard-coded in the simulation.
//! Physics constants are per-tick values tuned for the fixed 60 ticks/second
//! cadence in [`crate::constants::TICK_INTERVAL_MS`].

use serde::{Deserialize, Serialize};

/// Shape used for the player's collision hitbox.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HitboxShape {
    /// Full sprite rectangle, inset by the padding on each axis.
    Rectangle,
    /// Circle centered on the sprite, radius inset by the larger padding.
    Circle,
}

/// All gameplay tunables for a session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Play field width in game units.
    pub field_width: f64,
    /// Play field height in game units.
    pub field_height: f64,

    /// Player's fixed horizontal position (obstacles move, the player doesn't).
    pub player_x: f64,
    pub player_width: f64,
    pub player_height: f64,

    /// Downward acceleration added to velocity each tick once gravity is active.
    pub gravity: f64,
    /// Upward impulse: a jump sets velocity to exactly `-jump_power`.
    pub jump_power: f64,
    /// Ticks after run start before gravity kicks in (brief free float).
    pub gravity_delay_ticks: u32,

    pub pipe_width: f64,
    /// Standard vertical gap between a pipe pair's segments.
    pub pipe_gap: f64,
    /// Enlarged gap used during the warm-up period.
    pub easy_pipe_gap: f64,
    /// Pipes spawned with the easy gap while score < this count.
    pub easy_pipe_count: u32,
    /// Minimum height of either pipe segment.
    pub min_segment_height: f64,
    /// Milliseconds between pipe spawns.
    pub spawn_interval_ms: u64,

    /// Horizontal pipe speed at run start, in units per tick.
    pub base_pipe_speed: f64,
    /// Speed gained at each score milestone.
    pub speed_increment: f64,
    /// Score multiple at which speed increases.
    pub milestone_interval: u32,

    /// Inward hitbox inset per axis, for visually forgiving collisions.
    pub hitbox_padding_x: f64,
    pub hitbox_padding_y: f64,
    pub hitbox_shape: HitboxShape,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            field_width: 600.0,
            field_height: 400.0,

            player_x: 50.0,
            player_width: 40.0,
            player_height: 40.0,

            gravity: 0.28,
            jump_power: 3.7,
            gravity_delay_ticks: 30,

            pipe_width: 50.0,
            pipe_gap: 110.0,
            easy_pipe_gap: 150.0,
            easy_pipe_count: 10,
            min_segment_height: 50.0,
            spawn_interval_ms: 1800,

            base_pipe_speed: 2.0,
            speed_increment: 0.2,
            milestone_interval: 3,

            hitbox_padding_x: 5.0,
            hitbox_padding_y: 5.0,
            hitbox_shape: HitboxShape::Rectangle,
        }
    }
}

impl GameConfig {
    /// Check configuration preconditions. Called once at startup; a config
    /// that leaves no room for both pipe segments is a programming error,
    /// not a runtime condition.
    pub fn validate(&self) {
        assert!(
            self.pipe_gap + 2.0 * self.min_segment_height <= self.field_height,
            "pipe gap {} leaves no room for segments in field height {}",
            self.pipe_gap,
            self.field_height
        );
        assert!(
            self.easy_pipe_gap + 2.0 * self.min_segment_height <= self.field_height,
            "easy pipe gap {} leaves no room for segments in field height {}",
            self.easy_pipe_gap,
            self.field_height
        );
        assert!(self.jump_power > 0.0, "jump power must be positive");
        assert!(self.gravity >= 0.0, "gravity must be non-negative");
        assert!(self.base_pipe_speed > 0.0, "pipe speed must be positive");
        assert!(self.milestone_interval > 0, "milestone interval must be positive");
        assert!(self.spawn_interval_ms > 0, "spawn interval must be positive");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        GameConfig::default().validate();
    }

    #[test]
    #[should_panic(expected = "leaves no room")]
    fn test_oversized_gap_rejected() {
        let config = GameConfig {
            pipe_gap: 350.0,
            ..GameConfig::default()
        };
        config.validate();
    }

    #[test]
    #[should_panic(expected = "easy pipe gap")]
    fn test_oversized_easy_gap_rejected() {
        let config = GameConfig {
            easy_pipe_gap: 301.0,
            ..GameConfig::default()
        };
        config.validate();
    }

    #[test]
    #[should_panic(expected = "milestone interval")]
    fn test_zero_milestone_interval_rejected() {
        let config = GameConfig {
            milestone_interval: 0,
            ..GameConfig::default()
        };
        config.validate();
    }
}
