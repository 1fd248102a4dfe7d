//! Session state machine and per-tick simulation.
//!
//! Free functions over [`Session`]; the UI layer learns what happened each
//! tick from the returned [`TickOutcome`] rather than by diffing state.

use crate::constants::TICK_INTERVAL_MS;
use crate::game::collision::check_collision;
use crate::game::types::{Phase, Session};
use rand::Rng;

/// Logical input events. Device mapping (keys, clicks) happens upstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameInput {
    Start,
    Jump,
}

/// What an input event did to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    Ignored,
    Jumped,
    Started,
    /// Start refused (no player name yet); instructional message shown.
    StartRefused,
}

/// Everything that happened during one tick.
#[derive(Debug, Clone, Default)]
pub struct TickOutcome {
    /// A pipe was passed and the score incremented.
    pub scored: bool,
    /// The score hit a milestone and pipe speed increased.
    pub speed_increased: bool,
    /// The run ended in a collision this tick.
    pub run_over: Option<RunSummary>,
}

/// Terminal report for a finished run, emitted exactly once per run.
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub player_name: String,
    pub score: u32,
    /// The run beat the stored high score (already applied to the session).
    pub new_high_score: bool,
}

/// Apply a logical input event to the session.
///
/// While Running, `Jump` overrides velocity to exactly `-jump_power` (never
/// additive) and `Start` is ignored. While Idle/GameOver, `Jump` is
/// reinterpreted as `Start` when a message is showing and the name is known.
pub fn process_input<R: Rng>(session: &mut Session, input: GameInput, rng: &mut R) -> ActionOutcome {
    match (session.phase, input) {
        (Phase::Running, GameInput::Jump) => {
            session.player.velocity = -session.config.jump_power;
            ActionOutcome::Jumped
        }
        (Phase::Running, GameInput::Start) => ActionOutcome::Ignored,
        (_, GameInput::Start) => try_start(session, rng),
        (_, GameInput::Jump) => {
            if session.message.is_some() && session.player_name.is_some() {
                try_start(session, rng)
            } else {
                ActionOutcome::Ignored
            }
        }
    }
}

/// Begin a run: reset score, speed, player, pipes and tick counter, then
/// spawn the first pipe. Refused (recoverably) while no name is set.
pub fn try_start<R: Rng>(session: &mut Session, rng: &mut R) -> ActionOutcome {
    if session.player_name.is_none() {
        session.message = Some(Session::NAME_REQUIRED_MESSAGE.to_string());
        return ActionOutcome::StartRefused;
    }

    session.phase = Phase::Running;
    session.score = 0;
    session.pipe_speed = session.config.base_pipe_speed;
    session.player.y = session.config.field_height / 2.0 - session.config.player_height / 2.0;
    session.player.velocity = 0.0;
    session.pipes.clear();
    session.ticks_since_start = 0;
    session.spawn_timer_ms = 0;
    session.message = None;
    session.spawn_pipe(rng);
    ActionOutcome::Started
}

/// Advance the simulation by one logical tick.
///
/// Order matches the run loop contract: physics, pipe movement and scoring,
/// retirement, spawn timer, then collision.
pub fn process_tick<R: Rng>(session: &mut Session, rng: &mut R) -> TickOutcome {
    let mut outcome = TickOutcome::default();
    if session.phase != Phase::Running {
        return outcome;
    }

    // Physics: gravity only after the grace period, then integrate.
    session.ticks_since_start += 1;
    if session.ticks_since_start > session.config.gravity_delay_ticks {
        session.player.velocity += session.config.gravity;
    }
    session.player.y += session.player.velocity;

    // Move pipes and score the ones whose right edge just passed the player.
    let pipe_width = session.config.pipe_width;
    let player_x = session.player.x;
    let milestone = session.config.milestone_interval;
    let increment = session.config.speed_increment;
    let speed = session.pipe_speed;
    for pipe in &mut session.pipes {
        pipe.x -= speed;
        if !pipe.passed && pipe.x + pipe_width < player_x {
            pipe.passed = true;
            session.score += 1;
            outcome.scored = true;
            if session.score % milestone == 0 {
                session.pipe_speed += increment;
                outcome.speed_increased = true;
            }
        }
    }

    // Retire pipes fully off the left edge, preserving order.
    session.pipes.retain(|pipe| pipe.x + pipe_width > 0.0);

    // Spawn on a tick-derived timer that resets on every spawn.
    session.spawn_timer_ms += TICK_INTERVAL_MS;
    if session.spawn_timer_ms > session.config.spawn_interval_ms {
        session.spawn_pipe(rng);
        session.spawn_timer_ms = 0;
    }

    if check_collision(&session.player, &session.pipes, &session.config) {
        outcome.run_over = Some(end_run(session));
    }
    outcome
}

/// Freeze the session and build the terminal summary. Updates the session's
/// cached high score; durable persistence is the caller's job.
fn end_run(session: &mut Session) -> RunSummary {
    session.phase = Phase::GameOver;

    let new_high_score = session.score > session.high_score;
    if new_high_score {
        session.high_score = session.score;
    }

    let player_name = session.player_name.clone().unwrap_or_default();
    session.message = Some(format!(
        "Game over, {}! Score: {}. Press Space to play again.",
        player_name, session.score
    ));

    RunSummary {
        player_name,
        score: session.score,
        new_high_score,
    }
}
