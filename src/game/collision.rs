//! Collision detection.
//!
//! Pure functions of the current player and pipe set; called once per tick
//! after movement, spawn, and retirement. Short-circuits on the first hit.

use crate::config::{GameConfig, HitboxShape};
use crate::game::types::{Pipe, Player};

/// True if the player's hitbox touches the field bounds or any pipe segment.
pub fn check_collision(player: &Player, pipes: &[Pipe], config: &GameConfig) -> bool {
    match config.hitbox_shape {
        HitboxShape::Rectangle => check_rect(player, pipes, config),
        HitboxShape::Circle => check_circle(player, pipes, config),
    }
}

fn check_rect(player: &Player, pipes: &[Pipe], config: &GameConfig) -> bool {
    let left = player.x + config.hitbox_padding_x;
    let top = player.y + config.hitbox_padding_y;
    let right = player.x + player.width - config.hitbox_padding_x;
    let bottom = player.y + player.height - config.hitbox_padding_y;

    if bottom > config.field_height || top < 0.0 {
        return true;
    }

    for pipe in pipes {
        if right > pipe.x && left < pipe.x + config.pipe_width {
            if top < pipe.top_height || bottom > pipe.bottom_y {
                return true;
            }
        }
    }
    false
}

fn check_circle(player: &Player, pipes: &[Pipe], config: &GameConfig) -> bool {
    let cx = player.x + player.width / 2.0;
    let cy = player.y + player.height / 2.0;
    let padding = config.hitbox_padding_x.max(config.hitbox_padding_y);
    let radius = (player.width.min(player.height) / 2.0 - padding).max(0.0);

    if cy + radius > config.field_height || cy - radius < 0.0 {
        return true;
    }

    for pipe in pipes {
        let top_segment = circle_hits_rect(cx, cy, radius, pipe.x, 0.0, config.pipe_width, pipe.top_height);
        let bottom_segment = circle_hits_rect(
            cx,
            cy,
            radius,
            pipe.x,
            pipe.bottom_y,
            config.pipe_width,
            config.field_height - pipe.bottom_y,
        );
        if top_segment || bottom_segment {
            return true;
        }
    }
    false
}

/// Closest-point test between a circle and an axis-aligned rectangle.
fn circle_hits_rect(cx: f64, cy: f64, radius: f64, rx: f64, ry: f64, rw: f64, rh: f64) -> bool {
    let nearest_x = cx.clamp(rx, rx + rw);
    let nearest_y = cy.clamp(ry, ry + rh);
    let dx = cx - nearest_x;
    let dy = cy - nearest_y;
    dx * dx + dy * dy < radius * radius
}
