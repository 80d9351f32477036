use std::f32::consts::TAU;

use crate::{CharacterStats, GameConfig, Params, PhysicsMultipliers, Player};

/// Held movement keys for one player
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MoveKeys {
    pub left: bool,
    pub right: bool,
}

impl MoveKeys {
    pub fn new(left: bool, right: bool) -> Self {
        Self { left, right }
    }

    /// -1, 0 or 1; both held cancels out
    pub fn direction(self) -> i8 {
        i8::from(self.right) - i8::from(self.left)
    }
}

/// Both keys apply independently, so holding both leaves x unchanged.
pub fn apply_input(x: f32, speed_per_frame: f32, move_left: bool, move_right: bool) -> f32 {
    let mut x = x;
    if move_left {
        x -= speed_per_frame;
    }
    if move_right {
        x += speed_per_frame;
    }
    x
}

/// Distance a player may travel this frame.
///
/// Base constants are tuned per 60 Hz frame; `time_scale` (elapsed seconds * 60)
/// converts them to the real elapsed time.
pub fn effective_speed(
    player: &Player,
    config: &GameConfig,
    stats: &CharacterStats,
    multipliers: &PhysicsMultipliers,
    time_scale: f32,
) -> f32 {
    let base = if player.is_dashing {
        config.dash_speed
    } else {
        config.player_speed
    };
    base * multipliers.player_speed * stats.speed_multiplier * time_scale
}

/// Move a player, update facing and the cosmetic leg swing
pub fn move_player(mut player: Player, keys: MoveKeys, speed: f32, time_scale: f32) -> Player {
    player.pos.x = apply_input(player.pos.x, speed, keys.left, keys.right);

    match keys.direction() {
        -1 => player.facing_right = false,
        1 => player.facing_right = true,
        _ => {}
    }

    if keys.direction() != 0 {
        let swing = Params::LEG_SWING_PER_FRAME * time_scale;
        player.rotation = (player.rotation + swing).rem_euclid(TAU);
    } else {
        player.rotation = 0.0;
    }
    player
}
