use crate::{CourtSide, GameConfig, Player, Takyan};

/// Closest-point circle-vs-rectangle test between the takyan and a player
pub fn player_collision(takyan: &Takyan, player: &Player) -> bool {
    player
        .bounds()
        .intersects_circle(takyan.pos, takyan.radius)
}

/// Takyan touching or below the ground line
pub fn ground_contact(takyan: &Takyan, config: &GameConfig) -> bool {
    takyan.pos.y + takyan.radius >= config.ground_level
}

/// Half of the court the takyan landed on, if it is on the ground.
///
/// This is the side that lost the rally.
pub fn scoring_side(takyan: &Takyan, config: &GameConfig) -> Option<CourtSide> {
    if !ground_contact(takyan, config) {
        return None;
    }
    Some(CourtSide::of_x(takyan.pos.x, config))
}

/// Keep the takyan between the side walls, reflecting horizontal velocity
pub fn boundary_bounce(mut takyan: Takyan, config: &GameConfig) -> Takyan {
    let r = takyan.radius;
    if takyan.pos.x - r < 0.0 {
        takyan.pos.x = r;
        takyan.vel.x = takyan.vel.x.abs();
    } else if takyan.pos.x + r > config.canvas_width {
        takyan.pos.x = config.canvas_width - r;
        takyan.vel.x = -takyan.vel.x.abs();
    }
    takyan
}

/// Clamp a player horizontally.
///
/// Practice allows the full court. Versus keeps the player on the half that
/// `last_x` (where it stood before this frame's move) falls on; sides are not
/// stored.
pub fn clamp_player_to_bounds(
    mut player: Player,
    config: &GameConfig,
    is_practice_mode: bool,
) -> Player {
    let (min_x, max_x) = if is_practice_mode {
        (0.0, config.canvas_width - player.size.x)
    } else {
        CourtSide::of_x(player.last_x, config).player_x_range(config, player.size.x)
    };
    player.pos.x = player.pos.x.clamp(min_x, max_x);
    player
}
