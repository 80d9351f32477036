pub mod characters;
pub mod components;
pub mod config;
pub mod court;
pub mod difficulty;
pub mod error;
pub mod game_state;
pub mod input;
pub mod params;
pub mod resources;
pub mod systems;

pub use characters::*;
pub use components::*;
pub use config::*;
pub use court::*;
pub use difficulty::*;
pub use error::*;
pub use game_state::*;
pub use input::*;
pub use params::*;
pub use resources::*;

pub use glam;

use systems::*;

/// Advance the match by one rendered frame.
///
/// Returns a new state; `state` is left untouched. A finished or paused
/// match comes back unchanged with no events.
pub fn update_game_state(
    state: &GameState,
    input: &InputState,
    config: &GameConfig,
    delta_time: f32,
    custom: Option<&CustomMultipliers>,
    rng: &mut GameRng,
) -> FrameOutput {
    if state.winner.is_some() || state.is_paused {
        return FrameOutput {
            state: state.clone(),
            events: Vec::new(),
        };
    }

    // Clamp dt to prevent large jumps
    let dt = if delta_time > 0.0 {
        delta_time.min(Params::MAX_DT)
    } else {
        0.0
    };
    let time_scale = dt * Params::REFERENCE_FPS;
    let elapsed_ms = dt * 1000.0;

    let mut next = state.clone();
    let mut events = Events::new(config);
    let multipliers = resolve_multipliers(next.mode, next.difficulty(), custom);
    let practice = next.mode.is_practice();
    let players = next.active_players();

    // 1. Dash requests
    for &id in players {
        if input.dash(id) {
            let (player, started) = try_start_dash(*next.player(id), config);
            if started {
                events.sound(SoundCue::Dash);
                tracing::debug!(?id, "dash");
            }
            *next.player_mut(id) = player;
        }
    }

    // 2. Movement and court bounds; the half comes from where the player stood
    for &id in players {
        let stats = next.stats(id, config);
        let mut player = *next.player(id);
        player.last_x = player.pos.x;
        let speed = effective_speed(&player, config, &stats, &multipliers, time_scale);
        let moved = move_player(player, input.move_keys(id), speed, time_scale);
        *next.player_mut(id) = clamp_player_to_bounds(moved, config, practice);
    }

    // 3. Kicks (contact against the takyan before it moves)
    let kick = resolve_kicks(&mut next, input, config, &multipliers, &mut events);
    apply_swings(&mut next, input, config);

    // 4. Takyan physics. A kicked takyan moves with its new velocity and
    // ends the frame holding exactly the kick velocity.
    let launch = |takyan: Takyan| match kick {
        Some(kick) => apply_kick(takyan, config, kick.direction, kick.power),
        None => takyan,
    };
    let mut takyan = integrate(launch(next.takyan), config, time_scale, multipliers.gravity);
    takyan = apply_air_resistance(takyan, config.air_resistance);
    takyan = boundary_bounce(takyan, config);
    next.takyan = update_rotation(launch(takyan), time_scale);

    // 5. Ground contact
    check_scoring(&mut next, config, &mut events, rng);

    // 6. Timers
    for &id in players {
        let player = next.player_mut(id);
        *player = tick_timers(*player, config, elapsed_ms);
    }

    next.elapsed_secs += f64::from(dt);

    FrameOutput {
        state: next,
        events: events.into_vec(),
    }
}
