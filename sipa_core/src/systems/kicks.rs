use crate::systems::{player_collision, start_kick};
use crate::{
    Events, GameConfig, GameState, InputState, ParticleKind, Params, PhysicsMultipliers, PlayerId,
    SoundCue,
};

/// A kick that landed this frame, applied after physics integration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PendingKick {
    pub player: PlayerId,
    pub direction: i8,
    pub power: f32,
}

/// Find the (at most one) player whose body meets the takyan this frame.
///
/// Player one is checked first. Contact only counts while the takyan is not
/// already rising, so one touch is one kick. Counters, streak and the kick
/// animation update here; the impulse is returned for the caller to apply.
pub fn resolve_kicks(
    state: &mut GameState,
    input: &InputState,
    config: &GameConfig,
    multipliers: &PhysicsMultipliers,
    events: &mut Events,
) -> Option<PendingKick> {
    if state.takyan.vel.y < 0.0 {
        return None;
    }

    let kicker = state
        .active_players()
        .iter()
        .copied()
        .find(|&id| player_collision(&state.takyan, state.player(id)))?;

    let stats = state.stats(kicker, config);
    let kick = PendingKick {
        player: kicker,
        direction: input.move_keys(kicker).direction(),
        power: stats.power_multiplier * multipliers.ball_speed,
    };

    state.rally_count += 1;
    state.combo_count += 1;
    let player = state.player_mut(kicker);
    *player = start_kick(*player, config);
    if let Some(streak) = state.streak.as_mut() {
        streak.record_kick();
    }

    events.particles(ParticleKind::Kick, state.takyan.pos, Some(stats.color));
    events.shake(Params::KICK_SHAKE);
    events.sound(SoundCue::Kick);
    tracing::debug!(?kicker, rally = state.rally_count, "kick");

    Some(kick)
}

/// Kick key without contact: play the swing if not already kicking
pub fn apply_swings(state: &mut GameState, input: &InputState, config: &GameConfig) {
    for &id in state.active_players() {
        let player = state.player_mut(id);
        if input.kick(id) && !player.is_kicking {
            *player = start_kick(*player, config);
        }
    }
}
