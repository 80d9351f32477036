use crate::systems::{scoring_side, set_emotion};
use crate::{
    CourtSide, Emotion, Events, GameConfig, GameMode, GameRng, GameState, ParticleKind, Params,
    PlayerId, SoundCue, Takyan,
};

/// Handle the takyan touching the ground.
///
/// Practice: streak resets and a new pop-up serve follows immediately.
/// Versus: the player opposite the landing half scores; the match ends at the
/// winning score, otherwise a neutral serve follows.
pub fn check_scoring(
    state: &mut GameState,
    config: &GameConfig,
    events: &mut Events,
    rng: &mut GameRng,
) {
    let Some(side) = scoring_side(&state.takyan, config) else {
        return;
    };

    state.combo_count = 0;
    state.rally_count = 0;
    events.particles(
        ParticleKind::Ground,
        state.takyan.pos,
        Some(Params::GROUND_PARTICLE_COLOR),
    );

    match state.mode {
        GameMode::Practice => {
            if let Some(streak) = state.streak.as_mut() {
                streak.record_drop(state.elapsed_secs);
            }
            state.player1 = set_emotion(state.player1, Emotion::Fall, config.emotion_duration_ms);
            events.sound(SoundCue::Drop);
            state.takyan = Takyan::spawn(config, true, rng);
            tracing::debug!("practice drop, serving again");
        }
        GameMode::Versus => {
            let scorer = match side {
                CourtSide::Left => PlayerId::Two,
                CourtSide::Right => PlayerId::One,
            };
            award_point(state, scorer, config, events);

            if state.player(scorer).score >= config.winning_score {
                state.winner = Some(scorer);
                events.sound(SoundCue::Win);
                tracing::info!(
                    ?scorer,
                    p1 = state.player1.score,
                    p2 = state.player2.score,
                    "match over"
                );
            } else {
                state.takyan = Takyan::spawn(config, false, rng);
            }
        }
    }
}

fn award_point(state: &mut GameState, scorer: PlayerId, config: &GameConfig, events: &mut Events) {
    let duration = config.emotion_duration_ms;
    let winner = state.player_mut(scorer);
    winner.score += 1;
    *winner = set_emotion(*winner, Emotion::Happy, duration);
    let loser = state.player_mut(scorer.opponent());
    *loser = set_emotion(*loser, Emotion::Angry, duration);
    state.last_scorer = Some(scorer);

    events.particles(
        ParticleKind::Score,
        state.takyan.pos,
        Some(Params::SCORE_PARTICLE_COLOR),
    );
    events.shake(Params::SCORE_SHAKE);
    events.sound(SoundCue::Score);
    tracing::info!(
        ?scorer,
        p1 = state.player1.score,
        p2 = state.player2.score,
        "point"
    );
}
