use serde::{Deserialize, Serialize};
use sipa_core::{
    initialize_game, update_game_state, CharacterSelection, CustomMultipliers, Difficulty,
    FrameEvent, FrameOutput, GameConfig, GameMode, GameRng, GameState, InputState, PlayerId,
    SoundCue,
};

use crate::autopilot::{Autopilot, PilotKeys};

/// Everything needed to start a headless match
#[derive(Debug, Clone)]
pub struct MatchSetup {
    pub config: GameConfig,
    pub mode: GameMode,
    pub difficulty: Difficulty,
    pub characters: CharacterSelection,
    pub custom: Option<CustomMultipliers>,
    pub seed: u64,
}

/// A locally driven match with both players on autopilot
pub struct LocalMatch {
    pub state: GameState,
    pub config: GameConfig,
    pub custom: Option<CustomMultipliers>,
    pub rng: GameRng,
    pilots: Vec<Autopilot>,
}

impl LocalMatch {
    pub fn new(setup: MatchSetup) -> Self {
        let mut rng = GameRng::new(setup.seed);
        let state = initialize_game(
            &setup.config,
            setup.mode,
            setup.difficulty,
            setup.characters,
            &mut rng,
        );
        let pilots = state
            .active_players()
            .iter()
            .map(|&id| Autopilot::new(id, setup.difficulty))
            .collect();

        Self {
            state,
            config: setup.config,
            custom: setup.custom,
            rng,
            pilots,
        }
    }

    pub fn step(&mut self, dt: f32) -> Vec<FrameEvent> {
        let mut input = InputState::default();
        for pilot in &mut self.pilots {
            let keys = pilot.next_keys(&self.state, &self.config, dt);
            apply_keys(&mut input, pilot.id, keys);
        }

        let FrameOutput { state, events } = update_game_state(
            &self.state,
            &input,
            &self.config,
            dt,
            self.custom.as_ref(),
            &mut self.rng,
        );
        self.state = state;
        events
    }
}

fn apply_keys(input: &mut InputState, id: PlayerId, keys: PilotKeys) {
    match id {
        PlayerId::One => {
            input.player1_left = keys.left;
            input.player1_right = keys.right;
            input.player1_kick = keys.kick;
            input.player1_dash = keys.dash;
        }
        PlayerId::Two => {
            input.player2_left = keys.left;
            input.player2_right = keys.right;
            input.player2_kick = keys.kick;
            input.player2_dash = keys.dash;
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    pub mode: GameMode,
    pub difficulty: Difficulty,
    pub seed: u64,
    pub frames: u32,
    pub elapsed_secs: f64,
    pub player1_score: u32,
    pub player2_score: u32,
    pub winner: Option<PlayerId>,
    pub kicks: u32,
    pub max_rally: u32,
    pub best_streak: Option<u32>,
    pub drops: u32,
    pub events: usize,
}

/// Changes whenever the takyan hits the ground
fn drop_marker(state: &GameState) -> (u32, Option<f64>) {
    (
        state.player1.score + state.player2.score,
        state.streak.and_then(|s| s.last_drop_time),
    )
}

/// Run until someone wins or `max_frames` pass, at a fixed `fps`
pub fn run(setup: MatchSetup, max_frames: u32, fps: f32) -> RunSummary {
    let seed = setup.seed;
    let difficulty = setup.difficulty;
    let dt = 1.0 / fps;
    let mut game = LocalMatch::new(setup);

    let mut frames = 0;
    let mut kicks = 0;
    let mut max_rally = 0;
    let mut drops = 0;
    let mut event_count = 0;

    while frames < max_frames && game.state.winner.is_none() {
        let rally_before = game.state.rally_count;
        let drops_before = drop_marker(&game.state);
        let events = game.step(dt);
        frames += 1;

        if game.state.rally_count > rally_before {
            kicks += 1;
        }
        if drop_marker(&game.state) != drops_before {
            drops += 1;
        }
        max_rally = max_rally.max(game.state.rally_count);
        event_count += events.len();

        for event in &events {
            match event {
                FrameEvent::Sound(SoundCue::Win) => {
                    tracing::info!(frame = frames, "winner decided");
                }
                _ => tracing::trace!(frame = frames, ?event, "event"),
            }
        }
    }

    let state = &game.state;
    RunSummary {
        mode: state.mode,
        difficulty,
        seed,
        frames,
        elapsed_secs: state.elapsed_secs,
        player1_score: state.player1.score,
        player2_score: state.player2.score,
        winner: state.winner,
        kicks,
        max_rally,
        best_streak: state.streak.map(|s| s.personal_best),
        drops,
        events: event_count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup(mode: GameMode, seed: u64) -> MatchSetup {
        MatchSetup {
            config: GameConfig::default(),
            mode,
            difficulty: Difficulty::Medium,
            characters: CharacterSelection::default(),
            custom: None,
            seed,
        }
    }

    #[test]
    fn test_run_is_repeatable_for_a_seed() {
        let a = run(setup(GameMode::Versus, 9), 1200, 60.0);
        let b = run(setup(GameMode::Versus, 9), 1200, 60.0);
        assert_eq!(a, b);
    }

    #[test]
    fn test_run_respects_frame_limit() {
        let summary = run(setup(GameMode::Practice, 1), 300, 60.0);
        assert!(summary.frames <= 300);
        assert!(summary.best_streak.is_some());
        assert_eq!(summary.player1_score, 0);
        assert_eq!(summary.winner, None);
    }

    #[test]
    fn test_versus_scores_are_consistent_with_winner() {
        let summary = run(setup(GameMode::Versus, 3), 20_000, 60.0);
        let config = GameConfig::default();
        match summary.winner {
            Some(PlayerId::One) => assert_eq!(summary.player1_score, config.winning_score),
            Some(PlayerId::Two) => assert_eq!(summary.player2_score, config.winning_score),
            None => assert_eq!(summary.frames, 20_000),
        }
        assert!(summary.max_rally <= summary.kicks);
    }

    #[test]
    fn test_practice_has_only_one_pilot() {
        let game = LocalMatch::new(setup(GameMode::Practice, 1));
        assert_eq!(game.pilots.len(), 1);
    }
}
