//! Match state: two players, the takyan, and match bookkeeping

use serde::{Deserialize, Serialize};

use crate::characters::{character_stats, normalize_character, CharacterStats};
use crate::components::{GameMode, Player, PlayerId, Takyan};
use crate::config::GameConfig;
use crate::difficulty::Difficulty;
use crate::resources::{FrameEvent, GameRng};
use crate::systems::{select_animation, PlayerAnimation};

/// Solo-play bookkeeping
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PracticeStreak {
    pub current_streak: u32,
    pub personal_best: u32,
    pub total_kicks: u32,
    /// Match clock (seconds) at the last drop
    pub last_drop_time: Option<f64>,
    pub difficulty: Difficulty,
}

impl PracticeStreak {
    pub fn new(difficulty: Difficulty) -> Self {
        Self {
            current_streak: 0,
            personal_best: 0,
            total_kicks: 0,
            last_drop_time: None,
            difficulty,
        }
    }

    pub fn record_kick(&mut self) {
        self.current_streak += 1;
        self.total_kicks += 1;
        self.personal_best = self.personal_best.max(self.current_streak);
    }

    pub fn record_drop(&mut self, now: f64) {
        self.current_streak = 0;
        self.last_drop_time = Some(now);
    }
}

/// Complete per-match state. Each frame produces a new value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub player1: Player,
    pub player2: Player,
    pub takyan: Takyan,
    pub winner: Option<PlayerId>,
    pub is_paused: bool,
    pub last_scorer: Option<PlayerId>,
    pub mode: GameMode,
    pub combo_count: u32,
    pub rally_count: u32,
    /// Present only in practice mode
    pub streak: Option<PracticeStreak>,
    /// Unfrozen simulation time in seconds
    pub elapsed_secs: f64,
}

/// Result of one frame: the next state plus cosmetic requests for the host
#[derive(Debug, Clone, PartialEq)]
pub struct FrameOutput {
    pub state: GameState,
    pub events: Vec<FrameEvent>,
}

/// Character choice for both players
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharacterSelection {
    pub player1: u8,
    pub player2: u8,
}

impl Default for CharacterSelection {
    fn default() -> Self {
        Self {
            player1: 1,
            player2: 1,
        }
    }
}

/// Build a fresh match.
///
/// Practice serves with a pop-up, versus drops the takyan from rest.
pub fn initialize_game(
    config: &GameConfig,
    mode: GameMode,
    difficulty: Difficulty,
    characters: CharacterSelection,
    rng: &mut GameRng,
) -> GameState {
    let c1 = normalize_character(characters.player1);
    let c2 = normalize_character(characters.player2);
    let width = config.player_width;

    let (x1, x2) = match mode {
        GameMode::Practice => (
            config.center_x() - width / 2.0,
            config.canvas_width * 0.75 - width / 2.0,
        ),
        GameMode::Versus => (
            config.canvas_width * 0.25 - width / 2.0,
            config.canvas_width * 0.75 - width / 2.0,
        ),
    };

    let streak = mode.is_practice().then(|| PracticeStreak::new(difficulty));
    tracing::debug!(?mode, ?difficulty, c1, c2, "match initialized");

    GameState {
        player1: Player::new(config, x1, c1, true),
        player2: Player::new(config, x2, c2, false),
        takyan: Takyan::spawn(config, mode.is_practice(), rng),
        winner: None,
        is_paused: false,
        last_scorer: None,
        mode,
        combo_count: 0,
        rally_count: 0,
        streak,
        elapsed_secs: 0.0,
    }
}

impl GameState {
    pub fn player(&self, id: PlayerId) -> &Player {
        match id {
            PlayerId::One => &self.player1,
            PlayerId::Two => &self.player2,
        }
    }

    pub fn player_mut(&mut self, id: PlayerId) -> &mut Player {
        match id {
            PlayerId::One => &mut self.player1,
            PlayerId::Two => &mut self.player2,
        }
    }

    /// Players the simulation drives: only player one in practice
    pub fn active_players(&self) -> &'static [PlayerId] {
        if self.mode.is_practice() {
            &[PlayerId::One]
        } else {
            &[PlayerId::One, PlayerId::Two]
        }
    }

    /// Difficulty in effect; versus matches report medium
    pub fn difficulty(&self) -> Difficulty {
        self.streak.map(|s| s.difficulty).unwrap_or_default()
    }

    pub fn stats(&self, id: PlayerId, config: &GameConfig) -> CharacterStats {
        if config.character_stats_enabled {
            character_stats(self.player(id).character)
        } else {
            CharacterStats::NEUTRAL
        }
    }

    pub fn animation(&self, id: PlayerId) -> PlayerAnimation {
        select_animation(self.player(id))
    }

    /// Copy of this state with the pause flag set
    pub fn paused(&self, is_paused: bool) -> Self {
        Self {
            is_paused,
            ..self.clone()
        }
    }

    /// A brand-new match with the same mode, difficulty and characters
    pub fn restart(&self, config: &GameConfig, rng: &mut GameRng) -> Self {
        initialize_game(
            config,
            self.mode,
            self.difficulty(),
            CharacterSelection {
                player1: self.player1.character,
                player2: self.player2.character,
            },
            rng,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_versus_starts_on_opposite_halves() {
        let config = GameConfig::new();
        let mut rng = GameRng::new(1);
        let state = initialize_game(
            &config,
            GameMode::Versus,
            Difficulty::Hard,
            CharacterSelection::default(),
            &mut rng,
        );
        assert!(state.player1.bounds().max.x <= config.center_x());
        assert!(state.player2.pos.x >= config.center_x());
        assert_eq!(state.takyan.vel, glam::Vec2::ZERO);
        assert!(state.streak.is_none());
        assert_eq!(state.difficulty(), Difficulty::Medium);
        assert_eq!(state.active_players(), &[PlayerId::One, PlayerId::Two]);
    }

    #[test]
    fn test_practice_has_streak_and_pop_up() {
        let config = GameConfig::new();
        let mut rng = GameRng::new(1);
        let state = initialize_game(
            &config,
            GameMode::Practice,
            Difficulty::Easy,
            CharacterSelection::default(),
            &mut rng,
        );
        assert_eq!(state.takyan.vel.y, -10.0);
        assert_eq!(state.streak.map(|s| s.difficulty), Some(Difficulty::Easy));
        assert_eq!(state.active_players(), &[PlayerId::One]);
    }

    #[test]
    fn test_unknown_character_defaults() {
        let config = GameConfig::new();
        let mut rng = GameRng::new(1);
        let state = initialize_game(
            &config,
            GameMode::Versus,
            Difficulty::Medium,
            CharacterSelection {
                player1: 0,
                player2: 3,
            },
            &mut rng,
        );
        assert_eq!(state.player1.character, 1);
        assert_eq!(state.player2.character, 3);
    }

    #[test]
    fn test_streak_bookkeeping() {
        let mut streak = PracticeStreak::new(Difficulty::Medium);
        for _ in 0..3 {
            streak.record_kick();
        }
        assert_eq!(streak.current_streak, 3);
        streak.record_drop(4.5);
        streak.record_kick();
        assert_eq!(streak.current_streak, 1);
        assert_eq!(streak.personal_best, 3);
        assert_eq!(streak.total_kicks, 4);
        assert_eq!(streak.last_drop_time, Some(4.5));
    }

    #[test]
    fn test_restart_is_a_fresh_match() {
        let config = GameConfig::new();
        let mut rng = GameRng::new(1);
        let mut state = initialize_game(
            &config,
            GameMode::Versus,
            Difficulty::Medium,
            CharacterSelection {
                player1: 2,
                player2: 3,
            },
            &mut rng,
        );
        state.player1.score = 4;
        state.winner = Some(PlayerId::One);
        let state = state.paused(true);
        assert!(state.is_paused);

        let fresh = state.restart(&config, &mut rng);
        assert_eq!(fresh.player1.score, 0);
        assert_eq!(fresh.winner, None);
        assert!(!fresh.is_paused);
        assert_eq!(fresh.player1.character, 2);
        assert_eq!(fresh.player2.character, 3);
    }
}
