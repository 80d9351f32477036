//! Scripted player used by the headless runner

use sipa_core::{CourtSide, Difficulty, GameConfig, GameState, PlayerId, Takyan};

/// Held keys the autopilot wants for one frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PilotKeys {
    pub left: bool,
    pub right: bool,
    pub kick: bool,
    pub dash: bool,
}

/// Chases the predicted landing point and kicks toward the far side.
///
/// Re-plans only every `reaction_time_ms`, and blends the exact prediction
/// with its current position by `prediction_accuracy`.
pub struct Autopilot {
    pub id: PlayerId,
    reaction_time_ms: f32,
    prediction_accuracy: f32,
    since_plan_ms: f32,
    target_x: Option<f32>,
}

impl Autopilot {
    pub fn new(id: PlayerId, difficulty: Difficulty) -> Self {
        let tier = difficulty.config();
        Self {
            id,
            reaction_time_ms: tier.reaction_time_ms,
            prediction_accuracy: tier.prediction_accuracy,
            since_plan_ms: f32::INFINITY,
            target_x: None,
        }
    }

    pub fn next_keys(&mut self, state: &GameState, config: &GameConfig, dt: f32) -> PilotKeys {
        let player = state.player(self.id);
        let center = player.pos.x + player.size.x / 2.0;

        self.since_plan_ms += dt * 1000.0;
        if self.since_plan_ms >= self.reaction_time_ms {
            self.since_plan_ms = 0.0;
            self.target_x = self.plan(state, config, center);
        }

        let Some(target) = self.target_x else {
            return PilotKeys::default();
        };

        let diff = target - center;
        let deadzone = player.size.x * 0.3;
        let falling_close = state.takyan.vel.y >= 0.0
            && player.pos.y - state.takyan.pos.y < state.takyan.radius * 3.0;

        let mut keys = PilotKeys::default();
        if diff > deadzone {
            keys.right = true;
        } else if diff < -deadzone {
            keys.left = true;
        } else if falling_close {
            // Lean toward the opponent so the kick carries over the net
            match self.id {
                PlayerId::One => keys.right = true,
                PlayerId::Two => keys.left = true,
            }
            keys.kick = true;
        }
        keys.dash = diff.abs() > config.canvas_width * 0.2 && state.takyan.vel.y > 0.0;
        keys
    }

    fn plan(&self, state: &GameState, config: &GameConfig, current: f32) -> Option<f32> {
        let landing = predict_landing_x(&state.takyan, config, config.player_ground_y())?;
        let own_side = match self.id {
            PlayerId::One => CourtSide::Left,
            PlayerId::Two => CourtSide::Right,
        };
        if !state.mode.is_practice() && CourtSide::of_x(landing, config) != own_side {
            // Not ours: drift back to the middle of our half
            let home = match own_side {
                CourtSide::Left => config.canvas_width * 0.25,
                CourtSide::Right => config.canvas_width * 0.75,
            };
            return Some(home);
        }
        Some(current + (landing - current) * self.prediction_accuracy)
    }
}

/// X where the takyan will cross `target_y` on the way down, ignoring drag.
pub fn predict_landing_x(takyan: &Takyan, config: &GameConfig, target_y: f32) -> Option<f32> {
    let g = config.gravity;
    if g <= 0.0 {
        return None;
    }
    // 0.5 g t^2 + vy t + (y - target) = 0
    let c = takyan.pos.y - target_y;
    let disc = takyan.vel.y * takyan.vel.y - 2.0 * g * c;
    if disc < 0.0 {
        return None;
    }
    let t = (-takyan.vel.y + disc.sqrt()) / g;
    if t < 0.0 {
        return None;
    }
    let r = takyan.radius;
    Some((takyan.pos.x + takyan.vel.x * t).clamp(r, config.canvas_width - r))
}
