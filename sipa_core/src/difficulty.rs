//! Difficulty tiers and physics multiplier resolution

use serde::{Deserialize, Serialize};

use crate::components::GameMode;
use crate::config::CustomMultipliers;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    /// Parse a difficulty label; anything unrecognised degrades to medium
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "easy" => Self::Easy,
            "medium" => Self::Medium,
            "hard" => Self::Hard,
            other => {
                tracing::warn!(label = other, "unknown difficulty, using medium");
                Self::Medium
            }
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }

    pub fn config(self) -> AiDifficultyConfig {
        match self {
            Self::Easy => AiDifficultyConfig {
                ball_speed: 0.8,
                gravity: 0.7,
                player_speed: 1.0,
                reaction_time_ms: 400.0,
                prediction_accuracy: 0.5,
            },
            Self::Medium => AiDifficultyConfig {
                ball_speed: 1.0,
                gravity: 1.0,
                player_speed: 1.0,
                reaction_time_ms: 250.0,
                prediction_accuracy: 0.75,
            },
            Self::Hard => AiDifficultyConfig {
                ball_speed: 1.2,
                gravity: 1.3,
                player_speed: 1.1,
                reaction_time_ms: 120.0,
                prediction_accuracy: 0.95,
            },
        }
    }
}

/// Per-tier tuning
///
/// `reaction_time_ms` and `prediction_accuracy` are reserved for a computer
/// opponent and are not read by the simulation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AiDifficultyConfig {
    pub ball_speed: f32,
    pub gravity: f32,
    pub player_speed: f32,
    pub reaction_time_ms: f32,
    pub prediction_accuracy: f32,
}

/// Multipliers applied to the physics for one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhysicsMultipliers {
    pub ball_speed: f32,
    pub gravity: f32,
    pub player_speed: f32,
}

impl PhysicsMultipliers {
    pub const NEUTRAL: PhysicsMultipliers = PhysicsMultipliers {
        ball_speed: 1.0,
        gravity: 1.0,
        player_speed: 1.0,
    };
}

/// Pick the multipliers for a frame.
///
/// A flagged custom override always wins. Otherwise practice reads the
/// difficulty table and versus stays neutral whatever difficulty is stored.
pub fn resolve_multipliers(
    mode: GameMode,
    difficulty: Difficulty,
    custom: Option<&CustomMultipliers>,
) -> PhysicsMultipliers {
    if let Some(custom) = custom.filter(|c| c.is_custom) {
        return PhysicsMultipliers {
            ball_speed: custom.ball_speed,
            gravity: custom.gravity,
            player_speed: custom.player_speed,
        };
    }
    match mode {
        GameMode::Practice => {
            let tier = difficulty.config();
            PhysicsMultipliers {
                ball_speed: tier.ball_speed,
                gravity: tier.gravity,
                player_speed: tier.player_speed,
            }
        }
        GameMode::Versus => PhysicsMultipliers::NEUTRAL,
    }
}
