use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::config::GameConfig;
use crate::court::Aabb;
use crate::params::Params;
use crate::resources::GameRng;

/// Which of the two players
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerId {
    One,
    Two,
}

impl PlayerId {
    pub fn opponent(self) -> Self {
        match self {
            Self::One => Self::Two,
            Self::Two => Self::One,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameMode {
    /// Solo play, only player one is controlled
    Practice,
    #[default]
    Versus,
}

impl GameMode {
    /// Parse a mode label; anything unrecognised degrades to versus
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "practice" => Self::Practice,
            "versus" => Self::Versus,
            other => {
                tracing::warn!(label = other, "unknown game mode, using versus");
                Self::Versus
            }
        }
    }

    pub fn is_practice(self) -> bool {
        self == Self::Practice
    }
}

/// Sticky emotion shown after a point or a drop
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Emotion {
    Happy,
    Angry,
    Fall,
}

/// The takyan - the shared projectile
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Takyan {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub rotation: f32,
}

impl Takyan {
    pub fn new(pos: Vec2, vel: Vec2, radius: f32) -> Self {
        Self {
            pos,
            vel,
            radius,
            rotation: 0.0,
        }
    }

    /// Respawn above the net, optionally with a random pop-up serve
    pub fn spawn(config: &GameConfig, pop_up: bool, rng: &mut GameRng) -> Self {
        use rand::Rng;

        let pos = Vec2::new(config.center_x(), Params::TAKYAN_SPAWN_Y);
        let vel = if pop_up {
            let vx = rng
                .0
                .gen_range(-Params::SERVE_MAX_VELOCITY_X..=Params::SERVE_MAX_VELOCITY_X);
            Vec2::new(vx, Params::SERVE_VELOCITY_Y)
        } else {
            Vec2::ZERO
        };
        Self::new(pos, vel, config.takyan_radius)
    }
}

/// A player standing on the ground line
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    pub score: u32,
    /// Leg-swing phase in radians
    pub rotation: f32,
    pub is_kicking: bool,
    pub kick_frame: f32,
    pub kick_duration: f32,
    pub is_dashing: bool,
    pub dash_duration: f32,
    pub dash_cooldown: f32,
    pub facing_right: bool,
    pub emotion_timer: f32,
    pub last_emotion: Option<Emotion>,
    /// X at the start of the previous frame, for walk detection
    pub last_x: f32,
    pub character: u8,
}

impl Player {
    pub fn new(config: &GameConfig, x: f32, character: u8, facing_right: bool) -> Self {
        Self {
            pos: Vec2::new(x, config.player_ground_y()),
            size: Vec2::new(config.player_width, config.player_height),
            score: 0,
            rotation: 0.0,
            is_kicking: false,
            kick_frame: 0.0,
            kick_duration: config.kick_duration_ms,
            is_dashing: false,
            dash_duration: 0.0,
            dash_cooldown: 0.0,
            facing_right,
            emotion_timer: 0.0,
            last_emotion: None,
            last_x: x,
            character,
        }
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::new(self.pos, self.pos + self.size)
    }
}
