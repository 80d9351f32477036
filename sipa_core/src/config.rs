use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::params::Params;

/// Per-match game configuration
///
/// Immutable for the lifetime of a match. Hosts may load it from JSON; any
/// field left out takes its [`Params`] default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub canvas_width: f32,
    pub canvas_height: f32,
    pub ground_level: f32,
    pub gravity: f32,
    pub player_speed: f32,
    pub player_width: f32,
    pub player_height: f32,
    pub dash_speed: f32,
    pub dash_duration_ms: f32,
    pub dash_cooldown_ms: f32,
    pub kick_power: f32,
    pub kick_duration_ms: f32,
    pub emotion_duration_ms: f32,
    pub air_resistance: f32,
    pub takyan_radius: f32,
    pub winning_score: u32,
    pub particles_enabled: bool,
    pub screen_shake_enabled: bool,
    pub sound_enabled: bool,
    /// Capability: players may dash.
    pub dash_enabled: bool,
    /// Capability: character speed/power stats apply. Off means neutral stats.
    pub character_stats_enabled: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            canvas_width: Params::CANVAS_WIDTH,
            canvas_height: Params::CANVAS_HEIGHT,
            ground_level: Params::GROUND_LEVEL,
            gravity: Params::GRAVITY,
            player_speed: Params::PLAYER_SPEED,
            player_width: Params::PLAYER_WIDTH,
            player_height: Params::PLAYER_HEIGHT,
            dash_speed: Params::DASH_SPEED,
            dash_duration_ms: Params::DASH_DURATION_MS,
            dash_cooldown_ms: Params::DASH_COOLDOWN_MS,
            kick_power: Params::KICK_POWER,
            kick_duration_ms: Params::KICK_DURATION_MS,
            emotion_duration_ms: Params::EMOTION_DURATION_MS,
            air_resistance: Params::AIR_RESISTANCE,
            takyan_radius: Params::TAKYAN_RADIUS,
            winning_score: Params::WINNING_SCORE,
            particles_enabled: true,
            screen_shake_enabled: true,
            sound_enabled: true,
            dash_enabled: true,
            character_stats_enabled: true,
        }
    }
}

impl GameConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// X coordinate of the net line splitting the two halves
    pub fn center_x(&self) -> f32 {
        self.canvas_width / 2.0
    }

    /// Top edge of a player standing on the ground line
    pub fn player_ground_y(&self) -> f32 {
        self.ground_level - self.player_height
    }

    /// Sanity checks for configs coming from outside the binary.
    ///
    /// The frame step never calls this.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.canvas_width <= 0.0 || self.canvas_height <= 0.0 {
            return Err(ConfigError::CanvasSize {
                width: self.canvas_width,
                height: self.canvas_height,
            });
        }
        if self.ground_level <= 0.0 || self.ground_level > self.canvas_height {
            return Err(ConfigError::GroundOutsideCanvas {
                ground_level: self.ground_level,
                canvas_height: self.canvas_height,
            });
        }
        if self.takyan_radius <= 0.0 {
            return Err(ConfigError::NonPositive {
                field: "takyan_radius",
                value: self.takyan_radius,
            });
        }
        if self.player_width <= 0.0 || self.player_width * 2.0 > self.canvas_width {
            return Err(ConfigError::NonPositive {
                field: "player_width",
                value: self.player_width,
            });
        }
        if self.player_height <= 0.0 {
            return Err(ConfigError::NonPositive {
                field: "player_height",
                value: self.player_height,
            });
        }
        if self.winning_score == 0 {
            return Err(ConfigError::ZeroWinningScore);
        }
        Ok(())
    }
}

/// Externally supplied physics multipliers that replace the difficulty table
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CustomMultipliers {
    pub ball_speed: f32,
    pub gravity: f32,
    pub player_speed: f32,
    pub is_custom: bool,
}

impl Default for CustomMultipliers {
    fn default() -> Self {
        Self {
            ball_speed: 1.0,
            gravity: 1.0,
            player_speed: 1.0,
            is_custom: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_center_and_ground() {
        let config = GameConfig::new();
        assert_eq!(config.center_x(), 400.0);
        assert_eq!(config.player_ground_y(), 270.0);
    }

    #[test]
    fn test_default_config_is_valid() {
        assert_eq!(GameConfig::new().validate(), Ok(()));
    }

    #[test]
    fn test_validate_rejects_zero_winning_score() {
        let config = GameConfig {
            winning_score: 0,
            ..GameConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroWinningScore));
    }

    #[test]
    fn test_validate_rejects_ground_below_canvas() {
        let config = GameConfig {
            ground_level: 500.0,
            ..GameConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::GroundOutsideCanvas { .. })
        ));
    }

    #[test]
    fn test_partial_json_takes_defaults() {
        let config: GameConfig =
            serde_json::from_str(r#"{ "winning_score": 11, "sound_enabled": false }"#).unwrap();
        assert_eq!(config.winning_score, 11);
        assert!(!config.sound_enabled);
        assert_eq!(config.gravity, Params::GRAVITY);
        assert_eq!(config.canvas_width, Params::CANVAS_WIDTH);
    }
}
