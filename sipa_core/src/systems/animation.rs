//! Animation selection and the per-player timers that drive it

use serde::{Deserialize, Serialize};

use crate::{Emotion, GameConfig, Params, Player};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerAnimation {
    Idle,
    Walk,
    WalkAttack,
    Dash,
    Happy,
    Angry,
    Fall,
}

impl From<Emotion> for PlayerAnimation {
    fn from(emotion: Emotion) -> Self {
        match emotion {
            Emotion::Happy => Self::Happy,
            Emotion::Angry => Self::Angry,
            Emotion::Fall => Self::Fall,
        }
    }
}

/// Highest-priority animation for the player's current flags.
///
/// Emotion > dash > kick > walk > idle.
pub fn select_animation(player: &Player) -> PlayerAnimation {
    if player.emotion_timer > 0.0 {
        if let Some(emotion) = player.last_emotion {
            return emotion.into();
        }
    }
    if player.is_dashing {
        PlayerAnimation::Dash
    } else if player.is_kicking {
        PlayerAnimation::WalkAttack
    } else if (player.pos.x - player.last_x).abs() > Params::MOVEMENT_EPSILON {
        PlayerAnimation::Walk
    } else {
        PlayerAnimation::Idle
    }
}

/// Start a dash if allowed. Returns the player and whether the dash began.
pub fn try_start_dash(mut player: Player, config: &GameConfig) -> (Player, bool) {
    if !config.dash_enabled || player.is_dashing || player.dash_cooldown > 0.0 {
        return (player, false);
    }
    player.is_dashing = true;
    player.dash_duration = config.dash_duration_ms;
    (player, true)
}

/// Begin the kick animation from frame zero
pub fn start_kick(mut player: Player, config: &GameConfig) -> Player {
    player.is_kicking = true;
    player.kick_frame = 0.0;
    player.kick_duration = config.kick_duration_ms;
    player
}

pub fn set_emotion(mut player: Player, emotion: Emotion, duration_ms: f32) -> Player {
    player.last_emotion = Some(emotion);
    player.emotion_timer = duration_ms;
    player
}

/// Decay kick, emotion, dash and cooldown timers by `elapsed_ms`.
///
/// Cooldown is armed at full length on the frame a dash ends and only counts
/// down from the following frame.
pub fn tick_timers(mut player: Player, config: &GameConfig, elapsed_ms: f32) -> Player {
    if player.is_kicking {
        player.kick_frame += elapsed_ms;
        if player.kick_frame >= player.kick_duration {
            player.is_kicking = false;
            player.kick_frame = 0.0;
        }
    }

    if player.emotion_timer > 0.0 {
        player.emotion_timer = (player.emotion_timer - elapsed_ms).max(0.0);
        if player.emotion_timer == 0.0 {
            player.last_emotion = None;
        }
    }

    if player.is_dashing {
        player.dash_duration = (player.dash_duration - elapsed_ms).max(0.0);
        if player.dash_duration == 0.0 {
            player.is_dashing = false;
            player.dash_cooldown = config.dash_cooldown_ms;
        }
    } else if player.dash_cooldown > 0.0 {
        player.dash_cooldown = (player.dash_cooldown - elapsed_ms).max(0.0);
    }

    player
}
