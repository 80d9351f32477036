use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::config::GameConfig;

/// Random number generator
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }

    /// Seed from OS entropy (browser hosts need the `wasm` feature)
    pub fn from_entropy() -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::from_entropy())
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParticleKind {
    Kick,
    Score,
    Ground,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SoundCue {
    Kick,
    Dash,
    Score,
    Drop,
    Win,
}

/// Cosmetic request for the host's particle, shake and audio systems
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum FrameEvent {
    Particles {
        kind: ParticleKind,
        pos: Vec2,
        color: Option<u32>,
    },
    Shake {
        intensity: f32,
    },
    Sound(SoundCue),
}

/// Events emitted during one frame, filtered by the config's cosmetic toggles
#[derive(Debug, Clone, Default)]
pub struct Events {
    pub list: Vec<FrameEvent>,
    particles: bool,
    shake: bool,
    sound: bool,
}

impl Events {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            list: Vec::new(),
            particles: config.particles_enabled,
            shake: config.screen_shake_enabled,
            sound: config.sound_enabled,
        }
    }

    pub fn particles(&mut self, kind: ParticleKind, pos: Vec2, color: Option<u32>) {
        if self.particles {
            self.list.push(FrameEvent::Particles { kind, pos, color });
        }
    }

    pub fn shake(&mut self, intensity: f32) {
        if self.shake {
            self.list.push(FrameEvent::Shake { intensity });
        }
    }

    pub fn sound(&mut self, cue: SoundCue) {
        if self.sound {
            self.list.push(FrameEvent::Sound(cue));
        }
    }

    pub fn into_vec(self) -> Vec<FrameEvent> {
        self.list
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_events_respect_toggles() {
        let config = GameConfig {
            particles_enabled: false,
            screen_shake_enabled: true,
            sound_enabled: false,
            ..GameConfig::default()
        };
        let mut events = Events::new(&config);
        events.particles(ParticleKind::Kick, Vec2::ZERO, None);
        events.shake(2.0);
        events.sound(SoundCue::Kick);

        assert_eq!(events.into_vec(), vec![FrameEvent::Shake { intensity: 2.0 }]);
    }

    #[test]
    fn test_events_all_enabled() {
        let config = GameConfig::default();
        let mut events = Events::new(&config);
        events.particles(ParticleKind::Ground, Vec2::new(1.0, 2.0), Some(0xFF0000));
        events.sound(SoundCue::Drop);
        assert_eq!(events.list.len(), 2);
    }

    #[test]
    fn test_seeded_rng_is_repeatable() {
        use rand::Rng;
        let mut a = GameRng::new(42);
        let mut b = GameRng::new(42);
        let xs: Vec<u32> = (0..4).map(|_| a.0.gen()).collect();
        let ys: Vec<u32> = (0..4).map(|_| b.0.gen()).collect();
        assert_eq!(xs, ys);
    }

    #[test]
    fn test_entropy_rng_serves_in_range() {
        use rand::Rng;
        let mut rng = GameRng::from_entropy();
        let x: f32 = rng.0.gen_range(-3.0..=3.0);
        assert!((-3.0..=3.0).contains(&x));
    }
}
