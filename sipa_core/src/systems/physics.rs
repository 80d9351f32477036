use std::f32::consts::TAU;

use crate::{GameConfig, Params, Takyan};

/// Euler step: gravity into vertical velocity, then velocity into position.
///
/// `time_scale` is elapsed time in 60 Hz frames.
pub fn integrate(
    mut takyan: Takyan,
    config: &GameConfig,
    time_scale: f32,
    gravity_multiplier: f32,
) -> Takyan {
    takyan.vel.y += config.gravity * gravity_multiplier * time_scale;
    takyan.pos += takyan.vel * time_scale;
    takyan
}

/// Full-override kick: velocity is replaced, never accumulated.
pub fn apply_kick(
    mut takyan: Takyan,
    config: &GameConfig,
    direction: i8,
    power_multiplier: f32,
) -> Takyan {
    takyan.vel.y = -config.kick_power * power_multiplier;
    takyan.vel.x = f32::from(direction.signum()) * Params::KICK_HORIZONTAL * power_multiplier;
    takyan
}

/// Horizontal damping, applied once per call regardless of elapsed time
pub fn apply_air_resistance(mut takyan: Takyan, factor: f32) -> Takyan {
    takyan.vel.x *= factor;
    takyan
}

/// Cosmetic spin proportional to horizontal speed
pub fn update_rotation(mut takyan: Takyan, time_scale: f32) -> Takyan {
    let spin = takyan.vel.x.abs() * Params::SPIN_FACTOR * time_scale;
    takyan.rotation = (takyan.rotation + spin).rem_euclid(TAU);
    takyan
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn takyan_at(pos: Vec2, vel: Vec2) -> Takyan {
        Takyan::new(pos, vel, Params::TAKYAN_RADIUS)
    }

    #[test]
    fn test_gravity_never_decreases_vertical_velocity() {
        let config = GameConfig::new();
        let mut takyan = takyan_at(Vec2::new(400.0, 100.0), Vec2::new(2.0, -10.0));
        let mut last_vy = takyan.vel.y;
        for scale in [0.0, 0.5, 1.0, 1.0, 2.5, 6.0] {
            takyan = integrate(takyan, &config, scale, 1.0);
            assert!(takyan.vel.y >= last_vy);
            last_vy = takyan.vel.y;
        }
    }

    #[test]
    fn test_integrate_moves_by_velocity() {
        let config = GameConfig::new();
        let takyan = takyan_at(Vec2::new(100.0, 100.0), Vec2::new(2.0, 0.0));
        let next = integrate(takyan, &config, 1.0, 1.0);
        assert!((next.vel.y - config.gravity).abs() < 1e-6);
        assert!((next.pos.x - 102.0).abs() < 1e-6);
        assert!((next.pos.y - (100.0 + config.gravity)).abs() < 1e-6);
    }

    #[test]
    fn test_gravity_multiplier_scales_gravity() {
        let config = GameConfig::new();
        let takyan = takyan_at(Vec2::ZERO, Vec2::ZERO);
        let next = integrate(takyan, &config, 1.0, 2.0);
        assert!((next.vel.y - config.gravity * 2.0).abs() < 1e-6);
    }

    #[test]
    fn test_repeated_kick_overwrites() {
        let config = GameConfig::new();
        let takyan = takyan_at(Vec2::new(200.0, 300.0), Vec2::new(-7.0, 9.0));
        let once = apply_kick(takyan, &config, 1, 1.0);
        let twice = apply_kick(once, &config, -1, 1.2);
        assert_eq!(twice.vel.y, -config.kick_power * 1.2);
        assert_eq!(twice.vel.x, -3.0 * 1.2);
        assert_eq!(twice.pos, takyan.pos);
    }

    #[test]
    fn test_kick_without_direction_goes_straight_up() {
        let config = GameConfig::new();
        let takyan = takyan_at(Vec2::ZERO, Vec2::new(5.0, 5.0));
        let kicked = apply_kick(takyan, &config, 0, 1.0);
        assert_eq!(kicked.vel, Vec2::new(0.0, -config.kick_power));
    }

    #[test]
    fn test_air_resistance_is_per_call() {
        let takyan = takyan_at(Vec2::ZERO, Vec2::new(10.0, -4.0));
        let damped = apply_air_resistance(takyan, 0.99);
        assert!((damped.vel.x - 9.9).abs() < 1e-5);
        assert_eq!(damped.vel.y, -4.0);
    }

    #[test]
    fn test_rotation_wraps() {
        let mut takyan = takyan_at(Vec2::ZERO, Vec2::new(-30.0, 0.0));
        for _ in 0..100 {
            takyan = update_rotation(takyan, 1.0);
            assert!((0.0..TAU).contains(&takyan.rotation));
        }
        let still = update_rotation(takyan_at(Vec2::ZERO, Vec2::ZERO), 1.0);
        assert_eq!(still.rotation, 0.0);
    }
}
