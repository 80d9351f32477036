use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use sipa_core::{CustomMultipliers, GameConfig};

/// Load a match config from JSON, or the defaults when no path is given
pub fn load_config(path: Option<&Path>) -> Result<GameConfig> {
    let Some(path) = path else {
        return Ok(GameConfig::default());
    };
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    let config: GameConfig = serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse config {}", path.display()))?;
    config
        .validate()
        .with_context(|| format!("invalid config {}", path.display()))?;
    tracing::info!(path = %path.display(), "loaded config");
    Ok(config)
}

/// Build a custom override when any multiplier was given on the command line
pub fn custom_multipliers(
    ball_speed: Option<f32>,
    gravity: Option<f32>,
    player_speed: Option<f32>,
) -> Option<CustomMultipliers> {
    if ball_speed.is_none() && gravity.is_none() && player_speed.is_none() {
        return None;
    }
    Some(CustomMultipliers {
        ball_speed: ball_speed.unwrap_or(1.0),
        gravity: gravity.unwrap_or(1.0),
        player_speed: player_speed.unwrap_or(1.0),
        is_custom: true,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_without_path() {
        assert_eq!(load_config(None).unwrap(), GameConfig::default());
    }

    #[test]
    fn test_loads_partial_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "winning_score": 3, "particles_enabled": false }}"#).unwrap();

        let config = load_config(Some(file.path())).unwrap();
        assert_eq!(config.winning_score, 3);
        assert!(!config.particles_enabled);
        assert!(config.sound_enabled);
    }

    #[test]
    fn test_rejects_invalid_config() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "winning_score": 0 }}"#).unwrap();

        let err = load_config(Some(file.path())).unwrap_err();
        assert!(format!("{err:#}").contains("winning_score"));
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let err = load_config(Some(Path::new("/definitely/not/here.json"))).unwrap_err();
        assert!(err.to_string().contains("failed to read config"));
    }

    #[test]
    fn test_custom_multipliers_only_when_requested() {
        assert_eq!(custom_multipliers(None, None, None), None);
        let custom = custom_multipliers(None, Some(2.0), None).unwrap();
        assert!(custom.is_custom);
        assert_eq!(custom.gravity, 2.0);
        assert_eq!(custom.ball_speed, 1.0);
    }
}
