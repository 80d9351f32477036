//! Selectable characters and their stat multipliers

use serde::{Deserialize, Serialize};

/// Speed and kick-power multipliers for a character
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CharacterStats {
    pub speed_multiplier: f32,
    pub power_multiplier: f32,
    pub color: u32,
}

impl CharacterStats {
    pub const NEUTRAL: CharacterStats = CharacterStats {
        speed_multiplier: 1.0,
        power_multiplier: 1.0,
        color: 0xFFFFFF,
    };
}

pub const DEFAULT_CHARACTER: u8 = 1;

const CHARACTERS: [CharacterStats; 3] = [
    // 1: all-rounder
    CharacterStats {
        speed_multiplier: 1.0,
        power_multiplier: 1.0,
        color: 0x3B82F6,
    },
    // 2: quick feet, lighter kick
    CharacterStats {
        speed_multiplier: 1.2,
        power_multiplier: 0.9,
        color: 0x22C55E,
    },
    // 3: slow, heavy kick
    CharacterStats {
        speed_multiplier: 0.85,
        power_multiplier: 1.2,
        color: 0xEF4444,
    },
];

/// Clamp a requested character id into the table, falling back to character 1
pub fn normalize_character(id: u8) -> u8 {
    if (1..=CHARACTERS.len() as u8).contains(&id) {
        id
    } else {
        tracing::warn!(id, "unknown character id, using {}", DEFAULT_CHARACTER);
        DEFAULT_CHARACTER
    }
}

/// Stats for a character id; unknown ids get character 1's stats
pub fn character_stats(id: u8) -> CharacterStats {
    CHARACTERS
        .get(usize::from(id).wrapping_sub(1))
        .copied()
        .unwrap_or(CHARACTERS[0])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_characters() {
        assert_eq!(character_stats(1).speed_multiplier, 1.0);
        assert_eq!(character_stats(2).speed_multiplier, 1.2);
        assert_eq!(character_stats(3).power_multiplier, 1.2);
    }

    #[test]
    fn test_unknown_character_falls_back() {
        assert_eq!(character_stats(0), character_stats(1));
        assert_eq!(character_stats(9), character_stats(1));
        assert_eq!(normalize_character(0), 1);
        assert_eq!(normalize_character(4), 1);
        assert_eq!(normalize_character(3), 3);
    }
}
