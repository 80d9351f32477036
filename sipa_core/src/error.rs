use core::fmt;

/// Rejected externally loaded configuration
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    CanvasSize { width: f32, height: f32 },
    GroundOutsideCanvas { ground_level: f32, canvas_height: f32 },
    NonPositive { field: &'static str, value: f32 },
    ZeroWinningScore,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CanvasSize { width, height } => {
                write!(f, "canvas must have positive size, got {width}x{height}")
            }
            Self::GroundOutsideCanvas {
                ground_level,
                canvas_height,
            } => write!(
                f,
                "ground level {ground_level} outside canvas height (0, {canvas_height}]"
            ),
            Self::NonPositive { field, value } => {
                write!(f, "{field} out of range: {value}")
            }
            Self::ZeroWinningScore => write!(f, "winning_score must be at least 1"),
        }
    }
}

impl std::error::Error for ConfigError {}
