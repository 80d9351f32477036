/// Game tuning parameters for Sipa
///
/// Speeds and accelerations are authored per 60 Hz frame; timers are in milliseconds.
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Court
    pub const CANVAS_WIDTH: f32 = 800.0;
    pub const CANVAS_HEIGHT: f32 = 400.0;
    pub const GROUND_LEVEL: f32 = 350.0;

    // Player
    pub const PLAYER_WIDTH: f32 = 50.0;
    pub const PLAYER_HEIGHT: f32 = 80.0;
    pub const PLAYER_SPEED: f32 = 5.0;
    pub const DASH_SPEED: f32 = 12.0;
    pub const DASH_DURATION_MS: f32 = 200.0;
    pub const DASH_COOLDOWN_MS: f32 = 1000.0;
    pub const KICK_DURATION_MS: f32 = 300.0;
    pub const EMOTION_DURATION_MS: f32 = 800.0;
    pub const LEG_SWING_PER_FRAME: f32 = 0.3;

    // Takyan
    pub const TAKYAN_RADIUS: f32 = 15.0;
    pub const TAKYAN_SPAWN_Y: f32 = 100.0;
    pub const GRAVITY: f32 = 0.3;
    pub const KICK_POWER: f32 = 12.0;
    pub const KICK_HORIZONTAL: f32 = 3.0;
    pub const AIR_RESISTANCE: f32 = 0.99;
    pub const SERVE_VELOCITY_Y: f32 = -10.0;
    pub const SERVE_MAX_VELOCITY_X: f32 = 3.0;
    pub const SPIN_FACTOR: f32 = 0.1;

    // Score
    pub const WINNING_SCORE: u32 = 5;

    // Frame timing
    pub const REFERENCE_FPS: f32 = 60.0;
    pub const MAX_DT: f32 = 0.1; // Clamp to prevent tunneling after hitches
    pub const MOVEMENT_EPSILON: f32 = 0.1;

    // Cosmetics
    pub const KICK_SHAKE: f32 = 2.0;
    pub const SCORE_SHAKE: f32 = 8.0;
    pub const SCORE_PARTICLE_COLOR: u32 = 0xFFD700;
    pub const GROUND_PARTICLE_COLOR: u32 = 0x8B5A2B;
}
