/// Game tuning parameters for Pong
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Screen (used when no monitor size is available)
    pub const DEFAULT_SCREEN_WIDTH: i32 = 960;
    pub const DEFAULT_SCREEN_HEIGHT: i32 = 540;

    // Paddle
    pub const PADDLE_WIDTH: i32 = 15;
    pub const PADDLE_HEIGHT: i32 = 100;
    pub const PADDLE_SPEED: i32 = 6; // pixels per tick
    pub const AI_SPEED_HANDICAP: i32 = 3; // AI moves at PADDLE_SPEED - this
    pub const PLAYER_PADDLE_INSET: i32 = 40; // distance from the right edge
    pub const COMPUTER_PADDLE_X: i32 = 25;

    // Ball
    pub const BALL_SIZE: i32 = 15;
    pub const BALL_SPEED: f32 = 3.0; // base speed, pixels per tick on each axis
    pub const BALL_SPEED_INCREMENT: f32 = 1.0; // added on every computer paddle hit

    // HUD
    pub const HUD_TEXT_X: i32 = 10;
    pub const HUD_TEXT_Y: i32 = 10;
    pub const HUD_LINE_SPACING: i32 = 20;

    // Timing
    pub const TICK_RATE: f64 = 60.0;
    pub const FIXED_DT: f64 = 1.0 / Self::TICK_RATE;
    pub const MAX_DT: f64 = 0.1; // Clamp to prevent large jumps
}
