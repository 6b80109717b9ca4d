use crate::components::Rect;
use crate::params::Params;
use thiserror::Error;

/// Errors raised while building the match configuration
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("screen dimensions must be positive, got {width}x{height}")]
    NonPositiveScreen { width: i32, height: i32 },
    #[error("screen height {height} cannot fit a {paddle_height}px paddle")]
    ScreenTooSmall { height: i32, paddle_height: i32 },
}

/// Logical screen size, fixed for the lifetime of a match
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Screen {
    width: i32,
    height: i32,
}

impl Screen {
    pub fn new(width: i32, height: i32) -> Result<Self, ConfigError> {
        if width <= 0 || height <= 0 {
            return Err(ConfigError::NonPositiveScreen { width, height });
        }
        if height < Params::PADDLE_HEIGHT {
            return Err(ConfigError::ScreenTooSmall {
                height,
                paddle_height: Params::PADDLE_HEIGHT,
            });
        }
        Ok(Self { width, height })
    }

    /// Windowed presentation at half the detected monitor resolution
    pub fn windowed(monitor_width: i32, monitor_height: i32) -> Result<Self, ConfigError> {
        Self::new(monitor_width / 2, monitor_height / 2)
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }
}

impl Default for Screen {
    fn default() -> Self {
        Self {
            width: Params::DEFAULT_SCREEN_WIDTH,
            height: Params::DEFAULT_SCREEN_HEIGHT,
        }
    }
}

/// Game configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub screen: Screen,
    pub paddle_width: i32,
    pub paddle_height: i32,
    pub paddle_speed: i32,
    pub ai_speed_handicap: i32,
    pub player_paddle_inset: i32,
    pub computer_paddle_x: i32,
    pub ball_size: i32,
    pub ball_speed: f32,
    pub ball_speed_increment: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self::new(Screen::default())
    }
}

impl Config {
    pub fn new(screen: Screen) -> Self {
        Self {
            screen,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_speed: Params::PADDLE_SPEED,
            ai_speed_handicap: Params::AI_SPEED_HANDICAP,
            player_paddle_inset: Params::PLAYER_PADDLE_INSET,
            computer_paddle_x: Params::COMPUTER_PADDLE_X,
            ball_size: Params::BALL_SIZE,
            ball_speed: Params::BALL_SPEED,
            ball_speed_increment: Params::BALL_SPEED_INCREMENT,
        }
    }

    /// Speed at which the computer paddle tracks the ball
    pub fn ai_paddle_speed(&self) -> i32 {
        self.paddle_speed - self.ai_speed_handicap
    }

    /// Player paddle sits on the right side
    pub fn player_paddle_x(&self) -> i32 {
        self.screen.width - self.player_paddle_inset
    }

    /// Both paddles start vertically centered
    pub fn paddle_start_y(&self) -> i32 {
        (self.screen.height - self.paddle_height) / 2
    }

    /// Opening position of the ball: the screen center point, not size-corrected
    pub fn ball_start(&self) -> Rect {
        Rect::new(
            self.screen.width / 2,
            self.screen.height / 2,
            self.ball_size,
            self.ball_size,
        )
    }

    /// Top-left corner that centers the ball on screen, used after every point
    pub fn ball_center_position(&self) -> (i32, i32) {
        (
            (self.screen.width - self.ball_size) / 2,
            (self.screen.height - self.ball_size) / 2,
        )
    }
}
