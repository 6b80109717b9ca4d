//! Drawing seam between the game and a front end

use crate::components::{Rect, Side};
use crate::params::Params;
use crate::resources::Score;
use crate::systems::{find_ball, find_paddle};
use glam::Vec2;
use hecs::World;

/// RGBA color, components in 0..=1
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

/// Primitive drawing calls provided by the front end
pub trait Painter {
    fn fill_rect(&mut self, rect: Rect, color: Color);
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color);
    /// `y` is the text baseline
    fn draw_text(&mut self, text: &str, x: i32, y: i32, color: Color);
}

/// Issue the draw calls for one frame. Reads the world, never writes it.
pub fn draw_scene<P: Painter + ?Sized>(world: &World, score: &Score, painter: &mut P) {
    for side in [Side::Player, Side::Computer] {
        if let Some(paddle) = find_paddle(world, side) {
            painter.fill_rect(paddle.rect, Color::WHITE);
        }
    }

    if let Some(ball) = find_ball(world) {
        painter.fill_circle(ball.rect.center(), ball.radius(), Color::WHITE);
    }

    let lines = [
        format!("Player Score: {}", score.player),
        format!("Computer Score: {}", score.computer),
        format!("High Score: {}", score.high),
    ];
    for (row, line) in (0..).zip(lines.iter()) {
        painter.draw_text(
            line,
            Params::HUD_TEXT_X,
            Params::HUD_TEXT_Y + row * Params::HUD_LINE_SPACING,
            Color::WHITE,
        );
    }
}
