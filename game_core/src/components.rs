use crate::config::Screen;
use crate::keys::{Key, KeyState};
use glam::Vec2;

/// Axis-aligned rectangle in screen pixels, origin at the top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    pub fn right(&self) -> i32 {
        self.x + self.w
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.h
    }

    /// Vertical center, rounded toward zero
    pub fn center_y(&self) -> i32 {
        self.y + self.h / 2
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(
            self.x as f32 + self.w as f32 / 2.0,
            self.y as f32 + self.h as f32 / 2.0,
        )
    }

    /// True when the vertical extents touch or overlap (inclusive on both ends)
    pub fn spans_vertically(&self, other: &Rect) -> bool {
        self.bottom() >= other.y && self.y <= other.bottom()
    }
}

/// Which side of the court a paddle defends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Player,   // right
    Computer, // left
}

/// Paddle component
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paddle {
    pub side: Side,
    pub rect: Rect,
}

impl Paddle {
    pub fn new(side: Side, rect: Rect) -> Self {
        Self { side, rect }
    }

    /// Step toward the held direction.
    ///
    /// Each direction is guarded by its own edge check before moving, so the
    /// paddle never starts a step from beyond the boundary but is not clamped
    /// afterwards either.
    pub fn move_on_key_press<K: KeyState + ?Sized>(&mut self, keys: &K, screen: &Screen, speed: i32) {
        if keys.is_pressed(Key::Down) && self.rect.bottom() < screen.height() {
            self.rect.y += speed;
        }

        if keys.is_pressed(Key::Up) && self.rect.y > 0 {
            self.rect.y -= speed;
        }
    }

    /// Step toward `target_y`, then clamp into the screen unconditionally
    pub fn move_to_follow_ball(&mut self, target_y: i32, speed: i32, screen: &Screen) {
        let center = self.rect.center_y();

        if center < target_y {
            self.rect.y += speed;
        }
        if center > target_y {
            self.rect.y -= speed;
        }

        if self.rect.y < 0 {
            self.rect.y = 0;
        }
        if self.rect.bottom() > screen.height() {
            self.rect.y = screen.height() - self.rect.h;
        }
    }
}

/// Ball component - the pong ball
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub rect: Rect,
    pub vel: Vec2, // pixels per tick
}

impl Ball {
    pub fn new(rect: Rect, vel: Vec2) -> Self {
        Self { rect, vel }
    }

    /// Add velocity to position, truncating toward zero every tick.
    /// No sub-pixel remainder is carried over.
    pub fn advance(&mut self) {
        self.rect.x += self.vel.x as i32;
        self.rect.y += self.vel.y as i32;
    }

    pub fn radius(&self) -> f32 {
        self.rect.w as f32 / 2.0
    }
}
