//! Match state: the single owner of both paddles, the ball and the score

use crate::systems::{find_ball, find_paddle};
use crate::{
    create_ball, create_paddle, draw_scene, step, Ball, Config, Events, KeyState, Paddle,
    Painter, Rally, Rect, Score, Side,
};
use glam::Vec2;
use hecs::World;

pub struct Match {
    pub world: World,
    pub score: Score,
    pub rally: Rally,
    pub events: Events,
    config: Config,
}

impl Match {
    pub fn new(config: Config) -> Self {
        let mut world = World::new();
        let paddle_y = config.paddle_start_y();

        create_paddle(
            &mut world,
            Paddle::new(
                Side::Player,
                Rect::new(
                    config.player_paddle_x(),
                    paddle_y,
                    config.paddle_width,
                    config.paddle_height,
                ),
            ),
        );
        create_paddle(
            &mut world,
            Paddle::new(
                Side::Computer,
                Rect::new(
                    config.computer_paddle_x,
                    paddle_y,
                    config.paddle_width,
                    config.paddle_height,
                ),
            ),
        );
        create_ball(
            &mut world,
            Ball::new(config.ball_start(), Vec2::splat(config.ball_speed)),
        );

        log::info!(
            "new match on a {}x{} screen",
            config.screen.width(),
            config.screen.height()
        );

        Self {
            world,
            score: Score::new(),
            rally: Rally::new(config.ball_speed),
            events: Events::new(),
            config,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Advance one tick
    pub fn update<K: KeyState + ?Sized>(&mut self, keys: &K) {
        step(
            &mut self.world,
            &self.config,
            keys,
            &mut self.score,
            &mut self.rally,
            &mut self.events,
        );
    }

    /// Draw the current state; has no effect on the match
    pub fn draw<P: Painter + ?Sized>(&self, painter: &mut P) {
        draw_scene(&self.world, &self.score, painter);
    }

    pub fn ball(&self) -> Option<Ball> {
        find_ball(&self.world)
    }

    pub fn player_paddle(&self) -> Option<Paddle> {
        find_paddle(&self.world, Side::Player)
    }

    pub fn computer_paddle(&self) -> Option<Paddle> {
        find_paddle(&self.world, Side::Computer)
    }

    /// Replace the ball's position and velocity
    pub fn set_ball(&mut self, ball: Ball) {
        for (_entity, current) in self.world.query_mut::<&mut Ball>() {
            *current = ball;
        }
    }

    /// Move the paddle on `side` to a new vertical position
    pub fn set_paddle_y(&mut self, side: Side, y: i32) {
        for (_entity, paddle) in self.world.query_mut::<&mut Paddle>() {
            if paddle.side == side {
                paddle.rect.y = y;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{HeldKeys, Screen};

    #[test]
    fn test_new_match_layout() {
        let game = Match::new(Config::new(Screen::new(800, 600).unwrap()));

        let player = game.player_paddle().unwrap();
        let computer = game.computer_paddle().unwrap();
        let ball = game.ball().unwrap();

        assert_eq!(player.rect, Rect::new(760, 250, 15, 100));
        assert_eq!(computer.rect, Rect::new(25, 250, 15, 100));
        assert_eq!(ball.rect, Rect::new(400, 300, 15, 15));
        assert_eq!(ball.vel, Vec2::new(3.0, 3.0));
        assert_eq!(game.rally.speed, 3.0);
        assert_eq!(game.score, Score::new());
    }

    #[test]
    fn test_first_tick() {
        let mut game = Match::new(Config::new(Screen::new(800, 600).unwrap()));

        game.update(&HeldKeys::up());

        assert_eq!(game.player_paddle().unwrap().rect.y, 244);
        // Ball center 307 is below paddle center 300
        assert_eq!(game.computer_paddle().unwrap().rect.y, 253);
        assert_eq!(game.ball().unwrap().rect, Rect::new(403, 303, 15, 15));
        assert_eq!(game.events, Events::new());
    }

    #[test]
    fn test_set_ball_and_paddle() {
        let mut game = Match::new(Config::default());
        let ball = Ball::new(Rect::new(1, 2, 15, 15), Vec2::new(-3.0, 3.0));
        game.set_ball(ball);
        game.set_paddle_y(Side::Computer, 0);

        assert_eq!(game.ball(), Some(ball));
        assert_eq!(game.computer_paddle().unwrap().rect.y, 0);
        assert_eq!(game.player_paddle().unwrap().rect.y, 220);
    }
}
