pub mod collision;
pub mod input;
pub mod movement;
pub mod scoring;

pub use collision::*;
pub use input::*;
pub use movement::*;
pub use scoring::*;

use crate::{Ball, Paddle, Side};
use hecs::World;

/// Copy of the paddle defending `side`
pub fn find_paddle(world: &World, side: Side) -> Option<Paddle> {
    world
        .query::<&Paddle>()
        .iter()
        .find(|(_e, paddle)| paddle.side == side)
        .map(|(_e, paddle)| *paddle)
}

/// Copy of the ball
pub fn find_ball(world: &World) -> Option<Ball> {
    world.query::<&Ball>().iter().next().map(|(_e, ball)| *ball)
}
