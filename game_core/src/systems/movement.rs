use crate::systems::find_ball;
use crate::{Ball, Config, Paddle, Side};
use hecs::World;

/// Computer paddle chases the ball's vertical center
pub fn track_ball(world: &mut World, config: &Config) {
    let Some(ball) = find_ball(world) else {
        return;
    };
    let target_y = ball.rect.center_y();
    let speed = config.ai_paddle_speed();

    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        if paddle.side == Side::Computer {
            paddle.move_to_follow_ball(target_y, speed, &config.screen);
        }
    }
}

/// Move ball based on velocity
pub fn move_ball(world: &mut World) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.advance();
    }
}
