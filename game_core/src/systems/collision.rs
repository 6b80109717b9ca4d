use crate::systems::find_paddle;
use crate::{Ball, Config, Events, Rally, Side};
use hecs::World;

/// Bounce off the top or bottom wall.
///
/// Vertical speed is always restored to the base speed here, never the
/// ramped rally speed.
pub fn bounce_off_walls(world: &mut World, config: &Config, events: &mut Events) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if ball.rect.y <= 0 {
            ball.vel.y = config.ball_speed;
            events.wall_bounce = true;
            log::trace!("ball hit top wall at x={}", ball.rect.x);
        } else if ball.rect.bottom() >= config.screen.height() {
            ball.vel.y = -config.ball_speed;
            events.wall_bounce = true;
            log::trace!("ball hit bottom wall at x={}", ball.rect.x);
        }
    }
}

/// Reverse horizontal direction when the ball reaches the player paddle.
///
/// The ball is not pushed out, so a ball still overlapping on the next tick
/// is reversed again.
pub fn collide_with_player_paddle(world: &mut World, events: &mut Events) {
    let Some(paddle) = find_paddle(world, Side::Player) else {
        return;
    };

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if ball.rect.right() >= paddle.rect.x && ball.rect.spans_vertically(&paddle.rect) {
            ball.vel.x = -ball.vel.x;
            events.player_paddle_hit = true;
        }
    }
}

/// Reverse and speed up the ball when it reaches the computer paddle.
///
/// Both axes take the new rally speed; the vertical component is always
/// positive afterwards, sending the ball downward.
pub fn collide_with_computer_paddle(
    world: &mut World,
    config: &Config,
    rally: &mut Rally,
    events: &mut Events,
) {
    let Some(paddle) = find_paddle(world, Side::Computer) else {
        return;
    };

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if ball.rect.x <= paddle.rect.right() && ball.rect.spans_vertically(&paddle.rect) {
            ball.vel.x = -ball.vel.x;

            let speed = rally.ramp(config.ball_speed_increment);
            ball.vel.x = ball.vel.x.signum() * speed;
            ball.vel.y = speed;

            events.computer_paddle_hit = true;
            log::debug!("computer returned the ball, rally speed now {}", speed);
        }
    }
}
