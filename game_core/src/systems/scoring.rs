use crate::systems::find_ball;
use crate::{Ball, Config, Events, Rally, Score};
use glam::Vec2;
use hecs::World;

/// Check if the ball reached either side wall. On a point the ball is
/// re-served from the center and `true` is returned.
pub fn check_scoring(
    world: &mut World,
    config: &Config,
    score: &mut Score,
    rally: &mut Rally,
    events: &mut Events,
) -> bool {
    let Some(ball) = find_ball(world) else {
        return false;
    };

    if ball.rect.right() >= config.screen.width() {
        score.increment_computer();
        events.computer_scored = true;
        log::debug!(
            "computer scored at speed {}: {}-{}",
            rally.speed,
            score.player,
            score.computer
        );
    } else if ball.rect.x <= 0 {
        let new_high = score.increment_player();
        events.player_scored = true;
        log::debug!(
            "player scored at speed {}: {}-{}",
            rally.speed,
            score.player,
            score.computer
        );
        if new_high {
            log::debug!("new high score {}", score.high);
        }
    } else {
        return false;
    }

    reset_ball(world, config, rally);
    true
}

/// Center the ball and restore base speed on both axes.
///
/// The serve direction is flipped first and then overwritten by the
/// base-speed assignment, so every serve heads right and down.
pub fn reset_ball(world: &mut World, config: &Config, rally: &mut Rally) {
    let (x, y) = config.ball_center_position();

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.rect.x = x;
        ball.rect.y = y;

        ball.vel.x = -ball.vel.x;

        rally.reset();
        ball.vel = Vec2::splat(rally.speed);
    }
}
