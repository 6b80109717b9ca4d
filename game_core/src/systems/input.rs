use crate::{Config, KeyState, Paddle, Side};
use hecs::World;

/// Move the player paddle according to the held keys
pub fn move_player_paddle<K: KeyState + ?Sized>(world: &mut World, keys: &K, config: &Config) {
    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        if paddle.side == Side::Player {
            paddle.move_on_key_press(keys, &config.screen, config.paddle_speed);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::systems::find_paddle;
    use crate::{create_paddle, HeldKeys, Rect};

    #[test]
    fn test_only_player_paddle_reads_keys() {
        let config = Config::default();
        let mut world = World::new();
        create_paddle(
            &mut world,
            Paddle::new(Side::Player, Rect::new(920, 200, 15, 100)),
        );
        create_paddle(
            &mut world,
            Paddle::new(Side::Computer, Rect::new(25, 200, 15, 100)),
        );

        move_player_paddle(&mut world, &HeldKeys::down(), &config);

        let player = find_paddle(&world, Side::Player).unwrap();
        let computer = find_paddle(&world, Side::Computer).unwrap();
        assert_eq!(player.rect.y, 206);
        assert_eq!(computer.rect.y, 200);
    }
}
