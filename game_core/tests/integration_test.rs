use game_core::*;
use glam::Vec2;

fn new_match() -> Match {
    Match::new(Config::new(Screen::new(800, 600).unwrap()))
}

#[test]
fn test_ball_reaching_right_wall_scores_for_computer() {
    let mut game = new_match();
    game.rally.speed = 6.0;
    game.set_ball(Ball::new(Rect::new(797, 100, 15, 15), Vec2::new(3.0, 6.0)));

    game.update(&HeldKeys::none());

    assert_eq!(game.score.computer, 1);
    assert_eq!(game.score.player, 0);
    assert!(game.events.computer_scored);

    let ball = game.ball().unwrap();
    assert_eq!(ball.rect, Rect::new(392, 292, 15, 15));
    assert_eq!(ball.vel, Vec2::new(3.0, 3.0));
    assert_eq!(game.rally.speed, 3.0);
}

#[test]
fn test_ball_reaching_left_wall_scores_for_player_and_raises_high_score() {
    let mut game = new_match();
    game.score.player = 4;
    game.score.high = 3;
    game.set_paddle_y(Side::Computer, 0);
    game.set_ball(Ball::new(Rect::new(3, 500, 15, 15), Vec2::new(-3.0, 3.0)));

    game.update(&HeldKeys::none());

    assert_eq!(game.score.player, 5);
    assert_eq!(game.score.high, 5);
    assert!(game.events.player_scored);
    assert_eq!(game.ball().unwrap().rect, Rect::new(392, 292, 15, 15));
}

#[test]
fn test_top_wall_restores_base_vertical_speed() {
    let mut game = new_match();
    game.rally.speed = 7.0;
    game.set_ball(Ball::new(Rect::new(400, 7, 15, 15), Vec2::new(7.0, -7.0)));

    game.update(&HeldKeys::none());

    let ball = game.ball().unwrap();
    assert_eq!(ball.rect.y, 0);
    assert_eq!(ball.vel, Vec2::new(7.0, 3.0));
    assert_eq!(game.rally.speed, 7.0, "bouncing does not touch the rally speed");
    assert!(game.events.wall_bounce);
}

#[test]
fn test_computer_paddle_hit_ramps_speed() {
    let mut game = new_match();
    game.set_ball(Ball::new(Rect::new(43, 303, 15, 15), Vec2::new(-3.0, -3.0)));

    game.update(&HeldKeys::none());

    let ball = game.ball().unwrap();
    assert_eq!(ball.rect, Rect::new(40, 300, 15, 15));
    assert_eq!(game.rally.speed, 4.0);
    assert_eq!(ball.vel, Vec2::new(4.0, 4.0));
    assert!(game.events.computer_paddle_hit);
}

#[test]
fn test_player_paddle_hit_reverses_ball() {
    let mut game = new_match();
    game.set_ball(Ball::new(Rect::new(742, 290, 15, 15), Vec2::new(3.0, 3.0)));

    game.update(&HeldKeys::none());

    let ball = game.ball().unwrap();
    assert_eq!(ball.rect.right(), 760);
    assert_eq!(ball.vel, Vec2::new(-3.0, 3.0));
    assert_eq!(game.rally.speed, 3.0);
    assert!(game.events.player_paddle_hit);
}

#[test]
fn test_full_rally_stays_consistent() {
    let mut game = new_match();
    let height = game.config().screen.height();
    let paddle_height = game.config().paddle_height;
    let paddle_speed = game.config().paddle_speed;
    let mut previous_speed = game.rally.speed;
    let mut previous_high = game.score.high;
    let mut previous_player = game.score.player;

    for tick in 0..5_000 {
        let keys = match (tick / 90) % 3 {
            0 => HeldKeys::up(),
            1 => HeldKeys::down(),
            _ => HeldKeys::none(),
        };
        game.update(&keys);

        let computer = game.computer_paddle().unwrap();
        assert!(computer.rect.y >= 0);
        assert!(computer.rect.bottom() <= height);

        // Player paddle can overshoot by less than one step
        let player = game.player_paddle().unwrap();
        assert!(player.rect.y > -paddle_speed);
        assert!(player.rect.y < height - paddle_height + paddle_speed);

        if game.events.scored() {
            assert_eq!(game.rally.speed, game.rally.base());
        } else {
            assert!(game.rally.speed >= previous_speed);
        }
        previous_speed = game.rally.speed;

        assert!(game.score.high >= game.score.player);
        assert!(game.score.high >= previous_high);
        if game.score.high != previous_high {
            assert!(game.events.player_scored);
            assert!(game.score.player > previous_player);
        }
        previous_high = game.score.high;
        previous_player = game.score.player;

        let ball = game.ball().unwrap();
        assert_eq!(ball.vel.x.abs(), game.rally.speed);
    }
}

#[test]
fn test_drawing_leaves_state_untouched() {
    struct Counter(usize);

    impl Painter for Counter {
        fn fill_rect(&mut self, _rect: Rect, _color: Color) {
            self.0 += 1;
        }
        fn fill_circle(&mut self, _center: Vec2, _radius: f32, _color: Color) {
            self.0 += 1;
        }
        fn draw_text(&mut self, _text: &str, _x: i32, _y: i32, _color: Color) {
            self.0 += 1;
        }
    }

    let mut game = new_match();
    for _ in 0..10 {
        game.update(&HeldKeys::down());
    }
    let ball = game.ball();
    let player = game.player_paddle();

    let mut counter = Counter(0);
    game.draw(&mut counter);
    game.draw(&mut counter);

    assert_eq!(counter.0, 12);
    assert_eq!(game.ball(), ball);
    assert_eq!(game.player_paddle(), player);
}

#[test]
fn test_frame_clock_drives_updates() {
    let mut game = new_match();
    let mut clock = FrameClock::new();
    let mut ticks = 0;

    for frame in 0..=60 {
        for _ in 0..clock.advance_to(frame as f64 * 1000.0 / 30.0) {
            game.update(&HeldKeys::none());
            ticks += 1;
        }
    }

    // Two seconds at 60 Hz, give or take rounding on the last tick
    assert!((119..=120).contains(&ticks), "ran {ticks} ticks");
}
