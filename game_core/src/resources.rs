use crate::params::Params;

/// Game score tracking
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub player: u32,
    pub computer: u32,
    pub high: u32, // best player score this session
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    /// Credit the player; returns true when this sets a new high score
    pub fn increment_player(&mut self) -> bool {
        self.player += 1;
        if self.player > self.high {
            self.high = self.player;
            return true;
        }
        false
    }

    pub fn increment_computer(&mut self) {
        self.computer += 1;
    }
}

/// Current ball speed scalar for the rally in progress
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rally {
    pub speed: f32,
    base: f32,
}

impl Rally {
    pub fn new(base: f32) -> Self {
        Self { speed: base, base }
    }

    pub fn base(&self) -> f32 {
        self.base
    }

    /// Raise the speed after a computer paddle return
    pub fn ramp(&mut self, increment: f32) -> f32 {
        self.speed += increment;
        self.speed
    }

    /// Back to base speed after a point
    pub fn reset(&mut self) {
        self.speed = self.base;
    }
}

/// Events that occurred during the last tick
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Events {
    pub player_scored: bool,
    pub computer_scored: bool,
    pub wall_bounce: bool,
    pub player_paddle_hit: bool,
    pub computer_paddle_hit: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn scored(&self) -> bool {
        self.player_scored || self.computer_scored
    }
}

/// Converts frame timing into a whole number of fixed-rate ticks
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameClock {
    accumulator: f64,
    last_ms: Option<f64>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `dt` seconds and return how many ticks are due
    pub fn advance(&mut self, dt: f64) -> u32 {
        // Clamp dt to prevent a burst of ticks after a stall
        self.accumulator += dt.clamp(0.0, Params::MAX_DT);

        let mut ticks = 0;
        while self.accumulator >= Params::FIXED_DT {
            self.accumulator -= Params::FIXED_DT;
            ticks += 1;
        }
        ticks
    }

    /// Same as [`advance`](Self::advance) but from an absolute timestamp in
    /// milliseconds. The first call only records the timestamp.
    pub fn advance_to(&mut self, now_ms: f64) -> u32 {
        let ticks = match self.last_ms {
            Some(last) => self.advance((now_ms - last) / 1000.0),
            None => 0,
        };
        self.last_ms = Some(now_ms);
        ticks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_increment_computer() {
        let mut score = Score::new();
        score.increment_computer();
        score.increment_computer();
        assert_eq!(score.computer, 2);
        assert_eq!(score.player, 0);
        assert_eq!(score.high, 0);
    }

    #[test]
    fn test_high_score_follows_player() {
        let mut score = Score::new();
        assert!(score.increment_player());
        assert!(score.increment_player());
        assert_eq!(score.high, 2);
    }

    #[test]
    fn test_high_score_only_changes_when_surpassed() {
        let mut score = Score {
            player: 0,
            computer: 0,
            high: 3,
        };
        assert!(!score.increment_player());
        assert!(!score.increment_player());
        assert!(!score.increment_player());
        assert_eq!(score.high, 3, "equal is not a new high");
        assert!(score.increment_player());
        assert_eq!(score.high, 4);
    }

    #[test]
    fn test_rally_ramp_and_reset() {
        let mut rally = Rally::new(3.0);
        assert_eq!(rally.ramp(1.0), 4.0);
        assert_eq!(rally.ramp(1.0), 5.0);
        rally.reset();
        assert_eq!(rally.speed, 3.0);
        assert_eq!(rally.base(), 3.0);
    }

    #[test]
    fn test_events_clear() {
        let mut events = Events {
            player_scored: true,
            computer_scored: true,
            wall_bounce: true,
            player_paddle_hit: true,
            computer_paddle_hit: true,
        };
        assert!(events.scored());
        events.clear();
        assert_eq!(events, Events::new());
        assert!(!events.scored());
    }

    #[test]
    fn test_frame_clock_accumulates_partial_ticks() {
        let mut clock = FrameClock::new();
        assert_eq!(clock.advance(0.01), 0);
        assert_eq!(clock.advance(0.01), 1);
        assert_eq!(clock.advance(0.02), 1);
    }

    #[test]
    fn test_frame_clock_clamps_long_frames() {
        let mut clock = FrameClock::new();
        assert_eq!(clock.advance(0.005), 0);
        // 0.005 + 0.1 (clamped) => 6 ticks, never 60
        assert_eq!(clock.advance(1.0), 6);
        assert_eq!(clock.advance(-5.0), 0);
    }

    #[test]
    fn test_frame_clock_first_timestamp_yields_nothing() {
        let mut clock = FrameClock::new();
        assert_eq!(clock.advance_to(1000.0), 0);
        assert_eq!(clock.advance_to(1020.0), 1);
        assert_eq!(clock.advance_to(1070.0), 3);
    }
}
