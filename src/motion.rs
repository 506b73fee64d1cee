use web_time::Instant;

use crate::token::Token;
use crate::types::Point;

/// Outcome of advancing one token for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Idle,
    Moving,
    Arrived,
}

/// Moves `token` toward its target at `speed` px/s for `dt` seconds.
/// Snaps onto the target instead of overshooting; the caller is responsible
/// for landing the token in the registry on `Step::Arrived`.
pub fn advance(token: &mut Token, dt: f32, speed: f32) -> Step {
    if !token.is_moving() {
        return Step::Idle;
    }

    let reach = speed * dt;
    if !reach.is_finite() || reach <= 0.0 {
        return Step::Moving;
    }
    let dist = token.position.distance_to(token.target);
    if dist <= reach {
        token.position = token.target;
        return Step::Arrived;
    }

    let scale = reach / dist;
    token.position = Point::new(
        token.position.x + (token.target.x - token.position.x) * scale,
        token.position.y + (token.target.y - token.position.y) * scale,
    );
    Step::Moving
}

/// Frame delta source for hosts that do not pass their own timestamps.
#[derive(Debug, Clone, Copy)]
pub struct FrameClock {
    last: Instant,
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            last: Instant::now(),
        }
    }

    /// Seconds since the previous call (or since construction).
    pub fn restart(&mut self) -> f32 {
        let now = Instant::now();
        let dt = now.duration_since(self.last).as_secs_f32();
        self.last = now;
        dt
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Player;

    fn sliding_token(from: Point, to: Point) -> Token {
        Token {
            owner: Player::A,
            slot: 4,
            destination: Some(1),
            position: from,
            target: to,
        }
    }

    #[test]
    fn advance_moves_along_straight_line() {
        let mut token = sliding_token(Point::new(275.0, 275.0), Point::new(275.0, 25.0));

        assert_eq!(advance(&mut token, 0.25, 400.0), Step::Moving);
        assert_eq!(token.position.x, 275.0);
        assert!((token.position.y - 175.0).abs() < 1e-3);
    }

    #[test]
    fn advance_snaps_onto_target_without_overshoot() {
        let mut token = sliding_token(Point::new(275.0, 275.0), Point::new(275.0, 25.0));

        assert_eq!(advance(&mut token, 0.5, 400.0), Step::Moving);
        assert_eq!(advance(&mut token, 0.5, 400.0), Step::Arrived);
        assert_eq!(token.position, Point::new(275.0, 25.0));
    }

    #[test]
    fn advance_arrives_when_remaining_distance_equals_reach() {
        let mut token = sliding_token(Point::new(0.0, 0.0), Point::new(30.0, 40.0));

        assert_eq!(advance(&mut token, 0.125, 400.0), Step::Arrived);
    }

    #[test]
    fn diagonal_slide_keeps_direction() {
        let mut token = sliding_token(Point::new(25.0, 25.0), Point::new(275.0, 275.0));

        advance(&mut token, 0.1, 400.0);

        assert!((token.position.x - token.position.y).abs() < 1e-4);
        let travelled = Point::new(25.0, 25.0).distance_to(token.position);
        assert!((travelled - 40.0).abs() < 1e-3);
    }

    #[test]
    fn unusable_deltas_leave_position_unchanged() {
        let start = Point::new(275.0, 275.0);
        let mut token = sliding_token(start, Point::new(275.0, 25.0));

        for dt in [f32::NAN, f32::INFINITY, -1.0, 0.0] {
            assert_eq!(advance(&mut token, dt, 400.0), Step::Moving, "dt {dt}");
            assert_eq!(token.position, start);
        }
    }

    #[test]
    fn resting_token_is_idle() {
        let mut token = sliding_token(Point::new(25.0, 25.0), Point::new(25.0, 25.0));
        token.destination = None;

        assert_eq!(advance(&mut token, 1.0, 400.0), Step::Idle);
    }

    #[test]
    fn frame_clock_reports_non_negative_deltas() {
        let mut clock = FrameClock::new();
        assert!(clock.restart() >= 0.0);
        assert!(clock.restart() >= 0.0);
    }
}
