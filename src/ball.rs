use crate::{court::Court, paddle::Paddle};

/// Which horizontal wall the ball touched during a vertical collision check.
///
/// The wall that was hit belongs to the player who failed to defend it, so a
/// `Top` hit is a point for the bottom player and vice versa.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WallHit {
    None,
    Top,
    Bottom,
}

/// The ball is a circle described by its bounding box: `(x, y)` is the top-left
/// corner, `size` the diameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub vx: f64,
    pub vy: f64,
}

impl Default for Ball {
    fn default() -> Self {
        Self::new(0.0, 0.0, 1.0, 1.0, 1.0)
    }
}

impl Ball {
    pub fn new(x: f64, y: f64, size: f64, vx: f64, vy: f64) -> Self {
        Self { x, y, size, vx, vy }
    }

    /// Overwrites every field. Nothing is validated; a non-positive size is the
    /// caller's problem.
    pub fn reset_state(&mut self, x: f64, y: f64, size: f64, vx: f64, vy: f64) {
        self.x = x;
        self.y = y;
        self.size = size;
        self.vx = vx;
        self.vy = vy;
    }

    /// Moves the ball by one tick of velocity. Collision checks for the tick
    /// must already have run.
    pub fn update_pos(&mut self) {
        self.x += self.vx;
        self.y += self.vy;
    }

    /// Bounces off the side walls. Call exactly once per tick: a ball that is
    /// still outside after the flip would be flipped straight back.
    pub fn detect_lr_collision(&mut self, court_width: f64) {
        if self.x < 0.0 || self.x > court_width - self.size {
            self.vx = -self.vx;
        }
    }

    /// Bounces off the top and bottom walls and reports which one was hit.
    ///
    /// The top wall counts as touched once the ball's edge reaches it
    /// (`y <= 0`); the bottom wall only once the ball crosses it. Both checks
    /// are independent, so a ball taller than the court flips twice and
    /// reports `Bottom`.
    pub fn detect_tb_collision(&mut self, court_height: f64) -> WallHit {
        let mut hit = WallHit::None;
        if self.y <= 0.0 {
            self.vy = -self.vy;
            hit = WallHit::Top;
        }
        if self.y + self.size > court_height {
            self.vy = -self.vy;
            hit = WallHit::Bottom;
        }
        hit
    }

    /// Bounces off the bottom paddle when the ball's lower edge has reached the
    /// paddle's band while travelling downwards and the horizontal spans
    /// overlap (closed intervals, so grazing a corner counts).
    pub fn detect_bottom_pad_collision(&mut self, court: &Court, pad: &Paddle) {
        let band = court.height_f() - pad.height_f() - court.inset_f();
        if self.y + self.size >= band && self.vy > 0.0 && self.overlaps(pad) {
            self.vy = -self.vy;
        }
    }

    /// Mirror image of [`Ball::detect_bottom_pad_collision`] for the top paddle.
    pub fn detect_top_pad_collision(&mut self, court: &Court, pad: &Paddle) {
        let band = pad.height_f() + court.inset_f();
        if self.y <= band && self.vy < 0.0 && self.overlaps(pad) {
            self.vy = -self.vy;
        }
    }

    fn overlaps(&self, pad: &Paddle) -> bool {
        self.x + self.size >= pad.x && self.x <= pad.x + pad.width_f()
    }

    pub fn center(&self) -> (f64, f64) {
        let r = self.size / 2.0;
        (self.x + r, self.y + r)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paddle::{Control, Side};
    use proptest::prelude::*;

    fn bottom_pad(court: &Court, x: f64) -> Paddle {
        Paddle::new(Side::Bottom, Control::AiTracking, court, 10, 40, x, 2)
    }

    fn top_pad(court: &Court, x: f64) -> Paddle {
        Paddle::new(Side::Top, Control::AiTracking, court, 10, 40, x, 2)
    }

    #[test]
    fn update_pos_adds_velocity() {
        let mut ball = Ball::new(10.0, 20.0, 20.0, 2.5, -1.5);
        ball.update_pos();
        assert_eq!((ball.x, ball.y), (12.5, 18.5));
        assert_eq!((ball.vx, ball.vy), (2.5, -1.5));
    }

    #[test]
    fn reset_state_overwrites_everything() {
        let mut ball = Ball::new(1.0, 2.0, 3.0, 4.0, 5.0);
        ball.reset_state(140.0, 340.0, 20.0, 2.5, 2.5);
        assert_eq!(ball, Ball::new(140.0, 340.0, 20.0, 2.5, 2.5));
    }

    #[test]
    fn top_hit_flips_vy() {
        let mut ball = Ball::new(150.0, 0.0, 20.0, 2.5, 2.5);
        assert_eq!(ball.detect_tb_collision(700.0), WallHit::Top);
        assert_eq!(ball.vy, -2.5);
        assert_eq!(ball.vx, 2.5);
    }

    #[test]
    fn bottom_hit_flips_vy() {
        let mut ball = Ball::new(150.0, 681.0, 20.0, 2.5, 2.5);
        assert_eq!(ball.detect_tb_collision(700.0), WallHit::Bottom);
        assert_eq!(ball.vy, -2.5);
    }

    #[test]
    fn touching_bottom_wall_is_not_a_hit() {
        let mut ball = Ball::new(150.0, 680.0, 20.0, 2.5, 2.5);
        assert_eq!(ball.detect_tb_collision(700.0), WallHit::None);
        assert_eq!(ball.vy, 2.5);
    }

    #[test]
    fn oversized_ball_hits_both_walls() {
        let mut ball = Ball::new(0.0, -1.0, 800.0, 0.0, 3.0);
        assert_eq!(ball.detect_tb_collision(700.0), WallHit::Bottom);
        // flipped twice
        assert_eq!(ball.vy, 3.0);
    }

    #[test]
    fn lr_collision_twice_in_one_tick_cancels_out() {
        let mut ball = Ball::new(-3.0, 100.0, 20.0, -2.5, 1.0);
        ball.detect_lr_collision(300.0);
        ball.detect_lr_collision(300.0);
        assert_eq!(ball.vx, -2.5);
    }

    #[test]
    fn bottom_pad_bounces_ball_moving_down() {
        let court = Court::default();
        let pad = bottom_pad(&court, 100.0);
        // band starts at 700 - 10 - 10 = 680
        let mut ball = Ball::new(110.0, 660.0, 20.0, 2.5, 2.5);
        ball.detect_bottom_pad_collision(&court, &pad);
        assert_eq!(ball.vy, -2.5);
        assert_eq!(ball.vx, 2.5);
    }

    #[test]
    fn bottom_pad_ignores_ball_moving_up() {
        let court = Court::default();
        let pad = bottom_pad(&court, 100.0);
        let mut ball = Ball::new(110.0, 665.0, 20.0, 2.5, -2.5);
        ball.detect_bottom_pad_collision(&court, &pad);
        assert_eq!(ball.vy, -2.5);
    }

    #[test]
    fn bottom_pad_corner_graze_counts() {
        let court = Court::default();
        let pad = bottom_pad(&court, 100.0);
        // right edge of the ball exactly on the paddle's left edge
        let mut ball = Ball::new(80.0, 670.0, 20.0, 2.5, 2.5);
        ball.detect_bottom_pad_collision(&court, &pad);
        assert_eq!(ball.vy, -2.5);

        let mut miss = Ball::new(79.0, 670.0, 20.0, 2.5, 2.5);
        miss.detect_bottom_pad_collision(&court, &pad);
        assert_eq!(miss.vy, 2.5);
    }

    #[test]
    fn top_pad_bounces_ball_moving_up() {
        let court = Court::default();
        let pad = top_pad(&court, 100.0);
        let mut ball = Ball::new(120.0, 20.0, 20.0, -2.5, -2.5);
        ball.detect_top_pad_collision(&court, &pad);
        assert_eq!(ball.vy, 2.5);
        assert_eq!(ball.vx, -2.5);
    }

    #[test]
    fn top_pad_misses_when_spans_do_not_overlap() {
        let court = Court::default();
        let pad = top_pad(&court, 100.0);
        let mut ball = Ball::new(141.0, 15.0, 20.0, 2.5, -2.5);
        ball.detect_top_pad_collision(&court, &pad);
        assert_eq!(ball.vy, -2.5);
    }

    proptest! {
        #[test]
        fn prop_lr_out_of_bounds_flips_only_vx(
            x in prop_oneof![-500.0f64..-0.001, 280.001f64..800.0],
            y in -100.0f64..800.0,
            vx in -10.0f64..10.0,
            vy in -10.0f64..10.0,
        ) {
            let mut ball = Ball::new(x, y, 20.0, vx, vy);
            ball.detect_lr_collision(300.0);
            prop_assert_eq!(ball, Ball::new(x, y, 20.0, -vx, vy));
        }

        #[test]
        fn prop_lr_in_bounds_is_untouched(
            x in 0.0f64..=280.0,
            vx in -10.0f64..10.0,
        ) {
            let mut ball = Ball::new(x, 100.0, 20.0, vx, 1.0);
            ball.detect_lr_collision(300.0);
            prop_assert_eq!(ball.vx, vx);
        }

        #[test]
        fn prop_tb_reports_wall_and_flips(
            y in -500.0f64..1200.0,
            vy in -10.0f64..10.0,
        ) {
            let mut ball = Ball::new(100.0, y, 20.0, 1.0, vy);
            let hit = ball.detect_tb_collision(700.0);
            if y <= 0.0 {
                prop_assert_eq!(hit, WallHit::Top);
                prop_assert_eq!(ball.vy, -vy);
            } else if y + 20.0 > 700.0 {
                prop_assert_eq!(hit, WallHit::Bottom);
                prop_assert_eq!(ball.vy, -vy);
            } else {
                prop_assert_eq!(hit, WallHit::None);
                prop_assert_eq!(ball.vy, vy);
            }
            prop_assert_eq!(ball.vx, 1.0);
        }
    }
}
