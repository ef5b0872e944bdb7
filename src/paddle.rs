use crate::{
    court::Court,
    input::{InputSnapshot, KeyBinding},
};

/// Which wall a paddle guards. The side fixes the paddle's `y`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Bottom,
    Top,
}

/// Something that can decide where a paddle goes next.
pub trait Steer {
    /// Returns the paddle's next `x`, already clamped to the court.
    fn next_x(&self, pad: &Paddle, input: &InputSnapshot, ball_x: f64, court_width: f64) -> f64;
}

/// Human control: held keys move the paddle by `speed` per tick.
impl Steer for KeyBinding {
    fn next_x(&self, pad: &Paddle, input: &InputSnapshot, _ball_x: f64, court_width: f64) -> f64 {
        let speed = f64::from(pad.speed);
        match self.direction(input) {
            -1 => (pad.x - speed).max(0.0),
            1 => (pad.x + speed).min(pad.max_x(court_width)),
            _ => pad.x,
        }
    }
}

/// Bounded-speed pursuit of the ball's `x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AiTracking;

impl Steer for AiTracking {
    fn next_x(&self, pad: &Paddle, _input: &InputSnapshot, ball_x: f64, court_width: f64) -> f64 {
        let delta = ball_x - pad.x;
        // never more than one speed unit per tick
        let step = delta.abs().min(f64::from(pad.speed));
        if delta > 0.0 {
            (pad.x + step).min(pad.max_x(court_width))
        } else if delta < 0.0 {
            (pad.x - step).max(0.0)
        } else {
            pad.x
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    HumanKeys(KeyBinding),
    AiTracking,
}

impl Steer for Control {
    fn next_x(&self, pad: &Paddle, input: &InputSnapshot, ball_x: f64, court_width: f64) -> f64 {
        match self {
            Control::HumanKeys(binding) => binding.next_x(pad, input, ball_x, court_width),
            Control::AiTracking => AiTracking.next_x(pad, input, ball_x, court_width),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paddle {
    pub side: Side,
    pub control: Control,
    pub x: f64,
    pub y: f64,
    pub height: u32,
    pub width: u32,
    /// Movement per tick, in court units.
    pub speed: u32,
}

impl Paddle {
    pub fn new(
        side: Side,
        control: Control,
        court: &Court,
        height: u32,
        width: u32,
        x: f64,
        speed: u32,
    ) -> Self {
        let mut pad = Self {
            side,
            control,
            x,
            y: 0.0,
            height,
            width,
            speed,
        };
        pad.reset_state(court, height, width, x, speed);
        pad
    }

    /// Reinitialises geometry and speed; `y` follows from the side and the
    /// court's inset.
    pub fn reset_state(&mut self, court: &Court, height: u32, width: u32, x: f64, speed: u32) {
        self.height = height;
        self.width = width;
        self.x = x;
        self.speed = speed;
        self.y = match self.side {
            Side::Bottom => court.height_f() - f64::from(height) - court.inset_f(),
            Side::Top => court.inset_f(),
        };
    }

    pub fn width_f(&self) -> f64 {
        f64::from(self.width)
    }

    pub fn height_f(&self) -> f64 {
        f64::from(self.height)
    }

    fn max_x(&self, court_width: f64) -> f64 {
        court_width - self.width_f()
    }

    /// Applies this paddle's control for one tick.
    pub fn update_pos(&mut self, input: &InputSnapshot, ball_x: f64, court_width: f64) {
        self.x = self.control.next_x(self, input, ball_x, court_width);
    }

    pub fn is_ai(&self) -> bool {
        matches!(self.control, Control::AiTracking)
    }
}
