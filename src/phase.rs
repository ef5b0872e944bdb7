use tracing::debug;

use crate::{
    ball::{Ball, WallHit},
    config::GameConfig,
    court::Court,
    input::{InputSnapshot, KeyBinding},
    paddle::{Control, Paddle, Side},
    score::Scoreboard,
};

/// Which gameplay phase is running. The mode only decides who steers the top
/// paddle; everything else is shared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    OnePlayer,
    TwoPlayers,
}

impl Mode {
    /// Controls for the bottom and top paddle, in that order.
    pub fn controls(self) -> [Control; 2] {
        match self {
            Mode::OnePlayer => [
                Control::HumanKeys(KeyBinding::PLAYER_ONE),
                Control::AiTracking,
            ],
            Mode::TwoPlayers => [
                Control::HumanKeys(KeyBinding::PLAYER_ONE),
                Control::HumanKeys(KeyBinding::PLAYER_TWO),
            ],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickOutcome {
    pub wall_hit: WallHit,
    pub redraw: bool,
}

/// One running game: a ball, a bottom and a top paddle, and the score.
#[derive(Debug, Clone)]
pub struct GamePhase {
    mode: Mode,
    config: GameConfig,
    court: Court,
    ball: Ball,
    bottom: Paddle,
    top: Paddle,
    scores: Scoreboard,
    ticks: u64,
}

impl GamePhase {
    pub fn new(mode: Mode, config: &GameConfig) -> Self {
        let court = config.court();
        let [bottom_control, top_control] = mode.controls();
        let x = court.centered_x(f64::from(config.pad_width));

        let mut phase = Self {
            mode,
            config: config.clone(),
            court,
            ball: Ball::default(),
            bottom: Paddle::new(
                Side::Bottom,
                bottom_control,
                &court,
                config.pad_height,
                config.pad_width,
                x,
                config.bottom_speed,
            ),
            top: Paddle::new(
                Side::Top,
                top_control,
                &court,
                config.pad_height,
                config.pad_width,
                x,
                config.top_speed,
            ),
            scores: Scoreboard::default(),
            ticks: 0,
        };
        phase.reset_state();
        phase
    }

    /// Puts the ball back in the centre with the serve velocity, centres both
    /// paddles and zeroes the score.
    pub fn reset_state(&mut self) {
        let cfg = &self.config;
        let court = self.court;
        let pad_x = court.centered_x(f64::from(cfg.pad_width));

        self.bottom
            .reset_state(&court, cfg.pad_height, cfg.pad_width, pad_x, cfg.bottom_speed);
        self.top
            .reset_state(&court, cfg.pad_height, cfg.pad_width, pad_x, cfg.top_speed);

        let vx = if cfg.random_serve && rand::random::<bool>() {
            -cfg.init_vel_x
        } else {
            cfg.init_vel_x
        };
        self.ball.reset_state(
            court.centered_x(cfg.ball_size),
            court.centered_y(cfg.ball_size),
            cfg.ball_size,
            vx,
            cfg.init_vel_y,
        );

        self.scores.reset_state();
        self.ticks = 0;
        debug!(mode = ?self.mode, vx, "game reset");
    }

    /// Advances the game by one tick.
    ///
    /// Order matters: walls and scoring first, then paddle contact against the
    /// ball's pre-move position and the paddles' current position, then the
    /// ball moves, and only then do the paddles move.
    pub fn tick(&mut self, input: &InputSnapshot) -> TickOutcome {
        let court = self.court;

        self.ball.detect_lr_collision(court.width_f());
        let wall_hit = self.ball.detect_tb_collision(court.height_f());
        if wall_hit != WallHit::None {
            self.scores.record(wall_hit);
            debug!(
                ?wall_hit,
                top = self.scores.score_top(),
                bottom = self.scores.score_bottom(),
                "point scored"
            );
        }

        self.ball.detect_bottom_pad_collision(&court, &self.bottom);
        self.ball.detect_top_pad_collision(&court, &self.top);

        self.ball.update_pos();

        let ball_x = self.ball.x;
        self.bottom.update_pos(input, ball_x, court.width_f());
        self.top.update_pos(input, ball_x, court.width_f());

        self.ticks += 1;
        TickOutcome {
            wall_hit,
            redraw: true,
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn court(&self) -> &Court {
        &self.court
    }

    pub fn ball(&self) -> &Ball {
        &self.ball
    }

    pub fn bottom(&self) -> &Paddle {
        &self.bottom
    }

    pub fn top(&self) -> &Paddle {
        &self.top
    }

    pub fn paddles(&self) -> [&Paddle; 2] {
        [&self.bottom, &self.top]
    }

    pub fn scores(&self) -> &Scoreboard {
        &self.scores
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}
