use std::time::{Duration, Instant};

use tracing::info;

use crate::{
    ball::WallHit,
    clock::Clock,
    config::GameConfig,
    input::InputSnapshot,
    menu::{MenuEvent, TitleScreen},
    phase::{GamePhase, Mode},
    score::Scoreboard,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhaseKind {
    TitleScreen,
    OnePlayer,
    TwoPlayers,
}

impl From<Mode> for PhaseKind {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::OnePlayer => PhaseKind::OnePlayer,
            Mode::TwoPlayers => PhaseKind::TwoPlayers,
        }
    }
}

#[derive(Debug, Clone)]
pub enum Phase {
    TitleScreen,
    Playing(GamePhase),
}

/// Discrete requests from the input layer. Movement keys are not commands;
/// they reach the simulation through [`InputSnapshot`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Menu(MenuEvent),
    Cancel,
    TogglePause,
    Restart,
}

/// What happened during one call to [`PhaseMachine::advance`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Advance {
    pub ticks: u32,
    pub points: u32,
    pub redraw: bool,
}

/// Owns the single active phase and the single clock driving it.
///
/// Leaving a phase always stops its clock before the next phase's clock is
/// started, so two tick sources never overlap.
#[derive(Debug)]
pub struct PhaseMachine {
    config: GameConfig,
    phase: Phase,
    title: TitleScreen,
    clock: Clock,
    paused: bool,
    last_scores: Option<(PhaseKind, Scoreboard)>,
}

impl PhaseMachine {
    pub fn new(config: GameConfig, now: Instant) -> Self {
        let mut clock = Clock::new(config.menu_tick(), config.max_catch_up);
        clock.start(now);
        info!("starting on title screen");
        Self {
            config,
            phase: Phase::TitleScreen,
            title: TitleScreen::default(),
            clock,
            paused: false,
            last_scores: None,
        }
    }

    pub fn kind(&self) -> PhaseKind {
        match &self.phase {
            Phase::TitleScreen => PhaseKind::TitleScreen,
            Phase::Playing(game) => game.mode().into(),
        }
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn title(&self) -> &TitleScreen {
        &self.title
    }

    pub fn game(&self) -> Option<&GamePhase> {
        match &self.phase {
            Phase::Playing(game) => Some(game),
            Phase::TitleScreen => None,
        }
    }

    pub fn clock(&self) -> &Clock {
        &self.clock
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Scores of the most recently abandoned game, if any.
    pub fn last_scores(&self) -> Option<(PhaseKind, Scoreboard)> {
        self.last_scores
    }

    pub fn until_next_tick(&self, now: Instant) -> Option<Duration> {
        self.clock.until_next(now)
    }

    /// Applies a command. Returns the new phase when the command caused a
    /// transition. Commands that make no sense in the current phase are
    /// ignored.
    pub fn handle(&mut self, command: Command, now: Instant) -> Option<PhaseKind> {
        match (&mut self.phase, command) {
            (Phase::TitleScreen, Command::Menu(event)) => {
                let mode = self.title.handle(event)?;
                let game = GamePhase::new(mode, &self.config);
                self.enter(Phase::Playing(game), now);
                Some(self.kind())
            }
            (Phase::Playing(game), Command::Cancel) => {
                self.last_scores = Some((game.mode().into(), *game.scores()));
                self.enter(Phase::TitleScreen, now);
                Some(PhaseKind::TitleScreen)
            }
            (Phase::Playing(_), Command::TogglePause) => {
                self.paused = !self.paused;
                if self.paused {
                    self.clock.stop();
                } else {
                    self.clock.start(now);
                }
                info!(paused = self.paused, "pause toggled");
                None
            }
            (Phase::Playing(game), Command::Restart) => {
                game.reset_state();
                self.paused = false;
                self.clock.start(now);
                info!(mode = ?game.mode(), "game restarted");
                None
            }
            _ => None,
        }
    }

    fn enter(&mut self, next: Phase, now: Instant) {
        let from = self.kind();
        self.clock.stop();
        self.paused = false;

        let period = match &next {
            Phase::TitleScreen => {
                self.title.reset_state();
                self.config.menu_tick()
            }
            Phase::Playing(_) => self.config.game_tick(),
        };
        self.phase = next;
        self.clock = Clock::new(period, self.config.max_catch_up);
        self.clock.start(now);

        info!(?from, to = ?self.kind(), "phase transition");
    }

    /// Runs every tick that fell due by `now`, all against the same input
    /// snapshot.
    pub fn advance(&mut self, now: Instant, input: &InputSnapshot) -> Advance {
        let ticks = self.clock.take_due(now);
        let mut step = Advance {
            ticks,
            ..Advance::default()
        };

        match &mut self.phase {
            Phase::TitleScreen => step.redraw = ticks > 0,
            Phase::Playing(game) => {
                for _ in 0..ticks {
                    let outcome = game.tick(input);
                    if outcome.wall_hit != WallHit::None {
                        step.points += 1;
                    }
                    step.redraw |= outcome.redraw;
                }
            }
        }

        step
    }
}
