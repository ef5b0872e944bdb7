use std::{
    io,
    time::{Duration, Instant},
};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::DefaultTerminal;
use tracing::{debug, info};
use vertical_pong::{
    Command, GameConfig, HeldKeys, MenuEvent, MoveKey, PhaseKind, PhaseMachine,
};

use crate::{render, theme::GameTheme};

/// Longest we block waiting for input when no tick is close.
const IDLE_POLL: Duration = Duration::from_millis(50);

pub struct App {
    exit: bool,
    machine: PhaseMachine,
    held: HeldKeys,
    theme: GameTheme,
    needs_redraw: bool,
}

impl App {
    /// `key_releases` tells whether the terminal reports key-up events; without
    /// them held keys time out instead.
    pub fn new(config: GameConfig, theme: GameTheme, key_releases: bool) -> Self {
        let hold_timeout = if key_releases {
            None
        } else {
            Some(config.hold_timeout())
        };
        Self {
            exit: false,
            machine: PhaseMachine::new(config, Instant::now()),
            held: HeldKeys::new(hold_timeout),
            theme,
            needs_redraw: true,
        }
    }

    pub fn machine(&self) -> &PhaseMachine {
        &self.machine
    }

    pub fn run(&mut self, mut terminal: DefaultTerminal) -> io::Result<()> {
        while !self.exit {
            self.handle_events()?;

            let now = Instant::now();
            let input = self.held.snapshot(now);
            let step = self.machine.advance(now, &input);
            if step.points > 0 {
                debug!(points = step.points, "scored this frame");
            }

            if step.redraw || self.needs_redraw {
                terminal.draw(|frame| render::draw(frame, &self.machine, self.theme))?;
                self.needs_redraw = false;
            }
        }

        Ok(())
    }

    fn handle_events(&mut self) -> io::Result<()> {
        let timeout = self
            .machine
            .until_next_tick(Instant::now())
            .map_or(IDLE_POLL, |t| t.min(IDLE_POLL));

        // Block for the first event, then drain whatever else is queued.
        if !event::poll(timeout)? {
            return Ok(());
        }
        loop {
            match event::read()? {
                Event::Key(key_event) => self.handle_key_event(key_event, Instant::now()),
                Event::Resize(..) => self.needs_redraw = true,
                _ => {}
            }
            if self.exit || !event::poll(Duration::ZERO)? {
                break;
            }
        }
        Ok(())
    }

    fn handle_key_event(&mut self, key_event: KeyEvent, now: Instant) {
        if key_event.modifiers.contains(KeyModifiers::CONTROL)
            && key_event.code == KeyCode::Char('c')
        {
            self.exit();
            return;
        }

        match self.machine.kind() {
            PhaseKind::TitleScreen => {
                if key_event.kind != KeyEventKind::Press {
                    return;
                }
                match key_event.code {
                    KeyCode::Esc | KeyCode::Char('q') => self.exit(),
                    KeyCode::Left | KeyCode::Up => self.command(Command::Menu(MenuEvent::Previous), now),
                    KeyCode::Right | KeyCode::Down => self.command(Command::Menu(MenuEvent::Next), now),
                    KeyCode::Char(' ') | KeyCode::Enter => {
                        self.command(Command::Menu(MenuEvent::Confirm), now)
                    }
                    _ => {}
                }
            }
            PhaseKind::OnePlayer | PhaseKind::TwoPlayers => {
                if let Some(key) = move_key(key_event.code) {
                    match key_event.kind {
                        KeyEventKind::Press | KeyEventKind::Repeat => self.held.press(key, now),
                        KeyEventKind::Release => self.held.release(key),
                    }
                    return;
                }
                if key_event.kind != KeyEventKind::Press {
                    return;
                }
                match key_event.code {
                    KeyCode::Esc | KeyCode::Char('q') => self.command(Command::Cancel, now),
                    KeyCode::Char('p') | KeyCode::Char('P') => {
                        self.command(Command::TogglePause, now)
                    }
                    KeyCode::Char('r') | KeyCode::Char('R') => self.command(Command::Restart, now),
                    _ => {}
                }
            }
        }
    }

    fn command(&mut self, command: Command, now: Instant) {
        if let Some(kind) = self.machine.handle(command, now) {
            // keys held in the old phase must not leak into the new one
            self.held.clear();
            debug!(?kind, "entered phase");
        }
        self.needs_redraw = true;
    }

    fn exit(&mut self) {
        info!("exit requested");
        self.exit = true;
    }
}

fn move_key(code: KeyCode) -> Option<MoveKey> {
    match code {
        KeyCode::Left => Some(MoveKey::P1Left),
        KeyCode::Right => Some(MoveKey::P1Right),
        KeyCode::Char(c) => match c.to_ascii_lowercase() {
            'a' | '1' => Some(MoveKey::P2Left),
            'd' | '3' => Some(MoveKey::P2Right),
            _ => None,
        },
        _ => None,
    }
}
