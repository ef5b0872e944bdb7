use tracing::debug;

use crate::phase::Mode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOption {
    OnePlayer,
    TwoPlayers,
}

impl MenuOption {
    pub const ALL: [MenuOption; 2] = [MenuOption::OnePlayer, MenuOption::TwoPlayers];

    pub fn label(self) -> &'static str {
        match self {
            MenuOption::OnePlayer => "1 Player",
            MenuOption::TwoPlayers => "2 Players",
        }
    }

    pub fn mode(self) -> Mode {
        match self {
            MenuOption::OnePlayer => Mode::OnePlayer,
            MenuOption::TwoPlayers => Mode::TwoPlayers,
        }
    }

    fn index(self) -> usize {
        self as usize
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn previous(self) -> Self {
        let len = Self::ALL.len();
        Self::ALL[(self.index() + len - 1) % len]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEvent {
    Previous,
    Next,
    Confirm,
}

/// Title screen selection. Confirming hands back the mode to start; the
/// caller owns the actual phase switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TitleScreen {
    selection: MenuOption,
}

impl Default for TitleScreen {
    fn default() -> Self {
        Self {
            selection: MenuOption::OnePlayer,
        }
    }
}

impl TitleScreen {
    pub fn selection(&self) -> MenuOption {
        self.selection
    }

    pub fn handle(&mut self, event: MenuEvent) -> Option<Mode> {
        match event {
            MenuEvent::Previous => {
                self.selection = self.selection.previous();
                debug!(selection = ?self.selection, "menu selection");
                None
            }
            MenuEvent::Next => {
                self.selection = self.selection.next();
                debug!(selection = ?self.selection, "menu selection");
                None
            }
            MenuEvent::Confirm => Some(self.selection.mode()),
        }
    }

    pub fn reset_state(&mut self) {
        self.selection = MenuOption::OnePlayer;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_then_confirm_starts_two_players() {
        let mut title = TitleScreen::default();
        assert_eq!(title.selection(), MenuOption::OnePlayer);

        assert_eq!(title.handle(MenuEvent::Next), None);
        assert_eq!(title.selection(), MenuOption::TwoPlayers);
        assert_eq!(title.handle(MenuEvent::Confirm), Some(Mode::TwoPlayers));
    }

    #[test]
    fn selection_wraps_both_ways() {
        assert_eq!(MenuOption::TwoPlayers.next(), MenuOption::OnePlayer);
        assert_eq!(MenuOption::OnePlayer.previous(), MenuOption::TwoPlayers);
    }

    #[test]
    fn confirm_keeps_selection() {
        let mut title = TitleScreen::default();
        assert_eq!(title.handle(MenuEvent::Confirm), Some(Mode::OnePlayer));
        assert_eq!(title.selection(), MenuOption::OnePlayer);
    }

    #[test]
    fn reset_goes_back_to_one_player() {
        let mut title = TitleScreen::default();
        title.handle(MenuEvent::Previous);
        title.reset_state();
        assert_eq!(title.selection(), MenuOption::OnePlayer);
    }
}
