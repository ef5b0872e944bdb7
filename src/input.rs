use std::time::{Duration, Instant};

/// Movement tokens the simulation understands. The terminal layer decides
/// which physical keys produce them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveKey {
    P1Left,
    P1Right,
    P2Left,
    P2Right,
}

impl MoveKey {
    pub const ALL: [MoveKey; 4] = [
        MoveKey::P1Left,
        MoveKey::P1Right,
        MoveKey::P2Left,
        MoveKey::P2Right,
    ];

    fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

/// A left/right token pair controlling one paddle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyBinding {
    pub left: MoveKey,
    pub right: MoveKey,
}

impl KeyBinding {
    pub const PLAYER_ONE: KeyBinding = KeyBinding {
        left: MoveKey::P1Left,
        right: MoveKey::P1Right,
    };

    pub const PLAYER_TWO: KeyBinding = KeyBinding {
        left: MoveKey::P2Left,
        right: MoveKey::P2Right,
    };

    /// -1 for left, 1 for right, 0 when neither or both are held.
    pub fn direction(&self, input: &InputSnapshot) -> i8 {
        match (input.contains(self.left), input.contains(self.right)) {
            (true, false) => -1,
            (false, true) => 1,
            _ => 0,
        }
    }
}

/// Frozen view of the held keys, taken once before a batch of ticks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputSnapshot {
    bits: u8,
}

impl InputSnapshot {
    pub fn contains(&self, key: MoveKey) -> bool {
        self.bits & key.bit() != 0
    }

    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }
}

impl FromIterator<MoveKey> for InputSnapshot {
    fn from_iter<I: IntoIterator<Item = MoveKey>>(iter: I) -> Self {
        let bits = iter.into_iter().fold(0, |acc, key| acc | key.bit());
        Self { bits }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Held {
    UntilReleased,
    Until(Instant),
}

/// Set of currently held movement keys.
///
/// Input callbacks mutate this set; the simulation only ever sees the
/// [`InputSnapshot`] returned by [`HeldKeys::snapshot`]. Terminals that never
/// report key releases get a hold timeout instead: every press or repeat
/// extends the hold, and the key drops out once the timeout passes silently.
#[derive(Debug, Clone)]
pub struct HeldKeys {
    slots: [Option<Held>; 4],
    hold_timeout: Option<Duration>,
}

impl HeldKeys {
    pub fn new(hold_timeout: Option<Duration>) -> Self {
        Self {
            slots: [None; 4],
            hold_timeout,
        }
    }

    pub fn hold_timeout(&self) -> Option<Duration> {
        self.hold_timeout
    }

    pub fn set_hold_timeout(&mut self, hold_timeout: Option<Duration>) {
        self.hold_timeout = hold_timeout;
    }

    pub fn press(&mut self, key: MoveKey, now: Instant) {
        self.slots[key as usize] = Some(match self.hold_timeout {
            Some(timeout) => Held::Until(now + timeout),
            None => Held::UntilReleased,
        });
    }

    pub fn release(&mut self, key: MoveKey) {
        self.slots[key as usize] = None;
    }

    pub fn clear(&mut self) {
        self.slots = [None; 4];
    }

    /// Drops expired holds and returns what is still held at `now`.
    pub fn snapshot(&mut self, now: Instant) -> InputSnapshot {
        for slot in self.slots.iter_mut() {
            if let Some(Held::Until(deadline)) = slot {
                if now >= *deadline {
                    *slot = None;
                }
            }
        }

        MoveKey::ALL
            .into_iter()
            .filter(|key| self.slots[*key as usize].is_some())
            .collect()
    }
}

impl Default for HeldKeys {
    fn default() -> Self {
        Self::new(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn press_and_release_without_timeout() {
        let now = Instant::now();
        let mut keys = HeldKeys::new(None);
        keys.press(MoveKey::P1Left, now);
        keys.press(MoveKey::P2Right, now);

        let snap = keys.snapshot(now + Duration::from_secs(60));
        assert!(snap.contains(MoveKey::P1Left));
        assert!(snap.contains(MoveKey::P2Right));
        assert!(!snap.contains(MoveKey::P1Right));

        keys.release(MoveKey::P1Left);
        let snap = keys.snapshot(now);
        assert!(!snap.contains(MoveKey::P1Left));
        assert!(snap.contains(MoveKey::P2Right));
    }

    #[test]
    fn held_key_expires_after_timeout() {
        let now = Instant::now();
        let mut keys = HeldKeys::new(Some(Duration::from_millis(150)));
        keys.press(MoveKey::P1Right, now);

        assert!(keys
            .snapshot(now + Duration::from_millis(149))
            .contains(MoveKey::P1Right));
        assert!(keys
            .snapshot(now + Duration::from_millis(150))
            .is_empty());
    }

    #[test]
    fn repeat_press_extends_hold() {
        let now = Instant::now();
        let mut keys = HeldKeys::new(Some(Duration::from_millis(100)));
        keys.press(MoveKey::P1Left, now);
        keys.press(MoveKey::P1Left, now + Duration::from_millis(80));

        assert!(keys
            .snapshot(now + Duration::from_millis(150))
            .contains(MoveKey::P1Left));
    }

    #[test]
    fn snapshot_does_not_change_after_later_presses() {
        let now = Instant::now();
        let mut keys = HeldKeys::default();
        let before = keys.snapshot(now);
        keys.press(MoveKey::P2Left, now);
        assert!(before.is_empty());
    }

    #[test]
    fn opposite_keys_cancel() {
        let both: InputSnapshot = [MoveKey::P1Left, MoveKey::P1Right].into_iter().collect();
        assert_eq!(KeyBinding::PLAYER_ONE.direction(&both), 0);

        let left: InputSnapshot = [MoveKey::P1Left, MoveKey::P2Right].into_iter().collect();
        assert_eq!(KeyBinding::PLAYER_ONE.direction(&left), -1);
        assert_eq!(KeyBinding::PLAYER_TWO.direction(&left), 1);
    }
}
