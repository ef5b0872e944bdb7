//! Pong on a vertical court: the bottom paddle belongs to player one, the top
//! paddle to either a tracking AI or player two.
//!
//! The crate is the simulation only. It consumes an [`InputSnapshot`] per
//! batch of ticks and exposes ball, paddle and score geometry for whoever
//! draws the frame.

pub mod ball;
pub mod clock;
pub mod config;
pub mod court;
pub mod error;
pub mod input;
pub mod machine;
pub mod menu;
pub mod paddle;
pub mod phase;
pub mod score;

pub use ball::{Ball, WallHit};
pub use clock::Clock;
pub use config::GameConfig;
pub use court::Court;
pub use error::PongError;
pub use input::{HeldKeys, InputSnapshot, KeyBinding, MoveKey};
pub use machine::{Advance, Command, Phase, PhaseKind, PhaseMachine};
pub use menu::{MenuEvent, MenuOption, TitleScreen};
pub use paddle::{AiTracking, Control, Paddle, Side, Steer};
pub use phase::{GamePhase, Mode, TickOutcome};
pub use score::Scoreboard;
