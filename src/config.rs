use std::{fs, path::Path, time::Duration};

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{court::Court, error::PongError};

/// Tunables for a game session. Every field has a default, so a config file
/// only needs the values it wants to change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub court_width: u32,
    pub court_height: u32,
    pub inset: u32,
    pub pad_height: u32,
    pub pad_width: u32,
    pub bottom_speed: u32,
    pub top_speed: u32,
    pub ball_size: f64,
    pub init_vel_x: f64,
    pub init_vel_y: f64,
    pub game_tick_ms: u64,
    pub menu_tick_ms: u64,
    /// Upper bound on ticks replayed in one frame after a stall.
    pub max_catch_up: u32,
    /// How long a key counts as held after its last press on terminals that
    /// never report releases.
    pub hold_timeout_ms: u64,
    /// Pick the horizontal serve direction at random on every (re)start.
    pub random_serve: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            court_width: 300,
            court_height: 700,
            inset: 10,
            pad_height: 10,
            pad_width: 40,
            bottom_speed: 2,
            top_speed: 2,
            ball_size: 20.0,
            init_vel_x: 2.5,
            init_vel_y: 2.5,
            game_tick_ms: 5,
            menu_tick_ms: 50,
            max_catch_up: 8,
            hold_timeout_ms: 150,
            random_serve: false,
        }
    }
}

impl GameConfig {
    pub fn load(path: &Path) -> Result<Self, PongError> {
        let raw = fs::read_to_string(path).map_err(|source| PongError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config: GameConfig =
            serde_json::from_str(&raw).map_err(|source| PongError::ConfigParse {
                path: path.to_path_buf(),
                source,
            })?;
        config.validate()?;
        info!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Rejects geometry the simulation cannot represent. The simulation
    /// itself trusts its inputs, so this is the only place it is checked.
    pub fn validate(&self) -> Result<(), PongError> {
        let positive = [
            ("court_width", self.court_width),
            ("court_height", self.court_height),
            ("inset", self.inset),
            ("pad_height", self.pad_height),
            ("pad_width", self.pad_width),
            ("max_catch_up", self.max_catch_up),
        ];
        if let Some((name, _)) = positive.iter().find(|(_, v)| *v == 0) {
            return Err(PongError::InvalidConfig(format!("{name} must be positive")));
        }
        if self.ball_size.is_nan() || self.ball_size <= 0.0 {
            return Err(PongError::InvalidConfig("ball_size must be positive".into()));
        }
        if self.game_tick_ms == 0 || self.menu_tick_ms == 0 {
            return Err(PongError::InvalidConfig(
                "tick periods must be at least 1 ms".into(),
            ));
        }
        if self.pad_width >= self.court_width {
            return Err(PongError::InvalidConfig(
                "pad_width must be smaller than court_width".into(),
            ));
        }
        if self.ball_size >= f64::from(self.court_width)
            || self.ball_size >= f64::from(self.court_height)
        {
            return Err(PongError::InvalidConfig(
                "ball_size must fit inside the court".into(),
            ));
        }
        Ok(())
    }

    pub fn court(&self) -> Court {
        Court::new(self.court_width, self.court_height, self.inset)
    }

    pub fn game_tick(&self) -> Duration {
        Duration::from_millis(self.game_tick_ms)
    }

    pub fn menu_tick(&self) -> Duration {
        Duration::from_millis(self.menu_tick_ms)
    }

    pub fn hold_timeout(&self) -> Duration {
        Duration::from_millis(self.hold_timeout_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_match_classic_layout() {
        let config = GameConfig::default();
        assert_eq!(config.court(), Court::new(300, 700, 10));
        assert_eq!(config.game_tick(), Duration::from_millis(5));
        assert_eq!(config.menu_tick(), Duration::from_millis(50));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "pad_width": 60, "random_serve": true }}"#).unwrap();

        let config = GameConfig::load(file.path()).unwrap();
        assert_eq!(config.pad_width, 60);
        assert!(config.random_serve);
        assert_eq!(config.court_height, 700);
    }

    #[test]
    fn zero_geometry_is_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "pad_height": 0 }}"#).unwrap();

        let err = GameConfig::load(file.path()).unwrap_err();
        assert!(matches!(err, PongError::InvalidConfig(_)));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ court_width: ").unwrap();

        let err = GameConfig::load(file.path()).unwrap_err();
        assert!(matches!(err, PongError::ConfigParse { .. }));
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = GameConfig::load(&dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, PongError::ConfigRead { .. }));
    }
}
