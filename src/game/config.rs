use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use super::error::GameError;
use super::grid;
use super::state::Position;

/// Configuration for the game
///
/// Every field has a default, so a config file only needs the values it
/// overrides:
///
/// ```json
/// { "tick_interval_ms": 250, "start": { "row": 3, "col": 3 } }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Milliseconds between simulation ticks
    pub tick_interval_ms: u64,
    /// Milliseconds between redraws
    pub render_interval_ms: u64,
    /// Cell the snake starts on, at launch and after every reset
    pub start: Position,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: 400,
            render_interval_ms: 33,
            start: Position::new(7, 7),
        }
    }
}

impl GameConfig {
    /// Load a JSON config file and validate it
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: Self = serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), GameError> {
        if self.tick_interval_ms == 0 {
            return Err(GameError::ZeroTickInterval);
        }
        if !grid::contains(self.start) {
            return Err(GameError::StartOutOfBounds(self.start));
        }
        Ok(())
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    pub fn render_interval(&self) -> Duration {
        Duration::from_millis(self.render_interval_ms.max(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.tick_interval(), Duration::from_millis(400));
        assert_eq!(config.start, Position::new(7, 7));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "tick_interval_ms": 250 }}"#).unwrap();

        let config = GameConfig::from_file(file.path()).unwrap();
        assert_eq!(config.tick_interval_ms, 250);
        assert_eq!(config.render_interval_ms, 33);
        assert_eq!(config.start, Position::new(7, 7));
    }

    #[test]
    fn test_start_outside_grid_rejected() {
        let config = GameConfig {
            start: Position::new(16, 0),
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(GameError::StartOutOfBounds(Position::new(16, 0)))
        );
    }

    #[test]
    fn test_zero_tick_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "tick_interval_ms": 0 }}"#).unwrap();

        let err = GameConfig::from_file(file.path()).unwrap_err();
        assert_eq!(
            err.downcast_ref::<GameError>(),
            Some(&GameError::ZeroTickInterval)
        );
    }

    #[test]
    fn test_missing_file_has_context() {
        let dir = tempfile::tempdir().unwrap();
        let err = GameConfig::from_file(&dir.path().join("nope.json")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }
}
