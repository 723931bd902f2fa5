//! Game configuration loaded from an optional TOML file and CLI overrides.

use std::{
    fs, io,
    path::{Path, PathBuf},
    time::Duration,
};

use serde::Deserialize;
use thiserror::Error;
use tower_climb_core::{
    RankingPlayer, StaticRanking, DEFAULT_PLAYER_NAME, DEFAULT_TOTAL_FLOORS, MAX_TOTAL_FLOORS,
};
use tower_climb_system_pacing::{
    Config as PacingConfig, DEFAULT_CORRECT_DELAY, DEFAULT_INCORRECT_DELAY,
};

/// Errors raised while assembling the game configuration.
#[derive(Debug, Error)]
pub(crate) enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read config file {}", .path.display())]
    Read {
        /// Location of the unreadable file.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },
    /// The configuration file is not valid TOML for this game.
    #[error("failed to parse config file {}", .path.display())]
    Parse {
        /// Location of the malformed file.
        path: PathBuf,
        /// Underlying parse failure.
        #[source]
        source: toml::de::Error,
    },
    /// The tower was configured without floors.
    #[error("the tower needs at least one floor")]
    NoFloors,
    /// The tower was configured with more floors than a climb supports.
    #[error("the tower cannot have {requested} floors; the limit is {MAX_TOTAL_FLOORS}")]
    TooManyFloors {
        /// Floor count that was asked for.
        requested: u32,
    },
}

/// Raw file contents; every field is optional.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    total_floors: Option<u32>,
    player_name: Option<String>,
    correct_delay_ms: Option<u64>,
    incorrect_delay_ms: Option<u64>,
    ranking: Option<Vec<RankingPlayer>>,
}

/// Fully resolved configuration consumed by the session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct GameConfig {
    pub(crate) total_floors: u32,
    pub(crate) player_name: String,
    pub(crate) pacing: PacingConfig,
    pub(crate) ranking: StaticRanking,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            total_floors: DEFAULT_TOTAL_FLOORS,
            player_name: DEFAULT_PLAYER_NAME.to_owned(),
            pacing: PacingConfig::default(),
            ranking: StaticRanking::default(),
        }
    }
}

impl GameConfig {
    /// Loads the configuration file when one is provided, otherwise defaults.
    pub(crate) fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let file: FileConfig = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::from_file(file))
    }

    fn from_file(file: FileConfig) -> Self {
        let defaults = Self::default();
        let correct_delay = file
            .correct_delay_ms
            .map_or(DEFAULT_CORRECT_DELAY, Duration::from_millis);
        let incorrect_delay = file
            .incorrect_delay_ms
            .map_or(DEFAULT_INCORRECT_DELAY, Duration::from_millis);

        Self {
            total_floors: file.total_floors.unwrap_or(defaults.total_floors),
            player_name: file.player_name.unwrap_or(defaults.player_name),
            pacing: PacingConfig::new(correct_delay, incorrect_delay),
            ranking: file.ranking.map_or(defaults.ranking, StaticRanking::new),
        }
    }

    /// Applies command-line overrides and validates the result.
    pub(crate) fn with_overrides(
        mut self,
        total_floors: Option<u32>,
        player_name: Option<String>,
    ) -> Result<Self, ConfigError> {
        if let Some(total_floors) = total_floors {
            self.total_floors = total_floors;
        }
        if let Some(player_name) = player_name {
            self.player_name = player_name;
        }
        if self.total_floors == 0 {
            return Err(ConfigError::NoFloors);
        }
        if self.total_floors > MAX_TOTAL_FLOORS {
            return Err(ConfigError::TooManyFloors {
                requested: self.total_floors,
            });
        }
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tower_climb_core::RankingProvider;

    fn parse(contents: &str) -> GameConfig {
        let file: FileConfig = toml::from_str(contents).expect("valid config");
        GameConfig::from_file(file)
    }

    #[test]
    fn empty_file_yields_defaults() {
        assert_eq!(parse(""), GameConfig::default());
    }

    #[test]
    fn file_values_replace_defaults() {
        let config = parse(
            r#"
            total_floors = 8
            player_name = "Javier"
            correct_delay_ms = 100
            incorrect_delay_ms = 250

            [[ranking]]
            name = "Ana"
            floor_reached = 7
            "#,
        );

        assert_eq!(config.total_floors, 8);
        assert_eq!(config.player_name, "Javier");
        assert_eq!(
            config.pacing,
            PacingConfig::new(Duration::from_millis(100), Duration::from_millis(250))
        );
        assert_eq!(config.ranking.players(), vec![RankingPlayer::new("Ana", 7)]);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let result: Result<FileConfig, _> = toml::from_str("floors = 3");
        assert!(result.is_err());
    }

    #[test]
    fn overrides_take_precedence() {
        let config = parse("total_floors = 8")
            .with_overrides(Some(3), Some("Mia".to_owned()))
            .expect("valid overrides");

        assert_eq!(config.total_floors, 3);
        assert_eq!(config.player_name, "Mia");
    }

    #[test]
    fn tower_without_floors_is_rejected() {
        let error = GameConfig::default()
            .with_overrides(Some(0), None)
            .expect_err("zero floors must be rejected");
        assert!(matches!(error, ConfigError::NoFloors));

        let error = parse("total_floors = 0")
            .with_overrides(None, None)
            .expect_err("zero floors must be rejected");
        assert!(matches!(error, ConfigError::NoFloors));
    }

    #[test]
    fn oversized_tower_is_rejected() {
        let error = GameConfig::default()
            .with_overrides(Some(4_000_000_000), None)
            .expect_err("oversized tower must be rejected");
        assert!(matches!(
            error,
            ConfigError::TooManyFloors {
                requested: 4_000_000_000
            }
        ));

        let config = GameConfig::default()
            .with_overrides(Some(MAX_TOTAL_FLOORS), None)
            .expect("the limit itself is allowed");
        assert_eq!(config.total_floors, MAX_TOTAL_FLOORS);
    }

    #[test]
    fn missing_file_reports_path() {
        let path = Path::new("/nonexistent/tower-climb.toml");
        let error = GameConfig::load(Some(path)).expect_err("file does not exist");

        assert!(matches!(error, ConfigError::Read { .. }));
        assert!(error.to_string().contains("tower-climb.toml"));
    }
}
