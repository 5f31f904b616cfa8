use crate::consts;
use crate::util;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Program configuration read from a configuration file
#[derive(Clone, Deserialize, Debug, Default, Eq, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
pub(crate) struct Config {
    /// Tick-timing parameters
    pub(crate) tempo: Tempo,

    /// Settings about data files
    pub(crate) files: FileConfig,
}

impl Config {
    /// Return the default configuration file path
    pub(crate) fn default_path() -> Result<PathBuf, ConfigError> {
        dirs::config_local_dir()
            .map(|p| p.join("gridsnake").join("config.toml"))
            .ok_or(ConfigError::NoPath)
    }

    /// Read configuration from a file on disk.  If the file does not exist and
    /// `allow_missing` is true, a default `Config` value is returned.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the file could not be read or if the file's contents
    /// could not be deserialized.
    pub(crate) fn load(path: &Path, allow_missing: bool) -> Result<Config, ConfigError> {
        let content = match fs_err::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound && allow_missing => {
                return Ok(Config::default())
            }
            Err(e) => return Err(ConfigError::Read(e)),
        };
        toml::from_str(&content).map_err(Into::into)
    }

    /// Return the filepath at which the scores should be stored: the file
    /// given in the configuration or, if that is not set, the default scores
    /// file path.  Return `None` if no path is present in the configuration
    /// and the default path could not be computed.
    pub(crate) fn scores_file(&self) -> Option<PathBuf> {
        self.files
            .scores_file
            .clone()
            .or_else(util::scores_file_path)
    }
}

/// The tick-interval curve: the interval starts at `base-ms` and shrinks by
/// `step-ms` for every point scored, never dropping below `floor-ms`.
#[derive(Clone, Copy, Deserialize, Debug, Eq, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
pub(crate) struct Tempo {
    base_ms: u64,
    step_ms: u64,
    floor_ms: u64,
}

impl Tempo {
    /// Return the tick interval to use at the given score
    pub(crate) fn interval(&self, score: u32) -> Duration {
        let floor = self.floor_ms.min(self.base_ms);
        let ms = self
            .base_ms
            .saturating_sub(u64::from(score).saturating_mul(self.step_ms))
            .max(floor);
        Duration::from_millis(ms)
    }
}

impl Default for Tempo {
    fn default() -> Tempo {
        Tempo {
            base_ms: consts::BASE_TICK_MS,
            step_ms: consts::TICK_STEP_MS,
            floor_ms: consts::TICK_FLOOR_MS,
        }
    }
}

#[derive(Clone, Deserialize, Debug, Eq, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
pub(crate) struct FileConfig {
    /// Path at which the high score should be stored
    pub(crate) scores_file: Option<PathBuf>,

    /// Whether to load & save the high score at all
    pub(crate) save_scores: bool,
}

impl Default for FileConfig {
    fn default() -> FileConfig {
        FileConfig {
            scores_file: None,
            save_scores: true,
        }
    }
}

#[derive(Debug, Error)]
pub(crate) enum ConfigError {
    #[error("failed to determine path to local configuration directory")]
    NoPath,
    #[error("failed to read configuration file")]
    Read(#[from] std::io::Error),
    #[error("failed to parse configuration file")]
    Parse(#[from] toml::de::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::io::Write;

    #[rstest]
    #[case(0, 250)]
    #[case(1, 245)]
    #[case(10, 200)]
    #[case(39, 55)]
    #[case(40, 50)]
    #[case(41, 50)]
    #[case(1000, 50)]
    fn default_curve(#[case] score: u32, #[case] ms: u64) {
        assert_eq!(Tempo::default().interval(score), Duration::from_millis(ms));
    }

    #[test]
    fn curve_is_monotonic() {
        let tempo = Tempo::default();
        for score in 0..100 {
            assert!(tempo.interval(score + 1) <= tempo.interval(score));
        }
    }

    #[test]
    fn floor_never_exceeds_base() {
        let tempo = Tempo {
            base_ms: 30,
            step_ms: 5,
            floor_ms: 50,
        };
        assert_eq!(tempo.interval(0), Duration::from_millis(30));
        assert_eq!(tempo.interval(100), Duration::from_millis(30));
    }

    #[test]
    fn load_full() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            concat!(
                "[tempo]\n",
                "base-ms = 100\n",
                "step-ms = 2\n",
                "floor-ms = 40\n",
                "\n",
                "[files]\n",
                "scores-file = \"/tmp/scores.json\"\n",
                "save-scores = false\n",
            )
        )
        .unwrap();
        let config = Config::load(file.path(), false).unwrap();
        assert_eq!(
            config,
            Config {
                tempo: Tempo {
                    base_ms: 100,
                    step_ms: 2,
                    floor_ms: 40,
                },
                files: FileConfig {
                    scores_file: Some(PathBuf::from("/tmp/scores.json")),
                    save_scores: false,
                },
            }
        );
        assert_eq!(
            config.scores_file(),
            Some(PathBuf::from("/tmp/scores.json"))
        );
    }

    #[test]
    fn load_empty() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let config = Config::load(file.path(), false).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn load_missing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let config = Config::load(&path, true).unwrap();
        assert_eq!(config, Config::default());
        assert!(Config::load(&path, false).is_err());
    }

    #[test]
    fn load_malformed() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[tempo]\nbase-ms = \"fast\"").unwrap();
        assert!(matches!(
            Config::load(file.path(), true),
            Err(ConfigError::Parse(_))
        ));
    }
}
