use crate::consts;
use std::collections::HashMap;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Durable storage for the best score across runs.
///
/// The game only ever reads the current best and reports a finished run's
/// score; everything else (where and whether the value is stored) is the
/// implementation's business.
pub(crate) trait ScoreBoard: fmt::Debug {
    /// The best score recorded so far, or 0 if none has been
    fn best(&self) -> u32;

    /// Report the final score of a terminated run.  Returns `true` iff the
    /// score beat the previous best and was recorded as the new high score.
    fn record(&mut self, score: u32) -> bool;
}

/// Scores stored as a JSON object of name → score in a file on disk.
///
/// A store without a path keeps scores in memory for the lifetime of the
/// process only.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub(crate) struct FileScores {
    path: Option<PathBuf>,
    scores: HashMap<String, u32>,
}

impl FileScores {
    /// Read previously-stored scores from `path`.  A file that does not exist
    /// yet yields an empty store.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the file could not be read or if its contents could
    /// not be deserialized.
    pub(crate) fn load(path: PathBuf) -> Result<FileScores, LoadError> {
        let scores = match fs_err::read(&path) {
            Ok(src) => serde_json::from_slice(&src).map_err(LoadError::Deserialize)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => HashMap::new(),
            Err(e) => return Err(LoadError::Read(e)),
        };
        Ok(FileScores {
            path: Some(path),
            scores,
        })
    }

    /// Return an empty store that will write to `path` when a score is
    /// recorded
    pub(crate) fn blank(path: PathBuf) -> FileScores {
        FileScores {
            path: Some(path),
            scores: HashMap::new(),
        }
    }

    /// Return a store that never touches the disk
    pub(crate) fn unsaved() -> FileScores {
        FileScores::default()
    }

    fn save(&self) -> Result<(), SaveError> {
        let Some(path) = self.path.as_deref() else {
            return Ok(());
        };
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs_err::create_dir_all(parent).map_err(SaveError::Mkdir)?;
        }
        let mut src = serde_json::to_string(&self.scores).map_err(SaveError::Serialize)?;
        src.push('\n');
        fs_err::write(path, &src).map_err(SaveError::Write)?;
        Ok(())
    }
}

impl ScoreBoard for FileScores {
    fn best(&self) -> u32 {
        self.scores
            .get(consts::HIGH_SCORE_KEY)
            .copied()
            .unwrap_or(0)
    }

    fn record(&mut self, score: u32) -> bool {
        if score > self.best() {
            self.scores
                .insert(consts::HIGH_SCORE_KEY.to_owned(), score);
            // A failed write must not disturb the run's outcome.
            let _ = self.save();
            true
        } else {
            false
        }
    }
}

#[derive(Debug, Error)]
pub(crate) enum LoadError {
    #[error("failed to read scores file")]
    Read(#[source] std::io::Error),
    #[error("failed to deserialize scores file")]
    Deserialize(#[source] serde_json::Error),
}

#[derive(Debug, Error)]
enum SaveError {
    #[error("failed to create parent directories")]
    Mkdir(#[source] std::io::Error),
    #[error("failed to serialize scores")]
    Serialize(#[source] serde_json::Error),
    #[error("failed to write scores to disk")]
    Write(#[source] std::io::Error),
}

/// In-memory [`ScoreBoard`] for tests.  Clones share state so that a test can
/// hand one to a game and still observe what got recorded.
#[cfg(test)]
#[derive(Clone, Debug, Default)]
pub(crate) struct MemoryScores(std::rc::Rc<std::cell::Cell<u32>>);

#[cfg(test)]
impl MemoryScores {
    pub(crate) fn with_best(best: u32) -> MemoryScores {
        let scores = MemoryScores::default();
        scores.0.set(best);
        scores
    }
}

#[cfg(test)]
impl ScoreBoard for MemoryScores {
    fn best(&self) -> u32 {
        self.0.get()
    }

    fn record(&mut self, score: u32) -> bool {
        if score > self.0.get() {
            self.0.set(score);
            true
        } else {
            false
        }
    }
}
