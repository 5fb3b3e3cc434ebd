use std::{
    fs::OpenOptions,
    io::Write,
    path::{Path, PathBuf},
};

use chrono::{DateTime, TimeZone};
use tracing::debug;

use crate::error::{GameError, Result};

/// Append-only session log. The file is reopened for every line.
#[derive(Debug, Clone)]
pub struct Transcript {
    path: PathBuf,
}

impl Transcript {
    pub fn file_name<Tz>(now: &DateTime<Tz>) -> String
    where
        Tz: TimeZone,
        Tz::Offset: std::fmt::Display,
    {
        format!("{}-game.log", now.format("%Y%m%d%H%M%S"))
    }

    pub fn create<Tz>(dir: impl AsRef<Path>, now: &DateTime<Tz>) -> Result<Self>
    where
        Tz: TimeZone,
        Tz::Offset: std::fmt::Display,
    {
        let transcript = Transcript {
            path: dir.as_ref().join(Self::file_name(now)),
        };
        transcript.open()?;
        debug!("Created transcript {:?}", transcript.path);
        Ok(transcript)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn append(&self, line: &str) -> Result<()> {
        let mut file = self.open()?;
        writeln!(file, "{}", line)
            .and_then(|_| file.flush())
            .map_err(|source| self.error(source))
    }

    fn open(&self) -> Result<std::fs::File> {
        OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|source| self.error(source))
    }

    fn error(&self, source: std::io::Error) -> GameError {
        GameError::Transcript {
            path: self.path.clone(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use chrono::{Local, Utc};

    use super::*;

    #[test]
    fn name_is_timestamp_with_suffix() {
        let now = Utc.with_ymd_and_hms(2024, 3, 9, 7, 5, 1).unwrap();
        assert_eq!(Transcript::file_name(&now), "20240309070501-game.log");
    }

    #[test]
    fn create_makes_empty_file() {
        let dir = tempfile::tempdir().unwrap();
        let transcript = Transcript::create(dir.path(), &Local::now()).unwrap();
        assert!(transcript.path().starts_with(dir.path()));
        let name = transcript.path().file_name().unwrap().to_str().unwrap();
        assert_eq!(name.len(), "YYYYMMDDhhmmss-game.log".len());
        assert!(name.ends_with("-game.log"));
        assert_eq!(fs::read_to_string(transcript.path()).unwrap(), "");
    }

    #[test]
    fn append_adds_one_line_per_call() {
        let dir = tempfile::tempdir().unwrap();
        let transcript = Transcript::create(dir.path(), &Local::now()).unwrap();
        transcript.append("Game start!").unwrap();
        transcript.append("Round 1:").unwrap();
        assert_eq!(
            fs::read_to_string(transcript.path()).unwrap(),
            "Game start!\nRound 1:\n"
        );
    }

    #[test]
    fn reopening_never_truncates() {
        let dir = tempfile::tempdir().unwrap();
        let now = Local::now();
        let first = Transcript::create(dir.path(), &now).unwrap();
        first.append("first").unwrap();
        let second = Transcript::create(dir.path(), &now).unwrap();
        second.append("second").unwrap();
        assert_eq!(
            fs::read_to_string(first.path()).unwrap(),
            "first\nsecond\n"
        );
    }

    #[test]
    fn append_fails_when_directory_is_gone() {
        let dir = tempfile::tempdir().unwrap();
        let transcript = Transcript::create(dir.path(), &Local::now()).unwrap();
        fs::remove_dir_all(dir.path()).unwrap();
        let result = transcript.append("Game start!");
        assert!(matches!(result, Err(GameError::Transcript { .. })));
    }
}
