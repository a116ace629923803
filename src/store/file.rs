use super::{BestPuzzleStore, Leaderboard};
use crate::core::PuzzleError;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Stores each board as `<dir>/<key>.json`
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    #[must_use]
    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl BestPuzzleStore for JsonFileStore {
    fn read(&self, key: &str) -> Result<Leaderboard, PuzzleError> {
        let path = self.path_for(key);
        let file = match File::open(&path) {
            Ok(file) => file,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                log::debug!("no board at {}", path.display());
                return Ok(Leaderboard::new());
            }
            Err(err) => return Err(err.into()),
        };
        Ok(serde_json::from_reader(BufReader::new(file))?)
    }

    fn write(&self, key: &str, board: &Leaderboard) -> Result<(), PuzzleError> {
        fs::create_dir_all(&self.dir)?;

        // Write beside the target, then rename over it
        let temp_file = NamedTempFile::new_in(&self.dir)?;
        let mut writer = BufWriter::new(&temp_file);
        serde_json::to_writer_pretty(&mut writer, board)?;
        writer.flush()?;
        drop(writer);

        let path = self.path_for(key);
        temp_file.persist(&path).map_err(|err| err.error)?;
        log::info!("wrote {} puzzles to {}", board.len(), path.display());
        Ok(())
    }
}
