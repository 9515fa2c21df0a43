//! JSON file repository for task storage.
//!
//! The whole collection is stored as a pretty-printed JSON array. Each save
//! writes its own sibling staging file and renames it over the target, so
//! readers see either the previous or the new collection and a failed save
//! leaves the previous contents in place.

use std::io::{ErrorKind, Write};
use std::sync::atomic::{AtomicU64, Ordering};

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::fs_utf8::{Dir, File, OpenOptions};
use tracing::debug;

use crate::fs::open_parent_dir;
use crate::task::{
    domain::Task,
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};

/// Staging names already taken by leftovers are skipped this many times.
const MAX_STAGING_ATTEMPTS: u32 = 16;

static STAGING_SEQUENCE: AtomicU64 = AtomicU64::new(0);

/// Task repository backed by a single JSON file.
#[derive(Debug)]
pub struct JsonFileTaskRepository {
    dir: Dir,
    file_name: String,
    path: Utf8PathBuf,
}

impl JsonFileTaskRepository {
    /// Opens a repository persisting to `path`.
    ///
    /// The file itself need not exist yet, but its parent directory must.
    /// When `path` is a symlink, the file it points to is used.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Storage`] when `path` has no file name
    /// or its parent directory cannot be opened.
    pub fn open(path: impl AsRef<Utf8Path>) -> TaskRepositoryResult<Self> {
        let path = path.as_ref();
        let parent = open_parent_dir(path).map_err(TaskRepositoryError::storage)?;

        Ok(Self {
            dir: parent.dir,
            file_name: parent.file_name,
            path: path.to_owned(),
        })
    }

    /// Returns the path the repository was opened with.
    #[must_use]
    pub fn path(&self) -> &Utf8Path {
        &self.path
    }

    /// Creates a staging file no other writer shares.
    fn create_staging(&self) -> std::io::Result<(String, File)> {
        let mut options = OpenOptions::new();
        options.write(true).create_new(true);
        let mut attempts = 0;
        loop {
            let sequence = STAGING_SEQUENCE.fetch_add(1, Ordering::Relaxed);
            let name = format!(
                ".{}.{}-{sequence}.tmp",
                self.file_name,
                std::process::id()
            );
            match self.dir.open_with(&name, &options) {
                Ok(file) => return Ok((name, file)),
                Err(err)
                    if err.kind() == ErrorKind::AlreadyExists
                        && attempts < MAX_STAGING_ATTEMPTS =>
                {
                    attempts += 1;
                }
                Err(err) => return Err(err),
            }
        }
    }

    fn publish(&self, staging: &str, mut file: File, contents: &[u8]) -> std::io::Result<()> {
        file.write_all(contents)?;
        file.sync_all()?;
        drop(file);
        self.dir.rename(staging, &self.dir, &self.file_name)
    }
}

impl TaskRepository for JsonFileTaskRepository {
    fn save(&self, tasks: &[Task]) -> TaskRepositoryResult<()> {
        let mut contents =
            serde_json::to_vec_pretty(tasks).map_err(TaskRepositoryError::format)?;
        contents.push(b'\n');

        let (staging, file) = self
            .create_staging()
            .map_err(TaskRepositoryError::storage)?;
        if let Err(err) = self.publish(&staging, file, &contents) {
            if let Err(cleanup) = self.dir.remove_file(&staging) {
                debug!(path = %self.path, error = %cleanup, "staging file not removed");
            }
            return Err(TaskRepositoryError::storage(err));
        }

        debug!(path = %self.path, count = tasks.len(), "saved tasks");
        Ok(())
    }

    fn load(&self) -> TaskRepositoryResult<Vec<Task>> {
        let contents = match self.dir.read_to_string(&self.file_name) {
            Ok(contents) => contents,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path, "task file absent, starting empty");
                return Ok(Vec::new());
            }
            Err(err) => return Err(TaskRepositoryError::storage(err)),
        };

        if contents.trim().is_empty() {
            return Ok(Vec::new());
        }

        let tasks: Vec<Task> =
            serde_json::from_str(&contents).map_err(TaskRepositoryError::format)?;
        debug!(path = %self.path, count = tasks.len(), "loaded tasks");
        Ok(tasks)
    }
}
