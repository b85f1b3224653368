//! Append-only trace file with size-based rotation.
//!
//! Backups are numbered: when `menuboard-otlp.json` outgrows the limit it
//! becomes `menuboard-otlp.json.1`, the previous `.1` becomes `.2`, and so on
//! up to the retention count. The oldest backup falls off the end.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// When to rotate and how many rotated files to keep.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RotationPolicy {
    pub max_bytes: u64,
    pub max_backups: usize,
}

impl Default for RotationPolicy {
    /// 10 MB, 3 backups.
    fn default() -> Self {
        Self {
            max_bytes: 10 * 1024 * 1024,
            max_backups: 3,
        }
    }
}

/// Line writer shared between exporter calls.
///
/// The file is opened lazily on the first write so construction never fails.
pub struct RotatingFile {
    path: PathBuf,
    policy: RotationPolicy,
    handle: Mutex<Option<File>>,
}

impl RotatingFile {
    pub const fn new(path: PathBuf, policy: RotationPolicy) -> Self {
        Self {
            path,
            policy,
            handle: Mutex::new(None),
        }
    }

    /// Appends `line` plus a newline, rotating first if the file is full.
    ///
    /// # Errors
    ///
    /// Any I/O error from rotating, opening or writing, and a poisoned lock.
    pub fn append_line(&self, line: &str) -> io::Result<()> {
        let mut handle = self
            .handle
            .lock()
            .map_err(|e| io::Error::other(format!("trace file lock poisoned: {e}")))?;

        if self.is_full() {
            *handle = None;
            self.rotate()?;
        }

        let file = match handle.take() {
            Some(file) => file,
            None => OpenOptions::new().create(true).append(true).open(&self.path)?,
        };
        let file = handle.insert(file);

        writeln!(file, "{line}")?;
        file.flush()
    }

    fn is_full(&self) -> bool {
        fs::metadata(&self.path).is_ok_and(|meta| meta.len() >= self.policy.max_bytes)
    }

    /// Shifts `path.N` to `path.N+1`, dropping the last, then moves the
    /// live file to `path.1`.
    fn rotate(&self) -> io::Result<()> {
        if self.policy.max_backups == 0 {
            return fs::remove_file(&self.path);
        }

        let oldest = backup_path(&self.path, self.policy.max_backups);
        if oldest.exists() {
            fs::remove_file(&oldest)?;
        }

        for n in (1..self.policy.max_backups).rev() {
            let from = backup_path(&self.path, n);
            if from.exists() {
                fs::rename(&from, backup_path(&self.path, n + 1))?;
            }
        }

        fs::rename(&self.path, backup_path(&self.path, 1))
    }
}

fn backup_path(path: &Path, n: usize) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(format!(".{n}"));
    PathBuf::from(name)
}

impl std::fmt::Debug for RotatingFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RotatingFile")
            .field("path", &self.path)
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_policy() -> RotationPolicy {
        RotationPolicy {
            max_bytes: 16,
            max_backups: 2,
        }
    }

    #[test]
    fn appends_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("trace.json");
        let file = RotatingFile::new(path.clone(), RotationPolicy::default());

        file.append_line("{\"a\":1}").unwrap();
        file.append_line("{\"b\":2}").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "{\"a\":1}\n{\"b\":2}\n");
    }

    #[test]
    fn rotates_into_numbered_backups() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("trace.json");
        let file = RotatingFile::new(path.clone(), small_policy());

        file.append_line("first line over 16").unwrap();
        file.append_line("second line over 16").unwrap();
        file.append_line("third").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "third\n");
        assert_eq!(
            fs::read_to_string(backup_path(&path, 1)).unwrap(),
            "second line over 16\n"
        );
        assert_eq!(
            fs::read_to_string(backup_path(&path, 2)).unwrap(),
            "first line over 16\n"
        );
    }

    #[test]
    fn drops_backups_beyond_retention() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("trace.json");
        let file = RotatingFile::new(path.clone(), small_policy());

        for n in 0..5 {
            file.append_line(&format!("line number {n} is long")).unwrap();
        }

        assert!(backup_path(&path, 2).exists());
        assert!(!backup_path(&path, 3).exists());
        assert_eq!(
            fs::read_to_string(backup_path(&path, 2)).unwrap(),
            "line number 2 is long\n"
        );
    }

    #[test]
    fn backup_names_append_a_counter() {
        assert_eq!(
            backup_path(Path::new("/data/menuboard-otlp.json"), 3),
            PathBuf::from("/data/menuboard-otlp.json.3")
        );
    }
}
