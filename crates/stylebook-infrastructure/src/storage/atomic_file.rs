//! Atomic file writes with an exclusive lock.
//!
//! Provides:
//! - **Atomicity**: writes go to a temp file that is renamed over the target
//! - **Isolation**: a sibling `.lock` file serializes writers and
//!   read-modify-write updates
//! - **Durability**: explicit fsync before rename

use std::fs::{self, File, OpenOptions};
use std::io::Write as IoWrite;
use std::path::{Path, PathBuf};

use fs2::FileExt;
use stylebook_core::error::{Result, StylebookError};

/// Reads a file, `None` if it does not exist.
pub fn read_optional(path: &Path) -> Result<Option<String>> {
    match fs::read_to_string(path) {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// Replaces the contents of `path` atomically.
pub fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let _lock = FileLock::acquire(path)?;
    replace_contents(path, contents)
}

/// Read-modify-write of `path` under the exclusive lock.
///
/// `f` receives the current contents (`None` when the file does not exist)
/// and returns the replacement. No other locked writer can interleave
/// between the read and the write.
pub fn update_atomic<F>(path: &Path, f: F) -> Result<()>
where
    F: FnOnce(Option<String>) -> Result<String>,
{
    let _lock = FileLock::acquire(path)?;
    let updated = f(read_optional(path)?)?;
    replace_contents(path, &updated)
}

/// Removes `path`; a missing file is not an error.
pub fn remove_if_exists(path: &Path) -> Result<()> {
    let _lock = FileLock::acquire(path)?;
    match fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e.into()),
    }
}

/// Writes through a temp file and renames it over `path`. Caller holds the lock.
fn replace_contents(path: &Path, contents: &str) -> Result<()> {
    let tmp_path = temp_path(path)?;
    let mut tmp_file = File::create(&tmp_path)?;
    tmp_file.write_all(contents.as_bytes())?;
    tmp_file.sync_all()?;
    drop(tmp_file);

    fs::rename(&tmp_path, path)?;
    Ok(())
}

fn temp_path(path: &Path) -> Result<PathBuf> {
    let parent = path
        .parent()
        .ok_or_else(|| StylebookError::io("Path has no parent directory"))?;
    let file_name = path
        .file_name()
        .ok_or_else(|| StylebookError::io("Path has no file name"))?;
    Ok(parent.join(format!(".{}.tmp", file_name.to_string_lossy())))
}

/// Exclusive lock guard, released on drop.
///
/// The `.lock` file outlives the guard so every caller locks the same inode.
struct FileLock {
    file: File,
}

impl FileLock {
    fn acquire(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let lock_path = path.with_extension("lock");
        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(false)
            .open(&lock_path)?;

        FileExt::lock_exclusive(&file)
            .map_err(|e| StylebookError::io(format!("Failed to acquire lock: {}", e)))?;

        Ok(Self { file })
    }
}

impl Drop for FileLock {
    fn drop(&mut self) {
        let _ = FileExt::unlock(&self.file);
    }
}
