//! Whole-file writes that either replace the target completely or leave it
//! alone.
//!
//! Content goes to a uniquely named `.tmp` file next to the target, which is
//! then renamed over it. A write that fails halfway only ever damages the
//! temporary file, and that is removed again.

use crate::error::{RolodexError, Result};
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use uuid::Uuid;

pub fn write_atomic(path: &Path, contents: &[u8]) -> Result<()> {
    write_atomic_with(path, |file| file.write_all(contents))
}

/// Let `fill` write the new content; the target is only touched by the final
/// rename.
pub(crate) fn write_atomic_with<F>(path: &Path, fill: F) -> Result<()>
where
    F: FnOnce(&mut File) -> io::Result<()>,
{
    let tmp = tmp_path(path);
    let written = File::create(&tmp).and_then(|mut file| {
        fill(&mut file)?;
        file.sync_all()
    });

    if let Err(e) = written.and_then(|()| fs::rename(&tmp, path)) {
        // Nothing useful to report if the leftover cannot be removed either.
        let _ = fs::remove_file(&tmp);
        return Err(RolodexError::io(path, e));
    }
    Ok(())
}

fn tmp_path(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let tmp = format!(".{}-{}.tmp", name, Uuid::new_v4());
    match path.parent() {
        Some(parent) => parent.join(tmp),
        None => PathBuf::from(tmp),
    }
}
