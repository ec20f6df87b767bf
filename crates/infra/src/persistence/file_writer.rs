// crates/infra/src/persistence/file_writer.rs
use std::{
    fs::{self, File},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use ordstats_shared_kernel::{InfraResult, InfrastructureError};

/// Helper utilities for writing files.
pub struct FileWriter;

impl FileWriter {
    /// Create a buffered writer targeting `path`.
    pub fn create<P: AsRef<Path>>(path: P) -> std::io::Result<BufWriter<File>> {
        File::create(path.as_ref()).map(BufWriter::new)
    }

    /// Atomically write `data` to `path` via a temp file and rename.
    pub fn atomic_write<P: AsRef<Path>>(path: P, data: &[u8]) -> InfraResult<()> {
        let path = path.as_ref();
        let write_error = |source: std::io::Error| InfrastructureError::FileWrite { path: path.to_path_buf(), source };

        let tmp = temp_path_for(path);
        if let Err(source) = write_synced(&tmp, data) {
            let _ = fs::remove_file(&tmp);
            return Err(write_error(source));
        }
        if let Err(source) = fs::rename(&tmp, path) {
            let _ = fs::remove_file(&tmp);
            return Err(write_error(source));
        }

        #[cfg(unix)]
        {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty())
                && let Ok(dir) = File::open(parent)
            {
                let _ = dir.sync_all();
            }
        }

        Ok(())
    }
}

// Same directory as the target so the rename never crosses filesystems.
fn temp_path_for(path: &Path) -> PathBuf {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    let name = format!(".{}.{}.tmp", std::process::id(), nanos);
    match path.parent() {
        Some(parent) => parent.join(name),
        None => PathBuf::from(name),
    }
}

fn write_synced(tmp: &Path, data: &[u8]) -> std::io::Result<()> {
    let mut w = FileWriter::create(tmp)?;
    w.write_all(data)?;
    w.flush()?;
    let _ = w.get_ref().sync_all();
    Ok(())
}
