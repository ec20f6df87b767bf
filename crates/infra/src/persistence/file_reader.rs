use std::{
    fs::File,
    io::{self, BufReader, Read},
    path::Path,
};

use ordstats_shared_kernel::{InfraResult, InfrastructureError};

/// Convenience helpers for reading files with consistent error handling.
pub struct FileReader;

impl FileReader {
    /// Open the file at `path`.
    pub fn open(path: &Path) -> io::Result<File> {
        File::open(path)
    }

    /// Open the file at `path` with buffered reading.
    pub fn open_buffered(path: &Path) -> io::Result<BufReader<File>> {
        Self::open(path).map(BufReader::new)
    }

    /// Read the whole file as UTF-8 text.
    ///
    /// A missing path (or one that is not a regular file) is reported as
    /// [`InfrastructureError::FileNotFound`].
    pub fn read_text(path: &Path) -> InfraResult<String> {
        if !path.is_file() {
            return Err(InfrastructureError::FileNotFound { path: path.to_path_buf() });
        }
        let mut file = Self::open_buffered(path).map_err(|source| read_error(path, source))?;
        let mut text = String::new();
        file.read_to_string(&mut text).map_err(|source| read_error(path, source))?;
        Ok(text)
    }
}

fn read_error(path: &Path, source: io::Error) -> InfrastructureError {
    if source.kind() == io::ErrorKind::NotFound {
        InfrastructureError::FileNotFound { path: path.to_path_buf() }
    } else {
        InfrastructureError::FileRead { path: path.to_path_buf(), source }
    }
}
