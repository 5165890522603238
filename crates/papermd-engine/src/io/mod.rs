use std::fs;
use std::io::{self as stdio, Read, Write};
use std::path::{Path, PathBuf};

use crate::page::{Asset, PageError};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Asset(#[from] PageError),
}

/// Read a file, or standard input when no path is given
pub fn read_input(path: Option<&Path>) -> Result<String, IoError> {
    match path {
        Some(path) => read_file(path),
        None => {
            let mut content = String::new();
            stdio::stdin().read_to_string(&mut content)?;
            Ok(content)
        }
    }
}

pub fn read_file(path: &Path) -> Result<String, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    fs::read_to_string(path).map_err(IoError::Io)
}

/// Write content to a file, or standard output when no path is given
pub fn write_output(path: Option<&Path>, content: &str) -> Result<(), IoError> {
    match path {
        Some(path) => {
            // Create parent directories if they don't exist
            if let Some(parent) = path.parent()
                && !parent.as_os_str().is_empty()
            {
                fs::create_dir_all(parent)?;
            }
            fs::write(path, content)?;
            log::info!("Wrote {}", path.display());
            Ok(())
        }
        None => {
            let mut stdout = stdio::stdout().lock();
            stdout.write_all(content.as_bytes())?;
            stdout.flush()?;
            Ok(())
        }
    }
}

/// Load a stylesheet or script to inline into the page head
pub fn load_asset(path: &Path) -> Result<Asset, IoError> {
    let contents = read_file(path)?;
    Ok(Asset::new(&path.to_string_lossy(), contents)?)
}
