//! Filesystem checks for path-valued options.
//!
//! Both validators follow symlinks and return the path unchanged on success.
//! Readability is checked by actually listing or opening the target, so the
//! answer reflects the current process's permissions.

use std::fs;

use petclass_common::InvalidArgument;
use tracing::debug;

/// Accept `path` only if it names an existing directory whose entries can be listed.
pub fn validate_directory(path: &str) -> Result<String, InvalidArgument> {
    let is_dir = fs::metadata(path).map(|m| m.is_dir()).unwrap_or(false);
    if !is_dir {
        return Err(InvalidArgument::not_a_directory(path));
    }

    if let Err(e) = fs::read_dir(path) {
        debug!(path, error = %e, "directory is not readable");
        return Err(InvalidArgument::directory_not_readable(path));
    }

    debug!(path, "validated directory");
    Ok(path.to_string())
}

/// Accept `path` only if it names an existing regular file that can be opened for reading.
pub fn validate_file(path: &str) -> Result<String, InvalidArgument> {
    let is_file = fs::metadata(path).map(|m| m.is_file()).unwrap_or(false);
    if !is_file {
        return Err(InvalidArgument::not_a_file(path));
    }

    if let Err(e) = fs::File::open(path) {
        debug!(path, error = %e, "file is not readable");
        return Err(InvalidArgument::file_not_readable(path));
    }

    debug!(path, "validated file");
    Ok(path.to_string())
}
