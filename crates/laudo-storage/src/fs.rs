use std::path::Path;

use crate::error::StorageError;

/// Write `bytes` to `path` via a sibling temp file and rename, so readers
/// never observe a partially written file. Creates parent directories.
pub fn write_atomic(path: &Path, bytes: &[u8]) -> Result<(), StorageError> {
    if let Some(dir) = path.parent()
        && !dir.as_os_str().is_empty()
    {
        std::fs::create_dir_all(dir).map_err(|e| StorageError::io(dir, e))?;
    }

    let mut tmp_name = path.file_name().unwrap_or_default().to_os_string();
    tmp_name.push(".tmp");
    let tmp_path = path.with_file_name(tmp_name);

    std::fs::write(&tmp_path, bytes).map_err(|e| StorageError::io(&tmp_path, e))?;

    // Reports hold patient data: owner-only on Unix.
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(&tmp_path, std::fs::Permissions::from_mode(0o600))
            .map_err(|e| StorageError::io(&tmp_path, e))?;
    }

    std::fs::rename(&tmp_path, path).map_err(|e| StorageError::io(path, e))
}

/// Read a file, treating "does not exist" as `None`.
pub fn read_optional(path: &Path) -> Result<Option<String>, StorageError> {
    match std::fs::read_to_string(path) {
        Ok(contents) => Ok(Some(contents)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(StorageError::io(path, e)),
    }
}
