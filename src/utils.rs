use crate::error::DwdError;
use crate::types::dataset_key::DatasetKey;
use log::{debug, info};
use std::io;
use std::path::{Path, PathBuf};

const DATA_DIR_NAME: &str = "dwd_index";

/// Default folder for locally stored indexes, `<user cache dir>/dwd_index`.
pub fn get_data_dir() -> Result<PathBuf, DwdError> {
    dirs::cache_dir()
        .ok_or(DwdError::DataDirResolution)
        .map(|p| p.join(DATA_DIR_NAME))
}

/// Strips trailing slashes, keeping a lone `/`.
pub fn correct_folder_path(folder: &str) -> &str {
    let trimmed = folder.trim_end_matches('/');
    if trimmed.is_empty() && folder.starts_with('/') {
        "/"
    } else {
        trimmed
    }
}

/// Creates `folder/subfolder` (and its parents) unless it already is a directory.
pub async fn create_folder(subfolder: &str, folder: &Path) -> Result<PathBuf, DwdError> {
    let path = folder.join(correct_folder_path(subfolder));
    match tokio::fs::metadata(&path).await {
        Ok(metadata) if metadata.is_dir() => Ok(path),
        Ok(_) => Err(DwdError::FolderCreation(
            path,
            io::Error::new(io::ErrorKind::AlreadyExists, "path exists but is not a directory"),
        )),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            info!("Creating folder: {}", path.display());
            tokio::fs::create_dir_all(&path)
                .await
                .map_err(|e| DwdError::FolderCreation(path.clone(), e))?;
            Ok(path)
        }
        Err(e) => Err(DwdError::FolderCreation(path, e)),
    }
}

/// Removes the stored index file of `key`, if any. Failures are only logged.
pub async fn remove_old_file(
    file_type: &str,
    key: DatasetKey,
    file_postfix: &str,
    folder: &Path,
    subfolder: &str,
) {
    let path = folder
        .join(correct_folder_path(subfolder))
        .join(key.local_file_name(file_type, file_postfix));
    match tokio::fs::remove_file(&path).await {
        Ok(()) => info!("Removed old file {}", path.display()),
        Err(e) => debug!("Nothing removed at {}: {}", path.display(), e),
    }
}
