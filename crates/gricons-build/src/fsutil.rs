//! Small async filesystem helpers shared by the pipeline steps

use std::path::Path;

use crate::error::Result;

/// Clear `dir` and recreate it empty.
///
/// A missing directory is not an error; anything else aborts the build.
///
/// # Errors
///
/// Returns an error if the directory cannot be removed or recreated.
pub async fn reset_dir(dir: &Path) -> Result<()> {
    match tokio::fs::remove_dir_all(dir).await {
        Ok(()) => {}
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
        Err(e) => return Err(e.into()),
    }
    tokio::fs::create_dir_all(dir).await?;
    Ok(())
}

/// Copy every regular file in `from` (non-recursive) into `to`.
///
/// # Errors
///
/// Returns an error if either directory cannot be read or a copy fails.
pub async fn copy_files(from: &Path, to: &Path) -> Result<()> {
    tokio::fs::create_dir_all(to).await?;
    let mut entries = tokio::fs::read_dir(from).await?;
    while let Some(entry) = entries.next_entry().await? {
        if entry.file_type().await?.is_file() {
            tokio::fs::copy(entry.path(), to.join(entry.file_name())).await?;
        }
    }
    Ok(())
}
