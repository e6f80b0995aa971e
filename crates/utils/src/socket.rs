use std::{io, path::Path};

use tokio::{fs, net::UnixListener};

/// Clears whatever occupies `path` so a fresh socket can be bound there.
///
/// Assumes a single instance per path: a socket still owned by a live process
/// is removed just like a stale one.
pub async fn remove_stale_socket(path: &Path) -> io::Result<()> {
    match fs::symlink_metadata(path).await {
        Ok(metadata) if metadata.is_dir() => {
            tracing::warn!("Removing directory found at socket path {:?}", path);
            fs::remove_dir_all(path).await
        }
        Ok(_) => {
            tracing::debug!("Removing stale socket file {:?}", path);
            fs::remove_file(path).await
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e),
    }
}

/// Binds a unix domain socket at `path`, replacing any leftover file and
/// creating missing parent directories.
pub async fn bind_unix_listener(path: &Path) -> io::Result<UnixListener> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).await?;
    }
    remove_stale_socket(path).await?;
    UnixListener::bind(path)
}
