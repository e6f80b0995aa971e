use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use tokio::{fs::OpenOptions, io::AsyncWriteExt};
use utils::{
    path::DEFAULT_VALUES_DIR,
    suffix::{SeededSuffixGenerator, SuffixGenerator},
};

/// Length of the random component of every stored file name.
pub const SUFFIX_LEN: usize = 10;

#[derive(Debug, thiserror::Error)]
pub enum ValuesError {
    #[error("Failed to write values file {path:?}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Persists caller supplied values files under a single directory.
///
/// Files are never tracked or cleaned up once written.
#[derive(Clone)]
pub struct ValuesService {
    values_dir: PathBuf,
    suffixes: Arc<dyn SuffixGenerator>,
}

impl ValuesService {
    pub fn new(values_dir: impl Into<PathBuf>, suffixes: Arc<dyn SuffixGenerator>) -> Self {
        Self {
            values_dir: values_dir.into(),
            suffixes,
        }
    }

    /// `/tmp` with a generator seeded from the clock.
    pub fn default_location() -> Self {
        Self::new(
            DEFAULT_VALUES_DIR,
            Arc::new(SeededSuffixGenerator::from_time()),
        )
    }

    /// Writes `data` verbatim to a freshly named file and returns its path.
    pub async fn store_values(&self, data: &str) -> Result<PathBuf, ValuesError> {
        let path = self.values_dir.join(self.suffixes.generate(SUFFIX_LEN));
        write_file(&path, data.as_bytes())
            .await
            .map_err(|source| ValuesError::Write {
                path: path.clone(),
                source,
            })?;

        tracing::debug!("Wrote {} bytes to {:?}", data.len(), path);
        Ok(path)
    }
}

async fn write_file(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .mode(0o644)
        .open(path)
        .await?;
    file.write_all(bytes).await?;
    file.flush().await
}
