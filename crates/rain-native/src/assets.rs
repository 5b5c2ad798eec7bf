use rain_core::{join_url, AssetSource, LoadError};
use std::io::ErrorKind;
use std::path::PathBuf;

/// Reads resource urls relative to a directory on disk.
pub struct DirSource {
    root: PathBuf,
}

impl DirSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl AssetSource for DirSource {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, LoadError> {
        let path = self.root.join(url.trim_start_matches('/'));
        std::fs::read(&path).map_err(|e| {
            let url = join_url(&self.root.to_string_lossy(), url);
            match e.kind() {
                ErrorKind::NotFound => LoadError::NotFound { url },
                _ => LoadError::Fetch {
                    url,
                    reason: e.to_string(),
                },
            }
        })
    }
}
