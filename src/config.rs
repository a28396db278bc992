use std::path::{Path, PathBuf};
use anyhow::Result;

/// Start page loaded into the URL field on startup and after every
/// successful submit.
pub const DEFAULT_START_URL: &str = "https://www.themoviedb.org?language=en-US";

/// Where the tool reads from and writes to. Built once in `main` and passed
/// down; core modules never consult the process environment themselves.
#[derive(Debug, Clone)]
pub struct LibraryConfig {
    pub inputs_dir: PathBuf,
    pub movies_dir: PathBuf,
    pub start_url: String,
}

pub struct ConfigBuilder {
    root: Option<PathBuf>,
    inputs_dir: Option<PathBuf>,
    movies_dir: Option<PathBuf>,
    start_url: Option<String>,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self {
            root: None,
            inputs_dir: None,
            movies_dir: None,
            start_url: None,
        }
    }

    /// Library root; `inputs/` and `movies/` default to subdirectories of it.
    pub fn root<P: AsRef<Path>>(mut self, root: P) -> Self {
        self.root = Some(root.as_ref().to_path_buf());
        self
    }

    pub fn inputs_dir<P: AsRef<Path>>(mut self, dir: P) -> Self {
        self.inputs_dir = Some(dir.as_ref().to_path_buf());
        self
    }

    pub fn movies_dir<P: AsRef<Path>>(mut self, dir: P) -> Self {
        self.movies_dir = Some(dir.as_ref().to_path_buf());
        self
    }

    pub fn start_url(mut self, url: Option<String>) -> Self {
        self.start_url = url;
        self
    }

    pub fn build(self) -> Result<LibraryConfig> {
        let root = match self.root {
            Some(root) => root,
            None => std::env::current_dir()?,
        };

        Ok(LibraryConfig {
            inputs_dir: self.inputs_dir.unwrap_or_else(|| root.join("inputs")),
            movies_dir: self.movies_dir.unwrap_or_else(|| root.join("movies")),
            start_url: self
                .start_url
                .unwrap_or_else(|| DEFAULT_START_URL.to_string()),
        })
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_hang_off_root() {
        let config = ConfigBuilder::new().root("/library").build().unwrap();
        assert_eq!(config.inputs_dir, PathBuf::from("/library/inputs"));
        assert_eq!(config.movies_dir, PathBuf::from("/library/movies"));
        assert_eq!(config.start_url, DEFAULT_START_URL);
    }

    #[test]
    fn test_explicit_dirs_win_over_root() {
        let config = ConfigBuilder::new()
            .root("/library")
            .movies_dir("/mnt/shelf")
            .start_url(Some("https://example.test".to_string()))
            .build()
            .unwrap();
        assert_eq!(config.inputs_dir, PathBuf::from("/library/inputs"));
        assert_eq!(config.movies_dir, PathBuf::from("/mnt/shelf"));
        assert_eq!(config.start_url, "https://example.test");
    }
}
