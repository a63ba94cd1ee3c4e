//! # Resource Fetching
//!
//! Where layout text comes from. A fetcher turns a resource name into raw text
//! or a fetch-specific error, either blocking or as a future.
//!
//! - [`DirectoryFetcher`] reads files under a root directory (native builds).
//! - [`EmbeddedFetcher`] serves text held in memory, including the layouts
//!   compiled into the binary, for targets without filesystem access.

use crate::{MatchError, MatchResult};
use std::collections::HashMap;
use std::fs;
use std::future::Future;
use std::io;
use std::path::PathBuf;

const BUNDLED_EASY: &str = include_str!("../../assets/layouts/gameConfig.json");
const BUNDLED_MEDIUM: &str = include_str!("../../assets/layouts/gameConfig_3x4.json");
const BUNDLED_HARD: &str = include_str!("../../assets/layouts/gameConfig_4x5.json");

/// A source of named text resources.
pub trait ResourceFetcher: Send + Sync {
    /// Reads `name`, blocking the caller.
    fn fetch(&self, name: &str) -> MatchResult<String>;

    /// Reads `name` without blocking the runtime.
    fn fetch_async(&self, name: &str) -> impl Future<Output = MatchResult<String>> + Send;

    /// Human-readable location of `name`, used in diagnostics.
    fn locate(&self, name: &str) -> String {
        name.to_string()
    }
}

fn map_io_error(location: String, error: io::Error) -> MatchError {
    if error.kind() == io::ErrorKind::NotFound {
        MatchError::ResourceNotFound(location)
    } else {
        MatchError::Fetch {
            resource: location,
            reason: error.to_string(),
        }
    }
}

/// Reads resources from files under a root directory.
///
/// # Examples
///
/// ```
/// use memory_match::{DirectoryFetcher, ResourceFetcher};
///
/// let fetcher = DirectoryFetcher::new("assets/layouts");
/// assert!(fetcher.locate("gameConfig.json").ends_with("gameConfig.json"));
/// ```
#[derive(Debug, Clone)]
pub struct DirectoryFetcher {
    root: PathBuf,
}

impl DirectoryFetcher {
    /// Creates a fetcher rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Full path of `name`.
    pub fn path_for(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }
}

impl ResourceFetcher for DirectoryFetcher {
    fn fetch(&self, name: &str) -> MatchResult<String> {
        let path = self.path_for(name);
        fs::read_to_string(&path).map_err(|e| map_io_error(path.display().to_string(), e))
    }

    async fn fetch_async(&self, name: &str) -> MatchResult<String> {
        let path = self.path_for(name);
        tokio::fs::read_to_string(&path)
            .await
            .map_err(|e| map_io_error(path.display().to_string(), e))
    }

    fn locate(&self, name: &str) -> String {
        self.path_for(name).display().to_string()
    }
}

/// Serves resources from memory.
#[derive(Debug, Clone, Default)]
pub struct EmbeddedFetcher {
    resources: HashMap<String, String>,
}

impl EmbeddedFetcher {
    /// Creates an empty fetcher.
    pub fn new() -> Self {
        Self::default()
    }

    /// The layouts compiled into the binary, one per difficulty.
    pub fn bundled() -> Self {
        Self::new()
            .with_resource("gameConfig.json", BUNDLED_EASY)
            .with_resource("gameConfig_3x4.json", BUNDLED_MEDIUM)
            .with_resource("gameConfig_4x5.json", BUNDLED_HARD)
    }

    /// Adds or replaces a resource.
    pub fn with_resource(mut self, name: impl Into<String>, text: impl Into<String>) -> Self {
        self.resources.insert(name.into(), text.into());
        self
    }

    /// Names of all held resources, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.resources.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl ResourceFetcher for EmbeddedFetcher {
    fn fetch(&self, name: &str) -> MatchResult<String> {
        self.resources
            .get(name)
            .cloned()
            .ok_or_else(|| MatchError::ResourceNotFound(self.locate(name)))
    }

    async fn fetch_async(&self, name: &str) -> MatchResult<String> {
        self.fetch(name)
    }

    fn locate(&self, name: &str) -> String {
        format!("embedded:{}", name)
    }
}
