use std::io;
use std::path::Path;

/// Filesystem operations the build needs, kept narrow so steps can run against a fake.
#[async_trait::async_trait]
pub trait BuildFs: Send + Sync {
    /// `Ok(false)` only when the path is missing. Any other failure is an error.
    async fn exists(&self, path: &Path) -> io::Result<bool>;

    async fn remove_dir_all(&self, path: &Path) -> io::Result<()>;

    async fn create_dir_all(&self, path: &Path) -> io::Result<()>;

    /// Creates or truncates `path` and returns once the contents are written and the file closed.
    async fn write(&self, path: &Path, contents: &[u8]) -> io::Result<()>;

    async fn copy(&self, from: &Path, to: &Path) -> io::Result<u64>;
}
