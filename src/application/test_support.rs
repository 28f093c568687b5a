use std::collections::{BTreeMap, BTreeSet};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use error_stack::report;

use crate::domain::sheets::sheet_range::SheetRange;
use crate::ports::build_fs::BuildFs;
use crate::ports::row_source::{RowSource, RowSourceError};

pub fn rows(rows: &[&[&str]]) -> Vec<Vec<String>> {
    rows.iter()
        .map(|row| row.iter().map(|cell| cell.to_string()).collect())
        .collect()
}

pub struct FakeRowSource {
    rows: Option<Vec<Vec<String>>>,
    requested: Mutex<Vec<SheetRange>>,
}

impl FakeRowSource {
    pub fn with_rows(cells: &[&[&str]]) -> Self {
        FakeRowSource {
            rows: Some(rows(cells)),
            requested: Mutex::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        FakeRowSource {
            rows: None,
            requested: Mutex::new(Vec::new()),
        }
    }

    pub fn requested_ranges(&self) -> Vec<SheetRange> {
        self.requested.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl RowSource for FakeRowSource {
    async fn read_rows(
        &self,
        range: SheetRange,
    ) -> error_stack::Result<Vec<Vec<String>>, RowSourceError> {
        self.requested.lock().unwrap().push(range);
        self.rows
            .clone()
            .ok_or_else(|| report!(RowSourceError::ReadRange(range.to_string())))
    }
}

#[derive(Default)]
struct MemoryFsState {
    dirs: BTreeSet<PathBuf>,
    files: BTreeMap<PathBuf, Vec<u8>>,
    locked: BTreeSet<PathBuf>,
}

impl MemoryFsState {
    fn parent_exists(&self, path: &Path) -> bool {
        match path.parent() {
            Some(parent) if parent.as_os_str().is_empty() => true,
            Some(parent) => self.dirs.contains(parent),
            None => true,
        }
    }
}

/// In-memory [`BuildFs`] with POSIX-like failure modes for missing parents and sources.
#[derive(Default)]
pub struct MemoryFs {
    state: Mutex<MemoryFsState>,
}

fn not_found(path: &Path) -> io::Error {
    io::Error::new(
        io::ErrorKind::NotFound,
        format!("{} not found", path.display()),
    )
}

impl MemoryFs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_file(&self, path: impl AsRef<Path>, contents: &[u8]) {
        let path = path.as_ref();
        let mut state = self.state.lock().unwrap();
        let mut ancestor = path.parent();
        while let Some(dir) = ancestor.filter(|dir| !dir.as_os_str().is_empty()) {
            state.dirs.insert(dir.to_path_buf());
            ancestor = dir.parent();
        }
        state.files.insert(path.to_path_buf(), contents.to_vec());
    }

    /// Makes removal of `path` fail with `PermissionDenied`.
    pub fn lock(&self, path: impl AsRef<Path>) {
        self.state
            .lock()
            .unwrap()
            .locked
            .insert(path.as_ref().to_path_buf());
    }

    pub fn is_dir(&self, path: impl AsRef<Path>) -> bool {
        self.state.lock().unwrap().dirs.contains(path.as_ref())
    }

    pub fn read_to_string(&self, path: impl AsRef<Path>) -> Option<String> {
        self.state
            .lock()
            .unwrap()
            .files
            .get(path.as_ref())
            .map(|contents| String::from_utf8_lossy(contents).into_owned())
    }

    pub fn files_under(&self, dir: impl AsRef<Path>) -> Vec<PathBuf> {
        let dir = dir.as_ref();
        self.state
            .lock()
            .unwrap()
            .files
            .keys()
            .filter(|path| path.starts_with(dir))
            .cloned()
            .collect()
    }
}

#[async_trait::async_trait]
impl BuildFs for MemoryFs {
    async fn exists(&self, path: &Path) -> io::Result<bool> {
        let state = self.state.lock().unwrap();
        Ok(state.dirs.contains(path) || state.files.contains_key(path))
    }

    async fn remove_dir_all(&self, path: &Path) -> io::Result<()> {
        let mut state = self.state.lock().unwrap();
        if state.locked.contains(path) {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                format!("{} is locked", path.display()),
            ));
        }
        if !state.dirs.contains(path) {
            return Err(not_found(path));
        }
        state.dirs.retain(|dir| !dir.starts_with(path));
        state.files.retain(|file, _| !file.starts_with(path));
        Ok(())
    }

    async fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        let mut state = self.state.lock().unwrap();
        let mut current = Some(path);
        while let Some(dir) = current.filter(|dir| !dir.as_os_str().is_empty()) {
            state.dirs.insert(dir.to_path_buf());
            current = dir.parent();
        }
        Ok(())
    }

    async fn write(&self, path: &Path, contents: &[u8]) -> io::Result<()> {
        let mut state = self.state.lock().unwrap();
        if !state.parent_exists(path) {
            return Err(not_found(path));
        }
        state.files.insert(path.to_path_buf(), contents.to_vec());
        Ok(())
    }

    async fn copy(&self, from: &Path, to: &Path) -> io::Result<u64> {
        let mut state = self.state.lock().unwrap();
        let contents = state.files.get(from).cloned().ok_or_else(|| not_found(from))?;
        if !state.parent_exists(to) {
            return Err(not_found(to));
        }
        let len = contents.len() as u64;
        state.files.insert(to.to_path_buf(), contents);
        Ok(len)
    }
}
