use crate::domain::ports::MapStore;
use crate::utils::error::{MapError, Result};
use std::cell::{Cell, RefCell};
use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::{Path, PathBuf};

/// Map persisted as a plain text file.
#[derive(Debug, Clone)]
pub struct FileMapStore {
    path: PathBuf,
}

impl FileMapStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn unavailable(&self, source: std::io::Error) -> MapError {
        MapError::SourceUnavailable {
            path: self.path.display().to_string(),
            source,
        }
    }
}

impl MapStore for FileMapStore {
    fn location(&self) -> String {
        self.path.display().to_string()
    }

    fn read_map(&self) -> Result<String> {
        let mut file = File::open(&self.path).map_err(|e| self.unavailable(e))?;
        let mut content = String::new();
        file.read_to_string(&mut content)?;
        Ok(content)
    }

    fn write_map(&self, contents: &str) -> Result<()> {
        // Truncates on open; nothing is touched if the open fails.
        let file = File::create(&self.path).map_err(|e| self.unavailable(e))?;
        let mut writer = BufWriter::new(file);
        writer.write_all(contents.as_bytes())?;
        writer.flush()?;
        Ok(())
    }
}

/// In-memory map, mainly for tests. Counts writes and can refuse reads or writes.
#[derive(Debug, Default)]
pub struct MemoryMapStore {
    contents: RefCell<String>,
    writes: Cell<usize>,
    readable: bool,
    writable: bool,
}

impl MemoryMapStore {
    pub fn new(contents: &str) -> Self {
        Self {
            contents: RefCell::new(contents.to_string()),
            writes: Cell::new(0),
            readable: true,
            writable: true,
        }
    }

    pub fn unavailable() -> Self {
        Self {
            readable: false,
            writable: false,
            ..Self::default()
        }
    }

    pub fn read_only(mut self) -> Self {
        self.writable = false;
        self
    }

    pub fn contents(&self) -> String {
        self.contents.borrow().clone()
    }

    pub fn write_count(&self) -> usize {
        self.writes.get()
    }

    fn refused(&self) -> MapError {
        MapError::SourceUnavailable {
            path: self.location(),
            source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
        }
    }
}

impl MapStore for MemoryMapStore {
    fn location(&self) -> String {
        "<memory>".to_string()
    }

    fn read_map(&self) -> Result<String> {
        if !self.readable {
            return Err(self.refused());
        }
        Ok(self.contents())
    }

    fn write_map(&self, contents: &str) -> Result<()> {
        if !self.writable {
            return Err(self.refused());
        }
        *self.contents.borrow_mut() = contents.to_string();
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }
}
