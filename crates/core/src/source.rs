//! Source provider abstraction for filesystem-independent conversion.
//!
//! The [`SourceProvider`] trait abstracts reading the input document and
//! writing the converted text, so the pipeline can be driven from memory
//! in tests.

use std::cell::RefCell;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Trait that abstracts file I/O for the conversion pipeline.
pub trait SourceProvider {
    /// Read the source text for a given path.
    fn read_source(&self, path: &Path) -> Result<String, std::io::Error>;

    /// Write the converted text to a given path, replacing any previous content.
    fn write_output(&self, path: &Path, content: &str) -> Result<(), std::io::Error>;
}

/// Default filesystem-backed source provider.
pub struct FileSystemProvider;

impl SourceProvider for FileSystemProvider {
    fn read_source(&self, path: &Path) -> Result<String, std::io::Error> {
        std::fs::read_to_string(path)
    }

    fn write_output(&self, path: &Path, content: &str) -> Result<(), std::io::Error> {
        std::fs::write(path, content)
    }
}

/// In-memory source provider for testing.
///
/// Maps paths to text. Writes land in the same map and can be read back.
#[derive(Default)]
pub struct InMemoryProvider {
    files: RefCell<HashMap<PathBuf, String>>,
}

impl InMemoryProvider {
    /// Create a new in-memory provider from a map of paths to text.
    pub fn new(files: HashMap<PathBuf, String>) -> Self {
        Self {
            files: RefCell::new(files),
        }
    }

    /// Current content stored at `path`, if any.
    pub fn get(&self, path: &Path) -> Option<String> {
        self.files.borrow().get(path).cloned()
    }
}

impl SourceProvider for InMemoryProvider {
    fn read_source(&self, path: &Path) -> Result<String, std::io::Error> {
        self.get(path).ok_or_else(|| {
            std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("file not found in memory: {}", path.display()),
            )
        })
    }

    fn write_output(&self, path: &Path, content: &str) -> Result<(), std::io::Error> {
        self.files
            .borrow_mut()
            .insert(path.to_path_buf(), content.to_owned());
        Ok(())
    }
}

/// Where the converted text for `input` goes by default:
/// the input path with `.converted.txt` appended.
pub fn output_path_for(input: &Path) -> PathBuf {
    let mut name = input.as_os_str().to_owned();
    name.push(".converted.txt");
    PathBuf::from(name)
}
