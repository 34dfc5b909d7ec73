//! Centralized filesystem operations for better testability.
//!
//! Config loading and artifact writing go through the `FileSystem` trait so
//! the pipeline can run against an in-memory filesystem in tests.

use std::io;
use std::path::Path;

/// Trait for filesystem operations, enabling dependency injection and testing.
pub trait FileSystem: Send + Sync {
    /// Read the entire contents of a file as a string.
    fn read_to_string(&self, path: &Path) -> io::Result<String>;

    /// Write content to a file, creating it if it doesn't exist.
    fn write(&self, path: &Path, content: &str) -> io::Result<()>;

    /// Check if a path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Create a directory and all of its missing parents.
    fn create_dir_all(&self, path: &Path) -> io::Result<()>;
}

/// Real filesystem implementation using std::fs.
#[derive(Debug, Default, Clone, Copy)]
pub struct RealFs;

impl RealFs {
    pub fn new() -> Self {
        Self
    }
}

impl FileSystem for RealFs {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        std::fs::read_to_string(path)
    }

    fn write(&self, path: &Path, content: &str) -> io::Result<()> {
        std::fs::write(path, content)
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        std::fs::create_dir_all(path)
    }
}

/// Global default filesystem for use when dependency injection isn't practical.
pub fn default_fs() -> &'static RealFs {
    static INSTANCE: RealFs = RealFs;
    &INSTANCE
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use std::collections::{HashMap, HashSet};
    use std::sync::RwLock;

    /// In-memory filesystem for testing.
    #[derive(Debug, Default)]
    pub struct MockFs {
        files: RwLock<HashMap<String, String>>,
        dirs: RwLock<HashSet<String>>,
    }

    impl MockFs {
        pub fn new() -> Self {
            Self::default()
        }

        /// Pre-populate the mock filesystem with files.
        pub fn with_files<I, P, C>(files: I) -> Self
        where
            I: IntoIterator<Item = (P, C)>,
            P: AsRef<Path>,
            C: Into<String>,
        {
            let map: HashMap<String, String> = files
                .into_iter()
                .map(|(p, c)| (key(p.as_ref()), c.into()))
                .collect();
            Self {
                files: RwLock::new(map),
                dirs: RwLock::new(HashSet::new()),
            }
        }

        /// Get all files currently in the mock filesystem.
        pub fn files(&self) -> HashMap<String, String> {
            self.files.read().unwrap().clone()
        }

        /// Get all directories created through `create_dir_all`.
        pub fn dirs(&self) -> HashSet<String> {
            self.dirs.read().unwrap().clone()
        }
    }

    fn key(path: &Path) -> String {
        path.to_string_lossy().to_string()
    }

    impl FileSystem for MockFs {
        fn read_to_string(&self, path: &Path) -> io::Result<String> {
            let key = key(path);
            self.files
                .read()
                .unwrap()
                .get(&key)
                .cloned()
                .ok_or_else(|| {
                    io::Error::new(io::ErrorKind::NotFound, format!("file not found: {}", key))
                })
        }

        fn write(&self, path: &Path, content: &str) -> io::Result<()> {
            self.files
                .write()
                .unwrap()
                .insert(key(path), content.to_string());
            Ok(())
        }

        fn exists(&self, path: &Path) -> bool {
            let key = key(path);
            self.files.read().unwrap().contains_key(&key)
                || self.dirs.read().unwrap().contains(&key)
        }

        fn create_dir_all(&self, path: &Path) -> io::Result<()> {
            self.dirs.write().unwrap().insert(key(path));
            Ok(())
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_mock_fs_read_write() {
            let fs = MockFs::new();
            let path = Path::new("/out/architecture.dot");

            assert!(!fs.exists(path));
            assert!(fs.read_to_string(path).is_err());

            fs.write(path, "digraph {}").unwrap();
            assert!(fs.exists(path));
            assert_eq!(fs.read_to_string(path).unwrap(), "digraph {}");
        }

        #[test]
        fn test_mock_fs_dirs() {
            let fs = MockFs::new();
            let dir = Path::new("/out/diagrams");

            assert!(!fs.exists(dir));
            fs.create_dir_all(dir).unwrap();
            assert!(fs.exists(dir));
            assert!(fs.dirs().contains("/out/diagrams"));
        }
    }
}
