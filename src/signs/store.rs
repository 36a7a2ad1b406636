//! Where the sign images live.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Something that can tell whether an image exists.
pub trait AssetStore {
    /// Returns true if there is an asset at this path.
    fn exists(&self, path: &str) -> bool;
}

impl AssetStore for HashSet<String> {
    fn exists(&self, path: &str) -> bool {
        self.contains(path)
    }
}

/// Assets stored in a directory of the file system.
#[derive(Debug, Clone)]
pub struct Directory {
    root: PathBuf,
}

impl Directory {
    /// Creates a store rooted at a directory.
    pub fn new<P: AsRef<Path>>(root: P) -> Directory {
        Directory {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Returns the path on the disk of an asset.
    pub fn path(&self, path: &str) -> PathBuf {
        self.root.join(path)
    }
}

impl AssetStore for Directory {
    fn exists(&self, path: &str) -> bool {
        self.path(path).is_file()
    }
}

#[cfg(test)]
mod tests {
    use std::fs::{create_dir_all, File};

    use crate::signs::{AssetStore, Directory, Resolver};
    use crate::Result;

    #[test]
    fn looks_up_files() -> Result<()> {
        let dir = tempfile::tempdir()?;
        create_dir_all(dir.path().join("images"))?;
        File::create(dir.path().join("images/cat.png"))?;

        let store = Directory::new(dir.path());
        assert!(store.exists("images/cat.png"));
        assert!(!store.exists("images/dog.png"));
        assert!(!store.exists("images"));

        assert_eq!(Resolver::new(&store).resolve("cats."), "images/cat.png");

        Ok(())
    }
}
