use std::fs;
use std::io;
use std::path;

use relative_path::RelativePath;
use relative_path::RelativePathBuf;

use crate::error::Error;
use crate::error::Result;

/// Where generated pages end up.
pub trait Storage {
    /// Write `content` to `rel_path`, creating parent directories and replacing any existing file.
    fn save(&self, rel_path: &RelativePath, content: &str) -> Result<()>;

    fn read(&self, rel_path: &RelativePath) -> Result<String>;

    /// Publish whatever has been saved.
    fn deploy(&self) -> Result<()> {
        log::debug!("Nothing to deploy");
        Ok(())
    }
}

/// [`Storage`] rooted at a local directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSystemStorage {
    root: path::PathBuf,
}

impl FileSystemStorage {
    /// Bind to `root`, creating it if needed.
    pub fn new<P: Into<path::PathBuf>>(root: P) -> Result<Self> {
        let root = root.into();
        fs::create_dir_all(&root).map_err(|source| Error::Io {
            path: root.clone(),
            source,
        })?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &path::Path {
        &self.root
    }

    /// Every file under the root, sorted.
    pub fn files(&self) -> Result<Vec<RelativePathBuf>> {
        let mut files = Vec::new();
        for entry in walkdir::WalkDir::new(&self.root)
            .min_depth(1)
            .sort_by_file_name()
        {
            let entry = entry.map_err(|e| Error::Io {
                path: self.root.clone(),
                source: e.into(),
            })?;
            if !entry.file_type().is_file() {
                continue;
            }
            let rel_path = entry
                .path()
                .strip_prefix(&self.root)
                .ok()
                .and_then(|p| RelativePathBuf::from_path(p).ok());
            match rel_path {
                Some(rel_path) => files.push(rel_path),
                None => log::debug!("Skipping `{}`", entry.path().display()),
            }
        }
        Ok(files)
    }
}

impl Storage for FileSystemStorage {
    fn save(&self, rel_path: &RelativePath, content: &str) -> Result<()> {
        let file_path = rel_path.to_path(&self.root);
        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent).map_err(|source| Error::Io {
                path: parent.to_owned(),
                source,
            })?;
        }
        fs::write(&file_path, content).map_err(|source| Error::Io {
            path: file_path.clone(),
            source,
        })?;
        log::debug!("Wrote {}", file_path.display());
        Ok(())
    }

    fn read(&self, rel_path: &RelativePath) -> Result<String> {
        let file_path = rel_path.to_path(&self.root);
        fs::read_to_string(&file_path).map_err(|source| match source.kind() {
            io::ErrorKind::NotFound => Error::NotFound { path: file_path },
            _ => Error::Io {
                path: file_path,
                source,
            },
        })
    }
}
