//! Content scanning (pure, filesystem reads only).
//!
//! Expands the `content` globs against the project root and yields the files
//! the styling compiler would read for class names.
//!
//! ```text
//! root/
//! ├── style.toml
//! └── cmd/teleblog/
//!     ├── main.go             -> (skipped)
//!     └── views/
//!         └── index.templ     -> cmd/teleblog/views/index.templ
//! ```

mod glob;

pub use glob::{Glob, GlobError, to_slash};

use jwalk::WalkDir;
use rustc_hash::FxHashSet;
use std::path::{Path, PathBuf};

/// Compiled `content` globs bound to a project root.
#[derive(Debug, Clone)]
pub struct ContentScanner {
    root: PathBuf,
    includes: Vec<Glob>,
    excludes: Vec<Glob>,
}

impl ContentScanner {
    /// Compile every pattern. Fails on the first pattern that doesn't compile.
    pub fn new<S: AsRef<str>>(root: impl Into<PathBuf>, patterns: &[S]) -> Result<Self, GlobError> {
        let mut includes = Vec::new();
        let mut excludes = Vec::new();
        for pattern in patterns {
            let glob = Glob::new(pattern.as_ref())?;
            if glob.is_negated() {
                excludes.push(glob);
            } else {
                includes.push(glob);
            }
        }

        Ok(Self {
            root: root.into(),
            includes,
            excludes,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Lazily walk the filesystem and yield matched files.
    ///
    /// Each call starts from scratch, so a scanner can be reused across builds.
    /// Files matched by several globs are yielded once, in the position of the
    /// first glob that matched them.
    pub fn scan(&self) -> impl Iterator<Item = PathBuf> + '_ {
        let mut seen = FxHashSet::default();
        self.includes
            .iter()
            .flat_map(move |glob| self.walk(glob))
            .filter(move |path| !self.is_excluded(path))
            .filter(move |path| seen.insert(path.clone()))
    }

    /// Path as seen by the globs: root-relative, `/`-separated.
    pub fn relative(&self, path: &Path) -> String {
        to_slash(path.strip_prefix(&self.root).unwrap_or(path))
    }

    fn walk<'a>(&'a self, glob: &'a Glob) -> impl Iterator<Item = PathBuf> + 'a {
        let base = self.root.join(glob.base());
        crate::debug!("scan"; "walking {} for `{}`", base.display(), glob.as_str());

        WalkDir::new(base)
            .sort(true)
            .into_iter()
            .filter_map(|entry| {
                entry
                    .map_err(|e| crate::debug!("scan"; "skipping unreadable entry: {}", e))
                    .ok()
            })
            .filter(|e| e.file_type().is_file())
            .map(|e| e.path())
            .filter(move |path| self.matches(glob, path))
    }

    fn matches(&self, glob: &Glob, path: &Path) -> bool {
        if glob.is_absolute() {
            glob.is_match(&to_slash(path))
        } else {
            glob.is_match(&self.relative(path))
        }
    }

    fn is_excluded(&self, path: &Path) -> bool {
        self.excludes.iter().any(|glob| self.matches(glob, path))
    }
}
