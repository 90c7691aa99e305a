//! A loaded config file that can be reloaded in place.

use super::error::ConfigError;
use super::loader::{load_file, LoadOptions};
use super::store::{Section, Store};
use crate::domain::Value;
use std::path::{Path, PathBuf};

/// Owns the store built from one file plus what is needed to rebuild it.
///
/// `reload` takes `&mut self`, so no reference into the previous store can
/// survive it.
#[derive(Debug, Clone)]
pub struct Config {
    path: PathBuf,
    options: LoadOptions,
    store: Store,
}

impl Config {
    pub fn load<P, I, S>(path: P, overrides: I) -> Result<Self, ConfigError>
    where
        P: AsRef<Path>,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::load_with(path, LoadOptions::with_overrides(overrides))
    }

    pub fn load_with<P: AsRef<Path>>(path: P, options: LoadOptions) -> Result<Self, ConfigError> {
        let path = path.as_ref().to_path_buf();
        let store = load_file(&path, &options)?;
        Ok(Self { path, options, store })
    }

    /// Re-read the file. On failure the current store is kept.
    pub fn reload(&mut self) -> Result<(), ConfigError> {
        let store = load_file(&self.path, &self.options)?;
        tracing::debug!("Reloaded {} ({} settings)", self.path.display(), store.len());
        self.store = store;
        Ok(())
    }

    pub fn get(&self, qualified_key: &str) -> Option<&Value> {
        self.store.get(qualified_key)
    }

    pub fn section(&self, name: &str) -> Option<&Section> {
        self.store.section(name)
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn into_store(self) -> Store {
        self.store
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn options(&self) -> &LoadOptions {
        &self.options
    }
}
