//! shared.rs - A lock-guarded handle for indexes that grow while in use.
//!
//! [`SensitiveIndex`] itself carries no synchronization. `SharedIndex`
//! wraps it in an `Arc<RwLock<_>>`: lookups take the read lock and may run
//! in parallel, insertions take the write lock and run alone.
//!
//! License: MIT OR APACHE 2.0

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};
use anyhow::Result;
use log::debug;

use crate::engine::SanitizationEngine;
use crate::errors::WordmaskError;
use crate::match_result::MatchResult;
use crate::matcher::SensitiveIndex;

/// A cloneable, thread-safe handle to one [`SensitiveIndex`].
#[derive(Debug, Clone, Default)]
pub struct SharedIndex {
    inner: Arc<RwLock<SensitiveIndex>>,
}

impl From<SensitiveIndex> for SharedIndex {
    fn from(index: SensitiveIndex) -> Self {
        Self::new(index)
    }
}

impl SharedIndex {
    pub fn new(index: SensitiveIndex) -> Self {
        Self {
            inner: Arc::new(RwLock::new(index)),
        }
    }

    fn read(&self, op: &str) -> Result<RwLockReadGuard<'_, SensitiveIndex>, WordmaskError> {
        self.inner
            .read()
            .map_err(|_| WordmaskError::LockPoisoned(op.to_string()))
    }

    fn write(&self, op: &str) -> Result<RwLockWriteGuard<'_, SensitiveIndex>, WordmaskError> {
        self.inner
            .write()
            .map_err(|_| WordmaskError::LockPoisoned(op.to_string()))
    }

    /// Inserts `word` verbatim under the write lock.
    pub fn insert(&self, word: &str) -> Result<(), WordmaskError> {
        self.write("insert")?.insert(word);
        Ok(())
    }

    /// Inserts every word verbatim while holding the write lock once.
    pub fn insert_all<I, S>(&self, words: I) -> Result<(), WordmaskError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.write("insert_all")?.insert_all(words);
        Ok(())
    }

    /// Normalizes then inserts `word` under the write lock.
    pub fn insert_normalized(&self, word: &str) -> Result<bool, WordmaskError> {
        Ok(self.write("insert_normalized")?.insert_normalized(word))
    }

    pub fn match_text(&self, text: &str) -> Result<MatchResult, WordmaskError> {
        Ok(self.read("match_text")?.match_text(text))
    }

    pub fn len(&self) -> Result<usize, WordmaskError> {
        Ok(self.read("len")?.len())
    }

    pub fn is_empty(&self) -> Result<bool, WordmaskError> {
        Ok(self.read("is_empty")?.is_empty())
    }

    /// Returns a copy of the current index state.
    pub fn snapshot(&self) -> Result<SensitiveIndex, WordmaskError> {
        let guard = self.read("snapshot")?;
        debug!("Taking index snapshot with {} words.", guard.len());
        Ok(guard.clone())
    }
}

impl SanitizationEngine for SharedIndex {
    fn sanitize(&self, content: &str) -> Result<MatchResult> {
        Ok(self.match_text(content)?)
    }

    fn mask_char(&self) -> char {
        self.inner
            .read()
            .map(|guard| guard.mask_char())
            .unwrap_or_else(|poisoned| poisoned.into_inner().mask_char())
    }

    fn word_count(&self) -> usize {
        self.inner
            .read()
            .map(|guard| guard.len())
            .unwrap_or_else(|poisoned| poisoned.into_inner().len())
    }
}
