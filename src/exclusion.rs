//! Exclusion sets
//!
//! Words that must never reach the dictionary: proper names and an explicit
//! denylist. Both sources are optional; a missing file simply contributes
//! nothing.

use crate::encoding::{read_text_lossy, read_text_strict, split_lines};
use crate::error::{CurateError, Result};
use ahash::RandomState;
use hashbrown::HashSet;
use std::io;
use std::path::Path;

/// Lowercase words rejected during curation
#[derive(Debug, Default, Clone)]
pub struct ExclusionSet {
    proper_names: HashSet<String, RandomState>,
    denylist: HashSet<String, RandomState>,
}

impl ExclusionSet {
    /// Build from in-memory proper-name and denylist text
    pub fn from_text(proper_names: &str, denylist: &str) -> Self {
        Self {
            proper_names: parse_proper_names(proper_names),
            denylist: parse_denylist(denylist),
        }
    }

    /// Load both sources; `None` or a missing file yields an empty subset
    pub fn load(proper_names: Option<&Path>, denylist: Option<&Path>) -> Result<Self> {
        let proper_names = match proper_names {
            Some(path) => read_optional(path, read_text_lossy)?
                .map(|text| parse_proper_names(&text))
                .unwrap_or_default(),
            None => HashSet::default(),
        };

        let denylist = match denylist {
            Some(path) => read_optional(path, read_text_strict)?
                .map(|text| parse_denylist(&text))
                .unwrap_or_default(),
            None => HashSet::default(),
        };

        log::debug!(
            "Loaded {} proper names and {} denylisted words",
            proper_names.len(),
            denylist.len()
        );

        Ok(Self {
            proper_names,
            denylist,
        })
    }

    pub fn is_proper_name(&self, word: &str) -> bool {
        self.proper_names.contains(word)
    }

    pub fn is_denylisted(&self, word: &str) -> bool {
        self.denylist.contains(word)
    }

    pub fn proper_name_count(&self) -> usize {
        self.proper_names.len()
    }

    pub fn denylist_count(&self) -> usize {
        self.denylist.len()
    }

    /// Size of the union of both subsets
    pub fn len(&self) -> usize {
        self.proper_names.len()
            + self
                .denylist
                .iter()
                .filter(|w| !self.proper_names.contains(w.as_str()))
                .count()
    }

    pub fn is_empty(&self) -> bool {
        self.proper_names.is_empty() && self.denylist.is_empty()
    }
}

/// Read an optional source, mapping "not found" to `None`
fn read_optional<F>(path: &Path, read: F) -> Result<Option<String>>
where
    F: FnOnce(&Path) -> io::Result<String>,
{
    match read(path) {
        Ok(text) => Ok(Some(text)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            log::debug!("Optional source {:?} not found, skipping", path);
            Ok(None)
        }
        Err(e) => Err(CurateError::read(path, e)),
    }
}

fn parse_proper_names(text: &str) -> HashSet<String, RandomState> {
    split_lines(text)
        .into_iter()
        .map(|line| line.trim().to_lowercase())
        .filter(|name| !name.is_empty())
        .collect()
}

fn parse_denylist(text: &str) -> HashSet<String, RandomState> {
    split_lines(text)
        .into_iter()
        .map(|line| line.trim().to_lowercase())
        .filter(|word| !word.is_empty() && !word.starts_with('#'))
        .collect()
}
