//! Curation pipeline
//!
//! Turns a raw source into an ordered list of unique, tiered dictionary
//! entries. This module does no I/O: the caller decides which source to read
//! and where the result goes.

use crate::dataset::{DatasetRecord, WordEntry};
use crate::dedup::SeenWords;
use crate::encoding::split_lines;
use crate::exclusion::ExclusionSet;
use crate::filter::{tier_for_length, TierFn, WordFilter};
use crate::normalize::normalize_word;
use crate::stats::{CurationStats, Rejection};

/// Words to curate
#[derive(Debug, Clone)]
pub enum RawSource {
    /// Lines of a raw wordlist; tiers are computed from word length
    Wordlist(Vec<String>),
    /// Records of a previously curated dataset; tiers are kept as-is
    Dataset(Vec<DatasetRecord>),
}

impl RawSource {
    /// Build a wordlist source from file text
    pub fn wordlist_from_text(text: &str) -> Self {
        Self::Wordlist(split_lines(text).into_iter().map(str::to_string).collect())
    }

    /// Number of input items reported in the summary
    ///
    /// Blank lines do not count for a wordlist; every record counts for a
    /// dataset.
    pub fn source_count(&self) -> usize {
        match self {
            Self::Wordlist(lines) => lines.iter().filter(|l| !l.trim().is_empty()).count(),
            Self::Dataset(records) => records.len(),
        }
    }

    pub fn mode_name(&self) -> &'static str {
        match self {
            Self::Wordlist(_) => "wordlist",
            Self::Dataset(_) => "dataset",
        }
    }
}

/// Result of one curation pass
#[derive(Debug, Clone)]
pub struct Curation {
    pub entries: Vec<WordEntry>,
    pub source_count: usize,
    pub stats: CurationStats,
}

/// Filters, deduplicates and tiers words
#[derive(Debug, Clone)]
pub struct Curator {
    filter: WordFilter,
    exclusions: ExclusionSet,
    tier_for: TierFn,
}

impl Curator {
    pub fn new(filter: WordFilter, exclusions: ExclusionSet) -> Self {
        Self {
            filter,
            exclusions,
            tier_for: tier_for_length,
        }
    }

    /// Replace the length-to-tier policy used for wordlist sources
    pub fn with_tier_fn(mut self, tier_for: TierFn) -> Self {
        self.tier_for = tier_for;
        self
    }

    /// Run the pipeline over a source
    pub fn curate(&self, source: &RawSource) -> Curation {
        let mut entries = Vec::new();
        let mut seen = SeenWords::with_capacity(source.source_count());
        let mut stats = CurationStats::new();

        match source {
            RawSource::Wordlist(lines) => {
                for line in lines {
                    if let Some(word) = self.admit(line, &seen, &mut stats) {
                        let tier = (self.tier_for)(word.len());
                        self.accept(word, tier, &mut entries, &mut seen, &mut stats);
                    }
                }
            }
            RawSource::Dataset(records) => {
                for record in records {
                    if let Some(word) = self.admit(&record.word, &seen, &mut stats) {
                        self.accept(word, record.tier, &mut entries, &mut seen, &mut stats);
                    }
                }
            }
        }

        log::debug!(
            "Curated {} of {} {} items",
            entries.len(),
            source.source_count(),
            source.mode_name()
        );

        Curation {
            entries,
            source_count: source.source_count(),
            stats,
        }
    }

    /// Normalize a candidate and run it through every filter in order
    fn admit(&self, raw: &str, seen: &SeenWords, stats: &mut CurationStats) -> Option<String> {
        let word = normalize_word(raw);

        let rejection = if word.is_empty() {
            Some(Rejection::Blank)
        } else if seen.contains(&word) {
            Some(Rejection::Duplicate)
        } else if !self.filter.matches_length(&word) {
            Some(Rejection::Length)
        } else if !self.filter.matches_pattern(&word) {
            Some(Rejection::NonAlpha)
        } else if self.exclusions.is_proper_name(&word) {
            Some(Rejection::ProperName)
        } else if self.exclusions.is_denylisted(&word) {
            Some(Rejection::Denylisted)
        } else {
            None
        };

        match rejection {
            Some(reason) => {
                log::trace!("Rejected {:?}: {}", raw, reason);
                stats.reject(reason);
                None
            }
            None => Some(word),
        }
    }

    fn accept(
        &self,
        word: String,
        tier: u8,
        entries: &mut Vec<WordEntry>,
        seen: &mut SeenWords,
        stats: &mut CurationStats,
    ) {
        seen.insert(&word);
        stats.accept(tier);
        entries.push(WordEntry::new(word, tier));
    }
}
