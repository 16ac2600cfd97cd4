//! Curation statistics
//!
//! Counts why candidates were dropped and how accepted words spread over
//! tiers.

use crate::dataset::MAX_TIER;
use std::fmt;

/// Reason a candidate word was dropped, in filter order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rejection {
    Blank,
    Duplicate,
    Length,
    NonAlpha,
    ProperName,
    Denylisted,
}

impl Rejection {
    pub const COUNT: usize = 6;

    pub const ALL: [Rejection; Self::COUNT] = [
        Rejection::Blank,
        Rejection::Duplicate,
        Rejection::Length,
        Rejection::NonAlpha,
        Rejection::ProperName,
        Rejection::Denylisted,
    ];

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Blank => "blank",
            Self::Duplicate => "duplicate",
            Self::Length => "length",
            Self::NonAlpha => "non-alphabetic",
            Self::ProperName => "proper name",
            Self::Denylisted => "denylisted",
        };
        f.write_str(label)
    }
}

/// Counters for a single curation pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CurationStats {
    rejected: [u64; Rejection::COUNT],
    tiers: [u64; MAX_TIER as usize],
    other_tiers: u64,
}

impl CurationStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reject(&mut self, reason: Rejection) {
        self.rejected[reason.index()] += 1;
    }

    pub fn accept(&mut self, tier: u8) {
        match usize::from(tier).checked_sub(1).and_then(|i| self.tiers.get_mut(i)) {
            Some(count) => *count += 1,
            None => self.other_tiers += 1,
        }
    }

    pub fn rejected(&self, reason: Rejection) -> u64 {
        self.rejected[reason.index()]
    }

    pub fn rejected_total(&self) -> u64 {
        self.rejected.iter().sum()
    }

    pub fn accepted(&self) -> u64 {
        self.tiers.iter().sum::<u64>() + self.other_tiers
    }

    /// Accepted words per tier, tier 1 first
    pub fn tier_counts(&self) -> [u64; MAX_TIER as usize] {
        self.tiers
    }

    /// Every candidate looked at, blank lines included
    pub fn examined(&self) -> u64 {
        self.accepted() + self.rejected_total()
    }
}
