//! # Dictionary Curator
//!
//! Builds and maintains the word list behind a word game.
//!
//! ## Features
//!
//! - **Normalization**: trims, strips wrapping quotes and lowercases tokens
//! - **Filtering**: 4-12 lowercase ASCII letters only
//! - **Exclusions**: proper names and a denylist, both optional
//! - **Deduplication**: first occurrence wins, input order preserved
//! - **Tiering**: difficulty tier from word length, or kept from an existing dataset
//!
//! ## Usage
//!
//! ```bash
//! # Build or re-curate public/dictionary.json in the current project
//! curate-dictionary
//!
//! # Preview with rejection statistics
//! curate-dictionary --dry-run --stats
//! ```
//!
//! ## Example
//!
//! ```rust
//! use dictionary_curator::curator::{Curator, RawSource};
//! use dictionary_curator::exclusion::ExclusionSet;
//! use dictionary_curator::filter::WordFilter;
//!
//! let curator = Curator::new(
//!     WordFilter::standard().unwrap(),
//!     ExclusionSet::from_text("", "grime\n"),
//! );
//! let source = RawSource::wordlist_from_text("\"apple\"\nAPPLE\ngrime\nchocolate\n");
//! let curation = curator.curate(&source);
//!
//! assert_eq!(curation.entries.len(), 2);
//! assert_eq!(curation.entries[1].tier, 3);
//! ```

pub mod cli;
pub mod curator;
pub mod dataset;
pub mod dedup;
pub mod encoding;
pub mod error;
pub mod exclusion;
pub mod filter;
pub mod normalize;
pub mod output;
pub mod processor;
pub mod progress;
pub mod stats;

pub use cli::Args;
pub use curator::{Curation, Curator, RawSource};
pub use dataset::WordEntry;
pub use error::{CurateError, Result};
pub use processor::{Processor, ProcessorConfig, Summary};
