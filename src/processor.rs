//! Core processing engine
//!
//! Picks the source, loads the exclusion lists, runs the curator and writes
//! the dataset. All paths come from [`ProcessorConfig`]; nothing here depends
//! on a fixed filesystem layout.

use crate::cli::{Args, DEFAULT_DATASET, DEFAULT_DENYLIST, DEFAULT_PROPER_NAMES, DEFAULT_WORDLIST};
use crate::curator::{Curation, Curator, RawSource};
use crate::dataset::parse_dataset;
use crate::encoding::decode_lossy;
use crate::error::{CurateError, Result};
use crate::exclusion::ExclusionSet;
use crate::filter::WordFilter;
use crate::output::write_dataset;
use crate::progress::{create_spinner, print_success, print_warning};
use crate::stats::CurationStats;

use indicatif::ProgressBar;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

/// Processor configuration
#[derive(Debug, Clone)]
pub struct ProcessorConfig {
    pub wordlist: PathBuf,
    pub dataset: PathBuf,
    pub output: PathBuf,
    pub denylist: Option<PathBuf>,
    pub proper_names: Option<PathBuf>,
    pub dry_run: bool,
    pub quiet: bool,
    pub verbose: bool,
}

impl ProcessorConfig {
    pub fn from_args(args: &Args) -> Self {
        Self {
            wordlist: args.wordlist_path(),
            dataset: args.dataset_path(),
            output: args.output_path(),
            denylist: args.denylist_path(),
            proper_names: args.proper_names_path(),
            dry_run: args.dry_run,
            quiet: args.quiet,
            verbose: args.verbose,
        }
    }

    /// Standard project layout under `root`, writing back to the dataset
    pub fn for_root(root: &Path) -> Self {
        let dataset = root.join(DEFAULT_DATASET);
        Self {
            wordlist: root.join(DEFAULT_WORDLIST),
            output: dataset.clone(),
            dataset,
            denylist: Some(root.join(DEFAULT_DENYLIST)),
            proper_names: Some(PathBuf::from(DEFAULT_PROPER_NAMES)),
            dry_run: false,
            quiet: true,
            verbose: false,
        }
    }
}

/// A source read from disk
#[derive(Debug, Clone)]
pub struct LoadedSource {
    pub source: RawSource,
    pub path: PathBuf,
    pub bytes: u64,
}

/// Outcome of a run
#[derive(Debug, Clone)]
pub struct Summary {
    pub curated: usize,
    pub source_count: usize,
    pub source_path: PathBuf,
    pub source_bytes: u64,
    /// Bytes written, `None` on a dry run
    pub written: Option<u64>,
    pub stats: CurationStats,
    pub elapsed: Duration,
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Curated {} words (from {} in {}).",
            self.curated,
            self.source_count,
            self.source_path.display()
        )
    }
}

/// Main processor
pub struct Processor {
    config: ProcessorConfig,
}

impl Processor {
    pub fn new(config: ProcessorConfig) -> Self {
        Self { config }
    }

    /// Curate and write the dataset
    pub fn process(&self) -> Result<Summary> {
        let spinner = if self.config.quiet {
            ProgressBar::hidden()
        } else {
            create_spinner("Loading sources...")
        };
        self.process_with(&spinner)
    }

    fn process_with(&self, spinner: &ProgressBar) -> Result<Summary> {
        let start = Instant::now();

        // Cleared on both the success and the error path
        let curated = self.curate_sources(spinner);
        spinner.finish_and_clear();
        let (loaded, curation) = curated?;

        let written = if self.config.dry_run {
            if !self.config.quiet {
                print_warning(&format!(
                    "Dry run: {:?} not written",
                    self.config.output
                ));
            }
            None
        } else {
            let bytes = write_dataset(&self.config.output, &curation.entries)?;
            if self.config.verbose {
                print_success(&format!("Output written to: {:?}", self.config.output));
            }
            Some(bytes)
        };

        Ok(Summary {
            curated: curation.entries.len(),
            source_count: curation.source_count,
            source_path: loaded.path,
            source_bytes: loaded.bytes,
            written,
            stats: curation.stats,
            elapsed: start.elapsed(),
        })
    }

    /// Load the source and exclusion lists, then run the curator
    fn curate_sources(&self, spinner: &ProgressBar) -> Result<(LoadedSource, Curation)> {
        let loaded = self.load_source()?;
        log::info!(
            "Curating {} source {:?} ({} items)",
            loaded.source.mode_name(),
            loaded.path,
            loaded.source.source_count()
        );

        let exclusions = ExclusionSet::load(
            self.config.proper_names.as_deref(),
            self.config.denylist.as_deref(),
        )?;
        if exclusions.is_empty() {
            log::warn!("No proper names or denylisted words loaded");
        } else {
            log::info!(
                "Excluding {} words ({} proper names, {} denylisted)",
                exclusions.len(),
                exclusions.proper_name_count(),
                exclusions.denylist_count()
            );
        }

        spinner.set_message("Curating...");
        let filter = WordFilter::standard()?;
        log::debug!(
            "Keeping words of length {:?} matching {}",
            filter.lengths(),
            filter.pattern_str()
        );
        let curator = Curator::new(filter, exclusions);
        let curation = curator.curate(&loaded.source);

        Ok((loaded, curation))
    }

    /// Pick the source to curate: the raw wordlist wins over the dataset
    pub fn select_source(&self) -> Result<SourceKind> {
        if self.config.wordlist.exists() {
            Ok(SourceKind::Wordlist)
        } else if self.config.dataset.exists() {
            Ok(SourceKind::Dataset)
        } else {
            Err(CurateError::MissingInput {
                wordlist: self.config.wordlist.clone(),
                dataset: self.config.dataset.clone(),
            })
        }
    }

    /// Read and decode the selected source
    pub fn load_source(&self) -> Result<LoadedSource> {
        match self.select_source()? {
            SourceKind::Wordlist => {
                let path = self.config.wordlist.clone();
                let raw = fs::read(&path).map_err(|e| CurateError::read(&path, e))?;
                let text = decode_lossy(&raw);
                Ok(LoadedSource {
                    bytes: raw.len() as u64,
                    source: RawSource::wordlist_from_text(&text),
                    path,
                })
            }
            SourceKind::Dataset => {
                let path = self.config.dataset.clone();
                let text = fs::read_to_string(&path).map_err(|e| CurateError::read(&path, e))?;
                let records = parse_dataset(&text).map_err(|source| CurateError::Parse {
                    path: path.clone(),
                    source,
                })?;
                Ok(LoadedSource {
                    bytes: text.len() as u64,
                    source: RawSource::Dataset(records),
                    path,
                })
            }
        }
    }
}

/// Which input a run curates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    Wordlist,
    Dataset,
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    struct Project {
        dir: TempDir,
    }

    impl Project {
        fn new() -> Self {
            let dir = TempDir::new().unwrap();
            fs::create_dir_all(dir.path().join("public")).unwrap();
            Self { dir }
        }

        fn write(&self, rel: &str, content: &str) {
            fs::write(self.dir.path().join(rel), content).unwrap();
        }

        fn read(&self, rel: &str) -> String {
            fs::read_to_string(self.dir.path().join(rel)).unwrap()
        }

        fn config(&self) -> ProcessorConfig {
            let mut config = ProcessorConfig::for_root(self.dir.path());
            config.proper_names = Some(self.dir.path().join("propernames"));
            config
        }

        fn run(&self) -> Result<Summary> {
            Processor::new(self.config()).process()
        }
    }

    #[test]
    fn test_missing_input() {
        let project = Project::new();

        let err = project.run().unwrap_err();
        assert!(matches!(err, CurateError::MissingInput { .. }));
        assert!(!project.dir.path().join(DEFAULT_DATASET).exists());
    }

    #[test]
    fn test_spinner_cleared_on_error() {
        let project = Project::new();
        let spinner = ProgressBar::hidden();

        let err = Processor::new(project.config()).process_with(&spinner).unwrap_err();

        assert!(matches!(err, CurateError::MissingInput { .. }));
        assert!(spinner.is_finished());
    }

    #[test]
    fn test_spinner_cleared_on_bad_denylist() {
        let project = Project::new();
        project.write(DEFAULT_WORDLIST, "apple\n");
        fs::write(project.dir.path().join(DEFAULT_DENYLIST), b"gr\xffime\n").unwrap();
        let spinner = ProgressBar::hidden();

        let err = Processor::new(project.config()).process_with(&spinner).unwrap_err();

        assert!(matches!(err, CurateError::Read { .. }));
        assert!(spinner.is_finished());
    }

    #[test]
    fn test_source_bytes_is_file_size() {
        let project = Project::new();
        let raw: &[u8] = b"\xEF\xBB\xBFapple\nkit\xffchen\n";
        fs::write(project.dir.path().join(DEFAULT_WORDLIST), raw).unwrap();

        let summary = project.run().unwrap();

        assert_eq!(summary.source_bytes, raw.len() as u64);
        assert_eq!(
            project.read(DEFAULT_DATASET),
            r#"[{"word": "apple", "tier": 1}, {"word": "kitchen", "tier": 2}]"#
        );
    }

    #[test]
    fn test_denylist_bom_does_not_leak_first_word() {
        let project = Project::new();
        project.write(DEFAULT_WORDLIST, "grime\nprime\n");
        fs::write(project.dir.path().join(DEFAULT_DENYLIST), b"\xEF\xBB\xBFgrime\n").unwrap();

        project.run().unwrap();

        assert_eq!(project.read(DEFAULT_DATASET), r#"[{"word": "prime", "tier": 1}]"#);
    }

    #[test]
    fn test_build_from_wordlist() {
        let project = Project::new();
        project.write(
            DEFAULT_WORDLIST,
            "\"apple\"\n\"APPLE\"\n\"grime\"\n\"alice\"\n\"cat\"\n\n\"kitchen\"\n\"chocolate\"\n",
        );
        project.write(DEFAULT_DENYLIST, "# bad words\ngrime\n");
        project.write("propernames", "Alice\n");

        let summary = project.run().unwrap();

        assert_eq!(
            project.read(DEFAULT_DATASET),
            r#"[{"word": "apple", "tier": 1}, {"word": "kitchen", "tier": 2}, {"word": "chocolate", "tier": 3}]"#
        );
        assert_eq!(summary.curated, 3);
        assert_eq!(summary.source_count, 7);
        assert!(summary.source_path.ends_with(DEFAULT_WORDLIST));
    }

    #[test]
    fn test_wordlist_takes_precedence() {
        let project = Project::new();
        project.write(DEFAULT_WORDLIST, "zebra\n");
        project.write(DEFAULT_DATASET, r#"[{"word": "apple", "tier": 1}]"#);

        let processor = Processor::new(project.config());
        assert_eq!(processor.select_source().unwrap(), SourceKind::Wordlist);

        processor.process().unwrap();
        assert_eq!(project.read(DEFAULT_DATASET), r#"[{"word": "zebra", "tier": 1}]"#);
    }

    #[test]
    fn test_recurate_dataset_keeps_tiers() {
        let project = Project::new();
        project.write(DEFAULT_DATASET, r#"[{"word":"zephyr","tier":3}]"#);

        let summary = project.run().unwrap();

        assert_eq!(project.read(DEFAULT_DATASET), r#"[{"word": "zephyr", "tier": 3}]"#);
        assert_eq!(summary.source_count, 1);
        assert!(summary.to_string().starts_with("Curated 1 words (from 1 in "));
    }

    #[test]
    fn test_recurate_is_byte_identical() {
        let project = Project::new();
        project.write(
            DEFAULT_DATASET,
            r#"[{"word": "Apple", "tier": 2}, {"word": "apple", "tier": 1}, {"word": "zephyr", "tier": 3}, {"word": "x1"}]"#,
        );

        project.run().unwrap();
        let first = project.read(DEFAULT_DATASET);
        project.run().unwrap();
        let second = project.read(DEFAULT_DATASET);

        assert_eq!(first, r#"[{"word": "apple", "tier": 2}, {"word": "zephyr", "tier": 3}]"#);
        assert_eq!(first, second);
    }

    #[test]
    fn test_new_denylist_entry_removes_word() {
        let project = Project::new();
        project.write(DEFAULT_DATASET, r#"[{"word": "grime", "tier": 1}, {"word": "prime", "tier": 1}]"#);
        project.write(DEFAULT_DENYLIST, "grime\n");

        let summary = project.run().unwrap();

        assert_eq!(project.read(DEFAULT_DATASET), r#"[{"word": "prime", "tier": 1}]"#);
        assert_eq!(summary.source_count, 2);
    }

    #[test]
    fn test_malformed_dataset_aborts_without_writing() {
        let project = Project::new();
        project.write(DEFAULT_DATASET, r#"[{"word": "apple""#);

        let err = project.run().unwrap_err();

        assert!(matches!(err, CurateError::Parse { .. }));
        assert_eq!(project.read(DEFAULT_DATASET), r#"[{"word": "apple""#);
    }

    #[test]
    fn test_non_object_records_are_a_parse_error() {
        let project = Project::new();
        project.write(DEFAULT_DATASET, r#"["apple", "grape"]"#);

        assert!(matches!(project.run().unwrap_err(), CurateError::Parse { .. }));
    }

    #[test]
    fn test_dry_run_leaves_dataset() {
        let project = Project::new();
        project.write(DEFAULT_DATASET, r#"[{"word":"zephyr","tier":3}, {"word":"abc","tier":1}]"#);

        let mut config = project.config();
        config.dry_run = true;
        let summary = Processor::new(config).process().unwrap();

        assert_eq!(summary.curated, 1);
        assert_eq!(summary.written, None);
        assert_eq!(
            project.read(DEFAULT_DATASET),
            r#"[{"word":"zephyr","tier":3}, {"word":"abc","tier":1}]"#
        );
    }

    #[test]
    fn test_separate_output_path() {
        let project = Project::new();
        project.write(DEFAULT_WORDLIST, "apple\n");

        let mut config = project.config();
        config.output = project.dir.path().join("out").join("dictionary.json");
        let summary = Processor::new(config).process().unwrap();

        assert_eq!(project.read("out/dictionary.json"), r#"[{"word": "apple", "tier": 1}]"#);
        assert_eq!(summary.written, Some(30));
        assert!(!project.dir.path().join(DEFAULT_DATASET).exists());
    }
}
