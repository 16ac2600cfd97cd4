//! Command-line interface definition for curate-dictionary
//!
//! Every flag is optional. Running with no arguments curates the project
//! found in the current directory using the standard layout.

use clap::Parser;
use std::path::PathBuf;

/// Default raw wordlist, relative to the project root
pub const DEFAULT_WORDLIST: &str = "public/wordlist-20210729.txt";

/// Default curated dataset, relative to the project root
pub const DEFAULT_DATASET: &str = "public/dictionary.json";

/// Default denylist, relative to the project root
pub const DEFAULT_DENYLIST: &str = "public/dictionary-denylist.txt";

/// System proper-names list
pub const DEFAULT_PROPER_NAMES: &str = "/usr/share/dict/propernames";

/// Curate the word-game dictionary
///
/// Builds the dictionary from the raw wordlist when it exists, otherwise
/// re-curates the existing dictionary.json in place.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "curate-dictionary",
    author = "m0h1nd4",
    version,
    about = "Curate the word-game dictionary",
    long_about = r#"
Curate the word-game dictionary.

If the raw wordlist exists, the dictionary is built from it and every word
gets a tier from its length. Otherwise the existing dictionary is re-curated
and its tiers are kept.

FILTERS:
    - length 4-12
    - lowercase ASCII letters only
    - not a proper name (system propernames list, if present)
    - not in the denylist (if present; '#' lines are comments)

TIERS (wordlist mode):
    1 - length 4-6
    2 - length 7-8
    3 - length 9-12

EXAMPLES:
    # Curate the project in the current directory
    curate-dictionary

    # Curate another checkout and show rejection statistics
    curate-dictionary --root ../word-game --stats

    # See what would change without writing anything
    curate-dictionary --dry-run --stats
"#
)]
pub struct Args {
    /// Project root that the default paths are resolved against
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub root: PathBuf,

    /// Raw wordlist (default: <ROOT>/public/wordlist-20210729.txt)
    #[arg(long, value_name = "PATH")]
    pub wordlist: Option<PathBuf>,

    /// Existing dataset (default: <ROOT>/public/dictionary.json)
    #[arg(long, value_name = "PATH")]
    pub dataset: Option<PathBuf>,

    /// Output file (default: the dataset path)
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Denylist file (default: <ROOT>/public/dictionary-denylist.txt)
    #[arg(long, value_name = "PATH", conflicts_with = "no_denylist")]
    pub denylist: Option<PathBuf>,

    /// Proper-names file
    #[arg(long, value_name = "PATH", conflicts_with = "no_proper_names")]
    pub proper_names: Option<PathBuf>,

    /// Do not exclude proper names
    #[arg(long, default_value_t = false)]
    pub no_proper_names: bool,

    /// Do not apply the denylist
    #[arg(long, default_value_t = false)]
    pub no_denylist: bool,

    /// Show rejection and tier statistics
    #[arg(long, default_value_t = false)]
    pub stats: bool,

    /// Quiet mode - summary line only
    #[arg(short, long, default_value_t = false, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Verbose mode - detailed logging
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,

    /// Dry run - curate but do not write the output
    #[arg(long, default_value_t = false)]
    pub dry_run: bool,
}

impl Args {
    pub fn wordlist_path(&self) -> PathBuf {
        self.wordlist
            .clone()
            .unwrap_or_else(|| self.root.join(DEFAULT_WORDLIST))
    }

    pub fn dataset_path(&self) -> PathBuf {
        self.dataset
            .clone()
            .unwrap_or_else(|| self.root.join(DEFAULT_DATASET))
    }

    /// Output path, defaulting to the dataset so it is rewritten in place
    pub fn output_path(&self) -> PathBuf {
        self.output.clone().unwrap_or_else(|| self.dataset_path())
    }

    pub fn denylist_path(&self) -> Option<PathBuf> {
        if self.no_denylist {
            return None;
        }
        Some(
            self.denylist
                .clone()
                .unwrap_or_else(|| self.root.join(DEFAULT_DENYLIST)),
        )
    }

    pub fn proper_names_path(&self) -> Option<PathBuf> {
        if self.no_proper_names {
            return None;
        }
        Some(
            self.proper_names
                .clone()
                .unwrap_or_else(|| PathBuf::from(DEFAULT_PROPER_NAMES)),
        )
    }

    /// Log level implied by the verbosity flags
    pub fn log_level(&self) -> log::LevelFilter {
        if self.verbose {
            log::LevelFilter::Debug
        } else if self.quiet {
            log::LevelFilter::Error
        } else {
            log::LevelFilter::Warn
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_arguments_uses_layout() {
        let args = Args::parse_from(["curate-dictionary"]);

        assert_eq!(args.wordlist_path(), PathBuf::from("./public/wordlist-20210729.txt"));
        assert_eq!(args.dataset_path(), PathBuf::from("./public/dictionary.json"));
        assert_eq!(args.output_path(), args.dataset_path());
        assert_eq!(
            args.denylist_path(),
            Some(PathBuf::from("./public/dictionary-denylist.txt"))
        );
        assert_eq!(
            args.proper_names_path(),
            Some(PathBuf::from("/usr/share/dict/propernames"))
        );
        assert_eq!(args.log_level(), log::LevelFilter::Warn);
    }

    #[test]
    fn test_root_applies_to_project_paths() {
        let args = Args::parse_from(["curate-dictionary", "--root", "/srv/game"]);

        assert_eq!(args.dataset_path(), PathBuf::from("/srv/game/public/dictionary.json"));
        assert_eq!(
            args.proper_names_path(),
            Some(PathBuf::from("/usr/share/dict/propernames"))
        );
    }

    #[test]
    fn test_explicit_paths() {
        let args = Args::parse_from([
            "curate-dictionary",
            "--dataset",
            "in.json",
            "-o",
            "out.json",
            "--denylist",
            "deny.txt",
        ]);

        assert_eq!(args.dataset_path(), PathBuf::from("in.json"));
        assert_eq!(args.output_path(), PathBuf::from("out.json"));
        assert_eq!(args.denylist_path(), Some(PathBuf::from("deny.txt")));
    }

    #[test]
    fn test_disable_sources() {
        let args = Args::parse_from(["curate-dictionary", "--no-denylist", "--no-proper-names"]);

        assert_eq!(args.denylist_path(), None);
        assert_eq!(args.proper_names_path(), None);
    }

    #[test]
    fn test_conflicting_flags() {
        assert!(Args::try_parse_from(["curate-dictionary", "-q", "-v"]).is_err());
        assert!(
            Args::try_parse_from(["curate-dictionary", "--no-denylist", "--denylist", "x"]).is_err()
        );
    }

    #[test]
    fn test_verbose_level() {
        let args = Args::parse_from(["curate-dictionary", "-v"]);
        assert_eq!(args.log_level(), log::LevelFilter::Debug);
    }
}
