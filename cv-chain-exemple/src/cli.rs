use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Vowel/consonant Markov chain prediction simulator.
#[derive(Parser, Debug)]
#[command(
    name = "cv-chain",
    version,
    about = "Fits a vowel/consonant Markov chain to a text and scores its predictions"
)]
pub struct Cli {
    /// Path to a TOML configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Read the text from this file (falls back to the inline text if missing).
    #[arg(short, long, conflicts_with = "inline")]
    pub file: Option<PathBuf>,

    /// Use the inline text instead of reading a file.
    #[arg(long)]
    pub inline: bool,

    /// Override the inline / fallback text.
    #[arg(short, long)]
    pub text: Option<String>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = Format::Text)]
    pub format: Format,

    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// How results are printed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// Human-readable tables.
    Text,
    /// A single JSON document.
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_flags() {
        let cli = Cli::parse_from(["cv-chain", "-vv", "--file", "corpus.txt", "--format", "json"]);
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.file, Some(PathBuf::from("corpus.txt")));
        assert_eq!(cli.format, Format::Json);
        assert!(!cli.inline);
    }

    #[test]
    fn file_conflicts_with_inline() {
        assert!(Cli::try_parse_from(["cv-chain", "--inline", "--file", "a.txt"]).is_err());
    }
}
