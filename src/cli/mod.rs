use clap::{Args, Parser, Subcommand, ValueEnum};
use prefixtrie::dataset::{Alphabet, Format};

/// Build a prefix tree from a file of key/payload records and query it.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Record file, one `key<delimiter>payload` pair per line. Use `-` for stdin.
    pub file: clio::Input,
    /// Format of the record file.
    #[arg(short, long, value_enum, default_value_t = RecordFormat::TSV)]
    pub format: RecordFormat,
    /// How keys are broken into trie elements.
    #[arg(short, long, value_enum, default_value_t = KeyAlphabet::Chars)]
    pub alphabet: KeyAlphabet,

    #[command(subcommand)]
    pub cmd: Cmd,
}

#[derive(Debug, Subcommand)]
pub enum Cmd {
    /// Print the payload stored under a key.
    Get(OptsGet),
    /// Print every entry in traversal order.
    Show(OptsShow),
    /// Print the entries whose key matches a regex pattern.
    Match(OptsMatch),
    /// Display statistics about the trie.
    Stats(OptsStats),
    /// Check the structure of the trie.
    Check,
}

#[derive(Debug, Args)]
pub struct OptsGet {
    /// Key to look up.
    pub key: String,
}

#[derive(Debug, Default, Args)]
pub struct OptsShow {
    /// Print the prefix fragment of every node on the path instead of the joined key.
    #[arg(short, long)]
    pub fragments: bool,
}

#[derive(Debug, Args)]
pub struct OptsMatch {
    /// Regex pattern to match against the keys.
    pub pattern: String,

    #[command(flatten)]
    pub show: OptsShow,
}

#[derive(Debug, Args)]
pub struct OptsStats {
    #[arg(short, long, value_enum, default_value_t = StatFormat::Human)]
    pub format: StatFormat,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, ValueEnum)]
pub enum StatFormat {
    /// Print the stats in a human-readable format.
    #[default]
    Human,
    /// Print the stats in a machine-readable format (JSON).
    Json,
}

#[derive(Debug, ValueEnum, Clone, Copy, PartialEq, Eq)]
pub enum RecordFormat {
    CSV,
    TSV,
}

impl From<RecordFormat> for Format {
    fn from(value: RecordFormat) -> Self {
        match value {
            RecordFormat::CSV => Format::Csv,
            RecordFormat::TSV => Format::Tsv,
        }
    }
}

#[derive(Debug, ValueEnum, Clone, Copy, PartialEq, Eq)]
pub enum KeyAlphabet {
    /// Unicode scalar values.
    Chars,
    /// User-perceived characters.
    Graphemes,
    /// Words and the separators between them.
    Words,
}

impl From<KeyAlphabet> for Alphabet {
    fn from(value: KeyAlphabet) -> Self {
        match value {
            KeyAlphabet::Chars => Alphabet::Chars,
            KeyAlphabet::Graphemes => Alphabet::Graphemes,
            KeyAlphabet::Words => Alphabet::Words,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_match() {
        let cli = Cli::try_parse_from(["prefixtrie", "-", "-a", "words", "match", "^ab", "-f"]).unwrap();
        assert_eq!(cli.alphabet, KeyAlphabet::Words);
        assert_eq!(cli.format, RecordFormat::TSV);
        match cli.cmd {
            Cmd::Match(opts) => {
                assert_eq!(opts.pattern, "^ab");
                assert!(opts.show.fragments);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }
}
