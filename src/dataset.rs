use std::io::Read;

use serde::Deserialize;
use unicode_segmentation::UnicodeSegmentation;

use crate::trie::Node;

/// Field delimiter of a record file.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    #[default]
    Tsv,
    Csv,
}

impl Format {
    fn delimiter(self) -> u8 {
        match self {
            Format::Tsv => b'\t',
            Format::Csv => b',',
        }
    }
}

/// How a key string is broken up into the elements of a trie path.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Alphabet {
    /// Unicode scalar values.
    #[default]
    Chars,
    /// Extended grapheme clusters.
    Graphemes,
    /// Words and the separators between them.
    Words,
}

impl Alphabet {
    pub fn split(self, key: &str) -> Vec<String> {
        match self {
            Alphabet::Chars => key.chars().map(String::from).collect(),
            Alphabet::Graphemes => key.graphemes(true).map(str::to_owned).collect(),
            Alphabet::Words => key.split_word_bounds().map(str::to_owned).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Record {
    pub key: String,
    pub payload: String,
}

pub fn parse(reader: impl Read, format: Format) -> Result<Vec<Record>, csv::Error> {
    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(format.delimiter())
        .has_headers(false)
        .from_reader(reader);
    rdr.deserialize().collect()
}

/// Reads every record into a fresh trie, later duplicates overwrite earlier ones.
pub fn load(
    reader: impl Read,
    format: Format,
    alphabet: Alphabet,
) -> Result<Node<String, String>, csv::Error> {
    Ok(parse(reader, format)?
        .into_iter()
        .map(|record| (alphabet.split(&record.key), record.payload))
        .collect())
}
