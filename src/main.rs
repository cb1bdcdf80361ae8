mod cli;

use std::io::Write;

use clap::Parser;
use cli::{Cli, Cmd, OptsShow, StatFormat};
use itertools::Itertools;
use prefixtrie::{Node, dataset};
use regex::Regex;
use thiserror::Error;

type Trie = Node<String, String>;

#[derive(Debug, Error)]
enum Error {
    #[error("Unable to read the records: {0}")]
    Io(#[from] std::io::Error),
    #[error("Unable to parse the records: {0}")]
    Records(#[from] csv::Error),
    #[error("The key: '{0}' is not in the trie")]
    NotFound(String),
    #[error("The regex pattern is invalid: {0}")]
    RegexPattern(#[from] regex::Error),
    #[error("Unable to format the stats: {0}")]
    Json(#[from] serde_json::Error),
    #[error("The trie is corrupt: {0}")]
    Trie(#[from] prefixtrie::Error),
}

fn main() {
    if let Err(err) = entry() {
        eprintln!("{}", err);
        std::process::exit(1)
    }
}

fn entry() -> Result<(), Error> {
    let mut cli = Cli::parse();
    let alphabet: dataset::Alphabet = cli.alphabet.into();
    let trie = dataset::load(cli.file.lock(), cli.format.into(), alphabet)?;

    match cli.cmd {
        Cmd::Get(opts) => {
            let key = alphabet.split(&opts.key);
            let payload = trie.get(&key).ok_or(Error::NotFound(opts.key))?;
            println!("{payload}");
        }
        Cmd::Show(opts) => show(&trie, &opts, |_| true)?,
        Cmd::Match(opts) => {
            let re = Regex::new(&opts.pattern)?;
            show(&trie, &opts.show, |key| re.is_match(key))?
        }
        Cmd::Stats(opts) => {
            let stats = trie.stats();
            match opts.format {
                StatFormat::Human => {
                    println!("Nodes: {}", stats.nodes);
                    println!("Entries: {}", stats.entries);
                    println!("Branches: {}", stats.branches);
                    println!("Max depth: {}", stats.max_depth);
                    println!("Elements: {}", stats.elements);
                }
                StatFormat::Json => println!("{}", serde_json::to_string_pretty(&stats)?),
            }
        }
        Cmd::Check => {
            trie.validate()?;
            println!("ok");
        }
    }
    Ok(())
}

/// Prints the entries whose joined key passes `filter`, in traversal order.
fn show(trie: &Trie, opts: &OptsShow, filter: impl Fn(&str) -> bool) -> Result<(), Error> {
    let mut lines = Vec::new();
    trie.traverse(|prefixes, path| {
        let node = path[path.len() - 1];
        let key = prefixes.iter().copied().flatten().chain(node.prefix()).join("");
        if !filter(&key) {
            return;
        }
        let payload = node.payload().map_or("", String::as_str);
        lines.push(if opts.fragments {
            let chain = prefixes.iter().map(|prefix| prefix.concat()).join("|");
            format!("{chain}|{} : {payload}", node.prefix().concat())
        } else {
            format!("{key}\t{payload}")
        });
    });

    let mut f = std::io::stdout().lock();
    for line in lines {
        writeln!(f, "{line}")?;
    }
    Ok(())
}
