use std::path::PathBuf;

use clap::Parser;
use thesaurus_config::DEFAULT_CONFIG_PATH;

/// Look up synonyms and antonyms of a word in the Oxford thesaurus
///
/// Credentials are read from OXFORD_DICTIONARY_APP_ID and
/// OXFORD_DICTIONARY_APP_KEY, or from the config file:
///   {"OxfordDictionary": {"AppID": "...", "AppKey": "..."}}
#[derive(Parser, Debug)]
#[command(name = "thesaurus")]
#[command(version)]
#[command(about, long_about = None)]
pub struct Cli {
    /// Word to look up
    #[arg(value_name = "WORD")]
    pub word: String,

    /// Path to config file
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,

    /// Disable color output
    ///
    /// Color is also disabled when NO_COLOR is set, TERM is "dumb" or
    /// stdout is not a terminal.
    #[arg(long)]
    pub disable_color: bool,

    /// Only show one lexical category (noun, verb, adjective, ...)
    #[arg(long, value_name = "CATEGORY")]
    pub category: Option<String>,

    /// Hide a region, domain or register tag (repeatable)
    #[arg(long = "exclude-tag", value_name = "TAG")]
    pub exclude_tags: Vec<String>,

    /// Language code, overrides the config file
    #[arg(long, value_name = "CODE")]
    pub lang: Option<String>,

    /// Print the underlined headword before each result
    #[arg(long)]
    pub title: bool,

    /// Show the pronunciation in this phonetic notation (e.g. IPA) after
    /// each category header
    #[arg(long, value_name = "NOTATION")]
    pub pronunciation: Option<String>,

    /// Group results by homograph number
    #[arg(long)]
    pub group_homographs: bool,

    /// Debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}
