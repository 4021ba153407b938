use std::path::PathBuf;

use clap::Parser;

use crate::cli::Cli;
use crate::terminal::env_disables_color;

fn env_with(pairs: &'static [(&'static str, &'static str)]) -> impl Fn(&str) -> Option<String> {
    move |key: &str| {
        pairs
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.to_string())
    }
}

#[test]
fn test_defaults() {
    let cli = Cli::try_parse_from(["thesaurus", "happy"]).unwrap();

    assert_eq!(cli.word, "happy");
    assert_eq!(cli.config, PathBuf::from("~/.define.conf.json"));
    assert!(!cli.disable_color);
    assert!(cli.category.is_none());
    assert!(cli.exclude_tags.is_empty());
    assert!(cli.lang.is_none());
    assert!(!cli.title);
    assert!(cli.pronunciation.is_none());
    assert!(!cli.group_homographs);
    assert!(!cli.verbose);
}

#[test]
fn test_all_flags() {
    let cli = Cli::try_parse_from([
        "thesaurus",
        "-c",
        "/tmp/define.json",
        "--disable-color",
        "--category",
        "noun",
        "--exclude-tag",
        "informal",
        "--exclude-tag",
        "British",
        "--lang",
        "en-us",
        "--title",
        "--group-homographs",
        "-v",
        "bank",
    ])
    .unwrap();

    assert_eq!(cli.word, "bank");
    assert_eq!(cli.config, PathBuf::from("/tmp/define.json"));
    assert!(cli.disable_color);
    assert_eq!(cli.category.as_deref(), Some("noun"));
    assert_eq!(cli.exclude_tags, vec!["informal", "British"]);
    assert_eq!(cli.lang.as_deref(), Some("en-us"));
    assert!(cli.title);
    assert!(cli.group_homographs);
    assert!(cli.verbose);
}

#[test]
fn test_word_is_required() {
    assert!(Cli::try_parse_from(["thesaurus"]).is_err());
}

#[test]
fn test_no_color_env() {
    assert!(env_disables_color(env_with(&[("NO_COLOR", "")])));
    assert!(env_disables_color(env_with(&[("TERM", "dumb")])));
    assert!(env_disables_color(env_with(&[("TERM", "DUMB")])));
    assert!(!env_disables_color(env_with(&[("TERM", "xterm-256color")])));
    assert!(!env_disables_color(env_with(&[])));
}
