use std::io::Write;
use std::path::Path;

use thesaurus_client::{ClientConfig, LookupError, OxfordClient, SourceMetadata, ThesaurusSource};
use thesaurus_config::Config;
use thesaurus_render::{Palette, RenderOptions, render_grouped_result_set, render_result_set};

use crate::cli::Cli;
use crate::terminal;

/// Resolve config, query the API and return the lines to print
pub async fn run(cli: &Cli) -> anyhow::Result<Vec<String>> {
    let config = load_config(&cli.config);
    let client = OxfordClient::new(client_config(&config, cli))?;
    ensure_credentials(&config, &client.metadata())?;
    let options = render_options(cli, terminal::color_enabled(cli.disable_color));

    let lines = lookup_lines(&client, &cli.word, &options, cli.group_homographs).await?;
    Ok(lines)
}

/// Config from env and file. A missing or broken file is logged and the
/// defaults are used, so the lookup then fails on missing credentials.
pub fn load_config(path: &Path) -> Config {
    match Config::resolve(path) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("error reading config: {e}");
            Config::default()
        }
    }
}

pub fn client_config(config: &Config, cli: &Cli) -> ClientConfig {
    let mut client = ClientConfig::from_config(config);
    if let Some(lang) = &cli.lang {
        client.language = lang.clone();
    }
    client
}

/// Fail before any request when the source needs credentials and the config
/// lacks either of them
pub fn ensure_credentials(config: &Config, metadata: &SourceMetadata) -> Result<(), LookupError> {
    if metadata.requires_api_key && !config.oxford.is_complete() {
        tracing::debug!("{} requires an app id and app key", metadata.name);
        return Err(LookupError::MissingCredentials);
    }
    Ok(())
}

pub fn render_options(cli: &Cli, color: bool) -> RenderOptions {
    RenderOptions {
        palette: Palette::new(color),
        category: cli.category.clone(),
        exclude_tags: cli.exclude_tags.clone(),
        title: cli.title,
        pronunciation: cli.pronunciation.clone(),
    }
}

pub async fn lookup_lines<S: ThesaurusSource + ?Sized>(
    source: &S,
    word: &str,
    options: &RenderOptions,
    grouped: bool,
) -> Result<Vec<String>, LookupError> {
    tracing::info!("Looking up '{}' with {}", word, source.metadata().name);

    let set = source.lookup(word).await?;
    tracing::debug!("Decoded {} results", set.results.len());

    let lines = if grouped {
        render_grouped_result_set(&set, options)
    } else {
        render_result_set(&set, options)
    };
    Ok(lines)
}

pub fn write_lines(out: &mut impl Write, lines: &[String]) -> std::io::Result<()> {
    for line in lines {
        writeln!(out, "{line}")?;
    }
    out.flush()
}

/// User-facing message for a failed lookup
pub fn failure_message(err: &anyhow::Error) -> String {
    match err.downcast_ref::<LookupError>() {
        Some(LookupError::NotFound { word }) => format!("No results found for '{word}'"),
        Some(LookupError::Authentication) => {
            "Authentication failed. Check OXFORD_DICTIONARY_APP_ID and OXFORD_DICTIONARY_APP_KEY or the config file.".to_string()
        }
        Some(LookupError::MissingCredentials) => {
            "No credentials configured. Set OXFORD_DICTIONARY_APP_ID and OXFORD_DICTIONARY_APP_KEY or add them to the config file.".to_string()
        }
        Some(other) => format!("error retrieving definition: {other}"),
        None => format!("error retrieving definition: {err:#}"),
    }
}
