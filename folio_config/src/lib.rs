use std::path::{Path, PathBuf};

use anyhow::Context;
use config::{Environment, File, FileFormat};
pub use duration::Duration;
use folio_models::{profile::Profile, theme::Theme};
use serde::Deserialize;
use url::Url;

mod duration;

pub const DEFAULT_CONFIG_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../config.toml");

/// Colon separated list of additional config files, applied in order on top
/// of the default config.
pub const CONFIG_PATH_ENV: &str = "FOLIO_CONFIG_PATH";

/// Prefix of environment variables overriding single config values, e.g.
/// `FOLIO_CONTACT__ENDPOINT`.
pub const ENV_PREFIX: &str = "FOLIO";

pub fn load() -> anyhow::Result<Config> {
    let vars = std::env::vars_os()
        .filter_map(|(key, value)| Some((key.into_string().ok()?, value.into_string().ok()?)))
        .collect();

    load_from_env(vars)
}

/// Like [`load`], but reads [`CONFIG_PATH_ENV`] and the `FOLIO_*` overrides
/// from `vars` instead of the process environment.
pub fn load_from_env(vars: config::Map<String, String>) -> anyhow::Result<Config> {
    let extra_paths = vars
        .get(CONFIG_PATH_ENV)
        .map(|paths| std::env::split_paths(paths).collect::<Vec<_>>())
        .unwrap_or_default();

    let paths = std::iter::once(PathBuf::from(DEFAULT_CONFIG_PATH))
        .chain(extra_paths)
        .collect::<Vec<_>>();

    let builder = with_files(config::Config::builder(), &paths)?.add_source(
        Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
            .source(Some(vars)),
    );

    build(builder)
}

/// Loads the given config files and applies the `overrides`, each being a
/// TOML snippet like `contact.timeout = "1s"`.
pub fn load_with_override(paths: &[impl AsRef<Path>], overrides: &[&str]) -> anyhow::Result<Config> {
    let builder = overrides.iter().fold(
        with_files(config::Config::builder(), paths)?,
        |builder, &snippet| builder.add_source(File::from_str(snippet, FileFormat::Toml)),
    );

    build(builder)
}

fn with_files(
    builder: config::ConfigBuilder<config::builder::DefaultState>,
    paths: &[impl AsRef<Path>],
) -> anyhow::Result<config::ConfigBuilder<config::builder::DefaultState>> {
    paths.iter().try_fold(builder, |builder, path| {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file at {}", path.display()))?;
        let source = File::from_str(&content, FileFormat::Toml);
        anyhow::Ok(builder.add_source(source))
    })
}

fn build(builder: config::ConfigBuilder<config::builder::DefaultState>) -> anyhow::Result<Config> {
    builder
        .build()?
        .try_deserialize()
        .context("Failed to load config")
}

#[derive(Debug, Deserialize)]
pub struct Config {
    pub contact: ContactConfig,
    #[serde(default)]
    pub theme: ThemeConfig,
    pub profile: Profile,
}

#[derive(Debug, Deserialize)]
pub struct ContactConfig {
    /// URL of the form processing endpoint the contact form posts to.
    pub endpoint: Url,
    pub timeout: Duration,
    /// Address users are referred to if the endpoint rejects a message.
    pub fallback_email: String,
    pub success_message: String,
    pub recaptcha_sitekey: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ThemeConfig {
    #[serde(default)]
    pub initial: Theme,
}
