//! Startup: environment, config, logging, and wiring of the assistant.

use std::path::{Path, PathBuf};

use fellah_ai::{
    AiError, ConversationManager, FarmProfile, GroqClient, GroqConfig, LocalizationTable,
};
use fellah_common::FellahError;
use fellah_config::schema::LogLevel;
use fellah_config::FellahConfig;
use tracing::{error, info, warn};
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{reload, EnvFilter, Registry};

use crate::cli::Args;

/// Load environment variables from a .env file (KEY=VALUE lines).
///
/// Variables already set in the environment win.
pub fn load_dotenv() {
    let candidates = [
        PathBuf::from(".env"),
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("..")
            .join("..")
            .join(".env"),
    ];

    for path in &candidates {
        if let Ok(contents) = std::fs::read_to_string(path) {
            for (key, value) in parse_dotenv(&contents) {
                if std::env::var(key).is_err() {
                    std::env::set_var(key, value);
                }
            }
            return;
        }
    }
}

fn parse_dotenv(contents: &str) -> Vec<(&str, &str)> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| line.split_once('='))
        .map(|(key, value)| {
            let key = key.trim().trim_start_matches("export ").trim();
            let value = value.trim().trim_matches('"').trim_matches('\'');
            (key, value)
        })
        .filter(|(key, _)| !key.is_empty())
        .collect()
}

/// Handle for swapping the log filter once the config file is known.
pub type LogHandle = reload::Handle<EnvFilter, Registry>;

fn env_filter(level: LogLevel) -> EnvFilter {
    EnvFilter::from_default_env()
        .add_directive(level.directive().parse().expect("static directive"))
}

/// Build the log subscriber used from the first line of startup.
///
/// The filter starts at `--log-level` (or info) and sits behind a reload
/// layer so the config file's level can be applied after loading.
pub fn logging_subscriber<W>(
    args: &Args,
    writer: W,
) -> (impl tracing::Subscriber + Send + Sync + 'static, LogHandle)
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let level = args.log_level.unwrap_or_default();
    let (filter, handle) = reload::Layer::new(env_filter(level));
    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(writer));
    (subscriber, handle)
}

/// Install the global subscriber, logging to stderr.
pub fn init_logging(args: &Args) -> LogHandle {
    let (subscriber, handle) = logging_subscriber(args, std::io::stderr);
    subscriber.init();
    handle
}

/// Switch to `logging.level` from the config unless `--log-level` was given.
pub fn apply_config_log_level(handle: &LogHandle, args: &Args, config: &FellahConfig) {
    if args.log_level.is_some() {
        return;
    }
    if let Err(e) = handle.reload(env_filter(config.logging.level)) {
        warn!("failed to apply logging.level from config: {e}");
    }
}

/// Load the config file named on the command line, or the default one.
pub fn load_config(args: &Args) -> Result<FellahConfig, FellahError> {
    let config = match &args.config {
        Some(path) => fellah_config::load_config_from(path)?,
        None => fellah_config::load_config()?,
    };
    Ok(config)
}

/// Build the Groq client. A missing API key is fatal here.
pub fn build_client(config: &FellahConfig) -> Result<GroqClient, FellahError> {
    let assistant = &config.assistant;
    let mut groq = GroqConfig::from_env_var(&assistant.api_key_env)?
        .with_model(&assistant.model)
        .with_temperature(assistant.temperature)
        .with_max_tokens(assistant.max_tokens);
    if let Some(url) = &assistant.base_url {
        groq = groq.with_base_url(url);
    }
    info!(model = %groq.model, "assistant configured");
    connect(groq)
}

/// Construct the client, keeping credential problems as config errors.
pub fn connect(groq: GroqConfig) -> Result<GroqClient, FellahError> {
    GroqClient::new(groq).map_err(|e| match e {
        AiError::Config(config_err) => FellahError::Config(config_err),
        other => FellahError::Ai(other.to_string()),
    })
}

/// Build the conversation manager from config, with CLI overrides.
pub fn build_manager(config: &FellahConfig, args: &Args) -> ConversationManager {
    let mut localization = match &config.localization.terms {
        Some(terms) => LocalizationTable::new(
            terms
                .iter()
                .map(|t| (t.source.as_str(), t.target.as_str())),
        ),
        None => LocalizationTable::darija(),
    };
    localization = localization
        .with_greeting(&config.localization.greeting)
        .with_suffix(&config.localization.suffix);

    let mut manager = ConversationManager::new()
        .with_language(args.language.unwrap_or(config.conversation.language))
        .with_max_context_tokens(config.conversation.max_context_tokens)
        .with_localization(localization);

    let farm = &config.farm;
    if farm.enabled || args.region.is_some() || args.crop.is_some() {
        manager = manager.with_farm_profile(FarmProfile::new(
            args.region.unwrap_or(farm.region),
            args.crop.unwrap_or(farm.crop),
        ));
    }
    manager
}

/// Read the extra-context file.
///
/// Unreadable or non-UTF-8 files are reported and ignored so the
/// conversation can continue without them.
pub fn read_context_file(path: &Path) -> Option<String> {
    let bytes = match std::fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) => {
            error!("failed to read context file {}: {e}", path.display());
            return None;
        }
    };
    match String::from_utf8(bytes) {
        Ok(text) => {
            info!(bytes = text.len(), "loaded context file {}", path.display());
            Some(text)
        }
        Err(e) => {
            error!("context file {} is not UTF-8: {e}", path.display());
            None
        }
    }
}
