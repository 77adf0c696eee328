//! Reelfind - Entry Point

use clap::Parser;
use reelfind::config::{
    apply_cli_overrides, apply_env_overrides, load_config_with_precedence, merge_config,
    CliOverrides,
};
use reelfind::model::AppError;
use reelfind::omdb::OmdbClient;
use reelfind::view::{run_with_config, ColorConfig};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

/// Reelfind - search OMDb for movies from the terminal
#[derive(Parser, Debug)]
#[command(name = "reelfind")]
#[command(version)]
#[command(about = "Terminal movie search over the OMDb API")]
pub struct Args {
    /// Query searched at startup
    #[arg(short, long)]
    pub query: Option<String>,

    /// OMDb API key (overrides OMDB_API_KEY and the config file)
    #[arg(long)]
    pub api_key: Option<String>,

    /// Search endpoint base URL
    #[arg(long)]
    pub api_url: Option<String>,

    /// Delay after the last keystroke before searching
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    pub debounce_ms: Option<u64>,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,
}

impl Args {
    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            initial_query: self.query.clone(),
            api_key: self.api_key.clone(),
            api_url: self.api_url.clone(),
            debounce_ms: self.debounce_ms,
        }
    }
}

fn main() -> Result<(), AppError> {
    let args = Args::parse();

    // A .env file is optional; real environment variables win
    dotenvy::dotenv().ok();

    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = load_config_with_precedence(args.config.clone())?;
        let merged = merge_config(config_file);
        let with_env = apply_env_overrides(merged);
        apply_cli_overrides(with_env, args.overrides())
    };

    let _log_guard = reelfind::logging::init(&config.log_file_path)?;

    info!(
        config = ?config,
        "Configuration loaded and resolved"
    );

    let api_key = config.require_api_key()?;
    let client = OmdbClient::new(config.api_url.clone(), api_key, config.request_timeout)?;

    run_with_config(
        &config,
        Arc::new(client),
        ColorConfig::from_env_and_args(args.no_color),
    )?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_help_does_not_error() {
        let result = Args::try_parse_from(["reelfind", "--help"]);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_version_does_not_error() {
        let result = Args::try_parse_from(["reelfind", "--version"]);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
    }

    #[test]
    fn test_no_args_defaults() {
        let args = Args::parse_from(["reelfind"]);
        assert_eq!(args.query, None);
        assert_eq!(args.api_key, None);
        assert_eq!(args.api_url, None);
        assert_eq!(args.debounce_ms, None);
        assert_eq!(args.config, None);
        assert!(!args.no_color);
        assert_eq!(args.overrides(), CliOverrides::default());
    }

    #[test]
    fn test_query_short_and_long() {
        let short = Args::parse_from(["reelfind", "-q", "Alien"]);
        let long = Args::parse_from(["reelfind", "--query", "Alien"]);
        assert_eq!(short.query.as_deref(), Some("Alien"));
        assert_eq!(long.query.as_deref(), Some("Alien"));
    }

    #[test]
    fn test_debounce_rejects_zero() {
        let result = Args::try_parse_from(["reelfind", "--debounce-ms", "0"]);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
    }

    #[test]
    fn test_debounce_rejects_non_number() {
        let result = Args::try_parse_from(["reelfind", "--debounce-ms", "soon"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_config_path() {
        let args = Args::parse_from(["reelfind", "--config", "/custom/config.toml"]);
        assert_eq!(args.config, Some(PathBuf::from("/custom/config.toml")));
    }

    #[test]
    fn test_flags_flow_through_config_precedence_chain() {
        use reelfind::config::{apply_env_overrides_from, ConfigFile};
        use std::time::Duration;

        let args = Args::parse_from([
            "reelfind",
            "--query",
            "Alien",
            "--api-key",
            "cli-key",
            "--debounce-ms",
            "250",
        ]);

        let config_file = ConfigFile {
            initial_query: Some("Heat".to_string()),
            api_key: Some("file-key".to_string()),
            ..ConfigFile::default()
        };

        let merged = merge_config(Some(config_file));
        assert_eq!(merged.initial_query, "Heat");

        let with_env = apply_env_overrides_from(merged, |name| {
            (name == "OMDB_API_KEY").then(|| "env-key".to_string())
        });
        assert_eq!(with_env.api_key.as_ref().map(|k| k.expose()), Some("env-key"));

        let resolved = apply_cli_overrides(with_env, args.overrides());
        assert_eq!(resolved.initial_query, "Alien");
        assert_eq!(resolved.api_key.as_ref().map(|k| k.expose()), Some("cli-key"));
        assert_eq!(resolved.debounce, Duration::from_millis(250));
    }
}
