use crate::app_config::{AppConfig, Environment};
use crate::ranking::{GatePolicy, RankingConfig};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files — useful for testing
/// or when the caller manages env setup.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// This is the core parsing/validation logic, decoupled from the actual
/// environment so it can be tested with a pure `HashMap` lookup — no
/// `set_var`/`remove_var` needed.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;

    let require = |var: &str| -> Result<String, ConfigError> {
        lookup(var).map_err(|_| ConfigError::MissingEnvVar(var.to_string()))
    };

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_addr = |var: &str, default: &str| -> Result<SocketAddr, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<usize>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let backend_base_url = require("NICHEPULSE_BACKEND_URL")?;

    let env = parse_environment(&or_default("NICHEPULSE_ENV", "development"));
    let bind_addr = parse_addr("NICHEPULSE_BIND_ADDR", "0.0.0.0:3000")?;
    let log_level = or_default("NICHEPULSE_LOG_LEVEL", "info");
    let user_agent = or_default("NICHEPULSE_USER_AGENT", "nichepulse/0.1 (trend-discovery)");

    let subreddits: Vec<String> = or_default(
        "NICHEPULSE_SUBREDDITS",
        "entrepreneur,productivity,SideProject",
    )
    .split(',')
    .map(str::trim)
    .filter(|s| !s.is_empty())
    .map(ToOwned::to_owned)
    .collect();

    let backend_timeout_secs = parse_u64("NICHEPULSE_BACKEND_TIMEOUT_SECS", "15")?;
    let corpus_limit = parse_usize("NICHEPULSE_CORPUS_LIMIT", "400")?;
    let snippet_timeout_secs = parse_u64("NICHEPULSE_SNIPPET_TIMEOUT_SECS", "6")?;
    let snippets_per_trend = parse_usize("NICHEPULSE_SNIPPETS_PER_TREND", "5")?;
    let max_concurrent_enrichments = parse_usize("NICHEPULSE_MAX_CONCURRENT_ENRICHMENTS", "15")?;

    let mut ranking = RankingConfig {
        min_viable_corpus: parse_usize("NICHEPULSE_MIN_VIABLE_CORPUS", "100")?,
        enrich_depth: parse_usize("NICHEPULSE_ENRICH_DEPTH", "15")?,
        final_size: parse_usize("NICHEPULSE_FINAL_SIZE", "10")?,
        ..RankingConfig::default()
    };
    ranking.gate_policy = parse_gate_policy(&or_default("NICHEPULSE_GATE_POLICY", "lenient"))?;

    if ranking.final_size > ranking.enrich_depth {
        return Err(ConfigError::InvalidEnvVar {
            var: "NICHEPULSE_FINAL_SIZE".to_string(),
            reason: format!(
                "final size {} exceeds enrich depth {}",
                ranking.final_size, ranking.enrich_depth
            ),
        });
    }

    Ok(AppConfig {
        env,
        bind_addr,
        log_level,
        backend_base_url,
        backend_timeout_secs,
        user_agent,
        subreddits,
        corpus_limit,
        snippet_timeout_secs,
        snippets_per_trend,
        max_concurrent_enrichments,
        ranking,
    })
}

/// Parse a string into an `Environment` variant.
///
/// Unrecognized values default to `Environment::Development`.
fn parse_environment(s: &str) -> Environment {
    match s {
        "production" => Environment::Production,
        "test" => Environment::Test,
        _ => Environment::Development,
    }
}

fn parse_gate_policy(s: &str) -> Result<GatePolicy, ConfigError> {
    match s {
        "lenient" => Ok(GatePolicy::Lenient),
        "strict" => Ok(GatePolicy::Strict),
        other => Err(ConfigError::InvalidEnvVar {
            var: "NICHEPULSE_GATE_POLICY".to_string(),
            reason: format!("expected 'lenient' or 'strict', got '{other}'"),
        }),
    }
}
