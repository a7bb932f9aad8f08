use std::path::{Path, PathBuf};

use super::types::AppConfig;
use crate::error::ConfigError;

pub const CONFIG_FILE: &str = "wechat-report.toml";

pub const ENV_INTERPRETER: &str = "WECHAT_REPORT_INTERPRETER";
pub const ENV_SCRIPTS_DIR: &str = "WECHAT_REPORT_SCRIPTS_DIR";
pub const ENV_ECHO: &str = "WECHAT_REPORT_ECHO";

/// Loads `wechat-report.toml` from the working directory (if present) and
/// applies environment overrides on top.
pub fn load_default() -> Result<AppConfig, ConfigError> {
    let mut cfg = load_from_path(Path::new(CONFIG_FILE))?;
    apply_env_overrides(&mut cfg, |key| std::env::var(key).ok());
    Ok(cfg)
}

/// A missing file yields the defaults; an unreadable or malformed one is an error.
pub fn load_from_path(path: &Path) -> Result<AppConfig, ConfigError> {
    if !path.exists() {
        return Ok(AppConfig::default());
    }
    let s = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let cfg = toml::from_str::<AppConfig>(&s).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), "loaded config file");
    Ok(cfg)
}

pub fn apply_env_overrides<F>(cfg: &mut AppConfig, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(v) = non_blank(lookup(ENV_INTERPRETER)) {
        cfg.interpreter = v;
    }
    if let Some(v) = non_blank(lookup(ENV_SCRIPTS_DIR)) {
        cfg.scripts_dir = Some(PathBuf::from(v));
    }
    if let Some(v) = non_blank(lookup(ENV_ECHO)) {
        cfg.echo_command = !matches!(
            v.trim().to_ascii_lowercase().as_str(),
            "0" | "false" | "no" | "off"
        );
    }
}

fn non_blank(v: Option<String>) -> Option<String> {
    v.filter(|s| !s.trim().is_empty())
}
