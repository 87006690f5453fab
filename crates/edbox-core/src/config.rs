use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::io::IsTerminal;
use std::path::{Path, PathBuf};

/// Largest accepted `indent` (spaces per reply level).
pub const MAX_INDENT: usize = 16;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserConfig {
    #[serde(default)]
    pub output: Option<String>,
    #[serde(default = "default_indent")]
    pub indent: usize,
}

impl Default for UserConfig {
    fn default() -> Self {
        Self {
            output: None,
            indent: default_indent(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EffectiveConfig {
    pub user: UserConfig,
    pub resolved_output: String,
}

/// Location of the user config file, if the platform has a config dir.
#[must_use]
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("edbox/config.toml"))
}

pub fn load_config_from(path: &Path) -> Result<UserConfig> {
    if !path.exists() {
        return Ok(UserConfig::default());
    }

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let config = toml::from_str::<UserConfig>(&content)
        .with_context(|| format!("Failed to parse {}", path.display()))?;

    if config.indent > MAX_INDENT {
        anyhow::bail!(
            "Invalid indent {} in {}: must be at most {MAX_INDENT}",
            config.indent,
            path.display()
        );
    }
    Ok(config)
}

pub fn load_user_config() -> Result<UserConfig> {
    let Some(path) = user_config_path() else {
        return Ok(UserConfig::default());
    };
    load_config_from(&path)
}

pub fn resolve_config(cli_json: bool) -> Result<EffectiveConfig> {
    let user = load_user_config()?;

    let env_format = env::var("FORMAT").ok();
    let resolved_output = resolve_output(cli_json, user.output.clone(), env_format)?;
    tracing::debug!(output = %resolved_output, indent = user.indent, "resolved config");

    Ok(EffectiveConfig {
        user,
        resolved_output,
    })
}

fn resolve_output(
    cli_json: bool,
    user_output: Option<String>,
    env_format: Option<String>,
) -> Result<String> {
    fn normalize_output_mode(raw: &str) -> Option<&'static str> {
        match raw.trim().to_ascii_lowercase().as_str() {
            // canonical values
            "pretty" => Some("pretty"),
            "text" => Some("text"),
            "json" => Some("json"),
            // aliases
            "human" => Some("pretty"),
            "table" => Some("text"),
            _ => None,
        }
    }

    if cli_json {
        return Ok("json".to_string());
    }

    if let Some(mode) = env_format.as_deref().and_then(normalize_output_mode) {
        return Ok(mode.to_string());
    }

    if let Some(mode) = user_output.as_deref().and_then(normalize_output_mode) {
        return Ok(mode.to_string());
    }

    if std::io::stdout().is_terminal() {
        Ok("pretty".to_string())
    } else {
        Ok("text".to_string())
    }
}

const fn default_indent() -> usize {
    2
}
