use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

use crate::marvel::Credentials;

const CONFIG_FILE: &str = "comicpage.toml";
const DEFAULT_GATEWAY: &str = "https://gateway.marvel.com/v1/public";

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub api: ApiConfig,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default)]
    pub public_key: String,
    #[serde(default)]
    pub private_key: String,
    #[serde(default)]
    pub gateway: Option<String>,
}

/// Fully resolved config after env > file merge.
pub struct ResolvedConfig {
    pub gateway: String,
    pub credentials: Credentials,
}

impl ResolvedConfig {
    pub fn resolve() -> Result<Self> {
        // 1. File layer (optional when both keys come from the environment)
        let file_config = load_if_present()?;

        // 2. Env layer
        let env_public = std::env::var("MARVEL_PUBLIC_KEY").ok();
        let env_private = std::env::var("MARVEL_PRIVATE_KEY").ok();
        let env_gateway = std::env::var("MARVEL_GATEWAY_URL").ok();

        merge(file_config, env_public, env_private, env_gateway)
    }
}

/// Merge env over file into the final credentials + gateway.
/// Split out of `resolve` so tests can drive it without touching the
/// process environment.
fn merge(
    file: Option<Config>,
    env_public: Option<String>,
    env_private: Option<String>,
    env_gateway: Option<String>,
) -> Result<ResolvedConfig> {
    let api = file.map(|c| c.api);

    let public_key = env_public
        .or_else(|| api.as_ref().map(|a| a.public_key.clone()))
        .unwrap_or_default();
    let private_key = env_private
        .or_else(|| api.as_ref().map(|a| a.private_key.clone()))
        .unwrap_or_default();
    let gateway = env_gateway
        .or_else(|| api.as_ref().and_then(|a| a.gateway.clone()))
        .unwrap_or_else(|| DEFAULT_GATEWAY.to_string());

    if public_key.is_empty() || private_key.is_empty() {
        bail!(
            "No Marvel API keys configured. Create {CONFIG_FILE}:\n\n  \
             [api]\n  \
             public_key = \"...\"\n  \
             private_key = \"...\"\n\n\
             or set MARVEL_PUBLIC_KEY and MARVEL_PRIVATE_KEY."
        );
    }

    Ok(ResolvedConfig {
        gateway: gateway.trim_end_matches('/').to_string(),
        credentials: Credentials {
            public_key,
            private_key,
        },
    })
}

fn load_if_present() -> Result<Option<Config>> {
    let path = Path::new(CONFIG_FILE);
    if !path.exists() {
        return Ok(None);
    }
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let config: Config =
        toml::from_str(&content).with_context(|| format!("Failed to parse {}", path.display()))?;
    Ok(Some(config))
}
