use crate::error::{ConfigErrorKind, InfraError};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_LOG_FILTER: &str = "warn";
const DEFAULT_PROMPT: &str = "What would you like to do? (type \"help\" for commands)";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Fixed seed for the dice. `None` seeds from the OS.
    pub seed: Option<u64>,
    /// tracing-subscriber directive, e.g. "scriptoria=debug"
    pub log_filter: String,
    /// Colour the status line and prompt
    pub color: bool,
    pub prompt: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: None,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            color: true,
            prompt: DEFAULT_PROMPT.to_string(),
        }
    }
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, InfraError> {
        let path = path.as_ref();
        let data = std::fs::read_to_string(path).map_err(|e| InfraError::Config {
            path: path.to_path_buf(),
            source: ConfigErrorKind::Read(e),
        })?;

        Self::from_toml(&data).map_err(|e| InfraError::Config {
            path: path.to_path_buf(),
            source: e,
        })
    }

    pub fn from_toml(data: &str) -> Result<Self, ConfigErrorKind> {
        toml::from_str(data).map_err(ConfigErrorKind::Parse)
    }

    pub fn from_env() -> Result<Self, InfraError> {
        let _ = dotenvy::from_filename(".env");
        Self::from_lookup(|key| std::env::var(key).ok()).map_err(InfraError::Env)
    }

    /// Builds a config from `SCRIPTORIA_*` variables as returned by `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigErrorKind> {
        let mut cfg = Self::default();

        if let Some(v) = lookup("SCRIPTORIA_SEED") {
            let seed = v
                .trim()
                .parse()
                .map_err(|_| ConfigErrorKind::InvalidEnv("SCRIPTORIA_SEED".to_string(), v.clone()))?;
            cfg.seed = Some(seed);
        }
        if let Some(v) = lookup("SCRIPTORIA_LOG") {
            cfg.log_filter = v;
        }
        if let Some(v) = lookup("SCRIPTORIA_COLOR") {
            cfg.color = match v.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => true,
                "0" | "false" | "no" | "off" => false,
                _ => return Err(ConfigErrorKind::InvalidEnv("SCRIPTORIA_COLOR".to_string(), v)),
            };
        }
        if let Some(v) = lookup("SCRIPTORIA_PROMPT") {
            cfg.prompt = v;
        }

        Ok(cfg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |k| map.get(k).cloned()
    }

    #[test]
    fn defaults_without_env() {
        let cfg = Config::from_lookup(env(&[])).unwrap();
        assert_eq!(cfg, Config::default());
        assert_eq!(cfg.log_filter, "warn");
        assert!(cfg.color);
    }

    #[test]
    fn env_overrides() {
        let cfg = Config::from_lookup(env(&[
            ("SCRIPTORIA_SEED", "42"),
            ("SCRIPTORIA_COLOR", "off"),
            ("SCRIPTORIA_LOG", "scriptoria=debug"),
        ]))
        .unwrap();
        assert_eq!(cfg.seed, Some(42));
        assert!(!cfg.color);
        assert_eq!(cfg.log_filter, "scriptoria=debug");
    }

    #[test]
    fn bad_seed_is_rejected() {
        let err = Config::from_lookup(env(&[("SCRIPTORIA_SEED", "lots")])).unwrap_err();
        assert!(matches!(err, ConfigErrorKind::InvalidEnv(k, _) if k == "SCRIPTORIA_SEED"));
    }

    #[test]
    fn toml_partial() {
        let cfg = Config::from_toml("seed = 7\ncolor = false\n").unwrap();
        assert_eq!(cfg.seed, Some(7));
        assert!(!cfg.color);
        assert_eq!(cfg.prompt, DEFAULT_PROMPT);
    }

    #[test]
    fn toml_garbage() {
        assert!(matches!(Config::from_toml("seed = \"x"), Err(ConfigErrorKind::Parse(_))));
    }
}
