use crate::tools::pokeapi::POKEAPI_URL;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api_base_url: String,
    /// Size of the candidate list requested at startup.
    pub candidate_limit: usize,
    /// Grace period between blur and hiding the suggestions panel.
    pub blur_hide_delay_ms: u64,
    pub request_timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: POKEAPI_URL.to_string(),
            candidate_limit: 10000,
            blur_hide_delay_ms: 100,
            request_timeout_secs: 30,
        }
    }
}

impl Config {
    pub fn blur_hide_delay(&self) -> Duration {
        Duration::from_millis(self.blur_hide_delay_ms)
    }

    pub fn load_from_yaml_str(yaml: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(yaml)
    }

    pub fn load_from_yaml_file(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let content = fs::read_to_string(path)?;
        Ok(Self::load_from_yaml_str(&content)?)
    }

    /// Defaults, then the YAML file named by `POKEDEX_CONFIG`, then `POKEDEX_*` overrides.
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        let mut config = match env::var("POKEDEX_CONFIG") {
            Ok(path) => Self::load_from_yaml_file(Path::new(&path))?,
            Err(_) => Self::default(),
        };
        config.apply_overrides(|key| env::var(key).ok());
        Ok(config)
    }

    /// Applies `POKEDEX_*` values from `lookup`. Unparsable numbers are ignored.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup("POKEDEX_API_URL") {
            if !url.trim().is_empty() {
                self.api_base_url = url.trim().to_string();
            }
        }
        if let Some(limit) = parse_var(&lookup, "POKEDEX_CANDIDATE_LIMIT") {
            self.candidate_limit = limit;
        }
        if let Some(delay) = parse_var(&lookup, "POKEDEX_BLUR_DELAY_MS") {
            self.blur_hide_delay_ms = delay;
        }
        if let Some(secs) = parse_var(&lookup, "POKEDEX_TIMEOUT_SECS") {
            self.request_timeout_secs = secs;
        }
    }
}

fn parse_var<T, F>(lookup: &F, key: &str) -> Option<T>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    lookup(key).and_then(|v| v.trim().parse().ok())
}
