// SPDX-License-Identifier: Apache-2.0

use std::env;
use std::path::PathBuf;

pub const DEFAULT_BIND: &str = "0.0.0.0:8080";
pub const DEFAULT_DATA_PATH: &str = "data/creatures.json";

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_addr: String,
    pub data_path: PathBuf,
    pub default_per_page: usize,
    pub max_per_page: usize,
    pub log_json: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND.to_string(),
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            default_per_page: bestiary_api::DEFAULT_PER_PAGE,
            max_per_page: bestiary_api::MAX_PER_PAGE,
            log_json: true,
        }
    }
}

impl ServerConfig {
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let max_per_page = env_usize("BESTIARY_MAX_PER_PAGE", defaults.max_per_page);
        // The default must stay a valid per_page value, so it never
        // exceeds the configured maximum.
        let default_per_page =
            env_usize("BESTIARY_DEFAULT_PER_PAGE", defaults.default_per_page).min(max_per_page);
        Self {
            bind_addr: env::var("BESTIARY_BIND").unwrap_or(defaults.bind_addr),
            data_path: env::var("BESTIARY_DATA_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.data_path),
            default_per_page,
            max_per_page,
            log_json: env_bool("BESTIARY_LOG_JSON", defaults.log_json),
        }
    }
}

pub(crate) fn env_bool(name: &str, default: bool) -> bool {
    env::var(name)
        .ok()
        .and_then(|v| match v.as_str() {
            "1" | "true" | "TRUE" | "yes" | "YES" => Some(true),
            "0" | "false" | "FALSE" | "no" | "NO" => Some(false),
            _ => None,
        })
        .unwrap_or(default)
}

pub(crate) fn env_usize(name: &str, default: usize) -> usize {
    env::var(name)
        .ok()
        .and_then(|v| v.parse::<usize>().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sane() {
        let cfg = ServerConfig::default();
        assert_eq!(cfg.bind_addr, DEFAULT_BIND);
        assert_eq!(cfg.data_path, PathBuf::from(DEFAULT_DATA_PATH));
        assert!(cfg.default_per_page <= cfg.max_per_page);
    }

    #[test]
    fn env_default_per_page_is_clamped_to_the_maximum() {
        env::set_var("BESTIARY_DEFAULT_PER_PAGE", "500");
        env::set_var("BESTIARY_MAX_PER_PAGE", "200");
        let cfg = ServerConfig::from_env();
        env::remove_var("BESTIARY_DEFAULT_PER_PAGE");
        env::remove_var("BESTIARY_MAX_PER_PAGE");

        assert_eq!(cfg.max_per_page, 200);
        assert_eq!(cfg.default_per_page, 200);
        assert!(cfg.default_per_page <= cfg.max_per_page);
    }
}
