use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_ACCOUNT: &str = "nitrixOG";
pub const DEFAULT_API_BASE: &str = "https://api.github.com";

#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub account: Option<String>,
    pub api_base: Option<String>,
    pub log_file: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub account: String,
    pub api_base: String,
    pub reveal_delay_ms: u64,
    #[serde(default)]
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            account: DEFAULT_ACCOUNT.to_string(),
            api_base: DEFAULT_API_BASE.to_string(),
            reveal_delay_ms: 100,
            log_file: None,
        }
    }
}

impl Config {
    pub fn load(overrides: Overrides) -> Self {
        let config_file = config_dir().join("folio").join("config.toml");

        let mut figment = Figment::from(Serialized::defaults(Config::default()));

        if config_file.exists() {
            figment = figment.merge(Toml::file(&config_file));
        }

        figment = figment.merge(Env::prefixed("FOLIO_"));

        if let Some(account) = overrides.account {
            figment = figment.merge(Serialized::default("account", account));
        }
        if let Some(api_base) = overrides.api_base {
            figment = figment.merge(Serialized::default("api_base", api_base));
        }
        if let Some(path) = overrides.log_file {
            figment = figment.merge(Serialized::default("log_file", path));
        }

        match figment.extract() {
            Ok(config) => config,
            Err(e) => {
                eprintln!("warning: config parse error, using defaults: {e}");
                Config::default()
            }
        }
    }

    pub fn log_path(&self) -> PathBuf {
        self.log_file
            .clone()
            .unwrap_or_else(|| config_dir().join("folio").join("folio.log"))
    }

    pub fn profile_url(&self) -> String {
        format!("https://github.com/{}", self.account)
    }
}

pub fn config_dir() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .ok()
        .map(PathBuf::from)
        .or_else(|| {
            std::env::var("HOME")
                .ok()
                .map(|h| PathBuf::from(h).join(".config"))
        })
        .unwrap_or_else(|| PathBuf::from("."))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        for key in ["FOLIO_ACCOUNT", "FOLIO_API_BASE", "FOLIO_REVEAL_DELAY_MS", "FOLIO_LOG_FILE"] {
            std::env::remove_var(key);
        }
    }

    #[test]
    #[serial]
    fn defaults_without_file_or_env() {
        clear_env();
        let dir = tempfile::tempdir().unwrap();
        std::env::set_var("XDG_CONFIG_HOME", dir.path());

        let config = Config::load(Overrides::default());
        assert_eq!(config, Config::default());
        assert_eq!(config.profile_url(), "https://github.com/nitrixOG");
        assert_eq!(config.log_path(), dir.path().join("folio").join("folio.log"));

        std::env::remove_var("XDG_CONFIG_HOME");
    }

    #[test]
    #[serial]
    fn file_then_env_then_cli() {
        clear_env();
        let dir = tempfile::tempdir().unwrap();
        let folio_dir = dir.path().join("folio");
        std::fs::create_dir_all(&folio_dir).unwrap();
        std::fs::write(
            folio_dir.join("config.toml"),
            "account = \"from-file\"\nreveal_delay_ms = 250\n",
        )
        .unwrap();
        std::env::set_var("XDG_CONFIG_HOME", dir.path());

        let config = Config::load(Overrides::default());
        assert_eq!(config.account, "from-file");
        assert_eq!(config.reveal_delay_ms, 250);

        std::env::set_var("FOLIO_ACCOUNT", "from-env");
        let config = Config::load(Overrides::default());
        assert_eq!(config.account, "from-env");

        let config = Config::load(Overrides {
            account: Some("from-cli".to_string()),
            api_base: Some("http://127.0.0.1:9".to_string()),
            log_file: None,
        });
        assert_eq!(config.account, "from-cli");
        assert_eq!(config.api_base, "http://127.0.0.1:9");

        clear_env();
        std::env::remove_var("XDG_CONFIG_HOME");
    }

    #[test]
    #[serial]
    fn bad_file_falls_back_to_defaults() {
        clear_env();
        let dir = tempfile::tempdir().unwrap();
        let folio_dir = dir.path().join("folio");
        std::fs::create_dir_all(&folio_dir).unwrap();
        std::fs::write(folio_dir.join("config.toml"), "reveal_delay_ms = \"soon\"\n").unwrap();
        std::env::set_var("XDG_CONFIG_HOME", dir.path());

        assert_eq!(Config::load(Overrides::default()), Config::default());

        std::env::remove_var("XDG_CONFIG_HOME");
    }
}
