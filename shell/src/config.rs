use ::config::{Environment, File, FileFormat};
use serde::Deserialize;
use types::Result;

const DEFAULTS: &str = include_str!("../console.toml");

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Config {
    pub app_title: String,
    pub user_name: String,
    pub token_key: String,
    pub sidebar_key: String,
    pub sidebar_width: u32,
    pub sidebar_collapsed_width: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            app_title: "IMS".into(),
            user_name: "John Doe".into(),
            token_key: "token".into(),
            sidebar_key: "sidebarCollapsed".into(),
            sidebar_width: 220,
            sidebar_collapsed_width: 80,
        }
    }
}

impl Config {
    /// Bundled `console.toml`, overridden by `CONSOLE_*` environment variables.
    pub fn load() -> Result<Self> {
        let settings = ::config::Config::builder()
            .add_source(File::from_str(DEFAULTS, FileFormat::Toml))
            .add_source(Environment::with_prefix("CONSOLE").try_parsing(true))
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_else(|e| {
            tracing::warn!("falling back to default configuration: {e}");
            Self::default()
        })
    }

    pub fn sidebar_width_for(&self, collapsed: bool) -> u32 {
        if collapsed {
            self.sidebar_collapsed_width
        } else {
            self.sidebar_width
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_file_matches_defaults() {
        let config = temp_env::with_vars_unset(
            ["CONSOLE_APP_TITLE", "CONSOLE_TOKEN_KEY", "CONSOLE_SIDEBAR_WIDTH"],
            Config::load,
        )
        .unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn environment_overrides_file() {
        let config = temp_env::with_vars(
            [
                ("CONSOLE_APP_TITLE", Some("Stockroom")),
                ("CONSOLE_TOKEN_KEY", Some("session")),
                ("CONSOLE_SIDEBAR_WIDTH", Some("260")),
            ],
            Config::load,
        )
        .unwrap();

        assert_eq!(config.app_title, "Stockroom");
        assert_eq!(config.token_key, "session");
        assert_eq!(config.sidebar_width, 260);
        assert_eq!(config.sidebar_key, "sidebarCollapsed");
    }

    #[test]
    fn bad_override_falls_back_to_defaults() {
        let config = temp_env::with_var("CONSOLE_SIDEBAR_WIDTH", Some("wide"), Config::load_or_default);
        assert_eq!(config, Config::default());
    }

    #[test]
    fn width_tracks_collapse_state() {
        let config = Config::default();
        assert_eq!(config.sidebar_width_for(false), 220);
        assert_eq!(config.sidebar_width_for(true), 80);
    }
}
