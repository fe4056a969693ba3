use crate::{
    constants::{BASE_URL_ENV_VAR, DEFAULT_BASE_URL, DEFAULT_REQUEST_TIMEOUT_SECS},
    shapes::keybinding::KeyBindings,
};
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Settings {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
    #[serde(default)]
    pub keybindings: KeyBindings,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_request_timeout_secs() -> u64 {
    DEFAULT_REQUEST_TIMEOUT_SECS
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            request_timeout_secs: default_request_timeout_secs(),
            keybindings: KeyBindings::default(),
        }
    }
}

impl Settings {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Command line wins over the environment, which wins over the file.
    pub fn with_overrides(self, cli_base_url: Option<String>, env_base_url: Option<String>) -> Self {
        match cli_base_url.or(env_base_url).filter(|u| !u.trim().is_empty()) {
            Some(base_url) => Self { base_url, ..self },
            None => self,
        }
    }

    pub fn with_process_overrides(self) -> Self {
        let cli = cli_base_url(std::env::args());
        let env = std::env::var(BASE_URL_ENV_VAR).ok();
        self.with_overrides(cli, env)
    }
}

/// Value following `--base-url`, or given as `--base-url=<url>`.
pub fn cli_base_url<I: IntoIterator<Item = String>>(args: I) -> Option<String> {
    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        if arg == "--base-url" {
            return args.next();
        }
        if let Some(value) = arg.strip_prefix("--base-url=") {
            return Some(value.to_string());
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_keys_fall_back_to_defaults() {
        let settings: Settings =
            serde_json::from_str(r#"{"base_url": "http://roster.local/api"}"#)
                .expect("expected valid settings");
        assert_eq!(settings.base_url, "http://roster.local/api");
        assert_eq!(settings.request_timeout_secs, DEFAULT_REQUEST_TIMEOUT_SECS);
    }

    #[test]
    fn command_line_beats_environment() {
        let settings = Settings::default().with_overrides(
            Some("http://cli/api".into()),
            Some("http://env/api".into()),
        );
        assert_eq!(settings.base_url, "http://cli/api");
        let settings = Settings::default().with_overrides(None, Some("http://env/api".into()));
        assert_eq!(settings.base_url, "http://env/api");
        let settings = Settings::default().with_overrides(None, Some(" ".into()));
        assert_eq!(settings.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn base_url_argument_forms() {
        let args = |v: &[&str]| v.iter().map(|s| s.to_string()).collect::<Vec<_>>();
        assert_eq!(
            cli_base_url(args(&["rosterdesk", "--base-url", "http://a/api"])),
            Some("http://a/api".into())
        );
        assert_eq!(
            cli_base_url(args(&["rosterdesk", "--base-url=http://b/api"])),
            Some("http://b/api".into())
        );
        assert_eq!(cli_base_url(args(&["rosterdesk"])), None);
    }
}
