use std::path::PathBuf;

use anyhow::Result;

use crate::models::Profile;
use crate::render::DateStyle;

/// Application configuration loaded from environment variables.
/// Every variable is optional; the builtin profile and the host locale's dates are the defaults.
#[derive(Debug, Clone)]
pub struct Config {
    pub profile_path: Option<PathBuf>,
    pub locale: String,
    pub date_format: Option<String>,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            profile_path: optional_env("PROFILE_PATH").map(PathBuf::from),
            locale: resolve_locale(optional_env),
            date_format: optional_env("PORTFOLIO_DATE_FORMAT"),
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }

    /// The builtin profile, or the JSON override at `PROFILE_PATH`.
    pub fn load_profile(&self) -> Result<Profile> {
        Ok(match &self.profile_path {
            Some(path) => Profile::load(path)?,
            None => Profile::builtin(),
        })
    }

    /// An explicit `PORTFOLIO_DATE_FORMAT` wins over the locale.
    pub fn date_style(&self) -> Result<DateStyle> {
        Ok(match &self.date_format {
            Some(format) => DateStyle::custom(format.as_str())?,
            None => DateStyle::for_locale(&self.locale),
        })
    }
}

/// Locale variables in precedence order. `PORTFOLIO_LOCALE` overrides the host's own.
const LOCALE_VARS: &[&str] = &["PORTFOLIO_LOCALE", "LC_ALL", "LC_TIME", "LANG"];
const DEFAULT_LOCALE: &str = "en-US";

/// First locale set among [`LOCALE_VARS`], else `en-US`.
fn resolve_locale<F>(lookup: F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    LOCALE_VARS
        .iter()
        .find_map(|key| lookup(key))
        .unwrap_or_else(|| DEFAULT_LOCALE.to_string())
}

/// Unset and blank are treated the same.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
