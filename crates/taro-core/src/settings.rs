//! User settings and language resolution.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TaroError;

/// Language code used when the system locale is unknown.
pub const FALLBACK_LANGUAGE: &str = "ru";

/// Interface language preference.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppLanguage {
    /// Follow the system locale.
    #[default]
    System,
    /// Russian.
    Ru,
    /// English.
    En,
}

impl AppLanguage {
    /// Language code to send to the backend.
    ///
    /// `System` takes the primary subtag of `system_locale`
    /// (`"en_US.UTF-8"` gives `"en"`) and falls back to [`FALLBACK_LANGUAGE`].
    pub fn resolve(self, system_locale: Option<&str>) -> String {
        match self {
            Self::Ru => "ru".to_string(),
            Self::En => "en".to_string(),
            Self::System => system_locale
                .and_then(primary_subtag)
                .unwrap_or_else(|| FALLBACK_LANGUAGE.to_string()),
        }
    }
}

fn primary_subtag(locale: &str) -> Option<String> {
    let code = locale
        .split(['_', '-', '.', '@'])
        .next()
        .unwrap_or_default()
        .trim()
        .to_lowercase();
    // "C" and "POSIX" carry no language
    if code.len() < 2 || code == "posix" || !code.chars().all(|c| c.is_ascii_alphabetic()) {
        return None;
    }
    Some(code)
}

impl std::fmt::Display for AppLanguage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::System => write!(f, "system"),
            Self::Ru => write!(f, "ru"),
            Self::En => write!(f, "en"),
        }
    }
}

impl FromStr for AppLanguage {
    type Err = TaroError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "system" => Ok(Self::System),
            "ru" => Ok(Self::Ru),
            "en" => Ok(Self::En),
            _ => Err(TaroError::UnknownLanguage(s.to_string())),
        }
    }
}

/// Persisted user preferences. One record per installation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserSettings {
    /// Name readings are made for. Empty until the user enters one.
    pub user_name: String,
    /// Whether the onboarding screens were shown.
    pub has_seen_onboarding: bool,
    /// Dark theme preference.
    pub is_dark_mode: bool,
    /// Whether reminders are enabled.
    pub notifications_enabled: bool,
    /// Interface language.
    pub language: AppLanguage,
}

impl UserSettings {
    /// Whether a non-blank user name has been stored.
    pub fn has_user_name(&self) -> bool {
        normalize_user_name(&self.user_name).is_some()
    }
}

/// Trim a user-entered name. Blank names are rejected.
pub fn normalize_user_name(name: &str) -> Option<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
