//! User-configurable preferences and their defaults.

use std::{fmt, path::PathBuf};

use serde::{Deserialize, Serialize};

/// Stores user preferences: appearance, currency, locale, and notification
/// behavior.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub theme: Theme,
    #[serde(default)]
    pub currency: Currency,
    #[serde(default = "Config::default_locale")]
    pub locale: String,
    #[serde(default = "Config::default_notifications_enabled")]
    pub notifications_enabled: bool,
    /// Day of month a new expense period starts on, kept within 1..=31.
    #[serde(default = "Config::default_period_start_day")]
    pub period_start_day: u8,
    /// Minutes before the due date the early alert fires.
    #[serde(default = "Config::default_early_notification_minutes")]
    pub early_notification_minutes: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Optional custom directory for the snapshot document. Defaults to the
    /// platform data directory.
    pub data_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            currency: Currency::default(),
            locale: Self::default_locale(),
            notifications_enabled: Self::default_notifications_enabled(),
            period_start_day: Self::default_period_start_day(),
            early_notification_minutes: Self::default_early_notification_minutes(),
            data_dir: None,
        }
    }
}

impl Config {
    fn default_locale() -> String {
        "en-US".into()
    }

    fn default_notifications_enabled() -> bool {
        true
    }

    fn default_period_start_day() -> u8 {
        1
    }

    fn default_early_notification_minutes() -> u32 {
        30
    }

    /// The configured start day clamped to a valid day of month.
    pub fn clamped_period_start_day(&self) -> u8 {
        self.period_start_day.clamp(1, 31)
    }

    pub fn resolve_data_dir(&self) -> PathBuf {
        if let Some(path) = &self.data_dir {
            return path.clone();
        }
        let base = dirs::data_dir()
            .or_else(dirs::home_dir)
            .unwrap_or_else(|| PathBuf::from("."));
        base.join("Daybook")
    }
}

/// Appearance preference.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
    #[default]
    System,
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
            Theme::System => "system",
        };
        f.write_str(label)
    }
}

/// Display currency for amounts.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum Currency {
    #[default]
    #[serde(rename = "TRY")]
    Try,
    #[serde(rename = "USD")]
    Usd,
    #[serde(rename = "EUR")]
    Eur,
    #[serde(rename = "GBP")]
    Gbp,
}

impl Currency {
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::Try => "₺",
            Currency::Usd => "$",
            Currency::Eur => "€",
            Currency::Gbp => "£",
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Currency::Try => "TRY",
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
            Currency::Gbp => "GBP",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
