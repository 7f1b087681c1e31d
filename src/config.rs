use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::api_client::DEFAULT_BASE_URL;
use crate::error::{Error, IOError, JSONError};
use crate::i18n::Language;
use crate::store::CacheKey;

pub const DEFAULT_TEAM_ID: u32 = 9768;
pub const DEFAULT_TIME_ZONE: &str = "Europe/London";
const CACHE_DIR: &str = ".futcal";

/// Where the process reads from and writes to. Settings live in the cache
/// directory next to the cached payloads.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub api_url: String,
    pub cache_dir: PathBuf,
    pub settings: Settings,
}

impl Config {
    /// Defaults, then `userSettings.json`, then `FUTCAL_*` environment
    /// variables. Command line flags are applied by the caller. Nothing here
    /// stops the run: bad input is logged and replaced by defaults.
    pub fn load() -> Self {
        Self::load_with(|name| std::env::var(name).ok())
    }

    pub fn load_with(env: impl Fn(&str) -> Option<String>) -> Self {
        let cache_dir = match env("FUTCAL_CACHE_DIR").filter(|dir| !dir.trim().is_empty()) {
            Some(dir) => PathBuf::from(dir),
            None => match env("HOME").filter(|home| !home.trim().is_empty()) {
                Some(home) => PathBuf::from(home).join(CACHE_DIR),
                None => {
                    let dir = std::env::temp_dir().join(CACHE_DIR);
                    warn!(path = %dir.display(), "HOME is not set, caching in the temp directory");
                    dir
                }
            },
        };
        let api_url = env("FUTCAL_API_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let path = cache_dir.join(CacheKey::Settings.file_name());
        let mut settings = Settings::load(&path).unwrap_or_else(|e| {
            warn!(error = %e, "ignoring settings file");
            Settings::default()
        });
        settings.apply_env(&env);

        Self {
            api_url,
            cache_dir,
            settings,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LanguageSetting {
    /// Follow the process locale.
    #[default]
    System,
    En,
    Pt,
    Fr,
    De,
}

impl LanguageSetting {
    pub fn resolve(self) -> Language {
        match self {
            LanguageSetting::System => Language::from_env(),
            LanguageSetting::En => Language::En,
            LanguageSetting::Pt => Language::Pt,
            LanguageSetting::Fr => Language::Fr,
            LanguageSetting::De => Language::De,
        }
    }
}

/// Which part of the summary the compact layout shows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum View {
    #[default]
    Full,
    Matches,
    Table,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum HighlightStyle {
    #[default]
    Circle,
    Bold,
}

/// A color for light and dark appearance, as `#rrggbb`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorPair {
    pub light: String,
    pub dark: String,
}

impl ColorPair {
    fn new(light: &str, dark: &str) -> Self {
        Self {
            light: light.into(),
            dark: dark.into(),
        }
    }

    fn red() -> Self {
        Self::new("#ff3b30", "#ff453a")
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Colors {
    pub background: ColorPair,
    pub title: ColorPair,
    pub highlight: ColorPair,
    pub live: ColorPair,
}

impl Default for Colors {
    fn default() -> Self {
        Self {
            background: ColorPair::new("#ffffff", "#1c1c1e"),
            title: ColorPair::red(),
            highlight: ColorPair::red(),
            live: ColorPair::red(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Settings {
    pub team_id: u32,
    pub time_zone: String,
    pub language: LanguageSetting,
    pub view: View,
    pub show_round: bool,
    pub show_badges: bool,
    pub show_live_clock: bool,
    pub twelve_hour_clock: bool,
    pub highlight: HighlightStyle,
    pub colors: Colors,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            team_id: DEFAULT_TEAM_ID,
            time_zone: DEFAULT_TIME_ZONE.into(),
            language: LanguageSetting::System,
            view: View::Full,
            show_round: false,
            show_badges: true,
            show_live_clock: true,
            twelve_hour_clock: false,
            highlight: HighlightStyle::Circle,
            colors: Colors::default(),
        }
    }
}

impl Settings {
    /// Reads a settings file; fields it leaves out keep their defaults and a
    /// missing file means all defaults.
    pub fn load(path: &Path) -> Result<Self, Error> {
        let raw = match fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => return Err(IOError::new(path, e).into()),
        };
        serde_json::from_str(&raw)
            .map_err(|e| JSONError::new(Some(path.to_path_buf()), e).into())
    }

    fn apply_env(&mut self, env: impl Fn(&str) -> Option<String>) {
        if let Some(value) = env("FUTCAL_TEAM_ID") {
            match value.trim().parse() {
                Ok(team_id) => self.team_id = team_id,
                Err(_) => warn!(value = %value, "ignoring invalid FUTCAL_TEAM_ID"),
            }
        }
        if let Some(value) = env("FUTCAL_TIME_ZONE").filter(|tz| !tz.trim().is_empty()) {
            self.time_zone = value;
        }
        if let Some(value) = env("FUTCAL_LANGUAGE") {
            match LanguageSetting::from_str(value.trim(), true) {
                Ok(language) => self.language = language,
                Err(_) => warn!(value = %value, "ignoring invalid FUTCAL_LANGUAGE"),
            }
        }
    }
}

#[cfg(test)]
mod test {
    use std::collections::HashMap;

    use super::*;
    use crate::store::test_dir;

    fn env(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| vars.get(name).cloned()
    }

    #[test]
    fn test_defaults_without_settings_file() {
        let dir = test_dir("config-defaults");
        let config =
            Config::load_with(env(&[("FUTCAL_CACHE_DIR", dir.to_str().unwrap())]));

        assert_eq!(config.cache_dir, dir);
        assert_eq!(config.api_url, "https://www.fotmob.com");
        assert_eq!(config.settings, Settings::default());
        assert_eq!(config.settings.team_id, 9768);
    }

    #[test]
    fn test_partial_settings_file() {
        let dir = test_dir("config-partial");
        fs::create_dir_all(&dir).unwrap();
        fs::write(
            dir.join("userSettings.json"),
            r##"{"teamId": 8150, "language": "pt", "showRound": true, "colors": {"live": {"light": "#00ff00", "dark": "#008800"}}}"##,
        )
        .unwrap();

        let config =
            Config::load_with(env(&[("FUTCAL_CACHE_DIR", dir.to_str().unwrap())]));
        let settings = config.settings;
        assert_eq!(settings.team_id, 8150);
        assert_eq!(settings.language, LanguageSetting::Pt);
        assert!(settings.show_round);
        assert!(settings.show_badges);
        assert_eq!(settings.time_zone, "Europe/London");
        assert_eq!(settings.colors.live.light, "#00ff00");
        assert_eq!(settings.colors.background.dark, "#1c1c1e");
        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn test_env_overrides_settings_file() {
        let dir = test_dir("config-env");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("userSettings.json"), r#"{"teamId": 8150}"#).unwrap();

        let config = Config::load_with(env(&[
            ("FUTCAL_CACHE_DIR", dir.to_str().unwrap()),
            ("FUTCAL_TEAM_ID", "9773"),
            ("FUTCAL_TIME_ZONE", "Europe/Lisbon"),
            ("FUTCAL_LANGUAGE", "FR"),
            ("FUTCAL_API_URL", "http://localhost:1234"),
        ]));

        assert_eq!(config.settings.team_id, 9773);
        assert_eq!(config.settings.time_zone, "Europe/Lisbon");
        assert_eq!(config.settings.language, LanguageSetting::Fr);
        assert_eq!(config.api_url, "http://localhost:1234");
        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn test_invalid_values_fall_back_to_defaults() {
        let dir = test_dir("config-invalid");
        let cache_dir = dir.to_str().unwrap();

        let config = Config::load_with(env(&[
            ("FUTCAL_CACHE_DIR", cache_dir),
            ("FUTCAL_TEAM_ID", "sporting"),
            ("FUTCAL_LANGUAGE", "klingon"),
        ]));
        assert_eq!(config.settings.team_id, DEFAULT_TEAM_ID);
        assert_eq!(config.settings.language, LanguageSetting::System);

        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("userSettings.json"), r#"{"teamId": "#).unwrap();
        let config = Config::load_with(env(&[
            ("FUTCAL_CACHE_DIR", cache_dir),
            ("FUTCAL_TEAM_ID", "8150"),
        ]));
        assert_eq!(config.settings.team_id, 8150);
        assert_eq!(config.settings.time_zone, DEFAULT_TIME_ZONE);
        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn test_settings_file_errors_keep_path() {
        let dir = test_dir("config-corrupt");
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("userSettings.json");
        fs::write(&path, "{not json").unwrap();

        let err = Settings::load(&path).unwrap_err();
        assert!(matches!(err, Error::JSON(_)));
        assert!(err.to_string().contains("userSettings.json"));
        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn test_cache_dir_without_home() {
        let config = Config::load_with(env(&[("HOME", "/home/fan")]));
        assert_eq!(config.cache_dir, PathBuf::from("/home/fan/.futcal"));

        let config = Config::load_with(env(&[]));
        assert_eq!(config.cache_dir, std::env::temp_dir().join(".futcal"));
    }

    #[test]
    fn test_fixed_language_resolves() {
        assert_eq!(LanguageSetting::De.resolve(), Language::De);
    }
}
