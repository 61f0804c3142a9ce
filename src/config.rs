use crate::error::ConfigError;
use crate::models::SongId;
use std::env;

pub const MAX_SONG_ID_VAR: &str = "TOP7_MAX_SONG_ID";
pub const OUTPUT_VAR: &str = "TOP7_OUTPUT";

// Highest roster bound a NEW instruction may declare
pub const DEFAULT_MAX_SONG_ID: SongId = 99_999_999;

// Largest id a vote line can name (nine digits)
pub const SONG_ID_LIMIT: SongId = 999_999_999;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// `<song> <delta>` per line
    #[default]
    Text,
    /// One JSON object per report
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub max_song_id: SongId,
    pub output: OutputFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_song_id: DEFAULT_MAX_SONG_ID,
            output: OutputFormat::Text,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    // Unset variables fall back to the defaults
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup(MAX_SONG_ID_VAR) {
            config.max_song_id = match value.trim().parse::<SongId>() {
                Ok(max) if (1..=SONG_ID_LIMIT).contains(&max) => max,
                _ => {
                    return Err(ConfigError::InvalidNumber {
                        key: MAX_SONG_ID_VAR,
                        value,
                        max: SONG_ID_LIMIT,
                    });
                }
            };
        }

        if let Some(value) = lookup(OUTPUT_VAR) {
            config.output = match value.trim().to_ascii_lowercase().as_str() {
                "text" => OutputFormat::Text,
                "json" => OutputFormat::Json,
                _ => {
                    return Err(ConfigError::InvalidOutputFormat { key: OUTPUT_VAR, value });
                }
            };
        }

        Ok(config)
    }
}
