//! Global tripplan configuration.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{TripError, TripResult};
use crate::itinerary::Trip;
use crate::parser::{DEFAULT_MIN_SECTION_LEN, ParserOptions};
use crate::utils::expand_path;

static DEFAULT_TRIP_DIR: &str = "~/trips";
static DEFAULT_TRIP: &str = "my-trip";

fn default_trip_dir() -> String {
    DEFAULT_TRIP_DIR.to_string()
}

fn default_trip() -> String {
    DEFAULT_TRIP.to_string()
}

fn default_min_section_len() -> usize {
    DEFAULT_MIN_SECTION_LEN
}

/// Configuration at ~/.config/tripplan/config.toml
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripplanConfig {
    /// Where trips live (one directory per trip)
    #[serde(default = "default_trip_dir")]
    pub trip_dir: String,

    /// Trip used when `--trip` is not given
    #[serde(default = "default_trip")]
    pub default_trip: String,

    /// Pasted sections shorter than this are ignored by the importer
    #[serde(default = "default_min_section_len")]
    pub min_section_len: usize,
}

impl Default for TripplanConfig {
    fn default() -> Self {
        TripplanConfig {
            trip_dir: default_trip_dir(),
            default_trip: default_trip(),
            min_section_len: default_min_section_len(),
        }
    }
}

impl TripplanConfig {
    pub fn config_path() -> TripResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| TripError::Config("Could not determine config directory".into()))?
            .join("tripplan");

        Ok(config_dir.join("config.toml"))
    }

    /// Load the global config, writing a commented default file on first run.
    pub fn load() -> TripResult<Self> {
        let path = Self::config_path()?;

        if !path.exists() {
            Self::create_default_config(&path)?;
            log::info!("Created default config at {}", path.display());
        }

        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> TripResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            TripError::Config(format!("Could not read {}: {e}", path.display()))
        })?;

        toml::from_str(&contents)
            .map_err(|e| TripError::Config(format!("Could not parse {}: {e}", path.display())))
    }

    /// `trip_dir` with `~` expanded.
    pub fn trip_dir_path(&self) -> PathBuf {
        expand_path(&self.trip_dir)
    }

    /// Open a trip by name, falling back to `default_trip`.
    pub fn open_trip(&self, name: Option<&str>) -> TripResult<Trip> {
        Trip::open(
            &self.trip_dir_path(),
            name.unwrap_or(self.default_trip.as_str()),
        )
    }

    pub fn parser_options(&self) -> ParserOptions {
        ParserOptions {
            min_section_len: self.min_section_len,
        }
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> TripResult<()> {
        let contents = format!(
            "\
# tripplan configuration

# Where your trips live:
# trip_dir = \"{}\"

# Trip used when --trip is not given:
# default_trip = \"{}\"

# Ignore pasted sections shorter than this many characters:
# min_section_len = {}
",
            DEFAULT_TRIP_DIR, DEFAULT_TRIP, DEFAULT_MIN_SECTION_LEN
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                TripError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| TripError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}
