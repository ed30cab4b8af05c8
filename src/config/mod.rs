// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Configuration system for chordshift.
//!
//! Settings hold the default transpose value and the sharps/flats choice. They
//! can be written as TOML or YAML; the format is picked from the file
//! extension.

pub mod watcher;

pub use watcher::{transpose_file, ChartEvent, ChartWatcher};

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::control::TransposeValue;
use crate::music::Spelling;
use crate::transpose::Transposer;

/// Settings file format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Toml,
    Yaml,
}

impl Format {
    /// Pick a format from a path's extension, defaulting to TOML
    pub fn from_path<P: AsRef<Path>>(path: P) -> Self {
        match path.as_ref().extension().and_then(|ext| ext.to_str()) {
            Some("yaml") | Some("yml") => Format::Yaml,
            _ => Format::Toml,
        }
    }
}

/// Transpose defaults
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Settings {
    /// Semitones to shift by (-11 to 11)
    #[serde(default = "default_transpose")]
    pub transpose: i8,
    /// Write accidentals as flats instead of sharps
    #[serde(default)]
    pub use_flats: bool,
}

fn default_transpose() -> i8 {
    1
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            transpose: default_transpose(),
            use_flats: false,
        }
    }
}

impl Settings {
    /// Load settings from a TOML or YAML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read settings file: {:?}", path.as_ref()))?;
        let parsed = match Format::from_path(&path) {
            Format::Toml => Self::from_toml(&contents),
            Format::Yaml => Self::from_yaml(&contents),
        };
        parsed.with_context(|| format!("Invalid settings file: {:?}", path.as_ref()))
    }

    /// Parse settings from a TOML string
    pub fn from_toml(text: &str) -> Result<Self> {
        let settings: Settings = toml::from_str(text).context("Failed to parse TOML settings")?;
        settings.validate()?;
        Ok(settings)
    }

    /// Parse settings from a YAML string
    pub fn from_yaml(text: &str) -> Result<Self> {
        let settings: Settings =
            serde_yaml::from_str(text).context("Failed to parse YAML settings")?;
        settings.validate()?;
        Ok(settings)
    }

    /// Serialize to a TOML string
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string(self).context("Failed to serialize settings to TOML")
    }

    /// Serialize to a YAML string
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).context("Failed to serialize settings to YAML")
    }

    /// Save settings, in the format matching the file extension
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let text = match Format::from_path(&path) {
            Format::Toml => self.to_toml()?,
            Format::Yaml => self.to_yaml()?,
        };
        fs::write(path.as_ref(), text)
            .with_context(|| format!("Failed to write settings file: {:?}", path.as_ref()))
    }

    /// Check the transpose value is in range
    pub fn validate(&self) -> crate::Result<()> {
        self.transpose_value().map(|_| ())
    }

    /// The configured transpose value
    pub fn transpose_value(&self) -> crate::Result<TransposeValue> {
        TransposeValue::new(self.transpose as i64)
    }

    /// The configured spelling
    pub fn spelling(&self) -> Spelling {
        Spelling::from_use_flats(self.use_flats)
    }

    /// A transposer for these settings
    pub fn transposer(&self) -> crate::Result<Transposer> {
        Ok(Transposer::new(self.transpose_value()?, self.spelling()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_parse_toml() {
        let settings = Settings::from_toml("transpose = -3\nuse_flats = true\n").unwrap();
        assert_eq!(settings.transpose, -3);
        assert!(settings.use_flats);
        assert_eq!(settings.spelling(), Spelling::Flats);
    }

    #[test]
    fn test_parse_yaml() {
        let yaml = r#"
transpose: 5
use_flats: false
"#;
        let settings = Settings::from_yaml(yaml).unwrap();
        assert_eq!(settings.transpose, 5);
        assert_eq!(settings.spelling(), Spelling::Sharps);
    }

    #[test]
    fn test_default_values() {
        let settings = Settings::from_toml("").unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.transpose_value().unwrap().semitones(), 1);
    }

    #[test]
    fn test_out_of_range_rejected() {
        assert!(Settings::from_toml("transpose = 12").is_err());
        assert!(Settings::from_yaml("transpose: -20").is_err());
    }

    #[test]
    fn test_format_from_path() {
        assert_eq!(Format::from_path("chordshift.yaml"), Format::Yaml);
        assert_eq!(Format::from_path("chordshift.yml"), Format::Yaml);
        assert_eq!(Format::from_path("chordshift.toml"), Format::Toml);
        assert_eq!(Format::from_path("chordshift"), Format::Toml);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let settings = Settings {
            transpose: -7,
            use_flats: true,
        };

        for name in ["settings.toml", "settings.yaml"] {
            let path = dir.path().join(name);
            settings.save(&path).unwrap();
            assert_eq!(Settings::load(&path).unwrap(), settings);
        }
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempdir().unwrap();
        assert!(Settings::load(dir.path().join("missing.toml")).is_err());
    }

    #[test]
    fn test_transposer_from_settings() {
        let settings = Settings {
            transpose: 2,
            use_flats: true,
        };
        let transposer = settings.transposer().unwrap();
        assert_eq!(transposer.transpose("C#m"), "Ebm");
    }
}
