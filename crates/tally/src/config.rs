// SPDX-License-Identifier: AGPL-3.0-only
// Copyright (C) 2024 Jonathan Lee
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License version 3
// as published by the Free Software Foundation.
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.
// See the GNU Affero General Public License for more details.
// You should have received a copy of the GNU Affero General Public License
// along with this program. If not, see https://www.gnu.org/licenses/.

use crate::error::{ConfigError, ConfigResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct TallyConfig {
    pub analysis: AnalysisConfig,
    pub labeling: LabelingConfig,
    pub balancing: BalancingConfig,
    pub theme: ThemeConfig,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct AnalysisConfig {
    pub even_std_dev: f64,
    pub disparity_std_dev: f64,
    pub high_concentration: f64,
    pub low_concentration: f64,
    pub growth_band_low: f64,
    pub growth_band_high: f64,
}
impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            even_std_dev: 5.0,
            disparity_std_dev: 15.0,
            high_concentration: 60.0,
            low_concentration: 40.0,
            growth_band_low: 0.7,
            growth_band_high: 1.3,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct LabelingConfig {
    pub min_confidence: f64,
}
impl Default for LabelingConfig {
    fn default() -> Self {
        Self {
            min_confidence: 0.5,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct BalancingConfig {
    pub remainder_label: String,
}
impl Default for BalancingConfig {
    fn default() -> Self {
        Self {
            remainder_label: "Others".to_string(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Palette {
    pub name: String,
    pub colors: Vec<String>,
}
impl Palette {
    fn new(name: &str, colors: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            colors: colors.iter().map(|c| c.to_string()).collect(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ThemeConfig {
    pub default_theme: String,
    pub palettes: Vec<Palette>,
}
impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            default_theme: "default".to_string(),
            palettes: vec![
                Palette::new(
                    "default",
                    &["#3B82F6", "#10B981", "#F59E0B", "#EF4444", "#8B5CF6"],
                ),
                Palette::new(
                    "Vibrant Future",
                    &["#6366F1", "#8B5CF6", "#EC4899", "#F43F5E", "#10B981"],
                ),
                Palette::new(
                    "Ocean Depths",
                    &["#0EA5E9", "#2563EB", "#06B6D4", "#0891B2", "#0E7490"],
                ),
                Palette::new(
                    "Enchanted Forest",
                    &["#059669", "#047857", "#10B981", "#34D399", "#6EE7B7"],
                ),
            ],
        }
    }
}
impl ThemeConfig {
    pub fn palette(&self, name: &str) -> Option<&Palette> {
        self.palettes.iter().find(|p| p.name.eq_ignore_ascii_case(name))
    }
}

impl TallyConfig {
    pub fn load_from_file(config_path: &Path) -> ConfigResult<Self> {
        let content = fs::read_to_string(config_path).map_err(|source| ConfigError::FileRead {
            path: config_path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> ConfigResult<Self> {
        let config: TallyConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn default_config_path() -> PathBuf {
        PathBuf::from("config/tally.toml")
    }

    pub fn load_or_default() -> Self {
        let config_path = Self::default_config_path();
        Self::load_from_file(&config_path).unwrap_or_else(|e| {
            tracing::debug!(error = %e, "TallyConfig: falling back to defaults");
            Self::default()
        })
    }

    pub fn validate(&self) -> ConfigResult<()> {
        let a = &self.analysis;
        let invalid = |field: &str, value: f64| ConfigError::InvalidThreshold {
            field: field.to_string(),
            value,
        };
        if !(a.even_std_dev >= 0.0 && a.even_std_dev <= a.disparity_std_dev) {
            return Err(invalid("analysis.even_std_dev", a.even_std_dev));
        }
        if !(0.0..=100.0).contains(&a.high_concentration) {
            return Err(invalid("analysis.high_concentration", a.high_concentration));
        }
        if !(0.0..=a.high_concentration).contains(&a.low_concentration) {
            return Err(invalid("analysis.low_concentration", a.low_concentration));
        }
        if !(a.growth_band_low >= 0.0 && a.growth_band_low < a.growth_band_high) {
            return Err(invalid("analysis.growth_band_low", a.growth_band_low));
        }
        if !(0.0..=1.0).contains(&self.labeling.min_confidence) {
            return Err(invalid(
                "labeling.min_confidence",
                self.labeling.min_confidence,
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_are_valid() {
        assert!(TallyConfig::default().validate().is_ok());
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let config = TallyConfig::from_toml_str(
            r#"
            [analysis]
            high_concentration = 70.0

            [balancing]
            remainder_label = "Other"
            "#,
        )
        .unwrap();
        assert_eq!(config.analysis.high_concentration, 70.0);
        assert_eq!(config.analysis.low_concentration, 40.0);
        assert_eq!(config.balancing.remainder_label, "Other");
        assert_eq!(config.labeling.min_confidence, 0.5);
    }

    #[test]
    fn inverted_concentration_band_is_rejected() {
        let err = TallyConfig::from_toml_str(
            r#"
            [analysis]
            high_concentration = 30.0
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidThreshold { ref field, .. } if field == "analysis.low_concentration"));
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[theme]\ndefault_theme = \"Ocean Depths\"").unwrap();
        let config = TallyConfig::load_from_file(file.path()).unwrap();
        assert_eq!(config.theme.default_theme, "Ocean Depths");
        assert!(config.theme.palette("ocean depths").is_some());
    }

    #[test]
    fn missing_file_reports_path() {
        let err = TallyConfig::load_from_file(Path::new("/nonexistent/tally.toml")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/tally.toml"));
    }
}
