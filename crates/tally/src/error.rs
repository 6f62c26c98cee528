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

use thiserror::Error;
#[derive(Error, Debug)]
pub enum TallyError {
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    #[error("Please provide valid input data")]
    InvalidInput,
    #[error(
        "No valid percentage data found. Please provide data in format like \"30% for Category A\" or \"Category B has 40%\""
    )]
    NoDataFound,
}
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Invalid percentage value for {name}. Values must be between 0 and 100")]
    OutOfRange { name: String, value: f64 },
    #[error("Total percentage exceeds 100% (got {total}%). Please check your input values")]
    TotalExceeds100 { total: f64 },
}
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read configuration file '{path}': {source}")]
    FileRead {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse TOML configuration: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Invalid threshold: {field} = {value}")]
    InvalidThreshold { field: String, value: f64 },
}
pub type Result<T> = std::result::Result<T, TallyError>;
pub type ParseResult<T> = std::result::Result<T, ParseError>;
pub type ValidationResult<T> = std::result::Result<T, ValidationError>;
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;
impl TallyError {
    pub fn category(&self) -> &'static str {
        match self {
            TallyError::Parse(_) => "Parse",
            TallyError::Validation(_) => "Validation",
            TallyError::Config(_) => "Configuration",
        }
    }
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            TallyError::Parse(ParseError::NoDataFound) => vec![
                "Write each entry as \"30% for Category A\"".to_string(),
                "Or use the form \"Category B at 40%\"".to_string(),
            ],
            TallyError::Validation(ValidationError::TotalExceeds100 { .. }) => vec![
                "Check that the percentages add up to at most 100".to_string(),
                "Remove duplicated entries".to_string(),
            ],
            TallyError::Validation(ValidationError::OutOfRange { .. }) => {
                vec!["Every percentage must be between 0 and 100".to_string()]
            }
            _ => vec!["Check the error message for specific guidance".to_string()],
        }
    }
}
