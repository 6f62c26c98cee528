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

pub mod advisor;
pub mod analyzer;
pub mod balancer;
pub mod config;
pub mod enhancer;
pub mod error;
pub mod labeler;
pub mod normalizer;
pub mod parser;
pub mod types;

pub use advisor::VisualizationAdvisor;
pub use analyzer::{DistributionStats, StatisticalAnalyzer};
pub use config::{Palette, TallyConfig};
pub use enhancer::{DataKind, EnhancedPrompt, Relationship};
pub use error::{ConfigError, ParseError, Result, TallyError, ValidationError};
pub use labeler::{DatasetLabeler, DatasetStats, LabeledDataPoint, LabeledDataset};
pub use parser::{ExtractionStrategy, PercentageParser};
pub use types::{AnalysisResult, ChartKind, DataPoint, ProcessedData, VisualizationSuggestion};

use std::path::Path;
use tracing::debug;

/// Text to chart data: extraction, balancing, analysis and chart advice.
pub struct TallyPipeline {
    config: TallyConfig,
    parser: PercentageParser,
    analyzer: StatisticalAnalyzer,
    advisor: VisualizationAdvisor,
    labeler: DatasetLabeler,
}
impl TallyPipeline {
    pub fn new() -> Self {
        Self::with_config(TallyConfig::default())
    }
    pub fn with_config(config: TallyConfig) -> Self {
        Self {
            parser: PercentageParser::new(),
            analyzer: StatisticalAnalyzer::new(config.analysis),
            advisor: VisualizationAdvisor::new(config.theme.clone()),
            labeler: DatasetLabeler::new(config.labeling),
            config,
        }
    }
    pub fn from_config_file(path: &Path) -> Result<Self> {
        Ok(Self::with_config(TallyConfig::load_from_file(path)?))
    }
    pub fn config(&self) -> &TallyConfig {
        &self.config
    }

    pub fn process(&self, input: &str) -> Result<ProcessedData> {
        let extracted = self.parser.parse(input)?;
        let data = balancer::balance(
            extracted,
            input,
            &self.config.balancing.remainder_label,
        )?;
        let analysis = self.analyzer.analyze(&data);
        let visual = self.advisor.suggest(&data);
        debug!(
            points = data.len(),
            insights = analysis.insights.len(),
            charts = visual.suggested_charts.len(),
            "TallyPipeline: processed input"
        );
        Ok(ProcessedData::from_parts(data, analysis, visual))
    }

    pub fn label_dataset(&self, data: &[DataPoint]) -> LabeledDataset {
        self.labeler.label(data)
    }

    pub fn enhance(&self, input: &str) -> EnhancedPrompt {
        enhancer::enhance_prompt(input)
    }
}
impl Default for TallyPipeline {
    fn default() -> Self {
        Self::new()
    }
}

pub fn process(input: &str) -> Result<ProcessedData> {
    TallyPipeline::new().process(input)
}

pub fn label_dataset(data: &[DataPoint]) -> LabeledDataset {
    labeler::label_dataset(data)
}

pub fn enhance(input: &str) -> EnhancedPrompt {
    enhancer::enhance_prompt(input)
}
