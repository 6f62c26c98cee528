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

use crate::config::AnalysisConfig;
use crate::types::{sorted_desc, AnalysisResult, DataPoint};
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DistributionStats {
    pub leader: DataPoint,
    pub laggard: DataPoint,
    pub mean: f64,
    pub std_dev: f64,
    pub top_two_share: f64,
}
impl DistributionStats {
    /// Population statistics over `points`; `None` for an empty slice.
    pub fn compute(points: &[DataPoint]) -> Option<Self> {
        let sorted = sorted_desc(points);
        let leader = (*sorted.first()?).clone();
        let laggard = (*sorted.last()?).clone();
        let n = points.len() as f64;
        let mean = points.iter().map(|p| p.value).sum::<f64>() / n;
        let variance = points
            .iter()
            .map(|p| (p.value - mean).powi(2))
            .sum::<f64>()
            / n;
        let top_two_share = sorted.iter().take(2).map(|p| p.value).sum();
        Some(Self {
            leader,
            laggard,
            mean,
            std_dev: variance.sqrt(),
            top_two_share,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Spread {
    Even,
    Moderate,
    Disparate,
}
pub fn classify_spread(std_dev: f64, config: &AnalysisConfig) -> Spread {
    if std_dev < config.even_std_dev {
        Spread::Even
    } else if std_dev > config.disparity_std_dev {
        Spread::Disparate
    } else {
        Spread::Moderate
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Concentration {
    High,
    Balanced,
    Fragmented,
}
pub fn classify_concentration(top_two_share: f64, config: &AnalysisConfig) -> Concentration {
    if top_two_share > config.high_concentration {
        Concentration::High
    } else if top_two_share < config.low_concentration {
        Concentration::Fragmented
    } else {
        Concentration::Balanced
    }
}

pub struct StatisticalAnalyzer {
    config: AnalysisConfig,
}
impl StatisticalAnalyzer {
    pub fn new(config: AnalysisConfig) -> Self {
        Self { config }
    }

    pub fn analyze(&self, points: &[DataPoint]) -> AnalysisResult {
        let mut result = AnalysisResult::default();
        let Some(stats) = DistributionStats::compute(points) else {
            return result;
        };
        debug!(
            points = points.len(),
            mean = stats.mean,
            std_dev = stats.std_dev,
            top_two = stats.top_two_share,
            "Analyzer: distribution computed"
        );

        result.insights.push(format!(
            "{} leads with {}%",
            stats.leader.name, stats.leader.value
        ));
        result.insights.push(format!(
            "{} has the lowest share at {}%",
            stats.laggard.name, stats.laggard.value
        ));

        match classify_spread(stats.std_dev, &self.config) {
            Spread::Even => result
                .insights
                .push("The distribution is relatively even across categories".to_string()),
            Spread::Disparate => result
                .insights
                .push("There are significant disparities between categories".to_string()),
            Spread::Moderate => {}
        }

        match classify_concentration(stats.top_two_share, &self.config) {
            Concentration::High => {
                result.insights.push(format!(
                    "High market concentration: top 2 categories control {}%",
                    stats.top_two_share
                ));
                result
                    .predictions
                    .push("Market consolidation trend likely to continue".to_string());
            }
            Concentration::Fragmented => {
                result.insights.push("Market is fairly fragmented".to_string());
                result
                    .predictions
                    .push("Expect increased competition in the market".to_string());
            }
            Concentration::Balanced => {}
        }

        if let Some(emerging) = self.first_emerging(points, stats.mean) {
            result
                .trends
                .push(format!("{} shows growth potential", emerging.name));
        }
        result
    }

    /// First item, in dataset order, strictly inside the growth band around the mean.
    fn first_emerging<'a>(&self, points: &'a [DataPoint], mean: f64) -> Option<&'a DataPoint> {
        let low = mean * self.config.growth_band_low;
        let high = mean * self.config.growth_band_high;
        points.iter().find(|p| p.value > low && p.value < high)
    }
}
impl Default for StatisticalAnalyzer {
    fn default() -> Self {
        Self::new(AnalysisConfig::default())
    }
}

pub fn analyze_data(points: &[DataPoint]) -> AnalysisResult {
    StatisticalAnalyzer::default().analyze(points)
}
