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

use serde::{Deserialize, Serialize};
use std::fmt;

/// A named percentage in the canonical dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub name: String,
    pub value: f64,
}
impl DataPoint {
    pub fn new(name: impl Into<String>, value: f64) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

pub fn total(points: &[DataPoint]) -> f64 {
    points.iter().map(|p| p.value).sum()
}

/// Working copy ordered by value, largest first. Ties keep extraction order.
pub fn sorted_desc(points: &[DataPoint]) -> Vec<&DataPoint> {
    let mut sorted: Vec<&DataPoint> = points.iter().collect();
    sorted.sort_by(|a, b| b.value.total_cmp(&a.value));
    sorted
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Pie,
    Bar,
    Treemap,
    Line,
}
impl ChartKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChartKind::Pie => "pie",
            ChartKind::Bar => "bar",
            ChartKind::Treemap => "treemap",
            ChartKind::Line => "line",
        }
    }
}
impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub insights: Vec<String>,
    pub predictions: Vec<String>,
    pub trends: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisualizationSuggestion {
    pub suggested_charts: Vec<ChartKind>,
    pub suggested_theme: String,
}

/// Everything one `process` call hands to the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessedData {
    pub data: Vec<DataPoint>,
    pub insights: Vec<String>,
    pub predictions: Vec<String>,
    pub trends: Vec<String>,
    pub suggested_charts: Vec<ChartKind>,
    pub suggested_theme: String,
}
impl ProcessedData {
    pub fn from_parts(
        data: Vec<DataPoint>,
        analysis: AnalysisResult,
        visual: VisualizationSuggestion,
    ) -> Self {
        Self {
            data,
            insights: analysis.insights,
            predictions: analysis.predictions,
            trends: analysis.trends,
            suggested_charts: visual.suggested_charts,
            suggested_theme: visual.suggested_theme,
        }
    }
}
