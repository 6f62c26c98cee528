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

//! Optional pre-pass that classifies raw text and appends hints before the
//! text goes through the extraction pipeline. Never fails.

use crate::types::ChartKind;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static FOUR_DIGITS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d{4}").unwrap());
static ANY_NUMBER: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+(?:\.\d+)?").unwrap());
static PERCENT_TOKEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\d+(?:\.\d+)?)%").unwrap());
static LOOSE_ENTITY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\d+(?:\.\d+)?%\s*(?:of\s+)?[^,.]+").unwrap());

static COMPARISON: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)more than|less than|compared to|versus|vs").unwrap());
static TEMPORAL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)over time|yearly|monthly|weekly|daily").unwrap());
static HIERARCHICAL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)within|inside|containing|comprises").unwrap());

const PREFERENCE_HINT: &str = "\nAnalyzing preference distribution. Recommended visualizations: Pie Chart for overall distribution, Bar Chart for comparison.";
const OVERLAP_HINT: &str = "\nDetected overlapping categories. Recommended visualization: Treemap for hierarchical representation.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataKind {
    Percentage,
    Temporal,
    Numerical,
    Categorical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Relationship {
    Comparison,
    Temporal,
    Hierarchical,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnhancedPrompt {
    pub enhanced_text: String,
    pub suggested_charts: Vec<ChartKind>,
    pub data_type: DataKind,
    pub relationships: Vec<Relationship>,
    pub primary_chart: ChartKind,
}

pub fn detect_data_kind(input: &str) -> DataKind {
    if input.contains('%') {
        DataKind::Percentage
    } else if FOUR_DIGITS.is_match(input) {
        DataKind::Temporal
    } else if ANY_NUMBER.is_match(input) {
        DataKind::Numerical
    } else {
        DataKind::Categorical
    }
}

pub fn detect_relationships(input: &str) -> Vec<Relationship> {
    [
        (&*COMPARISON, Relationship::Comparison),
        (&*TEMPORAL, Relationship::Temporal),
        (&*HIERARCHICAL, Relationship::Hierarchical),
    ]
    .into_iter()
    .filter(|(re, _)| re.is_match(input))
    .map(|(_, rel)| rel)
    .collect()
}

/// Single best chart for the text, from its relationships and entity count.
pub fn recommend_chart(relationships: &[Relationship], entity_count: usize) -> ChartKind {
    if relationships.contains(&Relationship::Temporal) {
        ChartKind::Line
    } else if relationships.contains(&Relationship::Hierarchical) {
        ChartKind::Treemap
    } else if relationships.contains(&Relationship::Comparison) {
        if entity_count > 4 {
            ChartKind::Bar
        } else {
            ChartKind::Pie
        }
    } else if entity_count <= 5 {
        ChartKind::Pie
    } else if entity_count <= 10 {
        ChartKind::Bar
    } else {
        ChartKind::Treemap
    }
}

/// Sum of every `N%` token, or `None` when the text has none.
///
/// Decimal tokens count in full, so `12.5%` adds 12.5 rather than the
/// trailing integer `5%` an integer-only scan would pick up.
pub fn percentage_total(input: &str) -> Option<f64> {
    let values: Vec<f64> = PERCENT_TOKEN
        .captures_iter(input)
        .filter_map(|caps| caps.get(1)?.as_str().parse::<f64>().ok())
        .collect();
    (!values.is_empty()).then(|| values.iter().sum())
}

pub fn enhance_prompt(input: &str) -> EnhancedPrompt {
    let data_type = detect_data_kind(input);
    let mut enhanced_text = input.to_string();
    let mut suggested_charts = Vec::new();

    if data_type == DataKind::Percentage {
        let lower = input.to_lowercase();
        if lower.contains("like") || lower.contains("prefer") {
            enhanced_text.push_str(PREFERENCE_HINT);
            suggested_charts = vec![ChartKind::Pie, ChartKind::Bar];
        } else if lower.contains("both") {
            enhanced_text.push_str(OVERLAP_HINT);
            suggested_charts = vec![ChartKind::Treemap];
        }
    }

    if let Some(total) = percentage_total(input).filter(|t| *t < 100.0) {
        enhanced_text.push_str(&format!(
            "\nNote: Total percentage is {}%. The remaining {}% will be calculated as \"Others\".",
            total,
            100.0 - total
        ));
    }

    if suggested_charts.is_empty() {
        suggested_charts = vec![ChartKind::Pie, ChartKind::Bar, ChartKind::Treemap];
    }

    let relationships = detect_relationships(input);
    let primary_chart = recommend_chart(&relationships, LOOSE_ENTITY.find_iter(input).count());
    EnhancedPrompt {
        enhanced_text,
        suggested_charts,
        data_type,
        relationships,
        primary_chart,
    }
}
