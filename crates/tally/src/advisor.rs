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

use crate::config::ThemeConfig;
use crate::types::{ChartKind, DataPoint, VisualizationSuggestion};
use itertools::Itertools;

/// A cardinality rule: the chart applies when `applies(n)` holds.
#[derive(Clone, Copy)]
pub struct ChartRule {
    pub chart: ChartKind,
    pub applies: fn(usize) -> bool,
}

/// Evaluated independently, in this order.
pub const CARDINALITY_RULES: [ChartRule; 3] = [
    ChartRule {
        chart: ChartKind::Pie,
        applies: |n| n <= 5,
    },
    ChartRule {
        chart: ChartKind::Bar,
        applies: |n| n > 3,
    },
    ChartRule {
        chart: ChartKind::Treemap,
        applies: |n| n > 5,
    },
];

pub fn charts_for_cardinality(n: usize) -> Vec<ChartKind> {
    let charts: Vec<ChartKind> = CARDINALITY_RULES
        .iter()
        .filter(|rule| (rule.applies)(n))
        .map(|rule| rule.chart)
        .unique()
        .collect();
    if charts.is_empty() {
        vec![ChartKind::Pie]
    } else {
        charts
    }
}

pub struct VisualizationAdvisor {
    theme: ThemeConfig,
}
impl VisualizationAdvisor {
    pub fn new(theme: ThemeConfig) -> Self {
        Self { theme }
    }
    pub fn suggest(&self, points: &[DataPoint]) -> VisualizationSuggestion {
        VisualizationSuggestion {
            suggested_charts: charts_for_cardinality(points.len()),
            suggested_theme: self.theme.default_theme.clone(),
        }
    }
}
impl Default for VisualizationAdvisor {
    fn default() -> Self {
        Self::new(ThemeConfig::default())
    }
}

pub fn suggest_visualizations(points: &[DataPoint]) -> VisualizationSuggestion {
    VisualizationAdvisor::default().suggest(points)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ChartKind::*;

    #[test]
    fn cardinality_table() {
        assert_eq!(charts_for_cardinality(1), vec![Pie]);
        assert_eq!(charts_for_cardinality(3), vec![Pie]);
        assert_eq!(charts_for_cardinality(4), vec![Pie, Bar]);
        assert_eq!(charts_for_cardinality(5), vec![Pie, Bar]);
        assert_eq!(charts_for_cardinality(6), vec![Bar, Treemap]);
        assert_eq!(charts_for_cardinality(40), vec![Bar, Treemap]);
    }

    #[test]
    fn empty_dataset_still_gets_pie() {
        assert_eq!(charts_for_cardinality(0), vec![Pie]);
        let suggestion = suggest_visualizations(&[]);
        assert_eq!(suggestion.suggested_charts, vec![Pie]);
        assert_eq!(suggestion.suggested_theme, "default");
    }

    #[test]
    fn theme_is_injected() {
        let advisor = VisualizationAdvisor::new(ThemeConfig {
            default_theme: "Nordic Frost".into(),
            palettes: Vec::new(),
        });
        let suggestion = advisor.suggest(&[DataPoint::new("A", 100.0)]);
        assert_eq!(suggestion.suggested_theme, "Nordic Frost");
        assert_eq!(suggestion.suggested_charts, vec![Pie]);
    }
}
