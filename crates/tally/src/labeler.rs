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

use crate::config::LabelingConfig;
use crate::types::{sorted_desc, DataPoint};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use uuid::Uuid;

pub const CATEGORY_LABELS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabeledDataPoint {
    pub id: String,
    pub value: f64,
    pub category: String,
    pub label: String,
    pub confidence: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatasetStats {
    pub total_points: usize,
    pub labeled_points: usize,
    pub unlabeled_points: usize,
    pub average_confidence: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LabeledDataset {
    pub labeled_data: Vec<LabeledDataPoint>,
    pub stats: DatasetStats,
}

/// Piecewise reliability score: mid-range shares are trusted most.
pub fn confidence_for(value: f64) -> f64 {
    if !(1.0..=100.0).contains(&value) {
        0.0
    } else if (20.0..=80.0).contains(&value) {
        0.8
    } else if value > 80.0 {
        0.7
    } else {
        0.6
    }
}

pub struct DatasetLabeler {
    config: LabelingConfig,
}
impl DatasetLabeler {
    pub fn new(config: LabelingConfig) -> Self {
        Self { config }
    }

    pub fn label(&self, points: &[DataPoint]) -> LabeledDataset {
        let mut codes = CATEGORY_LABELS.chars();
        let mut labeled_data = Vec::new();
        for point in sorted_desc(points) {
            let confidence = confidence_for(point.value);
            if confidence < self.config.min_confidence {
                continue;
            }
            let Some(code) = codes.next() else {
                warn!(
                    total = points.len(),
                    "DatasetLabeler: category codes exhausted; remaining points left unlabeled"
                );
                break;
            };
            labeled_data.push(LabeledDataPoint {
                id: Uuid::new_v4().to_string(),
                value: point.value,
                category: code.to_string(),
                label: point.name.clone(),
                confidence,
            });
        }

        let labeled_points = labeled_data.len();
        let average_confidence = if labeled_points == 0 {
            0.0
        } else {
            labeled_data.iter().map(|p| p.confidence).sum::<f64>() / labeled_points as f64
        };
        debug!(
            total = points.len(),
            labeled = labeled_points,
            "DatasetLabeler: labeling complete"
        );
        LabeledDataset {
            labeled_data,
            stats: DatasetStats {
                total_points: points.len(),
                labeled_points,
                unlabeled_points: points.len() - labeled_points,
                average_confidence,
            },
        }
    }
}
impl Default for DatasetLabeler {
    fn default() -> Self {
        Self::new(LabelingConfig::default())
    }
}

pub fn label_dataset(points: &[DataPoint]) -> LabeledDataset {
    DatasetLabeler::default().label(points)
}
