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

use crate::error::{ValidationError, ValidationResult};
use crate::parser::remainder_label;
use crate::types::{total, DataPoint};
use tracing::debug;

pub const MAX_TOTAL: f64 = 100.0;

/// Range check per item, then the total. Returns the total.
pub fn validate(points: &[DataPoint]) -> ValidationResult<f64> {
    if let Some(bad) = points
        .iter()
        .find(|p| !(0.0..=MAX_TOTAL).contains(&p.value))
    {
        return Err(ValidationError::OutOfRange {
            name: bad.name.clone(),
            value: bad.value,
        });
    }
    let sum = total(points);
    if sum > MAX_TOTAL {
        return Err(ValidationError::TotalExceeds100 { total: sum });
    }
    Ok(sum)
}

/// Validates and tops the dataset up to 100 with one remainder entry.
///
/// The remainder is named after a "rest / remaining / others" clause in
/// `input` when one exists, otherwise `fallback_label`.
pub fn balance(
    mut points: Vec<DataPoint>,
    input: &str,
    fallback_label: &str,
) -> ValidationResult<Vec<DataPoint>> {
    let sum = validate(&points)?;
    if sum < MAX_TOTAL {
        let name = remainder_label(input).unwrap_or_else(|| fallback_label.to_string());
        let remaining = MAX_TOTAL - sum;
        debug!(%name, remaining, "Balancer: appending remainder");
        points.push(DataPoint::new(name, remaining));
    }
    Ok(points)
}
