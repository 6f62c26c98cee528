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

use tally::types::total;
use tally::{
    process, ChartKind, DataPoint, ParseError, TallyConfig, TallyError, TallyPipeline,
    ValidationError,
};

#[test]
fn test_two_categories_and_implicit_others() {
    let out = process("30% for Category A, 40% for Category B, and Others").unwrap();
    assert_eq!(
        out.data,
        vec![
            DataPoint::new("Category A", 30.0),
            DataPoint::new("Category B", 40.0),
            DataPoint::new("Others", 30.0),
        ]
    );
    assert!((total(&out.data) - 100.0).abs() < 1e-9);
    assert_eq!(out.suggested_charts, vec![ChartKind::Pie]);
    assert_eq!(out.suggested_theme, "default");
    assert_eq!(
        out.insights,
        vec![
            "Category B leads with 40%",
            "Others has the lowest share at 30%",
            "The distribution is relatively even across categories",
            "High market concentration: top 2 categories control 70%",
        ]
    );
    assert_eq!(out.predictions, vec!["Market consolidation trend likely to continue"]);
    assert_eq!(out.trends, vec!["Category A shows growth potential"]);
}

#[test]
fn test_total_over_100_is_rejected() {
    let err = process("Category A at 60%, Category B at 50%").unwrap_err();
    assert!(matches!(
        err,
        TallyError::Validation(ValidationError::TotalExceeds100 { total: sum }) if sum == 110.0
    ));
}

#[test]
fn test_out_of_range_names_item() {
    let err = process("150% for Hype").unwrap_err();
    match err {
        TallyError::Validation(ValidationError::OutOfRange { name, value }) => {
            assert_eq!(name, "Hype");
            assert_eq!(value, 150.0);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_parse_failures_surface_verbatim() {
    assert!(matches!(
        process(""),
        Err(TallyError::Parse(ParseError::InvalidInput))
    ));
    assert!(matches!(
        process("no numbers here"),
        Err(TallyError::Parse(ParseError::NoDataFound))
    ));
    assert!(matches!(
        process("   "),
        Err(TallyError::Parse(ParseError::NoDataFound))
    ));
}

#[test]
fn test_single_item_dataset() {
    let pipeline = TallyPipeline::new();
    let out = pipeline.process("100% for Solo").unwrap();
    assert_eq!(out.data, vec![DataPoint::new("Solo", 100.0)]);
    assert_eq!(out.insights[0], "Solo leads with 100%");
    assert_eq!(out.insights[1], "Solo has the lowest share at 100%");

    let labeled = pipeline.label_dataset(&out.data);
    assert_eq!(labeled.labeled_data.len(), 1);
    assert_eq!(labeled.labeled_data[0].category, "A");
    assert_eq!(labeled.labeled_data[0].label, "Solo");
    assert_eq!(labeled.labeled_data[0].confidence, 0.7);
    assert_eq!(labeled.stats.average_confidence, 0.7);
}

#[test]
fn test_six_items_drop_pie() {
    let out = process(
        "20% for North, 20% for South, 20% for East, 20% for West, 10% for Central, 10% for Islands",
    )
    .unwrap();
    assert_eq!(out.data.len(), 6);
    assert_eq!(out.suggested_charts, vec![ChartKind::Bar, ChartKind::Treemap]);
}

#[test]
fn test_named_remainder_clause() {
    let out = process("55% for Android, 30% for iOS, the rest for other platforms").unwrap();
    assert_eq!(out.data.last(), Some(&DataPoint::new("Other Platforms", 15.0)));
}

#[test]
fn test_configured_remainder_and_theme() {
    let config = TallyConfig::from_toml_str(
        r#"
        [balancing]
        remainder_label = "Everything Else"

        [theme]
        default_theme = "Ocean Depths"
        "#,
    )
    .unwrap();
    let out = TallyPipeline::with_config(config)
        .process("25% for Rent, 25% for Food")
        .unwrap();
    assert_eq!(out.data[2], DataPoint::new("Everything Else", 50.0));
    assert_eq!(out.suggested_theme, "Ocean Depths");
}

#[test]
fn test_process_is_deterministic() {
    let input = "12.5% were cats, 37.5% were dogs and 20% were fish";
    assert_eq!(process(input).unwrap(), process(input).unwrap());
}

#[test]
fn test_json_shape() {
    let out = process("60% for Yes, 40% for No").unwrap();
    let json = serde_json::to_value(&out).unwrap();
    assert_eq!(json["data"][0]["name"], "Yes");
    assert_eq!(json["data"][0]["value"], 60.0);
    assert_eq!(json["suggestedCharts"], serde_json::json!(["pie"]));
    assert!(json["insights"].is_array());
}

#[test]
fn test_shipped_config_matches_defaults() {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("../../config/tally.toml");
    let config = TallyConfig::load_from_file(&path).unwrap();
    let defaults = TallyConfig::default();
    assert_eq!(config.analysis, defaults.analysis);
    assert_eq!(config.labeling, defaults.labeling);
    assert_eq!(config.balancing, defaults.balancing);
    assert_eq!(config.theme.default_theme, "default");
    assert!(config.theme.palette("Nordic Frost").is_some());
}
