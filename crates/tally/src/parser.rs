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

//! Percentage extraction from free text.
//!
//! Extraction runs an ordered list of [`ExtractionStrategy`] values. The first
//! strategy that yields at least one match anywhere in the text wins and the
//! remaining strategies are never consulted.

use crate::error::{ParseError, ParseResult};
use crate::normalizer::clean_label;
use crate::types::DataPoint;
use once_cell::sync::Lazy;
use regex::Regex;
use std::ops::Range;
use tracing::debug;

static PERCENT: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\d+(?:\.\d+)?)%").unwrap());
static CONNECTOR_PREFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*(?:for|of|were|was|are|is)\b").unwrap());
static AND_BREAK: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+and\b").unwrap());
static LABEL_FIRST: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"([^,.]+?)\s*(?:at|with|has|own)\s*(\d+(?:\.\d+)?)%").unwrap()
});
static REMAINDER_CLAUSE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:rest|remaining|others?)\s+(?:(?:for|of|were|was|are|is)\b)?\s*([^,.]+)")
        .unwrap()
});

/// A label/number pair as it appears in the text, before cleaning.
#[derive(Debug, Clone, PartialEq)]
pub struct RawMatch {
    pub label: String,
    pub value: f64,
    pub span: Range<usize>,
}

pub type Matcher = fn(&str) -> Vec<RawMatch>;

#[derive(Clone, Copy)]
pub struct ExtractionStrategy {
    pub name: &'static str,
    pub matcher: Matcher,
}
impl std::fmt::Debug for ExtractionStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExtractionStrategy")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}
impl ExtractionStrategy {
    pub const fn new(name: &'static str, matcher: Matcher) -> Self {
        Self { name, matcher }
    }
    pub fn run(&self, text: &str) -> Vec<RawMatch> {
        (self.matcher)(text)
    }
}

/// Priority order: "N% [connector] LABEL" before "LABEL at N%".
pub const DEFAULT_STRATEGIES: [ExtractionStrategy; 2] = [
    ExtractionStrategy::new("value-first", value_first),
    ExtractionStrategy::new("label-first", label_first),
];

#[derive(Debug, Clone)]
pub struct PercentageParser {
    strategies: Vec<ExtractionStrategy>,
}
impl PercentageParser {
    pub fn new() -> Self {
        Self {
            strategies: DEFAULT_STRATEGIES.to_vec(),
        }
    }
    pub fn with_strategies(strategies: Vec<ExtractionStrategy>) -> Self {
        Self { strategies }
    }
    pub fn strategies(&self) -> &[ExtractionStrategy] {
        &self.strategies
    }
    pub fn parse(&self, input: &str) -> ParseResult<Vec<DataPoint>> {
        if input.is_empty() {
            return Err(ParseError::InvalidInput);
        }
        for strategy in &self.strategies {
            let matches = strategy.run(input);
            if matches.is_empty() {
                continue;
            }
            debug!(
                strategy = strategy.name,
                matches = matches.len(),
                "Parser: extraction strategy matched"
            );
            return Ok(matches
                .into_iter()
                .map(|m| DataPoint::new(clean_label(&m.label), m.value))
                .collect());
        }
        debug!(len = input.len(), "Parser: no strategy matched");
        Err(ParseError::NoDataFound)
    }
}
impl Default for PercentageParser {
    fn default() -> Self {
        Self::new()
    }
}

pub fn parse_input(input: &str) -> ParseResult<Vec<DataPoint>> {
    PercentageParser::new().parse(input)
}

/// Label named by a "the rest / remaining / others ..." clause, if any.
pub fn remainder_label(input: &str) -> Option<String> {
    REMAINDER_CLAUSE
        .captures(input)
        .and_then(|caps| caps.get(1))
        .map(|m| clean_label(m.as_str()))
        .filter(|label| !label.is_empty())
}

/// "30% for Category A, 40% of Category B and ..." style phrasing.
pub fn value_first(text: &str) -> Vec<RawMatch> {
    let mut out = Vec::new();
    let mut pos = 0;
    while let Some(caps) = PERCENT.captures_at(text, pos) {
        let (Some(whole), Some(number)) = (caps.get(0), caps.get(1)) else {
            break;
        };
        let value = number.as_str().parse::<f64>().ok();
        match (value, label_after(text, whole.end())) {
            (Some(value), Some(label)) => {
                out.push(RawMatch {
                    label: text[label.clone()].to_string(),
                    value,
                    span: whole.start()..label.end,
                });
                pos = label.end;
            }
            _ => pos = whole.end(),
        }
    }
    out
}

/// "Category A at 60%" style phrasing.
pub fn label_first(text: &str) -> Vec<RawMatch> {
    LABEL_FIRST
        .captures_iter(text)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let value = caps.get(2)?.as_str().parse::<f64>().ok()?;
            Some(RawMatch {
                label: caps.get(1)?.as_str().to_string(),
                value,
                span: whole.range(),
            })
        })
        .collect()
}

fn label_after(text: &str, start: usize) -> Option<Range<usize>> {
    if let Some(conn) = CONNECTOR_PREFIX.find(&text[start..]) {
        let label_start = skip_whitespace(text, start + conn.end());
        if let Some(end) = label_end(text, label_start) {
            return Some(label_start..end);
        }
    }
    let label_start = skip_whitespace(text, start);
    label_end(text, label_start).map(|end| label_start..end)
}

fn skip_whitespace(text: &str, from: usize) -> usize {
    let rest = &text[from..];
    from + (rest.len() - rest.trim_start().len())
}

/// A label runs up to the next `,` or `.` and stops at the earliest of:
/// trailing whitespace before a comma or end of text, or a following "and".
fn label_end(text: &str, label_start: usize) -> Option<usize> {
    let rest = &text[label_start..];
    let run_len = rest.find([',', '.']).unwrap_or(rest.len());
    let run = &rest[..run_len];
    let min_len = run.chars().next()?.len_utf8();
    let closes_cleanly = run_len == rest.len() || rest[run_len..].starts_with(',');
    let trailing = closes_cleanly.then(|| run.trim_end().len().max(min_len));
    let and_break = AND_BREAK.find_at(run, min_len).map(|m| m.start());
    let cut = match (trailing, and_break) {
        (Some(a), Some(b)) => a.min(b),
        (a, b) => a.or(b)?,
    };
    Some(label_start + cut)
}
