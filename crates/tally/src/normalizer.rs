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

use once_cell::sync::Lazy;
use regex::Regex;

pub const CONNECTORS: [&str; 6] = ["for", "of", "were", "was", "are", "is"];

static LEADING_CONNECTOR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"(?i)^(?:{})(?:\s+|$)", CONNECTORS.join("|"))).unwrap()
});

/// Turns a raw text fragment into a display label: one leading connector
/// word removed, whitespace collapsed, each word title-cased.
pub fn clean_label(raw: &str) -> String {
    let stripped = LEADING_CONNECTOR.replace(raw.trim(), "");
    stripped
        .split_whitespace()
        .map(title_case)
        .collect::<Vec<_>>()
        .join(" ")
}

fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn strips_single_leading_connector() {
        assert_eq!(clean_label("  for   category a "), "Category A");
        assert_eq!(clean_label("IS mobile users"), "Mobile Users");
        assert_eq!(clean_label("of of things"), "Of Things");
    }

    #[test]
    fn connector_must_be_a_whole_word() {
        assert_eq!(clean_label("forest fires"), "Forest Fires");
        assert_eq!(clean_label("island"), "Island");
    }

    #[test]
    fn connector_only_input_becomes_empty() {
        assert_eq!(clean_label("were"), "");
        assert_eq!(clean_label("   "), "");
    }

    #[test]
    fn title_cases_mixed_case_words() {
        assert_eq!(clean_label("mAcOS\tUSERS"), "Macos Users");
    }

    fn is_connector(word: &str) -> bool {
        CONNECTORS.iter().any(|c| c.eq_ignore_ascii_case(word))
    }

    #[test]
    fn every_connector_is_stripped() {
        for connector in CONNECTORS {
            assert_eq!(clean_label(&format!("{} share", connector.to_uppercase())), "Share");
        }
        assert_eq!(clean_label("with share"), "With Share");
    }

    proptest! {
        #[test]
        fn normalising_is_idempotent(words in prop::collection::vec("[a-zA-Z]{1,8}", 1..5)) {
            prop_assume!(!is_connector(&words[0]));
            let once = clean_label(&words.join("  "));
            prop_assert_eq!(clean_label(&once), once.clone());
        }
    }
}
