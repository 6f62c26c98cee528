// SPDX-License-Identifier: AGPL-3.0-only
// Plain-text rendering for terminal output.
use std::fmt::Write;
use tally::{EnhancedPrompt, LabeledDataset, Palette, ProcessedData};

fn section(out: &mut String, title: &str, lines: &[String]) {
    if lines.is_empty() {
        return;
    }
    let _ = writeln!(out, "\n{title}:");
    for line in lines {
        let _ = writeln!(out, "  - {line}");
    }
}

fn chart_list<T: ToString>(charts: &[T]) -> String {
    charts
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn processed(data: &ProcessedData) -> String {
    let mut out = String::from("Data:\n");
    let width = data.data.iter().map(|p| p.name.len()).max().unwrap_or(0);
    for point in &data.data {
        let _ = writeln!(out, "  {:<width$}  {:>6.2}%", point.name, point.value);
    }
    section(&mut out, "Insights", &data.insights);
    section(&mut out, "Predictions", &data.predictions);
    section(&mut out, "Trends", &data.trends);
    let _ = writeln!(out, "\nCharts: {}", chart_list(&data.suggested_charts));
    let _ = writeln!(out, "Theme: {}", data.suggested_theme);
    out
}

pub fn labeled(dataset: &LabeledDataset) -> String {
    let mut out = String::new();
    for point in &dataset.labeled_data {
        let _ = writeln!(
            out,
            "  [{}] {} {:.2}% (confidence {:.2})",
            point.category, point.label, point.value, point.confidence
        );
    }
    let stats = &dataset.stats;
    let _ = writeln!(
        out,
        "\n{} of {} points labeled, {} unlabeled, average confidence {:.2}",
        stats.labeled_points, stats.total_points, stats.unlabeled_points, stats.average_confidence
    );
    out
}

pub fn enhanced(prompt: &EnhancedPrompt) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", prompt.enhanced_text);
    let _ = writeln!(out, "\nData type: {:?}", prompt.data_type);
    let _ = writeln!(out, "Suggested charts: {}", chart_list(&prompt.suggested_charts));
    let _ = writeln!(out, "Primary chart: {}", prompt.primary_chart);
    if !prompt.relationships.is_empty() {
        let rels: Vec<String> = prompt
            .relationships
            .iter()
            .map(|r| format!("{r:?}").to_lowercase())
            .collect();
        let _ = writeln!(out, "Relationships: {}", rels.join(", "));
    }
    out
}

pub fn themes(palettes: &[Palette], default_theme: &str) -> String {
    let mut out = String::new();
    for palette in palettes {
        let marker = if palette.name == default_theme { "*" } else { " " };
        let _ = writeln!(out, "{marker} {} ({})", palette.name, palette.colors.join(" "));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn process_report_lists_sections() {
        let data = tally::process("30% for Category A, 40% for Category B").unwrap();
        let text = processed(&data);
        assert!(text.contains("Category B"));
        assert!(text.contains("Insights:"));
        assert!(text.contains("Charts: pie"));
        assert!(text.contains("Theme: default"));
    }

    #[test]
    fn label_report_summarises_stats() {
        let data = tally::process("100% for Solo").unwrap();
        let text = labeled(&tally::label_dataset(&data.data));
        assert!(text.contains("[A] Solo"));
        assert!(text.contains("1 of 1 points labeled"));
    }

    #[test]
    fn default_theme_is_marked() {
        let config = tally::TallyConfig::default();
        let text = themes(&config.theme.palettes, "default");
        assert!(text.starts_with("* default"));
    }
}
