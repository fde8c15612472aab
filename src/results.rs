use anyhow::{Context, Result};
use console::Style;
use std::fs;
use std::path::Path;

use crate::types::ResultSet;

/// Turn a check identifier into a display name: `distance_matrix` -> `Distance Matrix`.
pub fn humanize(id: &str) -> String {
    id.split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

/// Print the pass count and a per-check line.
pub fn print_summary(results: &ResultSet) {
    let green = Style::new().green().bold();
    let red = Style::new().red().bold();

    println!();
    println!("{}", "=".repeat(60));
    println!("TEST SUMMARY");
    println!("{}", "=".repeat(60));
    println!("Total: {}/{} checks passed", results.passed_count(), results.len());
    println!();
    println!("Details:");

    for (id, passed) in results.iter() {
        let status = if passed {
            green.apply_to("PASS")
        } else {
            red.apply_to("FAIL")
        };
        println!("  - {}: {}", humanize(id), status);
    }

    println!("{}", "=".repeat(60));
}

/// Write the result set as pretty-printed JSON, replacing any existing file.
pub fn write_json(results: &ResultSet, output_path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(results).context("Failed to serialize results to JSON")?;
    fs::write(output_path, json)
        .with_context(|| format!("Failed to write results to {}", output_path.display()))?;
    Ok(())
}

/// Read a result set previously written by [`write_json`].
#[allow(dead_code)]
pub fn read_json(path: &Path) -> Result<ResultSet> {
    let content = fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("Failed to parse results in {}", path.display()))
}
