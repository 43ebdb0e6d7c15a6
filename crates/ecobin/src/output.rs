//! Rendering for command output.
//!
//! Handlers build their table rows up front and pass them here together with
//! the underlying records: `table` shows the curated columns, `json` /
//! `json-compact` / `yaml` serialize the full domain objects, and `plain`
//! prints one bare identifier per line for scripting.
//!
//! The cell formatters shared by several views (carbon totals, timestamps,
//! fill levels) also live here so each table renders them the same way.

use std::io::{self, IsTerminal, Write};

use chrono::{DateTime, Utc};
use owo_colors::OwoColorize;
use serde::Serialize;
use tabled::{Table, Tabled, settings::Style};

use crate::cli::{ColorMode, OutputFormat};

/// Whether ANSI color is in effect for this invocation.
pub fn should_color(mode: &ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => io::stdout().is_terminal() && std::env::var("NO_COLOR").is_err(),
    }
}

/// Render a collection of records with their precomputed table rows.
pub fn render_rows<T, R>(
    format: &OutputFormat,
    records: &[T],
    rows: Vec<R>,
    id_of: impl Fn(&T) -> String,
) -> String
where
    T: Serialize,
    R: Tabled,
{
    match format {
        OutputFormat::Table => Table::new(&rows).with(Style::rounded()).to_string(),
        OutputFormat::Plain => records.iter().map(id_of).collect::<Vec<_>>().join("\n"),
        structured => render_structured(structured, records),
    }
}

/// Render one record, with a handler-supplied detail view for table mode.
pub fn render_record<T: Serialize>(
    format: &OutputFormat,
    record: &T,
    detail: impl FnOnce(&T) -> String,
    id_of: impl FnOnce(&T) -> String,
) -> String {
    match format {
        OutputFormat::Table => detail(record),
        OutputFormat::Plain => id_of(record),
        structured => render_structured(structured, record),
    }
}

fn render_structured<T: Serialize + ?Sized>(format: &OutputFormat, data: &T) -> String {
    match format {
        OutputFormat::Json => {
            serde_json::to_string_pretty(data).expect("serialization should not fail")
        }
        OutputFormat::JsonCompact => {
            serde_json::to_string(data).expect("serialization should not fail")
        }
        OutputFormat::Yaml => serde_yaml::to_string(data).expect("serialization should not fail"),
        OutputFormat::Table | OutputFormat::Plain => {
            unreachable!("table and plain are handled by the render entry points")
        }
    }
}

/// Write rendered output to stdout unless `--quiet` suppressed it.
pub fn emit(rendered: &str, quiet: bool) {
    if quiet || rendered.is_empty() {
        return;
    }
    let mut stdout = io::stdout().lock();
    let _ = writeln!(stdout, "{rendered}");
}

// Cell formatters.

/// Grams of CO2 saved, switching to kilograms from 1 kg up.
pub fn carbon_cell(grams: i64) -> String {
    if grams.abs() < 1000 {
        format!("{grams} g")
    } else {
        format!("{:.1} kg", grams as f64 / 1000.0)
    }
}

/// "YYYY-MM-DD HH:MM", or a dash when the backend sent no timestamp.
pub fn timestamp_cell(ts: Option<DateTime<Utc>>) -> String {
    ts.map_or_else(
        || "-".to_owned(),
        |t| t.format("%Y-%m-%d %H:%M").to_string(),
    )
}

/// Fill percentage, rendered in red when the bin wants emptying.
pub fn fill_cell(fill_pct: u8, warn: bool) -> String {
    let text = format!("{fill_pct}%");
    if warn { text.red().to_string() } else { text }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn carbon_switches_units_at_a_kilogram() {
        assert_eq!(carbon_cell(0), "0 g");
        assert_eq!(carbon_cell(999), "999 g");
        assert_eq!(carbon_cell(1500), "1.5 kg");
    }

    #[test]
    fn missing_timestamp_renders_dash() {
        assert_eq!(timestamp_cell(None), "-");
    }

    #[test]
    fn fill_cell_colors_only_when_warned() {
        assert_eq!(fill_cell(40, false), "40%");
        let warned = fill_cell(95, true);
        assert!(warned.contains("95%"));
        assert_ne!(warned, "95%");
    }

    #[test]
    fn plain_mode_emits_one_id_per_line() {
        #[derive(Serialize)]
        struct Rec {
            id: String,
        }
        #[derive(Tabled)]
        struct Row {
            id: String,
        }
        let records = vec![
            Rec { id: "a".into() },
            Rec { id: "b".into() },
        ];
        let rows = records
            .iter()
            .map(|r| Row { id: r.id.clone() })
            .collect::<Vec<_>>();
        let out = render_rows(&OutputFormat::Plain, &records, rows, |r| r.id.clone());
        assert_eq!(out, "a\nb");
    }

    #[test]
    fn structured_modes_serialize_the_record_not_the_row() {
        #[derive(Serialize)]
        struct Rec {
            id: String,
            hidden: i64,
        }
        let rec = Rec {
            id: "a".into(),
            hidden: 7,
        };
        let out = render_record(&OutputFormat::JsonCompact, &rec, |_| String::new(), |_| {
            String::new()
        });
        assert_eq!(out, r#"{"id":"a","hidden":7}"#);
    }
}
