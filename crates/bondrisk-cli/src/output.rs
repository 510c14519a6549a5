//! Output formatting utilities.

use colored::Colorize;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;
use tabled::{
    settings::{object::Columns, Alignment, Modify, Style},
    Table, Tabled,
};

use crate::cli::OutputFormat;

/// Formats and prints rows based on the specified format.
pub fn print_output<T: Serialize + Tabled>(data: &[T], format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Table => print_table(data),
        OutputFormat::Json => print_json(data),
        OutputFormat::Csv => print_csv(data),
        OutputFormat::Minimal => print_minimal(data),
    }
}

/// Prints a single record as JSON or as a one-row CSV.
pub fn print_single<T: Serialize>(data: &T, format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Csv => {
            let mut wtr = csv::Writer::from_writer(std::io::stdout());
            wtr.serialize(data)?;
            wtr.flush()?;
        }
        _ => println!("{}", serde_json::to_string_pretty(data)?),
    }
    Ok(())
}

fn print_table<T: Tabled>(data: &[T]) -> anyhow::Result<()> {
    if data.is_empty() {
        println!("No results.");
        return Ok(());
    }

    let table = Table::new(data)
        .with(Style::rounded())
        .with(Modify::new(Columns::first()).with(Alignment::left()))
        .to_string();

    println!("{}", table);
    Ok(())
}

fn print_json<T: Serialize>(data: &[T]) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(data)?);
    Ok(())
}

fn print_csv<T: Serialize>(data: &[T]) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_writer(std::io::stdout());
    for item in data {
        wtr.serialize(item)?;
    }
    wtr.flush()?;
    Ok(())
}

fn print_minimal<T: Serialize>(data: &[T]) -> anyhow::Result<()> {
    for item in data {
        println!("{}", serde_json::to_string(item)?);
    }
    Ok(())
}

/// Rounds half away from zero to `precision` places for display.
pub fn format_value(value: f64, precision: u32) -> String {
    match Decimal::from_f64_retain(value) {
        Some(d) => format!(
            "{:.prec$}",
            d.round_dp_with_strategy(precision, RoundingStrategy::MidpointAwayFromZero),
            prec = precision as usize
        ),
        None => format!("{:.prec$}", value, prec = precision as usize),
    }
}

/// Formats a decimal rate as a percentage.
pub fn format_percent(value: f64, precision: u32) -> String {
    format!("{}%", format_value(value * 100.0, precision))
}

/// A key-value pair for display.
#[derive(Debug, Clone, Serialize, Tabled)]
pub struct KeyValue {
    #[tabled(rename = "Metric")]
    pub key: String,
    #[tabled(rename = "Value")]
    pub value: String,
}

impl KeyValue {
    /// Creates a new key-value pair.
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Creates a key-value pair from a number rounded to `precision`.
    pub fn from_value(key: impl Into<String>, value: f64, precision: u32) -> Self {
        Self::new(key, format_value(value, precision))
    }

    /// Creates a key-value pair formatted as percentage.
    pub fn from_percent(key: impl Into<String>, value: f64) -> Self {
        Self::new(key, format_percent(value, 2))
    }
}

/// A horizontal bar chart: one labelled bar per value.
pub struct BarChart<'a> {
    /// Chart title.
    pub title: &'a str,
    /// Caption for the label column.
    pub x_label: &'a str,
    /// Caption for the bar values.
    pub y_label: &'a str,
    /// Characters in the longest bar.
    pub width: usize,
    /// Decimal places for the printed values.
    pub precision: u32,
}

impl BarChart<'_> {
    /// Renders `(label, value)` pairs. Bars scale to the largest absolute value.
    pub fn render(&self, bars: &[(String, f64)]) -> String {
        let max = bars.iter().map(|(_, v)| v.abs()).fold(0.0_f64, f64::max);
        let label_width = bars
            .iter()
            .map(|(l, _)| l.len())
            .max()
            .unwrap_or(0)
            .max(self.x_label.len());
        let values: Vec<String> = bars
            .iter()
            .map(|(_, v)| format_value(*v, self.precision))
            .collect();
        let value_width = values.iter().map(String::len).max().unwrap_or(0);

        let mut out = String::new();
        out.push_str(&format!("{}\n", self.title.bold().underline()));
        out.push_str(&format!(
            "{:<label_width$}  {}\n",
            self.x_label.dimmed(),
            self.y_label.dimmed()
        ));
        for ((label, v), shown) in bars.iter().zip(&values) {
            let len = if max > 0.0 {
                ((v.abs() / max) * self.width as f64).round() as usize
            } else {
                0
            };
            out.push_str(&format!(
                "{label:>label_width$}  {shown:>value_width$} {}\n",
                "█".repeat(len).cyan()
            ));
        }
        out
    }
}

/// Prints a header for a section.
pub fn print_header(title: &str) {
    println!("\n{}", title.bold().underline());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_value_rounds_half_away() {
        assert_eq!(format_value(55.305_618, 2), "55.31");
        assert_eq!(format_value(100.0, 2), "100.00");
        assert_eq!(format_value(0.125, 2), "0.13");
        assert_eq!(format_value(-0.125, 2), "-0.13");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(0.446_944, 0), "45%");
        assert_eq!(format_percent(0.05, 2), "5.00%");
    }

    #[test]
    fn test_bar_chart_scales_to_largest() {
        colored::control::set_override(false);
        let chart = BarChart {
            title: "Weights",
            x_label: "t",
            y_label: "PV",
            width: 10,
            precision: 1,
        };
        let text = chart.render(&[("1".to_string(), 2.0), ("2".to_string(), 1.0)]);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "Weights");
        assert!(lines[2].ends_with(&"█".repeat(10)));
        assert!(lines[3].ends_with(&format!("1.0 {}", "█".repeat(5))));
    }

    #[test]
    fn test_bar_chart_all_zero() {
        colored::control::set_override(false);
        let chart = BarChart {
            title: "Zero",
            x_label: "t",
            y_label: "PV",
            width: 10,
            precision: 0,
        };
        let text = chart.render(&[("1".to_string(), 0.0)]);
        assert!(!text.contains('█'));
    }
}
