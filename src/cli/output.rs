use crate::{CaseStyle, Conversion};
use colored::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct JsonConversion {
    input: String,
    output: String,
}

#[derive(Debug, Serialize, Deserialize)]
struct JsonOutput {
    style: String,
    total: usize,
    conversions: Vec<JsonConversion>,
}

pub fn print_conversions(conversions: &[Conversion], style: CaseStyle, format: &OutputFormat) {
    match format {
        OutputFormat::Text => print_text(conversions),
        OutputFormat::Json => print_json(conversions, style),
    }
}

// Results only on stdout, one per line, so output stays pipeable.
fn print_text(conversions: &[Conversion]) {
    for conversion in conversions {
        println!("{}", conversion.output);
    }
}

fn print_json(conversions: &[Conversion], style: CaseStyle) {
    let json_conversions: Vec<JsonConversion> = conversions
        .iter()
        .map(|c| JsonConversion {
            input: c.input.clone(),
            output: c.output.clone(),
        })
        .collect();

    let output = JsonOutput {
        style: style.to_string(),
        total: json_conversions.len(),
        conversions: json_conversions,
    };

    println!("{}", serde_json::to_string_pretty(&output).unwrap());
}

/// Summary goes to stderr so stdout carries nothing but results.
pub fn print_summary(total: usize, style: CaseStyle, colored: bool) {
    let noun = if total == 1 { "string" } else { "strings" };
    if colored {
        eprintln!(
            "{} {} {} converted to {}",
            "✓".green().bold(),
            total.to_string().green().bold(),
            noun,
            style.to_string().cyan()
        );
    } else {
        eprintln!("✓ {} {} converted to {}", total, noun, style);
    }
}
