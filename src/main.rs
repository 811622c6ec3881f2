use anyhow::{Context, Result};
use casefmt::cli::output::{self, OutputFormat};
use casefmt::convert::value::convert_value;
use casefmt::{CaseStyle, Config, Conversion};
use clap::{CommandFactory, Parser};
use clap_complete::{generate, Shell};
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "casefmt")]
#[command(version, about = "Convert strings between camelCase, kebab-case and dot.case", long_about = None)]
struct Cli {
    /// Strings to convert; reads stdin lines when none are given
    #[arg(value_name = "INPUTS")]
    inputs: Vec<String>,

    /// Target case style (camel, kebab, dot)
    #[arg(short, long)]
    style: Option<CaseStyle>,

    /// Output format (text, json)
    #[arg(short = 'o', long, default_value = "text")]
    format: OutputFormat,

    /// Convert each line of a file (repeatable)
    #[arg(short, long, value_name = "FILE")]
    file: Vec<PathBuf>,

    /// Treat stdin as a JSON array of values; non-string elements are rejected
    #[arg(long, conflicts_with = "inputs")]
    json_input: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Generate shell completion script
    #[arg(long, value_name = "SHELL")]
    completion: Option<Shell>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Handle shell completion generation
    if let Some(shell) = cli.completion {
        let mut cmd = Cli::command();
        generate(shell, &mut cmd, "casefmt", &mut io::stdout());
        return Ok(());
    }

    // Load configuration
    let config = Config::load(cli.style)?;
    let colored = !cli.no_color && !config.no_color;
    let style = config.style;

    let conversions = if cli.json_input {
        convert_json_stdin(style)?
    } else {
        collect_inputs(&cli)?
            .into_iter()
            .map(|input| {
                let output = style.apply(&input);
                Conversion { input, output }
            })
            .collect()
    };

    output::print_conversions(&conversions, style, &cli.format);

    if matches!(cli.format, OutputFormat::Text) {
        output::print_summary(conversions.len(), style, colored);
    }

    Ok(())
}

fn collect_inputs(cli: &Cli) -> Result<Vec<String>> {
    let mut inputs = cli.inputs.clone();

    for path in &cli.file {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;
        inputs.extend(non_blank_lines(&content));
    }

    // Fall back to stdin when nothing was passed on the command line
    if inputs.is_empty() {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read stdin")?;
        inputs.extend(non_blank_lines(&buffer));
    }

    Ok(inputs)
}

fn non_blank_lines(content: &str) -> Vec<String> {
    content
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(str::to_string)
        .collect()
}

fn convert_json_stdin(style: CaseStyle) -> Result<Vec<Conversion>> {
    let mut buffer = String::new();
    io::stdin()
        .read_to_string(&mut buffer)
        .context("Failed to read stdin")?;

    let values: Vec<serde_json::Value> =
        serde_json::from_str(&buffer).context("Stdin is not a JSON array")?;

    let mut conversions = Vec::with_capacity(values.len());
    for value in &values {
        let output = convert_value(style, value)?;
        let input = value.as_str().unwrap_or_default().to_string();
        conversions.push(Conversion { input, output });
    }

    Ok(conversions)
}
