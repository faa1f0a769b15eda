// DecisionBrief CLI entry point.
// Reads one business message, runs the triage brain, prints the brief.

use std::fs;
use std::io::Read;
use std::path::PathBuf;

use clap::Parser;
use dotenv::dotenv;
use tracing::info;

use decisionbrief_core::brain::DecisionBrief;
use decisionbrief_core::{
    samples, telemetry, AppError, IncomingMessage, MessageAnalyzer, TriageRecord,
};

#[derive(Parser, Debug)]
#[command(name = "decisionbrief")]
#[command(about = "Message triage for business inboxes: risk, intent, and next steps")]
#[command(version)]
struct Cli {
    /// Message text to analyze; reads stdin when omitted
    message: Option<String>,

    /// Read the message from a file instead
    #[arg(short, long, conflicts_with = "message")]
    file: Option<PathBuf>,

    /// Analyze one of the built-in sample messages (1-3)
    #[arg(short, long, value_parser = validate_sample, conflicts_with_all = ["message", "file"])]
    sample: Option<usize>,

    /// Emit the triage record as pretty JSON
    #[arg(long)]
    json: bool,
}

fn validate_sample(s: &str) -> Result<usize, String> {
    let index: usize = s.parse().map_err(|_| "Sample index must be a number")?;

    if (1..=samples::SAMPLE_COUNT).contains(&index) {
        Ok(index)
    } else {
        Err(format!(
            "Sample index must be between 1 and {}",
            samples::SAMPLE_COUNT
        ))
    }
}

fn read_message(cli: &Cli) -> Result<String, AppError> {
    if let Some(index) = cli.sample {
        // validate_sample already bounded the index
        return samples::sample(index)
            .map(str::to_string)
            .ok_or_else(|| AppError::Validation("sample index out of range".to_string()));
    }

    if let Some(message) = &cli.message {
        return Ok(message.clone());
    }

    if let Some(path) = &cli.file {
        return Ok(fs::read_to_string(path)?);
    }

    let mut buffer = String::new();
    std::io::stdin().read_to_string(&mut buffer)?;
    Ok(buffer)
}

fn render_text(brief: &DecisionBrief) -> String {
    let mut out = String::from("Decision Brief\n==============\n");
    for (label, value) in brief.display_rows() {
        out.push_str(label);
        out.push_str(": ");
        out.push_str(&value);
        out.push('\n');
    }
    out
}

fn main() -> anyhow::Result<()> {
    dotenv().ok();
    telemetry::init("decisionbrief", "info");

    let cli = Cli::parse();

    let raw = read_message(&cli)?;
    let message = IncomingMessage::parse(raw)?;

    let analyzer = MessageAnalyzer::new();
    let brief = analyzer.analyze(message.body());
    info!(summary = %brief.summary(), "analysis complete");

    if cli.json {
        let record = TriageRecord::new(message.into_body(), brief);
        println!("{}", serde_json::to_string_pretty(&record)?);
    } else {
        print!("{}", render_text(&brief));
    }

    Ok(())
}
