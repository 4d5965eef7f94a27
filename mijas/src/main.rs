use std::io::{self, BufRead};
use std::process;

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use mijas_lib::{
    forward_resolution, inverse_resolution, verify_report, Resolution, StemChange, Verification,
};
use serde::Serialize;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "mijas",
    about = "Latvian and Latgalian stem alternation (mija) rules"
)]
struct Cli {
    /// Stem to resolve. If omitted, reads `stem` or `stem<TAB>rule` lines from stdin.
    stem: Option<String>,

    /// Stem change id. Required for STEM; the default for stdin lines without one.
    #[arg(short, long)]
    rule: Option<u16>,

    /// Synthesis (lemma stem to surface stems) instead of analysis.
    #[arg(long)]
    inverse: bool,

    /// Already fixed paradigm stem used by synthesis to choose a class.
    #[arg(long, value_name = "S")]
    third_stem: Option<String>,

    /// Emit superlatives from synthesis rules that build comparatives.
    #[arg(long)]
    superlative: bool,

    /// Treat the stem as a proper name.
    #[arg(long)]
    proper_name: bool,

    /// Check every analysis variant by synthesis and drop rejected ones.
    #[arg(long)]
    verify: bool,

    /// Output in bracketed {stem:Attr=Value} format.
    #[arg(long)]
    bracketed: bool,

    /// Pretty-print JSON output.
    #[arg(long)]
    pretty: bool,

    /// Log debug diagnostics to stderr.
    #[arg(short, long)]
    verbose: bool,

    /// Print every stem change id with its description and exit.
    #[arg(long)]
    list_rules: bool,
}

/// One resolved input line.
#[derive(Serialize)]
struct Report {
    stem: String,
    rule: u16,
    #[serde(flatten)]
    resolution: Resolution,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    verification: Vec<Checked>,
}

#[derive(Serialize)]
struct Checked {
    candidate: String,
    #[serde(flatten)]
    outcome: Verification,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if cli.list_rules {
        for change in StemChange::all() {
            println!("{change}");
        }
        return;
    }

    match cli.stem {
        Some(ref stem) => {
            let Some(rule) = cli.rule else {
                Cli::command()
                    .error(ErrorKind::MissingRequiredArgument, "--rule is required")
                    .exit();
            };
            process_stem(stem, rule, &cli);
        }
        None => {
            let stdin = io::stdin();
            for line in stdin.lock().lines() {
                let line = match line {
                    Ok(line) => line,
                    Err(err) => {
                        tracing::error!("failed to read stdin: {err}");
                        process::exit(1);
                    }
                };
                if !line.trim().is_empty() {
                    process_line(&line, &cli);
                }
            }
        }
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default.into());
    let layer = tracing_subscriber::fmt::layer()
        .with_writer(io::stderr)
        .without_time();
    tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .init();
}

fn process_line(line: &str, cli: &Cli) {
    let (stem, rule) = match line.split_once('\t') {
        Some((stem, rule)) => match rule.trim().parse::<u16>() {
            Ok(rule) => (stem.trim(), rule),
            Err(_) => {
                tracing::warn!("skipping line with invalid rule: {line:?}");
                return;
            }
        },
        None => match cli.rule {
            Some(rule) => (line.trim(), rule),
            None => {
                tracing::warn!("skipping line without a rule: {line:?}");
                return;
            }
        },
    };
    process_stem(stem, rule, cli);
}

fn process_stem(stem: &str, rule: u16, cli: &Cli) {
    let third_stem = cli.third_stem.as_deref().unwrap_or(stem);
    let resolution = if cli.inverse {
        inverse_resolution(stem, rule, third_stem, cli.superlative, cli.proper_name)
    } else {
        forward_resolution(stem, rule, cli.proper_name)
    };
    let mut report = Report {
        stem: stem.to_string(),
        rule,
        resolution,
        verification: Vec::new(),
    };

    if cli.verify && !cli.inverse {
        let mut kept = Vec::new();
        for variant in report.resolution.variants.drain(..) {
            let outcome = verify_report(&variant, stem, rule, third_stem, cli.proper_name);
            let passed = outcome.passed();
            report.verification.push(Checked {
                candidate: variant.stem.clone(),
                outcome,
            });
            if passed {
                kept.push(variant);
            }
        }
        report.resolution.variants = kept;
    }

    if cli.bracketed {
        println!(
            "{}",
            mijas_lib::output::resolution_to_bracketed(&report.resolution)
        );
    } else {
        let json = if cli.pretty {
            serde_json::to_string_pretty(&report)
        } else {
            serde_json::to_string(&report)
        };
        println!("{}", json.expect("JSON serialization failed"));
    }
}
