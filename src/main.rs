// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

use std::env;
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{anyhow, bail, Context, Result};
use tracing::{info, warn, Level};

use chordshift::config::transpose_file;
use chordshift::{
    ChartEvent, ChartWatcher, Direction, Settings, Spelling, TransposeValue, Transposer,
};

/// Stepping more than this many times cannot move the value any further
const MAX_STEPS: usize = 22;

fn print_usage() {
    println!("chordshift - Chord Chart Transposer");
    println!();
    println!("Usage: chordshift [OPTIONS] [FILE]");
    println!();
    println!("Reads a chord chart from FILE (or stdin when FILE is absent or -)");
    println!("and prints it with every chord shifted.");
    println!();
    println!("Options:");
    println!("  -t, --transpose <N>   Semitones to shift, -11 to 11 (default 1)");
    println!("      --up <K>          Step the value up K times (skipping 0)");
    println!("      --down <K>        Step the value down K times (skipping 0)");
    println!("      --flats           Write accidentals as flats");
    println!("      --sharps          Write accidentals as sharps");
    println!("  -c, --config <PATH>   Settings file (.toml, .yaml or .yml)");
    println!("  -o, --output <PATH>   Write the result to PATH instead of stdout");
    println!("      --watch           Re-transpose FILE every time it changes");
    println!("  -v, --verbose         Debug logging on stderr");
    println!("  -h, --help            Show this help message");
}

/// Parsed command line
#[derive(Debug, Default, PartialEq)]
struct Options {
    input: Option<PathBuf>,
    output: Option<PathBuf>,
    config: Option<PathBuf>,
    transpose: Option<i64>,
    steps: Vec<(Direction, usize)>,
    spelling: Option<Spelling>,
    watch: bool,
    verbose: bool,
    help: bool,
}

fn parse_args<I>(args: I) -> Result<Options>
where
    I: IntoIterator<Item = String>,
{
    let mut options = Options::default();
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        let mut value_for = |flag: &str| {
            args.next()
                .ok_or_else(|| anyhow!("{} requires a value", flag))
        };

        match arg.as_str() {
            "-t" | "--transpose" => {
                let raw = value_for(&arg)?;
                let semitones = raw
                    .parse()
                    .map_err(|_| anyhow!("Invalid transpose value: {}", raw))?;
                options.transpose = Some(semitones);
            }
            "--up" | "--down" => {
                let raw = value_for(&arg)?;
                let count: usize = raw
                    .parse()
                    .map_err(|_| anyhow!("Invalid step count: {}", raw))?;
                let direction = if arg == "--up" {
                    Direction::Increase
                } else {
                    Direction::Decrease
                };
                options.steps.push((direction, count));
            }
            "--flats" => options.spelling = Some(Spelling::Flats),
            "--sharps" => options.spelling = Some(Spelling::Sharps),
            "-c" | "--config" => options.config = Some(PathBuf::from(value_for(&arg)?)),
            "-o" | "--output" => options.output = Some(PathBuf::from(value_for(&arg)?)),
            "--watch" => options.watch = true,
            "-v" | "--verbose" => options.verbose = true,
            "-h" | "--help" => options.help = true,
            "-" => options.input = None,
            flag if flag.starts_with('-') && flag.len() > 1 => {
                bail!("Unknown option: {}", flag)
            }
            path => {
                if options.input.is_some() {
                    bail!("Only one chart file can be given (got {})", path);
                }
                options.input = Some(PathBuf::from(path));
            }
        }
    }

    Ok(options)
}

/// Combine command line overrides with settings
fn build_transposer(options: &Options, settings: &Settings) -> Result<Transposer> {
    let mut value = match options.transpose {
        Some(semitones) => TransposeValue::new(semitones)?,
        None => settings.transpose_value()?,
    };
    for &(direction, count) in &options.steps {
        for _ in 0..count.min(MAX_STEPS) {
            value = value.step(direction);
        }
    }
    let spelling = options.spelling.unwrap_or_else(|| settings.spelling());
    Ok(Transposer::new(value, spelling))
}

/// WARN keeps stdout and stderr quiet for piping; DEBUG with --verbose
fn log_level(verbose: bool) -> Level {
    if verbose {
        Level::DEBUG
    } else {
        Level::WARN
    }
}

fn init_logging(verbose: bool) {
    tracing_subscriber::fmt()
        .with_max_level(log_level(verbose))
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read chart file: {:?}", path)),
        None => {
            let mut chart = String::new();
            io::stdin()
                .read_to_string(&mut chart)
                .context("Failed to read chart from stdin")?;
            Ok(chart)
        }
    }
}

fn write_output(output: &str, path: Option<&Path>) -> Result<()> {
    match path {
        Some(path) => fs::write(path, output)
            .with_context(|| format!("Failed to write output file: {:?}", path)),
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(output.as_bytes())?;
            if !output.ends_with('\n') {
                stdout.write_all(b"\n")?;
            }
            stdout.flush()?;
            Ok(())
        }
    }
}

fn watch_chart(chart: &Path, transposer: Transposer, output: Option<&Path>) -> Result<()> {
    write_output(&transpose_file(chart, &transposer)?, output)?;

    let watcher = ChartWatcher::new(chart, transposer, None)?;
    info!(chart = ?watcher.chart_path(), "watching for changes (press Ctrl+C to stop)");

    while let Some(event) = watcher.recv() {
        match event {
            ChartEvent::Transposed { path, output: text } => {
                info!(chart = ?path, "chart changed");
                write_output(&text, output)?;
            }
            ChartEvent::Error(message) => warn!("{}", message),
            ChartEvent::FileCreated(path) => info!(chart = ?path, "chart created"),
            ChartEvent::FileDeleted(path) => warn!(chart = ?path, "chart deleted"),
        }
    }

    Ok(())
}

fn main() -> Result<()> {
    let options = parse_args(env::args().skip(1))?;

    if options.help {
        print_usage();
        return Ok(());
    }

    init_logging(options.verbose);

    let settings = match &options.config {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };
    let transposer = build_transposer(&options, &settings)?;
    info!(
        semitones = transposer.value().semitones(),
        spelling = %transposer.spelling(),
        "transposing"
    );

    if options.watch {
        let chart = options
            .input
            .as_deref()
            .ok_or_else(|| anyhow!("--watch requires a chart file"))?;
        return watch_chart(chart, transposer, options.output.as_deref());
    }

    let chart = read_input(options.input.as_deref())?;
    write_output(&transposer.transpose(&chart), options.output.as_deref())
}
