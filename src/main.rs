//! Line-oriented shell around the calculator core.
//!
//! Reads one command per line from stdin, translates it into library events,
//! executes the resulting actions and prints the frame after each line.
//!
//! # Usage
//!
//! ```text
//! fraccalc [--history-limit N] [--plot-width N] [--plot-height N]
//!          [--trace-level DIRECTIVE] [--trace-file PATH]
//! fraccalc --config /path/to/fraccalc.toml [--history-limit N ...]
//! ```
//!
//! Options given on the command line override values from `--config`.
//!
//! # Commands
//!
//! - Any button caption: `7`, `.`, `+`, `=`, `C`, `sqrt`, `π`, `F<=>D`,
//!   `Add Data`, `Mean`, `Var`, `StdDev`, `Clear Data`
//! - A run of single-key captions: `12+3=`
//! - `storeA 1,2;3,4`, `storeB 5;6`: fill a matrix slot
//! - `A+B`, `A-B`, `A*B`: combine the matrix slots
//! - `solve a b c`: solve `a·x + b = c`
//! - `plot <expr>`: graph `f(x) = <expr>`
//! - `history`, `clear history`: toggle or empty the history panel
//! - `quit`, `exit`: leave the shell

#![allow(clippy::multiple_crate_versions)]

use clap::Parser;
use fraccalc::domain::MatrixSlot;
use fraccalc::math::MatrixOperation;
use fraccalc::{handle_event, Action, Calculator, Config, Event};
use std::io::{self, BufRead, Write};
use std::num::NonZeroUsize;
use std::path::PathBuf;
use std::process::ExitCode;

/// Minimum width of the rendered display panel.
const PANEL_WIDTH: usize = 32;

#[derive(Parser, Debug)]
#[command(
    name = "fraccalc",
    version,
    about = "Fraction-aware scientific calculator"
)]
struct Cli {
    /// TOML configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Maximum number of history entries kept
    #[arg(long)]
    history_limit: Option<NonZeroUsize>,

    /// Tracing filter directive, e.g. `debug`
    #[arg(long)]
    trace_level: Option<String>,

    /// Write OTLP JSON spans to this file instead of logging to stderr
    #[arg(long)]
    trace_file: Option<PathBuf>,

    /// Graph canvas width in cells
    #[arg(long)]
    plot_width: Option<NonZeroUsize>,

    /// Graph canvas height in cells
    #[arg(long)]
    plot_height: Option<NonZeroUsize>,
}

impl Cli {
    /// Loads `--config` (or the defaults) and applies the remaining options
    /// on top.
    fn into_config(self) -> fraccalc::Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::from_file(path)?,
            None => Config::default(),
        };
        if let Some(n) = self.history_limit {
            config.history_limit = n.get();
        }
        if let Some(n) = self.plot_width {
            config.plot_width = n.get();
        }
        if let Some(n) = self.plot_height {
            config.plot_height = n.get();
        }
        if self.trace_level.is_some() {
            config.trace_level = self.trace_level;
        }
        if self.trace_file.is_some() {
            config.trace_file = self.trace_file;
        }
        Ok(config)
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let source = cli.config.clone();
    let config = match cli.into_config() {
        Ok(config) => config,
        Err(e) => {
            let path = source.unwrap_or_default();
            eprintln!("fraccalc: {}: {e}", path.display());
            return ExitCode::from(2);
        }
    };

    fraccalc::observability::init_tracing(&config);
    let span = tracing::debug_span!("shell_session");
    let _guard = span.entered();
    tracing::debug!(?config, "configuration loaded");

    let mut calc = fraccalc::initialize(&config);
    match run(&mut calc, &config, io::stdin().lock(), &mut io::stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("fraccalc: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(calc: &mut Calculator, config: &Config, input: impl BufRead, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{}", fraccalc::ui::render(calc, PANEL_WIDTH))?;

    for line in input.lines() {
        let line = line?;
        let command = line.trim();
        if command.is_empty() {
            continue;
        }
        if matches!(command, "quit" | "exit") {
            break;
        }

        let Some(events) = parse_command(command, config) else {
            tracing::debug!(command, "unrecognized command");
            writeln!(out, "unrecognized: {command}")?;
            continue;
        };

        let mut render = false;
        for event in &events {
            let (rerender, actions) = handle_event(calc, event);
            render |= rerender;
            for action in actions {
                execute(&action, out)?;
            }
        }
        if render {
            writeln!(out, "{}", fraccalc::ui::render(calc, PANEL_WIDTH))?;
        }
    }
    out.flush()
}

fn execute(action: &Action, out: &mut impl Write) -> io::Result<()> {
    tracing::debug!(?action, "executing action");
    match action {
        Action::ResetInputs => Ok(()),
        Action::DrawPlot(plot) => {
            writeln!(out, "f(x) = {}", plot.expression)?;
            writeln!(out, "{}", fraccalc::ui::rasterize(plot))
        }
        Action::PlotFailed(message) => writeln!(out, "{message}"),
    }
}

/// Translates one input line into events.
///
/// Returns `None` when the line is neither a command nor a sequence of
/// button captions.
fn parse_command(command: &str, config: &Config) -> Option<Vec<Event>> {
    if let Some(event) = Event::from_label(command) {
        return Some(vec![event]);
    }

    let (head, rest) = command
        .split_once(char::is_whitespace)
        .map_or((command, ""), |(h, r)| (h, r.trim()));

    let event = match (head, rest) {
        ("storeA", text) => Event::StoreMatrix {
            slot: MatrixSlot::A,
            text: text.to_string(),
        },
        ("storeB", text) => Event::StoreMatrix {
            slot: MatrixSlot::B,
            text: text.to_string(),
        },
        ("solve", coefficients) => {
            let mut fields = coefficients.split_whitespace().map(String::from);
            Event::SolveLinear {
                a: fields.next().unwrap_or_default(),
                b: fields.next().unwrap_or_default(),
                c: fields.next().unwrap_or_default(),
            }
        }
        ("plot", expression) => Event::Plot {
            expression: expression.to_string(),
            width: config.plot_width,
            height: config.plot_height,
        },
        ("history", "") => Event::ToggleHistory,
        ("clear", "history") => Event::ClearHistory,
        _ => return matrix_command(command).or_else(|| keys(command)),
    };
    Some(vec![event])
}

fn matrix_command(command: &str) -> Option<Vec<Event>> {
    let op = command
        .strip_prefix('A')
        .and_then(|rest| rest.strip_suffix('B'))
        .and_then(|symbol| {
            let mut chars = symbol.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => MatrixOperation::from_symbol(c),
                _ => None,
            }
        })?;
    Some(vec![Event::Matrix(op)])
}

/// Splits a run such as `12+3=` into single-key events.
fn keys(command: &str) -> Option<Vec<Event>> {
    command
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| Event::from_label(c.encode_utf8(&mut [0; 4])))
        .collect()
}
