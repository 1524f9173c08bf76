//! fraccalc: a fraction-aware scientific calculator core.
//!
//! The crate models the whole session behind a calculator widget:
//! - Digit-by-digit operand entry, including typed fractions (`3`, `/`, `4`)
//! - Strictly left-to-right chained binary operators with exact fraction
//!   arithmetic for `+ - * /`
//! - Decimal/fraction display toggle backed by continued-fraction conversion
//! - Degree-based trigonometry, logarithms and square roots
//! - A sample set with mean, variance and standard deviation
//! - Two matrix slots with addition, subtraction and multiplication
//! - A solver for `a·x + b = c`
//! - Graph sampling of a restricted `f(x)` expression language
//! - A capped most-recent-first history log
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Shell (main.rs)                                    │  ← stdin lines → Events
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← Session state machine
//! │  - Event handling                                   │
//! │  - Action emission                                  │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Storage Layer │   │ Math Layer    │
//! │ (ui/)         │   │ (storage/)    │   │ (math/)       │
//! │ - Rendering   │   │ - History     │   │ - Matrices    │
//! │ - Plot canvas │   │ - Samples     │   │ - Linear eq.  │
//! │               │   │ - Matrix slots│   │ - f(x) parser │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain Layer (domain/)                             │
//! │  - Fractions, values, formatting, engine, errors    │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │  ← Optional
//! │  - tracing subscriber, OTLP JSON file export        │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Session state machine with event/action model
//! - [`domain`]: Values, fractions, formatting, arithmetic and errors
//! - [`math`]: Matrix algebra, linear solver, graph expressions
//! - [`storage`]: History, sample set and matrix slots
//! - [`ui`]: View model, text renderer and plot rasterizer
//! - [`observability`]: Tracing initialization
//!
//! # Configuration
//!
//! The shell takes `--history-limit`-style options, or a TOML file via
//! `--config <path>`:
//!
//! ```toml
//! history_limit = 20
//! trace_level = "debug"
//! trace_file = "/tmp/fraccalc-otlp.json"
//! plot_width = 61
//! plot_height = 21
//! ```
//!
//! # Example
//!
//! ```rust
//! use fraccalc::{handle_event, initialize, Config, Event};
//!
//! let mut calc = initialize(&Config::default());
//! for label in ["1", "0", "+", "5", "-", "3", "="] {
//!     let event = Event::from_label(label).unwrap();
//!     let (_render, _actions) = handle_event(&mut calc, &event);
//! }
//! assert_eq!(calc.display(), "12");
//! assert_eq!(calc.expression_line(), "15 - 3 =");
//! ```

#![allow(clippy::multiple_crate_versions)]

pub mod app;
pub mod domain;
pub mod math;
pub mod storage;

pub mod ui;

pub mod observability;

pub use app::{handle_event, Action, Calculator, Event};
pub use domain::{CalcError, Fraction, Result, Status, Value};

use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use storage::DEFAULT_HISTORY_LIMIT;

/// Default graph canvas width in cells.
pub const DEFAULT_PLOT_WIDTH: usize = 61;

/// Default graph canvas height in cells.
pub const DEFAULT_PLOT_HEIGHT: usize = 21;

/// Calculator configuration.
///
/// Built from `key=value` pairs with [`Config::from_map`] or from a TOML file
/// with [`Config::from_file`]. Missing keys take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Maximum number of history entries kept. Default: 20
    pub history_limit: usize,

    /// `EnvFilter` directive for tracing, e.g. `debug`. Default: `"info"`
    pub trace_level: Option<String>,

    /// File receiving OTLP JSON spans. When unset, logs go to stderr.
    pub trace_file: Option<PathBuf>,

    /// Graph canvas width in cells. Default: 61
    pub plot_width: usize,

    /// Graph canvas height in cells. Default: 21
    pub plot_height: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            history_limit: DEFAULT_HISTORY_LIMIT,
            trace_level: None,
            trace_file: None,
            plot_width: DEFAULT_PLOT_WIDTH,
            plot_height: DEFAULT_PLOT_HEIGHT,
        }
    }
}

impl Config {
    /// Parses configuration from string pairs.
    ///
    /// # Parsing Rules
    ///
    /// - `history_limit`, `plot_width`, `plot_height`: unsigned integers;
    ///   unparsable or zero values fall back to the default
    /// - `trace_level`, `trace_file`: taken as-is
    /// - unknown keys are ignored
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use fraccalc::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("history_limit".to_string(), "5".to_string());
    /// map.insert("plot_width".to_string(), "wide".to_string());
    ///
    /// let config = Config::from_map(&map);
    /// assert_eq!(config.history_limit, 5);
    /// assert_eq!(config.plot_width, 61);
    /// ```
    #[must_use]
    pub fn from_map(map: &BTreeMap<String, String>) -> Self {
        let number = |key: &str, default: usize| {
            map.get(key)
                .and_then(|s| s.trim().parse::<usize>().ok())
                .filter(|n| *n > 0)
                .unwrap_or(default)
        };

        Self {
            history_limit: number("history_limit", DEFAULT_HISTORY_LIMIT),
            trace_level: map.get("trace_level").cloned(),
            trace_file: map.get("trace_file").map(PathBuf::from),
            plot_width: number("plot_width", DEFAULT_PLOT_WIDTH),
            plot_height: number("plot_height", DEFAULT_PLOT_HEIGHT),
        }
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// - [`CalcError::Io`] if the file cannot be read
    /// - [`CalcError::Config`] if the TOML is malformed, has unknown keys or
    ///   wrongly typed values
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        toml::from_str(&contents).map_err(|e| CalcError::Config(e.to_string()))
    }
}

/// Creates a fresh calculator session honoring `config`.
///
/// Tracing is not installed here; call
/// [`observability::init_tracing`] first if spans should be recorded.
///
/// # Example
///
/// ```rust
/// use fraccalc::{initialize, Config};
///
/// let config = Config {
///     history_limit: 3,
///     ..Config::default()
/// };
/// let calc = initialize(&config);
/// assert_eq!(calc.history.limit(), 3);
/// assert_eq!(calc.display(), "0");
/// ```
#[must_use]
pub fn initialize(config: &Config) -> Calculator {
    tracing::debug!(history_limit = config.history_limit, "initializing calculator");
    Calculator::new(config.history_limit)
}
