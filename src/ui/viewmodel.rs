//! View model types representing renderable calculator state.
//!
//! View models are computed from a [`Calculator`](crate::app::Calculator) via
//! `compute_viewmodel()` and consumed by the renderer. They contain no logic,
//! only display-ready strings.
//!
//! # Example
//!
//! ```rust
//! use fraccalc::ui::viewmodel::{HistoryPanel, UIViewModel};
//!
//! let vm = UIViewModel {
//!     expression: "3 +".to_string(),
//!     display: "5".to_string(),
//!     fraction_mode: false,
//!     history: Some(HistoryPanel {
//!         items: vec![],
//!         empty_state: Some("No history yet.".to_string()),
//!     }),
//! };
//! assert!(vm.history.is_some());
//! ```

/// Message shown in an open history panel with no entries.
pub const EMPTY_HISTORY: &str = "No history yet.";

/// Complete view model for one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UIViewModel {
    /// Expression line above the main display (pending operation or the
    /// completed expression).
    pub expression: String,

    /// Main display text.
    pub display: String,

    /// Whether fractions currently render as `a/b`.
    pub fraction_mode: bool,

    /// History panel contents, `None` while the panel is hidden.
    pub history: Option<HistoryPanel>,
}

/// Contents of the history panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryPanel {
    /// `"{expression} = {result}"` lines, most recent first.
    pub items: Vec<String>,

    /// Placeholder shown when `items` is empty.
    pub empty_state: Option<String>,
}
