//! Presentation layer for the shell.
//!
//! ```text
//! Calculator → compute_viewmodel → UIViewModel → render → text frame
//! Plot       → rasterize                                → text canvas
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: View model types representing renderable state
//! - [`renderer`]: Display and history panel rendering
//! - [`canvas`]: Character-cell graph rasterization

pub mod canvas;
pub mod renderer;
pub mod viewmodel;

pub use canvas::rasterize;
pub use renderer::{render, render_viewmodel};
pub use viewmodel::{HistoryPanel, UIViewModel};
