//! Application layer coordinating session state, events, and actions.
//!
//! This layer sits between the shell (main.rs) and the domain/math/storage
//! layers. Data flows one way:
//!
//! ```text
//! Button / panel input → Event → handle_event → Calculator transitions → Actions → Shell
//!                                                        ↓
//!                                              compute_viewmodel → Renderer
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`handler`]: Event dispatch
//! - [`modes`]: Input state enum and pending operation
//! - [`state`]: The calculator session and view model computation
//!
//! # Example
//!
//! ```rust
//! use fraccalc::app::{handle_event, Calculator, Event};
//! use fraccalc::domain::Operator;
//!
//! let mut calc = Calculator::default();
//! handle_event(&mut calc, &Event::Digit('7'));
//! handle_event(&mut calc, &Event::Operator(Operator::Power));
//! handle_event(&mut calc, &Event::Digit('2'));
//! let (render, actions) = handle_event(&mut calc, &Event::Equals);
//! assert!(render && actions.is_empty());
//! assert_eq!(calc.compute_viewmodel().display, "49");
//! ```

pub mod actions;
pub mod handler;
pub mod modes;
pub mod state;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use modes::{Entry, PendingOperation};
pub use state::{Calculator, Statistic};
