//! # Core Application Logic
//!
//! The calculator engine and the app state around it.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Calculator (engine)  │
//!                    │  • State (app data)     │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No UI. Pure.           │
//!                    └───────────┬─────────────┘
//!                                │
//!                    ┌───────────┴───────────┐
//!                    ▼                       ▼
//!             ┌────────────┐          ┌────────────┐
//!             │    TUI     │          │  Headless  │
//!             │  Adapter   │          │  (--keys)  │
//!             │ (ratatui)  │          │            │
//!             └────────────┘          └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`key`]: `Key` and `Operator`, plus the keypad layout
//! - [`accumulator`]: the operand being typed
//! - [`dispatch`]: pending operations and `CalcError`
//! - [`display`]: what the display line shows
//! - [`calculator`]: the state machine tying them together
//! - [`state`]: the `App` struct
//! - [`action`]: the `Action` enum and `update()`
//! - [`config`]: settings file and overrides

pub mod accumulator;
pub mod action;
pub mod calculator;
pub mod config;
pub mod dispatch;
pub mod display;
pub mod key;
pub mod state;

pub use calculator::{Calculator, Mode};
pub use dispatch::CalcError;
pub use key::{Key, KeyError, Operator};
