//! # Core Application Logic
//!
//! The homepage's business logic: parsing, header sniffing, per-target
//! transforms, and the page state they feed. It knows nothing about HTTP,
//! HTML or the terminal.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • csv → Table          │
//!                    │  • transform → View     │
//!                    │  • Page (state)         │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!            ┌───────────────────┼───────────────────┐
//!            ▼                   ▼                   ▼
//!     ┌────────────┐      ┌────────────┐      ┌────────────┐
//!     │   sheets   │      │    html    │      │    TUI     │
//!     │  (fetch)   │      │  (render)  │      │ (ratatui)  │
//!     └────────────┘      └────────────┘      └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`csv`]: tolerant CSV parser
//! - [`header`]: header-row heuristics
//! - [`transform`]: metrics, marquee and university transforms
//! - [`view`]: what a container shows
//! - [`state`]: the `Page` struct and its containers
//! - [`action`]: the `Action` enum and `update()`
//! - [`admin`]: admin-mode flag with subscribers
//! - [`config`]: layered configuration

pub mod action;
pub mod admin;
pub mod config;
pub mod csv;
pub mod header;
pub mod state;
pub mod transform;
pub mod view;

pub use action::{Action, Effect, update};
pub use state::{Container, FetchRequest, Page, RequestToken};
pub use view::{MetricCard, Target, View};
