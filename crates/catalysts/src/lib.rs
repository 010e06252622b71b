//! Per-ticker catalyst table (earnings, trial readouts, deals).
//!
//! This crate provides:
//! - **EventTable**: ticker → ordered catalyst list, read-only once built
//! - **Validation**: every event sits inside the chart window, one per period
//! - **Loading**: JSON or TOML files, plus a built-in default table
//!
//! # Usage
//!
//! ```ignore
//! use catalysts::EventTable;
//!
//! let table = EventTable::load("events.toml")?;
//! let events = table.events_for("VKTX"); // empty slice when unknown
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod builtin;
pub mod table;

// =============================================================================
// Re-exports
// =============================================================================

pub use table::{EventTable, TableError};
