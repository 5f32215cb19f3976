//! Table module: fixed-width table layout and rendering.
//!
//! This module contains:
//! - [`TableLayouts`]: write-once column-width registry, keyed by the table's
//!   ordinal position in the stream
//! - [`grid`]: rendering of a header/rows/widths triple into a monospace grid
//! - [`wrap`]: display-width-aware word wrapping for table cells
//!
//! Markdown renderers lay tables out from the widest cell seen so far, which
//! means a table re-flows every time a longer value streams in. Freezing the
//! widths at first sight and rendering the grid ourselves keeps every
//! previously emitted table line valid forever.

mod layout;
pub mod grid;
pub mod wrap;

pub use layout::{TableLayouts, MIN_COL_WIDTH};
