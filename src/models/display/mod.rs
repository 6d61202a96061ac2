//! Display model implementations for table and JSON output
//!
//! Display models transform backend response types into CLI-friendly rows
//! with column names. Each result type implements
//! [`Formattable`](crate::output::Formattable) here, so commands print it in
//! any output mode with [`output::print`](crate::output::print).

mod analysis;
mod captured;
mod common;
mod discovery;
mod docs;
