//! Structured logging for the storecart widget.
//!
//! This crate provides:
//! - `SessionId` - Identifier for one page load (or one CLI run)
//! - `StructuredLogger` - Structured logging with session context
//! - `LogBuilder` - Fluent builder for entries with typed fields

mod logging;
mod session;

pub use logging::*;
pub use session::SessionId;
