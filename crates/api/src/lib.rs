//! # Praxis API
//!
//! UI boundary layer - commands and application context.
//!
//! This crate contains:
//! - Form-facing commands (frontend → scheduling core bridge)
//! - Application context (dependency injection)
//! - Logging setup utilities
//!
//! ## Architecture
//! - Depends on `praxis-domain` and `praxis-core`
//! - Commands take raw form strings and return typed results
//! - The UI renders `Display` of a returned error as its notification;
//!   no command dispatches notifications itself

pub mod commands;
pub mod context;
pub mod utils;

// Re-export for convenience
pub use commands::*;
pub use context::AppContext;
