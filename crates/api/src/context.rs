//! Application context (dependency injection)

use std::sync::Arc;

use praxis_core::{Clock, ClinicStore, SystemClock};

/// Shared application state handed to every command
///
/// Owns the entity store outright; the clock is the one injected port so
/// tests can pin "now".
pub struct AppContext {
    pub store: ClinicStore,
    pub clock: Arc<dyn Clock>,
}

impl AppContext {
    /// Create a context backed by the system clock
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    /// Create a context with an explicit clock
    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self { store: ClinicStore::new(), clock }
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}
