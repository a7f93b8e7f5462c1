//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the dashboard behind an `Arc`; nothing in it is mutated after
//! startup, so handlers share it without locking.

use std::sync::Arc;

use crate::dashboard::Dashboard;

/// Clone is required by Axum. The dashboard is Arc-wrapped.
#[derive(Clone)]
pub struct AppState {
    pub dashboard: Arc<Dashboard>,
}

impl AppState {
    #[must_use]
    pub fn new(dashboard: Dashboard) -> Self {
        Self { dashboard: Arc::new(dashboard) }
    }
}
