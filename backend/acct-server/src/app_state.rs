use crate::Metrics;

use acct_auth::JwtValidator;
use acct_core::AccountDeletionHandler;

use std::sync::Arc;

use metrics_exporter_prometheus::PrometheusHandle;
use sqlx::SqlitePool;

/// Process-wide handles shared by every request
#[derive(Clone)]
pub struct AppState {
    pub deletion: Arc<AccountDeletionHandler>,
    pub jwt_validator: Arc<JwtValidator>,
    pub pool: SqlitePool,
    pub metrics: Metrics,
    /// Set when a Prometheus recorder was installed at startup
    pub prometheus: Option<PrometheusHandle>,
}

impl AppState {
    pub fn new(
        deletion: AccountDeletionHandler,
        jwt_validator: JwtValidator,
        pool: SqlitePool,
    ) -> Self {
        Self {
            deletion: Arc::new(deletion),
            jwt_validator: Arc::new(jwt_validator),
            pool,
            metrics: Metrics::new(),
            prometheus: None,
        }
    }

    pub fn with_prometheus(mut self, handle: PrometheusHandle) -> Self {
        self.prometheus = Some(handle);
        self
    }
}
