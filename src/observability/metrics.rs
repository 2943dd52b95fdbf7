use prometheus::{IntCounter, IntCounterVec, Opts, Registry};
use std::sync::Arc;
use tokio::sync::OnceCell;
use tracing::info;

// Declare the static OnceCell to hold the Metrics.
static METRICS_INSTANCE: OnceCell<Arc<Metrics>> = OnceCell::const_new();

/// Asynchronously initializes and gets a reference to the static `Metrics`.
pub async fn get_metrics() -> &'static Arc<Metrics> {
    METRICS_INSTANCE
        .get_or_init(|| async {
            info!("Initializing Metrics ...");
            Metrics::new()
        })
        .await
}

/// Synchronous access for callers outside an async context.
pub fn metrics() -> &'static Arc<Metrics> {
    if let Some(metrics) = METRICS_INSTANCE.get() {
        return metrics;
    }
    // losing the race only drops a spare registry
    let _ = METRICS_INSTANCE.set(Metrics::new());
    METRICS_INSTANCE.get().expect("metrics cell was just set")
}

#[derive(Clone)]
pub struct Metrics {
    pub registry: Registry,

    // OAuth2 client metrics
    pub authentications: IntCounterVec,
    pub refreshes: IntCounterVec,
    pub api_requests: IntCounterVec,

    // Inter-service metrics
    pub isc_tokens_issued: IntCounter,
    pub isc_validations: IntCounterVec,
}

impl Metrics {
    fn new() -> Arc<Self> {
        let registry = Registry::new_custom(Some("serviceutils".into()), None).unwrap();

        let metrics: Arc<Metrics> = Arc::new(Self {
            // OAuth2 client
            authentications: IntCounterVec::new(Opts::new("oauth_authentications_total", "Password-grant authentications by outcome"),&["outcome"],).unwrap(),
            refreshes: IntCounterVec::new(Opts::new("oauth_refreshes_total", "Refresh-token exchanges by outcome"),&["outcome"],).unwrap(),
            api_requests: IntCounterVec::new(Opts::new("api_requests_total", "Authenticated API requests by outcome"),&["outcome"],).unwrap(),

            // Inter-service
            isc_tokens_issued: IntCounter::new("isc_tokens_issued_total", "Inter-service tokens signed").unwrap(),
            isc_validations: IntCounterVec::new(Opts::new("isc_validations_total", "Inbound inter-service token checks by outcome"),&["outcome"],).unwrap(),

            registry,
        });

        // Register all metrics in the registry
        let reg = &metrics.registry;
        reg.register(Box::new(metrics.authentications.clone())).unwrap();
        reg.register(Box::new(metrics.refreshes.clone())).unwrap();
        reg.register(Box::new(metrics.api_requests.clone())).unwrap();
        reg.register(Box::new(metrics.isc_tokens_issued.clone())).unwrap();
        reg.register(Box::new(metrics.isc_validations.clone())).unwrap();

        metrics
    }
}
