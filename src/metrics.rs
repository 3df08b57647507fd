//! Prometheus metrics registry and instruments.
//!
//! This module is framework-agnostic and can be used from any layer.

use lazy_static::lazy_static;
use prometheus::{IntCounterVec, Opts, Registry};
use std::sync::Once;

lazy_static! {
    /// Global Prometheus registry
    pub static ref REGISTRY: Registry = Registry::new();

    // Fetch Metrics
    pub static ref PROFILE_FETCHES_TOTAL: IntCounterVec = IntCounterVec::new(
        Opts::new("gramsnap_profile_fetches_total", "Total number of profile lookups"),
        &["outcome"]
    ).expect("metric can be created");

    // Storage Metrics
    pub static ref ARTIFACT_WRITES_TOTAL: IntCounterVec = IntCounterVec::new(
        Opts::new("gramsnap_artifact_writes_total", "Total number of artifacts written"),
        &["kind"]
    ).expect("metric can be created");
    pub static ref MEDIA_DOWNLOADS_TOTAL: IntCounterVec = IntCounterVec::new(
        Opts::new("gramsnap_media_downloads_total", "Total number of profile picture downloads"),
        &["status"]
    ).expect("metric can be created");

    // Error Metrics
    pub static ref ERRORS_TOTAL: IntCounterVec = IntCounterVec::new(
        Opts::new("gramsnap_errors_total", "Total number of errors"),
        &["error_type", "endpoint"]
    ).expect("metric can be created");
}

static INIT: Once = Once::new();

/// Initialize metrics registry.
///
/// Idempotent: repeated calls register the instruments once.
pub fn init_metrics() {
    INIT.call_once(|| {
        REGISTRY
            .register(Box::new(PROFILE_FETCHES_TOTAL.clone()))
            .expect("PROFILE_FETCHES_TOTAL can be registered");
        REGISTRY
            .register(Box::new(ARTIFACT_WRITES_TOTAL.clone()))
            .expect("ARTIFACT_WRITES_TOTAL can be registered");
        REGISTRY
            .register(Box::new(MEDIA_DOWNLOADS_TOTAL.clone()))
            .expect("MEDIA_DOWNLOADS_TOTAL can be registered");
        REGISTRY
            .register(Box::new(ERRORS_TOTAL.clone()))
            .expect("ERRORS_TOTAL can be registered");

        tracing::info!("Metrics registry initialized");
    });
}
