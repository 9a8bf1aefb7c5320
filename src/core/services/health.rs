// src/core/services/health.rs
use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub struct HealthService {
    start_time: DateTime<Utc>,
    processed_requests: AtomicU64,
    failed_requests: AtomicU64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthMetrics {
    pub uptime_secs: i64,
    pub processed_requests: u64,
    pub failed_requests: u64,
}

impl HealthService {
    pub fn new() -> Self {
        Self {
            start_time: Utc::now(),
            processed_requests: AtomicU64::new(0),
            failed_requests: AtomicU64::new(0),
        }
    }

    pub fn record_comparison(&self, succeeded: bool) {
        self.processed_requests.fetch_add(1, Ordering::Relaxed);
        if !succeeded {
            self.failed_requests.fetch_add(1, Ordering::Relaxed);
        }
    }

    pub fn get_metrics(&self) -> HealthMetrics {
        HealthMetrics {
            uptime_secs: (Utc::now() - self.start_time).num_seconds(),
            processed_requests: self.processed_requests.load(Ordering::Relaxed),
            failed_requests: self.failed_requests.load(Ordering::Relaxed),
        }
    }
}

impl Default for HealthService {
    fn default() -> Self {
        Self::new()
    }
}
