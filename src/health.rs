//! Liveness report served by the health endpoint.

use std::time::{Duration, Instant};

use chrono::{DateTime, SecondsFormat, Utc};

/// Environment variable naming the deployment environment.
pub const ENVIRONMENT_VAR: &str = "RISC_SITE_ENV";

/// Body of the health endpoint.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct HealthReport {
    /// Always `healthy` while the process answers.
    pub status: String,
    /// RFC 3339, UTC, millisecond precision.
    pub timestamp: String,
    /// Process uptime in seconds.
    pub uptime: f64,
    /// `HOSTNAME`, else `/etc/hostname`, else `unknown`.
    pub hostname: String,
    /// Crate version.
    pub version: String,
    /// Value of [`ENVIRONMENT_VAR`], defaulting to `development`.
    pub environment: String,
}

impl HealthReport {
    /// Build a report for a process that started at `started`.
    pub fn collect(started: Instant) -> Self {
        Self::at(Utc::now(), started.elapsed(), hostname(), environment())
    }

    /// Deterministic constructor used by [`HealthReport::collect`] and tests.
    pub fn at(now: DateTime<Utc>, uptime: Duration, hostname: String, environment: String) -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: now.to_rfc3339_opts(SecondsFormat::Millis, true),
            uptime: uptime.as_secs_f64(),
            hostname,
            version: env!("CARGO_PKG_VERSION").to_string(),
            environment,
        }
    }

    /// Pretty-printed JSON body.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

fn hostname() -> String {
    std::env::var("HOSTNAME")
        .ok()
        .or_else(|| std::fs::read_to_string("/etc/hostname").ok())
        .map(|h| h.trim().to_string())
        .filter(|h| !h.is_empty())
        .unwrap_or_else(|| "unknown".to_string())
}

fn environment() -> String {
    std::env::var(ENVIRONMENT_VAR)
        .ok()
        .filter(|e| !e.trim().is_empty())
        .unwrap_or_else(|| "development".to_string())
}
