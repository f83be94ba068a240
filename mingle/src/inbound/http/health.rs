//! `/health/live` and `/health/ready` probes.
//!
//! Both answer with a small JSON report and `Cache-Control: no-store`.

use std::sync::atomic::{AtomicU8, Ordering};

use actix_web::{HttpResponse, get, http::header, web};
use serde::Serialize;
use tracing::debug;
use utoipa::ToSchema;

const STARTING: u8 = 0;
const SERVING: u8 = 1;
const DRAINING: u8 = 2;

/// Server lifecycle seen by the probes: starting, serving, then draining.
#[derive(Debug)]
pub struct HealthState {
    phase: AtomicU8,
}

impl Default for HealthState {
    fn default() -> Self {
        Self {
            phase: AtomicU8::new(STARTING),
        }
    }
}

impl HealthState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Called once the listener is bound.
    pub fn mark_ready(&self) {
        if let Err(phase) =
            self.phase
                .compare_exchange(STARTING, SERVING, Ordering::AcqRel, Ordering::Acquire)
        {
            debug!(phase, "readiness unchanged");
        }
    }

    /// Called when shutdown starts; both probes fail from here on.
    pub fn begin_draining(&self) {
        self.phase.store(DRAINING, Ordering::Release);
    }

    fn phase(&self) -> u8 {
        self.phase.load(Ordering::Acquire)
    }
}

/// Body returned by both probes.
#[derive(Debug, Serialize, ToSchema)]
pub struct ProbeReport {
    #[schema(example = "serving")]
    pub phase: &'static str,
}

fn report(healthy: bool, phase: u8) -> HttpResponse {
    let phase = match phase {
        STARTING => "starting",
        SERVING => "serving",
        _ => "draining",
    };
    let mut builder = if healthy {
        HttpResponse::Ok()
    } else {
        HttpResponse::ServiceUnavailable()
    };
    builder
        .insert_header((header::CACHE_CONTROL, "no-store"))
        .json(ProbeReport { phase })
}

/// 200 while serving, 503 while starting or draining.
#[utoipa::path(
    get,
    path = "/health/ready",
    tags = ["health"],
    responses(
        (status = 200, description = "Accepting friend-request traffic", body = ProbeReport),
        (status = 503, description = "Starting up or draining", body = ProbeReport)
    )
)]
#[get("/health/ready")]
pub async fn ready(state: web::Data<HealthState>) -> HttpResponse {
    let phase = state.phase();
    report(phase == SERVING, phase)
}

/// 200 until draining starts.
#[utoipa::path(
    get,
    path = "/health/live",
    tags = ["health"],
    responses(
        (status = 200, description = "Process is up", body = ProbeReport),
        (status = 503, description = "Draining", body = ProbeReport)
    )
)]
#[get("/health/live")]
pub async fn live(state: web::Data<HealthState>) -> HttpResponse {
    let phase = state.phase();
    report(phase != DRAINING, phase)
}
