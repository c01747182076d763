use axum::{extract::State, http::StatusCode, response::Json, routing::get, Router};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::laundry::registry::MachineRegistry;

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub version: String,
    pub machines: MachinePoolHealth,
    pub uptime_seconds: u64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MachinePoolHealth {
    pub total: usize,
    pub in_use: usize,
}

#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<MachineRegistry>,
    pub start_time: DateTime<Utc>,
}

pub struct HealthService {
    pub router: Router,
}

impl HealthService {
    pub fn new(registry: Arc<MachineRegistry>) -> Self {
        let state = AppState {
            registry,
            start_time: Utc::now(),
        };

        let router = Router::new()
            .route("/health", get(health_check))
            .route("/health/ready", get(readiness_check))
            .route("/health/live", get(liveness_check))
            .layer(TraceLayer::new_for_http())
            .with_state(state);

        Self { router }
    }
}

async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let snapshot = state.registry.snapshot().await;
    let uptime = Utc::now()
        .signed_duration_since(state.start_time)
        .num_seconds() as u64;

    Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: Utc::now(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        machines: MachinePoolHealth {
            total: snapshot.len(),
            in_use: snapshot.iter().filter(|m| m.in_use).count(),
        },
        uptime_seconds: uptime,
    })
}

async fn readiness_check(State(state): State<AppState>) -> Result<Json<&'static str>, StatusCode> {
    // Ready once the machine pool is seeded
    if state.registry.is_empty() {
        Err(StatusCode::SERVICE_UNAVAILABLE)
    } else {
        Ok(Json("ready"))
    }
}

async fn liveness_check() -> Json<&'static str> {
    // Simple liveness check - if this endpoint responds, the service is alive
    Json("alive")
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum_test::TestServer;

    fn create_test_health_service() -> HealthService {
        HealthService::new(Arc::new(MachineRegistry::new()))
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        let health_service = create_test_health_service();
        let server = TestServer::new(health_service.router).expect("Failed to create test server");

        let response = server.get("/health").await;

        assert_eq!(response.status_code(), StatusCode::OK);

        let health_response: HealthResponse = response.json();
        assert_eq!(health_response.status, "healthy");
        assert_eq!(health_response.version, env!("CARGO_PKG_VERSION"));
        assert_eq!(health_response.machines.total, 4);
        assert_eq!(health_response.machines.in_use, 0);
    }

    #[tokio::test]
    async fn test_health_counts_machines_in_use() {
        let registry = Arc::new(MachineRegistry::new());
        {
            let machine = registry.get("washer1").expect("pool is seeded");
            let mut m = machine.lock().await;
            m.time_left = 1800;
            m.in_use = true;
        }

        let server = TestServer::new(HealthService::new(registry).router)
            .expect("Failed to create test server");
        let response = server.get("/health").await;

        let health_response: HealthResponse = response.json();
        assert_eq!(health_response.machines.in_use, 1);
    }

    #[tokio::test]
    async fn test_readiness_endpoint() {
        let health_service = create_test_health_service();
        let server = TestServer::new(health_service.router).expect("Failed to create test server");

        let response = server.get("/health/ready").await;

        assert_eq!(response.status_code(), StatusCode::OK);

        let ready_response: String = response.json();
        assert_eq!(ready_response, "ready");
    }

    #[tokio::test]
    async fn test_liveness_endpoint() {
        let health_service = create_test_health_service();
        let server = TestServer::new(health_service.router).expect("Failed to create test server");

        let response = server.get("/health/live").await;

        assert_eq!(response.status_code(), StatusCode::OK);

        let alive_response: String = response.json();
        assert_eq!(alive_response, "alive");
    }
}
