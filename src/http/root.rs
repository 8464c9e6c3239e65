use axum::Json;
use serde::Serialize;

#[derive(Serialize)]
pub struct Welcome {
    pub message: &'static str,
}

#[derive(Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
}

pub async fn welcome() -> Json<Welcome> {
    Json(Welcome {
        message: "Welcome to the Trendify API",
    })
}

pub async fn health() -> Json<HealthStatus> {
    Json(HealthStatus { status: "healthy" })
}
