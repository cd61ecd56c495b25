use axum::Json;

use crate::models::response::ApiResponse;

/// Liveness probe. Succeeds regardless of database state.
pub async fn healthz() -> Json<ApiResponse> {
    Json(ApiResponse::ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_healthz_always_ok() {
        let Json(body) = healthz().await;
        assert!(body.ok);
        assert!(body.error.is_none());
    }
}
