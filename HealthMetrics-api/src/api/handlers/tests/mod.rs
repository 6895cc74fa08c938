mod bmi_test;

use axum::body::to_bytes;
use axum::response::Response;

/// Read a handler response body as JSON
pub(super) async fn body_json(response: Response) -> serde_json::Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
