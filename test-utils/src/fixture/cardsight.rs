//! CardSight API response bodies.

use serde_json::{json, Value};

/// Request id returned by every fixture response.
pub const REQUEST_ID: &str = "req_test_123";

/// Builds a detection object.
///
/// # Arguments
/// - `confidence` - Confidence tier as the API spells it ("High", "Medium", "Low")
/// - `name` - Player or subject name
/// - `number` - Card number
/// - `year` - Release year
/// - `set_name` - Set name
/// - `parallel` - Optional `(name, numbered_to)` parallel information
pub fn detection(
    confidence: &str,
    name: &str,
    number: &str,
    year: u32,
    set_name: &str,
    parallel: Option<(&str, Option<u32>)>,
) -> Value {
    let mut card = json!({
        "name": name,
        "number": number,
        "year": year,
        "setName": set_name,
        "releaseName": format!("{} {}", year, set_name),
        "manufacturer": "Topps",
    });

    if let Some((parallel_name, numbered_to)) = parallel {
        card["parallel"] = json!({
            "name": parallel_name,
            "numberedTo": numbered_to,
        });
    }

    json!({
        "confidence": confidence,
        "card": card,
    })
}

/// The 2023 Topps Chrome Mike Trout #27 base card.
pub fn trout_detection(confidence: &str) -> Value {
    detection(confidence, "Mike Trout", "27", 2023, "Topps Chrome", None)
}

/// Successful identify response wrapping the given detections.
pub fn identify_response(detections: Vec<Value>) -> Value {
    json!({
        "success": true,
        "requestId": REQUEST_ID,
        "detections": detections,
    })
}

/// Identify response with a 2xx status but no `success` flag.
pub fn identify_response_without_success() -> Value {
    json!({
        "requestId": REQUEST_ID,
        "detections": [],
    })
}

/// Error body as the API returns it for non-success statuses.
pub fn error_response(message: &str) -> Value {
    json!({
        "error": message,
        "requestId": REQUEST_ID,
    })
}

/// Health endpoint body.
pub fn health_response(status: &str) -> Value {
    json!({ "status": status })
}
