use poem_openapi::Object;

/// Liveness payload for the item catalog service
#[derive(Object, Debug)]
pub struct HealthResponse {
    /// Reported status, "ok" while the service is answering requests
    pub status: String,

    /// Name of the responding service
    pub service: String,

    /// Time the probe was answered (ISO 8601)
    pub timestamp: String,
}

/// Error body shared by every item catalog error response
///
/// Covers the whole taxonomy: not_found (404), unauthorized and the
/// credential/token failures (401), duplicate_username (400),
/// internal_error (500). Item payload validation failures are produced
/// by the request-parsing layer and do not use this shape.
#[derive(Object, Debug)]
pub struct ErrorResponse {
    /// Machine-readable error code, e.g. "not_found"
    pub error: String,

    /// Human-readable description of the failure
    pub message: String,

    /// HTTP status code the error was served with
    pub status_code: u16,
}
