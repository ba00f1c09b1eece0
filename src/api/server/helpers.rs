pub const SESSION_HEADER: &str = "x-session-id";
pub const DEFAULT_SESSION_ID: &str = "default";

fn session_id(headers: &HeaderMap) -> String {
    headers
        .get(SESSION_HEADER)
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.is_empty())
        .unwrap_or(DEFAULT_SESSION_ID)
        .to_string()
}

fn json_reply(status: u16, body: serde_json::Value) -> Response {
    Response::builder()
        .status(status)
        .header("content-type", "application/json; charset=utf-8")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn error_reply(status: u16, message: &str) -> Response {
    json_reply(status, serde_json::json!({ "error": message }))
}

// Store failures mean a poisoned lock; nothing actionable for the client.
fn internal_error(context: &str, detail: &str) -> Response {
    error!("{}: {}", context, detail);
    error_reply(500, "An unexpected error occurred")
}

fn file_reply(content_type: &str, filename: &str, body: String) -> Response {
    Response::builder()
        .status(200)
        .header("content-type", content_type)
        .header(
            "content-disposition",
            format!("attachment; filename=\"{}\"", filename),
        )
        .body(Body::from(body))
        .unwrap()
}
