use serde_json::json;
use serde_json::Value;

/// Wraps a payload in the remote service's response envelope.
pub fn envelope_body(data: Value) -> String {
    return json!({
        "data": data,
        "error_code": null,
        "message": "OK",
        "message_code": "ok",
        "current_time": "2024-03-01T12:00:00Z",
    })
    .to_string();
}

/// An envelope with failure semantics and no payload.
pub fn envelope_error_body(error_code: &str, message: &str) -> String {
    return json!({
        "data": null,
        "error_code": error_code,
        "message": message,
        "message_code": error_code.to_lowercase(),
        "current_time": "2024-03-01T12:00:00Z",
    })
    .to_string();
}

/// A paginated list payload wrapped in the response envelope.
pub fn page_body(
    content: Value,
    current_page: u32,
    page_size: u32,
    total_rows: u64,
    total_pages: u32,
) -> String {
    return envelope_body(json!({
        "content": content,
        "current_page": current_page,
        "page_size": page_size,
        "total_rows": total_rows,
        "total_pages": total_pages,
    }));
}
