use axum::{extract::Path, response::IntoResponse, Json};

/// Display label, color class and icon for any status tag; unknown tags get
/// the neutral fallback rather than an error.
pub async fn describe_status(Path(tag): Path<String>) -> impl IntoResponse {
    let display = horta_orders::describe_status(&tag);
    Json(serde_json::json!({
        "status": tag,
        "label": display.label,
        "color_class": display.color_class,
        "icon": display.icon,
    }))
}
