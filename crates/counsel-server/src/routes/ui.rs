use axum::response::Html;

/// The interactive form page. A single embedded asset; everything dynamic
/// goes through the JSON API.
pub async fn form_page() -> Html<&'static str> {
    Html(include_str!("../../assets/index.html"))
}
