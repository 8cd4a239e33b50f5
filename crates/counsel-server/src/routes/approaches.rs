use axum::Json;
use serde::Serialize;

use counsel_core::models::approach::Approach;
use counsel_core::references::reference_for;

#[derive(Serialize)]
pub struct ApproachInfo {
    pub id: &'static str,
    pub label: &'static str,
    pub reference: String,
}

/// The four approaches, in dropdown order, with their citation lines.
pub async fn list_approaches() -> Json<Vec<ApproachInfo>> {
    let approaches = Approach::ALL
        .iter()
        .map(|a| ApproachInfo {
            id: a.id(),
            label: a.label(),
            reference: reference_for(*a).markdown(),
        })
        .collect();

    Json(approaches)
}
