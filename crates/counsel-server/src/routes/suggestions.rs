use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use counsel_core::crisis::{self, EmergencyResource};
use counsel_core::models::approach::Approach;
use counsel_core::models::session::SessionRecord;
use counsel_core::prompts::build_prompt;
use counsel_core::references::reference_for;
use counsel_engine::generator::DEFAULT_TEMPERATURE;
use counsel_engine::{GenerationParams, Generator};

use crate::audit::AuditEvent;
use crate::error::ApiError;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct SuggestionRequest {
    pub case_description: String,
    pub approach: Approach,
    #[serde(default)]
    pub temperature: Option<f64>,
}

/// Outcome of a suggestion request. A crisis match suppresses generation
/// entirely and surfaces the emergency protocol instead.
#[derive(Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum SuggestionResponse {
    Generated {
        session_id: Uuid,
        approach: &'static str,
        recommendations: String,
        reference: String,
    },
    Crisis {
        session_id: Uuid,
        matched_terms: Vec<&'static str>,
        protocol_steps: Vec<&'static str>,
        resources: Vec<EmergencyResource>,
        clinician_guidance: &'static str,
    },
}

/// The single request/response cycle: validate, screen, prompt, generate.
pub async fn create_suggestions(
    State(state): State<AppState>,
    Json(req): Json<SuggestionRequest>,
) -> Result<Json<SuggestionResponse>, ApiError> {
    if req.case_description.trim().is_empty() {
        return Err(ApiError::BadRequest(
            "Please describe the clinical situation".to_string(),
        ));
    }

    let matched_terms = crisis::screen(&req.case_description);
    if !matched_terms.is_empty() {
        let record = SessionRecord::crisis(&req.case_description);
        let session_id = record.id;

        AuditEvent::new("crisis_halt", "session", session_id.to_string())
            .with_details(serde_json::json!({ "matched_terms": matched_terms }))
            .emit();

        state.sessions.lock().await.append(record);

        return Ok(Json(SuggestionResponse::Crisis {
            session_id,
            matched_terms,
            protocol_steps: crisis::PROTOCOL_STEPS.to_vec(),
            resources: crisis::EMERGENCY_RESOURCES.to_vec(),
            clinician_guidance: crisis::CLINICIAN_GUIDANCE,
        }));
    }

    let prompt = build_prompt(req.approach, &req.case_description);
    let params = GenerationParams::new(req.temperature.unwrap_or(DEFAULT_TEMPERATURE));

    let recommendations = state.engine.generate(&prompt, &params).await?;

    let record =
        SessionRecord::generated(req.approach, &req.case_description, recommendations.clone());
    let session_id = record.id;

    AuditEvent::new("generate_suggestions", "session", session_id.to_string())
        .with_details(serde_json::json!({ "approach": req.approach.label() }))
        .emit();

    state.sessions.lock().await.append(record);

    Ok(Json(SuggestionResponse::Generated {
        session_id,
        approach: req.approach.label(),
        recommendations,
        reference: reference_for(req.approach).markdown(),
    }))
}
