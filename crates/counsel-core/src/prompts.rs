//! Prompt templates for each therapeutic approach.
//!
//! Each template interpolates the raw case description into fixed wording
//! that steers the model toward the techniques of that approach. The
//! templates are the whole of the prompt — no context window assembly, no
//! few-shot examples.

use crate::models::approach::Approach;

/// Build the model prompt for a case description under the given approach.
pub fn build_prompt(approach: Approach, case_text: &str) -> String {
    match approach {
        Approach::Cbt => format!(
            "As a CBT therapist, suggest techniques to address: '{case_text}'. \
             Focus on identifying cognitive distortions and suggest behavioral experiments. \
             Provide 2-3 concrete interventions."
        ),
        Approach::Psychodynamic => format!(
            "From a psychodynamic perspective, analyze: '{case_text}'. \
             Consider unconscious patterns and childhood influences. \
             Suggest exploratory questions to reveal underlying conflicts."
        ),
        Approach::Humanistic => format!(
            "Using humanistic approach, respond to: '{case_text}'. \
             Focus on unconditional positive regard and self-actualization. \
             Provide empathetic reflections and growth-oriented suggestions."
        ),
        Approach::SolutionFocused => format!(
            "Using solution-focused therapy, address: '{case_text}'. \
             Identify exceptions to the problem and small achievable steps. \
             Suggest 2-3 scaling questions or miracle questions."
        ),
    }
}
