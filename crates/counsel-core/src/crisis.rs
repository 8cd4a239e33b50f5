//! Crisis language screening.
//!
//! A deliberately simple screen: case-insensitive substring containment
//! against a fixed term list. There is no tokenization or negation
//! handling, so a term occurring inside a longer word still matches —
//! the screen errs toward flagging. Any match suppresses model inference
//! and surfaces the emergency protocol instead.

use serde::Serialize;

/// Fixed list of crisis terms checked against the lowercased input.
pub const CRISIS_KEYWORDS: [&str; 12] = [
    "suicide",
    "self-harm",
    "homicide",
    "abuse",
    "abused",
    "kill myself",
    "kill",
    "want to die",
    "end my life",
    "hurt myself",
    "hurt someone",
    "suicidal",
];

/// Scan `text` for crisis terms. Returns every matched term; an empty
/// result means the text is clear for generation.
pub fn screen(text: &str) -> Vec<&'static str> {
    let lowered = text.to_lowercase();
    CRISIS_KEYWORDS
        .iter()
        .copied()
        .filter(|term| lowered.contains(term))
        .collect()
}

/// An emergency contact surfaced in the crisis alert panel.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct EmergencyResource {
    pub name: &'static str,
    pub contact: &'static str,
}

/// Emergency resources listed whenever the screen matches.
pub const EMERGENCY_RESOURCES: [EmergencyResource; 3] = [
    EmergencyResource {
        name: "988 Suicide & Crisis Lifeline",
        contact: "Call or text 988 (24/7)",
    },
    EmergencyResource {
        name: "Crisis Text Line",
        contact: "Text HOME to 741741",
    },
    EmergencyResource {
        name: "International Association for Suicide Prevention",
        contact: "https://www.iasp.info/resources/Crisis_Centres/",
    },
];

/// Immediate clinical protocol steps shown in the alert panel.
pub const PROTOCOL_STEPS: [&str; 3] = [
    "Assess immediate safety risk using direct questioning",
    "Implement safety planning if risk is present",
    "Do not leave patient alone if active suicidal/homicidal ideation exists",
];

/// Expanded clinician guidance behind the protocol-details expander.
pub const CLINICIAN_GUIDANCE: &str = "\
**Standard Crisis Response Protocol:**

1. **Direct Assessment**
   \"Are you having thoughts of ending your life?\"
   \"Do you have a plan?\"
   \"Have you ever attempted before?\"

2. **Safety Planning**
   - Remove access to means
   - Identify support contacts
   - Create step-by-step coping strategies

3. **Documentation**
   - Risk assessment findings
   - Actions taken
   - Follow-up plan";
