//! Evidence-based literature references shown alongside generated
//! suggestions and included in exported reports.

use serde::Serialize;

use crate::models::approach::Approach;

/// A citation paired with a clinical guideline link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ApproachReference {
    pub text: &'static str,
    pub guide: &'static str,
}

impl ApproachReference {
    /// The caption line rendered under a response card.
    pub fn markdown(&self) -> String {
        format!("{} | [Clinical Guidelines]({})", self.text, self.guide)
    }
}

/// Fallback reference for labels that do not map to an approach, such as
/// crisis-halted session records.
pub const DEFAULT_REFERENCE: ApproachReference = ApproachReference {
    text: "Evidence-Based Practice in Psychology",
    guide: "https://www.apa.org/practice/guidelines/evidence-based",
};

/// The reference for a therapeutic approach.
pub fn reference_for(approach: Approach) -> &'static ApproachReference {
    match approach {
        Approach::Cbt => &ApproachReference {
            text: "Beck, J. S. (2011). Cognitive Behavior Therapy: Basics and Beyond",
            guide: "https://www.apa.org/pubs/books/cognitive-behavior-therapy",
        },
        Approach::Psychodynamic => &ApproachReference {
            text: "McWilliams, N. (2020). Psychoanalytic Diagnosis",
            guide: "https://www.guilford.com/books/Psychoanalytic-Diagnosis/McWilliams/9781462543694",
        },
        Approach::Humanistic => &ApproachReference {
            text: "Rogers, C. (1951). Client-Centered Therapy",
            guide: "https://www.nationalcounsellingsociety.org/about-therapy/types/humanistic",
        },
        Approach::SolutionFocused => &ApproachReference {
            text: "De Shazer, S. (1988). Clues: Investigating Solutions in Brief Therapy",
            guide: "https://www.solutionfocused.net/what-is-sfbt/",
        },
    }
}

/// Look up a reference by display label, falling back to
/// [`DEFAULT_REFERENCE`] for anything that is not one of the four
/// approaches (e.g. `CRISIS INTERVENTION`).
pub fn reference_for_label(label: &str) -> &'static ApproachReference {
    label
        .parse::<Approach>()
        .map(reference_for)
        .unwrap_or(&DEFAULT_REFERENCE)
}
