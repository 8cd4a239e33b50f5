use axum::Json;
use serde::Serialize;

/// A canned case description behind a quick-fill button on the form.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ExampleCase {
    pub label: &'static str,
    pub text: &'static str,
}

pub const EXAMPLE_CASES: [ExampleCase; 3] = [
    ExampleCase {
        label: "Depression",
        text: "45yo male with treatment-resistant depression, expresses hopelessness \
               about ever improving",
    },
    ExampleCase {
        label: "Anxiety",
        text: "College student experiencing panic attacks before exams despite knowing \
               the material well",
    },
    ExampleCase {
        label: "Relationship",
        text: "Couple stuck in pursue-withdraw pattern, escalating arguments about \
               household responsibilities",
    },
];

pub async fn list_examples() -> Json<Vec<ExampleCase>> {
    Json(EXAMPLE_CASES.to_vec())
}
