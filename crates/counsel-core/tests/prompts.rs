use counsel_core::models::approach::Approach;
use counsel_core::prompts::build_prompt;
use counsel_core::references::{reference_for, reference_for_label, DEFAULT_REFERENCE};

const CASE: &str = "28yo patient with social anxiety avoids all group situations";

#[test]
fn every_approach_interpolates_the_case_text() {
    for approach in Approach::ALL {
        let prompt = build_prompt(approach, CASE);
        assert!(
            prompt.contains(CASE),
            "{approach} prompt missing case text: {prompt}"
        );
    }
}

#[test]
fn cbt_prompt_targets_cognitive_distortions() {
    let prompt = build_prompt(Approach::Cbt, CASE);
    assert!(prompt.starts_with("As a CBT therapist"));
    assert!(prompt.contains("cognitive distortions"));
    assert!(prompt.contains("behavioral experiments"));
}

#[test]
fn solution_focused_prompt_asks_for_scaling_questions() {
    let prompt = build_prompt(Approach::SolutionFocused, CASE);
    assert!(prompt.contains("solution-focused therapy"));
    assert!(prompt.contains("scaling questions"));
}

#[test]
fn approach_serde_identifiers_are_stable() {
    let json = serde_json::to_string(&Approach::SolutionFocused).unwrap();
    assert_eq!(json, "\"solution_focused\"");
    let back: Approach = serde_json::from_str(&json).unwrap();
    assert_eq!(back, Approach::SolutionFocused);
}

#[test]
fn approach_parses_from_id_and_label() {
    assert_eq!("cbt".parse::<Approach>().unwrap(), Approach::Cbt);
    assert_eq!(
        "Solution-Focused".parse::<Approach>().unwrap(),
        Approach::SolutionFocused
    );
    assert!("gestalt".parse::<Approach>().is_err());
}

#[test]
fn each_approach_has_a_citation_with_guide_link() {
    for approach in Approach::ALL {
        let reference = reference_for(approach);
        assert!(!reference.text.is_empty());
        assert!(reference.guide.starts_with("https://"));
    }
}

#[test]
fn reference_caption_renders_as_markdown_link() {
    let caption = reference_for(Approach::Humanistic).markdown();
    assert!(caption.contains("Rogers, C. (1951)"));
    assert!(caption.contains("| [Clinical Guidelines](https://"));
}

#[test]
fn unknown_label_falls_back_to_default_reference() {
    assert_eq!(
        *reference_for_label("CRISIS INTERVENTION"),
        DEFAULT_REFERENCE
    );
    assert_eq!(
        *reference_for_label("Psychodynamic"),
        *reference_for(Approach::Psychodynamic)
    );
}
