use counsel_core::models::approach::Approach;
use counsel_core::models::session::SessionRecord;
use counsel_export::render::{render_report, render_with_template, suggested_filename};

fn sample_record() -> SessionRecord {
    SessionRecord::generated(
        Approach::Cbt,
        "Patient avoids group situations",
        "Try graded exposure with a thought record.".to_string(),
    )
}

#[test]
fn default_template_reproduces_the_download_payload() {
    let report = render_report(&sample_record()).unwrap();
    assert!(report.starts_with("Approach: CBT\n\n"));
    assert!(report.contains("Try graded exposure with a thought record."));
    assert!(report.contains("Reference: Beck, J. S. (2011)"));
}

#[test]
fn crisis_record_falls_back_to_the_default_reference() {
    let record = SessionRecord::crisis("patient mentioned suicide");
    let report = render_report(&record).unwrap();
    assert!(report.starts_with("Approach: CRISIS INTERVENTION\n\n"));
    assert!(report.contains("Session halted - emergency protocols activated"));
    assert!(report.contains("Evidence-Based Practice in Psychology"));
}

#[test]
fn custom_template_sees_the_same_context() {
    let report = render_with_template(
        "oneline",
        "{{ approach }}: {{ case_summary }}",
        &sample_record(),
    )
    .unwrap();
    assert_eq!(report, "CBT: Patient avoids group situations");
}

#[test]
fn malformed_template_is_a_parse_error() {
    let err = render_with_template("bad", "{{ unclosed", &sample_record());
    assert!(err.is_err());
}

#[test]
fn filenames_are_sanitized() {
    assert_eq!(
        suggested_filename("Solution-Focused"),
        "clinical_suggestions_Solution-Focused.txt"
    );
    assert_eq!(
        suggested_filename("CRISIS INTERVENTION"),
        "clinical_suggestions_CRISIS_INTERVENTION.txt"
    );
}
