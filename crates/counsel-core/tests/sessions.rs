use counsel_core::models::approach::Approach;
use counsel_core::models::session::{
    summarize, SessionLog, SessionOutcome, SessionRecord, CRISIS_APPROACH_LABEL,
};

#[test]
fn short_case_text_is_kept_verbatim() {
    let record = SessionRecord::generated(Approach::Cbt, "Brief case", "Do X".to_string());
    assert_eq!(record.case_summary, "Brief case");
    assert_eq!(record.approach, "CBT");
    assert_eq!(record.outcome, SessionOutcome::Generated);
}

#[test]
fn long_case_text_is_truncated_with_ellipsis() {
    let long = "a".repeat(150);
    let record = SessionRecord::generated(Approach::Humanistic, &long, String::new());
    assert_eq!(record.case_summary.chars().count(), 103);
    assert!(record.case_summary.ends_with("..."));
}

#[test]
fn summarize_respects_char_boundaries() {
    // 10 four-byte scalar values; a byte-indexed slice at 5 would panic.
    let emoji = "🧠".repeat(10);
    let summary = summarize(&emoji, 5);
    assert_eq!(summary, format!("{}...", "🧠".repeat(5)));
}

#[test]
fn crisis_record_carries_the_halt_notice() {
    let long = "kill myself ".repeat(20);
    let record = SessionRecord::crisis(&long);
    assert_eq!(record.approach, CRISIS_APPROACH_LABEL);
    assert!(record.case_summary.starts_with("CRISIS DETECTED - "));
    assert!(record.case_summary.ends_with("..."));
    assert_eq!(
        record.recommendations,
        "Session halted - emergency protocols activated"
    );
    assert_eq!(record.outcome, SessionOutcome::CrisisHalted);
}

#[test]
fn recent_returns_newest_first() {
    let mut log = SessionLog::new();
    for i in 0..8 {
        log.append(SessionRecord::generated(
            Approach::Cbt,
            &format!("case {i}"),
            String::new(),
        ));
    }
    let recent = log.recent(5);
    assert_eq!(recent.len(), 5);
    assert_eq!(recent[0].case_summary, "case 7");
    assert_eq!(recent[4].case_summary, "case 3");
}

#[test]
fn records_stay_addressable_by_id() {
    let mut log = SessionLog::new();
    let record = SessionRecord::generated(Approach::Psychodynamic, "case", "out".to_string());
    let id = record.id;
    log.append(record);
    assert_eq!(log.get(id).unwrap().recommendations, "out");
    assert!(log.get(uuid::Uuid::new_v4()).is_none());
}

#[test]
fn session_record_round_trips_through_json() {
    let record = SessionRecord::generated(Approach::Cbt, "case", "out".to_string());
    let json = serde_json::to_string(&record).unwrap();
    let back: SessionRecord = serde_json::from_str(&json).unwrap();
    assert_eq!(back.id, record.id);
    assert_eq!(back.outcome, SessionOutcome::Generated);
}
